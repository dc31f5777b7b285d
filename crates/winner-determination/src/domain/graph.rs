//! The conflict graph: one vertex per bid and an edge between every two bids
//! asking for a common good. Any independent set is a feasible allocation.

use {
    super::{auction::Auction, bid},
    itertools::Itertools,
    std::collections::BTreeSet,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex {
    pub id: bid::Id,
    pub weight: u64,
}

/// An undirected edge, stored with the lower bid id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(bid::Id, bid::Id);

impl Edge {
    pub fn new(a: bid::Id, b: bid::Id) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }

    pub fn ends(&self) -> (bid::Id, bid::Id) {
        (self.0, self.1)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictGraph {
    /// Ascending by id.
    vertices: Vec<Vertex>,
    /// Ascending by `(lower, higher)` end.
    edges: Vec<Edge>,
}

impl ConflictGraph {
    /// Tests every unordered pair of bids for a shared good.
    pub fn build(auction: &Auction) -> Self {
        let vertices = auction
            .bids()
            .iter()
            .map(|bid| Vertex {
                id: bid.id(),
                weight: bid.value(),
            })
            .collect();
        // Bids are sorted by id, so pairs come out in ascending edge order.
        let edges = auction
            .bids()
            .iter()
            .tuple_combinations()
            .filter(|(a, b)| a.conflicts_with(b))
            .map(|(a, b)| Edge(a.id(), b.id()))
            .collect();
        Self { vertices, edges }
    }

    /// The subgraph spanned by `keep`: its vertices and every edge with both
    /// ends in it.
    pub fn induced(&self, keep: &BTreeSet<bid::Id>) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .filter(|vertex| keep.contains(&vertex.id))
                .copied()
                .collect(),
            edges: self
                .edges
                .iter()
                .filter(|edge| keep.contains(&edge.0) && keep.contains(&edge.1))
                .copied()
                .collect(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Position of `id` in [`Self::vertices`].
    pub fn position(&self, id: bid::Id) -> Option<usize> {
        self.vertices
            .binary_search_by_key(&id, |vertex| vertex.id)
            .ok()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
