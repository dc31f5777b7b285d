//! Shrinks the conflict graph to the bids kernelization left ambiguous and
//! translates between bid ids and the contiguous vertex ids `1..=k` that cover
//! engines expect.

use {
    super::{bid, graph::ConflictGraph},
    std::collections::BTreeSet,
    thiserror::Error,
};

/// The induced subgraph on the ambiguous bids.
///
/// Vertex `i` on the wire is the `i`-th ambiguous bid in ascending id order,
/// so the mapping is monotonic in both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduced {
    graph: ConflictGraph,
}

/// A cover of the reduced graph, in bid ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverResult {
    pub weight: u64,
    /// Ascending.
    pub members: Vec<bid::Id>,
}

impl Reduced {
    pub fn new(graph: &ConflictGraph, ambiguous: &BTreeSet<bid::Id>) -> Self {
        Self {
            graph: graph.induced(ambiguous),
        }
    }

    pub fn graph(&self) -> &ConflictGraph {
        &self.graph
    }

    /// Wire vertex id of a bid.
    pub fn vertex(&self, id: bid::Id) -> Option<u32> {
        let position = self.graph.position(id)?;
        u32::try_from(position + 1).ok()
    }

    /// Bid behind a wire vertex id.
    pub fn bid(&self, vertex: u32) -> Option<bid::Id> {
        let position = usize::try_from(vertex).ok()?.checked_sub(1)?;
        self.graph.vertices().get(position).map(|vertex| vertex.id)
    }

    pub fn to_problem(&self) -> mwvc_dto::Problem {
        let vertices = self
            .graph
            .vertices()
            .iter()
            .zip(1..)
            .map(|(vertex, id)| mwvc_dto::Vertex {
                id,
                weight: vertex.weight,
            })
            .collect();
        let edges = self
            .graph
            .edges()
            .iter()
            .filter_map(|edge| {
                let (u, v) = edge.ends();
                Some(mwvc_dto::Edge(self.vertex(u)?, self.vertex(v)?))
            })
            .collect();
        mwvc_dto::Problem { vertices, edges }
    }

    /// Maps an engine's cover back onto bid ids. Members must be strictly
    /// ascending wire ids within `1..=k`.
    pub fn translate(&self, cover: &mwvc_dto::Cover) -> Result<CoverResult, InvalidCover> {
        if !cover.is_ascending() {
            return Err(InvalidCover::Unordered);
        }
        let members = cover
            .members
            .iter()
            .map(|&vertex| {
                self.bid(vertex).ok_or(InvalidCover::OutOfRange {
                    vertex,
                    vertices: self.graph.vertices().len(),
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(CoverResult {
            weight: cover.weight,
            members,
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidCover {
    #[error("cover members are not strictly ascending")]
    Unordered,
    #[error("cover member {vertex} is outside of 1..={vertices}")]
    OutOfRange { vertex: u32, vertices: usize },
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::domain::{
            auction::Auction,
            bid::{Bid, Good},
        },
    };

    /// Path 1 - 2 - 3 - 4 through shared goods.
    fn path() -> ConflictGraph {
        let bids = vec![
            Bid::new(bid::Id(1), 5, [Good(1)]),
            Bid::new(bid::Id(2), 7, [Good(1), Good(2)]),
            Bid::new(bid::Id(3), 9, [Good(2), Good(3)]),
            Bid::new(bid::Id(4), 11, [Good(3)]),
        ];
        ConflictGraph::build(&Auction::new(3, bids).unwrap())
    }

    #[test]
    fn renumbers_contiguously() {
        let reduced = Reduced::new(&path(), &BTreeSet::from([bid::Id(2), bid::Id(3), bid::Id(4)]));
        assert_eq!(
            reduced.to_problem(),
            mwvc_dto::Problem {
                vertices: vec![
                    mwvc_dto::Vertex { id: 1, weight: 7 },
                    mwvc_dto::Vertex { id: 2, weight: 9 },
                    mwvc_dto::Vertex { id: 3, weight: 11 },
                ],
                edges: vec![mwvc_dto::Edge(1, 2), mwvc_dto::Edge(2, 3)],
            }
        );
        assert_eq!(reduced.vertex(bid::Id(1)), None);
        assert_eq!(reduced.bid(0), None);
        assert_eq!(reduced.bid(3), Some(bid::Id(4)));
    }

    #[test]
    fn translates_cover_to_bid_ids() {
        let reduced = Reduced::new(&path(), &BTreeSet::from([bid::Id(2), bid::Id(3), bid::Id(4)]));
        let cover = mwvc_dto::Cover {
            weight: 9,
            members: vec![2],
        };
        assert_eq!(
            reduced.translate(&cover).unwrap(),
            CoverResult {
                weight: 9,
                members: vec![bid::Id(3)],
            }
        );
    }

    #[test]
    fn rejects_malformed_covers() {
        let reduced = Reduced::new(&path(), &BTreeSet::from([bid::Id(1), bid::Id(2)]));
        let unordered = mwvc_dto::Cover {
            weight: 12,
            members: vec![2, 1],
        };
        assert_eq!(reduced.translate(&unordered), Err(InvalidCover::Unordered));
        let outside = mwvc_dto::Cover {
            weight: 7,
            members: vec![3],
        };
        assert_eq!(
            reduced.translate(&outside),
            Err(InvalidCover::OutOfRange {
                vertex: 3,
                vertices: 2
            })
        );
    }
}
