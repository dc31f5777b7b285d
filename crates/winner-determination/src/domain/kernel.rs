//! LP based kernelization of the conflict graph.
//!
//! The vertex cover LP relaxation `min Σ w(v)·x(v)` subject to
//! `x(u) + x(v) >= 1` for every edge and `0 <= x <= 1` has a half-integral
//! optimum. Some minimum weight cover contains every vertex at 1 and avoids
//! every vertex at 0 (Nemhauser-Trotter), so only the vertices at 1/2 are left
//! for the exact search.

use {
    super::{
        bid,
        graph::{ConflictGraph, Vertex},
        solver::SolverUnavailable,
    },
    crate::infra::observe,
    ::observe::future::Measure,
    std::{borrow::Cow, collections::BTreeSet, num::NonZeroUsize},
};

/// Solves the vertex cover LP relaxation.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LpOracle: Send + Sync {
    /// Returns `x(v)` for every vertex, in the order of `graph.vertices()`.
    async fn relax(&self, graph: &ConflictGraph) -> Result<Vec<f64>, SolverUnavailable>;
}

/// How far an LP value may stray from 0, 1/2 or 1 and still be treated as
/// that value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Values must stay distinguishable, so the tolerance has to be below 1/4.
    pub fn new(epsilon: f64) -> Option<Self> {
        (epsilon > 0.0 && epsilon < 0.25).then_some(Self(epsilon))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    fn classify(self, x: f64) -> Option<Class> {
        let near = |target: f64| (x - target).abs() <= self.0;
        if near(0.0) {
            Some(Class::Excluded)
        } else if near(1.0) {
            Some(Class::Included)
        } else if near(0.5) {
            Some(Class::Ambiguous)
        } else {
            None
        }
    }
}

// Constructed values are never NaN.
impl Eq for Tolerance {}

impl Default for Tolerance {
    fn default() -> Self {
        Self(1e-6)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Without kernelization every bid goes to the cover solver.
    pub enabled: bool,
    pub tolerance: Tolerance,
    /// Maximum number of relaxations. Every round after the first relaxes the
    /// subgraph induced by the bids still ambiguous.
    pub rounds: NonZeroUsize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            tolerance: Tolerance::default(),
            rounds: NonZeroUsize::MIN,
        }
    }
}

/// Where kernelization placed a bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    /// LP value 0: outside of the cover, so the bid wins.
    Excluded,
    /// LP value 1: inside the cover, so the bid loses.
    Included,
    /// Left to the exact search.
    Ambiguous,
}

/// An LP value that was none of 0, 1/2 or 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericalAmbiguity {
    pub bid: bid::Id,
    pub value: f64,
}

/// Every bid in exactly one of three classes. Bids only ever move out of the
/// ambiguous class, and the class values always add up to the total.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    excluded: BTreeSet<bid::Id>,
    included: BTreeSet<bid::Id>,
    ambiguous: BTreeSet<bid::Id>,
    excluded_value: u64,
    included_value: u64,
    ambiguous_value: u64,
    numerical: Vec<NumericalAmbiguity>,
    rounds: usize,
}

impl Partition {
    /// Every bid ambiguous, as if kernelization never ran.
    pub fn unresolved(graph: &ConflictGraph) -> Self {
        Self {
            excluded: BTreeSet::new(),
            included: BTreeSet::new(),
            ambiguous: graph.vertices().iter().map(|vertex| vertex.id).collect(),
            excluded_value: 0,
            included_value: 0,
            ambiguous_value: graph.vertices().iter().map(|vertex| vertex.weight).sum(),
            numerical: Vec::new(),
            rounds: 0,
        }
    }

    /// Moves an ambiguous vertex into `class`. Returns whether it moved.
    fn resolve(&mut self, vertex: &Vertex, class: Class) -> bool {
        let (set, value) = match class {
            Class::Excluded => (&mut self.excluded, &mut self.excluded_value),
            Class::Included => (&mut self.included, &mut self.included_value),
            Class::Ambiguous => return false,
        };
        if !self.ambiguous.remove(&vertex.id) {
            return false;
        }
        set.insert(vertex.id);
        *value += vertex.weight;
        self.ambiguous_value -= vertex.weight;
        true
    }

    pub fn class(&self, id: bid::Id) -> Option<Class> {
        if self.excluded.contains(&id) {
            Some(Class::Excluded)
        } else if self.included.contains(&id) {
            Some(Class::Included)
        } else if self.ambiguous.contains(&id) {
            Some(Class::Ambiguous)
        } else {
            None
        }
    }

    pub fn excluded(&self) -> &BTreeSet<bid::Id> {
        &self.excluded
    }

    pub fn included(&self) -> &BTreeSet<bid::Id> {
        &self.included
    }

    pub fn ambiguous(&self) -> &BTreeSet<bid::Id> {
        &self.ambiguous
    }

    /// Value of the bids fixed as winners.
    pub fn excluded_value(&self) -> u64 {
        self.excluded_value
    }

    /// Value of the bids fixed as losers.
    pub fn included_value(&self) -> u64 {
        self.included_value
    }

    /// Value still open to the exact search.
    pub fn ambiguous_value(&self) -> u64 {
        self.ambiguous_value
    }

    pub fn total_value(&self) -> u64 {
        self.excluded_value + self.included_value + self.ambiguous_value
    }

    pub fn numerical(&self) -> &[NumericalAmbiguity] {
        &self.numerical
    }

    /// Number of relaxations that went into this partition.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn is_resolved(&self) -> bool {
        self.ambiguous.is_empty()
    }
}

pub struct Kernelizer<'a> {
    oracle: &'a dyn LpOracle,
    config: Config,
}

impl<'a> Kernelizer<'a> {
    pub fn new(oracle: &'a dyn LpOracle, config: Config) -> Self {
        Self { oracle, config }
    }

    pub async fn kernelize(&self, graph: &ConflictGraph) -> Result<Partition, SolverUnavailable> {
        let mut partition = Partition::unresolved(graph);
        if !self.config.enabled {
            observe::kernel_disabled();
            return Ok(partition);
        }

        for round in 0..self.config.rounds.get() {
            if partition.is_resolved() {
                break;
            }
            let subgraph = match round {
                0 => Cow::Borrowed(graph),
                _ => Cow::Owned(graph.induced(&partition.ambiguous)),
            };
            let values = self.relax(&subgraph).await?;
            partition.rounds += 1;

            let mut resolved = 0;
            for (vertex, &x) in subgraph.vertices().iter().zip(&values) {
                match self.config.tolerance.classify(x) {
                    Some(class) => {
                        if partition.resolve(vertex, class) {
                            resolved += 1;
                        }
                    }
                    None => {
                        observe::numerical_ambiguity(vertex.id, x);
                        partition.numerical.push(NumericalAmbiguity {
                            bid: vertex.id,
                            value: x,
                        });
                    }
                }
            }
            observe::kernel_round(round, resolved, &partition);
            if resolved == 0 {
                break;
            }
        }

        Ok(partition)
    }

    /// Queries the oracle and checks that its answer is a feasible LP solution
    /// for `graph`.
    async fn relax(&self, graph: &ConflictGraph) -> Result<Vec<f64>, SolverUnavailable> {
        let values = self.oracle.relax(graph).measure("lp_relaxation").await?;
        let malformed = |reason: String| SolverUnavailable::Malformed {
            solver: "lp".to_owned(),
            reason,
        };
        if values.len() != graph.vertices().len() {
            return Err(malformed(format!(
                "{} values for {} vertices",
                values.len(),
                graph.vertices().len()
            )));
        }
        // A vertex at 0 is only safe to declare a winner if every neighbour is
        // at 1, which feasibility guarantees.
        let slack = self.config.tolerance.get();
        for edge in graph.edges() {
            let (u, v) = edge.ends();
            let (Some(u), Some(v)) = (graph.position(u), graph.position(v)) else {
                continue;
            };
            if values[u] + values[v] < 1.0 - 2.0 * slack {
                return Err(malformed(format!("edge {edge:?} is not covered")));
            }
        }
        Ok(values)
    }
}
