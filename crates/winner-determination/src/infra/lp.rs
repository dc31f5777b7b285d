//! The vertex cover LP relaxation, solved in process.

use {
    super::blocking,
    crate::domain::{ConflictGraph, LpOracle, SolverUnavailable},
    good_lp::{
        Expression,
        Solution,
        SolverModel,
        Variable,
        constraint,
        default_solver,
        variable,
        variables,
    },
    std::time::Duration,
};

const NAME: &str = "lp";

/// Relaxes the conflict graph's vertex cover program with `good_lp`.
#[derive(Debug, Clone)]
pub struct GoodLp {
    timeout: Duration,
}

impl GoodLp {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait::async_trait]
impl LpOracle for GoodLp {
    async fn relax(&self, graph: &ConflictGraph) -> Result<Vec<f64>, SolverUnavailable> {
        if graph.is_empty() {
            return Ok(Vec::new());
        }
        let model = Model::new(graph);
        blocking::solve(NAME, self.timeout, move || model.solve()).await
    }
}

/// The relaxation with vertices and edges by position.
struct Model {
    weights: Vec<f64>,
    edges: Vec<(usize, usize)>,
}

impl Model {
    fn new(graph: &ConflictGraph) -> Self {
        Self {
            // Bid values far beyond 2^53 lose precision here, which only
            // affects how well the relaxation separates near-ties.
            weights: graph
                .vertices()
                .iter()
                .map(|vertex| vertex.weight as f64)
                .collect(),
            edges: graph
                .edges()
                .iter()
                .filter_map(|edge| {
                    let (u, v) = edge.ends();
                    Some((graph.position(u)?, graph.position(v)?))
                })
                .collect(),
        }
    }

    fn solve(self) -> Result<Vec<f64>, good_lp::ResolutionError> {
        let mut vars = variables!();
        let x: Vec<Variable> = self
            .weights
            .iter()
            .map(|_| vars.add(variable().min(0.0).max(1.0)))
            .collect();
        let mut objective = Expression::with_capacity(x.len());
        for (&x, &weight) in x.iter().zip(&self.weights) {
            objective.add_mul(weight, x);
        }

        let mut problem = vars.minimise(objective).using(default_solver);
        for &(u, v) in &self.edges {
            problem = problem.with(constraint!(x[u] + x[v] >= 1));
        }
        let solution = problem.solve()?;
        Ok(x.iter().map(|&x| solution.value(x)).collect())
    }
}
