use {
    super::reduce::{CoverResult, Reduced},
    crate::infra::observe,
    ::observe::future::Measure,
    std::time::Duration,
    thiserror::Error,
};

/// Whether a reported solution is known to be optimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Optimality {
    #[display("proven")]
    Proven,
    /// The cover engine is a heuristic; the value is a lower bound.
    #[display("heuristic")]
    Heuristic,
}

impl Optimality {
    /// Optimality of a solution combining two parts of the given optimality.
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::Proven, Self::Proven) => Self::Proven,
            _ => Self::Heuristic,
        }
    }
}

/// Solves minimum weighted vertex cover problems.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CoverSolver: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> String;

    /// Whether the covers returned are minimum or merely feasible.
    fn optimality(&self) -> Optimality;

    async fn solve(&self, problem: &mwvc_dto::Problem) -> Result<mwvc_dto::Cover, SolverUnavailable>;
}

/// An external LP or cover engine did not deliver a usable answer. Fatal for
/// the run.
#[derive(Debug, Error)]
pub enum SolverUnavailable {
    #[error("{solver} did not answer within {timeout:?}")]
    Timeout { solver: String, timeout: Duration },
    #[error("{solver} failed: {reason}")]
    Failed { solver: String, reason: String },
    #[error("{solver} returned malformed output: {reason}")]
    Malformed { solver: String, reason: String },
}

/// Submits the reduced graph to `solver` and maps the answer back onto bid
/// ids.
pub async fn cover(
    solver: &dyn CoverSolver,
    reduced: &Reduced,
) -> Result<CoverResult, SolverUnavailable> {
    let name = solver.name();
    let problem = reduced.to_problem();
    observe::solver_request(&name, &problem);
    let response = solver.solve(&problem).measure("cover_solver").await;
    observe::solver_response(&name, &response);
    reduced
        .translate(&response?)
        .map_err(|err| SolverUnavailable::Malformed {
            solver: name,
            reason: err.to_string(),
        })
}
