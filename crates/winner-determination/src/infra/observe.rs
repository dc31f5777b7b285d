//! This module implements the observability for winner determination. It
//! exposes functions which represent events that are meaningful to the system.
//! These functions are called when the corresponding events occur and log
//! them.

use {
    crate::domain::{
        Auction,
        ConflictGraph,
        Partition,
        Solution,
        SolverUnavailable,
        bid,
        solution::{Validated, ValidationFailure},
    },
    std::path::Path,
};

/// Setup the observability.
pub fn init(log: &str, stderr_threshold: Option<tracing::Level>, use_json_logs: bool) {
    let config = ::observe::Config::new(log, stderr_threshold, use_json_logs);
    ::observe::tracing::initialize(&config);
}

/// Observe a loaded auction.
pub fn auction(path: &Path, auction: &Auction) {
    tracing::info!(
        ?path,
        goods = auction.goods(),
        bids = auction.len(),
        total_value = auction.total_value(),
        "loaded auction"
    );
}

/// Observe the conflict graph.
pub fn graph_built(graph: &ConflictGraph) {
    tracing::debug!(
        vertices = graph.vertices().len(),
        edges = graph.edges().len(),
        "built conflict graph"
    );
}

/// Observe that kernelization was switched off.
pub fn kernel_disabled() {
    tracing::info!("kernelization disabled, every bid is ambiguous");
}

/// Observe an LP value that is none of 0, 1/2 or 1.
pub fn numerical_ambiguity(bid: bid::Id, value: f64) {
    tracing::warn!(%bid, value, "LP value is not half-integral, keeping bid ambiguous");
}

/// Observe a single relaxation round.
pub fn kernel_round(round: usize, resolved: usize, partition: &Partition) {
    tracing::trace!(
        round,
        resolved,
        remaining = partition.ambiguous().len(),
        "kernelization round"
    );
}

/// Observe the kernelization result.
pub fn kernelized(partition: &Partition) {
    tracing::info!(
        winners = partition.excluded().len(),
        losers = partition.included().len(),
        ambiguous = partition.ambiguous().len(),
        excluded_value = partition.excluded_value(),
        searchable_value = partition.ambiguous_value(),
        numerical_ambiguities = partition.numerical().len(),
        rounds = partition.rounds(),
        "kernelized"
    );
}

/// Observe a problem about to be sent to a cover solver.
pub fn solver_request(solver: &str, problem: &mwvc_dto::Problem) {
    tracing::debug!(
        %solver,
        vertices = problem.vertices.len(),
        edges = problem.edges.len(),
        "solving vertex cover"
    );
    tracing::trace!(%solver, %problem, "vertex cover problem");
}

/// Observe the answer of a cover solver.
pub fn solver_response(solver: &str, response: &Result<mwvc_dto::Cover, SolverUnavailable>) {
    match response {
        Ok(cover) => tracing::debug!(
            %solver,
            weight = cover.weight,
            members = cover.members.len(),
            "received vertex cover"
        ),
        Err(err) => tracing::warn!(%solver, ?err, "vertex cover solver unavailable"),
    }
}

/// Observe that the reported value may be below the optimum.
pub fn heuristic_solution(solver: &str) {
    tracing::warn!(%solver, "cover solver is a heuristic, the solution is not proven optimal");
}

/// Observe the reconstructed solution.
pub fn solved(solution: &Solution) {
    tracing::info!(
        value = solution.value(),
        winners = solution.winners().len(),
        optimality = %solution.optimality(),
        "determined winners"
    );
}

/// Observe a solution that passed validation.
pub fn validated(validated: &Validated) {
    tracing::debug!(?validated, "solution is valid");
}

/// Observe a solution that failed validation.
pub fn validation_failed(err: &ValidationFailure) {
    tracing::error!(?err, "solution failed validation");
}

/// Observe the report being written.
pub fn report_written(path: Option<&Path>) {
    match path {
        Some(path) => tracing::info!(?path, "wrote report"),
        None => tracing::debug!("wrote report to stdout"),
    }
}

/// Observe a finished benchmark run.
pub fn benchmarked(name: &str, value: u64, elapsed: std::time::Duration) {
    tracing::info!(name, value, ?elapsed, "benchmarked");
}

/// Observe two exact approaches disagreeing on the optimum.
pub fn benchmark_disagreement(expected: u64, actual: u64, name: &str) {
    tracing::error!(name, expected, actual, "exact approaches disagree on the optimum");
}
