pub mod auction;
pub mod bid;
pub mod graph;
pub mod kernel;
pub mod pipeline;
pub mod reduce;
pub mod solution;
pub mod solver;

pub use {
    auction::Auction,
    bid::Bid,
    graph::ConflictGraph,
    kernel::{LpOracle, Partition},
    pipeline::{Outcome, Pipeline},
    solution::Solution,
    solver::{CoverSolver, Optimality, SolverUnavailable},
};
