use {
    crate::domain::kernel,
    std::{path::PathBuf, time::Duration},
};

pub mod file;

/// Validated configuration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub kernel: kernel::Config,
    /// Bound on a single LP relaxation.
    pub lp_timeout: Duration,
    pub solver: Solver,
}

/// The vertex cover solver to use for the ambiguous bids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solver {
    /// Binary vertex cover model solved in process.
    Ilp { timeout: Duration },
    /// External vertex cover binary.
    Process {
        command: PathBuf,
        /// `{problem}` is replaced with the path of the problem file. The path
        /// is appended when no argument mentions it.
        args: Vec<String>,
        /// Whether the binary proves optimality.
        exact: bool,
        timeout: Duration,
    },
}
