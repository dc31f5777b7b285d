//! Vertex cover solver engines.

use {super::config, crate::domain::CoverSolver};

pub mod ilp;
pub mod process;

pub use {ilp::Ilp, process::Process};

/// Instantiates the configured solver.
pub fn build(config: &config::Solver) -> Box<dyn CoverSolver> {
    match config {
        config::Solver::Ilp { timeout } => Box::new(Ilp::new(*timeout)),
        config::Solver::Process {
            command,
            args,
            exact,
            timeout,
        } => Box::new(Process::new(command.clone(), args.clone(), *exact, *timeout)),
    }
}
