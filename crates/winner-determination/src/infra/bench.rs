//! Compares the kernelized pipeline against solving the whole conflict graph
//! and against a direct set packing model.

use {
    super::{config::Config, lp::GoodLp, mwvc, observe, packing},
    crate::domain::{Auction, Optimality, Pipeline, SolverUnavailable},
    std::{
        fmt,
        time::{Duration, Instant},
    },
};

#[derive(Debug)]
pub struct Report {
    pub entries: Vec<Entry>,
    /// LP variables fixed at 0 and at 1 by kernelization.
    pub fixed: (usize, usize),
    pub ambiguous: usize,
}

#[derive(Debug)]
pub struct Entry {
    pub name: &'static str,
    pub value: u64,
    pub elapsed: Duration,
    pub optimality: Optimality,
}

pub async fn run(auction: &Auction, config: &Config) -> Result<Report, SolverUnavailable> {
    let lp = GoodLp::new(config.lp_timeout);
    let solver = mwvc::build(&config.solver);
    let packing_timeout = match &config.solver {
        super::config::Solver::Ilp { timeout } | super::config::Solver::Process { timeout, .. } => {
            *timeout
        }
    };

    let mut entries = Vec::new();
    let mut kernel = config.kernel;
    kernel.enabled = true;
    let pipeline = Pipeline {
        lp: &lp,
        solver: solver.as_ref(),
        kernel,
    };
    let start = Instant::now();
    let kernelized = pipeline.solve(auction).await?;
    entries.push(entry(
        "kernelized",
        kernelized.solution.value(),
        start,
        kernelized.solution.optimality(),
    ));

    let pipeline = Pipeline {
        kernel: crate::domain::kernel::Config {
            enabled: false,
            ..kernel
        },
        ..pipeline
    };
    let start = Instant::now();
    let whole = pipeline.solve(auction).await?;
    entries.push(entry(
        "whole graph",
        whole.solution.value(),
        start,
        whole.solution.optimality(),
    ));

    let start = Instant::now();
    let value = packing::solve(auction, packing_timeout).await?;
    entries.push(entry("set packing", value, start, Optimality::Proven));

    for entry in &entries {
        if entry.optimality == Optimality::Proven && entry.value != value {
            observe::benchmark_disagreement(value, entry.value, entry.name);
        }
    }

    let partition = &kernelized.partition;
    Ok(Report {
        entries,
        fixed: (partition.excluded().len(), partition.included().len()),
        ambiguous: partition.ambiguous().len(),
    })
}

fn entry(name: &'static str, value: u64, start: Instant, optimality: Optimality) -> Entry {
    let elapsed = start.elapsed();
    observe::benchmarked(name, value, elapsed);
    Entry {
        name,
        value,
        elapsed,
        optimality,
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<12} {:>20} {:>14} {:>10}", "approach", "value", "time", "optimality")?;
        for entry in &self.entries {
            writeln!(
                f,
                "{:<12} {:>20} {:>14} {:>10}",
                entry.name,
                entry.value,
                format!("{:.3?}", entry.elapsed),
                entry.optimality.to_string()
            )?;
        }
        writeln!(
            f,
            "fixed at 0: {}, fixed at 1: {}, ambiguous: {}",
            self.fixed.0, self.fixed.1, self.ambiguous
        )
    }
}
