use {
    super::{
        auction::Auction,
        graph::ConflictGraph,
        kernel::{self, Kernelizer, LpOracle, Partition},
        reduce::Reduced,
        solution::{Solution, Validated, ValidationFailure},
        solver::{self, CoverSolver, Optimality, SolverUnavailable},
    },
    crate::infra::observe,
};

/// Everything a run needs besides the auction itself.
pub struct Pipeline<'a> {
    pub lp: &'a dyn LpOracle,
    pub solver: &'a dyn CoverSolver,
    pub kernel: kernel::Config,
}

/// The result of one run through the pipeline.
#[derive(Debug)]
pub struct Outcome {
    pub graph: ConflictGraph,
    pub partition: Partition,
    pub solution: Solution,
    /// Validation does not stop the run, its verdict is reported alongside.
    pub validation: Result<Validated, ValidationFailure>,
}

impl Pipeline<'_> {
    /// Builds the conflict graph, kernelizes it, covers whatever is left
    /// ambiguous and reconstructs the winners.
    pub async fn solve(&self, auction: &Auction) -> Result<Outcome, SolverUnavailable> {
        let graph = ConflictGraph::build(auction);
        observe::graph_built(&graph);

        let partition = Kernelizer::new(self.lp, self.kernel)
            .kernelize(&graph)
            .await?;
        observe::kernelized(&partition);

        let (cover, optimality) = if partition.is_resolved() {
            (None, Optimality::Proven)
        } else {
            let reduced = Reduced::new(&graph, partition.ambiguous());
            let cover = solver::cover(self.solver, &reduced).await?;
            (Some(cover), self.solver.optimality())
        };
        if optimality == Optimality::Heuristic {
            observe::heuristic_solution(&self.solver.name());
        }

        let solution = Solution::reconstruct(auction, &partition, cover.as_ref(), optimality);
        observe::solved(&solution);
        let validation = solution.validate(auction);
        match &validation {
            Ok(validated) => observe::validated(validated),
            Err(err) => observe::validation_failed(err),
        }

        Ok(Outcome {
            graph,
            partition,
            solution,
            validation,
        })
    }
}
