use crate::{
    domain::{
        ConflictGraph,
        Optimality,
        bid,
        graph::Edge,
        kernel::{self, MockLpOracle},
        solver::MockCoverSolver,
    },
    infra::io::report,
    tests::{auction, setup::solve_with, solve},
};

/// Three bids on three different goods.
#[tokio::test]
async fn disjoint_bids_all_win() {
    let auction = auction(&[(10, &[1]), (10, &[2]), (10, &[3])]);
    assert!(ConflictGraph::build(&auction).edges().is_empty());

    let outcome = solve(&auction, kernel::Config::default()).await;

    assert_eq!(outcome.solution.value(), 30);
    assert_eq!(
        outcome.solution.winners(),
        [bid::Id(1), bid::Id(2), bid::Id(3)]
    );
    assert!(outcome.partition.is_resolved());
    assert!(outcome.validation.is_ok());
}

/// One bundle against the two single goods it is made of.
#[tokio::test]
async fn two_singles_beat_the_bundle() {
    let auction = auction(&[(10, &[1, 2]), (6, &[1]), (6, &[2])]);
    assert_eq!(
        ConflictGraph::build(&auction).edges(),
        [
            Edge::new(bid::Id(1), bid::Id(2)),
            Edge::new(bid::Id(1), bid::Id(3)),
        ]
    );

    for enabled in [true, false] {
        let config = kernel::Config {
            enabled,
            ..Default::default()
        };
        let outcome = solve(&auction, config).await;
        assert_eq!(outcome.solution.value(), 12);
        assert_eq!(outcome.solution.winners(), [bid::Id(2), bid::Id(3)]);
        assert_eq!(outcome.solution.optimality(), Optimality::Proven);
        assert_eq!(
            report::render(&auction, &outcome.solution),
            "12\n6\t1\n6\t2\n"
        );
    }
}

/// A bid for nothing conflicts with nobody.
#[tokio::test]
async fn empty_bundle_always_wins() {
    let auction = auction(&[(5, &[]), (10, &[1]), (7, &[1])]);
    let graph = ConflictGraph::build(&auction);
    assert_eq!(graph.edges(), [Edge::new(bid::Id(2), bid::Id(3))]);

    for enabled in [true, false] {
        let config = kernel::Config {
            enabled,
            ..Default::default()
        };
        let outcome = solve(&auction, config).await;
        assert!(outcome.solution.winners().contains(&bid::Id(1)));
        assert_eq!(outcome.solution.value(), 15);
        assert!(outcome.validation.is_ok());
    }
}

/// An integral relaxation settles the auction without the cover solver.
#[tokio::test]
async fn integral_relaxation_skips_the_cover_solver() {
    let auction = auction(&[(10, &[1, 2]), (6, &[1]), (6, &[2]), (4, &[3])]);
    let mut lp = MockLpOracle::new();
    lp.expect_relax()
        .times(1)
        .returning(|_| Ok(vec![1.0, 0.0, 0.0, 0.0]));
    let mut solver = MockCoverSolver::new();
    solver.expect_solve().times(0);

    let outcome = solve_with(&auction, &lp, &solver, kernel::Config::default()).await;

    assert_eq!(outcome.partition.excluded().len(), 3);
    assert_eq!(outcome.partition.included().len(), 1);
    assert_eq!(outcome.solution.value(), 16);
    assert_eq!(
        outcome.solution.winners(),
        [bid::Id(2), bid::Id(3), bid::Id(4)]
    );
    assert!(outcome.validation.is_ok());
}

/// An odd cycle relaxes to all halves and is left to the cover solver.
#[tokio::test]
async fn odd_cycle_goes_to_the_cover_solver() {
    let auction = auction(&[(5, &[1, 2]), (5, &[2, 3]), (5, &[1, 3]), (2, &[4])]);

    let outcome = solve(&auction, kernel::Config::default()).await;

    assert_eq!(outcome.partition.excluded().len(), 1);
    assert_eq!(outcome.partition.ambiguous().len(), 3);
    assert_eq!(outcome.solution.value(), 7);
    assert_eq!(outcome.solution.winners().len(), 2);
    assert!(outcome.solution.winners().contains(&bid::Id(4)));
    assert!(outcome.validation.is_ok());
}

#[tokio::test]
async fn empty_auction_has_no_winners() {
    let auction = auction(&[]);
    let outcome = solve(&auction, kernel::Config::default()).await;
    assert_eq!(outcome.solution.value(), 0);
    assert!(outcome.solution.winners().is_empty());
    assert!(outcome.validation.is_ok());
}
