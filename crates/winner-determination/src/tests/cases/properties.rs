//! Properties checked on small random auctions against exhaustive search.

use {
    crate::{
        domain::{Auction, Bid, ConflictGraph, bid, kernel},
        tests::{brute_force, solve},
    },
    rand::{Rng, SeedableRng, rngs::StdRng},
    std::num::NonZeroUsize,
};

fn random_auction(rng: &mut StdRng) -> Auction {
    let goods = rng.gen_range(1..=6u32);
    let bids = (1..=rng.gen_range(1..=10u32))
        .map(|id| {
            let bundle: Vec<_> = (1..=goods)
                .filter(|_| rng.gen_bool(0.35))
                .map(bid::Good)
                .collect();
            Bid::new(bid::Id(id), rng.gen_range(1..=50), bundle)
        })
        .collect();
    Auction::new(goods, bids).unwrap()
}

#[test]
fn conflict_edges_match_shared_goods() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let auction = random_auction(&mut rng);
        let graph = ConflictGraph::build(&auction);
        for (i, a) in auction.bids().iter().enumerate() {
            for b in &auction.bids()[i + 1..] {
                let shares = a.goods().iter().any(|good| b.goods().contains(good));
                let edges = graph
                    .edges()
                    .iter()
                    .filter(|edge| edge.ends() == (a.id(), b.id()))
                    .count();
                assert_eq!(edges, usize::from(shares));
            }
        }
    }
}

#[tokio::test]
async fn pipeline_finds_the_optimum() {
    let mut rng = StdRng::seed_from_u64(42);
    for round in 0..25 {
        let auction = random_auction(&mut rng);
        let optimum = brute_force(&auction);

        let configs = [
            kernel::Config::default(),
            kernel::Config {
                enabled: false,
                ..Default::default()
            },
            kernel::Config {
                rounds: NonZeroUsize::new(3).unwrap(),
                ..Default::default()
            },
        ];
        for config in configs {
            let outcome = solve(&auction, config).await;
            let partition = &outcome.partition;

            assert_eq!(
                outcome.solution.value(),
                optimum,
                "round {round} with {config:?}"
            );
            assert!(outcome.validation.is_ok(), "round {round}");
            assert_eq!(partition.total_value(), auction.total_value());
            assert!(partition.excluded().is_disjoint(partition.included()));
            assert!(
                outcome
                    .solution
                    .winners()
                    .windows(2)
                    .all(|pair| pair[0] < pair[1])
            );
        }
    }
}

#[tokio::test]
async fn validation_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..10 {
        let auction = random_auction(&mut rng);
        let outcome = solve(&auction, kernel::Config::default()).await;
        let solution = outcome.solution.clone();

        let first = solution.validate(&auction);
        let second = solution.validate(&auction);

        assert_eq!(first, second);
        assert_eq!(first, outcome.validation);
        assert_eq!(solution, outcome.solution);
    }
}
