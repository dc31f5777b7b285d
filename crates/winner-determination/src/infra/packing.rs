//! Winner determination as a set packing program: one binary per bid and at
//! most one winner per good. Only used as a reference point for benchmarks.

use {
    super::blocking,
    crate::domain::{Auction, SolverUnavailable, bid::Good},
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
    std::{collections::BTreeMap, time::Duration},
};

const NAME: &str = "set-packing";

/// Returns the optimal auction value.
pub async fn solve(auction: &Auction, timeout: Duration) -> Result<u64, SolverUnavailable> {
    if auction.is_empty() {
        return Ok(0);
    }
    let values: Vec<u64> = auction.bids().iter().map(|bid| bid.value()).collect();
    let mut bidders = BTreeMap::<Good, Vec<usize>>::new();
    for (index, bid) in auction.bids().iter().enumerate() {
        for &good in bid.goods() {
            bidders.entry(good).or_default().push(index);
        }
    }
    blocking::solve(NAME, timeout, move || {
        model(&values, bidders.into_values().filter(|bids| bids.len() > 1))
    })
    .await
}

fn model(
    values: &[u64],
    conflicts: impl Iterator<Item = Vec<usize>>,
) -> Result<u64, good_lp::ResolutionError> {
    let mut vars = variables!();
    let y: Vec<Variable> = values
        .iter()
        .map(|_| vars.add(variable().binary()))
        .collect();
    let mut objective = Expression::with_capacity(y.len());
    for (&y, &value) in y.iter().zip(values) {
        objective.add_mul(value as f64, y);
    }

    let mut problem = vars.maximise(objective).using(default_solver);
    for bids in conflicts {
        let taken: Expression = bids.iter().map(|&bid| Expression::from(y[bid])).sum();
        problem = problem.with(constraint!(taken <= 1));
    }
    let solution = problem.solve()?;

    Ok(y.iter()
        .zip(values)
        .filter(|&(&y, _)| solution.value(y) > 0.5)
        .map(|(_, &value)| value)
        .sum())
}

#[cfg(test)]
mod tests {
    use {super::*, crate::infra::io::plain};

    #[tokio::test]
    async fn packs_the_best_disjoint_bids() {
        let auction = plain::parse("2 3\n10,1,2\n6,1\n6,2\n").unwrap();
        assert_eq!(solve(&auction, Duration::from_secs(30)).await.unwrap(), 12);
    }

    #[tokio::test]
    async fn takes_every_bid_without_conflicts() {
        let auction = plain::parse("3 3\n10,1\n10,2\n10,3\n").unwrap();
        assert_eq!(solve(&auction, Duration::from_secs(30)).await.unwrap(), 30);
    }

    #[tokio::test]
    async fn empty_auction_is_worth_nothing() {
        let auction = plain::parse("3 0\n").unwrap();
        assert_eq!(solve(&auction, Duration::from_secs(30)).await.unwrap(), 0);
    }
}
