use {
    super::{
        auction::Auction,
        bid::{self, Bid, Good},
        kernel::{Class, Partition},
        reduce::CoverResult,
        solver::Optimality,
    },
    std::collections::HashMap,
    thiserror::Error,
};

/// The winning bids and the value they are reported to be worth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    value: u64,
    /// Ascending.
    winners: Vec<bid::Id>,
    optimality: Optimality,
}

impl Solution {
    /// Winners are the bids kernelization excluded from the cover plus the
    /// ambiguous bids the cover left out. `cover` is `None` when nothing was
    /// ambiguous.
    pub fn reconstruct(
        auction: &Auction,
        partition: &Partition,
        cover: Option<&CoverResult>,
        optimality: Optimality,
    ) -> Self {
        let weight = cover.map(|cover| cover.weight).unwrap_or_default();
        let value = partition
            .ambiguous_value()
            .saturating_sub(weight)
            .saturating_add(partition.excluded_value());

        // Both sequences are ascending, so a single pointer into the cover
        // suffices.
        let mut members = cover
            .map(|cover| cover.members.as_slice())
            .unwrap_or_default()
            .iter()
            .peekable();
        let winners = auction
            .bids()
            .iter()
            .map(Bid::id)
            .filter(|id| {
                if members.next_if_eq(&id).is_some() {
                    return false;
                }
                matches!(
                    partition.class(*id),
                    Some(Class::Excluded | Class::Ambiguous)
                )
            })
            .collect();

        Self {
            value,
            winners,
            optimality,
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn winners(&self) -> &[bid::Id] {
        &self.winners
    }

    pub fn optimality(&self) -> Optimality {
        self.optimality
    }

    /// Checks the solution against the auction from scratch: every winner
    /// exists, no good is awarded twice and the reported value is what the
    /// winners are worth. Never alters the solution.
    pub fn validate(&self, auction: &Auction) -> Result<Validated, ValidationFailure> {
        let mut owners = HashMap::<Good, bid::Id>::new();
        let mut value = 0u64;
        for &id in &self.winners {
            let bid = auction.bid(id).ok_or(ValidationFailure::UnknownBid(id))?;
            for &good in bid.goods() {
                if let Some(&first) = owners.get(&good) {
                    return Err(ValidationFailure::Overlap {
                        good,
                        first,
                        second: id,
                    });
                }
                owners.insert(good, id);
            }
            value = value.saturating_add(bid.value());
        }
        if value != self.value {
            return Err(ValidationFailure::ValueMismatch {
                reported: self.value,
                recomputed: value,
            });
        }
        Ok(Validated {
            value,
            winners: self.winners.len(),
            goods: owners.len(),
        })
    }
}

/// Summary of a solution that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validated {
    pub value: u64,
    pub winners: usize,
    /// Number of goods awarded.
    pub goods: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("good {good} is awarded to both bid {first} and bid {second}")]
    Overlap {
        good: Good,
        first: bid::Id,
        second: bid::Id,
    },
    #[error("winning bid {0} is not part of the auction")]
    UnknownBid(bid::Id),
    #[error("reported value {reported} but the winning bids are worth {recomputed}")]
    ValueMismatch { reported: u64, recomputed: u64 },
}
