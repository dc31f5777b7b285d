use {
    super::bid::{self, Bid, Good},
    itertools::Itertools,
    thiserror::Error,
};

/// The bids of a combinatorial auction together with their aggregate value.
///
/// Bids are kept in ascending id order, which later phases rely on when
/// merging against sorted id lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auction {
    goods: u32,
    bids: Vec<Bid>,
    total_value: u64,
}

impl Auction {
    /// Loads `bids` for an auction of `goods` goods, recomputing the total
    /// value from scratch.
    pub fn new(goods: u32, mut bids: Vec<Bid>) -> Result<Self, Error> {
        bids.sort_by_key(Bid::id);
        if let Some((duplicate, _)) = bids.iter().tuple_windows().find(|(a, b)| a.id() == b.id()) {
            return Err(Error::DuplicateBid(duplicate.id()));
        }
        for bid in &bids {
            if let Some(&good) = bid.goods().iter().find(|good| good.0 == 0 || good.0 > goods) {
                return Err(Error::GoodOutOfRange {
                    bid: bid.id(),
                    good,
                    goods,
                });
            }
        }
        let total_value = bids
            .iter()
            .try_fold(0u64, |total, bid| total.checked_add(bid.value()))
            .ok_or(Error::ValueOverflow)?;

        Ok(Self {
            goods,
            bids,
            total_value,
        })
    }

    /// Number of goods on offer.
    pub fn goods(&self) -> u32 {
        self.goods
    }

    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    pub fn bid(&self, id: bid::Id) -> Option<&Bid> {
        self.bids
            .binary_search_by_key(&id, Bid::id)
            .ok()
            .map(|index| &self.bids[index])
    }

    /// Sum of all bid values.
    pub fn total_value(&self) -> u64 {
        self.total_value
    }

    pub fn len(&self) -> usize {
        self.bids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("bid {0} appears more than once")]
    DuplicateBid(bid::Id),
    #[error("bid {bid} asks for good {good} but only goods 1 to {goods} exist")]
    GoodOutOfRange { bid: bid::Id, good: Good, goods: u32 },
    #[error("total auction value does not fit into 64 bits")]
    ValueOverflow,
}
