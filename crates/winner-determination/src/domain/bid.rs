use {
    derive_more::{Display, From, Into},
    std::cmp::Ordering,
};

/// Identifies a bid within a single run. Parsers use the 1-based position of
/// the bid in its input file.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
pub struct Id(pub u32);

/// A good on offer. Goods are numbered from 1.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
pub struct Good(pub u32);

/// An offer of `value` for receiving every one of `goods`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bid {
    id: Id,
    value: u64,
    /// Sorted ascending and free of duplicates.
    goods: Vec<Good>,
}

impl Bid {
    pub fn new(id: Id, value: u64, goods: impl IntoIterator<Item = Good>) -> Self {
        let mut goods: Vec<_> = goods.into_iter().collect();
        goods.sort_unstable();
        goods.dedup();
        Self { id, value, goods }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn goods(&self) -> &[Good] {
        &self.goods
    }

    /// Whether both bids ask for at least one common good.
    ///
    /// Walks both sorted good lists once, so this is linear in their combined
    /// length.
    pub fn conflicts_with(&self, other: &Bid) -> bool {
        let (mut left, mut right) = (self.goods.iter().peekable(), other.goods.iter().peekable());
        while let (Some(a), Some(b)) = (left.peek(), right.peek()) {
            match a.cmp(b) {
                Ordering::Less => {
                    left.next();
                }
                Ordering::Greater => {
                    right.next();
                }
                Ordering::Equal => return true,
            }
        }
        false
    }
}
