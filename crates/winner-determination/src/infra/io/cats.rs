//! Auctions written by the CATS generator with integer prices:
//!
//! ```text
//! % comment
//! goods <n>
//! bids <n>
//! dummy <n>
//!
//! <row> <value> <good> <good> ... #
//! ```
//!
//! Goods are numbered from 0 in the file and shifted by one on the way in.
//! Dummy goods count as regular goods. Bid ids are the 1-based positions of
//! the bid lines.

use {
    super::{Error, lines, number},
    crate::domain::{
        Auction,
        Bid,
        bid::{self, Good},
    },
};

#[derive(Debug, Default)]
struct Header {
    goods: Option<u32>,
    bids: Option<usize>,
    dummy: Option<u32>,
}

pub fn parse(data: &str) -> Result<Auction, Error> {
    let mut lines = lines(data)
        .filter(|(_, line)| !line.starts_with('%'))
        .peekable();

    let mut header = Header::default();
    while let Some(&(line, content)) = lines.peek() {
        let mut tokens = content.split_whitespace();
        let (Some(key), count) = (tokens.next(), tokens.next()) else {
            break;
        };
        let value = || {
            count.ok_or_else(|| Error::Header {
                line,
                reason: format!("`{key}` without a count"),
            })
        };
        match key {
            "goods" => header.goods = Some(number(line, "number of goods", value()?)?),
            "bids" => header.bids = Some(number(line, "number of bids", value()?)?),
            "dummy" => header.dummy = Some(number(line, "number of dummy goods", value()?)?),
            _ if key.parse::<u64>().is_ok() => break,
            _ => {
                return Err(Error::Header {
                    line,
                    reason: format!("unknown header `{key}`"),
                });
            }
        }
        lines.next();
    }

    let missing = |what: &str| Error::Header {
        line: 1,
        reason: format!("missing `{what}` header"),
    };
    let goods = header.goods.ok_or_else(|| missing("goods"))?;
    let count = header.bids.ok_or_else(|| missing("bids"))?;
    let goods = goods
        .checked_add(header.dummy.unwrap_or_default())
        .ok_or_else(|| Error::Header {
            line: 1,
            reason: "too many goods".to_owned(),
        })?;

    let mut bids = Vec::new();
    for (id, (line, content)) in (1..).zip(lines.by_ref().take(count)) {
        bids.push(parse_bid(bid::Id(id), line, content)?);
    }
    if bids.len() < count {
        return Err(Error::MissingBids {
            expected: count,
            found: bids.len(),
        });
    }
    if let Some((line, _)) = lines.next() {
        return Err(Error::TrailingData(line));
    }

    Ok(Auction::new(goods, bids)?)
}

fn parse_bid(id: bid::Id, line: usize, content: &str) -> Result<Bid, Error> {
    let mut tokens = content.split_whitespace();
    let (Some(_row), Some(value)) = (tokens.next(), tokens.next()) else {
        return Err(Error::Bid {
            line,
            reason: "expected `<row> <value> <good> ... #`".to_owned(),
        });
    };
    let value = number(line, "bid value", value)?;

    let mut goods = Vec::new();
    loop {
        match tokens.next() {
            Some("#") => break,
            Some(token) => {
                let good: u32 = number(line, "good", token)?;
                goods.push(Good(good.saturating_add(1)));
            }
            None => {
                return Err(Error::Bid {
                    line,
                    reason: "bid is not terminated by `#`".to_owned(),
                });
            }
        }
    }
    Ok(Bid::new(id, value, goods))
}
