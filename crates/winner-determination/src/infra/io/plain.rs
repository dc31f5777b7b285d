//! The plain auction format:
//!
//! ```text
//! <goods> <bids>
//! <value>,<good>,<good>,...
//! ```
//!
//! Bid ids are the 1-based positions of the bid lines.

use {
    super::{Error, lines, number},
    crate::domain::{
        Auction,
        Bid,
        bid::{self, Good},
    },
};

pub fn parse(data: &str) -> Result<Auction, Error> {
    let mut lines = lines(data);
    let (line, header) = lines.next().ok_or_else(|| Error::Header {
        line: 1,
        reason: "missing `<goods> <bids>` header".to_owned(),
    })?;
    let (goods, count) = match header.split_whitespace().collect::<Vec<_>>()[..] {
        [goods, bids] => (
            number::<u32>(line, "number of goods", goods)?,
            number::<usize>(line, "number of bids", bids)?,
        ),
        _ => {
            return Err(Error::Header {
                line,
                reason: format!("expected `<goods> <bids>`, found `{header}`"),
            });
        }
    };

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
    let mut tokens = content
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty());
    let value = match tokens.next() {
        Some(token) => number(line, "bid value", token)?,
        None => {
            return Err(Error::Bid {
                line,
                reason: "missing bid value".to_owned(),
            });
        }
    };
    let goods = tokens
        .map(|token| number(line, "good", token).map(Good))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Bid::new(id, value, goods))
}
