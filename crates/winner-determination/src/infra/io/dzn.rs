//! MiniZinc data for the set packing formulation of an auction.

use {crate::domain::Auction, itertools::Itertools};

/// Entries per line in the `bid` and `bidvalue` arrays.
const PER_LINE: usize = 10;

pub fn render(auction: &Auction) -> String {
    let bids = auction
        .bids()
        .iter()
        .map(|bid| format!("{{{}}}", bid.goods().iter().join(",")));
    let values = auction.bids().iter().map(|bid| bid.value().to_string());

    format!(
        "nitems = {};\n\nnbids = {};\nbid = [ {}];\nbidvalue = [{} ];\n",
        auction.goods(),
        auction.len(),
        array(bids),
        array(values),
    )
}

/// Comma separated entries, wrapped every [`PER_LINE`] entries.
fn array(entries: impl Iterator<Item = String>) -> String {
    let chunks = entries.chunks(PER_LINE);
    let lines: Vec<_> = chunks.into_iter().map(|mut line| line.join(", ")).collect();
    lines.join(", \n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_sets_and_values() {
        let auction = crate::infra::io::plain::parse("3 3\n10,1,2\n6,1\n6\n").unwrap();
        assert_eq!(
            render(&auction),
            "nitems = 3;\n\nnbids = 3;\nbid = [ {1,2}, {1}, {}];\nbidvalue = [10, 6, 6 ];\n"
        );
    }

    #[test]
    fn wraps_long_arrays() {
        let bids = (0..12).map(|_| "1,1").join("\n");
        let auction = crate::infra::io::plain::parse(&format!("1 12\n{bids}\n")).unwrap();
        let dzn = render(&auction);
        assert!(dzn.contains("1, 1, 1, 1, 1, 1, 1, 1, 1, 1, \n1, 1 ];"));
    }
}
