//! The solution report: the total value on the first line, then one
//! `<value>\t<good>,<good>,...` line per winning bid in ascending id order.
//! Caveats about the value go to stderr so the report stays machine readable.

use {
    crate::domain::{Auction, Optimality, Solution},
    itertools::Itertools,
    tokio::io::{AsyncWrite, AsyncWriteExt},
};

pub fn render(auction: &Auction, solution: &Solution) -> String {
    let winners: String = solution
        .winners()
        .iter()
        .filter_map(|&id| auction.bid(id))
        .map(|bid| format!("{}\t{}\n", bid.value(), bid.goods().iter().join(",")))
        .collect();
    format!("{}\n{winners}", solution.value())
}

/// A note accompanying solutions that are not proven optimal.
pub fn caveat(solution: &Solution) -> Option<String> {
    (solution.optimality() == Optimality::Heuristic).then(|| {
        format!(
            "note: the cover solver is a heuristic, {} is a lower bound on the optimum\n",
            solution.value()
        )
    })
}

/// Writes the report to stdout.
pub async fn print(report: &str) -> std::io::Result<()> {
    emit(tokio::io::stdout(), report).await
}

/// Writes a caveat to stderr.
pub async fn note(caveat: &str) -> std::io::Result<()> {
    emit(tokio::io::stderr(), caveat).await
}

async fn emit(mut out: impl AsyncWrite + Unpin, text: &str) -> std::io::Result<()> {
    out.write_all(text.as_bytes()).await?;
    out.flush().await
}
