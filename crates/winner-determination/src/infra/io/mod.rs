//! Reading auctions from disk and writing results back.

use {
    crate::domain::{Auction, auction},
    std::path::{Path, PathBuf},
    thiserror::Error,
    tokio::fs,
};

pub mod cats;
pub mod dzn;
pub mod plain;
pub mod report;

/// Layout of an auction file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// `numGoods numBids` followed by one `value,good,...` line per bid.
    Plain,
    /// Output of the CATS generator.
    Cats,
}

/// Reads and parses the auction at `path`.
pub async fn read(path: &Path, format: Format) -> Result<Auction, Error> {
    let data = fs::read_to_string(path).await.map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;
    parse(&data, format)
}

pub fn parse(data: &str, format: Format) -> Result<Auction, Error> {
    match format {
        Format::Plain => plain::parse(data),
        Format::Cats => cats::parse(data),
    }
}

/// Writes `contents` to `path`, creating or truncating it.
pub async fn write(path: &Path, contents: &str) -> Result<(), Error> {
    fs::write(path, contents).await.map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}

/// The auction file could not be read or is malformed.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("line {line}: {reason}")]
    Header { line: usize, reason: String },
    #[error("line {line}: `{token}` is not a valid {field}")]
    Field {
        line: usize,
        field: &'static str,
        token: String,
    },
    #[error("line {line}: {reason}")]
    Bid { line: usize, reason: String },
    #[error("expected {expected} bids but found {found}")]
    MissingBids { expected: usize, found: usize },
    #[error("line {0}: unexpected content after the last bid")]
    TrailingData(usize),
    #[error(transparent)]
    Auction(#[from] auction::Error),
}

/// Non-empty lines with their 1-based line numbers.
fn lines(data: &str) -> impl Iterator<Item = (usize, &str)> {
    data.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn number<T: std::str::FromStr>(line: usize, field: &'static str, token: &str) -> Result<T, Error> {
    token.parse().map_err(|_| Error::Field {
        line,
        field,
        token: token.to_owned(),
    })
}
