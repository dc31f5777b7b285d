pub mod domain;
pub mod infra;
mod run;

#[cfg(test)]
mod tests;

pub use run::{Error, main, run, start};
