pub mod bench;
pub mod blocking;
pub mod cli;
pub mod config;
pub mod io;
pub mod lp;
pub mod mwvc;
pub mod observe;
pub mod packing;

pub use {config::Config, lp::GoodLp};
