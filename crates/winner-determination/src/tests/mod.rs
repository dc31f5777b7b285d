mod cases;

pub use setup::{auction, brute_force, solve};
