//! Data transfer objects exchanged with minimum weighted vertex cover solver
//! engines: the problem handed to an engine and the cover it answers with.

pub mod cover;
pub mod problem;

pub use {
    cover::Cover,
    problem::{Edge, Problem, Vertex},
};
