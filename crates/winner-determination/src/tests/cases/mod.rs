//! Test cases.

mod commands;
mod properties;
mod scenarios;
