//! Miranda fonts CLI library.

pub mod cli;
