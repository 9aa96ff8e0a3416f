//! # Interface Layer
//!
//! Command-line surface of the two binaries.

pub mod cli;
