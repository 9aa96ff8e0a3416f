//! # Application Layer
//!
//! The two operations exposed by the binaries, plus the shared logging setup.

pub mod cleaner;
pub mod logging;
pub mod metadata;
