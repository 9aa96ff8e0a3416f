//! # nb-tools
//!
//! Utilities for a notebook publishing workflow:
//! - `nb-metadata`: stamps title, author and tags onto a notebook's metadata
//! - `clean-plot-tmp`: removes temp plot artifacts left next to notebooks
//!
//! Layout:
//! - Domain: notebook document and artifact naming rule
//! - Application: the two operations and logging
//! - Interface: command-line arguments

pub mod application;
pub mod domain;
pub mod interface;
pub mod strings;
