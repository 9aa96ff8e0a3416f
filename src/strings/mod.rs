//! # Strings Module
//!
//! Centralizes user-facing strings: report lines, log messages and help text.

pub mod help;
pub mod logs;
