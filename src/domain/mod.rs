//! # Domain Layer
//!
//! Core definitions shared by both tools: the notebook document and the
//! temp artifact naming rule. No CLI or logging concerns live here.

pub mod artifacts;
pub mod notebook;
pub mod upgrade;
