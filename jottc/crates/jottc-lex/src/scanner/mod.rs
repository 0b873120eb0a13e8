//! Line scanner module.
//!
//! This module organizes the per-line scanner into smaller, focused
//! components:
//! - `core` - Main LineScanner struct and dispatch
//! - `identifier` - Identifier and keyword runs
//! - `number` - Digit accumulation and the `.` rule
//! - `operator` - Relational operators, assignment, and colons
//! - `string` - String literals

mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::LineScanner;
