//! # Block Matchers
//!
//! Tried only at line starts. Every block consumes whole lines, including
//! the trailing newline when there is one, so the engine always resumes at
//! the start of a line.

pub mod definitions;
pub mod fence;
pub mod header;
pub mod list;
pub mod quote;
pub mod rule;
pub mod table;
