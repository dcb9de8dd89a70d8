//! # Workflows Module
//!
//! High-level entry points tying the chain-growth engine and the data-file
//! model together. [`build::build_melt`] is the one-call path from a melt
//! recipe to a finished, writable data file.

pub mod build;
