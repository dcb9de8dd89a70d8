//! # Engine Module
//!
//! The stateful chain-growth layer. [`builder::ChainGrowthEngine`] places
//! bonded beads chain by chain using a rejection-sampling random walk,
//! configured through [`config::GrowthConfig`] and reporting failures via
//! [`error::EngineError`].

pub mod builder;
pub mod config;
pub mod error;
