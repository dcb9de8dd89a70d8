//! Geometry and random-number utilities shared by the chain-growth engine.

pub mod pbc;
pub mod rng;
