//! # Core Models Module
//!
//! Data structures representing a generated bead-spring system.
//!
//! - [`atom`] - Individual coarse-grained beads with ids, types, and positions
//! - [`topology`] - Bonds between consecutive beads of a chain
//! - [`system`] - The finished system handed from the engine to the file layer

pub mod atom;
pub mod system;
pub mod topology;
