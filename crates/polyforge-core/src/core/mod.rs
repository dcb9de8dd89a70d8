//! # Core Module
//!
//! Stateless foundations of the library: molecular data models, the periodic
//! simulation box, random-number sources, and the structured data-file
//! document used for reading and writing LAMMPS-style data files.
//!
//! - **Molecular Representation** ([`models`]) - Beads, bonds, and the
//!   finished chain system handed from the engine to the file layer
//! - **File I/O** ([`io`]) - The keyed header/section document model with
//!   parsing, canonical-order serialization, and column transforms
//! - **Utilities** ([`utils`]) - Periodic-box geometry and uniform random
//!   sources

pub mod io;
pub mod models;
pub mod utils;
