//! # PolyForge Core Library
//!
//! A library for generating initial-condition files for bead-spring polymer
//! simulations: it grows chains of bonded beads inside a periodic box at a
//! target number density and serializes the result as a LAMMPS-style data
//! file.
//!
//! ## Architectural Philosophy
//!
//! The library is split into three layers with a strict dependency direction,
//! keeping the geometry engine and the file model independently testable.
//!
//! - **[`core`]: The Foundation.** Stateless building blocks: bead/bond data
//!   models, the periodic simulation box, uniform random sources, and the
//!   generic header/section data-file document with its column operations.
//!
//! - **[`engine`]: The Logic Core.** The stateful chain-growth builder. It
//!   consumes a random source and a simulation box to place bonded beads
//!   chain by chain, tracking atom/bond/molecule id bookkeeping across
//!   build calls.
//!
//! - **[`workflows`]: The Public API.** High-level entry points that wire the
//!   engine output into the data-file model: the one-call path from a melt
//!   recipe to a finished data file.

pub mod core;
pub mod engine;
pub mod workflows;
