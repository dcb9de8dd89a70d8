//! Reading, writing, and transforming LAMMPS-style structured data files.
//!
//! The document model ([`lammps::DataFile`]) keeps headers and sections as a
//! value object, with the format's ordered keyword vocabularies driving both
//! parse disambiguation and serialization order. Section lines are stored as
//! raw text; numeric fields are only parsed when a column operation
//! ([`columns`]) actually reads them.

pub mod columns;
pub mod error;
pub mod lammps;
