use crate::core::io::error::DataError;
use crate::core::io::lammps::{DataFile, HeaderValue};
use crate::core::models::system::ChainSystem;
use crate::core::utils::rng::{ParkMiller, RandomSource, SystemRandom};
use crate::engine::builder::ChainGrowthEngine;
use crate::engine::config::GrowthConfigBuilder;
use crate::engine::error::EngineError;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum MeltError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Data(#[from] DataError),
}

/// A complete description of a polymer melt to build.
///
/// `blocks` gives the per-chain block layout as `(atom type, run length)`
/// pairs, e.g. `[(1, 30), (2, 70)]` for an AB diblock with 30 beads of
/// type 1 followed by 70 of type 2.
#[derive(Debug, Clone, PartialEq)]
pub struct MeltRecipe {
    pub nchains: usize,
    pub blocks: Vec<(usize, usize)>,
    pub rho_star: f64,
    pub aspects: (f64, f64, f64),
    pub bond_length: f64,
    /// Park-Miller seed for a reproducible build; `None` uses the
    /// process-global generator.
    pub seed: Option<i64>,
    pub title: String,
}

impl Default for MeltRecipe {
    fn default() -> Self {
        Self {
            nchains: 1,
            blocks: vec![(1, 1)],
            rho_star: 3.0,
            aspects: (1.0, 1.0, 1.0),
            bond_length: 0.97,
            seed: Some(12345),
            title: "LAMMPS FENE chain data file".to_string(),
        }
    }
}

impl MeltRecipe {
    /// Expands the block layout into a full per-bead type pattern.
    pub fn pattern(&self) -> Vec<usize> {
        self.blocks
            .iter()
            .flat_map(|&(type_id, length)| std::iter::repeat_n(type_id, length))
            .collect()
    }

    pub fn beads_per_chain(&self) -> usize {
        self.blocks.iter().map(|&(_, length)| length).sum()
    }

    pub fn total_beads(&self) -> usize {
        self.nchains * self.beads_per_chain()
    }

    fn comments(&self) -> Vec<String> {
        let mut comments = vec![
            format!("nchains   = {}", self.nchains),
            format!("blocks    = {:?}", self.blocks),
            format!("rho*      = {}", self.rho_star),
        ];
        if let Some(seed) = self.seed {
            comments.push(format!("seed      = {}", seed));
        }
        comments
    }
}

/// Copies a finished chain system into a data-file document: count and
/// bound headers, unit Masses, and formatted Atoms/Bonds sections with
/// coordinates to six decimal places.
pub fn assemble_data_file(system: &ChainSystem, title: &str, comments: Vec<String>) -> DataFile {
    let cell = system.cell();

    let mut doc = DataFile::new();
    doc.title = title.to_string();
    doc.comments = comments;
    doc.set_header("atoms", HeaderValue::Count(system.beads().len() as i64));
    doc.set_header("bonds", HeaderValue::Count(system.bonds().len() as i64));
    doc.set_header(
        "atom types",
        HeaderValue::Count(system.max_atom_type() as i64),
    );
    doc.set_header(
        "bond types",
        HeaderValue::Count(system.max_bond_type() as i64),
    );
    doc.set_header("xlo xhi", HeaderValue::Bounds(cell.xlo, cell.xhi));
    doc.set_header("ylo yhi", HeaderValue::Bounds(cell.ylo, cell.yhi));
    doc.set_header("zlo zhi", HeaderValue::Bounds(cell.zlo, cell.zhi));

    doc.set_section(
        "Masses",
        (1..=system.max_atom_type())
            .map(|type_id| format!("{} 1.0", type_id))
            .collect(),
    );
    doc.set_section(
        "Atoms",
        system
            .beads()
            .iter()
            .map(|b| {
                format!(
                    "{} {} {} {:.6} {:.6} {:.6}",
                    b.id, b.molecule_id, b.type_id, b.position.x, b.position.y, b.position.z
                )
            })
            .collect(),
    );
    doc.set_section(
        "Bonds",
        system
            .bonds()
            .iter()
            .map(|b| format!("{} {} {} {}", b.id, b.type_id, b.atom1, b.atom2))
            .collect(),
    );
    doc.map(&[(1, "id"), (2, "mol"), (3, "type"), (4, "x"), (5, "y"), (6, "z")]);
    doc
}

/// Builds a melt end to end: sizes the box, grows the chains, checks the
/// bead-count postcondition, and assembles the data file.
pub fn build_melt(recipe: &MeltRecipe) -> Result<DataFile, MeltError> {
    match recipe.seed {
        Some(seed) => run(recipe, ParkMiller::new(seed)),
        None => run(recipe, SystemRandom::new()),
    }
}

fn run<R: RandomSource>(recipe: &MeltRecipe, rng: R) -> Result<DataFile, MeltError> {
    let pattern = recipe.pattern();
    let config = GrowthConfigBuilder::new()
        .bond_length(recipe.bond_length)
        .build();
    let mut engine = ChainGrowthEngine::new(
        recipe.total_beads(),
        recipe.rho_star,
        recipe.aspects,
        config,
        rng,
    )?;
    engine.grow(recipe.nchains, pattern.len(), Some(&pattern))?;
    let system = engine.finish()?;
    info!(
        beads = system.beads().len(),
        bonds = system.bonds().len(),
        "assembled melt"
    );
    Ok(assemble_data_file(&system, &recipe.title, recipe.comments()))
}
