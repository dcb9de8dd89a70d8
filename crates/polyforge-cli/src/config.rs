use crate::cli::BuildArgs;
use crate::error::{CliError, Result};
use polyforge::core::utils::rng::ParkMiller;
use polyforge::workflows::build::MeltRecipe;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// One block of a per-chain layout: `length` beads of atom type `type`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BlockSpec {
    #[serde(rename = "type")]
    pub type_id: usize,
    pub length: usize,
}

/// On-disk TOML shape of a melt recipe. Every field is optional; CLI flags
/// override whatever the file provides.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct RecipeFile {
    pub chains: Option<usize>,
    pub blocks: Option<Vec<BlockSpec>>,
    pub beads_per_chain: Option<usize>,
    pub density: Option<f64>,
    pub aspects: Option<[f64; 3]>,
    pub bond_length: Option<f64>,
    pub seed: Option<i64>,
    pub title: Option<String>,
}

pub fn load(path: &Path) -> Result<RecipeFile> {
    let content = std::fs::read_to_string(path)?;
    let file: RecipeFile = toml::from_str(&content).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    debug!("loaded recipe file: {:?}", file);
    Ok(file)
}

/// Merges the recipe file (if any) with CLI flag overrides into a complete
/// [`MeltRecipe`].
pub fn resolve(args: &BuildArgs) -> Result<MeltRecipe> {
    let file = match &args.config {
        Some(path) => load(path)?,
        None => RecipeFile::default(),
    };

    let chains = args
        .chains
        .or(file.chains)
        .ok_or_else(|| CliError::Config("number of chains is required".to_string()))?;
    let density = args
        .density
        .or(file.density)
        .ok_or_else(|| CliError::Config("target number density is required".to_string()))?;

    // A flag-level bead count always means a single-type chain; a block
    // layout can only come from the recipe file.
    let blocks: Vec<(usize, usize)> = match (args.beads_per_chain, &file.blocks) {
        (Some(nper), _) => vec![(1, nper)],
        (None, Some(blocks)) => blocks.iter().map(|b| (b.type_id, b.length)).collect(),
        (None, None) => {
            let nper = file.beads_per_chain.ok_or_else(|| {
                CliError::Config("either a block layout or beads-per-chain is required".to_string())
            })?;
            vec![(1, nper)]
        }
    };
    if blocks.iter().any(|&(type_id, length)| type_id == 0 || length == 0) {
        return Err(CliError::Config(
            "block types and lengths must be positive".to_string(),
        ));
    }

    // Seed 0 is a fixed point of the generator and anything outside the
    // modulus range breaks the Schrage recurrence.
    let seed = args.seed.or(file.seed);
    if let Some(seed) = seed {
        if !(ParkMiller::MIN_SEED..=ParkMiller::MAX_SEED).contains(&seed) {
            return Err(CliError::Config(format!(
                "seed must be in [{}, {}] (got {})",
                ParkMiller::MIN_SEED,
                ParkMiller::MAX_SEED,
                seed
            )));
        }
    }

    let defaults = MeltRecipe::default();
    Ok(MeltRecipe {
        nchains: chains,
        blocks,
        rho_star: density,
        aspects: file
            .aspects
            .map_or(defaults.aspects, |[x, y, z]| (x, y, z)),
        bond_length: args
            .bond_length
            .or(file.bond_length)
            .unwrap_or(defaults.bond_length),
        seed,
        title: args
            .title
            .clone()
            .or(file.title)
            .unwrap_or(defaults.title),
    })
}
