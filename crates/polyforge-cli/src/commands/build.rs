use crate::cli::BuildArgs;
use crate::config;
use crate::error::Result;
use polyforge::workflows::build::build_melt;
use tracing::info;

pub fn run(args: &BuildArgs) -> Result<()> {
    let recipe = config::resolve(args)?;
    info!(
        chains = recipe.nchains,
        beads = recipe.total_beads(),
        rho_star = recipe.rho_star,
        "building melt"
    );

    let doc = build_melt(&recipe)?;
    doc.write_to_path(&args.output)?;
    info!("wrote {}", args.output.display());
    Ok(())
}
