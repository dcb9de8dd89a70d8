use super::config::{GrowthConfig, MoleculeNumbering};
use super::error::EngineError;
use crate::core::models::atom::Bead;
use crate::core::models::system::ChainSystem;
use crate::core::models::topology::Bond;
use crate::core::utils::pbc::SimulationBox;
use crate::core::utils::rng::RandomSource;
use nalgebra::{Point3, Vector3};
use tracing::{debug, info};

/// Grows freely-jointed bead chains inside a periodic box.
///
/// Each chain starts at a uniform random in-box position; every further bead
/// is displaced from the previous one by the configured bond length along a
/// rejection-sampled unit vector, then wrapped back into the box. Atom and
/// bond ids advance monotonically across chains and across repeated
/// [`grow`](Self::grow) calls, so several block layouts can be accumulated
/// into one system before [`finish`](Self::finish).
pub struct ChainGrowthEngine<R: RandomSource> {
    cell: SimulationBox,
    rng: R,
    config: GrowthConfig,
    target_beads: usize,
    beads: Vec<Bead>,
    bonds: Vec<Bond>,
}

impl<R: RandomSource> ChainGrowthEngine<R> {
    /// Sizes a box for `target_beads` at number density `rho_star` and
    /// prepares an empty engine.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Geometry`] if the density or an aspect ratio
    /// is not strictly positive.
    pub fn new(
        target_beads: usize,
        rho_star: f64,
        aspects: (f64, f64, f64),
        config: GrowthConfig,
        rng: R,
    ) -> Result<Self, EngineError> {
        let cell = SimulationBox::from_density(target_beads, rho_star, aspects)?;
        info!(
            xprd = cell.xprd,
            yprd = cell.yprd,
            zprd = cell.zprd,
            "sized simulation box"
        );
        Ok(Self {
            cell,
            rng,
            config,
            target_beads,
            beads: Vec::with_capacity(target_beads),
            bonds: Vec::new(),
        })
    }

    pub fn cell(&self) -> &SimulationBox {
        &self.cell
    }

    /// Places `nchains` chains of `nper` beads each.
    ///
    /// `pattern` gives the atom type of each bead position within a chain;
    /// when absent, every bead gets the configured default type.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PatternLength`] if a supplied pattern does not
    /// have exactly `nper` entries.
    pub fn grow(
        &mut self,
        nchains: usize,
        nper: usize,
        pattern: Option<&[usize]>,
    ) -> Result<(), EngineError> {
        let default_pattern;
        let pattern = match pattern {
            Some(p) => {
                if p.len() != nper {
                    return Err(EngineError::PatternLength {
                        expected: nper,
                        got: p.len(),
                    });
                }
                p
            }
            None => {
                default_pattern = vec![self.config.default_atom_type; nper];
                &default_pattern
            }
        };

        let mol_base = self.beads.last().map_or(0, |b| b.molecule_id);
        for ic in 0..nchains {
            let id_base = self.beads.last().map_or(0, |b| b.id);
            let bond_base = self.bonds.last().map_or(0, |b| b.id);

            let mut prev = Point3::origin();
            for (i, &type_id) in pattern.iter().enumerate() {
                let raw = if i == 0 {
                    self.cell.random_point(&mut self.rng)
                } else {
                    prev + self.unit_step() * self.config.bond_length
                };
                let position = self.cell.wrap(raw);

                let id = id_base + i + 1;
                let molecule_id = match self.config.numbering {
                    MoleculeNumbering::PerChain => mol_base + ic + 1,
                    MoleculeNumbering::BeadIndex => i + 1,
                };
                self.beads.push(Bead::new(id, molecule_id, type_id, position));
                if i > 0 {
                    self.bonds
                        .push(Bond::new(bond_base + i, self.config.bond_type, id - 1, id));
                }
                prev = position;
            }
        }
        debug!(
            chains = nchains,
            beads = self.beads.len(),
            bonds = self.bonds.len(),
            "grew chains"
        );
        Ok(())
    }

    /// Rejection-sampled unit vector: draw in `[-1, 1]^3` until the point
    /// lands inside the unit sphere, then normalize. Roughly 1.9 draws per
    /// accepted vector.
    fn unit_step(&mut self) -> Vector3<f64> {
        loop {
            let dx = 2.0 * self.rng.next_uniform() - 1.0;
            let dy = 2.0 * self.rng.next_uniform() - 1.0;
            let dz = 2.0 * self.rng.next_uniform() - 1.0;
            let rsq = dx * dx + dy * dy + dz * dz;
            // rsq == 0 cannot be normalized; retry.
            if rsq <= 1.0 && rsq > 0.0 {
                let r = rsq.sqrt();
                return Vector3::new(dx / r, dy / r, dz / r);
            }
        }
    }

    /// Checks the bead-count postcondition and hands the system over.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::BeadCountMismatch`] if the number of grown
    /// beads differs from the declared target. This signals a
    /// construction-order bug in the caller, not a recoverable condition.
    pub fn finish(self) -> Result<ChainSystem, EngineError> {
        if self.beads.len() != self.target_beads {
            return Err(EngineError::BeadCountMismatch {
                declared: self.target_beads,
                generated: self.beads.len(),
            });
        }
        Ok(ChainSystem::new(self.beads, self.bonds, self.cell))
    }
}
