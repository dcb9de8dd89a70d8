use super::atom::Bead;
use super::topology::Bond;
use crate::core::utils::pbc::SimulationBox;

/// The finished output of a chain-growth run: beads, bonds, and the box
/// they were grown in.
///
/// Produced by [`ChainGrowthEngine::finish`](crate::engine::builder::ChainGrowthEngine::finish)
/// after the bead-count postcondition has been checked, and consumed by the
/// workflow layer when assembling a data file.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainSystem {
    beads: Vec<Bead>,
    bonds: Vec<Bond>,
    cell: SimulationBox,
}

impl ChainSystem {
    pub(crate) fn new(beads: Vec<Bead>, bonds: Vec<Bond>, cell: SimulationBox) -> Self {
        Self { beads, bonds, cell }
    }

    pub fn beads(&self) -> &[Bead] {
        &self.beads
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn cell(&self) -> &SimulationBox {
        &self.cell
    }

    /// Highest atom type label present, or 0 for an empty system.
    pub fn max_atom_type(&self) -> usize {
        self.beads.iter().map(|b| b.type_id).max().unwrap_or(0)
    }

    /// Highest bond type label present, or 0 for a bond-free system.
    pub fn max_bond_type(&self) -> usize {
        self.bonds.iter().map(|b| b.type_id).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn small_system() -> ChainSystem {
        let cell = SimulationBox::from_density(3, 1.0, (1.0, 1.0, 1.0)).unwrap();
        let beads = vec![
            Bead::new(1, 1, 1, Point3::origin()),
            Bead::new(2, 1, 2, Point3::origin()),
            Bead::new(3, 1, 1, Point3::origin()),
        ];
        let bonds = vec![Bond::new(1, 1, 1, 2), Bond::new(2, 1, 2, 3)];
        ChainSystem::new(beads, bonds, cell)
    }

    #[test]
    fn max_types_reflect_highest_labels() {
        let system = small_system();
        assert_eq!(system.max_atom_type(), 2);
        assert_eq!(system.max_bond_type(), 1);
    }

    #[test]
    fn empty_system_reports_zero_types() {
        let cell = SimulationBox::from_density(1, 1.0, (1.0, 1.0, 1.0)).unwrap();
        let system = ChainSystem::new(Vec::new(), Vec::new(), cell);
        assert_eq!(system.max_atom_type(), 0);
        assert_eq!(system.max_bond_type(), 0);
    }
}
