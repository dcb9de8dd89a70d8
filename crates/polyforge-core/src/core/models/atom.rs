use nalgebra::Point3;

/// One coarse-grained particle of a bead-spring polymer model.
#[derive(Debug, Clone, PartialEq)]
pub struct Bead {
    /// 1-based atom id, strictly increasing across an entire build.
    pub id: usize,
    /// Molecule the bead belongs to. Under per-chain numbering this groups
    /// the beads of one chain; under bead-index numbering it is the 1-based
    /// position of the bead within its chain.
    pub molecule_id: usize,
    /// Force-field atom type label (1-based).
    pub type_id: usize,
    /// Position inside the periodic box, in reduced units.
    pub position: Point3<f64>,
}

impl Bead {
    pub fn new(id: usize, molecule_id: usize, type_id: usize, position: Point3<f64>) -> Self {
        Self {
            id,
            molecule_id,
            type_id,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bead_carries_all_fields() {
        let bead = Bead::new(7, 2, 1, Point3::new(0.5, -1.0, 2.0));
        assert_eq!(bead.id, 7);
        assert_eq!(bead.molecule_id, 2);
        assert_eq!(bead.type_id, 1);
        assert_eq!(bead.position, Point3::new(0.5, -1.0, 2.0));
    }
}
