/// A bond between two consecutive beads of one chain.
///
/// Only connectivity and a type label are recorded; the force law (FENE or
/// otherwise) is the simulation engine's concern, not this library's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bond {
    /// 1-based bond id, strictly increasing across an entire build.
    pub id: usize,
    /// Bond type label (1-based).
    pub type_id: usize,
    /// Atom id of the first endpoint; always `atom2 - 1` within a chain.
    pub atom1: usize,
    /// Atom id of the second endpoint.
    pub atom2: usize,
}

impl Bond {
    pub fn new(id: usize, type_id: usize, atom1: usize, atom2: usize) -> Self {
        Self {
            id,
            type_id,
            atom1,
            atom2,
        }
    }
}
