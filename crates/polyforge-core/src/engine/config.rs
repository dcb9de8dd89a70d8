/// How molecule ids are assigned to generated beads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoleculeNumbering {
    /// Each chain gets the next molecule id, continuing across build calls.
    #[default]
    PerChain,
    /// Each bead's molecule id is its 1-based position within its chain.
    BeadIndex,
}

/// Parameters governing chain growth.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthConfig {
    /// Fixed distance between consecutive beads of a chain.
    pub bond_length: f64,
    /// Atom type used when no per-bead pattern is supplied.
    pub default_atom_type: usize,
    /// Bond type assigned to every generated bond.
    pub bond_type: usize,
    pub numbering: MoleculeNumbering,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            bond_length: 0.97,
            default_atom_type: 1,
            bond_type: 1,
            numbering: MoleculeNumbering::default(),
        }
    }
}

#[derive(Default)]
pub struct GrowthConfigBuilder {
    bond_length: Option<f64>,
    default_atom_type: Option<usize>,
    bond_type: Option<usize>,
    numbering: Option<MoleculeNumbering>,
}

impl GrowthConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bond_length(mut self, length: f64) -> Self {
        self.bond_length = Some(length);
        self
    }

    pub fn default_atom_type(mut self, type_id: usize) -> Self {
        self.default_atom_type = Some(type_id);
        self
    }

    pub fn bond_type(mut self, type_id: usize) -> Self {
        self.bond_type = Some(type_id);
        self
    }

    pub fn numbering(mut self, numbering: MoleculeNumbering) -> Self {
        self.numbering = Some(numbering);
        self
    }

    pub fn build(self) -> GrowthConfig {
        let defaults = GrowthConfig::default();
        GrowthConfig {
            bond_length: self.bond_length.unwrap_or(defaults.bond_length),
            default_atom_type: self.default_atom_type.unwrap_or(defaults.default_atom_type),
            bond_type: self.bond_type.unwrap_or(defaults.bond_type),
            numbering: self.numbering.unwrap_or(defaults.numbering),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_classic_fene_parameters() {
        let config = GrowthConfig::default();
        assert_eq!(config.bond_length, 0.97);
        assert_eq!(config.default_atom_type, 1);
        assert_eq!(config.bond_type, 1);
        assert_eq!(config.numbering, MoleculeNumbering::PerChain);
    }

    #[test]
    fn builder_overrides_only_the_given_fields() {
        let config = GrowthConfigBuilder::new()
            .bond_length(1.5)
            .numbering(MoleculeNumbering::BeadIndex)
            .build();
        assert_eq!(config.bond_length, 1.5);
        assert_eq!(config.numbering, MoleculeNumbering::BeadIndex);
        assert_eq!(config.default_atom_type, 1);
        assert_eq!(config.bond_type, 1);
    }
}
