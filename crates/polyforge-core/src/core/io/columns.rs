//! Column-level transformations over stored section lines.
//!
//! Fields are whitespace-split and cast on access, never at parse time, so a
//! malformed numeric field only surfaces when a column that contains it is
//! actually read.

use super::error::DataError;
use super::lammps::{DataFile, HeaderValue};
use std::fmt;

/// One atom of a [`DataFile::viz`] snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct VizAtom {
    pub id: i64,
    pub type_id: i64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// One bond of a [`DataFile::viz`] snapshot, with both endpoint positions
/// resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct VizBond {
    pub id: i64,
    pub type_id: i64,
    pub x1: f64,
    pub y1: f64,
    pub z1: f64,
    pub x2: f64,
    pub y2: f64,
    pub z2: f64,
}

/// A single-snapshot view of the document for visualization tooling.
#[derive(Debug, Clone, PartialEq)]
pub struct VizSnapshot {
    /// `[xlo, ylo, zlo, xhi, yhi, zhi]`.
    pub bounds: [f64; 6],
    pub atoms: Vec<VizAtom>,
    pub bonds: Vec<VizBond>,
}

impl DataFile {
    /// All fields of every line of a section, parsed as reals.
    pub fn get(&self, section: &str) -> Result<Vec<Vec<f64>>, DataError> {
        let lines = self.lines_of(section)?;
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                line.split_whitespace()
                    .map(|word| parse_real(section, i, word))
                    .collect()
            })
            .collect()
    }

    /// A single 1-based column of a section, parsed as reals.
    pub fn get_column(&self, section: &str, icol: usize) -> Result<Vec<f64>, DataError> {
        let lines = self.lines_of(section)?;
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let word = nth_field(section, line, i, icol)?;
                parse_real(section, i, word)
            })
            .collect()
    }

    /// Rewrites every line of a section, keeping only the listed 1-based
    /// columns in the given order.
    pub fn reorder(&mut self, section: &str, order: &[usize]) -> Result<(), DataError> {
        let old = self.lines_of(section)?.clone();
        let mut rebuilt = vec![String::new(); old.len()];
        for &icol in order {
            for (i, line) in old.iter().enumerate() {
                let word = nth_field(section, line, i, icol)?;
                if !rebuilt[i].is_empty() {
                    rebuilt[i].push(' ');
                }
                rebuilt[i].push_str(word);
            }
        }
        self.set_section(section, rebuilt);
        Ok(())
    }

    /// Overwrites one 1-based column across all lines with the given values,
    /// index-aligned, leaving every other column's text untouched.
    pub fn replace<T: fmt::Display>(
        &mut self,
        section: &str,
        icol: usize,
        values: &[T],
    ) -> Result<(), DataError> {
        let old = self.lines_of(section)?.clone();
        if values.len() != old.len() {
            return Err(DataError::LengthMismatch {
                section: section.to_string(),
                expected: old.len(),
                got: values.len(),
            });
        }
        let mut rebuilt = Vec::with_capacity(old.len());
        for (i, line) in old.iter().enumerate() {
            let mut words: Vec<String> = line.split_whitespace().map(str::to_string).collect();
            if icol == 0 || icol > words.len() {
                return Err(DataError::ColumnOutOfRange {
                    section: section.to_string(),
                    column: icol,
                    line: i + 1,
                });
            }
            words[icol - 1] = values[i].to_string();
            rebuilt.push(words.join(" "));
        }
        self.set_section(section, rebuilt);
        Ok(())
    }

    /// Associates symbolic column names with 1-based column numbers; stored
    /// as zero-based offsets for the name-driven accessors.
    pub fn map(&mut self, pairs: &[(usize, &str)]) {
        for &(icol, name) in pairs {
            self.names.insert(name.to_string(), icol - 1);
        }
    }

    /// Zero-based offset registered for a column name.
    pub fn column_index(&self, name: &str) -> Result<usize, DataError> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| DataError::NameNotMapped(name.to_string()))
    }

    /// Removes a header or a section by keyword.
    pub fn delete(&mut self, keyword: &str) -> Result<(), DataError> {
        if self.headers.remove(keyword).is_some() || self.sections.remove(keyword).is_some() {
            Ok(())
        } else {
            Err(DataError::UnknownKeyword(keyword.to_string()))
        }
    }

    /// Box bounds as `[xlo, ylo, zlo, xhi, yhi, zhi]`.
    pub fn maxbox(&self) -> Result<[f64; 6], DataError> {
        let bounds = |keyword: &'static str| match self.header(keyword) {
            Some(HeaderValue::Bounds(lo, hi)) => Ok((*lo, *hi)),
            _ => Err(DataError::MissingHeader(keyword)),
        };
        let (xlo, xhi) = bounds("xlo xhi")?;
        let (ylo, yhi) = bounds("ylo yhi")?;
        let (zlo, zhi) = bounds("zlo zhi")?;
        Ok([xlo, ylo, zlo, xhi, yhi, zhi])
    }

    /// Number of atom types declared in the header.
    pub fn maxtype(&self) -> Result<i64, DataError> {
        self.count("atom types")
            .ok_or(DataError::MissingHeader("atom types"))
    }

    /// Builds a single-snapshot view of atoms and bonds, resolving columns
    /// through the mapped `id`/`type`/`x`/`y`/`z` names. Bond endpoints are
    /// looked up by indexing the Atoms lines with the endpoint atom id.
    pub fn viz(&self) -> Result<VizSnapshot, DataError> {
        let id_idx = self.column_index("id")?;
        let type_idx = self.column_index("type")?;
        let x_idx = self.column_index("x")?;
        let y_idx = self.column_index("y")?;
        let z_idx = self.column_index("z")?;

        let bounds = self.maxbox()?;
        let atom_lines = self.lines_of("Atoms")?;

        let field = |line: &str, i: usize, idx: usize| -> Result<f64, DataError> {
            let words: Vec<&str> = line.split_whitespace().collect();
            let word = words.get(idx).ok_or_else(|| DataError::ColumnOutOfRange {
                section: "Atoms".to_string(),
                column: idx + 1,
                line: i + 1,
            })?;
            parse_real("Atoms", i, word)
        };

        let mut atoms = Vec::with_capacity(atom_lines.len());
        for (i, line) in atom_lines.iter().enumerate() {
            atoms.push(VizAtom {
                id: field(line, i, id_idx)? as i64,
                type_id: field(line, i, type_idx)? as i64,
                x: field(line, i, x_idx)?,
                y: field(line, i, y_idx)?,
                z: field(line, i, z_idx)?,
            });
        }

        let mut bonds = Vec::new();
        if let Some(bond_lines) = self.section("Bonds") {
            for (i, line) in bond_lines.iter().enumerate() {
                let words: Vec<&str> = line.split_whitespace().collect();
                let bond_field = |idx: usize| -> Result<f64, DataError> {
                    let word = words.get(idx).ok_or_else(|| DataError::ColumnOutOfRange {
                        section: "Bonds".to_string(),
                        column: idx + 1,
                        line: i + 1,
                    })?;
                    parse_real("Bonds", i, word)
                };
                let id = bond_field(0)? as i64;
                let type_id = bond_field(1)? as i64;
                let atom1 = bond_field(2)? as usize;
                let atom2 = bond_field(3)? as usize;

                let endpoint = |atom_id: usize| -> Result<(f64, f64, f64), DataError> {
                    let line = atom_lines.get(atom_id.wrapping_sub(1)).ok_or_else(|| {
                        DataError::MalformedField {
                            section: "Bonds".to_string(),
                            line: i + 1,
                            value: atom_id.to_string(),
                        }
                    })?;
                    Ok((
                        field(line, atom_id - 1, x_idx)?,
                        field(line, atom_id - 1, y_idx)?,
                        field(line, atom_id - 1, z_idx)?,
                    ))
                };
                let (x1, y1, z1) = endpoint(atom1)?;
                let (x2, y2, z2) = endpoint(atom2)?;
                bonds.push(VizBond {
                    id,
                    type_id,
                    x1,
                    y1,
                    z1,
                    x2,
                    y2,
                    z2,
                });
            }
        }

        Ok(VizSnapshot {
            bounds,
            atoms,
            bonds,
        })
    }
}

fn nth_field<'a>(
    section: &str,
    line: &'a str,
    line_index: usize,
    icol: usize,
) -> Result<&'a str, DataError> {
    if icol == 0 {
        return Err(DataError::ColumnOutOfRange {
            section: section.to_string(),
            column: icol,
            line: line_index + 1,
        });
    }
    line.split_whitespace()
        .nth(icol - 1)
        .ok_or_else(|| DataError::ColumnOutOfRange {
            section: section.to_string(),
            column: icol,
            line: line_index + 1,
        })
}

fn parse_real(section: &str, line_index: usize, word: &str) -> Result<f64, DataError> {
    word.parse().map_err(|_| DataError::MalformedField {
        section: section.to_string(),
        line: line_index + 1,
        value: word.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn sample() -> DataFile {
        let mut doc = DataFile::new();
        doc.set_header("atoms", HeaderValue::Count(2));
        doc.set_header("bonds", HeaderValue::Count(1));
        doc.set_header("atom types", HeaderValue::Count(2));
        doc.set_header("bond types", HeaderValue::Count(1));
        doc.set_header("xlo xhi", HeaderValue::Bounds(-1.0, 1.0));
        doc.set_header("ylo yhi", HeaderValue::Bounds(-2.0, 2.0));
        doc.set_header("zlo zhi", HeaderValue::Bounds(-3.0, 3.0));
        doc.set_section(
            "Atoms",
            vec![
                "1 1 1 0.5 0.25 -0.75".to_string(),
                "2 1 2 -0.5 1.25 0.75".to_string(),
            ],
        );
        doc.set_section("Bonds", vec!["1 1 1 2".to_string()]);
        doc
    }

    #[test]
    fn get_parses_every_field_as_reals() {
        let doc = sample();
        let rows = doc.get("Atoms").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec![1.0, 1.0, 1.0, 0.5, 0.25, -0.75]);
    }

    #[test]
    fn get_column_is_one_based() {
        let doc = sample();
        let xs = doc.get_column("Atoms", 4).unwrap();
        assert_eq!(xs, vec![0.5, -0.5]);
    }

    #[test]
    fn get_on_missing_section_is_a_lookup_error() {
        let doc = sample();
        assert!(matches!(
            doc.get("Velocities").unwrap_err(),
            DataError::SectionNotFound(name) if name == "Velocities"
        ));
    }

    #[test]
    fn malformed_field_surfaces_only_on_access() {
        let mut doc = sample();
        doc.set_section("Atoms", vec!["1 1 oops 0.0 0.0 0.0".to_string()]);
        // The bad field sits in column 3; reading column 1 never touches it.
        assert!(doc.get_column("Atoms", 1).is_ok());
        assert!(matches!(
            doc.get_column("Atoms", 3).unwrap_err(),
            DataError::MalformedField { value, .. } if value == "oops"
        ));
    }

    #[test]
    fn reorder_keeps_listed_columns_in_the_new_order() {
        let mut doc = sample();
        let old_x = doc.get_column("Atoms", 4).unwrap();
        let old_id = doc.get_column("Atoms", 1).unwrap();

        doc.reorder("Atoms", &[4, 1]).unwrap();
        assert_eq!(doc.section("Atoms").unwrap()[0], "0.5 1");
        assert_eq!(doc.get_column("Atoms", 1).unwrap(), old_x);
        assert_eq!(doc.get_column("Atoms", 2).unwrap(), old_id);
    }

    #[test]
    fn replace_substitutes_one_column_and_preserves_the_rest() {
        let mut doc = sample();
        doc.replace("Atoms", 4, &[9.5, 8.5]).unwrap();
        assert_eq!(doc.section("Atoms").unwrap()[0], "1 1 1 9.5 0.25 -0.75");
        assert_eq!(doc.section("Atoms").unwrap()[1], "2 1 2 8.5 1.25 0.75");
    }

    #[test]
    fn replace_with_wrong_value_count_is_rejected() {
        let mut doc = sample();
        let err = doc.replace("Atoms", 4, &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            DataError::LengthMismatch { expected: 2, got: 1, .. }
        ));
    }

    #[test]
    fn map_registers_zero_based_offsets() {
        let mut doc = sample();
        doc.map(&[(1, "id"), (4, "x")]);
        assert_eq!(doc.column_index("id").unwrap(), 0);
        assert_eq!(doc.column_index("x").unwrap(), 3);
        assert!(matches!(
            doc.column_index("y").unwrap_err(),
            DataError::NameNotMapped(name) if name == "y"
        ));
    }

    #[test]
    fn delete_removes_headers_or_sections() {
        let mut doc = sample();
        doc.delete("bonds").unwrap();
        assert!(doc.header("bonds").is_none());
        doc.delete("Bonds").unwrap();
        assert!(doc.section("Bonds").is_none());
        assert!(matches!(
            doc.delete("Angles").unwrap_err(),
            DataError::UnknownKeyword(name) if name == "Angles"
        ));
    }

    #[test]
    fn maxbox_and_maxtype_read_the_headers() {
        let doc = sample();
        assert_eq!(doc.maxbox().unwrap(), [-1.0, -2.0, -3.0, 1.0, 2.0, 3.0]);
        assert_eq!(doc.maxtype().unwrap(), 2);
    }

    #[test]
    fn viz_resolves_atoms_and_bond_endpoints() {
        let mut doc = sample();
        doc.map(&[(1, "id"), (3, "type"), (4, "x"), (5, "y"), (6, "z")]);
        let snapshot = doc.viz().unwrap();

        assert_eq!(snapshot.bounds, [-1.0, -2.0, -3.0, 1.0, 2.0, 3.0]);
        assert_eq!(snapshot.atoms.len(), 2);
        assert_eq!(snapshot.atoms[1].id, 2);
        assert_eq!(snapshot.atoms[1].type_id, 2);
        assert!((snapshot.atoms[1].x - -0.5).abs() < TOLERANCE);

        assert_eq!(snapshot.bonds.len(), 1);
        let bond = &snapshot.bonds[0];
        assert_eq!(bond.id, 1);
        assert!((bond.x1 - 0.5).abs() < TOLERANCE);
        assert!((bond.x2 - -0.5).abs() < TOLERANCE);
    }

    #[test]
    fn viz_without_mapped_names_is_a_lookup_error() {
        let doc = sample();
        assert!(matches!(
            doc.viz().unwrap_err(),
            DataError::NameNotMapped(name) if name == "id"
        ));
    }
}
