use super::error::DataError;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::process::Command;

/// Kind of value a header keyword carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// A single integer count.
    Count,
    /// A pair of reals (box bounds).
    Bounds,
    /// A triple of reals (tilt factors).
    Tilt,
}

/// A parsed header value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeaderValue {
    Count(i64),
    Bounds(f64, f64),
    Tilt(f64, f64, f64),
}

/// Header keyword vocabulary, in order.
///
/// The order is format-significant twice over: header lines are matched
/// against it substring-wise with first-match-wins, and headers are written
/// back in exactly this order.
pub const HEADER_KEYWORDS: &[(&str, HeaderKind)] = &[
    ("atoms", HeaderKind::Count),
    ("ellipsoids", HeaderKind::Count),
    ("lines", HeaderKind::Count),
    ("triangles", HeaderKind::Count),
    ("bodies", HeaderKind::Count),
    ("bonds", HeaderKind::Count),
    ("angles", HeaderKind::Count),
    ("dihedrals", HeaderKind::Count),
    ("impropers", HeaderKind::Count),
    ("atom types", HeaderKind::Count),
    ("bond types", HeaderKind::Count),
    ("angle types", HeaderKind::Count),
    ("dihedral types", HeaderKind::Count),
    ("improper types", HeaderKind::Count),
    ("xlo xhi", HeaderKind::Bounds),
    ("ylo yhi", HeaderKind::Bounds),
    ("zlo zhi", HeaderKind::Bounds),
    ("xy xz yz", HeaderKind::Tilt),
];

/// Section vocabulary: each section name paired with the header keyword that
/// declares its line count. Also the serialization order.
pub const SECTION_KEYWORDS: &[(&str, &str)] = &[
    ("Masses", "atom types"),
    ("Atoms", "atoms"),
    ("Ellipsoids", "ellipsoids"),
    ("Lines", "lines"),
    ("Triangles", "triangles"),
    ("Bodies", "bodies"),
    ("Bonds", "bonds"),
    ("Angles", "angles"),
    ("Dihedrals", "dihedrals"),
    ("Impropers", "impropers"),
    ("Velocities", "atoms"),
    ("Pair Coeffs", "atom types"),
    ("Bond Coeffs", "bond types"),
    ("Angle Coeffs", "angle types"),
    ("Dihedral Coeffs", "dihedral types"),
    ("Improper Coeffs", "improper types"),
    ("BondBond Coeffs", "angle types"),
    ("BondAngle Coeffs", "angle types"),
    ("MiddleBondTorsion Coeffs", "dihedral types"),
    ("EndBondTorsion Coeffs", "dihedral types"),
    ("AngleTorsion Coeffs", "dihedral types"),
    ("AngleAngleTorsion Coeffs", "dihedral types"),
    ("BondBond13 Coeffs", "dihedral types"),
    ("AngleAngle Coeffs", "improper types"),
    ("Molecules", "atoms"),
    ("Tinker Types", "atoms"),
];

fn length_header_for(section: &str) -> Option<&'static str> {
    SECTION_KEYWORDS
        .iter()
        .find(|(name, _)| *name == section)
        .map(|(_, header)| *header)
}

/// A LAMMPS-style data file as a self-contained value object.
///
/// Headers hold typed scalar/tuple values keyed by the fixed vocabulary;
/// sections hold their lines as raw text, split into fields only when a
/// column operation reads them. The `names` registry maps symbolic column
/// names to zero-based offsets for [`map`](Self::map)-driven accessors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFile {
    pub title: String,
    /// Free-form comment lines written as `# ...` after the title.
    pub comments: Vec<String>,
    pub(crate) headers: HashMap<String, HeaderValue>,
    pub(crate) sections: HashMap<String, Vec<String>>,
    pub(crate) names: HashMap<String, usize>,
}

impl DataFile {
    pub fn new() -> Self {
        Self {
            title: "LAMMPS data file".to_string(),
            ..Self::default()
        }
    }

    pub fn header(&self, keyword: &str) -> Option<&HeaderValue> {
        self.headers.get(keyword)
    }

    /// Integer value of a count header, if present and of count kind.
    pub fn count(&self, keyword: &str) -> Option<i64> {
        match self.headers.get(keyword) {
            Some(HeaderValue::Count(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn set_header(&mut self, keyword: &str, value: HeaderValue) {
        self.headers.insert(keyword.to_string(), value);
    }

    pub fn section(&self, name: &str) -> Option<&[String]> {
        self.sections.get(name).map(Vec::as_slice)
    }

    pub fn set_section(&mut self, name: &str, lines: Vec<String>) {
        self.sections.insert(name.to_string(), lines);
    }

    pub(crate) fn lines_of(&self, name: &str) -> Result<&Vec<String>, DataError> {
        self.sections
            .get(name)
            .ok_or_else(|| DataError::SectionNotFound(name.to_string()))
    }

    /// Parses a data file from a buffered reader.
    ///
    /// Header lines are matched against [`HEADER_KEYWORDS`] in order; the
    /// first line matching no keyword starts the section loop. Section lines
    /// are captured verbatim without field validation.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::UnknownSection`] for a section header outside
    /// the vocabulary and [`DataError::MissingLengthHeader`] when a
    /// section's governing count header was never parsed.
    pub fn read_from(reader: &mut impl BufRead) -> Result<Self, DataError> {
        let all: Vec<String> = reader.lines().collect::<Result<_, _>>()?;
        let mut pos = 0usize;

        let title = all.first().cloned().unwrap_or_default();
        pos += 1;

        let mut headers = HashMap::new();
        let mut section_line: Option<String> = None;
        while pos < all.len() {
            let line = all[pos].trim().to_string();
            pos += 1;
            if line.is_empty() {
                continue;
            }
            match HEADER_KEYWORDS
                .iter()
                .copied()
                .find(|&(keyword, _)| line.contains(keyword))
            {
                Some((keyword, kind)) => {
                    headers.insert(keyword.to_string(), parse_header_value(keyword, kind, &line)?);
                }
                None => {
                    section_line = Some(line);
                    break;
                }
            }
        }

        let mut sections = HashMap::new();
        while let Some(name) = section_line.take() {
            let header_key = length_header_for(&name)
                .ok_or_else(|| DataError::UnknownSection(name.clone()))?;
            let length = match headers.get(header_key) {
                // A negative count reads as an empty section.
                Some(HeaderValue::Count(n)) => usize::try_from(*n).unwrap_or(0),
                _ => {
                    return Err(DataError::MissingLengthHeader {
                        section: name,
                        header: header_key,
                    });
                }
            };

            // One separator line after the section name.
            pos += 1;
            let mut body = Vec::with_capacity(length);
            for _ in 0..length {
                body.push(all.get(pos).cloned().unwrap_or_default());
                pos += 1;
            }
            sections.insert(name, body);

            // Blank line between sections, then the next section name.
            pos += 1;
            if let Some(line) = all.get(pos) {
                section_line = Some(line.trim().to_string());
                pos += 1;
            }
        }

        Ok(Self {
            title,
            comments: Vec::new(),
            headers,
            sections,
            names: HashMap::new(),
        })
    }

    /// Reads a data file from a path, transparently decompressing `.gz`
    /// inputs through an external `gunzip -c` process.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let path = path.as_ref();
        if path.extension().is_some_and(|ext| ext == "gz") {
            let output = Command::new("gunzip").arg("-c").arg(path).output()?;
            if !output.status.success() {
                return Err(DataError::Io(io::Error::other(format!(
                    "gunzip failed for '{}'",
                    path.display()
                ))));
            }
            Self::read_from(&mut BufReader::new(&output.stdout[..]))
        } else {
            Self::read_from(&mut BufReader::new(File::open(path)?))
        }
    }

    /// Serializes the document in the fixed format order: title, comment
    /// block, headers in vocabulary order, a Masses section (synthesized
    /// with unit masses when absent), then the remaining present sections in
    /// vocabulary order.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::MissingLengthHeader`] or
    /// [`DataError::SectionLengthMismatch`] when a present section and its
    /// governing count header disagree, and [`DataError::MissingHeader`]
    /// when Masses must be synthesized without an `atom types` header.
    pub fn write_to(&self, writer: &mut impl Write) -> Result<(), DataError> {
        self.validate_sections()?;

        writeln!(writer, "{}", self.title)?;
        for comment in &self.comments {
            writeln!(writer, "# {}", comment)?;
        }
        if !self.comments.is_empty() {
            writeln!(writer)?;
        }

        for (keyword, _) in HEADER_KEYWORDS {
            if let Some(value) = self.headers.get(*keyword) {
                match value {
                    HeaderValue::Count(n) => writeln!(writer, "{} {}", n, keyword)?,
                    HeaderValue::Bounds(lo, hi) => writeln!(writer, "{} {} {}", lo, hi, keyword)?,
                    HeaderValue::Tilt(xy, xz, yz) => {
                        writeln!(writer, "{} {} {} {}", xy, xz, yz, keyword)?
                    }
                }
            }
        }

        let synthesized;
        let masses = match self.sections.get("Masses") {
            Some(lines) => lines,
            None => {
                let atom_types = self
                    .count("atom types")
                    .ok_or(DataError::MissingHeader("atom types"))?;
                synthesized = (1..=atom_types)
                    .map(|type_id| format!("{} 1.0", type_id))
                    .collect::<Vec<_>>();
                &synthesized
            }
        };
        writeln!(writer, "\nMasses\n")?;
        for line in masses {
            writeln!(writer, "{}", line)?;
        }

        for (name, _) in SECTION_KEYWORDS {
            if *name == "Masses" {
                continue;
            }
            if let Some(lines) = self.sections.get(*name) {
                writeln!(writer, "\n{}\n", name)?;
                for line in lines {
                    writeln!(writer, "{}", line)?;
                }
            }
        }
        Ok(())
    }

    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), DataError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Every present section must be in the vocabulary and agree with its
    /// governing count header.
    fn validate_sections(&self) -> Result<(), DataError> {
        for (name, lines) in &self.sections {
            let header_key = length_header_for(name)
                .ok_or_else(|| DataError::UnknownSection(name.clone()))?;
            match self.headers.get(header_key) {
                Some(HeaderValue::Count(n)) => {
                    if *n as usize != lines.len() {
                        return Err(DataError::SectionLengthMismatch {
                            section: name.clone(),
                            declared: *n,
                            actual: lines.len(),
                        });
                    }
                }
                _ => {
                    return Err(DataError::MissingLengthHeader {
                        section: name.clone(),
                        header: header_key,
                    });
                }
            }
        }
        Ok(())
    }
}

fn parse_header_value(
    keyword: &'static str,
    kind: HeaderKind,
    line: &str,
) -> Result<HeaderValue, DataError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let bad = || DataError::InvalidHeaderValue {
        keyword,
        line: line.to_string(),
    };
    match kind {
        HeaderKind::Count => {
            let n = words.first().ok_or_else(bad)?.parse().map_err(|_| bad())?;
            Ok(HeaderValue::Count(n))
        }
        HeaderKind::Bounds => {
            if words.len() < 2 {
                return Err(bad());
            }
            let lo = words[0].parse().map_err(|_| bad())?;
            let hi = words[1].parse().map_err(|_| bad())?;
            Ok(HeaderValue::Bounds(lo, hi))
        }
        HeaderKind::Tilt => {
            if words.len() < 3 {
                return Err(bad());
            }
            let xy = words[0].parse().map_err(|_| bad())?;
            let xz = words[1].parse().map_err(|_| bad())?;
            let yz = words[2].parse().map_err(|_| bad())?;
            Ok(HeaderValue::Tilt(xy, xz, yz))
        }
    }
}
