use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid section '{0}' in data file")]
    UnknownSection(String),

    #[error("data section '{section}' has no matching '{header}' header")]
    MissingLengthHeader {
        section: String,
        header: &'static str,
    },

    #[error("section '{section}' declares {declared} lines in its header but holds {actual}")]
    SectionLengthMismatch {
        section: String,
        declared: i64,
        actual: usize,
    },

    #[error("malformed value for header keyword '{keyword}' in line '{line}'")]
    InvalidHeaderValue { keyword: &'static str, line: String },

    #[error("missing required header '{0}'")]
    MissingHeader(&'static str),

    #[error("section '{0}' not present in document")]
    SectionNotFound(String),

    #[error("keyword '{0}' not found among headers or sections")]
    UnknownKeyword(String),

    #[error("column name '{0}' has not been mapped")]
    NameNotMapped(String),

    #[error("column {column} out of range in section '{section}' line {line}")]
    ColumnOutOfRange {
        section: String,
        column: usize,
        line: usize,
    },

    #[error("malformed numeric field '{value}' in section '{section}' line {line}")]
    MalformedField {
        section: String,
        line: usize,
        value: String,
    },

    #[error("replacement has {got} values but section '{section}' has {expected} lines")]
    LengthMismatch {
        section: String,
        expected: usize,
        got: usize,
    },
}
