//! Error types for the modeller

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// What went wrong on one line of a hierarchy file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseIssueKind {
    #[error("expected {expected} fields after NODE, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid {field} value '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("unknown shape type '{0}'")]
    UnknownShapeType(String),

    #[error("{0} without a matching NODE")]
    UnmatchedEnd(&'static str),

    #[error("unknown directive '{0}'")]
    UnknownDirective(String),

    #[error("NODE opened on line {opened_at} was never closed")]
    UnclosedNode { opened_at: usize },

    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),

    #[error("file format version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// A diagnostic tied to a 1-based line number.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseIssue {
    pub line: usize,
    pub kind: ParseIssueKind,
}

/// Failure at the load/save boundary.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse error at {0}")]
    Parse(#[from] ParseIssue),

    #[error("hierarchy is {depth} shapes deep, files hold at most {max}")]
    TooDeep { depth: usize, max: usize },
}

/// Rejected text command.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),
}
