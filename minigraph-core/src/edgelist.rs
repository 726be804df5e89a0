//! Reading and writing the plain-text edge-list format.
//!
//! One edge per line, two space-separated 1-based node identifiers with the
//! smaller first, no header and no trailing metadata. The reader additionally
//! skips blank lines and `#` comments, mirroring the parser in the exercise
//! that consumes these fixtures.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::edge::Edge;

/// Error produced by edge-list file operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// Opening, reading, or writing the file failed.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A line did not hold exactly two decimal integers.
    #[error("line {line} of `{path}` is not `<a> <b>`: `{content}`")]
    Malformed {
        /// Path of the offending file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// The raw line content.
        content: String,
    },
    /// A node identifier was zero; identifiers are 1-based.
    #[error("line {line} of `{path}` names node 0; identifiers start at 1")]
    InvalidNode {
        /// Path of the offending file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
    },
    /// Both endpoints of a line were the same node.
    #[error("line {line} of `{path}` is a self-loop on node {node}")]
    SelfLoop {
        /// Path of the offending file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// The repeated endpoint.
        node: u32,
    },
}

/// Stable codes describing [`EdgeListError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum EdgeListErrorCode {
    /// Opening, reading, or writing the file failed.
    Io,
    /// A line did not hold exactly two decimal integers.
    Malformed,
    /// A node identifier was zero.
    InvalidNode,
    /// Both endpoints of a line were the same node.
    SelfLoop,
}

impl EdgeListErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "EDGE_LIST_IO",
            Self::Malformed => "EDGE_LIST_MALFORMED",
            Self::InvalidNode => "EDGE_LIST_INVALID_NODE",
            Self::SelfLoop => "EDGE_LIST_SELF_LOOP",
        }
    }
}

impl fmt::Display for EdgeListErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EdgeListError {
    /// Retrieve the stable [`EdgeListErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> EdgeListErrorCode {
        match self {
            Self::Io { .. } => EdgeListErrorCode::Io,
            Self::Malformed { .. } => EdgeListErrorCode::Malformed,
            Self::InvalidNode { .. } => EdgeListErrorCode::InvalidNode,
            Self::SelfLoop { .. } => EdgeListErrorCode::SelfLoop,
        }
    }
}

fn io_error(path: &Path, source: io::Error) -> EdgeListError {
    EdgeListError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Writes `edges` to `path`, one `"<smaller> <larger>"` line per edge.
///
/// The file is created or truncated, written through a buffer, and flushed
/// before returning so the handle never outlives the call. Returns the number
/// of lines written. Line order follows the supplied iterator; callers that
/// sample into a set therefore get an unspecified order.
///
/// # Errors
/// Returns [`EdgeListError::Io`] when the file cannot be created or written.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use minigraph_core::{Edge, write_edge_list};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let path = dir.path().join("fixture.txt");
/// let written = write_edge_list(&path, Edge::new(2, 1))?;
/// assert_eq!(written, 1);
/// assert_eq!(std::fs::read_to_string(&path)?, "1 2\n");
/// # Ok(())
/// # }
/// ```
pub fn write_edge_list(
    path: impl AsRef<Path>,
    edges: impl IntoIterator<Item = Edge>,
) -> Result<u64, EdgeListError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| io_error(path, source))?;
    let mut writer = BufWriter::new(file);
    let mut written = 0_u64;
    for edge in edges {
        writeln!(writer, "{edge}").map_err(|source| io_error(path, source))?;
        written += 1;
    }
    writer.flush().map_err(|source| io_error(path, source))?;
    Ok(written)
}

/// Reads the edge list at `path`, returning the edges in file order.
///
/// Blank lines and lines starting with `#` are skipped. Every other line must
/// hold exactly two decimal node identifiers; endpoints are canonicalised, so
/// a file listing `"7 3"` yields the same edge as `"3 7"`. Duplicate pairs are
/// preserved so callers can detect them.
///
/// # Errors
/// Returns [`EdgeListError::Io`] when the file cannot be opened or read,
/// [`EdgeListError::Malformed`] when a line does not hold two integers,
/// [`EdgeListError::InvalidNode`] when an identifier is zero, and
/// [`EdgeListError::SelfLoop`] when both endpoints match.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use minigraph_core::read_edge_list;
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let path = dir.path().join("fixture.txt");
/// std::fs::write(&path, "# comment\n1 2\n\n3 4\n")?;
/// let edges = read_edge_list(&path)?;
/// assert_eq!(edges.len(), 2);
/// # Ok(())
/// # }
/// ```
pub fn read_edge_list(path: impl AsRef<Path>) -> Result<Vec<Edge>, EdgeListError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| io_error(path, source))?;
    let reader = BufReader::new(file);
    let mut edges = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| io_error(path, source))?;
        let number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        edges.push(parse_line(path, number, trimmed)?);
    }
    Ok(edges)
}

fn parse_line(path: &Path, number: usize, line: &str) -> Result<Edge, EdgeListError> {
    let malformed = || EdgeListError::Malformed {
        path: path.to_path_buf(),
        line: number,
        content: line.to_owned(),
    };
    let mut fields = line.split_whitespace();
    let (u, v) = match (fields.next(), fields.next(), fields.next()) {
        (Some(u), Some(v), None) => (u, v),
        _ => return Err(malformed()),
    };
    let u: u32 = u.parse().map_err(|_| malformed())?;
    let v: u32 = v.parse().map_err(|_| malformed())?;
    if u == 0 || v == 0 {
        return Err(EdgeListError::InvalidNode {
            path: path.to_path_buf(),
            line: number,
        });
    }
    Edge::new(u, v).ok_or(EdgeListError::SelfLoop {
        path: path.to_path_buf(),
        line: number,
        node: u,
    })
}
