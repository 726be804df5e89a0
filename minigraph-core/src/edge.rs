//! Canonical edge representation for simple undirected graphs.

use std::cmp::Ordering;
use std::fmt;

/// An unordered pair of distinct 1-based node identifiers.
///
/// The endpoints are stored with the smaller identifier first so that equal
/// pairs hash and compare identically regardless of the order they were
/// supplied in. Self-loops are not representable.
///
/// # Examples
/// ```
/// use minigraph_core::Edge;
///
/// let edge = Edge::new(7, 3).expect("distinct endpoints form an edge");
/// assert_eq!((edge.smaller(), edge.larger()), (3, 7));
/// assert_eq!(Edge::new(3, 7), Some(edge));
/// assert!(Edge::new(4, 4).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    smaller: u32,
    larger: u32,
}

impl Edge {
    /// Creates the edge between `u` and `v`, ordering the endpoints.
    ///
    /// Returns `None` when `u == v`.
    #[must_use]
    pub fn new(u: u32, v: u32) -> Option<Self> {
        match u.cmp(&v) {
            Ordering::Less => Some(Self {
                smaller: u,
                larger: v,
            }),
            Ordering::Equal => None,
            Ordering::Greater => Some(Self {
                smaller: v,
                larger: u,
            }),
        }
    }

    /// Returns the smaller endpoint.
    #[must_use]
    pub const fn smaller(self) -> u32 {
        self.smaller
    }

    /// Returns the larger endpoint.
    #[must_use]
    pub const fn larger(self) -> u32 {
        self.larger
    }
}

impl fmt::Display for Edge {
    /// Formats the edge as the file line `"<smaller> <larger>"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.smaller, self.larger)
    }
}

impl PartialEq<(u32, u32)> for Edge {
    fn eq(&self, other: &(u32, u32)) -> bool {
        (self.smaller, self.larger) == *other
    }
}
