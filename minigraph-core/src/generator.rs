//! Random graph generation via rejection sampling.
//!
//! Provides the [`Generator`] entry point that samples a uniformly-random
//! simple undirected graph and writes it out as an edge list.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rand::{SeedableRng, rngs::SmallRng, seq::index};
use tracing::{Span, field, info, instrument};

use crate::{
    Result,
    edge::Edge,
    edgelist::write_edge_list,
};

/// Samples random simple undirected graphs.
///
/// Construct one through [`crate::GeneratorBuilder`], which validates the
/// density and guarantees the sampling loop can terminate.
///
/// # Examples
/// ```
/// use minigraph_core::GeneratorBuilder;
///
/// let generator = GeneratorBuilder::new()
///     .with_nodes(6)
///     .with_density(1.0)
///     .with_seed(11)
///     .build()
///     .expect("builder configuration is valid");
/// let edges = generator.sample();
/// assert_eq!(edges.len(), 15);
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    nodes: u32,
    density: f64,
    seed: Option<u64>,
}

/// Summarises the outcome of a [`Generator::generate_to`] invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    /// Path of the written edge list.
    pub path: PathBuf,
    /// Node count the graph was sampled over.
    pub nodes: u32,
    /// Effective density after clamping.
    pub density: f64,
    /// Edge count derived from the node count and density.
    pub target_edges: u64,
    /// Lines actually written; always equals `target_edges`.
    pub written: u64,
}

impl Generator {
    pub(crate) fn new(nodes: u32, density: f64, seed: Option<u64>) -> Self {
        Self {
            nodes,
            density,
            seed,
        }
    }

    /// Returns the node count the graph is sampled over.
    #[must_use]
    pub fn nodes(&self) -> u32 {
        self.nodes
    }

    /// Returns the effective density after clamping.
    #[must_use]
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Returns the sampling seed, if one was fixed.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the edge count of the complete graph on this many nodes,
    /// `nodes * (nodes - 1) / 2`. Zero when fewer than two nodes exist.
    ///
    /// # Examples
    /// ```
    /// use minigraph_core::GeneratorBuilder;
    ///
    /// let generator = GeneratorBuilder::new().with_nodes(20).build().expect("valid");
    /// assert_eq!(generator.max_edges(), 190);
    /// ```
    #[must_use]
    pub fn max_edges(&self) -> u64 {
        if self.nodes < 2 {
            return 0;
        }
        let nodes = u64::from(self.nodes);
        nodes * (nodes - 1) / 2
    }

    /// Returns the number of edges to sample,
    /// `floor(max_edges * density)`.
    ///
    /// # Examples
    /// ```
    /// use minigraph_core::GeneratorBuilder;
    ///
    /// let generator = GeneratorBuilder::new().build().expect("valid");
    /// assert_eq!(generator.target_edges(), 38);
    /// ```
    #[must_use]
    pub fn target_edges(&self) -> u64 {
        (self.max_edges() as f64 * self.density).floor() as u64
    }

    /// Samples the edge set by rejection: draw two distinct nodes uniformly
    /// without replacement, canonicalise the pair, and keep it unless it was
    /// already drawn, until the target count is reached.
    ///
    /// Termination relies on `target_edges() <= max_edges()`, which the
    /// builder guarantees by clamping the density; near density 1 the number
    /// of draws follows the usual coupon-collector growth. Iteration order of
    /// the returned set is unspecified; only its content is determined by the
    /// seed.
    #[must_use]
    pub fn sample(&self) -> HashSet<Edge> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let target = self.target_edges() as usize;
        let mut edges = HashSet::with_capacity(target);
        while edges.len() < target {
            let pair = index::sample(&mut rng, self.nodes as usize, 2);
            let u = pair.index(0) as u32 + 1;
            let v = pair.index(1) as u32 + 1;
            if let Some(edge) = Edge::new(u, v) {
                edges.insert(edge);
            }
        }
        edges
    }

    /// Samples the graph and writes it to `path`, one edge per line.
    ///
    /// The file is created or truncated. On success the returned summary
    /// names the path and the counts the CLI reports.
    ///
    /// # Errors
    /// Returns [`crate::GeneratorError::EdgeList`] when the file cannot be
    /// written.
    ///
    /// # Examples
    /// ```
    /// # use std::error::Error;
    /// # use minigraph_core::GeneratorBuilder;
    /// # use tempfile::TempDir;
    /// #
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// let dir = TempDir::new()?;
    /// let path = dir.path().join("minigraph.txt");
    /// let generator = GeneratorBuilder::new()
    ///     .with_nodes(2)
    ///     .with_density(1.0)
    ///     .build()?;
    /// let summary = generator.generate_to(&path)?;
    /// assert_eq!(summary.written, 1);
    /// assert_eq!(std::fs::read_to_string(&path)?, "1 2\n");
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(
        name = "generator.generate",
        err,
        skip(self, path),
        fields(path = field::Empty, nodes = field::Empty, target_edges = field::Empty),
    )]
    pub fn generate_to(&self, path: impl AsRef<Path>) -> Result<GenerationSummary> {
        let path = path.as_ref();
        let target_edges = self.target_edges();
        let span = Span::current();
        span.record("path", field::display(path.display()));
        span.record("nodes", field::display(self.nodes));
        span.record("target_edges", field::display(target_edges));

        let edges = self.sample();
        let written = write_edge_list(path, edges.into_iter())?;
        info!(
            path = %path.display(),
            edges = written,
            "graph written"
        );
        Ok(GenerationSummary {
            path: path.to_path_buf(),
            nodes: self.nodes,
            density: self.density,
            target_edges,
            written,
        })
    }
}
