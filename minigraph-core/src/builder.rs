//! Builder for configuring graph generation.
//!
//! Validates density and node-count parameters before constructing
//! [`Generator`] instances, clamping out-of-range densities so the sampling
//! loop always terminates.

use tracing::warn;

use crate::{Result, error::GeneratorError, generator::Generator};

const DEFAULT_NODES: u32 = 20;
const DEFAULT_DENSITY: f64 = 0.2;

/// Configures and constructs [`Generator`] instances.
///
/// Defaults match the reference fixture: 20 nodes at density 0.2, unseeded.
///
/// # Examples
/// ```
/// use minigraph_core::GeneratorBuilder;
///
/// let generator = GeneratorBuilder::new()
///     .with_nodes(10)
///     .with_density(0.5)
///     .with_seed(42)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.nodes(), 10);
/// assert_eq!(generator.target_edges(), 22);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    nodes: u32,
    density: f64,
    seed: Option<u64>,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            nodes: DEFAULT_NODES,
            density: DEFAULT_DENSITY,
            seed: None,
        }
    }
}

impl GeneratorBuilder {
    /// Creates a builder populated with the reference fixture parameters.
    ///
    /// # Examples
    /// ```
    /// use minigraph_core::GeneratorBuilder;
    ///
    /// let builder = GeneratorBuilder::new();
    /// assert_eq!(builder.nodes(), 20);
    /// assert_eq!(builder.density(), 0.2);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the node count.
    ///
    /// Counts below 2 are accepted and yield an empty edge list.
    #[must_use]
    pub fn with_nodes(mut self, nodes: u32) -> Self {
        self.nodes = nodes;
        self
    }

    /// Returns the configured node count.
    #[must_use]
    pub fn nodes(&self) -> u32 {
        self.nodes
    }

    /// Overrides the density, the fraction of the complete graph's edges to
    /// include. Nominally in `[0, 1]`; finite values outside that range are
    /// clamped by [`Self::build`].
    #[must_use]
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Returns the configured density.
    #[must_use]
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Fixes the sampling seed so the edge *content* is reproducible across
    /// runs. Line order in the output file stays unspecified either way.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration and constructs a [`Generator`].
    ///
    /// Finite densities outside `[0, 1]` are clamped to the range with a
    /// warning rather than rejected; a density above 1 would otherwise ask
    /// for more distinct edges than exist and the sampling loop could never
    /// finish. Node counts below 2 are kept as supplied and produce an empty
    /// edge list.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidDensity`] when the density is NaN or
    /// infinite.
    ///
    /// # Examples
    /// ```
    /// use minigraph_core::GeneratorBuilder;
    ///
    /// let generator = GeneratorBuilder::new()
    ///     .with_nodes(4)
    ///     .with_density(1.5)
    ///     .build()
    ///     .expect("out-of-range density is clamped, not rejected");
    /// assert_eq!(generator.density(), 1.0);
    /// assert_eq!(generator.target_edges(), generator.max_edges());
    /// ```
    pub fn build(self) -> Result<Generator> {
        if !self.density.is_finite() {
            return Err(GeneratorError::InvalidDensity { got: self.density });
        }
        let density = self.density.clamp(0.0, 1.0);
        if density != self.density {
            warn!(
                requested = self.density,
                effective = density,
                "density outside [0, 1]; clamping to the valid range"
            );
        }
        if self.nodes < 2 {
            warn!(nodes = self.nodes, "fewer than two nodes; no edges are possible");
        }
        Ok(Generator::new(self.nodes, density, self.seed))
    }
}
