//! Command implementations and argument parsing for the minigraph CLI.

use std::collections::HashSet;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use minigraph_core::{
    Edge, EdgeListError, GenerationSummary, GeneratorBuilder, GeneratorError, read_edge_list,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_NODES: u32 = 20;
const DEFAULT_DENSITY: f64 = 0.2;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "minigraph",
    about = "Generate random edge-list fixtures for graph exercises."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Sample a random graph and write its edge list.
    Generate(GenerateArgs),
    /// Validate an existing edge-list file.
    Check(CheckArgs),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    /// Path of the edge-list file to create or overwrite.
    pub output: PathBuf,

    /// Number of nodes in the generated graph.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: u32,

    /// Fraction of the complete graph's edges to include, nominally in [0, 1].
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Seed for reproducible edge content (line order stays unspecified).
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options accepted by the `check` command.
#[derive(Debug, Args, Clone)]
pub struct CheckArgs {
    /// Path of the edge-list file to validate.
    pub path: PathBuf,

    /// Upper bound for node identifiers; ids outside [1, NODES] fail the check.
    #[arg(long)]
    pub nodes: Option<u32>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Graph generation failed.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// Reading or parsing an edge list failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// An edge list repeated an unordered pair.
    #[error("`{path}` repeats the edge `{edge}`")]
    DuplicateEdge {
        /// Path of the offending file.
        path: PathBuf,
        /// The repeated edge.
        edge: Edge,
    },
    /// An edge endpoint exceeded the expected node count.
    #[error("`{path}` names node {node}, outside 1..={nodes}")]
    NodeOutOfRange {
        /// Path of the offending file.
        path: PathBuf,
        /// The out-of-range endpoint.
        node: u32,
        /// The expected node-count bound.
        nodes: u32,
    },
}

impl CliError {
    /// Returns the stable machine-readable code logged next to the error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Generator(err) => err.code().as_str(),
            Self::EdgeList(err) => err.code().as_str(),
            Self::DuplicateEdge { .. } => "CLI_DUPLICATE_EDGE",
            Self::NodeOutOfRange { .. } => "CLI_NODE_OUT_OF_RANGE",
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum CommandSummary {
    /// A graph was sampled and written.
    Generated(GenerationSummary),
    /// An edge list was read and validated.
    Checked(CheckSummary),
}

/// Summarises a successful `check` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    /// Path of the validated edge list.
    pub path: PathBuf,
    /// Number of edges the file holds.
    pub edges: u64,
    /// Highest node identifier seen; zero for an empty file.
    pub max_node: u32,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation or validation fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use minigraph_cli::cli::{Cli, Command, GenerateArgs, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let output = dir.path().join("fixture.txt");
/// let cli = Cli {
///     command: Command::Generate(GenerateArgs {
///         output: output.clone(),
///         nodes: 6,
///         density: 1.0,
///         seed: Some(7),
///     }),
/// };
/// run_cli(cli)?;
/// assert_eq!(std::fs::read_to_string(&output)?.lines().count(), 15);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<CommandSummary, CliError> {
    match cli.command {
        Command::Generate(args) => {
            Span::current().record("command", field::display("generate"));
            run_generate(args).map(CommandSummary::Generated)
        }
        Command::Check(args) => {
            Span::current().record("command", field::display("check"));
            run_check(args).map(CommandSummary::Checked)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(args),
    fields(output = field::Empty, nodes = field::Empty, density = field::Empty),
)]
pub(super) fn run_generate(args: GenerateArgs) -> Result<GenerationSummary, CliError> {
    let GenerateArgs {
        output,
        nodes,
        density,
        seed,
    } = args;
    let span = Span::current();
    span.record("output", field::display(output.display()));
    span.record("nodes", field::display(nodes));
    span.record("density", field::display(density));

    let mut builder = GeneratorBuilder::new().with_nodes(nodes).with_density(density);
    if let Some(seed) = seed {
        builder = builder.with_seed(seed);
    }
    let generator = builder.build()?;
    let summary = generator.generate_to(&output)?;
    info!(
        path = %output.display(),
        edges = summary.written,
        "generation completed"
    );
    Ok(summary)
}

#[instrument(
    name = "cli.check",
    err,
    skip(args),
    fields(path = field::Empty, nodes = field::Empty),
)]
pub(super) fn run_check(args: CheckArgs) -> Result<CheckSummary, CliError> {
    let CheckArgs { path, nodes } = args;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    if let Some(nodes) = nodes {
        span.record("nodes", field::display(nodes));
    }

    let edges = read_edge_list(&path)?;
    let mut seen = HashSet::with_capacity(edges.len());
    let mut max_node = 0;
    for edge in &edges {
        if !seen.insert(*edge) {
            return Err(CliError::DuplicateEdge {
                path: path.clone(),
                edge: *edge,
            });
        }
        if let Some(nodes) = nodes {
            if edge.larger() > nodes {
                return Err(CliError::NodeOutOfRange {
                    path: path.clone(),
                    node: edge.larger(),
                    nodes,
                });
            }
        }
        max_node = max_node.max(edge.larger());
    }
    info!(
        path = %path.display(),
        edges = edges.len(),
        "check completed"
    );
    Ok(CheckSummary {
        path,
        edges: edges.len() as u64,
        max_node,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use std::path::PathBuf;
/// # use minigraph_cli::cli::{CheckSummary, CommandSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = CommandSummary::Checked(CheckSummary {
///     path: PathBuf::from("fixture.txt"),
///     edges: 3,
///     max_node: 5,
/// });
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let rendered = String::from_utf8(buffer.into_inner())?;
/// assert!(rendered.starts_with("edge list fixture.txt is well formed"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &CommandSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        CommandSummary::Generated(generated) => {
            writeln!(writer, "graph written to {}", generated.path.display())?;
            writeln!(writer, "nodes: {}", generated.nodes)?;
            writeln!(writer, "density: {}", generated.density)?;
            writeln!(writer, "edges: {}", generated.written)?;
        }
        CommandSummary::Checked(checked) => {
            writeln!(writer, "edge list {} is well formed", checked.path.display())?;
            writeln!(writer, "edges: {}", checked.edges)?;
            writeln!(writer, "highest node id: {}", checked.max_node)?;
        }
    }
    Ok(())
}
