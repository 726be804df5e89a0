//! Unit tests for the CLI commands and edge-list validation helpers.

use super::commands::{run_check, run_generate};
use super::{
    CheckArgs, CheckSummary, Cli, CliError, Command, CommandSummary, GenerateArgs, render_summary,
    run_cli,
};

use std::collections::HashSet;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use clap::Parser;
use minigraph_core::GeneratorError;
use rstest::rstest;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn temp_dir() -> TempDir {
    TempDir::new().expect("temporary directory must be creatable")
}

fn generate_args(output: PathBuf, nodes: u32, density: f64, seed: u64) -> GenerateArgs {
    GenerateArgs {
        output,
        nodes,
        density,
        seed: Some(seed),
    }
}

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("fixture must be writable");
    path
}

fn read_pairs(path: &Path) -> Vec<(u32, u32)> {
    std::fs::read_to_string(path)
        .expect("output must be readable")
        .lines()
        .map(|line| {
            let mut fields = line.split(' ');
            let a = fields
                .next()
                .and_then(|f| f.parse().ok())
                .expect("first field must be an integer");
            let b = fields
                .next()
                .and_then(|f| f.parse().ok())
                .expect("second field must be an integer");
            assert!(fields.next().is_none(), "line must hold exactly two fields");
            (a, b)
        })
        .collect()
}

#[test]
fn generate_defaults_match_the_reference_invocation() -> TestResult {
    let cli = Cli::try_parse_from(["minigraph", "generate", "data/minigraph3.txt"])?;
    let Command::Generate(args) = cli.command else {
        panic!("expected the generate command");
    };
    assert_eq!(args.output, PathBuf::from("data/minigraph3.txt"));
    assert_eq!(args.nodes, 20);
    assert_eq!(args.density, 0.2);
    assert_eq!(args.seed, None);
    Ok(())
}

#[test]
fn generate_flags_override_the_defaults() -> TestResult {
    let cli = Cli::try_parse_from([
        "minigraph",
        "generate",
        "out.txt",
        "--nodes",
        "50",
        "--density",
        "0.8",
        "--seed",
        "9",
    ])?;
    let Command::Generate(args) = cli.command else {
        panic!("expected the generate command");
    };
    assert_eq!((args.nodes, args.density, args.seed), (50, 0.8, Some(9)));
    Ok(())
}

#[rstest]
#[case::reference(20, 0.2, 38)]
#[case::smallest_complete(2, 1.0, 1)]
#[case::half(10, 0.5, 22)]
#[case::empty(20, 0.0, 0)]
fn generate_writes_the_floored_edge_count(
    #[case] nodes: u32,
    #[case] density: f64,
    #[case] expected: u64,
) -> TestResult {
    let dir = temp_dir();
    let output = dir.path().join("graph.txt");
    let summary = run_generate(generate_args(output.clone(), nodes, density, 1))?;
    assert_eq!(summary.target_edges, expected);
    assert_eq!(summary.written, expected);
    assert_eq!(read_pairs(&output).len() as u64, expected);
    Ok(())
}

#[test]
fn generated_lines_are_ordered_deduplicated_and_in_range() -> TestResult {
    let dir = temp_dir();
    let output = dir.path().join("graph.txt");
    run_generate(generate_args(output.clone(), 15, 0.6, 23))?;
    let pairs = read_pairs(&output);
    let unique: HashSet<_> = pairs.iter().copied().collect();
    assert_eq!(unique.len(), pairs.len(), "no unordered pair may repeat");
    for (a, b) in pairs {
        assert!(a >= 1 && a < b && b <= 15, "line `{a} {b}` breaks the format");
    }
    Ok(())
}

#[test]
fn two_nodes_at_full_density_write_exactly_one_two() -> TestResult {
    let dir = temp_dir();
    let output = dir.path().join("graph.txt");
    run_generate(generate_args(output.clone(), 2, 1.0, 5))?;
    assert_eq!(std::fs::read_to_string(&output)?, "1 2\n");
    Ok(())
}

#[test]
fn same_seed_reproduces_the_edge_content() -> TestResult {
    let dir = temp_dir();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    run_generate(generate_args(first.clone(), 30, 0.4, 77))?;
    run_generate(generate_args(second.clone(), 30, 0.4, 77))?;
    let first: HashSet<_> = read_pairs(&first).into_iter().collect();
    let second: HashSet<_> = read_pairs(&second).into_iter().collect();
    assert_eq!(first, second);
    Ok(())
}

#[rstest]
#[case::above_one(2.5, 45)]
#[case::negative(-1.0, 0)]
fn out_of_range_density_is_clamped_not_hung(
    #[case] density: f64,
    #[case] expected: u64,
) -> TestResult {
    let dir = temp_dir();
    let output = dir.path().join("graph.txt");
    let summary = run_generate(generate_args(output, 10, density, 3))?;
    assert_eq!(summary.written, expected);
    Ok(())
}

#[rstest]
#[case(0)]
#[case(1)]
fn degenerate_node_counts_write_an_empty_file(#[case] nodes: u32) -> TestResult {
    let dir = temp_dir();
    let output = dir.path().join("graph.txt");
    let summary = run_generate(generate_args(output.clone(), nodes, 1.0, 3))?;
    assert_eq!(summary.written, 0);
    assert_eq!(std::fs::read_to_string(&output)?, "");
    Ok(())
}

#[test]
fn non_finite_density_is_rejected_with_a_stable_code() {
    let dir = temp_dir();
    let output = dir.path().join("graph.txt");
    let err = run_generate(generate_args(output, 10, f64::NAN, 3))
        .expect_err("NaN density must fail");
    assert!(matches!(
        err,
        CliError::Generator(GeneratorError::InvalidDensity { .. })
    ));
    assert_eq!(err.code(), "GENERATOR_INVALID_DENSITY");
}

#[test]
fn unwritable_output_paths_surface_io_errors() {
    let dir = temp_dir();
    let output = dir.path().join("missing").join("graph.txt");
    let err = run_generate(generate_args(output, 10, 0.5, 3))
        .expect_err("missing parent directory must fail");
    assert!(matches!(err, CliError::Generator(_)));
    assert_eq!(err.code(), "GENERATOR_EDGE_LIST_FAILURE");
}

#[test]
fn check_accepts_generated_output() -> TestResult {
    let dir = temp_dir();
    let output = dir.path().join("graph.txt");
    run_generate(generate_args(output.clone(), 12, 0.5, 8))?;
    let summary = run_check(CheckArgs {
        path: output,
        nodes: Some(12),
    })?;
    assert_eq!(summary.edges, 33);
    assert!(summary.max_node <= 12);
    Ok(())
}

#[test]
fn check_tolerates_comments_and_blank_lines() -> TestResult {
    let dir = temp_dir();
    let path = write_fixture(&dir, "graph.txt", "# fixture\n\n1 2\n2 3\n");
    let summary = run_check(CheckArgs { path, nodes: None })?;
    assert_eq!(summary.edges, 2);
    assert_eq!(summary.max_node, 3);
    Ok(())
}

#[test]
fn check_reports_empty_files_as_zero_edges() -> TestResult {
    let dir = temp_dir();
    let path = write_fixture(&dir, "graph.txt", "");
    let summary = run_check(CheckArgs { path, nodes: Some(20) })?;
    assert_eq!(summary, CheckSummary {
        path: dir.path().join("graph.txt"),
        edges: 0,
        max_node: 0,
    });
    Ok(())
}

#[test]
fn check_rejects_duplicate_pairs_in_either_orientation() {
    let dir = temp_dir();
    let path = write_fixture(&dir, "graph.txt", "1 2\n2 1\n");
    let err = run_check(CheckArgs { path, nodes: None }).expect_err("duplicate must fail");
    assert!(matches!(err, CliError::DuplicateEdge { .. }));
    assert_eq!(err.code(), "CLI_DUPLICATE_EDGE");
}

#[test]
fn check_rejects_self_loops() {
    let dir = temp_dir();
    let path = write_fixture(&dir, "graph.txt", "4 4\n");
    let err = run_check(CheckArgs { path, nodes: None }).expect_err("self-loop must fail");
    assert_eq!(err.code(), "EDGE_LIST_SELF_LOOP");
}

#[test]
fn check_rejects_malformed_lines() {
    let dir = temp_dir();
    let path = write_fixture(&dir, "graph.txt", "1 2\nnot an edge\n");
    let err = run_check(CheckArgs { path, nodes: None }).expect_err("malformed must fail");
    assert_eq!(err.code(), "EDGE_LIST_MALFORMED");
}

#[test]
fn check_rejects_nodes_beyond_the_bound() {
    let dir = temp_dir();
    let path = write_fixture(&dir, "graph.txt", "1 2\n3 21\n");
    let err = run_check(CheckArgs {
        path,
        nodes: Some(20),
    })
    .expect_err("out-of-range node must fail");
    match err {
        CliError::NodeOutOfRange { node, nodes, .. } => assert_eq!((node, nodes), (21, 20)),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn run_cli_routes_to_the_requested_command() -> TestResult {
    let dir = temp_dir();
    let output = dir.path().join("graph.txt");
    let generated = run_cli(Cli {
        command: Command::Generate(generate_args(output.clone(), 5, 1.0, 2)),
    })?;
    assert!(matches!(generated, CommandSummary::Generated(_)));
    let checked = run_cli(Cli {
        command: Command::Check(CheckArgs {
            path: output,
            nodes: Some(5),
        }),
    })?;
    assert!(matches!(checked, CommandSummary::Checked(_)));
    Ok(())
}

#[test]
fn render_summary_names_the_output_path() -> TestResult {
    let dir = temp_dir();
    let output = dir.path().join("graph.txt");
    let summary = run_cli(Cli {
        command: Command::Generate(generate_args(output.clone(), 4, 1.0, 1)),
    })?;
    let mut buffer = Cursor::new(Vec::new());
    render_summary(&summary, &mut buffer)?;
    let rendered = String::from_utf8(buffer.into_inner())?;
    assert!(rendered.starts_with(&format!("graph written to {}", output.display())));
    assert!(rendered.contains("edges: 6"));
    Ok(())
}
