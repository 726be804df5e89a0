//! End-to-end tests for graph generation and the edge-list file contract.

use std::collections::HashSet;

use minigraph_core::{Edge, GeneratorBuilder, read_edge_list};
use rstest::rstest;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[rstest]
#[case::reference(20, 0.2)]
#[case::sparse(40, 0.05)]
#[case::dense(12, 0.9)]
#[case::complete(8, 1.0)]
fn written_file_honours_the_format_contract(#[case] nodes: u32, #[case] density: f64) -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("graph.txt");
    let generator = GeneratorBuilder::new()
        .with_nodes(nodes)
        .with_density(density)
        .with_seed(31)
        .build()?;
    let summary = generator.generate_to(&path)?;

    let content = std::fs::read_to_string(&path)?;
    assert_eq!(content.lines().count() as u64, generator.target_edges());
    for line in content.lines() {
        let fields: Vec<&str> = line.split(' ').collect();
        assert_eq!(fields.len(), 2, "line `{line}` must hold two fields");
        let a: u32 = fields[0].parse()?;
        let b: u32 = fields[1].parse()?;
        assert!(a >= 1 && a < b && b <= nodes, "line `{line}` breaks the format");
    }

    // Re-reading into a set must preserve the count: set semantics.
    let edges = read_edge_list(&path)?;
    let unique: HashSet<Edge> = edges.iter().copied().collect();
    assert_eq!(unique.len() as u64, summary.written);
    Ok(())
}

#[test]
fn zero_density_writes_an_empty_file() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("graph.txt");
    GeneratorBuilder::new()
        .with_nodes(20)
        .with_density(0.0)
        .build()?
        .generate_to(&path)?;
    assert_eq!(std::fs::read_to_string(&path)?, "");
    Ok(())
}

#[test]
fn full_density_writes_the_complete_graph() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("graph.txt");
    GeneratorBuilder::new()
        .with_nodes(7)
        .with_density(1.0)
        .with_seed(1)
        .build()?
        .generate_to(&path)?;
    let edges: HashSet<Edge> = read_edge_list(&path)?.into_iter().collect();
    assert_eq!(edges.len(), 21);
    for u in 1..=7_u32 {
        for v in (u + 1)..=7 {
            let edge = Edge::new(u, v).ok_or("pair must be distinct")?;
            assert!(edges.contains(&edge), "missing edge {edge}");
        }
    }
    Ok(())
}

#[test]
fn two_nodes_at_full_density_write_exactly_one_two() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("graph.txt");
    GeneratorBuilder::new()
        .with_nodes(2)
        .with_density(1.0)
        .build()?
        .generate_to(&path)?;
    assert_eq!(std::fs::read_to_string(&path)?, "1 2\n");
    Ok(())
}

#[test]
fn generate_overwrites_a_previous_fixture() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("graph.txt");
    std::fs::write(&path, "999 1000\n")?;
    GeneratorBuilder::new()
        .with_nodes(3)
        .with_density(1.0)
        .build()?
        .generate_to(&path)?;
    let edges = read_edge_list(&path)?;
    assert_eq!(edges.len(), 3);
    assert!(!edges.contains(&Edge::new(999, 1000).ok_or("pair must be distinct")?));
    Ok(())
}

#[test]
fn seeded_runs_agree_on_content_not_necessarily_order() -> TestResult {
    let dir = TempDir::new()?;
    let first_path = dir.path().join("first.txt");
    let second_path = dir.path().join("second.txt");
    let build = || {
        GeneratorBuilder::new()
            .with_nodes(18)
            .with_density(0.35)
            .with_seed(2024)
            .build()
    };
    build()?.generate_to(&first_path)?;
    build()?.generate_to(&second_path)?;
    let first: HashSet<Edge> = read_edge_list(&first_path)?.into_iter().collect();
    let second: HashSet<Edge> = read_edge_list(&second_path)?.into_iter().collect();
    assert_eq!(first, second);
    Ok(())
}
