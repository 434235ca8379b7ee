//! Integration tests for the matgraph CLI.
//!
//! These tests run the built binary against temporary dataset directories.

use rstest::{fixture, rstest};
use tempfile::TempDir;

mod common;
use common::{
    run_matgraph_in_dir, run_matgraph_with_input, stderr, stdout, write_dataset,
};

// ============================================================================
// Test Fixtures
// ============================================================================

/// A working directory with a `datasets/` folder of matrix files
#[fixture]
fn workspace() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let datasets = temp.path().join("datasets");
    std::fs::create_dir(&datasets).expect("Failed to create datasets dir");

    write_dataset(&datasets, "path.txt", "0 1 0\n1 0 1\n0 1 0\n");
    write_dataset(&datasets, "one_way.txt", "0 1\n0 0\n");
    write_dataset(
        &datasets,
        "triangles.txt",
        "0 1 1 0 0 0\n\
         1 0 1 0 0 0\n\
         1 1 0 0 0 0\n\
         0 0 0 0 1 1\n\
         0 0 0 1 0 1\n\
         0 0 0 1 1 0\n",
    );
    write_dataset(&datasets, "ragged.txt", "0 1 0\n1 0\n0 1 0\n");
    temp
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_cli_help() {
    let temp = TempDir::new().unwrap();
    let output = run_matgraph_in_dir(temp.path(), &["--help"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("matgraph"));
    assert!(out.contains("Usage:"));
    assert!(out.contains("analyze"));
}

#[test]
fn test_cli_version() {
    let temp = TempDir::new().unwrap();
    let output = run_matgraph_in_dir(temp.path(), &["--version"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// One-shot Commands
// ============================================================================

#[rstest]
fn test_show_prints_adjacency(workspace: TempDir) {
    let output = run_matgraph_in_dir(workspace.path(), &["show", "datasets/path.txt"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Graph (Undirected) with 3 vertices:"));
    assert!(out.contains("1: 0->2->"));
}

#[rstest]
fn test_bfs_text_table(workspace: TempDir) {
    let output = run_matgraph_in_dir(
        workspace.path(),
        &["bfs", "datasets/path.txt", "--start", "0", "--to", "2"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("BFS order: [0, 1, 2]"));
    assert!(out.contains("| Vertex | Distance | Parent |"));
    assert!(out.contains("Path to 2: 0 -> 1 -> 2"));
}

#[rstest]
fn test_bfs_json(workspace: TempDir) {
    let output = run_matgraph_in_dir(
        workspace.path(),
        &["--json", "bfs", "datasets/one_way.txt", "--start", "1"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["algorithm"], "bfs");
    assert_eq!(value["start"], 1);
    assert_eq!(value["order"], serde_json::json!([1, 0]));
    assert_eq!(value["distances"], serde_json::json!([0, 0]));
    assert_eq!(value["parents"], serde_json::json!([null, null]));
}

#[rstest]
fn test_dfs_reports_restart(workspace: TempDir) {
    let output = run_matgraph_in_dir(
        workspace.path(),
        &["dfs", "datasets/triangles.txt", "--start", "4"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("DFS order: [4, 3, 5, 0, 1, 2]"));
    assert!(out.contains("restarted from unvisited vertices [0]"));
}

#[rstest]
fn test_analyze_undirected_json(workspace: TempDir) {
    let output = run_matgraph_in_dir(
        workspace.path(),
        &["analyze", "datasets/triangles.txt", "--json"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["directed"], false);
    assert_eq!(value["has_cycle"], true);
    assert_eq!(value["components"], 2);
}

#[rstest]
fn test_analyze_directed_text(workspace: TempDir) {
    let output = run_matgraph_in_dir(workspace.path(), &["analyze", "datasets/one_way.txt"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("no cycles"));
    assert!(out.contains("skipped (the graph is directed)"));
}

#[rstest]
#[case::bfs("bfs")]
#[case::dfs("dfs")]
fn test_out_of_range_start_fails(workspace: TempDir, #[case] command: &str) {
    let output = run_matgraph_in_dir(
        workspace.path(),
        &[command, "datasets/path.txt", "--start", "3"],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid start vertex 3: must be between 0 and 2"));
    assert!(stdout(&output).is_empty());
}

#[rstest]
fn test_non_square_matrix_fails(workspace: TempDir) {
    let output = run_matgraph_in_dir(workspace.path(), &["show", "datasets/ragged.txt"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("matrix is not square: row 1 has 2 values, expected 3"));
}

#[rstest]
fn test_missing_file_fails_with_cause(workspace: TempDir) {
    let output = run_matgraph_in_dir(workspace.path(), &["analyze", "datasets/missing.txt"]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("failed to read"));
    assert!(err.contains("caused by"));
}

// ============================================================================
// Datasets and Configuration
// ============================================================================

#[rstest]
fn test_list_datasets_sorted(workspace: TempDir) {
    let output = run_matgraph_in_dir(workspace.path(), &["list"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains(" [0] one_way.txt"));
    assert!(out.contains(" [1] path.txt"));
    assert!(out.contains(" [2] ragged.txt"));
    assert!(out.contains(" [3] triangles.txt"));
}

#[test]
fn test_list_falls_back_to_working_dir() {
    let temp = TempDir::new().unwrap();
    write_dataset(temp.path(), "here.txt", "0\n");

    let output = run_matgraph_in_dir(temp.path(), &["list", "--json"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let datasets = value["datasets"].as_array().unwrap();
    assert_eq!(datasets.len(), 1);
    assert!(datasets[0].as_str().unwrap().ends_with("here.txt"));
}

#[test]
fn test_list_empty_dir_fails() {
    let temp = TempDir::new().unwrap();
    let output = run_matgraph_in_dir(temp.path(), &["list"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("no dataset files found"));
}

#[test]
fn test_config_file_selects_dir_and_extension() {
    let temp = TempDir::new().unwrap();
    let graphs = temp.path().join("graphs");
    std::fs::create_dir(&graphs).unwrap();
    write_dataset(&graphs, "cycle.mat", "0 1\n1 0\n");
    write_dataset(&graphs, "ignored.txt", "0\n");
    write_dataset(
        temp.path(),
        "matgraph.yaml",
        "datasets-dir: graphs\nextension: mat\n",
    );

    let output = run_matgraph_in_dir(temp.path(), &["list"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("cycle.mat"));
    assert!(!out.contains("ignored.txt"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();
    let output = run_matgraph_in_dir(temp.path(), &["--config", "nope.yaml", "list"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("configuration error"));
}

// ============================================================================
// Interactive Mode
// ============================================================================

#[rstest]
fn test_interactive_session_over_stdin(workspace: TempDir) {
    // load triangles.txt, BFS from 0, analyze, exit
    let output = run_matgraph_with_input(workspace.path(), &[], "1\n3\n2\n0\n4\n6\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Loaded triangles.txt"));
    assert!(out.contains("BFS order: [0, 1, 2, 3, 4, 5]"));
    assert!(!out.contains("INF"));
    assert!(out.contains("2 connected components"));
    assert!(out.ends_with("Goodbye.\n"));
}

#[rstest]
fn test_interactive_reports_bad_dataset_and_continues(workspace: TempDir) {
    let output = run_matgraph_with_input(
        workspace.path(),
        &["interactive"],
        "1\n2\n5\n1\n1\n5\n",
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("ragged.txt is not a valid adjacency matrix"));
    assert!(out.contains("load a graph first"));
    assert!(out.contains("Graph (Undirected) with 3 vertices:"));
}

#[rstest]
fn test_interactive_ends_on_closed_stdin(workspace: TempDir) {
    let output = run_matgraph_with_input(workspace.path(), &[], "");

    assert!(output.status.success());
    assert!(stdout(&output).ends_with("Goodbye.\n"));
}
