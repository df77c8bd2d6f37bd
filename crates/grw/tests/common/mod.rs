//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Roster used by most tests: two institutions, one person without papers.
pub const PEOPLE_CSV: &str = "\
Institution,Name
MIT,Ann Lee
MIT,Bob Stone
ETH Zürich,Cé Dupont
ETH Zürich,Dana Loner
";

/// Two papers: a three-author paper and a repeat collaboration.
pub const PAPERS_CSV: &str = "\
Paper,Name
Graph Bundles,Ann Lee
Graph Bundles,Bob Stone
Graph Bundles,Ce Dupont
Radial Layouts,Ann Lee
Radial Layouts,Bob Stone
Solo Work,Dana Loner
";

/// Get the workspace root directory
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // Go up from crates/grw to workspace root
    manifest_dir
        .parent()
        .and_then(Path::parent)
        .expect("crate lives two levels below the workspace root")
        .to_path_buf()
}

/// Creates a project root with `fixtures/people.csv` and `fixtures/papers.csv`
pub fn project_with(people: &str, papers: &str) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let fixtures = temp.path().join("fixtures");
    std::fs::create_dir_all(&fixtures).expect("Failed to create fixtures dir");
    std::fs::write(fixtures.join("people.csv"), people).expect("Failed to write people.csv");
    std::fs::write(fixtures.join("papers.csv"), papers).expect("Failed to write papers.csv");
    temp
}

/// Path of the default output file under a project root
pub fn output_path(root: &Path) -> PathBuf {
    root.join("app").join("data").join("grw-papers.json")
}

/// Run the grw binary directly in the specified directory
pub fn run_grw_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_grw"))
        .args(args)
        .current_dir(dir)
        .env_remove("GRW_ROOT")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute grw binary")
}
