//! Common test utilities shared across integration tests.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Path of the matgraph binary built for this test run
pub fn matgraph_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_matgraph"))
}

fn command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(matgraph_binary());
    cmd.args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env("MATGRAPH_ASCII", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// Run the matgraph binary in the specified directory
pub fn run_matgraph_in_dir(dir: &Path, args: &[&str]) -> Output {
    command(dir, args)
        .output()
        .expect("Failed to execute matgraph binary")
}

/// Run the matgraph binary with `input` piped to stdin
pub fn run_matgraph_with_input(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = command(dir, args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn matgraph binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    child
        .wait_with_output()
        .expect("Failed to wait for matgraph binary")
}

/// Write a matrix file into `dir`
pub fn write_dataset(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write dataset");
    path
}

/// Stdout of a finished run as a string
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a finished run as a string
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
