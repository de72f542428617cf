//! Common utilities for binary tests.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Returns the path to the pawbook binary built for this test run.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_pawbook"))
}

/// Runs pawbook with its stores and config under `dir`, feeding `stdin`.
///
/// Logs go to stderr so the test never touches the user's state directory.
pub fn run_pawbook(dir: &Path, extra_args: &[&str], stdin: &str) -> (i32, String, String) {
    let mut child = Command::new(binary_path())
        .current_dir(dir)
        .arg("--log-stderr")
        .arg("--config")
        .arg(dir.join("config.toml"))
        .arg("--contacts")
        .arg(dir.join("contacts.json"))
        .arg("--notes")
        .arg(dir.join("notes.json"))
        .args(extra_args)
        .env_remove("PAWBOOK_CONTACTS")
        .env_remove("PAWBOOK_NOTES")
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn pawbook");

    // The binary may exit before reading anything (bad config)
    if let Some(mut pipe) = child.stdin.take() {
        let _ = pipe.write_all(stdin.as_bytes());
    }

    let output = child.wait_with_output().expect("Failed to wait for pawbook");
    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}
