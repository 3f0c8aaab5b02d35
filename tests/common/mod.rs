#![allow(dead_code, deprecated)]

use assert_cmd::Command;
use std::path::Path;

pub fn jot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("jot").unwrap();
    cmd.env_remove("JOT_ROOT");
    cmd.env_remove("JOT_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Initialize a workspace at `dir`
pub fn init_workspace(dir: &Path) {
    jot_cmd().arg("init").arg(dir).assert().success();
}

/// Create a note through the CLI and return its id
pub fn create_note(dir: &Path, title: &str, content: &str) -> String {
    let output = jot_cmd()
        .current_dir(dir)
        .args(["new", "--title", title, "--content", content])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .trim()
        .strip_prefix("Created note ")
        .unwrap_or_else(|| panic!("unexpected output: {}", stdout))
        .to_string()
}
