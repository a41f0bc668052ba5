use assert_cmd::Command;
use std::path::Path;

pub fn examplan_cmd(data_file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("examplan").unwrap();
    cmd.env_remove("EXAMPLAN_FILE");
    cmd.env_remove("RUST_LOG");
    cmd.arg("--file").arg(data_file);
    cmd
}
