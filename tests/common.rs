use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn friendship() -> Command {
    let mut cmd = cargo_bin_cmd!("friendship");
    cmd.env_remove("FRIENDSHIP_CONFIG")
        .env_remove("FRIENDSHIP_LOG")
        .env_remove("RUST_LOG");
    cmd
}

pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("graph.toml");
    fs::write(&path, content).expect("failed to write config");
    path
}
