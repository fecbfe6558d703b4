#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const FOCUS_ENV: [&str; 5] = [
    "FOCUS_CONFIG",
    "FOCUS_PLAYER_A_NAME",
    "FOCUS_PLAYER_A_COLOR",
    "FOCUS_PLAYER_B_NAME",
    "FOCUS_PLAYER_B_COLOR",
];

/// Remove every `FOCUS_*` variable so the built-in defaults apply.
pub fn clear_focus_env() {
    for key in FOCUS_ENV {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

pub struct CliOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str]) -> CliOutput {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut argv = vec!["focus"];
    argv.extend_from_slice(args);
    let exit_code = focus_cli::run(argv, &mut out, &mut err);
    CliOutput {
        exit_code,
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
    }
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
