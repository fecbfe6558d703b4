//! Exit codes: 0 for success, 2 for every error. Errors go to stderr.

mod helpers;

use focus_cli::exit_code;
use helpers::{clear_focus_env, run_cli};
use serial_test::serial;

#[test]
#[serial]
fn board_succeeds_with_defaults() {
    clear_focus_env();
    let res = run_cli(&["board"]);
    assert_eq!(res.exit_code, exit_code::SUCCESS);
    let lines: Vec<&str> = res.stdout.lines().collect();
    assert_eq!(lines[0], "Mitch (R): reserve 0, captured 0");
    assert_eq!(lines[1], "Hannah (W): reserve 0, captured 0");
    assert_eq!(lines[2], "[R] [R] [W] [W] [R] [R]");
    assert_eq!(lines[3], "[W] [W] [R] [R] [W] [W]");
    assert!(res.stderr.is_empty());
}

#[test]
fn unknown_subcommand_returns_error() {
    let res = run_cli(&["deal"]);
    assert_eq!(res.exit_code, exit_code::ERROR);
    assert!(res.stdout.is_empty());
    assert!(res.stderr.contains("Commands:"));
}

#[test]
fn unknown_flag_returns_error() {
    let res = run_cli(&["play", "--seed", "1"]);
    assert_eq!(res.exit_code, exit_code::ERROR);
    assert!(!res.stderr.is_empty());
}

#[test]
fn version_goes_to_stdout() {
    let res = run_cli(&["--version"]);
    assert_eq!(res.exit_code, exit_code::SUCCESS);
    assert!(res.stdout.contains("focus"));
    assert!(res.stderr.is_empty());
}
