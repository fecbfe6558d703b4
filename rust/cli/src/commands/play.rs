//! # Play Command
//!
//! Feeds move commands to a [`FocusGame`] and prints what the engine says.
//!
//! Commands come from a script file (`--script`) or stdin, one per line.
//! Blank lines and lines starting with `#` are skipped. A rejected move is
//! reported on stderr and play continues with the next line; after a win
//! every further move is answered with "Game is over.".
//!
//! With `--jsonl` each applied move is also written to stdout as one JSON
//! line, right after its status line.

use super::new_game_from_config;
use crate::error::CliError;
use crate::formatters::{format_player, format_stack, format_status, format_summary};
use crate::io_utils::{read_stdin_line, read_text};
use crate::ui;
use crate::validation::{ParseResult, PlayCommand, parse_play_command};
use focus_engine::engine::{FocusGame, MoveOutcome};
use focus_engine::errors::MoveError;
use focus_engine::logger::MoveLogger;
use std::io::{BufRead, Write};
use tracing::debug;

/// Handle the play command.
///
/// # Arguments
///
/// * `script` - Script file to read; `None` reads `stdin` until EOF or `quit`
/// * `jsonl` - Also print each applied move as a JSON line
/// * `out` - Output stream for statuses, boards and the summary
/// * `err` - Error stream for rejected moves and bad input
/// * `stdin` - Input stream used when no script is given
///
/// # Errors
///
/// Configuration problems, an unreadable script, or a failed write.
/// Rejected moves are not errors.
pub fn handle_play_command(
    script: Option<String>,
    jsonl: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut game = new_game_from_config(err)?;

    let lines: Box<dyn Iterator<Item = String> + '_> = match script {
        Some(path) => {
            let text = match read_text(&path) {
                Ok(t) => t,
                Err(e) => {
                    ui::write_error(err, &e)?;
                    return Err(CliError::InvalidInput(e));
                }
            };
            let owned: Vec<String> = text.lines().map(|l| l.trim().to_string()).collect();
            Box::new(owned.into_iter())
        }
        None => Box::new(std::iter::from_fn(move || read_stdin_line(stdin))),
    };

    let [a, b] = game.players();
    writeln!(out, "play: {} vs {}", format_player(a), format_player(b))?;

    let mut applied = 0usize;
    let mut rejected = 0usize;

    for (idx, line) in lines.enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let cmd = match parse_play_command(&line) {
            ParseResult::Command(cmd) => cmd,
            ParseResult::Quit => {
                debug!(line = idx + 1, "quit requested");
                break;
            }
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &format!("line {}: {}", idx + 1, msg))?;
                rejected += 1;
                continue;
            }
        };

        match cmd {
            PlayCommand::Move {
                player,
                from,
                to,
                count,
            } => {
                let result = game.move_piece(&player, from, to, count);
                if report(&game, result, jsonl, out, err)? {
                    applied += 1;
                } else {
                    rejected += 1;
                }
            }
            PlayCommand::Reserve { player, at } => {
                let result = game.reserved_move(&player, at);
                if report(&game, result, jsonl, out, err)? {
                    applied += 1;
                } else {
                    rejected += 1;
                }
            }
            PlayCommand::Show(at) => {
                writeln!(out, "{} {}", at, format_stack(game.show_pieces(at)))?;
            }
            PlayCommand::Status => writeln!(out, "{}", format_status(&game))?,
            PlayCommand::Board => writeln!(out, "{}", game.print_board())?,
        }
    }

    writeln!(out, "{}", format_summary(&game, applied, rejected))?;
    Ok(())
}

/// Print the outcome of one move. Returns whether the move was applied.
fn report(
    game: &FocusGame,
    result: Result<MoveOutcome, MoveError>,
    jsonl: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<bool, CliError> {
    match result {
        Ok(outcome) => {
            writeln!(out, "{}", outcome)?;
            if jsonl && let Some(record) = game.history().last() {
                MoveLogger::new(&mut *out).write(record)?;
            }
            Ok(true)
        }
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            Ok(false)
        }
    }
}
