//! Command handler modules for the Focus CLI.
//!
//! Each subcommand lives in its own file and follows the same pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in so tests can capture them
//! - Errors propagated via the `CliError` enum
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::commands::handle_board_command;
//! use std::io;
//!
//! let mut out = io::stdout();
//! let mut err = io::stderr();
//! handle_board_command(&mut out, &mut err)?;
//! ```

mod board;
mod cfg;
mod play;

pub use board::handle_board_command;
pub use cfg::handle_cfg_command;
pub use play::handle_play_command;

use crate::config;
use crate::error::CliError;
use crate::ui;
use focus_engine::engine::FocusGame;
use std::io::Write;

/// Build a fresh game for the configured players.
///
/// Configuration problems are reported on `err` before being returned.
pub(crate) fn new_game_from_config(err: &mut dyn Write) -> Result<FocusGame, CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(e.into());
        }
    };
    let config::Config { player_a, player_b } = resolved.config;
    let game = FocusGame::new(
        (player_a.name.as_str(), player_a.color.as_str()),
        (player_b.name.as_str(), player_b.color.as_str()),
    )?;
    Ok(game)
}
