//! `focus board`: print the starting layout for the configured players.

use super::new_game_from_config;
use crate::error::CliError;
use crate::formatters::format_player;
use std::io::Write;

pub fn handle_board_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let game = new_game_from_config(err)?;
    for player in game.players() {
        writeln!(out, "{}", format_player(player))?;
    }
    writeln!(out, "{}", game.print_board())?;
    Ok(())
}
