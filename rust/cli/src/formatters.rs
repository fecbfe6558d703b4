//! Text formatters for `focus play` output.
//!
//! Pure functions, so the exact terminal text is easy to test.
//!
//! ## Example
//!
//! ```rust
//! use focus_engine::player::Color;
//! use focus_cli::formatters::format_stack;
//!
//! let stack = vec![Color::from("W"), Color::from("R")];
//! assert_eq!(format_stack(&stack), "[W,R]");
//! assert_eq!(format_stack(&[]), "[]");
//! ```

use focus_engine::engine::FocusGame;
use focus_engine::game::TurnState;
use focus_engine::player::{Color, Player};

/// Format a stack bottom to top, the same way the board dump prints a cell.
pub fn format_stack(stack: &[Color]) -> String {
    let pieces: Vec<&str> = stack.iter().map(Color::as_str).collect();
    format!("[{}]", pieces.join(","))
}

/// One line per player: name, color, reserve and captured counts.
pub fn format_player(player: &Player) -> String {
    format!(
        "{} ({}): reserve {}, captured {}",
        player.name(),
        player.color(),
        player.reserve(),
        player.captured()
    )
}

/// Whose move it is, in words.
pub fn format_turn(game: &FocusGame) -> String {
    match game.turn() {
        TurnState::Unset => "Turn: either player may start".to_string(),
        TurnState::GameOver => match game.winner() {
            Some(w) => format!("Game over: {} won", w.name()),
            None => "Game over".to_string(),
        },
        _ => match game.current_player() {
            Some(p) => format!("Turn: {}", p.name()),
            None => "Turn: unknown".to_string(),
        },
    }
}

/// Turn line followed by one line per player.
pub fn format_status(game: &FocusGame) -> String {
    let mut lines = vec![format_turn(game)];
    lines.extend(game.players().iter().map(format_player));
    lines.join("\n")
}

/// Final line printed when `play` finishes.
pub fn format_summary(game: &FocusGame, applied: usize, rejected: usize) -> String {
    let result = match game.winner() {
        Some(w) => format!("winner={}", w.name()),
        None => "winner=none".to_string(),
    };
    format!(
        "Session complete: moves={} rejected={} {}",
        applied, rejected, result
    )
}
