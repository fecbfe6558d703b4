//! Configuration command handler.
//!
//! Displays the resolved player configuration with the source of every
//! value (default, environment, or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "player_a": {
//!     "name": { "value": "Mitch", "source": "default" },
//!     "color": { "value": "R", "source": "default" }
//!   },
//!   ...
//! }
//! ```

use crate::config::{self, PlayerConfig, PlayerSources};
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(e.into());
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "player_a": player_json(&config.player_a, &sources.player_a),
        "player_b": player_json(&config.player_b, &sources.player_b),
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

fn player_json(player: &PlayerConfig, sources: &PlayerSources) -> serde_json::Value {
    serde_json::json!({
        "name": {
            "value": player.name,
            "source": sources.name,
        },
        "color": {
            "value": player.color,
            "source": sources.color,
        },
    })
}
