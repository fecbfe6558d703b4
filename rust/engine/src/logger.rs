use serde::{Deserialize, Serialize};

use crate::board::Coord;

/// What a player did on their turn.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveAction {
    /// Slide the top `count` pieces of `from` onto `to`
    Stack { from: Coord, to: Coord, count: usize },
    /// Place one reserve piece on `at`
    Reserve { at: Coord },
}

/// Record of one applied move, kept in the game's history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based position of the move in the game
    pub seq: u32,
    /// Name of the player who moved
    pub player: String,
    /// The move itself
    pub action: MoveAction,
    /// Mover's own pieces sent to reserve by the overflow
    pub reserve_gained: u32,
    /// Opponent pieces captured by the overflow
    pub captured_gained: u32,
    /// Status message returned to the caller
    pub outcome: String,
    /// Timestamp in RFC3339 format, filled in when written out
    #[serde(default)]
    pub ts: Option<String>,
}

use chrono::{SecondsFormat, Utc};
use std::io::Write;

/// Streams move records as JSON Lines to a caller supplied writer.
pub struct MoveLogger<W: Write> {
    writer: W,
    written: u32,
}

impl<W: Write> MoveLogger<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn written(&self) -> u32 {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn write(&mut self, record: &MoveRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.written += 1;
        Ok(())
    }
}
