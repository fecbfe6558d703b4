use serde::{Deserialize, Serialize};
use std::fmt;

/// Token identifying whose piece sits in a stack slot.
/// Each player brings one color to the game (e.g. `"R"` and `"W"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Seat of a player in the game. `First` owns color A of the starting
/// layout, `Second` owns color B.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    First,
    Second,
}

impl PlayerSlot {
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::First => 0,
            PlayerSlot::Second => 1,
        }
    }

    pub fn other(self) -> Self {
        match self {
            PlayerSlot::First => PlayerSlot::Second,
            PlayerSlot::Second => PlayerSlot::First,
        }
    }
}

/// A player's identity together with the pieces they have won back
/// (reserve) or taken out of play (captured).
///
/// Counters are only changed by the engine while it resolves a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Name used to address the player in every engine call
    name: String,
    /// Color of this player's pieces
    color: Color,
    /// Own pieces returned from the bottom of an overflowing stack
    reserve: u32,
    /// Opponent pieces removed from play
    captured: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            reserve: 0,
            captured: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn color(&self) -> &Color {
        &self.color
    }
    pub fn reserve(&self) -> u32 {
        self.reserve
    }
    pub fn captured(&self) -> u32 {
        self.captured
    }

    pub(crate) fn add_reserve(&mut self) {
        self.reserve = self.reserve.saturating_add(1);
    }

    // callers check the reserve before placing, so this never floors in play
    pub(crate) fn take_reserve(&mut self) {
        self.reserve = self.reserve.saturating_sub(1);
    }

    pub(crate) fn add_captured(&mut self) {
        self.captured = self.captured.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_starts_with_empty_counters() {
        let p = Player::new("Mitch", Color::new("R"));
        assert_eq!(p.name(), "Mitch");
        assert_eq!(p.color().as_str(), "R");
        assert_eq!(p.reserve(), 0);
        assert_eq!(p.captured(), 0);
    }

    #[test]
    fn counters_move_by_one() {
        let mut p = Player::new("Hannah", Color::new("W"));
        p.add_reserve();
        p.add_reserve();
        p.add_captured();
        assert_eq!(p.reserve(), 2);
        assert_eq!(p.captured(), 1);
        p.take_reserve();
        assert_eq!(p.reserve(), 1);
    }

    #[test]
    fn take_reserve_saturates_at_zero() {
        let mut p = Player::new("Hannah", Color::new("W"));
        p.take_reserve();
        assert_eq!(p.reserve(), 0);
    }

    #[test]
    fn slots_swap() {
        assert_eq!(PlayerSlot::First.other(), PlayerSlot::Second);
        assert_eq!(PlayerSlot::Second.other(), PlayerSlot::First);
        assert_eq!(PlayerSlot::Second.index(), 1);
    }

    #[test]
    fn color_serializes_as_plain_string() {
        let json = serde_json::to_string(&Color::new("R")).unwrap();
        assert_eq!(json, "\"R\"");
    }
}
