use serde::{Deserialize, Serialize};

use crate::player::PlayerSlot;

/// Whose move it is.
///
/// `Unset` only holds before the first successful move; `GameOver` is
/// terminal once a player reaches the capture target.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum TurnState {
    #[default]
    Unset,
    PlayerA,
    PlayerB,
    GameOver,
}

impl TurnState {
    pub fn of(slot: PlayerSlot) -> Self {
        match slot {
            PlayerSlot::First => TurnState::PlayerA,
            PlayerSlot::Second => TurnState::PlayerB,
        }
    }

    /// Seat holding the turn, if any.
    pub fn owner(self) -> Option<PlayerSlot> {
        match self {
            TurnState::PlayerA => Some(PlayerSlot::First),
            TurnState::PlayerB => Some(PlayerSlot::Second),
            TurnState::Unset | TurnState::GameOver => None,
        }
    }

    pub fn is_over(self) -> bool {
        self == TurnState::GameOver
    }

    /// Turn after `mover` completes a move without winning.
    pub fn pass_from(mover: PlayerSlot) -> Self {
        Self::of(mover.other())
    }
}
