use std::fmt;

use tracing::{debug, info};

use crate::board::{Board, Coord};
use crate::errors::MoveError;
use crate::game::TurnState;
use crate::logger::{MoveAction, MoveRecord};
use crate::player::{Color, Player, PlayerSlot};
use crate::rules::validate_geometry;

/// Captured pieces needed to win the game.
pub const WINNING_CAPTURES: u32 = 6;

/// Result of an accepted move or reserve placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied and the turn passed to the opponent
    Moved,
    /// The move was applied and the named player reached the capture target
    Won(String),
}

impl MoveOutcome {
    pub fn is_win(&self) -> bool {
        matches!(self, MoveOutcome::Won(_))
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Moved => f.write_str("successfully moved"),
            MoveOutcome::Won(name) => write!(f, "{} Wins", name),
        }
    }
}

/// A game of Focus between two named players.
/// Owns the board, both players, whose turn it is and the list of moves
/// applied so far.
///
/// # Examples
///
/// ```
/// use focus_engine::engine::{FocusGame, MoveOutcome};
/// use focus_engine::errors::MoveError;
///
/// let mut game = FocusGame::new(("Mitch", "R"), ("Hannah", "W")).unwrap();
///
/// // the first player to move takes the first turn
/// assert_eq!(
///     game.move_piece("Mitch", (0, 0), (0, 1), 1),
///     Ok(MoveOutcome::Moved)
/// );
/// assert!(game.show_pieces((0, 0)).is_empty());
/// assert_eq!(game.show_pieces((0, 1)).len(), 2);
///
/// // now it is Hannah's turn
/// assert_eq!(
///     game.move_piece("Mitch", (1, 0), (1, 1), 1),
///     Err(MoveError::NotYourTurn)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct FocusGame {
    /// The 6x6 grid of stacks
    board: Board,
    /// Exactly 2 players; index 0 owns color A of the starting layout
    players: [Player; 2],
    /// Whose move it is
    turn: TurnState,
    /// Moves applied so far, oldest first
    history: Vec<MoveRecord>,
}

impl FocusGame {
    /// Creates a game from two `(name, color)` pairs and lays out the
    /// starting board.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidSetup`] when a name or color is empty, or when
    /// both players share a name or a color.
    pub fn new(player_a: (&str, &str), player_b: (&str, &str)) -> Result<Self, MoveError> {
        let (name_a, color_a) = player_a;
        let (name_b, color_b) = player_b;
        if [name_a, color_a, name_b, color_b].iter().any(|s| s.is_empty()) {
            return Err(MoveError::InvalidSetup(
                "names and colors must not be empty".into(),
            ));
        }
        if name_a == name_b {
            return Err(MoveError::InvalidSetup(format!(
                "both players are named {}",
                name_a
            )));
        }
        if color_a == color_b {
            return Err(MoveError::InvalidSetup(format!(
                "both players use color {}",
                color_a
            )));
        }

        let players = [
            Player::new(name_a, Color::new(color_a)),
            Player::new(name_b, Color::new(color_b)),
        ];
        let board = Board::new(players[0].color(), players[1].color());
        Ok(Self {
            board,
            players,
            turn: TurnState::Unset,
            history: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
    pub fn turn(&self) -> TurnState {
        self.turn
    }
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Player registered under exactly `name`.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.slot_of(name).map(|slot| &self.players[slot.index()])
    }

    pub fn slot_of(&self, name: &str) -> Option<PlayerSlot> {
        [PlayerSlot::First, PlayerSlot::Second]
            .into_iter()
            .find(|slot| self.players[slot.index()].name() == name)
    }

    pub fn opponent(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.other().index()]
    }

    /// Player holding the turn, if the game has started and is not over.
    pub fn current_player(&self) -> Option<&Player> {
        self.turn.owner().map(|slot| &self.players[slot.index()])
    }

    /// The player who reached the capture target, once the game is over.
    pub fn winner(&self) -> Option<&Player> {
        if !self.turn.is_over() {
            return None;
        }
        self.players
            .iter()
            .find(|p| p.captured() >= WINNING_CAPTURES)
    }

    /// Moves the top `count` pieces of `start` onto `end` for `player_name`.
    ///
    /// Whoever makes the first accepted move of the game takes the first
    /// turn. A rejected opening move leaves the turn unclaimed, so the
    /// turn is never taken before the move has been validated.
    ///
    /// After the move, stacks taller than five lose pieces from the
    /// bottom: the mover's own pieces go to their reserve, all others are
    /// captured by the mover.
    ///
    /// # Errors
    ///
    /// Checked in this order, first failure wins, nothing is changed:
    /// - [`MoveError::UnknownPlayer`] - no player has that name
    /// - [`MoveError::GameOver`] - a player has already won
    /// - [`MoveError::NotYourTurn`] - the other player holds the turn
    /// - [`MoveError::InvalidLocation`] - off-board cell, same cell, too far
    ///   for `count`, or a full diagonal
    /// - [`MoveError::InvalidNumberOfPieces`] - `start` is empty
    /// - [`MoveError::InvalidLocation`] - top of `start` is not the mover's color
    /// - [`MoveError::InvalidNumberOfPieces`] - `start` holds fewer than `count` pieces
    pub fn move_piece(
        &mut self,
        player_name: &str,
        start: impl Into<Coord>,
        end: impl Into<Coord>,
        count: usize,
    ) -> Result<MoveOutcome, MoveError> {
        let (start, end) = (start.into(), end.into());
        let mover = self
            .slot_of(player_name)
            .ok_or_else(|| MoveError::UnknownPlayer(player_name.to_string()))?;

        if let Err(reason) = self.check_stack_move(mover, start, end, count) {
            debug!(player = player_name, from = %start, to = %end, count, %reason, "move rejected");
            return Err(reason);
        }

        self.board.transfer(start, end, count);
        debug!(player = player_name, from = %start, to = %end, count, "stack moved");
        let (reserve_gained, captured_gained) = self.resolve_overflow(mover, end);

        Ok(self.finish_turn(
            mover,
            MoveAction::Stack {
                from: start,
                to: end,
                count,
            },
            reserve_gained,
            captured_gained,
        ))
    }

    /// Places one of `player_name`'s reserve pieces on top of `location`.
    ///
    /// Any cell accepts a reserve piece. Overflow is resolved as for
    /// [`FocusGame::move_piece`], and the reserve drops by one even when the
    /// placed piece is trimmed straight back off.
    ///
    /// # Errors
    ///
    /// Checked in this order, nothing is changed on failure:
    /// - [`MoveError::UnknownPlayer`] - no player has that name
    /// - [`MoveError::NoPiecesInReserve`] - the player's reserve is empty
    /// - [`MoveError::GameOver`] - a player has already won
    /// - [`MoveError::NotYourTurn`] - the player does not hold the turn
    /// - [`MoveError::InvalidLocation`] - `location` is off the board
    pub fn reserved_move(
        &mut self,
        player_name: &str,
        location: impl Into<Coord>,
    ) -> Result<MoveOutcome, MoveError> {
        let at = location.into();
        let mover = self
            .slot_of(player_name)
            .ok_or_else(|| MoveError::UnknownPlayer(player_name.to_string()))?;

        if let Err(reason) = self.check_reserve_move(mover, at) {
            debug!(player = player_name, at = %at, %reason, "reserve placement rejected");
            return Err(reason);
        }

        let color = self.players[mover.index()].color().clone();
        self.board.push(at, color);
        debug!(player = player_name, at = %at, "reserve piece placed");
        let (reserve_gained, captured_gained) = self.resolve_overflow(mover, at);
        self.players[mover.index()].take_reserve();

        Ok(self.finish_turn(
            mover,
            MoveAction::Reserve { at },
            reserve_gained,
            captured_gained,
        ))
    }

    /// Pieces at `location`, bottom to top. Off-board cells read as empty.
    pub fn show_pieces(&self, location: impl Into<Coord>) -> &[Color] {
        self.board.stack(location.into())
    }

    /// Reserve count for `player_name`, 0 for an unknown name.
    pub fn show_reserve(&self, player_name: &str) -> u32 {
        self.player(player_name).map_or(0, Player::reserve)
    }

    /// Captured count for `player_name`, 0 for an unknown name.
    pub fn show_captured(&self, player_name: &str) -> u32 {
        self.player(player_name).map_or(0, Player::captured)
    }

    /// Human readable board dump, one row per line.
    pub fn print_board(&self) -> String {
        self.board.to_string()
    }

    fn check_turn(&self, mover: PlayerSlot) -> Result<(), MoveError> {
        match self.turn {
            TurnState::GameOver => Err(MoveError::GameOver),
            TurnState::Unset => Ok(()),
            owned => {
                if owned.owner() == Some(mover) {
                    Ok(())
                } else {
                    Err(MoveError::NotYourTurn)
                }
            }
        }
    }

    fn check_stack_move(
        &self,
        mover: PlayerSlot,
        start: Coord,
        end: Coord,
        count: usize,
    ) -> Result<(), MoveError> {
        self.check_turn(mover)?;
        validate_geometry(start, end, count)?;

        let top = self
            .board
            .top(start)
            .ok_or(MoveError::InvalidNumberOfPieces)?;
        if top != self.players[mover.index()].color() {
            return Err(MoveError::InvalidLocation);
        }
        if count > self.board.height(start) {
            return Err(MoveError::InvalidNumberOfPieces);
        }
        Ok(())
    }

    fn check_reserve_move(&self, mover: PlayerSlot, at: Coord) -> Result<(), MoveError> {
        if self.players[mover.index()].reserve() == 0 {
            return Err(MoveError::NoPiecesInReserve);
        }
        if self.turn.is_over() {
            return Err(MoveError::GameOver);
        }
        // a reserve piece can never open the game
        if self.turn.owner() != Some(mover) {
            return Err(MoveError::NotYourTurn);
        }
        if !self.board.contains(at) {
            return Err(MoveError::InvalidLocation);
        }
        Ok(())
    }

    /// Trims the stack at `at` back to the height limit and credits every
    /// removed piece to `mover`. Returns `(reserve_gained, captured_gained)`.
    fn resolve_overflow(&mut self, mover: PlayerSlot, at: Coord) -> (u32, u32) {
        let removed = self.board.trim_overflow(at);
        let player = &mut self.players[mover.index()];
        let (mut reserve_gained, mut captured_gained) = (0, 0);
        for piece in removed {
            if &piece == player.color() {
                player.add_reserve();
                reserve_gained += 1;
            } else {
                player.add_captured();
                captured_gained += 1;
            }
        }
        if reserve_gained + captured_gained > 0 {
            debug!(
                player = player.name(),
                at = %at,
                reserve_gained,
                captured_gained,
                "overflow trimmed"
            );
        }
        (reserve_gained, captured_gained)
    }

    fn finish_turn(
        &mut self,
        mover: PlayerSlot,
        action: MoveAction,
        reserve_gained: u32,
        captured_gained: u32,
    ) -> MoveOutcome {
        let player = &self.players[mover.index()];
        let outcome = if player.captured() >= WINNING_CAPTURES {
            info!(player = player.name(), captured = player.captured(), "game won");
            self.turn = TurnState::GameOver;
            MoveOutcome::Won(player.name().to_string())
        } else {
            self.turn = TurnState::pass_from(mover);
            MoveOutcome::Moved
        };

        self.history.push(MoveRecord {
            seq: self.history.len() as u32 + 1,
            player: self.players[mover.index()].name().to_string(),
            action,
            reserve_gained,
            captured_gained,
            outcome: outcome.to_string(),
            ts: None,
        });
        outcome
    }
}
