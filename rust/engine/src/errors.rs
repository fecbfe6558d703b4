use thiserror::Error;

/// Reasons a move, reserve placement or game setup is rejected.
///
/// A rejected call never mutates the game. The display strings are the
/// status messages shown to players.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Game is over.")]
    GameOver,
    #[error("not your turn")]
    NotYourTurn,
    #[error("invalid location")]
    InvalidLocation,
    #[error("invalid number of pieces")]
    InvalidNumberOfPieces,
    #[error("no pieces in reserve")]
    NoPiecesInReserve,
    #[error("unknown player: {0}")]
    UnknownPlayer(String),
    #[error("invalid setup: {0}")]
    InvalidSetup(String),
}
