//! Input parsing for the `play` command.
//!
//! Each script or stdin line is one command. Keywords are case-insensitive,
//! player names are not. Coordinates are written `col,row`.
//!
//! Parsing only checks the shape of a line. Whether a move is legal is left
//! to the engine, so `move Mitch 9,9 0,0 1` parses fine and is then rejected
//! with "invalid location".

use focus_engine::board::Coord;

/// A command accepted by `focus play`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    /// `move <name> <col,row> <col,row> <count>`
    Move {
        player: String,
        from: Coord,
        to: Coord,
        count: usize,
    },
    /// `reserve <name> <col,row>`
    Reserve { player: String, at: Coord },
    /// `show <col,row>`
    Show(Coord),
    /// `status`
    Status,
    /// `board`
    Board,
}

/// Result type for parsing one line of play input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Command(PlayCommand),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse one line of play input.
///
/// # Example
///
/// ```rust
/// # use focus_cli::validation::{parse_play_command, ParseResult, PlayCommand};
/// use focus_engine::board::Coord;
///
/// assert_eq!(
///     parse_play_command("move Mitch 0,0 0,1 1"),
///     ParseResult::Command(PlayCommand::Move {
///         player: "Mitch".into(),
///         from: Coord::new(0, 0),
///         to: Coord::new(0, 1),
///         count: 1,
///     })
/// );
/// assert_eq!(parse_play_command("Q"), ParseResult::Quit);
///
/// match parse_play_command("jump Mitch") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_play_command(input: &str) -> ParseResult {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let Some((keyword, args)) = parts.split_first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match keyword.to_lowercase().as_str() {
        "q" | "quit" => ParseResult::Quit,
        "status" => no_args("status", args, PlayCommand::Status),
        "board" => no_args("board", args, PlayCommand::Board),
        "show" => match args {
            [at] => match parse_coord(at) {
                Ok(at) => ParseResult::Command(PlayCommand::Show(at)),
                Err(msg) => ParseResult::Invalid(msg),
            },
            _ => ParseResult::Invalid("Usage: show <col,row>".to_string()),
        },
        "reserve" => match args {
            [player, at] => match parse_coord(at) {
                Ok(at) => ParseResult::Command(PlayCommand::Reserve {
                    player: player.to_string(),
                    at,
                }),
                Err(msg) => ParseResult::Invalid(msg),
            },
            _ => ParseResult::Invalid("Usage: reserve <name> <col,row>".to_string()),
        },
        "move" => match args {
            [player, from, to, count] => parse_move(player, from, to, count),
            _ => ParseResult::Invalid(
                "Usage: move <name> <col,row> <col,row> <count>".to_string(),
            ),
        },
        other => ParseResult::Invalid(format!(
            "Unrecognized command: '{}'. Valid commands: move, reserve, show, status, board, quit",
            other
        )),
    }
}

fn no_args(keyword: &str, args: &[&str], cmd: PlayCommand) -> ParseResult {
    if args.is_empty() {
        ParseResult::Command(cmd)
    } else {
        ParseResult::Invalid(format!("'{}' takes no arguments", keyword))
    }
}

fn parse_move(player: &str, from: &str, to: &str, count: &str) -> ParseResult {
    let from = match parse_coord(from) {
        Ok(c) => c,
        Err(msg) => return ParseResult::Invalid(msg),
    };
    let to = match parse_coord(to) {
        Ok(c) => c,
        Err(msg) => return ParseResult::Invalid(msg),
    };
    let count = match count.parse::<usize>() {
        Ok(n) => n,
        Err(_) => {
            return ParseResult::Invalid(format!(
                "Invalid count: '{}'. Must be a non-negative integer",
                count
            ));
        }
    };
    ParseResult::Command(PlayCommand::Move {
        player: player.to_string(),
        from,
        to,
        count,
    })
}

/// Parse a `col,row` pair. Values outside the board are accepted here.
///
/// ```rust
/// # use focus_cli::validation::parse_coord;
/// use focus_engine::board::Coord;
/// assert_eq!(parse_coord("2,5"), Ok(Coord::new(2, 5)));
/// assert!(parse_coord("2;5").is_err());
/// ```
pub fn parse_coord(s: &str) -> Result<Coord, String> {
    let invalid = || format!("Invalid coordinate: '{}'. Expected col,row", s);
    let (col, row) = s.split_once(',').ok_or_else(invalid)?;
    let col = col.trim().parse::<usize>().map_err(|_| invalid())?;
    let row = row.trim().parse::<usize>().map_err(|_| invalid())?;
    Ok(Coord::new(col, row))
}
