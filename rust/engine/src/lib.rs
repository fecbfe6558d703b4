//! # focus-engine: Focus/Domination Rules Engine
//!
//! Rules for the two-player stacking game Focus (also sold as Domination),
//! played on a 6x6 board where every cell holds a stack of pieces. The
//! engine validates and applies moves handed to it by a caller; it does not
//! search for moves or choose them.
//!
//! ## Core Modules
//!
//! - [`board`] - Coordinates, stacks, the starting layout and the board dump
//! - [`player`] - Player identity, color and reserve/captured counters
//! - [`rules`] - Move geometry validation
//! - [`game`] - Turn state machine
//! - [`engine`] - [`engine::FocusGame`], move execution and queries
//! - [`logger`] - Move records and the JSON Lines writer
//! - [`errors`] - Rejection reasons
//!
//! ## Quick Start
//!
//! ```rust
//! use focus_engine::engine::FocusGame;
//!
//! let mut game = FocusGame::new(("Mitch", "R"), ("Hannah", "W")).unwrap();
//! let status = game.move_piece("Mitch", (0, 0), (0, 1), 1).unwrap();
//! assert_eq!(status.to_string(), "successfully moved");
//! println!("{}", game.print_board());
//! ```
//!
//! ## Rules Summary
//!
//! A player may move any stack whose top piece is theirs, carrying up to the
//! whole stack, at most as many cells as pieces carried, along a row or a
//! column. Stacks taller than five lose pieces from the bottom: the mover's
//! own pieces go to their reserve, opponent pieces are captured. Reserve
//! pieces can be placed on any cell as a turn. Six captures win.
//!
//! ```rust
//! use focus_engine::errors::MoveError;
//! use focus_engine::rules::validate_geometry;
//! use focus_engine::board::Coord;
//!
//! match validate_geometry(Coord::new(0, 0), Coord::new(1, 1), 1) {
//!     Ok(()) => println!("geometry ok"),
//!     Err(e) => assert_eq!(e, MoveError::InvalidLocation),
//! }
//! ```

pub mod board;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod rules;
