//! Exit code constants for the CLI application.
//!
//! Every command maps its outcome onto one of these codes in [`crate::run`].

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code.
pub const ERROR: i32 = 2;
