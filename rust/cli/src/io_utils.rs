//! Input helpers for the `play` command.
//!
//! - Reading one line at a time from stdin (interactive or piped input)
//! - Reading whole script files, with a UTF-8 BOM stripped if present
//!
//! Errors are returned as `String` so commands can wrap them in
//! [`crate::CliError::InvalidInput`] together with the offending path.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Whitespace is trimmed. Returns `None` on EOF or on a read error.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use focus_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new(b"move Mitch 0,0 0,1 1\n".to_vec());
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("move Mitch 0,0 0,1 1"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Read a script file into a string.
///
/// # Example
///
/// ```rust,no_run
/// # use focus_cli::io_utils::read_text;
/// let script = read_text("opening.txt").unwrap();
/// for line in script.lines() {
///     println!("{}", line);
/// }
/// ```
pub fn read_text(path: &str) -> Result<String, String> {
    let mut content =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
