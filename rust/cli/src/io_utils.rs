//! Stdin helpers for the interactive game.
//!
//! All reads go through a `&mut dyn BufRead` so commands can be driven from
//! a real terminal, a pipe, or an in-memory script in tests.

use std::io::{BufRead, Write};

/// Reads a line of input from a buffered reader, blocking until available.
///
/// This function is used for interactive commands that need user input.
/// It trims whitespace from the input and returns `None` only at EOF or on
/// a read error. Bytes that are not valid UTF-8 are replaced with U+FFFD, so
/// a garbled line still comes back as a (malformed) command.
///
/// # Arguments
///
/// * `stdin` - Buffered reader to read from (typically stdin)
///
/// # Returns
///
/// * `Some(String)` - Trimmed input line (may be empty after trimming)
/// * `None` - EOF or read error occurred
///
/// # Example
///
/// ```rust,no_run
/// use std::io::{self, BufRead};
/// # use hanabi_cli::io_utils::read_stdin_line;
///
/// let stdin = io::stdin();
/// let mut handle = stdin.lock();
/// if let Some(line) = read_stdin_line(&mut handle) {
///     println!("You entered: {}", line);
/// }
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut buf = Vec::new();
    match stdin.read_until(b'\n', &mut buf) {
        Ok(0) => None, // EOF
        Ok(_) => Some(String::from_utf8_lossy(&buf).trim().to_string()),
        Err(_) => None, // Read error
    }
}

/// Prints `prompt` without a newline, flushes, and reads the answer.
pub fn prompt_line(
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
    prompt: &str,
) -> std::io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    Ok(read_stdin_line(stdin))
}
