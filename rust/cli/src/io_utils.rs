//! Interactive input helpers.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Whitespace is trimmed from the line.
///
/// # Returns
///
/// * `Ok(Some(String))` - Trimmed input line (may be empty after trimming)
/// * `Ok(None)` - EOF
/// * `Err(_)` - The read failed; `ErrorKind::Interrupted` means Ctrl+C
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use cardroom_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  call \n");
/// assert_eq!(read_stdin_line(&mut input).unwrap(), Some("call".to_string()));
/// assert_eq!(read_stdin_line(&mut input).unwrap(), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    match stdin.read_line(&mut line)? {
        0 => Ok(None), // EOF
        _ => Ok(Some(line.trim().to_string())),
    }
}
