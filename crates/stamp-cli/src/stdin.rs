// crates/stamp-cli/src/stdin.rs - Centralized STDIN handling utility
//
// Notes and selections can come from three places, checked in order:
// 1. Words on the command line
// 2. Piped stdin (`echo "deploy done" | stamp -`)
// 3. An interactive prompt, when stdin is a terminal

use anyhow::Result;
use stamp_core::StampError;
use std::io::{self, BufRead, IsTerminal, Read, Write};

/// Whether a person is typing at stdin
pub fn is_interactive() -> bool {
    io::stdin().is_terminal()
}

/// Note text from the argument, piped stdin, or a prompt
///
/// UNIX PATTERN:
/// ```bash
/// stamp - checking email             # Use arguments
/// git log -1 --format=%s | stamp -   # Use stdin
/// stamp -                            # Prompt on a terminal
/// ```
pub fn read_note_text(arg: Option<String>) -> Result<String> {
    let text = match arg {
        Some(value) => value,
        None if is_interactive() => prompt_line("note")?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer.trim().to_string()
        }
    };

    if text.trim().is_empty() {
        return Err(StampError::usage("no note text supplied").into());
    }

    Ok(text)
}

/// Print `question` to stderr and read one trimmed line from stdin
///
/// Reads from stdin even when it is piped, so selections can be scripted:
/// `echo work | stamp page`. End of input yields an empty string.
pub fn prompt_line(question: &str) -> Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{}\n> ", question)?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
