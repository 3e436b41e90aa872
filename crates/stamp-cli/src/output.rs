// crates/stamp-cli/src/output.rs - Terminal Output
//
// Results go to stdout, failures to stderr. Styling comes from `console`,
// which drops the colors by itself when the stream is not a terminal, so
// piped output stays plain.

use console::style;
use stamp_core::Note;

/// Width of the note preview in the success message
pub const PREVIEW_WIDTH: usize = 50;

/// Marker appended to a shortened preview
const PLACEHOLDER: &str = " [...]";

/// Collapse whitespace and cut `text` to at most `width` characters on a word boundary
///
/// ```text
/// shorten("fixed   the\nparser", 50)  -> "fixed the parser"
/// shorten("one two three four", 14)   -> "one two [...]"
/// ```
pub fn shorten(text: &str, width: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let collapsed = words.join(" ");
    if collapsed.chars().count() <= width {
        return collapsed;
    }

    let budget = width.saturating_sub(PLACEHOLDER.chars().count());
    let mut kept = String::new();
    let mut kept_len = 0;
    for word in words {
        let word_len = word.chars().count();
        let needed = if kept.is_empty() { word_len } else { kept_len + 1 + word_len };
        if needed > budget {
            break;
        }
        if !kept.is_empty() {
            kept.push(' ');
        }
        kept.push_str(word);
        kept_len = needed;
    }

    if kept.is_empty() {
        PLACEHOLDER.trim_start().to_string()
    } else {
        kept + PLACEHOLDER
    }
}

/// `stamp success: <page> <timestamp> <preview>`
pub fn success_line(page: &str, timestamp: &str, text: &str) -> String {
    format!(
        "{} {} {} {}",
        style("stamp success:").green(),
        shorten(page, PREVIEW_WIDTH),
        timestamp,
        shorten(text, PREVIEW_WIDTH)
    )
}

/// One listing line per note: `[index] timestamp  text`
pub fn note_line(note: &Note) -> String {
    format!(
        "{} {}  {}",
        style(format!("[{}]", note.index)).dim(),
        style(&note.timestamp).cyan(),
        note.text
    )
}

/// Print notes, or a notice when there are none
pub fn print_notes<'a, I>(notes: I)
where
    I: IntoIterator<Item = &'a Note>,
{
    let mut printed = false;
    for note in notes {
        println!("{}", note_line(note));
        printed = true;
    }
    if !printed {
        println!("no matching notes");
    }
}

/// `stamp failed: <message>` on stderr
pub fn print_failure(err: &anyhow::Error) {
    eprintln!("{} {:#}", style("stamp failed:").red(), err);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_unchanged() {
        assert_eq!(shorten("checking email", PREVIEW_WIDTH), "checking email");
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        assert_eq!(shorten("  fixed   the\nparser ", PREVIEW_WIDTH), "fixed the parser");
    }

    #[test]
    fn test_long_text_is_cut_on_word_boundary() {
        assert_eq!(shorten("one two three four", 14), "one two [...]");
        assert!(shorten(&"word ".repeat(40), PREVIEW_WIDTH).chars().count() <= PREVIEW_WIDTH);
    }

    #[test]
    fn test_single_long_word() {
        assert_eq!(shorten(&"x".repeat(80), PREVIEW_WIDTH), "[...]");
    }

    #[test]
    fn test_note_line_contains_fields() {
        let line = note_line(&Note::new(3, "2025-07-30 10:00:00", "a, b"));
        assert!(line.contains("[3]"));
        assert!(line.contains("2025-07-30 10:00:00"));
        assert!(line.ends_with("a, b"));
    }
}
