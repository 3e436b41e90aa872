// crates/stamp-core/src/command.rs - Command Router
//
// Turns the positional words after `stamp` into a `Command`. The grammar is
// word-based rather than flag-based so notes can be typed without quoting:
//
// ```bash
// stamp - fixed bug in parser          # everything after "-" is the note
// stamp show 3 to 7                    # range with a literal "to"
// stamp timenote 2025-07-30 10:00      # words are rejoined with a space
// ```
//
// Command words are case-sensitive. Anything malformed is a `Usage` error so
// the binary can print the help text next to the message.

use crate::error::{StampError, StampResult};
use crate::query::{DEFAULT_COUNT, Selection, TimeQuery, is_time_of_day};

/// Word that separates the two ends of a range
const RANGE_WORD: &str = "to";

/// Every action the tool can perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the help text
    Help,
    /// Append a note; `None` means read it from stdin or prompt
    Note { text: Option<String> },
    /// Select (or create) the active notebook; `None` means prompt
    Notebook { path: Option<String> },
    /// Select (or create) the active page; `None` means prompt
    Page { name: Option<String> },
    /// Print the active notebook and page
    Active,
    /// Print a slice of the active page
    Show(Selection),
    /// Print the timestamp of the note at a 1-based index
    NoteTime(usize),
    /// Print notes whose timestamp matches
    TimeNote(TimeQuery),
    /// Print notes whose text contains a keyword
    Search(String),
}

impl Command {
    /// Route the arguments that follow the program name
    pub fn parse<S: AsRef<str>>(args: &[S]) -> StampResult<Self> {
        let words: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        let Some((&command, rest)) = words.split_first() else {
            return Ok(Self::Help);
        };

        match command {
            "help" | "-h" | "--help" => Ok(Self::Help),
            "-" => Ok(Self::Note { text: joined(rest) }),
            "newnotebook" | "notebook" => Ok(Self::Notebook { path: joined(rest) }),
            "newpage" | "page" => Ok(Self::Page { name: joined(rest) }),
            "active" => {
                no_arguments(command, rest)?;
                Ok(Self::Active)
            }
            "foot" => parse_foot(rest).map(Self::Show),
            "show" => parse_show(rest).map(Self::Show),
            "notetime" => match rest {
                [index] => parse_index(index).map(Self::NoteTime),
                [] => Err(StampError::usage("supply note index")),
                _ => Err(StampError::usage("notetime takes a single note index")),
            },
            "timenote" => parse_time_query(rest).map(Self::TimeNote),
            "search" => joined(rest)
                .map(Self::Search)
                .ok_or_else(|| StampError::usage("supply a keyword to search for")),
            other => Err(StampError::usage(format!("unknown command '{}'", other))),
        }
    }
}

fn joined(words: &[&str]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn no_arguments(command: &str, rest: &[&str]) -> StampResult<()> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(StampError::usage(format!(
            "'{}' takes no arguments (got '{}')",
            command,
            rest.join(" ")
        )))
    }
}

fn is_all(word: &str) -> bool {
    word.eq_ignore_ascii_case("all")
}

/// `foot [N|all]`
fn parse_foot(rest: &[&str]) -> StampResult<Selection> {
    match rest {
        [] => Ok(Selection::Tail(DEFAULT_COUNT)),
        [word] if is_all(word) => Ok(Selection::All),
        [count] => parse_count(count).map(Selection::Tail),
        _ => Err(StampError::usage("usage: stamp foot [N|all]")),
    }
}

/// `show head|foot|all|N|N to M`
fn parse_show(rest: &[&str]) -> StampResult<Selection> {
    match rest {
        [] | ["head"] => Ok(Selection::Head(DEFAULT_COUNT)),
        ["foot"] => Ok(Selection::Tail(DEFAULT_COUNT)),
        ["head", count] => parse_count(count).map(Selection::Head),
        ["foot", count] => parse_count(count).map(Selection::Tail),
        [word] if is_all(word) => Ok(Selection::All),
        [index] => parse_index(index).map(Selection::Single),
        [first, RANGE_WORD, last] => {
            let first = parse_index(first)?;
            let last = parse_index(last)?;
            if last < first {
                return Err(StampError::usage(format!(
                    "range end {} is before start {}",
                    last, first
                )));
            }
            Ok(Selection::Range(first, last))
        }
        _ => Err(StampError::usage(
            "usage: stamp show head|foot|all|N|N to M",
        )),
    }
}

/// `timenote Y` or `timenote Y to Z`
fn parse_time_query(rest: &[&str]) -> StampResult<TimeQuery> {
    if rest.is_empty() {
        return Err(StampError::usage("supply timestamp prefix"));
    }

    let Some(split) = rest.iter().position(|w| *w == RANGE_WORD) else {
        return Ok(TimeQuery::single(rest.join(" ")));
    };

    let from = rest[..split].join(" ");
    let to = rest[split + 1..].join(" ");
    if from.is_empty() || to.is_empty() {
        return Err(StampError::usage("usage: stamp timenote Y to Z"));
    }
    if is_time_of_day(&from) != is_time_of_day(&to) {
        return Err(StampError::usage(format!(
            "cannot mix a time of day with a date in '{} to {}'",
            from, to
        )));
    }
    if to < from && !from.starts_with(&to) {
        return Err(StampError::usage(format!(
            "range end '{}' is before start '{}'",
            to, from
        )));
    }

    Ok(TimeQuery::range(from, to))
}

/// Row count; zero is allowed and selects nothing
fn parse_count(word: &str) -> StampResult<usize> {
    word.parse()
        .map_err(|_| StampError::usage(format!("'{}' is not a note count", word)))
}

/// 1-based note index
fn parse_index(word: &str) -> StampResult<usize> {
    match word.parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(StampError::usage(format!(
            "note index must be a positive integer, got '{}'",
            word
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> StampResult<Command> {
        let words: Vec<&str> = line.split_whitespace().collect();
        Command::parse(&words)
    }

    fn usage(line: &str) -> bool {
        matches!(parse(line), Err(StampError::Usage(_)))
    }

    #[test]
    fn test_empty_and_help() {
        assert_eq!(parse("").unwrap(), Command::Help);
        assert_eq!(parse("help").unwrap(), Command::Help);
        assert_eq!(parse("--help").unwrap(), Command::Help);
    }

    #[test]
    fn test_new_note() {
        assert_eq!(
            parse("- a & b").unwrap(),
            Command::Note {
                text: Some("a & b".to_string())
            }
        );
        assert_eq!(parse("-").unwrap(), Command::Note { text: None });
    }

    #[test]
    fn test_notebook_and_page_aliases() {
        assert_eq!(parse("notebook").unwrap(), Command::Notebook { path: None });
        assert_eq!(
            parse("newnotebook ~/notes").unwrap(),
            Command::Notebook {
                path: Some("~/notes".to_string())
            }
        );
        assert_eq!(parse("newpage").unwrap(), Command::Page { name: None });
        assert_eq!(
            parse("page work log").unwrap(),
            Command::Page {
                name: Some("work log".to_string())
            }
        );
    }

    #[test]
    fn test_foot() {
        assert_eq!(parse("foot").unwrap(), Command::Show(Selection::Tail(10)));
        assert_eq!(parse("foot 25").unwrap(), Command::Show(Selection::Tail(25)));
        assert_eq!(parse("foot all").unwrap(), Command::Show(Selection::All));
        assert_eq!(parse("foot ALL").unwrap(), Command::Show(Selection::All));
        assert!(usage("foot many"));
        assert!(usage("foot 1 2"));
    }

    #[test]
    fn test_show() {
        assert_eq!(parse("show head").unwrap(), Command::Show(Selection::Head(10)));
        assert_eq!(parse("show").unwrap(), Command::Show(Selection::Head(10)));
        assert_eq!(parse("show foot").unwrap(), Command::Show(Selection::Tail(10)));
        assert_eq!(parse("show head 3").unwrap(), Command::Show(Selection::Head(3)));
        assert_eq!(parse("show all").unwrap(), Command::Show(Selection::All));
        assert_eq!(parse("show 2").unwrap(), Command::Show(Selection::Single(2)));
        assert_eq!(
            parse("show 2 to 4").unwrap(),
            Command::Show(Selection::Range(2, 4))
        );
        assert!(usage("show 0"));
        assert!(usage("show 4 to 2"));
        assert!(usage("show 2 until 4"));
    }

    #[test]
    fn test_notetime() {
        assert_eq!(parse("notetime 1").unwrap(), Command::NoteTime(1));
        assert!(usage("notetime"));
        assert!(usage("notetime x"));
        assert!(usage("notetime 0"));
    }

    #[test]
    fn test_timenote() {
        assert_eq!(
            parse("timenote 2025-07-30").unwrap(),
            Command::TimeNote(TimeQuery::Prefix("2025-07-30".to_string()))
        );
        assert_eq!(
            parse("timenote 2025-07-30 10:00").unwrap(),
            Command::TimeNote(TimeQuery::Prefix("2025-07-30 10:00".to_string()))
        );
        assert_eq!(
            parse("timenote 2025-07-30 to 2025-07-31 12").unwrap(),
            Command::TimeNote(TimeQuery::range("2025-07-30", "2025-07-31 12"))
        );
        assert!(usage("timenote"));
        assert!(usage("timenote 2025 to"));
        assert!(usage("timenote 2025-08 to 2025-07"));
        assert!(usage("timenote 08:00 to 2025-07-31"));
        assert!(usage("timenote 09:00 to 08:00"));
        assert_eq!(
            parse("timenote 08:00 to 09:00").unwrap(),
            Command::TimeNote(TimeQuery::TimeOfDayRange {
                from: "08:00".to_string(),
                to: "09:00".to_string()
            })
        );
    }

    #[test]
    fn test_search_and_active() {
        assert_eq!(
            parse("search b c").unwrap(),
            Command::Search("b c".to_string())
        );
        assert!(usage("search"));
        assert_eq!(parse("active").unwrap(), Command::Active);
        assert!(usage("active now"));
    }

    #[test]
    fn test_unknown_and_case_sensitive() {
        assert!(usage("frobnicate"));
        assert!(usage("Active"));
        assert!(usage("FOOT"));
    }
}
