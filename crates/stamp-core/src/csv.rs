// crates/stamp-core/src/csv.rs - CSV Record Codec
//
// Page files are plain CSV so they open in any spreadsheet. Only the subset
// of RFC 4180 that page rows need is implemented:
// - Fields are separated by `,` and records end with `\n` (`\r\n` is accepted)
// - A field containing `,` `"` `\r` or `\n` is wrapped in double quotes
// - A double quote inside a quoted field is written twice
//
// DESIGN PRINCIPLES:
// - Pure functions: No I/O, only string processing
// - Strict reading: garbage after a closing quote is an error, not a guess
// - Blank lines between records are skipped

use std::borrow::Cow;
use std::iter::Peekable;
use std::str::Chars;

/// Field separator
pub const DELIMITER: char = ',';

/// Quote character
pub const QUOTE: char = '"';

/// One parsed record and the line it started on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number of the first line of the record
    pub line: usize,
    /// Unescaped field values
    pub fields: Vec<String>,
}

/// Failure to parse CSV input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub reason: String,
}

impl ParseError {
    fn new(line: usize, reason: &str) -> Self {
        Self {
            line,
            reason: reason.to_string(),
        }
    }
}

/// Quote a field if it would otherwise break the record structure
pub fn encode_field(value: &str) -> Cow<'_, str> {
    let needs_quotes = value
        .chars()
        .any(|c| c == DELIMITER || c == QUOTE || c == '\n' || c == '\r');

    if !needs_quotes {
        return Cow::Borrowed(value);
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push(QUOTE);
    for c in value.chars() {
        if c == QUOTE {
            quoted.push(QUOTE);
        }
        quoted.push(c);
    }
    quoted.push(QUOTE);
    Cow::Owned(quoted)
}

/// Encode a full record, including the trailing newline
pub fn encode_record(fields: &[&str]) -> String {
    let mut line = fields
        .iter()
        .map(|f| encode_field(f))
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

/// Parse every record in `input`
pub fn parse(input: &str) -> Result<Vec<Record>, ParseError> {
    RecordParser::new(input).run()
}

/// Character-level state machine over the whole input
struct RecordParser<'a> {
    chars: Peekable<Chars<'a>>,
    records: Vec<Record>,
    fields: Vec<String>,
    field: String,
    /// Current field started with a quote
    quoted: bool,
    /// Inside an open quoted section
    in_quotes: bool,
    /// Nothing of the current record has been consumed yet
    empty: bool,
    line: usize,
    record_line: usize,
}

impl<'a> RecordParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            records: Vec::new(),
            fields: Vec::new(),
            field: String::new(),
            quoted: false,
            in_quotes: false,
            empty: true,
            line: 1,
            record_line: 1,
        }
    }

    fn run(mut self) -> Result<Vec<Record>, ParseError> {
        while let Some(c) = self.chars.next() {
            if self.in_quotes {
                self.quoted_char(c);
                continue;
            }

            match c {
                QUOTE if self.field.is_empty() && !self.quoted => {
                    self.quoted = true;
                    self.in_quotes = true;
                    self.empty = false;
                }
                QUOTE => {
                    return Err(ParseError::new(self.line, "unexpected quote inside field"));
                }
                DELIMITER => {
                    self.end_field();
                    self.empty = false;
                }
                '\r' => {
                    if self.chars.peek() == Some(&'\n') {
                        continue;
                    }
                    self.end_record();
                }
                '\n' => self.end_record(),
                _ if self.quoted => {
                    return Err(ParseError::new(
                        self.line,
                        "unexpected character after closing quote",
                    ));
                }
                _ => {
                    self.field.push(c);
                    self.empty = false;
                }
            }
        }

        if self.in_quotes {
            return Err(ParseError::new(self.record_line, "unterminated quoted field"));
        }
        if !self.empty {
            self.end_record();
        }

        Ok(self.records)
    }

    fn quoted_char(&mut self, c: char) {
        match c {
            QUOTE if self.chars.peek() == Some(&QUOTE) => {
                self.chars.next();
                self.field.push(QUOTE);
            }
            QUOTE => self.in_quotes = false,
            '\n' => {
                self.line += 1;
                self.field.push(c);
            }
            _ => self.field.push(c),
        }
    }

    fn end_field(&mut self) {
        self.fields.push(std::mem::take(&mut self.field));
        self.quoted = false;
    }

    fn end_record(&mut self) {
        if !self.empty {
            self.end_field();
            self.records.push(Record {
                line: self.record_line,
                fields: std::mem::take(&mut self.fields),
            });
        }
        self.empty = true;
        self.line += 1;
        self.record_line = self.line;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields_are_not_quoted() {
        assert_eq!(encode_field("checking email"), "checking email");
        assert_eq!(encode_field(""), "");
        assert!(matches!(encode_field("a & b"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_special_fields_are_quoted() {
        assert_eq!(encode_field("a,b"), "\"a,b\"");
        assert_eq!(encode_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(encode_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_encode_record() {
        assert_eq!(
            encode_record(&["2025-07-30 10:00:00", "a, b"]),
            "2025-07-30 10:00:00,\"a, b\"\n"
        );
    }

    #[test]
    fn test_parse_simple_records() {
        let records = parse("2025-07-30 10:00:00,a\n2025-07-30 11:00:00,b c\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].fields, vec!["2025-07-30 11:00:00", "b c"]);
        assert_eq!(records[1].line, 2);
    }

    #[test]
    fn test_parse_quoted_multiline_field() {
        let input = "t1,\"first\nsecond\"\nt2,\"x, \"\"y\"\"\"\n";
        let records = parse(input).unwrap();
        assert_eq!(records[0].fields[1], "first\nsecond");
        assert_eq!(records[1].fields[1], "x, \"y\"");
        assert_eq!(records[1].line, 3);
    }

    #[test]
    fn test_parse_crlf_blank_lines_and_missing_final_newline() {
        let records = parse("a,1\r\n\r\n\nb,2").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].fields, vec!["a", "1"]);
        assert_eq!(records[1].fields, vec!["b", "2"]);
        assert_eq!(records[1].line, 4);
    }

    #[test]
    fn test_parse_empty_trailing_field() {
        let records = parse("a,\n").unwrap();
        assert_eq!(records[0].fields, vec!["a", ""]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse("a,\"open\n").unwrap_err().line, 1);
        assert_eq!(parse("ok,1\na,\"b\"c\n").unwrap_err().line, 2);
        assert!(parse("a,b\"c\n").is_err());
    }
}
