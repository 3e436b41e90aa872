use clap::Parser;
use std::path::PathBuf;

/// Command reference shown by `stamp`, `stamp help` and after usage errors
pub const COMMANDS_HELP: &str = "\
Commands
--------
  - <note>              append <note> to active page (reads stdin when omitted)
  newnotebook [path]    create / switch notebook
  notebook [path]       choose existing / new notebook
  newpage [name]        create / switch page
  page [name]           choose existing / new page
  active                show active notebook & page
  foot [n|all]          show last n (default 10) notes or all
  show head|foot|all    show first 10, last 10 or all notes
  show N | N to M       show note N, or notes N through M
  notetime <idx>        show timestamp of note #idx (1-based)
  timenote <ts>         show notes whose timestamp starts with <ts>
  timenote <a> to <b>   show notes with timestamps from <a> through <b>
                        (two times of day, e.g. 08:00 to 09:00, match any date)
  search <keyword>      show notes containing <keyword>

Examples
--------
  stamp - fixed bug in parser
  stamp foot 25
  stamp show 3 to 7
  stamp timenote 2025-07-30
  stamp timenote 08:30
  stamp search parser";

/// Main CLI structure
///
/// Only the global flags are declared here. The command words are captured
/// verbatim and routed by `stamp_core::Command::parse`, so `stamp - a, b & c`
/// needs no quoting.
#[derive(Parser, Debug)]
#[command(name = "stamp")]
#[command(about = "Bare-bones, file-based note-taking with timestamps")]
#[command(version)]
#[command(after_help = COMMANDS_HELP)]
pub struct Cli {
    /// Config file (overrides TIMESTAMPR_CONFIG and ~/.timestampr/config.json)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log resolution steps to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Command words, e.g. `- checking email` or `show 2 to 4`
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub words: Vec<String>,
}
