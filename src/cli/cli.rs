use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

const STRUCTURE_HELP: &str = "\
Structure format:
  myproject/
  ├── dir1/
  │   ├── file1.txt
  │   └── subdir/
  └── file2.txt

A trailing `/` marks a directory. Without it, names containing a `.` are
files and everything else is a directory. `#` starts a comment. The ASCII
forms `|--`, `'--` and `|` are accepted as well.

Examples:
  buildtree \"project/
  ├── src/
  │   └── main.go\"
  buildtree --input-file structure.txt
  cat structure.txt | buildtree -";

/// Instant directory tree builder
#[derive(Parser, Debug, Clone)]
#[command(version, after_help = STRUCTURE_HELP)]
pub struct Cli {
    /// Directory structure to create, or `-` to read it from stdin
    pub structure: Option<String>,

    /// Read the structure from a file
    #[clap(long, short, conflicts_with = "structure")]
    pub input_file: Option<PathBuf>,

    /// Maximum nesting depth allowed (0 = no limit) [default: 20]
    #[clap(long, short = 'd', allow_negative_numbers = true)]
    pub max_depth: Option<i64>,

    /// Directory the structure is created in
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
