use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::command::{Record, Tool};
use crate::error::{ClinixError, Result};
use crate::options::{self, Flags, OptionSpec};
use crate::redirect::Input;
use crate::tools::{argv_of, load_operands};

pub const OPTIONS: &[OptionSpec] = &[
    OptionSpec::flag("ignorecase", &["i", "ignorecase"], "ignore case distinctions"),
    OptionSpec::flag("linenumber", &["n", "linenumber"], "prefix each match with its line number"),
    OptionSpec::flag("invertmatch", &["v", "invertmatch"], "select non-matching lines"),
];

pub const STDIN_MARKER: &str = "<stdin>";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GrepRecord {
    Match { file: String, line: String, line_number: usize },
    Error { file: String, reason: String },
}

impl Record for GrepRecord {
    fn subject(&self) -> &str { match self { GrepRecord::Match { file, .. } | GrepRecord::Error { file, .. } => file } }
    fn is_error(&self) -> bool { matches!(self, GrepRecord::Error { .. }) }
}

/// Selects lines matching a regular expression.
#[derive(Debug, Clone)]
pub struct Grep {
    pattern: String,
    regex: Regex,
    files: Vec<String>,
    flags: Flags,
}

impl Grep {
    /// Compiles `pattern` up front; an invalid pattern is fatal.
    pub fn new<S: AsRef<str>>(pattern: &str, files: Vec<String>, options: &[(S, bool)]) -> Result<Self> {
        let flags = options::normalize(Self::NAME, OPTIONS, options)?;
        let regex = RegexBuilder::new(pattern).case_insensitive(flags.is_set("ignorecase")).build()?;
        Ok(Grep { pattern: pattern.to_string(), regex, files, flags })
    }

    /// The first operand is the pattern.
    pub fn from_argv(argv: &[String]) -> Result<Self> {
        let (mut operands, opts) = options::split_argv(Self::NAME, OPTIONS, argv)?;
        if operands.is_empty() { return Err(ClinixError::Script("grep: missing pattern".to_string())); }
        let pattern = operands.remove(0);
        Self::new(&pattern, operands, &opts)
    }

    pub fn invert(&self) -> bool { self.flags.is_set("invertmatch") }
    pub fn line_numbers(&self) -> bool { self.flags.is_set("linenumber") }

    /// Trailing whitespace is dropped before matching and is not printed.
    fn matches_in(&self, file: &str, text: &str) -> Vec<GrepRecord> {
        let invert = self.invert();
        text.lines().map(str::trim_end).enumerate()
            .filter(|(_, line)| self.regex.is_match(line) != invert)
            .map(|(i, line)| GrepRecord::Match { file: file.to_string(), line: line.to_string(), line_number: i + 1 })
            .collect()
    }
}

impl Tool for Grep {
    type Record = GrepRecord;
    const NAME: &'static str = "grep";

    fn argv(&self) -> Vec<String> {
        let mut operands = vec![format!("{:?}", self.pattern)];
        operands.extend(self.files.iter().cloned());
        argv_of(Self::NAME, self.flags.argv(OPTIONS), &operands)
    }

    fn evaluate(&self, input: &Input) -> Result<Vec<GrepRecord>> {
        let mut out = Vec::new();
        for (file, loaded) in load_operands(&self.files, input, STDIN_MARKER)? {
            match loaded {
                Ok(text) => out.extend(self.matches_in(&file, &text)),
                Err(reason) => out.push(GrepRecord::Error { file, reason }),
            }
        }
        Ok(out)
    }

    fn render_record(&self, record: &GrepRecord) -> String {
        match record {
            GrepRecord::Match { line, line_number, .. } if self.line_numbers() => format!("{}:{}", line_number, line),
            GrepRecord::Match { line, .. } => line.clone(),
            GrepRecord::Error { file, reason } => format!("grep: {}: {}", file, reason),
        }
    }
}
