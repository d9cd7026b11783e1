use crate::command::Tool;
use crate::error::Result;
use crate::options::{self, OptionSpec};
use crate::redirect::Input;
use crate::tools::{argv_of, map_text, render_text, TextRecord};

pub const OPTIONS: &[OptionSpec] = &[];

/// Reverses the characters of every line.
#[derive(Debug, Clone)]
pub struct Rev {
    files: Vec<String>,
}

impl Rev {
    pub fn new<S: AsRef<str>>(files: Vec<String>, options: &[(S, bool)]) -> Result<Self> {
        options::normalize(Self::NAME, OPTIONS, options)?;
        Ok(Rev { files })
    }

    pub fn from_argv(argv: &[String]) -> Result<Self> {
        let (files, opts) = options::split_argv(Self::NAME, OPTIONS, argv)?;
        Self::new(files, &opts)
    }
}

pub fn reverse_lines(text: &str) -> String {
    text.lines().map(|l| l.chars().rev().collect::<String>()).collect::<Vec<_>>().join("\n")
}

impl Tool for Rev {
    type Record = TextRecord;
    const NAME: &'static str = "rev";

    fn argv(&self) -> Vec<String> { argv_of(Self::NAME, Vec::new(), &self.files) }

    fn evaluate(&self, input: &Input) -> Result<Vec<TextRecord>> { map_text(&self.files, input, "-", reverse_lines) }

    fn render_record(&self, record: &TextRecord) -> String { render_text(record) }
}
