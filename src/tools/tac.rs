use crate::command::Tool;
use crate::error::Result;
use crate::options::{self, OptionSpec};
use crate::redirect::Input;
use crate::tools::{argv_of, map_text, render_text, TextRecord};

pub const OPTIONS: &[OptionSpec] = &[];

/// Prints lines last to first.
#[derive(Debug, Clone)]
pub struct Tac {
    files: Vec<String>,
}

impl Tac {
    pub fn new<S: AsRef<str>>(files: Vec<String>, options: &[(S, bool)]) -> Result<Self> {
        options::normalize(Self::NAME, OPTIONS, options)?;
        Ok(Tac { files })
    }

    pub fn from_argv(argv: &[String]) -> Result<Self> {
        let (files, opts) = options::split_argv(Self::NAME, OPTIONS, argv)?;
        Self::new(files, &opts)
    }
}

pub fn reverse_order(text: &str) -> String {
    text.lines().rev().collect::<Vec<_>>().join("\n")
}

impl Tool for Tac {
    type Record = TextRecord;
    const NAME: &'static str = "tac";

    fn argv(&self) -> Vec<String> { argv_of(Self::NAME, Vec::new(), &self.files) }

    fn evaluate(&self, input: &Input) -> Result<Vec<TextRecord>> { map_text(&self.files, input, "-", reverse_order) }

    fn render_record(&self, record: &TextRecord) -> String { render_text(record) }
}
