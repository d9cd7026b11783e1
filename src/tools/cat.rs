use crate::command::Tool;
use crate::error::Result;
use crate::options::{self, Flags, OptionSpec};
use crate::redirect::Input;
use crate::tools::{argv_of, map_text, render_text, TextRecord};

pub const OPTIONS: &[OptionSpec] = &[
    OptionSpec::flag("number", &["n", "number"], "number all output lines"),
];

/// Concatenates files, optionally numbering their lines.
#[derive(Debug, Clone)]
pub struct Cat {
    files: Vec<String>,
    flags: Flags,
}

impl Cat {
    pub fn new<S: AsRef<str>>(files: Vec<String>, options: &[(S, bool)]) -> Result<Self> {
        Ok(Cat { files, flags: options::normalize(Self::NAME, OPTIONS, options)? })
    }

    pub fn from_argv(argv: &[String]) -> Result<Self> {
        let (files, opts) = options::split_argv(Self::NAME, OPTIONS, argv)?;
        Self::new(files, &opts)
    }

    pub fn number(&self) -> bool { self.flags.is_set("number") }
}

/// Numbers `text` line by line. Every counter is right-justified to
/// `4 + digits(total lines)` and followed by two spaces.
pub fn number_lines(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let width = 4 + lines.len().to_string().len();
    lines.iter().enumerate().map(|(i, l)| format!("{:>width$}  {}", i + 1, l, width = width)).collect::<Vec<_>>().join("\n")
}

impl Tool for Cat {
    type Record = TextRecord;
    const NAME: &'static str = "cat";

    fn argv(&self) -> Vec<String> { argv_of(Self::NAME, self.flags.argv(OPTIONS), &self.files) }

    fn evaluate(&self, input: &Input) -> Result<Vec<TextRecord>> {
        let number = self.number();
        map_text(&self.files, input, "-", |text| if number { number_lines(text) } else { text.lines().collect::<Vec<_>>().join("\n") })
    }

    fn render_record(&self, record: &TextRecord) -> String { render_text(record) }
}
