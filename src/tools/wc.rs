use std::ops::AddAssign;

use serde::Serialize;

use crate::command::{Record, Tool};
use crate::error::Result;
use crate::options::{self, Flags, OptionSpec};
use crate::redirect::Input;
use crate::tools::{argv_of, load_operands};

pub const OPTIONS: &[OptionSpec] = &[
    OptionSpec::flag("lines", &["l", "lines"], "print the line count"),
    OptionSpec::flag("words", &["w", "words"], "print the word count"),
    OptionSpec::flag("bytes", &["c", "bytes"], "print the character count"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub lines: usize,
    pub words: usize,
    /// Characters, not UTF-8 bytes.
    pub bytes: usize,
}

impl Counts {
    pub fn of(text: &str) -> Self {
        Counts { lines: text.lines().count(), words: text.split_whitespace().count(), bytes: text.chars().count() }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, o: Counts) { self.lines += o.lines; self.words += o.words; self.bytes += o.bytes; }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WcRecord {
    Counts { file: String, #[serde(flatten)] counts: Counts },
    Error { file: String, reason: String },
}

impl Record for WcRecord {
    fn subject(&self) -> &str { match self { WcRecord::Counts { file, .. } | WcRecord::Error { file, .. } => file } }
    fn is_error(&self) -> bool { matches!(self, WcRecord::Error { .. }) }
}

/// Counts lines, words and characters.
#[derive(Debug, Clone)]
pub struct Wc {
    files: Vec<String>,
    flags: Flags,
}

impl Wc {
    pub fn new<S: AsRef<str>>(files: Vec<String>, options: &[(S, bool)]) -> Result<Self> {
        Ok(Wc { files, flags: options::normalize(Self::NAME, OPTIONS, options)? })
    }

    pub fn from_argv(argv: &[String]) -> Result<Self> {
        let (files, opts) = options::split_argv(Self::NAME, OPTIONS, argv)?;
        Self::new(files, &opts)
    }

    /// (lines, words, bytes) columns to print; all of them unless restricted.
    pub fn columns(&self) -> (bool, bool, bool) {
        let (l, w, c) = (self.flags.is_set("lines"), self.flags.is_set("words"), self.flags.is_set("bytes"));
        if l || w || c { (l, w, c) } else { (true, true, true) }
    }

    fn selected(&self, counts: &Counts) -> Vec<usize> {
        let (l, w, c) = self.columns();
        [(l, counts.lines), (w, counts.words), (c, counts.bytes)].into_iter().filter(|(on, _)| *on).map(|(_, n)| n).collect()
    }
}

/// Sum over the count records; errors contribute nothing.
pub fn total(records: &[WcRecord]) -> WcRecord {
    let mut sum = Counts::default();
    for r in records { if let WcRecord::Counts { counts, .. } = r { sum += *counts; } }
    WcRecord::Counts { file: "total".to_string(), counts: sum }
}

impl Tool for Wc {
    type Record = WcRecord;
    const NAME: &'static str = "wc";

    fn argv(&self) -> Vec<String> { argv_of(Self::NAME, self.flags.argv(OPTIONS), &self.files) }

    fn evaluate(&self, input: &Input) -> Result<Vec<WcRecord>> {
        let mut out: Vec<WcRecord> = load_operands(&self.files, input, "")?.into_iter().map(|(file, loaded)| match loaded {
            Ok(text) => WcRecord::Counts { counts: Counts::of(&text), file },
            Err(reason) => WcRecord::Error { file, reason },
        }).collect();
        if out.len() > 1 { let t = total(&out); out.push(t); }
        Ok(out)
    }

    fn render_record(&self, record: &WcRecord) -> String { self.render(std::slice::from_ref(record)) }

    /// Counts are right-aligned to the widest selected count of the batch.
    fn render(&self, records: &[WcRecord]) -> String {
        let width = records.iter()
            .filter_map(|r| match r { WcRecord::Counts { counts, .. } => Some(counts), _ => None })
            .flat_map(|c| self.selected(c))
            .map(|n| n.to_string().len())
            .max().unwrap_or(1);
        records.iter().map(|r| match r {
            WcRecord::Counts { file, counts } => {
                let mut line = self.selected(counts).iter().map(|n| format!("{:>width$}", n, width = width)).collect::<Vec<_>>().join(" ");
                if !file.is_empty() { line.push(' '); line.push_str(file); }
                line
            }
            WcRecord::Error { file, reason } => format!("{}: {}", file, reason),
        }).collect::<Vec<_>>().join("\n")
    }
}
