use std::fs;

use serde::Serialize;
use tracing::debug;

use crate::command::{Record, Tool};
use crate::error::{reason, Result};
use crate::options::{self, OptionSpec};
use crate::redirect::Input;
use crate::tools::{argv_of, expand_operands};

pub const OPTIONS: &[OptionSpec] = &[];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LsRecord {
    File { path: String },
    Directory { path: String, entries: Vec<String> },
    Error { path: String, reason: String },
}

impl Record for LsRecord {
    fn subject(&self) -> &str {
        match self { LsRecord::File { path } | LsRecord::Directory { path, .. } | LsRecord::Error { path, .. } => path }
    }
    fn is_error(&self) -> bool { matches!(self, LsRecord::Error { .. }) }
}

/// Lists files and directory contents. With no operands, lists `.`.
#[derive(Debug, Clone)]
pub struct Ls {
    paths: Vec<String>,
}

impl Ls {
    pub fn new<S: AsRef<str>>(paths: Vec<String>, options: &[(S, bool)]) -> Result<Self> {
        options::normalize(Self::NAME, OPTIONS, options)?;
        Ok(Ls { paths })
    }

    pub fn from_argv(argv: &[String]) -> Result<Self> {
        let (paths, opts) = options::split_argv(Self::NAME, OPTIONS, argv)?;
        Self::new(paths, &opts)
    }
}

fn list_one(path: String) -> LsRecord {
    let meta = match fs::metadata(&path) {
        Ok(m) => m,
        Err(e) => { debug!(path = %path, error = %e, "cannot stat"); return LsRecord::Error { reason: reason(&e), path }; }
    };
    if !meta.is_dir() { return LsRecord::File { path }; }
    let read = fs::read_dir(&path).and_then(|rd| rd.map(|e| e.map(|e| e.file_name().to_string_lossy().into_owned())).collect::<std::io::Result<Vec<_>>>());
    match read {
        Ok(mut entries) => { entries.sort(); LsRecord::Directory { path, entries } }
        Err(e) => LsRecord::Error { reason: reason(&e), path },
    }
}

impl Tool for Ls {
    type Record = LsRecord;
    const NAME: &'static str = "ls";

    fn argv(&self) -> Vec<String> { argv_of(Self::NAME, Vec::new(), &self.paths) }

    fn evaluate(&self, _input: &Input) -> Result<Vec<LsRecord>> {
        let mut paths = expand_operands(&self.paths);
        if paths.is_empty() { paths.push(".".to_string()); }
        Ok(paths.into_iter().map(list_one).collect())
    }

    fn render_record(&self, record: &LsRecord) -> String {
        match record {
            LsRecord::File { path } => path.clone(),
            LsRecord::Directory { path, entries } => format!("{}:\n\t{}", path, entries.join("\n\t")),
            LsRecord::Error { path, reason } => format!("{}: {}", path, reason),
        }
    }
}
