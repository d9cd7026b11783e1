//! The tool transforms and the helpers they share.

use std::fs;

use serde::Serialize;
use tracing::debug;

use crate::command::Record;
use crate::error::{reason, Result};
use crate::redirect::Input;

pub mod cat;
pub mod echo;
pub mod grep;
pub mod ls;
pub mod rev;
pub mod tac;
pub mod wc;

/// Result of a tool that maps a whole text to a whole text (cat, rev, tac).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TextRecord {
    Success { file: String, contents: String },
    Error { file: String, reason: String },
}

impl Record for TextRecord {
    fn subject(&self) -> &str { match self { TextRecord::Success { file, .. } | TextRecord::Error { file, .. } => file } }
    fn is_error(&self) -> bool { matches!(self, TextRecord::Error { .. }) }
}

pub(crate) fn render_text(record: &TextRecord) -> String {
    match record {
        TextRecord::Success { contents, .. } => contents.clone(),
        TextRecord::Error { file, reason } => format!("{}: {}", file, reason),
    }
}

/// Expands glob operands. A pattern matching nothing stays literal so the
/// missing file is reported by whoever opens it.
pub(crate) fn expand_operands(operands: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for op in operands {
        if !op.contains(['*', '?', '[']) { out.push(op.clone()); continue; }
        let mut matched: Vec<String> = match glob::glob(op) {
            Ok(paths) => paths.filter_map(|p| p.ok()).map(|p| p.to_string_lossy().into_owned()).collect(),
            Err(_) => Vec::new(),
        };
        if matched.is_empty() { out.push(op.clone()); } else { matched.sort(); out.append(&mut matched); }
    }
    out
}

/// Reads one operand, turning a failure into its error reason.
pub(crate) fn read_operand(file: &str) -> std::result::Result<String, String> {
    fs::read_to_string(file).map_err(|e| {
        debug!(file, error = %e, "operand unreadable");
        reason(&e)
    })
}

/// An operand's text, or the reason it could not be read.
pub(crate) type Loaded = std::result::Result<String, String>;

/// Resolves operands to `(subject, text)` pairs. No operands, or a `-`
/// operand, reads the input descriptor under `stdin_marker`; failing to read
/// that is fatal, while an unreadable file only fails its own pair.
pub(crate) fn load_operands(operands: &[String], input: &Input, stdin_marker: &str) -> Result<Vec<(String, Loaded)>> {
    let files = expand_operands(operands);
    if files.is_empty() {
        return Ok(vec![(stdin_marker.to_string(), Ok(input.read()?))]);
    }
    files
        .into_iter()
        .map(|file| -> Result<(String, Loaded)> {
            if file == "-" {
                return Ok((stdin_marker.to_string(), Ok(input.read()?)));
            }
            let loaded = read_operand(&file);
            Ok((file, loaded))
        })
        .collect()
}

/// Applies `f` to the text of every operand (see [`load_operands`]).
pub(crate) fn map_text(operands: &[String], input: &Input, stdin_marker: &str, f: impl Fn(&str) -> String) -> Result<Vec<TextRecord>> {
    Ok(load_operands(operands, input, stdin_marker)?.into_iter().map(|(file, loaded)| match loaded {
        Ok(text) => TextRecord::Success { contents: f(&text), file },
        Err(reason) => TextRecord::Error { file, reason },
    }).collect())
}

/// Tool name, then `--flags`, then operands.
pub(crate) fn argv_of(name: &str, flags: Vec<String>, operands: &[String]) -> Vec<String> {
    let mut v = vec![name.to_string()];
    v.extend(flags);
    v.extend(operands.iter().cloned());
    v
}
