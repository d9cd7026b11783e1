use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClinixError>;

/// Fatal errors. Per-file failures are reported as error records instead.
#[derive(Debug, Error)]
pub enum ClinixError {
    #[error("{tool}: unrecognized option '{option}'")]
    UnknownOption { tool: &'static str, option: String },

    #[error("{0}: command not found")]
    UnknownCommand(String),

    #[error("grep: invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("{path}: {}", reason(.source))]
    Input { path: String, source: io::Error },

    #[error("stdin: {}", reason(.0))]
    Stdin(io::Error),

    #[error("{target}: {}", reason(.source))]
    Output { target: String, source: io::Error },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("script: {0}")]
    Script(String),
}

/// The platform message for an I/O error, without Rust's " (os error N)" suffix.
pub fn reason(err: &io::Error) -> String {
    let s = err.to_string();
    match s.rfind(" (os error ") { Some(i) => s[..i].to_string(), None => s }
}
