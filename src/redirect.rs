//! Input and output descriptors of a command.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::command::Runnable;
use crate::error::{ClinixError, Result};

/// Where a command's text comes from when it has no file operands.
#[derive(Clone, Default)]
pub enum Input {
    #[default]
    Stdin,
    File(PathBuf),
    Piped(PipeSource),
}

impl Input {
    /// Resolves the descriptor to text. Failing to read it is fatal, unlike a
    /// bad file operand.
    pub fn read(&self) -> Result<String> {
        match self {
            Input::Stdin => {
                let mut buf = String::new();
                io::stdin().lock().read_to_string(&mut buf).map_err(ClinixError::Stdin)?;
                trace!(bytes = buf.len(), "read stdin");
                Ok(buf)
            }
            Input::File(path) => {
                debug!(path = %path.display(), "reading input file");
                fs::read_to_string(path).map_err(|source| ClinixError::Input { path: path.display().to_string(), source })
            }
            Input::Piped(src) => src.resolve(),
        }
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => f.write_str("Stdin"),
            Input::File(p) => f.debug_tuple("File").field(p).finish(),
            Input::Piped(src) => f.debug_tuple("Piped").field(&src.to_string()).finish(),
        }
    }
}

/// Where `force` writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Output {
    #[default]
    Stdout,
    Overwrite(PathBuf),
    Append(PathBuf),
}

impl Output {
    /// Opens the sink. File sinks are created if missing and closed when the
    /// returned writer is dropped.
    pub fn open(&self) -> Result<Box<dyn Write>> {
        let (path, append) = match self {
            Output::Stdout => return Ok(Box::new(io::stdout().lock())),
            Output::Overwrite(p) => (p, false),
            Output::Append(p) => (p, true),
        };
        let mut opts = OpenOptions::new();
        opts.write(true).create(true);
        if append {
            opts.append(true);
        } else {
            opts.truncate(true);
        }
        let f = opts.open(path).map_err(|source| ClinixError::Output { target: path.display().to_string(), source })?;
        Ok(Box::new(f))
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stdout => f.write_str("<stdout>"),
            Output::Overwrite(p) => write!(f, "> {}", p.display()),
            Output::Append(p) => write!(f, ">> {}", p.display()),
        }
    }
}

/// The value a command reads when it is piped from something.
#[derive(Clone)]
pub enum PipeSource {
    /// Another command; rendered each time the downstream reads it.
    Command(Arc<dyn Runnable>),
    Text(String),
    /// Joined with newlines.
    Lines(Vec<String>),
}

impl PipeSource {
    /// Any displayable value, stringified now.
    pub fn value(v: impl fmt::Display) -> Self {
        PipeSource::Text(v.to_string())
    }

    pub fn resolve(&self) -> Result<String> {
        match self {
            PipeSource::Command(c) => {
                debug!(upstream = %c, "rendering upstream");
                c.render()
            }
            PipeSource::Text(s) => Ok(s.clone()),
            PipeSource::Lines(v) => Ok(v.join("\n")),
        }
    }
}

impl fmt::Display for PipeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipeSource::Command(c) => write!(f, "{}", c),
            PipeSource::Text(s) => write!(f, "{:?}", s),
            PipeSource::Lines(v) => write!(f, "{:?}", v),
        }
    }
}

impl From<String> for PipeSource {
    fn from(s: String) -> Self {
        PipeSource::Text(s)
    }
}

impl From<&str> for PipeSource {
    fn from(s: &str) -> Self {
        PipeSource::Text(s.to_string())
    }
}

impl From<Vec<String>> for PipeSource {
    fn from(v: Vec<String>) -> Self {
        PipeSource::Lines(v)
    }
}

impl From<Vec<&str>> for PipeSource {
    fn from(v: Vec<&str>) -> Self {
        PipeSource::Lines(v.into_iter().map(String::from).collect())
    }
}

impl From<Arc<dyn Runnable>> for PipeSource {
    fn from(c: Arc<dyn Runnable>) -> Self {
        PipeSource::Command(c)
    }
}

impl From<Box<dyn Runnable>> for PipeSource {
    fn from(c: Box<dyn Runnable>) -> Self {
        PipeSource::Command(Arc::from(c))
    }
}
