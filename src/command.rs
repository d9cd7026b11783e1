//! The deferred, re-runnable command object shared by every tool.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::error::{ClinixError, Result};
use crate::redirect::{Input, Output, PipeSource};

/// One success or error entry produced by an evaluation.
pub trait Record: Serialize + fmt::Debug + Clone + Send + Sync {
    /// File name, path or stdin marker the record is about.
    fn subject(&self) -> &str;
    fn is_error(&self) -> bool;
}

/// The transform behind a command: operands, normalized options and the
/// records they produce from an input.
pub trait Tool: fmt::Debug + Clone + Send + Sync + 'static {
    type Record: Record;
    const NAME: &'static str;

    /// The invocation as it would be typed, tool name first.
    fn argv(&self) -> Vec<String>;

    /// Runs the transform. `input` is only consulted when the tool has no
    /// operands of its own.
    fn evaluate(&self, input: &Input) -> Result<Vec<Self::Record>>;

    fn render_record(&self, record: &Self::Record) -> String;

    fn render(&self, records: &[Self::Record]) -> String {
        records.iter().map(|r| self.render_record(r)).collect::<Vec<_>>().join("\n")
    }
}

/// Counts from one `force`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub records: usize,
    pub failures: usize,
}

/// Object-safe view of a command, used for piping between different tools
/// and by the script front end.
pub trait Runnable: fmt::Display + Send + Sync {
    fn render(&self) -> Result<String>;
    fn force(&self) -> Result<Outcome>;
    fn records_json(&self) -> Result<serde_json::Value>;
}

#[derive(Debug, Clone)]
pub struct Command<T: Tool> {
    tool: T,
    input: Input,
    output: Output,
}

impl<T: Tool> Command<T> {
    pub fn new(tool: T) -> Self {
        Command { tool, input: Input::Stdin, output: Output::Stdout }
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn redirect_overwrite(mut self, dest: impl Into<PathBuf>) -> Self {
        self.output = Output::Overwrite(dest.into());
        self
    }

    pub fn redirect_append(mut self, dest: impl Into<PathBuf>) -> Self {
        self.output = Output::Append(dest.into());
        self
    }

    pub fn set_input_file(mut self, src: impl Into<PathBuf>) -> Self {
        self.input = Input::File(src.into());
        self
    }

    /// Reads from `src` instead of stdin. A command source is not rendered
    /// until this command is evaluated.
    pub fn pipe_from(mut self, src: impl Into<PipeSource>) -> Self {
        self.input = Input::Piped(src.into());
        debug!(command = %self, "piped");
        self
    }

    pub fn read_input(&self) -> Result<String> {
        self.input.read()
    }

    pub fn evaluate(&self) -> Result<Vec<T::Record>> {
        self.tool.evaluate(&self.input)
    }

    pub fn render(&self) -> Result<String> {
        let records = self.evaluate()?;
        Ok(self.tool.render(&records))
    }

    /// Evaluates, then writes the rendered text and a trailing newline to the
    /// output sink. Nothing is written if evaluation fails.
    pub fn force(&self) -> Result<Outcome> {
        let records = self.evaluate()?;
        let text = self.tool.render(&records);
        let outcome = Outcome {
            records: records.len(),
            failures: records.iter().filter(|r| r.is_error()).count(),
        };
        debug!(command = %self, records = outcome.records, failures = outcome.failures, "writing output");
        let mut sink = self.output.open()?;
        let write = |sink: &mut dyn Write| -> io::Result<()> {
            sink.write_all(text.as_bytes())?;
            sink.write_all(b"\n")?;
            sink.flush()
        };
        write(sink.as_mut()).map_err(|source| ClinixError::Output { target: self.output.to_string(), source })?;
        Ok(outcome)
    }
}

impl<T: Tool> fmt::Display for Command<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Input::Piped(src) = &self.input {
            write!(f, "{} | ", src)?;
        }
        f.write_str(&self.tool.argv().join(" "))?;
        if let Input::File(p) = &self.input {
            write!(f, " < {}", p.display())?;
        }
        if self.output != Output::Stdout {
            write!(f, " {}", self.output)?;
        }
        Ok(())
    }
}

impl<T: Tool> Runnable for Command<T> {
    fn render(&self) -> Result<String> {
        Command::<T>::render(self)
    }

    fn force(&self) -> Result<Outcome> {
        Command::<T>::force(self)
    }

    fn records_json(&self) -> Result<serde_json::Value> {
        let records = self.evaluate()?;
        Ok(serde_json::to_value(records)?)
    }
}

impl<T: Tool> From<Command<T>> for PipeSource {
    fn from(c: Command<T>) -> Self {
        PipeSource::Command(Arc::new(c))
    }
}
