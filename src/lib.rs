//! Unix-style text tools as deferred command objects.
//!
//! Each factory returns a [`Command`] reading stdin and writing stdout. The
//! builder methods rebind those ends, [`Command::render`] produces the text
//! and [`Command::force`] writes it:
//!
//! ```no_run
//! # fn main() -> clinix::Result<()> {
//! let headers = clinix::grep("^#", &["notes.txt"], &[("v", true)])?;
//! clinix::wc(&[], &[("lines", true)])?
//!     .pipe_from(headers)
//!     .redirect_append("counts.txt")
//!     .force()?;
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod error;
pub mod options;
pub mod redirect;
pub mod script;
pub mod tools;

use std::fmt::Display;

pub use command::{Command, Outcome, Record, Runnable, Tool};
pub use error::{ClinixError, Result};
pub use redirect::{Input, Output, PipeSource};
pub use tools::cat::Cat;
pub use tools::echo::{Echo, EchoRecord};
pub use tools::grep::{Grep, GrepRecord};
pub use tools::ls::{Ls, LsRecord};
pub use tools::rev::Rev;
pub use tools::tac::Tac;
pub use tools::wc::{Counts, Wc, WcRecord};
pub use tools::TextRecord;

fn owned(v: &[&str]) -> Vec<String> { v.iter().map(|s| s.to_string()).collect() }

/// Concatenates `files` (stdin when empty). Options: `n`/`number`.
pub fn cat(files: &[&str], options: &[(&str, bool)]) -> Result<Command<Cat>> {
    Ok(Command::new(Cat::new(owned(files), options)?))
}

/// Prints each item's `Display` text on its own line.
pub fn echo<I>(items: I, options: &[(&str, bool)]) -> Result<Command<Echo>>
where
    I: IntoIterator,
    I::Item: Display,
{
    Ok(Command::new(Echo::new(items.into_iter().map(|i| i.to_string()).collect(), options)?))
}

/// Searches `files` (stdin when empty) for `pattern`. Options: `i`/`ignorecase`,
/// `n`/`linenumber`, `v`/`invertmatch`.
pub fn grep(pattern: &str, files: &[&str], options: &[(&str, bool)]) -> Result<Command<Grep>> {
    Ok(Command::new(Grep::new(pattern, owned(files), options)?))
}

/// Lists `paths` (`.` when empty).
pub fn ls(paths: &[&str], options: &[(&str, bool)]) -> Result<Command<Ls>> {
    Ok(Command::new(Ls::new(owned(paths), options)?))
}

pub fn rev(files: &[&str], options: &[(&str, bool)]) -> Result<Command<Rev>> {
    Ok(Command::new(Rev::new(owned(files), options)?))
}

pub fn tac(files: &[&str], options: &[(&str, bool)]) -> Result<Command<Tac>> {
    Ok(Command::new(Tac::new(owned(files), options)?))
}

/// Counts lines, words and characters. Options: `l`/`lines`, `w`/`words`,
/// `c`/`bytes`.
pub fn wc(files: &[&str], options: &[(&str, bool)]) -> Result<Command<Wc>> {
    Ok(Command::new(Wc::new(owned(files), options)?))
}
