use serde::Serialize;

use crate::command::{Record, Tool};
use crate::error::Result;
use crate::options::{self, OptionSpec};
use crate::redirect::Input;

pub const OPTIONS: &[OptionSpec] = &[];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EchoRecord {
    pub text: String,
}

impl Record for EchoRecord {
    fn subject(&self) -> &str { "" }
    fn is_error(&self) -> bool { false }
}

/// Prints each item on its own line. Items are stringified at construction.
#[derive(Debug, Clone)]
pub struct Echo {
    items: Vec<String>,
}

impl Echo {
    pub fn new<S: AsRef<str>>(items: Vec<String>, options: &[(S, bool)]) -> Result<Self> {
        options::normalize(Self::NAME, OPTIONS, options)?;
        Ok(Echo { items })
    }

    pub fn from_argv(argv: &[String]) -> Result<Self> {
        let (items, opts) = options::split_argv(Self::NAME, OPTIONS, argv)?;
        Self::new(items, &opts)
    }
}

impl Tool for Echo {
    type Record = EchoRecord;
    const NAME: &'static str = "echo";

    fn argv(&self) -> Vec<String> {
        std::iter::once(Self::NAME.to_string()).chain(self.items.iter().map(|i| format!("{:?}", i))).collect()
    }

    fn evaluate(&self, _input: &Input) -> Result<Vec<EchoRecord>> {
        Ok(self.items.iter().map(|text| EchoRecord { text: text.clone() }).collect())
    }

    fn render_record(&self, record: &EchoRecord) -> String { record.text.clone() }
}
