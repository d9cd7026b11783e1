//! Option tables and alias normalization.
//!
//! Every tool declares the options it recognizes as a static table of
//! [`OptionSpec`]s. Callers may name an option by any of its aliases; the
//! aliases are folded into the canonical name once, at construction, and the
//! transform code only ever asks [`Flags::is_set`] about canonical names.

use std::collections::BTreeSet;

use crate::error::{ClinixError, Result};

#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub help: &'static str,
}

impl OptionSpec {
    pub const fn flag(canonical: &'static str, aliases: &'static [&'static str], help: &'static str) -> Self {
        OptionSpec { canonical, aliases, help }
    }

    fn short(&self) -> Option<&'static str> { self.aliases.iter().copied().find(|a| a.chars().count() == 1) }
}

/// Canonical names of the options that were switched on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags(BTreeSet<&'static str>);

impl Flags {
    pub fn is_set(&self, canonical: &str) -> bool { self.0.contains(canonical) }

    /// `--canonical` for every set flag, in table order.
    pub fn argv(&self, table: &[OptionSpec]) -> Vec<String> {
        table.iter().filter(|o| self.is_set(o.canonical)).map(|o| format!("--{}", o.canonical)).collect()
    }
}

fn lookup(table: &'static [OptionSpec], name: &str) -> Option<&'static OptionSpec> {
    table.iter().find(|o| o.aliases.contains(&name))
}

/// Folds `given` into canonical flags. A flag is set when any of its aliases is
/// given as `true`; an alias outside `table` is fatal.
pub fn normalize<S: AsRef<str>>(tool: &'static str, table: &'static [OptionSpec], given: &[(S, bool)]) -> Result<Flags> {
    let mut set = BTreeSet::new();
    for (name, on) in given {
        let name = name.as_ref();
        let spec = lookup(table, name).ok_or_else(|| ClinixError::UnknownOption { tool, option: name.to_string() })?;
        if *on { set.insert(spec.canonical); }
    }
    Ok(Flags(set))
}

/// Splits a shell-style argv into operands and `(alias, true)` option pairs.
/// `--name` is a long alias, `-abc` bundles short aliases, `--` ends option
/// parsing and a lone `-` is an operand that tools read as their input.
pub fn split_argv(tool: &'static str, table: &'static [OptionSpec], argv: &[String]) -> Result<(Vec<String>, Vec<(String, bool)>)> {
    let mut operands = Vec::new();
    let mut opts = Vec::new();
    let mut it = argv.iter();
    while let Some(a) = it.next() {
        if a == "--" { operands.extend(it.by_ref().cloned()); break; }
        if let Some(long) = a.strip_prefix("--") {
            opts.push((long.to_string(), true));
        } else if a.len() > 1 && a.starts_with('-') {
            for ch in a.chars().skip(1) { opts.push((ch.to_string(), true)); }
        } else {
            operands.push(a.clone());
        }
    }
    // reject early so the error names the tool the user typed
    for (name, _) in &opts {
        if lookup(table, name).is_none() { return Err(ClinixError::UnknownOption { tool, option: name.clone() }); }
    }
    Ok((operands, opts))
}

/// Help lines for a table: `-n, --number    description`.
pub fn describe(table: &[OptionSpec]) -> Vec<String> {
    table.iter().map(|o| {
        let flags = match o.short() { Some(s) => format!("-{}, --{}", s, o.canonical), None => format!("--{}", o.canonical) };
        format!("{:<20} {}", flags, o.help)
    }).collect()
}
