//! Pipeline scripts: `cat -n a.txt | grep -v '^#' > out.txt`.

use std::sync::Arc;

use tracing::debug;

use crate::command::{Command, Runnable, Tool};
use crate::error::{ClinixError, Result};
use crate::options::{self, OptionSpec};
use crate::tools::{cat::Cat, echo::Echo, grep::Grep, ls::Ls, rev::Rev, tac::Tac, wc::Wc};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Word(String),
    Pipe,
    Less,
    Great,
    DGreat,
}

fn tokenize(script: &str) -> Result<Vec<Token>> {
    let mut toks = Vec::new();
    let mut cur = String::new();
    let mut in_word = false;
    let mut chars = script.chars().peekable();
    let flush = |cur: &mut String, in_word: &mut bool, toks: &mut Vec<Token>| {
        if *in_word { toks.push(Token::Word(std::mem::take(cur))); *in_word = false; }
    };
    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some(q) if q == c => break,
                        Some('\\') if c == '"' => { if let Some(n) = chars.next() { cur.push(n); } }
                        Some(ch) => cur.push(ch),
                        None => return Err(ClinixError::Script(format!("unterminated {} quote", c))),
                    }
                }
            }
            '\\' => { in_word = true; if let Some(n) = chars.next() { cur.push(n); } }
            '|' => { flush(&mut cur, &mut in_word, &mut toks); toks.push(Token::Pipe); }
            '<' => { flush(&mut cur, &mut in_word, &mut toks); toks.push(Token::Less); }
            '>' => {
                flush(&mut cur, &mut in_word, &mut toks);
                if chars.peek() == Some(&'>') { chars.next(); toks.push(Token::DGreat); } else { toks.push(Token::Great); }
            }
            c if c.is_whitespace() => flush(&mut cur, &mut in_word, &mut toks),
            c => { in_word = true; cur.push(c); }
        }
    }
    flush(&mut cur, &mut in_word, &mut toks);
    Ok(toks)
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RedirSpec {
    pub in_file: Option<String>,
    /// (path, append)
    pub out_file: Option<(String, bool)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub argv: Vec<String>,
    pub redir: RedirSpec,
}

fn parse_segment(toks: &[Token]) -> Result<Segment> {
    let mut redir = RedirSpec::default();
    let mut argv = Vec::new();
    let mut it = toks.iter();
    while let Some(t) = it.next() {
        let mut target = || match it.next() {
            Some(Token::Word(w)) => Ok(w.clone()),
            _ => Err(ClinixError::Script("redirection without a target".to_string())),
        };
        match t {
            Token::Word(w) => argv.push(w.clone()),
            Token::Less => redir.in_file = Some(target()?),
            Token::Great => redir.out_file = Some((target()?, false)),
            Token::DGreat => redir.out_file = Some((target()?, true)),
            Token::Pipe => return Err(ClinixError::Script("unexpected '|'".to_string())),
        }
    }
    if argv.is_empty() { return Err(ClinixError::Script("empty command".to_string())); }
    Ok(Segment { argv, redir })
}

pub fn parse_pipeline(script: &str) -> Result<Vec<Segment>> {
    let toks = tokenize(script)?;
    if toks.is_empty() { return Ok(Vec::new()); }
    toks.split(|t| *t == Token::Pipe).map(parse_segment).collect()
}

fn wire<T: Tool>(mut cmd: Command<T>, redir: &RedirSpec, upstream: Option<Arc<dyn Runnable>>) -> Arc<dyn Runnable> {
    if let Some(up) = upstream { cmd = cmd.pipe_from(up); }
    if let Some(f) = &redir.in_file { cmd = cmd.set_input_file(f); }
    cmd = match &redir.out_file {
        Some((f, true)) => cmd.redirect_append(f),
        Some((f, false)) => cmd.redirect_overwrite(f),
        None => cmd,
    };
    Arc::new(cmd)
}

fn instantiate(seg: &Segment, upstream: Option<Arc<dyn Runnable>>) -> Result<Arc<dyn Runnable>> {
    let (name, args) = (seg.argv[0].as_str(), &seg.argv[1..]);
    let r = &seg.redir;
    Ok(match name {
        "cat" => wire(Command::new(Cat::from_argv(args)?), r, upstream),
        "echo" => wire(Command::new(Echo::from_argv(args)?), r, upstream),
        "grep" => wire(Command::new(Grep::from_argv(args)?), r, upstream),
        "ls" => wire(Command::new(Ls::from_argv(args)?), r, upstream),
        "rev" => wire(Command::new(Rev::from_argv(args)?), r, upstream),
        "tac" => wire(Command::new(Tac::from_argv(args)?), r, upstream),
        "wc" => wire(Command::new(Wc::from_argv(args)?), r, upstream),
        other => return Err(ClinixError::UnknownCommand(other.to_string())),
    })
}

/// Chains the segments left to right; the result is the last command.
pub fn build_segments(segments: &[Segment]) -> Result<Arc<dyn Runnable>> {
    let last = segments.len().checked_sub(1).ok_or_else(|| ClinixError::Script("empty script".to_string()))?;
    let mut upstream: Option<Arc<dyn Runnable>> = None;
    for (i, seg) in segments.iter().enumerate() {
        if i < last && seg.redir.out_file.is_some() {
            return Err(ClinixError::Script(format!("{}: output redirection is only allowed at the end of a pipeline", seg.argv[0])));
        }
        upstream = Some(instantiate(seg, upstream.take())?);
    }
    let cmd = upstream.ok_or_else(|| ClinixError::Script("empty script".to_string()))?;
    debug!(command = %cmd, "built pipeline");
    Ok(cmd)
}

pub fn build(script: &str) -> Result<Arc<dyn Runnable>> { build_segments(&parse_pipeline(script)?) }

/// A single command given as argv, tool name first.
pub fn build_argv(argv: Vec<String>) -> Result<Arc<dyn Runnable>> {
    build_segments(&[Segment { argv, redir: RedirSpec::default() }])
}

pub struct HelpEntry { pub name: &'static str, pub usage: &'static str, pub desc: &'static str, pub options: &'static [OptionSpec] }

pub static HELP_ENTRIES: &[HelpEntry] = &[
    HelpEntry { name: "cat", usage: "cat [-n] [file...]", desc: "concatenate files", options: crate::tools::cat::OPTIONS },
    HelpEntry { name: "echo", usage: "echo [arg...]", desc: "print each argument on its own line", options: crate::tools::echo::OPTIONS },
    HelpEntry { name: "grep", usage: "grep [-inv] pattern [file...]", desc: "print lines matching a regular expression", options: crate::tools::grep::OPTIONS },
    HelpEntry { name: "ls", usage: "ls [path...]", desc: "list files and directory contents", options: crate::tools::ls::OPTIONS },
    HelpEntry { name: "rev", usage: "rev [file...]", desc: "reverse the characters of each line", options: crate::tools::rev::OPTIONS },
    HelpEntry { name: "tac", usage: "tac [file...]", desc: "print lines in reverse order", options: crate::tools::tac::OPTIONS },
    HelpEntry { name: "wc", usage: "wc [-lwc] [file...]", desc: "count lines, words and characters", options: crate::tools::wc::OPTIONS },
];

pub fn find_help(name: &str) -> Option<&'static HelpEntry> { HELP_ENTRIES.iter().find(|e| e.name == name) }

pub fn format_entry(e: &HelpEntry) -> String {
    let mut s = format!("NAME\n    {} - {}\n\nUSAGE\n    {}\n", e.name, e.desc, e.usage);
    if !e.options.is_empty() {
        s.push_str("\nOPTIONS\n");
        for line in options::describe(e.options) { s.push_str("    "); s.push_str(&line); s.push('\n'); }
    }
    s
}
