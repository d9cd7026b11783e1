use anyhow::{anyhow, bail, Result};
use std::env;
use std::io::Write;

use clinix::script::{self, find_help, format_entry, HELP_ENTRIES};

fn init_logging() {
    let level = env::var("CLINIX_LOG").ok().and_then(|v| v.parse::<tracing::Level>().ok()).unwrap_or(tracing::Level::WARN);
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();
}

fn print_help(topic: Option<&str>) -> Result<()> {
    let mut stdout = std::io::stdout();
    match topic {
        Some(name) => match find_help(name) {
            Some(e) => write!(stdout, "{}", format_entry(e))?,
            None => bail!("no help for command: {}", name),
        },
        None => {
            writeln!(stdout, "usage: clinix [--json] -c 'SCRIPT'\n       clinix [--json] TOOL [ARG...]\n       clinix --help [TOOL]\n")?;
            writeln!(stdout, "tools:")?;
            for e in HELP_ENTRIES { writeln!(stdout, "    {:<6} {}", e.name, e.desc)?; }
        }
    }
    stdout.flush()?;
    Ok(())
}

/// Exit status: 0 all records succeeded, 1 some record was an error.
fn run() -> Result<i32> {
    let mut args = env::args().skip(1);
    let mut script: Option<String> = None;
    let mut argv: Vec<String> = Vec::new();
    let mut json = false;
    while let Some(a) = args.next() {
        match a.as_str() {
            "-c" => { script = Some(args.next().ok_or_else(|| anyhow!("missing script after -c"))?); }
            "--json" => json = true,
            "-h" | "--help" => { print_help(args.next().as_deref())?; return Ok(0); }
            other if other.starts_with('-') => bail!("unknown arg: {}", other),
            _ => { argv.push(a.clone()); argv.extend(args.by_ref()); }
        }
    }
    let cmd = match (script, argv.is_empty()) {
        (Some(s), true) => script::build(&s)?,
        (None, false) => script::build_argv(argv)?,
        (Some(_), false) => bail!("-c cannot be combined with a command"),
        (None, true) => { print_help(None)?; return Ok(2); }
    };
    if json {
        let records = cmd.records_json()?;
        let failed = records.as_array().map(|a| a.iter().any(|r| r["status"] == "error")).unwrap_or(false);
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(if failed { 1 } else { 0 });
    }
    let outcome = cmd.force()?;
    Ok(if outcome.failures > 0 { 1 } else { 0 })
}

fn main() {
    init_logging();
    let code = match run() {
        Ok(code) => code,
        Err(e) => { eprintln!("clinix: {:#}", e); 2 }
    };
    std::process::exit(code);
}
