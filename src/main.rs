//! Text segmentation CLI.
//!
//! This binary exposes the parsed-text library on the command line:
//! it marks pattern occurrences in a piece of text and prints the
//! resulting segment sequence, one segment per line.

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use parsed_text::{parse, BuiltinPattern, PatternRule};

/// Text segmentation tool
///
/// Splits text into plain and matched segments using built-in patterns
/// (--url, --phone, --email) and custom regex or literal rules. Earlier
/// rules take priority over later ones; built-ins run first, then
/// --pattern rules, then --literal rules.
#[derive(Parser)]
#[command(name = "parsed-text")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Text to segment (reads stdin when omitted)
    text: Option<String>,

    /// Mark URLs
    #[arg(long)]
    url: bool,

    /// Mark phone numbers
    #[arg(long)]
    phone: bool,

    /// Mark email addresses
    #[arg(long)]
    email: bool,

    /// Regex patterns to mark (can be specified multiple times)
    #[arg(short, long, value_name = "REGEX")]
    pattern: Vec<String>,

    /// Literal substrings to mark (can be specified multiple times)
    #[arg(short, long, value_name = "TEXT")]
    literal: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Builds the rule table from CLI flags, in priority order.
fn build_rules(cli: &Cli) -> Result<Vec<PatternRule>> {
    let mut rules = Vec::new();

    let builtins = [
        (cli.url, BuiltinPattern::Url),
        (cli.phone, BuiltinPattern::Phone),
        (cli.email, BuiltinPattern::Email),
    ];
    for (enabled, kind) in builtins {
        if enabled {
            rules.push(
                PatternRule::builder()
                    .builtin(kind)
                    .meta("type", kind.name())
                    .build()?,
            );
        }
    }

    for pattern in &cli.pattern {
        rules.push(
            PatternRule::builder()
                .regex(pattern)
                .meta("type", "regex")
                .build()
                .with_context(|| format!("invalid --pattern '{pattern}'"))?,
        );
    }

    for needle in &cli.literal {
        rules.push(
            PatternRule::builder()
                .literal(needle)
                .meta("type", "literal")
                .build()
                .with_context(|| format!("invalid --literal '{needle}'"))?,
        );
    }

    Ok(rules)
}

fn read_input(cli: &Cli) -> Result<String> {
    match &cli.text {
        Some(text) => Ok(text.clone()),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read text from stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rules = build_rules(&cli)?;
    if rules.is_empty() {
        anyhow::bail!(
            "No patterns specified. Use --url, --phone, --email, --pattern, or --literal."
        );
    }

    let text = read_input(&cli)?;
    let segments = parse(&text, &rules);

    if cli.verbose {
        println!("Rules:    {}", rules.len());
        println!("Segments: {}", segments.len());
        println!();
    }

    for segment in &segments {
        match segment.match_info() {
            Some(info) => {
                let kind = info.meta("type").unwrap_or("match");
                println!("match[{kind}] @{} {:?}", info.start(), segment.text());
            }
            None => println!("text            {:?}", segment.text()),
        }
    }

    Ok(())
}
