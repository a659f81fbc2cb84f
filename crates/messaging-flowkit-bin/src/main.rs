mod logging;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use messaging_flowkit::{
    MessageContent, TransportPayload, ValidationError, ValidationFailure, annotation_nodes,
    build_payload, classify, validate, validate_envelope,
};
use serde_json::json;

#[derive(Parser)]
#[command(name = "messaging-flowkit-bin")]
#[command(about = "Validate and preview native-flow interactive messages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a message document and print the error report.
    Check {
        /// Path to a JSON document, or `-` for stdin.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
    },
    /// Validate a message document, then print the wire payload and
    /// annotation nodes.
    Build {
        /// Path to a JSON document, or `-` for stdin.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Print compact JSON instead of pretty.
        #[arg(long)]
        compact: bool,
    },
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Check { input } => check(&input),
        Command::Build { input, compact } => build(&input, compact),
    }
}

fn read_content(input: &Path) -> Result<MessageContent> {
    let raw = if input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("read stdin")?;
        buf
    } else {
        fs::read_to_string(input).with_context(|| format!("read {}", input.display()))?
    };
    serde_json::from_str(&raw).context("parse message document")
}

fn collect_errors(content: &MessageContent) -> Vec<ValidationError> {
    match content {
        MessageContent::Descriptor(descriptor) => validate(descriptor).errors,
        MessageContent::Envelope(payload) => validate_envelope(payload),
    }
}

fn check(input: &Path) -> Result<()> {
    let content = read_content(input)?;
    let errors = collect_errors(&content);
    let ok = errors.is_empty();
    let report = json!({ "ok": ok, "errors": errors });
    println!("{}", serde_json::to_string_pretty(&report)?);
    if !ok {
        process::exit(1);
    }
    Ok(())
}

fn build(input: &Path, compact: bool) -> Result<()> {
    let content = read_content(input)?;
    let payload: TransportPayload = match content {
        MessageContent::Descriptor(descriptor) => build_payload(&validate(&descriptor).into_result()?),
        MessageContent::Envelope(payload) => {
            let errors = validate_envelope(&payload);
            if !errors.is_empty() {
                return Err(ValidationFailure { errors }.into());
            }
            payload
        }
    };
    let class = classify(&payload);
    let preview = json!({
        "class": format!("{class:?}"),
        "payload": payload,
        "annotations": annotation_nodes(class),
    });
    let rendered = if compact {
        serde_json::to_string(&preview)?
    } else {
        serde_json::to_string_pretty(&preview)?
    };
    println!("{rendered}");
    Ok(())
}
