use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use is_terminal::IsTerminal;
use prettytree::{format_value, to_json_string, to_plain_tree, to_value, Logger, TracingLogger};

/// A structural pretty-printer for JSON documents.
///
/// ptree reads JSON from stdin or files and prints an indented,
/// human-readable rendering of the value tree, or the fully-expanded
/// plain-data tree as 4-space-indented JSON.
#[derive(Parser, Debug)]
#[command(name = "ptree")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s). If not specified, reads from stdin.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output file. If not specified, writes to stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit the deep-serialized JSON tree instead of the pretty rendering.
    #[arg(short, long)]
    json: bool,

    /// Title line printed above each document.
    #[arg(short, long, value_name = "TEXT")]
    title: Option<String>,

    /// Echo each report through the tracing logger as well.
    #[arg(short, long)]
    log: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("ptree: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_writer(io::stderr)
            .init();
    }

    // Read input
    let input = if args.files.is_empty() {
        if io::stdin().is_terminal() {
            eprintln!("ptree: reading JSON from stdin (ctrl-d to end)");
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        let mut combined = String::new();
        for path in &args.files {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
            combined.push_str(&content);
            combined.push('\n');
        }
        combined
    };

    // Render each top-level document in the input
    let mut output = String::new();
    for doc in serde_json::Deserializer::from_str(&input).into_iter::<serde_json::Value>() {
        let doc = doc?;
        let value = to_value(&doc)?;
        let text = if args.json {
            to_json_string(&to_plain_tree(&value))?
        } else {
            format_value(&value)
        };
        if let Some(title) = &args.title {
            output.push_str(title);
            output.push('\n');
        }
        if args.log {
            let title = args.title.as_deref().unwrap_or("ptree");
            TracingLogger.info(&format!("\n{title}\n{text}"));
        }
        output.push_str(&text);
        output.push('\n');
    }

    // Write output
    if let Some(path) = args.output {
        fs::write(&path, &output)
            .map_err(|e| format!("cannot write '{}': {}", path.display(), e))?;
    } else {
        io::stdout().write_all(output.as_bytes())?;
    }

    Ok(())
}
