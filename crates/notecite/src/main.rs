/*
 * main.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! notecite binary - numbered citations for JSON document trees

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notecite::options::load_bibliography;
use notecite::{BibliographyOptions, apply_bibliography_filter, extract_citations};
use notecite_ast::Document;
use notecite_csl::{BuiltinStyle, CslProcessor, Locale};

#[derive(Parser, Debug)]
#[command(name = "notecite")]
#[command(about = "Rewrite citations into numbered, back-linked references")]
struct Args {
    /// JSON document tree to read (defaults to stdin)
    input: Option<PathBuf>,

    /// CSL-JSON bibliography file (can be specified multiple times).
    /// Entries from files come after references in the document metadata.
    #[arg(short, long = "bibliography", value_name = "FILE")]
    bibliography: Vec<PathBuf>,

    /// Append a "References" section to the document
    #[arg(long)]
    append_bibliography: bool,

    /// Citation style
    #[arg(long, default_value = "chicago-fullnote-bibliography")]
    style: String,

    /// Where to write the transformed document (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print citation counts as JSON instead of transforming the document
    #[arg(long)]
    counts: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notecite=info,notecite_csl=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut document = read_document(args.input.as_deref())?;

    if args.counts {
        let counts = extract_citations(&document);
        write_output(args.output.as_deref(), &serde_json::to_string_pretty(&counts)?)?;
        return Ok(());
    }

    let style = BuiltinStyle::from_name(&args.style)
        .ok_or_else(|| anyhow!("Unknown citation style '{}'", args.style))?;

    let base_dir = args.input.as_deref().and_then(Path::parent);
    let mut options = BibliographyOptions::from_meta(&document.meta, base_dir)
        .context("Failed to read bibliography options from document metadata")?;
    for path in &args.bibliography {
        let bibliography = load_bibliography(path)?;
        options.bibliography.extend(bibliography.iter().cloned());
    }
    options.append_bibliography_section |= args.append_bibliography;

    info!(
        entries = options.bibliography.len(),
        style = style.name(),
        "Processing citations"
    );

    let processor = CslProcessor::new(style, Locale::en_us());
    let output = apply_bibliography_filter(&mut document, &options, &processor)?;

    for diagnostic in &output.diagnostics {
        eprintln!("{}", diagnostic.to_text());
    }

    write_output(args.output.as_deref(), &document.to_json()?)?;
    Ok(())
}

fn read_document(input: Option<&Path>) -> anyhow::Result<Document> {
    let json = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read document from stdin")?;
            buf
        }
    };
    Document::from_json(&json).context("Failed to parse document JSON")
}

fn write_output(output: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
