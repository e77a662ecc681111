//! Runs the demos from the catalog and prints their output.
//!
//! Run with: cargo run --bin gallery -- [DEMO]... [--list [--json]] [--config <FILE>] [--no-color] [--no-summary]

use clap::Parser;
use colored::Colorize;
use oop_patterns::catalog::{self, Demo};
use oop_patterns::{GalleryConfig, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Demos to run (default: the config's list, or all of them)
    demos: Vec<String>,

    /// List the catalog instead of running anything
    #[arg(short, long)]
    list: bool,

    /// With --list, print the catalog as JSON
    #[arg(long, requires = "list")]
    json: bool,

    /// Read settings from this TOML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable colored headers
    #[arg(long)]
    no_color: bool,

    /// Skip the one-line summary under each header
    #[arg(long)]
    no_summary: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => GalleryConfig::load(path)?,
        None => GalleryConfig::default(),
    };
    if args.no_color {
        config.color = false;
    }
    if args.no_summary {
        config.show_summaries = false;
    }
    if !args.demos.is_empty() {
        config.demos = args.demos;
    }
    if !config.color {
        colored::control::set_override(false);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list {
        return if args.json {
            list_json(&mut out)
        } else {
            list(&mut out)
        };
    }

    let demos = catalog::select(&config.demos)?;
    for (i, demo) in demos.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        print_header(&mut out, demo, config.show_summaries)?;
        demo.run(&mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn print_header(out: &mut dyn Write, demo: &Demo, show_summary: bool) -> Result<()> {
    let header = format!("== {} [{}] ==", demo.title, demo.category);
    writeln!(out, "{}", header.cyan().bold())?;
    if show_summary {
        writeln!(out, "{}", demo.summary.dimmed())?;
    }
    Ok(())
}

fn list(out: &mut dyn Write) -> Result<()> {
    for demo in catalog::catalog() {
        writeln!(
            out,
            "{:<14} {:<14} {}",
            demo.name.green(),
            demo.category.to_string(),
            demo.summary
        )?;
        for use_case in demo.use_cases {
            writeln!(out, "{:>29} {}", "-", use_case)?;
        }
    }
    Ok(())
}

fn list_json(out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, catalog::catalog())?;
    writeln!(out)?;
    Ok(())
}
