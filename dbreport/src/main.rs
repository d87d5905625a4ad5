//! # dbreport
//!
//! A CLI tool for rendering database metadata catalogs as reports.
//!
//! ## Overview
//!
//! dbreport is built on top of dbreportlib. It reads a JSON catalog of
//! database objects (tables, views, routines and their columns, foreign
//! keys, properties, source and sample data) and renders it through one
//! call sequence into any of the supported output formats.
//!
//! ## Features
//!
//! - **Three formats**: aligned plain text (default), HTML, CSV
//! - **Charset aware input**: UTF-8 or Latin-1 catalogs
//! - **Lenient input**: `--allow-empty` treats a missing catalog as empty
//! - **Data row layout**: text data rows as CSV or fixed-width columns
//!
//! ## Usage
//!
//! ```bash
//! # Plain text to stdout
//! dbreport catalog.json
//!
//! # HTML report with a page title, written to a file
//! dbreport catalog.json --format html --title "Sales schema" -o sales.html
//!
//! # CSV, format picked from the environment
//! DBREPORT_FORMAT=csv dbreport catalog.json
//!
//! # Catalog on stdin, text data rows in 12-wide columns
//! extract-schema | dbreport --fixed-width 12
//! ```

mod catalog;
mod render;

use std::fs::File;
use std::io::{self, BufWriter, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use dbreportlib::{
    Charset, DataRowLayout, FileInputResource, FormattingHelper, FormattingOptions,
    InputResource, OutputFormat,
};

use crate::catalog::Catalog;
use crate::render::render_catalog;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("dbreport")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Render database metadata catalogs as plain text, HTML, or CSV reports")
        .arg(
            Arg::new("input")
                .value_parser(value_parser!(PathBuf))
                .help("Catalog JSON file (reads stdin when omitted)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .env("DBREPORT_FORMAT")
                .value_parser(["text", "html", "csv"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(value_parser!(PathBuf))
                .help("Write the report to a file instead of stdout"),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .help("Document title (HTML only)"),
        )
        .arg(
            Arg::new("charset")
                .long("charset")
                .default_value("utf-8")
                .help("Character set of the input file (utf-8, latin1)"),
        )
        .arg(
            Arg::new("allow-empty")
                .long("allow-empty")
                .action(ArgAction::SetTrue)
                .help("Treat a missing input file as an empty catalog"),
        )
        .arg(
            Arg::new("fixed-width")
                .long("fixed-width")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Render text data rows as left-aligned columns N wide instead of CSV"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
}

/// Initialize tracing to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Build formatting options from the command line
fn formatting_options(matches: &ArgMatches) -> FormattingOptions {
    let mut options = FormattingOptions::new();
    if let Some(title) = matches.get_one::<String>("title") {
        options = options.title(title.as_str());
    }
    if let Some(width) = matches.get_one::<usize>("fixed-width") {
        options = options.data_rows(DataRowLayout::FixedWidth(*width));
    }
    options
}

/// Read the catalog text from the input file or stdin
fn read_input(matches: &ArgMatches) -> anyhow::Result<String> {
    let charset: Charset = matches
        .get_one::<String>("charset")
        .map(|c| c.parse::<Charset>())
        .transpose()?
        .unwrap_or_default();

    let mut text = String::new();
    match matches.get_one::<PathBuf>("input") {
        Some(path) => {
            let resource = if matches.get_flag("allow-empty") {
                FileInputResource::allow_empty(path)?
            } else {
                FileInputResource::new(path)?
            };
            resource
                .open_new_input_reader(charset)?
                .read_to_string(&mut text)
                .with_context(|| format!("reading {}", resource.description()))?;
        }
        None => {
            tracing::debug!("reading catalog from stdin");
            io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
        }
    }
    Ok(text)
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let format: OutputFormat = matches
        .get_one::<String>("format")
        .map(|f| f.parse::<OutputFormat>())
        .transpose()?
        .unwrap_or_default();

    let text = read_input(matches)?;
    let catalog = Catalog::parse(&text).context("parsing catalog JSON")?;
    tracing::debug!(objects = catalog.objects.len(), %format, "catalog loaded");

    let helper = FormattingHelper::with_options(format, formatting_options(matches));
    let rendered = render_catalog(&catalog, &helper)?;

    match matches.get_one::<PathBuf>("output") {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            rendered.write_to(BufWriter::new(file))?;
            tracing::info!(path = %path.display(), rows = rendered.rows, "report written");
        }
        None => rendered.write_to(io::stdout().lock())?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_tracing(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
