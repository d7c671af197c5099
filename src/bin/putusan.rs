//! Command-line interface for putusan
//! Extracts summary rows from a directory of judgment text files.
//!
//! Usage:
//!   putusan extract [`<input-dir>`] [--output `<path>`] [--format `<format>`]  - Write the summary table
//!   putusan inspect `<file>` [--format json|yaml]                           - Print one extraction result
//!   putusan normalize `<file>`                                              - Print boilerplate-free text

use clap::{Arg, ArgAction, ArgMatches, Command};
use putusan::batch::extract_directory;
use putusan::cleaning::normalize_judgment;
use putusan::config::{Loader, PutusanConfig};
use putusan::document::Document;
use putusan::extraction::DocumentParser;
use putusan::output::OutputFormat;
use putusan::{PutusanError, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Picked up from the working directory when `--config` is not given.
const LOCAL_CONFIG: &str = "putusan.toml";

fn main() {
    let matches = Command::new("putusan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract case numbers, evidence and verdicts from court judgments")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log output (-v info, -vv debug)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults")
                .global(true),
        )
        .subcommand(
            Command::new("extract")
                .about("Process every judgment in a directory and write the summary table")
                .arg(
                    Arg::new("input")
                        .help("Directory of judgment text files (default: input.dir from config)")
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Table file to write (default: output.path from config)"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Table format: xlsx, csv or json (default: from --output extension)"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Parse one judgment and print the extracted fields")
                .arg(
                    Arg::new("path")
                        .help("Path to the judgment text file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('json' or 'yaml')")
                        .default_value("json"),
                ),
        )
        .subcommand(
            Command::new("normalize")
                .about("Print a judgment with repository boilerplate removed")
                .arg(
                    Arg::new("path")
                        .help("Path to the judgment text file")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    let outcome = match matches.subcommand() {
        Some(("extract", sub)) => handle_extract_command(&matches, sub),
        Some(("inspect", sub)) => handle_inspect_command(&matches, sub),
        Some(("normalize", sub)) => handle_normalize_command(sub),
        _ => unreachable!(),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise the -v count picks the level.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then the config file, then `PUTUSAN_*` variables, then flags.
fn load_config(global: &ArgMatches, overrides: &[(&str, String)]) -> Result<PutusanConfig> {
    let loader = match global.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(LOCAL_CONFIG),
    };
    let mut loader = loader.with_environment();
    for (key, value) in overrides {
        loader = loader.set_override(key, value.as_str())?;
    }
    Ok(loader.build()?)
}

/// Handle the extract command
fn handle_extract_command(global: &ArgMatches, matches: &ArgMatches) -> Result<()> {
    let mut overrides = Vec::new();
    if let Some(input) = matches.get_one::<String>("input") {
        overrides.push(("input.dir", input.clone()));
    }
    if let Some(output) = matches.get_one::<String>("output") {
        overrides.push(("output.path", output.clone()));
    }

    let format = match matches.get_one::<String>("format") {
        Some(name) => Some(name.parse::<OutputFormat>()?),
        None => matches
            .get_one::<String>("output")
            .and_then(|output| OutputFormat::from_path(&PathBuf::from(output))),
    };
    if let Some(format) = format {
        overrides.push(("output.format", format.to_string()));
    }

    let config = load_config(global, &overrides)?;
    let summary = extract_directory(&config.input.dir, &config)?;

    for failure in &summary.failures {
        eprintln!("Skipped {}: {}", failure.path.display(), failure.error);
    }
    println!(
        "Saved {} documents to {}",
        summary.processed,
        summary.written.display()
    );
    Ok(())
}

/// Handle the inspect command
fn handle_inspect_command(global: &ArgMatches, matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .expect("path is required");
    let format = matches
        .get_one::<String>("format")
        .expect("format has a default");

    let config = load_config(global, &[])?;
    let document = Document::load(path)?;
    let result = DocumentParser::from_config(&config).parse(&document);

    let rendered = match format.as_str() {
        "json" => serde_json::to_string_pretty(&result)?,
        "yaml" => serde_yaml::to_string(&result)?,
        other => return Err(PutusanError::UnsupportedFormat(other.to_string())),
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

/// Handle the normalize command
fn handle_normalize_command(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .expect("path is required");
    let document = Document::load(path)?;
    println!("{}", normalize_judgment(document.text()));
    Ok(())
}
