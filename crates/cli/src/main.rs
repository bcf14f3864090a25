//! helpdesk CLI: search help-center articles from the terminal.
//!
//! - `helpdesk search <words...>`: fetch the configured help center and rank
//! - `helpdesk search <words...> --corpus articles.json`: search a saved corpus
//! - `helpdesk init`: write a default `helpdesk.toml`
//!
//! Exit codes: 0 success, 2 invalid query, 1 any other failure.

mod commands;
mod format;

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use helpdesk_core::{ContentSource, Error, HelpdeskConfig, CONFIG_FILE_NAME};
use helpdesk_search::SearchEngine;
use helpdesk_source::{HelpCenterSource, MemorySource};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_response, OutputMode};

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_flag("verbose"));

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };

    let config_path = matches
        .get_one::<String>("config")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    let exit_code = match matches.subcommand() {
        Some(("init", _)) => run_init(&config_path, output_mode),
        Some(("search", sub)) => run_search(&config_path, sub, output_mode),
        _ => 2,
    };
    process::exit(exit_code);
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_logging(verbose: bool) {
    let default_directive = if verbose { "helpdesk=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn run_init(config_path: &Path, mode: OutputMode) -> i32 {
    match HelpdeskConfig::write_default_if_missing(config_path) {
        Ok(true) => {
            println!("Wrote {}", config_path.display());
            0
        }
        Ok(false) => {
            println!("{} already exists, left unchanged", config_path.display());
            0
        }
        Err(e) => report_error(&e, mode),
    }
}

fn run_search(config_path: &Path, matches: &clap::ArgMatches, mode: OutputMode) -> i32 {
    let query = matches
        .get_many::<String>("query")
        .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default();

    let engine = match open_engine(config_path, matches.get_one::<String>("corpus")) {
        Ok(engine) => engine,
        Err(e) => return report_error(&e, mode),
    };

    match engine.search(&query) {
        Ok(response) => {
            let formatted = format_response(&response, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            0
        }
        Err(e) => report_error(&e, mode),
    }
}

/// A `--corpus` file takes precedence over the configured help center.
fn open_engine(config_path: &Path, corpus: Option<&String>) -> Result<SearchEngine, Error> {
    if let Some(path) = corpus {
        let source = MemorySource::from_file(Path::new(path))?;
        tracing::debug!(
            target: "helpdesk::cli",
            corpus = %path,
            documents = source.len(),
            "Loaded corpus file"
        );
        return Ok(SearchEngine::new(Arc::new(source)));
    }

    let config = HelpdeskConfig::from_file(config_path)?;
    let source: Arc<dyn ContentSource> = Arc::new(HelpCenterSource::new(&config.source)?);
    Ok(SearchEngine::new(source).with_max_pages(config.source.max_pages))
}

fn report_error(err: &Error, mode: OutputMode) -> i32 {
    let formatted = format_error(err, mode);
    match mode {
        OutputMode::Json => println!("{}", formatted),
        _ => eprintln!("{}", formatted),
    }
    if err.is_client_error() {
        2
    } else {
        1
    }
}
