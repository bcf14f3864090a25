//! Clap command tree definition.

use clap::{Arg, ArgAction, Command};
use helpdesk_core::CONFIG_FILE_NAME;

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("helpdesk")
        .about("Relevance search over help-center articles")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help(format!("Config file path (default: {})", CONFIG_FILE_NAME))
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .conflicts_with("raw")
                .global(true),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (one result URL, or id, per line)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pagination and timing to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(build_search())
        .subcommand(build_init())
}

fn build_search() -> Command {
    Command::new("search")
        .about("Search articles; every word must appear in the title or body")
        .arg(
            Arg::new("query")
                .help("Query words")
                .required(true)
                .num_args(1..),
        )
        .arg(
            Arg::new("corpus")
                .long("corpus")
                .help("Search a JSON corpus file instead of the configured help center"),
        )
}

fn build_init() -> Command {
    Command::new("init").about("Write a default config file if none exists")
}
