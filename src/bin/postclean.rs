//! Command-line interface for postclean
//! Cleans a batch of posts read from a file or stdin and prints the result.
//!
//! Usage:
//!   postclean [`<path>`] [--config `<file>`] [--input lines|json] [--output lines|json]
//!   postclean --list-stages                                 - List the pipeline stages

use clap::{Arg, ArgAction, Command};
use postclean::{CleanConfig, Loader, Pipeline, StageKind};
use std::fmt::Display;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("postclean")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize scraped channel posts for downstream modeling")
        .arg(
            Arg::new("path")
                .help("Input file (reads stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .help("Input format: one record per line, or a JSON array of strings and nulls")
                .value_parser(["lines", "json"])
                .default_value("lines"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .help("Output format")
                .value_parser(["lines", "json"])
                .default_value("lines"),
        )
        .arg(
            Arg::new("filter-short")
                .long("filter-short")
                .help("Drop short and missing records before or after cleaning")
                .value_parser(["first", "last"]),
        )
        .arg(
            Arg::new("emoji")
                .long("emoji")
                .help("Emoji matcher")
                .value_parser(["full", "fast"]),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .help("Clean records on all cores")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-stages")
                .long("list-stages")
                .help("List the pipeline stages in execution order")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = load_config(
        matches.get_one::<String>("config"),
        matches.get_one::<String>("filter-short"),
        matches.get_one::<String>("emoji"),
    );

    if matches.get_flag("list-stages") {
        handle_list_stages_command(&config);
        return;
    }

    let path = matches.get_one::<String>("path");
    let input = matches
        .get_one::<String>("input")
        .map(String::as_str)
        .unwrap_or("lines");
    let output = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or("lines");
    handle_clean_command(
        &config,
        path.map(String::as_str),
        input,
        output,
        matches.get_flag("parallel"),
    );
}

fn fail(context: &str, err: impl Display) -> ! {
    eprintln!("{}: {}", context, err);
    std::process::exit(1);
}

/// Layer the config file and flag overrides over the defaults
fn load_config(
    file: Option<&String>,
    filter_short: Option<&String>,
    emoji: Option<&String>,
) -> CleanConfig {
    let mut loader = Loader::new();
    if let Some(file) = file {
        loader = loader.with_file(file);
    }
    let overrides = [
        ("pipeline.short_record_filter", filter_short),
        ("pipeline.emoji", emoji),
    ];
    for (key, value) in overrides {
        if let Some(value) = value {
            loader = loader
                .set_override(key, value.as_str())
                .unwrap_or_else(|e| fail("Configuration error", e));
        }
    }
    loader
        .build()
        .unwrap_or_else(|e| fail("Configuration error", e))
}

/// Handle the clean command
fn handle_clean_command(
    config: &CleanConfig,
    path: Option<&str>,
    input: &str,
    output: &str,
    parallel: bool,
) {
    let pipeline = Pipeline::from_config(config).unwrap_or_else(|e| fail("Pipeline error", e));

    let bytes = match path {
        Some(path) => std::fs::read(path).unwrap_or_else(|e| fail(path, e)),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .unwrap_or_else(|e| fail("stdin", e));
            buf
        }
    };
    // malformed bytes become U+FFFD instead of failing the batch
    let text = String::from_utf8_lossy(&bytes);

    let records: Vec<Option<String>> = match input {
        "json" => serde_json::from_str(&text).unwrap_or_else(|e| fail("Invalid JSON input", e)),
        _ => text.lines().map(|line| Some(line.to_string())).collect(),
    };
    tracing::info!(
        records = records.len(),
        parallel,
        filter = %pipeline.filter_placement(),
        "cleaning"
    );

    let cleaned = if parallel {
        pipeline.run_parallel(records)
    } else {
        pipeline.run(records)
    }
    .unwrap_or_else(|e| fail("Cleaning error", e));

    match output {
        "json" => {
            let json = serde_json::to_string_pretty(&cleaned)
                .unwrap_or_else(|e| fail("Error formatting output", e));
            println!("{}", json);
        }
        _ => {
            for record in &cleaned {
                println!("{}", record);
            }
        }
    }
}

/// Handle the list-stages command
fn handle_list_stages_command(config: &CleanConfig) {
    let enabled = config.pipeline.enabled_stages();
    println!("Pipeline stages in execution order:\n");

    for kind in StageKind::CANONICAL_ORDER {
        let marker = if enabled.contains(&kind) { "*" } else { " " };
        println!("{} {}", marker, kind);
        println!("    {}", kind.description());
    }
    println!();
    println!("Stages marked * run with the current configuration.");
}
