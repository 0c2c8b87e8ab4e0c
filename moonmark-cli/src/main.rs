//! Command-line interface for moonmark
//! Formats a tarot reading narrative into annotated markup.
//!
//! Usage:
//!   moonmark [`<path>`] [--config `<file>`] [--format html|json] [--standalone] [--escape]
//!
//! The narrative is read from `<path>`, or from stdin when the path is absent or `-`.

mod output;

use clap::{Arg, ArgAction, Command};
use moonmark_config::{Loader, MoonmarkConfig};
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("moonmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turns tarot reading narratives into annotated markup")
        .arg(
            Arg::new("path")
                .help("Path to the narrative (stdin when absent or '-')")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in tables"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["html", "json"])
                .default_value("html"),
        )
        .arg(
            Arg::new("standalone")
                .long("standalone")
                .help("Wrap HTML output in a preview page")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("escape")
                .long("escape")
                .help("Escape HTML-special characters in the narrative text")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = load_config(
        matches.get_one::<String>("config").map(String::as_str),
        matches.get_flag("escape"),
    );
    let source = read_source(matches.get_one::<String>("path").map(String::as_str));
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("html");

    let formatter = config.formatter().unwrap_or_else(|e| {
        eprintln!("Invalid tables: {}", e);
        std::process::exit(1);
    });

    let rendered = output::render(&formatter, &source, format, matches.get_flag("standalone"))
        .unwrap_or_else(|e| {
            eprintln!("Formatting error: {}", e);
            std::process::exit(1);
        });

    print!("{}", rendered);
}

/// Defaults, then the user file, then flag overrides.
fn load_config(path: Option<&str>, escape: bool) -> MoonmarkConfig {
    let mut loader = Loader::new();
    if let Some(path) = path {
        tracing::debug!(path, "layering user config");
        loader = loader.with_file(path);
    }
    if escape {
        loader = loader
            .set_override("render.escape_text", true)
            .unwrap_or_else(|e| {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            });
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

fn read_source(path: Option<&str>) -> String {
    match path {
        None | Some("-") => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .unwrap_or_else(|e| {
                    eprintln!("Error reading stdin: {}", e);
                    std::process::exit(1);
                });
            source
        }
        Some(path) => std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading {}: {}", path, e);
            std::process::exit(1);
        }),
    }
}
