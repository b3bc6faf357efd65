use std::io::IsTerminal;
use std::path::Path;

use clap::{Arg, ArgAction, Command};
use tracing::{debug, Level};

use consent::formatting::{self, Identity, Terminal};
use consent::parsing;

mod output;
mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("consent")
        .version(VERSION)
        .propagate_version(true)
        .author("Andrew Cowie")
        .about("Tools for consent documents written in markdown with form elements.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit debug logging to standard error."),
        )
        .subcommand(
            Command::new("check")
                .about("Syntax-check the given consent document")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the parsed document as JSON."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the consent document you want to check, or - for standard input."),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Code format the given consent document")
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the consent document you want to format."),
                ),
        )
        .subcommand(
            Command::new("outline")
                .about("Summarize the fields a consent document asks for")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the consent document you want to outline."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let filename = filename_from(submatches);
            let document = load_and_parse(filename);

            if submatches.get_flag("json") {
                match serde_json::to_string_pretty(&document) {
                    Ok(json) => println!("{}", json),
                    Err(error) => {
                        eprintln!("error: {}", error);
                        std::process::exit(1);
                    }
                }
            } else {
                println!(
                    "{}: {} sections",
                    filename.display(),
                    document
                        .sections
                        .len()
                );
            }

            let duplicates = document.duplicate_ids();
            if !duplicates.is_empty() {
                for id in duplicates {
                    eprintln!("error: {}: id '{}' is used more than once", filename.display(), id);
                }
                std::process::exit(1);
            }
        }
        Some(("format", submatches)) => {
            let filename = filename_from(submatches);
            let document = load_and_parse(filename);

            let raw = submatches.get_flag("raw-control-chars");
            let result = if raw || std::io::stdout().is_terminal() {
                formatting::render(&Terminal, &document)
            } else {
                formatting::render(&Identity, &document)
            };

            print!("{}", result);
        }
        Some(("outline", submatches)) => {
            let filename = filename_from(submatches);
            let document = load_and_parse(filename);

            match output::outline(&document) {
                Ok(result) => print!("{}", result),
                Err(error) => {
                    eprintln!("error: {}", error);
                    std::process::exit(1);
                }
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: consent [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn filename_from(submatches: &clap::ArgMatches) -> &Path {
    // required(true) means clap has already insisted on this
    let filename = submatches
        .get_one::<String>("filename")
        .map(String::as_str)
        .unwrap_or("-");
    Path::new(filename)
}

/// Load the file and parse it, exiting with the problem described if either
/// fails.
fn load_and_parse(filename: &Path) -> consent::document::ParseResult {
    debug!(?filename);

    let data = match parsing::load(filename) {
        Ok(data) => data,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    };

    match parsing::parse_bytes(&data) {
        Ok(document) => document,
        Err(error) => {
            if std::io::stderr().is_terminal() {
                let source = String::from_utf8_lossy(&data);
                eprintln!("{}", problem::full_parsing_error(&error, filename, &source));
            } else {
                eprintln!("{}", problem::concise_parsing_error(&error, filename));
            }
            std::process::exit(1);
        }
    }
}
