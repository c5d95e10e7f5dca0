use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, Level};

use slugline::language::{Options, Screenplay};
use slugline::parsing;
use slugline::problem;
use slugline::templating::{self, Custom, Page};

mod output;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("slugline")
        .version(VERSION)
        .propagate_version(true)
        .about("Parse plain text screenplays and render them as HTML.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log the progress of parsing and rendering to standard error."),
        )
        .arg(
            Arg::new("brief")
                .long("brief")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Report a file that can't be parsed on a single line, without the excerpt."),
        )
        .subcommand(
            Command::new("render")
                .about("Render the given screenplay as HTML")
                .arg(
                    Arg::new("fragment")
                        .long("fragment")
                        .action(ArgAction::SetTrue)
                        .help("Emit only the title page and script markup rather than a complete HTML document."),
                )
                .arg(
                    Arg::new("template")
                        .short('t')
                        .long("template")
                        .value_parser(clap::value_parser!(PathBuf))
                        .conflicts_with("fragment")
                        .help("A page template to use in place of the built in one. It can refer to {title}, {title_page | unescaped}, and {body | unescaped}."),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Write the result to this file rather than to standard output."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("The file containing the screenplay you want to render, or - to read standard input."),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the tokens of the given screenplay as JSON")
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .action(ArgAction::SetTrue)
                        .help("Indent the JSON output."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("The file containing the screenplay you want to tokenize, or - to read standard input."),
                ),
        )
        .subcommand(
            Command::new("title")
                .about("Print the title of the given screenplay")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("The file containing the screenplay, or - to read standard input."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();

    match matches.subcommand() {
        Some(("render", submatches)) => run_render(submatches),
        Some(("tokens", submatches)) => run_tokens(submatches),
        Some(("title", submatches)) => run_title(submatches),
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: slugline [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn run_render(submatches: &ArgMatches) {
    let filename = required_filename(submatches);
    let screenplay = read_screenplay(submatches, filename, &Options::default());

    let result = if submatches.get_flag("fragment") {
        let mut fragment = screenplay
            .title_page
            .clone();
        if !fragment.is_empty() {
            fragment.push('\n');
        }
        fragment.push_str(&screenplay.body);
        Ok(fragment)
    } else if let Some(template) = submatches.get_one::<PathBuf>("template") {
        let text = match std::fs::read_to_string(template) {
            Ok(text) => text,
            Err(error) => {
                eprintln!(
                    "{}: {}: {}",
                    "error".bright_red(),
                    template.display(),
                    error.bold()
                );
                std::process::exit(1);
            }
        };
        templating::fill(&Custom::new(&text), &screenplay)
    } else {
        templating::fill(&Page, &screenplay)
    };

    let document = match result {
        Ok(document) => document,
        Err(error) => {
            eprintln!("{}: template: {}", "error".bright_red(), error.bold());
            std::process::exit(1);
        }
    };

    let target = submatches
        .get_one::<PathBuf>("output")
        .map(PathBuf::as_path);

    if let Err(error) = output::emit(target, &document) {
        eprintln!("{}: {}", "error".bright_red(), error.bold());
        std::process::exit(1);
    }
}

fn run_tokens(submatches: &ArgMatches) {
    let filename = required_filename(submatches);
    let screenplay = read_screenplay(submatches, filename, &Options { tokens: true });

    let tokens = screenplay
        .tokens
        .unwrap_or_default();
    debug!("Serializing {} tokens", tokens.len());

    let result = if submatches.get_flag("pretty") {
        serde_json::to_string_pretty(&tokens)
    } else {
        serde_json::to_string(&tokens)
    };

    match result {
        Ok(json) => {
            if let Err(error) = output::emit(None, &json) {
                eprintln!("{}: {}", "error".bright_red(), error.bold());
                std::process::exit(1);
            }
        }
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error.bold());
            std::process::exit(1);
        }
    }
}

fn run_title(submatches: &ArgMatches) {
    let filename = required_filename(submatches);
    let screenplay = read_screenplay(submatches, filename, &Options::default());

    match screenplay.title {
        Some(title) => println!("{}", title),
        None => {
            debug!("No title found");
            std::process::exit(1);
        }
    }
}

fn required_filename(submatches: &ArgMatches) -> &Path {
    match submatches.get_one::<PathBuf>("filename") {
        Some(filename) => filename.as_path(),
        None => {
            eprintln!("{}: no filename given", "error".bright_red());
            std::process::exit(2);
        }
    }
}

/// Load the named file (or standard input) and parse it, exiting with a
/// message on failure.
fn read_screenplay(submatches: &ArgMatches, filename: &Path, options: &Options) -> Screenplay {
    let content = if filename.to_str() == Some("-") {
        let mut buffer = Vec::new();
        if let Err(error) = std::io::stdin().read_to_end(&mut buffer) {
            eprintln!(
                "{}: standard input: {}",
                "error".bright_red(),
                error.bold()
            );
            std::process::exit(1);
        }
        buffer
    } else {
        match parsing::load(filename) {
            Ok(content) => content,
            Err(error) => {
                eprintln!("{}", problem::concise_loading_error(&error));
                std::process::exit(1);
            }
        }
    };

    match parsing::parse_bytes(&content, options) {
        Ok(screenplay) => screenplay,
        Err(error) => {
            if submatches.get_flag("brief") {
                eprintln!(
                    "{}",
                    problem::concise_parsing_error(&error, filename, &content)
                );
            } else {
                eprintln!(
                    "{}",
                    problem::full_parsing_error(&error, filename, &content)
                );
            }
            std::process::exit(1);
        }
    }
}
