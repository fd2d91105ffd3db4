//! Command-line interface for mdown
//! This binary converts a Markdown file to HTML (or a dump of its document tree), with Markdown
//! extensions switched on and off from the command line.
//!
//! Usage:
//!   mdown [OPTIONS] [+E<name> | -E<name>]... `<input>` [`<output>`]
//!   mdown --list-extensions                                  - List extension names
//!   mdown --list-formats                                     - List output formats
//!
//! Options must come before the input path. Directives and paths may be mixed freely.

mod args;
mod driver;
mod error;

use args::{extensions_help, Invocation};
use clap::{Arg, ArgAction, ArgMatches, Command};
use driver::ConversionDriver;
use error::DriverError;
use mdown_babel::FormatRegistry;
use mdown_config::{Loader, MdownConfig};
use mdown_parser::mdown::extensions::{Extensions, REGISTRY};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn build_cli() -> Command {
    Command::new("mdown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown to HTML with selectable extensions")
        .after_help(extensions_help())
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from configuration: html)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log at debug level")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-extensions")
                .long("list-extensions")
                .help("List available extensions")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("args")
                .value_name("ARGS")
                .help("Extension directives, then <input> [<output>]")
                .num_args(0..)
                .allow_hyphen_values(true)
                .trailing_var_arg(true),
        )
}

fn main() -> ExitCode {
    let mut cli = build_cli();
    let matches = cli.clone().get_matches();

    if matches.get_flag("list-extensions") {
        handle_list_extensions_command();
        return ExitCode::SUCCESS;
    }

    let registry = FormatRegistry::default();
    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return ExitCode::SUCCESS;
    }

    let config = load_config(&matches);
    let level = config
        .as_ref()
        .map(|config| config.logging.level.as_str())
        .unwrap_or("info");
    init_tracing(level);

    let result = config.map_err(DriverError::from).and_then(|config| {
        let tokens = matches
            .get_many::<String>("args")
            .into_iter()
            .flatten()
            .map(String::as_str);
        let invocation = Invocation::from_tokens(tokens)?;
        let format = config.convert.format.clone();

        ConversionDriver::new(registry, config).run(&invocation, &format)
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) if err.is_usage() => {
            eprintln!("error: {}\n\n{}\n\n{}", err, cli.render_usage(), extensions_help());
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

/// Defaults, then the --config file, then --format and --verbose as overrides
fn load_config(matches: &ArgMatches) -> Result<MdownConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("convert.format", format.as_str())?;
    }
    if matches.get_flag("verbose") {
        loader = loader.set_override("logging.level", "debug")?;
    }
    loader.build()
}

/// Logs go to stderr. RUST_LOG wins over the configured level.
fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Handle the list-extensions command
fn handle_list_extensions_command() {
    println!("Available extensions:\n");
    println!("  {:<22} every extension below", "all");
    for (name, bits) in REGISTRY {
        match shared_switch_note(*bits) {
            Some(note) => println!("  {:<22} {:#010x}  ({})", name, bits.bits(), note),
            None => println!("  {:<22} {:#010x}", name, bits.bits()),
        }
    }
}

/// Extensions the engine cannot switch independently
fn shared_switch_note(bits: Extensions) -> Option<&'static str> {
    if bits == Extensions::SMARTS {
        Some("shares one engine switch with quotes")
    } else if bits == Extensions::QUOTES {
        Some("shares one engine switch with smarts")
    } else {
        None
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {:<10} {}", name, format.description());
        }
    }
}
