// src/cli.rs
use anyhow::Result;
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::core::config::DEFAULT_CONFIG_FILE;
use crate::core::models::EventState;
use crate::core::timing::MAX_PCT_PRECISION;
use crate::infra::logging::init_logging;
use crate::infra::t;

pub mod commands;

use commands::render::RenderOptions;

/// Default run-data file shared by the recording and rendering commands.
pub const DEFAULT_DATA_FILE: &str = "run_data.json";

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument and reports whether it was given.
fn pre_parse_language() -> (String, bool) {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return (crate::resolve_locale(lang), true);
        }
    }
    // Fallback to system language detection
    let system = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    (crate::resolve_locale(&system), false)
}

fn data_arg(locale: &str) -> Arg {
    Arg::new("data")
        .short('d')
        .long("data")
        .help(t!("arg_data", locale = locale).to_string())
        .value_name("DATA")
        .default_value(DEFAULT_DATA_FILE)
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set)
}

fn config_arg(locale: &str) -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .help(t!("arg_config", locale = locale).to_string())
        .value_name("CONFIG")
        .default_value(DEFAULT_CONFIG_FILE)
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set)
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("run-report")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help(t!("arg_verbose", locale = locale).to_string())
                .global(true)
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help(t!("arg_quiet", locale = locale).to_string())
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(config_arg(locale))
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("arg_non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("event")
                .about(t!("cmd_event_about", locale = locale).to_string())
                .arg(data_arg(locale))
                .arg(
                    Arg::new("name")
                        .short('n')
                        .long("name")
                        .help(t!("arg_name", locale = locale).to_string())
                        .value_name("NAME")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("state")
                        .short('s')
                        .long("state")
                        .help(t!("arg_state", locale = locale).to_string())
                        .value_name("STATE")
                        .required(true)
                        .value_parser(["start", "finish"])
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("timestamp")
                        .short('t')
                        .long("timestamp")
                        .help(t!("arg_timestamp", locale = locale).to_string())
                        .value_name("SECONDS")
                        .value_parser(parse_timestamp)
                        .allow_negative_numbers(true)
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("metadata")
                .about(t!("cmd_metadata_about", locale = locale).to_string())
                .arg(data_arg(locale))
                .arg(
                    Arg::new("pairs")
                        .help(t!("arg_pairs", locale = locale).to_string())
                        .value_name("KEY=VALUE")
                        .required(true)
                        .num_args(1..)
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("reset")
                .about(t!("cmd_reset_about", locale = locale).to_string())
                .arg(data_arg(locale)),
        )
        .subcommand(
            Command::new("render")
                .about(t!("cmd_render_about", locale = locale).to_string())
                .arg(data_arg(locale))
                .arg(config_arg(locale))
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help(t!("arg_output", locale = locale).to_string())
                        .value_name("OUTPUT")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("html")
                        .long("html")
                        .help(t!("arg_html", locale = locale).to_string())
                        .value_name("HTML")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("precision")
                        .long("precision")
                        .help(t!("arg_precision", locale = locale).to_string())
                        .value_name("DIGITS")
                        .value_parser(clap::value_parser!(u32).range(..=MAX_PCT_PRECISION as i64))
                        .action(ArgAction::Set),
                ),
        )
}

/// Accepts only finite seconds; JSON has no encoding for `inf` or `NaN`.
fn parse_timestamp(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.trim().parse().map_err(|e| format!("{}", e))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("timestamp must be a finite number of seconds, got '{}'", raw))
    }
}

fn is_explicit(matches: &ArgMatches, id: &str) -> bool {
    matches.value_source(id) == Some(ValueSource::CommandLine)
}

fn path_arg(matches: &ArgMatches, id: &str, default: &str) -> PathBuf {
    matches
        .get_one::<PathBuf>(id)
        .cloned()
        .unwrap_or_else(|| PathBuf::from(default))
}

pub fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let (language, lang_explicit) = pre_parse_language();
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();
    init_logging(matches.get_count("verbose"), matches.get_flag("quiet"));
    log::debug!("Using locale {}", language);

    match matches.subcommand() {
        Some(("init", init_matches)) => {
            let config = path_arg(init_matches, "config", DEFAULT_CONFIG_FILE);
            let non_interactive = init_matches.get_flag("non-interactive");

            // Show language detection message if it was auto-detected
            if !lang_explicit && !non_interactive {
                println!(
                    "{}",
                    t!("system_language_detected", locale = &language, lang = &language)
                );
            }
            commands::init::run_init_wizard(&config, &language, non_interactive)?;
        }
        Some(("event", event_matches)) => {
            let data = path_arg(event_matches, "data", DEFAULT_DATA_FILE);
            let name = event_matches
                .get_one::<String>("name")
                .cloned()
                .unwrap_or_default();
            let state: EventState = event_matches
                .get_one::<String>("state")
                .map(String::as_str)
                .unwrap_or("start")
                .parse()?;
            let timestamp = event_matches.get_one::<f64>("timestamp").copied();
            commands::record::record_event(&data, &name, state, timestamp, &language)?;
        }
        Some(("metadata", metadata_matches)) => {
            let data = path_arg(metadata_matches, "data", DEFAULT_DATA_FILE);
            let pairs: Vec<String> = metadata_matches
                .get_many::<String>("pairs")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            commands::record::record_metadata(&data, &pairs, &language)?;
        }
        Some(("reset", reset_matches)) => {
            let data = path_arg(reset_matches, "data", DEFAULT_DATA_FILE);
            commands::record::reset(&data, &language)?;
        }
        Some(("render", render_matches)) => {
            let options = RenderOptions {
                data: path_arg(render_matches, "data", DEFAULT_DATA_FILE),
                config: path_arg(render_matches, "config", DEFAULT_CONFIG_FILE),
                config_explicit: is_explicit(render_matches, "config"),
                output: render_matches.get_one::<PathBuf>("output").cloned(),
                html: render_matches.get_one::<PathBuf>("html").cloned(),
                precision: render_matches.get_one::<u32>("precision").copied(),
                locale: lang_explicit.then(|| language.clone()),
                detected_locale: language.clone(),
            };
            commands::render::execute(options)?;
        }
        _ => {
            // This case handles when no subcommand is given.
            // Clap will have already printed help info.
        }
    }
    Ok(())
}
