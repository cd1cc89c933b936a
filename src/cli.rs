// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::{env, path::PathBuf};

use crate::commands;
use crate::core::config::DEFAULT_CONFIG_FILE;
use crate::infra::t;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
fn pre_parse_language() -> Option<String> {
    lang_from_args(env::args())
}

/// Finds the value of `--lang <VALUE>` or `--lang=<VALUE>` in `args`.
/// 在 `args` 中查找 `--lang <VALUE>` 或 `--lang=<VALUE>` 的值。
pub fn lang_from_args<I>(args: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--lang" {
            return args.next();
        }
        if let Some(value) = arg.strip_prefix("--lang=") {
            return Some(value.to_string());
        }
    }
    None
}

pub fn build_cli() -> Command {
    Command::new("fim-bench")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about").to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.lang").to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("run")
                .about(t!("cli.run_about").to_string())
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(t!("cli.arg_config").to_string())
                        .value_name("CONFIG")
                        .default_value(DEFAULT_CONFIG_FILE)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("chart-dir")
                        .long("chart-dir")
                        .help(t!("cli.arg_chart_dir").to_string())
                        .value_name("DIR")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("no-table")
                        .long("no-table")
                        .help(t!("cli.arg_no_table").to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cli.init_about").to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("cli.arg_non_interactive").to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("preset")
                        .long("preset")
                        .help(t!("cli.arg_preset").to_string())
                        .value_name("PRESET")
                        .value_parser(["times", "itemsets"])
                        .default_value("times")
                        .action(ArgAction::Set),
                ),
        )
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    match pre_parse_language() {
        Some(language) => crate::set_language(&language),
        None => crate::init(),
    }

    let matches = build_cli().get_matches();
    let lang_override = matches.get_one::<String>("lang").cloned();

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            let config = run_matches
                .get_one::<PathBuf>("config")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            let chart_dir = run_matches.get_one::<PathBuf>("chart-dir").cloned();
            let print_table = !run_matches.get_flag("no-table");

            commands::run::execute(config, chart_dir, print_table, lang_override).await?;
        }
        Some(("init", init_matches)) => {
            let non_interactive = init_matches.get_flag("non-interactive");
            let preset = init_matches
                .get_one::<String>("preset")
                .map(String::as_str)
                .unwrap_or("times");
            let preset = commands::init::Preset::from_name(preset);

            commands::init::run_init_wizard(non_interactive, preset)?;
        }
        _ => {
            // `subcommand_required` makes clap print help and exit before we get here.
        }
    }
    Ok(())
}
