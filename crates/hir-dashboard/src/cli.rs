//! Command-line definition

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use hir_filter::{Dimension, FilterSelection, Selection};
use hir_view::ViewMode;
use std::path::PathBuf;

/// Build the `housing-dashboard` command
#[must_use]
pub fn command() -> Command {
    Command::new("housing-dashboard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Cascading filters over the Atlantic housing initiatives roadmap")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Configuration file (TOML)"),
        )
        .arg(
            Arg::new("data")
                .long("data")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Initiative sheet as JSON or YAML rows"),
        )
        .arg(
            Arg::new("assets")
                .long("assets")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory of <id>.png images"),
        )
        .subcommand(
            Command::new("resolve")
                .about("Resolve a selection: options, corrected selection, matching rows")
                .args(selection_args())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("view")
                .about("Render one tab for a selection")
                .args(selection_args())
                .arg(tab_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("replay")
                .about("Replay a scripted sequence of interactions")
                .arg(
                    Arg::new("script")
                        .long("script")
                        .short('s')
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Event list as JSON or YAML"),
                )
                .arg(tab_arg())
                .arg(json_arg()),
        )
}

fn selection_args() -> Vec<Arg> {
    Dimension::ALL
        .into_iter()
        .map(|dimension| {
            Arg::new(dimension.key())
                .long(dimension.key())
                .action(ArgAction::Append)
                .value_name("VALUE")
                .help(format!("Select a {} value (repeatable)", dimension.label()))
        })
        .collect()
}

fn tab_arg() -> Arg {
    Arg::new("tab")
        .long("tab")
        .short('t')
        .value_parser(value_parser!(ViewMode))
        .help("dashboard, initiatives or tracking (default from config)")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

/// Selection given by the repeated dimension flags
#[must_use]
pub fn selection_from(matches: &ArgMatches) -> FilterSelection {
    Dimension::ALL
        .into_iter()
        .fold(FilterSelection::new(), |selection, dimension| {
            let values = matches
                .get_many::<String>(dimension.key())
                .map(|values| values.cloned().collect::<Vec<_>>());
            selection.with(dimension, Selection::from(values))
        })
}
