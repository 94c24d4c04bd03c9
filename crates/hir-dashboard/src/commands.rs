//! Subcommand execution
//!
//! Each command turns parsed arguments plus the loaded store into the text
//! to print. Nothing here writes to stdout, so commands are testable as
//! plain functions.

use crate::cli::{command, selection_from};
use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::report::{describe, replay, ResolveReport};
use crate::script::load_script;
use clap::ArgMatches;
use hir_filter::{resolve, Action, FilterSession};
use hir_records::RecordStore;
use hir_view::{project, render_json, render_text, ViewMode};
use std::fmt::Write as _;
use std::path::PathBuf;

/// Run the subcommand in `matches` and return its output
pub fn run(
    matches: &ArgMatches,
    store: &RecordStore,
    config: &DashboardConfig,
) -> Result<String, DashboardError> {
    match matches.subcommand() {
        Some(("resolve", args)) => resolve_command(args, store),
        Some(("view", args)) => view_command(args, store, config),
        Some(("replay", args)) => replay_command(args, store, config),
        _ => Ok(command().render_help().to_string()),
    }
}

fn resolve_command(args: &ArgMatches, store: &RecordStore) -> Result<String, DashboardError> {
    let selection = selection_from(args);
    let report = ResolveReport::from(&resolve(&selection, store.records()));

    if args.get_flag("json") {
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    Ok(report.to_text())
}

fn view_command(
    args: &ArgMatches,
    store: &RecordStore,
    config: &DashboardConfig,
) -> Result<String, DashboardError> {
    let tab = tab_from(args, config);
    let mut session = FilterSession::new(store.clone());
    let frame = session.apply(Action::SelectionChanged(selection_from(args)));
    let view = project(tab, frame.filtered.iter().copied());

    if args.get_flag("json") {
        return Ok(render_json(&view)?);
    }

    let mut out = String::new();
    let _ = writeln!(out, "selection: {}", describe(&frame.selection));
    if !frame.corrected.is_empty() {
        let names: Vec<String> = frame.corrected.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "dropped stale values in: {}", names.join(", "));
    }
    out.push_str(&render_text(&view));
    Ok(out)
}

fn replay_command(
    args: &ArgMatches,
    store: &RecordStore,
    config: &DashboardConfig,
) -> Result<String, DashboardError> {
    let path = args
        .get_one::<PathBuf>("script")
        .ok_or(DashboardError::MissingArgument("script"))?;
    let events = load_script(path)?;
    let steps = replay(store, &events, tab_from(args, config));
    tracing::info!(events = events.len(), "Replayed script");

    if args.get_flag("json") {
        return Ok(serde_json::to_string_pretty(&steps)?);
    }
    Ok(steps
        .iter()
        .map(|step| step.to_text())
        .collect::<Vec<_>>()
        .join("\n"))
}

fn tab_from(args: &ArgMatches, config: &DashboardConfig) -> ViewMode {
    args.get_one::<ViewMode>("tab")
        .copied()
        .unwrap_or(config.default_tab)
}
