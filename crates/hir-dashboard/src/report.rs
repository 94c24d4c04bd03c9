//! Command output
//!
//! Owned, serializable snapshots of a resolution or a replay step, with a
//! plain-text rendering for terminals and JSON for everything else.

use crate::script::ReplayEvent;
use hir_filter::{Dimension, FilterSelection, FilterSession, Frame, OptionSets, Resolution};
use hir_records::RecordStore;
use hir_view::{project, render_text, View, ViewMode};
use serde::Serialize;
use std::fmt::Write as _;

/// Output of the `resolve` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveReport {
    /// Identifiers of rows matching the selection as given
    pub filtered: Vec<String>,
    /// Option lists per dimension
    pub options: OptionSets,
    /// Selection after dropping values no longer offered
    pub corrected: FilterSelection,
}

impl From<&Resolution<'_>> for ResolveReport {
    fn from(resolution: &Resolution<'_>) -> Self {
        Self {
            filtered: resolution.filtered_ids().map(str::to_owned).collect(),
            options: resolution.options.clone(),
            corrected: resolution.corrected.clone(),
        }
    }
}

impl ResolveReport {
    /// Plain-text rendering
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "filtered ({}): {}", self.filtered.len(), self.filtered.join(", "));
        write_options(&mut out, &self.options);
        let _ = writeln!(out, "corrected: {}", describe(&self.corrected));
        out
    }
}

/// One rendered step of a replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayStep {
    /// One-based position in the script
    pub step: usize,
    /// Event description
    pub event: String,
    /// Committed selection after the event
    pub selection: FilterSelection,
    /// Option lists shown with it
    pub options: OptionSets,
    /// Dimensions whose values were dropped by correction
    pub corrected: Vec<Dimension>,
    /// Projected tab
    pub view: View,
}

impl ReplayStep {
    fn new(step: usize, event: &ReplayEvent, frame: &Frame<'_>, tab: ViewMode) -> Self {
        Self {
            step,
            event: event.label(),
            selection: frame.selection.clone(),
            options: frame.options.clone(),
            corrected: frame.corrected.clone(),
            view: project(tab, frame.filtered.iter().copied()),
        }
    }

    /// Plain-text rendering
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "-- step {}: {} --", self.step, self.event);
        let _ = writeln!(out, "selection: {}", describe(&self.selection));
        if !self.corrected.is_empty() {
            let names: Vec<String> = self.corrected.iter().map(ToString::to_string).collect();
            let _ = writeln!(out, "dropped stale values in: {}", names.join(", "));
        }
        write_options(&mut out, &self.options);
        out.push_str(&render_text(&self.view));
        out
    }
}

/// Run `events` through a fresh session over `store`, starting on `tab`
#[must_use]
pub fn replay(store: &RecordStore, events: &[ReplayEvent], tab: ViewMode) -> Vec<ReplayStep> {
    let mut session = FilterSession::new(store.clone());
    let mut tab = tab;

    events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let step = index + 1;
            match event.action() {
                Some(action) => {
                    let frame = session.apply(action);
                    ReplayStep::new(step, event, &frame, tab)
                }
                None => {
                    if let ReplayEvent::Tab(mode) = event {
                        tab = *mode;
                    }
                    ReplayStep::new(step, event, &session.frame(), tab)
                }
            }
        })
        .collect()
}

/// Compact one-line form of a selection
#[must_use]
pub fn describe(selection: &FilterSelection) -> String {
    if selection.is_unconstrained() {
        return "(no constraint)".to_string();
    }
    Dimension::ALL
        .into_iter()
        .filter(|dimension| !selection.get(*dimension).is_unconstrained())
        .map(|dimension| {
            let values: Vec<&str> = selection.get(dimension).iter().collect();
            format!("{dimension}=[{}]", values.join(", "))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_options(out: &mut String, options: &OptionSets) {
    for dimension in Dimension::ALL {
        let _ = writeln!(
            out,
            "{} options: {}",
            dimension.label(),
            options.get(dimension).join(", ")
        );
    }
}
