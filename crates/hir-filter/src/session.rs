//! Interaction session
//!
//! Adapter between UI events and [`resolve`](crate::resolve). Each
//! [`Action`] runs one synchronous resolve-and-commit cycle and yields a
//! [`Frame`] whose rows, options and selection all derive from the same
//! committed selection. The committed selection is replaced wholesale.
//!
//! When the raw selection needs correcting, the corrected selection is
//! resolved once more before rendering. That second pass never corrects
//! anything further: a record supporting a kept value in one dimension also
//! supports the values it matched in every other dimension, so those values
//! survive the first correction too.

use crate::dimension::Dimension;
use crate::engine::{FilterEngine, Resolution};
use crate::options::OptionSets;
use crate::selection::{clear, FilterSelection, Selection};
use hir_records::{Record, RecordStore};
use serde::Serialize;

/// A user interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// New raw selection for all four dimensions
    SelectionChanged(FilterSelection),
    /// One dropdown changed; the others keep their committed values
    Select(Dimension, Selection),
    /// Reset every dimension
    Clear,
}

impl Action {
    fn kind(&self) -> &'static str {
        match self {
            Action::SelectionChanged(_) => "selection-changed",
            Action::Select(..) => "select",
            Action::Clear => "clear",
        }
    }
}

/// What gets rendered after an interaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame<'a> {
    /// Committed selection; rows and options were computed from it
    pub selection: FilterSelection,
    /// Dropdown options
    pub options: OptionSets,
    /// Rows to display, in dataset order
    pub filtered: Vec<&'a Record>,
    /// Dimensions whose raw selection lost values to correction
    pub corrected: Vec<Dimension>,
    /// Resolve passes run for this interaction (1 or 2)
    pub passes: usize,
}

impl<'a> Frame<'a> {
    fn new(
        selection: FilterSelection,
        resolution: Resolution<'a>,
        corrected: Vec<Dimension>,
        passes: usize,
    ) -> Self {
        Self {
            selection,
            options: resolution.options,
            filtered: resolution.filtered,
            corrected,
            passes,
        }
    }

    /// Identifiers of the displayed rows
    pub fn filtered_ids(&self) -> impl Iterator<Item = &str> {
        self.filtered.iter().map(|record| record.id())
    }
}

/// Filter state owned by one interaction loop
#[derive(Debug, Clone)]
pub struct FilterSession {
    engine: FilterEngine,
    selection: FilterSelection,
}

impl FilterSession {
    /// Session over `store`, starting cleared
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self {
            engine: FilterEngine::new(store),
            selection: clear(),
        }
    }

    /// Committed selection
    #[inline]
    #[must_use]
    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Render the committed selection without changing it
    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        let resolution = self.engine.resolve(&self.selection);
        Frame::new(self.selection.clone(), resolution, Vec::new(), 1)
    }

    /// Apply one interaction and return the frame to render
    pub fn apply(&mut self, action: Action) -> Frame<'_> {
        let kind = action.kind();
        let raw = match action {
            Action::SelectionChanged(selection) => selection,
            Action::Select(dimension, selection) => self.selection.with(dimension, selection),
            Action::Clear => clear(),
        };

        let frame = commit(&self.engine, raw);
        if !frame.corrected.is_empty() {
            tracing::debug!(dimensions = ?frame.corrected, "Dropped selections no longer offered");
        }
        tracing::info!(
            action = kind,
            passes = frame.passes,
            rows = frame.filtered.len(),
            selected = frame.selection.selected_count(),
            "Applied filter action"
        );

        self.selection = frame.selection.clone();
        frame
    }
}

/// Resolve `raw`; if it needed correcting, render from the corrected selection
fn commit(engine: &FilterEngine, raw: FilterSelection) -> Frame<'_> {
    let first = engine.resolve(&raw);
    if first.corrected == raw {
        return Frame::new(raw, first, Vec::new(), 1);
    }

    let corrected: Vec<Dimension> = first.corrected.changed_dimensions(&raw).collect();
    let committed = first.corrected;
    let second = engine.resolve(&committed);
    debug_assert_eq!(second.corrected, committed, "correction is a fixed point");

    Frame::new(committed, second, corrected, 2)
}
