//! Plain-text and JSON output of a [`View`]

use crate::error::ViewError;
use crate::status::StatusCell;
use crate::view::{View, INITIATIVE_COLUMNS, TRACKING_COLUMNS};
use hir_records::Region;
use std::fmt::Write as _;

const EMPTY: &str = "(no matching initiatives)";

/// Render `view` as an aligned text table headed by the tab title
#[must_use]
pub fn render_text(view: &View) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ({}) ==", view.mode().title(), view.len());

    let (headers, rows): (Vec<&str>, Vec<Vec<String>>) = match view {
        View::Dashboard(panels) => (
            vec!["ID", "Image"],
            panels
                .iter()
                .map(|panel| vec![panel.id.clone(), panel.src.clone()])
                .collect(),
        ),
        View::Initiatives(rows) => (
            INITIATIVE_COLUMNS.to_vec(),
            rows.iter()
                .map(|row| row.cells().into_iter().map(str::to_owned).collect())
                .collect(),
        ),
        View::Tracking(rows) => (
            TRACKING_COLUMNS.to_vec(),
            rows.iter()
                .map(|row| {
                    let mut cells = vec![row.initiative.clone(), row.category.clone()];
                    cells.extend(Region::ALL.iter().map(|region| status_text(row.status(*region))));
                    cells.push(row.metric_notes.clone());
                    cells
                })
                .collect(),
        ),
    };

    write_table(&mut out, &headers, &rows);
    if rows.is_empty() {
        out.push_str(EMPTY);
        out.push('\n');
    }
    out
}

/// Render `view` as pretty-printed JSON
pub fn render_json(view: &View) -> Result<String, ViewError> {
    Ok(serde_json::to_string_pretty(view)?)
}

fn status_text(cell: &StatusCell) -> String {
    if cell.value.is_empty() {
        String::new()
    } else {
        format!("{} {}", cell.class.marker(), cell.value)
    }
}

fn write_table(out: &mut String, headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_line(out, headers.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_line(out, rule.iter().map(String::as_str), &widths);
    for row in rows {
        write_line(out, row.iter().map(String::as_str), &widths);
    }
}

fn write_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let mut line = String::new();
    for (cell, &width) in cells.zip(widths) {
        let _ = write!(line, "{cell:<width$}  ");
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
