//! Replay scripts
//!
//! A script is a JSON array or YAML sequence of events:
//!
//! ```yaml
//! - select: { dimension: category, values: [Supply] }
//! - set: { locations: [NB, NS], stakeholders: [Province] }
//! - tab: initiatives
//! - clear
//! ```
//!
//! `select` changes one dropdown, `set` replaces the whole selection
//! (missing slots are unconstrained), `tab` switches the projected view.
//! YAML events are single-key maps, not `!tagged` values.

use crate::error::DashboardError;
use hir_filter::{Action, Dimension, FilterSelection, Selection};
use hir_view::ViewMode;
use serde::Deserialize;
use serde_yaml::with::singleton_map_recursive;
use std::path::Path;

/// One scripted interaction
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplayEvent {
    /// Change one dropdown; `null` or `[]` clears it
    Select {
        /// Dropdown being changed
        dimension: Dimension,
        /// New values
        #[serde(default)]
        values: Option<Vec<String>>,
    },
    /// Replace the whole selection
    Set(FilterSelection),
    /// Reset every dropdown
    Clear,
    /// Switch tab without touching the filters
    Tab(ViewMode),
}

impl ReplayEvent {
    /// Filter action this event triggers; `None` for tab switches
    #[must_use]
    pub fn action(&self) -> Option<Action> {
        match self {
            ReplayEvent::Select { dimension, values } => {
                Some(Action::Select(*dimension, Selection::from(values.clone())))
            }
            ReplayEvent::Set(selection) => Some(Action::SelectionChanged(selection.clone())),
            ReplayEvent::Clear => Some(Action::Clear),
            ReplayEvent::Tab(_) => None,
        }
    }

    /// Short description for output headers
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            ReplayEvent::Select { dimension, .. } => format!("select {dimension}"),
            ReplayEvent::Set(_) => "set".to_string(),
            ReplayEvent::Clear => "clear".to_string(),
            ReplayEvent::Tab(mode) => format!("tab {mode}"),
        }
    }
}

/// Script encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFormat {
    /// JSON array
    Json,
    /// YAML sequence
    Yaml,
}

impl ScriptFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, DashboardError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "json" => Ok(ScriptFormat::Json),
            "yaml" | "yml" => Ok(ScriptFormat::Yaml),
            _ => Err(DashboardError::UnsupportedScript(extension)),
        }
    }
}

/// Parse a script document
pub fn parse_script(
    source: &str,
    format: ScriptFormat,
) -> Result<Vec<ReplayEvent>, DashboardError> {
    let events = match format {
        ScriptFormat::Json => serde_json::from_str(source)?,
        ScriptFormat::Yaml => {
            singleton_map_recursive::deserialize(serde_yaml::Deserializer::from_str(source))?
        }
    };
    Ok(events)
}

/// Read and parse a script file
pub fn load_script(path: &Path) -> Result<Vec<ReplayEvent>, DashboardError> {
    let format = ScriptFormat::from_path(path)?;
    let source =
        std::fs::read_to_string(path).map_err(|source| DashboardError::io_error(path, source))?;
    let events = parse_script(&source, format)?;
    tracing::debug!(path = %path.display(), events = events.len(), "Loaded replay script");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_yaml_events() {
        let events = parse_script(
            "- select: { dimension: location, values: [NB] }\n\
             - set: { categories: [Supply] }\n\
             - tab: dashboard\n\
             - clear\n",
            ScriptFormat::Yaml,
        )
        .unwrap();

        assert_eq!(
            events,
            vec![
                ReplayEvent::Select {
                    dimension: Dimension::Location,
                    values: Some(vec!["NB".into()]),
                },
                ReplayEvent::Set(
                    FilterSelection::new().with(Dimension::Category, Selection::values(["Supply"]))
                ),
                ReplayEvent::Tab(ViewMode::Dashboard),
                ReplayEvent::Clear,
            ]
        );
    }

    #[test]
    fn yaml_select_accepts_dimension_aliases() {
        let events = parse_script(
            "- select: { dimension: Sub-Category, values: [Modular] }\n\
             - select:\n    dimension: locations\n",
            ScriptFormat::Yaml,
        )
        .unwrap();

        assert_eq!(
            events[0].action(),
            Some(Action::Select(Dimension::Subcategory, Selection::values(["Modular"])))
        );
        assert_eq!(
            events[1].action(),
            Some(Action::Select(Dimension::Location, Selection::Unconstrained))
        );
        assert!(parse_script("- select: { dimension: region }\n", ScriptFormat::Yaml).is_err());
    }

    #[test]
    fn parses_json_events() {
        let events = parse_script(
            r#"[{"select": {"dimension": "stakeholder"}}, "clear"]"#,
            ScriptFormat::Json,
        )
        .unwrap();

        assert_eq!(
            events[0].action(),
            Some(Action::Select(Dimension::Stakeholder, Selection::Unconstrained))
        );
        assert_eq!(events[1].label(), "clear");
    }

    #[test]
    fn rejects_unknown_event() {
        assert!(parse_script("- reset", ScriptFormat::Yaml).is_err());
        assert!(matches!(
            ScriptFormat::from_path(Path::new("steps.txt")),
            Err(DashboardError::UnsupportedScript(ext)) if ext == "txt"
        ));
    }
}
