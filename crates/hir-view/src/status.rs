//! Tracking-grid status cells
//!
//! Status text is free-form in the sheet; only a fixed vocabulary gets a
//! highlight. Matching is exact, so `"pending"` or `" Pending"` stay
//! unclassified.

use serde::Serialize;

/// Highlight class of a status cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusClass {
    /// `-`
    NotApplicable,
    /// `Pending`
    Pending,
    /// `In progress`
    InProgress,
    /// Complete or in action
    Active,
    /// Anything else, including blank
    Unclassified,
}

impl StatusClass {
    /// Status texts rendered as active
    pub const ACTIVE: [&'static str; 4] =
        ["Complete", "In action", "In Action", "Complete/ In action"];

    /// Classify a status cell
    #[must_use]
    pub fn classify(value: &str) -> Self {
        match value {
            "-" => StatusClass::NotApplicable,
            "Pending" => StatusClass::Pending,
            "In progress" => StatusClass::InProgress,
            v if Self::ACTIVE.contains(&v) => StatusClass::Active,
            _ => StatusClass::Unclassified,
        }
    }

    /// Single-character marker for plain-text tables
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            StatusClass::NotApplicable => ' ',
            StatusClass::Pending => '!',
            StatusClass::InProgress => '~',
            StatusClass::Active => '+',
            StatusClass::Unclassified => '?',
        }
    }
}

/// One status value with its class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCell {
    /// Text as it appears in the sheet
    pub value: String,
    /// Highlight class
    pub class: StatusClass,
}

impl StatusCell {
    /// Classify `value`
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let class = StatusClass::classify(&value);
        Self { value, class }
    }
}
