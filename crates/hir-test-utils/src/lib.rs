//! Testing utilities for HIR workspace
//!
//! Shared fixtures and proptest strategies.

#![allow(missing_docs)]

use hir_records::{Record, RecordBuilder, RecordStore, Region};
use proptest::prelude::*;

pub fn record(id: &str, category: &str, location: &str) -> Record {
    RecordBuilder::new(id).category(category).location(location).build()
}

pub fn store(records: Vec<Record>) -> RecordStore {
    RecordStore::new(records).unwrap()
}

/// R1{category=A, location="NB, NS"}, R2{category=B, location="NB"}
pub fn two_record_store() -> RecordStore {
    store(vec![record("R1", "A", "NB, NS"), record("R2", "B", "NB")])
}

/// A small roadmap with every column populated somewhere
pub fn sample_store() -> RecordStore {
    store(vec![
        RecordBuilder::new("1")
            .initiative("Scale modular construction")
            .category("Supply")
            .subcategory("Modular")
            .location("NB, NS, PEI")
            .stakeholders("Province, Industry")
            .timeline("2026")
            .status(Region::NewBrunswick, "In progress")
            .status(Region::NovaScotia, "Complete")
            .status(Region::PrinceEdwardIsland, "Pending")
            .status(Region::NewfoundlandLabrador, "-")
            .status(Region::Regional, "In Action")
            .metric_notes("Units delivered per quarter")
            .has_image(true)
            .build(),
        RecordBuilder::new("2")
            .initiative("Streamline permitting")
            .category("Regulation")
            .subcategory("Permitting")
            .location("NS")
            .stakeholders("Municipal Government")
            .timeline("2025")
            .status(Region::NovaScotia, "In action")
            .build(),
        RecordBuilder::new("3")
            .initiative("Low-cost construction loans")
            .category("Finance")
            .subcategory("Loans")
            .location("NL, PEI")
            .stakeholders("Federal, Province")
            .timeline("2027")
            .status(Region::NewfoundlandLabrador, "Pending")
            .status(Region::PrinceEdwardIsland, "Complete/ In action")
            .has_image(true)
            .build(),
        RecordBuilder::new("4")
            .initiative("Skilled trades pipeline")
            .category("Supply")
            .subcategory("Labour")
            .location("Atlantic")
            .stakeholders("Industry, Post-secondary")
            .timeline("2026")
            .status(Region::Regional, "In progress")
            .build(),
        RecordBuilder::new("5")
            .initiative("Unassigned idea")
            .location("NB")
            .build(),
    ])
}

pub mod strategies {
    //! Proptest strategies over small alphabets so filters actually collide

    use super::*;

    pub static CATEGORIES: [&str; 4] = ["A", "B", "C", ""];
    pub static SUBCATEGORIES: [&str; 3] = ["s1", "s2", ""];
    /// "N" is a prefix of other tokens on purpose
    pub static LOCATIONS: [&str; 5] = ["NB", "NS", "PEI", "NL", "N"];
    pub static STAKEHOLDERS: [&str; 4] = ["Province", "Prov", "Federal", "Industry"];

    fn delimited(alphabet: &'static [&'static str]) -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(alphabet), 0..4)
            .prop_map(|tokens| tokens.join(", "))
    }

    pub fn records() -> impl Strategy<Value = Vec<Record>> {
        prop::collection::vec(
            (
                prop::sample::select(&CATEGORIES[..]),
                prop::sample::select(&SUBCATEGORIES[..]),
                delimited(&LOCATIONS),
                delimited(&STAKEHOLDERS),
            ),
            0..12,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (category, subcategory, location, stakeholders))| {
                    RecordBuilder::new(i.to_string())
                        .category(category)
                        .subcategory(subcategory)
                        .location(location)
                        .stakeholders(stakeholders)
                        .build()
                })
                .collect()
        })
    }

    /// Raw slot values: `None` is unconstrained; "ZZ" never occurs in data
    pub fn slot(alphabet: &'static [&'static str]) -> impl Strategy<Value = Option<Vec<String>>> {
        prop::option::of(prop::collection::vec(
            prop_oneof![prop::sample::select(alphabet), Just("ZZ")].prop_map(str::to_owned),
            0..3,
        ))
    }

    /// Raw values for all four slots, in dimension order
    pub fn slots() -> impl Strategy<Value = [Option<Vec<String>>; 4]> {
        (
            slot(&CATEGORIES),
            slot(&SUBCATEGORIES),
            slot(&LOCATIONS),
            slot(&STAKEHOLDERS),
        )
            .prop_map(|(a, b, c, d)| [a, b, c, d])
    }
}
