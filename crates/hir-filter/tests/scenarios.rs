use hir_filter::{clear, resolve, Dimension, FilterEngine, Selection};
use hir_test_utils::{record, sample_store, store, two_record_store};
use pretty_assertions::assert_eq;

#[test]
fn test_location_selection_cascades() {
    let store = two_record_store();
    let selection = clear().with(Dimension::Location, Selection::values(["NS"]));
    let resolution = resolve(&selection, store.records());

    assert_eq!(resolution.filtered_ids().collect::<Vec<_>>(), vec!["R1"]);
    assert_eq!(resolution.options.get(Dimension::Category), ["A"]);
    // own selection excluded: both locations stay offered
    assert_eq!(resolution.options.get(Dimension::Location), ["NB", "NS"]);
    assert_eq!(resolution.corrected, selection);
}

#[test]
fn test_unknown_location_is_corrected_next_resolve() {
    let store = two_record_store();
    let selection = clear()
        .with(Dimension::Category, Selection::values(["A"]))
        .with(Dimension::Location, Selection::values(["ZZ"]));

    let first = resolve(&selection, store.records());
    assert!(first.filtered.is_empty());
    assert!(first.corrected.get(Dimension::Location).is_unconstrained());
    assert!(!first.options.contains(Dimension::Location, "ZZ"));

    let second = resolve(&first.corrected, store.records());
    assert!(second.corrected.get(Dimension::Location).is_unconstrained());
    assert_eq!(second.corrected, first.corrected);
}

#[test]
fn test_stakeholder_match_is_not_substring() {
    let store = store(vec![
        hir_records::RecordBuilder::new("1")
            .stakeholders("Provincial Housing Agency")
            .build(),
        hir_records::RecordBuilder::new("2")
            .stakeholders("Province, Industry")
            .build(),
    ]);
    let selection = clear().with(Dimension::Stakeholder, Selection::values(["Province"]));
    let resolution = resolve(&selection, store.records());

    assert_eq!(resolution.filtered_ids().collect::<Vec<_>>(), vec!["2"]);

    let partial = clear().with(Dimension::Stakeholder, Selection::values(["Prov"]));
    assert!(resolve(&partial, store.records()).filtered.is_empty());
}

#[test]
fn test_emptied_dimension_has_no_options() {
    let store = store(vec![record("1", "A", ""), record("2", "B", "NB")]);
    let selection = clear()
        .with(Dimension::Category, Selection::values(["A"]))
        .with(Dimension::Location, Selection::values(["NB"]));
    let resolution = resolve(&selection, store.records());

    assert!(resolution.options.get(Dimension::Location).is_empty());
    assert!(resolution.corrected.get(Dimension::Location).is_unconstrained());
    assert!(resolution.filtered.is_empty());
}

#[test]
fn test_blank_category_is_not_an_option() {
    let engine = FilterEngine::new(sample_store());
    let initial = engine.initial();

    assert_eq!(
        initial.options.get(Dimension::Category),
        ["Finance", "Regulation", "Supply"]
    );
    assert_eq!(initial.filtered.len(), 5);
}

#[test]
fn test_multi_value_selection_is_a_union() {
    let engine = FilterEngine::new(sample_store());
    let selection = clear().with(Dimension::Location, Selection::values(["NL", "NS"]));
    let resolution = engine.resolve(&selection);

    assert_eq!(resolution.filtered_ids().collect::<Vec<_>>(), vec!["1", "2", "3"]);
}

#[test]
fn test_dimensions_combine_conjunctively() {
    let engine = FilterEngine::new(sample_store());
    let selection = clear()
        .with(Dimension::Category, Selection::values(["Supply"]))
        .with(Dimension::Stakeholder, Selection::values(["Industry"]))
        .with(Dimension::Location, Selection::values(["Atlantic"]));
    let resolution = engine.resolve(&selection);

    assert_eq!(resolution.filtered_ids().collect::<Vec<_>>(), vec!["4"]);
    assert_eq!(resolution.options.get(Dimension::Subcategory), ["Labour"]);
    assert_eq!(
        resolution.options.get(Dimension::Location),
        ["Atlantic", "NB", "NS", "PEI"]
    );
    assert_eq!(resolution.corrected, selection);
}
