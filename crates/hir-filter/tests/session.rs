use hir_filter::{clear, resolve, Action, Dimension, FilterSelection, FilterSession, Selection};
use hir_records::RecordBuilder;
use hir_test_utils::strategies::{records, slots};
use hir_test_utils::{sample_store, store};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn selection_from(slots: [Option<Vec<String>>; 4]) -> FilterSelection {
    Dimension::ALL
        .into_iter()
        .zip(slots)
        .fold(FilterSelection::new(), |acc, (dim, values)| {
            acc.with(dim, Selection::from(values))
        })
}

#[test]
fn test_rendered_frame_agrees_with_selection() {
    let store = store(vec![
        RecordBuilder::new("1").category("A").location("X").stakeholders("P").build(),
        RecordBuilder::new("2").category("B").location("Y").stakeholders("Q").build(),
        RecordBuilder::new("3").category("A").location("Y").build(),
    ]);
    let raw = FilterSelection::new()
        .with(Dimension::Category, Selection::values(["A", "B"]))
        .with(Dimension::Location, Selection::values(["X", "Z"]))
        .with(Dimension::Stakeholder, Selection::values(["P", "Q"]));

    let mut session = FilterSession::new(store.clone());
    let frame = session.apply(Action::SelectionChanged(raw));

    assert_eq!(frame.passes, 2);
    assert_eq!(frame.selection.get(Dimension::Category), &Selection::values(["A"]));
    assert_eq!(frame.selection.get(Dimension::Location), &Selection::values(["X"]));
    assert_eq!(frame.selection.get(Dimension::Stakeholder), &Selection::values(["P"]));
    assert_eq!(
        frame.corrected,
        vec![Dimension::Category, Dimension::Location, Dimension::Stakeholder]
    );
    assert_eq!(frame.filtered_ids().collect::<Vec<_>>(), vec!["1"]);

    let check = resolve(&frame.selection, store.records());
    assert_eq!(check.options, frame.options);
    assert_eq!(check.filtered, frame.filtered);
}

#[test]
fn test_session_walkthrough() {
    let mut session = FilterSession::new(sample_store());

    let frame = session.apply(Action::Select(Dimension::Category, Selection::values(["Supply"])));
    assert_eq!(frame.filtered_ids().collect::<Vec<_>>(), vec!["1", "4"]);
    assert_eq!(frame.options.get(Dimension::Subcategory), ["Labour", "Modular"]);

    let frame = session.apply(Action::Select(Dimension::Location, Selection::values(["PEI"])));
    assert_eq!(frame.filtered_ids().collect::<Vec<_>>(), vec!["1"]);
    assert_eq!(frame.options.get(Dimension::Category), ["Finance", "Supply"]);

    let frame = session.apply(Action::Select(Dimension::Category, Selection::values(["Finance"])));
    assert_eq!(frame.filtered_ids().collect::<Vec<_>>(), vec!["3"]);
    assert_eq!(frame.selection.get(Dimension::Location), &Selection::values(["PEI"]));

    let frame = session.apply(Action::Clear);
    assert!(frame.selection.is_unconstrained());
    assert_eq!(frame.filtered.len(), 5);
}

#[test]
fn test_frame_without_action_reuses_committed_selection() {
    let mut session = FilterSession::new(sample_store());
    session.apply(Action::Select(Dimension::Stakeholder, Selection::values(["Industry"])));

    let frame = session.frame();
    assert_eq!(frame.selection, *session.selection());
    assert_eq!(frame.filtered_ids().collect::<Vec<_>>(), vec!["1", "4"]);
    assert_eq!(frame.passes, 1);
}

proptest! {
    #[test]
    fn prop_frames_are_fixed_points(records in records(), raw in slots()) {
        let store = store(records);
        let mut session = FilterSession::new(store.clone());
        let frame = session.apply(Action::SelectionChanged(selection_from(raw)));
        prop_assert!(frame.passes <= 2);

        let again = resolve(&frame.selection, store.records());
        prop_assert_eq!(&again.corrected, &frame.selection);
        prop_assert_eq!(&again.options, &frame.options);
        prop_assert_eq!(again.filtered.len(), frame.filtered.len());
    }

    #[test]
    fn prop_clear_after_any_selection_shows_everything(records in records(), raw in slots()) {
        let store = store(records);
        let mut session = FilterSession::new(store.clone());
        session.apply(Action::SelectionChanged(selection_from(raw)));

        let frame = session.apply(Action::Clear);
        prop_assert!(frame.selection.is_unconstrained());
        prop_assert_eq!(&frame.options, &resolve(&clear(), store.records()).options);
        prop_assert_eq!(frame.filtered.len(), store.len());
        prop_assert_eq!(frame.passes, 1);
    }

    #[test]
    fn prop_session_commits_frame_selection(records in records(), raw in slots()) {
        let mut session = FilterSession::new(store(records));
        let selection = session.apply(Action::SelectionChanged(selection_from(raw))).selection;
        prop_assert_eq!(session.selection(), &selection);
    }
}
