use hir_filter::{clear, resolve, Dimension, FilterSelection, Selection};
use hir_test_utils::strategies::{records, slot, slots, LOCATIONS};
use proptest::prelude::*;

fn selection_from(slots: [Option<Vec<String>>; 4]) -> FilterSelection {
    Dimension::ALL
        .into_iter()
        .zip(slots)
        .fold(clear(), |acc, (dim, values)| acc.with(dim, Selection::from(values)))
}

proptest! {
    #[test]
    fn prop_filtered_is_matching_subset(records in records(), raw in slots()) {
        let selection = selection_from(raw);
        let resolution = resolve(&selection, &records);

        for row in &resolution.filtered {
            prop_assert!(records.iter().any(|r| std::ptr::eq(r, *row)));
            prop_assert!(selection.matches(row));
        }
        let expected = records.iter().filter(|r| selection.matches(r)).count();
        prop_assert_eq!(resolution.filtered.len(), expected);
    }

    #[test]
    fn prop_resolve_is_idempotent(records in records(), raw in slots()) {
        let selection = selection_from(raw);
        prop_assert_eq!(resolve(&selection, &records), resolve(&selection, &records));
    }

    #[test]
    fn prop_corrected_within_options(records in records(), raw in slots()) {
        let selection = selection_from(raw);
        let resolution = resolve(&selection, &records);

        for dim in Dimension::ALL {
            for value in resolution.corrected.get(dim).iter() {
                prop_assert!(resolution.options.contains(dim, value));
                prop_assert!(selection.get(dim).iter().any(|v| v == value));
            }
        }
    }

    #[test]
    fn prop_options_sorted_and_distinct(records in records(), raw in slots()) {
        let resolution = resolve(&selection_from(raw), &records);
        for dim in Dimension::ALL {
            let options = resolution.options.get(dim);
            prop_assert!(options.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert!(options.iter().all(|o| !o.is_empty()));
        }
    }

    #[test]
    fn prop_options_exclude_own_selection(
        records in records(),
        raw in slots(),
        replacement in slot(&LOCATIONS),
        dim_index in 0..4usize,
    ) {
        let dim = Dimension::ALL[dim_index];
        let selection = selection_from(raw);
        let changed = selection.with(dim, Selection::from(replacement));

        let before = resolve(&selection, &records);
        let after = resolve(&changed, &records);
        prop_assert_eq!(before.options.get(dim), after.options.get(dim));
    }

    #[test]
    fn prop_one_correction_pass_is_a_fixed_point(records in records(), raw in slots()) {
        let corrected = resolve(&selection_from(raw), &records).corrected;
        prop_assert_eq!(&resolve(&corrected, &records).corrected, &corrected);
    }

    #[test]
    fn prop_correction_only_removes(records in records(), raw in slots()) {
        let selection = selection_from(raw);
        let resolution = resolve(&selection, &records);
        prop_assert!(resolution.corrected.selected_count() <= selection.selected_count());
    }
}

#[test]
fn test_prefix_token_never_matches_longer_tokens() {
    let records = vec![
        hir_records::RecordBuilder::new("1").location("NB, NS").build(),
        hir_records::RecordBuilder::new("2").location("N").build(),
    ];
    let selection = clear().with(Dimension::Location, Selection::values(["N"]));
    let resolution = resolve(&selection, &records);

    assert_eq!(resolution.filtered_ids().collect::<Vec<_>>(), vec!["2"]);
}
