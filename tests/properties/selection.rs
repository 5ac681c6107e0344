//! Property tests for `SelectionModel` index arithmetic.

use std::collections::HashSet;

use proptest::prelude::*;

use labeltree::SelectionModel;

fn order(len: usize) -> Vec<String> {
    (0..len).map(|i| format!("n{i}")).collect()
}

/// A non-empty order length plus two indices inside it
fn len_and_two_indices() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..40).prop_flat_map(|len| (Just(len), 0..len, 0..len))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: select_single leaves exactly the clicked id selected.
    #[test]
    fn property_select_single_is_exclusive(
        (len, first, second) in len_and_two_indices()
    ) {
        let mut model = SelectionModel::new(order(len));
        model.select_all();
        model.select_single(first);
        model.select_single(second);

        let expected: HashSet<String> = [format!("n{second}")].into_iter().collect();
        prop_assert_eq!(model.selected_ids(), &expected);
        prop_assert_eq!(model.anchor(), Some(second));
    }

    /// PROPERTY: toggling the same index twice restores the selection.
    #[test]
    fn property_toggle_is_involution(
        (len, seed, index) in len_and_two_indices(),
        extra in proptest::collection::vec(any::<bool>(), 40)
    ) {
        let mut model = SelectionModel::new(order(len));
        model.select_single(seed);
        for (i, pick) in extra.iter().take(len).enumerate() {
            if *pick {
                model.toggle(i);
            }
        }
        let before = model.selected_ids().clone();

        model.toggle(index);
        model.toggle(index);

        prop_assert_eq!(model.selected_ids(), &before);
    }

    /// PROPERTY: select_range(a, b) == select_range(b, a).
    #[test]
    fn property_range_is_symmetric(
        (len, a, b) in len_and_two_indices(),
        anchor_seed in 0usize..40
    ) {
        let anchor = anchor_seed % len;

        let mut forward = SelectionModel::new(order(len));
        forward.select_single(anchor);
        forward.select_range(a, b);

        let mut backward = SelectionModel::new(order(len));
        backward.select_single(anchor);
        backward.select_range(b, a);

        prop_assert_eq!(forward.selected_ids(), backward.selected_ids());
        let (lo, hi) = (a.min(b), a.max(b));
        for i in lo..=hi {
            let id = format!("n{i}");
            prop_assert!(forward.is_selected(&id));
        }
    }

    /// PROPERTY: range selection without an anchor changes nothing.
    #[test]
    fn property_range_needs_anchor((len, a, b) in len_and_two_indices()) {
        let mut model = SelectionModel::new(order(len));
        model.select_range(a, b);
        prop_assert!(model.is_empty());

        model.select_single(a);
        model.clear();
        model.select_range(a, b);
        prop_assert!(model.is_empty());
        prop_assert_eq!(model.anchor(), None);
    }
}
