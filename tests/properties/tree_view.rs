//! Property tests for `TreeView` click handling against random trees.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;

use labeltree::{ClickModifiers, MemoryTarget, TreeNode, TreeView, TreeViewOptions};

/// Tree shape: `None` is a leaf, `Some(children)` a category. Second level
/// children are leaves (`None`) or categories with `n` leaves (`Some(n)`).
type Shape = Vec<Option<Vec<Option<usize>>>>;

fn shape_strategy() -> impl Strategy<Value = Shape> {
    proptest::collection::vec(
        proptest::option::of(proptest::collection::vec(
            proptest::option::of(0usize..4),
            0..4,
        )),
        1..5,
    )
}

fn build_tree(shape: &Shape) -> Vec<TreeNode> {
    shape
        .iter()
        .enumerate()
        .map(|(i, top)| {
            let id = format!("{i}");
            match top {
                None => TreeNode::leaf(id.clone(), format!("leaf {id}")),
                Some(children) => {
                    let mut node = TreeNode::category(id.clone(), format!("cat {id}"));
                    for (j, child) in children.iter().enumerate() {
                        let child_id = format!("{id}.{j}");
                        let child_node = match child {
                            None => TreeNode::leaf(child_id.clone(), "leaf"),
                            Some(n) => (0..*n).fold(
                                TreeNode::category(child_id.clone(), "cat"),
                                |cat, k| cat.with_child(TreeNode::leaf(format!("{child_id}.{k}"), "leaf")),
                            ),
                        };
                        node.add_child(child_node);
                    }
                    node
                }
            }
        })
        .collect()
}

fn find<'a>(nodes: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
    nodes.iter().find_map(|node| {
        if node.id() == id {
            Some(node)
        } else {
            find(node.children(), id)
        }
    })
}

fn descendant_ids(node: &TreeNode, out: &mut Vec<String>) {
    for child in node.children() {
        out.push(child.id().to_string());
        descendant_ids(child, out);
    }
}

fn selected_ids<T: labeltree::RenderTarget>(view: &TreeView<T>) -> Vec<String> {
    view.selected_nodes()
        .iter()
        .map(|n| n.id().to_string())
        .collect()
}

#[derive(Debug, Clone)]
enum Op {
    Click(usize, u8),
    SelectAll,
    Clear,
    Search(String),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0usize..40, 0u8..3).prop_map(|(i, m)| Op::Click(i, m)),
        1 => Just(Op::SelectAll),
        1 => Just(Op::Clear),
        1 => "[a-z. ]{0,4}".prop_map(Op::Search),
    ]
}

fn modifiers(code: u8) -> ClickModifiers {
    match code {
        0 => ClickModifiers::NONE,
        1 => ClickModifiers::SHIFT,
        _ => ClickModifiers::CTRL,
    }
}

fn apply(view: &mut TreeView<MemoryTarget>, op: &Op) {
    match op {
        Op::Click(index, code) => view.handle_click(*index, modifiers(*code)),
        Op::SelectAll => view.select_all(),
        Op::Clear => view.clear_selection(),
        Op::Search(query) => view.set_search_query(query),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a plain click selects exactly the row plus its descendants.
    #[test]
    fn property_plain_click_selects_one(shape in shape_strategy(), pick in 0usize..40) {
        let tree = build_tree(&shape);
        let mut view = TreeView::new(MemoryTarget::default(), tree, TreeViewOptions::default());
        view.select_all();

        let order = view.flattened_order().to_vec();
        let index = pick % order.len();
        let id = order[index].clone();
        view.handle_click(index, ClickModifiers::NONE);

        let node = find(view.nodes(), &id).cloned();
        prop_assert!(node.is_some());
        let node = node.unwrap_or_else(|| TreeNode::leaf("", ""));
        let mut expected = vec![id];
        descendant_ids(&node, &mut expected);
        let mut got = selected_ids(&view);
        got.sort();
        expected.sort();
        prop_assert_eq!(got, expected);
    }

    /// PROPERTY: cascade never selects an ancestor of the clicked node.
    #[test]
    fn property_cascade_flows_downwards(shape in shape_strategy(), pick in 0usize..40) {
        let tree = build_tree(&shape);
        let mut view = TreeView::new(MemoryTarget::default(), tree, TreeViewOptions::default());

        let order = view.flattened_order().to_vec();
        let index = pick % order.len();
        let id = order[index].clone();
        view.handle_click(index, ClickModifiers::CTRL);

        for selected in selected_ids(&view) {
            // Dotted ids encode the path, so every selected id must sit at or below the clicked one.
            prop_assert!(
                selected == id || selected.starts_with(&format!("{id}.")),
                "{} selected after clicking {}", selected, id
            );
        }
    }

    /// PROPERTY: selecting every child of a category never selects the category.
    #[test]
    fn property_no_upward_inference(shape in shape_strategy()) {
        let tree = build_tree(&shape);
        let mut view = TreeView::new(MemoryTarget::default(), tree, TreeViewOptions::default());

        let order = view.flattened_order().to_vec();
        for (index, id) in order.iter().enumerate() {
            let is_category = find(view.nodes(), id).is_some_and(TreeNode::is_category);
            if !is_category {
                view.handle_click(index, ClickModifiers::CTRL);
            }
        }

        for id in selected_ids(&view) {
            let is_category = find(view.nodes(), &id).is_some_and(TreeNode::is_category);
            prop_assert!(!is_category, "category {} was inferred", id);
        }
    }

    /// PROPERTY: ctrl-clicking the same row twice restores the selection
    /// when cascade is off.
    #[test]
    fn property_ctrl_click_twice_is_identity(
        shape in shape_strategy(),
        ops in proptest::collection::vec(op_strategy(), 0..8),
        pick in 0usize..40
    ) {
        let options = TreeViewOptions { cascade_select_children: false, ..TreeViewOptions::default() };
        let mut view = TreeView::new(MemoryTarget::default(), build_tree(&shape), options);
        for op in ops.iter().filter(|op| !matches!(op, Op::Search(_))) {
            apply(&mut view, op);
        }
        let before = selected_ids(&view);

        let index = pick % view.flattened_order().len();
        view.handle_click(index, ClickModifiers::CTRL);
        view.handle_click(index, ClickModifiers::CTRL);

        prop_assert_eq!(selected_ids(&view), before);
    }

    /// PROPERTY: changing the search query never changes the selection.
    #[test]
    fn property_search_preserves_selection(
        shape in shape_strategy(),
        ops in proptest::collection::vec(op_strategy(), 0..10),
        query in "[a-z0-9. ]{0,5}"
    ) {
        let mut view = TreeView::new(MemoryTarget::default(), build_tree(&shape), TreeViewOptions::default());
        for op in &ops {
            apply(&mut view, op);
        }
        let before = selected_ids(&view);

        view.set_search_query(&query);

        prop_assert_eq!(selected_ids(&view), before);
    }

    /// PROPERTY: set_data always leaves an empty selection and never notifies.
    #[test]
    fn property_set_data_clears_selection(
        shape in shape_strategy(),
        next in shape_strategy(),
        ops in proptest::collection::vec(op_strategy(), 0..10)
    ) {
        let calls = Rc::new(RefCell::new(0usize));
        let counter = Rc::clone(&calls);
        let mut view = TreeView::new(MemoryTarget::default(), build_tree(&shape), TreeViewOptions::default())
            .on_selection_change(move |_| *counter.borrow_mut() += 1);
        for op in &ops {
            apply(&mut view, op);
        }
        let notified = *calls.borrow();

        view.set_data(build_tree(&next));

        prop_assert_eq!(view.selected_count(), 0);
        prop_assert_eq!(*calls.borrow(), notified);
    }

    /// PROPERTY: arbitrary operation sequences never panic and keep every
    /// selected id inside the current tree.
    #[test]
    fn property_operations_never_panic(
        shape in shape_strategy(),
        ops in proptest::collection::vec(op_strategy(), 0..24)
    ) {
        let mut view = TreeView::new(MemoryTarget::default(), build_tree(&shape), TreeViewOptions::default());
        for op in &ops {
            apply(&mut view, op);
            view.move_cursor_down();
            view.expand_cursor();
        }

        for id in selected_ids(&view) {
            prop_assert!(find(view.nodes(), &id).is_some());
        }
    }
}
