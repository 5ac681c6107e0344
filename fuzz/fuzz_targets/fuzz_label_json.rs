#![no_main]

use libfuzzer_sys::fuzz_target;

use labeltree::domain::entities::{labels_to_tree, parse_label_json, parse_tree_json};
use labeltree::{ClickModifiers, MemoryTarget, TreeView, TreeViewOptions};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Backend payloads and raw trees must never panic, and neither may
        // clicking every row of whatever parsed
        let trees = [
            parse_label_json(content, "fuzz.json").map(labels_to_tree).ok(),
            parse_tree_json(content, "fuzz.json").ok(),
        ];
        for tree in trees.into_iter().flatten() {
            let mut view = TreeView::new(MemoryTarget::default(), tree, TreeViewOptions::default());
            let len = view.flattened_order().len();
            for index in 0..=len {
                view.handle_click(index, ClickModifiers::CTRL);
            }
            view.set_search_query(content.get(..3).unwrap_or(""));
            let _ = serde_json::to_string(&view.selected_nodes());
        }
    }
});
