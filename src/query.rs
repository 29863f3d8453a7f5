//! Read views over the store: status filtering, title sort, keyword
//! search. Nothing here mutates; everything returns borrowed tasks.

use crate::store::TaskStore;
use crate::task::Task;

/// The four filters the "view my tasks" menu offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Pending,
    InProgress,
    Done,
}

impl StatusFilter {
    /// The canonical label this filter matches, `None` for `All`.
    fn label(self) -> Option<&'static str> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Pending => Some("Pending"),
            StatusFilter::InProgress => Some("In progress"),
            StatusFilter::Done => Some("Done"),
        }
    }
}

/// Tasks whose rendered status label matches the filter exactly. Free-text
/// statuses never match a canonical filter but do pass `All`.
pub fn filter_by_status(store: &TaskStore, filter: StatusFilter) -> Vec<&Task> {
    store
        .records()
        .iter()
        .filter(|task| {
            filter
                .label()
                .map_or(true, |label| task.status.label() == label)
        })
        .collect()
}

/// Stable byte-wise title order, used before every filtered-list display
/// so output is deterministic regardless of insertion order.
pub fn sort_by_title<'a>(mut tasks: Vec<&'a Task>) -> Vec<&'a Task> {
    tasks.sort_by(|a, b| a.title.as_bytes().cmp(b.title.as_bytes()));
    tasks
}

/// Case-sensitive substring match on titles, in store order. An empty
/// keyword matches everything; an empty result is a normal outcome.
pub fn search_by_title<'a>(store: &'a TaskStore, keyword: &str) -> Vec<&'a Task> {
    store
        .records()
        .iter()
        .filter(|task| task.title.contains(keyword))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Status;

    fn store_with(entries: &[(&str, &str)]) -> TaskStore {
        let mut store = TaskStore::new();
        for (title, status) in entries {
            let index = store.add(Task::create(title, "", "", 1)).unwrap();
            if *status != "Pending" {
                store.set_status(index, Status::from_label(status)).unwrap();
            }
        }
        store
    }

    #[test]
    fn filter_matches_canonical_labels_exactly() {
        let store = store_with(&[("Buy milk", "Pending"), ("Call Bob", "Done")]);
        let pending = filter_by_status(&store, StatusFilter::Pending);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].title, "Buy milk");

        let done = filter_by_status(&store, StatusFilter::Done);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].title, "Call Bob");
    }

    #[test]
    fn free_text_status_only_passes_the_all_filter() {
        let store = store_with(&[("a", "Blocked upstream"), ("b", "Pending")]);
        assert_eq!(filter_by_status(&store, StatusFilter::Pending).len(), 1);
        assert_eq!(filter_by_status(&store, StatusFilter::Done).len(), 0);
        assert_eq!(filter_by_status(&store, StatusFilter::All).len(), 2);
    }

    #[test]
    fn sort_is_byte_wise_ascending() {
        let store = store_with(&[("Call Bob", "Pending"), ("Buy milk", "Pending")]);
        let sorted = sort_by_title(filter_by_status(&store, StatusFilter::All));
        let titles: Vec<_> = sorted.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Buy milk", "Call Bob"]);
    }

    #[test]
    fn sort_keeps_insertion_order_for_equal_titles() {
        let mut store = TaskStore::new();
        store.add(Task::create("same", "first in", "", 1)).unwrap();
        store.add(Task::create("same", "second in", "", 1)).unwrap();
        let sorted = sort_by_title(filter_by_status(&store, StatusFilter::All));
        assert_eq!(sorted[0].description, "first in");
        assert_eq!(sorted[1].description, "second in");
    }

    #[test]
    fn search_is_case_sensitive_substring() {
        let store = store_with(&[("Buy milk", "Pending"), ("buy stamps", "Pending")]);
        let hits = search_by_title(&store, "Buy");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Buy milk");
        assert!(search_by_title(&store, "zzz").is_empty());
    }

    #[test]
    fn empty_keyword_matches_every_task_in_store_order() {
        let store = store_with(&[("zeta", "Pending"), ("alpha", "Done")]);
        let hits = search_by_title(&store, "");
        let titles: Vec<_> = hits.iter().map(|t| t.title.as_str()).collect();
        // store order, no sort applied
        assert_eq!(titles, vec!["zeta", "alpha"]);
    }
}
