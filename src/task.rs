//! The task record and its field rules.

use crate::date;

/// Content limits in bytes. Overflowing input is truncated at the point it
/// enters the system, never rejected; the on-disk buffers are one byte
/// wider to hold a trailing NUL.
pub const TITLE_MAX: usize = 99;
pub const DESCRIPTION_MAX: usize = 499;
pub const STATUS_MAX: usize = 19;
pub const DATE_MAX: usize = 10;

/// Workflow state. The three canonical states drive filtering; `Other`
/// preserves whatever free text a user (or a foreign task file) supplied,
/// since a status overwrite accepts any text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Pending,
    InProgress,
    Done,
    Other(String),
}

impl Status {
    /// The display label; for `Other` this is the stored text itself.
    pub fn label(&self) -> &str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In progress",
            Status::Done => "Done",
            Status::Other(text) => text,
        }
    }

    /// Maps the three canonical labels to their variants and keeps
    /// anything else verbatim, clipped to the status field limit.
    pub fn from_label(text: &str) -> Self {
        match text {
            "Pending" => Status::Pending,
            "In progress" => Status::InProgress,
            "Done" => Status::Done,
            other => Status::Other(clip(other, STATUS_MAX).to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub title: String,
    pub description: String,
    pub status: Status,
    /// Set once at creation, never changed afterwards.
    pub created_date: String,
    /// Refreshed to "today" on every mutating edit.
    pub last_edited: String,
    /// Empty string means no due date.
    pub due_date: String,
    /// Always in {1,2,3} once a task exists.
    pub difficulty: i32,
}

impl Task {
    /// A fresh task: `Pending`, created and last-edited stamped with
    /// today's date, difficulty normalized.
    pub fn create(title: &str, description: &str, due_date: &str, difficulty: i32) -> Self {
        let today = date::today();
        Self {
            title: clip(title, TITLE_MAX).to_string(),
            description: clip(description, DESCRIPTION_MAX).to_string(),
            status: Status::Pending,
            created_date: today.clone(),
            last_edited: today,
            due_date: clip(due_date, DATE_MAX).to_string(),
            difficulty: normalize_difficulty(difficulty),
        }
    }

    pub fn difficulty_label(&self) -> &'static str {
        match self.difficulty {
            1 => "Easy",
            2 => "Medium",
            3 => "Hard",
            _ => "?",
        }
    }
}

/// Out-of-range difficulties collapse to 1.
pub(crate) fn normalize_difficulty(value: i32) -> i32 {
    if (1..=3).contains(&value) {
        value
    } else {
        1
    }
}

/// Cuts `text` to at most `max` bytes without splitting a UTF-8 code
/// point: the cut lands on the largest char boundary at or below `max`.
pub(crate) fn clip(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_starts_pending_with_matching_dates() {
        let task = Task::create("Buy milk", "Two liters", "", 2);
        assert_eq!(task.status, Status::Pending);
        assert_eq!(task.created_date, task.last_edited);
        assert_eq!(task.created_date.len(), 10);
        assert_eq!(task.difficulty, 2);
        assert!(task.due_date.is_empty());
    }

    #[test]
    fn difficulty_is_normalized() {
        assert_eq!(Task::create("t", "", "", 0).difficulty, 1);
        assert_eq!(Task::create("t", "", "", 4).difficulty, 1);
        assert_eq!(Task::create("t", "", "", -7).difficulty, 1);
        assert_eq!(Task::create("t", "", "", 3).difficulty, 3);
    }

    #[test]
    fn long_fields_are_truncated() {
        let long = "x".repeat(600);
        let task = Task::create(&long, &long, &long, 1);
        assert_eq!(task.title.len(), TITLE_MAX);
        assert_eq!(task.description.len(), DESCRIPTION_MAX);
        assert_eq!(task.due_date.len(), DATE_MAX);
    }

    #[test]
    fn clip_never_splits_a_code_point() {
        // 98 ASCII bytes followed by a two-byte char: a cut at 99 would
        // land inside the char, so the clip backs off to 98.
        let text = format!("{}é", "a".repeat(98));
        assert_eq!(clip(&text, 99).len(), 98);
        assert_eq!(clip("abc", 99), "abc");
    }

    #[test]
    fn canonical_labels_parse_to_variants() {
        assert_eq!(Status::from_label("Pending"), Status::Pending);
        assert_eq!(Status::from_label("In progress"), Status::InProgress);
        assert_eq!(Status::from_label("Done"), Status::Done);
    }

    #[test]
    fn free_text_status_is_kept() {
        let status = Status::from_label("Waiting on Bob");
        assert_eq!(status, Status::Other("Waiting on Bob".to_string()));
        assert_eq!(status.label(), "Waiting on Bob");
    }

    #[test]
    fn free_text_status_is_clipped() {
        let status = Status::from_label("a status far too long to store");
        assert_eq!(status.label().len(), STATUS_MAX);
    }

    #[test]
    fn difficulty_labels() {
        let mut task = Task::create("t", "", "", 1);
        assert_eq!(task.difficulty_label(), "Easy");
        task.difficulty = 2;
        assert_eq!(task.difficulty_label(), "Medium");
        task.difficulty = 3;
        assert_eq!(task.difficulty_label(), "Hard");
        task.difficulty = 9;
        assert_eq!(task.difficulty_label(), "?");
    }
}
