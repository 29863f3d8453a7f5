//! The bounded, ordered task store.
//!
//! Owns every task in the program. External indices are 1-based because
//! they come from numbered menus; anything outside `[1, count]` is
//! `NotFound` and leaves the store untouched.

use crate::date;
use crate::error::{Result, TaskbookError};
use crate::task::{clip, Status, Task, DATE_MAX, DESCRIPTION_MAX, TITLE_MAX};

/// Maximum number of tasks the store may hold.
pub const CAPACITY: usize = 100;

#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

/// Replacement values for [`TaskStore::edit_fields`]. `None` or an empty
/// string keeps the current value.
#[derive(Debug, Default, Clone)]
pub struct TaskEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<String>,
    pub difficulty: Option<i32>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Rebuilds the store from records loaded off disk. Anything past
    /// capacity is dropped, so the bound holds no matter what the file
    /// contained.
    pub fn from_records(mut records: Vec<Task>) -> Self {
        records.truncate(CAPACITY);
        Self { tasks: records }
    }

    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All records in insertion order. Read-only view for queries and
    /// persistence.
    pub fn records(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a task and returns its 1-based position.
    pub fn add(&mut self, task: Task) -> Result<usize> {
        if self.tasks.len() == CAPACITY {
            return Err(TaskbookError::CapacityExceeded(CAPACITY));
        }
        self.tasks.push(task);
        Ok(self.tasks.len())
    }

    /// Numbered view of the store for menus: (1-based index, title, status).
    pub fn list(&self) -> impl Iterator<Item = (usize, &str, &Status)> + '_ {
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, task)| (i + 1, task.title.as_str(), &task.status))
    }

    pub fn get(&self, index: usize) -> Result<&Task> {
        let slot = self.slot(index)?;
        Ok(&self.tasks[slot])
    }

    /// Overwrites the status. Any text is accepted (free text lands in
    /// `Status::Other`); `last_edited` is refreshed.
    pub fn set_status(&mut self, index: usize, status: Status) -> Result<&Task> {
        let slot = self.slot(index)?;
        let task = &mut self.tasks[slot];
        task.status = status;
        task.last_edited = date::today();
        Ok(&self.tasks[slot])
    }

    /// Applies every filled-in field of `edit`; empty means "keep the
    /// current value". Difficulty is only taken when already valid.
    /// `last_edited` is refreshed even when nothing else changed.
    pub fn edit_fields(&mut self, index: usize, edit: TaskEdit) -> Result<&Task> {
        let slot = self.slot(index)?;
        let task = &mut self.tasks[slot];
        if let Some(title) = filled(edit.title) {
            task.title = clip(&title, TITLE_MAX).to_string();
        }
        if let Some(description) = filled(edit.description) {
            task.description = clip(&description, DESCRIPTION_MAX).to_string();
        }
        if let Some(status) = filled(edit.status) {
            task.status = Status::from_label(&status);
        }
        if let Some(due_date) = filled(edit.due_date) {
            task.due_date = clip(&due_date, DATE_MAX).to_string();
        }
        if let Some(difficulty) = edit.difficulty {
            if (1..=3).contains(&difficulty) {
                task.difficulty = difficulty;
            }
        }
        task.last_edited = date::today();
        Ok(&self.tasks[slot])
    }

    /// Removes the task; later tasks shift down one position so the
    /// remaining order is preserved.
    pub fn delete(&mut self, index: usize) -> Result<()> {
        let slot = self.slot(index)?;
        self.tasks.remove(slot);
        Ok(())
    }

    fn slot(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.tasks.len() {
            return Err(TaskbookError::NotFound(index));
        }
        Ok(index - 1)
    }
}

fn filled(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}
