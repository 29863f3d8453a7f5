//! Fixed-layout binary persistence for the task file.
//!
//! Every record occupies exactly [`RECORD_SIZE`] bytes with no delimiters
//! or length prefixes; this layout is the on-disk contract other tools
//! rely on:
//!
//! ```text
//! title        100 bytes  NUL-padded
//! description  500 bytes  NUL-padded
//! status        20 bytes  NUL-padded
//! created      11 bytes   NUL-padded
//! last edited  11 bytes   NUL-padded
//! due date     11 bytes   NUL-padded (all NUL when unset)
//! difficulty    4 bytes   native-endian signed 32-bit
//! ```

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::warn;

use crate::error::Result;
use crate::store::{TaskStore, CAPACITY};
use crate::task::{self, Status, Task};

const TITLE_FIELD: usize = 100;
const DESCRIPTION_FIELD: usize = 500;
const STATUS_FIELD: usize = 20;
const DATE_FIELD: usize = 11;

const TITLE_AT: usize = 0;
const DESCRIPTION_AT: usize = TITLE_AT + TITLE_FIELD;
const STATUS_AT: usize = DESCRIPTION_AT + DESCRIPTION_FIELD;
const CREATED_AT: usize = STATUS_AT + STATUS_FIELD;
const EDITED_AT: usize = CREATED_AT + DATE_FIELD;
const DUE_AT: usize = EDITED_AT + DATE_FIELD;
const DIFFICULTY_AT: usize = DUE_AT + DATE_FIELD;

/// Total bytes per record (657).
pub const RECORD_SIZE: usize = DIFFICULTY_AT + 4;

/// Writes every record in store order, fully replacing any prior file
/// content. When the file cannot be opened the store is untouched and the
/// error goes back to the caller.
pub fn save<P: AsRef<Path>>(store: &TaskStore, path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    for task in store.records() {
        let mut block = [0u8; RECORD_SIZE];
        encode(task, &mut block);
        out.write_all(&block)?;
    }
    out.flush()?;
    Ok(())
}

/// Reads whole records until end-of-file or capacity, whichever comes
/// first. A missing file is a first run and yields an empty list; a
/// partial trailing block is dropped rather than flagged.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Task>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }
    let mut bytes = Vec::new();
    File::open(path)?.read_to_end(&mut bytes)?;

    let tasks: Vec<Task> = bytes
        .chunks_exact(RECORD_SIZE)
        .take(CAPACITY)
        .map(decode)
        .collect();

    let consumed = tasks.len() * RECORD_SIZE;
    if bytes.len() > consumed {
        warn!(
            "ignoring {} trailing byte(s) in {}",
            bytes.len() - consumed,
            path.display()
        );
    }
    Ok(tasks)
}

fn encode(task: &Task, block: &mut [u8; RECORD_SIZE]) {
    put(&mut block[TITLE_AT..DESCRIPTION_AT], task.title.as_bytes());
    put(
        &mut block[DESCRIPTION_AT..STATUS_AT],
        task.description.as_bytes(),
    );
    put(&mut block[STATUS_AT..CREATED_AT], task.status.label().as_bytes());
    put(&mut block[CREATED_AT..EDITED_AT], task.created_date.as_bytes());
    put(&mut block[EDITED_AT..DUE_AT], task.last_edited.as_bytes());
    put(&mut block[DUE_AT..DIFFICULTY_AT], task.due_date.as_bytes());
    block[DIFFICULTY_AT..].copy_from_slice(&task.difficulty.to_ne_bytes());
}

/// Copies `bytes` into the field, always leaving at least one trailing
/// NUL, like the fixed buffers this format descends from. The field is
/// already zeroed, so shorter content is NUL-padded for free.
fn put(field: &mut [u8], bytes: &[u8]) {
    let len = bytes.len().min(field.len() - 1);
    field[..len].copy_from_slice(&bytes[..len]);
}

fn decode(block: &[u8]) -> Task {
    let mut difficulty = [0u8; 4];
    difficulty.copy_from_slice(&block[DIFFICULTY_AT..DIFFICULTY_AT + 4]);
    Task {
        title: text(&block[TITLE_AT..DESCRIPTION_AT], task::TITLE_MAX),
        description: text(&block[DESCRIPTION_AT..STATUS_AT], task::DESCRIPTION_MAX),
        status: Status::from_label(&text(&block[STATUS_AT..CREATED_AT], task::STATUS_MAX)),
        created_date: text(&block[CREATED_AT..EDITED_AT], task::DATE_MAX),
        last_edited: text(&block[EDITED_AT..DUE_AT], task::DATE_MAX),
        due_date: text(&block[DUE_AT..DIFFICULTY_AT], task::DATE_MAX),
        difficulty: task::normalize_difficulty(i32::from_ne_bytes(difficulty)),
    }
}

/// Bytes before the first NUL (the whole field when none is present),
/// lossy-decoded and clipped through the same limits as fresh input.
fn text(field: &[u8], max: usize) -> String {
    let end = field.iter().position(|b| *b == 0).unwrap_or(field.len());
    let decoded = String::from_utf8_lossy(&field[..end]);
    task::clip(&decoded, max).to_string()
}
