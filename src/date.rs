//! Date provider: the current local date as a `dd/mm/yyyy` string.

use chrono::Local;

/// Today's date, always rendered as exactly 10 characters.
pub fn today() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}
