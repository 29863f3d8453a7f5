//! The interactive menu loop.
//!
//! Collaborator around the core: every mutation goes through the store,
//! every read view through the query module, and every error is reported
//! on the spot so the loop keeps running.

use std::io::{self, Write};
use std::path::Path;

use crossterm::cursor::MoveTo;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use crossterm::execute;
use log::{info, warn};

use crate::codec;
use crate::config::Config;
use crate::query::{self, StatusFilter};
use crate::store::{TaskEdit, TaskStore};
use crate::task::{Status, Task};

pub fn run(store: &mut TaskStore, config: &Config) -> io::Result<()> {
    let data_file = config.data_file();
    loop {
        print_menu();
        match prompt("Choose an option")?.as_str() {
            "1" => view_tasks(store)?,
            "2" => search(store)?,
            "3" => add(store, config)?,
            "4" => change_status(store, config)?,
            "5" => edit(store, config)?,
            "6" => delete(store, config)?,
            "7" => {
                // stay in the loop on a failed save so the user can retry
                if save(store, &data_file, config) {
                    feedback("\nSee you later!", config);
                    return Ok(());
                }
            }
            _ => println!("Invalid option."),
        }
        pause()?;
        clear_screen();
    }
}

fn print_menu() {
    println!("\n--- Main menu ---");
    println!("1. View my tasks");
    println!("2. Search for a task");
    println!("3. Add a task");
    println!("4. Change a task's status");
    println!("5. Edit a task");
    println!("6. Delete a task");
    println!("7. Save and exit");
}

fn view_tasks(store: &TaskStore) -> io::Result<()> {
    loop {
        println!("\n--- View my tasks ---");
        println!("1. All");
        println!("2. Pending");
        println!("3. In progress");
        println!("4. Done");
        println!("5. Back");
        let filter = match prompt("Choose an option")?.as_str() {
            "1" => StatusFilter::All,
            "2" => StatusFilter::Pending,
            "3" => StatusFilter::InProgress,
            "4" => StatusFilter::Done,
            "5" => return Ok(()),
            _ => {
                println!("Invalid option.");
                continue;
            }
        };
        let tasks = query::sort_by_title(query::filter_by_status(store, filter));
        if tasks.is_empty() {
            println!("No tasks matched that filter.");
        } else {
            for (position, task) in tasks.iter().enumerate() {
                println!("\nTask {}: {}", position + 1, task.title);
                print_details(task);
            }
        }
    }
}

fn search(store: &TaskStore) -> io::Result<()> {
    let keyword = prompt("Title to search for")?;
    let matches = query::search_by_title(store, &keyword);
    if matches.is_empty() {
        println!("No tasks matched that title.");
        return Ok(());
    }
    for task in matches {
        println!("\nTask: {}", task.title);
        print_details(task);
    }
    Ok(())
}

fn add(store: &mut TaskStore, config: &Config) -> io::Result<()> {
    let title = prompt("Title")?;
    let description = prompt("Description")?;
    let due_date = prompt("Due date (dd/mm/yyyy, leave empty for none)")?;
    let difficulty = prompt("Difficulty (1: easy, 2: medium, 3: hard)")?
        .parse()
        .unwrap_or(0);
    match store.add(Task::create(&title, &description, &due_date, difficulty)) {
        Ok(index) => {
            info!("added task #{index}");
            feedback("Task added!", config);
        }
        Err(err) => {
            warn!("add rejected: {err}");
            report(&err, config);
        }
    }
    Ok(())
}

fn change_status(store: &mut TaskStore, config: &Config) -> io::Result<()> {
    list_numbered(store);
    let index = prompt_index("\nTask number to change")?;
    let status = prompt("New status (Pending / In progress / Done)")?;
    match store.set_status(index, Status::from_label(&status)) {
        Ok(_) => feedback("Status updated.", config),
        Err(err) => report(&err, config),
    }
    Ok(())
}

fn edit(store: &mut TaskStore, config: &Config) -> io::Result<()> {
    list_numbered(store);
    let index = prompt_index("\nTask number to edit")?;
    let current = match store.get(index) {
        Ok(task) => task,
        Err(err) => {
            report(&err, config);
            return Ok(());
        }
    };
    let edit = TaskEdit {
        title: optional(prompt(&format!("New title (current: {})", current.title))?),
        description: optional(prompt(&format!(
            "New description (current: {})",
            current.description
        ))?),
        status: optional(prompt("New status (Pending / In progress / Done)")?),
        due_date: optional(prompt(&format!("New due date (current: {})", current.due_date))?),
        difficulty: prompt("New difficulty (1: easy, 2: medium, 3: hard)")?.parse().ok(),
    };
    match store.edit_fields(index, edit) {
        Ok(_) => feedback("Task updated.", config),
        Err(err) => report(&err, config),
    }
    Ok(())
}

fn delete(store: &mut TaskStore, config: &Config) -> io::Result<()> {
    list_numbered(store);
    let index = prompt_index("\nTask number to delete")?;
    match store.delete(index) {
        Ok(()) => feedback("Task deleted.", config),
        Err(err) => report(&err, config),
    }
    Ok(())
}

fn save(store: &TaskStore, path: &Path, config: &Config) -> bool {
    match codec::save(store, path) {
        Ok(()) => {
            info!("saved {} task(s) to {}", store.count(), path.display());
            feedback("Tasks saved.", config);
            true
        }
        Err(err) => {
            warn!("save failed: {err}");
            report(&err, config);
            false
        }
    }
}

fn list_numbered(store: &TaskStore) {
    for (index, title, status) in store.list() {
        println!("{index}. {title} [{}]", status.label());
    }
}

fn print_details(task: &Task) {
    println!("Status: {}", task.status.label());
    println!("Description: {}", task.description);
    println!("Created: {}", task.created_date);
    println!("Last edited: {}", task.last_edited);
    let due = if task.due_date.is_empty() {
        "none"
    } else {
        task.due_date.as_str()
    };
    println!("Due: {due}");
    println!("Difficulty: {}", task.difficulty_label());
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}: ");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Menu numbers are 1-based, so 0 stands in for "not a number" and is
/// always rejected by the store.
fn prompt_index(message: &str) -> io::Result<usize> {
    Ok(prompt(message)?.parse().unwrap_or(0))
}

fn optional(input: String) -> Option<String> {
    if input.is_empty() {
        None
    } else {
        Some(input)
    }
}

fn feedback(text: &str, config: &Config) {
    if config.color {
        println!("{}", text.green());
    } else {
        println!("{text}");
    }
}

fn report(err: &impl std::fmt::Display, config: &Config) {
    if config.color {
        println!("{}", err.to_string().red());
    } else {
        println!("{err}");
    }
}

fn pause() -> io::Result<()> {
    print!("\nPress ENTER to continue...");
    io::stdout().flush()?;
    let mut sink = String::new();
    io::stdin().read_line(&mut sink)?;
    Ok(())
}

fn clear_screen() {
    let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
}
