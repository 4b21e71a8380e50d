use chrono::NaiveDate;

use crate::dates::resolve_due_date;
use crate::model::{Task, resolve_weight};

/// How `complete` picks its target: a numeric id, or an exact
/// case-insensitive title match when the input is not a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    Id(u64),
    Title(String),
}

impl Selector {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.parse::<u64>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Title(trimmed.to_string()),
        }
    }
}

/// Append a new task. Ids are `max(existing) + 1` (1 for an empty collection)
/// and are never reused after deletion within a single collection lifetime,
/// since the maximum only grows. Returns the assigned id.
pub fn add(
    tasks: &mut Vec<Task>,
    title: Option<String>,
    due: Option<&str>,
    weight: Option<&str>,
    today: NaiveDate,
) -> u64 {
    let id = tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
    let title = title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Untitled".to_string());
    tasks.push(Task {
        id,
        title,
        due_date: resolve_due_date(due, today),
        weight: resolve_weight(weight),
        completed: false,
    });
    id
}

/// Flip the completion flag on the first match. A missing selector is a
/// silent no-op; the caller still saves the (unchanged) collection.
pub fn toggle_complete(tasks: &mut [Task], selector: &Selector) -> bool {
    let found = match selector {
        Selector::Id(id) => tasks.iter_mut().find(|t| t.id == *id),
        Selector::Title(name) => {
            let needle = name.to_lowercase();
            tasks.iter_mut().find(|t| t.title.to_lowercase() == needle)
        }
    };
    match found {
        Some(task) => {
            task.completed = !task.completed;
            true
        }
        None => false,
    }
}

/// Update a task in place; omitted fields keep their previous value. Due date
/// and weight go through the same resolution rules as add. No-op on unknown id.
pub fn edit(
    tasks: &mut [Task],
    id: u64,
    title: Option<String>,
    due: Option<&str>,
    weight: Option<&str>,
    today: NaiveDate,
) -> bool {
    let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
        return false;
    };
    if let Some(t) = title {
        task.title = t;
    }
    if let Some(d) = due {
        task.due_date = resolve_due_date(Some(d), today);
    }
    if let Some(w) = weight {
        task.weight = resolve_weight(Some(w));
    }
    true
}

/// Remove the task with the matching id. No-op on unknown id.
pub fn delete(tasks: &mut Vec<Task>, id: u64) -> bool {
    let before = tasks.len();
    tasks.retain(|t| t.id != id);
    tasks.len() != before
}
