use serde::{Deserialize, Serialize};

pub const MIN_WEIGHT: u32 = 1;
pub const MAX_WEIGHT: u32 = 3;

/// A titled, weighted, dated unit of work. The sole persisted entity.
///
/// Serde defaults keep reads tolerant: records written by older or sloppier
/// producers may omit `title`, `due_date`, `weight`, or `completed` and still
/// deserialize with safe values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: u64,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default = "default_weight")]
    pub weight: u32,
    #[serde(default)]
    pub completed: bool,
}

fn default_title() -> String {
    "Untitled".to_string()
}

fn default_weight() -> u32 {
    MIN_WEIGHT
}

/// Lenient weight parse: non-integer or absent input falls back to 1,
/// then the result is clamped to [1,3].
pub fn resolve_weight(input: Option<&str>) -> u32 {
    let parsed = input
        .and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(i64::from(MIN_WEIGHT));
    parsed.clamp(i64::from(MIN_WEIGHT), i64::from(MAX_WEIGHT)) as u32
}

impl Task {
    /// Presentation sort key: tasks without a due date sort last.
    pub fn due_sort_key(&self) -> &str {
        if self.due_date.is_empty() {
            "9999-99-99"
        } else {
            &self.due_date
        }
    }

    /// True when the title opts the task out of automatic completion.
    /// Deliberately a substring scan, not a dedicated flag.
    pub fn is_protected(&self) -> bool {
        let title = self.title.to_lowercase();
        title.contains("protected") || title.contains("important")
    }
}
