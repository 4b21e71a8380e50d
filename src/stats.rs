use serde::Serialize;

use crate::model::Task;

/// Weighted completion statistics derived from a task collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub progress: f64,
    pub completed_weight: u32,
    pub remaining_weight: u32,
    pub total_weight: u32,
}

/// Pure function of the collection. An empty collection reports exactly 0%
/// progress rather than dividing by zero.
pub fn calculate(tasks: &[Task]) -> Stats {
    let total_weight: u32 = tasks.iter().map(|t| t.weight).sum();
    let completed_weight: u32 = tasks
        .iter()
        .filter(|t| t.completed)
        .map(|t| t.weight)
        .sum();
    let remaining_weight = total_weight - completed_weight;
    let progress = if total_weight > 0 {
        f64::from(completed_weight) / f64::from(total_weight) * 100.0
    } else {
        0.0
    };
    Stats {
        progress,
        completed_weight,
        remaining_weight,
        total_weight,
    }
}
