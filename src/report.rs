use serde::Serialize;

use crate::model::Task;
use crate::stats::{self, Stats};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieSlice {
    pub name: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarEntry {
    pub title: String,
    pub completed_weight: u32,
    pub remaining_weight: u32,
}

/// Dashboard payload returned by every operation: the tasks (date-sorted,
/// missing dates last), the stats record, chart-ready aggregates, and a
/// one-line interpretation. A derived view, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub tasks: Vec<Task>,
    pub progress: Stats,
    pub pie_data: Vec<PieSlice>,
    pub bar_data: Vec<BarEntry>,
    pub interpretation: String,
}

pub fn build(tasks: &[Task]) -> Report {
    let progress = stats::calculate(tasks);

    let mut sorted: Vec<Task> = tasks.to_vec();
    sorted.sort_by(|a, b| a.due_sort_key().cmp(b.due_sort_key()));

    let pie_data = vec![
        PieSlice {
            name: "Completed",
            value: progress.completed_weight,
        },
        PieSlice {
            name: "Remaining",
            value: progress.remaining_weight,
        },
    ];

    let bar_data = sorted
        .iter()
        .map(|t| BarEntry {
            title: t.title.clone(),
            completed_weight: if t.completed { t.weight } else { 0 },
            remaining_weight: if t.completed { 0 } else { t.weight },
        })
        .collect();

    let interpretation = interpret(progress.progress);

    Report {
        tasks: sorted,
        progress,
        pie_data,
        bar_data,
        interpretation,
    }
}

fn interpret(progress: f64) -> String {
    let mut text = format!("Progress is at {progress:.1}%.");
    if progress >= 50.0 {
        text.push_str(" You are in good shape!");
    } else {
        text.push_str(" Focus on completing some tasks to reach the 50% milestone.");
    }
    text
}
