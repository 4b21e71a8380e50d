use clap::ValueEnum;
use colored::Colorize;

use crate::error::Result;
use crate::report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Pretty,
}

pub fn print_report(report: &Report, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(report)?),
        Format::Pretty => {
            for task in &report.tasks {
                let mark = if task.completed { "x" } else { " " };
                let title = if task.completed {
                    task.title.green()
                } else {
                    task.title.normal()
                };
                let due = if task.due_date.is_empty() {
                    "-"
                } else {
                    &task.due_date
                };
                println!(
                    "[{mark}] {:>4} {title} (due {due}, weight {})",
                    task.id, task.weight
                );
            }
            if !report.tasks.is_empty() {
                println!();
            }
            println!(
                "{} {}/{} weight complete",
                format!("{:.1}%", report.progress.progress).bold(),
                report.progress.completed_weight,
                report.progress.total_weight,
            );
            println!("{}", report.interpretation);
        }
    }
    Ok(())
}
