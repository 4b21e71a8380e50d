use crate::model::Task;
use crate::stats;

/// Progress threshold the automatic completion run aims for.
pub const TARGET_PROGRESS: f64 = 50.0;

/// Greedy auto-completion, run to fixed point: while progress is below the
/// threshold, complete the lightest incomplete task whose title does not
/// mark it protected, one per iteration. Completed weight grows strictly
/// each round, so the loop terminates in at most |tasks| iterations.
///
/// An empty candidate set below the threshold is the unreachable-target
/// terminal state: a reported outcome, not an error. Returns the ids
/// completed, in order.
pub fn run(tasks: &mut [Task], threshold: f64) -> Vec<u64> {
    let mut completed = Vec::new();
    loop {
        if stats::calculate(tasks).progress >= threshold {
            break;
        }
        // Strict `<` keeps the first-seen candidate on weight ties.
        let mut pick: Option<usize> = None;
        for (i, task) in tasks.iter().enumerate() {
            if task.completed || task.is_protected() {
                continue;
            }
            if pick.is_none_or(|p| task.weight < tasks[p].weight) {
                pick = Some(i);
            }
        }
        let Some(i) = pick else {
            break;
        };
        tasks[i].completed = true;
        completed.push(tasks[i].id);
    }
    completed
}
