use crate::error::Result;
use crate::output::{self, Format};
use crate::planner;
use crate::report;
use crate::store::JsonStore;

pub fn run(store: &JsonStore, format: Format) -> Result<()> {
    let _guard = store.lock()?;
    let mut tasks = store.load();
    // One save after the whole run; the planner is a single logical
    // transaction against the store.
    let completed = planner::run(&mut tasks, planner::TARGET_PROGRESS);
    store.save(&tasks)?;

    if format == Format::Pretty {
        eprintln!("auto-completed {} task(s)", completed.len());
    }
    output::print_report(&report::build(&tasks), format)
}
