use crate::error::Result;
use crate::mutate::{self, Selector};
use crate::output::{self, Format};
use crate::report;
use crate::store::JsonStore;

pub fn run(store: &JsonStore, selector: &str, format: Format) -> Result<()> {
    let _guard = store.lock()?;
    let mut tasks = store.load();
    // No-match is a silent no-op; the save still happens.
    mutate::toggle_complete(&mut tasks, &Selector::parse(selector));
    store.save(&tasks)?;

    output::print_report(&report::build(&tasks), format)
}
