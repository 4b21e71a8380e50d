use crate::error::Result;
use crate::mutate;
use crate::output::{self, Format};
use crate::report;
use crate::store::JsonStore;

pub fn run(store: &JsonStore, id: u64, format: Format) -> Result<()> {
    let _guard = store.lock()?;
    let mut tasks = store.load();
    mutate::delete(&mut tasks, id);
    store.save(&tasks)?;

    output::print_report(&report::build(&tasks), format)
}
