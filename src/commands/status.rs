use crate::error::Result;
use crate::output::{self, Format};
use crate::report;
use crate::store::JsonStore;

pub fn run(store: &JsonStore, format: Format) -> Result<()> {
    // Read under the lock too: save is not atomic, so an unguarded reader
    // overlapping a writer could see a partial file as an empty collection.
    let _guard = store.lock()?;
    let tasks = store.load();
    output::print_report(&report::build(&tasks), format)
}
