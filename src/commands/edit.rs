use chrono::NaiveDate;

use crate::error::Result;
use crate::mutate;
use crate::output::{self, Format};
use crate::report;
use crate::store::JsonStore;

pub fn run(
    store: &JsonStore,
    id: u64,
    title: Option<String>,
    due: Option<String>,
    weight: Option<String>,
    today: NaiveDate,
    format: Format,
) -> Result<()> {
    let _guard = store.lock()?;
    let mut tasks = store.load();
    mutate::edit(
        &mut tasks,
        id,
        title,
        due.as_deref(),
        weight.as_deref(),
        today,
    );
    store.save(&tasks)?;

    output::print_report(&report::build(&tasks), format)
}
