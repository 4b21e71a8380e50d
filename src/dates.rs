use chrono::{Days, NaiveDate};

/// Resolve a raw due-date input against an explicit current date.
///
/// Rules, in order: absent or blank input means today; `today` and `tomorrow`
/// are symbolic; anything containing `week` maps to +7 days (a sortable
/// stand-in, exact weekday semantics are not modeled); otherwise a strict
/// `YYYY-MM-DD` parse with today as the fallback. Parse failures are swallowed,
/// never surfaced to the caller.
pub fn resolve_due_date(input: Option<&str>, today: NaiveDate) -> String {
    let Some(raw) = input else {
        return today.to_string();
    };
    let lowered = raw.trim().to_lowercase();
    if lowered.is_empty() || lowered == "today" {
        today.to_string()
    } else if lowered == "tomorrow" {
        (today + Days::new(1)).to_string()
    } else if lowered.contains("week") {
        (today + Days::new(7)).to_string()
    } else {
        match NaiveDate::parse_from_str(&lowered, "%Y-%m-%d") {
            Ok(date) => date.to_string(),
            Err(_) => today.to_string(),
        }
    }
}
