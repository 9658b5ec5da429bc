use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

/// `D/M/Y` with no zero padding, e.g. `5/6/2024`
pub fn date_label(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

/// Pick a tab name for `date` that isn't in `existing`.
///
/// The bare date is tried first, then `"<date> (2)"`, `"<date> (3)"`, ...
/// Only finitely many names can be taken, so the search always ends.
pub fn unique_worksheet_name<S: AsRef<str>>(existing: &[S], date: NaiveDate) -> String {
    let taken: HashSet<&str> = existing.iter().map(|name| name.as_ref()).collect();
    let label = date_label(date);

    let mut name = label.clone();
    let mut suffix = 2;
    while taken.contains(name.as_str()) {
        name = format!("{} ({})", label, suffix);
        suffix += 1;
    }
    name
}
