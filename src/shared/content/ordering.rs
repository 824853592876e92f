use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Sorts borrowed entities by `date_of`, newest first.
///
/// The sort is stable, so entities sharing a date keep their collection order.
pub fn newest_first<'a, T, I, F>(items: I, date_of: F) -> Vec<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> NaiveDate,
{
    let mut sorted: Vec<&'a T> = items.into_iter().collect();
    sorted.sort_by(|a, b| date_of(b).cmp(&date_of(a)));
    sorted
}

/// Truncates to at most `limit` items. A limit of zero yields nothing.
pub fn limited<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.truncate(limit);
    items
}

/// De-duplicates and sorts ascending by ordinal (case-sensitive) comparison.
pub fn sorted_unique<'a, I>(values: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .collect::<BTreeSet<&'a str>>()
        .into_iter()
        .collect()
}
