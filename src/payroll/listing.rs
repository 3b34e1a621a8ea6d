//! The list sort/filter pipeline shared by the record-listing views.
//!
//! Each view composes the same three stages, in order: a free-text search
//! on one designated field, zero or more categorical equality filters, and
//! a single-key sort. The order matters: every stage narrows the output
//! of the previous one, not the original collection. The pipeline is
//! recomputed from the full source collection on each request; nothing
//! here is cached.

use std::cmp::Ordering;

use chrono::NaiveDate;

/// Direction of the single active sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending (the direction a freshly clicked column starts in).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Flips the direction, as clicking the already-active column does.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Parses a query-string value; anything but `desc` is ascending.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// Free-text stage: keeps records whose designated field contains the
/// query, case-insensitively. An empty query keeps everything.
pub fn search_by<T, F>(items: Vec<T>, query: &str, field: F) -> Vec<T>
where
    F: Fn(&T) -> String,
{
    if query.is_empty() {
        return items;
    }

    let needle = query.to_lowercase();
    items
        .into_iter()
        .filter(|item| field(item).to_lowercase().contains(&needle))
        .collect()
}

/// Categorical stage: keeps records whose field equals the selected
/// value. `None` is the "all" sentinel and keeps everything.
pub fn narrow_by<T, K, F>(items: Vec<T>, selected: Option<K>, field: F) -> Vec<T>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    match selected {
        Some(wanted) => items
            .into_iter()
            .filter(|item| field(item) == wanted)
            .collect(),
        None => items,
    }
}

/// Sort stage: stable sort by the given comparator in the given
/// direction. Records that compare equal retain their pre-sort relative
/// order in both directions.
pub fn rank_by<T, F>(items: &mut [T], order: SortOrder, compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    match order {
        SortOrder::Asc => items.sort_by(|a, b| compare(a, b)),
        SortOrder::Desc => items.sort_by(|a, b| compare(a, b).reverse()),
    }
}

/// Parses a `DD-MM-YYYY` (or `DD/MM/YYYY`) entry string into a calendar
/// date. Returns `None` for anything that does not name a real date.
pub fn parse_entry_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split(['-', '/']);
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Compares two date entry strings by calendar value.
///
/// Day, month and year are parsed as integers and compared as a
/// constructed date, never lexically, which misorders `DD-MM-YYYY`
/// strings across month and year boundaries. Entries that are missing or
/// do not parse compare equal, so a stable sort leaves them in their
/// pre-sort positions.
pub fn compare_entry_dates(a: &str, b: &str) -> Ordering {
    match (parse_entry_date(a), parse_entry_date(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => Ordering::Equal,
    }
}
