//! Collection utilities
//!
//! The pages all do the same three things with a fetched collection: filter
//! it by one optional field, list the distinct values of that field for the
//! filter chips, and sort it by date. These are the shared, pure versions.

use jiff::civil::Date;
use smallvec::SmallVec;

/// Filters items by equality on one optional field.
///
/// `selected` of `None` means no filter is active and every item passes.
/// When a filter is active, items whose field is unset never match.
pub fn filter_by<'a, T, V, F>(items: &'a [T], field: F, selected: Option<&V>) -> Vec<&'a T>
where
    F: Fn(&T) -> Option<&V>,
    V: PartialEq + ?Sized,
{
    items
        .iter()
        .filter(|item| selected.is_none_or(|wanted| field(item) == Some(wanted)))
        .collect()
}

/// Lists the distinct set values of one optional field, in first-seen order.
///
/// This is the source of the filter chips shown above a collection; unset
/// fields contribute nothing.
pub fn facet_values<'a, T, V, F>(items: &'a [T], field: F) -> SmallVec<[&'a V; 8]>
where
    F: Fn(&T) -> Option<&V>,
    V: PartialEq + ?Sized,
{
    let mut values: SmallVec<[&V; 8]> = SmallVec::new();

    for value in items.iter().filter_map(field) {
        if !values.contains(&value) {
            values.push(value);
        }
    }

    values
}

/// Sorts items ascending by an optional date, records with no date first.
pub fn sort_by_date<T, F>(items: &mut [T], date: F)
where
    F: Fn(&T) -> Option<Date>,
{
    items.sort_by_key(date);
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    struct Entry {
        category: Option<String>,
        date: Option<Date>,
    }

    fn entry(category: Option<&str>, day: Option<Date>) -> Entry {
        Entry {
            category: category.map(str::to_owned),
            date: day,
        }
    }

    #[test]
    fn no_selection_passes_everything() {
        let entries = [entry(Some("Music"), None), entry(None, None)];

        let filtered = filter_by(&entries, |e| e.category.as_deref(), None);

        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn active_filter_matches_on_equality() {
        let entries = [
            entry(Some("Music"), None),
            entry(Some("Workshop"), None),
            entry(Some("Music"), None),
        ];

        let filtered = filter_by(&entries, |e| e.category.as_deref(), Some("Music"));

        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn unset_fields_never_match_an_active_filter() {
        let entries = [entry(None, None)];

        let filtered = filter_by(&entries, |e| e.category.as_deref(), Some("Music"));

        assert!(filtered.is_empty());
    }

    #[test]
    fn facet_values_are_distinct_and_ordered() {
        let entries = [
            entry(Some("Music"), None),
            entry(Some("Workshop"), None),
            entry(None, None),
            entry(Some("Music"), None),
        ];

        let facets = facet_values(&entries, |e| e.category.as_deref());

        assert_eq!(facets.as_slice(), ["Music", "Workshop"]);
    }

    #[test]
    fn sort_puts_undated_records_first() {
        let mut entries = [
            entry(None, Some(date(2026, 3, 17))),
            entry(None, None),
            entry(None, Some(date(2026, 3, 15))),
        ];

        sort_by_date(&mut entries, |e| e.date);

        let days: Vec<Option<Date>> = entries.iter().map(|e| e.date).collect();
        assert_eq!(
            days,
            [None, Some(date(2026, 3, 15)), Some(date(2026, 3, 17))]
        );
    }
}
