//! Lookup engine.
//!
//! Every operation takes a [`Snapshot`] and fails with
//! [`LookupError::StoreUnavailable`] when no directory could be loaded, so
//! callers can tell "no matches" apart from "no data source".

use crate::{GroupEntry, Listing, LookupResult, Snapshot, Stats, StudentRecord};
use std::num::NonZeroUsize;

pub fn find_by_identifier<'a>(
    snapshot: &'a Snapshot,
    raw_query: &str,
) -> LookupResult<Option<&'a StudentRecord>> {
    Ok(snapshot.directory()?.find_by_identifier(raw_query))
}

/// Case-insensitive faculty substring search in load order.
///
/// An empty query matches every record; callers reject empty input first.
pub fn search_by_faculty<'a>(
    snapshot: &'a Snapshot,
    raw_query: &str,
) -> LookupResult<Vec<&'a StudentRecord>> {
    Ok(snapshot.directory()?.search_by_faculty(raw_query))
}

/// Case-insensitive group name substring search in load order.
pub fn search_by_group<'a>(
    snapshot: &'a Snapshot,
    raw_query: &str,
) -> LookupResult<Vec<&'a StudentRecord>> {
    Ok(snapshot.directory()?.search_by_group(raw_query))
}

pub fn list_all(snapshot: &Snapshot, limit: NonZeroUsize) -> LookupResult<Listing<'_>> {
    Ok(snapshot.directory()?.list_all(limit))
}

pub fn list_unique_groups(snapshot: &Snapshot) -> LookupResult<Vec<GroupEntry<'_>>> {
    Ok(snapshot.directory()?.unique_groups())
}

pub fn compute_stats(snapshot: &Snapshot) -> LookupResult<Stats> {
    Ok(snapshot.directory()?.stats())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Directory, LookupError};

    fn sample() -> Snapshot {
        Snapshot::from(Directory::new(vec![
            StudentRecord::new(
                "AB1234567",
                "Ali Valiyev",
                "Dasturiy injiniring fakulteti",
                "DI-21-01",
                "https://t.me/di2101_group",
            ),
            StudentRecord::new(
                "CD9876543",
                "Gulnora Xasanova",
                "Axborot texnologiyalari fakulteti",
                "AT-20-02",
                "https://t.me/at2002_group",
            ),
        ]))
    }

    fn ids(records: &[&StudentRecord]) -> Vec<String> {
        records.iter().map(|r| r.identifier.clone()).collect()
    }

    #[test]
    fn find_is_case_insensitive() {
        let snap = sample();
        let upper = find_by_identifier(&snap, "AB1234567").ok().flatten();
        let lower = find_by_identifier(&snap, "ab1234567").ok().flatten();
        assert_eq!(upper, lower);
        assert_eq!(upper.map(|r| r.full_name.as_str()), Some("Ali Valiyev"));
    }

    #[test]
    fn find_trims_whitespace() {
        let snap = sample();
        let found = find_by_identifier(&snap, "  cd9876543\n").ok().flatten();
        assert_eq!(found.map(|r| r.identifier.as_str()), Some("CD9876543"));
    }

    #[test]
    fn find_missing_returns_none() {
        assert_eq!(find_by_identifier(&sample(), "ZZ0000000"), Ok(None));
    }

    #[test]
    fn faculty_substring() {
        let snap = sample();
        let hits = search_by_faculty(&snap, "dasturiy").unwrap_or_default();
        assert_eq!(ids(&hits), ["AB1234567"]);
    }

    #[test]
    fn group_substring() {
        let snap = sample();
        let hits = search_by_group(&snap, "at-20").unwrap_or_default();
        assert_eq!(ids(&hits), ["CD9876543"]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let snap = sample();
        assert_eq!(search_by_faculty(&snap, "tibbiyot").map(|v| v.len()), Ok(0));
        assert_eq!(search_by_group(&snap, "XX-99").map(|v| v.len()), Ok(0));
    }

    #[test]
    fn list_all_reports_total() {
        let snap = sample();
        let listing = list_all(&snap, NonZeroUsize::MIN).ok();
        let listing = listing.as_ref();
        assert_eq!(listing.map(|l| l.records.len()), Some(1));
        assert_eq!(
            listing.map(|l| l.records[0].identifier.as_str()),
            Some("AB1234567")
        );
        assert_eq!(listing.map(|l| l.total), Some(2));
        assert_eq!(listing.map(Listing::remaining), Some(1));
    }

    #[test]
    fn stats_of_sample() {
        assert_eq!(
            compute_stats(&sample()),
            Ok(Stats {
                total_students: 2,
                distinct_faculties: 2,
                distinct_groups: 2,
            })
        );
    }

    #[test]
    fn unique_groups_of_sample() {
        let snap = sample();
        let groups = list_unique_groups(&snap).unwrap_or_default();
        let names: Vec<&str> = groups.iter().map(|g| g.group_name).collect();
        assert_eq!(names, ["DI-21-01", "AT-20-02"]);
    }

    #[test]
    fn every_operation_reports_unavailable_store() {
        let snap = Snapshot::Unavailable;
        let unavailable = Some(LookupError::StoreUnavailable);

        assert_eq!(find_by_identifier(&snap, "AB1234567").err(), unavailable);
        assert_eq!(search_by_faculty(&snap, "dasturiy").err(), unavailable);
        assert_eq!(search_by_group(&snap, "DI").err(), unavailable);
        assert_eq!(list_all(&snap, NonZeroUsize::MIN).err(), unavailable);
        assert_eq!(list_unique_groups(&snap).err(), unavailable);
        assert_eq!(compute_stats(&snap).err(), unavailable);
    }
}
