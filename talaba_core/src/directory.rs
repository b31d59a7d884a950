//! Immutable snapshot of all student records plus its identifier index.

use crate::{StudentRecord, normalize_identifier};
use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;

/// Ordered student records and a derived identifier index.
///
/// Both are built together in [`Directory::new`] and never change afterwards;
/// a reload produces a new `Directory`.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    records: Vec<StudentRecord>,
    /// normalized identifier -> position of its first occurrence
    index: HashMap<String, usize>,
}

/// First `records.len()` records in load order plus the full count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing<'a> {
    pub records: &'a [StudentRecord],
    pub total: usize,
}

impl Listing<'_> {
    /// Number of records not included in this listing.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.total.saturating_sub(self.records.len())
    }
}

/// One distinct group, taken from its first record in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupEntry<'a> {
    pub group_name: &'a str,
    pub faculty: &'a str,
    pub group_link: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total_students: usize,
    pub distinct_faculties: usize,
    pub distinct_groups: usize,
}

impl Directory {
    /// Build a directory from records in load order.
    ///
    /// Identifiers are normalized here. Duplicate identifiers are kept in the
    /// sequence, but the index points at the first one.
    #[must_use]
    pub fn new(records: Vec<StudentRecord>) -> Self {
        let mut records = records;
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter_mut().enumerate() {
            record.identifier = normalize_identifier(&record.identifier);
            index.entry(record.identifier.clone()).or_insert(position);
        }
        Self { records, index }
    }

    #[must_use]
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact, case-insensitive identifier match.
    #[must_use]
    pub fn find_by_identifier(&self, raw_query: &str) -> Option<&StudentRecord> {
        let key = normalize_identifier(raw_query);
        self.index.get(&key).and_then(|&i| self.records.get(i))
    }

    /// Records whose faculty contains the query, compared lower-cased.
    #[must_use]
    pub fn search_by_faculty(&self, raw_query: &str) -> Vec<&StudentRecord> {
        let needle = raw_query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| r.faculty.to_lowercase().contains(&needle))
            .collect()
    }

    /// Records whose group name contains the query, compared upper-cased.
    #[must_use]
    pub fn search_by_group(&self, raw_query: &str) -> Vec<&StudentRecord> {
        let needle = raw_query.trim().to_uppercase();
        self.records
            .iter()
            .filter(|r| r.group_name.to_uppercase().contains(&needle))
            .collect()
    }

    #[must_use]
    pub fn list_all(&self, limit: NonZeroUsize) -> Listing<'_> {
        let end = limit.get().min(self.records.len());
        Listing {
            records: &self.records[..end],
            total: self.records.len(),
        }
    }

    #[must_use]
    pub fn unique_groups(&self) -> Vec<GroupEntry<'_>> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.group_name.as_str()))
            .map(|r| GroupEntry {
                group_name: &r.group_name,
                faculty: &r.faculty,
                group_link: &r.group_link,
            })
            .collect()
    }

    /// Cardinality counts. Blank faculty or group cells are not counted as values.
    #[must_use]
    pub fn stats(&self) -> Stats {
        let distinct_faculties = count_distinct(self.records.iter().map(|r| r.faculty.as_str()));
        let distinct_groups = count_distinct(self.records.iter().map(|r| r.group_name.as_str()));
        Stats {
            total_students: self.records.len(),
            distinct_faculties,
            distinct_groups,
        }
    }
}

fn count_distinct<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values
        .filter(|v| !v.trim().is_empty())
        .collect::<HashSet<_>>()
        .len()
}

impl FromIterator<StudentRecord> for Directory {
    fn from_iter<I: IntoIterator<Item = StudentRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, faculty: &str, group: &str) -> StudentRecord {
        StudentRecord::new(
            id,
            format!("Student {id}"),
            faculty,
            group,
            format!("https://t.me/{group}"),
        )
    }

    #[test]
    fn new_normalizes_identifiers_set_directly() {
        let mut raw = record("x", "F", "G");
        raw.identifier = "  ab1234567 ".to_string();
        let dir = Directory::new(vec![raw]);
        assert_eq!(dir.records()[0].identifier, "AB1234567");
        assert!(dir.find_by_identifier("AB1234567").is_some());
    }

    #[test]
    fn duplicate_identifier_resolves_to_first_occurrence() {
        let mut second = record("AB1", "Other", "G2");
        second.full_name = "Second".to_string();
        let dir = Directory::new(vec![record("AB1", "F", "G1"), second]);

        assert_eq!(dir.len(), 2);
        let found = dir.find_by_identifier("ab1").map(|r| r.group_name.as_str());
        assert_eq!(found, Some("G1"));
    }

    #[test]
    fn identifier_match_is_exact() {
        let dir = Directory::new(vec![record("AB1234567", "F", "G")]);
        assert!(dir.find_by_identifier("AB123").is_none());
        assert!(dir.find_by_identifier("").is_none());
    }

    #[test]
    fn group_search_is_case_insensitive() {
        let dir = Directory::new(vec![record("A", "F", "di-21-01"), record("B", "F", "AT-20-02")]);
        let hits = dir.search_by_group(" DI-21 ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].identifier, "A");
    }

    #[test]
    fn search_preserves_load_order() {
        let dir = Directory::new(vec![
            record("C", "Iqtisodiyot fakulteti", "IQ-1"),
            record("A", "Tibbiyot fakulteti", "TB-1"),
            record("B", "Iqtisodiyot fakulteti", "IQ-2"),
        ]);
        let ids: Vec<&str> = dir
            .search_by_faculty("IQTISODIYOT")
            .iter()
            .map(|r| r.identifier.as_str())
            .collect();
        assert_eq!(ids, ["C", "B"]);
    }

    #[test]
    fn list_all_limit_larger_than_directory() {
        let dir = Directory::new(vec![record("A", "F", "G")]);
        let listing = dir.list_all(NonZeroUsize::new(15).unwrap_or(NonZeroUsize::MIN));
        assert_eq!(listing.records.len(), 1);
        assert_eq!(listing.total, 1);
        assert_eq!(listing.remaining(), 0);
    }

    #[test]
    fn unique_groups_keeps_first_occurrence() {
        let mut late = record("B", "Late faculty", "DI-21-01");
        late.group_link = "https://t.me/late".to_string();
        let dir = Directory::new(vec![
            record("A", "Dasturiy injiniring fakulteti", "DI-21-01"),
            late,
            record("C", "Tibbiyot fakulteti", "TB-21-02"),
        ]);

        let groups = dir.unique_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].group_name, "DI-21-01");
        assert_eq!(groups[0].faculty, "Dasturiy injiniring fakulteti");
        assert_eq!(groups[0].group_link, "https://t.me/DI-21-01");
        assert_eq!(groups[1].group_name, "TB-21-02");
    }

    #[test]
    fn stats_of_empty_directory() {
        assert_eq!(Directory::default().stats(), Stats::default());
    }

    #[test]
    fn stats_ignores_blank_faculty_and_group() {
        let dir = Directory::new(vec![
            record("A", "F1", "G1"),
            record("B", "", "G1"),
            record("C", "F1", "  "),
        ]);
        assert_eq!(
            dir.stats(),
            Stats {
                total_students: 3,
                distinct_faculties: 1,
                distinct_groups: 1,
            }
        );
    }

    #[test]
    fn stats_counts_distinct_values() {
        let dir: Directory = [
            record("A", "F1", "G1"),
            record("B", "F1", "G2"),
            record("C", "F2", "G2"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            dir.stats(),
            Stats {
                total_students: 3,
                distinct_faculties: 2,
                distinct_groups: 2,
            }
        );
    }
}
