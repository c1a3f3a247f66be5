//! Yearly statistics over budget records.
//!
//! The filtered set is every record of the requested year whose author name
//! contains the search term (case-insensitive). It is sorted by month
//! ascending, then amount descending, then id ascending. `total` and
//! `total_by_type` are always computed over the whole filtered set, while
//! `items` only holds the `[offset, offset + limit)` window of it.

use std::{cmp::Ordering, collections::BTreeMap};

use serde::{Deserialize, Serialize};

use crate::{Author, BudgetRecord, BudgetType, EngineError, ResultEngine, util};

/// Parameters of a yearly statistics request.
///
/// A missing `limit` means "no limit" and a missing `offset` means zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsQuery {
    pub year: i32,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub search: Option<String>,
}

impl StatsQuery {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            ..Default::default()
        }
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// A budget record enriched with its resolved author.
///
/// `author` is `None` both for records without an author and for records
/// pointing to an author that no longer exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub record: BudgetRecord,
    pub author: Option<Author>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearStats {
    pub total: u64,
    pub items: Vec<BudgetItem>,
    /// Types without any matching record are absent.
    pub total_by_type: BTreeMap<BudgetType, i64>,
}

fn display_order(a: &BudgetItem, b: &BudgetItem) -> Ordering {
    a.record
        .month
        .cmp(&b.record.month)
        .then_with(|| b.record.amount.cmp(&a.record.amount))
        .then_with(|| a.record.id.cmp(&b.record.id))
}

fn author_matches(item: &BudgetItem, needle: &str) -> bool {
    item.author
        .as_ref()
        .is_some_and(|author| author.full_name.to_lowercase().contains(needle))
}

impl YearStats {
    /// Build the statistics from one consistent read of candidate rows.
    ///
    /// `rows` may contain records of other years; they are filtered out here.
    /// Fails with [`EngineError::AmountOverflow`] when a per-type sum does not
    /// fit in an `i64`.
    pub(crate) fn compute(rows: Vec<BudgetItem>, query: &StatsQuery) -> ResultEngine<Self> {
        let needle = util::normalize_search(query.search.as_deref());

        let mut filtered: Vec<BudgetItem> = rows
            .into_iter()
            .filter(|item| item.record.year == query.year)
            .filter(|item| {
                needle
                    .as_deref()
                    .is_none_or(|needle| author_matches(item, needle))
            })
            .collect();

        let mut sums: BTreeMap<BudgetType, i128> = BTreeMap::new();
        for item in &filtered {
            *sums.entry(item.record.kind).or_insert(0) += i128::from(item.record.amount);
        }
        let total_by_type = sums
            .into_iter()
            .map(|(kind, sum)| {
                i64::try_from(sum).map(|sum| (kind, sum)).map_err(|_| {
                    EngineError::AmountOverflow(format!(
                        "{} total for {} does not fit in 64 bits",
                        kind.as_str(),
                        query.year
                    ))
                })
            })
            .collect::<ResultEngine<BTreeMap<_, _>>>()?;
        let total = filtered.len() as u64;

        filtered.sort_by(display_order);

        let offset = query
            .offset
            .map_or(0, |o| usize::try_from(o).unwrap_or(usize::MAX));
        let limit = query
            .limit
            .map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(usize::MAX));
        let items = filtered.into_iter().skip(offset).take(limit).collect();

        Ok(Self {
            total,
            items,
            total_by_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn author(id: i32, name: &str) -> Author {
        Author {
            id,
            full_name: name.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn item(id: i32, year: i32, month: i32, amount: i64, kind: BudgetType) -> BudgetItem {
        BudgetItem {
            record: BudgetRecord {
                id,
                year,
                month,
                amount,
                kind,
                author_id: None,
            },
            author: None,
        }
    }

    fn by(mut item: BudgetItem, author: &Author) -> BudgetItem {
        item.record.author_id = Some(author.id);
        item.author = Some(author.clone());
        item
    }

    fn amounts(stats: &YearStats) -> Vec<i64> {
        stats.items.iter().map(|i| i.record.amount).collect()
    }

    #[test]
    fn pagination_does_not_shrink_totals() {
        let rows = vec![
            item(1, 2020, 5, 10, BudgetType::Income),
            item(2, 2020, 5, 5, BudgetType::Income),
            item(3, 2020, 5, 20, BudgetType::Income),
            item(4, 2020, 5, 30, BudgetType::Income),
            item(5, 2020, 5, 40, BudgetType::Income),
            item(6, 2030, 1, 1, BudgetType::Expense),
        ];

        let stats = YearStats::compute(rows, &StatsQuery::new(2020).limit(3).offset(1)).unwrap();

        assert_eq!(stats.total, 5);
        assert_eq!(amounts(&stats), vec![30, 20, 10]);
        assert_eq!(stats.total_by_type.get(&BudgetType::Income), Some(&105));
        assert_eq!(stats.total_by_type.get(&BudgetType::Expense), None);
    }

    #[test]
    fn sorted_by_month_then_amount_descending() {
        let rows = vec![
            item(1, 2020, 5, 100, BudgetType::Income),
            item(2, 2020, 1, 5, BudgetType::Income),
            item(3, 2020, 5, 50, BudgetType::Income),
            item(4, 2020, 1, 30, BudgetType::Income),
            item(5, 2020, 5, 400, BudgetType::Income),
        ];

        let stats = YearStats::compute(rows, &StatsQuery::new(2020).limit(100).offset(0)).unwrap();

        assert_eq!(amounts(&stats), vec![30, 5, 400, 100, 50]);
    }

    #[test]
    fn equal_keys_fall_back_to_id() {
        let rows = vec![
            item(9, 2020, 2, 10, BudgetType::Income),
            item(3, 2020, 2, 10, BudgetType::Expense),
        ];

        let stats = YearStats::compute(rows, &StatsQuery::new(2020)).unwrap();

        let ids: Vec<i32> = stats.items.iter().map(|i| i.record.id).collect();
        assert_eq!(ids, vec![3, 9]);
    }

    #[test]
    fn missing_limit_and_offset_return_everything() {
        let rows = (1..=12)
            .map(|m| item(m, 2021, m, 1, BudgetType::Expense))
            .collect();

        let stats = YearStats::compute(rows, &StatsQuery::new(2021)).unwrap();

        assert_eq!(stats.total, 12);
        assert_eq!(stats.items.len(), 12);
        assert_eq!(stats.total_by_type.get(&BudgetType::Expense), Some(&12));
    }

    #[test]
    fn offset_past_end_keeps_totals() {
        let rows = vec![
            item(1, 2020, 1, 7, BudgetType::Income),
            item(2, 2020, 2, 3, BudgetType::Expense),
        ];

        let stats = YearStats::compute(rows, &StatsQuery::new(2020).limit(10).offset(50)).unwrap();

        assert!(stats.items.is_empty());
        assert_eq!(stats.total, 2);
        assert_eq!(stats.total_by_type.get(&BudgetType::Income), Some(&7));
        assert_eq!(stats.total_by_type.get(&BudgetType::Expense), Some(&3));
    }

    #[test]
    fn zero_limit_returns_no_items() {
        let rows = vec![item(1, 2020, 1, 7, BudgetType::Income)];

        let stats = YearStats::compute(rows, &StatsQuery::new(2020).limit(0)).unwrap();

        assert!(stats.items.is_empty());
        assert_eq!(stats.total, 1);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let warren = author(1, "Warren Buffet");
        let maklay = author(2, "Mikluho Maklay");
        let rows = vec![
            by(item(1, 2020, 5, 10, BudgetType::Income), &warren),
            by(item(2, 2020, 5, 5, BudgetType::Income), &warren),
            by(item(3, 2020, 5, 20, BudgetType::Expense), &warren),
            by(item(4, 2020, 5, 30, BudgetType::Income), &maklay),
            by(item(5, 2020, 5, 40, BudgetType::Income), &maklay),
            item(6, 2020, 5, 50, BudgetType::Income),
        ];

        let query = StatsQuery::new(2020).limit(2).offset(1).search(" ARRE");
        let stats = YearStats::compute(rows, &query).unwrap();

        assert_eq!(stats.total, 3);
        assert_eq!(stats.total_by_type.get(&BudgetType::Income), Some(&15));
        assert_eq!(stats.total_by_type.get(&BudgetType::Expense), Some(&20));
        assert_eq!(amounts(&stats), vec![10, 5]);
        assert!(
            stats
                .items
                .iter()
                .all(|i| i.author.as_ref().map(|a| a.full_name.as_str()) == Some("Warren Buffet"))
        );
    }

    #[test]
    fn search_matches_non_ascii_names() {
        let author = author(1, "Миклухо Маклай");
        let rows = vec![by(item(1, 2020, 3, 10, BudgetType::Income), &author)];

        let stats = YearStats::compute(rows, &StatsQuery::new(2020).search("МАКЛ")).unwrap();

        assert_eq!(stats.total, 1);
    }

    #[test]
    fn records_without_author_only_match_empty_search() {
        let rows = vec![item(1, 2020, 1, 10, BudgetType::Income)];

        let searched = YearStats::compute(rows.clone(), &StatsQuery::new(2020).search("a")).unwrap();
        assert_eq!(searched.total, 0);
        assert!(searched.total_by_type.is_empty());

        let blank = YearStats::compute(rows, &StatsQuery::new(2020).search("   ")).unwrap();
        assert_eq!(blank.total, 1);
        assert_eq!(blank.items[0].author, None);
    }

    #[test]
    fn window_is_slice_of_sorted_filtered_set() {
        let rows = vec![
            item(1, 2020, 3, 50, BudgetType::Income),
            item(2, 2020, 1, 10, BudgetType::Expense),
            item(3, 2020, 3, 70, BudgetType::Expense),
            item(4, 2020, 2, 20, BudgetType::Income),
            item(5, 2020, 1, 40, BudgetType::Income),
            item(6, 2020, 3, 50, BudgetType::Expense),
            item(7, 2020, 2, 20, BudgetType::Expense),
            item(8, 2021, 1, 99, BudgetType::Income),
        ];
        let sorted = [5, 2, 4, 7, 3, 1, 6];

        let windows: [(Option<u64>, Option<u64>, std::ops::Range<usize>); 8] = [
            (None, None, 0..7),
            (Some(3), Some(0), 0..3),
            (Some(3), Some(4), 4..7),
            (Some(2), Some(5), 5..7),
            (Some(u64::MAX), Some(2), 2..7),
            (None, Some(6), 6..7),
            (Some(1), Some(7), 7..7),
            (Some(0), Some(3), 3..3),
        ];

        for (limit, offset, range) in windows {
            let query = StatsQuery {
                year: 2020,
                limit,
                offset,
                search: None,
            };
            let stats = YearStats::compute(rows.clone(), &query).unwrap();

            let ids: Vec<i32> = stats.items.iter().map(|i| i.record.id).collect();
            assert_eq!(ids, sorted[range].to_vec(), "limit={limit:?} offset={offset:?}");
            assert_eq!(stats.total, 7);
            assert_eq!(stats.total_by_type.get(&BudgetType::Income), Some(&110));
            assert_eq!(stats.total_by_type.get(&BudgetType::Expense), Some(&150));
        }
    }

    #[test]
    fn total_overflow_is_an_error() {
        let rows = vec![
            item(1, 2020, 1, i64::MAX, BudgetType::Income),
            item(2, 2020, 2, 1, BudgetType::Income),
        ];

        let err = YearStats::compute(rows, &StatsQuery::new(2020)).unwrap_err();

        assert!(matches!(err, EngineError::AmountOverflow(_)));
    }

    #[test]
    fn intermediate_overflow_does_not_fail_in_range_total() {
        let rows = vec![
            item(1, 2020, 1, i64::MAX, BudgetType::Income),
            item(2, 2020, 2, 1, BudgetType::Income),
            item(3, 2020, 2, -2, BudgetType::Income),
            item(4, 2020, 2, i64::MAX, BudgetType::Expense),
        ];

        let stats = YearStats::compute(rows, &StatsQuery::new(2020)).unwrap();

        assert_eq!(stats.total_by_type.get(&BudgetType::Income), Some(&(i64::MAX - 1)));
        assert_eq!(stats.total_by_type.get(&BudgetType::Expense), Some(&i64::MAX));
    }
}
