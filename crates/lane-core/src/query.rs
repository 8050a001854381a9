//! Query utilities over a memory collection.
//!
//! Every function here is total and side-effect free: an empty collection,
//! an unknown decade label or an unmatched value yields an empty result or a
//! zero-valued aggregate, never an error. Filters are stable, so output keeps
//! the input's relative order unless a function says otherwise.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::types::{Decade, Memory, MemoryCategory, MemoryType};

/// A filter value that is either "everything" or one specific value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T> Selection<T> {
    pub fn matches(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl Selection<MemoryType> {
    /// `"all"` or a type name
    pub fn parse(s: &str) -> Self {
        match s {
            "all" => Self::All,
            other => Self::Only(MemoryType::parse(other)),
        }
    }
}

impl Selection<MemoryCategory> {
    /// `"all"` or a category slug/label
    pub fn parse(s: &str) -> Self {
        match s {
            "all" => Self::All,
            other => Self::Only(MemoryCategory::parse(other)),
        }
    }
}

/// Memories whose year falls in the labelled decade, sorted by date.
///
/// Records sharing a date keep their original relative order. An
/// unparseable label matches nothing.
pub fn filter_by_decade(memories: &[Memory], label: &str) -> Vec<Memory> {
    match Decade::parse(label) {
        Some(decade) => filter_in_decade(memories, decade),
        None => Vec::new(),
    }
}

/// Same as [`filter_by_decade`] for an already parsed decade.
pub fn filter_in_decade(memories: &[Memory], decade: Decade) -> Vec<Memory> {
    let mut matched: Vec<Memory> = memories
        .iter()
        .filter(|m| decade.contains(m.date.year()))
        .cloned()
        .collect();
    // sort_by_key is stable
    matched.sort_by_key(|m| m.date);
    matched
}

/// Case-insensitive substring search over title, description, category and tags.
///
/// The query is trimmed first. An empty query matches every record, since
/// every string contains the empty string.
pub fn search(memories: &[Memory], query: &str) -> Vec<Memory> {
    let needle = query.trim().to_lowercase();
    memories
        .iter()
        .filter(|m| matches_query(m, &needle))
        .cloned()
        .collect()
}

fn matches_query(memory: &Memory, needle: &str) -> bool {
    let hit = |text: &str| text.to_lowercase().contains(needle);

    hit(memory.title.as_str())
        || hit(memory.description.as_str())
        || hit(memory.category.as_str())
        || hit(memory.category.label())
        || memory.tags.iter().any(|tag| hit(tag.as_str()))
}

pub fn filter_by_type(memories: &[Memory], memory_type: &Selection<MemoryType>) -> Vec<Memory> {
    memories
        .iter()
        .filter(|m| memory_type.matches(&m.memory_type))
        .cloned()
        .collect()
}

pub fn filter_by_category(
    memories: &[Memory],
    category: &Selection<MemoryCategory>,
) -> Vec<Memory> {
    memories
        .iter()
        .filter(|m| category.matches(&m.category))
        .cloned()
        .collect()
}

pub fn filter_favorites(memories: &[Memory]) -> Vec<Memory> {
    memories.iter().filter(|m| m.is_favorite).cloned().collect()
}

pub fn find_by_id<'a>(memories: &'a [Memory], id: &str) -> Option<&'a Memory> {
    memories.iter().find(|m| m.id == id)
}

/// Flip `is_favorite` on the record with the given id.
///
/// Returns a new collection, or `None` when no record has that id so the
/// caller can keep its existing collection untouched.
pub fn toggle_favorite(memories: &[Memory], id: &str) -> Option<Vec<Memory>> {
    if !memories.iter().any(|m| m.id == id) {
        return None;
    }

    Some(
        memories
            .iter()
            .map(|m| {
                if m.id == id {
                    Memory {
                        is_favorite: !m.is_favorite,
                        ..m.clone()
                    }
                } else {
                    m.clone()
                }
            })
            .collect(),
    )
}

/// Combined search panel state: text query, type, category, favorites only.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilter {
    pub query: String,
    pub memory_type: Selection<MemoryType>,
    pub category: Selection<MemoryCategory>,
    pub favorites_only: bool,
}

impl MemoryFilter {
    /// True when applying the filter cannot remove anything
    pub fn is_identity(&self) -> bool {
        self.query.trim().is_empty()
            && self.memory_type.is_all()
            && self.category.is_all()
            && !self.favorites_only
    }

    pub fn apply(&self, memories: &[Memory]) -> Vec<Memory> {
        let mut result = search(memories, &self.query);
        result = filter_by_type(&result, &self.memory_type);
        result = filter_by_category(&result, &self.category);
        if self.favorites_only {
            result = filter_favorites(&result);
        }
        result
    }
}

/// Aggregate counts over a collection.
///
/// Only values that occur appear as keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: usize,
    pub favorites: usize,
    pub by_type: BTreeMap<MemoryType, usize>,
    pub by_category: BTreeMap<MemoryCategory, usize>,
    pub by_decade: BTreeMap<Decade, usize>,
}

impl Stats {
    /// Share of the total as a percentage, `None` for an empty collection.
    pub fn percentage(&self, count: usize) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(count as f64 * 100.0 / self.total as f64)
    }
}

pub fn compute_stats(memories: &[Memory]) -> Stats {
    let mut stats = Stats {
        total: memories.len(),
        favorites: memories.iter().filter(|m| m.is_favorite).count(),
        ..Default::default()
    };

    for memory in memories {
        *stats.by_type.entry(memory.memory_type.clone()).or_default() += 1;
        *stats.by_category.entry(memory.category.clone()).or_default() += 1;
        *stats.by_decade.entry(memory.decade()).or_default() += 1;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pair() -> Vec<Memory> {
        vec![
            Memory::new(
                "1",
                date(2012, 4, 3),
                "לידה",
                "",
                MemoryType::Milestone,
                MemoryCategory::Family,
            ),
            Memory::new(
                "2",
                date(2015, 12, 8),
                "אירופה",
                "",
                MemoryType::Photo,
                MemoryCategory::Travel,
            ),
        ]
    }

    fn sample() -> Vec<Memory> {
        vec![
            Memory::new(
                "a",
                date(2015, 6, 1),
                "Trip",
                "Rome in June",
                MemoryType::Photo,
                MemoryCategory::Travel,
            )
            .with_tags(["Europe", "pasta"]),
            Memory::new(
                "b",
                date(1995, 6, 15),
                "Graduation",
                "High school",
                MemoryType::Photo,
                MemoryCategory::Achievements,
            ),
            Memory::new(
                "c",
                date(2008, 9, 14),
                "Wedding",
                "The big day",
                MemoryType::Photo,
                MemoryCategory::Relationships,
            )
            .favorite(),
            Memory::new(
                "d",
                date(2008, 9, 14),
                "First dance",
                "Same day",
                MemoryType::Video,
                MemoryCategory::Relationships,
            )
            .favorite(),
            Memory::new(
                "e",
                date(2003, 1, 1),
                "Mystery",
                "?",
                MemoryType::parse("hologram"),
                MemoryCategory::parse("pets"),
            ),
            Memory::new(
                "f",
                date(2012, 4, 3),
                "Birth",
                "Family grows",
                MemoryType::Milestone,
                MemoryCategory::Family,
            ),
        ]
    }

    fn ids(memories: &[Memory]) -> Vec<&str> {
        memories.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_filter_by_decade_scenario() {
        let memories = pair();
        assert_eq!(ids(&filter_by_decade(&memories, "2010s")), vec!["1", "2"]);

        let reversed: Vec<Memory> = memories.iter().rev().cloned().collect();
        assert_eq!(ids(&filter_by_decade(&reversed, "2010s")), vec!["1", "2"]);
    }

    #[test]
    fn test_filter_by_decade_bounds_and_order() {
        let memories = sample();
        for label in ["1990s", "2000s", "2010s"] {
            let decade = Decade::parse(label).unwrap();
            let result = filter_by_decade(&memories, label);
            assert!(result.iter().all(|m| decade.contains(m.date.year())));
            assert!(result.windows(2).all(|w| w[0].date <= w[1].date));
        }
        assert_eq!(ids(&filter_by_decade(&memories, "2000s")), vec!["e", "c", "d"]);
    }

    #[test]
    fn test_filter_by_decade_ties_keep_input_order() {
        let mut memories = sample();
        memories.swap(2, 3);
        assert_eq!(ids(&filter_by_decade(&memories, "2000s")), vec!["e", "d", "c"]);
    }

    #[test]
    fn test_filter_by_decade_partitions_collection() {
        let memories = sample();
        let stats = compute_stats(&memories);
        let mut recovered: Vec<String> = stats
            .by_decade
            .keys()
            .flat_map(|d| filter_in_decade(&memories, *d))
            .map(|m| m.id)
            .collect();
        recovered.sort();
        let mut all: Vec<String> = memories.iter().map(|m| m.id.clone()).collect();
        all.sort();
        assert_eq!(recovered, all);
    }

    #[test]
    fn test_filter_by_decade_total() {
        assert!(filter_by_decade(&[], "2010s").is_empty());
        assert!(filter_by_decade(&sample(), "1970s").is_empty());
        assert!(filter_by_decade(&sample(), "nonsense").is_empty());
        assert!(filter_by_decade(&sample(), "2147483640s").is_empty());
        assert!(filter_by_decade(&sample(), "99999999990s").is_empty());
    }

    #[test]
    fn test_search_case_insensitive_and_trimmed() {
        let memories = sample();
        assert_eq!(ids(&search(&memories, "  rome ")), vec!["a"]);
        assert_eq!(ids(&search(&memories, "EUROPE")), vec!["a"]);
        assert_eq!(ids(&search(&memories, "wedding")), vec!["c"]);
    }

    #[test]
    fn test_search_matches_category_slug_and_label() {
        let memories = sample();
        assert_eq!(ids(&search(&memories, "relationships")), vec!["c", "d"]);
        assert_eq!(ids(&search(&memories, "משפחה")), vec!["f"]);
        assert_eq!(ids(&search(&memories, "pets")), vec!["e"]);
    }

    #[test]
    fn test_search_empty_query_matches_everything() {
        let memories = sample();
        assert_eq!(search(&memories, ""), memories);
        assert_eq!(search(&memories, "   "), memories);
        assert!(search(&memories, "zzz-no-match").is_empty());
    }

    #[test]
    fn test_filter_by_type_and_category() {
        let memories = sample();
        assert_eq!(filter_by_type(&memories, &Selection::All), memories);
        assert_eq!(
            ids(&filter_by_type(&memories, &Selection::Only(MemoryType::Video))),
            vec!["d"]
        );
        assert_eq!(
            ids(&filter_by_type(&memories, &Selection::<MemoryType>::parse("hologram"))),
            vec!["e"]
        );
        assert!(filter_by_type(&memories, &Selection::Only(MemoryType::Audio)).is_empty());

        assert_eq!(filter_by_category(&memories, &Selection::All), memories);
        assert_eq!(
            ids(&filter_by_category(&memories, &Selection::<MemoryCategory>::parse("family"))),
            vec!["f"]
        );
    }

    #[test]
    fn test_memory_filter_combines() {
        let memories = sample();
        let filter = MemoryFilter::default();
        assert!(filter.is_identity());
        assert_eq!(filter.apply(&memories), memories);

        let filter = MemoryFilter {
            query: "day".into(),
            memory_type: Selection::All,
            category: Selection::Only(MemoryCategory::Relationships),
            favorites_only: true,
        };
        assert!(!filter.is_identity());
        assert_eq!(ids(&filter.apply(&memories)), vec!["c", "d"]);

        let filter = MemoryFilter {
            memory_type: Selection::Only(MemoryType::Video),
            ..filter
        };
        assert_eq!(ids(&filter.apply(&memories)), vec!["d"]);
    }

    #[test]
    fn test_toggle_favorite_self_inverse() {
        let memories = pair();
        let once = toggle_favorite(&memories, "1").unwrap();
        assert!(once[0].is_favorite);
        assert_eq!(once[1], memories[1]);

        let twice = toggle_favorite(&once, "1").unwrap();
        assert_eq!(twice, memories);
    }

    #[test]
    fn test_toggle_favorite_unknown_id() {
        assert!(toggle_favorite(&pair(), "missing").is_none());
        assert!(toggle_favorite(&[], "1").is_none());
    }

    #[test]
    fn test_compute_stats_scenario() {
        let stats = compute_stats(&pair());
        assert_eq!(stats.total, 2);
        assert_eq!(stats.favorites, 0);
        assert_eq!(
            stats.by_type,
            BTreeMap::from([(MemoryType::Milestone, 1), (MemoryType::Photo, 1)])
        );
        assert_eq!(
            stats.by_category,
            BTreeMap::from([(MemoryCategory::Family, 1), (MemoryCategory::Travel, 1)])
        );
        assert_eq!(
            stats.by_decade,
            BTreeMap::from([(Decade::parse("2010s").unwrap(), 2)])
        );
    }

    #[test]
    fn test_compute_stats_sums() {
        let memories = sample();
        let stats = compute_stats(&memories);
        assert_eq!(stats.total, memories.len());
        assert_eq!(stats.favorites, 2);
        assert_eq!(stats.by_type.values().sum::<usize>(), stats.total);
        assert_eq!(stats.by_category.values().sum::<usize>(), stats.total);
        assert_eq!(stats.by_decade.values().sum::<usize>(), stats.total);
        assert_eq!(stats.by_type.get(&MemoryType::parse("hologram")), Some(&1));
    }

    #[test]
    fn test_compute_stats_empty() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, Stats::default());
        assert_eq!(stats.percentage(0), None);
    }

    #[test]
    fn test_stats_percentage() {
        let stats = compute_stats(&pair());
        assert_eq!(stats.percentage(1), Some(50.0));
        assert_eq!(stats.percentage(2), Some(100.0));
    }

    #[test]
    fn test_stats_json_keys() {
        let value = serde_json::to_value(compute_stats(&pair())).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["byType"]["milestone"], 1);
        assert_eq!(value["byCategory"]["travel"], 1);
        assert_eq!(value["byDecade"]["2010s"], 2);
    }

    #[test]
    fn test_find_by_id() {
        let memories = sample();
        assert_eq!(find_by_id(&memories, "c").map(|m| m.title.as_str()), Some("Wedding"));
        assert!(find_by_id(&memories, "zz").is_none());
    }
}
