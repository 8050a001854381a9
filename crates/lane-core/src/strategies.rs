//! Proptest strategies for generated memory collections.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use proptest::sample::select;

use crate::types::{Memory, MemoryCategory, MemoryType};

/// Mostly recent dates, sometimes anywhere in the representable range.
pub fn arb_date() -> impl Strategy<Value = NaiveDate> {
    let min = NaiveDate::MIN.num_days_from_ce();
    let max = NaiveDate::MAX.num_days_from_ce();
    prop_oneof![
        3 => (1980i32..2030, 1u32..=12, 1u32..=28)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
        1 => (min..=max).prop_map(|days| NaiveDate::from_num_days_from_ce_opt(days).unwrap()),
    ]
}

pub fn arb_memory_type() -> impl Strategy<Value = MemoryType> {
    prop_oneof![
        4 => select(MemoryType::KNOWN.to_vec()),
        1 => "[a-z]{1,8}".prop_map(|s| MemoryType::parse(&s)),
    ]
}

pub fn arb_category() -> impl Strategy<Value = MemoryCategory> {
    prop_oneof![
        4 => select(MemoryCategory::KNOWN.to_vec()),
        1 => "\\PC{1,8}".prop_map(|s| MemoryCategory::parse(&s)),
    ]
}

fn arb_memory() -> impl Strategy<Value = Memory> {
    (
        arb_date(),
        "\\PC{0,12}",
        "\\PC{0,24}",
        arb_memory_type(),
        arb_category(),
        any::<bool>(),
        proptest::option::of("/[a-z]{1,8}\\.jpg"),
        proptest::collection::vec("\\PC{1,8}", 0..3),
    )
        .prop_map(|(date, title, description, kind, category, favorite, media, tags)| {
            let mut memory = Memory::new("", date, title, description, kind, category);
            memory.is_favorite = favorite;
            memory.media = media;
            memory.tags = tags;
            memory
        })
}

/// Up to `max` memories with unique ids `"0"`, `"1"`, ... in collection order.
pub fn arb_memories(max: usize) -> impl Strategy<Value = Vec<Memory>> {
    proptest::collection::vec(arb_memory(), 0..max).prop_map(|memories| {
        memories
            .into_iter()
            .enumerate()
            .map(|(i, memory)| Memory {
                id: i.to_string(),
                ..memory
            })
            .collect()
    })
}

/// Position of a generated memory in its collection
pub fn position(memory: &Memory) -> usize {
    memory.id.parse().unwrap()
}

/// Supported, extreme and malformed decade labels.
pub fn arb_decade_label() -> impl Strategy<Value = String> {
    prop_oneof![
        (196i32..=203).prop_map(|n| format!("{}s", n * 10)),
        (0i32..=26_214).prop_map(|n| format!("{}s", n * 10)),
        "[0-9]{1,12}s",
        "\\PC{0,8}",
    ]
}
