//! JSON export of the memory collection.
//!
//! The export is a pretty-printed JSON array of memories, named after the
//! day it was taken. [`from_json`] is the exact inverse of [`to_json`].

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::error::LaneResult;
use crate::types::Memory;

/// Default file name prefix ("memories")
pub const DEFAULT_PREFIX: &str = "זכרונות";

/// Serialize the collection as a pretty-printed JSON array
pub fn to_json(memories: &[Memory]) -> LaneResult<String> {
    Ok(serde_json::to_string_pretty(memories)?)
}

/// Parse an export back into a collection
pub fn from_json(json: &str) -> LaneResult<Vec<Memory>> {
    Ok(serde_json::from_str(json)?)
}

/// `<prefix>-YYYY-MM-DD.json`
pub fn export_file_name(prefix: &str, day: NaiveDate) -> String {
    format!("{}-{}.json", prefix, day.format("%Y-%m-%d"))
}

/// Write the export into `dir`, creating it if needed. Returns the file path.
pub fn write_export(
    dir: &Path,
    prefix: &str,
    day: NaiveDate,
    memories: &[Memory],
) -> LaneResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(prefix, day));
    std::fs::write(&path, to_json(memories)?)?;

    info!(path = %path.display(), count = memories.len(), "Exported memories");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_memories;
    use crate::types::{MemoryCategory, MemoryType};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_roundtrip_sample() {
        let memories = sample_memories();
        let json = to_json(&memories).unwrap();
        assert_eq!(from_json(&json).unwrap(), memories);
    }

    #[test]
    fn test_roundtrip_keeps_unrecognized_values() {
        let memories = vec![
            Memory::new(
                "x",
                day(1999, 12, 31),
                "t",
                "d",
                MemoryType::parse("hologram"),
                MemoryCategory::parse("pets"),
            )
            .with_tags(["b", "a"]),
        ];
        let json = to_json(&memories).unwrap();
        assert!(json.contains("\"hologram\""));
        assert_eq!(from_json(&json).unwrap(), memories);
    }

    #[test]
    fn test_json_is_pretty_array() {
        let json = to_json(&sample_memories()[..1]).unwrap();
        assert!(json.starts_with("[\n"));
        assert!(json.contains("\n    \"id\": \"1\""));
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(from_json("{}").is_err());
        assert!(from_json("not json").is_err());
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name(DEFAULT_PREFIX, day(2026, 3, 7)),
            "זכרונות-2026-03-07.json"
        );
    }

    #[test]
    fn test_write_export() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("exports");
        let memories = sample_memories();

        let path = write_export(&target, "memories", day(2024, 1, 15), &memories).unwrap();
        assert_eq!(path, target.join("memories-2024-01-15.json"));

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(from_json(&written).unwrap(), memories);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::seed;
    use crate::strategies::arb_memories;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn export_roundtrips(memories in arb_memories(16)) {
            let json = to_json(&memories).unwrap();
            prop_assert_eq!(from_json(&json).unwrap(), memories.clone());
            prop_assert_eq!(seed::parse(&json, "export").unwrap(), memories);
        }
    }
}
