//! Seed collections.
//!
//! The timeline starts from either the built-in sample memories or a JSON
//! fixture in the export schema. Fixture loading is lenient per record: a
//! record with a bad date or a missing field is skipped with a warning and the
//! rest of the collection still loads.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{LaneError, LaneResult};
use crate::types::{Memory, MemoryCategory, MemoryType};

/// Load a fixture file
pub fn load(path: &Path) -> LaneResult<Vec<Memory>> {
    let content = std::fs::read_to_string(path)?;
    let memories = parse(&content, &path.display().to_string())?;
    info!(path = %path.display(), count = memories.len(), "Loaded seed memories");
    Ok(memories)
}

/// Parse fixture JSON. `source` names the input in logs and errors.
///
/// Fails only when the document is not a JSON array. Unreadable records and
/// repeated ids are skipped.
pub fn parse(json: &str, source: &str) -> LaneResult<Vec<Memory>> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return Err(LaneError::invalid_seed(source, "expected a JSON array of memories"));
    };

    let mut seen = HashSet::new();
    let mut memories = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Memory>(item) {
            Ok(memory) if !seen.insert(memory.id.clone()) => {
                warn!(source = %source, index, id = %memory.id, "Skipping memory with duplicate id");
            }
            Ok(memory) => memories.push(memory),
            Err(e) => {
                warn!(source = %source, index, error = %e, "Skipping unreadable memory");
            }
        }
    }

    Ok(memories)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The built-in memories of the birthday timeline
pub fn sample_memories() -> Vec<Memory> {
    use MemoryCategory::*;
    use MemoryType::*;

    vec![
        Memory::new(
            "1",
            date(1985, 9, 24),
            "יום ההולדת הראשון שלך",
            "התחלת המסע המדהים הזה - יום שבו הלב שלנו התמלא באור חדש.",
            Milestone,
            LifeEvents,
        )
        .favorite()
        .with_tags(["יום הולדת", "התחלות"]),
        Memory::new(
            "2",
            date(2005, 6, 20),
            "הפגישה הראשונה",
            "היום שבו פגשנו לראשונה. מי היה יודע שזה יהיה תחילתו של סיפור אהבה כל כך יפה?",
            Photo,
            Relationships,
        )
        .with_media("/photos/first-meeting.svg")
        .favorite()
        .with_tags(["אהבה", "פגישה ראשונה", "רומנטיקה"]),
        Memory::new(
            "3",
            date(2008, 9, 14),
            "החתונה שלנו",
            "היום הכי יפה בחיים שלנו - התחלנו את המסע המשותף שלנו כמשפחה.",
            Photo,
            Relationships,
        )
        .with_media("/photos/wedding.jpg")
        .favorite()
        .with_tags(["חתונה", "זוגיות", "שמחה"]),
        Memory::new(
            "4",
            date(2008, 9, 14),
            "הריקוד הראשון שלנו",
            "הריקוד הראשון שלנו כזוג נשוי - רגע קסום שנשאר בלב לתמיד.",
            Video,
            Relationships,
        )
        .with_media("/videos/wedding-dance.mp4")
        .favorite()
        .with_tags(["חתונה", "ריקוד", "רומנטיקה"]),
        Memory::new(
            "5",
            date(2009, 2, 14),
            "השיר שלנו",
            "השיר שתמיד מזכיר לנו את ההתחלה היפה שלנו יחד.",
            Audio,
            Relationships,
        )
        .with_audio("/audio/love-song.mp3")
        .favorite()
        .with_tags(["מוזיקה", "אהבה", "זכרונות"]),
        Memory::new(
            "6",
            date(2012, 4, 3),
            "לידת הילד הראשון",
            "הרגע שבו הפכנו להורים. הרגש הכי עז שחווינו אי פעם.",
            Milestone,
            Family,
        )
        .favorite()
        .with_tags(["לידה", "הורות", "ילדים"]),
        Memory::new(
            "7",
            date(2013, 8, 15),
            "זמן משפחתי",
            "רגעים יפים עם כל המשפחה. התחלת מסורות חדשות עם הילדים.",
            Photo,
            Family,
        )
        .with_media("/photos/family-time.svg")
        .favorite()
        .with_tags(["משפחה", "ילדים", "מסורות"]),
        Memory::new(
            "8",
            date(2015, 12, 8),
            "נסיעה לאירופה",
            "החופשה הרומנטית הראשונה שלנו בזוגיות. זכרונות שחרוטים בלב לתמיד.",
            Photo,
            Travel,
        )
        .with_media("/photos/europe-trip.svg")
        .with_tags(["חופשה", "אירופה", "רומנטיקה"]),
        Memory::new(
            "9",
            date(2018, 11, 22),
            "קידום בעבודה",
            "הרגע שבו כל העבודה הקשה שלך הובילה להישג הגדול הזה. כל כך גאה בך!",
            Milestone,
            Achievements,
        )
        .with_tags(["קריירה", "הישגים", "עבודה"]),
        Memory::new(
            "10",
            date(2020, 3, 1),
            "ברכות יום הולדת מהמשפחה",
            "ברכות חמות ומלאות אהבה מכל המשפחה ליום הולדתך המיוחד.",
            Audio,
            Family,
        )
        .with_audio("/audio/birthday-wishes.mp3")
        .with_tags(["יום הולדת", "משפחה", "ברכות"]),
        Memory::new(
            "11",
            date(2021, 5, 20),
            "יום הולדת 36",
            "חגיגה מיוחדת עם כל האנשים שאני הכי אוהבת.",
            Video,
            LifeEvents,
        )
        .with_media("/videos/birthday-36.mp4")
        .with_tags(["יום הולדת", "חגיגה", "שמחה"]),
        Memory::new(
            "12",
            date(2022, 7, 10),
            "סיפורי משפחה",
            "הקלטה של סיפורים מתוקים על החיים שלנו יחד, שנרצה לזכור לתמיד.",
            Audio,
            Family,
        )
        .with_audio("/audio/family-stories.mp3")
        .favorite()
        .with_tags(["סיפורים", "משפחה", "זכרונות"]),
        Memory::new(
            "13",
            date(2023, 7, 10),
            "הסיפור שלנו",
            "כתבתי לך את הסיפור של האהבה שלנו. כל מילה כתובה מהלב, כל זכרון שמור בנפש.",
            Story,
            Relationships,
        )
        .favorite()
        .with_tags(["סיפור", "אהבה", "זכרונות"]),
        Memory::new(
            "14",
            date(2024, 1, 15),
            "חגיגת יום הולדת מיוחדת",
            "התחלה של שנה חדשה עם כל הרגעים הטובים שעוד בדרך.",
            Photo,
            LifeEvents,
        )
        .with_media("/photos/wedding.jpg")
        .favorite()
        .with_tags(["יום הולדת", "חגיגה", "שנה חדשה"]),
        Memory::new(
            "15",
            date(1995, 6, 15),
            "סיום התיכון",
            "הסיום של תקופה ותחילת דרך חדשה מלאה באפשרויות.",
            Photo,
            Achievements,
        )
        .with_media("/photos/graduation.svg")
        .with_tags(["סיום", "לימודים", "הישגים"]),
    ]
}
