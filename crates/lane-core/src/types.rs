//! Shared types for lane-core.
//!
//! A [`Memory`] is one dated recollection on the timeline. Its kind and
//! theme are closed enumerations with an explicit `Unrecognized` variant, so
//! a record carrying a value this build does not know still loads, still
//! round-trips, and falls into the neutral styling bucket.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dates::serde_date;

// ─────────────────────────────────────────────────────────────────────────────
// Styling
// ─────────────────────────────────────────────────────────────────────────────

/// Accent colour a presentation layer uses for a memory kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Green,
    Yellow,
    Purple,
    Pink,
    Teal,
    /// Default bucket for anything unrecognized
    Neutral,
}

// ─────────────────────────────────────────────────────────────────────────────
// Memory type
// ─────────────────────────────────────────────────────────────────────────────

/// Kind of memory (milestone, photo, video, story, audio)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MemoryType {
    Milestone,
    Photo,
    Video,
    Story,
    Audio,
    Unrecognized(String),
}

impl MemoryType {
    /// Every recognized kind, in display order
    pub const KNOWN: [MemoryType; 5] = [
        MemoryType::Milestone,
        MemoryType::Photo,
        MemoryType::Video,
        MemoryType::Story,
        MemoryType::Audio,
    ];

    /// Convert from string. Unknown values are kept verbatim.
    pub fn parse(s: &str) -> Self {
        match s {
            "milestone" => Self::Milestone,
            "photo" => Self::Photo,
            "video" => Self::Video,
            "story" => Self::Story,
            "audio" => Self::Audio,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &str {
        match self {
            Self::Milestone => "milestone",
            Self::Photo => "photo",
            Self::Video => "video",
            Self::Story => "story",
            Self::Audio => "audio",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Hebrew label used by the filter menu
    pub fn label(&self) -> &str {
        match self {
            Self::Milestone => "אבני דרך",
            Self::Photo => "תמונות",
            Self::Video => "סרטונים",
            Self::Story => "סיפורים",
            Self::Audio => "הקלטות",
            Self::Unrecognized(_) => "אחר",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Milestone => "🎯",
            Self::Photo => "📸",
            Self::Video => "🎥",
            Self::Story => "📖",
            Self::Audio => "🎵",
            Self::Unrecognized(_) => "📅",
        }
    }

    pub fn accent(&self) -> Accent {
        match self {
            Self::Milestone => Accent::Green,
            Self::Photo => Accent::Yellow,
            Self::Video => Accent::Purple,
            Self::Story => Accent::Pink,
            Self::Audio => Accent::Teal,
            Self::Unrecognized(_) => Accent::Neutral,
        }
    }

    /// Whether records of this kind are expected to carry `media`
    pub fn expects_media(&self) -> bool {
        matches!(self, Self::Photo | Self::Video)
    }
}

impl From<String> for MemoryType {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<MemoryType> for String {
    fn from(t: MemoryType) -> Self {
        match t {
            MemoryType::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for MemoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Memory category
// ─────────────────────────────────────────────────────────────────────────────

/// Thematic tag of a memory
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MemoryCategory {
    Outings,
    Family,
    Travel,
    Wedding,
    LifeEvents,
    Relationships,
    Achievements,
    Unrecognized(String),
}

impl MemoryCategory {
    /// Every recognized category, in display order
    pub const KNOWN: [MemoryCategory; 7] = [
        MemoryCategory::Outings,
        MemoryCategory::Family,
        MemoryCategory::Travel,
        MemoryCategory::Wedding,
        MemoryCategory::LifeEvents,
        MemoryCategory::Relationships,
        MemoryCategory::Achievements,
    ];

    /// Convert from a slug or its Hebrew label. Unknown values are kept verbatim.
    pub fn parse(s: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|c| c.as_str() == s || c.label() == s)
            .unwrap_or_else(|| Self::Unrecognized(s.to_string()))
    }

    /// Convert to slug
    pub fn as_str(&self) -> &str {
        match self {
            Self::Outings => "outings",
            Self::Family => "family",
            Self::Travel => "travel",
            Self::Wedding => "wedding",
            Self::LifeEvents => "life-events",
            Self::Relationships => "relationships",
            Self::Achievements => "achievements",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Hebrew display label
    pub fn label(&self) -> &str {
        match self {
            Self::Outings => "בילויים",
            Self::Family => "משפחה",
            Self::Travel => "נסיעות",
            Self::Wedding => "חתונה",
            Self::LifeEvents => "אירועי חיים",
            Self::Relationships => "יחסים",
            Self::Achievements => "הישגים",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for MemoryCategory {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<MemoryCategory> for String {
    fn from(c: MemoryCategory) -> Self {
        match c {
            MemoryCategory::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for MemoryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Decade
// ─────────────────────────────────────────────────────────────────────────────

/// Label could not be read as a decade
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid decade label: {0:?} (expected e.g. \"2010s\")")]
pub struct DecadeParseError(pub String);

/// Ten-year bucket starting at a multiple of ten, labelled `"<YYYY>s"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Decade {
    start: i32,
}

impl Decade {
    /// Decade containing the given year
    pub fn of_year(year: i32) -> Self {
        Self {
            start: year.div_euclid(10).saturating_mul(10),
        }
    }

    /// Decade containing the given date
    pub fn of(date: &NaiveDate) -> Self {
        Self::of_year(date.year())
    }

    /// Parse a label such as `"2010s"`.
    ///
    /// The start year must be a multiple of ten no later than the last
    /// representable calendar year.
    pub fn parse(label: &str) -> Option<Self> {
        let digits = label.trim().strip_suffix('s')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let start: i32 = digits.parse().ok()?;
        (start % 10 == 0 && start <= NaiveDate::MAX.year()).then_some(Self { start })
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    /// First year after the decade
    pub fn end(&self) -> i32 {
        self.start.saturating_add(10)
    }

    pub fn contains(&self, year: i32) -> bool {
        (0..10).contains(&(i64::from(year) - i64::from(self.start)))
    }
}

impl TryFrom<String> for Decade {
    type Error = DecadeParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).ok_or(DecadeParseError(s))
    }
}

impl From<Decade> for String {
    fn from(d: Decade) -> Self {
        d.to_string()
    }
}

impl std::fmt::Display for Decade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}s", self.start)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Memory
// ─────────────────────────────────────────────────────────────────────────────

/// One recollection on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    pub id: String,
    #[serde(with = "serde_date")]
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub memory_type: MemoryType,
    /// Image or video path, expected for photos and videos
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    /// Audio path, used by audio memories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_path: Option<String>,
    pub category: MemoryCategory,
    #[serde(default)]
    pub is_favorite: bool,
    /// Free-text labels in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Memory {
    /// Create a memory with no media, tags or favorite flag.
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        title: impl Into<String>,
        description: impl Into<String>,
        memory_type: MemoryType,
        category: MemoryCategory,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            title: title.into(),
            description: description.into(),
            memory_type,
            media: None,
            audio_path: None,
            category,
            is_favorite: false,
            tags: Vec::new(),
        }
    }

    /// Set the image/video path
    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = Some(media.into());
        self
    }

    /// Set the audio path
    pub fn with_audio(mut self, audio_path: impl Into<String>) -> Self {
        self.audio_path = Some(audio_path.into());
        self
    }

    /// Set the tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Mark as favorite
    pub fn favorite(mut self) -> Self {
        self.is_favorite = true;
        self
    }

    pub fn decade(&self) -> Decade {
        Decade::of(&self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_type_conversion() {
        assert_eq!(MemoryType::parse("photo"), MemoryType::Photo);
        assert_eq!(MemoryType::Audio.as_str(), "audio");
        assert_eq!(
            MemoryType::parse("hologram"),
            MemoryType::Unrecognized("hologram".into())
        );
        assert_eq!(MemoryType::parse("hologram").as_str(), "hologram");
    }

    #[test]
    fn test_unrecognized_type_is_neutral() {
        let t = MemoryType::parse("hologram");
        assert!(!t.is_recognized());
        assert_eq!(t.accent(), Accent::Neutral);
        assert_eq!(t.emoji(), "📅");
        assert_eq!(MemoryType::Milestone.accent(), Accent::Green);
    }

    #[test]
    fn test_expects_media() {
        assert!(MemoryType::Photo.expects_media());
        assert!(MemoryType::Video.expects_media());
        assert!(!MemoryType::Audio.expects_media());
    }

    #[test]
    fn test_category_parse_slug_and_label() {
        assert_eq!(MemoryCategory::parse("family"), MemoryCategory::Family);
        assert_eq!(MemoryCategory::parse("משפחה"), MemoryCategory::Family);
        assert_eq!(MemoryCategory::parse("life-events"), MemoryCategory::LifeEvents);
        assert_eq!(
            MemoryCategory::parse("pets"),
            MemoryCategory::Unrecognized("pets".into())
        );
        assert_eq!(MemoryCategory::parse("pets").label(), "pets");
    }

    #[test]
    fn test_decade_parse() {
        assert_eq!(Decade::parse("2010s").map(|d| d.start()), Some(2010));
        assert_eq!(Decade::parse(" 1980s ").map(|d| d.start()), Some(1980));
        assert_eq!(Decade::parse("2015s"), None);
        assert_eq!(Decade::parse("2010"), None);
        assert_eq!(Decade::parse("s"), None);
        assert_eq!(Decade::parse("-2010s"), None);
        assert_eq!(Decade::parse("twenties"), None);
    }

    #[test]
    fn test_decade_of_and_contains() {
        let d = Decade::of(&date(2019, 12, 31));
        assert_eq!(d.to_string(), "2010s");
        assert!(d.contains(2010));
        assert!(d.contains(2019));
        assert!(!d.contains(2020));
        assert_eq!(d.end(), 2020);
        assert!(Decade::of_year(1999) < Decade::of_year(2000));
    }

    #[test]
    fn test_decade_extremes_do_not_overflow() {
        assert_eq!(Decade::parse("2147483640s"), None);
        assert_eq!(Decade::parse("262150s"), None);

        let last = Decade::parse("262140s").unwrap();
        assert!(last.contains(NaiveDate::MAX.year()));
        assert!(!last.contains(i32::MIN));

        let top = Decade::of_year(i32::MAX);
        assert_eq!(top.end(), i32::MAX);
        assert!(top.contains(i32::MAX));
        assert!(!top.contains(i32::MIN));

        let bottom = Decade::of_year(i32::MIN);
        assert!(bottom.contains(i32::MIN));
        assert!(!bottom.contains(i32::MAX));
    }

    #[test]
    fn test_memory_json_shape() {
        let memory = Memory::new(
            "5",
            date(2009, 2, 14),
            "השיר שלנו",
            "desc",
            MemoryType::Audio,
            MemoryCategory::Relationships,
        )
        .with_audio("/audio/love-song.mp3")
        .favorite();

        let value = serde_json::to_value(&memory).unwrap();
        assert_eq!(value["date"], "2009-02-14T00:00:00.000Z");
        assert_eq!(value["type"], "audio");
        assert_eq!(value["category"], "relationships");
        assert_eq!(value["audioPath"], "/audio/love-song.mp3");
        assert_eq!(value["isFavorite"], true);
        assert!(value.get("media").is_none());
        assert!(value.get("tags").is_none());
    }

    #[test]
    fn test_memory_deserialize_defaults() {
        let json = r#"{
            "id": "x",
            "date": "2021-05-20",
            "title": "t",
            "description": "d",
            "type": "hologram",
            "category": "פעילויות"
        }"#;
        let memory: Memory = serde_json::from_str(json).unwrap();
        assert!(!memory.is_favorite);
        assert!(memory.tags.is_empty());
        assert_eq!(memory.memory_type, MemoryType::Unrecognized("hologram".into()));
        assert_eq!(memory.category, MemoryCategory::Unrecognized("פעילויות".into()));
        assert_eq!(memory.decade().to_string(), "2020s");
    }

    #[test]
    fn test_memory_rejects_bad_date() {
        let json = r#"{"id":"x","date":"soon","title":"t","description":"d","type":"story","category":"family"}"#;
        assert!(serde_json::from_str::<Memory>(json).is_err());
    }
}
