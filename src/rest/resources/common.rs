//! Value types shared by every *arr app.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::rest::fields::{deserialize_null_default, is_false, is_zero};

/// Renders a flag for a query string.
#[must_use]
pub const fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Status of an item, with any messages attached to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusMessage {
    pub title: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub messages: Vec<String>,
}

/// An unmanaged folder path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Path {
    pub name: String,
    pub path: String,
}

/// Generic id/name pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Value {
    pub id: i64,
    pub name: String,
}

/// Generic key/value pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyValue {
    pub key: String,
    pub value: i64,
}

/// A named link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub url: String,
    pub name: String,
}

/// Cover art or another image attached to media.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Image {
    pub cover_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub remote_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub extension: String,
}

/// The quality a profile entry points at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseQuality {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub resolution: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub modifier: String,
}

/// A download quality attached to media, or a node of a quality profile.
///
/// Groups nest further entries in `items`. Sonarr and Readarr leave `name`
/// and `id` unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quality {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<BaseQuality>,
    #[serde(
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub items: Vec<Quality>,
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<QualityRevision>,
}

/// Revision of a downloaded quality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QualityRevision {
    pub version: i64,
    pub real: i64,
    #[serde(skip_serializing_if = "is_false")]
    pub is_repack: bool,
}

/// A rating from one source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ratings {
    pub votes: i64,
    pub value: f64,
    #[serde(skip_serializing_if = "is_zero_f64")]
    pub popularity: f64,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub rating_type: String,
}

/// Ratings keyed by source, e.g. `imdb` or `tmdb`.
pub type OpenRatings = BTreeMap<String, Ratings>;

/// Load state of a lazily populated relation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IsLoaded {
    pub is_loaded: bool,
}

/// A custom format score inside a quality profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatItem {
    pub format: i64,
    pub name: String,
    pub score: i64,
}

/// A .NET `TimeSpan` as the backends serialize it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeSpan {
    pub ticks: i64,
    pub days: i64,
    pub hours: i64,
    pub milliseconds: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub total_days: i64,
    pub total_hours: i64,
    pub total_milliseconds: i64,
    pub total_minutes: i64,
    pub total_seconds: i64,
}

/// A backup listed under `system/backup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupFile {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub backup_type: String,
    pub time: DateTime<Utc>,
    pub id: i64,
    pub size: i64,
}

/// Download protocol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Usenet,
    Torrent,
    /// Any protocol this crate does not know. Must stay the last variant.
    #[default]
    #[serde(other)]
    Unknown,
}

/// How bulk editors apply a tag list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplyTags {
    Add,
    Remove,
    Replace,
}

/// Input for the bulk indexer editor (`PUT indexer/bulk`).
///
/// Settings left as `None` are not sent and stay unchanged on the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BulkIndexer {
    pub ids: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_tags: Option<ApplyTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_rss: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_automatic_search: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_interactive_search: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

/// A run time sent as `hh:mm:ss`, `mm:ss` or `ss`.
///
/// The original text is kept and sent back unchanged. Components that are
/// not numbers count as zero.
///
/// # Example
///
/// ```rust
/// use starr::PlayTime;
/// use std::time::Duration;
///
/// let t: PlayTime = serde_json::from_str(r#""1:02:03""#).unwrap();
/// assert_eq!(t.duration, Duration::from_secs(3723));
/// assert_eq!(serde_json::to_string(&t).unwrap(), r#""1:02:03""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayTime {
    pub original: String,
    pub duration: Duration,
}

impl PlayTime {
    /// Parses a run time.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let original = text.trim_matches(|c| c == '"' || c == '\'').to_string();
        let parts: Vec<u64> = original
            .split(':')
            .map(|part| part.trim().parse().unwrap_or_default())
            .collect();

        let seconds = match parts.as_slice() {
            [h, m, s] => h
                .saturating_mul(3600)
                .saturating_add(m.saturating_mul(60))
                .saturating_add(*s),
            [m, s] => m.saturating_mul(60).saturating_add(*s),
            [s] => *s,
            _ => 0,
        };

        Self {
            original,
            duration: Duration::from_secs(seconds),
        }
    }
}

impl fmt::Display for PlayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl Serialize for PlayTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.original)
    }
}

impl<'de> Deserialize<'de> for PlayTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::parse(&text))
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero_f64(value: &f64) -> bool {
    *value == 0.0
}
