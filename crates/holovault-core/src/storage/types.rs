//! Core data types for the vault store.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::VaultError;

/// A persisted vault record.
///
/// The vault owns the record's lifecycle; callers see decoded values, never
/// raw records (except through listings, which leave `data` un-decoded).
/// An update is a full overwrite of the record at the same `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultEntry {
    /// Caller-chosen record key
    pub id: String,

    /// Framed ciphertext token
    pub data: String,

    /// Partition key this record belongs to
    pub glyph: String,

    /// Creation time, unix milliseconds
    pub timestamp: i64,

    /// Shape tag inferred from the stored value
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl VaultEntry {
    /// The creation time as a UTC datetime, if the stored millis are in
    /// range.
    pub fn stored_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// Shape tag for a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Image,
    Video,
    Array,
    Json,
    Text,
}

impl EntryKind {
    /// Classify a value by its shape.
    ///
    /// Precedence: `data:image/`-prefixed string, `data:video/`-prefixed
    /// string, array, object, then everything else (other strings,
    /// numbers, booleans, null) as text.
    pub fn classify(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) if s.starts_with("data:image/") => EntryKind::Image,
            serde_json::Value::String(s) if s.starts_with("data:video/") => EntryKind::Video,
            serde_json::Value::Array(_) => EntryKind::Array,
            serde_json::Value::Object(_) => EntryKind::Json,
            _ => EntryKind::Text,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Image => "image",
            EntryKind::Video => "video",
            EntryKind::Array => "array",
            EntryKind::Json => "json",
            EntryKind::Text => "text",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(EntryKind::Image),
            "video" => Ok(EntryKind::Video),
            "array" => Ok(EntryKind::Array),
            "json" => Ok(EntryKind::Json),
            "text" => Ok(EntryKind::Text),
            other => Err(VaultError::Storage(format!(
                "Unknown entry type: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_data_url_prefixes() {
        assert_eq!(
            EntryKind::classify(&json!("data:image/png;base64,iVBOR")),
            EntryKind::Image
        );
        assert_eq!(
            EntryKind::classify(&json!("data:video/mp4;base64,AAAA")),
            EntryKind::Video
        );
    }

    #[test]
    fn test_classify_array_before_object() {
        assert_eq!(EntryKind::classify(&json!([1, 2, 3])), EntryKind::Array);
        assert_eq!(EntryKind::classify(&json!({"a": 1})), EntryKind::Json);
    }

    #[test]
    fn test_classify_fallback_is_text() {
        assert_eq!(EntryKind::classify(&json!("plain string")), EntryKind::Text);
        assert_eq!(EntryKind::classify(&json!(42)), EntryKind::Text);
        assert_eq!(EntryKind::classify(&json!(true)), EntryKind::Text);
        assert_eq!(EntryKind::classify(&json!(null)), EntryKind::Text);
    }

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in [
            EntryKind::Image,
            EntryKind::Video,
            EntryKind::Array,
            EntryKind::Json,
            EntryKind::Text,
        ] {
            assert_eq!(kind.as_str().parse::<EntryKind>().unwrap(), kind);
        }
        assert!("blob".parse::<EntryKind>().is_err());
    }

    #[test]
    fn test_entry_serializes_with_type_field() {
        let entry = VaultEntry {
            id: "app_state".to_string(),
            data: "AAEC".to_string(),
            glyph: "QZX1Y2K9".to_string(),
            timestamp: 1_700_000_000_000,
            kind: EntryKind::Json,
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "json");
        assert_eq!(value["timestamp"], 1_700_000_000_000i64);
    }

    #[test]
    fn test_stored_at_converts_millis() {
        let entry = VaultEntry {
            id: "k".to_string(),
            data: String::new(),
            glyph: "ABCD1234".to_string(),
            timestamp: 0,
            kind: EntryKind::Text,
        };
        assert_eq!(entry.stored_at().unwrap().timestamp_millis(), 0);
    }
}
