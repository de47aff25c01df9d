//! Data structures exchanged with the backend

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Reserved quality id for audio-only extraction
pub const AUDIO_QUALITY_ID: &str = "audio";

/// Quality id offered when the backend lists no qualities
pub const BEST_QUALITY_ID: &str = "best";

/// Body of `POST /api/info`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

/// Video information returned by the analysis endpoint
///
/// Every field is optional. Absent values stay `None` here; deciding how to
/// show an unknown title or duration is left to the views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualities: Option<Vec<Quality>>,
    /// Fields this client does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One downloadable variant as listed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quality {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Per-variant details such as `ext` or `filesize`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Quality {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: Some(label.into()),
            extra: Map::new(),
        }
    }

    /// Button text; falls back to the id when the backend sent no label
    pub fn display_label(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => &self.id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
    Video,
    Audio,
}

/// A button in the download panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityChoice {
    pub id: String,
    pub label: String,
    pub kind: ChoiceKind,
}

impl QualityChoice {
    fn video(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: ChoiceKind::Video,
        }
    }

    /// The audio-only entry shown under every analyzed video
    pub fn audio_only() -> Self {
        Self {
            id: AUDIO_QUALITY_ID.to_string(),
            label: "Audio only (MP3)".to_string(),
            kind: ChoiceKind::Audio,
        }
    }
}

impl VideoMetadata {
    pub fn has_qualities(&self) -> bool {
        self.qualities.as_ref().is_some_and(|q| !q.is_empty())
    }
}

/// Download choices for a video, in display order
///
/// Server qualities come first, or a single "best" entry when the list is
/// absent or empty. The audio-only entry is always last.
pub fn quality_choices(metadata: &VideoMetadata) -> Vec<QualityChoice> {
    let mut choices: Vec<QualityChoice> = match &metadata.qualities {
        Some(list) if !list.is_empty() => list
            .iter()
            .map(|q| QualityChoice::video(q.id.clone(), q.display_label()))
            .collect(),
        _ => vec![QualityChoice::video(BEST_QUALITY_ID, "Best quality")],
    };
    choices.push(QualityChoice::audio_only());
    choices
}

/// Extract a logical failure from a decoded body
///
/// Follows JavaScript truthiness: `null`, `false`, `0` and `""` do not count
/// as an error.
pub fn payload_error(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(other) => Some(other.to_string()),
    })
}
