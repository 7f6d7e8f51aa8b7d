use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Request lifecycle of the gaming page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiStatus {
    #[default]
    Initial,
    InProgress,
    Success,
    Failure,
}

impl ApiStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiStatus::Initial => "INITIAL",
            ApiStatus::InProgress => "IN_PROGRESS",
            ApiStatus::Success => "SUCCESS",
            ApiStatus::Failure => "FAILURE",
        }
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `view_count` as the catalog sends it: a plain number or a preformatted
/// label such as `"1.4K"`. Rendered verbatim either way; `null` and other
/// values become a label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ViewCount {
    Count(serde_json::Number),
    Label(String),
}

impl Default for ViewCount {
    fn default() -> Self {
        ViewCount::Label(String::new())
    }
}

impl From<u64> for ViewCount {
    fn from(n: u64) -> Self {
        ViewCount::Count(n.into())
    }
}

impl From<&str> for ViewCount {
    fn from(s: &str) -> Self {
        ViewCount::Label(s.to_string())
    }
}

impl<'de> Deserialize<'de> for ViewCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => ViewCount::Count(n),
            other => ViewCount::Label(scalar_text(other)),
        })
    }
}

// Largest integer an f64 holds exactly.
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

impl fmt::Display for ViewCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `10.0` reads as `10`, like a browser would print it.
            ViewCount::Count(n) => match n.as_f64() {
                Some(x) if n.is_f64() && x.fract() == 0.0 && x.abs() <= MAX_EXACT_F64 => {
                    write!(f, "{}", x as i64)
                }
                _ => write!(f, "{n}"),
            },
            ViewCount::Label(s) => f.write_str(s),
        }
    }
}

/// Text of any JSON value: strings as-is, `null` as empty, everything else
/// as its JSON form.
fn scalar_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Value::deserialize(deserializer).map(scalar_text)
}

/// One entry of the `videos` array, exactly as the catalog names it.
///
/// No field can fail the whole payload: missing or `null` fields become
/// empty, numbers and booleans become their text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawVideo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub thumbnail_url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default)]
    pub view_count: ViewCount,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GamingVideosPayload {
    pub videos: Vec<RawVideo>,
}

/// View model for one gaming video card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub id: String,
    pub thumbnail_url: String,
    pub title: String,
    pub view_count: ViewCount,
}

impl From<RawVideo> for VideoSummary {
    fn from(raw: RawVideo) -> Self {
        Self {
            id: raw.id,
            thumbnail_url: raw.thumbnail_url,
            title: raw.title,
            view_count: raw.view_count,
        }
    }
}

impl GamingVideosPayload {
    pub fn into_summaries(self) -> Vec<VideoSummary> {
        self.videos.into_iter().map(VideoSummary::from).collect()
    }
}
