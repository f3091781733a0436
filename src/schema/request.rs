use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::generator::{PoemRequest, Style};

/// Body of `POST /.netlify/functions/poem`.
///
/// Every field is optional. Only the labels and `style` reach the
/// generator; emojis, hints and `tone` are accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationRequest {
    pub mood_emoji: Option<String>,
    pub mood_label: Option<String>,
    pub mood_hint: Option<String>,
    pub food_emoji: Option<String>,
    pub food_label: Option<String>,
    pub food_hint: Option<String>,
    pub style: Option<String>,
    pub tone: Option<String>,
}

impl GenerationRequest {
    /// Read a raw request body.
    ///
    /// An empty body counts as `{}`. The only failure is text that is not
    /// JSON at all. Any JSON value is accepted: fields are read only when
    /// they are strings, and anything else (wrong types, arrays, scalars,
    /// `null`) is treated as absent.
    pub fn from_body(body: &[u8]) -> Result<GenerationRequest, serde_json::Error> {
        if body.is_empty() {
            return Ok(GenerationRequest::default());
        }
        let value: Value = serde_json::from_slice(body)?;
        Ok(Self::from_value(&value))
    }

    fn from_value(value: &Value) -> GenerationRequest {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        GenerationRequest {
            mood_emoji: text("moodEmoji"),
            mood_label: text("moodLabel"),
            mood_hint: text("moodHint"),
            food_emoji: text("foodEmoji"),
            food_label: text("foodLabel"),
            food_hint: text("foodHint"),
            style: text("style"),
            tone: text("tone"),
        }
    }

    pub fn to_poem_request(&self) -> PoemRequest {
        PoemRequest::new(
            self.mood_label.as_deref().unwrap_or_default(),
            self.food_label.as_deref().unwrap_or_default(),
            Style::parse(self.style.as_deref()),
        )
    }
}

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub text: String,
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
