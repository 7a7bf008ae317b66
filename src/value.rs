use serde::Deserialize;
use serde_json::Value;

/// Whether a field value counts as empty.
///
/// Blank covers the absence-like shapes only: null, the empty string, and
/// empty collections. Numbers and booleans are never blank, so a stored `0`
/// or `false` survives normalization instead of vanishing.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(_) | Value::Number(_) => false,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Text rendering used when a value is written into markup.
///
/// Strings pass through without quotes; everything else renders as compact
/// JSON, so `42` becomes `"42"`.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Typed view of an image field mapping.
///
/// Providers attach more keys than these (captions, size variants, author);
/// unknown keys are ignored and missing ones default, but a present key of
/// the wrong type fails the whole view.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImageField {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl ImageField {
    /// Deserialize a raw field value; `None` unless it is mapping-shaped.
    pub fn from_value(value: &Value) -> Option<Self> {
        // Derived Deserialize would also accept an array positionally.
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}
