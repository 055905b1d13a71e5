//! Form Configuration

use serde::Deserialize;

/// Branding and storage settings; every field has a default
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Storage key of the draft snapshot
    pub storage_key: String,
    /// Title in the navigation bar
    pub title: String,
    /// Page heading above the form
    pub heading: String,
    /// Logo image source
    pub logo_src: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            storage_key: "dynamicFormQuestions".to_string(),
            title: "QTODO".to_string(),
            heading: "Dynamic Form".to_string(),
            logo_src: "/image.jpg".to_string(),
        }
    }
}

impl FormConfig {
    /// Parse overrides; missing fields keep their defaults
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
