use serde::{Deserialize, Serialize};

/// Result of parsing one NAVTEX capture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedNavtex {
    /// Message body with sentinels removed
    #[serde(rename = "validMessage")]
    pub valid_message: String,
    /// Distinct coordinate substrings in grammar order
    pub coordinates: Vec<String>,
}
