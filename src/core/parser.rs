use crate::core::{
    error::NavtexError,
    extractor::MessageExtractor,
    scanner::CoordinateScanner,
};
use crate::models::ParsedNavtex;

/// Main parsing orchestrator
///
/// # Pipeline Stages
/// 1. Isolate the single `ZCZC ... NNNN` message
/// 2. Scan the message for coordinates
///
/// Holds no mutable state, so one instance can serve every worker.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavtexParser {
    extractor: MessageExtractor,
    scanner: CoordinateScanner,
}

impl NavtexParser {
    pub fn new() -> Self {
        Self {
            extractor: MessageExtractor::new(),
            scanner: CoordinateScanner::new(),
        }
    }

    pub fn scanner(&self) -> &CoordinateScanner {
        &self.scanner
    }

    /// Parse a decoded NAVTEX capture
    ///
    /// # Arguments
    /// * `raw_text` - Full text of the uploaded file
    ///
    /// # Returns
    /// The message body and its coordinates, or the extraction error unchanged
    pub fn process(&self, raw_text: &str) -> Result<ParsedNavtex, NavtexError> {
        let valid_message = self.extractor.extract(raw_text)?;
        let coordinates = self.scanner.scan(&valid_message);

        Ok(ParsedNavtex {
            valid_message,
            coordinates,
        })
    }
}
