use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::NavtexError;

/// Start-of-message sentinel
pub const START_SENTINEL: &str = "ZCZC";

/// End-of-message sentinel
pub const END_SENTINEL: &str = "NNNN";

// `(?s)` lets the span cross line breaks
static MESSAGE_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)ZCZC.*?NNNN").expect("message span pattern is valid")
});

/// Isolates the single `ZCZC ... NNNN` message inside a raw NAVTEX capture
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageExtractor;

impl MessageExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the message body from raw text
    ///
    /// Exactly one delimited span must be present. Every literal occurrence of
    /// either sentinel inside that span is removed and the result is trimmed.
    ///
    /// # Errors
    /// [`NavtexError::InvalidFormat`] when zero or several spans are found.
    pub fn extract(&self, raw_text: &str) -> Result<String, NavtexError> {
        let spans: Vec<&str> = MESSAGE_SPAN
            .find_iter(raw_text)
            .map(|m| m.as_str())
            .collect();

        let span = match spans.as_slice() {
            [span] => *span,
            [] => {
                return Err(NavtexError::InvalidFormat(
                    "no delimited message found".to_string(),
                ))
            }
            many => {
                return Err(NavtexError::InvalidFormat(format!(
                    "multiple delimited messages found ({})",
                    many.len()
                )))
            }
        };

        let message = span
            .replace(START_SENTINEL, "")
            .replace(END_SENTINEL, "");

        Ok(message.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_line() {
        let extractor = MessageExtractor::new();
        let message = extractor.extract("ZCZC Valid Navtex Message NNNN").unwrap();
        assert_eq!(message, "Valid Navtex Message");
    }

    #[test]
    fn test_extract_ignores_surrounding_noise() {
        let extractor = MessageExtractor::new();
        let raw = "noise before\r\nZCZC EA12\nGALE WARNING\nNNNN\r\ntrailing noise";

        let message = extractor.extract(raw).unwrap();
        assert_eq!(message, "EA12\nGALE WARNING");
    }

    #[test]
    fn test_extract_spans_multiple_lines() {
        let extractor = MessageExtractor::new();
        let raw = "ZCZC\nLINE ONE\nLINE TWO\n\nNNNN";

        assert_eq!(extractor.extract(raw).unwrap(), "LINE ONE\nLINE TWO");
    }

    #[test]
    fn test_extract_strips_embedded_start_sentinel() {
        let extractor = MessageExtractor::new();
        let message = extractor.extract("ZCZC first ZCZC second NNNN").unwrap();
        assert_eq!(message, "first  second");
    }

    #[test]
    fn test_extract_missing_span() {
        let extractor = MessageExtractor::new();

        let err = extractor.extract("no sentinels at all").unwrap_err();
        assert_eq!(err.reason(), "no delimited message found");

        // An end sentinel before the start sentinel is not a span
        assert!(extractor.extract("NNNN backwards ZCZC").is_err());
        assert!(extractor.extract("ZCZC never closed").is_err());
    }

    #[test]
    fn test_extract_multiple_spans() {
        let extractor = MessageExtractor::new();
        let raw = "ZCZC first NNNN\nZCZC second NNNN";

        let err = extractor.extract(raw).unwrap_err();
        assert_eq!(
            err,
            NavtexError::InvalidFormat("multiple delimited messages found (2)".to_string())
        );
    }

    #[test]
    fn test_extract_empty_body() {
        let extractor = MessageExtractor::new();
        assert_eq!(extractor.extract("ZCZCNNNN").unwrap(), "");
        assert_eq!(extractor.extract("ZCZC \n\t NNNN").unwrap(), "");
    }
}
