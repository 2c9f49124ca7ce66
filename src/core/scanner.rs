use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// A single coordinate notation recognised in NAVTEX traffic
#[derive(Debug)]
pub struct CoordinateGrammar {
    name: &'static str,
    pattern: Regex,
}

impl CoordinateGrammar {
    fn compile(name: &'static str, pattern: &str) -> Self {
        // `(?s)` so separators may fall on a line break
        let pattern = Regex::new(&format!("(?s){}", pattern))
            .unwrap_or_else(|e| panic!("coordinate grammar `{}` is invalid: {}", name, e));
        Self { name, pattern }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// All non-overlapping matches, left to right
    pub fn find_all<'h>(&'h self, message: &'h str) -> impl Iterator<Item = &'h str> + 'h {
        self.pattern.find_iter(message).map(|m| m.as_str())
    }
}

/// Coordinate grammars in evaluation order.
///
/// The set and order are significant: an earlier grammar claims the first
/// output slot for any text a later grammar also matches. `[N|S]` and `[E|W]`
/// also accept a literal `|`, as the historic patterns do.
static GRAMMARS: Lazy<Vec<CoordinateGrammar>> = Lazy::new(|| {
    vec![
        // 58N 010E, 5 S 12 W
        CoordinateGrammar::compile(
            "degree_hemisphere",
            r"\d{1,2}\s?[N|S]\s?\d{1,3}\s?[E|W]",
        ),
        // 61 3757 N - 006 4906 W, 58-12,50N 010-30,501W
        CoordinateGrammar::compile(
            "extended_decimal",
            r"\d{1,2}-?\s?\d{2},?.?\d{2}\s?[N|S]\s?-?\s?\d{3}\s?-?\d{2},?.?\d{1}(\d{1})?\s?[W|E]",
        ),
        // 58-12,5N 010-30,5W
        CoordinateGrammar::compile(
            "dashed_decimal",
            r"\d{1,2}-\d{2},?.?\d{1}[N|S]\s\s?\d{3}-\d{2},?.?\d{1}(\d{1})?[W|E]",
        ),
        // 58-12.5N :10-30.5W
        CoordinateGrammar::compile(
            "colon_pair",
            r"\d{2}-\d{2}.\d{1}[N|S]\s:\d{2}-\d{2}.?\d{1}[W|E]",
        ),
        // 58-12N 010-30W
        CoordinateGrammar::compile(
            "dashed_minutes",
            r"\d{2}-\d{2}[N|S]\s\d{3}-\d{2}[W|E]",
        ),
    ]
});

/// Scans a message body against every coordinate grammar
///
/// Results keep grammar order first and match position second, and each
/// distinct coordinate text appears only once.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateScanner {
    grammars: &'static [CoordinateGrammar],
}

impl CoordinateScanner {
    pub fn new() -> Self {
        Self {
            grammars: GRAMMARS.as_slice(),
        }
    }

    /// Grammars in the order they are evaluated
    pub fn grammars(&self) -> &'static [CoordinateGrammar] {
        self.grammars
    }

    /// Collect every distinct coordinate substring in `message`
    ///
    /// Returns an empty list when nothing matches.
    pub fn scan(&self, message: &str) -> Vec<String> {
        let mut coordinates: Vec<String> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for grammar in self.grammars {
            for found in grammar.find_all(message) {
                if seen.insert(found) {
                    coordinates.push(found.to_string());
                }
            }
        }

        coordinates
    }
}

impl Default for CoordinateScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grammar(name: &str) -> &'static CoordinateGrammar {
        CoordinateScanner::new()
            .grammars()
            .iter()
            .find(|g| g.name() == name)
            .unwrap()
    }

    fn matches_of(name: &str, text: &str) -> Vec<String> {
        grammar(name).find_all(text).map(str::to_string).collect()
    }

    #[test]
    fn test_grammar_order() {
        let names: Vec<&str> = CoordinateScanner::new()
            .grammars()
            .iter()
            .map(|g| g.name())
            .collect();

        assert_eq!(
            names,
            vec![
                "degree_hemisphere",
                "extended_decimal",
                "dashed_decimal",
                "colon_pair",
                "dashed_minutes",
            ]
        );
    }

    #[test]
    fn test_patterns_span_lines() {
        for g in CoordinateScanner::new().grammars() {
            assert!(g.pattern().starts_with("(?s)"), "{} is single-line", g.name());
        }
    }

    #[test]
    fn test_degree_hemisphere() {
        assert_eq!(matches_of("degree_hemisphere", "AREA 58N 010E"), vec!["58N 010E"]);
        assert_eq!(matches_of("degree_hemisphere", "5 S 12 W"), vec!["5 S 12 W"]);
        assert!(matches_of("degree_hemisphere", "61 3757 N - 006 4906 W").is_empty());
    }

    #[test]
    fn test_extended_decimal() {
        assert_eq!(
            matches_of("extended_decimal", "IN 61 3757 N - 006 4906 W TODAY"),
            vec!["61 3757 N - 006 4906 W"]
        );
        assert_eq!(
            matches_of("extended_decimal", "58-12,50N 010-30,501W"),
            vec!["58-12,50N 010-30,501W"]
        );
    }

    #[test]
    fn test_dashed_decimal() {
        assert_eq!(
            matches_of("dashed_decimal", "58-12,5N 010-30,5W"),
            vec!["58-12,5N 010-30,5W"]
        );
        // degrees and minutes must be dash separated
        assert!(matches_of("dashed_decimal", "58 12,5N 010 30,5W").is_empty());
    }

    #[test]
    fn test_colon_pair() {
        assert_eq!(
            matches_of("colon_pair", "POSITION 58-12.5N :10-30.5W"),
            vec!["58-12.5N :10-30.5W"]
        );
    }

    #[test]
    fn test_dashed_minutes() {
        assert_eq!(
            matches_of("dashed_minutes", "58-12N 010-30W AND 59-01S 011-45E"),
            vec!["58-12N 010-30W", "59-01S 011-45E"]
        );
    }

    #[test]
    fn test_scan_no_coordinates() {
        let scanner = CoordinateScanner::new();
        assert!(scanner.scan("Valid Navtex Message").is_empty());
        assert!(scanner.scan("").is_empty());
    }

    #[test]
    fn test_scan_grammar_order_beats_position() {
        let scanner = CoordinateScanner::new();
        let coordinates = scanner.scan("61 3757 N - 006 4906 W THEN 58N 010E");

        assert_eq!(coordinates, vec!["58N 010E", "61 3757 N - 006 4906 W"]);
    }

    #[test]
    fn test_scan_deduplicates_within_grammar() {
        let scanner = CoordinateScanner::new();
        let coordinates = scanner.scan("58N 010E. REPEAT 58N 010E. ALSO 59N 011E");

        assert_eq!(coordinates, vec!["58N 010E", "59N 011E"]);
    }

    #[test]
    fn test_scan_deduplicates_across_grammars() {
        // Matched in full by both extended_decimal and dashed_decimal
        let text = "58-12,50N 010-30,50W";
        assert_eq!(matches_of("extended_decimal", text), vec![text]);
        assert_eq!(matches_of("dashed_decimal", text), vec![text]);

        let scanner = CoordinateScanner::new();
        assert_eq!(scanner.scan(text), vec![text]);
    }

    #[test]
    fn test_scan_across_line_break() {
        let scanner = CoordinateScanner::new();
        let coordinates = scanner.scan("WRECK IN 61 3757 N -\n006 4906 W");

        assert_eq!(coordinates, vec!["61 3757 N -\n006 4906 W"]);
    }
}
