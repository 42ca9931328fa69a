//! Attribute expression handling
//!
//! Upstream stores an audience definition as a single string of clauses
//! conjoined with the token `AND`, e.g. `Age 18-34 AND Interest: Running`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Separator token between clauses
pub const CLAUSE_SEPARATOR: &str = "AND";

/// Standalone `AND` token; words such as `BRAND` or `ANDROID` never match
static CLAUSE_SEPARATOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bAND\b").expect("Invalid regex pattern for clause separator"));

/// Split an attribute expression into its trimmed clauses.
///
/// An expression without a separator yields exactly one clause.
pub fn split_attribute_clauses(expression: &str) -> Vec<String> {
    CLAUSE_SEPARATOR_REGEX
        .split(expression)
        .map(|clause| clause.trim().to_string())
        .collect()
}

/// Lines for the attribute page: each clause followed by an `AND` line,
/// except the last.
pub fn attribute_lines(expression: &str) -> Vec<String> {
    let clauses = split_attribute_clauses(expression);
    let mut lines = Vec::with_capacity(clauses.len() * 2);

    for (i, clause) in clauses.into_iter().enumerate() {
        if i > 0 {
            lines.push(CLAUSE_SEPARATOR.to_string());
        }
        lines.push(clause);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_three_clauses() {
        assert_eq!(
            split_attribute_clauses("A AND B AND C"),
            vec!["A", "B", "C"]
        );
    }

    #[test]
    fn test_split_without_separator() {
        assert_eq!(split_attribute_clauses("Owns Car"), vec!["Owns Car"]);
        assert_eq!(split_attribute_clauses(""), vec![""]);
    }

    #[test]
    fn test_split_keeps_words_containing_and() {
        let clauses = split_attribute_clauses("BRAND: Nike AND Device: ANDROID");
        assert_eq!(clauses, vec!["BRAND: Nike", "Device: ANDROID"]);
    }

    #[test]
    fn test_split_is_case_sensitive() {
        assert_eq!(
            split_attribute_clauses("Salt and Pepper"),
            vec!["Salt and Pepper"]
        );
    }

    #[test]
    fn test_attribute_lines_interleave_separator() {
        assert_eq!(
            attribute_lines("Parent: Yes AND Intent: Travel"),
            vec!["Parent: Yes", "AND", "Intent: Travel"]
        );
        assert_eq!(attribute_lines("Single"), vec!["Single"]);
    }
}
