//! # Tag Parsing
//!
//! A tag is the per-field rule string:
//!
//! ```text
//! tag    := clause (";" clause)*
//! clause := ruleName ":" ruleArg
//! ```
//!
//! Parsing splits on `;` and then on `:`, flattening every piece into one
//! ordered token sequence that is consumed two at a time as
//! `(rule_name, rule_arg)`. No rule-name legality check happens here; that
//! belongs to the registry at dispatch time.

/// Splits a raw tag into its flat token sequence.
///
/// The empty tag yields no tokens. Any other input follows the plain split
/// semantics, so `"len"` yields `["len"]` and `"len:5;"` yields
/// `["len", "5", ""]`.
///
/// ```
/// use tagcheck_core::parse_tag;
///
/// assert_eq!(parse_tag("len:4;in:a,b,c"), ["len", "4", "in", "a,b,c"]);
/// assert!(parse_tag("").is_empty());
/// ```
pub fn parse_tag(tag: &str) -> Vec<&str> {
    if tag.is_empty() {
        return Vec::new();
    }
    tag.split(';').flat_map(|clause| clause.split(':')).collect()
}

/// A parsed tag, viewed as `(rule_name, rule_arg)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTokens<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> RuleTokens<'a> {
    /// Parses a raw tag. See [`parse_tag`].
    pub fn parse(tag: &'a str) -> Self {
        Self {
            tokens: parse_tag(tag),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns true when every rule name has an argument.
    pub fn is_balanced(&self) -> bool {
        self.tokens.len() % 2 == 0
    }

    /// Iterates over complete `(rule_name, rule_arg)` pairs in tag order.
    ///
    /// A trailing rule name without an argument is not yielded; see
    /// [`RuleTokens::dangling`].
    pub fn pairs(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.tokens.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Returns the trailing token left over by an unbalanced tag.
    pub fn dangling(&self) -> Option<&'a str> {
        self.tokens.chunks_exact(2).remainder().first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_clauses() {
        // Commas belong to the argument, so `in` keeps its list intact.
        assert_eq!(
            parse_tag("len:4;in:a,b,c"),
            vec!["len", "4", "in", "a,b,c"]
        );
    }

    #[test]
    fn test_parse_single_clause() {
        assert_eq!(parse_tag("min:3"), vec!["min", "3"]);
    }

    #[test]
    fn test_parse_empty_tag_has_no_tokens() {
        assert!(parse_tag("").is_empty());
        assert!(RuleTokens::parse("").is_balanced());
    }

    #[test]
    fn test_parse_keeps_empty_pieces() {
        assert_eq!(parse_tag(";"), vec!["", ""]);
        assert_eq!(parse_tag("len:5;"), vec!["len", "5", ""]);
        assert_eq!(parse_tag("len:"), vec!["len", ""]);
    }

    #[test]
    fn test_parse_extra_colons_flatten() {
        assert_eq!(parse_tag("in:a:b"), vec!["in", "a", "b"]);
    }

    #[test]
    fn test_pairs_and_balance() {
        let tokens = RuleTokens::parse("min:1;max:9");
        assert!(tokens.is_balanced());
        assert_eq!(tokens.len(), 4);
        let pairs: Vec<_> = tokens.pairs().collect();
        assert_eq!(pairs, vec![("min", "1"), ("max", "9")]);
        assert_eq!(tokens.dangling(), None);
    }

    #[test]
    fn test_unbalanced_tag_reports_dangling() {
        let tokens = RuleTokens::parse("min:1;max");
        assert!(!tokens.is_balanced());
        assert_eq!(tokens.pairs().count(), 1);
        assert_eq!(tokens.dangling(), Some("max"));
    }
}
