//! Escaping for strings embedded in script string literals.

/// Escape a string for embedding inside a double-quoted script literal.
///
/// Only `"` is escaped. Paths and piped document text pass through this one
/// function before they reach any command body.
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_quotes_plain() {
        assert_eq!(escape_quotes("hello"), "hello");
        assert_eq!(escape_quotes("/tmp/a b/c.txt"), "/tmp/a b/c.txt");
    }

    #[test]
    fn test_escape_quotes_embedded() {
        assert_eq!(escape_quotes(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_quotes(r#"/tmp/"quoted".txt"#), r#"/tmp/\"quoted\".txt"#);
    }

    #[test]
    fn test_escape_quotes_leaves_other_characters() {
        assert_eq!(escape_quotes("a\\b\nc\td"), "a\\b\nc\td");
    }
}
