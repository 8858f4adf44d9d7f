// Keyword classification over a TokenList.
//
// The keyword count and the keyword lexeme table use different filters: the
// count looks only at names, the lexeme table looks at values. The two are not
// guaranteed to agree and generated constants depend on both staying as is.

use crate::token_def::{TokenList, TokenRule};

/// Variable-lexeme token classes, never treated as keywords.
pub const STRUCTURAL_NAMES: [&str; 5] = ["NUMBER", "STRING", "ID", "COMMENT", "WS"];

const PATTERN_METACHARS: &[char] = &['[', ']', '(', ')', '{', '}', '+', '*', '?', '\\'];

pub fn is_structural(name: &str) -> bool {
    STRUCTURAL_NAMES.contains(&name)
}

pub fn is_keyword_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_uppercase()) && !is_structural(name)
}

pub fn keyword_count(tokens: &TokenList) -> usize {
    tokens.names().filter(|name| is_keyword_name(name)).count()
}

/// Literal spelling of a rule if it is a fixed keyword, e.g. `'if'` -> `if`.
pub fn keyword_lexeme(rule: &TokenRule) -> Option<&str> {
    if is_structural(&rule.name) || !rule.value.starts_with('\'') {
        return None;
    }

    let literal = rule.value.trim_end().trim_matches('\'');
    if literal.is_empty() || literal.contains(PATTERN_METACHARS) {
        return None;
    }
    Some(literal)
}

pub fn keyword_lexemes(tokens: &TokenList) -> Vec<&str> {
    tokens.iter().filter_map(keyword_lexeme).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str, value: &str) -> TokenRule {
        TokenRule {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_keyword_names() {
        assert!(is_keyword_name("IF"));
        assert!(!is_keyword_name("KW_IF"));
        assert!(!is_keyword_name("INT32"));
        for name in STRUCTURAL_NAMES {
            assert!(!is_keyword_name(name));
        }
    }

    #[test]
    fn test_keyword_lexeme() {
        assert_eq!(keyword_lexeme(&rule("KW_IF", "'if' ")), Some("if"));
        assert_eq!(keyword_lexeme(&rule("ARROW", "'->'")), Some("->"));
        assert_eq!(keyword_lexeme(&rule("LBRACE", "'{' ")), None);
        assert_eq!(keyword_lexeme(&rule("PLUS", "'+' ")), None);
        assert_eq!(keyword_lexeme(&rule("BACKSLASH", "'\\\\' ")), None);
        assert_eq!(keyword_lexeme(&rule("EMPTY", "'' ")), None);
        assert_eq!(keyword_lexeme(&rule("DIGITS", "[0-9]+ ")), None);
        assert_eq!(keyword_lexeme(&rule("ID", "'id' ")), None);
    }
}
