// Token rules are recognized one line at a time, with the grammar written as
// <NAME> : <value> ;
// where NAME is uppercase (lowercase names are parser rules, not tokens).
// Rules spanning several lines are not recognized.

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

lazy_static! {
    static ref TOKEN_RULE: Regex =
        Regex::new(r"^(?P<name>[A-Z][A-Z0-9_]*)\s*:\s*(?P<value>.+?);\s*$")
            .expect("token rule pattern is valid");
}

// every line terminator, a "\r\n" pair leaves an empty line between its halves
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenRule {
    pub name: String,
    // right-hand side as written, up to the terminating ';'
    pub value: String,
}

/// Token rules in the order they are declared in the grammar. The position of
/// a rule is its id in the generated tables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    pub rules: Vec<TokenRule>,
    /// Non-empty, non-comment lines which did not look like a token rule.
    pub skipped: usize,
}

impl TokenList {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenRule> {
        self.rules.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|x| x.name.as_str())
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a TokenRule;
    type IntoIter = std::slice::Iter<'a, TokenRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

pub fn parse_token_rule(line: &str) -> Option<TokenRule> {
    let captures = TOKEN_RULE.captures(line)?;
    Some(TokenRule {
        name: captures["name"].to_string(),
        value: captures["value"].to_string(),
    })
}

pub fn extract(grammar: &str) -> TokenList {
    let mut token_list = TokenList::default();
    for line in grammar.split(LINE_BREAKS) {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        match parse_token_rule(line) {
            Some(rule) => token_list.rules.push(rule),
            None => {
                trace!("not a token rule: {}", line);
                token_list.skipped += 1;
            }
        }
    }

    debug!(
        "extracted {} token rules, skipped {} lines",
        token_list.len(),
        token_list.skipped
    );
    token_list
}
