use std::collections::HashSet;

/// Case-insensitive set of tokens removed from raw input before analysis.
///
/// Loaded once at startup from configuration; never mutated at runtime.
#[derive(Debug, Clone, Default)]
pub struct Whitelist {
    tokens: HashSet<String>,
}

impl Whitelist {
    /// Builds a whitelist, lowercasing every token so membership checks are
    /// case-insensitive.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|token| token.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Returns true when `token` is whitelisted, ignoring case.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(&token.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}

/// Removes whitelisted tokens and collapses whitespace to single spaces.
///
/// Splits `raw` on any Unicode whitespace, drops tokens present in
/// `whitelist`, and rejoins with single ASCII spaces. The result has no
/// leading or trailing whitespace. An all-whitelisted input reduces to an
/// empty string, which downstream chunking handles as zero chunks.
pub fn normalize(raw: &str, whitelist: &Whitelist) -> String {
    let mut normalized = String::with_capacity(raw.len());
    for token in raw.split_whitespace() {
        if whitelist.contains(token) {
            continue;
        }
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(token);
    }
    normalized
}
