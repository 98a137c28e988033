//! Whitespace-split substitution
//!
//! Every whitespace-separated word starting with `:` is looked up without its
//! leading colon and any trailing colon. Words are rejoined with a single
//! space, so runs of whitespace and line breaks collapse.

use crate::config::TokenMap;

pub(super) fn substitute(tokens: &TokenMap, message: &str) -> String {
    message
        .split_whitespace()
        .map(|word| {
            word.strip_prefix(':')
                .map(|name| name.strip_suffix(':').unwrap_or(name))
                .and_then(|name| tokens.get(name))
                .map_or(word, String::as_str)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
