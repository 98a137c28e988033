//! Token substitution engine
//!
//! Rewrites `:token` shorthands in a commit message using a [`TokenMap`].
//! Substitution is a pure function of the map and the message: it performs no
//! I/O, keeps no state between calls and never fails. Tokens without a mapping
//! are passed through untouched.
//!
//! Two tokenization policies are available:
//!
//! - [`TokenPolicy::Scan`] (default) scans the message in place and preserves
//!   every byte that is not a recognized token, including line breaks.
//! - [`TokenPolicy::Words`] splits the message on whitespace and rejoins the
//!   words with single spaces, matching the historical whitespace-splitting
//!   behaviour.

use serde::Deserialize;

use crate::config::TokenMap;

mod scan;
mod words;

/// How a message is broken into candidate tokens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TokenPolicy {
    /// Replace `:name:` anywhere and `:name` at the start of a word, keeping
    /// all surrounding text intact
    #[default]
    Scan,
    /// Split on whitespace, replace words starting with `:`, rejoin with single spaces
    Words,
}

/// Substitute tokens using the default [`TokenPolicy::Scan`] policy.
pub fn substitute(tokens: &TokenMap, message: &str) -> String {
    substitute_with(TokenPolicy::default(), tokens, message)
}

/// Substitute tokens using the given policy.
pub fn substitute_with(policy: TokenPolicy, tokens: &TokenMap, message: &str) -> String {
    match policy {
        TokenPolicy::Scan => scan::substitute(tokens, message),
        TokenPolicy::Words => words::substitute(tokens, message),
    }
}

#[cfg(test)]
pub(crate) fn sample_tokens() -> TokenMap {
    [
        ("init", ":tada:"),
        ("bugfix", ":bug:"),
        ("crucial", ":ambulance:"),
        ("docs", ":books:"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
