//! In-place token scanning
//!
//! A token is a colon followed by a name and an optional closing colon. The
//! closed form `:name:` is recognized anywhere and its name may be any run of
//! characters other than colons and whitespace. The open form `:name` is
//! restricted to word characters and only recognized when the colon starts a
//! word, so `see:docs` or `12:30` are left alone. The replacement is never
//! rescanned.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::TokenMap;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":(?:([^:\s]+):|([A-Za-z0-9_+\-]+))").expect("token pattern is valid")
});

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-')
}

pub(super) fn substitute(tokens: &TokenMap, message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    let mut pos = 0;

    while let Some(caps) = TOKEN.captures_at(message, pos) {
        let Some(whole) = caps.get(0) else { break };
        out.push_str(&message[pos..whole.start()]);

        if let Some(name) = caps.get(1) {
            match tokens.get(name.as_str()) {
                Some(replacement) => {
                    out.push_str(replacement);
                    pos = whole.end();
                }
                // The closing colon may open the next token
                None => {
                    out.push_str(&message[whole.start()..name.end()]);
                    pos = name.end();
                }
            }
        } else {
            let at_word_start = message[..whole.start()]
                .chars()
                .next_back()
                .is_none_or(|c| !is_name_char(c));
            let replacement = caps
                .get(2)
                .and_then(|name| tokens.get(name.as_str()))
                .filter(|_| at_word_start);

            out.push_str(replacement.map_or(whole.as_str(), String::as_str));
            pos = whole.end();
        }
    }

    out.push_str(&message[pos..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::substitution::sample_tokens;

    #[test]
    fn test_message_without_keywords_is_unchanged() {
        let msg = "Hello world I am a message with no keywords";
        assert_eq!(substitute(&sample_tokens(), msg), msg);
    }

    #[test]
    fn test_open_keywords_are_replaced() {
        let msg = ":init I am a message with keywords! :bugfix :crucial :docs";
        assert_eq!(
            substitute(&sample_tokens(), msg),
            ":tada: I am a message with keywords! :bug: :ambulance: :books:"
        );
    }

    #[test]
    fn test_closed_keyword_yields_exact_value() {
        let tokens = sample_tokens();
        for (key, value) in &tokens {
            assert_eq!(&substitute(&tokens, &format!(":{key}:")), value);
        }
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        let tokens = sample_tokens();
        assert_eq!(substitute(&tokens, ":nope:"), ":nope:");
        assert_eq!(substitute(&tokens, ":nope"), ":nope");
        assert_eq!(substitute(&tokens, ":Init: is case sensitive"), ":Init: is case sensitive");
    }

    #[test]
    fn test_multiline_message_keeps_line_breaks() {
        let msg = "
:init I am a message with keywords! :bugfix :crucial :docs
:init I am a message with keywords! :bugfix :crucial :docs
:init I am a message with keywords! :bugfix
:crucial :docs
";
        let expected = "
:tada: I am a message with keywords! :bug: :ambulance: :books:
:tada: I am a message with keywords! :bug: :ambulance: :books:
:tada: I am a message with keywords! :bug:
:ambulance: :books:
";
        assert_eq!(substitute(&sample_tokens(), msg), expected);
    }

    #[test]
    fn test_open_form_requires_word_start() {
        let tokens = sample_tokens();
        assert_eq!(substitute(&tokens, "see:docs"), "see:docs");
        assert_eq!(substitute(&tokens, "(:docs)"), "(:books:)");
        assert_eq!(substitute(&tokens, "see:docs: now"), "see:books: now");
    }

    #[test]
    fn test_punctuation_ends_a_token() {
        let tokens = sample_tokens();
        assert_eq!(substitute(&tokens, ":bugfix! done"), ":bug:! done");
        assert_eq!(substitute(&tokens, "times like 12:30"), "times like 12:30");
        assert_eq!(substitute(&tokens, "https://example.com"), "https://example.com");
    }

    #[test]
    fn test_replacement_is_not_rescanned() {
        let mut tokens = sample_tokens();
        tokens.insert("tada".into(), "LOOP".into());
        assert_eq!(substitute(&tokens, ":init:"), ":tada:");
    }

    #[test]
    fn test_adjacent_tokens() {
        let tokens = sample_tokens();
        assert_eq!(substitute(&tokens, ":bugfix::docs:"), ":bug::books:");
    }

    #[test]
    fn test_closed_form_accepts_any_key_without_colons() {
        let tokens: TokenMap = [("fix.ci", "X"), ("über", "U"), ("🎉", "P"), ("a/b", "S")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        assert_eq!(substitute(&tokens, ":fix.ci:"), "X");
        assert_eq!(substitute(&tokens, ":über:"), "U");
        assert_eq!(substitute(&tokens, ":🎉: party"), "P party");
        assert_eq!(substitute(&tokens, "path :a/b: done"), "path S done");
        assert_eq!(substitute(&tokens, ":fix.ci"), ":fix.ci");
    }

    #[test]
    fn test_unknown_closed_token_does_not_swallow_next_token() {
        let tokens = sample_tokens();
        assert_eq!(substitute(&tokens, ":nope:docs:"), ":nope:books:");
        assert_eq!(substitute(&tokens, "ratio 1:2:init:"), "ratio 1:2:tada:");
    }

    #[test]
    fn test_utf8_passthrough() {
        let tokens = sample_tokens();
        assert_eq!(substitute(&tokens, "héllo :docs wörld ✨"), "héllo :books: wörld ✨");
    }
}
