//! Tokenizer turning raw command-line tokens into flags and positionals.
//!
//! Follows the conventions generators built on minimist expect:
//!
//! - `--key=value` sets `key` to `value`
//! - `--key value` takes the next token when it does not start with `-`
//! - `--key` with nothing usable after it is `"true"`
//! - `--no-key` is `"false"`
//! - `-abc` sets `a`, `b` and `c`; the last letter may take the next token
//! - `-n=blog` and `-p3000` bind the rest of the token to the letter
//! - `--` ends option parsing
//!
//! Repeated keys keep the last value. Values are never coerced.

use super::bag::ParameterBag;

/// Tokens split into flags and positional arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    /// Flags by name, all values present.
    pub flags: ParameterBag,
    /// Non-flag tokens in their original order.
    pub positionals: Vec<String>,
}

/// Split command-line tokens into flags and positionals.
pub fn parse_args<S: AsRef<str>>(tokens: &[S]) -> ParsedArgs {
    let mut parsed = ParsedArgs::default();
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i].as_ref();

        if token == "--" {
            parsed
                .positionals
                .extend(tokens[i + 1..].iter().map(|t| t.as_ref().to_string()));
            break;
        }

        if let Some(long) = token.strip_prefix("--") {
            if let Some((key, value)) = long.split_once('=') {
                parsed.flags.set(key, value);
            } else if let Some(negated) = long.strip_prefix("no-") {
                parsed.flags.set(negated, "false");
            } else if let Some(value) = next_value(tokens, i) {
                parsed.flags.set(long, value);
                i += 1;
            } else {
                parsed.flags.set(long, "true");
            }
        } else if let Some(short) = token.strip_prefix('-').filter(|s| !s.is_empty()) {
            if let Some(last) = parse_short_cluster(short, &mut parsed.flags) {
                if let Some(value) = next_value(tokens, i) {
                    parsed.flags.set(last.to_string(), value);
                    i += 1;
                } else {
                    parsed.flags.set(last.to_string(), "true");
                }
            }
        } else {
            parsed.positionals.push(token.to_string());
        }

        i += 1;
    }

    parsed
}

/// Set the letters of a short cluster such as `-abc`.
///
/// A letter followed by `=` or a number takes the rest of the token as its
/// value (`-n=blog`, `-p3000`). Otherwise every letter but the last is
/// `"true"`, and the last letter is returned so it can take the next token.
fn parse_short_cluster(short: &str, flags: &mut ParameterBag) -> Option<char> {
    for (offset, letter) in short.char_indices() {
        let rest = &short[offset + letter.len_utf8()..];
        if rest.is_empty() {
            return Some(letter);
        }
        if letter.is_ascii_alphabetic() {
            if let Some(value) = rest.strip_prefix('=') {
                flags.set(letter.to_string(), value);
                return None;
            }
            if is_number(rest) {
                flags.set(letter.to_string(), rest);
                return None;
            }
        }
        flags.set(letter.to_string(), "true");
    }
    None
}

/// Whether `s` reads as a plain decimal number, e.g. `3000`, `-1` or `0.5`.
fn is_number(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    digits.starts_with(|c: char| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.matches('.').count() <= 1
}

/// The token after `index`, if it can serve as a flag value.
fn next_value<S: AsRef<str>>(tokens: &[S], index: usize) -> Option<&str> {
    tokens
        .get(index + 1)
        .map(AsRef::as_ref)
        .filter(|next| !next.starts_with('-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_tokens_are_positionals() {
        let parsed = parse_args(&["generate", "package", "blog"]);
        assert!(parsed.flags.is_empty());
        assert_eq!(parsed.positionals, vec!["generate", "package", "blog"]);
    }

    #[test]
    fn long_flag_with_equals() {
        let parsed = parse_args(&["create", "myApp", "--style=less"]);
        assert_eq!(parsed.flags.get("style"), Some("less"));
        assert_eq!(parsed.positionals, vec!["create", "myApp"]);
    }

    #[test]
    fn long_flag_takes_following_value() {
        let parsed = parse_args(&["create", "myApp", "--style", "scss"]);
        assert_eq!(parsed.flags.get("style"), Some("scss"));
        assert_eq!(parsed.positionals, vec!["create", "myApp"]);
    }

    #[test]
    fn trailing_long_flag_is_true() {
        let parsed = parse_args(&["generate", "package", "blog", "--force"]);
        assert_eq!(parsed.flags.get("force"), Some("true"));
        assert_eq!(parsed.positionals.len(), 3);
    }

    #[test]
    fn long_flag_before_another_flag_is_true() {
        let parsed = parse_args(&["--force", "--dry", "x"]);
        assert_eq!(parsed.flags.get("force"), Some("true"));
        assert_eq!(parsed.flags.get("dry"), Some("x"));
    }

    #[test]
    fn negated_flag_is_false() {
        let parsed = parse_args(&["create", "app", "--no-install"]);
        assert_eq!(parsed.flags.get("install"), Some("false"));
    }

    #[test]
    fn short_cluster_sets_each_letter() {
        let parsed = parse_args(&["-abc"]);
        assert_eq!(parsed.flags.get("a"), Some("true"));
        assert_eq!(parsed.flags.get("b"), Some("true"));
        assert_eq!(parsed.flags.get("c"), Some("true"));
    }

    #[test]
    fn last_short_letter_takes_value() {
        let parsed = parse_args(&["-fn", "blog", "list"]);
        assert_eq!(parsed.flags.get("f"), Some("true"));
        assert_eq!(parsed.flags.get("n"), Some("blog"));
        assert_eq!(parsed.positionals, vec!["list"]);
    }

    #[test]
    fn short_flag_with_equals_binds_value() {
        let parsed = parse_args(&["create", "myApp", "-n=blog"]);
        assert_eq!(parsed.flags.len(), 1);
        assert_eq!(parsed.flags.get("n"), Some("blog"));
        assert_eq!(parsed.positionals, vec!["create", "myApp"]);
    }

    #[test]
    fn short_flag_with_attached_number_binds_value() {
        let parsed = parse_args(&["-p3000", "list"]);
        assert_eq!(parsed.flags.len(), 1);
        assert_eq!(parsed.flags.get("p"), Some("3000"));
        assert_eq!(parsed.positionals, vec!["list"]);
    }

    #[test]
    fn cluster_letters_before_attached_value_are_true() {
        let parsed = parse_args(&["-fp=8080"]);
        assert_eq!(parsed.flags.get("f"), Some("true"));
        assert_eq!(parsed.flags.get("p"), Some("8080"));
        assert_eq!(parsed.flags.len(), 2);
    }

    #[test]
    fn double_dash_ends_option_parsing() {
        let parsed = parse_args(&["remove", "--", "--weird", "-x"]);
        assert!(parsed.flags.is_empty());
        assert_eq!(parsed.positionals, vec!["remove", "--weird", "-x"]);
    }

    #[test]
    fn single_dash_is_positional() {
        let parsed = parse_args(&["-"]);
        assert_eq!(parsed.positionals, vec!["-"]);
    }

    #[test]
    fn repeated_key_keeps_last_value() {
        let parsed = parse_args(&["--style=less", "--style=scss"]);
        assert_eq!(parsed.flags.get("style"), Some("scss"));
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_args::<&str>(&[]), ParsedArgs::default());
    }
}
