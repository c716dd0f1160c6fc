//! Pattern selection for locating a function's parameter group.

use crate::core::{Dialect, Error, ExtractOptions, Result};
use regex::Regex;
use std::borrow::Cow;
use tracing::trace;

/// Build the regex that locates `name`'s parenthesized parameter group.
///
/// A custom pattern wins over the dialect template. It must contain exactly
/// one capture group, and a `{` or `}` that is not part of a `{n}`, `{n,}` or
/// `{n,m}` quantifier is matched literally. Otherwise the pattern is trusted.
/// The `regex` engine matches in linear time, so hostile patterns cannot
/// backtrack catastrophically.
/// Built-in templates escape `name`, so identifiers such as `$init` match
/// literally.
pub fn build_pattern(name: &str, options: &ExtractOptions) -> Result<Regex> {
    match options.custom_pattern.as_deref() {
        Some(pattern) => compile_custom(pattern),
        None => {
            let dialect = options.dialect.unwrap_or(Dialect::JavaScript);
            let source = dialect
                .default_template()
                .replace("{name}", &regex::escape(name));
            trace!(%dialect, pattern = %source, "built dialect pattern");
            Regex::new(&source).map_err(|e| Error::invalid_pattern(source, e))
        }
    }
}

fn compile_custom(pattern: &str) -> Result<Regex> {
    let normalized = escape_literal_braces(pattern);
    let regex = Regex::new(&normalized).map_err(|e| Error::invalid_pattern(pattern, e))?;

    // captures_len counts the implicit whole-match group
    match regex.captures_len() {
        2 => {}
        1 => return Err(Error::invalid_pattern(pattern, "pattern has no capture group")),
        n => {
            return Err(Error::invalid_pattern(
                pattern,
                format!("pattern has {} capture groups, expected exactly one", n - 1),
            ))
        }
    }

    trace!(pattern, normalized = %normalized, "using custom pattern");
    Ok(regex)
}

/// Escape braces that do not form a counted repetition.
///
/// Escapes and character classes are copied through untouched.
fn escape_literal_braces(pattern: &str) -> Cow<'_, str> {
    if !pattern.contains(['{', '}']) {
        return Cow::Borrowed(pattern);
    }

    let mut out = String::with_capacity(pattern.len() + 4);
    let mut rest = pattern;
    let mut in_class = false;

    while let Some(c) = rest.chars().next() {
        rest = &rest[c.len_utf8()..];
        match c {
            '\\' => {
                out.push(c);
                if let Some(next) = rest.chars().next() {
                    out.push(next);
                    rest = &rest[next.len_utf8()..];
                }
            }
            '[' if !in_class => {
                in_class = true;
                out.push(c);
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            '{' if !in_class => match quantifier_len(rest) {
                Some(len) => {
                    out.push(c);
                    out.push_str(&rest[..len]);
                    rest = &rest[len..];
                }
                None => out.push_str("\\{"),
            },
            '}' if !in_class => out.push_str("\\}"),
            _ => out.push(c),
        }
    }

    Cow::Owned(out)
}

/// Length of `n}`, `n,}` or `n,m}` at the start of `rest`, closing brace included
fn quantifier_len(rest: &str) -> Option<usize> {
    let digits = |s: &str| s.bytes().take_while(u8::is_ascii_digit).count();

    let min = digits(rest);
    if min == 0 {
        return None;
    }
    let mut len = min;
    if rest[len..].starts_with(',') {
        len += 1;
        len += digits(&rest[len..]);
    }
    rest[len..].starts_with('}').then_some(len + 1)
}

/// Text of group 1 at the first match, if any.
///
/// A match whose first group did not participate yields `None`, same as no
/// match at all.
pub fn capture_param_group<'a>(regex: &Regex, contents: &'a str) -> Option<&'a str> {
    regex
        .captures(contents)
        .and_then(|caps| caps.get(1))
        .map(|group| group.as_str())
}
