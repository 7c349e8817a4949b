//! Environment variable expansion for user-supplied paths.
//!
//! Recognises `%NAME%`, `$NAME` and `${NAME}`. References to variables that
//! are not defined are kept verbatim, so a literal `%` or `$` in a directory
//! name survives expansion.

use std::env;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ExpandError {
    #[error("unterminated '${{' at byte {0}")]
    Unterminated(usize),

    #[error("empty variable name at byte {0}")]
    EmptyName(usize),
}

/// Expand references using the process environment.
pub(crate) fn expand_env_vars(raw: &str) -> Result<String, ExpandError> {
    expand_with(raw, |name| env::var(name).ok())
}

/// Expand references using `lookup` to resolve variable names.
pub(crate) fn expand_with<F>(raw: &str, lookup: F) -> Result<String, ExpandError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    let mut offset = 0;

    while let Some(pos) = rest.find(['%', '$']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        let consumed = if tail.starts_with('%') {
            expand_percent(tail, &lookup, &mut out)
        } else {
            expand_dollar(tail, offset + pos, &lookup, &mut out)?
        };

        offset += pos + consumed;
        rest = &tail[consumed..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Handle a `%`-prefixed tail. Returns the number of bytes consumed.
fn expand_percent<F>(tail: &str, lookup: &F, out: &mut String) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    let Some(close) = tail[1..].find('%').map(|i| i + 1) else {
        out.push_str(tail);
        return tail.len();
    };

    let name = &tail[1..close];
    match (!name.is_empty()).then(|| lookup(name)).flatten() {
        Some(value) => {
            out.push_str(&value);
            close + 1
        }
        None => {
            // The closing '%' may open the next reference.
            out.push('%');
            out.push_str(name);
            close
        }
    }
}

/// Handle a `$`-prefixed tail. Returns the number of bytes consumed.
fn expand_dollar<F>(
    tail: &str,
    at: usize,
    lookup: &F,
    out: &mut String,
) -> Result<usize, ExpandError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(braced) = tail.strip_prefix("${") {
        let close = braced.find('}').ok_or(ExpandError::Unterminated(at))?;
        let name = &braced[..close];
        if name.is_empty() {
            return Err(ExpandError::EmptyName(at));
        }
        let consumed = close + 3;
        match lookup(name) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&tail[..consumed]),
        }
        return Ok(consumed);
    }

    let name_len = identifier_len(&tail[1..]);
    if name_len == 0 {
        out.push('$');
        return Ok(1);
    }

    let name = &tail[1..=name_len];
    match lookup(name) {
        Some(value) => out.push_str(&value),
        None => out.push_str(&tail[..=name_len]),
    }
    Ok(name_len + 1)
}

fn identifier_len(s: &str) -> usize {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, c)) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return 0,
    }
    chars
        .find(|&(_, c)| c != '_' && !c.is_ascii_alphanumeric())
        .map_or(s.len(), |(i, _)| i)
}
