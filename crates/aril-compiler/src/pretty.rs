//! Pretty printer for serialized target-IR text
//!
//! Works on the flat text, not the IR tree: the input is re-lexed with
//! quoted strings and flat parenthesis groups as atomic tokens, then
//! re-rendered with indentation. Purely presentational; the content is
//! never changed beyond optional provenance stripping.

const TAB: usize = 4;

/// Remove every `$line$col` provenance suffix
///
/// Each `$` directly followed by digits is dropped together with the
/// digits; a `$` not followed by a digit is kept.
pub fn strip_tags(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut chars = src.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '$' && chars.peek().is_some_and(|c| c.is_ascii_digit()) {
            while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
                chars.next();
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// End (exclusive) of the token starting at `start`
///
/// Token classes, in priority order: a quoted string with `\"`/`\\`
/// escapes; a parenthesis group containing no nested parens; a single
/// character. An unterminated string or group falls back to one char.
fn token_end(chars: &[char], start: usize) -> usize {
    match chars[start] {
        '"' => {
            let mut i = start + 1;
            while i < chars.len() {
                match chars[i] {
                    '\\' => i += 2,
                    '"' => return i + 1,
                    _ => i += 1,
                }
            }
            start + 1
        }
        '(' => {
            let mut i = start + 1;
            while i < chars.len() && chars[i] != '(' && chars[i] != ')' {
                i += 1;
            }
            if i < chars.len() && chars[i] == ')' {
                i + 1
            } else {
                start + 1
            }
        }
        _ => start + 1,
    }
}

/// Re-render serialized IR text with indentation
///
/// `(` opens a line and indents, `)` dedents first, `,` breaks at the
/// current indent. Innermost flat groups stay on one line because the
/// lexer treats them as atomic.
pub fn pretty(src: &str) -> String {
    let chars: Vec<char> = src.chars().collect();
    let mut out = String::new();
    let mut indent = 0usize;
    let mut i = 0;

    while i < chars.len() {
        let end = token_end(&chars, i);
        if end - i == 1 {
            match chars[i] {
                ' ' | '\t' | '\r' | '\n' => {}
                '(' => {
                    out.push_str("(\n");
                    indent += 1;
                    out.push_str(&" ".repeat(indent * TAB));
                }
                ')' => {
                    indent = indent.saturating_sub(1);
                    out.push('\n');
                    out.push_str(&" ".repeat(indent * TAB));
                    out.push(')');
                }
                ',' => {
                    out.push_str(",\n");
                    out.push_str(&" ".repeat(indent * TAB));
                }
                c => out.push(c),
            }
        } else {
            out.extend(chars[i..end].iter());
        }
        i = end;
    }

    out.push('\n');
    out
}
