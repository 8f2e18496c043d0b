// src/core/html.rs

/// Replace every `<...>` span with a space, then normalize whitespace.
/// A `<` with no closing `>` is kept as text.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(open) = rest.find('<') {
        match rest[open..].find('>') {
            Some(close_rel) => {
                out.push_str(&rest[..open]);
                out.push(' ');
                rest = &rest[open + close_rel + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    super::sanitize::normalize_ws(&out)
}

/// Escape text for an HTML text node or a double-quoted attribute.
pub fn escape<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
