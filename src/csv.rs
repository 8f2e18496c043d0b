// src/csv.rs
use std::collections::HashMap;
use std::mem::take;

/* ---------------- Row shape ---------------- */

/// One data line keyed by header name. Lives only until normalization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: HashMap<String, String>,
}

impl RawRow {
    /// Cell for `header`, or `""` when the column does not exist.
    pub fn get(&self, header: &str) -> &str {
        self.cells.get(header).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/* ---------------- Parsing ---------------- */

/// Split one line into raw (untrimmed) fields.
///
/// Quotes toggle quoted mode and are not emitted; inside quotes a doubled
/// quote is one literal `"`. `sep` only splits outside quotes.
pub fn split_line(line: &str, sep: char) -> Vec<String> {
    let mut out = Vec::new();
    let mut field = s!();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && matches!(chars.peek(), Some('"')) => {
                chars.next(); // double-quote escape
                field.push('"');
            }
            '"' => in_quotes = !in_quotes,
            c if c == sep && !in_quotes => out.push(take(&mut field)),
            _ => field.push(ch),
        }
    }

    // Unterminated quotes still flush what we have.
    out.push(field);
    out
}

/// Parse a whole export into header-keyed rows.
///
/// `\r` is dropped everywhere and empty lines are skipped. The first line is
/// the header. Short rows read as `""` for the missing columns; cells past
/// the last header are ignored. One record per line: quoted newlines are not
/// supported.
pub fn parse_records(text: &str, sep: char) -> Vec<RawRow> {
    let text = text.replace('\r', "");
    let mut lines = text.split('\n').filter(|l| !l.is_empty());

    let Some(first) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = split_line(first, sep)
        .into_iter()
        .map(|h| h.trim().to_string())
        .collect();

    lines
        .map(|line| {
            let mut cells = split_line(line, sep).into_iter();
            headers
                .iter()
                .map(|h| {
                    let cell = cells.next().unwrap_or_default();
                    (h.clone(), cell.trim().to_string())
                })
                .collect()
        })
        .collect()
}

/// Header names in file order, as `parse_records` sees them.
pub fn headers(text: &str, sep: char) -> Vec<String> {
    let text = text.replace('\r', "");
    text.split('\n')
        .find(|l| !l.is_empty())
        .map(|l| split_line(l, sep).into_iter().map(|h| h.trim().to_string()).collect())
        .unwrap_or_default()
}
