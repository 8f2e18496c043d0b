// src/core/collate.rs
//
// Locale-style string ordering without pulling in ICU. Three levels:
//   1. letters with case and Latin accents folded ("é" sorts with "e")
//   2. unaccented before accented ("resume" < "résumé")
//   3. lowercase before uppercase ("apple" < "Apple" < "banana")
// Letters outside Latin-1 and Latin Extended-A keep code point order.

use std::cmp::Ordering;

pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = |s: &str| lower(s).into_iter().map(base_letter).collect::<Vec<_>>();
    primary(a)
        .cmp(&primary(b))
        .then_with(|| accent_tiebreak(a, b))
        .then_with(|| case_tiebreak(a, b))
}

fn lower(s: &str) -> Vec<char> {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Lowercase letter with its accent removed.
pub fn base_letter(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' | 'ŧ' => 't',
        'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => c,
    }
}

fn accent_tiebreak(a: &str, b: &str) -> Ordering {
    for (x, y) in lower(a).into_iter().zip(lower(b)) {
        if x == y {
            continue;
        }
        let accented = |c: char| base_letter(c) != c;
        return accented(x).cmp(&accented(y)).then(x.cmp(&y));
    }
    Ordering::Equal
}

fn case_tiebreak(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => return x.cmp(&y),
        }
    }
    a.len().cmp(&b.len())
}

/// Sort and dedup with `locale_cmp`.
pub fn sorted_unique<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<String> = values.into_iter().filter(|v| !v.is_empty()).collect();
    out.sort_by(|a, b| locale_cmp(a, b));
    out.dedup();
    out
}
