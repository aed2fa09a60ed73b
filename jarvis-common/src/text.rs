//! Text helpers shared by the renderers

/// Bullet marker prefixed to every textual suggestion line
pub const BULLET: &str = "• ";

/// Prefix each line with the bullet marker
pub fn bullets<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("{}{}", BULLET, item.as_ref()))
        .collect()
}

/// Word-start title casing
///
/// A cased letter that does not follow another cased letter is title-cased;
/// every other cased letter is lower-cased. Uncased characters (digits,
/// punctuation, CJK ideographs) pass through and start a new word, so
/// `"high-contrast"` becomes `"High-Contrast"` and `"咖啡brand"` becomes
/// `"咖啡Brand"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_cased = false;

    for c in s.chars() {
        if prev_is_cased {
            out.extend(c.to_lowercase());
        } else {
            push_titlecase(c, &mut out);
        }
        prev_is_cased = is_cased(c);
    }

    out
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase() || is_titlecase_letter(c)
}

/// Letters of general category Lt (digraphs and Greek with prosgegrammeni)
fn is_titlecase_letter(c: char) -> bool {
    matches!(
        c,
        '\u{01C5}'
            | '\u{01C8}'
            | '\u{01CB}'
            | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

/// Title-case form of one character
///
/// Digraphs map to their Lt form (`ǆ` → `ǅ`). A character whose upper-case
/// form expands keeps only the first letter upper (`ß` → `Ss`).
fn push_titlecase(c: char, out: &mut String) {
    match c {
        '\u{01C4}'..='\u{01C6}' => out.push('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => out.push('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => out.push('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => out.push('\u{01F2}'),
        c if is_titlecase_letter(c) => out.push(c),
        c => {
            let mut upper = c.to_uppercase();
            if let Some(first) = upper.next() {
                out.push(first);
            }
            for rest in upper {
                out.extend(rest.to_lowercase());
            }
        }
    }
}

/// Optional free-text hint that counts as supplied
///
/// Empty strings are treated the same as an absent field.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
