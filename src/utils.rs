// src/utils.rs
//! Text normalization helpers shared by form extraction and rendering.

/// Hard cap applied to every submitted form field.
pub const MAX_FIELD_LEN: usize = 4000;

/// Tighter cap for the professional summary.
pub const MAX_SUMMARY_LEN: usize = 1000;

/// Trim a raw form value and clip it to `max_chars` characters.
pub fn clip(value: &str, max_chars: usize) -> String {
    value.trim().chars().take(max_chars).collect()
}

/// Normalize free text: collapse internal whitespace and capitalize the
/// first letter. Empty input stays empty.
pub fn normalize_text(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = collapsed.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Normalize a date-range separator to " — ". A run of dashes together with
/// the whitespace around it collapses into a single separator.
pub fn normalize_period(period: &str) -> String {
    fn is_dash(c: char) -> bool {
        matches!(c, '-' | '\u{2013}' | '\u{2014}')
    }

    let trimmed = period.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    let mut chars = trimmed.chars().peekable();
    while let Some(c) = chars.next() {
        if is_dash(c) {
            while matches!(chars.peek(), Some(&next) if is_dash(next) || next.is_whitespace()) {
                chars.next();
            }
            while out.ends_with(' ') {
                out.pop();
            }
            out.push_str(" — ");
        } else {
            out.push(c);
        }
    }
    out
}

/// Split a comma-separated skills field into trimmed, non-empty items.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Derive a download-safe filename stem from a person's name: lowercase,
/// fold common Latin-1 accents to ASCII, collapse every other
/// non-alphanumeric run into a single underscore, trim edge underscores.
/// Falls back to "curriculo" when nothing survives.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::new();
    for c in name.trim().to_lowercase().chars() {
        let folded = fold_accent(c);
        if folded.is_ascii_alphanumeric() {
            out.push(folded);
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    if out.is_empty() {
        "curriculo".to_string()
    } else {
        out
    }
}

/// Map a lowercase Latin-1 accented letter to its ASCII base letter.
/// Anything without a fold passes through and is handled by the caller.
fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("João da Silva!"), "joao_da_silva");
        assert_eq!(sanitize_filename("Marie@Company"), "marie_company");
        assert_eq!(sanitize_filename("  Ana--Clara  "), "ana_clara");
        assert_eq!(sanitize_filename("___"), "curriculo");
        assert_eq!(sanitize_filename(""), "curriculo");
    }

    #[test]
    fn test_sanitize_filename_collapses_runs() {
        assert_eq!(sanitize_filename("a !?# b"), "a_b");
        assert_eq!(sanitize_filename("!lead and trail!"), "lead_and_trail");
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  hello   world  "), "Hello world");
        assert_eq!(normalize_text("álvaro"), "Álvaro");
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn test_normalize_period() {
        assert_eq!(normalize_period("2020-2022"), "2020 — 2022");
        assert_eq!(normalize_period("2020 -- 2022"), "2020 — 2022");
        assert_eq!(normalize_period("jan 2020 – atual"), "jan 2020 — atual");
        assert_eq!(normalize_period(""), "");
    }

    #[test]
    fn test_parse_skill_list() {
        assert_eq!(
            parse_skill_list("Python, Docker ,  , SQL"),
            vec!["Python", "Docker", "SQL"]
        );
        assert!(parse_skill_list("  ,, ").is_empty());
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip("  abc  ", 10), "abc");
        assert_eq!(clip("abcdef", 3), "abc");
        assert_eq!(clip("ação", 3), "açã");
    }
}
