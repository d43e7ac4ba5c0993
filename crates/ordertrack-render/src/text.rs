#![forbid(unsafe_code)]

//! Display-width helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of `s` in terminal columns.
#[inline]
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Width of one character in columns. Control characters count as 0.
#[inline]
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Longest prefix of `s` that fits in `max` columns.
pub fn truncate_to_width(s: &str, max: usize) -> &str {
    let mut used = 0;
    for (i, c) in s.char_indices() {
        let w = char_width(c);
        if used + w > max {
            return &s[..i];
        }
        used += w;
    }
    s
}

/// Longest suffix of `s` that fits in `max` columns.
pub fn tail_to_width(s: &str, max: usize) -> &str {
    let mut used = 0;
    for (i, c) in s.char_indices().rev() {
        let w = char_width(c);
        if used + w > max {
            return &s[i + c.len_utf8()..];
        }
        used += w;
    }
    s
}

/// Truncate to `max` columns, ending in `…` when something was cut.
pub fn ellipsize(s: &str, max: usize) -> String {
    if display_width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = truncate_to_width(s, max - 1).to_string();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths() {
        assert_eq!(display_width("Calça"), 5);
        assert_eq!(display_width("Nº ERP • 1"), 10);
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn truncation() {
        assert_eq!(truncate_to_width("produção", 5), "produ");
        assert_eq!(truncate_to_width("日本語", 3), "日");
        assert_eq!(truncate_to_width("ok", 10), "ok");
    }

    #[test]
    fn tail() {
        assert_eq!(tail_to_width("abcdef", 3), "def");
        assert_eq!(tail_to_width("日本語", 5), "本語");
        assert_eq!(tail_to_width("ab", 5), "ab");
    }

    #[test]
    fn ellipsis() {
        assert_eq!(ellipsize("Recebimento de Materiais", 10), "Recebimen…");
        assert_eq!(ellipsize("Faturado", 8), "Faturado");
        assert_eq!(ellipsize("Faturado", 0), "");
    }
}
