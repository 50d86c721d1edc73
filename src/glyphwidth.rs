//! Terminal display-width accounting for glyphs and decoration strings.
//!
//! Progress patterns mix ASCII, box-drawing characters, CJK-width symbols and
//! emoji, and a terminal cell count is what the bar math has to respect, not a
//! character count. This module answers "how many columns does this glyph
//! occupy" for single characters, single glyphs (which may be a grapheme
//! cluster), and whole decoration strings.
//!
//! Classification delegates to the `unicode-width` crate's East-Asian-width
//! tables, with two additions tuned to the bundled patterns:
//!
//! - the Miscellaneous Symbols and Arrows block (`U+2B00..=U+2BFF`, home of
//!   `⬜` and `⬛`) is always treated as double-width, since that is how
//!   terminals draw the square ramp glyphs;
//! - a grapheme cluster carrying the emoji presentation selector (`U+FE0F`)
//!   counts as two columns even when its base character is narrow.
//!
//! This is a practical approximation for the glyph sets progress bars use,
//! not exhaustive Unicode compliance; unknown code points default to one
//! column.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_patternbar::glyphwidth::{char_width, glyph_width, str_width};
//!
//! assert_eq!(char_width('#'), 1);
//! assert_eq!(char_width('⣿'), 1); // braille cells are narrow
//! assert_eq!(char_width('⬛'), 2);
//! assert_eq!(glyph_width("🌑"), 2);
//! assert_eq!(str_width("[⬜⬛]"), 6);
//! ```

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Emoji presentation selector; forces emoji rendering of the base character.
const VARIATION_SELECTOR_16: char = '\u{FE0F}';

/// Returns the number of terminal columns (0, 1, or 2) a single character
/// occupies.
///
/// Control characters and non-spacing combining marks take no columns; wide
/// and fullwidth characters per the East-Asian-width tables take two; the
/// `U+2B00..=U+2BFF` symbol block is forced to two columns to match how
/// terminals draw the bundled square glyphs. Everything else, including
/// unmapped code points, is one column.
///
/// # Examples
///
/// ```rust
/// use bubbletea_patternbar::glyphwidth::char_width;
///
/// assert_eq!(char_width('\n'), 0);
/// assert_eq!(char_width('\u{0301}'), 0); // combining acute accent
/// assert_eq!(char_width('a'), 1);
/// assert_eq!(char_width('█'), 1);
/// assert_eq!(char_width('木'), 2);
/// ```
pub fn char_width(c: char) -> usize {
    if c.is_control() {
        return 0;
    }
    // Misc Symbols and Arrows: ⬜/⬛ and friends render double-wide in
    // practice even where the width tables disagree across Unicode versions.
    if ('\u{2B00}'..='\u{2BFF}').contains(&c) {
        return 2;
    }
    UnicodeWidthChar::width(c).unwrap_or(1)
}

/// Returns the number of terminal columns one glyph string occupies.
///
/// A glyph is usually a single character but may be a grapheme cluster (an
/// emoji with a variation selector, a base character plus combining marks).
/// Clusters containing the emoji presentation selector are counted as two
/// columns; otherwise a cluster is the sum of its scalar widths, which lets
/// combining marks ride along for free.
///
/// # Examples
///
/// ```rust
/// use bubbletea_patternbar::glyphwidth::glyph_width;
///
/// assert_eq!(glyph_width("⣿"), 1);
/// assert_eq!(glyph_width("🌕"), 2);
/// assert_eq!(glyph_width("✔\u{FE0F}"), 2); // emoji presentation
/// assert_eq!(glyph_width("e\u{0301}"), 1); // é as a cluster
/// ```
pub fn glyph_width(glyph: &str) -> usize {
    glyph.graphemes(true).map(grapheme_width).sum()
}

/// Returns the number of terminal columns a whole string occupies.
///
/// Used for prefix/suffix column accounting when clipping the bar body to the
/// available terminal width.
pub fn str_width(s: &str) -> usize {
    glyph_width(s)
}

/// Reports whether a string contains any non-ASCII character.
///
/// This drives both a pattern's Unicode flag and the decoration fallback: a
/// Unicode prefix must not survive into an ASCII-only render.
///
/// # Examples
///
/// ```rust
/// use bubbletea_patternbar::glyphwidth::contains_unicode;
///
/// assert!(!contains_unicode("[]"));
/// assert!(contains_unicode("⟦"));
/// ```
pub fn contains_unicode(s: &str) -> bool {
    s.chars().any(|c| c as u32 > 127)
}

fn grapheme_width(g: &str) -> usize {
    if g.chars().any(|c| c == VARIATION_SELECTOR_16) {
        return 2;
    }
    g.chars().map(char_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_chars_are_zero_width() {
        assert_eq!(char_width('\x00'), 0);
        assert_eq!(char_width('\x1b'), 0);
        assert_eq!(char_width('\t'), 0);
        assert_eq!(char_width('\x7f'), 0);
    }

    #[test]
    fn test_combining_marks_are_zero_width() {
        assert_eq!(char_width('\u{0301}'), 0); // combining acute
        assert_eq!(char_width('\u{20D7}'), 0); // combining vector arrow
    }

    #[test]
    fn test_ascii_and_narrow_glyphs() {
        assert_eq!(char_width(' '), 1);
        assert_eq!(char_width('#'), 1);
        assert_eq!(char_width('█'), 1); // block elements are narrow
        assert_eq!(char_width('⣿'), 1); // braille is narrow
        assert_eq!(char_width('░'), 1);
        assert_eq!(char_width('━'), 1);
    }

    #[test]
    fn test_wide_glyphs() {
        assert_eq!(char_width('木'), 2); // CJK ideograph
        assert_eq!(char_width('가'), 2); // Hangul syllable
        assert_eq!(char_width('Ａ'), 2); // fullwidth form
        assert_eq!(char_width('⬜'), 2);
        assert_eq!(char_width('⬛'), 2);
    }

    #[test]
    fn test_misc_symbols_and_arrows_block_forced_wide() {
        // Entire U+2B00..=U+2BFF block, not just the squares.
        assert_eq!(char_width('\u{2B00}'), 2);
        assert_eq!(char_width('\u{2BFF}'), 2);
    }

    #[test]
    fn test_emoji_glyphs() {
        assert_eq!(glyph_width("🌑"), 2);
        assert_eq!(glyph_width("🌕"), 2);
    }

    #[test]
    fn test_variation_selector_forces_emoji_width() {
        // U+2714 is narrow on its own; with VS16 it renders as a wide emoji.
        assert_eq!(glyph_width("✔\u{FE0F}"), 2);
    }

    #[test]
    fn test_grapheme_cluster_width() {
        assert_eq!(glyph_width("e\u{0301}"), 1);
    }

    #[test]
    fn test_str_width_sums_glyphs() {
        assert_eq!(str_width(""), 0);
        assert_eq!(str_width("[]"), 2);
        assert_eq!(str_width("⬜⬛"), 4);
        assert_eq!(str_width("[木]"), 4);
    }

    #[test]
    fn test_contains_unicode() {
        assert!(!contains_unicode(""));
        assert!(!contains_unicode("[=- ]"));
        assert!(contains_unicode("━"));
        assert!(contains_unicode("⟦bar⟧"));
    }
}
