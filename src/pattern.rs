//! Progress patterns: named glyph ramps and the registry that serves them.
//!
//! A pattern is an ordered list of glyphs running from the "empty"
//! representation to the "full" one, with the intermediate entries used for
//! sub-cell interpolation of a partially filled cell. A pattern can instead
//! be a two-glyph cursor pair (track and marker), rendered as a single moving
//! marker rather than a filled region.
//!
//! The bundled patterns are compiled-in statics, the same way the spinner
//! frame sets are bundled in the wider bubbletea widget ecosystem. The
//! [`Registry`] maps names to patterns, resolves the default, and supplies
//! the designated ASCII fallbacks for terminals without Unicode support.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_patternbar::pattern::{Registry, BRAILLE};
//!
//! let registry = Registry::bundled();
//! let pattern = registry.lookup("Braille").unwrap();
//! assert_eq!(pattern.name(), BRAILLE.name());
//! assert_eq!(pattern.full(), "⣿");
//! assert!(pattern.is_unicode());
//! ```
//!
//! # Custom patterns
//!
//! ```rust
//! use bubbletea_patternbar::pattern::{ProgressPattern, Registry};
//!
//! let stars = ProgressPattern::new("stars", &[" ", "·", "*", "✶"]).unwrap();
//! let registry = Registry::new(vec![stars], "stars").unwrap();
//! assert_eq!(registry.default_pattern().name(), "stars");
//! ```
//!
//! Validation happens at construction: a ramp with fewer than two glyphs or
//! with a glyph that occupies no terminal columns is a configuration error
//! and is rejected before any bar can reference it.

use crate::glyphwidth::{contains_unicode, glyph_width};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

/// Errors arising from pattern construction or registry lookup.
///
/// These surface at configuration time only; rendering always starts from a
/// resolved, validated pattern and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The requested pattern name is not present in the registry.
    #[error("unknown progress pattern {0:?}")]
    UnknownPattern(String),
    /// A ramp needs at least an "empty" and a "full" glyph.
    #[error("progress pattern {name:?} needs at least two glyphs, got {count}")]
    TooFewGlyphs {
        /// Name of the offending pattern.
        name: String,
        /// Number of glyphs supplied.
        count: usize,
    },
    /// A glyph with zero display columns would stall column accounting.
    #[error("progress pattern {name:?} contains zero-width glyph {glyph:?}")]
    ZeroWidthGlyph {
        /// Name of the offending pattern.
        name: String,
        /// The glyph that has no display width.
        glyph: String,
    },
}

/// An ordered glyph ramp (or cursor pair) used to render a progress bar.
///
/// For density ramps, index 0 is the empty representation, the last index is
/// the full one, and the indices between are increasing partial-fill density.
/// For cursor patterns the two glyphs are the track background and the moving
/// marker.
///
/// Fields are private: every pattern in existence has passed validation, so
/// consumers may index by `floor(fraction * (len - 1))` without re-checking
/// the length invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressPattern {
    name: String,
    glyphs: Vec<String>,
    is_unicode: bool,
    is_cursor: bool,
}

impl ProgressPattern {
    /// Creates a density ramp from an ordered glyph list, weakest to
    /// strongest visual weight.
    ///
    /// The Unicode flag is computed from the glyphs themselves. Fails with
    /// [`PatternError::TooFewGlyphs`] for ramps shorter than two entries and
    /// [`PatternError::ZeroWidthGlyph`] for glyphs that occupy no terminal
    /// columns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_patternbar::pattern::ProgressPattern;
    ///
    /// let ramp = ProgressPattern::new("dots", &[" ", "░", "▒", "▓", "█"]).unwrap();
    /// assert_eq!(ramp.len(), 5);
    /// assert!(ramp.is_unicode());
    /// assert!(!ramp.is_cursor());
    ///
    /// assert!(ProgressPattern::new("broken", &["#"]).is_err());
    /// ```
    pub fn new(name: &str, glyphs: &[&str]) -> Result<Self, PatternError> {
        Self::build(name, glyphs.iter().map(|g| g.to_string()).collect(), false)
    }

    /// Creates a cursor pattern from a track glyph and a marker glyph.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_patternbar::pattern::ProgressPattern;
    ///
    /// let cursor = ProgressPattern::cursor("ball", "─", "●").unwrap();
    /// assert!(cursor.is_cursor());
    /// assert_eq!(cursor.empty(), "─");
    /// assert_eq!(cursor.full(), "●");
    /// ```
    pub fn cursor(name: &str, track: &str, marker: &str) -> Result<Self, PatternError> {
        Self::build(name, vec![track.to_string(), marker.to_string()], true)
    }

    fn build(name: &str, glyphs: Vec<String>, is_cursor: bool) -> Result<Self, PatternError> {
        if glyphs.len() < 2 {
            return Err(PatternError::TooFewGlyphs {
                name: name.to_string(),
                count: glyphs.len(),
            });
        }
        if let Some(glyph) = glyphs.iter().find(|g| glyph_width(g) == 0) {
            return Err(PatternError::ZeroWidthGlyph {
                name: name.to_string(),
                glyph: glyph.clone(),
            });
        }
        let is_unicode = glyphs.iter().any(|g| contains_unicode(g));
        Ok(Self {
            name: name.to_string(),
            glyphs,
            is_unicode,
            is_cursor,
        })
    }

    /// The pattern's canonical (lowercase) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered glyph list. Always at least two entries.
    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    /// One glyph by ramp index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; quantizer output indices are always
    /// in range for the pattern they were computed from.
    pub fn glyph(&self, index: usize) -> &str {
        &self.glyphs[index]
    }

    /// Number of glyphs in the ramp.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; kept for the conventional pairing with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The "empty" glyph (ramp index 0; the track glyph for cursor patterns).
    pub fn empty(&self) -> &str {
        &self.glyphs[0]
    }

    /// The "full" glyph (last ramp index; the marker glyph for cursor
    /// patterns).
    pub fn full(&self) -> &str {
        &self.glyphs[self.glyphs.len() - 1]
    }

    /// True if any glyph contains a non-ASCII character.
    pub fn is_unicode(&self) -> bool {
        self.is_unicode
    }

    /// True if this pattern is a (track, marker) cursor pair rather than a
    /// density ramp.
    pub fn is_cursor(&self) -> bool {
        self.is_cursor
    }
}

/// Braille density ramp, the default pattern.
pub static BRAILLE: Lazy<ProgressPattern> = Lazy::new(|| {
    ProgressPattern::new(
        "braille",
        &[" ", "⡀", "⣀", "⣄", "⣤", "⣦", "⣶", "⣷", "⣿"],
    )
    .expect("bundled pattern is valid")
});

/// Left-to-right block fill ramp.
pub static BLOCK: Lazy<ProgressPattern> = Lazy::new(|| {
    ProgressPattern::new(
        "block",
        &[" ", "▏", "▎", "▍", "▌", "▋", "▊", "▉", "█"],
    )
    .expect("bundled pattern is valid")
});

/// Shaded block ramp.
pub static SHADE: Lazy<ProgressPattern> = Lazy::new(|| {
    ProgressPattern::new("shade", &[" ", "░", "▒", "▓", "█"]).expect("bundled pattern is valid")
});

/// ASCII density ramp; the designated fallback when Unicode is unavailable.
pub static ASCII: Lazy<ProgressPattern> = Lazy::new(|| {
    ProgressPattern::new("ascii", &[" ", ".", ":", "-", "=", "#"])
        .expect("bundled pattern is valid")
});

/// Double-width square ramp; exercises two-column glyph accounting.
pub static SQUARES: Lazy<ProgressPattern> =
    Lazy::new(|| ProgressPattern::new("squares", &["⬜", "⬛"]).expect("bundled pattern is valid"));

/// Moon phase emoji ramp, double-width glyphs.
pub static MOON: Lazy<ProgressPattern> = Lazy::new(|| {
    ProgressPattern::new("moon", &["🌑", "🌒", "🌓", "🌔", "🌕"])
        .expect("bundled pattern is valid")
});

/// Cursor pattern: a ball travelling along a line.
pub static CURSOR: Lazy<ProgressPattern> =
    Lazy::new(|| ProgressPattern::cursor("cursor", "─", "●").expect("bundled pattern is valid"));

/// ASCII cursor pattern; the designated cursor fallback when Unicode is
/// unavailable.
pub static ASCII_CURSOR: Lazy<ProgressPattern> = Lazy::new(|| {
    ProgressPattern::cursor("ascii-cursor", "-", ">").expect("bundled pattern is valid")
});

static BUNDLED: Lazy<Registry> = Lazy::new(|| {
    Registry::new(
        vec![
            BRAILLE.clone(),
            BLOCK.clone(),
            SHADE.clone(),
            ASCII.clone(),
            SQUARES.clone(),
            MOON.clone(),
            CURSOR.clone(),
            ASCII_CURSOR.clone(),
        ],
        "braille",
    )
    .expect("bundled registry is valid")
});

/// An immutable name-to-pattern mapping.
///
/// Populated once at startup and read-only afterwards; safe for
/// unsynchronized concurrent reads from any number of rendering threads.
#[derive(Debug, Clone)]
pub struct Registry {
    patterns: HashMap<String, ProgressPattern>,
    default_name: String,
}

impl Registry {
    /// The compiled-in pattern set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_patternbar::pattern::Registry;
    ///
    /// let registry = Registry::bundled();
    /// assert_eq!(registry.default_pattern().name(), "braille");
    /// assert!(registry.lookup("block").is_ok());
    /// ```
    pub fn bundled() -> &'static Registry {
        &BUNDLED
    }

    /// Builds a registry from already-validated patterns.
    ///
    /// Names are canonicalized to lowercase; a later pattern with the same
    /// name replaces an earlier one. Fails with
    /// [`PatternError::UnknownPattern`] if `default_name` names none of the
    /// supplied patterns.
    pub fn new(patterns: Vec<ProgressPattern>, default_name: &str) -> Result<Self, PatternError> {
        let mut map = HashMap::with_capacity(patterns.len());
        for pattern in patterns {
            map.insert(pattern.name.to_ascii_lowercase(), pattern);
        }
        let default_name = default_name.to_ascii_lowercase();
        if !map.contains_key(&default_name) {
            return Err(PatternError::UnknownPattern(default_name));
        }
        Ok(Self {
            patterns: map,
            default_name,
        })
    }

    /// Looks up a pattern by name, ASCII-case-insensitively.
    ///
    /// Lookup failures are configuration-time errors; by the time a bar
    /// renders it always holds a resolved pattern.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_patternbar::pattern::{PatternError, Registry};
    ///
    /// let registry = Registry::bundled();
    /// assert!(registry.lookup("Shade").is_ok());
    /// assert_eq!(
    ///     registry.lookup("nope"),
    ///     Err(PatternError::UnknownPattern("nope".to_string()))
    /// );
    /// ```
    pub fn lookup(&self, name: &str) -> Result<&ProgressPattern, PatternError> {
        self.patterns
            .get(&name.to_ascii_lowercase())
            .ok_or_else(|| PatternError::UnknownPattern(name.to_string()))
    }

    /// The registry's default pattern.
    pub fn default_pattern(&self) -> &ProgressPattern {
        &self.patterns[&self.default_name]
    }

    /// Resolves the ASCII stand-in for a pattern on a terminal without
    /// Unicode support.
    ///
    /// Non-Unicode patterns are returned unchanged. Unicode patterns map to
    /// the designated `ascii` ramp, or to `ascii-cursor` when the source is a
    /// cursor pair, so capability loss never changes the rendering mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_patternbar::pattern::{Registry, BRAILLE, CURSOR};
    ///
    /// let registry = Registry::bundled();
    /// assert_eq!(registry.ascii_fallback(&BRAILLE).name(), "ascii");
    /// assert_eq!(registry.ascii_fallback(&CURSOR).name(), "ascii-cursor");
    /// ```
    pub fn ascii_fallback(&self, pattern: &ProgressPattern) -> ProgressPattern {
        if !pattern.is_unicode() {
            return pattern.clone();
        }
        if pattern.is_cursor() {
            ASCII_CURSOR.clone()
        } else {
            ASCII.clone()
        }
    }

    /// All registered pattern names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.patterns.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_computes_unicode_flag() {
        let unicode = ProgressPattern::new("u", &[" ", "⣿"]).unwrap();
        assert!(unicode.is_unicode());

        let ascii = ProgressPattern::new("a", &[" ", "#"]).unwrap();
        assert!(!ascii.is_unicode());
    }

    #[test]
    fn test_new_rejects_short_ramps() {
        assert_eq!(
            ProgressPattern::new("short", &["#"]),
            Err(PatternError::TooFewGlyphs {
                name: "short".to_string(),
                count: 1,
            })
        );
        assert!(ProgressPattern::new("empty", &[]).is_err());
    }

    #[test]
    fn test_new_rejects_zero_width_glyphs() {
        assert_eq!(
            ProgressPattern::new("bad", &[" ", "\u{0301}"]),
            Err(PatternError::ZeroWidthGlyph {
                name: "bad".to_string(),
                glyph: "\u{0301}".to_string(),
            })
        );
        assert!(ProgressPattern::new("blank", &["", "#"]).is_err());
    }

    #[test]
    fn test_empty_and_full_accessors() {
        let p = ProgressPattern::new("p", &[" ", "-", "="]).unwrap();
        assert_eq!(p.empty(), " ");
        assert_eq!(p.full(), "=");
        assert_eq!(p.glyph(1), "-");
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn test_bundled_patterns_are_valid() {
        let registry = Registry::bundled();
        for name in registry.names() {
            let pattern = registry.lookup(name).unwrap();
            assert!(pattern.len() >= 2, "pattern {name} too short");
        }
    }

    #[test]
    fn test_bundled_default_is_braille() {
        let registry = Registry::bundled();
        assert_eq!(registry.default_pattern().name(), "braille");
        assert_eq!(registry.default_pattern().full(), "⣿");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = Registry::bundled();
        assert_eq!(registry.lookup("Braille").unwrap().name(), "braille");
        assert_eq!(registry.lookup("BLOCK").unwrap().name(), "block");
    }

    #[test]
    fn test_lookup_unknown_name() {
        let registry = Registry::bundled();
        assert_eq!(
            registry.lookup("sparkles"),
            Err(PatternError::UnknownPattern("sparkles".to_string()))
        );
    }

    #[test]
    fn test_custom_registry_default_must_exist() {
        let p = ProgressPattern::new("only", &[" ", "#"]).unwrap();
        assert!(Registry::new(vec![p.clone()], "only").is_ok());
        let err = Registry::new(vec![p], "other").unwrap_err();
        assert_eq!(err, PatternError::UnknownPattern("other".to_string()));
    }

    #[test]
    fn test_ascii_fallback_identity_for_ascii_patterns() {
        let registry = Registry::bundled();
        let ascii = registry.lookup("ascii").unwrap();
        assert_eq!(&registry.ascii_fallback(ascii), ascii);
    }

    #[test]
    fn test_ascii_fallback_preserves_cursor_kind() {
        let registry = Registry::bundled();
        let fallback = registry.ascii_fallback(&CURSOR);
        assert!(fallback.is_cursor());
        assert!(!fallback.is_unicode());

        let ramp_fallback = registry.ascii_fallback(&MOON);
        assert!(!ramp_fallback.is_cursor());
        assert!(!ramp_fallback.is_unicode());
    }

    #[test]
    fn test_cursor_glyph_widths() {
        // Square ramp glyphs are two columns wide, cursor glyphs one.
        assert_eq!(crate::glyphwidth::glyph_width(SQUARES.full()), 2);
        assert_eq!(crate::glyphwidth::glyph_width(CURSOR.full()), 1);
    }
}
