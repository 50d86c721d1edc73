//! The bar quantizer: turning a progress fraction into a cell-by-cell plan.
//!
//! Given a clamped progress fraction, a body width in terminal columns, and a
//! glyph pattern, [`quantize`] partitions the width into whole "filled"
//! cells, at most one "partial" cell chosen by sub-cell interpolation into
//! the ramp, and trailing "empty" cells. All accounting is in display
//! columns, not glyph counts, because ramp glyphs may occupy two columns.
//!
//! The tie-break policy is `floor` throughout, never `round`: zero progress
//! renders as all-empty, and a value strictly between two thresholds always
//! selects the lower partial glyph rather than rounding up early.
//!
//! Cursor patterns take a different branch: the width is treated as that many
//! discrete positions and a single marker is placed at
//! [`cursor_position`], with the track glyph everywhere else.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_patternbar::pattern::ProgressPattern;
//! use bubbletea_patternbar::quantize::{quantize, Role};
//!
//! let ramp = ProgressPattern::new("abc", &[" ", "a", "b", "c"]).unwrap();
//! let cells = quantize(0.5, 10, &ramp);
//!
//! // Five full cells, then the remainder of exactly zero selects the empty
//! // glyph for the rest of the row.
//! assert_eq!(cells.len(), 10);
//! assert_eq!(cells.iter().filter(|c| c.role == Role::Filled).count(), 5);
//! assert_eq!(cells.iter().filter(|c| c.role == Role::Empty).count(), 5);
//! ```

use crate::glyphwidth::glyph_width;
use crate::pattern::ProgressPattern;

/// The visual role of one rendered segment.
///
/// Roles are resolved to concrete styling by the renderer (or by a host that
/// consumes segment plans directly); the quantizer itself knows nothing about
/// colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Decoration before the bar body.
    Prefix,
    /// A completely filled cell.
    Filled,
    /// The single partially-filled cell at the fill boundary.
    Filling,
    /// An unfilled cell (also the cursor track).
    Empty,
    /// The moving marker of a cursor pattern.
    Cursor,
    /// A cell of the indeterminate pulse animation.
    Pulse,
    /// Decoration after the bar body.
    Suffix,
}

/// One cell of a quantized plan: a ramp glyph index plus its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Index into the pattern's glyph list.
    pub glyph_index: usize,
    /// How the cell should be styled.
    pub role: Role,
}

impl Cell {
    const fn new(glyph_index: usize, role: Role) -> Self {
        Self { glyph_index, role }
    }
}

/// Clamps a progress fraction into `[0, 1]`.
///
/// Out-of-range values are silently clamped and a non-finite ratio (a NaN
/// from `0/0`, say) renders as zero progress; per-frame input anomalies must
/// never interrupt a render loop.
pub fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

/// The marker position for a cursor pattern: `round(fraction * (columns - 1))`.
///
/// Always in `0..columns` for `columns > 0`, so the marker can reach the
/// final column at 100% without ever running out of bounds.
///
/// # Examples
///
/// ```rust
/// use bubbletea_patternbar::quantize::cursor_position;
///
/// assert_eq!(cursor_position(0.0, 10), 0);
/// assert_eq!(cursor_position(1.0, 10), 9);
/// assert_eq!(cursor_position(0.5, 11), 5);
/// ```
pub fn cursor_position(fraction: f64, columns: usize) -> usize {
    if columns == 0 {
        return 0;
    }
    (clamp_fraction(fraction) * (columns - 1) as f64).round() as usize
}

/// Produces the cell-by-cell rendering plan for one bar body.
///
/// `fraction` is clamped before any computation. For density ramps:
///
/// 1. `scaled = fraction * body_width` and `filled = floor(scaled)` columns.
/// 2. The full glyph repeats while one more still fits within `filled`
///    columns, each instance consuming its own display width.
/// 3. If columns remain, `partial = floor((scaled - filled) * (len - 1))`
///    selects one [`Role::Filling`] glyph when positive, otherwise one
///    [`Role::Empty`] glyph; either is skipped if its width no longer fits.
/// 4. The rest of the row fills with the empty glyph. A two-column glyph that
///    cannot fit the final single column is dropped, leaving that column
///    unfilled rather than overflowing the width.
///
/// Cursor patterns ignore the ramp math: the width is `body_width` discrete
/// positions, the marker sits at [`cursor_position`], and the track glyph
/// covers everything else.
///
/// The function is pure: identical inputs always produce the identical plan.
///
/// # Examples
///
/// ```rust
/// use bubbletea_patternbar::pattern::ProgressPattern;
/// use bubbletea_patternbar::quantize::{quantize, Role};
///
/// let ramp =
///     ProgressPattern::new("r", &[" ", "1", "2", "3", "4", "5", "6", "7", "8"]).unwrap();
/// let cells = quantize(0.55, 10, &ramp);
///
/// // scaled = 5.5: five full cells, remainder 0.5 picks ramp index 4.
/// assert_eq!(cells[4].role, Role::Filled);
/// assert_eq!(cells[5], bubbletea_patternbar::quantize::Cell { glyph_index: 4, role: Role::Filling });
/// assert_eq!(cells.len(), 10);
/// ```
pub fn quantize(fraction: f64, body_width: usize, pattern: &ProgressPattern) -> Vec<Cell> {
    let fraction = clamp_fraction(fraction);
    if body_width == 0 {
        return Vec::new();
    }

    if pattern.is_cursor() {
        let marker = cursor_position(fraction, body_width);
        return (0..body_width)
            .map(|i| {
                if i == marker {
                    Cell::new(1, Role::Cursor)
                } else {
                    Cell::new(0, Role::Empty)
                }
            })
            .collect();
    }

    let scaled = fraction * body_width as f64;
    let filled_columns = scaled.floor() as usize;
    let remainder = scaled - scaled.floor();
    let partial_index = (remainder * (pattern.len() - 1) as f64).floor() as usize;

    let full_index = pattern.len() - 1;
    let full_width = glyph_width(pattern.full());
    let empty_width = glyph_width(pattern.empty());

    let mut cells = Vec::with_capacity(body_width);
    let mut columns = 0;

    while columns + full_width <= filled_columns {
        cells.push(Cell::new(full_index, Role::Filled));
        columns += full_width;
    }

    // At most one boundary cell between the filled and empty regions.
    if columns < body_width {
        if partial_index > 0 {
            let width = glyph_width(pattern.glyph(partial_index));
            if columns + width <= body_width {
                cells.push(Cell::new(partial_index, Role::Filling));
                columns += width;
            }
        } else if columns + empty_width <= body_width {
            cells.push(Cell::new(0, Role::Empty));
            columns += empty_width;
        }
    }

    while columns + empty_width <= body_width {
        cells.push(Cell::new(0, Role::Empty));
        columns += empty_width;
    }

    cells
}
