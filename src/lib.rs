#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-patternbar/")]

//! # bubbletea-patternbar
//!
//! Pattern-based progress bars for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! A pattern bar renders progress as a row of cells drawn from an ordered
//! glyph ramp (braille density dots, partial blocks, shades, emoji), with a
//! single partially-filled boundary cell selected by sub-cell interpolation.
//! Beyond the classic determinate fill it supports:
//!
//! - **Cursor patterns**: a single marker travelling along a track instead of
//!   a filled region.
//! - **Indeterminate animation**: a sweeping density cell driven by render
//!   count, or a wall-clock color pulse on cursor patterns.
//! - **Gradients**: a left-to-right color blend across the filled region.
//! - **Width-aware layout**: glyphs that occupy two terminal columns (CJK
//!   symbols, emoji) are accounted for in columns, never overflowing the bar.
//! - **Capability fallback**: ASCII patterns and decorations are substituted
//!   together on terminals without Unicode, and color use degrades cleanly
//!   through the [`pulse::ColorTier`] tiers.
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_patternbar::prelude::*;
//!
//! let mut bar = patternbar_new(&[with_width(30)]);
//! bar.set_percent(0.65);
//! println!("{}", bar.view());
//! ```
//!
//! ## Choosing a pattern
//!
//! Bundled patterns live in the [`pattern`] module and are resolved by name
//! through [`pattern::Registry::bundled`]:
//!
//! ```rust
//! use bubbletea_patternbar::prelude::*;
//!
//! let mut bar = patternbar_new(&[]);
//! bar.set_pattern("shade").unwrap();
//! assert!(bar.set_pattern("nope").is_err()); // config-time error, render never fails
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! The bar follows the Elm Architecture pattern used across the bubbletea
//! ecosystem. For indeterminate bars, kick off the animation by returning
//! [`bar::Model::tick`] and forward messages through `update`:
//!
//! ```rust
//! use bubbletea_patternbar::bar::{new, with_indeterminate, Model as PatternBar};
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     bar: PatternBar,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let bar = new(&[with_indeterminate()]);
//!         let cmd = bar.tick();
//!         (Self { bar }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.bar.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("working {}", self.bar.view())
//!     }
//! }
//! ```
//!
//! ## Hosts with their own renderer
//!
//! Everything the view layer does is derived from the segment plan, so a host
//! compositor can consume [`bar::Model::render`] directly and map
//! [`quantize::Role`]s to its own styling:
//!
//! ```rust
//! use bubbletea_patternbar::prelude::*;
//!
//! let mut bar = patternbar_new(&[with_width(10)]);
//! bar.set_percent(0.5);
//! let request = bar.request();
//! for segment in bar.render(&request) {
//!     // segment.text, segment.role, segment.color
//!     let _ = segment;
//! }
//! ```

pub mod bar;
pub mod blend;
pub mod glyphwidth;
pub mod pattern;
pub mod pulse;
pub mod quantize;

pub use bar::{
    new as patternbar_new, with_bar_glyphs, with_clock, with_empty_color, with_filled_color,
    with_filling_color, with_gradient, with_indeterminate, with_pattern, with_prefix,
    with_pulse_colors, with_suffix, with_width, Model as PatternBar, ProgressOption,
    RenderRequest, Segment, TickMsg,
};
pub use blend::Rgb;
pub use pattern::{PatternError, ProgressPattern, Registry};
pub use pulse::{Clock, ColorTier, SystemClock};
pub use quantize::Role;

/// Prelude module for convenient imports.
///
/// Re-exports the model, the option constructors, and the supporting types
/// most applications touch.
///
/// # Usage
///
/// ```rust
/// use bubbletea_patternbar::prelude::*;
///
/// let bar = patternbar_new(&[with_width(24)]);
/// assert_eq!(bar.width, 24);
/// ```
pub mod prelude {
    pub use crate::bar::{
        new as patternbar_new, with_bar_glyphs, with_clock, with_empty_color, with_filled_color,
        with_filling_color, with_gradient, with_indeterminate, with_pattern, with_prefix,
        with_pulse_colors, with_suffix, with_width, Model as PatternBar, ProgressOption,
        RenderRequest, Segment, TickMsg,
    };
    pub use crate::blend::Rgb;
    pub use crate::pattern::{PatternError, ProgressPattern, Registry};
    pub use crate::pulse::{Clock, ColorTier, SystemClock};
    pub use crate::quantize::Role;
}
