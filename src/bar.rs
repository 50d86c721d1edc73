//! Pattern progress bar component for Bubble Tea applications.
//!
//! This is the composition root of the crate: a `Model` that resolves the
//! effective pattern and decorations from terminal capabilities, dispatches
//! to quantized, cursor, or indeterminate rendering, and emits an ordered
//! sequence of [`Segment`]s bounded by a prefix and a suffix. A lipgloss
//! view layer turns segments into a styled string for terminal display.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_patternbar::bar::{new, with_width};
//!
//! let mut bar = new(&[with_width(20)]);
//! bar.set_percent(0.4);
//! let view = bar.view();
//! assert!(!view.is_empty());
//! ```
//!
//! # Segment plans
//!
//! Hosts that do their own styling can skip the view layer and consume the
//! raw plan:
//!
//! ```rust
//! use bubbletea_patternbar::bar::new;
//! use bubbletea_patternbar::quantize::Role;
//!
//! let mut bar = new(&[]);
//! let request = bar.request();
//! let segments = bar.render(&request);
//! assert_eq!(segments.first().unwrap().role, Role::Prefix);
//! assert_eq!(segments.last().unwrap().role, Role::Suffix);
//! ```
//!
//! # Indeterminate animation
//!
//! With a density pattern the indeterminate state renders a sweeping cell
//! whose phase advances once per render call (or once per accepted
//! [`TickMsg`] in a bubbletea program). With a cursor pattern it renders the
//! wall-clock-driven color pulse instead. Schedule frames by returning
//! [`Model::tick`] from your `update`.

use crate::blend::{
    Rgb, DEFAULT_EMPTY, DEFAULT_FILLED, DEFAULT_FILLING, DEFAULT_PULSE_BACKGROUND,
    DEFAULT_PULSE_FOREGROUND,
};
use crate::glyphwidth::{contains_unicode, str_width};
use crate::pattern::{PatternError, ProgressPattern, Registry, BRAILLE};
use crate::pulse::{pulse_row, sweep_advance, sweep_frame, Clock, ColorTier, SystemClock};
use crate::quantize::{clamp_fraction, quantize, Role};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::lipgloss;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

// Internal ID management for bar instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

// Animation frames per second for the indeterminate tick loop; matches the
// pulse speed so each tick lands on a fresh pulse offset.
const FPS: u64 = 15;
const DEFAULT_WIDTH: usize = 40;
const DEFAULT_MAX_VALUE: f64 = 100.0;

/// A single render request: progress state plus terminal capabilities.
///
/// Requests are transient; build one per render tick (or let
/// [`Model::request`] derive one from the model's own state).
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest {
    /// Current progress value; clamped into `0..=max_value` before use.
    pub value: f64,
    /// The value representing 100%. Must be positive; a non-positive
    /// max renders as zero progress rather than erroring.
    pub max_value: f64,
    /// Total terminal columns available, including prefix and suffix.
    pub available_width: usize,
    /// Render the indeterminate animation instead of a fill ratio.
    pub is_indeterminate: bool,
    /// Whether the terminal can display Unicode glyphs.
    pub unicode: bool,
    /// Terminal color capability.
    pub color_tier: ColorTier,
}

/// One element of a render plan: a glyph, its visual role, and optionally a
/// concrete blended color.
///
/// `color` is `Some` only where blending produced a per-cell color (the
/// gradient across filled cells and the pulse fade); every other segment is
/// styled by role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The glyph text of this segment.
    pub text: String,
    /// How the segment should be styled.
    pub role: Role,
    /// A concrete blended foreground color, when one applies.
    pub color: Option<Rgb>,
}

impl Segment {
    fn new(text: String, role: Role) -> Self {
        Self {
            text,
            role,
            color: None,
        }
    }
}

/// Message indicating that the indeterminate animation should advance one
/// frame.
///
/// Tick messages carry the owning bar's identity so that applications with
/// several bars route frames correctly, plus a tag that keeps a bar from
/// accumulating tick loops when frames arrive faster than expected.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Time at which the tick occurred.
    pub time: std::time::SystemTime,
    /// Identifier of the bar this message belongs to.
    pub id: i64,
    /// Internal sequence number preventing duplicate tick loops.
    tag: i64,
}

/// Configuration options for customizing bar behavior and appearance.
///
/// Options are applied in order by [`new`], so later options win where they
/// overlap.
///
/// # Examples
///
/// ```rust
/// use bubbletea_patternbar::bar::{new, with_pattern, with_width};
/// use bubbletea_patternbar::pattern::BLOCK;
///
/// let bar = new(&[
///     with_width(60),
///     with_pattern(BLOCK.clone()),
/// ]);
/// assert_eq!(bar.width, 60);
/// ```
pub enum ProgressOption {
    /// Sets the glyph pattern used to render the bar.
    WithPattern(ProgressPattern),
    /// Sets the bar body width in terminal columns.
    WithWidth(usize),
    /// Sets the decoration rendered before the bar body.
    WithPrefix(String),
    /// Sets the decoration rendered after the bar body.
    WithSuffix(String),
    /// Sets the color of completely filled cells.
    WithFilledColor(Rgb),
    /// Sets the color of the partially filled boundary cell.
    WithFillingColor(Rgb),
    /// Sets the color of empty cells and the cursor track.
    WithEmptyColor(Rgb),
    /// Enables a gradient across the filled region, starting from this color
    /// at the left edge and blending into the filled color at the right.
    WithGradient(Rgb),
    /// Sets the foreground and background of the indeterminate pulse.
    WithPulseColors(Rgb, Rgb),
    /// Sets the single-glyph bar characters used by the pulse animation:
    /// first the Unicode form, then the ASCII fallback.
    WithBarGlyphs(String, String),
    /// Starts the bar in the indeterminate state.
    WithIndeterminate,
    /// Injects the clock driving the pulse animation.
    WithClock(Arc<dyn Clock>),
}

impl ProgressOption {
    fn apply(&self, m: &mut Model) {
        match self {
            ProgressOption::WithPattern(pattern) => m.pattern = pattern.clone(),
            ProgressOption::WithWidth(width) => m.width = *width,
            ProgressOption::WithPrefix(prefix) => m.prefix = prefix.clone(),
            ProgressOption::WithSuffix(suffix) => m.suffix = suffix.clone(),
            ProgressOption::WithFilledColor(color) => m.filled_color = *color,
            ProgressOption::WithFillingColor(color) => m.filling_color = *color,
            ProgressOption::WithEmptyColor(color) => m.empty_color = *color,
            ProgressOption::WithGradient(color) => m.gradient_from = Some(*color),
            ProgressOption::WithPulseColors(fg, bg) => {
                m.pulse_foreground = *fg;
                m.pulse_background = *bg;
            }
            ProgressOption::WithBarGlyphs(unicode, ascii) => {
                m.unicode_bar = unicode.clone();
                m.ascii_bar = ascii.clone();
            }
            ProgressOption::WithIndeterminate => m.is_indeterminate = true,
            ProgressOption::WithClock(clock) => m.clock = clock.clone(),
        }
    }
}

/// Sets the glyph pattern used to render the bar.
pub fn with_pattern(pattern: ProgressPattern) -> ProgressOption {
    ProgressOption::WithPattern(pattern)
}

/// Sets the bar body width in terminal columns.
pub fn with_width(width: usize) -> ProgressOption {
    ProgressOption::WithWidth(width)
}

/// Sets the decoration rendered before the bar body.
pub fn with_prefix(prefix: String) -> ProgressOption {
    ProgressOption::WithPrefix(prefix)
}

/// Sets the decoration rendered after the bar body.
pub fn with_suffix(suffix: String) -> ProgressOption {
    ProgressOption::WithSuffix(suffix)
}

/// Sets the color of completely filled cells.
pub fn with_filled_color(color: Rgb) -> ProgressOption {
    ProgressOption::WithFilledColor(color)
}

/// Sets the color of the partially filled boundary cell.
pub fn with_filling_color(color: Rgb) -> ProgressOption {
    ProgressOption::WithFillingColor(color)
}

/// Sets the color of empty cells and the cursor track.
pub fn with_empty_color(color: Rgb) -> ProgressOption {
    ProgressOption::WithEmptyColor(color)
}

/// Enables a left-to-right gradient across the filled region.
///
/// The filled region blends from `from` at its left edge into the configured
/// filled color at its right edge. Filling and empty cells never take part
/// in the gradient.
///
/// # Examples
///
/// ```rust
/// use bubbletea_patternbar::bar::{new, with_gradient, with_width};
/// use bubbletea_patternbar::blend::Rgb;
/// use bubbletea_patternbar::quantize::Role;
///
/// let mut bar = new(&[
///     with_width(10),
///     with_gradient(Rgb::new(0xff, 0x00, 0x00)),
/// ]);
/// bar.set_percent(1.0);
///
/// let request = bar.request();
/// let segments = bar.render(&request);
/// let filled: Vec<_> = segments.iter().filter(|s| s.role == Role::Filled).collect();
/// assert_eq!(filled.first().unwrap().color, Some(Rgb::new(0xff, 0x00, 0x00)));
/// ```
pub fn with_gradient(from: Rgb) -> ProgressOption {
    ProgressOption::WithGradient(from)
}

/// Sets the foreground and background colors of the indeterminate pulse.
pub fn with_pulse_colors(foreground: Rgb, background: Rgb) -> ProgressOption {
    ProgressOption::WithPulseColors(foreground, background)
}

/// Sets the single-glyph bar characters used by the pulse animation, Unicode
/// form first, ASCII fallback second.
pub fn with_bar_glyphs(unicode: String, ascii: String) -> ProgressOption {
    ProgressOption::WithBarGlyphs(unicode, ascii)
}

/// Starts the bar in the indeterminate state.
pub fn with_indeterminate() -> ProgressOption {
    ProgressOption::WithIndeterminate
}

/// Injects the clock driving the pulse animation; tests use this to render
/// the pulse at a fixed instant.
pub fn with_clock(clock: Arc<dyn Clock>) -> ProgressOption {
    ProgressOption::WithClock(clock)
}

/// The pattern progress bar model.
///
/// Holds the pattern, geometry, styling, progress state, and the sweep phase
/// counter for the indeterminate animation. The model renders either through
/// [`Model::render`], producing a [`Segment`] plan for hosts that style
/// their own output, or through [`Model::view`]/[`Model::view_as`], which
/// apply lipgloss styling.
///
/// Rendering is synchronous and allocates nothing beyond the output plan;
/// there is no I/O and no shared state, so any number of bars can render
/// concurrently from their own threads.
#[derive(Debug, Clone)]
pub struct Model {
    /// An identifier to keep us from receiving messages intended for other
    /// bars.
    id: i64,
    /// An identifier to keep us from receiving tick messages too quickly.
    tag: i64,

    /// Glyph pattern used to render the bar.
    pub pattern: ProgressPattern,
    /// Bar body width in terminal columns, excluding decorations.
    pub width: usize,
    /// Decoration before the bar body.
    pub prefix: String,
    /// Decoration after the bar body.
    pub suffix: String,

    /// Current progress value.
    pub value: f64,
    /// The value representing 100%.
    pub max_value: f64,
    /// Whether the bar renders the indeterminate animation.
    pub is_indeterminate: bool,

    /// Whether the target terminal can display Unicode glyphs.
    pub unicode: bool,
    /// Terminal color capability used by the view layer and the pulse.
    pub color_tier: ColorTier,

    /// Color of completely filled cells (and the cursor marker).
    pub filled_color: Rgb,
    /// Color of the partially filled boundary cell.
    pub filling_color: Rgb,
    /// Color of empty cells and the cursor track.
    pub empty_color: Rgb,
    /// Left-edge gradient color; `None` disables the gradient.
    pub gradient_from: Option<Rgb>,
    /// Pulse foreground color.
    pub pulse_foreground: Rgb,
    /// Pulse background color.
    pub pulse_background: Rgb,
    /// Bar glyph used by the pulse on Unicode terminals.
    pub unicode_bar: String,
    /// Bar glyph used by the pulse on ASCII terminals.
    pub ascii_bar: String,

    // Sweep phase counter; one step per indeterminate render.
    phase: u64,
    clock: Arc<dyn Clock>,
}

/// Creates a new bar with the given configuration options.
///
/// # Default Configuration
///
/// - **Pattern**: braille ramp
/// - **Width**: 40 columns
/// - **Decorations**: `"["` and `"]"`
/// - **Max value**: 100.0
/// - **Colors**: green filled, orange filling, grey empty, dodger-blue pulse
///
/// # Examples
///
/// ```rust
/// use bubbletea_patternbar::bar::new;
///
/// let bar = new(&[]);
/// assert_eq!(bar.width, 40);
/// assert_eq!(bar.pattern.name(), "braille");
/// assert_eq!(bar.percent(), 0.0);
/// ```
pub fn new(opts: &[ProgressOption]) -> Model {
    let mut m = Model {
        id: next_id(),
        tag: 0,
        pattern: BRAILLE.clone(),
        width: DEFAULT_WIDTH,
        prefix: "[".to_string(),
        suffix: "]".to_string(),
        value: 0.0,
        max_value: DEFAULT_MAX_VALUE,
        is_indeterminate: false,
        unicode: true,
        color_tier: ColorTier::Full,
        filled_color: DEFAULT_FILLED,
        filling_color: DEFAULT_FILLING,
        empty_color: DEFAULT_EMPTY,
        gradient_from: None,
        pulse_foreground: DEFAULT_PULSE_FOREGROUND,
        pulse_background: DEFAULT_PULSE_BACKGROUND,
        unicode_bar: "━".to_string(),
        ascii_bar: "-".to_string(),
        phase: 0,
        clock: Arc::new(SystemClock),
    };

    for opt in opts {
        opt.apply(&mut m);
    }

    m
}

// The capability-resolved inputs for one render: pattern and decorations
// swapped together so a styled Unicode bracket can't survive into an
// ASCII-only render.
struct Resolved {
    pattern: ProgressPattern,
    prefix: String,
    suffix: String,
    body: usize,
}

impl Model {
    /// Returns the bar's unique identifier, used for tick message routing.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the clamped progress fraction in `[0, 1]`.
    pub fn percent(&self) -> f64 {
        if self.max_value <= 0.0 {
            return 0.0;
        }
        clamp_fraction(self.value / self.max_value)
    }

    /// Sets progress as a fraction in `[0, 1]`; out-of-range values clamp.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_patternbar::bar::new;
    ///
    /// let mut bar = new(&[]);
    /// bar.set_percent(0.75);
    /// assert_eq!(bar.percent(), 0.75);
    /// bar.set_percent(1.5);
    /// assert_eq!(bar.percent(), 1.0);
    /// ```
    pub fn set_percent(&mut self, p: f64) {
        self.value = clamp_fraction(p) * self.max_value;
    }

    /// Sets the raw progress value; clamping happens at render time.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Replaces the pattern by registry name.
    ///
    /// Unknown names fail here, at configuration time; rendering never sees
    /// an unresolved pattern.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_patternbar::bar::new;
    ///
    /// let mut bar = new(&[]);
    /// bar.set_pattern("block").unwrap();
    /// assert_eq!(bar.pattern.name(), "block");
    /// assert!(bar.set_pattern("no-such-pattern").is_err());
    /// ```
    pub fn set_pattern(&mut self, name: &str) -> Result<(), PatternError> {
        self.pattern = Registry::bundled().lookup(name)?.clone();
        Ok(())
    }

    /// Derives a render request from the model's own state, sized so the
    /// full configured width fits.
    pub fn request(&self) -> RenderRequest {
        RenderRequest {
            value: self.value,
            max_value: self.max_value,
            available_width: self.width + str_width(&self.prefix) + str_width(&self.suffix),
            is_indeterminate: self.is_indeterminate,
            unicode: self.unicode,
            color_tier: self.color_tier,
        }
    }

    /// Renders one frame as an ordered segment plan.
    ///
    /// Resolves capabilities (substituting the ASCII pattern and decorations
    /// together when the terminal lacks Unicode), clips the body to the
    /// available width, and dispatches to indeterminate, cursor, or
    /// quantized rendering. When the body has no room at all the plan is
    /// empty; a shrinking terminal never errors.
    ///
    /// For the indeterminate sweep this advances the owned phase counter by
    /// exactly one step per invocation, which is the only side effect of
    /// rendering.
    pub fn render(&mut self, request: &RenderRequest) -> Vec<Segment> {
        let resolved = self.resolve(request);
        if request.is_indeterminate && resolved.body > 0 && !resolved.pattern.is_cursor() {
            self.phase = sweep_advance(self.phase, resolved.body, resolved.pattern.len());
        }
        self.assemble(request, &resolved)
    }

    /// Renders the current state as a styled string.
    ///
    /// Unlike [`Model::render`] this does not advance the sweep phase; in a
    /// bubbletea program the phase advances in [`Model::update`], once per
    /// accepted tick, so repeated views of the same frame are stable.
    pub fn view(&self) -> String {
        let request = self.request();
        let resolved = self.resolve(&request);
        let segments = self.assemble(&request, &resolved);
        self.render_styled(&segments)
    }

    /// Renders the bar at an explicit fraction, bypassing the stored value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_patternbar::bar::new;
    ///
    /// let bar = new(&[]);
    /// let half = bar.view_as(0.5);
    /// assert!(half.contains('⣿'));
    /// ```
    pub fn view_as(&self, fraction: f64) -> String {
        let mut request = self.request();
        request.value = clamp_fraction(fraction);
        request.max_value = 1.0;
        request.is_indeterminate = false;
        let resolved = self.resolve(&request);
        let segments = self.assemble(&request, &resolved);
        self.render_styled(&segments)
    }

    /// Creates a tick message for this bar.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            time: std::time::SystemTime::now(),
            id: self.id,
            tag: self.tag,
        }
    }

    /// Returns the command that schedules the next indeterminate animation
    /// frame. Return this from your application's `update` to start or
    /// continue the animation.
    pub fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;

        bubbletea_tick(Duration::from_millis(1000 / FPS), move |_| {
            Box::new(TickMsg {
                time: std::time::SystemTime::now(),
                id,
                tag,
            }) as Msg
        })
    }

    /// Processes messages, advancing the indeterminate animation on ticks.
    ///
    /// Tick messages for other bars (or stale ticks from an abandoned loop)
    /// are ignored. A tick received while the bar is determinate ends the
    /// animation loop by returning `None`.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(tick_msg) = msg.downcast_ref::<TickMsg>() {
            if tick_msg.id > 0 && tick_msg.id != self.id {
                return None;
            }
            if tick_msg.tag > 0 && tick_msg.tag != self.tag {
                return None;
            }
            if !self.is_indeterminate {
                return None;
            }

            if !self.pattern.is_cursor() {
                let request = self.request();
                let resolved = self.resolve(&request);
                if resolved.body > 0 {
                    self.phase = sweep_advance(self.phase, resolved.body, resolved.pattern.len());
                }
            }

            self.tag += 1;
            return Some(self.tick());
        }

        None
    }

    /// Applies role styling (and per-segment blended colors) to a plan.
    ///
    /// Under [`ColorTier::None`] the glyphs render unstyled.
    pub fn render_styled(&self, segments: &[Segment]) -> String {
        let mut out = String::new();
        for segment in segments {
            let color = segment.color.or_else(|| self.role_color(segment.role));
            match color {
                Some(color) if self.color_tier != ColorTier::None => {
                    let styled = lipgloss::Style::new()
                        .foreground(lipgloss::Color::from(color.hex().as_str()))
                        .render(&segment.text);
                    out.push_str(&styled);
                }
                _ => out.push_str(&segment.text),
            }
        }
        out
    }

    fn role_color(&self, role: Role) -> Option<Rgb> {
        match role {
            Role::Filled | Role::Cursor => Some(self.filled_color),
            Role::Filling => Some(self.filling_color),
            Role::Empty => Some(self.empty_color),
            // Decorations render plain; pulse cells carry their own color.
            Role::Prefix | Role::Suffix | Role::Pulse => None,
        }
    }

    fn resolve(&self, request: &RenderRequest) -> Resolved {
        let use_ascii = !request.unicode && self.pattern.is_unicode();
        let pattern = if use_ascii {
            Registry::bundled().ascii_fallback(&self.pattern)
        } else {
            self.pattern.clone()
        };
        let prefix = if use_ascii && contains_unicode(&self.prefix) {
            "[".to_string()
        } else {
            self.prefix.clone()
        };
        let suffix = if use_ascii && contains_unicode(&self.suffix) {
            "]".to_string()
        } else {
            self.suffix.clone()
        };

        let decorations = str_width(&prefix) + str_width(&suffix);
        let body = self
            .width
            .min(request.available_width.saturating_sub(decorations));

        Resolved {
            pattern,
            prefix,
            suffix,
            body,
        }
    }

    fn assemble(&self, request: &RenderRequest, resolved: &Resolved) -> Vec<Segment> {
        if resolved.body == 0 {
            return Vec::new();
        }

        let mut segments = Vec::with_capacity(resolved.body + 2);
        segments.push(Segment::new(resolved.prefix.clone(), Role::Prefix));

        if request.is_indeterminate {
            self.assemble_indeterminate(request, resolved, &mut segments);
        } else {
            self.assemble_quantized(request, resolved, &mut segments);
        }

        segments.push(Segment::new(resolved.suffix.clone(), Role::Suffix));
        segments
    }

    fn assemble_indeterminate(
        &self,
        request: &RenderRequest,
        resolved: &Resolved,
        segments: &mut Vec<Segment>,
    ) {
        if resolved.pattern.is_cursor() {
            let glyph = if request.unicode {
                &self.unicode_bar
            } else {
                &self.ascii_bar
            };
            let row = pulse_row(
                resolved.body,
                glyph,
                self.pulse_foreground,
                self.pulse_background,
                request.color_tier,
                self.clock.now_seconds(),
            );
            for cell in row {
                segments.push(Segment {
                    text: cell.glyph,
                    role: Role::Pulse,
                    color: cell.color,
                });
            }
            return;
        }

        let frame = sweep_frame(self.phase, resolved.body, resolved.pattern.len());
        for i in 0..resolved.body {
            if i == frame.active_cell {
                segments.push(Segment::new(
                    resolved.pattern.glyph(frame.density + 1).to_string(),
                    Role::Filled,
                ));
            } else {
                segments.push(Segment::new(
                    resolved.pattern.empty().to_string(),
                    Role::Empty,
                ));
            }
        }
    }

    fn assemble_quantized(
        &self,
        request: &RenderRequest,
        resolved: &Resolved,
        segments: &mut Vec<Segment>,
    ) {
        let fraction = if request.max_value <= 0.0 {
            0.0
        } else {
            clamp_fraction(request.value / request.max_value)
        };

        let cells = quantize(fraction, resolved.body, &resolved.pattern);
        let filled_count = cells.iter().filter(|c| c.role == Role::Filled).count();
        let mut filled_seen = 0usize;

        for cell in cells {
            let mut segment = Segment::new(
                resolved.pattern.glyph(cell.glyph_index).to_string(),
                cell.role,
            );
            if cell.role == Role::Filled {
                if let Some(from) = self.gradient_from {
                    let t = if filled_count > 1 {
                        filled_seen as f64 / (filled_count - 1) as f64
                    } else {
                        0.0
                    };
                    segment.color = Some(from.blend(self.filled_color, t));
                }
                filled_seen += 1;
            }
            segments.push(segment);
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(&[]), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
