//! Pure conversion of calendar positions into horizontal layout percentages.
//!
//! Everything here is stateless: a [`TimePoint`] is mapped against an [`Axis`]
//! window and comes back as a percentage of the usable track width. Clamping
//! keeps bars and dots inside the visible area even for dates that fall
//! outside the configured window.

/// Upper clamp for positions, leaving a right-edge margin so dots and bar
/// starts never overflow the track.
pub const POSITION_MAX: f64 = 95.0;
/// Width floor so short or point-like ranges stay legible.
pub const MIN_WIDTH: f64 = 12.0;
/// Width ceiling, matching the position clamp.
pub const MAX_WIDTH: f64 = 95.0;
/// Ranges without an end date extend this far past the last axis year so
/// "ongoing" bars visually run off the edge of the track.
pub const ONGOING_OVERRUN: f64 = 0.5;

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const FALLBACK_YEAR: i32 = 2024;

/// The visible time window mapped onto 0..100% of the track.
///
/// Invariant: `end_year > start_year`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Axis {
    pub start_year: i32,
    pub end_year: i32,
}

impl Axis {
    pub fn span_years(&self) -> f64 {
        (self.end_year - self.start_year) as f64
    }

    /// Years to render as tick labels, inclusive of both ends.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.start_year..=self.end_year
    }
}

/// A calendar position normalized to a fractional year.
///
/// Content supplies dates in several shapes ("Jul 2025", a bare year, or
/// year + month fields); all of them are reduced to this one value type at
/// the content boundary so the mapper never parses strings per call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimePoint {
    pub year: i32,
    /// Fraction of the year already elapsed, `month_index / 12`, in `[0, 1)`.
    pub month_fraction: f64,
}

impl TimePoint {
    pub fn from_year(year: i32) -> Self {
        TimePoint {
            year,
            month_fraction: 0.0,
        }
    }

    /// `month` is 0-based (0 = January). Out-of-range months saturate to
    /// December rather than spilling into the next year.
    pub fn from_year_month(year: i32, month: u32) -> Self {
        TimePoint {
            year,
            month_fraction: month.min(11) as f64 / 12.0,
        }
    }

    /// Parses a display date like `"Jul 2025"` or `"2024"`.
    ///
    /// The last whitespace token is the year, the first an optional
    /// three-letter month. Unknown month tokens resolve to the start of the
    /// year; an unparsable year falls back to a fixed recent year so a typo
    /// in content degrades to a misplaced dot instead of a crash.
    pub fn parse(date: &str) -> Self {
        let tokens: Vec<&str> = date.split_whitespace().collect();
        let year = tokens
            .last()
            .and_then(|t| t.parse::<i32>().ok())
            .unwrap_or_else(|| {
                tracing::warn!(%date, "unparsable year in date token, using fallback");
                FALLBACK_YEAR
            });
        let month_fraction = if tokens.len() > 1 {
            month_fraction(tokens[0])
        } else {
            0.0
        };
        TimePoint {
            year,
            month_fraction,
        }
    }

    pub fn fractional_year(&self) -> f64 {
        self.year as f64 + self.month_fraction
    }
}

fn month_fraction(token: &str) -> f64 {
    match MONTHS.iter().position(|m| m.eq_ignore_ascii_case(token)) {
        Some(index) => index as f64 / 12.0,
        None => {
            tracing::warn!(%token, "unknown month token, using start of year");
            0.0
        }
    }
}

/// Horizontal placement of a ranged entity, in percent of the track width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub left: f64,
    pub width: f64,
}

impl Span {
    /// Right edge, capped at the full track width.
    pub fn end(&self) -> f64 {
        (self.left + self.width).min(100.0)
    }

    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Maps a point-in-time entity onto the axis. Clamped to `[0, POSITION_MAX]`;
/// dates outside the window are pulled into view rather than hidden.
pub fn point_position(at: TimePoint, axis: Axis) -> f64 {
    let percent = (at.fractional_year() - axis.start_year as f64) / axis.span_years() * 100.0;
    percent.clamp(0.0, POSITION_MAX)
}

/// Maps a ranged entity onto the axis. An absent end means "ongoing" and uses
/// `end_year + ONGOING_OVERRUN` as the effective end.
pub fn range_position(start: TimePoint, end: Option<TimePoint>, axis: Axis) -> Span {
    let left = point_position(start, axis);
    let effective_end = end
        .map(|e| e.fractional_year())
        .unwrap_or(axis.end_year as f64 + ONGOING_OVERRUN);
    let duration = effective_end - start.fractional_year();
    let width = (duration / axis.span_years() * 100.0).clamp(MIN_WIDTH, MAX_WIDTH);
    Span { left, width }
}
