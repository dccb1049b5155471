//! Degrees/hours, minutes, seconds: composition, decomposition, rendering, and parsing.
//!
//! # Sign policy
//!
//! Components are combined by magnitude and a single sign is applied to the total. The sign comes from the first
//! component that is non-zero (or negative zero): degrees, then minutes, then seconds. This makes
//! `(d, m, s)`, `(d, -m, s)`, `(d, m, -s)` and `(d, -m, -s)` equivalent for any non-zero `d`, while `(0, -30, 0)` is
//! still half a degree below zero.
//!
//! Everything is summed in seconds before dividing, so minutes or seconds of 60 or more carry into the next unit:
//!
//! ```rust
//! use angles_core::sexagesimal::compose;
//! assert_eq!(compose(-44.0, 59.0, 60.0), -45.0);
//! assert_eq!(compose(-45.0, 30.0, 0.0), -45.5);
//! ```

use crate::error::{AngleError, Result};
use crate::math;
use crate::variant::Notation;
use core::fmt::{self, Display, Formatter, Write};

/// Seconds decimals used by `Display` when the formatter carries no precision.
pub const DEFAULT_SECONDS_DECIMALS: usize = 9;

/// Upper limit for the seconds decimals; keeps the fixed-point rendering inside `u64`.
pub const MAX_SECONDS_DECIMALS: usize = 12;

/// 2^50: scaled totals above this lose integer precision in an `f64`.
const FIXED_POINT_LIMIT: f64 = 1_125_899_906_842_624.0;

/// Signed total seconds of a `(degrees, minutes, seconds)` triple.
///
/// ```rust
/// use angles_core::sexagesimal::degrees2seconds;
/// assert_eq!(degrees2seconds(45.0, 60.0, 0.0), degrees2seconds(45.0, -60.0, 0.0));
/// assert_eq!(degrees2seconds(0.0, -59.0, 60.0), -3600.0);
/// ```
pub fn degrees2seconds(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    let magnitude = math::abs(degrees) * 3600.0 + math::abs(minutes) * 60.0 + math::abs(seconds);
    let negative = if degrees != 0.0 || math::is_negative(degrees) {
        math::is_negative(degrees)
    } else if minutes != 0.0 || math::is_negative(minutes) {
        math::is_negative(minutes)
    } else {
        math::is_negative(seconds)
    };
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Value in whole units (degrees or hours) of a sexagesimal triple.
#[inline]
pub fn compose(whole: f64, minutes: f64, seconds: f64) -> f64 {
    degrees2seconds(whole, minutes, seconds) / 3600.0
}

/// A value split into whole units, minutes, and seconds.
///
/// `whole` and `minutes` are integral; `seconds` is in `[0, 60)` and already rounded to the decimals it was built
/// with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sexagesimal {
    /// Sign of the whole value.
    pub negative: bool,
    /// Whole degrees or hours (magnitude).
    pub whole: f64,
    /// Whole minutes in `[0, 60)`.
    pub minutes: f64,
    /// Seconds in `[0, 60)`.
    pub seconds: f64,
    decimals: usize,
}

impl Sexagesimal {
    /// Splits `value` keeping `decimals` places of seconds.
    ///
    /// Rounding happens on the total seconds before splitting, so the result never shows 60 seconds or 60 minutes.
    ///
    /// ```rust
    /// use angles_core::sexagesimal::Sexagesimal;
    /// let parts = Sexagesimal::from_value(-23.436694444, 3);
    /// assert!(parts.negative);
    /// assert_eq!((parts.whole, parts.minutes), (23.0, 26.0));
    /// assert!((parts.seconds - 12.1).abs() < 1e-9);
    /// ```
    pub fn from_value(value: f64, decimals: usize) -> Self {
        let magnitude = math::abs(value) * 3600.0;

        // Keep the fixed-point total exactly representable.
        let mut decimals = decimals.min(MAX_SECONDS_DECIMALS);
        while decimals > 0 && magnitude * 10u64.pow(decimals as u32) as f64 > FIXED_POINT_LIMIT {
            decimals -= 1;
        }
        let scale = 10u64.pow(decimals as u32) as f64;
        let total = math::round(magnitude * scale) / scale;

        let mut whole = math::floor(total / 3600.0);
        let mut rest = total - whole * 3600.0;
        if rest < 0.0 {
            whole -= 1.0;
            rest += 3600.0;
        }
        if !(0.0..3600.0).contains(&rest) {
            rest = 0.0;
        }
        let mut minutes = math::floor(rest / 60.0);
        let mut seconds = rest - minutes * 60.0;
        if seconds < 0.0 {
            minutes -= 1.0;
            seconds += 60.0;
        }

        let mut fixed = math::round(seconds * scale);
        if fixed >= 60.0 * scale {
            fixed -= 60.0 * scale;
            minutes += 1.0;
            if minutes >= 60.0 {
                minutes -= 60.0;
                whole += 1.0;
            }
        }

        Sexagesimal {
            negative: value < 0.0 && total > 0.0,
            whole,
            minutes,
            seconds: fixed / scale,
            decimals,
        }
    }

    /// Signed components: whole units carry the sign (as `-0.0` when the value is negative but under one unit).
    ///
    /// Feeding these back into [`compose`] reproduces the value to the rounding used.
    pub fn components(&self) -> (f64, f64, f64) {
        let whole = if self.negative { -self.whole } else { self.whole };
        (whole, self.minutes, self.seconds)
    }

    /// Recomposed value.
    pub fn value(&self) -> f64 {
        let (whole, minutes, seconds) = self.components();
        compose(whole, minutes, seconds)
    }

    /// Renders in the given notation.
    pub fn display(&self, notation: Notation) -> impl Display + '_ {
        Rendered {
            parts: self,
            notation,
        }
    }
}

struct Rendered<'a> {
    parts: &'a Sexagesimal,
    notation: Notation,
}

impl Display for Rendered<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let p = self.parts;
        if p.negative {
            f.write_char('-')?;
        }
        let seconds = Seconds {
            value: p.seconds,
            decimals: p.decimals,
        };
        match self.notation {
            Notation::Dms => write!(f, "{}* {}' {}\"", p.whole, p.minutes, seconds),
            Notation::Hms => write!(f, "{}:{}:{}", p.whole, p.minutes, seconds),
        }
    }
}

/// Fixed-point seconds with trailing zeros removed.
struct Seconds {
    value: f64,
    decimals: usize,
}

impl Display for Seconds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let scale = 10u64.pow(self.decimals as u32);
        let fixed = math::round(self.value * scale as f64) as u64;
        let int = fixed / scale;
        let mut frac = fixed % scale;
        if frac == 0 {
            return write!(f, "{}", int);
        }
        let mut width = self.decimals;
        while frac % 10 == 0 {
            frac /= 10;
            width -= 1;
        }
        write!(f, "{}.{:0width$}", int, frac, width = width)
    }
}

/// Writes `value` in `notation`, honouring the formatter precision as the number of seconds decimals.
pub(crate) fn write_value(f: &mut Formatter<'_>, value: f64, notation: Notation) -> fmt::Result {
    let decimals = f.precision().unwrap_or(DEFAULT_SECONDS_DECIMALS);
    let parts = Sexagesimal::from_value(value, decimals);
    let rendered = parts.display(notation);
    write!(f, "{}", rendered)
}

/// Parses the rendered form of `notation`, or a bare number, into a value in whole units.
///
/// DMS accepts `-23* 26' 12.1"` and its prefixes (`-23*`, `-23* 26'`); HMS accepts `23:26:12.1`, `23:26` and `23`.
///
/// ```rust
/// use angles_core::sexagesimal::parse;
/// use angles_core::Notation;
/// assert_eq!(parse("-45* 30' 0\"", Notation::Dms).unwrap(), -45.5);
/// assert_eq!(parse("11:59:60", Notation::Hms).unwrap(), 12.0);
/// assert_eq!(parse("12.5", Notation::Hms).unwrap(), 12.5);
/// ```
pub fn parse(input: &str, notation: Notation) -> Result<f64> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AngleError::InvalidFormat { notation });
    }
    if let Ok(value) = input.parse::<f64>() {
        return if value.is_finite() {
            Ok(value)
        } else {
            Err(AngleError::NonFinite {
                component: notation.whole_component(),
            })
        };
    }
    let (whole, minutes, seconds) = match notation {
        Notation::Dms => split_dms(input),
        Notation::Hms => split_hms(input),
    }
    .ok_or(AngleError::InvalidFormat { notation })?;

    let whole = AngleError::parse_component(notation.whole_component(), whole)?;
    let minutes = match minutes {
        Some(text) => AngleError::parse_component("minutes", text)?,
        None => 0.0,
    };
    let seconds = match seconds {
        Some(text) => AngleError::parse_component("seconds", text)?,
        None => 0.0,
    };
    Ok(compose(whole, minutes, seconds))
}

type Fields<'a> = (&'a str, Option<&'a str>, Option<&'a str>);

fn split_dms(input: &str) -> Option<Fields<'_>> {
    let (degrees, rest) = input.split_once('*')?;
    let rest = rest.trim();
    if rest.is_empty() {
        return Some((degrees, None, None));
    }
    let (minutes, rest) = rest.split_once('\'')?;
    let rest = rest.trim();
    if rest.is_empty() {
        return Some((degrees, Some(minutes), None));
    }
    let seconds = rest.strip_suffix('"')?;
    Some((degrees, Some(minutes), Some(seconds)))
}

fn split_hms(input: &str) -> Option<Fields<'_>> {
    let mut fields = input.split(':');
    let hours = fields.next()?;
    let minutes = fields.next();
    let seconds = fields.next();
    if fields.next().is_some() {
        return None;
    }
    Some((hours, minutes, seconds))
}
