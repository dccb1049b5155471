//! The unbounded [`Angle`] and the degree/radian converters.

use crate::error::{AngleError, Result};
use crate::math;
use crate::sexagesimal::{self, Sexagesimal};
use crate::variant::Notation;
use core::f64::consts::PI;
use core::fmt::{Display, Formatter};
use core::ops::*;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Degrees to radians.
///
/// ```rust
/// use angles_core::deg2rad;
/// assert_eq!(deg2rad(45.0), core::f64::consts::FRAC_PI_4);
/// ```
#[inline]
pub fn deg2rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Radians to degrees.
///
/// ```rust
/// use angles_core::rad2deg;
/// assert_eq!(rad2deg(core::f64::consts::FRAC_PI_4), 45.0);
/// ```
#[inline]
pub fn rad2deg(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// An angle with no range constraint, stored in degrees.
///
/// Radians are derived on demand, so `value` and `radians` can never disagree.
///
/// ```rust
/// use angles_core::Angle;
///
/// let a = Angle::from_dms(-44.0, 59.0, 60.0);
/// assert_eq!(a.value(), -45.0);
/// assert_eq!(Angle::default().to_string(), "0* 0' 0\"");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle {
    value: f64,
}

impl Angle {
    /// The zero angle.
    pub const ZERO: Angle = Angle::new(0.0);

    /// Creates an angle of `degrees`.
    #[inline]
    pub const fn new(degrees: f64) -> Self {
        Angle { value: degrees }
    }

    /// Creates an angle from degrees and minutes.
    #[inline]
    pub fn from_dm(degrees: f64, minutes: f64) -> Self {
        Self::from_dms(degrees, minutes, 0.0)
    }

    /// Creates an angle from degrees, minutes, and seconds; see [`crate::sexagesimal`] for the sign policy.
    #[inline]
    pub fn from_dms(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Self::new(sexagesimal::compose(degrees, minutes, seconds))
    }

    /// Creates an angle from radians.
    #[inline]
    pub fn from_radians(radians: f64) -> Self {
        Self::new(rad2deg(radians))
    }

    /// Creates an angle from textual degrees, minutes, and seconds.
    ///
    /// ```rust
    /// use angles_core::Angle;
    /// let a = Angle::from_strs("0", "0", "-6.1").unwrap();
    /// assert!((a.value() + 6.1 / 3600.0).abs() < 1e-15);
    /// assert!(Angle::from_strs("forty", "0", "0").is_err());
    /// ```
    pub fn from_strs(degrees: &str, minutes: &str, seconds: &str) -> Result<Self> {
        Ok(Self::from_dms(
            AngleError::parse_component("degrees", degrees)?,
            AngleError::parse_component("minutes", minutes)?,
            AngleError::parse_component("seconds", seconds)?,
        ))
    }

    /// Degrees to radians; same as the free [`deg2rad`].
    #[inline]
    pub fn deg2rad(degrees: f64) -> f64 {
        deg2rad(degrees)
    }

    /// Radians to degrees; same as the free [`rad2deg`].
    #[inline]
    pub fn rad2deg(radians: f64) -> f64 {
        rad2deg(radians)
    }

    /// Value in degrees.
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Replaces the value (degrees).
    #[inline]
    pub fn set_value(&mut self, degrees: f64) {
        self.value = degrees;
    }

    /// Value in radians.
    #[inline]
    pub fn radians(self) -> f64 {
        deg2rad(self.value)
    }

    /// Replaces the value from radians.
    #[inline]
    pub fn set_radians(&mut self, radians: f64) {
        self.value = rad2deg(radians);
    }

    /// Wraps the value into `[0, 360)` in place.
    ///
    /// ```rust
    /// use angles_core::Angle;
    /// let mut a = Angle::new(45.0 + 360.0);
    /// a.normalize();
    /// assert_eq!(a.value(), 45.0);
    /// ```
    pub fn normalize(&mut self) {
        let wrapped = math::rem_euclid(self.value, Notation::Dms.full_turn());
        if wrapped != self.value {
            log::trace!("normalized angle {} to {}", self.value, wrapped);
        }
        self.value = wrapped;
    }

    /// Copy wrapped into `[0, 360)`.
    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Degrees, minutes, seconds of the value, seconds kept to `decimals` places.
    #[inline]
    pub fn to_sexagesimal(self, decimals: usize) -> Sexagesimal {
        Sexagesimal::from_value(self.value, decimals)
    }

    /// Division that reports a zero divisor instead of producing an infinity.
    pub fn checked_div(self, rhs: Angle) -> Result<Angle> {
        if rhs.value == 0.0 {
            log::debug!("refused to divide {} by a zero angle", self.value);
            return Err(AngleError::DivideByZero);
        }
        Ok(Angle::new(self.value / rhs.value))
    }

    /// In-place division; the receiver is untouched on error.
    ///
    /// ```rust
    /// use angles_core::{Angle, ErrorKind};
    /// let mut a = Angle::new(90.0);
    /// a.try_div_assign(Angle::new(2.0)).unwrap();
    /// assert_eq!(a.value(), 45.0);
    /// assert_eq!(a.try_div_assign(Angle::ZERO).unwrap_err().kind(), ErrorKind::DivideByZero);
    /// assert_eq!(a.value(), 45.0);
    /// ```
    pub fn try_div_assign(&mut self, rhs: Angle) -> Result<()> {
        *self = self.checked_div(rhs)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl Add for Angle {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl Sub for Angle {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl Mul for Angle {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.value * rhs.value)
    }
}

impl MulAssign for Angle {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.value *= rhs.value;
    }
}

impl Div for Angle {
    type Output = Result<Self>;
    #[inline]
    fn div(self, rhs: Self) -> Result<Self> {
        self.checked_div(rhs)
    }
}

impl Neg for Angle {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl PartialEq<f64> for Angle {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.value == *other
    }
}

impl From<f64> for Angle {
    #[inline]
    fn from(degrees: f64) -> Self {
        Self::new(degrees)
    }
}

impl Display for Angle {
    /// DMS rendering; a formatter precision sets the seconds decimals.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        sexagesimal::write_value(f, self.value, Notation::Dms)
    }
}

impl FromStr for Angle {
    type Err = AngleError;

    /// Parses a DMS rendering (`-23* 26' 12.1"`) or plain degrees.
    fn from_str(s: &str) -> Result<Self> {
        sexagesimal::parse(s, Notation::Dms).map(Angle::new)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Angle {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Angle::new)
    }
}
