//! Range-limited angles.
//!
//! [`Bounded<V>`] is one generic type for every range-limited variant. The marker `V` supplies the name, default
//! bounds, and notation; an instance stores its value together with the bounds in force, which default to the
//! marker's but may be overridden per instance.
//!
//! Every construction and mutation validates `minimum <= value <= maximum`. Arithmetic returns `Result` and never
//! clamps; wrapping only happens through an explicit [`Bounded::normalize`].

use crate::angle::{deg2rad, rad2deg, Angle};
use crate::error::{AngleError, Result};
use crate::math;
use crate::sexagesimal::{self, Sexagesimal};
use crate::variant::{Notation, Variant, VariantInfo};
use core::cmp::Ordering;
use core::fmt::{Display, Formatter};
use core::marker::PhantomData;
use core::ops::*;
use core::str::FromStr;

/// An angle confined to `[minimum, maximum]`.
///
/// # Examples
///
/// ```rust
/// use angles_core::{Declination, ErrorKind, RA};
///
/// let dec = Declination::from_dms(-23.0, 26.0, 12.1).unwrap();
/// assert_eq!(dec.to_string(), "-23* 26' 12.1\"");
///
/// let err = Declination::new(91.0).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Range);
///
/// assert_eq!(RA::default().to_string(), "0:0:0");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Bounded<V: Variant> {
    value: f64,
    minimum: f64,
    maximum: f64,
    _variant: PhantomData<V>,
}

impl<V: Variant> Bounded<V> {
    /// Creates an angle of `value` within the variant's default bounds.
    pub fn new(value: f64) -> Result<Self> {
        Self::checked(value, V::MINIMUM, V::MAXIMUM)
    }

    /// Creates an angle from whole units (degrees or hours) and minutes.
    pub fn from_dm(whole: f64, minutes: f64) -> Result<Self> {
        Self::from_dms(whole, minutes, 0.0)
    }

    /// Creates an angle from whole units (degrees or hours), minutes, and seconds.
    pub fn from_dms(whole: f64, minutes: f64, seconds: f64) -> Result<Self> {
        Self::new(sexagesimal::compose(whole, minutes, seconds))
    }

    /// Creates an angle from components with explicit bounds, overriding the variant's defaults.
    ///
    /// ```rust
    /// use angles_core::LimitedRangeAngle;
    /// let a = LimitedRangeAngle::with_bounds(-45.0, 0.0, 0.0, -90.0, 90.0).unwrap();
    /// assert_eq!((a.minimum(), a.maximum()), (-90.0, 90.0));
    /// assert!(LimitedRangeAngle::with_bounds(100.0, 0.0, 0.0, -90.0, 90.0).is_err());
    /// ```
    pub fn with_bounds(
        whole: f64,
        minutes: f64,
        seconds: f64,
        minimum: f64,
        maximum: f64,
    ) -> Result<Self> {
        Self::checked(sexagesimal::compose(whole, minutes, seconds), minimum, maximum)
    }

    /// Creates an angle from radians.
    pub fn from_radians(radians: f64) -> Result<Self> {
        Self::new(rad2deg(radians))
    }

    /// Creates an angle from textual components.
    ///
    /// ```rust
    /// use angles_core::{Declination, ErrorKind};
    /// assert_eq!(Declination::from_strs("-45", "30", "0").unwrap().value(), -45.5);
    /// assert_eq!(Declination::from_strs("-100", "0", "0").unwrap_err().kind(), ErrorKind::Range);
    /// assert_eq!(Declination::from_strs("x", "0", "0").unwrap_err().kind(), ErrorKind::InvalidArgument);
    /// ```
    pub fn from_strs(whole: &str, minutes: &str, seconds: &str) -> Result<Self> {
        Self::from_dms(
            AngleError::parse_component(V::NOTATION.whole_component(), whole)?,
            AngleError::parse_component("minutes", minutes)?,
            AngleError::parse_component("seconds", seconds)?,
        )
    }

    fn checked(value: f64, minimum: f64, maximum: f64) -> Result<Self> {
        check(value, minimum, maximum)?;
        Ok(Bounded {
            value,
            minimum,
            maximum,
            _variant: PhantomData,
        })
    }

    /// Name of the variant.
    #[inline]
    pub fn name(&self) -> &'static str {
        V::NAME
    }

    /// Display notation of the variant.
    #[inline]
    pub fn notation(&self) -> Notation {
        V::NOTATION
    }

    /// Static description of the variant (default bounds, not this instance's).
    #[inline]
    pub const fn info() -> VariantInfo {
        VariantInfo::of::<V>()
    }

    /// Stored value (degrees, or hours for HMS variants).
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Replaces the value; out-of-range values are rejected and leave the angle unchanged.
    ///
    /// ```rust
    /// use angles_core::Latitude;
    /// let mut lat = Latitude::new(10.0).unwrap();
    /// assert!(lat.set_value(95.0).is_err());
    /// assert_eq!(lat.value(), 10.0);
    /// ```
    pub fn set_value(&mut self, value: f64) -> Result<()> {
        check(value, self.minimum, self.maximum)?;
        self.value = value;
        Ok(())
    }

    /// Value converted with [`deg2rad`].
    #[inline]
    pub fn radians(&self) -> f64 {
        deg2rad(self.value)
    }

    /// Replaces the value from radians, with the same validation as [`Self::set_value`].
    pub fn set_radians(&mut self, radians: f64) -> Result<()> {
        self.set_value(rad2deg(radians))
    }

    /// Inclusive lower bound in force.
    #[inline]
    pub const fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Inclusive upper bound in force.
    #[inline]
    pub const fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Whether `value` would be accepted by this instance.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.minimum <= value && value <= self.maximum
    }

    /// Wraps the value by whole turns (360 degrees, or 24 hours for HMS variants).
    ///
    /// The target window is `[0, turn)` when the bounds admit it, otherwise `[minimum, minimum + turn)`. The wrapped
    /// value is re-validated.
    ///
    /// ```rust
    /// use angles_core::{LimitedRangeAngle, Longitude, RA};
    /// let mut a = LimitedRangeAngle::new(360.0).unwrap();
    /// a.normalize().unwrap();
    /// assert_eq!(a.value(), 0.0);
    ///
    /// let mut lon = Longitude::new(180.0).unwrap();
    /// lon.normalize().unwrap();
    /// assert_eq!(lon.value(), -180.0);
    ///
    /// let mut ra = RA::new(24.0).unwrap();
    /// ra.normalize().unwrap();
    /// assert_eq!(ra.value(), 0.0);
    /// ```
    pub fn normalize(&mut self) -> Result<()> {
        let turn = V::NOTATION.full_turn();
        let origin = if self.minimum <= 0.0 && turn <= self.maximum {
            0.0
        } else {
            self.minimum
        };
        let wrapped = origin + math::rem_euclid(self.value - origin, turn);
        if wrapped != self.value {
            log::trace!("normalized {} {} to {}", V::NAME, self.value, wrapped);
        }
        self.set_value(wrapped)
    }

    /// Components of the value, seconds kept to `decimals` places.
    #[inline]
    pub fn to_sexagesimal(&self, decimals: usize) -> Sexagesimal {
        Sexagesimal::from_value(self.value, decimals)
    }

    /// Applies `op` to both values and validates the result against the left operand's bounds.
    /// The right operand's bounds play no part.
    fn combine(self, rhs: Self, op: impl FnOnce(f64, f64) -> f64) -> Result<Self> {
        Self::checked(op(self.value, rhs.value), self.minimum, self.maximum)
    }

    /// In-place `+`; the receiver is untouched on error.
    pub fn try_add_assign(&mut self, rhs: Self) -> Result<()> {
        *self = (*self + rhs)?;
        Ok(())
    }

    /// In-place `-`; the receiver is untouched on error.
    pub fn try_sub_assign(&mut self, rhs: Self) -> Result<()> {
        *self = (*self - rhs)?;
        Ok(())
    }

    /// In-place `*`; the receiver is untouched on error.
    pub fn try_mul_assign(&mut self, rhs: Self) -> Result<()> {
        *self = (*self * rhs)?;
        Ok(())
    }

    /// In-place `/`; the receiver is untouched on error.
    pub fn try_div_assign(&mut self, rhs: Self) -> Result<()> {
        *self = (*self / rhs)?;
        Ok(())
    }
}

fn check(value: f64, minimum: f64, maximum: f64) -> Result<()> {
    if minimum <= value && value <= maximum {
        Ok(())
    } else {
        log::debug!("rejected {} outside [{}, {}]", value, minimum, maximum);
        Err(AngleError::Range {
            value,
            minimum,
            maximum,
        })
    }
}

impl<V: Variant> Default for Bounded<V> {
    /// Zero, or the lower bound when zero lies outside the variant's range.
    fn default() -> Self {
        let value = if V::MINIMUM <= 0.0 && 0.0 <= V::MAXIMUM {
            0.0
        } else {
            V::MINIMUM
        };
        Bounded {
            value,
            minimum: V::MINIMUM,
            maximum: V::MAXIMUM,
            _variant: PhantomData,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparisons (by value only)
// ─────────────────────────────────────────────────────────────────────────────

impl<V: Variant> PartialEq for Bounded<V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: Variant> PartialOrd for Bounded<V> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<V: Variant> PartialEq<f64> for Bounded<V> {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.value == *other
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<V: Variant> Add for Bounded<V> {
    type Output = Result<Self>;
    #[inline]
    fn add(self, rhs: Self) -> Result<Self> {
        self.combine(rhs, |a, b| a + b)
    }
}

impl<V: Variant> Sub for Bounded<V> {
    type Output = Result<Self>;
    #[inline]
    fn sub(self, rhs: Self) -> Result<Self> {
        self.combine(rhs, |a, b| a - b)
    }
}

impl<V: Variant> Mul for Bounded<V> {
    type Output = Result<Self>;
    #[inline]
    fn mul(self, rhs: Self) -> Result<Self> {
        self.combine(rhs, |a, b| a * b)
    }
}

impl<V: Variant> Div for Bounded<V> {
    type Output = Result<Self>;
    fn div(self, rhs: Self) -> Result<Self> {
        if rhs.value == 0.0 {
            log::debug!("refused to divide {} {} by zero", V::NAME, self.value);
            return Err(AngleError::DivideByZero);
        }
        self.combine(rhs, |a, b| a / b)
    }
}

impl<V: Variant> Neg for Bounded<V> {
    type Output = Result<Self>;
    #[inline]
    fn neg(self) -> Result<Self> {
        Self::checked(-self.value, self.minimum, self.maximum)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────────────

impl<V: Variant> From<Bounded<V>> for Angle {
    /// Drops the range; the value is carried over unchanged.
    #[inline]
    fn from(bounded: Bounded<V>) -> Self {
        Angle::new(bounded.value)
    }
}

impl<V: Variant> TryFrom<Angle> for Bounded<V> {
    type Error = AngleError;

    /// Validates against the variant's default bounds.
    fn try_from(angle: Angle) -> Result<Self> {
        Self::new(angle.value())
    }
}

impl<V: Variant> TryFrom<f64> for Bounded<V> {
    type Error = AngleError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl<V: Variant> Display for Bounded<V> {
    /// DMS or HMS rendering per the variant; a formatter precision sets the seconds decimals.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        sexagesimal::write_value(f, self.value, V::NOTATION)
    }
}

impl<V: Variant> FromStr for Bounded<V> {
    type Err = AngleError;

    /// Parses the variant's own rendering (or a bare number) and validates the default bounds.
    fn from_str(s: &str) -> Result<Self> {
        Self::new(sexagesimal::parse(s, V::NOTATION)?)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    struct Repr {
        value: f64,
        minimum: f64,
        maximum: f64,
    }

    #[derive(Deserialize)]
    struct PartialRepr {
        value: f64,
        minimum: Option<f64>,
        maximum: Option<f64>,
    }

    impl<V: Variant> Serialize for Bounded<V> {
        fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            Repr {
                value: self.value,
                minimum: self.minimum,
                maximum: self.maximum,
            }
            .serialize(serializer)
        }
    }

    impl<'de, V: Variant> Deserialize<'de> for Bounded<V> {
        /// Missing bounds fall back to the variant's defaults; the value is re-validated.
        fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let repr = PartialRepr::deserialize(deserializer)?;
            Bounded::checked(
                repr.value,
                repr.minimum.unwrap_or(V::MINIMUM),
                repr.maximum.unwrap_or(V::MAXIMUM),
            )
            .map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::variants::*;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};
    use proptest::prelude::*;

    fn kind<T: core::fmt::Debug>(result: Result<T>) -> ErrorKind {
        result.unwrap_err().kind()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // LimitedRangeAngle
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn limited_constructors() {
        assert_eq!(LimitedRangeAngle::default().radians(), 0.0);
        assert_eq!(LimitedRangeAngle::new(45.0).unwrap().radians(), deg2rad(45.0));
        assert_eq!(LimitedRangeAngle::from_dm(0.0, 60.0).unwrap().radians(), deg2rad(1.0));
        assert_abs_diff_eq!(
            LimitedRangeAngle::from_strs("0", "0", "6.1").unwrap().radians(),
            deg2rad(6.1 / 3600.0),
            epsilon = 1e-18
        );
    }

    #[test]
    fn limited_default_bounds() {
        let a = LimitedRangeAngle::default();
        assert_eq!((a.minimum(), a.maximum()), (0.0, 360.0));
        assert!(LimitedRangeAngle::new(0.0).is_ok());
        assert!(LimitedRangeAngle::new(360.0).is_ok());
        assert_eq!(kind(LimitedRangeAngle::from_strs("-45", "0", "0")), ErrorKind::Range);
        assert_eq!(kind(LimitedRangeAngle::new(361.0)), ErrorKind::Range);
    }

    #[test]
    fn limited_copy_compares_equal() {
        let a = LimitedRangeAngle::from_dms(1.0, 2.0, 3.0).unwrap();
        let b = a;
        assert_eq!(a, b);
        assert!(a != LimitedRangeAngle::from_dms(4.0, 5.0, 6.0).unwrap());
    }

    #[test]
    fn limited_display() {
        let a = LimitedRangeAngle::from_dms(23.0, 26.0, 12.1).unwrap();
        assert_eq!(a.to_string(), "23* 26' 12.1\"");
    }

    #[test]
    fn limited_arithmetic() {
        let a = LimitedRangeAngle::new(44.5).unwrap();
        assert_eq!((a + a).unwrap().value(), 89.0);
        assert_eq!((a - a).unwrap().value(), 0.0);

        let mut b = LimitedRangeAngle::new(45.0).unwrap();
        b.try_sub_assign(LimitedRangeAngle::new(10.0).unwrap()).unwrap();
        assert_eq!(b.value(), 35.0);

        let mut c = LimitedRangeAngle::new(90.0).unwrap();
        c.try_div_assign(LimitedRangeAngle::new(2.0).unwrap()).unwrap();
        assert_eq!(c.value(), 45.0);
    }

    #[test]
    fn limited_out_of_range_arithmetic() {
        let big = LimitedRangeAngle::new(345.0).unwrap();
        let zero = LimitedRangeAngle::new(0.0).unwrap();
        assert_eq!(kind(big + big), ErrorKind::Range);
        assert_eq!(kind(zero - big), ErrorKind::Range);
        assert_eq!(
            kind(LimitedRangeAngle::new(90.0).unwrap() * LimitedRangeAngle::new(5.0).unwrap()),
            ErrorKind::Range
        );
        assert_eq!(
            kind(LimitedRangeAngle::new(90.0).unwrap() / LimitedRangeAngle::new(0.01).unwrap()),
            ErrorKind::Range
        );

        let mut a = big;
        assert_eq!(kind(a.try_add_assign(big)), ErrorKind::Range);
        assert_eq!(a.value(), 345.0);
    }

    #[test]
    fn limited_divide_by_zero() {
        let mut a = LimitedRangeAngle::new(45.0).unwrap();
        let zero = LimitedRangeAngle::default();
        assert_eq!((a / zero).unwrap_err(), AngleError::DivideByZero);
        assert_eq!(kind(a.try_div_assign(zero)), ErrorKind::DivideByZero);
    }

    #[test]
    fn result_takes_left_operand_bounds() {
        let south = LimitedRangeAngle::with_bounds(-10.0, 0.0, 0.0, -90.0, 90.0).unwrap();
        let ten = LimitedRangeAngle::new(10.0).unwrap();

        let sum = (south + ten).unwrap();
        assert_eq!(sum.value(), 0.0);
        assert_eq!((sum.minimum(), sum.maximum()), (-90.0, 90.0));

        let diff = (ten - LimitedRangeAngle::with_bounds(5.0, 0.0, 0.0, -90.0, 90.0).unwrap()).unwrap();
        assert_eq!(diff.value(), 5.0);
        assert_eq!((diff.minimum(), diff.maximum()), (0.0, 360.0));

        // Valid in the right operand's range, not in the left's.
        assert_eq!(kind(ten - LimitedRangeAngle::new(20.0).unwrap()), ErrorKind::Range);
        assert_eq!((south - ten).unwrap().value(), -20.0);
    }

    #[test]
    fn in_place_forms_use_receiver_bounds() {
        let mut a = LimitedRangeAngle::with_bounds(-45.0, 0.0, 0.0, -90.0, 90.0).unwrap();
        a.try_add_assign(LimitedRangeAngle::new(30.0).unwrap()).unwrap();
        assert_eq!(a.value(), -15.0);
        a.try_mul_assign(LimitedRangeAngle::new(2.0).unwrap()).unwrap();
        assert_eq!(a.value(), -30.0);
        assert_eq!(kind(a.try_sub_assign(LimitedRangeAngle::new(70.0).unwrap())), ErrorKind::Range);
        assert_eq!(a.value(), -30.0);
        assert_eq!((a.minimum(), a.maximum()), (-90.0, 90.0));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Declination / Latitude
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn declination_range() {
        assert!(Declination::new(-30.0).is_ok());
        assert_eq!(kind(Declination::new(91.0)), ErrorKind::Range);
        assert_eq!(kind(Declination::new(-91.0)), ErrorKind::Range);
        assert_eq!(kind(Declination::from_strs("-100", "0", "0")), ErrorKind::Range);
        assert_eq!(kind(Declination::from_dm(90.0, 1.0)), ErrorKind::Range);
        assert_eq!(kind(Declination::from_strs("-90", "1", "0")), ErrorKind::Range);
    }

    #[test]
    fn declination_display() {
        let a = Declination::from_dms(-23.0, 26.0, 12.1).unwrap();
        assert_eq!(a.to_string(), "-23* 26' 12.1\"");
    }

    #[test]
    fn declination_arithmetic() {
        let a = Declination::new(45.0).unwrap();
        assert_eq!((a + a).unwrap().value(), 90.0);
        assert_eq!(kind(Declination::new(50.0).unwrap() + a), ErrorKind::Range);

        let south = Declination::new(-90.0).unwrap();
        let one = Declination::new(1.0).unwrap();
        assert_eq!(kind(south - one), ErrorKind::Range);

        assert_eq!((-Declination::new(-45.0).unwrap()).unwrap().value(), 45.0);
        assert_eq!(kind(a * Declination::new(5.0).unwrap()), ErrorKind::Range);

        let mut b = a;
        assert_eq!(kind(b.try_mul_assign(Declination::new(5.0).unwrap())), ErrorKind::Range);
        assert_eq!(b.value(), 45.0);

        let ninety = Declination::new(90.0).unwrap();
        assert_eq!((ninety / Declination::new(2.0).unwrap()).unwrap().value(), 45.0);
        assert_eq!(kind(ninety / Declination::default()), ErrorKind::DivideByZero);
        assert_eq!(kind(ninety / Declination::new(0.01).unwrap()), ErrorKind::Range);
    }

    #[test]
    fn latitude_matches_declination_range() {
        assert_eq!(kind(Latitude::new(95.0)), ErrorKind::Range);
        assert_eq!(Latitude::from_dms(23.0, 26.0, 12.1).unwrap().to_string(), "23* 26' 12.1\"");
        assert_eq!(Latitude::default().radians(), 0.0);
    }

    #[test]
    fn setters_validate() {
        let mut lat = Latitude::default();
        lat.set_value(90.0).unwrap();
        assert_abs_diff_eq!(lat.radians(), FRAC_PI_2, epsilon = 1e-15);
        lat.set_radians(-FRAC_PI_4).unwrap();
        assert_abs_diff_eq!(lat.value(), -45.0, epsilon = 1e-12);
        assert_eq!(kind(lat.set_radians(FRAC_PI_2 * 1.01)), ErrorKind::Range);
        assert_abs_diff_eq!(lat.value(), -45.0, epsilon = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Longitude
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn longitude_range() {
        assert_eq!(kind(Longitude::new(181.0)), ErrorKind::Range);
        assert_eq!(kind(Longitude::from_strs("-190", "0", "0")), ErrorKind::Range);
        assert_eq!(kind(Longitude::from_dm(190.0, 1.0)), ErrorKind::Range);
        assert_eq!(Longitude::from_dms(23.0, 26.0, 12.1).unwrap().to_string(), "23* 26' 12.1\"");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // RA
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn ra_range() {
        assert_eq!(kind(RA::new(24.1)), ErrorKind::Range);
        assert_eq!(kind(RA::new(-0.1)), ErrorKind::Range);
        assert_eq!(kind(RA::from_strs("-10", "0", "0")), ErrorKind::Range);
        assert_eq!(kind(RA::from_dms(24.0, 0.0, 0.1)), ErrorKind::Range);
    }

    #[test]
    fn ra_display_is_hms() {
        assert_eq!(RA::default().to_string(), "0:0:0");
        assert_eq!(RA::from_dms(23.0, 26.0, 12.1).unwrap().to_string(), "23:26:12.1");
    }

    #[test]
    fn ra_arithmetic() {
        let mut a = RA::from_dm(11.0, 59.0).unwrap();
        a.try_add_assign(RA::from_strs("0", "0", "60").unwrap()).unwrap();
        assert_abs_diff_eq!(a.value(), 12.0, epsilon = 1e-12);

        let mut full = RA::from_dms(24.0, 0.0, 0.0).unwrap();
        assert_eq!(kind(full.try_add_assign(RA::from_dms(0.0, 0.0, 0.01).unwrap())), ErrorKind::Range);
    }

    #[test]
    fn ra_parses_hms() {
        let ra: RA = "23:26:12.1".parse().unwrap();
        assert_eq!(ra, RA::from_dms(23.0, 26.0, 12.1).unwrap());
        assert_eq!(kind("25:0:0".parse::<RA>()), ErrorKind::Range);
        assert_eq!(kind("23* 26' 12.1\"".parse::<RA>()), ErrorKind::InvalidArgument);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Normalization
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn normalize_keeps_in_range_values() {
        let mut dec = Declination::new(-45.0).unwrap();
        dec.normalize().unwrap();
        assert_eq!(dec.value(), -45.0);

        let mut wide = LimitedRangeAngle::with_bounds(-45.0, 0.0, 0.0, -360.0, 360.0).unwrap();
        wide.normalize().unwrap();
        assert_eq!(wide.value(), 315.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn widening_and_narrowing() {
        let lon = Longitude::new(-120.0).unwrap();
        let angle: Angle = lon.into();
        assert_eq!(angle.value(), -120.0);

        assert!(Declination::try_from(Angle::new(120.0)).is_err());
        assert_eq!(Declination::try_from(Angle::new(12.0)).unwrap().value(), 12.0);
        assert_eq!(kind(RA::try_from(30.0)), ErrorKind::Range);
    }

    #[test]
    fn info_reports_defaults() {
        let info = Declination::info();
        assert_eq!(info.name, "Declination");
        assert_eq!(info.range, Some((-90.0, 90.0)));
        assert_eq!(RA::default().notation(), Notation::Hms);
        assert_eq!(Longitude::default().name(), "Longitude");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_in_range_values_accepted(x in -90.0..=90.0f64) {
            prop_assert!(Declination::new(x).is_ok());
        }

        #[test]
        fn prop_results_stay_in_range(x in -180.0..=180.0f64, y in -180.0..=180.0f64) {
            let (a, b) = (Longitude::new(x).unwrap(), Longitude::new(y).unwrap());
            for result in [a + b, a - b, a * b] {
                if let Ok(r) = result {
                    prop_assert!((-180.0..=180.0).contains(&r.value()));
                }
            }
        }

        #[test]
        fn prop_ra_round_trip(h in 0.0..24.0f64) {
            let ra = RA::new(h).unwrap();
            let (hh, mm, ss) = ra.to_sexagesimal(sexagesimal::DEFAULT_SECONDS_DECIMALS).components();
            assert_abs_diff_eq!(RA::from_dms(hh, mm, ss).unwrap().value(), h, epsilon = 1e-7);
            let parsed: RA = ra.to_string().parse().unwrap();
            assert_abs_diff_eq!(parsed.value(), h, epsilon = 1e-7);
        }

        #[test]
        fn prop_declination_round_trip(x in -90.0..=90.0f64) {
            let dec = Declination::new(x).unwrap();
            let (d, m, s) = dec.to_sexagesimal(sexagesimal::DEFAULT_SECONDS_DECIMALS).components();
            assert_abs_diff_eq!(Declination::from_dms(d, m, s).unwrap().value(), x, epsilon = 1e-7);
        }
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn serializes_value_and_bounds() {
            let dec = Declination::new(-12.5).unwrap();
            let json = serde_json::to_string(&dec).unwrap();
            assert_eq!(json, r#"{"value":-12.5,"minimum":-90.0,"maximum":90.0}"#);
        }

        #[test]
        fn deserialize_defaults_missing_bounds() {
            let lon: Longitude = serde_json::from_str(r#"{"value":100.0}"#).unwrap();
            assert_eq!((lon.minimum(), lon.maximum()), (-180.0, 180.0));
        }

        #[test]
        fn deserialize_rejects_out_of_range() {
            let result: core::result::Result<Declination, _> = serde_json::from_str(r#"{"value":91.0}"#);
            assert!(result.is_err());
        }
    }
}
