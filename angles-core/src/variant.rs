//! Variant markers and the display notation they select.

use core::fmt::{Debug, Display, Formatter, Result};

/// Textual rendering used by a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Notation {
    /// Degrees, minutes, seconds: `-23* 26' 12.1"`.
    Dms,
    /// Hours, minutes, seconds: `23:26:12.1`.
    Hms,
}

impl Notation {
    /// One full revolution expressed in the unit this notation counts (360 degrees or 24 hours).
    pub const fn full_turn(self) -> f64 {
        match self {
            Notation::Dms => 360.0,
            Notation::Hms => 24.0,
        }
    }

    /// Name of the leading component, as reported by parse errors.
    pub(crate) const fn whole_component(self) -> &'static str {
        match self {
            Notation::Dms => "degrees",
            Notation::Hms => "hours",
        }
    }
}

impl Display for Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Notation::Dms => f.write_str("DMS"),
            Notation::Hms => f.write_str("HMS"),
        }
    }
}

/// Trait implemented by every range-limited **variant marker**.
///
/// * `NAME` is the public name of the variant (e.g. `"Declination"`).
/// * `MINIMUM`/`MAXIMUM` are the default inclusive bounds of [`crate::Bounded<Self>`].
/// * `NOTATION` selects DMS or HMS rendering.
///
/// Markers are zero-sized and normally declared through `#[derive(Variant)]`:
///
/// ```rust
/// use angles_core::{Bounded, Notation, Variant};
///
/// #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
/// pub struct Azimuth;
/// impl Variant for Azimuth {
///     const NAME: &'static str = "Azimuth";
///     const MINIMUM: f64 = 0.0;
///     const MAXIMUM: f64 = 360.0;
///     const NOTATION: Notation = Notation::Dms;
/// }
///
/// let az = Bounded::<Azimuth>::new(270.0).unwrap();
/// assert_eq!(az.maximum(), 360.0);
/// ```
pub trait Variant: Copy + PartialEq + Debug + 'static {
    /// Public name of the variant.
    const NAME: &'static str;
    /// Default inclusive lower bound.
    const MINIMUM: f64;
    /// Default inclusive upper bound.
    const MAXIMUM: f64;
    /// Display notation.
    const NOTATION: Notation;
}

/// Static description of one named variant, suitable for reproducing the family in a binding layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantInfo {
    /// Public name.
    pub name: &'static str,
    /// Default `(minimum, maximum)`, or `None` for the unbounded [`crate::Angle`].
    pub range: Option<(f64, f64)>,
    /// Display notation.
    pub notation: Notation,
}

impl VariantInfo {
    /// Description of the unbounded [`crate::Angle`].
    pub const UNBOUNDED: VariantInfo = VariantInfo {
        name: "Angle",
        range: None,
        notation: Notation::Dms,
    };

    /// Description of the variant marked by `V`.
    pub const fn of<V: Variant>() -> Self {
        VariantInfo {
            name: V::NAME,
            range: Some((V::MINIMUM, V::MAXIMUM)),
            notation: V::NOTATION,
        }
    }

    /// Finds a variant of [`crate::VARIANTS`] by name.
    ///
    /// ```rust
    /// use angles_core::{Notation, VariantInfo};
    /// let ra = VariantInfo::lookup("RA").unwrap();
    /// assert_eq!(ra.range, Some((0.0, 24.0)));
    /// assert_eq!(ra.notation, Notation::Hms);
    /// ```
    pub fn lookup(name: &str) -> Option<&'static VariantInfo> {
        crate::VARIANTS.iter().find(|info| info.name == name)
    }
}
