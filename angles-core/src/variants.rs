//! The predefined range-limited variants.
//!
//! | Alias                 | Range         | Notation |
//! |-----------------------|---------------|----------|
//! | [`LimitedRangeAngle`] | `[0, 360]`    | DMS      |
//! | [`Declination`]       | `[-90, 90]`   | DMS      |
//! | [`Latitude`]          | `[-90, 90]`   | DMS      |
//! | [`Longitude`]         | `[-180, 180]` | DMS      |
//! | [`RA`]                | `[0, 24]`     | HMS      |
//!
//! ```rust
//! use angles_core::{Latitude, Longitude};
//! let lat = Latitude::from_dms(40.0, 26.0, 46.0).unwrap();
//! let lon = Longitude::from_dms(-79.0, 58.0, 56.0).unwrap();
//! assert!(lat.value() > 40.0 && lon.value() < -79.0);
//! ```

use crate::bounded::Bounded;
use crate::variant::VariantInfo;
use angles_derive::Variant;

/// Marker for [`LimitedRangeAngle`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Variant)]
#[variant(name = "LimitedRangeAngle", minimum = 0.0, maximum = 360.0, notation = Dms)]
pub struct Limited;

/// Marker for [`Declination`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Variant)]
#[variant(name = "Declination", minimum = -90.0, maximum = 90.0, notation = Dms)]
pub struct Dec;

/// Marker for [`Latitude`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Variant)]
#[variant(name = "Latitude", minimum = -90.0, maximum = 90.0, notation = Dms)]
pub struct Lat;

/// Marker for [`Longitude`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Variant)]
#[variant(name = "Longitude", minimum = -180.0, maximum = 180.0, notation = Dms)]
pub struct Lon;

/// Marker for [`RA`]. Values count hours.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Variant)]
#[variant(name = "RA", minimum = 0.0, maximum = 24.0, notation = Hms)]
pub struct Hours;

/// Angle in degrees restricted to `[0, 360]` unless given explicit bounds.
pub type LimitedRangeAngle = Bounded<Limited>;
/// Celestial declination, degrees in `[-90, 90]`.
pub type Declination = Bounded<Dec>;
/// Geographic latitude, degrees in `[-90, 90]`.
pub type Latitude = Bounded<Lat>;
/// Geographic longitude, degrees in `[-180, 180]`.
pub type Longitude = Bounded<Lon>;
/// Right ascension, hours in `[0, 24]`.
pub type RA = Bounded<Hours>;

/// Every public variant of the family, the unbounded [`crate::Angle`] first.
pub const VARIANTS: [VariantInfo; 6] = [
    VariantInfo::UNBOUNDED,
    VariantInfo::of::<Limited>(),
    VariantInfo::of::<Dec>(),
    VariantInfo::of::<Lat>(),
    VariantInfo::of::<Lon>(),
    VariantInfo::of::<Hours>(),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{Notation, Variant};

    #[test]
    fn names_are_unique() {
        for (i, a) in VARIANTS.iter().enumerate() {
            for b in &VARIANTS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn only_ra_uses_hms() {
        let hms: Vec<_> = VARIANTS
            .iter()
            .filter(|info| info.notation == Notation::Hms)
            .map(|info| info.name)
            .collect();
        assert_eq!(hms, ["RA"]);
    }

    #[test]
    fn derived_constants() {
        assert_eq!(Lon::NAME, "Longitude");
        assert_eq!((Lon::MINIMUM, Lon::MAXIMUM), (-180.0, 180.0));
        assert_eq!(Hours::NOTATION, Notation::Hms);
        assert_eq!(VariantInfo::lookup("Latitude"), Some(&VariantInfo::of::<Lat>()));
    }
}
