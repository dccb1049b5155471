//! Core types for validated astronomical angles.
//!
//! `angles-core` provides a small angle family:
//!
//! - [`Angle`] is an unbounded value in degrees with radian conversion and plain `f64` arithmetic.
//! - [`Bounded<V>`] is a range-limited angle whose default bounds, name, and notation come from a zero-sized variant
//!   marker `V` implementing [`Variant`].
//! - [`LimitedRangeAngle`], [`Declination`], [`Latitude`], [`Longitude`], and [`RA`] are the predefined variants.
//! - [`sexagesimal`] composes, decomposes, renders, and parses degree/hour–minute–second forms.
//!
//! Most users should depend on `angles` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Every range-limited value is validated at construction, on mutation, and after arithmetic.
//! - Out-of-range results are reported as [`AngleError`] instead of being silently clamped or wrapped.
//! - One sign policy for sexagesimal input, so `(-0, 30, 0)` and `(0, -30, 0)` both mean half a degree below zero.
//!
//! # What this crate does not try to solve
//!
//! - Coordinate transformations, precession, or any other astronomy beyond storing angles.
//! - Exact arithmetic: values are backed by `f64`.
//!
//! # Quick start
//!
//! ```rust
//! use angles_core::{Angle, Declination, ErrorKind, RA};
//!
//! let a = Angle::from_dms(-23.0, 26.0, 12.1);
//! assert_eq!(a.to_string(), "-23* 26' 12.1\"");
//!
//! let mut ra = RA::from_dm(11.0, 59.0).unwrap();
//! ra.try_add_assign(RA::from_dms(0.0, 0.0, 60.0).unwrap()).unwrap();
//! assert!((ra.value() - 12.0).abs() < 1e-12);
//!
//! let north = Declination::new(50.0).unwrap();
//! let err = (north + Declination::new(45.0).unwrap()).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Range);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `angles-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! angles-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support. [`Angle`] serializes as its raw `f64` value; [`Bounded<V>`] serializes as
//!   `{ value, minimum, maximum }` and is re-validated on deserialization.
//!
//! # Logging
//!
//! Rejections (range checks, division by zero) are reported at `debug` level through the `log`
//! facade; value changes made by `normalize` are reported at `trace` level. No logger is installed by this crate.
//!
//! # Panics and errors
//!
//! No public operation panics. Fallible operations return [`Result`], whose error exposes a coarse [`ErrorKind`].
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod angle;
mod bounded;
mod error;
mod math;
mod variant;
mod variants;

pub mod sexagesimal;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use angle::{deg2rad, rad2deg, Angle};
pub use bounded::Bounded;
pub use error::{AngleError, ErrorKind, Result};
pub use sexagesimal::Sexagesimal;
pub use variant::{Notation, Variant, VariantInfo};
pub use variants::{
    Dec, Declination, Hours, Lat, Latitude, Limited, LimitedRangeAngle, Lon, Longitude, RA, VARIANTS,
};
