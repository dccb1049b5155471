//! Validated angles for equatorial and geographic coordinates.
//!
//! `angles` is the user-facing crate in this workspace. It re-exports the full API from `angles-core`: the unbounded
//! [`Angle`] and the range-limited [`LimitedRangeAngle`], [`Declination`], [`Latitude`], [`Longitude`], and [`RA`].
//!
//! The core idea is: a range-limited value is a `Bounded<V>`, where `V` is a zero-sized marker naming the variant and
//! its default bounds. Every constructor, setter, and arithmetic operator validates the result and reports failures as
//! an [`AngleError`]; nothing is clamped or wrapped behind the caller's back.
//!
//! # What this crate solves
//!
//! - Degree/minute/second and hour/minute/second input with one consistent sign policy.
//! - Range validation for declination, latitude, longitude, and right ascension.
//! - Canonical text rendering (`-23* 26' 12.1"`, `23:26:12.1`) that parses back.
//!
//! # What this crate does not try to solve
//!
//! - Coordinate transformations between frames.
//! - Exact arithmetic: angles are backed by `f64`.
//!
//! # Quick start
//!
//! ```rust
//! use angles::{Angle, Latitude, ErrorKind};
//!
//! let mut a = Angle::from_dms(44.0, 59.0, 60.0);
//! a += Angle::from_strs("44", "59", "60").unwrap();
//! assert_eq!(a.to_string(), "90* 0' 0\"");
//! assert!((a.radians().sin() - 1.0).abs() < 1e-12);
//!
//! let err = Latitude::new(200.0).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Range);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use angles::{Declination, RA};
//!
//! let d = Declination::new(10.0).unwrap();
//! let r = RA::new(10.0).unwrap();
//! let _ = d + r; // cannot combine different variants
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `angles-core`.
//! - `serde`: enables `serde` support; range-limited angles serialize their bounds and are re-validated on load.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! angles = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! No public operation panics. Fallible operations return [`Result`]; branch on [`AngleError::kind`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use angles_core::*;

/// Derive macro used by `angles-core` to define variant marker types.
///
/// This macro expands in terms of `crate::Variant` and `crate::Notation`, so it is intended for use inside
/// `angles-core` (or crates exposing the same crate-root API). Most users should not need this.
pub use angles_derive::Variant;
