//! Float helpers that are not available in `core`.
//!
//! With `std` these forward to the inherent `f64` methods; without it they go through `libm`.

#[inline]
pub(crate) fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.floor()
    }
    #[cfg(not(feature = "std"))]
    {
        crate::libm::floor(x)
    }
}

#[inline]
pub(crate) fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.round()
    }
    #[cfg(not(feature = "std"))]
    {
        crate::libm::round(x)
    }
}

#[inline]
pub(crate) fn abs(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.abs()
    }
    #[cfg(not(feature = "std"))]
    {
        crate::libm::fabs(x)
    }
}

/// Euclidean remainder, always in `[0, modulus)` for a positive modulus.
#[inline]
pub(crate) fn rem_euclid(x: f64, modulus: f64) -> f64 {
    #[cfg(feature = "std")]
    let r = x.rem_euclid(modulus);
    #[cfg(not(feature = "std"))]
    let r = {
        let r = crate::libm::fmod(x, modulus);
        if r < 0.0 {
            r + modulus
        } else {
            r
        }
    };
    // A tiny negative input can round up to exactly `modulus`.
    if r >= modulus {
        0.0
    } else {
        r
    }
}

/// `true` for negative numbers and for `-0.0`.
#[inline]
pub(crate) fn is_negative(x: f64) -> bool {
    x < 0.0 || (x == 0.0 && x.is_sign_negative())
}
