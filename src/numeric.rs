//! Numeric helpers for EP amounts.
//!
//! EP amounts are plain `f64`. Every value the rules produce before
//! normalization is a multiple of 0.25, and every finalized value is a
//! multiple of 0.5. Both are exactly representable in binary floating
//! point, so fraction checks below use exact comparison.

/// Type alias for Energy Point amounts.
pub type EpAmount = f64;

/// Extension trait with the fraction queries the rounding rules need.
///
/// # Examples
///
/// ```rust
/// use epstat::numeric::EpNumeric;
///
/// assert_eq!(3.75_f64.fraction(), 0.75);
/// assert!(3.75_f64.is_quarter_step());
/// assert!(3.5_f64.is_half_step());
/// assert!(!3.25_f64.is_half_step());
/// ```
pub trait EpNumeric: Copy {
    /// Fractional part, always in `[0, 1)`.
    ///
    /// Uses Euclidean remainder so negative values wrap the same way a
    /// floored modulo does (`-0.75` has fraction `0.25`).
    fn fraction(self) -> Self;

    /// True when the fraction is exactly `0.25` or `0.75`.
    fn is_quarter_step(self) -> bool;

    /// True when the value is a whole or half EP (fraction `0` or `0.5`).
    fn is_half_step(self) -> bool;

    /// Clamp negative values (and NaN) to zero.
    fn non_negative(self) -> Self;
}

impl EpNumeric for f64 {
    fn fraction(self) -> Self {
        self.rem_euclid(1.0)
    }

    fn is_quarter_step(self) -> bool {
        let frac = self.fraction();
        frac == 0.25 || frac == 0.75
    }

    fn is_half_step(self) -> bool {
        let frac = self.fraction();
        frac == 0.0 || frac == 0.5
    }

    fn non_negative(self) -> Self {
        // f64::max ignores a NaN operand
        self.max(0.0)
    }
}
