//! Tolerance defaults for figure validation and comparison.
//!
//! Policy
//! - Fixed constants, no runtime configuration. Every length, cross-product
//!   and coordinate comparison goes through [`approx_eq`]; only the pentagon
//!   angle check uses the looser [`ANGLE_EPS`].

/// Absolute tolerance for coordinates, squared lengths and turn values.
pub const EPS: f64 = 1e-7;
/// Absolute tolerance for interior-angle cosines of a regular pentagon.
pub const ANGLE_EPS: f64 = 1e-6;

/// `|a - b| <= EPS`.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    approx_eq_eps(a, b, EPS)
}

/// `|a - b| <= eps`.
#[inline]
pub fn approx_eq_eps(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_inclusive() {
        assert!(approx_eq_eps(1.0, 1.5, 0.5));
        assert!(!approx_eq_eps(1.0, 1.5000001, 0.5));
    }

    #[test]
    fn default_tolerance_absorbs_noise() {
        assert!(approx_eq(0.1 + 0.2, 0.3));
        assert!(approx_eq(1.0, 1.0 + 5e-8));
        assert!(!approx_eq(1.0, 1.0 + 1e-6));
        assert!(approx_eq_eps(1.0, 1.0 + 5e-7, ANGLE_EPS));
    }
}
