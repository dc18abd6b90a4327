//! Planar point with tolerance-based equality and the `(x y)` text form.

use std::fmt;

use nalgebra::Vector2;

use crate::cfg::approx_eq;
use crate::error::TokenFault;
use crate::num::Num;
use crate::tokens::TokenSource;

/// Immutable pair of real coordinates.
///
/// `PartialEq` is approximate: both coordinates within [`crate::cfg::EPS`].
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Consume two tokens, `x` then `y`.
    pub fn read(src: &mut dyn TokenSource) -> Result<Self, TokenFault> {
        let x = src.next_f64()?;
        let y = src.next_f64()?;
        Ok(Self { x, y })
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", Num(self.x), Num(self.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_absorbs_noise_per_coordinate() {
        let a = Point::new(1.0, 2.0);
        assert_eq!(a, Point::new(1.0 + 5e-8, 2.0 - 5e-8));
        assert_ne!(a, Point::new(1.0, 2.0 + 1e-6));
    }

    #[test]
    fn text_form() {
        assert_eq!(Point::new(0.0, 1.0).to_string(), "(0 1)");
        assert_eq!(Point::new(-1.5, 8.0 / 9.0).to_string(), "(-1.5 0.888889)");
    }

    #[test]
    fn read_consumes_two_tokens() {
        let mut src = "3 -4 rest".split_whitespace();
        assert_eq!(Point::read(&mut src), Ok(Point::new(3.0, -4.0)));
        assert_eq!(src.next_token().as_deref(), Some("rest"));
    }

    #[test]
    fn read_reports_missing_y() {
        let mut src = "3".split_whitespace();
        assert_eq!(Point::read(&mut src), Err(TokenFault::Exhausted));
    }
}
