//! Shared polygon measurements and validation predicates.
//!
//! All functions take the vertex ring in traversal order; index arithmetic
//! wraps modulo the vertex count.

use nalgebra::Vector2;

use crate::cfg::approx_eq;
use crate::error::GeometryFault;
use crate::point::Point;

/// 2D cross product `u × w`.
#[inline]
pub fn cross(u: Vector2<f64>, w: Vector2<f64>) -> f64 {
    u.x * w.y - u.y * w.x
}

/// Signed turn at `b` when walking `a → b → c`. Positive for a left turn.
#[inline]
pub fn turn(a: Point, b: Point, c: Point) -> f64 {
    cross(b.to_vec() - a.to_vec(), c.to_vec() - b.to_vec())
}

/// Squared distance between two points.
#[inline]
pub fn dist2(a: Point, b: Point) -> f64 {
    (b.to_vec() - a.to_vec()).norm_squared()
}

/// Cosine of the angle at `b` between rays `b → a` and `b → c`.
/// Returns 1 when either ray has zero length.
pub fn angle_cos(a: Point, b: Point, c: Point) -> f64 {
    let u = a.to_vec() - b.to_vec();
    let w = c.to_vec() - b.to_vec();
    let (du, dw) = (u.norm(), w.norm());
    if du == 0.0 || dw == 0.0 {
        return 1.0;
    }
    u.dot(&w) / (du * dw)
}

/// Shoelace area, always `>= 0`. Zero for fewer than three vertices.
pub fn polygon_area(v: &[Point]) -> f64 {
    if v.len() < 3 {
        return 0.0;
    }
    let twice: f64 = (0..v.len()).map(|i| edge_cross(v, i)).sum();
    twice.abs() * 0.5
}

/// Area-weighted centroid using the signed doubled area.
///
/// Pre: the polygon has non-zero area. Orientation is taken as stored; the
/// sign cancels between numerator and denominator.
pub fn polygon_centroid(v: &[Point]) -> Point {
    let n = v.len();
    let (mut a2, mut cx, mut cy) = (0.0, 0.0, 0.0);
    for i in 0..n {
        let (p, q) = (v[i], v[(i + 1) % n]);
        let c = edge_cross(v, i);
        a2 += c;
        cx += (p.x + q.x) * c;
        cy += (p.y + q.y) * c;
    }
    Point::new(cx / (3.0 * a2), cy / (3.0 * a2))
}

#[inline]
fn edge_cross(v: &[Point], i: usize) -> f64 {
    let (p, q) = (v[i], v[(i + 1) % v.len()]);
    p.x * q.y - q.x * p.y
}

/// Strict convexity with consistent winding.
///
/// The turn of the triple starting at vertex 0 sets the reference sign and
/// must be non-zero; every other triple must share it strictly. A fault
/// names the first vertex of the offending triple.
pub fn check_convex(v: &[Point]) -> Result<(), GeometryFault> {
    let n = v.len();
    if n < 3 {
        return Err(GeometryFault::NotConvex { vertex: 0 });
    }
    let turn_at = |i: usize| turn(v[i], v[(i + 1) % n], v[(i + 2) % n]);
    let reference = turn_at(0);
    if approx_eq(reference, 0.0) {
        return Err(GeometryFault::NotConvex { vertex: 0 });
    }
    match (1..n).find(|&i| turn_at(i) * reference <= 0.0) {
        Some(vertex) => Err(GeometryFault::NotConvex { vertex }),
        None => Ok(()),
    }
}

/// Squared lengths of the sides `v[i] → v[i+1]`, in order.
pub fn side_lengths2(v: &[Point]) -> impl Iterator<Item = f64> + '_ {
    (0..v.len()).map(move |i| dist2(v[i], v[(i + 1) % v.len()]))
}

/// Strictly positive shoelace area.
pub fn check_area(v: &[Point]) -> Result<(), GeometryFault> {
    if polygon_area(v) > 0.0 {
        Ok(())
    } else {
        Err(GeometryFault::ZeroArea)
    }
}
