//! Trapezoid: convex quadrilateral with a parallel pair of opposite sides.

use std::fmt;

use super::ring::Ring;
use super::{Figure, FigureKind, Shape};
use crate::cfg::approx_eq;
use crate::error::{FigureResult, GeometryFault};
use crate::geometry::{check_area, check_convex, cross};
use crate::point::Point;
use crate::tokens::TokenSource;

const KIND: FigureKind = FigureKind::Trapezoid;

/// Convex quadrilateral with at least one pair of parallel opposite sides.
#[derive(Clone, Debug, Default)]
pub struct Trapezoid {
    ring: Ring<4>,
}

impl Trapezoid {
    pub fn new(verts: &[Point]) -> FigureResult<Self> {
        Ring::build(KIND, verts, validate).map(|ring| Self { ring })
    }

    pub fn vertices(&self) -> &[Point] {
        self.ring.vertices()
    }
}

fn validate(v: &[Point; 4]) -> Result<(), GeometryFault> {
    let side = |i: usize| v[(i + 1) % 4].to_vec() - v[i].to_vec();
    // (v1-v0)×(v3-v2) and (v2-v1)×(v0-v3)
    let parallel =
        approx_eq(cross(side(0), side(2)), 0.0) || approx_eq(cross(side(1), side(3)), 0.0);
    if !parallel {
        return Err(GeometryFault::NoParallelSides);
    }
    check_convex(v)?;
    check_area(v)
}

impl Figure for Trapezoid {
    fn kind(&self) -> FigureKind {
        KIND
    }
    fn center(&self) -> Point {
        self.ring.center()
    }
    fn area(&self) -> f64 {
        self.ring.area()
    }
    fn read(&mut self, src: &mut dyn TokenSource) -> FigureResult<()> {
        self.ring.read(KIND, src, validate)
    }
    fn equals(&self, other: &Shape) -> bool {
        match other {
            Shape::Trapezoid(o) => self.ring.cyclic_eq(&o.ring),
            _ => false,
        }
    }
    fn duplicate(&self) -> Shape {
        Shape::Trapezoid(self.clone())
    }
}

impl fmt::Display for Trapezoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ring.write_named(KIND.name(), f)
    }
}
