//! Regular pentagon: equal sides and equal interior angles.

use std::fmt;

use super::ring::Ring;
use super::{Figure, FigureKind, Shape};
use crate::cfg::{approx_eq, approx_eq_eps, ANGLE_EPS};
use crate::error::{FigureResult, GeometryFault};
use crate::geometry::{angle_cos, check_area, check_convex, side_lengths2};
use crate::point::Point;
use crate::tokens::TokenSource;

const KIND: FigureKind = FigureKind::Pentagon;

/// Regular pentagon: convex, equal sides, equal interior angles.
#[derive(Clone, Debug, Default)]
pub struct Pentagon {
    ring: Ring<5>,
}

impl Pentagon {
    pub fn new(verts: &[Point]) -> FigureResult<Self> {
        Ring::build(KIND, verts, validate).map(|ring| Self { ring })
    }

    pub fn vertices(&self) -> &[Point] {
        self.ring.vertices()
    }
}

fn validate(v: &[Point; 5]) -> Result<(), GeometryFault> {
    let mut sides = side_lengths2(v);
    let first = sides.next().unwrap_or_default();
    if !sides.all(|s| approx_eq(first, s)) {
        return Err(GeometryFault::UnequalSides);
    }
    check_convex(v)?;
    let cos_at = |i: usize| angle_cos(v[(i + 4) % 5], v[i], v[(i + 1) % 5]);
    let c0 = cos_at(0);
    if !(1..5).all(|i| approx_eq_eps(c0, cos_at(i), ANGLE_EPS)) {
        return Err(GeometryFault::UnequalAngles);
    }
    check_area(v)
}

impl Figure for Pentagon {
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
            Shape::Pentagon(o) => self.ring.cyclic_eq(&o.ring),
            _ => false,
        }
    }
    fn duplicate(&self) -> Shape {
        Shape::Pentagon(self.clone())
    }
}

impl fmt::Display for Pentagon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ring.write_named(KIND.name(), f)
    }
}
