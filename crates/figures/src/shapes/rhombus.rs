//! Rhombus: convex quadrilateral with four equal sides.

use std::fmt;

use super::ring::Ring;
use super::{Figure, FigureKind, Shape};
use crate::cfg::approx_eq;
use crate::error::{FigureResult, GeometryFault};
use crate::geometry::{check_area, check_convex, side_lengths2};
use crate::point::Point;
use crate::tokens::TokenSource;

const KIND: FigureKind = FigureKind::Rhombus;

/// Convex quadrilateral with four equal sides.
#[derive(Clone, Debug, Default)]
pub struct Rhombus {
    ring: Ring<4>,
}

impl Rhombus {
    pub fn new(verts: &[Point]) -> FigureResult<Self> {
        Ring::build(KIND, verts, validate).map(|ring| Self { ring })
    }

    pub fn vertices(&self) -> &[Point] {
        self.ring.vertices()
    }
}

fn validate(v: &[Point; 4]) -> Result<(), GeometryFault> {
    let sides: Vec<f64> = side_lengths2(v).collect();
    if !sides.windows(2).all(|w| approx_eq(w[0], w[1])) {
        return Err(GeometryFault::UnequalSides);
    }
    check_convex(v)?;
    check_area(v)
}

impl Figure for Rhombus {
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
            Shape::Rhombus(o) => self.ring.cyclic_eq(&o.ring),
            _ => false,
        }
    }
    fn duplicate(&self) -> Shape {
        Shape::Rhombus(self.clone())
    }
}

impl fmt::Display for Rhombus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ring.write_named(KIND.name(), f)
    }
}
