//! Fixed-size vertex ring shared by the shape variants.
//!
//! Holds storage, measurement, text form, cyclic equality and atomic
//! re-population. The per-variant metric rule is passed in as a `Rule`.

use std::fmt;

use super::FigureKind;
use crate::error::{FigureError, FigureResult, GeometryFault};
use crate::geometry::{polygon_area, polygon_centroid};
use crate::point::Point;
use crate::tokens::TokenSource;

/// Variant-specific validation over a complete vertex array.
pub(crate) type Rule<const N: usize> = fn(&[Point; N]) -> Result<(), GeometryFault>;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Ring<const N: usize> {
    v: [Point; N],
}

impl<const N: usize> Default for Ring<N> {
    /// Zero-valued placeholder; does not satisfy any shape rule.
    fn default() -> Self {
        Self {
            v: [Point::default(); N],
        }
    }
}

impl<const N: usize> Ring<N> {
    /// Count check, then `rule`. Vertices are stored as given.
    pub(crate) fn build(kind: FigureKind, verts: &[Point], rule: Rule<N>) -> FigureResult<Self> {
        let v: [Point; N] = verts.try_into().map_err(|_| FigureError::InvalidGeometry {
            kind,
            fault: GeometryFault::VertexCount {
                expected: N,
                actual: verts.len(),
            },
        })?;
        rule(&v).map_err(|fault| FigureError::InvalidGeometry { kind, fault })?;
        Ok(Self { v })
    }

    /// Read `N` points and validate; `self` changes only on success.
    pub(crate) fn read(
        &mut self,
        kind: FigureKind,
        src: &mut dyn TokenSource,
        rule: Rule<N>,
    ) -> FigureResult<()> {
        let mut v = [Point::default(); N];
        for (vertex, slot) in v.iter_mut().enumerate() {
            *slot = Point::read(src).map_err(|fault| FigureError::ParseFailure {
                kind,
                vertex,
                fault,
            })?;
        }
        rule(&v).map_err(|fault| FigureError::InvalidGeometry { kind, fault })?;
        self.v = v;
        Ok(())
    }

    #[inline]
    pub(crate) fn vertices(&self) -> &[Point; N] {
        &self.v
    }

    pub(crate) fn area(&self) -> f64 {
        polygon_area(&self.v)
    }

    pub(crate) fn center(&self) -> Point {
        polygon_centroid(&self.v)
    }

    /// True if `other` is a cyclic rotation of `self` under approximate point equality.
    pub(crate) fn cyclic_eq(&self, other: &Self) -> bool {
        (0..N).any(|shift| (0..N).all(|i| self.v[i] == other.v[(i + shift) % N]))
    }

    /// `<name> { (x y) (x y) ... }`
    pub(crate) fn write_named(&self, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{name} {{ ")?;
        for p in &self.v {
            write!(f, "{p} ")?;
        }
        f.write_str("}")
    }
}
