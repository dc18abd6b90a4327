//! Shape variants and the `Figure` capability set.
//!
//! - `Trapezoid`, `Rhombus`, `Pentagon`: validated convex polygons with a
//!   fixed vertex count, each checked by its own metric rule.
//! - `Figure`: the uniform capability set (centre, area, text, read,
//!   equality, duplication) the collection is written against.
//! - `Shape`: the closed tagged variant over the three shapes. Equality
//!   matches discriminants before comparing vertices.

use std::fmt;

use crate::error::FigureResult;
use crate::point::Point;
use crate::tokens::TokenSource;

mod pentagon;
mod rhombus;
mod ring;
mod trapezoid;

pub use pentagon::Pentagon;
pub use rhombus::Rhombus;
pub use trapezoid::Trapezoid;


/// Discriminant of the supported shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FigureKind {
    Trapezoid,
    Rhombus,
    Pentagon,
}

impl FigureKind {
    pub const ALL: [FigureKind; 3] = [
        FigureKind::Trapezoid,
        FigureKind::Rhombus,
        FigureKind::Pentagon,
    ];

    /// Name used in the text form.
    pub fn name(self) -> &'static str {
        match self {
            FigureKind::Trapezoid => "Trapezoid",
            FigureKind::Rhombus => "Rhombus",
            FigureKind::Pentagon => "Pentagon",
        }
    }

    /// Upper-case command keyword (`TRAPEZOID`, ...).
    pub fn keyword(self) -> &'static str {
        match self {
            FigureKind::Trapezoid => "TRAPEZOID",
            FigureKind::Rhombus => "RHOMBUS",
            FigureKind::Pentagon => "PENTAGON",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.keyword() == word)
    }

    pub fn vertex_count(self) -> usize {
        match self {
            FigureKind::Trapezoid | FigureKind::Rhombus => 4,
            FigureKind::Pentagon => 5,
        }
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capabilities shared by every shape.
///
/// `Display` renders the text form `<Name> { (x y) ... }`.
pub trait Figure: fmt::Display {
    fn kind(&self) -> FigureKind;

    /// Area-weighted centroid.
    fn center(&self) -> Point;

    /// Shoelace area; strictly positive for a validated shape.
    fn area(&self) -> f64;

    /// Replace all vertices from `src` and re-validate.
    ///
    /// On error the previous vertices are kept.
    fn read(&mut self, src: &mut dyn TokenSource) -> FigureResult<()>;

    /// Same variant and vertex rings equal up to cyclic rotation.
    fn equals(&self, other: &Shape) -> bool;

    /// Independently owned copy.
    fn duplicate(&self) -> Shape;
}

/// One of the supported shapes.
#[derive(Clone, Debug)]
pub enum Shape {
    Trapezoid(Trapezoid),
    Rhombus(Rhombus),
    Pentagon(Pentagon),
}

impl Shape {
    /// Default-construct a shape of `kind` and read its vertices.
    pub fn read_new(kind: FigureKind, src: &mut dyn TokenSource) -> FigureResult<Shape> {
        let mut shape = match kind {
            FigureKind::Trapezoid => Shape::Trapezoid(Trapezoid::default()),
            FigureKind::Rhombus => Shape::Rhombus(Rhombus::default()),
            FigureKind::Pentagon => Shape::Pentagon(Pentagon::default()),
        };
        shape.read(src)?;
        Ok(shape)
    }

    /// Validate `verts` as a shape of `kind`.
    pub fn new(kind: FigureKind, verts: &[Point]) -> FigureResult<Shape> {
        Ok(match kind {
            FigureKind::Trapezoid => Trapezoid::new(verts)?.into(),
            FigureKind::Rhombus => Rhombus::new(verts)?.into(),
            FigureKind::Pentagon => Pentagon::new(verts)?.into(),
        })
    }

    pub fn vertices(&self) -> &[Point] {
        match self {
            Shape::Trapezoid(s) => s.vertices(),
            Shape::Rhombus(s) => s.vertices(),
            Shape::Pentagon(s) => s.vertices(),
        }
    }

    fn as_figure(&self) -> &dyn Figure {
        match self {
            Shape::Trapezoid(s) => s,
            Shape::Rhombus(s) => s,
            Shape::Pentagon(s) => s,
        }
    }

    fn as_figure_mut(&mut self) -> &mut dyn Figure {
        match self {
            Shape::Trapezoid(s) => s,
            Shape::Rhombus(s) => s,
            Shape::Pentagon(s) => s,
        }
    }
}

impl Figure for Shape {
    fn kind(&self) -> FigureKind {
        self.as_figure().kind()
    }
    fn center(&self) -> Point {
        self.as_figure().center()
    }
    fn area(&self) -> f64 {
        self.as_figure().area()
    }
    fn read(&mut self, src: &mut dyn TokenSource) -> FigureResult<()> {
        self.as_figure_mut().read(src)
    }
    fn equals(&self, other: &Shape) -> bool {
        self.as_figure().equals(other)
    }
    fn duplicate(&self) -> Shape {
        self.as_figure().duplicate()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_figure(), f)
    }
}

impl From<Trapezoid> for Shape {
    fn from(s: Trapezoid) -> Self {
        Shape::Trapezoid(s)
    }
}
impl From<Rhombus> for Shape {
    fn from(s: Rhombus) -> Self {
        Shape::Rhombus(s)
    }
}
impl From<Pentagon> for Shape {
    fn from(s: Pentagon) -> Self {
        Shape::Pentagon(s)
    }
}
