//! Validated planar figures and an owning figure collection.
//!
//! Layout
//! - `point`, `geometry`: 2D point plus shoelace area, signed-area centroid
//!   and the convexity/side/angle predicates the shapes validate with.
//! - `shapes`: `Trapezoid`, `Rhombus`, `Pentagon`, the `Figure` capability
//!   set and the tagged `Shape` variant.
//! - `array`: `FigureArray`, the insertion-ordered owning collection.
//! - `tokens`, `num`: whitespace token input and `%g`-style number output,
//!   i.e. the text wire forms `(x y)` and `<Name> { (x y) ... }`.
//! - `sample`: seeded shape samplers for tests and benches.
//!
//! The crate never logs; every failure is returned as a [`FigureError`].

pub mod array;
pub mod cfg;
pub mod error;
pub mod geometry;
pub mod num;
pub mod point;
pub mod sample;
pub mod shapes;
pub mod tokens;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use array::FigureArray;
pub use error::{FigureError, FigureResult, GeometryFault, TokenFault};
pub use point::Point;
pub use shapes::{Figure, FigureKind, Pentagon, Rhombus, Shape, Trapezoid};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::array::FigureArray;
    pub use crate::error::{FigureError, FigureResult};
    pub use crate::geometry::{polygon_area, polygon_centroid};
    pub use crate::num::Num;
    pub use crate::point::Point;
    pub use crate::shapes::{Figure, FigureKind, Pentagon, Rhombus, Shape, Trapezoid};
    pub use crate::tokens::{ReaderTokens, TokenSource};
}
