//! Error taxonomy shared by construction, parsing and the collection.

use thiserror::Error;

use crate::shapes::FigureKind;

/// Which validation step rejected a vertex set.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFault {
    #[error("expected {expected} vertices, got {actual}")]
    VertexCount { expected: usize, actual: usize },

    #[error("turn at vertex {vertex} is degenerate or breaks convex winding")]
    NotConvex { vertex: usize },

    #[error("no pair of opposite sides is parallel")]
    NoParallelSides,

    #[error("side lengths differ")]
    UnequalSides,

    #[error("interior angles differ")]
    UnequalAngles,

    #[error("area is not positive")]
    ZeroArea,
}

/// Why a coordinate token could not be consumed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenFault {
    #[error("input exhausted")]
    Exhausted,

    #[error("malformed number {0:?}")]
    Malformed(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FigureError {
    #[error("invalid {kind} geometry: {fault}")]
    InvalidGeometry { kind: FigureKind, fault: GeometryFault },

    #[error("failed to read {kind} vertex {vertex}: {fault}")]
    ParseFailure {
        kind: FigureKind,
        vertex: usize,
        fault: TokenFault,
    },

    #[error("no figure to store")]
    NullInput,

    #[error("index {index} out of range (size {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type FigureResult<T> = Result<T, FigureError>;
