//! JSON summary of a collection.

use figures::{Figure, FigureArray, FigureKind, Point};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FigureSummary {
    pub index: usize,
    pub kind: FigureKind,
    pub text: String,
    pub vertices: Vec<Point>,
    pub center: Point,
    pub area: f64,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub code_rev: String,
    pub version: &'static str,
    pub rejected: usize,
    pub total_area: f64,
    pub figures: Vec<FigureSummary>,
}

impl Report {
    pub fn new(arr: &FigureArray, rejected: usize) -> Self {
        let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
        Self {
            code_rev: rev.to_string(),
            version: figures::VERSION,
            rejected,
            total_area: arr.total_area(),
            figures: arr
                .iter()
                .enumerate()
                .map(|(index, f)| FigureSummary {
                    index,
                    kind: f.kind(),
                    text: f.to_string(),
                    vertices: f.vertices().to_vec(),
                    center: f.center(),
                    area: f.area(),
                })
                .collect(),
        }
    }
}
