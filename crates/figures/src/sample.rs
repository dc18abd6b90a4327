//! Seeded samplers for valid shapes.
//!
//! Purpose
//! - Reproducible random fixtures for property tests and benches.
//!
//! Model
//! - Build the shape in a local frame (origin-centred, axis-aligned), then
//!   rotate by a random angle, translate to a random centre and optionally
//!   reverse the winding. Every draw goes through the validating constructor.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::f64::consts::TAU;

use nalgebra::{Rotation2, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::FigureResult;
use crate::point::Point;
use crate::shapes::{FigureKind, Pentagon, Rhombus, Shape, Trapezoid};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Centres are drawn from `[-center_box, center_box]²`.
    pub center_box: f64,
    /// Characteristic size (radius, half-diagonal, half-width) range.
    pub size_min: f64,
    pub size_max: f64,
    /// Reverse the vertex order with probability 1/2.
    pub random_winding: bool,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            center_box: 10.0,
            size_min: 0.5,
            size_max: 5.0,
            random_winding: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

struct Frame {
    rot: Rotation2<f64>,
    center: Vector2<f64>,
    reverse: bool,
}

impl Frame {
    fn draw(cfg: &SampleCfg, rng: &mut StdRng) -> Self {
        let b = cfg.center_box.abs();
        let center = if b > 0.0 {
            Vector2::new(rng.gen_range(-b..=b), rng.gen_range(-b..=b))
        } else {
            Vector2::zeros()
        };
        Self {
            rot: Rotation2::new(rng.gen::<f64>() * TAU),
            center,
            reverse: cfg.random_winding && rng.gen_bool(0.5),
        }
    }

    fn place(&self, local: &[Vector2<f64>]) -> Vec<Point> {
        let mut out: Vec<Point> = local
            .iter()
            .map(|p| Point::from(self.rot * *p + self.center))
            .collect();
        if self.reverse {
            out.reverse();
        }
        out
    }
}

fn size(cfg: &SampleCfg, rng: &mut StdRng) -> f64 {
    let lo = cfg.size_min.max(1e-3);
    let hi = cfg.size_max.max(lo);
    rng.gen_range(lo..=hi)
}

/// Rhombus from two random half-diagonals.
pub fn draw_rhombus(cfg: SampleCfg, tok: ReplayToken) -> FigureResult<Rhombus> {
    let mut rng = tok.to_std_rng();
    let (p, q) = (size(&cfg, &mut rng), size(&cfg, &mut rng));
    let frame = Frame::draw(&cfg, &mut rng);
    let local = [
        Vector2::new(p, 0.0),
        Vector2::new(0.0, q),
        Vector2::new(-p, 0.0),
        Vector2::new(0.0, -q),
    ];
    Rhombus::new(&frame.place(&local))
}

/// Isosceles trapezoid; the top edge is strictly shorter than the base.
pub fn draw_trapezoid(cfg: SampleCfg, tok: ReplayToken) -> FigureResult<Trapezoid> {
    let mut rng = tok.to_std_rng();
    let base = size(&cfg, &mut rng);
    let top = base * rng.gen_range(0.2..0.9);
    let height = size(&cfg, &mut rng);
    let frame = Frame::draw(&cfg, &mut rng);
    let local = [
        Vector2::new(-base, 0.0),
        Vector2::new(base, 0.0),
        Vector2::new(top, height),
        Vector2::new(-top, height),
    ];
    Trapezoid::new(&frame.place(&local))
}

/// Regular pentagon inscribed in a circle of random radius.
pub fn draw_pentagon(cfg: SampleCfg, tok: ReplayToken) -> FigureResult<Pentagon> {
    let mut rng = tok.to_std_rng();
    let r = size(&cfg, &mut rng);
    let frame = Frame::draw(&cfg, &mut rng);
    let local: Vec<Vector2<f64>> = (0..5)
        .map(|k| {
            let th = k as f64 * TAU / 5.0;
            Vector2::new(r * th.cos(), r * th.sin())
        })
        .collect();
    Pentagon::new(&frame.place(&local))
}

pub fn draw_shape(kind: FigureKind, cfg: SampleCfg, tok: ReplayToken) -> FigureResult<Shape> {
    Ok(match kind {
        FigureKind::Trapezoid => draw_trapezoid(cfg, tok)?.into(),
        FigureKind::Rhombus => draw_rhombus(cfg, tok)?.into(),
        FigureKind::Pentagon => draw_pentagon(cfg, tok)?.into(),
    })
}
