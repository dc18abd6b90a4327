//! Insertion-ordered, index-addressed collection that owns its figures.
//!
//! - Copy (`Clone`, `clone_from`) deep-clones through `Figure::duplicate`
//!   and builds the full replacement before dropping the old contents.
//! - Move is `take()`: ownership transfers and the source stays valid and
//!   empty.

use std::io::{self, Write};

use crate::error::{FigureError, FigureResult};
use crate::num::Num;
use crate::shapes::{Figure, Shape};

#[derive(Debug, Default)]
pub struct FigureArray {
    items: Vec<Shape>,
}

impl FigureArray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Take ownership of `figure` and append it.
    pub fn push(&mut self, figure: impl Into<Shape>) {
        self.items.push(figure.into());
    }

    /// Like [`push`](Self::push) for callers holding an optional figure.
    pub fn try_push(&mut self, figure: Option<Shape>) -> FigureResult<()> {
        let figure = figure.ok_or(FigureError::NullInput)?;
        self.items.push(figure);
        Ok(())
    }

    /// Remove the figure at `index`, shifting later ones left.
    pub fn remove(&mut self, index: usize) -> FigureResult<Shape> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Read-only view of the figure at `index`.
    pub fn get(&self, index: usize) -> FigureResult<&Shape> {
        self.items.get(index).ok_or(FigureError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// `equals` between two stored figures.
    pub fn equal_at(&self, i: usize, j: usize) -> FigureResult<bool> {
        Ok(self.get(i)?.equals(self.get(j)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.items.iter()
    }

    /// Sum of areas in index order; `+0.0` when empty.
    pub fn total_area(&self) -> f64 {
        // `Sum for f64` starts at -0.0, which renders as `-0`.
        self.items.iter().fold(0.0, |acc, f| acc + f.area())
    }

    /// One line per figure: `<i+1>) center=(<x> <y>) area=<a>`.
    pub fn describe_all<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (i, f) in self.items.iter().enumerate() {
            let c = f.center();
            writeln!(
                out,
                "{}) center=({} {}) area={}",
                i + 1,
                Num(c.x),
                Num(c.y),
                Num(f.area())
            )?;
        }
        Ok(())
    }

    /// One line per figure: `#<i> <text form>`.
    pub fn print_all<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (i, f) in self.items.iter().enumerate() {
            writeln!(out, "#{i} {f}")?;
        }
        Ok(())
    }

    /// Move all figures out, leaving `self` empty.
    pub fn take(&mut self) -> FigureArray {
        std::mem::take(self)
    }

    fn check_index(&self, index: usize) -> FigureResult<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(FigureError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}

impl Clone for FigureArray {
    fn clone(&self) -> Self {
        Self {
            items: self.items.iter().map(Figure::duplicate).collect(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        // A panic while duplicating drops the partial copy and leaves `self` intact.
        let fresh: Vec<Shape> = source.items.iter().map(Figure::duplicate).collect();
        self.items = fresh;
    }
}

impl FromIterator<Shape> for FigureArray {
    fn from_iter<T: IntoIterator<Item = Shape>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FigureArray {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
