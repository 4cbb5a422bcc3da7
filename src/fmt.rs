use std::fmt;

use crate::{Cell, Direction, Grid, GridError, Move, Outcome, Pos};

pub(crate) const HEADER: &str = "Shortest path:";
pub(crate) const NO_PATH: &str = "No path found!";
pub(crate) const DONE: &str = "Done!";

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds(Pos(row, col)) => {
                write!(f, "Position (row {row}, column {col}) is out of bounds")
            }
            GridError::MissingMarker(marker) => {
                write!(f, "Grid does not have exactly one {marker:?} cell")
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (_, width) = self.dimensions();
        for (pos, cell) in self.cells() {
            cell.fmt(f)?;
            if pos.1 + 1 == width {
                "\n".fmt(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Open => ".".fmt(f),
            Cell::Wall => "0".fmt(f),
            Cell::Start => "S".fmt(f),
            Cell::Finish => "F".fmt(f),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

/// 1-indexed, column first.
impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", u32::from(self.1) + 1, u32::from(self.0) + 1)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move {} to {}", self.dir, self.to)
    }
}

/// Numbered, human-readable listing of a search outcome.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    start: Pos,
    outcome: &'a Outcome,
}

impl<'a> Report<'a> {
    pub fn new(start: Pos, outcome: &'a Outcome) -> Self {
        Self { start, outcome }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = match self.outcome {
            Outcome::Found(path) => path,
            Outcome::Exhausted => return writeln!(f, "{NO_PATH}"),
        };
        writeln!(f, "{HEADER}")?;
        writeln!(f, "1. Start at {}", self.start)?;
        for (mv, step) in path.iter().zip(2..) {
            writeln!(f, "{step}. {mv}")?;
        }
        writeln!(f, "{}. {DONE}", path.len() + 2)
    }
}
