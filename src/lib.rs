use std::error::Error;
use std::ops::Index;

mod fmt;
mod parse;
pub mod solve;

pub use fmt::Report;
pub use parse::parse_report;
pub use solve::{bfs, slide, Outcome, Solver, SolverState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridError {
    OutOfBounds(Pos),
    MissingMarker(Marker),
}

impl Error for GridError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Start,
    Finish,
}

/// A 0-indexed `(row, column)` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos(pub u16, pub u16);

impl Pos {
    pub fn row(self) -> u16 {
        self.0
    }

    pub fn col(self) -> u16 {
        self.1
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Open,
    Wall,
    Start,
    Finish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Right = 0,
    Down,
    Left,
    Up,
}

impl Direction {
    /// Enumeration order decides which of several shortest paths is reported.
    pub const ALL: [Self; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];

    /// Unit `(row, column)` delta.
    pub fn delta(self) -> (i16, i16) {
        const DIRECTIONS: [(i16, i16); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
        DIRECTIONS[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Up => "up",
        }
    }
}

/// One completed slide and the cell it ended on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub dir: Direction,
    pub to: Pos,
}

/// Immutable maze. Shared read-only between any number of searches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    height: u16,
    width: u16,
    cells: Box<[Cell]>,
    start: Option<Pos>,
    finish: Option<Pos>,
}

impl Index<Pos> for Grid {
    type Output = Cell;
    fn index(&self, pos: Pos) -> &Self::Output {
        assert!(self.contains(pos), "{}", GridError::OutOfBounds(pos));
        &self.cells[pos.0 as usize * self.width as usize + pos.1 as usize]
    }
}

impl Grid {
    /// Builds a grid from row-major cells.
    ///
    /// Markers are not validated here: a grid without exactly one `Start`
    /// and one `Finish` is representable, but [`Grid::try_start`] and
    /// [`Grid::try_finish`] report it.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or `cells.len()` is not
    /// `height * width`. Use [`str::parse`] to load untrusted input.
    pub fn new(height: u16, width: u16, cells: Vec<Cell>) -> Self {
        assert!(height > 0 && width > 0, "Empty grid");
        assert_eq!(cells.len(), height as usize * width as usize);

        let mut grid = Grid {
            height,
            width,
            cells: cells.into(),
            start: None,
            finish: None,
        };
        grid.start = grid.unique(Cell::Start);
        grid.finish = grid.unique(Cell::Finish);
        grid
    }

    fn unique(&self, kind: Cell) -> Option<Pos> {
        let mut found = self.cells().filter(|&(_, cell)| cell == kind);
        let (pos, _) = found.next()?;
        found.next().is_none().then_some(pos)
    }

    /// `(rows, columns)`.
    pub fn dimensions(&self) -> (u16, u16) {
        (self.height, self.width)
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.0 < self.height && pos.1 < self.width
    }

    pub fn cell_kind(&self, pos: Pos) -> Result<Cell, GridError> {
        if !self.contains(pos) {
            return Err(GridError::OutOfBounds(pos));
        }
        Ok(self[pos])
    }

    pub fn try_start(&self) -> Result<Pos, GridError> {
        self.start.ok_or(GridError::MissingMarker(Marker::Start))
    }

    pub fn try_finish(&self) -> Result<Pos, GridError> {
        self.finish.ok_or(GridError::MissingMarker(Marker::Finish))
    }

    pub(crate) fn cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        let idx_iter =
            (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Pos(row, col)));
        idx_iter.zip(self.cells.iter().copied())
    }

    /// The neighbouring coordinate in `dir`, if it is inside the grid.
    pub fn sibling_pos(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let row = pos.0.checked_add_signed(dr)?;
        let col = pos.1.checked_add_signed(dc)?;
        let next = Pos(row, col);
        self.contains(next).then_some(next)
    }
}
