use arrayvec::ArrayVec;
use log::{debug, trace};

use crate::{Cell, Direction, Grid, GridError, Move, Pos};

type IndexMap<K, V> = indexmap::IndexMap<K, V, fxhash::FxBuildHasher>;

/// Parent index of the start entry.
const ROOT: usize = !0usize;

/// Slides from `from` in `dir` until the next cell is a wall or outside the
/// grid. A slide passing over the finish cell stops on it.
pub fn slide(grid: &Grid, from: Pos, dir: Direction) -> Pos {
    let mut pos = from;
    while let Some(next) = grid.sibling_pos(pos, dir) {
        match grid[next] {
            Cell::Wall => break,
            Cell::Finish => return next,
            Cell::Open | Cell::Start => pos = next,
        }
    }
    pos
}

/// Slides from `from` that actually move, in [`Direction::ALL`] order.
pub fn moves(grid: &Grid, from: Pos) -> ArrayVec<Move, 4> {
    Direction::ALL
        .into_iter()
        .map(|dir| Move {
            dir,
            to: slide(grid, from, dir),
        })
        .filter(|mv| mv.to != from)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found(Vec<Move>),
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverState {
    Idle,
    Running,
    Done(Outcome),
}

/// Breadth-first search over slide moves for one start/finish pair.
///
/// Every discovered cell is a key of `parent`, in discovery order, mapped to
/// the index of the cell it was reached from and the direction of that slide.
/// Entries at or after `cursor` form the frontier.
#[derive(Debug)]
pub struct Solver<'a> {
    grid: &'a Grid,
    start: Pos,
    finish: Pos,
    parent: IndexMap<Pos, (usize, Direction)>,
    cursor: usize,
    state: SolverState,
}

impl<'a> Solver<'a> {
    pub fn new(grid: &'a Grid) -> Result<Self, GridError> {
        let start = grid.try_start()?;
        let finish = grid.try_finish()?;

        let mut parent = IndexMap::default();
        parent.insert(start, (ROOT, Direction::Right)); // Sentinel.
        Ok(Self {
            grid,
            start,
            finish,
            parent,
            cursor: 0,
            state: SolverState::Idle,
        })
    }

    pub fn state(&self) -> &SolverState {
        &self.state
    }

    /// Number of cells taken off the frontier so far.
    pub fn expanded(&self) -> usize {
        self.cursor
    }

    pub fn finish(mut self, mut on_step: impl FnMut()) -> Outcome {
        loop {
            on_step();
            if let SolverState::Done(outcome) = self.step() {
                return outcome.clone();
            }
        }
    }

    /// Expands one frontier cell.
    pub fn step(&mut self) -> &SolverState {
        match self.state {
            SolverState::Done(_) => return &self.state,
            SolverState::Idle => {
                debug!(
                    "Searching {:?} grid from {:?} to {:?}",
                    self.grid.dimensions(),
                    self.start,
                    self.finish,
                );
                self.state = SolverState::Running;
            }
            SolverState::Running => {}
        }

        let Some((&pos, _)) = self.parent.get_index(self.cursor) else {
            debug!("No path after expanding {} cells", self.cursor);
            self.state = SolverState::Done(Outcome::Exhausted);
            return &self.state;
        };

        for mv in moves(self.grid, pos) {
            if mv.to == self.finish {
                let path = self.path_to(self.cursor, mv);
                debug!(
                    "Found a {}-move path after expanding {} cells",
                    path.len(),
                    self.cursor + 1,
                );
                self.state = SolverState::Done(Outcome::Found(path));
                return &self.state;
            }
            if !self.parent.contains_key(&mv.to) {
                trace!("Reached {:?} via {:?} from {:?}", mv.to, mv.dir, pos);
                self.parent.insert(mv.to, (self.cursor, mv.dir));
            }
        }
        self.cursor += 1;
        &self.state
    }

    fn path_to(&self, leaf: usize, last: Move) -> Vec<Move> {
        let mut path = std::iter::successors(Some(leaf), |&i| {
            let (_, &(parent, _)) = self.parent.get_index(i)?;
            (parent != ROOT).then_some(parent)
        })
        .filter_map(|i| {
            let (&to, &(parent, dir)) = self.parent.get_index(i)?;
            (parent != ROOT).then_some(Move { dir, to })
        })
        .collect::<Vec<_>>();
        path.reverse();
        path.push(last);
        path
    }
}

/// Runs a fresh [`Solver`] to completion.
pub fn bfs(grid: &Grid, on_step: impl FnMut()) -> Result<Outcome, GridError> {
    Ok(Solver::new(grid)?.finish(on_step))
}
