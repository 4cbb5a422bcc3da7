use std::str::FromStr;

use anyhow::{bail, ensure, Context, Result};

use crate::fmt::{DONE, HEADER, NO_PATH};
use crate::{Cell, Direction, Grid, Move, Outcome, Pos};

impl FromStr for Grid {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<_>>();
        ensure!(!lines.is_empty(), "Empty maze");

        let height = u16::try_from(lines.len()).context("Too many rows")?;
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or_default();
        let width = u16::try_from(width).context("Too many columns")?;

        let mut start = None;
        let mut finish = None;
        let mut cells = Vec::with_capacity(height as usize * width as usize);
        for (i, line) in lines.iter().enumerate() {
            for (j, ch) in line.chars().enumerate() {
                let pos = Pos(i as _, j as _);
                let cell = match ch {
                    'S' => {
                        if let Some(prev) = start.replace(pos) {
                            bail!("Multiple starts at {prev} and {pos}");
                        }
                        Cell::Start
                    }
                    'F' => {
                        if let Some(prev) = finish.replace(pos) {
                            bail!("Multiple finishes at {prev} and {pos}");
                        }
                        Cell::Finish
                    }
                    '0' => Cell::Wall,
                    _ => Cell::Open,
                };
                cells.push(cell);
            }
            // Ragged rows are walled off on the right.
            cells.resize((i + 1) * width as usize, Cell::Wall);
        }
        ensure!(start.is_some(), "Missing start 'S'");
        ensure!(finish.is_some(), "Missing finish 'F'");

        Ok(Grid::new(height, width, cells))
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|dir| dir.name() == s)
            .with_context(|| format!("Invalid direction: {s:?}"))
    }
}

/// Parses a `(column,row)` pair as rendered, 1-indexed.
fn parse_display_pos(s: &str) -> Result<Pos> {
    let (col, row) = s
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .and_then(|s| s.split_once(','))
        .with_context(|| format!("Invalid coordinate: {s:?}"))?;
    let coord = |v: &str| -> Result<u16> {
        let v = v.trim().parse::<u32>()?;
        ensure!(v >= 1, "Coordinates are 1-indexed, got {v}");
        Ok(u16::try_from(v - 1)?)
    };
    Ok(Pos(coord(row)?, coord(col)?))
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dir, to) = s
            .strip_prefix("Move ")
            .and_then(|s| s.split_once(" to "))
            .with_context(|| format!("Invalid move: {s:?}"))?;
        Ok(Move {
            dir: dir.parse()?,
            to: parse_display_pos(to)?,
        })
    }
}

/// Reads back the moves of a rendered [`Report`](crate::Report).
pub fn parse_report(s: &str) -> Result<Outcome> {
    let mut lines = s.lines().map(str::trim).filter(|line| !line.is_empty());
    let first = lines.next().context("Empty report")?;
    if first == NO_PATH {
        ensure!(lines.next().is_none(), "Trailing lines after {NO_PATH:?}");
        return Ok(Outcome::Exhausted);
    }
    ensure!(first == HEADER, "Invalid report header: {first:?}");

    let mut path = Vec::new();
    let mut steps = lines.zip(1..);
    while let Some((line, step)) = steps.next() {
        let (num, entry) = line
            .split_once(". ")
            .with_context(|| format!("Missing step number: {line:?}"))?;
        let num = num.parse::<usize>()?;
        ensure!(num == step, "Step {num} out of order, expecting {step}");

        if step == 1 {
            let start = entry
                .strip_prefix("Start at ")
                .with_context(|| format!("Missing start: {line:?}"))?;
            parse_display_pos(start)?;
        } else if entry == DONE {
            ensure!(steps.next().is_none(), "Trailing lines after {DONE:?}");
            return Ok(Outcome::Found(path));
        } else {
            let mv = entry
                .parse::<Move>()
                .with_context(|| format!("Failed to parse step {step}"))?;
            path.push(mv);
        }
    }
    bail!("Missing {DONE:?}")
}
