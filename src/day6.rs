//! Guard patrol simulation: walk forward, turn right at walls, and find the
//! single extra walls that would trap the guard in a loop.

use crate::grid::{Grid, Position};
use crate::{Error, Part, Result};
use bitvec::prelude::*;
use itertools::Itertools;
use log::{debug, trace};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

const WALL: u8 = b'#';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {Up, Right, Down, Left}

impl Heading {
    pub fn from_marker(cell: u8) -> Option<Self> {
        match cell {
            b'^' => Some(Heading::Up), b'>' => Some(Heading::Right),
            b'v' => Some(Heading::Down), b'<' => Some(Heading::Left),
            _ => None
        }
    }

    pub fn turn_right(self) -> Self {
        match self {
            Heading::Up => Heading::Right, Heading::Right => Heading::Down,
            Heading::Down => Heading::Left, Heading::Left => Heading::Up,
        }
    }

    fn delta(self) -> (isize, isize) {
        match self {
            Heading::Up => (-1, 0), Heading::Right => (0, 1),
            Heading::Down => (1, 0), Heading::Left => (0, -1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct State {
    pub pos: Position,
    pub heading: Heading,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {Exited, Looping}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    /// The starting state followed by the state after every forward move.
    pub states: Vec<State>,
    pub outcome: Outcome,
    /// Moves, turns and the final step off the grid, if any.
    pub steps: usize,
}

/// An immutable lab floor with exactly one guard marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lab {
    grid: Grid,
    start: State,
}

impl Lab {
    pub fn parse(input: &str) -> Result<Self> {
        let grid = Grid::parse(input)?;
        let markers = grid.positions().filter_map(|(pos, cell)|
            Heading::from_marker(cell).map(|heading| State {pos, heading})
        ).collect::<Vec<_>>();
        let [start] = markers[..] else {
            return Err(Error::MissingOrMultipleStart(markers.len()))
        };
        Ok(Self {grid, start})
    }

    pub fn trace(&self) -> Result<Path> {
        self.walk(None)
    }

    /// Traces the patrol as if `obstruction` held an extra wall.
    pub fn trace_obstructed(&self, obstruction: Position) -> Result<Path> {
        self.walk(Some(obstruction))
    }

    fn is_wall(&self, pos: Position, obstruction: Option<Position>) -> bool {
        obstruction == Some(pos) || self.grid.get(pos) == Some(WALL)
    }

    fn state_index(&self, state: State) -> Result<usize> {
        Ok(self.grid.index(state.pos)? * 4 + state.heading as usize)
    }

    fn walk(&self, obstruction: Option<Position>) -> Result<Path> {
        let mut seen = bitvec![0; self.grid.cell_count() * 4];
        let mut state = self.start;
        let mut states = vec![state];
        seen.set(self.state_index(state)?, true);
        let mut steps = 0;

        let outcome = loop {
            steps += 1;
            let Some(ahead) = self.grid.offset(state.pos, state.heading.delta(), 1) else {
                break Outcome::Exited
            };
            if self.is_wall(ahead, obstruction) {
                state.heading = state.heading.turn_right();
            } else {
                state.pos = ahead;
                states.push(state);
            }

            let ix = self.state_index(state)?;
            if seen[ix] {break Outcome::Looping};
            seen.set(ix, true);
        };

        trace!("{:?} with obstruction {:?} after {} steps", outcome, obstruction, steps);
        Ok(Path {states, outcome, steps})
    }
}

pub fn distinct_visited_positions(path: &Path) -> usize {
    path.states.iter().map(|state| state.pos).unique().count()
}

/// Counts the cells where one extra wall would send the guard into a loop.
///
/// A wall off the unobstructed path is never reached, so it leaves the
/// outcome as it was: such cells count only when the guard loops already.
/// Cells on the path (minus the starting cell) are traced one by one; each
/// trial reads the shared lab and carries its own obstruction, so trials run
/// in parallel.
pub fn count_loop_inducing_obstructions(lab: &Lab) -> Result<usize> {
    let path = lab.trace()?;
    let on_path = path.states.iter().map(|state| state.pos).collect::<FxHashSet<_>>();
    let (candidates, off_path): (Vec<_>, Vec<_>) = lab.grid.positions()
        .filter(|&(pos, cell)| pos != lab.start.pos && cell != WALL)
        .map(|(pos, _)| pos)
        .partition(|pos| on_path.contains(pos));
    debug!("trying {} obstruction candidates, {} off the {:?} path",
        candidates.len(), off_path.len(), path.outcome);

    let looping = candidates.par_iter()
        .map(|&pos| Ok(lab.trace_obstructed(pos)?.outcome == Outcome::Looping))
        .collect::<Result<Vec<bool>>>()?;
    let unreached = if path.outcome == Outcome::Looping {off_path.len()} else {0};
    Ok(looping.into_iter().filter(|&trapped| trapped).count() + unreached)
}

pub fn solve(part: Part, input: &str) -> Result<u64> {
    let lab = Lab::parse(input)?;
    let answer = match part {
        Part::One => {
            let path = lab.trace()?;
            debug!("guard {:?} after {} steps", path.outcome, path.steps);
            distinct_visited_positions(&path)
        },
        Part::Two => count_loop_inducing_obstructions(&lab)?,
    };
    Ok(answer as u64)
}
