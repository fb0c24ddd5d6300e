use crate::grid::{Grid, Position};
use crate::{Error, Part, Result};
use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

fn antennas(grid: &Grid) -> Result<FxHashMap<u8, Vec<Position>>> {
    let mut by_frequency = FxHashMap::<u8, Vec<Position>>::default();
    for (pos, cell) in grid.positions() {
        match cell {
            b'.' => (),
            b'0' ..= b'9' | b'A' ..= b'Z' | b'a' ..= b'z' => by_frequency.entry(cell).or_default().push(pos),
            _ => return Err(Error::Parse {
                what: "antenna frequency",
                input: format!("{:?} at ({}, {})", cell as char, pos.row, pos.col)
            })
        }
    }
    Ok(by_frequency)
}

/// Antinodes on the far side of `from`, away from `other`.
fn antinodes_beyond(grid: &Grid, from: Position, other: Position, part: Part) -> Vec<Position> {
    let step = (from.row as isize - other.row as isize, from.col as isize - other.col as isize);
    match part {
        Part::One => grid.offset(from, step, 1).into_iter().collect(),
        Part::Two => (0 ..).map_while(|n| grid.offset(from, step, n)).collect(),
    }
}

pub fn solve(part: Part, input: &str) -> Result<u64> {
    let grid = Grid::parse(input)?;
    let mut antinodes = FxHashSet::default();
    for positions in antennas(&grid)?.values() {
        for (&a, &b) in positions.iter().tuple_combinations() {
            antinodes.extend(antinodes_beyond(&grid, a, b, part));
            antinodes.extend(antinodes_beyond(&grid, b, a, part));
        }
    }
    Ok(antinodes.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    #[test]
    fn antinodes_at_double_distance() {
        assert_eq!(solve(Part::One, EXAMPLE).unwrap(), 14);
    }

    #[test]
    fn resonant_antinodes() {
        assert_eq!(solve(Part::Two, EXAMPLE).unwrap(), 34);
    }

    #[test]
    fn resonance_along_a_line() {
        let input = "\
T.........
...T......
.T........
..........
..........
..........
..........
..........
..........
..........
";
        assert_eq!(solve(Part::Two, input).unwrap(), 9);
    }

    #[test]
    fn lone_antennas_have_no_antinodes() {
        assert_eq!(solve(Part::Two, "a..\n.b.\n..c").unwrap(), 0);
    }

    #[test]
    fn rejects_unknown_cells() {
        assert!(matches!(solve(Part::One, "..\n.#"), Err(Error::Parse {what: "antenna frequency", ..})));
    }
}
