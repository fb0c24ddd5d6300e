use crate::grid::{Grid, Position};
use crate::{Part, Result};
use itertools::iproduct;

const WORD: &[u8] = b"XMAS";

fn spells_word(grid: &Grid, start: Position, dir: (isize, isize)) -> bool {
    WORD.iter().enumerate().all(|(n, &letter)|
        grid.offset(start, dir, n as isize).and_then(|pos| grid.get(pos)) == Some(letter)
    )
}

/// Both diagonals through `centre` read MAS, forwards or backwards.
fn is_x_mas(grid: &Grid, centre: Position) -> bool {
    let diagonal = |dir| {
        let ends = [-1, 1].map(|n| grid.offset(centre, dir, n).and_then(|pos| grid.get(pos)));
        matches!(ends, [Some(b'M'), Some(b'S')] | [Some(b'S'), Some(b'M')])
    };
    grid.get(centre) == Some(b'A') && diagonal((1, 1)) && diagonal((1, -1))
}

pub fn solve(part: Part, input: &str) -> Result<u64> {
    let grid = Grid::parse(input)?;
    let count = match part {
        Part::One => grid.positions()
            .filter(|&(_, cell)| cell == WORD[0])
            .flat_map(|(pos, _)|
                iproduct!(-1 ..= 1, -1 ..= 1).filter(move |&dir| dir != (0, 0)).map(move |dir| (pos, dir))
            )
            .filter(|&(pos, dir)| spells_word(&grid, pos, dir))
            .count(),
        Part::Two => grid.positions().filter(|&(pos, _)| is_x_mas(&grid, pos)).count(),
    };
    Ok(count as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    #[test]
    fn finds_xmas_in_every_direction() {
        assert_eq!(solve(Part::One, EXAMPLE).unwrap(), 18);
    }

    #[test]
    fn finds_crossed_mas() {
        assert_eq!(solve(Part::Two, EXAMPLE).unwrap(), 9);
    }

    #[test]
    fn small_grids() {
        assert_eq!(solve(Part::One, "XMAS\n....\nSAMX").unwrap(), 2);
        assert_eq!(solve(Part::Two, "M.S\n.A.\nM.S").unwrap(), 1);
        assert_eq!(solve(Part::Two, "M.M\n.A.\nM.S").unwrap(), 0);
    }
}
