use crate::{parse, Part, Result};
use itertools::Itertools;

fn is_safe(levels: impl Iterator<Item = i64>) -> bool {
    let mut trend = 0;
    levels.tuple_windows().all(|(x, y)| {
        let diff = y - x;
        if trend == 0 {trend = diff.signum()};
        diff.signum() == trend && (1 ..= 3).contains(&diff.abs())
    })
}

/// Safe as is, or once any single level is dropped.
fn is_safe_dampened(levels: &[i64]) -> bool {
    is_safe(levels.iter().copied()) || (0 .. levels.len()).any(|skip|
        is_safe(levels.iter().enumerate().filter(|&(ix, _)| ix != skip).map(|(_, &x)| x))
    )
}

pub fn solve(part: Part, input: &str) -> Result<u64> {
    let mut safe = 0;
    for line in input.trim().lines() {
        let levels = line.split([' ', ','])
            .filter(|s| !s.is_empty())
            .map(|s| parse("level", s))
            .collect::<Result<Vec<i64>>>()?;
        let ok = match part {
            Part::One => is_safe(levels.iter().copied()),
            Part::Two => is_safe_dampened(&levels),
        };
        if ok {safe += 1};
    }
    Ok(safe)
}
