use crate::{parse, Error, Part, Result};
use itertools::Itertools;
use std::iter::zip;

fn parse_lists(input: &str) -> Result<(Vec<u64>, Vec<u64>)> {
    let mut lefts = vec![];
    let mut rights = vec![];
    for line in input.trim().lines() {
        let Some((left, right)) = line.split_whitespace().collect_tuple() else {
            return Err(Error::Parse {what: "pair of location ids", input: line.to_owned()})
        };
        lefts.push(parse("location id", left)?);
        rights.push(parse("location id", right)?);
    }
    Ok((lefts, rights))
}

pub fn solve(part: Part, input: &str) -> Result<u64> {
    let (mut lefts, mut rights) = parse_lists(input)?;
    let answer = match part {
        Part::One => {
            lefts.sort_unstable();
            rights.sort_unstable();
            zip(lefts, rights).map(|(left, right)| left.abs_diff(right)).sum::<u64>()
        },
        Part::Two => {
            let counts = rights.iter().counts();
            lefts.iter().map(|left|
                left * counts.get(left).copied().unwrap_or(0) as u64
            ).sum::<u64>()
        }
    };
    Ok(answer)
}
