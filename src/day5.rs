use crate::{parse, Error, Part, Result};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

struct Rules(FxHashSet<(u32, u32)>);

impl Rules {
    fn compare(&self, x: u32, y: u32) -> Ordering {
        if self.0.contains(&(x, y)) {Ordering::Less}
        else if self.0.contains(&(y, x)) {Ordering::Greater}
        else {Ordering::Equal}
    }

    fn is_ordered(&self, update: &[u32]) -> bool {
        (0 .. update.len()).all(|x|
            (x + 1 .. update.len()).all(|y| self.compare(update[x], update[y]) != Ordering::Greater)
        )
    }
}

fn middle_page(update: &[u32]) -> u64 {
    update[(update.len() - 1) / 2] as u64
}

fn parse_manual(input: &str) -> Result<(Rules, Vec<Vec<u32>>)> {
    let mut lines = input.trim().lines();
    let mut rules = FxHashSet::default();
    for line in lines.by_ref().take_while(|line| !line.trim().is_empty()) {
        let Some((before, after)) = line.split_once('|') else {
            return Err(Error::Parse {what: "ordering rule", input: line.to_owned()})
        };
        rules.insert((parse("page", before)?, parse("page", after)?));
    }

    let updates = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split(',').map(|page| parse("page", page)).collect::<Result<Vec<u32>>>())
        .collect::<Result<Vec<_>>>()?;
    Ok((Rules(rules), updates))
}

pub fn solve(part: Part, input: &str) -> Result<u64> {
    let (rules, updates) = parse_manual(input)?;
    let sum = match part {
        Part::One => updates.iter()
            .filter(|update| rules.is_ordered(update))
            .map(|update| middle_page(update))
            .sum(),
        Part::Two => updates.into_iter()
            .filter(|update| !rules.is_ordered(update))
            .map(|mut update| {
                update.sort_by(|&x, &y| rules.compare(x, y));
                middle_page(&update)
            })
            .sum(),
    };
    Ok(sum)
}
