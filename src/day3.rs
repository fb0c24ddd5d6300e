use crate::{parse, Part, Result};
use regex::Regex;

pub fn solve(part: Part, input: &str) -> Result<u64> {
    let re = Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")?;
    let mut enabled = true;
    let mut sum = 0;
    for caps in re.captures_iter(input) {
        match &caps[0] {
            "do()" => enabled = true,
            "don't()" => if part == Part::Two {enabled = false},
            _ if enabled => sum += parse::<u64>("factor", &caps[1])? * parse::<u64>("factor", &caps[2])?,
            _ => ()
        }
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_every_mul() {
        let input = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
        assert_eq!(solve(Part::One, input).unwrap(), 161);
    }

    #[test]
    fn dont_disables_until_do() {
        let input = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
        assert_eq!(solve(Part::Two, input).unwrap(), 48);
        assert_eq!(solve(Part::One, input).unwrap(), 161);
    }

    #[test]
    fn operands_are_at_most_three_digits() {
        assert_eq!(solve(Part::One, "mul(1000,2)mul(999,2)mul( 1,2)").unwrap(), 1998);
    }

    #[test]
    fn instructions_span_lines() {
        assert_eq!(solve(Part::Two, "don't()\nmul(2,3)\ndo()\nmul(4,5)").unwrap(), 20);
    }
}
