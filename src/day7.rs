use crate::{parse, Error, Part, Result};
use arrayvec::ArrayVec;

#[derive(Clone, Copy, Debug)]
enum Operator {Add, Multiply, Concatenate}

impl Operator {
    fn apply(self, left: u64, right: u64) -> Option<u64> {
        match self {
            Operator::Add => left.checked_add(right),
            Operator::Multiply => left.checked_mul(right),
            Operator::Concatenate => {
                let shift = 10u64.checked_pow(right.checked_ilog10().unwrap_or(0) + 1)?;
                left.checked_mul(shift)?.checked_add(right)
            }
        }
    }
}

struct Equation {
    target: u64,
    values: Vec<u64>,
}

impl Equation {
    fn parse(line: &str) -> Result<Self> {
        let Some((target, values)) = line.split_once(':') else {
            return Err(Error::Parse {what: "calibration equation", input: line.to_owned()})
        };
        let values = values.split_whitespace().map(|v| parse("operand", v)).collect::<Result<Vec<_>>>()?;
        if values.is_empty() {
            return Err(Error::Parse {what: "calibration operands", input: line.to_owned()})
        }
        Ok(Self {target: parse("test value", target)?, values})
    }

    /// Breadth-first over left-to-right results. Only `* 0` shrinks a value,
    /// so results past the target are dropped once no zero operand is left.
    fn can_produce_target(&self, operators: &[Operator]) -> bool {
        let last_zero = self.values.iter().rposition(|&v| v == 0);
        let mut results = vec![self.values[0]];
        let mut next = Vec::new();
        for (ix, &value) in self.values.iter().enumerate().skip(1) {
            let prune = last_zero.map_or(true, |zero| zero <= ix);
            next.clear();
            for &result in &results {
                next.extend(operators.iter()
                    .filter_map(|op| op.apply(result, value))
                    .filter(|&r| !prune || r <= self.target));
            }
            std::mem::swap(&mut next, &mut results);
        }
        results.contains(&self.target)
    }
}

pub fn solve(part: Part, input: &str) -> Result<u64> {
    let mut operators = ArrayVec::<Operator, 3>::new();
    operators.extend([Operator::Add, Operator::Multiply]);
    if part == Part::Two {operators.push(Operator::Concatenate)};

    let mut sum = 0;
    for line in input.trim().lines() {
        let equation = Equation::parse(line)?;
        if equation.can_produce_target(&operators) {sum += equation.target};
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    #[test]
    fn add_and_multiply() {
        assert_eq!(solve(Part::One, EXAMPLE).unwrap(), 3749);
    }

    #[test]
    fn with_concatenation() {
        assert_eq!(solve(Part::Two, EXAMPLE).unwrap(), 11387);
    }

    #[test]
    fn concatenation_appends_digits() {
        assert_eq!(Operator::Concatenate.apply(12, 345), Some(12345));
        assert_eq!(Operator::Concatenate.apply(12, 0), Some(120));
        assert_eq!(Operator::Concatenate.apply(u64::MAX, 1), None);
    }

    #[test]
    fn single_operand_must_equal_target() {
        assert_eq!(solve(Part::One, "5: 5\n6: 5").unwrap(), 5);
    }

    #[test]
    fn zero_operand_can_cancel_an_overshoot() {
        assert_eq!(solve(Part::One, "4: 9 0 4\n0: 3 5 0\n4: 9 0 5").unwrap(), 4);
        assert!(Equation::parse("0: 3 5 0").unwrap().can_produce_target(&[Operator::Add, Operator::Multiply]));
        assert!(Equation::parse("4: 9 0 4").unwrap().can_produce_target(&[Operator::Add, Operator::Multiply]));
        assert!(!Equation::parse("4: 9 0 5").unwrap().can_produce_target(&[Operator::Add, Operator::Multiply]));
    }

    #[test]
    fn malformed_equations() {
        assert!(matches!(solve(Part::One, "190 10 19"), Err(Error::Parse {what: "calibration equation", ..})));
        assert!(matches!(solve(Part::One, "190:"), Err(Error::Parse {what: "calibration operands", ..})));
    }
}
