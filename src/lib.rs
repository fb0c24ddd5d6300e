pub mod day1;
pub mod day2;
pub mod day3;
pub mod day4;
pub mod day5;
pub mod day6;
pub mod day7;
pub mod day8;
pub mod day9;
pub mod grid;

use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed grid: row {row} is {found} cells wide, expected {expected}")]
    MalformedGrid { row: usize, expected: usize, found: usize },
    #[error("expected exactly one guard marker, found {0}")]
    MissingOrMultipleStart(usize),
    #[error("position ({row}, {col}) is outside the grid")]
    OutOfRangeAccess { row: usize, col: usize },
    #[error("cannot parse {what} from {input:?}")]
    Parse { what: &'static str, input: String },
    #[error("no solver for day {0}")]
    UnknownDay(usize),
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Part {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
}

impl Part {
    pub const BOTH: [Part; 2] = [Part::One, Part::Two];
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Part::One => write!(f, "1"),
            Part::Two => write!(f, "2"),
        }
    }
}

pub type Solver = fn(Part, &str) -> Result<u64>;

pub const DAYS: [Solver; 9] = [
    day1::solve, day2::solve, day3::solve, day4::solve, day5::solve,
    day6::solve, day7::solve, day8::solve, day9::solve,
];

/// Runs one part of a 1-based day.
pub fn solve(day: usize, part: Part, input: &str) -> Result<u64> {
    let solver = day.checked_sub(1).and_then(|ix| DAYS.get(ix).copied()).ok_or(Error::UnknownDay(day))?;
    solver(part, input)
}

pub(crate) fn parse<T: FromStr>(what: &'static str, s: &str) -> Result<T> {
    s.trim().parse().map_err(|_| Error::Parse {what, input: s.to_owned()})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_days_are_rejected() {
        assert!(matches!(solve(0, Part::One, ""), Err(Error::UnknownDay(0))));
        assert!(matches!(solve(10, Part::Two, ""), Err(Error::UnknownDay(10))));
    }

    #[test]
    fn parse_reports_the_offending_text() {
        let err = parse::<u64>("level", "12x").unwrap_err();
        assert_eq!(err.to_string(), r#"cannot parse level from "12x""#);
        assert_eq!(parse::<u64>("level", " 12 ").unwrap(), 12);
    }
}
