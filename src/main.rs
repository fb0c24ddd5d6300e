use anyhow::Context;
use aoc2024::{Part, DAYS};
use clap::Parser;
use log::{debug, info};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

const BANNER: &str = "🎅Advent of Code 2024🎅";

/// Solves one Advent of Code 2024 day, or shows a menu of days when none is given.
#[derive(Debug, Parser)]
struct Args {
    /// Day number
    day: Option<usize>,
    /// Part to solve; both when omitted
    #[arg(value_enum)]
    part: Option<Part>,
    /// Read the Nth test input (dayNtestT.in) instead of the real one
    #[arg(long, value_name = "N")]
    test: Option<u32>,
    /// Directory holding the input files
    #[arg(long, env = "AOC_INPUTS", default_value = "inputs")]
    inputs: PathBuf,
}

fn input_path(inputs: &Path, day: usize, test: Option<u32>) -> PathBuf {
    match test {
        Some(test) => inputs.join(format!("day{}test{}.in", day, test)),
        None => inputs.join(format!("day{}.in", day)),
    }
}

fn run_day(inputs: &Path, day: usize, parts: &[Part], test: Option<u32>) -> anyhow::Result<()> {
    let path = input_path(inputs, day, test);
    debug!("reading {}", path.display());
    let input = std::fs::read_to_string(&path)
        .with_context(|| format!("cannot read input {}", path.display()))?;

    for &part in parts {
        let time = Instant::now();
        let answer = aoc2024::solve(day, part, &input)
            .with_context(|| format!("day {} part {} failed", day, part))?;
        println!("Part {}: {}", part, answer);
        info!("day {} part {} took {:.3} seconds", day, part, time.elapsed().as_secs_f32());
    }
    Ok(())
}

fn clear_screen() {
    print!("\x1b[2J\x1b[H");
}

/// Reads a line, or `None` at end of input.
fn read_line(stdin: &mut impl BufRead) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    Ok((stdin.read_line(&mut line)? > 0).then_some(line))
}

fn menu(inputs: &Path) -> anyhow::Result<()> {
    let mut stdin = std::io::stdin().lock();
    let exit = DAYS.len() + 1;
    loop {
        clear_screen();
        println!("{}\n", BANNER);
        for day in 1 ..= DAYS.len() {
            println!("{} Day {}", day, day);
        }
        println!("{} Exit", exit);
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = read_line(&mut stdin)? else {break};
        let outcome = line.trim().parse::<usize>()
            .context("expected a menu number")
            .and_then(|day| {
                if day == exit {return Ok(false)};
                clear_screen();
                println!("{}\nDay {}\n", BANNER, day);
                run_day(inputs, day, &Part::BOTH, None).map(|_| true)
            });
        match outcome {
            Ok(false) => break,
            Ok(true) => (),
            Err(err) => println!("\n❌ {:#}", err),
        }
        print!("Press Enter to continue...");
        std::io::stdout().flush()?;
        if read_line(&mut stdin)?.is_none() {break};
    }
    println!("Goodbye!");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    match args.day {
        Some(day) => {
            let parts = match args.part {
                Some(part) => vec![part],
                None => Part::BOTH.to_vec(),
            };
            run_day(&args.inputs, day, &parts, args.test)
        },
        None => menu(&args.inputs),
    }
}
