// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod error;
mod input;
mod util;
util::mod_days![01, 02, 03, 04, 05, 06, 07, 08, 09, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22];

use std::path::PathBuf;


/// Solves one day's puzzle and prints both answers.
#[derive(clap::Parser)]
#[command(version, about)]
struct Args {
	/// Puzzle day
	#[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
	day: u8,

	/// Path to the puzzle input
	input: PathBuf,

	/// Alternative solver for the day (0 is the default one)
	#[arg(short, long, default_value_t = 0)]
	variant: usize,
}

fn run(args: &Args) -> Result<util::Answers, error::Error> {
	let solver = solvers(args.day)
		.and_then(|solvers| solvers.get(args.variant))
		.ok_or(error::Error::Unsolved { day: args.day, variant: args.variant })?;
	let contents = input::read(&args.input)?;
	let lines = input::lines(&contents);
	tracing::debug!(day = args.day, variant = args.variant, lines = lines.len(), "solving");
	solver(&lines)
}

fn main() {
	use {clap::Parser as _, tracing_subscriber::{prelude::*, EnvFilter}};

	tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	let args = Args::parse();
	match run(&args) {
		Ok((part1, part2)) if part1.is_multiline() || part2.is_multiline() => println!("{part1}\n{part2}"),
		Ok((part1, part2)) => println!("{part1} {part2}"),
		Err(err) => {
			tracing::error!("{err}");
			std::process::exit(1)
		}
	}
}


#[test]
fn registry() {
	for day in 1..=22 {
		assert!(solvers(day).map_or(false, |s| !s.is_empty()), "day {day}");
	}
	assert_eq!(solvers(12).map(<[_]>::len), Some(2));
	assert_eq!(solvers(4).map(<[_]>::len), Some(1));
	assert!(solvers(23).is_none());
	assert!(solvers(25).is_none());
}

#[test]
fn unsolved_day() {
	let args = Args { day: 24, input: PathBuf::from("day24.txt"), variant: 0 };
	assert!(matches!(run(&args), Err(error::Error::Unsolved { day: 24, variant: 0 })));
	let args = Args { day: 4, input: PathBuf::from("day04.txt"), variant: 1 };
	assert!(matches!(run(&args), Err(error::Error::Unsolved { day: 4, variant: 1 })));
}

#[test]
fn cli_rejects_out_of_range_day() {
	use clap::Parser as _;
	assert!(Args::try_parse_from(["advent22", "26", "input.txt"]).is_err());
	assert!(Args::try_parse_from(["advent22", "0", "input.txt"]).is_err());
	assert!(Args::try_parse_from(["advent22", "8"]).is_err());
	let args = Args::try_parse_from(["advent22", "12", "input.txt", "--variant", "1"]).unwrap();
	assert_eq!((args.day, args.variant), (12, 1));
}
