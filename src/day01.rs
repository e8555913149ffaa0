// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{error::Error, util::{answers, Answers, Solver}};


pub(crate) const SOLVERS: &[Solver] = &[solve];


/// The three highest elf totals, highest first. Totals are summed while
/// scanning; a blank line (or the end) closes the running group.
fn podium(input_calories: impl IntoIterator<Item = Option<u64>>) -> [u64; 3] {
	let mut podium = [0; 3];
	let mut place = |total: u64| {
		if let Some(rank) = podium.iter().position(|&placed| total > placed) {
			podium[rank..].rotate_right(1);
			podium[rank] = total;
		}
	};

	let mut running = None;
	for calories in input_calories {
		match calories {
			Some(calories) => *running.get_or_insert(0) += calories,
			None => if let Some(total) = running.take() { place(total) },
		}
	}
	if let Some(total) = running { place(total) }

	podium
}


fn input_calories(lines: &[&str]) -> Result<Vec<Option<u64>>, Error> {
	parsing::calories_from_lines(lines).collect::<Result<_, _>>().map_err(Error::input)
}


fn part1_impl(podium: &[u64; 3]) -> u64 {
	podium[0]
}

fn part2_impl(podium: &[u64; 3]) -> u64 {
	podium.iter().sum()
}

fn solve(lines: &[&str]) -> Result<Answers, Error> {
	let podium = podium(input_calories(lines)?);
	tracing::debug!(?podium);
	Ok(answers(part1_impl(&podium), part2_impl(&podium)))
}


mod parsing {
	use std::num::ParseIntError;
	use either::Either;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum CaloriesError {
		Empty,
		Invalid { line: usize, source: ParseIntError },
	}

	/// Blank lines separate elves and come out as `None`.
	pub(super) fn calories_from_lines<'l>(lines: &'l [&str])
	-> impl Iterator<Item = Result<Option<u64>, CaloriesError>> + 'l {
		if lines.is_empty() { return Either::Left(std::iter::once(Err(CaloriesError::Empty))) }

		Either::Right(lines.iter()
			.enumerate()
			.map(|(l, line)| (!line.is_empty())
				.then(|| line.trim().parse()
					.map_err(|e| CaloriesError::Invalid { line: l + 1, source: e }))
				.transpose()))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		1000
		2000
		3000

		4000

		5000
		6000

		7000
		8000
		9000

		10000
	" };
	let lines = crate::input::lines(INPUT);
	let podium = podium(input_calories(&lines).unwrap());
	assert_eq!(podium, [24_000, 11_000, 10_000]);
	assert_eq!(part1_impl(&podium), 24_000);
	assert_eq!(part2_impl(&podium), 45_000);
	assert_eq!(solve(&lines).unwrap(), answers(24_000, 45_000));
	assert_eq!(solve(&lines).unwrap(), solve(&lines).unwrap());
}

#[test]
fn last_elf_counts_without_trailing_blank() {
	assert_eq!(solve(&["1", "", "2", "3"]).unwrap(), answers(5, 6));
	assert_eq!(solve(&["1", "", "2", "3", ""]).unwrap(), answers(5, 6));
}

#[test]
fn leading_and_repeated_blanks() {
	assert_eq!(solve(&["", "1000", "2000", "", "500"]).unwrap(), answers(3000, 3500));
	assert_eq!(solve(&["", "", "7", "", "", "", "8"]).unwrap(), answers(8, 15));
}

#[test]
fn fewer_than_three_elves() {
	assert_eq!(podium([Some(4), None, Some(9)]), [9, 4, 0]);
	assert_eq!(solve(&["42"]).unwrap(), answers(42, 42));
}

#[test]
fn invalid_calories() {
	assert!(matches!(solve(&["1000", "lots"]), Err(Error::Input(_))));
	assert!(matches!(solve(&[]), Err(Error::Input(_))));
}
