// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{error::Error, util::{answers, Answers, Solver}};


pub(crate) const SOLVERS: &[Solver] = &[solve];


const DECRYPTION_KEY: i64 = 811_589_153;
const PART2_ROUNDS: usize = 10;
const GROVE_OFFSETS: [usize; 3] = [1000, 2000, 3000];


/// Moves every number, in original order, as many places forward (or back,
/// when negative) as its value, wrapping around. A number moving past the
/// others does not count itself, hence the `len - 1`.
fn mix(numbers: &[i64], rounds: usize) -> Vec<i64> {
	let len = numbers.len();
	let mut order = (0..len).collect::<Vec<_>>();
	if len > 1 {
		for _ in 0..rounds {
			for (original, &value) in numbers.iter().enumerate() {
				let Some(from) = order.iter().position(|&i| i == original) else { continue };
				order.remove(from);
				let to = (from as i64 + value).rem_euclid(len as i64 - 1) as usize;
				order.insert(to, original);
			}
		}
	}
	order.into_iter().map(|i| numbers[i]).collect()
}

/// Sum of the numbers 1000, 2000 and 3000 places after the zero.
fn grove_coordinates(mixed: &[i64]) -> Option<i64> {
	let zero = mixed.iter().position(|&n| n == 0)?;
	Some(GROVE_OFFSETS.iter().map(|offset| mixed[(zero + offset) % mixed.len()]).sum())
}


fn input_numbers(lines: &[&str]) -> Result<Vec<i64>, Error> {
	parsing::numbers_from_lines(lines).map_err(Error::input)
}


fn part1_impl(input_numbers: &[i64]) -> Option<i64> {
	grove_coordinates(&mix(input_numbers, 1))
}

fn part2_impl(input_numbers: &[i64]) -> Option<i64> {
	let decrypted = input_numbers.iter().map(|n| n * DECRYPTION_KEY).collect::<Vec<_>>();
	grove_coordinates(&mix(&decrypted, PART2_ROUNDS))
}

fn solve(lines: &[&str]) -> Result<Answers, Error> {
	let numbers = input_numbers(lines)?;
	let no_zero = || Error::NoSolution("no zero among the numbers");
	Ok(answers(part1_impl(&numbers).ok_or_else(no_zero)?, part2_impl(&numbers).ok_or_else(no_zero)?))
}


mod parsing {
	use std::num::ParseIntError;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum NumbersError {
		Number { line: usize, source: ParseIntError },
		Empty,
	}

	pub(super) fn numbers_from_lines(lines: &[&str]) -> Result<Vec<i64>, NumbersError> {
		if lines.is_empty() { return Err(NumbersError::Empty) }
		lines.iter().enumerate()
			.map(|(l, line)| line.parse().map_err(|e| NumbersError::Number { line: l + 1, source: e }))
			.collect()
	}
}
