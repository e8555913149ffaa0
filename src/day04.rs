// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{error::Error, util::{answers, Answers, Solver}};


pub(crate) const SOLVERS: &[Solver] = &[solve];


/// Inclusive span of section IDs assigned to one elf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sections { first: u32, last: u32 }

impl Sections {
	fn covers(self, other: Sections) -> bool {
		self.first <= other.first && other.last <= self.last
	}

	fn overlaps(self, other: Sections) -> bool {
		self.first <= other.last && other.first <= self.last
	}
}

struct Pair(Sections, Sections);

impl Pair {
	fn one_covers_other(&self) -> bool {
		self.0.covers(self.1) || self.1.covers(self.0)
	}
}


fn input_pairs(lines: &[&str]) -> Result<Vec<Pair>, Error> {
	parsing::pairs_from_lines(lines).collect::<Result<_, _>>().map_err(Error::input)
}


fn part1_impl(input_pairs: &[Pair]) -> usize {
	input_pairs.iter().filter(|pair| pair.one_covers_other()).count()
}

fn part2_impl(input_pairs: &[Pair]) -> usize {
	input_pairs.iter().filter(|Pair(left, right)| left.overlaps(*right)).count()
}

fn solve(lines: &[&str]) -> Result<Answers, Error> {
	let pairs = input_pairs(lines)?;
	Ok(answers(part1_impl(&pairs), part2_impl(&pairs)))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Pair, Sections};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum SectionsError {
		NoHyphen,
		Id(ParseIntError),
		Backwards { first: u32, last: u32 },
	}

	impl FromStr for Sections {
		type Err = SectionsError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (first, last) = s.split_once('-').ok_or(SectionsError::NoHyphen)?;
			let [first, last] = [first, last].map(str::parse::<u32>);
			let (first, last) = (first.map_err(SectionsError::Id)?, last.map_err(SectionsError::Id)?);
			if last < first { return Err(SectionsError::Backwards { first, last }) }
			Ok(Sections { first, last })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum PairsError {
		NoComma { line: usize },
		Sections { line: usize, column: usize, source: SectionsError },
	}

	pub(super) fn pairs_from_lines<'l>(lines: &'l [&str])
	-> impl Iterator<Item = Result<Pair, PairsError>> + 'l {
		lines.iter().enumerate().map(|(l, line)| -> Result<Pair, PairsError> {
			let (left, right) = line.split_once(',').ok_or(PairsError::NoComma { line: l + 1 })?;
			let sections = |s: &str, column| s.parse::<Sections>()
				.map_err(|e| PairsError::Sections { line: l + 1, column, source: e });
			Ok(Pair(sections(left, 1)?, sections(right, left.len() + 2)?))
		})
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use test_case::test_case;

	#[test_case("2-4,6-8", false, false; "apart")]
	#[test_case("5-7,7-9", false, true; "touching")]
	#[test_case("2-8,3-7", true, true; "left covers right")]
	#[test_case("6-6,4-6", true, true; "right covers single")]
	#[test_case("3-3,3-3", true, true; "identical")]
	fn pair(line: &str, covers: bool, overlaps: bool) {
		let pairs = input_pairs(&[line]).unwrap();
		let Pair(left, right) = &pairs[0];
		assert_eq!(pairs[0].one_covers_other(), covers);
		assert_eq!(left.overlaps(*right), overlaps);
		assert_eq!(right.overlaps(*left), overlaps);
	}

	#[test]
	fn example() {
		const INPUT: &str = indoc::indoc! { "
			2-4,6-8
			2-3,4-5
			5-7,7-9
			2-8,3-7
			6-6,4-6
			2-6,4-8
		" };
		assert_eq!(solve(&crate::input::lines(INPUT)).unwrap(), answers(2, 4));
	}

	#[test]
	fn malformed() {
		assert!(matches!(solve(&["2-4;6-8"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["2-4,6"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["4-2,6-8"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["2-4,6-x"]), Err(Error::Input(_))));
	}
}
