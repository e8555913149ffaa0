// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{error::Error, util::{answers, Answers, Solver}};


pub(crate) const SOLVERS: &[Solver] = &[solve];


struct Rucksack<'s>(&'s str);

impl Rucksack<'_> {
	fn compartments(&self) -> [&str; 2] {
		let half_len = self.0.len() / 2;
		[&self.0[..half_len], &self.0[half_len..]]
	}

	/// The first item of the second compartment that is also in the first.
	fn misplaced_item(&self) -> Option<u8> {
		let [c0, c1] = self.compartments();
		c1.bytes().find(|b| c0.as_bytes().contains(b))
	}
}

fn priority(item: u8) -> u64 {
	match item {
		b'a'..=b'z' => (1 + item - b'a') as u64,
		b'A'..=b'Z' => (27 + item - b'A') as u64,
		_ => 0,
	}
}

fn prioritize(common_item: Option<u8>, line: usize) -> u64 {
	match common_item {
		Some(item) => {
			let priority = priority(item);
			tracing::trace!(line, item = %(item as char), priority);
			priority
		}
		None => {
			tracing::warn!(line, "no common item");
			0
		}
	}
}

/// The item present in all of `group`. When several are, the lowest byte
/// wins, so uppercase items come before lowercase ones.
fn badge(group: &[Rucksack<'_>]) -> Option<u8> {
	use std::collections::HashSet;
	let mut sets = group.iter().map(|r| r.0.bytes().collect::<HashSet<u8>>());
	let first = sets.next()?;
	sets.fold(first, |common, set| common.intersection(&set).copied().collect())
		.into_iter()
		.min()
}


fn input_rucksacks<'l>(lines: &[&'l str]) -> Result<Vec<Rucksack<'l>>, Error> {
	parsing::rucksacks_from_lines(lines).collect::<Result<_, _>>().map_err(Error::input)
}


fn part1_impl(input_rucksacks: &[Rucksack<'_>]) -> u64 {
	input_rucksacks.iter()
		.enumerate()
		.map(|(l, r)| prioritize(r.misplaced_item(), l + 1))
		.sum()
}

fn part2_impl(input_rucksacks: &[Rucksack<'_>]) -> Result<u64, Error> {
	if input_rucksacks.len() % 3 != 0 {
		return Err(Error::input(parsing::RucksacksError::IncompleteGroup {
			line: input_rucksacks.len() - input_rucksacks.len() % 3 + 1 }))
	}
	Ok(input_rucksacks.chunks(3)
		.enumerate()
		.map(|(g, group)| prioritize(badge(group), g * 3 + 1))
		.sum())
}

fn solve(lines: &[&str]) -> Result<Answers, Error> {
	let rucksacks = input_rucksacks(lines)?;
	Ok(answers(part1_impl(&rucksacks), part2_impl(&rucksacks)?))
}


mod parsing {
	use super::Rucksack;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RucksackError {
		OddLen(usize),
		InvalidItem(char),
	}

	impl<'s> TryFrom<&'s str> for Rucksack<'s> {
		type Error = RucksackError;
		fn try_from(s: &'s str) -> Result<Self, Self::Error> {
			use RucksackError::*;
			if s.len() % 2 != 0 { return Err(OddLen(s.len())); }
			if let Some(c) = s.chars().find(|c| !c.is_ascii_alphabetic()) {
				return Err(InvalidItem(c))
			}
			Ok(Rucksack(s))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RucksacksError {
		Rucksack { line: usize, source: RucksackError },
		IncompleteGroup { line: usize },
	}

	pub(super) fn rucksacks_from_lines<'l, 'a>(lines: &'a [&'l str])
	-> impl Iterator<Item = Result<Rucksack<'l>, RucksacksError>> + 'a {
		lines.iter()
			.enumerate()
			.map(|(l, &line)| line.try_into()
				.map_err(|e| RucksacksError::Rucksack { line: l + 1, source: e }))
	}
}


#[cfg(test)]
mod tests {
	use test_case::test_case;
	use super::*;

	#[test_case(b'a' => 1 ; "lowest lowercase")]
	#[test_case(b'p' => 16 ; "lowercase p")]
	#[test_case(b'z' => 26 ; "highest lowercase")]
	#[test_case(b'A' => 27 ; "lowest uppercase")]
	#[test_case(b'J' => 36 ; "uppercase j")]
	#[test_case(b'Z' => 52 ; "highest uppercase")]
	fn priorities(item: u8) -> u64 {
		priority(item)
	}

	#[test_case("vJrwpWtwJgWrhcsFMMfFFhFp" => Some(b'p') ; "example first rucksack")]
	#[test_case("jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL" => Some(b'L') ; "example second rucksack")]
	#[test_case("vJrwpWtwJgWr" => Some(b'w') ; "first of several duplicates")]
	#[test_case("abcd" => None ; "no duplicate")]
	fn misplaced(line: &str) -> Option<u8> {
		Rucksack(line).misplaced_item()
	}

	#[test]
	fn badge_of_three() {
		assert_eq!(badge(&[Rucksack("abc"), Rucksack("bcd"), Rucksack("cde")]), Some(b'c'));
		assert_eq!(part2_impl(&[Rucksack("abc"), Rucksack("bcd"), Rucksack("cde")]).unwrap(), 3);
		assert_eq!(badge(&[Rucksack("ab"), Rucksack("cd"), Rucksack("ef")]), None);
	}

	#[test]
	fn several_common_badges() {
		let group = [Rucksack("zaBx"), Rucksack("yBza"), Rucksack("aBzw")];
		assert_eq!(badge(&group), Some(b'B'));
		assert_eq!(badge(&group[..2]), Some(b'B'));
		assert_eq!(badge(&[Rucksack("zyxa"), Rucksack("azyx"), Rucksack("xayz")]), Some(b'a'));
	}

	#[test]
	fn malformed() {
		assert!(matches!(solve(&["abc"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["ab1d"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["abcd", "abcd"]), Err(Error::Input(_))));
	}

	#[test]
	fn example() {
		const INPUT: &str = indoc::indoc! { "
			vJrwpWtwJgWrhcsFMMfFFhFp
			jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
			PmmdzqPrVvPwwTWBwg
			wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
			ttgJtRGJQctTZtZT
			CrZsJsPPZsGzwwsLwLmpwMDw
		" };
		let lines = crate::input::lines(INPUT);
		assert_eq!(solve(&lines).unwrap(), answers(157, 70));
	}
}
