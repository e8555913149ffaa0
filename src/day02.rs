// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{error::Error, util::{answers, Answers, Solver}};


pub(crate) const SOLVERS: &[Solver] = &[solve];


#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq, Eq)]
enum Shape { Rock, Paper, Scissors }

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq, Eq)]
enum Outcome { Lose, Draw, Win }

impl Shape {
	fn score(self) -> u64 {
		match self {
			Shape::Rock => 1,
			Shape::Paper => 2,
			Shape::Scissors => 3,
		}
	}

	/// The shape that this one beats.
	fn beats(self) -> Shape {
		match self {
			Shape::Rock => Shape::Scissors,
			Shape::Paper => Shape::Rock,
			Shape::Scissors => Shape::Paper,
		}
	}

	fn outcome_against(self, opponent: Shape) -> Outcome {
		if self == opponent { Outcome::Draw }
		else if self.beats() == opponent { Outcome::Win }
		else { Outcome::Lose }
	}
}

impl Outcome {
	fn score(self) -> u64 {
		match self {
			Outcome::Lose => 0,
			Outcome::Draw => 3,
			Outcome::Win => 6,
		}
	}

	/// The shape to play against `opponent` to end up with this outcome.
	fn shape_against(self, opponent: Shape) -> Shape {
		match self {
			Outcome::Draw => opponent,
			Outcome::Lose => opponent.beats(),
			Outcome::Win => opponent.beats().beats(),
		}
	}
}

/// The opponent's shape, and either the player's shape or the desired outcome.
struct Round<SecondColumn>(Shape, SecondColumn);

impl Round<Shape> {
	fn score(&self) -> u64 {
		let Round(opponent, player) = *self;
		player.score() + player.outcome_against(opponent).score()
	}
}

impl Round<Outcome> {
	fn score(&self) -> u64 {
		let Round(opponent, outcome) = *self;
		outcome.shape_against(opponent).score() + outcome.score()
	}
}


fn input_rounds<SecondColumn>(lines: &[&str]) -> Result<Vec<Round<SecondColumn>>, Error>
where SecondColumn: std::str::FromStr, <SecondColumn as std::str::FromStr>::Err: std::fmt::Debug {
	parsing::rounds_from_lines(lines).collect::<Result<_, _>>().map_err(Error::input)
}


fn part1_impl(input_rounds: &[Round<Shape>]) -> u64 {
	input_rounds.iter().map(Round::<Shape>::score).sum()
}

fn part2_impl(input_rounds: &[Round<Outcome>]) -> u64 {
	input_rounds.iter().map(Round::<Outcome>::score).sum()
}

fn solve(lines: &[&str]) -> Result<Answers, Error> {
	Ok(answers(part1_impl(&input_rounds(lines)?), part2_impl(&input_rounds(lines)?)))
}


mod parsing {
	use {std::str::FromStr, itertools::Itertools as _};
	use super::{Shape, Outcome, Round};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum ColumnError {
		Format { len: usize },
		Invalid { found: char },
	}

	fn single_char(s: &str) -> Result<char, ColumnError> {
		s.chars().exactly_one().map_err(|chars| {
			let (low, upp) = chars.size_hint();
			ColumnError::Format { len: upp.unwrap_or(low) }
		})
	}

	fn opponent_from_str(s: &str) -> Result<Shape, ColumnError> {
		match single_char(s)? {
			'A' => Ok(Shape::Rock),
			'B' => Ok(Shape::Paper),
			'C' => Ok(Shape::Scissors),
			found => Err(ColumnError::Invalid { found }),
		}
	}

	impl FromStr for Shape {
		type Err = ColumnError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			match single_char(s)? {
				'X' => Ok(Shape::Rock),
				'Y' => Ok(Shape::Paper),
				'Z' => Ok(Shape::Scissors),
				found => Err(ColumnError::Invalid { found }),
			}
		}
	}

	impl FromStr for Outcome {
		type Err = ColumnError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			match single_char(s)? {
				'X' => Ok(Outcome::Lose),
				'Y' => Ok(Outcome::Draw),
				'Z' => Ok(Outcome::Win),
				found => Err(ColumnError::Invalid { found }),
			}
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RoundError<SecondColumn> {
		Format,
		Opponent(ColumnError),
		SecondColumn(SecondColumn),
	}

	impl<SecondColumn: FromStr> FromStr for Round<SecondColumn> {
		type Err = RoundError<<SecondColumn as FromStr>::Err>;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (opponent, second_column) = s.split_once(' ')
				.ok_or(RoundError::Format)?;
			Ok(Round(
				opponent_from_str(opponent).map_err(RoundError::Opponent)?,
				second_column.parse().map_err(RoundError::SecondColumn)?,
			))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct RoundsError<SecondColumn> { line: usize, source: RoundError<SecondColumn> }

	pub(super) fn rounds_from_lines<'l, SecondColumn: FromStr + 'l>(lines: &'l [&str])
	-> impl Iterator<Item = Result<Round<SecondColumn>, RoundsError<<SecondColumn as FromStr>::Err>>> + 'l {
		lines.iter()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| RoundsError { line: l + 1, source: e }))
	}
}


#[cfg(test)]
mod tests {
	use test_case::test_case;
	use super::*;

	#[test_case("A Y" => 8 ; "paper beats rock")]
	#[test_case("B X" => 1 ; "rock loses to paper")]
	#[test_case("C Z" => 6 ; "scissors draw")]
	fn shape_round(line: &str) -> u64 {
		line.parse::<Round<Shape>>().unwrap().score()
	}

	#[test_case("A Y" => 4 ; "draw with rock")]
	#[test_case("B X" => 1 ; "lose to paper with rock")]
	#[test_case("C Z" => 7 ; "win against scissors with rock")]
	fn outcome_round(line: &str) -> u64 {
		line.parse::<Round<Outcome>>().unwrap().score()
	}

	#[test]
	fn shape_for_outcome_round_trips() {
		use {Shape::*, Outcome::*};
		for opponent in [Rock, Paper, Scissors] {
			for outcome in [Lose, Draw, Win] {
				assert_eq!(outcome.shape_against(opponent).outcome_against(opponent), outcome);
			}
		}
	}

	#[test]
	fn malformed() {
		assert!(matches!(solve(&["A Y", "AY"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["D Y"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["A YY"]), Err(Error::Input(_))));
	}

	#[test]
	fn example() {
		const INPUT: &str = indoc::indoc! { "
			A Y
			B X
			C Z
		" };
		let lines = crate::input::lines(INPUT);
		assert_eq!(solve(&lines).unwrap(), answers(15, 12));
	}
}
