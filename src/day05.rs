// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{error::Error, util::{answers, Answers, Solver}};


pub(crate) const SOLVERS: &[Solver] = &[solve];


#[derive(Debug, Clone, PartialEq, Eq)]
struct Stacks(Vec<Vec<u8>>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step { count: usize, from: usize, to: usize, line: usize }

#[derive(Clone, Copy)]
enum Crane {
	/// Moves crates one by one, reversing their order.
	CrateMover9000,
	/// Moves all crates of a step at once, keeping their order.
	CrateMover9001,
}

#[allow(dead_code)]
#[derive(Debug)]
enum CraneError {
	TooFewCrates { line: usize, stack: usize, has: usize, count: usize },
}

impl Stacks {
	fn apply(&mut self, step: Step, crane: Crane) -> Result<(), CraneError> {
		let from = &mut self.0[step.from];
		let Some(at) = from.len().checked_sub(step.count) else {
			return Err(CraneError::TooFewCrates {
				line: step.line, stack: step.from + 1, has: from.len(), count: step.count })
		};
		let lifted = from.split_off(at);
		let to = &mut self.0[step.to];
		match crane {
			Crane::CrateMover9000 => to.extend(lifted.into_iter().rev()),
			Crane::CrateMover9001 => to.extend(lifted),
		}
		Ok(())
	}

	/// Top crate of every non-empty stack, left to right.
	fn tops(&self) -> String {
		self.0.iter().filter_map(|stack| stack.last()).map(|&b| b as char).collect()
	}
}


fn input_stacks_and_steps(lines: &[&str]) -> Result<(Stacks, Vec<Step>), Error> {
	parsing::stacks_and_steps_from_lines(lines).map_err(Error::input)
}


fn operate(mut stacks: Stacks, steps: &[Step], crane: Crane) -> Result<String, Error> {
	for &step in steps {
		stacks.apply(step, crane).map_err(Error::input)?;
		tracing::trace!(?step, tops = %stacks.tops());
	}
	Ok(stacks.tops())
}

fn part1_impl(input_stacks: &Stacks, input_steps: &[Step]) -> Result<String, Error> {
	operate(input_stacks.clone(), input_steps, Crane::CrateMover9000)
}

fn part2_impl(input_stacks: &Stacks, input_steps: &[Step]) -> Result<String, Error> {
	operate(input_stacks.clone(), input_steps, Crane::CrateMover9001)
}

fn solve(lines: &[&str]) -> Result<Answers, Error> {
	let (stacks, steps) = input_stacks_and_steps(lines)?;
	Ok(answers(part1_impl(&stacks, &steps)?, part2_impl(&stacks, &steps)?))
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Stacks, Step};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum StacksError {
		NoBlank,
		NoLabels,
		Label { column: usize, expected: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
		Floating { line: usize, column: usize },
	}

	/// `rows` are the diagram lines above the label line, top first. Trailing
	/// spaces may be missing.
	fn stacks_from_diagram(rows: &[&str], labels: &str) -> Result<Stacks, StacksError> {
		use StacksError as E;

		let mut count = 0;
		for (i, label) in labels.split_whitespace().enumerate() {
			if label.parse::<usize>().ok() != Some(i + 1) {
				return Err(E::Label { column: 4 * i + 2, expected: i + 1 })
			}
			count += 1;
		}
		if count == 0 { return Err(E::NoLabels) }

		let mut stacks = vec![Vec::new(); count];
		for (height, (l, row)) in rows.iter().enumerate().rev().enumerate() {
			for (s, stack) in stacks.iter_mut().enumerate() {
				let column = 4 * s + 1;
				match row.as_bytes().get(column).copied().unwrap_or(b' ') {
					b' ' => (),
					b @ b'A'..=b'Z' if stack.len() == height => stack.push(b),
					b'A'..=b'Z' => return Err(E::Floating { line: l + 1, column: column + 1 }),
					found => return Err(E::InvalidByte { line: l + 1, column: column + 1, found }),
				}
			}
		}

		Ok(Stacks(stacks))
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum StepError {
		Format,
		Number(ParseIntError),
		Stack(usize),
		SameStack,
	}

	fn step_from_str(s: &str, stacks: usize, line: usize) -> Result<Step, StepError> {
		let mut words = s.split(' ');
		let mut expect = |keyword: &str| match (words.next(), words.next()) {
			(Some(word), Some(number)) if word == keyword =>
				number.parse::<usize>().map_err(StepError::Number),
			_ => Err(StepError::Format),
		};
		let count = expect("move")?;
		let from = expect("from")?;
		let to = expect("to")?;
		if words.next().is_some() { return Err(StepError::Format) }

		for stack in [from, to] {
			if !(1..=stacks).contains(&stack) { return Err(StepError::Stack(stack)) }
		}
		if from == to { return Err(StepError::SameStack) }
		Ok(Step { count, from: from - 1, to: to - 1, line })
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum InputError {
		Stacks(StacksError),
		Step { line: usize, source: StepError },
	}

	pub(super) fn stacks_and_steps_from_lines(lines: &[&str]) -> Result<(Stacks, Vec<Step>), InputError> {
		let blank = lines.iter().position(|line| line.is_empty())
			.ok_or(InputError::Stacks(StacksError::NoBlank))?;
		let (rows, labels) = match &lines[..blank] {
			[rows @ .., labels] => (rows, labels),
			[] => return Err(InputError::Stacks(StacksError::NoLabels)),
		};
		let stacks = stacks_from_diagram(rows, labels).map_err(InputError::Stacks)?;

		let steps = lines[blank + 1..].iter()
			.enumerate()
			.map(|(l, line)| {
				let line_number = blank + l + 2;
				step_from_str(line, stacks.0.len(), line_number)
					.map_err(|e| InputError::Step { line: line_number, source: e })
			})
			.collect::<Result<_, _>>()?;

		Ok((stacks, steps))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		    [D]
		[N] [C]
		[Z] [M] [P]
		 1   2   3

		move 1 from 2 to 1
		move 3 from 1 to 3
		move 2 from 2 to 1
		move 1 from 1 to 2
	" };

	#[test]
	fn example() {
		let lines = crate::input::lines(INPUT);
		let (stacks, steps) = input_stacks_and_steps(&lines).unwrap();
		assert_eq!(stacks, Stacks(vec![b"ZN".to_vec(), b"MCD".to_vec(), b"P".to_vec()]));
		assert_eq!(steps[1], Step { count: 3, from: 0, to: 2, line: 7 });
		assert_eq!(part1_impl(&stacks, &steps).unwrap(), "CMZ");
		assert_eq!(part2_impl(&stacks, &steps).unwrap(), "MCD");
		assert_eq!(solve(&lines).unwrap(), answers("CMZ", "MCD"));
	}

	#[test]
	fn missing_trailing_spaces() {
		let lines = ["    [D]", "[N] [C]", "[Z] [M] [P]", " 1   2   3", "", "move 1 from 2 to 1"];
		assert_eq!(solve(&lines).unwrap(), answers("DCP", "DCP"));
	}

	#[test]
	fn emptied_stack_is_skipped() {
		let lines = ["[A]    ", "[B] [C]", " 1   2 ", "", "move 1 from 2 to 1"];
		assert_eq!(solve(&lines).unwrap(), answers("C", "C"));
	}

	#[test]
	fn crane_order() {
		let mut stacks = Stacks(vec![b"ABC".to_vec(), vec![]]);
		let step = Step { count: 2, from: 0, to: 1, line: 1 };
		let mut batch = stacks.clone();
		batch.apply(step, Crane::CrateMover9001).unwrap();
		assert_eq!(batch, Stacks(vec![b"A".to_vec(), b"BC".to_vec()]));
		stacks.apply(step, Crane::CrateMover9000).unwrap();
		assert_eq!(stacks, Stacks(vec![b"A".to_vec(), b"CB".to_vec()]));
	}

	#[test]
	fn malformed() {
		let with_steps = |steps: &[&'static str]| {
			let mut lines = vec!["[A] [B]", " 1   2 ", ""];
			lines.extend(steps);
			solve(&lines)
		};
		assert!(with_steps(&["move 1 from 1 to 2"]).is_ok());
		assert!(matches!(with_steps(&["move 2 from 1 to 2"]), Err(Error::Input(_))));
		assert!(matches!(with_steps(&["move 1 from 3 to 2"]), Err(Error::Input(_))));
		assert!(matches!(with_steps(&["move 1 from 1 to 1"]), Err(Error::Input(_))));
		assert!(matches!(with_steps(&["move one from 1 to 2"]), Err(Error::Input(_))));
		assert!(matches!(with_steps(&["shift 1 from 1 to 2"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["[A]", " 1 ", "move 1 from 1 to 1"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["[a]", " 1 ", ""]), Err(Error::Input(_))));
		assert!(matches!(solve(&["[A]    ", "    [B]", " 1   2 ", ""]), Err(Error::Input(_))));
		assert!(matches!(solve(&["[A] [B]", " 1   3 ", ""]), Err(Error::Input(_))));
	}
}
