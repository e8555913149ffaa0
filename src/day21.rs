// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;
use crate::{error::Error, util::{answers, Answers, Solver}};


/// Undoes one operation at a time down to the human first; solving one linear
/// equation in the human's number as the alternative.
pub(crate) const SOLVERS: &[Solver] = &[solve, solve_linear];


const ROOT: &str = "root";
const HUMAN: &str = "humn";


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op { Add, Sub, Mul, Div }

impl Op {
	fn apply(self, left: i64, right: i64) -> Option<i64> {
		match self {
			Op::Add => left.checked_add(right),
			Op::Sub => left.checked_sub(right),
			Op::Mul => left.checked_mul(right),
			Op::Div => left.checked_div(right),
		}
	}

	/// The `left` for which `left <op> right` is `result`.
	fn unknown_left(self, result: i64, right: i64) -> Option<i64> {
		match self {
			Op::Add => result.checked_sub(right),
			Op::Sub => result.checked_add(right),
			Op::Mul => exact_div(result, right),
			Op::Div => result.checked_mul(right),
		}
	}

	/// The `right` for which `left <op> right` is `result`.
	fn unknown_right(self, left: i64, result: i64) -> Option<i64> {
		match self {
			Op::Add | Op::Mul => self.unknown_left(result, left),
			Op::Sub => left.checked_sub(result),
			Op::Div => exact_div(left, result),
		}
	}
}

fn exact_div(dividend: i64, divisor: i64) -> Option<i64> {
	(dividend.checked_rem(divisor)? == 0).then(|| dividend / divisor)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Job<'s> {
	Yell(i64),
	Math(&'s str, Op, &'s str),
}

/// Every name a job mentions is in the map, and no monkey waits on itself.
struct Troop<'s>(HashMap<&'s str, Job<'s>>);

impl<'s> Troop<'s> {
	fn yell(&self, name: &str) -> Option<i64> {
		match *self.0.get(name)? {
			Job::Yell(number) => Some(number),
			Job::Math(left, op, right) => op.apply(self.yell(left)?, self.yell(right)?),
		}
	}

	fn waits_on_human(&self, name: &str) -> bool {
		name == HUMAN || matches!(self.0.get(name),
			Some(&Job::Math(left, _, right)) if self.waits_on_human(left) || self.waits_on_human(right))
	}

	/// What the human must yell for `name` to yell `target`. `None` unless
	/// exactly one side of every operation on the way waits on the human.
	fn balance(&self, name: &str, target: i64) -> Option<i64> {
		if name == HUMAN { return Some(target) }
		let Job::Math(left, op, right) = *self.0.get(name)? else { return None };
		match (self.waits_on_human(left), self.waits_on_human(right)) {
			(true, false) => self.balance(left, op.unknown_left(target, self.yell(right)?)?),
			(false, true) => self.balance(right, op.unknown_right(self.yell(left)?, target)?),
			_ => None,
		}
	}

	fn linear(&self, name: &str) -> Option<Linear> {
		if name == HUMAN { return Some(Linear::HUMAN) }
		match *self.0.get(name)? {
			Job::Yell(number) => Some(Linear::constant(number as i128)),
			Job::Math(left, op, right) => self.linear(left)?.apply(op, self.linear(right)?),
		}
	}

	fn root_sides(&self) -> Option<(&'s str, &'s str)> {
		match self.0.get(ROOT)? {
			&Job::Math(left, _, right) => Some((left, right)),
			Job::Yell(_) => None,
		}
	}
}

/// `(a·h + b) / d` in the number `h` the human yells, kept in lowest terms
/// with a positive `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Linear { a: i128, b: i128, d: i128 }

fn gcd(a: i128, b: i128) -> i128 {
	let (mut a, mut b) = (a.abs(), b.abs());
	while b != 0 { (a, b) = (b, a % b) }
	a
}

impl Linear {
	const HUMAN: Linear = Linear { a: 1, b: 0, d: 1 };

	fn constant(b: i128) -> Self {
		Linear { a: 0, b, d: 1 }
	}

	fn reduced(a: i128, b: i128, d: i128) -> Option<Self> {
		if d == 0 { return None }
		let g = gcd(gcd(a, b), d) * d.signum();
		Some(Linear { a: a / g, b: b / g, d: d / g })
	}

	/// `None` when multiplying two terms in `h` or dividing by one, neither of
	/// which stays linear.
	fn apply(self, op: Op, rhs: Linear) -> Option<Self> {
		let Linear { a: a1, b: b1, d: d1 } = self;
		let Linear { a: a2, b: b2, d: d2 } = rhs;
		match op {
			Op::Add => Linear::reduced(a1 * d2 + a2 * d1, b1 * d2 + b2 * d1, d1 * d2),
			Op::Sub => Linear::reduced(a1 * d2 - a2 * d1, b1 * d2 - b2 * d1, d1 * d2),
			Op::Mul if a1 == 0 => Linear::reduced(b1 * a2, b1 * b2, d1 * d2),
			Op::Mul if a2 == 0 => Linear::reduced(a1 * b2, b1 * b2, d1 * d2),
			Op::Div if a2 == 0 => Linear::reduced(a1 * d2, b1 * d2, d1 * b2),
			_ => None,
		}
	}

	/// The whole `h` for which both sides are equal.
	fn solve_equal(self, other: Linear) -> Option<i128> {
		let coefficient = self.a * other.d - other.a * self.d;
		let constant = other.b * self.d - self.b * other.d;
		(coefficient != 0 && constant % coefficient == 0).then(|| constant / coefficient)
	}
}


fn input_troop<'s>(lines: &[&'s str]) -> Result<Troop<'s>, Error> {
	parsing::troop_from_lines(lines).map_err(Error::input)
}


fn part1_impl(input_troop: &Troop) -> Result<i64, Error> {
	input_troop.yell(ROOT).ok_or(Error::NoSolution("root cannot yell a number"))
}

/// Root compares its two sides instead; the side waiting on the human has to
/// match the other one.
fn part2_impl(input_troop: &Troop) -> Result<i64, Error> {
	let unsolvable = Error::NoSolution("no number balances root");
	let (left, right) = input_troop.root_sides().ok_or(Error::NoSolution("root has no operation"))?;
	let (unknown, known) = match (input_troop.waits_on_human(left), input_troop.waits_on_human(right)) {
		(true, false) => (left, right),
		(false, true) => (right, left),
		_ => return Err(unsolvable),
	};
	let target = input_troop.yell(known).ok_or(Error::NoSolution("root cannot yell a number"))?;
	input_troop.balance(unknown, target).ok_or(unsolvable)
}

fn part2_linear(input_troop: &Troop) -> Result<i64, Error> {
	let unsolvable = || Error::NoSolution("no number balances root");
	let (left, right) = input_troop.root_sides().ok_or(Error::NoSolution("root has no operation"))?;
	let (left, right) = input_troop.linear(left).zip(input_troop.linear(right)).ok_or_else(unsolvable)?;
	tracing::debug!(?left, ?right);
	let human = left.solve_equal(right).ok_or_else(unsolvable)?;
	i64::try_from(human).map_err(|_| unsolvable())
}

fn solve(lines: &[&str]) -> Result<Answers, Error> {
	let troop = input_troop(lines)?;
	Ok(answers(part1_impl(&troop)?, part2_impl(&troop)?))
}

fn solve_linear(lines: &[&str]) -> Result<Answers, Error> {
	let troop = input_troop(lines)?;
	Ok(answers(part1_impl(&troop)?, part2_linear(&troop)?))
}


mod parsing {
	use std::{collections::HashMap, num::ParseIntError};
	use super::{Job, Op, Troop};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum TroopError<'s> {
		Format { line: usize },
		Number { line: usize, source: ParseIntError },
		Op { line: usize, found: &'s str },
		Duplicate { line: usize, name: &'s str },
		Unknown { name: &'s str },
		Cycle { name: &'s str },
	}

	fn job_from_str<'s>(s: &'s str, l: usize) -> Result<Job<'s>, TroopError<'s>> {
		let words = s.split(' ').collect::<Vec<_>>();
		match words[..] {
			[number] => number.parse().map(Job::Yell)
				.map_err(|e| TroopError::Number { line: l + 1, source: e }),
			[left, op, right] => {
				let op = match op {
					"+" => Op::Add,
					"-" => Op::Sub,
					"*" => Op::Mul,
					"/" => Op::Div,
					found => return Err(TroopError::Op { line: l + 1, found }),
				};
				Ok(Job::Math(left, op, right))
			}
			_ => Err(TroopError::Format { line: l + 1 }),
		}
	}

	/// Depth-first over the jobs, failing on a monkey that is reached again
	/// while still waiting on its own operands.
	fn check_acyclic<'s>(jobs: &HashMap<&'s str, Job<'s>>) -> Result<(), TroopError<'s>> {
		#[derive(Clone, Copy, PartialEq, Eq)]
		enum Mark { Waiting, Done }

		let mut marks = HashMap::with_capacity(jobs.len());
		for &start in jobs.keys() {
			let mut stack = vec![(start, false)];
			while let Some((name, operands_done)) = stack.pop() {
				if operands_done {
					marks.insert(name, Mark::Done);
					continue
				}
				match marks.get(name) {
					Some(Mark::Done) => continue,
					Some(Mark::Waiting) => return Err(TroopError::Cycle { name }),
					None => {}
				}
				marks.insert(name, Mark::Waiting);
				stack.push((name, true));
				if let Some(&Job::Math(left, _, right)) = jobs.get(name) {
					for operand in [left, right] {
						match marks.get(operand) {
							Some(Mark::Waiting) => return Err(TroopError::Cycle { name: operand }),
							Some(Mark::Done) => {}
							None => stack.push((operand, false)),
						}
					}
				}
			}
		}
		Ok(())
	}

	pub(super) fn troop_from_lines<'s>(lines: &[&'s str]) -> Result<Troop<'s>, TroopError<'s>> {
		let mut jobs = HashMap::with_capacity(lines.len());
		for (l, &line) in lines.iter().enumerate() {
			let (name, job) = line.split_once(": ").ok_or(TroopError::Format { line: l + 1 })?;
			if jobs.insert(name, job_from_str(job, l)?).is_some() {
				return Err(TroopError::Duplicate { line: l + 1, name })
			}
		}

		for job in jobs.values() {
			if let &Job::Math(left, _, right) = job {
				if let Some(&name) = [left, right].iter().find(|name| !jobs.contains_key(*name)) {
					return Err(TroopError::Unknown { name })
				}
			}
		}
		check_acyclic(&jobs)?;

		Ok(Troop(jobs))
	}
}
