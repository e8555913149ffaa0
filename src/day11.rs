// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{error::Error, util::{answers, Answers, Solver}};


pub(crate) const SOLVERS: &[Solver] = &[solve];


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operand { Old, Value(u64) }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
	Add(Operand, Operand),
	Mul(Operand, Operand),
}

impl Operation {
	fn apply(self, old: u64) -> u64 {
		let value = |operand| match operand { Operand::Old => old, Operand::Value(v) => v };
		match self {
			Operation::Add(lhs, rhs) => value(lhs) + value(rhs),
			Operation::Mul(lhs, rhs) => value(lhs) * value(rhs),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Monkey {
	items: Vec<u64>,
	operation: Operation,
	divisor: u64,
	if_true: usize,
	if_false: usize,
}

impl Monkey {
	fn target(&self, worry: u64) -> usize {
		if worry % self.divisor == 0 { self.if_true } else { self.if_false }
	}
}

/// How worry levels are kept in check after each inspection.
#[derive(Clone, Copy)]
enum Relief {
	Divide(u64),
	/// Remainder modulo a common multiple of all divisors, which leaves every
	/// divisibility test unchanged.
	Modulo(u64),
}

impl Relief {
	fn apply(self, worry: u64) -> u64 {
		match self { Relief::Divide(d) => worry / d, Relief::Modulo(m) => worry % m }
	}
}

/// Plays `rounds` rounds and multiplies the two highest inspection counts.
fn monkey_business(mut monkeys: Vec<Monkey>, rounds: usize, relief: Relief) -> u64 {
	let mut inspections = vec![0_u64; monkeys.len()];
	for _ in 0..rounds {
		for m in 0..monkeys.len() {
			let items = std::mem::take(&mut monkeys[m].items);
			inspections[m] += items.len() as u64;
			for worry in items {
				let worry = relief.apply(monkeys[m].operation.apply(worry));
				let target = monkeys[m].target(worry);
				monkeys[target].items.push(worry);
			}
		}
	}
	tracing::debug!(?inspections, rounds);

	inspections.sort_unstable_by(|a, b| b.cmp(a));
	inspections.iter().take(2).product()
}


fn input_monkeys(lines: &[&str]) -> Result<Vec<Monkey>, Error> {
	parsing::monkeys_from_lines(lines).map_err(Error::input)
}


fn part1_impl(input_monkeys: &[Monkey]) -> u64 {
	monkey_business(input_monkeys.to_vec(), 20, Relief::Divide(3))
}

fn part2_impl(input_monkeys: &[Monkey]) -> u64 {
	let modulus = input_monkeys.iter().map(|m| m.divisor).product();
	monkey_business(input_monkeys.to_vec(), 10_000, Relief::Modulo(modulus))
}

fn solve(lines: &[&str]) -> Result<Answers, Error> {
	let monkeys = input_monkeys(lines)?;
	Ok(answers(part1_impl(&monkeys), part2_impl(&monkeys)))
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Monkey, Operand, Operation};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum MonkeyError {
		Truncated { line: usize },
		Expected { line: usize, prefix: &'static str },
		Number { line: usize, source: ParseIntError },
		Index { line: usize },
		Operation { line: usize },
		ZeroDivisor { line: usize },
		Target { monkey: usize, target: usize },
		NoBlank { line: usize },
		TooFew,
	}

	/// What follows `prefix` on line `l` (0-based), ignoring indentation.
	fn field<'s>(lines: &[&'s str], l: usize, prefix: &'static str) -> Result<&'s str, MonkeyError> {
		let line = lines.get(l).ok_or(MonkeyError::Truncated { line: l + 1 })?;
		line.trim_start().strip_prefix(prefix).ok_or(MonkeyError::Expected { line: l + 1, prefix })
	}

	fn number(s: &str, l: usize) -> Result<usize, MonkeyError> {
		s.trim().parse().map_err(|e| MonkeyError::Number { line: l + 1, source: e })
	}

	pub(super) fn monkeys_from_lines(lines: &[&str]) -> Result<Vec<Monkey>, MonkeyError> {
		use MonkeyError as E;

		let mut monkeys = vec![];
		let mut l = 0;
		while l < lines.len() {
			if !monkeys.is_empty() {
				if !lines[l].is_empty() { return Err(E::NoBlank { line: l + 1 }) }
				l += 1;
			}

			let index = field(lines, l, "Monkey ")?;
			if number(index.strip_suffix(':').unwrap_or(index), l)? != monkeys.len() {
				return Err(E::Index { line: l + 1 })
			}

			let items = field(lines, l + 1, "Starting items:")?.split(',')
				.map(str::trim)
				.filter(|item| !item.is_empty())
				.map(|item| number(item, l + 1).map(|n| n as u64))
				.collect::<Result<_, _>>()?;

			let operation = operation_from_str(field(lines, l + 2, "Operation: new = ")?)
				.ok_or(E::Operation { line: l + 3 })?;

			let divisor = number(field(lines, l + 3, "Test: divisible by ")?, l + 3)? as u64;
			if divisor == 0 { return Err(E::ZeroDivisor { line: l + 4 }) }

			let if_true = number(field(lines, l + 4, "If true: throw to monkey ")?, l + 4)?;
			let if_false = number(field(lines, l + 5, "If false: throw to monkey ")?, l + 5)?;

			monkeys.push(Monkey { items, operation, divisor, if_true, if_false });
			l += 6;
		}

		if monkeys.len() < 2 { return Err(E::TooFew) }
		for (m, monkey) in monkeys.iter().enumerate() {
			for target in [monkey.if_true, monkey.if_false] {
				if target >= monkeys.len() || target == m { return Err(E::Target { monkey: m, target }) }
			}
		}

		Ok(monkeys)
	}

	fn operation_from_str(s: &str) -> Option<Operation> {
		let operand = |s: &str| match s {
			"old" => Some(Operand::Old),
			v => v.parse().ok().map(Operand::Value),
		};
		let mut words = s.split(' ');
		let (lhs, op, rhs) = (operand(words.next()?)?, words.next()?, operand(words.next()?)?);
		if words.next().is_some() { return None }
		match op {
			"+" => Some(Operation::Add(lhs, rhs)),
			"*" => Some(Operation::Mul(lhs, rhs)),
			_ => None,
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Monkey 0:
		  Starting items: 79, 98
		  Operation: new = old * 19
		  Test: divisible by 23
		    If true: throw to monkey 2
		    If false: throw to monkey 3

		Monkey 1:
		  Starting items: 54, 65, 75, 74
		  Operation: new = old + 6
		  Test: divisible by 19
		    If true: throw to monkey 2
		    If false: throw to monkey 0

		Monkey 2:
		  Starting items: 79, 60, 97
		  Operation: new = old * old
		  Test: divisible by 13
		    If true: throw to monkey 1
		    If false: throw to monkey 3

		Monkey 3:
		  Starting items: 74
		  Operation: new = old + 3
		  Test: divisible by 17
		    If true: throw to monkey 0
		    If false: throw to monkey 1
	" };

	#[test]
	fn example() {
		let monkeys = input_monkeys(&crate::input::lines(INPUT)).unwrap();
		assert_eq!(monkeys.len(), 4);
		assert_eq!(monkeys[2].operation, Operation::Mul(Operand::Old, Operand::Old));
		assert_eq!(monkeys[1].items, [54, 65, 75, 74]);
		assert_eq!(part1_impl(&monkeys), 10605);
		assert_eq!(part2_impl(&monkeys), 2713310158);
	}

	#[test]
	fn operations() {
		assert_eq!(Operation::Add(Operand::Old, Operand::Old).apply(7), 14);
		assert_eq!(Operation::Mul(Operand::Value(3), Operand::Old).apply(7), 21);
		assert_eq!(Operation::Add(Operand::Old, Operand::Value(2)).apply(7), 9);
	}

	#[test]
	fn malformed() {
		let lines = crate::input::lines(INPUT);
		let with = |l: usize, line: &'static str| {
			let mut lines = lines.clone();
			lines[l] = line;
			solve(&lines)
		};
		assert!(solve(&lines).is_ok());
		assert!(matches!(with(0, "Monkey 1:"), Err(Error::Input(_))));
		assert!(matches!(with(2, "  Operation: new = old / 19"), Err(Error::Input(_))));
		assert!(matches!(with(3, "  Test: divisible by 0"), Err(Error::Input(_))));
		assert!(matches!(with(4, "    If true: throw to monkey 0"), Err(Error::Input(_))));
		assert!(matches!(with(5, "    If false: throw to monkey 9"), Err(Error::Input(_))));
		assert!(matches!(with(6, "Monkey 1:"), Err(Error::Input(_))));
		assert!(matches!(solve(&lines[..5]), Err(Error::Input(_))));
		assert!(matches!(solve(&lines[..6]), Err(Error::Input(_))));
	}
}
