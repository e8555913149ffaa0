// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;
use crate::{error::Error, util::{answers, Answers, Solver}};


/// Skips ahead once the same rock, jet and surface repeat first; skipping
/// ahead once fixed-size batches of jet pushes grow the tower equally as the alternative.
pub(crate) const SOLVERS: &[Solver] = &[solve, solve_batched];


const PART1_ROCKS: usize = 2022;
const PART2_ROCKS: usize = 1_000_000_000_000;
const MAX_BATCHES: usize = 1_000;

/// Bit `x` of a row is column `x`, so these read mirrored.
const LEFTMOST: u8 = 0b000_0001;
const RIGHTMOST: u8 = 0b100_0000;

/// Rows bottom to top, each rock two columns from the left wall.
const ROCKS: [[u8; 4]; 5] = [
	[0b011_1100, 0, 0, 0],
	[0b000_1000, 0b001_1100, 0b000_1000, 0],
	[0b001_1100, 0b001_0000, 0b001_0000, 0],
	[0b000_0100; 4],
	[0b000_1100, 0b000_1100, 0, 0],
];


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Jet { Left, Right }

fn pushed(rock: [u8; 4], jet: Jet) -> Option<[u8; 4]> {
	match jet {
		Jet::Left if rock.iter().all(|row| row & LEFTMOST == 0) => Some(rock.map(|row| row >> 1)),
		Jet::Right if rock.iter().all(|row| row & RIGHTMOST == 0) => Some(rock.map(|row| row << 1)),
		_ => None,
	}
}

struct Chamber<'j> {
	jets: &'j [Jet],
	rows: Vec<u8>,
	falling: Option<([u8; 4], usize)>,
	jet: usize,
	dropped: usize,
}

impl<'j> Chamber<'j> {
	fn new(jets: &'j [Jet]) -> Self {
		Chamber { jets, rows: vec![], falling: None, jet: 0, dropped: 0 }
	}

	fn height(&self) -> usize {
		self.rows.len()
	}

	fn collides(&self, rock: &[u8; 4], y: usize) -> bool {
		rock.iter().zip(self.rows.iter().skip(y)).any(|(rock, row)| rock & row != 0)
	}

	/// One jet push followed by one step down. Returns whether the falling
	/// rock came to rest; the next tick spawns a new one three rows above the tower.
	fn tick(&mut self) -> bool {
		let (mut rock, y) = self.falling.take()
			.unwrap_or_else(|| (ROCKS[self.dropped % ROCKS.len()], self.rows.len() + 3));

		let jet = self.jets[self.jet];
		self.jet = (self.jet + 1) % self.jets.len();
		if let Some(moved) = pushed(rock, jet).filter(|moved| !self.collides(moved, y)) { rock = moved }

		if y > 0 && !self.collides(&rock, y - 1) {
			self.falling = Some((rock, y - 1));
			return false
		}

		for (i, row) in rock.into_iter().enumerate().take_while(|&(_, row)| row != 0) {
			if self.rows.len() <= y + i { self.rows.resize(y + i + 1, 0) }
			self.rows[y + i] |= row;
		}
		self.dropped += 1;
		true
	}

	fn drop_rock(&mut self) {
		while !self.tick() {}
	}

	/// How far below the top each column's highest rock is.
	fn surface(&self) -> [usize; 7] {
		std::array::from_fn(|x| self.rows.iter().rev()
			.position(|row| row & (1_u8 << x) != 0)
			.unwrap_or(self.rows.len()))
	}
}

/// Drops `rocks` rocks. Once a rock spawns at the same jet over the same
/// surface as before, the tower grows the same for every repetition after it,
/// so whole repetitions are skipped.
fn tower_height(jets: &[Jet], rocks: usize) -> usize {
	use std::collections::hash_map::Entry;

	let mut chamber = Chamber::new(jets);
	let mut seen = HashMap::new();
	let (mut target, mut skipped) = (rocks, None);

	while chamber.dropped < target {
		if skipped.is_none() {
			let state = (chamber.dropped % ROCKS.len(), chamber.jet, chamber.surface());
			match seen.entry(state) {
				Entry::Occupied(entry) => {
					let &(dropped, height) = entry.get();
					let (period, growth) = (chamber.dropped - dropped, chamber.height() - height);
					let repetitions = (target - chamber.dropped) / period;
					tracing::debug!(period, growth, repetitions, "tower repeats");
					target -= repetitions * period;
					skipped = Some(repetitions * growth);
					continue
				}
				Entry::Vacant(entry) => _ = entry.insert((chamber.dropped, chamber.height())),
			}
		}
		chamber.drop_rock();
	}

	chamber.height() + skipped.unwrap_or(0)
}

fn simulated_height(jets: &[Jet], rocks: usize) -> usize {
	let mut chamber = Chamber::new(jets);
	for _ in 0..rocks { chamber.drop_rock() }
	chamber.height()
}

/// Ticks in batches of as many pushes as there are jets times rocks, until two
/// batches in a row drop as many rocks and grow the tower as much.
fn batched_height(jets: &[Jet], rocks: usize) -> Option<usize> {
	let batch = jets.len() * ROCKS.len();
	let mut chamber = Chamber::new(jets);
	let mut previous = None;

	for _ in 0..MAX_BATCHES {
		let before = (chamber.dropped, chamber.height());
		for _ in 0..batch { chamber.tick(); }
		let delta = (chamber.dropped - before.0, chamber.height() - before.1);
		if previous != Some(delta) {
			previous = Some(delta);
			continue
		}

		let Some(remaining) = rocks.checked_sub(chamber.dropped) else { break };
		let (per_batch, growth) = delta;
		let target = chamber.dropped + remaining % per_batch;
		while chamber.dropped < target { chamber.tick(); }
		return Some(chamber.height() + remaining / per_batch * growth)
	}

	(rocks <= chamber.dropped).then(|| simulated_height(jets, rocks))
}


fn input_jets(lines: &[&str]) -> Result<Vec<Jet>, Error> {
	parsing::jets_from_lines(lines).map_err(Error::input)
}


fn part1_impl(input_jets: &[Jet]) -> usize {
	tower_height(input_jets, PART1_ROCKS)
}

fn part2_impl(input_jets: &[Jet]) -> usize {
	tower_height(input_jets, PART2_ROCKS)
}

fn solve(lines: &[&str]) -> Result<Answers, Error> {
	let jets = input_jets(lines)?;
	Ok(answers(part1_impl(&jets), part2_impl(&jets)))
}

fn solve_batched(lines: &[&str]) -> Result<Answers, Error> {
	let jets = input_jets(lines)?;
	let part2 = batched_height(&jets, PART2_ROCKS).ok_or(Error::NoSolution("tower growth never repeats"))?;
	Ok(answers(simulated_height(&jets, PART1_ROCKS), part2))
}


mod parsing {
	use super::Jet;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum JetsError {
		Lines { count: usize },
		Empty,
		Jet { column: usize, found: char },
	}

	pub(super) fn jets_from_lines(lines: &[&str]) -> Result<Vec<Jet>, JetsError> {
		let [line] = lines else { return Err(JetsError::Lines { count: lines.len() }) };
		if line.is_empty() { return Err(JetsError::Empty) }
		line.chars().enumerate().map(|(c, chr)| match chr {
			'<' => Ok(Jet::Left),
			'>' => Ok(Jet::Right),
			found => Err(JetsError::Jet { column: c + 1, found }),
		}).collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>";

	#[test]
	fn example() {
		let jets = input_jets(&[INPUT]).unwrap();
		assert_eq!(jets.len(), 40);
		assert_eq!(part1_impl(&jets), 3068);
		assert_eq!(part2_impl(&jets), 1_514_285_714_288);
		assert_eq!(solve_batched(&[INPUT]).unwrap(), answers(3068, 1_514_285_714_288_u64));
	}

	#[test]
	fn first_rocks() {
		let jets = input_jets(&[INPUT]).unwrap();
		assert_eq!(tower_height(&jets, 0), 0);
		assert_eq!(tower_height(&jets, 1), 1);
		assert_eq!(tower_height(&jets, 2), 4);
		assert_eq!(simulated_height(&jets, 5), 9);
		assert_eq!(simulated_height(&jets, 2022), 3068);
	}

	#[test]
	fn walls() {
		let flat = ROCKS[0];
		assert_eq!(pushed(flat, Jet::Right), Some([0b111_1000, 0, 0, 0]));
		assert_eq!(pushed([0b111_1000, 0, 0, 0], Jet::Right), None);
		assert_eq!(pushed(flat, Jet::Left).and_then(|rock| pushed(rock, Jet::Left)), Some([0b000_1111, 0, 0, 0]));
		assert_eq!(pushed([0b000_1111, 0, 0, 0], Jet::Left), None);
	}

	#[test]
	fn malformed() {
		assert!(matches!(solve(&["<>x"]), Err(Error::Input(_))));
		assert!(matches!(solve(&[""]), Err(Error::Input(_))));
		assert!(matches!(solve(&["<", ">"]), Err(Error::Input(_))));
		assert!(matches!(solve(&[]), Err(Error::Input(_))));
	}
}
