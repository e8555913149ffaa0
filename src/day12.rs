// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::{HashMap, HashSet};
use crate::{error::Error, util::{answers, Answers, Solver}};


/// Layered breadth-first search first; best-first with a Manhattan heuristic as the slower alternative.
pub(crate) const SOLVERS: &[Solver] = &[solve, solve_best_first];


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Address { row: usize, col: usize }

impl Address {
	fn manhattan(self, other: Address) -> usize {
		self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
	}
}

struct Heightmap {
	heights: Vec<Vec<u8>>,
	start: Address,
	end: Address,
}

impl Heightmap {
	fn height(&self, address: Address) -> u8 {
		self.heights[address.row][address.col]
	}

	fn adjacent(&self, address: Address) -> impl Iterator<Item = Address> {
		let (rows, cols) = (self.heights.len(), self.heights[0].len());
		let Address { row, col } = address;
		let above = (row > 0).then(|| Address { row: row - 1, col });
		let below = (row + 1 < rows).then(|| Address { row: row + 1, col });
		let left = (col > 0).then(|| Address { row, col: col - 1 });
		let right = (col + 1 < cols).then(|| Address { row, col: col + 1 });
		[above, below, left, right].into_iter().flatten()
	}

	/// Adjacent addresses that can be stepped to: at most one higher.
	fn reachable(&self, address: Address) -> impl Iterator<Item = Address> + '_ {
		let height = self.height(address);
		self.adjacent(address).filter(move |&a| self.height(a) <= height + 1)
	}

	/// Every address at the lowest elevation, `S` included.
	fn lowest(&self) -> Vec<Address> {
		use itertools::iproduct;
		iproduct!(0..self.heights.len(), 0..self.heights[0].len())
			.map(|(row, col)| Address { row, col })
			.filter(|&a| self.height(a) == 0)
			.collect()
	}

	/// Number of steps from the nearest of `starts` to `end`, found by
	/// growing a frontier one step per round until it covers `end`.
	fn layered_steps(&self, starts: Vec<Address>) -> Result<usize, Error> {
		let mut visited = starts.iter().copied().collect::<HashSet<_>>();
		let mut frontier = visited.clone();
		let mut steps = 0;

		while !visited.contains(&self.end) {
			if frontier.is_empty() { return Err(Error::Unreachable) }

			let mut next = HashSet::new();
			for &address in &frontier {
				for neighbor in self.reachable(address) {
					if visited.insert(neighbor) { next.insert(neighbor); }
				}
			}
			frontier = next;
			steps += 1;
			tracing::trace!(steps, frontier = frontier.len(), visited = visited.len());
		}

		Ok(steps)
	}

	/// Same result as [`Heightmap::layered_steps`], but expands partial paths
	/// best-first by length plus Manhattan distance to `end`. Every path owns
	/// its own visited set, which makes this much slower.
	fn best_first_steps(&self, starts: Vec<Address>) -> Result<usize, Error> {
		#[derive(Clone)]
		struct Path { visited: HashSet<Address>, head: Address }

		impl Path {
			fn steps(&self) -> usize { self.visited.len() - 1 }
		}

		let score = |path: &Path| path.steps() + path.head.manhattan(self.end);

		let mut best_known = starts.iter().map(|&a| (a, 0)).collect::<HashMap<_, _>>();
		if best_known.contains_key(&self.end) { return Ok(0) }
		let mut paths = starts.into_iter()
			.map(|head| Path { visited: HashSet::from([head]), head })
			.collect::<Vec<_>>();

		loop {
			// Best (lowest) score last
			paths.sort_by_key(|path| std::cmp::Reverse(score(path)));
			let candidate = paths.pop().ok_or(Error::Unreachable)?;
			let steps = candidate.steps() + 1;
			tracing::trace!(head = ?candidate.head, steps = candidate.steps(), paths = paths.len());

			for neighbor in self.reachable(candidate.head) {
				if candidate.visited.contains(&neighbor) { continue }
				if best_known.get(&neighbor).map_or(false, |&known| known <= steps) { continue }
				best_known.insert(neighbor, steps);
				if neighbor == self.end { return Ok(steps) }

				let mut path = candidate.clone();
				path.visited.insert(neighbor);
				path.head = neighbor;
				paths.push(path);
			}
		}
	}
}


fn input_heightmap(lines: &[&str]) -> Result<Heightmap, Error> {
	parsing::heightmap_from_lines(lines).map_err(Error::input)
}


fn part1_impl(input_heightmap: &Heightmap) -> Result<usize, Error> {
	input_heightmap.layered_steps(vec![input_heightmap.start])
}

fn part2_impl(input_heightmap: &Heightmap) -> Result<usize, Error> {
	input_heightmap.layered_steps(input_heightmap.lowest())
}

fn solve(lines: &[&str]) -> Result<Answers, Error> {
	let heightmap = input_heightmap(lines)?;
	Ok(answers(part1_impl(&heightmap)?, part2_impl(&heightmap)?))
}

fn solve_best_first(lines: &[&str]) -> Result<Answers, Error> {
	let heightmap = input_heightmap(lines)?;
	Ok(answers(
		heightmap.best_first_steps(vec![heightmap.start])?,
		heightmap.best_first_steps(heightmap.lowest())?,
	))
}


mod parsing {
	use super::{Address, Heightmap};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum HeightmapError {
		Empty,
		LineLen { line: usize, len: usize, found: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
		DuplicateStart { line: usize, column: usize },
		DuplicateEnd { line: usize, column: usize },
		NoStart,
		NoEnd,
	}

	pub(super) fn heightmap_from_lines(lines: &[&str]) -> Result<Heightmap, HeightmapError> {
		use HeightmapError as E;

		let len = lines.first().map(|line| line.len()).filter(|&len| len > 0).ok_or(E::Empty)?;
		let mut heights = Vec::with_capacity(lines.len());
		let mut start = None;
		let mut end = None;

		for (row, line) in lines.iter().enumerate() {
			if line.len() != len { return Err(E::LineLen { line: row + 1, len, found: line.len() }) }

			macro_rules! set_once { ( $which:ident, $err:ident, $height:literal, $col:expr ) => { {
				if $which.is_some() { return Err(E::$err { line: row + 1, column: $col + 1 }) }
				$which = Some(Address { row, col: $col });
				$height
			} } }

			heights.push(line.bytes()
				.enumerate()
				.map(|(col, b)| Ok(match b {
					b'S' => set_once!(start, DuplicateStart, 0, col),
					b'E' => set_once!(end, DuplicateEnd, 25, col),
					b'a'..=b'z' => b - b'a',
					found => return Err(E::InvalidByte { line: row + 1, column: col + 1, found }),
				}))
				.collect::<Result<Vec<_>, _>>()?);
		}

		Ok(Heightmap {
			heights,
			start: start.ok_or(E::NoStart)?,
			end: end.ok_or(E::NoEnd)?,
		})
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Sabqponm
		abcryxxl
		accszExk
		acctuvwj
		abdefghi
	" };

	#[test]
	fn example() {
		let lines = crate::input::lines(INPUT);
		let heightmap = input_heightmap(&lines).unwrap();
		assert_eq!(part1_impl(&heightmap).unwrap(), 31);
		assert_eq!(part2_impl(&heightmap).unwrap(), 29);
		assert_eq!(solve(&lines).unwrap(), answers(31, 29));
	}

	#[test]
	fn best_first_agrees() {
		let lines = crate::input::lines(INPUT);
		assert_eq!(solve_best_first(&lines).unwrap(), solve(&lines).unwrap());
	}

	#[test]
	fn single_row_climb() {
		let lines = ["SabcdefghijklmnopqrstuvwxyzE"];
		let heightmap = input_heightmap(&lines).unwrap();
		assert_eq!(heightmap.lowest().len(), 2);
		assert_eq!(solve(&lines).unwrap(), answers(27, 26));
		assert_eq!(solve_best_first(&lines).unwrap(), answers(27, 26));
	}

	#[test]
	fn nearest_of_several_starts() {
		let lines = ["SbcdaabcdefghijklmnopqrstuvwxyzE"];
		let heightmap = input_heightmap(&lines).unwrap();
		assert_eq!(heightmap.lowest().len(), 3);
		assert_eq!(part1_impl(&heightmap).unwrap(), 31);
		assert_eq!(part2_impl(&heightmap).unwrap(), 26);
		assert_eq!(solve_best_first(&lines).unwrap(), answers(31, 26));
	}

	#[test]
	fn unreachable() {
		let lines = ["SbcE"];
		assert!(matches!(solve(&lines), Err(Error::Unreachable)));
		assert!(matches!(solve_best_first(&lines), Err(Error::Unreachable)));
	}

	#[test]
	fn malformed() {
		assert!(matches!(solve(&["Sab", "cE"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["SaE1"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["SaS", "aEa"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["abc"]), Err(Error::Input(_))));
	}
}
