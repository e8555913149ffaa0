// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{error::Error, util::{answers, Answers, Solver}};


pub(crate) const SOLVERS: &[Solver] = &[solve];


#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct Address { row: usize, col: usize }

struct Forest {
	heights: Vec<Vec<u8>>,
	rows: usize,
	cols: usize,
}

impl Forest {
	fn height(&self, address: Address) -> u8 {
		self.heights[address.row][address.col]
	}

	/// Scans one line of sight from both ends at once, always advancing the
	/// side whose running maximum is lower, and collects every cell that is
	/// taller than everything before it on its side.
	fn scan_line(&self, len: usize, address: impl Fn(usize) -> Address, visible: &mut std::collections::HashSet<Address>) {
		let (mut near_block, mut far_block) = (None, None);
		let (mut near, mut far) = (0, len);
		while near < far {
			let (index, block) = if near_block <= far_block {
				near += 1;
				(near - 1, &mut near_block)
			} else {
				far -= 1;
				(far, &mut far_block)
			};
			let address = address(index);
			let height = Some(self.height(address));
			if height > *block {
				*block = height;
				visible.insert(address);
			}
		}
	}

	/// Steps from `address` towards the edge until a tree at least as tall blocks the view.
	fn viewing_distance(&self, address: Address, (d_row, d_col): (isize, isize)) -> u64 {
		let height = self.height(address);
		let mut distance = 0;
		let (mut row, mut col) = (address.row, address.col);
		loop {
			match (row.checked_add_signed(d_row), col.checked_add_signed(d_col)) {
				(Some(r), Some(c)) if r < self.rows && c < self.cols => {
					distance += 1;
					if self.heights[r][c] >= height { break }
					(row, col) = (r, c);
				}
				_ => break,
			}
		}
		distance
	}

	fn scenic_score(&self, address: Address) -> u64 {
		[(-1, 0), (1, 0), (0, -1), (0, 1)].into_iter()
			.map(|direction| self.viewing_distance(address, direction))
			.product()
	}
}


fn input_forest(lines: &[&str]) -> Result<Forest, Error> {
	let forest = parsing::forest_from_lines(lines).map_err(Error::input)?;
	tracing::debug!(rows = forest.rows, cols = forest.cols, "parsed forest");
	Ok(forest)
}


fn part1_impl(input_forest: &Forest) -> usize {
	let mut visible = std::collections::HashSet::new();
	for row in 0..input_forest.rows {
		input_forest.scan_line(input_forest.cols, |col| Address { row, col }, &mut visible);
	}
	for col in 0..input_forest.cols {
		input_forest.scan_line(input_forest.rows, |row| Address { row, col }, &mut visible);
	}
	visible.len()
}

fn part2_impl(input_forest: &Forest) -> u64 {
	use itertools::iproduct;
	iproduct!(0..input_forest.rows, 0..input_forest.cols)
		.map(|(row, col)| input_forest.scenic_score(Address { row, col }))
		.max()
		.unwrap_or(0)
}

fn solve(lines: &[&str]) -> Result<Answers, Error> {
	let forest = input_forest(lines)?;
	Ok(answers(part1_impl(&forest), part2_impl(&forest)))
}


mod parsing {
	use super::Forest;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum ForestError {
		Empty,
		LineLen { line: usize, len: usize, found: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
	}

	pub(super) fn forest_from_lines(lines: &[&str]) -> Result<Forest, ForestError> {
		let cols = lines.first().map(|line| line.len()).filter(|&len| len > 0)
			.ok_or(ForestError::Empty)?;

		let mut heights = Vec::with_capacity(lines.len());
		for (l, line) in lines.iter().enumerate() {
			if line.len() != cols {
				return Err(ForestError::LineLen { line: l + 1, len: cols, found: line.len() })
			}
			heights.push(line.bytes()
				.enumerate()
				.map(|(c, b)| if b.is_ascii_digit() { Ok(b - b'0') } else {
					Err(ForestError::InvalidByte { line: l + 1, column: c + 1, found: b })
				})
				.collect::<Result<Vec<_>, _>>()?);
		}

		Ok(Forest { rows: heights.len(), cols, heights })
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	fn forest(input: &str) -> Forest {
		input_forest(&crate::input::lines(input)).unwrap()
	}

	#[test]
	fn example() {
		const INPUT: &str = indoc::indoc! { "
			30373
			25512
			65332
			33549
			35390
		" };
		let forest = forest(INPUT);
		assert_eq!(part1_impl(&forest), 21);
		assert_eq!(forest.scenic_score(Address { row: 1, col: 2 }), 4);
		assert_eq!(forest.scenic_score(Address { row: 3, col: 2 }), 8);
		assert_eq!(part2_impl(&forest), 8);
	}

	#[test]
	fn equal_heights() {
		const INPUT: &str = indoc::indoc! { "
			55555
			55555
			55555
			55555
			55555
		" };
		let forest = forest(INPUT);
		assert_eq!(part1_impl(&forest), 16);
		assert_eq!(forest.scenic_score(Address { row: 0, col: 2 }), 0);
		assert_eq!(forest.viewing_distance(Address { row: 2, col: 2 }, (0, 1)), 1);
		assert_eq!(part2_impl(&forest), 1);
	}

	#[test]
	fn single_row() {
		let forest = forest("1213\n");
		assert_eq!(part1_impl(&forest), 4);
		assert_eq!(part2_impl(&forest), 0);
	}

	#[test]
	fn malformed() {
		assert!(matches!(solve(&["123", "12"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["12a"]), Err(Error::Input(_))));
		assert!(matches!(solve(&[]), Err(Error::Input(_))));
	}
}
