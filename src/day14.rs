// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use itertools::Itertools as _;
use crate::{error::Error, util::{answers, Answers, Solver}};


/// Pours grain by grain first; filling the pile row by row for part 2 as the alternative.
pub(crate) const SOLVERS: &[Solver] = &[solve, solve_filled];


type Pos = [usize; 2];

const SOURCE: Pos = [500, 0];


/// Rock in a window wide enough to hold a full pile on the floor.
struct Cave {
	rocks: Vec<bool>,
	x_min: usize,
	width: usize,
	/// Two below the lowest rock.
	floor: usize,
}

impl Cave {
	fn new(paths: &[Vec<Pos>]) -> Self {
		let points = || paths.iter().flatten();
		let floor = points().map(|&[_, y]| y).max().unwrap_or(0) + 2;
		let x_min = points().map(|&[x, _]| x).min().unwrap_or(SOURCE[0]).min(SOURCE[0].saturating_sub(floor));
		let x_max = points().map(|&[x, _]| x).max().unwrap_or(SOURCE[0]).max(SOURCE[0] + floor);
		let width = x_max - x_min + 1;

		let mut cave = Cave { rocks: vec![false; width * floor], x_min, width, floor };
		for path in paths {
			let segments = path.iter().tuple_windows().chain(path.first().map(|p| (p, p)));
			for (&[x0, y0], &[x1, y1]) in segments {
				for y in y0.min(y1)..=y0.max(y1) {
					for x in x0.min(x1)..=x0.max(x1) {
						let i = cave.index([x, y]);
						cave.rocks[i] = true;
					}
				}
			}
		}
		cave
	}

	fn index(&self, [x, y]: Pos) -> usize {
		y * self.width + x - self.x_min
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bottom { Abyss, Floor }

/// Number of grains that come to rest before one falls past the lowest rock
/// (`Abyss`) or the source itself is covered (`Floor`). Each grain starts
/// from where the previous one last moved, rather than from the source.
fn pour(cave: &Cave, bottom: Bottom) -> usize {
	let mut blocked = cave.rocks.clone();
	let mut path = vec![SOURCE];
	let mut resting = 0;

	while let Some(&[x, y]) = path.last() {
		let next = if y + 1 == cave.floor {
			if bottom == Bottom::Abyss { break }
			None
		} else {
			[Some(x), x.checked_sub(1), Some(x + 1)].into_iter().flatten()
				.map(|x| [x, y + 1])
				.find(|&pos| !blocked[cave.index(pos)])
		};
		match next {
			Some(pos) => path.push(pos),
			None => {
				blocked[cave.index([x, y])] = true;
				resting += 1;
				path.pop();
			}
		}
	}

	tracing::debug!(?bottom, resting, floor = cave.floor);
	resting
}

/// Counts the cells sand reaches above the floor: the source, then every open
/// cell with sand straight or diagonally above it.
fn fill(cave: &Cave) -> usize {
	let mut row = vec![false; cave.width];
	row[SOURCE[0] - cave.x_min] = true;
	let mut filled = 1;
	for y in 1..cave.floor {
		row = (0..cave.width)
			.map(|c| !cave.rocks[y * cave.width + c]
				&& row[c.saturating_sub(1)..=(c + 1).min(cave.width - 1)].contains(&true))
			.collect();
		filled += row.iter().filter(|&&sand| sand).count();
	}
	filled
}


fn input_cave(lines: &[&str]) -> Result<Cave, Error> {
	let paths = parsing::paths_from_lines(lines).map_err(Error::input)?;
	Ok(Cave::new(&paths))
}


fn part1_impl(input_cave: &Cave) -> usize {
	pour(input_cave, Bottom::Abyss)
}

fn part2_impl(input_cave: &Cave) -> usize {
	pour(input_cave, Bottom::Floor)
}

fn solve(lines: &[&str]) -> Result<Answers, Error> {
	let cave = input_cave(lines)?;
	Ok(answers(part1_impl(&cave), part2_impl(&cave)))
}

fn solve_filled(lines: &[&str]) -> Result<Answers, Error> {
	let cave = input_cave(lines)?;
	Ok(answers(part1_impl(&cave), fill(&cave)))
}


mod parsing {
	use std::num::ParseIntError;
	use super::Pos;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum PathError {
		NoComma { line: usize, point: usize },
		Coord { line: usize, point: usize, source: ParseIntError },
		Diagonal { line: usize, point: usize },
		Empty,
	}

	/// One path per line, points joined by ` -> `.
	pub(super) fn paths_from_lines(lines: &[&str]) -> Result<Vec<Vec<Pos>>, PathError> {
		if lines.is_empty() { return Err(PathError::Empty) }
		lines.iter().enumerate().map(|(l, line)| -> Result<Vec<Pos>, PathError> {
			let points = line.split(" -> ").enumerate().map(|(p, point)| -> Result<Pos, PathError> {
				let (x, y) = point.split_once(',').ok_or(PathError::NoComma { line: l + 1, point: p + 1 })?;
				let coord = |s: &str| s.parse::<usize>()
					.map_err(|e| PathError::Coord { line: l + 1, point: p + 1, source: e });
				Ok([coord(x)?, coord(y)?])
			}).collect::<Result<Vec<_>, _>>()?;
			if let Some(p) = points.windows(2).position(|w| w[0][0] != w[1][0] && w[0][1] != w[1][1]) {
				return Err(PathError::Diagonal { line: l + 1, point: p + 2 })
			}
			Ok(points)
		}).collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		498,4 -> 498,6 -> 496,6
		503,4 -> 502,4 -> 502,9 -> 494,9
	" };

	#[test]
	fn example() {
		let lines = crate::input::lines(INPUT);
		let cave = input_cave(&lines).unwrap();
		assert_eq!(cave.floor, 11);
		assert_eq!(part1_impl(&cave), 24);
		assert_eq!(part2_impl(&cave), 93);
		assert_eq!(fill(&cave), 93);
		assert_eq!(solve_filled(&lines).unwrap(), answers(24, 93));
	}

	#[test]
	fn single_rock() {
		// Everything falls past one rock, yet the floor pile only loses its cell.
		assert_eq!(solve(&["500,2"]).unwrap(), answers(0, 15));
		assert_eq!(solve_filled(&["500,2"]).unwrap(), answers(0, 15));
	}

	#[test]
	fn malformed() {
		assert!(matches!(solve(&["498,4 -> 498"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["498,4 -> 500,6"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["a,4"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["498,4 ->498,6"]), Err(Error::Input(_))));
		assert!(matches!(solve(&[]), Err(Error::Input(_))));
	}
}
