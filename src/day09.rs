// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;
use crate::{error::Error, util::{answers, Answers, Solver}};


/// One ten-knot rope tracking both tails first; a separate rope per part as the alternative.
pub(crate) const SOLVERS: &[Solver] = &[solve, solve_per_rope];


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dir { Up, Down, Left, Right }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Motion { dir: Dir, steps: u32 }

type Knot = [i32; 2];

impl Dir {
	fn delta(self) -> Knot {
		match self { Dir::Up => [0, 1], Dir::Down => [0, -1], Dir::Left => [-1, 0], Dir::Right => [1, 0] }
	}
}

/// Where `knot` ends up after `lead` moved: unchanged while they still touch
/// (diagonals included), otherwise one step towards `lead` on each axis.
fn follow(knot: Knot, lead: Knot) -> Knot {
	let [dx, dy] = [lead[0] - knot[0], lead[1] - knot[1]];
	if dx.abs() <= 1 && dy.abs() <= 1 { return knot }
	[knot[0] + dx.signum(), knot[1] + dy.signum()]
}

/// Moves a rope of `knots` knots (head included) and returns the set of
/// positions visited by each of the `tracked` knot indices.
fn simulate<const N: usize>(motions: &[Motion], knots: usize, tracked: [usize; N]) -> [HashSet<Knot>; N] {
	let mut rope = vec![[0, 0]; knots];
	let mut visited = std::array::from_fn(|_| HashSet::from([[0, 0]]));

	for motion in motions {
		let delta = motion.dir.delta();
		for _ in 0..motion.steps {
			rope[0] = [rope[0][0] + delta[0], rope[0][1] + delta[1]];
			for k in 1..knots {
				let moved = follow(rope[k], rope[k - 1]);
				if moved == rope[k] { break }
				rope[k] = moved;
			}
			for (set, &k) in visited.iter_mut().zip(&tracked) { set.insert(rope[k]); }
		}
		tracing::trace!(?motion, head = ?rope[0], tail = ?rope[knots - 1]);
	}

	visited
}


fn input_motions(lines: &[&str]) -> Result<Vec<Motion>, Error> {
	parsing::motions_from_lines(lines).collect::<Result<_, _>>().map_err(Error::input)
}


fn solve(lines: &[&str]) -> Result<Answers, Error> {
	let motions = input_motions(lines)?;
	let [second, tenth] = simulate(&motions, 10, [1, 9]);
	Ok(answers(second.len(), tenth.len()))
}

fn solve_per_rope(lines: &[&str]) -> Result<Answers, Error> {
	let motions = input_motions(lines)?;
	let [short] = simulate(&motions, 2, [1]);
	let [long] = simulate(&motions, 10, [9]);
	Ok(answers(short.len(), long.len()))
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Dir, Motion};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum MotionError {
		NoSpace { line: usize },
		Dir { line: usize, found: String },
		Steps { line: usize, source: ParseIntError },
	}

	pub(super) fn motions_from_lines<'l>(lines: &'l [&str])
	-> impl Iterator<Item = Result<Motion, MotionError>> + 'l {
		lines.iter().enumerate().map(|(l, line)| -> Result<Motion, MotionError> {
			let (dir, steps) = line.split_once(' ').ok_or(MotionError::NoSpace { line: l + 1 })?;
			let dir = match dir {
				"U" => Dir::Up,
				"D" => Dir::Down,
				"L" => Dir::Left,
				"R" => Dir::Right,
				found => return Err(MotionError::Dir { line: l + 1, found: found.to_owned() }),
			};
			let steps = steps.parse().map_err(|e| MotionError::Steps { line: l + 1, source: e })?;
			Ok(Motion { dir, steps })
		})
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use test_case::test_case;

	const SHORT: &str = indoc::indoc! { "
		R 4
		U 4
		L 3
		D 1
		R 4
		D 1
		L 5
		R 2
	" };

	const LONG: &str = indoc::indoc! { "
		R 5
		U 8
		L 8
		D 3
		R 17
		D 10
		L 25
		U 20
	" };

	#[test_case([1, 1], [1, 1]; "touching")]
	#[test_case([3, 1], [2, 1]; "straight")]
	#[test_case([2, 3], [2, 2]; "knight diagonal")]
	#[test_case([3, 3], [2, 2]; "far diagonal")]
	fn following(lead: Knot, expected: Knot) {
		assert_eq!(follow([1, 1], lead), expected);
	}

	#[test]
	fn examples() {
		let short = crate::input::lines(SHORT);
		assert_eq!(solve(&short).unwrap(), answers(13, 1));
		assert_eq!(solve_per_rope(&short).unwrap(), answers(13, 1));

		let long = crate::input::lines(LONG);
		assert_eq!(solve(&long).unwrap(), answers(88, 36));
		assert_eq!(solve_per_rope(&long).unwrap(), answers(88, 36));
	}

	#[test]
	fn malformed() {
		assert!(matches!(solve(&["R4"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["X 4"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["R -1"]), Err(Error::Input(_))));
	}
}
