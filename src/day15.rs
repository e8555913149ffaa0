// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use itertools::Itertools as _;
use crate::{error::Error, util::{answers, Answers, Solver}};


/// Intersects the lines just outside each sensor's reach first; scanning every row in parallel as the alternative.
pub(crate) const SOLVERS: &[Solver] = &[solve, solve_scanned];


const ROW: i64 = 2_000_000;
const SEARCH_MAX: i64 = 4_000_000;


type Pos = [i64; 2];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sensor {
	pos: Pos,
	beacon: Pos,
}

fn distance(a: Pos, b: Pos) -> i64 {
	(a[0] - b[0]).abs() + (a[1] - b[1]).abs()
}

impl Sensor {
	fn radius(&self) -> i64 {
		distance(self.pos, self.beacon)
	}

	fn covers(&self, pos: Pos) -> bool {
		distance(self.pos, pos) <= self.radius()
	}
}

/// Sorted, disjoint inclusive `[start, end]` ranges of x covered in row `y`.
/// Adjacent ranges are merged.
fn covered(sensors: &[Sensor], y: i64) -> Vec<[i64; 2]> {
	sensors.iter()
		.filter_map(|sensor| {
			let reach = sensor.radius() - (sensor.pos[1] - y).abs();
			(reach >= 0).then(|| [sensor.pos[0] - reach, sensor.pos[0] + reach])
		})
		.sorted_unstable()
		.coalesce(|a, b| if b[0] <= a[1] + 1 { Ok([a[0], a[1].max(b[1])]) } else { Err((a, b)) })
		.collect()
}

fn tuning_frequency([x, y]: Pos) -> i64 {
	x * 4_000_000 + y
}


fn input_sensors(lines: &[&str]) -> Result<Vec<Sensor>, Error> {
	parsing::sensors_from_lines(lines).collect::<Result<_, _>>().map_err(Error::input)
}


/// Positions in row `y` that cannot hold a beacon. Known beacons do not count.
fn part1_impl(input_sensors: &[Sensor], y: i64) -> i64 {
	let covered = covered(input_sensors, y).iter().map(|[start, end]| end - start + 1).sum::<i64>();
	let beacons = input_sensors.iter().map(|s| s.beacon).filter(|b| b[1] == y).unique().count();
	covered - beacons as i64
}

/// The only uncovered position within `0..=max` either way lies just outside
/// the reach of at least two sensors, where one rising and one falling
/// boundary line cross, or in a corner of the search area.
fn part2_impl(input_sensors: &[Sensor], max: i64) -> Option<i64> {
	let (mut rising, mut falling) = (vec![], vec![]);
	for sensor in input_sensors {
		let ([x, y], r) = (sensor.pos, sensor.radius() + 1);
		rising.extend([y - x - r, y - x + r]);
		falling.extend([y + x - r, y + x + r]);
	}

	rising.iter().cartesian_product(&falling)
		.filter(|&(a, b)| (a + b) % 2 == 0)
		.map(|(a, b)| [(b - a) / 2, (a + b) / 2])
		.chain([[0, 0], [0, max], [max, 0], [max, max]])
		.find(|&pos| pos.iter().all(|c| (0..=max).contains(c))
			&& !input_sensors.iter().any(|sensor| sensor.covers(pos)))
		.map(tuning_frequency)
}

fn part2_scanned(input_sensors: &[Sensor], max: i64) -> Option<i64> {
	use rayon::prelude::{IntoParallelIterator as _, ParallelIterator as _};

	(0..=max).into_par_iter()
		.find_map_any(|y| {
			let mut x = 0;
			for [start, end] in covered(input_sensors, y) {
				if start > x { break }
				x = x.max(end + 1);
			}
			(x <= max).then_some([x, y])
		})
		.map(tuning_frequency)
}

fn solve(lines: &[&str]) -> Result<Answers, Error> {
	let sensors = input_sensors(lines)?;
	let part2 = part2_impl(&sensors, SEARCH_MAX).ok_or(Error::NoSolution("every position is covered"))?;
	Ok(answers(part1_impl(&sensors, ROW), part2))
}

fn solve_scanned(lines: &[&str]) -> Result<Answers, Error> {
	let sensors = input_sensors(lines)?;
	let part2 = part2_scanned(&sensors, SEARCH_MAX).ok_or(Error::NoSolution("every position is covered"))?;
	Ok(answers(part1_impl(&sensors, ROW), part2))
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Pos, Sensor};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum SensorError {
		Format { line: usize },
		Coord { line: usize, source: ParseIntError },
	}

	fn pos_from_str(s: &str, l: usize) -> Result<Pos, SensorError> {
		let (x, y) = s.strip_prefix("x=")
			.and_then(|s| s.split_once(", y="))
			.ok_or(SensorError::Format { line: l + 1 })?;
		let coord = |s: &str| s.parse().map_err(|e| SensorError::Coord { line: l + 1, source: e });
		Ok([coord(x)?, coord(y)?])
	}

	pub(super) fn sensors_from_lines<'l>(lines: &'l [&str])
	-> impl Iterator<Item = Result<Sensor, SensorError>> + 'l {
		lines.iter().enumerate().map(|(l, line)| -> Result<Sensor, SensorError> {
			let (pos, beacon) = line.strip_prefix("Sensor at ")
				.and_then(|s| s.split_once(": closest beacon is at "))
				.ok_or(SensorError::Format { line: l + 1 })?;
			Ok(Sensor { pos: pos_from_str(pos, l)?, beacon: pos_from_str(beacon, l)? })
		})
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Sensor at x=2, y=18: closest beacon is at x=-2, y=15
		Sensor at x=9, y=16: closest beacon is at x=10, y=16
		Sensor at x=13, y=2: closest beacon is at x=15, y=3
		Sensor at x=12, y=14: closest beacon is at x=10, y=16
		Sensor at x=10, y=20: closest beacon is at x=10, y=16
		Sensor at x=14, y=17: closest beacon is at x=10, y=16
		Sensor at x=8, y=7: closest beacon is at x=2, y=10
		Sensor at x=2, y=0: closest beacon is at x=2, y=10
		Sensor at x=0, y=11: closest beacon is at x=2, y=10
		Sensor at x=20, y=14: closest beacon is at x=25, y=17
		Sensor at x=17, y=20: closest beacon is at x=21, y=22
		Sensor at x=16, y=7: closest beacon is at x=15, y=3
		Sensor at x=14, y=3: closest beacon is at x=15, y=3
		Sensor at x=20, y=1: closest beacon is at x=15, y=3
	" };

	#[test]
	fn example() {
		let sensors = input_sensors(&crate::input::lines(INPUT)).unwrap();
		assert_eq!(sensors[0], Sensor { pos: [2, 18], beacon: [-2, 15] });
		assert_eq!(sensors[6].radius(), 9);
		assert_eq!(part1_impl(&sensors, 10), 26);
		assert_eq!(part1_impl(&sensors, -100), 0);
		assert_eq!(part2_impl(&sensors, 20), Some(56_000_011));
		assert_eq!(part2_scanned(&sensors, 20), Some(56_000_011));
	}

	#[test]
	fn merged_coverage() {
		let sensors = [Sensor { pos: [0, 0], beacon: [2, 0] }, Sensor { pos: [5, 0], beacon: [5, 2] }];
		assert_eq!(covered(&sensors, 0), [[-2, 7]]);
		assert_eq!(covered(&sensors, 2), [[0, 0], [5, 5]]);
		assert_eq!(part1_impl(&sensors, 2), 1);
	}

	#[test]
	fn fully_covered() {
		let sensors = [Sensor { pos: [2, 2], beacon: [2, 6] }];
		assert_eq!(part2_impl(&sensors, 2), None);
		assert_eq!(part2_scanned(&sensors, 2), None);
	}

	#[test]
	fn uncovered_corner() {
		let sensors = [Sensor { pos: [0, 0], beacon: [0, 3] }];
		assert_eq!(part2_impl(&sensors, 2), Some(tuning_frequency([2, 2])));
		assert_eq!(part2_scanned(&sensors, 2), Some(8_000_002));
	}

	#[test]
	fn malformed() {
		assert!(matches!(solve(&["Sensor at x=2, y=18"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["Sensor at x=2, y=18: closest beacon is at x=-2"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["Sensor at x=a, y=18: closest beacon is at x=-2, y=15"]), Err(Error::Input(_))));
	}
}
