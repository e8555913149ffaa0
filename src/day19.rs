// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::BinaryHeap;
use crate::{error::Error, util::{answers, Answers, Solver}};


/// Depth-first search first; best-first search on the geode bound as the alternative.
pub(crate) const SOLVERS: &[Solver] = &[solve, solve_best_first];


const PART1_MINUTES: u32 = 24;
const PART2_MINUTES: u32 = 32;
const PART2_BLUEPRINTS: usize = 3;


/// Robot kinds, each also the index of the resource it collects.
const ORE: usize = 0;
const CLAY: usize = 1;
const OBSIDIAN: usize = 2;
const GEODE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Blueprint {
	id: u32,
	/// Ore, clay and obsidian needed per robot kind.
	costs: [[u32; 3]; 4],
}

impl Blueprint {
	/// No kind of resource is worth collecting faster than the priciest robot
	/// spends it, since only one robot gets built per minute.
	fn useful_robots(&self) -> [u32; 3] {
		std::array::from_fn(|resource| self.costs.iter().map(|cost| cost[resource]).max().unwrap_or(0))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct State {
	minutes_left: u32,
	/// Geodes collected by the end by the geode robots built so far.
	geodes: u32,
	robots: [u32; 3],
	stock: [u32; 3],
}

impl State {
	fn new(minutes: u32) -> Self {
		State { minutes_left: minutes, geodes: 0, robots: [1, 0, 0], stock: [0; 3] }
	}

	/// As if a geode robot were built every minute from now on.
	fn geode_bound(&self) -> u32 {
		let t = self.minutes_left;
		self.geodes + t * t.saturating_sub(1) / 2
	}

	/// Waits until `robot` is affordable, then builds it. `None` when it
	/// would never become affordable or finish in time to be of use.
	fn build(&self, blueprint: &Blueprint, robot: usize, useful: &[u32; 3]) -> Option<State> {
		if robot != GEODE && self.robots[robot] >= useful[robot] { return None }

		let cost = &blueprint.costs[robot];
		let mut wait = 0;
		for resource in [ORE, CLAY, OBSIDIAN] {
			let missing = cost[resource].saturating_sub(self.stock[resource]);
			if missing == 0 { continue }
			if self.robots[resource] == 0 { return None }
			wait = wait.max((missing + self.robots[resource] - 1) / self.robots[resource]);
		}
		if wait + 1 >= self.minutes_left { return None }

		let mut next = *self;
		next.minutes_left -= wait + 1;
		for resource in [ORE, CLAY, OBSIDIAN] {
			next.stock[resource] = self.stock[resource] + self.robots[resource] * (wait + 1) - cost[resource];
		}
		match robot {
			GEODE => next.geodes += next.minutes_left,
			_ => next.robots[robot] += 1,
		}
		Some(next)
	}

	fn branches<'b>(&self, blueprint: &'b Blueprint, useful: [u32; 3]) -> impl Iterator<Item = State> + 'b {
		let state = *self;
		[GEODE, OBSIDIAN, CLAY, ORE].into_iter().filter_map(move |robot| state.build(blueprint, robot, &useful))
	}
}

fn max_geodes(blueprint: &Blueprint, minutes: u32) -> u32 {
	let useful = blueprint.useful_robots();
	let mut best = 0;
	let mut stack = vec![State::new(minutes)];
	while let Some(state) = stack.pop() {
		best = best.max(state.geodes);
		if state.geode_bound() <= best { continue }
		stack.extend(state.branches(blueprint, useful));
	}
	tracing::debug!(blueprint = blueprint.id, minutes, best);
	best
}

/// Explores the state with the highest bound first, stopping once no bound
/// beats the best count found.
fn max_geodes_best_first(blueprint: &Blueprint, minutes: u32) -> u32 {
	let useful = blueprint.useful_robots();
	let start = State::new(minutes);
	let mut best = 0;
	let mut frontier = BinaryHeap::from([(start.geode_bound(), start)]);
	while let Some((bound, state)) = frontier.pop() {
		if bound <= best { break }
		best = best.max(state.geodes);
		for next in state.branches(blueprint, useful) {
			best = best.max(next.geodes);
			frontier.push((next.geode_bound(), next));
		}
	}
	best
}


fn input_blueprints(lines: &[&str]) -> Result<Vec<Blueprint>, Error> {
	parsing::blueprints_from_lines(lines).collect::<Result<_, _>>().map_err(Error::input)
}


type MaxGeodes = fn(&Blueprint, u32) -> u32;

/// Sum of each blueprint's id times its most geodes.
fn part1_impl(input_blueprints: &[Blueprint], max_geodes: MaxGeodes) -> u32 {
	use rayon::prelude::{IntoParallelRefIterator as _, ParallelIterator as _};

	input_blueprints.par_iter()
		.map(|blueprint| blueprint.id * max_geodes(blueprint, PART1_MINUTES))
		.sum()
}

fn part2_impl(input_blueprints: &[Blueprint], max_geodes: MaxGeodes) -> u64 {
	use rayon::prelude::{IntoParallelRefIterator as _, ParallelIterator as _};

	input_blueprints[..input_blueprints.len().min(PART2_BLUEPRINTS)].par_iter()
		.map(|blueprint| max_geodes(blueprint, PART2_MINUTES) as u64)
		.product()
}

fn solve_with(lines: &[&str], max_geodes: MaxGeodes) -> Result<Answers, Error> {
	let blueprints = input_blueprints(lines)?;
	Ok(answers(part1_impl(&blueprints, max_geodes), part2_impl(&blueprints, max_geodes)))
}

fn solve(lines: &[&str]) -> Result<Answers, Error> {
	solve_with(lines, max_geodes)
}

fn solve_best_first(lines: &[&str]) -> Result<Answers, Error> {
	solve_with(lines, max_geodes_best_first)
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Blueprint, ORE, CLAY, OBSIDIAN, GEODE};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum BlueprintError {
		Format { line: usize },
		Number { line: usize, source: ParseIntError },
		Robot { line: usize, found: String },
		Resource { line: usize, found: String },
		MissingRobot { line: usize, robot: usize },
	}

	fn kind(name: &str) -> Option<usize> {
		match name {
			"ore" => Some(ORE),
			"clay" => Some(CLAY),
			"obsidian" => Some(OBSIDIAN),
			"geode" => Some(GEODE),
			_ => None,
		}
	}

	/// `Blueprint <id>: Each <kind> robot costs <n> <resource>[ and <n> <resource>]. ...`
	fn blueprint_from_str(s: &str, l: usize) -> Result<Blueprint, BlueprintError> {
		use BlueprintError as E;

		let number = |s: &str| s.parse::<u32>().map_err(|e| E::Number { line: l + 1, source: e });
		let (id, robots) = s.strip_prefix("Blueprint ")
			.and_then(|s| s.split_once(": "))
			.ok_or(E::Format { line: l + 1 })?;

		let mut costs = [None; 4];
		for sentence in robots.split_terminator('.').map(str::trim) {
			let (robot, cost) = sentence.strip_prefix("Each ")
				.and_then(|s| s.split_once(" robot costs "))
				.ok_or(E::Format { line: l + 1 })?;
			let robot = kind(robot).ok_or_else(|| E::Robot { line: l + 1, found: robot.to_owned() })?;
			let mut robot_cost = [0; 3];
			for part in cost.split(" and ") {
				let (amount, resource) = part.split_once(' ').ok_or(E::Format { line: l + 1 })?;
				match kind(resource) {
					Some(resource) if resource != GEODE => robot_cost[resource] = number(amount)?,
					_ => return Err(E::Resource { line: l + 1, found: resource.to_owned() }),
				}
			}
			costs[robot] = Some(robot_cost);
		}

		let mut checked = [[0; 3]; 4];
		for (robot, cost) in costs.into_iter().enumerate() {
			checked[robot] = cost.ok_or(E::MissingRobot { line: l + 1, robot })?;
		}
		Ok(Blueprint { id: number(id)?, costs: checked })
	}

	pub(super) fn blueprints_from_lines<'l>(lines: &'l [&str])
	-> impl Iterator<Item = Result<Blueprint, BlueprintError>> + 'l {
		lines.iter().enumerate().map(|(l, line)| blueprint_from_str(line, l))
	}
}
