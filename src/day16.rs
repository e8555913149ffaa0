// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::{HashMap, VecDeque};
use crate::{error::Error, util::{self, answers, Answers, Solver}};


pub(crate) const SOLVERS: &[Solver] = &[solve];


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Label(u16);

const ORIGIN: Label = Label(0); // AA

#[cfg_attr(test, derive(Debug))]
struct Valve {
	flow_rate: usize,
	tunnels: Vec<Label>,
}

/// Valves plus what the route planning needs precomputed: the valves worth
/// opening (highest flow rate first) and the hop counts between every pair of
/// them and the origin. Immutable once built.
struct Network {
	valves: HashMap<Label, Valve>,
	by_rate: Vec<Label>,
	hops: HashMap<(Label, Label), usize>,
}

/// A route of valves to open in order, and an optimistic estimate of the
/// pressure it can release.
#[cfg_attr(test, derive(Debug))]
struct Plan {
	route: Vec<Label>,
	estimate: usize,
}

fn pair(from: Label, to: Label) -> (Label, Label) {
	if from <= to { (from, to) } else { (to, from) }
}

impl Network {
	fn new(valves: HashMap<Label, Valve>) -> Result<Self, parsing::NetworkError> {
		use parsing::NetworkError as E;

		if !valves.contains_key(&ORIGIN) { return Err(E::NoOrigin) }
		for (&label, valve) in &valves {
			if let Some(&to) = valve.tunnels.iter().find(|to| !valves.contains_key(to)) {
				return Err(E::UnknownTunnel { from: label, to })
			}
		}

		let mut by_rate = vec![];
		for (&label, valve) in &valves {
			if valve.flow_rate == 0 { continue }
			util::sorted_insert_by_key(&mut by_rate, label, |l| (std::cmp::Reverse(valves[l].flow_rate), *l));
		}
		if by_rate.len() > u64::BITS as usize { return Err(E::TooManyValves(by_rate.len())) }

		let mut network = Network { valves, by_rate, hops: HashMap::new() };
		for &from in std::iter::once(&ORIGIN).chain(&network.by_rate) {
			let hops = network.hops_from(from);
			for &to in &network.by_rate {
				if let Some(&h) = hops.get(&to) {
					network.hops.insert(pair(from, to), h);
				}
			}
		}
		tracing::debug!(valves = network.valves.len(), worth_opening = network.by_rate.len(), pairs = network.hops.len());
		Ok(network)
	}

	/// Unweighted breadth-first search over the tunnels from `from`.
	fn hops_from(&self, from: Label) -> HashMap<Label, usize> {
		let mut hops = HashMap::from([(from, 0)]);
		let mut queue = VecDeque::from([from]);
		while let Some(label) = queue.pop_front() {
			let next = hops[&label] + 1;
			for &to in &self.valves[&label].tunnels {
				hops.entry(to).or_insert_with(|| {
					queue.push_back(to);
					next
				});
			}
		}
		hops
	}

	fn distance(&self, from: Label, to: Label) -> Option<usize> {
		if from == to { Some(0) } else { self.hops.get(&pair(from, to)).copied() }
	}

	/// Pressure released by opening the valves of `route` in order, plus, for
	/// every other valve worth opening, what it would release if it were
	/// reached straight from the end of the route. `None` if the route cannot
	/// be completed within `budget` minutes.
	fn evaluate(&self, route: &[Label], budget: usize) -> Option<usize> {
		let mut elapsed = 0;
		let mut released = 0;
		let mut position = ORIGIN;
		for &label in route {
			elapsed += self.distance(position, label)? + 1;
			if elapsed >= budget { return None }
			released += self.valves[&label].flow_rate * (budget - elapsed);
			position = label;
		}

		let optimistic = self.by_rate.iter()
			.filter(|label| !route.contains(label))
			.filter_map(|label| {
				let opened = elapsed + self.distance(position, *label)? + 1;
				(opened < budget).then(|| self.valves[label].flow_rate * (budget - opened))
			})
			.sum::<usize>();

		Some(released + optimistic)
	}

	/// Best-first search over plans. The work list stays sorted by estimate so
	/// the most promising plan is always popped; the first one that cannot be
	/// extended has an exact estimate no other plan can beat.
	fn best_plan(&self, budget: usize) -> Plan {
		let mut plans = vec![Plan { route: vec![], estimate: self.evaluate(&[], budget).unwrap_or(0) }];

		while let Some(candidate) = plans.pop() {
			tracing::trace!(route = %DisplayRoute(&candidate.route), estimate = candidate.estimate, plans = plans.len());

			let mut extended = false;
			for &label in &self.by_rate {
				if candidate.route.contains(&label) { continue }
				let mut route = candidate.route.clone();
				route.push(label);
				if let Some(estimate) = self.evaluate(&route, budget) {
					util::sorted_insert_by_key(&mut plans, Plan { route, estimate }, |p| p.estimate);
					extended = true;
				}
			}

			if !extended {
				tracing::debug!(route = %DisplayRoute(&candidate.route), released = candidate.estimate, "best plan");
				return candidate
			}
		}

		Plan { route: vec![], estimate: 0 }
	}

	/// The most pressure one actor can release within `budget` minutes for
	/// every set of opened valves it can achieve, keyed by bit set (bit `i`
	/// is `by_rate[i]`).
	fn best_per_opened(&self, budget: usize) -> HashMap<u64, usize> {
		let mut best = HashMap::new();
		let mut stack = vec![(ORIGIN, 0, 0u64, 0)];
		while let Some((position, elapsed, opened, released)) = stack.pop() {
			let entry = best.entry(opened).or_insert(0);
			*entry = released.max(*entry);

			for (i, &label) in self.by_rate.iter().enumerate() {
				if opened & 1 << i != 0 { continue }
				let Some(hops) = self.distance(position, label) else { continue };
				let elapsed = elapsed + hops + 1;
				if elapsed >= budget { continue }
				stack.push((label, elapsed, opened | 1 << i,
					released + self.valves[&label].flow_rate * (budget - elapsed)));
			}
		}
		best
	}
}


fn input_network(lines: &[&str]) -> Result<Network, Error> {
	let valves = parsing::valves_from_lines(lines).map_err(Error::input)?;
	Network::new(valves).map_err(Error::input)
}


fn part1_impl(input_network: &Network) -> usize {
	input_network.best_plan(30).estimate
}

/// Two actors working 26 minutes: the best pair of disjoint valve sets.
fn part2_impl(input_network: &Network) -> usize {
	use rayon::prelude::{IntoParallelRefIterator as _, ParallelIterator as _};

	let best = input_network.best_per_opened(26).into_iter().collect::<Vec<_>>();
	best.par_iter()
		.map(|&(mine, released)| best.iter()
			.filter(|&&(theirs, _)| mine & theirs == 0)
			.map(|&(_, theirs)| released + theirs)
			.max()
			.unwrap_or(released))
		.max()
		.unwrap_or(0)
}

fn solve(lines: &[&str]) -> Result<Answers, Error> {
	let network = input_network(lines)?;
	Ok(answers(part1_impl(&network), part2_impl(&network)))
}


mod parsing {
	use std::{collections::HashMap, num::ParseIntError};
	use super::{Label, Valve};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct LabelError { column: usize, found: Option<u8> }

	fn label_from_str(s: &str) -> Result<Label, LabelError> {
		let mut bytes = s.bytes();
		match (bytes.next(), bytes.next(), bytes.next()) {
			(None, _, _) => Err(LabelError { column: 1, found: None }),
			(Some(b), _, _) if !b.is_ascii_uppercase() => Err(LabelError { column: 1, found: Some(b) }),
			(_, None, _) => Err(LabelError { column: 2, found: None }),
			(_, Some(b), _) if !b.is_ascii_uppercase() => Err(LabelError { column: 2, found: Some(b) }),
			(_, _, Some(b)) => Err(LabelError { column: 3, found: Some(b) }),
			(Some(b0), Some(b1), None) => Ok(Label((((b0 - b'A') as u16) << 8) + (b1 - b'A') as u16)),
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum ValveError {
		Format { expected: &'static str },
		Label(LabelError),
		FlowRate(ParseIntError),
		Tunnel { offset: usize, source: LabelError },
	}

	fn valve_from_str(s: &str) -> Result<(Label, Valve), ValveError> {
		use ValveError as E;
		macro_rules! expect { ( $split:expr, $expected:literal ) => {
			$split.ok_or(E::Format { expected: $expected })?
		} }

		let s = expect!(s.strip_prefix("Valve "), "Valve ");
		let (label, s) = expect!(s.split_once(" has flow rate="), " has flow rate=");
		let (flow_rate, s) = expect!(s.split_once("; "), "; ");
		let tunnels = expect!(s.strip_prefix("tunnels lead to valves ")
			.or_else(|| s.strip_prefix("tunnel leads to valve ")), "tunnel(s) lead(s) to valve(s) ");

		Ok((label_from_str(label).map_err(E::Label)?, Valve {
			flow_rate: flow_rate.parse().map_err(E::FlowRate)?,
			tunnels: tunnels.split(", ")
				.enumerate()
				.map(|(offset, t)| label_from_str(t).map_err(|source| E::Tunnel { offset, source }))
				.collect::<Result<_, _>>()?,
		}))
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum ValvesError {
		Valve { line: usize, source: ValveError },
		Duplicate { line: usize, label: Label },
	}

	pub(super) fn valves_from_lines(lines: &[&str]) -> Result<HashMap<Label, Valve>, ValvesError> {
		let mut valves = HashMap::with_capacity(lines.len());
		for (l, line) in lines.iter().enumerate() {
			let (label, valve) = valve_from_str(line)
				.map_err(|source| ValvesError::Valve { line: l + 1, source })?;
			if valves.insert(label, valve).is_some() {
				return Err(ValvesError::Duplicate { line: l + 1, label })
			}
		}
		Ok(valves)
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum NetworkError {
		NoOrigin,
		UnknownTunnel { from: Label, to: Label },
		TooManyValves(usize),
	}
}


impl std::fmt::Display for Label {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write as _;
		f.write_char((b'A' + (self.0 >> 8) as u8) as char)?;
		f.write_char((b'A' + (self.0 & 0x00ff) as u8) as char)
	}
}

impl std::fmt::Debug for Label {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "\"{self}\"")
	}
}

struct DisplayRoute<'r>(&'r [Label]);

impl std::fmt::Display for DisplayRoute<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use itertools::Itertools as _;
		if self.0.is_empty() { f.write_str("-") } else { write!(f, "{}", self.0.iter().join(",")) }
	}
}
