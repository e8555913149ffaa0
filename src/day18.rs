// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;
use crate::{error::Error, util::{answers, Answers, Solver}};


pub(crate) const SOLVERS: &[Solver] = &[solve];


type Cube = [i32; 3];

fn neighbors([x, y, z]: Cube) -> [Cube; 6] {
	[[x - 1, y, z], [x + 1, y, z], [x, y - 1, z], [x, y + 1, z], [x, y, z - 1], [x, y, z + 1]]
}

struct Droplet {
	cubes: HashSet<Cube>,
	/// One beyond the outermost cubes on every side.
	min: Cube,
	max: Cube,
}

impl Droplet {
	fn new(cubes: HashSet<Cube>) -> Self {
		let bound = |f: fn(i32, i32) -> i32, init: i32| -> Cube {
			std::array::from_fn(|axis| cubes.iter().map(|cube| cube[axis]).fold(init, f))
		};
		let (min, max) = (bound(i32::min, i32::MAX), bound(i32::max, i32::MIN));
		Droplet { min: min.map(|c| c - 1), max: max.map(|c| c + 1), cubes }
	}

	fn contains(&self, cube: &Cube) -> bool {
		(0..3).all(|axis| (self.min[axis]..=self.max[axis]).contains(&cube[axis]))
	}

	fn surface_area(&self) -> usize {
		self.cubes.iter()
			.flat_map(|&cube| neighbors(cube))
			.filter(|neighbor| !self.cubes.contains(neighbor))
			.count()
	}

	/// Floods the air around the droplet from a corner of the bounding box,
	/// counting each face of lava the water touches.
	fn exterior_surface_area(&self) -> usize {
		let mut water = HashSet::from([self.min]);
		let mut frontier = vec![self.min];
		let mut faces = 0;
		while let Some(cube) = frontier.pop() {
			for neighbor in neighbors(cube) {
				if self.cubes.contains(&neighbor) {
					faces += 1;
				} else if self.contains(&neighbor) && water.insert(neighbor) {
					frontier.push(neighbor);
				}
			}
		}
		tracing::debug!(water = water.len(), faces);
		faces
	}
}


fn input_droplet(lines: &[&str]) -> Result<Droplet, Error> {
	let cubes = parsing::cubes_from_lines(lines).collect::<Result<_, _>>().map_err(Error::input)?;
	Ok(Droplet::new(cubes))
}


fn part1_impl(input_droplet: &Droplet) -> usize {
	input_droplet.surface_area()
}

fn part2_impl(input_droplet: &Droplet) -> usize {
	input_droplet.exterior_surface_area()
}

fn solve(lines: &[&str]) -> Result<Answers, Error> {
	let droplet = input_droplet(lines)?;
	Ok(answers(part1_impl(&droplet), part2_impl(&droplet)))
}


mod parsing {
	use std::num::ParseIntError;
	use super::Cube;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum CubeError {
		Coords { line: usize, found: usize },
		Coord { line: usize, source: ParseIntError },
	}

	pub(super) fn cubes_from_lines<'l>(lines: &'l [&str])
	-> impl Iterator<Item = Result<Cube, CubeError>> + 'l {
		lines.iter().enumerate().map(|(l, line)| -> Result<Cube, CubeError> {
			let coords = line.split(',')
				.map(|c| c.parse().map_err(|e| CubeError::Coord { line: l + 1, source: e }))
				.collect::<Result<Vec<i32>, _>>()?;
			Cube::try_from(coords.as_slice()).map_err(|_| CubeError::Coords { line: l + 1, found: coords.len() })
		})
	}
}
