// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;
use crate::{error::Error, util::{answers, Answers, Solver}};


pub(crate) const SOLVERS: &[Solver] = &[solve];


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile { Void, Open, Wall }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn { Left, Right }

/// In clockwise order, each valued as it counts towards the password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Facing { Right = 0, Down = 1, Left = 2, Up = 3 }

impl Facing {
	const CLOCKWISE: [Facing; 4] = [Facing::Right, Facing::Down, Facing::Left, Facing::Up];

	fn turned(self, turn: Turn) -> Self {
		let quarters = match turn { Turn::Right => 1, Turn::Left => 3 };
		Self::CLOCKWISE[(self as usize + quarters) % 4]
	}

	fn reversed(self) -> Self {
		Self::CLOCKWISE[(self as usize + 2) % 4]
	}

	/// Row and column deltas.
	fn delta(self) -> [isize; 2] {
		match self { Facing::Right => [0, 1], Facing::Down => [1, 0], Facing::Left => [0, -1], Facing::Up => [-1, 0] }
	}
}

/// Row and column, both from 0.
type Pos = [usize; 2];

fn offset([row, col]: Pos, facing: Facing) -> Option<Pos> {
	let [dr, dc] = facing.delta();
	Some([row.checked_add_signed(dr)?, col.checked_add_signed(dc)?])
}

struct Board {
	tiles: Vec<Tile>,
	width: usize,
	height: usize,
}

impl Board {
	fn tile(&self, [row, col]: Pos) -> Tile {
		if row >= self.height || col >= self.width { return Tile::Void }
		self.tiles[row * self.width + col]
	}

	fn start(&self) -> Option<Pos> {
		(0..self.width).map(|col| [0, col]).find(|&pos| self.tile(pos) == Tile::Open)
	}
}

/// Where a step leads, including off the edge of the map.
trait Edges {
	fn step(&self, board: &Board, pos: Pos, facing: Facing) -> (Pos, Facing);
}

/// Stepping off an edge wraps around to the opposite edge of the same row or column.
struct Flat;

impl Edges for Flat {
	fn step(&self, board: &Board, pos: Pos, facing: Facing) -> (Pos, Facing) {
		if let Some(next) = offset(pos, facing).filter(|&next| board.tile(next) != Tile::Void) {
			return (next, facing)
		}
		let back = facing.reversed();
		let mut wrapped = pos;
		while let Some(next) = offset(wrapped, back).filter(|&next| board.tile(next) != Tile::Void) {
			wrapped = next;
		}
		(wrapped, facing)
	}
}

type Vec3 = [i32; 3];

fn neg(v: Vec3) -> Vec3 { v.map(|c| -c) }

fn dot(a: Vec3, b: Vec3) -> i32 { a.iter().zip(b).map(|(a, b)| a * b).sum() }

fn total(vs: &[Vec3]) -> Vec3 { std::array::from_fn(|axis| vs.iter().map(|v| v[axis]).sum()) }

fn scaled(k: i32, v: Vec3) -> Vec3 { v.map(|c| k * c) }

/// How a face of the net lies on the cube: its outward normal, and the
/// directions its columns and rows increase in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame { normal: Vec3, right: Vec3, down: Vec3 }

impl Frame {
	fn towards(&self, facing: Facing) -> Vec3 {
		match facing {
			Facing::Right => self.right,
			Facing::Down => self.down,
			Facing::Left => neg(self.right),
			Facing::Up => neg(self.down),
		}
	}

	/// The frame of the face next to this one in the net, folded over the
	/// shared edge.
	fn folded(&self, facing: Facing) -> Frame {
		let Frame { normal, right, down } = *self;
		match facing {
			Facing::Right => Frame { normal: right, right: neg(normal), down },
			Facing::Down => Frame { normal: down, right, down: neg(normal) },
			Facing::Left => Frame { normal: neg(right), right: normal, down },
			Facing::Up => Frame { normal: neg(down), right, down: normal },
		}
	}
}

/// The map folded into a cube with faces `size` tiles wide. Positions on it
/// are doubled so that tile centers have whole coordinates, with the center
/// of the cube at the origin.
#[derive(Debug)]
struct Cube {
	size: usize,
	/// By the face's row and column in the net.
	frames: HashMap<[usize; 2], Frame>,
	faces: HashMap<Vec3, [usize; 2]>,
}

impl Cube {
	/// Walks the net outwards from its first face. `None` unless it has six
	/// square faces that fold onto different sides.
	fn fold(board: &Board) -> Option<Cube> {
		let tiles = board.tiles.iter().filter(|&&tile| tile != Tile::Void).count();
		let size = (1..).take_while(|size| 6 * size * size <= tiles).last()?;
		if 6 * size * size != tiles { return None }

		let is_face = |face: [usize; 2]| (0..size * size)
			.all(|i| board.tile([face[0] * size + i / size, face[1] * size + i % size]) != Tile::Void);
		let first = (0..board.width / size).map(|col| [0, col]).find(|&face| is_face(face))?;

		let mut frames = HashMap::from([(first, Frame { normal: [0, 0, 1], right: [1, 0, 0], down: [0, 1, 0] })]);
		let mut queue = std::collections::VecDeque::from([first]);
		while let Some(face) = queue.pop_front() {
			let frame = frames[&face];
			for facing in Facing::CLOCKWISE {
				let Some(next) = offset(face, facing) else { continue };
				if frames.contains_key(&next) || !is_face(next) { continue }
				frames.insert(next, frame.folded(facing));
				queue.push_back(next);
			}
		}

		let faces = frames.iter().map(|(&face, frame)| (frame.normal, face)).collect::<HashMap<_, _>>();
		(frames.len() == 6 && faces.len() == 6).then_some(Cube { size, frames, faces })
	}
}

impl Edges for Cube {
	/// Off the edge of a face, the tile across is half a tile along the
	/// direction of travel and half a tile into the cube, on the face whose
	/// normal is that direction. Travel continues straight into the cube,
	/// away from the old face's normal.
	fn step(&self, _board: &Board, [row, col]: Pos, facing: Facing) -> (Pos, Facing) {
		let n = self.size;
		let face = [row / n, col / n];
		if let Some(local) = offset([row % n, col % n], facing).filter(|local| local.iter().all(|&c| c < n)) {
			return ([face[0] * n + local[0], face[1] * n + local[1]], facing)
		}

		let frame = self.frames[&face];
		let (size, half) = (n as i32, n as i32 - 1);
		let doubled = |local: usize| 2 * local as i32 - half;
		let center = total(&[scaled(size, frame.normal), scaled(doubled(col % n), frame.right), scaled(doubled(row % n), frame.down)]);
		let travel = frame.towards(facing);
		let across = total(&[center, travel, neg(frame.normal)]);

		let next_face = self.faces[&travel];
		let next_frame = self.frames[&next_face];
		let local = |axis: Vec3| ((dot(across, axis) + half) / 2) as usize;
		let next_facing = Facing::CLOCKWISE.into_iter()
			.find(|&f| next_frame.towards(f) == neg(frame.normal))
			.unwrap_or(facing);
		([next_face[0] * n + local(next_frame.down), next_face[1] * n + local(next_frame.right)], next_facing)
	}
}

/// Moves along the path, stopping short of walls, and returns the password for
/// where it ends.
fn walk(board: &Board, path: &[(usize, Option<Turn>)], edges: &impl Edges) -> Option<usize> {
	let mut pos = board.start()?;
	let mut facing = Facing::Right;
	for &(steps, turn) in path {
		for _ in 0..steps {
			let (next, next_facing) = edges.step(board, pos, facing);
			if board.tile(next) == Tile::Wall { break }
			(pos, facing) = (next, next_facing);
		}
		if let Some(turn) = turn { facing = facing.turned(turn) }
	}
	tracing::debug!(?pos, ?facing);
	Some(1000 * (pos[0] + 1) + 4 * (pos[1] + 1) + facing as usize)
}


struct Notes {
	board: Board,
	path: Vec<(usize, Option<Turn>)>,
}

fn input_notes(lines: &[&str]) -> Result<Notes, Error> {
	parsing::notes_from_lines(lines).map_err(Error::input)
}


fn part1_impl(input_notes: &Notes) -> Result<usize, Error> {
	walk(&input_notes.board, &input_notes.path, &Flat).ok_or(Error::NoSolution("no open tile to start on"))
}

fn part2_impl(input_notes: &Notes) -> Result<usize, Error> {
	let cube = Cube::fold(&input_notes.board).ok_or(Error::NoSolution("map does not fold into a cube"))?;
	walk(&input_notes.board, &input_notes.path, &cube).ok_or(Error::NoSolution("no open tile to start on"))
}

fn solve(lines: &[&str]) -> Result<Answers, Error> {
	let notes = input_notes(lines)?;
	Ok(answers(part1_impl(&notes)?, part2_impl(&notes)?))
}


mod parsing {
	use std::num::ParseIntError;
	use super::{Board, Notes, Tile, Turn};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum NotesError {
		NoPath,
		EmptyMap,
		Tile { line: usize, column: usize, found: char },
		Steps { source: ParseIntError },
	}

	pub(super) fn notes_from_lines(lines: &[&str]) -> Result<Notes, NotesError> {
		let [map @ .., "", path] = lines else { return Err(NotesError::NoPath) };
		if map.is_empty() { return Err(NotesError::EmptyMap) }

		let width = map.iter().map(|line| line.chars().count()).max().unwrap_or(0);
		let mut tiles = Vec::with_capacity(width * map.len());
		for (l, line) in map.iter().enumerate() {
			for (c, chr) in line.chars().enumerate() {
				tiles.push(match chr {
					' ' => Tile::Void,
					'.' => Tile::Open,
					'#' => Tile::Wall,
					found => return Err(NotesError::Tile { line: l + 1, column: c + 1, found }),
				});
			}
			tiles.resize((l + 1) * width, Tile::Void);
		}
		let board = Board { tiles, width, height: map.len() };

		let path = path.split_inclusive(['L', 'R'])
			.map(|part| -> Result<(usize, Option<Turn>), NotesError> {
				let (steps, turn) = match part.as_bytes().last() {
					Some(b'L') => (&part[..part.len() - 1], Some(Turn::Left)),
					Some(b'R') => (&part[..part.len() - 1], Some(Turn::Right)),
					_ => (part, None),
				};
				Ok((steps.parse().map_err(|e| NotesError::Steps { source: e })?, turn))
			})
			.collect::<Result<_, _>>()?;

		Ok(Notes { board, path })
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		        ...#
		        .#..
		        #...
		        ....
		...#.......#
		........#...
		..#....#....
		..........#.
		        ...#....
		        .....#..
		        .#......
		        ......#.

		10R5L5R10L4R5L5
	" };

	/// Every tile of a cross-shaped net, folded into a unit cube.
	const CROSS: &str = indoc::indoc! { "
		 .
		...
		 .
		 .

		4
	" };

	#[test]
	fn example() {
		let notes = input_notes(&crate::input::lines(INPUT)).unwrap();
		assert_eq!((notes.board.width, notes.board.height), (16, 12));
		assert_eq!(notes.path.len(), 7);
		assert_eq!(notes.path[6], (5, None));
		assert_eq!(part1_impl(&notes).unwrap(), 6032);
		assert_eq!(part2_impl(&notes).unwrap(), 5031);
	}

	fn all_steps(cube: &Cube) -> impl Iterator<Item = (Pos, Facing)> + '_ {
		cube.frames.keys().flat_map(move |&[face_row, face_col]| {
			(0..cube.size * cube.size).flat_map(move |i| Facing::CLOCKWISE.map(|facing| {
				([face_row * cube.size + i / cube.size, face_col * cube.size + i % cube.size], facing)
			}))
		})
	}

	#[test]
	fn cube_steps_retrace() {
		for input in [INPUT, CROSS] {
			let notes = input_notes(&crate::input::lines(input)).unwrap();
			let cube = Cube::fold(&notes.board).unwrap();
			for (pos, facing) in all_steps(&cube) {
				let (next, next_facing) = cube.step(&notes.board, pos, facing);
				let (back, back_facing) = cube.step(&notes.board, next, next_facing.reversed());
				assert_eq!((back, back_facing.reversed()), (pos, facing));

				let mut around = (pos, facing);
				for _ in 0..4 * cube.size { around = cube.step(&notes.board, around.0, around.1) }
				assert_eq!(around, (pos, facing));
			}
		}
	}

	#[test]
	fn cross_net() {
		let lines = crate::input::lines(CROSS);
		assert_eq!(solve(&lines).unwrap(), answers(1008, 1008));
	}

	#[test]
	fn flat_wrapping() {
		let notes = input_notes(&["  .#", "  ..", "", "3"]).unwrap();
		assert_eq!(Flat.step(&notes.board, [0, 2], Facing::Left), ([0, 3], Facing::Left));
		assert_eq!(Flat.step(&notes.board, [1, 2], Facing::Up), ([0, 2], Facing::Up));
		assert_eq!(Flat.step(&notes.board, [0, 2], Facing::Up), ([1, 2], Facing::Up));
		assert!(Cube::fold(&notes.board).is_none());
		assert!(matches!(solve(&["  .#", "  ..", "", "3"]), Err(Error::NoSolution(_))));
	}

	#[test]
	fn malformed() {
		assert!(matches!(solve(&["...", "10R"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["", "10R"]), Err(Error::Input(_))));
		assert!(matches!(solve(&[".x.", "", "10R"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["...", "", "10X"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["...", "", "R10"]), Err(Error::Input(_))));
	}
}
