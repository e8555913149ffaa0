// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{error::Error, util::{answers, Answers, Solver}};


pub(crate) const SOLVERS: &[Solver] = &[solve];


const SCREEN_WIDTH: usize = 40;
const SCREEN_HEIGHT: usize = 6;
const SAMPLED_CYCLES: [usize; 6] = [20, 60, 100, 140, 180, 220];


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instr {
	Noop,
	AddX(i32),
}

impl Instr {
	fn cycles(self) -> usize {
		match self { Instr::Noop => 1, Instr::AddX(_) => 2 }
	}
}

/// Value of the `X` register during each cycle, the first cycle at index 0.
fn register_trace(instrs: &[Instr]) -> Vec<i32> {
	let mut x = 1;
	let mut trace = Vec::with_capacity(instrs.len() * 2);
	for &instr in instrs {
		trace.extend(std::iter::repeat(x).take(instr.cycles()));
		if let Instr::AddX(v) = instr { x += v }
	}
	trace
}

struct Screen([[bool; SCREEN_WIDTH]; SCREEN_HEIGHT]);

impl Screen {
	/// Lights each pixel whose column is within one of the sprite (the `X`
	/// register) while it is drawn. Pixels past the end of `trace` stay dark.
	fn draw(trace: &[i32]) -> Self {
		let mut pixels = [[false; SCREEN_WIDTH]; SCREEN_HEIGHT];
		for (cycle, &sprite) in trace.iter().enumerate().take(SCREEN_WIDTH * SCREEN_HEIGHT) {
			let column = (cycle % SCREEN_WIDTH) as i32;
			pixels[cycle / SCREEN_WIDTH][cycle % SCREEN_WIDTH] = (sprite - column).abs() <= 1;
		}
		Screen(pixels)
	}
}

impl std::fmt::Display for Screen {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for (r, row) in self.0.iter().enumerate() {
			if r > 0 { writeln!(f)? }
			for &lit in row { f.write_str(if lit { "#" } else { "." })? }
		}
		Ok(())
	}
}


fn input_trace(lines: &[&str]) -> Result<Vec<i32>, Error> {
	let instrs = parsing::instrs_from_lines(lines).collect::<Result<Vec<_>, _>>().map_err(Error::input)?;
	Ok(register_trace(&instrs))
}


/// Sum of signal strengths at the sampled cycles the program reaches.
fn part1_impl(input_trace: &[i32]) -> i64 {
	SAMPLED_CYCLES.iter()
		.filter_map(|&cycle| input_trace.get(cycle - 1).map(|&x| cycle as i64 * x as i64))
		.sum()
}

fn part2_impl(input_trace: &[i32]) -> String {
	Screen::draw(input_trace).to_string()
}

fn solve(lines: &[&str]) -> Result<Answers, Error> {
	let trace = input_trace(lines)?;
	Ok(answers(part1_impl(&trace), part2_impl(&trace)))
}


mod parsing {
	use std::num::ParseIntError;
	use super::Instr;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum InstrError {
		Unknown { line: usize },
		AddX { line: usize, source: ParseIntError },
	}

	pub(super) fn instrs_from_lines<'l>(lines: &'l [&str])
	-> impl Iterator<Item = Result<Instr, InstrError>> + 'l {
		lines.iter().enumerate().map(|(l, &line)| match line.split_once(' ') {
			None if line == "noop" => Ok(Instr::Noop),
			Some(("addx", v)) => v.parse().map(Instr::AddX)
				.map_err(|e| InstrError::AddX { line: l + 1, source: e }),
			_ => Err(InstrError::Unknown { line: l + 1 }),
		})
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn short_program() {
		let trace = input_trace(&["noop", "addx 3", "addx -5"]).unwrap();
		assert_eq!(trace, [1, 1, 1, 4, 4]);
		assert_eq!(part1_impl(&trace), 0);
		assert_eq!(part2_impl(&trace).lines().next(), Some("#####..................................."));
		assert!(part2_impl(&trace).lines().skip(1).all(|row| !row.contains('#')));
	}

	#[test]
	fn idle_program() {
		let lines = vec!["noop"; 240];
		let (part1, part2) = solve(&lines).unwrap();
		assert_eq!(part1, crate::util::Answer::Number(720));
		assert!(part2.is_multiline());
		assert_eq!(part2.to_string(), ["###....................................."; 6].join("\n"));
	}

	#[test]
	fn oscillating_program() {
		let lines = ["addx 2", "addx -2"].repeat(60);
		let trace = input_trace(&lines).unwrap();
		assert_eq!(part1_impl(&trace), 2160);
		assert_eq!(part2_impl(&trace), ["####...................................."; 6].join("\n"));
	}

	#[test]
	fn climbing_program() {
		let lines = vec!["addx 1"; 120];
		let trace = input_trace(&lines).unwrap();
		assert_eq!(part1_impl(&trace), 57200);
		assert_eq!(part2_impl(&trace), indoc::indoc! { "
			#####...................................
			.......................................#
			........................................
			........................................
			........................................
			........................................" });
	}

	#[test]
	fn malformed() {
		assert!(matches!(solve(&["nop"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["addx"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["addx x"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["noop 1"]), Err(Error::Input(_))));
	}
}
