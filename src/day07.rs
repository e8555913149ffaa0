// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;
use crate::{error::Error, util::{answers, Answers, Solver}};


pub(crate) const SOLVERS: &[Solver] = &[solve];


const SMALL_DIR_LIMIT: u64 = 100_000;
const DISK_SIZE: u64 = 70_000_000;
const SPACE_NEEDED: u64 = 30_000_000;


#[derive(Default)]
struct Dir<'s> {
	parent: Option<usize>,
	dirs: HashMap<&'s str, usize>,
	files: HashMap<&'s str, u64>,
}

/// Directories in the order they were first seen, so a parent always comes
/// before its children. Index 0 is the root.
struct FileSystem<'s>(Vec<Dir<'s>>);

impl<'s> FileSystem<'s> {
	fn new() -> Self {
		FileSystem(vec![Dir::default()])
	}

	/// The child directory `name` of `dir`, created when not seen before.
	fn subdir(&mut self, dir: usize, name: &'s str) -> usize {
		if let Some(&child) = self.0[dir].dirs.get(name) { return child }
		let child = self.0.len();
		self.0.push(Dir { parent: Some(dir), ..Dir::default() });
		self.0[dir].dirs.insert(name, child);
		child
	}

	/// Total size of every directory, indexed like `self.0`. Listing the same
	/// directory twice does not count its files twice.
	fn sizes(&self) -> Vec<u64> {
		let mut sizes = self.0.iter().map(|dir| dir.files.values().sum()).collect::<Vec<u64>>();
		for (i, dir) in self.0.iter().enumerate().skip(1).rev() {
			if let Some(parent) = dir.parent { sizes[parent] += sizes[i] }
		}
		sizes
	}
}


fn input_sizes(lines: &[&str]) -> Result<Vec<u64>, Error> {
	let file_system = parsing::file_system_from_lines(lines).map_err(Error::input)?;
	tracing::debug!(dirs = file_system.0.len(), "replayed terminal output");
	Ok(file_system.sizes())
}


fn part1_impl(input_sizes: &[u64]) -> u64 {
	input_sizes.iter().filter(|&&size| size <= SMALL_DIR_LIMIT).sum()
}

/// Smallest directory that frees enough space when deleted.
fn part2_impl(input_sizes: &[u64]) -> u64 {
	let used = input_sizes[0];
	let to_free = (used + SPACE_NEEDED).saturating_sub(DISK_SIZE);
	input_sizes.iter().copied().filter(|&size| size >= to_free).min().unwrap_or(used)
}

fn solve(lines: &[&str]) -> Result<Answers, Error> {
	let sizes = input_sizes(lines)?;
	Ok(answers(part1_impl(&sizes), part2_impl(&sizes)))
}


mod parsing {
	use std::num::ParseIntError;
	use super::FileSystem;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum TerminalError<'s> {
		AboveRoot { line: usize },
		UnknownCommand { line: usize, command: &'s str },
		OutputOutsideListing { line: usize },
		FileSize { line: usize, source: ParseIntError },
		Entry { line: usize },
	}

	pub(super) fn file_system_from_lines<'s>(lines: &[&'s str]) -> Result<FileSystem<'s>, TerminalError<'s>> {
		use TerminalError as E;

		let mut file_system = FileSystem::new();
		let mut cwd = 0;
		let mut listing = false;

		for (l, &line) in lines.iter().enumerate() {
			if let Some(command) = line.strip_prefix("$ ") {
				listing = false;
				match command.split_once(' ') {
					None if command == "ls" => listing = true,
					Some(("cd", "/")) => cwd = 0,
					Some(("cd", "..")) =>
						cwd = file_system.0[cwd].parent.ok_or(E::AboveRoot { line: l + 1 })?,
					Some(("cd", name)) => cwd = file_system.subdir(cwd, name),
					_ => return Err(E::UnknownCommand { line: l + 1, command }),
				}
				continue
			}

			if !listing { return Err(E::OutputOutsideListing { line: l + 1 }) }
			match line.split_once(' ') {
				Some(("dir", name)) => _ = file_system.subdir(cwd, name),
				Some((size, name)) if !name.is_empty() => {
					let size = size.parse().map_err(|e| E::FileSize { line: l + 1, source: e })?;
					file_system.0[cwd].files.insert(name, size);
				}
				_ => return Err(E::Entry { line: l + 1 }),
			}
		}

		Ok(file_system)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn example() {
		const INPUT: &str = indoc::indoc! { "
			$ cd /
			$ ls
			dir a
			14848514 b.txt
			8504156 c.dat
			dir d
			$ cd a
			$ ls
			dir e
			29116 f
			2557 g
			62596 h.lst
			$ cd e
			$ ls
			584 i
			$ cd ..
			$ cd ..
			$ cd d
			$ ls
			4060174 j
			8033020 d.log
			5626152 d.ext
			7214296 k
		" };
		let sizes = input_sizes(&crate::input::lines(INPUT)).unwrap();
		assert_eq!(sizes, [48381165, 94853, 24933642, 584]);
		assert_eq!(part1_impl(&sizes), 95437);
		assert_eq!(part2_impl(&sizes), 24933642);
	}

	#[test]
	fn relisting_and_unlisted_cd() {
		let lines = ["$ cd /", "$ ls", "10 a", "$ cd x", "$ ls", "5 b", "$ cd /", "$ ls", "10 a", "dir x"];
		let sizes = input_sizes(&lines).unwrap();
		assert_eq!(sizes, [15, 5]);
		assert_eq!(solve(&lines).unwrap(), answers(20, 5));
	}

	#[test]
	fn plenty_of_space() {
		assert_eq!(part2_impl(&[1_000, 10]), 10);
	}

	#[test]
	fn malformed() {
		assert!(matches!(solve(&["$ cd ..", "$ cd .."]), Err(Error::Input(_))));
		assert!(matches!(solve(&["$ cd /", "$ dir"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["$ cd /", "10 a"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["$ ls", "ten a"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["$ ls", "10"]), Err(Error::Input(_))));
	}
}
