// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::cmp::Ordering;
use crate::{error::Error, util::{answers, Answers, Solver}};


/// Counts packets below each divider first; sorting every packet as the alternative.
pub(crate) const SOLVERS: &[Solver] = &[solve, solve_sorted];


#[derive(Debug, Clone)]
enum Packet {
	Int(u32),
	List(Vec<Packet>),
}

impl Packet {
	fn divider(value: u32) -> Self {
		Packet::List(vec![Packet::List(vec![Packet::Int(value)])])
	}
}

/// A lone integer compares as a one-item list, so `[[2]]` equals `[2]`.
impl Ord for Packet {
	fn cmp(&self, other: &Self) -> Ordering {
		use Packet::*;
		match (self, other) {
			(Int(left), Int(right)) => left.cmp(right),
			(List(left), List(right)) => left.cmp(right),
			(Int(_), List(right)) => std::slice::from_ref(self).cmp(right),
			(List(left), Int(_)) => left.as_slice().cmp(std::slice::from_ref(other)),
		}
	}
}

impl PartialOrd for Packet {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl PartialEq for Packet {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for Packet {}


fn input_pairs(lines: &[&str]) -> Result<Vec<[Packet; 2]>, Error> {
	parsing::pairs_from_lines(lines).map_err(Error::input)
}


/// Sum of the 1-based indices of pairs that are already in order.
fn part1_impl(input_pairs: &[[Packet; 2]]) -> usize {
	input_pairs.iter()
		.enumerate()
		.filter(|(_, [left, right])| left < right)
		.map(|(i, _)| i + 1)
		.sum()
}

/// Each divider's 1-based position in the sorted packets is one more than the
/// number of packets (the other divider included) below it.
fn part2_impl(input_pairs: &[[Packet; 2]]) -> usize {
	let dividers = [Packet::divider(2), Packet::divider(6)];
	let packets = input_pairs.iter().flatten().chain(&dividers);
	let mut positions = [1, 1];
	for packet in packets {
		for (position, divider) in positions.iter_mut().zip(&dividers) {
			if packet < divider { *position += 1 }
		}
	}
	positions.iter().product()
}

fn part2_sorted(input_pairs: &[[Packet; 2]]) -> usize {
	let dividers = [Packet::divider(2), Packet::divider(6)];
	let mut packets = input_pairs.iter().flatten().chain(&dividers).collect::<Vec<_>>();
	packets.sort();
	dividers.iter()
		.filter_map(|divider| packets.iter().position(|&packet| std::ptr::eq(packet, divider)))
		.map(|i| i + 1)
		.product()
}

fn solve(lines: &[&str]) -> Result<Answers, Error> {
	let pairs = input_pairs(lines)?;
	Ok(answers(part1_impl(&pairs), part2_impl(&pairs)))
}

fn solve_sorted(lines: &[&str]) -> Result<Answers, Error> {
	let pairs = input_pairs(lines)?;
	Ok(answers(part1_impl(&pairs), part2_sorted(&pairs)))
}


mod parsing {
	use std::num::ParseIntError;
	use super::Packet;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum PacketError {
		Int { column: usize, source: ParseIntError },
		InvalidByte { column: usize, found: u8 },
		Unterminated,
		Trailing { column: usize },
	}

	/// Recursive descent over the bytes of one line.
	struct Cursor<'s> { bytes: &'s [u8], at: usize }

	impl Cursor<'_> {
		fn peek(&self) -> Option<u8> {
			self.bytes.get(self.at).copied()
		}

		fn packet(&mut self) -> Result<Packet, PacketError> {
			match self.peek() {
				Some(b'[') => {
					self.at += 1;
					let mut items = vec![];
					if self.peek() == Some(b']') {
						self.at += 1;
						return Ok(Packet::List(items))
					}
					loop {
						items.push(self.packet()?);
						match self.peek() {
							Some(b',') => self.at += 1,
							Some(b']') => { self.at += 1; return Ok(Packet::List(items)) }
							Some(found) => return Err(PacketError::InvalidByte { column: self.at + 1, found }),
							None => return Err(PacketError::Unterminated),
						}
					}
				}
				Some(b'0'..=b'9') => {
					let start = self.at;
					while matches!(self.peek(), Some(b'0'..=b'9')) { self.at += 1 }
					// Only ASCII digits between `start` and `self.at`
					let digits = std::str::from_utf8(&self.bytes[start..self.at]).unwrap_or_default();
					digits.parse().map(Packet::Int)
						.map_err(|e| PacketError::Int { column: start + 1, source: e })
				}
				Some(found) => Err(PacketError::InvalidByte { column: self.at + 1, found }),
				None => Err(PacketError::Unterminated),
			}
		}
	}

	fn packet_from_str(s: &str) -> Result<Packet, PacketError> {
		let mut cursor = Cursor { bytes: s.as_bytes(), at: 0 };
		let packet = cursor.packet()?;
		if cursor.at < s.len() { return Err(PacketError::Trailing { column: cursor.at + 1 }) }
		Ok(packet)
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum PairsError {
		Packet { line: usize, source: PacketError },
		ExpectedBlank { line: usize },
		UnpairedPacket { line: usize },
		Empty,
	}

	/// Pairs are two packet lines, separated from the next pair by a blank line.
	pub(super) fn pairs_from_lines(lines: &[&str]) -> Result<Vec<[Packet; 2]>, PairsError> {
		if lines.is_empty() { return Err(PairsError::Empty) }
		lines.chunks(3)
			.enumerate()
			.map(|(p, chunk)| -> Result<[Packet; 2], PairsError> {
				let l = p * 3;
				let packet = |i: usize| packet_from_str(chunk[i])
					.map_err(|e| PairsError::Packet { line: l + i + 1, source: e });
				match chunk {
					[_] => Err(PairsError::UnpairedPacket { line: l + 1 }),
					[_, _, blank] if !blank.is_empty() => Err(PairsError::ExpectedBlank { line: l + 3 }),
					_ => Ok([packet(0)?, packet(1)?]),
				}
			})
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use test_case::test_case;

	fn packet(s: &str) -> Packet {
		input_pairs(&[s, s]).unwrap().remove(0)[0].clone()
	}

	const INPUT: &str = indoc::indoc! { "
		[1,1,3,1,1]
		[1,1,5,1,1]

		[[1],[2,3,4]]
		[[1],4]

		[9]
		[[8,7,6]]

		[[4,4],4,4]
		[[4,4],4,4,4]

		[7,7,7,7]
		[7,7,7]

		[]
		[3]

		[[[]]]
		[[]]

		[1,[2,[3,[4,[5,6,7]]]],8,9]
		[1,[2,[3,[4,[5,6,0]]]],8,9]
	" };

	#[test]
	fn example() {
		let lines = crate::input::lines(INPUT);
		let pairs = input_pairs(&lines).unwrap();
		assert_eq!(pairs.len(), 8);
		assert_eq!(part1_impl(&pairs), 13);
		assert_eq!(part2_impl(&pairs), 140);
		assert_eq!(solve(&lines).unwrap(), answers(13, 140));
		assert_eq!(solve_sorted(&lines).unwrap(), answers(13, 140));
	}

	#[test_case("[[2]]", "[2]", Ordering::Equal; "int as list")]
	#[test_case("[[]]", "[]", Ordering::Greater; "nested empty")]
	#[test_case("[]", "[[]]", Ordering::Less; "empty first")]
	#[test_case("[10]", "[9,9]", Ordering::Greater; "multi digit")]
	#[test_case("[[1],4]", "[1,[2]]", Ordering::Greater; "mixed depths")]
	fn ordering(left: &str, right: &str, expected: Ordering) {
		assert_eq!(packet(left).cmp(&packet(right)), expected);
		assert_eq!(packet(right).cmp(&packet(left)), expected.reverse());
	}

	#[test]
	fn malformed() {
		assert!(matches!(solve(&["[1,2]"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["[1,2]", "[3]", "[4]"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["[1,2", "[3]"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["[1,2]]", "[3]"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["[1;2]", "[3]"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["[99999999999]", "[3]"]), Err(Error::Input(_))));
		assert!(matches!(solve(&[]), Err(Error::Input(_))));
	}
}
