// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{error::Error, util::{answers, Answers, Solver}};


/// A sliding window with running counts first; checking every window anew as the alternative.
pub(crate) const SOLVERS: &[Solver] = &[solve, solve_windowed];


const PACKET_MARKER_LEN: usize = 4;
const MESSAGE_MARKER_LEN: usize = 14;


#[allow(dead_code)]
#[derive(Debug)]
enum MarkerError {
	NoMarker { len: usize },
}

/// Number of bytes read once the last `len` of them are all different.
/// Keeps a count per byte value and the number of values seen more than once
/// inside the window, updating both as the window slides.
fn marker_end(stream: &[u8], len: usize) -> Result<usize, MarkerError> {
	let mut counts = [0_u16; 256];
	let mut repeated = 0;
	for (i, &b) in stream.iter().enumerate() {
		counts[b as usize] += 1;
		if counts[b as usize] == 2 { repeated += 1 }
		if let Some(left) = i.checked_sub(len).map(|j| stream[j]) {
			counts[left as usize] -= 1;
			if counts[left as usize] == 1 { repeated -= 1 }
		}
		if i + 1 >= len && repeated == 0 { return Ok(i + 1) }
	}
	Err(MarkerError::NoMarker { len })
}

fn marker_end_windowed(stream: &[u8], len: usize) -> Result<usize, MarkerError> {
	use itertools::Itertools as _;
	stream.windows(len)
		.position(|window| window.iter().all_unique())
		.map(|start| start + len)
		.ok_or(MarkerError::NoMarker { len })
}


fn input_stream<'l>(lines: &[&'l str]) -> Result<&'l [u8], Error> {
	match lines {
		[line] if !line.is_empty() => Ok(line.as_bytes()),
		_ => Err(Error::Input(format!("expected a single line, found {}", lines.len()))),
	}
}


fn solve_with(lines: &[&str], marker_end: fn(&[u8], usize) -> Result<usize, MarkerError>) -> Result<Answers, Error> {
	let stream = input_stream(lines)?;
	Ok(answers(
		marker_end(stream, PACKET_MARKER_LEN).map_err(Error::input)?,
		marker_end(stream, MESSAGE_MARKER_LEN).map_err(Error::input)?,
	))
}

fn solve(lines: &[&str]) -> Result<Answers, Error> {
	solve_with(lines, marker_end)
}

fn solve_windowed(lines: &[&str]) -> Result<Answers, Error> {
	solve_with(lines, marker_end_windowed)
}


#[cfg(test)]
mod tests {
	use super::*;
	use test_case::test_case;

	#[test_case("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 7, 19)]
	#[test_case("bvwbjplbgvbhsrlpgdmjqwftvncz", 5, 23)]
	#[test_case("nppdvjthqldpwncqszvftbrmjlhg", 6, 23)]
	#[test_case("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 10, 29)]
	#[test_case("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 11, 26)]
	fn examples(stream: &str, packet: usize, message: usize) {
		assert_eq!(solve(&[stream]).unwrap(), answers(packet, message));
		assert_eq!(solve_windowed(&[stream]).unwrap(), answers(packet, message));
	}

	#[test]
	fn marker_at_start() {
		assert_eq!(marker_end(b"abcd", 4).unwrap(), 4);
		assert_eq!(marker_end_windowed(b"abcd", 4).unwrap(), 4);
		assert_eq!(marker_end(b"aabcd", 4).unwrap(), 5);
	}

	#[test]
	fn no_marker() {
		assert!(matches!(marker_end(b"abcabc", 4), Err(MarkerError::NoMarker { len: 4 })));
		assert!(matches!(marker_end_windowed(b"abc", 4), Err(MarkerError::NoMarker { len: 4 })));
		assert!(matches!(solve(&["abcd"]), Err(Error::Input(_))));
		assert!(matches!(solve(&["abcd", "efgh"]), Err(Error::Input(_))));
		assert!(matches!(solve(&[]), Err(Error::Input(_))));
	}
}
