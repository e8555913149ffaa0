// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::path::PathBuf;


#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error("could not read {}: {source}", .path.display())]
	Io { path: PathBuf, #[source] source: std::io::Error },

	#[error("day {day} has no solver (variant {variant})")]
	Unsolved { day: u8, variant: usize },

	#[error("malformed input: {0}")]
	Input(String),

	#[error("destination is unreachable")]
	Unreachable,

	#[error("no solution: {0}")]
	NoSolution(&'static str),
}

impl Error {
	/// Wraps a day's parsing error, which only guarantees [`Debug`](std::fmt::Debug).
	pub(crate) fn input(err: impl std::fmt::Debug) -> Self {
		Error::Input(format!("{err:?}"))
	}
}
