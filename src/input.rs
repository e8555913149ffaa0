// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::path::Path;
use crate::error::Error;


pub(crate) fn read(path: &Path) -> Result<String, Error> {
	std::fs::read_to_string(path)
		.map_err(|source| Error::Io { path: path.to_owned(), source })
}

/// Splits `contents` into lines. A trailing `\r` is dropped from every line;
/// blank lines are kept, except that all trailing blank lines are removed.
pub(crate) fn lines(contents: &str) -> Vec<&str> {
	let mut lines = contents.split('\n')
		.map(|line| line.strip_suffix('\r').unwrap_or(line))
		.collect::<Vec<_>>();
	while lines.last().map_or(false, |line| line.is_empty()) { lines.pop(); }
	lines
}
