// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// One part's answer. Most are numbers; some puzzles ask for text (crate
/// labels, a picture on a screen).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Answer {
	Number(i64),
	Text(String),
}

impl Answer {
	pub(crate) fn is_multiline(&self) -> bool {
		matches!(self, Answer::Text(text) if text.contains('\n'))
	}
}

impl std::fmt::Display for Answer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Answer::Number(number) => write!(f, "{number}"),
			Answer::Text(text) => f.write_str(text),
		}
	}
}

macro_rules! impl_answer_from_int { ( $( $int:ty ),+ ) => { $(
	impl From<$int> for Answer {
		/// Falls back to text for numbers that do not fit an `i64`.
		fn from(number: $int) -> Self {
			i64::try_from(number).map_or_else(|_| Answer::Text(number.to_string()), Answer::Number)
		}
	}
)+ } }

impl_answer_from_int!(i32, i64, u32, u64, usize);

impl From<String> for Answer {
	fn from(text: String) -> Self { Answer::Text(text) }
}

impl From<&str> for Answer {
	fn from(text: &str) -> Self { Answer::Text(text.to_owned()) }
}

pub(crate) type Answers = (Answer, Answer);

pub(crate) fn answers(part1: impl Into<Answer>, part2: impl Into<Answer>) -> Answers {
	(part1.into(), part2.into())
}

/// A day's solver: takes the normalized input lines, returns both parts' answers.
pub(crate) type Solver = fn(&[&str]) -> Result<Answers, crate::error::Error>;


/// Declares the `dayNN` modules and generates `solvers(day)`, which maps a
/// day number to that day's `SOLVERS` (canonical solver first).
macro_rules! mod_days { ( $( $day:literal ),+ $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )+

	fn solvers(day: u8) -> Option<&'static [crate::util::Solver]> {
		match day {
			$( $day => Some([<day $day>]::SOLVERS), )+
			_ => None,
		}
	}
} } }

pub(crate) use mod_days;


/// Inserts `item` into `items`, which must already be sorted ascending by
/// `key`, keeping it sorted. Equal keys go before existing ones.
pub(crate) fn sorted_insert_by_key<T, K: Ord>(items: &mut Vec<T>, item: T, key: impl Fn(&T) -> K) {
	let item_key = key(&item);
	let index = items.partition_point(|existing| key(existing) < item_key);
	items.insert(index, item);
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sorted_insert_keeps_order() {
		let mut items = vec![];
		for item in [5, 1, 4, 1, 3, 9] {
			sorted_insert_by_key(&mut items, item, |&i| i);
		}
		assert_eq!(items, [1, 1, 3, 4, 5, 9]);
	}

	#[test]
	fn sorted_insert_by_reverse_key() {
		let mut items = vec![];
		for (label, rate) in [("BB", 13), ("CC", 2), ("DD", 20), ("JJ", 21)] {
			sorted_insert_by_key(&mut items, (label, rate), |&(_, rate)| std::cmp::Reverse(rate));
		}
		assert_eq!(items.iter().map(|(l, _)| *l).collect::<Vec<_>>(), ["JJ", "DD", "BB", "CC"]);
	}

	#[test]
	fn answers_display() {
		let (part1, part2) = answers(24_000_u64, "CMZ");
		assert_eq!(part1, Answer::Number(24_000));
		assert_eq!(format!("{part1} {part2}"), "24000 CMZ");
		assert_eq!(Answer::from(-3_i64).to_string(), "-3");
		assert_eq!(Answer::from(u64::MAX), Answer::Text("18446744073709551615".into()));
		assert!(Answer::from("#.\n.#").is_multiline());
		assert!(!part2.is_multiline());
	}
}
