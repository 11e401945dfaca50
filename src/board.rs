//! Square grid of tiles and its reuse budget

use nom::{
	bytes::complete::take_while1,
	character::complete::{space0, space1},
	multi::separated_list1,
	sequence::delimited,
	IResult, Parser,
};
use nom_supreme::ParserExt;
use std::fmt;

/// Ways a board setup is refused
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
	#[error("board has no tiles")]
	EmptyBoard,

	/// Every row must be as long as there are rows
	#[error("board is not square: row {row} has {found} tiles, expected {expected}")]
	NotSquare {
		row: usize,
		expected: usize,
		found: usize,
	},

	#[error("tiles must be usable at least once")]
	NoUses,

	/// Labels are one or two characters long
	#[error("tile at ({row}, {col}) has invalid label `{label}`")]
	InvalidLabel {
		row: usize,
		col: usize,
		label: String,
	},

	/// Could not parse a board file
	#[error("could not parse board: {0}")]
	Parser(String),
}

/// Label printed on a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
	Single(char),
	/// e.g. `qu`, read left to right in the spelled word
	Double(char, char),
}

impl Tile {
	fn from_label(label: &str) -> Option<Self> {
		let mut chars = label.chars();
		match (chars.next(), chars.next(), chars.next()) {
			(Some(a), None, _) => Some(Self::Single(a)),
			(Some(a), Some(b), None) => Some(Self::Double(a, b)),
			_ => None,
		}
	}
}

impl fmt::Display for Tile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Single(a) => write!(f, "{a}"),
			Self::Double(a, b) => write!(f, "{a}{b}"),
		}
	}
}

/// Tiles of a square board and how many times each may be used in a word
#[derive(Debug, Clone)]
pub struct Board {
	tiles: Vec<Vec<Tile>>,
	max_uses_per_tile: u32,
}

impl Board {
	/// # Errors
	///
	/// Will error if the board is empty or not square, if `max_uses_per_tile`
	/// is zero or if a label is not one or two characters long.
	pub fn new<S: AsRef<str>>(
		max_uses_per_tile: u32,
		rows: &[Vec<S>],
	) -> Result<Self, ConfigurationError> {
		if max_uses_per_tile == 0 {
			return Err(ConfigurationError::NoUses);
		}

		let size = rows.len();
		if rows.first().map_or(true, Vec::is_empty) {
			return Err(ConfigurationError::EmptyBoard);
		}

		let mut tiles = Vec::with_capacity(size);
		for (row, labels) in rows.iter().enumerate() {
			if labels.len() != size {
				return Err(ConfigurationError::NotSquare {
					row,
					expected: size,
					found: labels.len(),
				});
			}

			let parsed = labels
				.iter()
				.enumerate()
				.map(|(col, label)| {
					let label = label.as_ref();
					Tile::from_label(label).ok_or_else(|| ConfigurationError::InvalidLabel {
						row,
						col,
						label: label.to_owned(),
					})
				})
				.collect::<Result<Vec<_>, _>>()?;
			tiles.push(parsed);
		}

		log::debug!("set up a {size}x{size} board, {max_uses_per_tile} use(s) per tile");
		Ok(Self {
			tiles,
			max_uses_per_tile,
		})
	}

	/// Reads a board written one row per line, tiles separated by blanks.
	/// Blank lines are ignored.
	///
	/// # Errors
	///
	/// Will error if a line cannot be parsed or if [`Board::new`] refuses the
	/// resulting grid.
	pub fn parse(max_uses_per_tile: u32, content: &str) -> Result<Self, ConfigurationError> {
		let rows = content
			.lines()
			.enumerate()
			.filter(|(_, line)| !line.trim().is_empty())
			.map(|(index, line)| {
				parse_row
					.all_consuming()
					.parse(line)
					.map(|(_, row)| row)
					.map_err(|e| ConfigurationError::Parser(format!("line {}: {e}", index + 1)))
			})
			.collect::<Result<Vec<_>, _>>()?;

		Self::new(max_uses_per_tile, &rows)
	}

	/// Side length
	#[must_use]
	pub fn size(&self) -> usize {
		self.tiles.len()
	}

	#[must_use]
	pub const fn max_uses_per_tile(&self) -> u32 {
		self.max_uses_per_tile
	}

	/// `None` when out of the board
	#[must_use]
	pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
		self.tiles.get(row).and_then(|r| r.get(col)).copied()
	}
}

impl fmt::Display for Board {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for row in &self.tiles {
			let mut tiles = row.iter();
			if let Some(first) = tiles.next() {
				write!(f, "{first}")?;
			}
			for tile in tiles {
				write!(f, " {tile}")?;
			}
			writeln!(f)?;
		}
		Ok(())
	}
}

fn parse_row(i: &str) -> IResult<&str, Vec<&str>> {
	delimited(
		space0,
		separated_list1(space1, take_while1(|c: char| !c.is_whitespace())),
		space0,
	)(i)
}
