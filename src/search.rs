//! Logic of the [`Solver`] to find words on the board
//!
//! Paths are walked from the last letter of a word to its first, following the
//! reversed dictionary. The suffix is thus checked on the very first steps and
//! hopeless branches are cut early.

use crate::{
	board::{Board, ConfigurationError, Tile},
	trie::{SuffixTrie, TrieNode},
	words, InitializeError,
};
use std::{collections::HashSet, path::Path};

/// Every neighbour of a cell, diagonals included
const OFFSETS: [(isize, isize); 8] = [
	(-1, -1),
	(-1, 0),
	(-1, 1),
	(0, -1),
	(0, 1),
	(1, -1),
	(1, 0),
	(1, 1),
];

/// Finds dictionary words on a board
#[derive(Debug)]
pub struct Solver {
	trie: SuffixTrie,
	board: Board,
}

/// Constructors
impl Solver {
	#[must_use]
	pub const fn new(trie: SuffixTrie, board: Board) -> Self {
		Self { trie, board }
	}

	/// Loads the word list at `word_list` and the board file at `board`
	///
	/// # Errors
	///
	/// Will error if either file cannot be read or if the board is refused.
	pub fn from_files(
		word_list: &Path,
		board: &Path,
		max_uses_per_tile: u32,
	) -> Result<Self, InitializeError> {
		let trie = SuffixTrie::from_words(words::file(word_list)?);
		let content = std::fs::read_to_string(board)?;
		let board = Board::parse(max_uses_per_tile, &content)?;
		Ok(Self::new(trie, board))
	}

	/// Replaces the board, keeping the dictionary
	///
	/// # Errors
	///
	/// See [`Board::new`].
	pub fn setup_board<S: AsRef<str>>(
		&mut self,
		max_uses_per_tile: u32,
		rows: &[Vec<S>],
	) -> Result<(), ConfigurationError> {
		self.board = Board::new(max_uses_per_tile, rows)?;
		Ok(())
	}

	#[must_use]
	pub const fn board(&self) -> &Board {
		&self.board
	}

	#[must_use]
	pub const fn trie(&self) -> &SuffixTrie {
		&self.trie
	}
}

/// Methods for querying the board
impl Solver {
	/// Returns every distinct dictionary word that ends in `suffix`, is longer
	/// than it, and can be spelled along adjacent tiles without using any tile
	/// more than the board allows.
	///
	/// An empty suffix matches every word.
	#[must_use]
	pub fn get_all_words(&self, suffix: &str) -> HashSet<String> {
		let mut session = Session::new(&self.board, suffix);

		for row in 0..self.board.size() {
			for col in 0..self.board.size() {
				session.explore(row, col, self.trie.root(), TileStep::Single);
			}
		}

		log::debug!(
			"found {} word(s) ending in `{suffix}`",
			session.found.len()
		);
		session.found
	}
}

/// Where the path stands on a two-letter tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TileStep {
	Single,
	/// The second letter of the current tile is consumed, the first is due
	/// on the same cell
	AwaitingSecondHalf,
}

/// Per-query search state
struct Session<'a> {
	board: &'a Board,
	/// Suffix, last letter first
	suffix: Vec<char>,
	/// Remaining uses of every tile, row major
	uses: Vec<u32>,
	/// Word under construction, last letter first
	word: Vec<char>,
	found: HashSet<String>,
}

impl<'a> Session<'a> {
	fn new(board: &'a Board, suffix: &str) -> Self {
		let size = board.size();
		Self {
			board,
			suffix: suffix.chars().rev().collect(),
			uses: vec![board.max_uses_per_tile(); size * size],
			word: Vec::new(),
			found: HashSet::new(),
		}
	}

	fn explore(&mut self, row: usize, col: usize, node: &TrieNode, step: TileStep) {
		let Some(tile) = self.board.tile(row, col) else {
			return;
		};

		if node.is_leaf() {
			return;
		}

		// Words are built backwards, so a two-letter tile gives its second
		// letter first
		let (letter, step) = match (tile, step) {
			(Tile::Single(a), _) => (a, TileStep::Single),
			(Tile::Double(_, b), TileStep::Single) => (b, TileStep::AwaitingSecondHalf),
			(Tile::Double(a, _), TileStep::AwaitingSecondHalf) => (a, TileStep::Single),
		};

		let Some(node) = node.child(letter) else {
			return;
		};

		let cell = row * self.board.size() + col;
		if self.uses[cell] == 0 {
			return;
		}

		if let Some(&expected) = self.suffix.get(self.word.len()) {
			if expected != letter {
				return;
			}
		}

		// Choose
		self.word.push(letter);
		let completes_tile = step == TileStep::Single;
		if completes_tile {
			self.uses[cell] -= 1;

			if node.is_terminal() && self.word.len() > self.suffix.len() {
				let word = self.word.iter().rev().collect::<String>();
				log::trace!("found `{word}`");
				self.found.insert(word);
			}
		}

		// Explore
		if completes_tile {
			for (dr, dc) in OFFSETS {
				if let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
				{
					self.explore(r, c, node, step);
				}
			}
		} else {
			self.explore(row, col, node, step);
		}

		// Unchoose
		self.word.pop();
		if completes_tile {
			self.uses[cell] += 1;
		}
	}
}
