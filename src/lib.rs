//! boggled
//!
//! Finds the words ending in a given suffix on a boggle-like board where tiles
//! may carry two letters and may be reused a bounded number of times.
//!
//! ```
//! use boggled::{Board, Solver, SuffixTrie};
//!
//! let trie = SuffixTrie::from_words(["quack", "this"]);
//! let board = Board::new(1, &[vec!["qu", "a"], vec!["c", "k"]])?;
//! let solver = Solver::new(trie, board);
//!
//! assert!(solver.get_all_words("ck").contains("quack"));
//! # Ok::<(), boggled::ConfigurationError>(())
//! ```

mod board;
mod search;
mod trie;
pub mod words;

pub use board::{Board, ConfigurationError, Tile};
pub use search::Solver;
pub use trie::{SuffixTrie, TrieNode};
pub use words::SourceError;

use std::io;

/// Ways loading a [`Solver`] from files could go wrong
#[derive(Debug, thiserror::Error)]
pub enum InitializeError {
	#[error(transparent)]
	Source(#[from] SourceError),

	#[error(transparent)]
	Configuration(#[from] ConfigurationError),

	/// Could not correctly open the board file
	#[error(transparent)]
	Io(#[from] io::Error),
}
