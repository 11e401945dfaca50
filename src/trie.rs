//! Dictionary stored as a trie of reversed words
//!
//! Walking down from the root reads a word from its last letter to its first,
//! which turns "does a word end in this suffix" into a prefix walk.

use std::collections::HashMap;

/// Set of words, stored last letter first
#[derive(Debug, Default)]
pub struct SuffixTrie {
	root: TrieNode,
	len: usize,
}

/// One letter of a reversed word
#[derive(Debug, Default)]
pub struct TrieNode {
	/// `None` only for the root
	letter: Option<char>,
	terminal: bool,
	children: HashMap<char, Self>,
}

impl TrieNode {
	fn new(letter: char) -> Self {
		Self {
			letter: Some(letter),
			..Self::default()
		}
	}

	#[must_use]
	pub const fn letter(&self) -> Option<char> {
		self.letter
	}

	/// Whether a whole reversed dictionary word ends on this node
	#[must_use]
	pub const fn is_terminal(&self) -> bool {
		self.terminal
	}

	#[must_use]
	pub fn is_leaf(&self) -> bool {
		self.children.is_empty()
	}

	#[must_use]
	pub fn child(&self, letter: char) -> Option<&Self> {
		self.children.get(&letter)
	}
}

impl SuffixTrie {
	/// Builds the trie from every word yielded by `words`
	pub fn from_words<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut trie = Self::default();
		for word in words {
			trie.insert(word.as_ref());
		}
		log::debug!("built suffix trie with {} words", trie.len);
		trie
	}

	/// Inserts `word` reversed. Inserting the same word twice is a no-op.
	pub fn insert(&mut self, word: &str) {
		if word.is_empty() {
			return;
		}

		let mut current = &mut self.root;
		for letter in word.chars().rev() {
			current = current
				.children
				.entry(letter)
				.or_insert_with(|| TrieNode::new(letter));
		}

		if !current.terminal {
			current.terminal = true;
			self.len += 1;
		}
	}

	#[must_use]
	pub fn contains(&self, word: &str) -> bool {
		let mut current = &self.root;
		for letter in word.chars().rev() {
			current = match current.child(letter) {
				Some(node) => node,
				None => return false,
			};
		}
		current.terminal
	}

	#[must_use]
	pub const fn root(&self) -> &TrieNode {
		&self.root
	}

	/// Number of distinct words
	#[must_use]
	pub const fn len(&self) -> usize {
		self.len
	}

	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}
}
