use boggled::{words, Board, Solver, SuffixTrie};
use std::collections::HashSet;

#[derive(Debug, thiserror::Error)]
#[error("{0} word(s) were wrongly found or missed")]
struct SearchErrors(usize);

pub(crate) fn solver(
	word_list: &str,
	max_uses: u32,
	board: &str,
) -> Result<Solver, Box<dyn std::error::Error>> {
	let _ = pretty_env_logger::try_init();

	let trie = SuffixTrie::from_words(words::from_slice(word_list));
	let board = Board::parse(max_uses, board)?;
	Ok(Solver::new(trie, board))
}

pub(crate) fn test_board(
	word_list: &str,
	max_uses: u32,
	board: &str,
	suffix: &str,
	expected: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
	let solver = solver(word_list, max_uses, board)?;
	let found = solver.get_all_words(suffix);

	for word in &found {
		assert!(solver.trie().contains(word), "{word} is not a dictionary word");
		assert!(word.ends_with(suffix), "{word} does not end in {suffix}");
		assert!(word.chars().count() > suffix.chars().count());
	}

	let expected = expected.iter().copied().map(String::from).collect::<HashSet<_>>();

	let mut errors = 0;

	errors += found
		.difference(&expected)
		.inspect(|w| log::error!("{w} is not supposed to be found"))
		.count();

	errors += expected
		.difference(&found)
		.inspect(|w| log::error!("{w} is supposed to be found but is missing"))
		.count();

	if errors == 0 {
		Ok(())
	} else {
		Err(Box::new(SearchErrors(errors)))
	}
}
