mod utils;

const WORDS: &str = "\
quack
back
qua
uq
quaqu
";

#[test]
fn double_tile_word_found_once() -> Result<(), Box<dyn std::error::Error>> {
	let solver = utils::solver(WORDS, 1, "qu a\nc k\n")?;

	let found = solver.get_all_words("ck");
	assert_eq!(found.len(), 1);
	assert!(found.contains("quack"));

	Ok(())
}

#[test]
fn double_tile_halves_stay_in_order() -> Result<(), Box<dyn std::error::Error>> {
	utils::test_board(WORDS, 1, "qu a\nc k\n", "", &["quack", "qua"])
}

#[test]
fn double_tile_reuse() -> Result<(), Box<dyn std::error::Error>> {
	utils::test_board(WORDS, 1, "qu a\nc k\n", "qu", &[])?;
	utils::test_board(WORDS, 2, "qu a\nc k\n", "qu", &["quaqu"])
}

#[test]
fn double_tiles_in_the_middle() -> Result<(), Box<dyn std::error::Error>> {
	utils::test_board(
		"bathe\nbate\nbahte\n",
		1,
		"b a x\nx th x\nx x e\n",
		"e",
		&["bathe"],
	)
}
