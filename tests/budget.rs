mod utils;

const BOARD: &str = "\
a n
x y
";

#[test]
fn single_use_forbids_revisits() -> Result<(), Box<dyn std::error::Error>> {
	utils::test_board("nan\nan\n", 1, BOARD, "", &["an"])
}

#[test]
fn budget_allows_revisits() -> Result<(), Box<dyn std::error::Error>> {
	utils::test_board("nan\nan\nanana\nnanana\n", 2, BOARD, "an", &["nan"])?;
	utils::test_board("nan\nan\nanana\nnanana\n", 3, BOARD, "", &["an", "nan", "anana", "nanana"])
}

#[test]
fn invalid_budget_is_refused() {
	assert!(utils::solver("an\n", 0, BOARD).is_err());
}
