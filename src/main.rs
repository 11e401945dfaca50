//! boggled CLI

use boggled::Solver;
use clap::Parser;
use std::{
	io::{stdin, stdout, Write},
	path::PathBuf,
};

#[derive(clap::Parser)]
struct Args {
	/// Only list words ending in this suffix
	suffix: Option<String>,

	/// Word list, one word per line
	#[arg(long, short)]
	words: PathBuf,

	/// Board file, one row per line, tiles separated by spaces
	#[arg(long, short)]
	board: PathBuf,

	/// How many times a single tile can be used in a word
	#[arg(long, short, default_value_t = 1)]
	max_uses: u32,

	#[arg(long, short)]
	interactive: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	pretty_env_logger::init();

	let args = Args::parse();

	let solver = Solver::from_files(&args.words, &args.board, args.max_uses)?;
	log::info!(
		"loaded {} words and a {}x{} board",
		solver.trie().len(),
		solver.board().size(),
		solver.board().size()
	);

	if let Some(suffix) = args.suffix {
		print_words(&solver, &suffix);
		return Ok(());
	}

	if !args.interactive {
		return Err("no action provided".into());
	}

	loop {
		print!("suffix(es) ❯ ");
		stdout().flush()?;

		let mut input = String::new();
		if let 0 = stdin().read_line(&mut input)? {
			return Ok(());
		};
		let input = input.trim();

		if input.is_empty() {
			print_words(&solver, "");
		} else {
			input.split_whitespace().for_each(|suffix| {
				print_words(&solver, suffix);
			});
		}
	}
}

fn print_words(solver: &Solver, suffix: &str) {
	let mut words = solver.get_all_words(suffix).into_iter().collect::<Vec<_>>();
	if words.is_empty() {
		log::warn!("No word ends in `{suffix}` on this board");
		return;
	}

	words.sort_unstable();
	for word in words {
		println!("{word}");
	}
}
