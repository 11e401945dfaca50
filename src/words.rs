//! Word lists, one word per line

use std::{
	fs::File,
	io::{self, Read},
	path::{Path, PathBuf},
};

/// Ways reading a word list could go wrong
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	/// The word list could not be opened or read
	#[error("could not read word list `{}`: {source}", path.display())]
	Unavailable {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Yields every non-blank, trimmed line of `content`
pub fn from_slice(content: &str) -> impl Iterator<Item = &str> {
	content.lines().map(str::trim).filter(|w| !w.is_empty())
}

/// # Errors
///
/// Will error if the file at `path` cannot be opened or is not valid UTF-8.
pub fn file(path: &Path) -> Result<Vec<String>, SourceError> {
	let unavailable = |source| SourceError::Unavailable {
		path: path.to_owned(),
		source,
	};

	let mut file = File::open(path).map_err(unavailable)?;
	let mut buffer = String::new();
	file.read_to_string(&mut buffer).map_err(unavailable)?;

	let words = from_slice(&buffer).map(ToOwned::to_owned).collect::<Vec<_>>();
	log::debug!("read {} words from `{}`", words.len(), path.display());
	Ok(words)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn skips_blank_lines_and_trims() {
		let words = from_slice("this\n  quack \r\n\n\t\nis\n").collect::<Vec<_>>();
		assert_eq!(words, ["this", "quack", "is"]);
	}

	#[test]
	fn missing_file_is_unavailable() {
		let err = file(Path::new("/definitely/not/a/word/list.txt")).unwrap_err();
		assert!(matches!(err, SourceError::Unavailable { .. }));
		assert!(err.to_string().contains("list.txt"));
	}
}
