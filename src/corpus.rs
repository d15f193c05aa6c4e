use crate::error::{KeResult, KeyErgoError};
use std::fs;
use std::path::Path;
use tracing::info;

/// Built-in English sample used when no corpus is supplied.
pub static DEFAULT_CORPUS: &str = include_str!("../data/default_corpus.txt");

/// Lower-cases the text and keeps only `a-z`. Spaces, digits and punctuation
/// never reach the analyzer, so bigrams join across word boundaries.
pub fn clean(text: &str) -> Vec<char> {
    text.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

pub fn load_corpus<P: AsRef<Path>>(path: P) -> KeResult<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    if clean(&text).is_empty() {
        return Err(KeyErgoError::Validation(format!(
            "Corpus '{}' contains no letters",
            path.display()
        )));
    }
    info!("Loaded corpus from {} ({} bytes)", path.display(), text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_non_letters() {
        assert_eq!(clean("Hi, there 42!"), vec!['h', 'i', 't', 'h', 'e', 'r', 'e']);
        assert!(clean("123 ...").is_empty());
    }

    #[test]
    fn test_default_corpus_is_substantial() {
        let words = DEFAULT_CORPUS.split_whitespace().count();
        assert!(words >= 1000, "only {} words", words);
    }
}
