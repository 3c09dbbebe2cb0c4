// Tokenizer: punctuation stripping, lowercasing, whitespace splitting.
//
// A "word character" is a Unicode letter, digit or underscore, so Cyrillic
// text survives intact. Everything else that isn't whitespace becomes a space
// before splitting, which means "e-mail" yields two tokens.

use std::sync::OnceLock;

use regex::Regex;

fn punctuation() -> &'static Regex {
    static PUNCTUATION: OnceLock<Regex> = OnceLock::new();
    PUNCTUATION.get_or_init(|| Regex::new(r"[^\w\s]").expect("valid punctuation pattern"))
}

/// Split raw text into lowercase word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    punctuation()
        .replace_all(text, " ")
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation_and_lowercases() {
        assert_eq!(tokenize("Hello, World!  123"), vec!["hello", "world", "123"]);
    }

    #[test]
    fn test_cyrillic_words_are_kept() {
        assert_eq!(
            tokenize("Наука и Физика — это интересно!"),
            vec!["наука", "и", "физика", "это", "интересно"]
        );
    }

    #[test]
    fn test_punctuation_inside_word_splits_it() {
        assert_eq!(tokenize("e-mail"), vec!["e", "mail"]);
        assert_eq!(tokenize("snake_case"), vec!["snake_case"]);
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("?! ... ,,,").is_empty());
    }
}
