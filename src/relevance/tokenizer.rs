// src/relevance/tokenizer.rs

/// Minimum token length considered meaningful for scoring.
const MIN_TOKEN_LEN: usize = 4;

/// Latin letters plus the accented Latin-1 range; digits and punctuation
/// split tokens.
fn is_token_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(c, '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{F6}' | '\u{F8}'..='\u{FF}')
}

/// Lowercase alphabetic tokens of length >= 4, in order of appearance.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !is_token_char(c))
        .filter(|word| word.chars().count() >= MIN_TOKEN_LEN)
        .map(|word| word.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<String> {
        tokens(text).collect()
    }

    #[test]
    fn test_tokens_filters_short_words() {
        assert_eq!(collect("an ox ate the corn"), vec!["corn"]);
    }

    #[test]
    fn test_tokens_lowercase() {
        assert_eq!(collect("Rust RUST rust"), vec!["rust", "rust", "rust"]);
    }

    #[test]
    fn test_tokens_accept_accented_letters() {
        assert_eq!(
            collect("gestão de informação"),
            vec!["gestão", "informação"]
        );
    }

    #[test]
    fn test_tokens_split_on_digits_and_punctuation() {
        assert_eq!(
            collect("python3 docker-compose"),
            vec!["python", "docker", "compose"]
        );
    }

    #[test]
    fn test_tokens_empty_input() {
        assert!(collect("").is_empty());
        assert!(collect("1 2 3 !?").is_empty());
    }
}
