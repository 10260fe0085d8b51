// src/core/tokenizer.rs
use crate::core::types::{Token, TokenKind};

/// Punctuation splits words and becomes its own one-character token.
/// Anything else that is not whitespace belongs to a word.
pub fn is_punctuation(c: char) -> bool {
    (c.is_ascii_punctuation() && c != '_')
        || matches!(
            c,
            '¡' | '¿' | '…' | '“' | '”' | '‘' | '’' | '«' | '»' | '–' | '—' | '।'
        )
}

/// Splits normalized text into word and punctuation tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for c in text.chars() {
        if c.is_whitespace() || is_punctuation(c) {
            flush_word(&mut word, &mut tokens);
            if !c.is_whitespace() {
                let rank = tokens.len();
                tokens.push(Token {
                    kind: TokenKind::Punctuation,
                    text: c.to_string(),
                    rank,
                });
            }
        } else {
            word.push(c);
        }
    }
    flush_word(&mut word, &mut tokens);

    tokens
}

fn flush_word(word: &mut String, tokens: &mut Vec<Token>) {
    if word.is_empty() {
        return;
    }
    let rank = tokens.len();
    tokens.push(Token {
        kind: TokenKind::Word,
        text: word.to_uppercase(),
        rank,
    });
    word.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
        tokens.iter().map(|t| (t.kind, t.text.as_str())).collect()
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn words_are_uppercased_and_punctuation_kept() {
        let tokens = tokenize("are you okay?");
        assert_eq!(
            shape(&tokens),
            vec![
                (TokenKind::Word, "ARE"),
                (TokenKind::Word, "YOU"),
                (TokenKind::Word, "OKAY"),
                (TokenKind::Punctuation, "?"),
            ]
        );
    }

    #[test]
    fn each_punctuation_character_is_its_own_token() {
        let tokens = tokenize("wow?!");
        assert_eq!(
            shape(&tokens),
            vec![
                (TokenKind::Word, "WOW"),
                (TokenKind::Punctuation, "?"),
                (TokenKind::Punctuation, "!"),
            ]
        );
    }

    #[test]
    fn ranks_follow_token_order() {
        let tokens = tokenize("a, b. c");
        let ranks: Vec<usize> = tokens.iter().map(|t| t.rank).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn digits_and_underscores_stay_in_words() {
        let tokens = tokenize("room_42 b2b");
        assert_eq!(
            shape(&tokens),
            vec![(TokenKind::Word, "ROOM_42"), (TokenKind::Word, "B2B")]
        );
    }

    #[test]
    fn symbols_without_letters_form_a_word() {
        let tokens = tokenize("hi 🙂");
        assert_eq!(
            shape(&tokens),
            vec![(TokenKind::Word, "HI"), (TokenKind::Word, "🙂")]
        );
    }
}
