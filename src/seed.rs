// File: src/seed.rs
//! Tables compiled into the binary: a 60-word dictionary, the A-Z and 0-9
//! gestures, and the curated phrase list.
use crate::core::types::{DictionaryEntry, Gesture, PhraseEntry};
use crate::error::DataError;
use crate::persistence::TableSnapshot;

const DICTIONARY_JSON: &str = include_str!("../data/dictionary.json");
const GESTURES_JSON: &str = include_str!("../data/gestures.json");
const PHRASES_JSON: &str = include_str!("../data/phrases.json");

pub fn builtin_dictionary() -> Result<Vec<DictionaryEntry>, DataError> {
    Ok(serde_json::from_str(DICTIONARY_JSON)?)
}

pub fn builtin_gestures() -> Result<Vec<Gesture>, DataError> {
    Ok(serde_json::from_str(GESTURES_JSON)?)
}

pub fn builtin_phrases() -> Result<Vec<PhraseEntry>, DataError> {
    Ok(serde_json::from_str(PHRASES_JSON)?)
}

pub fn builtin_tables() -> Result<TableSnapshot, DataError> {
    Ok(TableSnapshot {
        dictionary: builtin_dictionary()?,
        gestures: builtin_gestures()?,
        phrases: builtin_phrases()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{GestureCategory, SignKind};

    #[test]
    fn builtin_tables_parse() {
        let tables = builtin_tables().unwrap();
        assert_eq!(tables.dictionary.len(), 60);
        assert_eq!(tables.gestures.len(), 36);
        assert_eq!(tables.phrases.len(), 19);
    }

    #[test]
    fn gestures_cover_letters_and_digits() {
        let gestures = builtin_gestures().unwrap();
        let letters = gestures
            .iter()
            .filter(|g| g.category == GestureCategory::Alphabet)
            .count();
        assert_eq!(letters, 26);
        assert!(gestures.iter().any(|g| g.label == "0"));
    }

    #[test]
    fn dictionary_signs_all_have_gestures() {
        let gestures = builtin_gestures().unwrap();
        for entry in builtin_dictionary().unwrap() {
            for symbol in &entry.signs {
                assert!(
                    gestures.iter().any(|g| &g.label == symbol),
                    "{} uses unknown symbol {}",
                    entry.word,
                    symbol
                );
            }
        }
    }

    #[test]
    fn phrase_signs_are_whole_word_signs() {
        for phrase in builtin_phrases().unwrap() {
            assert!(!phrase.signs.is_empty());
            assert!(phrase.signs.iter().all(|s| s.kind == SignKind::Word));
        }
    }
}
