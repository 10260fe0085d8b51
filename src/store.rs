// File: src/store.rs
//! Lookup tables and the store collaborators the pipeline reads from.
//!
//! The dictionary is an in-process table. Gestures and phrases sit behind
//! async traits so a remote store can stand in for the in-memory ones.
use crate::core::types::{
    DictionaryEntry, Difficulty, Gesture, GestureCategory, PhraseCategory, PhraseEntry,
};
use crate::error::{DataError, StoreError};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

const SEARCH_LIMIT: usize = 10;

#[async_trait]
pub trait GestureStore: Send + Sync {
    /// Looks up one letter or digit.
    async fn by_label(&self, symbol: &str) -> Result<Option<Gesture>, StoreError>;
}

#[async_trait]
pub trait PhraseStore: Send + Sync {
    /// Exact lookup by canonical uppercase phrase.
    async fn by_phrase(&self, key: &str) -> Result<Option<PhraseEntry>, StoreError>;
}

/// A table that is replaced wholesale. Readers pin the current `Arc`, so a
/// swap never changes what an in-flight reader sees.
pub struct Swappable<T> {
    current: RwLock<Arc<T>>,
}

impl<T> Swappable<T> {
    pub fn new(value: T) -> Self {
        Self {
            current: RwLock::new(Arc::new(value)),
        }
    }

    pub fn load(&self) -> Arc<T> {
        self.current.read().clone()
    }

    pub fn swap(&self, value: T) -> Arc<T> {
        std::mem::replace(&mut *self.current.write(), Arc::new(value))
    }

    /// Builds the next value from the current one under the write lock, so
    /// concurrent updates cannot lose each other.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let mut current = self.current.write();
        let next = f(&**current);
        *current = Arc::new(next);
    }
}

/// Curated word to sign mapping, keyed by uppercase word.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, DictionaryEntry>,
}

impl Dictionary {
    pub fn new(entries: Vec<DictionaryEntry>) -> Result<Self, DataError> {
        let mut map = HashMap::with_capacity(entries.len());
        for mut entry in entries {
            let key = entry.word.trim().to_uppercase();
            if key.is_empty() {
                return Err(DataError::Invalid("dictionary word is empty".into()));
            }
            if entry.signs.is_empty() {
                return Err(DataError::Invalid(format!("dictionary word {key} has no signs")));
            }
            entry.word = key.clone();
            entry.signs = entry.signs.iter().map(|s| s.to_uppercase()).collect();
            if map.insert(key.clone(), entry).is_some() {
                return Err(DataError::Invalid(format!("duplicate dictionary word {key}")));
            }
        }
        Ok(Self { entries: map })
    }

    pub fn lookup(&self, word: &str) -> Option<&DictionaryEntry> {
        self.entries.get(&word.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by word.
    pub fn entries(&self) -> Vec<DictionaryEntry> {
        let mut entries: Vec<DictionaryEntry> = self.entries.values().cloned().collect();
        entries.sort_by(|a, b| a.word.cmp(&b.word));
        entries
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GestureFilter {
    pub category: Option<GestureCategory>,
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseFilter {
    pub category: Option<PhraseCategory>,
    pub difficulty: Option<Difficulty>,
}

fn index_gestures(gestures: Vec<Gesture>) -> Result<HashMap<String, Gesture>, DataError> {
    let mut map = HashMap::with_capacity(gestures.len());
    for mut gesture in gestures {
        let key = gesture.label.trim().to_uppercase();
        if key.chars().count() != 1 {
            return Err(DataError::Invalid(format!(
                "gesture label {:?} is not a single character",
                gesture.label
            )));
        }
        gesture.label = key.clone();
        if map.insert(key.clone(), gesture).is_some() {
            return Err(DataError::Invalid(format!("duplicate gesture {key}")));
        }
    }
    Ok(map)
}

/// Letter and digit gestures held in memory. Immutable once built; a reload
/// builds a new store.
pub struct MemoryGestureStore {
    table: HashMap<String, Gesture>,
}

impl MemoryGestureStore {
    pub fn new(gestures: Vec<Gesture>) -> Result<Self, DataError> {
        Ok(Self {
            table: index_gestures(gestures)?,
        })
    }

    pub fn get(&self, label: &str) -> Option<Gesture> {
        self.table.get(&label.to_uppercase()).cloned()
    }

    /// Gestures matching the filter, ordered by label.
    pub fn list(&self, filter: GestureFilter) -> Vec<Gesture> {
        let mut gestures: Vec<Gesture> = self
            .table
            .values()
            .filter(|g| filter.category.map_or(true, |c| g.category == c))
            .filter(|g| filter.difficulty.map_or(true, |d| g.difficulty == d))
            .cloned()
            .collect();
        gestures.sort_by(|a, b| a.label.cmp(&b.label));
        gestures
    }
}

#[async_trait]
impl GestureStore for MemoryGestureStore {
    async fn by_label(&self, symbol: &str) -> Result<Option<Gesture>, StoreError> {
        Ok(self.get(symbol))
    }
}

fn index_phrases(phrases: Vec<PhraseEntry>) -> Result<HashMap<String, PhraseEntry>, DataError> {
    let mut map = HashMap::with_capacity(phrases.len());
    for mut entry in phrases {
        let key = entry.phrase.split_whitespace().collect::<Vec<_>>().join(" ").to_uppercase();
        if key.is_empty() {
            return Err(DataError::Invalid("phrase is empty".into()));
        }
        entry.phrase = key.clone();
        if map.insert(key.clone(), entry).is_some() {
            return Err(DataError::Invalid(format!("duplicate phrase {key}")));
        }
    }
    Ok(map)
}

/// Curated phrases held in memory. Immutable once built, like
/// `MemoryGestureStore`.
pub struct MemoryPhraseStore {
    table: HashMap<String, PhraseEntry>,
}

impl MemoryPhraseStore {
    pub fn new(phrases: Vec<PhraseEntry>) -> Result<Self, DataError> {
        Ok(Self {
            table: index_phrases(phrases)?,
        })
    }

    /// Phrases matching the filter, ordered by phrase.
    pub fn list(&self, filter: PhraseFilter) -> Vec<PhraseEntry> {
        let mut phrases: Vec<PhraseEntry> = self
            .table
            .values()
            .filter(|p| filter.category.map_or(true, |c| p.category == c))
            .filter(|p| filter.difficulty.map_or(true, |d| p.difficulty == d))
            .cloned()
            .collect();
        phrases.sort_by(|a, b| a.phrase.cmp(&b.phrase));
        phrases
    }

    /// Case-insensitive substring search over phrase keys, at most ten hits.
    pub fn search(&self, query: &str) -> Vec<PhraseEntry> {
        let needle = query.trim().to_uppercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let mut hits: Vec<PhraseEntry> = self
            .list(PhraseFilter::default())
            .into_iter()
            .filter(|p| p.phrase.contains(&needle))
            .collect();
        hits.truncate(SEARCH_LIMIT);
        hits
    }
}

#[async_trait]
impl PhraseStore for MemoryPhraseStore {
    async fn by_phrase(&self, key: &str) -> Result<Option<PhraseEntry>, StoreError> {
        Ok(self.table.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{SignKind, SignUnit, UnitOrigin};

    fn gesture(label: &str, category: GestureCategory, difficulty: Difficulty) -> Gesture {
        Gesture {
            label: label.to_string(),
            category,
            difficulty,
            image_ref: Some(format!("/images/isl/{label}.png")),
            video_ref: None,
            note: None,
            example_word: None,
        }
    }

    fn phrase(text: &str, category: PhraseCategory) -> PhraseEntry {
        PhraseEntry {
            phrase: text.to_string(),
            category,
            difficulty: Difficulty::Easy,
            note: String::new(),
            usage: String::new(),
            signs: vec![SignUnit {
                kind: SignKind::Word,
                symbol: text.to_uppercase(),
                image_ref: None,
                video_ref: None,
                note: None,
                origin: UnitOrigin::Phrase,
            }],
        }
    }

    #[test]
    fn dictionary_lookup_ignores_case() {
        let dict = Dictionary::new(vec![DictionaryEntry {
            word: "hello".into(),
            signs: vec!["h".into(), "i".into()],
            note: "greeting".into(),
        }])
        .unwrap();
        let entry = dict.lookup("HeLLo").unwrap();
        assert_eq!(entry.word, "HELLO");
        assert_eq!(entry.signs, vec!["H", "I"]);
        assert!(dict.lookup("bye").is_none());
    }

    #[test]
    fn dictionary_rejects_duplicates_and_empty_signs() {
        let entry = |w: &str, signs: Vec<String>| DictionaryEntry {
            word: w.into(),
            signs,
            note: String::new(),
        };
        let dup = Dictionary::new(vec![entry("yes", vec!["Y".into()]), entry("YES", vec!["Y".into()])]);
        assert!(matches!(dup, Err(DataError::Invalid(_))));
        assert!(matches!(Dictionary::new(vec![entry("no", vec![])]), Err(DataError::Invalid(_))));
    }

    #[test]
    fn gesture_labels_must_be_single_characters() {
        let bad = MemoryGestureStore::new(vec![gesture("AB", GestureCategory::Alphabet, Difficulty::Easy)]);
        assert!(matches!(bad, Err(DataError::Invalid(_))));
    }

    #[test]
    fn gesture_list_filters_and_sorts() {
        let store = MemoryGestureStore::new(vec![
            gesture("B", GestureCategory::Alphabet, Difficulty::Easy),
            gesture("A", GestureCategory::Alphabet, Difficulty::Medium),
            gesture("1", GestureCategory::Number, Difficulty::Easy),
        ])
        .unwrap();

        let letters: Vec<String> = store
            .list(GestureFilter {
                category: Some(GestureCategory::Alphabet),
                difficulty: None,
            })
            .into_iter()
            .map(|g| g.label)
            .collect();
        assert_eq!(letters, vec!["A", "B"]);

        let easy = store.list(GestureFilter {
            category: None,
            difficulty: Some(Difficulty::Easy),
        });
        assert_eq!(easy.len(), 2);
        assert_eq!(store.get("b").unwrap().label, "B");
    }

    #[test]
    fn phrase_keys_are_canonicalized() {
        let store = MemoryPhraseStore::new(vec![phrase("  thank   you ", PhraseCategory::Polite)]).unwrap();
        let all = store.list(PhraseFilter::default());
        assert_eq!(all[0].phrase, "THANK YOU");
    }

    #[test]
    fn phrase_search_is_case_insensitive_and_capped() {
        let mut phrases: Vec<PhraseEntry> = (0..12)
            .map(|i| phrase(&format!("I AM {i}"), PhraseCategory::Daily))
            .collect();
        phrases.push(phrase("HELLO", PhraseCategory::Greeting));
        let store = MemoryPhraseStore::new(phrases).unwrap();

        assert_eq!(store.search("i am").len(), 10);
        assert_eq!(store.search("ell")[0].phrase, "HELLO");
        assert!(store.search("  ").is_empty());

        let greetings = store.list(PhraseFilter {
            category: Some(PhraseCategory::Greeting),
            difficulty: None,
        });
        assert_eq!(greetings.len(), 1);
    }

    #[test]
    fn swap_does_not_disturb_pinned_readers() {
        let table = Swappable::new(1);
        let pinned = table.load();
        let previous = table.swap(2);
        assert_eq!(*pinned, 1);
        assert_eq!(*previous, 1);
        assert_eq!(*table.load(), 2);

        table.update(|n| n * 10);
        assert_eq!(*table.load(), 20);
        assert_eq!(*pinned, 1);
    }

    #[tokio::test]
    async fn memory_stores_answer_lookups() {
        let gestures =
            MemoryGestureStore::new(vec![gesture("A", GestureCategory::Alphabet, Difficulty::Easy)]).unwrap();
        assert!(gestures.by_label("A").await.unwrap().is_some());
        assert!(gestures.by_label("Z").await.unwrap().is_none());

        let phrases = MemoryPhraseStore::new(vec![phrase("HELLO", PhraseCategory::Greeting)]).unwrap();
        assert!(phrases.by_phrase("HELLO").await.unwrap().is_some());
        assert!(phrases.by_phrase("GOODBYE").await.unwrap().is_none());
    }
}
