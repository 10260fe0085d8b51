#![allow(dead_code)]

use async_trait::async_trait;
use sign_core::core::types::{
    DictionaryEntry, Difficulty, Gesture, GestureCategory, PhraseCategory, PhraseEntry, SignKind,
    SignUnit, UnitOrigin,
};
use sign_core::error::StoreError;
use sign_core::store::{Dictionary, GestureStore, MemoryGestureStore, MemoryPhraseStore, PhraseStore};
use sign_core::{EngineConfig, TranslationEngine};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub fn gesture(label: char) -> Gesture {
    Gesture {
        label: label.to_string(),
        category: if label.is_ascii_digit() {
            GestureCategory::Number
        } else {
            GestureCategory::Alphabet
        },
        difficulty: Difficulty::Easy,
        image_ref: Some(format!("/images/isl/{label}.png")),
        video_ref: None,
        note: None,
        example_word: None,
    }
}

/// Every letter and digit except the ones listed.
pub fn gestures_without(missing: &[char]) -> MemoryGestureStore {
    let gestures = ('A'..='Z')
        .chain('0'..='9')
        .filter(|c| !missing.contains(c))
        .map(gesture)
        .collect();
    MemoryGestureStore::new(gestures).unwrap()
}

pub fn entry(word: &str, signs: &str, note: &str) -> DictionaryEntry {
    DictionaryEntry {
        word: word.to_string(),
        signs: signs.chars().map(|c| c.to_string()).collect(),
        note: note.to_string(),
    }
}

pub fn dictionary() -> Dictionary {
    Dictionary::new(vec![
        entry("HELLO", "HELLO", "A friendly greeting"),
        entry("YOU", "YOU", "Second person"),
        entry("ARE", "ARE", "Plural be"),
        entry("TEN", "10", "Number 10"),
        entry("HELP", "HELP", "Assistance"),
    ])
    .unwrap()
}

pub fn phrase(text: &str, words: &[&str]) -> PhraseEntry {
    PhraseEntry {
        phrase: text.to_string(),
        category: PhraseCategory::Greeting,
        difficulty: Difficulty::Medium,
        note: format!("Curated signs for {text}"),
        usage: "Use when greeting someone.".to_string(),
        signs: words
            .iter()
            .map(|w| SignUnit {
                kind: SignKind::Word,
                symbol: w.to_string(),
                image_ref: None,
                video_ref: None,
                note: None,
                origin: UnitOrigin::Phrase,
            })
            .collect(),
    }
}

pub fn phrases() -> MemoryPhraseStore {
    MemoryPhraseStore::new(vec![
        phrase("HOW ARE YOU", &["HOW", "ARE", "YOU"]),
        phrase("I DO NOT UNDERSTAND", &["I", "NOT", "UNDERSTAND"]),
    ])
    .unwrap()
}

/// Counts lookups on the way through to an inner store.
pub struct CountingGestures {
    pub inner: MemoryGestureStore,
    pub calls: AtomicUsize,
}

impl CountingGestures {
    pub fn new(inner: MemoryGestureStore) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GestureStore for CountingGestures {
    async fn by_label(&self, symbol: &str) -> Result<Option<Gesture>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.by_label(symbol).await
    }
}

pub struct FailingGestures;

#[async_trait]
impl GestureStore for FailingGestures {
    async fn by_label(&self, _symbol: &str) -> Result<Option<Gesture>, StoreError> {
        Err(StoreError::new("connection refused"))
    }
}

pub struct FailingPhrases;

#[async_trait]
impl PhraseStore for FailingPhrases {
    async fn by_phrase(&self, _key: &str) -> Result<Option<PhraseEntry>, StoreError> {
        Err(StoreError::new("connection refused"))
    }
}

/// Answers correctly, but only after a delay.
pub struct SlowGestures(pub Duration);

#[async_trait]
impl GestureStore for SlowGestures {
    async fn by_label(&self, symbol: &str) -> Result<Option<Gesture>, StoreError> {
        tokio::time::sleep(self.0).await;
        Ok(symbol.chars().next().map(gesture))
    }
}

/// Records the most lookups ever in flight at once.
#[derive(Default)]
pub struct PeakGestures {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl PeakGestures {
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GestureStore for PeakGestures {
    async fn by_label(&self, symbol: &str) -> Result<Option<Gesture>, StoreError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(symbol.chars().next().map(gesture))
    }
}

pub fn engine_with(
    gestures: Arc<dyn GestureStore>,
    phrases: Arc<dyn PhraseStore>,
    config: EngineConfig,
) -> TranslationEngine {
    TranslationEngine::new(dictionary(), gestures, phrases, config).unwrap()
}

pub fn engine() -> TranslationEngine {
    engine_with(
        Arc::new(gestures_without(&[])),
        Arc::new(phrases()),
        EngineConfig::default(),
    )
}
