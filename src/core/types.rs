// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Position of a token in the tokenized input.
pub type Rank = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Word,
    Punctuation,
}

/// One word or punctuation character of the normalized input.
/// Word text is upper-cased; punctuation is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub rank: Rank,
}

impl Token {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignKind {
    Letter,
    Number,
    /// A whole-word sign; only curated phrases carry these.
    Word,
    Punctuation,
    Space,
    WordStart,
}

impl SignKind {
    /// Structural units drive UI pacing and are never looked up.
    pub fn is_structural(self) -> bool {
        matches!(self, SignKind::Space | SignKind::WordStart)
    }
}

/// Where a sign unit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitOrigin {
    Dictionary,
    Spelling,
    Phrase,
    Structural,
}

/// The atomic renderable element of a sign sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUnit {
    pub kind: SignKind,
    pub symbol: String,
    #[serde(default)]
    pub image_ref: Option<String>,
    #[serde(default)]
    pub video_ref: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    pub origin: UnitOrigin,
}

impl SignUnit {
    pub fn space() -> Self {
        Self {
            kind: SignKind::Space,
            symbol: "SPACE".to_string(),
            image_ref: None,
            video_ref: None,
            note: Some("Pause briefly between words".to_string()),
            origin: UnitOrigin::Structural,
        }
    }

    pub fn word_start(word: &str) -> Self {
        Self {
            kind: SignKind::WordStart,
            symbol: word.to_string(),
            image_ref: None,
            video_ref: None,
            note: Some(format!("Start of word: {}", word)),
            origin: UnitOrigin::Structural,
        }
    }
}

/// How a single word was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordOrigin {
    Dictionary,
    Spelling,
}

impl From<WordOrigin> for UnitOrigin {
    fn from(origin: WordOrigin) -> Self {
        match origin {
            WordOrigin::Dictionary => UnitOrigin::Dictionary,
            WordOrigin::Spelling => UnitOrigin::Spelling,
        }
    }
}

/// A curated whole-word mapping. The key lives in the owning `Dictionary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub signs: Vec<String>,
    pub note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureCategory {
    Alphabet,
    Number,
}

/// Media references for one letter or digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gesture {
    pub label: String,
    pub category: GestureCategory,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub image_ref: Option<String>,
    #[serde(default)]
    pub video_ref: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub example_word: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhraseCategory {
    Greeting,
    Daily,
    Question,
    Emotion,
    Emergency,
    Polite,
}

/// A complete idiomatic expression with its pre-composed signs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseEntry {
    pub phrase: String,
    pub category: PhraseCategory,
    pub difficulty: Difficulty,
    pub note: String,
    pub usage: String,
    pub signs: Vec<SignUnit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultOrigin {
    Phrase,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordBreakdown {
    pub word: String,
    pub sign_count: usize,
    pub origin: WordOrigin,
    pub note: String,
    /// Index of the word's `word-start` marker in the sequence.
    pub start_index: usize,
    /// Index of the word's last unit (the marker itself for empty words).
    pub end_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DropReason {
    MissingGesture,
    UnsupportedPunctuation,
}

/// A symbol that was left out of the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedSymbol {
    /// The word it belonged to; empty for punctuation.
    pub word: String,
    pub symbol: String,
    pub reason: DropReason,
}

/// Curated phrase details carried by a phrase-resolved result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseDetails {
    pub label: String,
    pub usage: String,
    pub category: PhraseCategory,
}

/// The pipeline's output for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub origin: ResultOrigin,
    pub sequence: Vec<SignUnit>,
    pub note: String,
    pub word_breakdown: Vec<WordBreakdown>,
    pub phrase: Option<PhraseDetails>,
    pub dropped: Vec<DroppedSymbol>,
}

impl TranslationResult {
    pub fn from_phrase(entry: PhraseEntry) -> Self {
        Self {
            origin: ResultOrigin::Phrase,
            sequence: entry.signs,
            note: entry.note,
            word_breakdown: Vec::new(),
            phrase: Some(PhraseDetails {
                label: entry.phrase,
                usage: entry.usage,
                category: entry.category,
            }),
            dropped: Vec::new(),
        }
    }
}
