// File: src/projection.rs
//! JSON shapes handed to the UI.
use crate::core::types::{
    PhraseCategory, ResultOrigin, SignKind, SignUnit, TranslationResult, WordBreakdown,
    WordOrigin,
};
use serde::{Deserialize, Serialize};

const PHRASE_CONFIDENCE: f32 = 1.0;
const TEXT_CONFIDENCE: f32 = 0.9;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceItem {
    pub label: String,
    pub kind: SignKind,
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<SignUnit> for SequenceItem {
    fn from(unit: SignUnit) -> Self {
        Self {
            label: unit.symbol,
            kind: unit.kind,
            image_url: unit.image_ref,
            video_url: unit.video_ref,
            note: unit.note,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingInfo {
    pub dictionary_matches: usize,
    pub spelled_words: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "origin", rename_all = "lowercase")]
pub enum TranslationResponse {
    #[serde(rename_all = "camelCase")]
    Text {
        sequence: Vec<SequenceItem>,
        note: String,
        word_count: usize,
        word_breakdown: Vec<WordBreakdown>,
        processing_info: ProcessingInfo,
        confidence: f32,
    },
    #[serde(rename_all = "camelCase")]
    Phrase {
        phrase_label: String,
        sequence: Vec<SequenceItem>,
        note: String,
        usage: String,
        category: PhraseCategory,
        confidence: f32,
    },
}

impl From<TranslationResult> for TranslationResponse {
    fn from(result: TranslationResult) -> Self {
        let sequence = result.sequence.into_iter().map(SequenceItem::from).collect();
        match (result.origin, result.phrase) {
            (ResultOrigin::Phrase, Some(details)) => TranslationResponse::Phrase {
                phrase_label: details.label,
                sequence,
                note: result.note,
                usage: details.usage,
                category: details.category,
                confidence: PHRASE_CONFIDENCE,
            },
            _ => {
                let processing_info = ProcessingInfo {
                    dictionary_matches: count(&result.word_breakdown, WordOrigin::Dictionary),
                    spelled_words: count(&result.word_breakdown, WordOrigin::Spelling),
                };
                TranslationResponse::Text {
                    sequence,
                    note: result.note,
                    word_count: result.word_breakdown.len(),
                    word_breakdown: result.word_breakdown,
                    processing_info,
                    confidence: TEXT_CONFIDENCE,
                }
            }
        }
    }
}

fn count(breakdown: &[WordBreakdown], origin: WordOrigin) -> usize {
    breakdown.iter().filter(|w| w.origin == origin).count()
}

/// One step of sequential playback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackFrame {
    pub label: String,
    pub image_url: Option<String>,
}

/// Strips a sequence down to what a playback UI shows: spaces become
/// `SPACE` frames, word-start and punctuation markers are omitted.
pub fn playback_frames(sequence: &[SignUnit]) -> Vec<PlaybackFrame> {
    sequence
        .iter()
        .filter_map(|unit| match unit.kind {
            SignKind::Space => Some(PlaybackFrame {
                label: "SPACE".to_string(),
                image_url: None,
            }),
            SignKind::WordStart | SignKind::Punctuation => None,
            SignKind::Letter | SignKind::Number | SignKind::Word => Some(PlaybackFrame {
                label: unit.symbol.clone(),
                image_url: unit.image_ref.clone(),
            }),
        })
        .collect()
}
