// src/core/explain.rs
use crate::core::types::{Token, TokenKind, WordBreakdown, WordOrigin};

/// Cue substring and the clause it adds. Every matching cue contributes.
const CUES: &[(&str, &str)] = &[
    ("help", " Use an urgent facial expression when signing HELP to convey urgency."),
    ("thank", " Maintain eye contact and smile when expressing gratitude."),
    ("sorry", " Show sincerity with your facial expression when apologizing."),
    ("please", " Use a polite, gentle expression when signing PLEASE."),
];

const QUESTION_CLAUSE: &str =
    " Remember to use questioning facial expressions (raised eyebrows, head tilt forward).";
const EXCLAMATION_CLAUSE: &str =
    " Use emphatic facial expressions and stronger movements for emphasis.";

fn has_punctuation(tokens: &[Token], mark: &str) -> bool {
    tokens
        .iter()
        .any(|t| t.kind == TokenKind::Punctuation && t.text == mark)
}

/// Builds the usage note for a text-resolved translation.
pub fn explain(tokens: &[Token], breakdown: &[WordBreakdown]) -> String {
    let words: Vec<&str> = tokens
        .iter()
        .filter(|t| t.is_word())
        .map(|t| t.text.as_str())
        .collect();

    let mut note = match words.len() {
        0 => "No words to sign.".to_string(),
        1 => format!(
            "Single word: \"{}\". Sign this word clearly and hold the gesture for a moment.",
            words[0]
        ),
        n @ 2..=3 => format!(
            "Short phrase with {n} words. Sign each word separately with smooth transitions between them."
        ),
        n => format!(
            "Sentence with {n} words. In ISL, sign each word clearly, maintaining appropriate facial expressions and body language."
        ),
    };

    let joined = words.join(" ").to_lowercase();
    for (cue, clause) in CUES {
        if joined.contains(cue) {
            note.push_str(clause);
        }
    }

    if has_punctuation(tokens, "?") {
        note.push_str(QUESTION_CLAUSE);
    }
    if has_punctuation(tokens, "!") {
        note.push_str(EXCLAMATION_CLAUSE);
    }

    let from_dictionary = breakdown
        .iter()
        .filter(|w| w.origin == WordOrigin::Dictionary)
        .count();
    let spelled = breakdown
        .iter()
        .filter(|w| w.origin == WordOrigin::Spelling)
        .count();
    if from_dictionary > 0 {
        note.push_str(&format!(" {from_dictionary} word(s) found in ISL dictionary."));
    }
    if spelled > 0 {
        note.push_str(&format!(" {spelled} word(s) spelled letter by letter."));
    }

    note
}
