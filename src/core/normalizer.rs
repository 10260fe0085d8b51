// src/core/normalizer.rs
use crate::error::TranslateError;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const CONTRACTIONS: &[(&str, &str)] = &[
    ("don't", "do not"),
    ("won't", "will not"),
    ("can't", "cannot"),
    ("it's", "it is"),
    ("I'm", "I am"),
    ("you're", "you are"),
    ("we're", "we are"),
    ("they're", "they are"),
    ("he's", "he is"),
    ("she's", "she is"),
    ("that's", "that is"),
    ("what's", "what is"),
    ("who's", "who is"),
    ("where's", "where is"),
    ("how's", "how is"),
    ("let's", "let us"),
    ("I've", "I have"),
    ("you've", "you have"),
    ("we've", "we have"),
    ("they've", "they have"),
    ("I'll", "I will"),
    ("you'll", "you will"),
    ("we'll", "we will"),
    ("they'll", "they will"),
    ("I'd", "I would"),
    ("you'd", "you would"),
    ("he'd", "he would"),
    ("she'd", "she would"),
    ("we'd", "we would"),
    ("they'd", "they would"),
];

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

static CONTRACTION: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<String> = CONTRACTIONS
        .iter()
        .map(|(from, _)| regex::escape(from))
        .collect();
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives.join("|"))).expect("static regex")
});

fn expansion_for(matched: &str) -> Option<&'static str> {
    CONTRACTIONS
        .iter()
        .find(|(from, _)| from.eq_ignore_ascii_case(matched))
        .map(|(_, to)| *to)
}

/// Collapses whitespace, trims, and expands contractions.
///
/// Blank input is rejected; callers validate before the pipeline runs, so
/// this only fires when the normalizer is used directly.
pub fn normalize(text: &str) -> Result<String, TranslateError> {
    let collapsed = WHITESPACE.replace_all(text.trim(), " ");
    if collapsed.is_empty() {
        return Err(TranslateError::InvalidInput(
            "text must be a non-empty string".to_string(),
        ));
    }

    let expanded = CONTRACTION.replace_all(&collapsed, |caps: &Captures| {
        let matched = &caps[0];
        expansion_for(matched).unwrap_or(matched).to_string()
    });
    Ok(expanded.into_owned())
}
