// src/core/resolver.rs
use crate::core::types::{DropReason, DroppedSymbol, Gesture, SignKind, SignUnit, WordOrigin};
use crate::error::{StoreError, StoreKind, TranslateError};
use crate::store::{Dictionary, GestureStore};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::time::Duration;
use tracing::{debug, warn};

/// Bounds applied to every store lookup made during one call.
#[derive(Debug, Clone, Copy)]
pub struct LookupPolicy {
    pub timeout: Duration,
    pub concurrency: usize,
}

impl Default for LookupPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(2000),
            concurrency: 16,
        }
    }
}

/// The signs for one word plus what could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWord {
    pub signs: Vec<SignUnit>,
    pub note: String,
    pub origin: WordOrigin,
    pub dropped: Vec<DroppedSymbol>,
}

/// What a word resolves to before any gesture lookup.
struct WordPlan<'a> {
    word: &'a str,
    symbols: Vec<(String, SignKind)>,
    note: String,
    origin: WordOrigin,
}

/// Dictionary first, else letter by letter. The first strategy that applies
/// wins; they are never merged.
fn plan_word<'a>(word: &'a str, dictionary: &Dictionary) -> WordPlan<'a> {
    match dictionary.lookup(word) {
        Some(entry) => WordPlan {
            word,
            symbols: entry
                .signs
                .iter()
                .map(|symbol| (symbol.clone(), kind_of(symbol)))
                .collect(),
            note: entry.note.clone(),
            origin: WordOrigin::Dictionary,
        },
        None => WordPlan {
            word,
            symbols: spelling_plan(word),
            note: format!("Spelled letter by letter: {}", word),
            origin: WordOrigin::Spelling,
        },
    }
}

/// Resolves a single word.
pub async fn resolve_word(
    word: &str,
    dictionary: &Dictionary,
    gestures: &dyn GestureStore,
    policy: LookupPolicy,
) -> Result<ResolvedWord, TranslateError> {
    let plan = plan_word(word, dictionary);
    let symbols = plan.symbols.iter().map(|(s, _)| s.as_str()).collect();
    let found = lookup_all(symbols, gestures, policy).await?;
    Ok(finish_word(plan, found))
}

/// Resolves every word of one call, in order. All gesture lookups of the
/// call share one stream, so at most `policy.concurrency` are in flight.
pub async fn resolve_words(
    words: &[&str],
    dictionary: &Dictionary,
    gestures: &dyn GestureStore,
    policy: LookupPolicy,
) -> Result<Vec<ResolvedWord>, TranslateError> {
    let plans: Vec<WordPlan> = words.iter().map(|&w| plan_word(w, dictionary)).collect();
    let symbols: Vec<&str> = plans
        .iter()
        .flat_map(|p| p.symbols.iter().map(|(s, _)| s.as_str()))
        .collect();
    let mut found = lookup_all(symbols, gestures, policy).await?.into_iter();

    Ok(plans
        .into_iter()
        .map(|plan| {
            let hits = found.by_ref().take(plan.symbols.len()).collect();
            finish_word(plan, hits)
        })
        .collect())
}

/// Looks up every symbol, bounded and in input order. The first failure
/// aborts the rest.
async fn lookup_all(
    symbols: Vec<&str>,
    gestures: &dyn GestureStore,
    policy: LookupPolicy,
) -> Result<Vec<Option<Gesture>>, TranslateError> {
    stream::iter(symbols.into_iter().map(|symbol| lookup_gesture(gestures, symbol, policy)))
        .buffered(policy.concurrency.max(1))
        .try_collect()
        .await
}

fn finish_word(plan: WordPlan, found: Vec<Option<Gesture>>) -> ResolvedWord {
    let WordPlan {
        word,
        symbols,
        note,
        origin,
    } = plan;

    let mut signs = Vec::with_capacity(symbols.len());
    let mut dropped = Vec::new();
    for ((symbol, kind), found) in symbols.into_iter().zip(found) {
        match found {
            Some(gesture) => signs.push(SignUnit {
                kind,
                symbol: gesture.label,
                image_ref: gesture.image_ref,
                video_ref: gesture.video_ref,
                note: gesture.note,
                origin: origin.into(),
            }),
            None => {
                warn!(word, symbol = %symbol, "no gesture for symbol, dropping it");
                dropped.push(DroppedSymbol {
                    word: word.to_string(),
                    symbol,
                    reason: DropReason::MissingGesture,
                });
            }
        }
    }

    debug!(word, ?origin, signs = signs.len(), "resolved word");
    ResolvedWord {
        signs,
        note,
        origin,
        dropped,
    }
}

/// One gesture lookup, bounded by the policy timeout.
pub async fn lookup_gesture(
    gestures: &dyn GestureStore,
    symbol: &str,
    policy: LookupPolicy,
) -> Result<Option<Gesture>, TranslateError> {
    match tokio::time::timeout(policy.timeout, gestures.by_label(symbol)).await {
        Ok(result) => result.map_err(|e| TranslateError::store(StoreKind::Gesture, e)),
        Err(_) => Err(TranslateError::store(
            StoreKind::Gesture,
            StoreError::new(format!("lookup of {symbol:?} timed out")),
        )),
    }
}

fn kind_of(symbol: &str) -> SignKind {
    if !symbol.is_empty() && symbol.chars().all(|c| c.is_ascii_digit()) {
        SignKind::Number
    } else {
        SignKind::Letter
    }
}

/// Letters and digits of the word; everything else is skipped.
fn spelling_plan(word: &str) -> Vec<(String, SignKind)> {
    word.to_uppercase()
        .chars()
        .filter_map(|c| match c {
            'A'..='Z' => Some((c.to_string(), SignKind::Letter)),
            '0'..='9' => Some((c.to_string(), SignKind::Number)),
            _ => None,
        })
        .collect()
}
