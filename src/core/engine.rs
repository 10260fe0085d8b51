// src/core/engine.rs
use crate::config::EngineConfig;
use crate::core::assembler::assemble;
use crate::core::explain::explain;
use crate::core::normalizer::normalize;
use crate::core::resolver::{resolve_words, LookupPolicy};
use crate::core::tokenizer::tokenize;
use crate::core::types::{PhraseEntry, ResultOrigin, TranslationResult};
use crate::error::{DataError, StoreError, StoreKind, TranslateError};
use crate::persistence::{load_tables, TableSnapshot};
use crate::projection::{playback_frames, PlaybackFrame, TranslateRequest, TranslationResponse};
use crate::store::{Dictionary, GestureStore, MemoryGestureStore, MemoryPhraseStore, PhraseStore, Swappable};
use std::sync::Arc;
use tracing::{debug, info, info_span, Instrument};

/// One consistent set of tables. A call pins it once and reads nothing else.
#[derive(Clone)]
pub struct Tables {
    pub dictionary: Arc<Dictionary>,
    pub gestures: Arc<dyn GestureStore>,
    pub phrases: Arc<dyn PhraseStore>,
}

/// The text to sign-sequence pipeline. Tables are injected at construction
/// and only ever replaced wholesale.
pub struct TranslationEngine {
    tables: Swappable<Tables>,
    config: EngineConfig,
}

#[derive(Clone)]
struct LocalStores {
    gestures: Arc<MemoryGestureStore>,
    phrases: Arc<MemoryPhraseStore>,
}

/// The engine wired to in-memory stores, with handles kept for catalogue
/// queries and reloads.
pub struct LocalEngine {
    pub engine: TranslationEngine,
    stores: Swappable<LocalStores>,
}

impl LocalEngine {
    pub fn from_tables(tables: TableSnapshot, config: EngineConfig) -> Result<Self, DataError> {
        let (dictionary, stores) = build_local(tables)?;
        let engine = TranslationEngine::new(
            dictionary,
            stores.gestures.clone(),
            stores.phrases.clone(),
            config,
        )?;
        Ok(Self {
            engine,
            stores: Swappable::new(stores),
        })
    }

    /// Loads whatever tables the config points at, the built-in seed otherwise.
    pub fn from_config(config: EngineConfig) -> Result<Self, DataError> {
        let tables = load_tables(&config.data)?;
        info!(
            words = tables.dictionary.len(),
            gestures = tables.gestures.len(),
            phrases = tables.phrases.len(),
            "tables loaded"
        );
        Self::from_tables(tables, config)
    }

    pub fn gestures(&self) -> Arc<MemoryGestureStore> {
        self.stores.load().gestures.clone()
    }

    pub fn phrases(&self) -> Arc<MemoryPhraseStore> {
        self.stores.load().phrases.clone()
    }

    pub fn snapshot(&self) -> TableSnapshot {
        let stores = self.stores.load();
        TableSnapshot {
            dictionary: self.engine.dictionary().entries(),
            gestures: stores.gestures.list(Default::default()),
            phrases: stores.phrases.list(Default::default()),
        }
    }

    /// Replaces all three tables, or none of them if any is invalid. Calls
    /// already running keep the old ones.
    pub fn reload(&self, tables: TableSnapshot) -> Result<(), DataError> {
        let (dictionary, stores) = build_local(tables)?;
        self.engine.replace_tables(Tables {
            dictionary: Arc::new(dictionary),
            gestures: stores.gestures.clone(),
            phrases: stores.phrases.clone(),
        });
        self.stores.swap(stores);
        Ok(())
    }
}

fn build_local(tables: TableSnapshot) -> Result<(Dictionary, LocalStores), DataError> {
    let dictionary = Dictionary::new(tables.dictionary)?;
    let stores = LocalStores {
        gestures: Arc::new(MemoryGestureStore::new(tables.gestures)?),
        phrases: Arc::new(MemoryPhraseStore::new(tables.phrases)?),
    };
    Ok((dictionary, stores))
}

impl TranslationEngine {
    pub fn new(
        dictionary: Dictionary,
        gestures: Arc<dyn GestureStore>,
        phrases: Arc<dyn PhraseStore>,
        config: EngineConfig,
    ) -> Result<Self, DataError> {
        config.validate()?;
        Ok(Self {
            tables: Swappable::new(Tables {
                dictionary: Arc::new(dictionary),
                gestures,
                phrases,
            }),
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn dictionary(&self) -> Arc<Dictionary> {
        self.tables.load().dictionary.clone()
    }

    /// Swaps in a new dictionary for subsequent calls; the stores stay.
    pub fn replace_dictionary(&self, dictionary: Dictionary) {
        let words = dictionary.len();
        let dictionary = Arc::new(dictionary);
        self.tables.update(|current| Tables {
            dictionary,
            ..current.clone()
        });
        info!(words, "dictionary replaced");
    }

    /// Swaps in a whole new table set for subsequent calls.
    pub fn replace_tables(&self, tables: Tables) {
        let words = tables.dictionary.len();
        self.tables.swap(tables);
        info!(words, "tables replaced");
    }

    pub async fn translate(&self, text: &str) -> Result<TranslationResult, TranslateError> {
        self.validate(text)?;
        let span = info_span!("translate", chars = text.chars().count());
        self.run(text).instrument(span).await
    }

    /// Translation shaped for the UI.
    pub async fn respond(
        &self,
        request: &TranslateRequest,
    ) -> Result<TranslationResponse, TranslateError> {
        Ok(self.translate(&request.text).await?.into())
    }

    /// Translation reduced to playback frames.
    pub async fn playback(&self, text: &str) -> Result<Vec<PlaybackFrame>, TranslateError> {
        let result = self.translate(text).await?;
        Ok(playback_frames(&result.sequence))
    }

    fn validate(&self, text: &str) -> Result<(), TranslateError> {
        if text.trim().is_empty() {
            return Err(TranslateError::InvalidInput(
                "text is required and must be a non-empty string".to_string(),
            ));
        }
        let chars = text.chars().count();
        if chars > self.config.max_input_chars {
            return Err(TranslateError::InvalidInput(format!(
                "text is {} characters, the limit is {}",
                chars, self.config.max_input_chars
            )));
        }
        Ok(())
    }

    async fn run(&self, text: &str) -> Result<TranslationResult, TranslateError> {
        // Pin the tables for the whole call.
        let tables = self.tables.load();
        let policy = self.config.lookup_policy();

        let normalized = normalize(text)?;

        if let Some(entry) = match_phrase(tables.phrases.as_ref(), &normalized, policy).await? {
            debug!(phrase = %entry.phrase, "phrase match");
            return Ok(TranslationResult::from_phrase(entry));
        }

        let tokens = tokenize(&normalized);
        let words: Vec<&str> = tokens
            .iter()
            .filter(|t| t.is_word())
            .map(|t| t.text.as_str())
            .collect();
        let mut resolved =
            resolve_words(&words, &tables.dictionary, tables.gestures.as_ref(), policy)
                .await?
                .into_iter();

        let slots = tokens
            .iter()
            .map(|t| if t.is_word() { resolved.next() } else { None })
            .collect();

        let assembly = assemble(&tokens, slots);
        if self.config.strict && !assembly.dropped.is_empty() {
            return Err(TranslateError::UnresolvedSymbols(assembly.dropped));
        }

        let note = explain(&tokens, &assembly.breakdown);
        debug!(
            words = assembly.breakdown.len(),
            units = assembly.sequence.len(),
            dropped = assembly.dropped.len(),
            "text translated"
        );

        Ok(TranslationResult {
            origin: ResultOrigin::Text,
            sequence: assembly.sequence,
            note,
            word_breakdown: assembly.breakdown,
            phrase: None,
            dropped: assembly.dropped,
        })
    }
}

/// Whole-input phrase lookup. Partial matches are never attempted.
async fn match_phrase(
    phrases: &dyn PhraseStore,
    normalized: &str,
    policy: LookupPolicy,
) -> Result<Option<PhraseEntry>, TranslateError> {
    let key = normalized.to_uppercase();
    match tokio::time::timeout(policy.timeout, phrases.by_phrase(&key)).await {
        Ok(found) => found.map_err(|e| TranslateError::store(StoreKind::Phrase, e)),
        Err(_) => Err(TranslateError::store(
            StoreKind::Phrase,
            StoreError::new("phrase lookup timed out"),
        )),
    }
}
