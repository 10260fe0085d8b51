// File: src/persistence.rs
use crate::config::DataConfig;
use crate::core::types::{DictionaryEntry, Gesture, PhraseEntry};
use crate::error::DataError;
use crate::seed;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Every table the engine reads, in a form that can be written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub dictionary: Vec<DictionaryEntry>,
    pub gestures: Vec<Gesture>,
    pub phrases: Vec<PhraseEntry>,
}

/// Writes the snapshot next to `path` and renames it into place, so readers
/// never observe a half-written file.
pub fn save_to_disk(snapshot: &TableSnapshot, path: &Path) -> Result<(), DataError> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file_mut());
        bincode::serialize_into(&mut writer, snapshot)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    info!(path = %path.display(), "wrote table snapshot");
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<TableSnapshot, DataError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let snapshot: TableSnapshot = bincode::deserialize_from(reader)?;
    Ok(snapshot)
}

/// Reads a JSON array of table rows.
pub fn read_json_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Resolves the configured table sources: a snapshot if one is set,
/// otherwise each JSON table falls back to the built-in seed.
pub fn load_tables(data: &DataConfig) -> Result<TableSnapshot, DataError> {
    if let Some(path) = &data.snapshot {
        info!(path = %path.display(), "loading table snapshot");
        return load_from_disk(path);
    }

    let dictionary = match &data.dictionary {
        Some(path) => read_json_table(path)?,
        None => seed::builtin_dictionary()?,
    };
    let gestures = match &data.gestures {
        Some(path) => read_json_table(path)?,
        None => seed::builtin_gestures()?,
    };
    let phrases = match &data.phrases {
        Some(path) => read_json_table(path)?,
        None => seed::builtin_phrases()?,
    };

    Ok(TableSnapshot {
        dictionary,
        gestures,
        phrases,
    })
}
