//! In-memory vocabulary store.
//!
//! Loaded once, read-only afterwards. Loading is all-or-nothing: one bad entry
//! rejects the whole dataset.

use std::fs;
use std::path::Path;

use rand::{seq::SliceRandom, Rng};
use serde::Deserialize;
use serde_json::Value;

use crate::drill_engine::{
    error::{DatasetError, NoEligibleEntryError},
    helpers::non_blank,
    models::{LexicalEntry, Mode},
    modes,
};

/// Wire shape of one dataset object. Every field is optional here; presence
/// of the mandatory ones is checked in [`validate`].
///
/// Legacy names are kept untyped: they are consulted only when the canonical
/// field is absent, and only if they hold a string.
#[derive(Debug, Default, Deserialize)]
struct RawEntry {
    #[serde(default)]
    german: Option<String>,
    #[serde(default)]
    english: Option<String>,
    #[serde(default)]
    example_sentence: Option<String>,
    #[serde(default)]
    definition: Option<String>,
    #[serde(default)]
    antonym: Option<String>,

    #[serde(default)]
    word: Option<Value>,
    #[serde(default)]
    article: Option<Value>,
    #[serde(default)]
    translation_en: Option<Value>,
    #[serde(default)]
    explanation_de: Option<Value>,
    #[serde(default)]
    opposite: Option<Value>,
}

/// Immutable collection of [`LexicalEntry`] in dataset order.
#[derive(Debug, Clone, Default)]
pub struct LexicalStore {
    entries: Vec<LexicalEntry>,
}

impl LexicalStore {
    /// Read and parse a JSON dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_str(&text)?;
        tracing::info!(path = %path.display(), entries = store.len(), "dataset loaded");
        for (mode, count) in store.eligible_counts() {
            if count == 0 {
                tracing::warn!(?mode, "no entries eligible for mode");
            } else {
                tracing::debug!(?mode, count, "eligible entries");
            }
        }
        Ok(store)
    }

    /// Parse a JSON dataset held in memory.
    pub fn from_json_str(text: &str) -> Result<Self, DatasetError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json_value(value)
    }

    /// Validate an already-parsed JSON document.
    pub fn from_json_value(value: Value) -> Result<Self, DatasetError> {
        let items = match value {
            Value::Array(items) => items,
            _ => return Err(DatasetError::NotAList),
        };

        let entries = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                if !item.is_object() {
                    return Err(DatasetError::EntryNotObject { index });
                }
                let raw = RawEntry::deserialize(item)
                    .map_err(|source| DatasetError::InvalidField { index, source })?;
                validate(index, raw)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LexicalStore { entries })
    }

    /// Build a store from entries constructed in code, applying the same
    /// checks as the JSON loader.
    pub fn from_entries(entries: Vec<LexicalEntry>) -> Result<Self, DatasetError> {
        let entries = entries
            .into_iter()
            .enumerate()
            .map(|(index, e)| {
                validate(index, RawEntry {
                    german: Some(e.german),
                    english: Some(e.english),
                    example_sentence: e.example_sentence,
                    definition: e.definition,
                    antonym: e.antonym,
                    ..RawEntry::default()
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LexicalStore { entries })
    }

    pub fn entries(&self) -> &[LexicalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries that can be rendered in `mode`, in dataset order.
    pub fn eligible_entries(&self, mode: Mode) -> Vec<&LexicalEntry> {
        self.entries
            .iter()
            .filter(|e| modes::is_eligible(mode, e))
            .collect()
    }

    /// One entry drawn uniformly from [`eligible_entries`](Self::eligible_entries).
    pub fn pick_random<R: Rng + ?Sized>(
        &self,
        mode: Mode,
        rng: &mut R,
    ) -> Result<&LexicalEntry, NoEligibleEntryError> {
        self.eligible_entries(mode)
            .choose(rng)
            .copied()
            .ok_or(NoEligibleEntryError { mode })
    }

    /// Eligible entry count for every concrete mode.
    pub fn eligible_counts(&self) -> Vec<(Mode, usize)> {
        Mode::CONCRETE
            .iter()
            .map(|&mode| (mode, self.eligible_entries(mode).len()))
            .collect()
    }
}

/// Turn a raw object into an entry, or explain why it can't be one.
fn validate(index: usize, raw: RawEntry) -> Result<LexicalEntry, DatasetError> {
    let german = match non_blank(raw.german) {
        Some(g) => g,
        None => {
            let word = legacy(raw.word)
                .ok_or(DatasetError::MissingField { index, field: "german" })?;
            match legacy(raw.article) {
                Some(article) => format!("{article} {word}"),
                None => word,
            }
        }
    };
    let english = non_blank(raw.english)
        .or_else(|| legacy(raw.translation_en))
        .ok_or(DatasetError::MissingField { index, field: "english" })?;

    Ok(LexicalEntry {
        german,
        english,
        example_sentence: non_blank(raw.example_sentence),
        definition: non_blank(raw.definition).or_else(|| legacy(raw.explanation_de)),
        antonym: non_blank(raw.antonym).or_else(|| legacy(raw.opposite)),
    })
}

/// Non-blank string value of a legacy field; any other JSON type is ignored.
fn legacy(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => non_blank(Some(s)),
        _ => None,
    }
}
