//! Offline dataset maintenance: listing headwords and merging new entries
//! into an existing dataset file.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::drill_engine::{DatasetError, LexicalStore};

#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} must hold a list of entries")]
    NotAList { path: PathBuf },

    #[error("merged dataset is invalid: {0}")]
    Invalid(#[from] DatasetError),
}

/// Counters printed after a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub words_before: usize,
    pub words_after: usize,
    pub words_added: usize,
    /// Existing words with at least one changed field.
    pub words_updated: usize,
    /// Skipped input objects with no usable headword.
    pub skipped: usize,
    pub field_updates: BTreeMap<String, usize>,
}

/// All headwords in dataset order.
pub fn headwords(store: &LexicalStore) -> Vec<&str> {
    store.entries().iter().map(|e| e.german.as_str()).collect()
}

/// Merge key of a raw dataset object; mirrors how the loader builds `german`.
fn headword_key(obj: &Map<String, Value>) -> Option<String> {
    let text = |field: &str| {
        obj.get(field)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    };
    if let Some(german) = text("german") {
        return Some(german.to_string());
    }
    let word = text("word")?;
    Some(match text("article") {
        Some(article) => format!("{article} {word}"),
        None => word.to_string(),
    })
}

/// Legacy field names and their canonical replacements.
const LEGACY_FIELDS: [(&str, &str); 3] = [
    ("translation_en", "english"),
    ("explanation_de", "definition"),
    ("opposite",       "antonym"),
];

/// Rename legacy fields of an incoming object to their canonical names, so an
/// update lands on the field the loader actually reads. A legacy field whose
/// canonical twin is already present is left alone.
fn canonicalize(mut obj: Map<String, Value>) -> Map<String, Value> {
    for (old, new) in LEGACY_FIELDS {
        if obj.contains_key(new) {
            continue;
        }
        if let Some(value) = obj.remove(old) {
            obj.insert(new.to_string(), value);
        }
    }
    if !obj.contains_key("german") {
        if let Some(german) = headword_key(&obj) {
            obj.remove("word");
            obj.remove("article");
            obj.insert("german".to_string(), Value::String(german));
        }
    }
    obj
}

/// Merge `incoming` objects into `db`, keyed by headword.
///
/// Known words get every non-null incoming field that differs overwritten;
/// unknown words are appended whole. Incoming legacy field names are
/// rewritten to canonical ones first. Non-objects and objects without a
/// headword are skipped.
pub fn merge_entries(mut db: Vec<Value>, incoming: Vec<Value>) -> (Vec<Value>, MergeReport) {
    let mut report = MergeReport { words_before: db.len(), ..MergeReport::default() };

    let mut index: HashMap<String, usize> = db
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.as_object().and_then(headword_key).map(|k| (k, i)))
        .collect();

    for entry in incoming {
        let Value::Object(obj) = entry else {
            report.skipped += 1;
            continue;
        };
        let obj = canonicalize(obj);
        let Some(key) = headword_key(&obj) else {
            report.skipped += 1;
            continue;
        };

        match index.get(&key).copied() {
            Some(i) => {
                let Some(existing) = db[i].as_object_mut() else { continue };
                let mut changed = false;
                for (field, value) in &obj {
                    if value.is_null() || existing.get(field) == Some(value) {
                        continue;
                    }
                    existing.insert(field.clone(), value.clone());
                    *report.field_updates.entry(field.clone()).or_default() += 1;
                    changed = true;
                }
                if changed {
                    report.words_updated += 1;
                }
            }
            None => {
                index.insert(key, db.len());
                db.push(Value::Object(obj));
                report.words_added += 1;
            }
        }
    }

    report.words_after = db.len();
    (db, report)
}

fn read_json(path: &Path) -> Result<Value, MergeError> {
    let text = fs::read_to_string(path).map_err(|source| MergeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| MergeError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge the file at `input` into the dataset at `db`, writing the result to
/// `output`.
///
/// A missing `db` file starts from an empty dataset. Nothing is written
/// unless the merged result loads as a valid store.
pub fn merge_files(db: &Path, input: &Path, output: &Path) -> Result<MergeReport, MergeError> {
    let existing = if db.exists() {
        match read_json(db)? {
            Value::Array(items) => items,
            _ => return Err(MergeError::NotAList { path: db.to_path_buf() }),
        }
    } else {
        tracing::warn!(path = %db.display(), "dataset not found, starting a new one");
        Vec::new()
    };

    let incoming = match read_json(input)? {
        Value::Array(items) => items,
        obj @ Value::Object(_) => vec![obj],
        _ => return Err(MergeError::NotAList { path: input.to_path_buf() }),
    };

    let (merged, report) = merge_entries(existing, incoming);
    let merged = Value::Array(merged);
    LexicalStore::from_json_value(merged.clone())?;

    let mut text = serde_json::to_string_pretty(&merged).map_err(|source| MergeError::Json {
        path: output.to_path_buf(),
        source,
    })?;
    text.push('\n');
    fs::write(output, text).map_err(|source| MergeError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!(
        output = %output.display(),
        added = report.words_added,
        updated = report.words_updated,
        "dataset merged"
    );
    Ok(report)
}
