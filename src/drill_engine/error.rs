use std::path::PathBuf;

use crate::drill_engine::models::Mode;

/// The dataset could not be turned into a store. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("cannot read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset must be a JSON list of objects")]
    NotAList,

    #[error("entry {index} is not a JSON object")]
    EntryNotObject { index: usize },

    #[error("entry {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("entry {index} has an invalid field: {source}")]
    InvalidField {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// No entry in the store satisfies the requested mode. Recoverable per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no eligible entry for mode {mode:?}")]
pub struct NoEligibleEntryError {
    pub mode: Mode,
}
