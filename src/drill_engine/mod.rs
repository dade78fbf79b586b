//! Core drill engine: vocabulary store, mode rules and exercise generation.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: entries, modes, request/exercise structs, verdicts |
//! | `error`     | `DatasetError` (load time) and `NoEligibleEntryError` (per request) |
//! | `store`     | JSON loading, validation, eligibility queries, random picks |
//! | `modes`     | The per-mode eligibility and rendering table |
//! | `generator` | `ExerciseEngine` and the seeded `generate_exercise()` entry point |
//! | `hints`     | Multiple-choice options with distractors from the store |
//! | `helpers`   | Blank substitution and answer normalisation |

pub mod error;
pub mod generator;
pub mod helpers;
pub mod hints;
pub mod models;
pub mod modes;
pub mod store;

pub use error::{DatasetError, NoEligibleEntryError};
pub use generator::{generate_exercise, ExerciseEngine};
pub use models::{Exercise, ExerciseRequest, LexicalEntry, Mode, Verdict};
pub use store::LexicalStore;
