//! # german_drill_gen
//!
//! A vocabulary exercise dispenser for German learners.
//!
//! The library loads a fixed JSON dataset of lexical entries and renders them
//! as quiz prompts in five exercise modes: German → English, English → German,
//! fill-in-the-blank, definition → word and opposite → word. A sixth selector,
//! [`Mode::Any`], first picks one of the five modes uniformly and then an entry
//! for it, so modes with large pools don't crowd out the rest. If the drawn
//! mode has no eligible entry, the request fails with [`NoEligibleEntryError`]
//! naming that mode.
//!
//! ## How it works
//!
//! 1. Load a [`LexicalStore`] once at startup. Loading validates every entry
//!    and fails with [`DatasetError`] if any is malformed.
//! 2. Wrap it in an [`ExerciseEngine`] and call
//!    [`next_exercise`](ExerciseEngine::next_exercise) with a mode and an RNG.
//!    Only entries that can be rendered in the resolved mode are ever picked.
//! 3. Show [`Exercise::prompt`]; later reveal [`Exercise::answer`] or grade a
//!    reply with [`Exercise::check`].
//!
//! The [`chat`] module turns text commands (`/next_g2e`, `/reveal`, …) into
//! engine calls and reply text for any line-based chat transport.
//!
//! ## Quick start
//!
//! ```rust
//! use german_drill_gen::{generate_exercise, ExerciseRequest, LexicalStore, Mode};
//!
//! let store = LexicalStore::from_json_str(r#"[
//!     {"german": "schnell", "english": "fast", "example_sentence": "Er läuft schnell."}
//! ]"#).unwrap();
//!
//! let ex = generate_exercise(&store, ExerciseRequest::seeded(Mode::Sentence, 42)).unwrap();
//! assert_eq!(ex.prompt, "Er läuft _____.");
//! assert_eq!(ex.answer, "schnell");
//! assert!(ex.check("  Schnell ").is_correct());
//! ```

pub mod chat;
pub mod config;
pub mod dataset_tools;
pub mod drill_engine;

// Convenience re-exports so callers can use `german_drill_gen::generate_exercise`
// directly without reaching into `drill_engine::`.
pub use config::DrillConfig;
pub use drill_engine::{
    generate_exercise, DatasetError, Exercise, ExerciseEngine, ExerciseRequest, LexicalEntry,
    LexicalStore, Mode, NoEligibleEntryError, Verdict,
};
