use std::fmt;
use serde::{Deserialize, Serialize};

use crate::drill_engine::helpers;

// ---------------------------------------------------------------------------
// Vocabulary entries
// ---------------------------------------------------------------------------

/// One vocabulary item as held by the [`LexicalStore`](crate::LexicalStore).
///
/// `german` and `english` are always non-empty. Optional fields are `None`
/// rather than empty strings; the loader normalises that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalEntry {
    /// Headword, including the article for nouns ("die Entscheidung").
    pub german: String,
    /// Primary translation. May list alternatives separated by commas.
    pub english: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_sentence: Option<String>,
    /// German-language gloss.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// German opposite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antonym: Option<String>,
}

impl LexicalEntry {
    /// Minimal entry with only the mandatory fields.
    pub fn new(german: impl Into<String>, english: impl Into<String>) -> Self {
        LexicalEntry {
            german: german.into(),
            english: english.into(),
            example_sentence: None,
            definition: None,
            antonym: None,
        }
    }

    pub fn with_sentence(mut self, sentence: impl Into<String>) -> Self {
        self.example_sentence = Some(sentence.into());
        self
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    pub fn with_antonym(mut self, antonym: impl Into<String>) -> Self {
        self.antonym = Some(antonym.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Modes
// ---------------------------------------------------------------------------

/// The six exercise kinds. `Any` is a selector, the other five are concrete
/// modes an [`Exercise`] can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Any,
    /// German headword → English translation.
    G2E,
    /// English translation → German headword.
    E2G,
    /// Fill in the blank in the example sentence.
    Sentence,
    /// German gloss → headword.
    Definition,
    /// Antonym → headword.
    Opposite,
}

impl Mode {
    /// Every mode an exercise can actually be rendered in, in canonical order.
    pub const CONCRETE: [Mode; 5] = [
        Mode::G2E,
        Mode::E2G,
        Mode::Sentence,
        Mode::Definition,
        Mode::Opposite,
    ];

    pub fn is_concrete(self) -> bool {
        self != Mode::Any
    }

    /// Short prefix used in exercise ids.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Mode::Any        => "AN",
            Mode::G2E        => "GE",
            Mode::E2G        => "EG",
            Mode::Sentence   => "FS",
            Mode::Definition => "DG",
            Mode::Opposite   => "OG",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Any        => "Any",
            Mode::G2E        => "German → English",
            Mode::E2G        => "English → German",
            Mode::Sentence   => "Fill in the Blank",
            Mode::Definition => "Definition → German",
            Mode::Opposite   => "Opposite → German",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Input to [`generate_exercise`](crate::generate_exercise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRequest {
    pub mode: Mode,
    /// `Some(seed)` reproduces the same exercise for the same store.
    pub rng_seed: Option<u64>,
}

impl ExerciseRequest {
    /// Request with entropy seeding.
    pub fn new(mode: Mode) -> Self {
        ExerciseRequest { mode, rng_seed: None }
    }

    pub fn seeded(mode: Mode, seed: u64) -> Self {
        ExerciseRequest { mode, rng_seed: Some(seed) }
    }
}

/// Outcome of [`Exercise::check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn is_correct(self) -> bool {
        self == Verdict::Correct
    }
}

/// A rendered exercise. `mode` is always concrete, never [`Mode::Any`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// `<PREFIX>-<8 hex digits>`, prefix taken from the resolved mode.
    pub id: String,
    pub mode: Mode,
    pub prompt: String,
    pub answer: String,
}

impl Exercise {
    /// Compare a learner's reply against the expected answer.
    ///
    /// Case-insensitive, tolerant of surrounding and repeated whitespace.
    /// German → English exercises accept any of the comma-separated
    /// alternatives of the stored translation.
    pub fn check(&self, input: &str) -> Verdict {
        let given = helpers::normalize_answer(input);
        if given.is_empty() {
            return Verdict::Incorrect;
        }

        let matched = match self.mode {
            Mode::G2E => helpers::alternatives(&self.answer)
                .any(|alt| helpers::normalize_answer(alt) == given),
            _ => helpers::normalize_answer(&self.answer) == given,
        };

        if matched { Verdict::Correct } else { Verdict::Incorrect }
    }
}
