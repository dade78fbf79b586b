//! The rendering table: which entries a mode accepts and how it turns an
//! entry into a prompt/answer pair.
//!
//! | Mode         | Eligible when                                   | Prompt                  | Answer      |
//! |--------------|-------------------------------------------------|-------------------------|-------------|
//! | `G2E`        | always                                          | headword                | translation |
//! | `E2G`        | always                                          | translation             | headword    |
//! | `Sentence`   | sentence holds the headword exactly once        | sentence, headword blanked | headword |
//! | `Definition` | definition present                              | definition              | headword    |
//! | `Opposite`   | antonym present                                 | antonym                 | headword    |
//!
//! Eligibility and rendering share one code path per mode, so an entry that
//! passes [`is_eligible`] always renders.

use crate::drill_engine::{helpers, models::{LexicalEntry, Mode}};

/// Prompt and answer for one entry in one concrete mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub prompt: String,
    pub answer: String,
}

/// Does `entry` carry everything `mode` needs? [`Mode::Any`] accepts all.
///
/// [`Mode::Sentence`] is narrower than "sentence contains the headword": the
/// headword must occur exactly once, otherwise blanking one occurrence would
/// leave the answer visible in the prompt.
pub fn is_eligible(mode: Mode, entry: &LexicalEntry) -> bool {
    match mode {
        Mode::Any => true,
        _         => render(mode, entry).is_some(),
    }
}

/// Render `entry` in `mode`. `None` for [`Mode::Any`] or a missing field.
pub fn render(mode: Mode, entry: &LexicalEntry) -> Option<Rendered> {
    let headword = entry.german.clone();
    let (prompt, answer) = match mode {
        Mode::Any => return None,

        Mode::G2E => (headword, entry.english.clone()),

        Mode::E2G => (entry.english.clone(), headword),

        Mode::Sentence => {
            let sentence = entry.example_sentence.as_deref()?;
            (helpers::blank_out(sentence, &entry.german)?, headword)
        }

        Mode::Definition => (present(&entry.definition)?, headword),

        Mode::Opposite => (present(&entry.antonym)?, headword),
    };
    Some(Rendered { prompt, answer })
}

fn present(field: &Option<String>) -> Option<String> {
    field.as_deref().filter(|v| !v.trim().is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision() -> LexicalEntry {
        LexicalEntry::new("die Entscheidung", "the decision")
            .with_definition("eine Wahl treffen")
    }

    #[test]
    fn any_accepts_every_entry_but_never_renders() {
        let e = LexicalEntry::new("gut", "good");
        assert!(is_eligible(Mode::Any, &e));
        assert_eq!(render(Mode::Any, &e), None);
    }

    #[test]
    fn definition_renders_gloss_to_headword() {
        let r = render(Mode::Definition, &decision()).unwrap();
        assert_eq!(r.prompt, "eine Wahl treffen");
        assert_eq!(r.answer, "die Entscheidung");
    }

    #[test]
    fn missing_fields_make_entry_ineligible() {
        let e = decision();
        assert!(!is_eligible(Mode::Sentence, &e));
        assert!(!is_eligible(Mode::Opposite, &e));
        assert!(is_eligible(Mode::G2E, &e));
        assert!(is_eligible(Mode::E2G, &e));
    }

    #[test]
    fn blank_antonym_is_treated_as_missing() {
        let e = LexicalEntry::new("warm", "warm").with_antonym("   ");
        assert!(!is_eligible(Mode::Opposite, &e));
    }

    #[test]
    fn sentence_without_verbatim_headword_is_ineligible() {
        let e = LexicalEntry::new("laufen", "to run").with_sentence("Er läuft schnell.");
        assert!(!is_eligible(Mode::Sentence, &e));
    }

    #[test]
    fn sentence_with_repeated_headword_is_ineligible() {
        let e = LexicalEntry::new("Hund", "dog").with_sentence("Der Hund sieht den Hund.");
        assert!(!is_eligible(Mode::Sentence, &e));
        assert_eq!(render(Mode::Sentence, &e), None);
    }

    #[test]
    fn sentence_blank_keeps_rest_of_sentence() {
        let e = LexicalEntry::new("schnell", "fast").with_sentence("Er läuft schnell.");
        let r = render(Mode::Sentence, &e).unwrap();
        assert_eq!(r.prompt, "Er läuft _____.");
        assert_eq!(r.answer, "schnell");
    }
}
