use rand::Rng;

use crate::chat::command::Command;
use crate::drill_engine::{Exercise, ExerciseEngine, Mode, NoEligibleEntryError};

pub const WELCOME: &str = "Willkommen! I am your German tutor.\n\n\
    Use the following commands to practice:\n\
    /next - Random exercise\n\
    /next_g2e - German to English\n\
    /next_e2g - English to German\n\
    /next_sentence - Fill in the blank\n\
    /next_d2g - Definition to German\n\
    /next_o2g - Opposite to German\n\n\
    Reply with your answer, or use /hint for options and /reveal to see the answer.";

pub const NO_ACTIVE_EXERCISE: &str = "There is no active exercise. Send /next to get one.";

/// State of one chat: at most one exercise waiting for an answer.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    pending: Option<Exercise>,
    /// Dispatcher tick of the last message, used for eviction.
    pub(crate) last_active: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<&Exercise> {
        self.pending.as_ref()
    }

    /// Apply one command and return the replies to send, possibly none.
    pub fn handle<R: Rng + ?Sized>(
        &mut self,
        engine: &ExerciseEngine<'_>,
        command: Command,
        hint_count: usize,
        rng: &mut R,
    ) -> Vec<String> {
        match command {
            Command::Start | Command::Help => vec![WELCOME.to_string()],

            Command::Next(mode) => match engine.next_exercise(mode, rng) {
                Ok(exercise) => {
                    let text = question_text(&exercise);
                    self.pending = Some(exercise);
                    vec![text]
                }
                Err(err) => vec![unavailable_text(err)],
            },

            Command::Hint => match &self.pending {
                Some(exercise) => {
                    let options = engine.hint_options(exercise, hint_count, rng);
                    let lines: Vec<String> = options.iter().map(|o| format!("• {o}")).collect();
                    vec![format!("Pick one:\n{}", lines.join("\n"))]
                }
                None => vec![NO_ACTIVE_EXERCISE.to_string()],
            },

            Command::Reveal => match self.pending.take() {
                Some(exercise) => vec![format!("The right answer is: {}", exercise.answer)],
                None => vec![NO_ACTIVE_EXERCISE.to_string()],
            },

            Command::Answer(text) => match self.pending.take() {
                Some(exercise) if exercise.check(&text).is_correct() => {
                    vec!["Congrats! You got the right answer. 🎉".to_string()]
                }
                Some(exercise) => {
                    vec![format!("So close! The right answer is: {}", exercise.answer)]
                }
                None => Vec::new(),
            },
        }
    }
}

/// Wrap the bare prompt in the instruction for its mode.
pub fn question_text(exercise: &Exercise) -> String {
    let p = &exercise.prompt;
    match exercise.mode {
        Mode::G2E        => format!("Translate this into English: *{p}*"),
        Mode::E2G        => format!("Translate this into German (include article if it's a noun): *{p}*"),
        Mode::Sentence   => format!("Fill in the missing word:\n\n{p}"),
        Mode::Definition => format!("What word matches this definition?\n\n*{p}*"),
        Mode::Opposite   => format!("What is the opposite of: *{p}*?"),
        Mode::Any        => p.clone(),
    }
}

fn unavailable_text(err: NoEligibleEntryError) -> String {
    match err.mode {
        Mode::Any => "Sorry, there are no exercises available right now.".to_string(),
        mode => format!("Sorry, there are no \"{mode}\" exercises available right now."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill_engine::{LexicalEntry, LexicalStore};
    use rand::{rngs::StdRng, SeedableRng};

    fn store() -> LexicalStore {
        LexicalStore::from_entries(vec![
            LexicalEntry::new("schnell", "fast, quick").with_sentence("Er läuft schnell."),
            LexicalEntry::new("langsam", "slow"),
        ])
        .unwrap()
    }

    #[test]
    fn correct_answer_clears_pending() {
        let store = store();
        let engine = ExerciseEngine::new(&store);
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = ChatSession::new();

        let replies = session.handle(&engine, Command::Next(Mode::Sentence), 4, &mut rng);
        assert_eq!(replies, ["Fill in the missing word:\n\nEr läuft _____."]);

        let replies = session.handle(&engine, Command::Answer("  SCHNELL ".into()), 4, &mut rng);
        assert!(replies[0].starts_with("Congrats!"));
        assert!(session.pending().is_none());
    }

    #[test]
    fn wrong_answer_reveals_and_clears() {
        let store = store();
        let engine = ExerciseEngine::new(&store);
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = ChatSession::new();

        session.handle(&engine, Command::Next(Mode::Sentence), 4, &mut rng);
        let replies = session.handle(&engine, Command::Answer("langsam".into()), 4, &mut rng);
        assert_eq!(replies, ["So close! The right answer is: schnell"]);
        assert!(session.pending().is_none());
    }

    #[test]
    fn answer_without_exercise_is_ignored() {
        let store = store();
        let engine = ExerciseEngine::new(&store);
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = ChatSession::new();
        assert!(session.handle(&engine, Command::Answer("hallo".into()), 4, &mut rng).is_empty());
    }

    #[test]
    fn reveal_shows_answer_once() {
        let store = store();
        let engine = ExerciseEngine::new(&store);
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = ChatSession::new();

        session.handle(&engine, Command::Next(Mode::Sentence), 4, &mut rng);
        assert_eq!(
            session.handle(&engine, Command::Reveal, 4, &mut rng),
            ["The right answer is: schnell"]
        );
        assert_eq!(session.handle(&engine, Command::Reveal, 4, &mut rng), [NO_ACTIVE_EXERCISE]);
    }

    #[test]
    fn missing_mode_gives_fallback_and_keeps_session_usable() {
        let store = store();
        let engine = ExerciseEngine::new(&store);
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = ChatSession::new();

        let replies = session.handle(&engine, Command::Next(Mode::Opposite), 4, &mut rng);
        assert!(replies[0].starts_with("Sorry"), "{replies:?}");
        assert!(session.pending().is_none());

        let replies = session.handle(&engine, Command::Next(Mode::G2E), 4, &mut rng);
        assert!(replies[0].starts_with("Translate this into English"));
    }

    #[test]
    fn hint_lists_correct_option() {
        let store = store();
        let engine = ExerciseEngine::new(&store);
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = ChatSession::new();

        session.handle(&engine, Command::Next(Mode::Sentence), 4, &mut rng);
        let replies = session.handle(&engine, Command::Hint, 4, &mut rng);
        assert!(replies[0].contains("• schnell"));
        assert!(session.pending().is_some());
    }
}
