//! Chat front end: turns raw message text into engine calls and reply text.
//!
//! Network delivery is left to the caller; the binary drives a
//! [`Dispatcher`] from stdin as a single chat.

pub mod command;
pub mod session;

use std::collections::HashMap;

use rand::Rng;

use crate::drill_engine::ExerciseEngine;

pub use command::{parse, Command, CommandError};
pub use session::{question_text, ChatSession};

pub type ChatId = i64;

/// Routes messages to per-chat sessions. Sessions never see each other.
pub struct Dispatcher<'a> {
    engine: ExerciseEngine<'a>,
    sessions: HashMap<ChatId, ChatSession>,
    max_sessions: usize,
    hint_options: usize,
    tick: u64,
}

impl<'a> Dispatcher<'a> {
    pub fn new(engine: ExerciseEngine<'a>, max_sessions: usize, hint_options: usize) -> Self {
        Dispatcher {
            engine,
            sessions: HashMap::new(),
            max_sessions: max_sessions.max(1),
            hint_options,
            tick: 0,
        }
    }

    pub fn session(&self, chat: ChatId) -> Option<&ChatSession> {
        self.sessions.get(&chat)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Handle one incoming message and return the replies for that chat.
    pub fn handle_message<R: Rng + ?Sized>(
        &mut self,
        chat: ChatId,
        text: &str,
        rng: &mut R,
    ) -> Vec<String> {
        let command = match command::parse(text) {
            Ok(c) => c,
            Err(CommandError::Empty) => return Vec::new(),
            Err(err @ CommandError::Unknown(_)) => {
                tracing::debug!(chat, %err, "rejected command");
                return vec![format!("{err}. Send /help for the list of commands.")];
            }
        };
        tracing::debug!(chat, ?command, "incoming command");

        self.tick += 1;
        if !self.sessions.contains_key(&chat) && self.sessions.len() >= self.max_sessions {
            self.evict_idlest();
        }
        let session = self.sessions.entry(chat).or_default();
        session.last_active = self.tick;
        session.handle(&self.engine, command, self.hint_options, rng)
    }

    fn evict_idlest(&mut self) {
        let idlest = self
            .sessions
            .iter()
            .min_by_key(|(_, s)| s.last_active)
            .map(|(&id, _)| id);
        if let Some(id) = idlest {
            self.sessions.remove(&id);
            tracing::info!(chat = id, "evicted idle chat session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill_engine::{LexicalEntry, LexicalStore};
    use rand::{rngs::StdRng, SeedableRng};

    fn store() -> LexicalStore {
        LexicalStore::from_entries(vec![
            LexicalEntry::new("der Hund", "the dog"),
            LexicalEntry::new("die Katze", "the cat"),
        ])
        .unwrap()
    }

    #[test]
    fn chats_keep_separate_pending_exercises() {
        let store = store();
        let mut d = Dispatcher::new(ExerciseEngine::new(&store), 10, 4);
        let mut rng = StdRng::seed_from_u64(11);

        d.handle_message(1, "/next_e2g", &mut rng);
        assert!(d.session(1).and_then(|s| s.pending()).is_some());

        // Chat 2 answering must not consume chat 1's exercise.
        assert!(d.handle_message(2, "der Hund", &mut rng).is_empty());
        assert!(d.session(1).and_then(|s| s.pending()).is_some());
    }

    #[test]
    fn unknown_command_gets_help_pointer() {
        let store = store();
        let mut d = Dispatcher::new(ExerciseEngine::new(&store), 10, 4);
        let mut rng = StdRng::seed_from_u64(1);
        let replies = d.handle_message(1, "/next_fr", &mut rng);
        assert_eq!(replies, ["unknown command: /next_fr. Send /help for the list of commands."]);
        assert_eq!(d.session_count(), 0);
    }

    #[test]
    fn least_recent_session_is_evicted_at_capacity() {
        let store = store();
        let mut d = Dispatcher::new(ExerciseEngine::new(&store), 2, 4);
        let mut rng = StdRng::seed_from_u64(1);

        d.handle_message(1, "/start", &mut rng);
        d.handle_message(2, "/start", &mut rng);
        d.handle_message(1, "/help", &mut rng);
        d.handle_message(3, "/start", &mut rng);

        assert_eq!(d.session_count(), 2);
        assert!(d.session(1).is_some());
        assert!(d.session(2).is_none());
        assert!(d.session(3).is_some());
    }
}
