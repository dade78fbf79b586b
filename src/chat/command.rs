use crate::drill_engine::Mode;

/// One parsed incoming chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Next(Mode),
    Hint,
    Reveal,
    /// Free text, treated as an answer attempt.
    Answer(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command: /{0}")]
    Unknown(String),

    #[error("empty message")]
    Empty,
}

/// Command names and the mode each `/next*` command requests.
pub const NEXT_COMMANDS: [(&str, Mode); 6] = [
    ("next",          Mode::Any),
    ("next_g2e",      Mode::G2E),
    ("next_e2g",      Mode::E2G),
    ("next_sentence", Mode::Sentence),
    ("next_d2g",      Mode::Definition),
    ("next_o2g",      Mode::Opposite),
];

/// Parse raw message text. Anything not starting with `/` is an answer.
///
/// A bot-name suffix (`/next@tutor_bot`) and trailing arguments are ignored.
pub fn parse(text: &str) -> Result<Command, CommandError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CommandError::Empty);
    }
    let Some(rest) = text.strip_prefix('/') else {
        return Ok(Command::Answer(text.to_string()));
    };

    let word = rest.split_whitespace().next().unwrap_or_default();
    let name = word.split('@').next().unwrap_or_default().to_lowercase();

    let command = match name.as_str() {
        "start"  => Command::Start,
        "help"   => Command::Help,
        "hint"   => Command::Hint,
        "reveal" => Command::Reveal,
        other => match NEXT_COMMANDS.iter().find(|(n, _)| *n == other) {
            Some(&(_, mode)) => Command::Next(mode),
            None => return Err(CommandError::Unknown(name)),
        },
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_next_command_maps_to_its_mode() {
        assert_eq!(parse("/next"), Ok(Command::Next(Mode::Any)));
        assert_eq!(parse("/next_g2e"), Ok(Command::Next(Mode::G2E)));
        assert_eq!(parse("/next_e2g"), Ok(Command::Next(Mode::E2G)));
        assert_eq!(parse("/next_sentence"), Ok(Command::Next(Mode::Sentence)));
        assert_eq!(parse("/next_d2g"), Ok(Command::Next(Mode::Definition)));
        assert_eq!(parse("/next_o2g"), Ok(Command::Next(Mode::Opposite)));
    }

    #[test]
    fn bot_suffix_and_arguments_are_ignored() {
        assert_eq!(parse("/next_g2e@tutor_bot"), Ok(Command::Next(Mode::G2E)));
        assert_eq!(parse("  /reveal now "), Ok(Command::Reveal));
    }

    #[test]
    fn unknown_mode_is_rejected_before_the_engine() {
        assert_eq!(parse("/next_x2y"), Err(CommandError::Unknown("next_x2y".into())));
        assert_eq!(parse("/"), Err(CommandError::Unknown(String::new())));
    }

    #[test]
    fn plain_text_is_an_answer() {
        assert_eq!(parse("  die Katze "), Ok(Command::Answer("die Katze".into())));
        assert_eq!(parse("   "), Err(CommandError::Empty));
    }
}
