//! Multiple-choice hints: the correct option mixed with distractors drawn
//! from the rest of the store.

use rand::{seq::SliceRandom, Rng};

use crate::drill_engine::{
    helpers::{normalize_answer, primary_alternative},
    models::{Exercise, LexicalEntry, Mode},
    store::LexicalStore,
};

/// Upper bound on random draws while collecting distractors.
pub const MAX_DRAWS: usize = 50;

/// How an entry appears as an option in `mode`.
fn as_option(mode: Mode, entry: &LexicalEntry) -> String {
    match mode {
        Mode::G2E => primary_alternative(&entry.english).to_string(),
        Mode::Any | Mode::E2G | Mode::Sentence | Mode::Definition | Mode::Opposite => {
            entry.german.clone()
        }
    }
}

/// Build up to `count` shuffled options, exactly one of which is correct.
///
/// Fewer options come back when the store can't supply enough distinct
/// distractors within [`MAX_DRAWS`] draws. `count` below 2 is raised to 2.
pub fn options<R: Rng + ?Sized>(
    store: &LexicalStore,
    exercise: &Exercise,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let correct = match exercise.mode {
        Mode::G2E => primary_alternative(&exercise.answer).to_string(),
        _ => exercise.answer.trim().to_string(),
    };
    let wanted = count.max(2) - 1;

    let mut seen = vec![normalize_answer(&correct)];
    let mut picked: Vec<String> = Vec::with_capacity(wanted + 1);
    for _ in 0..MAX_DRAWS {
        if picked.len() == wanted {
            break;
        }
        let Some(entry) = store.entries().choose(rng) else { break };
        let candidate = as_option(exercise.mode, entry);
        let key = normalize_answer(&candidate);
        if key.is_empty() || seen.contains(&key) {
            continue;
        }
        seen.push(key);
        picked.push(candidate);
    }

    picked.push(correct);
    picked.shuffle(rng);
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn store() -> LexicalStore {
        LexicalStore::from_entries(vec![
            LexicalEntry::new("der Hund", "the dog"),
            LexicalEntry::new("die Katze", "the cat, the kitty"),
            LexicalEntry::new("das Pferd", "the horse"),
            LexicalEntry::new("die Maus", "the mouse"),
            LexicalEntry::new("der Vogel", "the bird"),
        ])
        .unwrap()
    }

    fn exercise(mode: Mode, prompt: &str, answer: &str) -> Exercise {
        Exercise { id: "T-0".into(), mode, prompt: prompt.into(), answer: answer.into() }
    }

    #[test]
    fn exactly_one_correct_option_among_distinct_ones() {
        let store = store();
        let ex = exercise(Mode::E2G, "the dog", "der Hund");
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let opts = options(&store, &ex, 4, &mut rng);
            assert_eq!(opts.len(), 4, "seed {seed}: {opts:?}");
            assert_eq!(opts.iter().filter(|o| *o == "der Hund").count(), 1);
            let mut dedup: Vec<String> = opts.iter().map(|o| o.to_lowercase()).collect();
            dedup.sort();
            dedup.dedup();
            assert_eq!(dedup.len(), opts.len());
        }
    }

    #[test]
    fn g2e_options_use_first_english_alternative() {
        let store = store();
        let ex = exercise(Mode::G2E, "die Katze", "the cat, the kitty");
        let mut rng = StdRng::seed_from_u64(3);
        let opts = options(&store, &ex, 5, &mut rng);
        assert!(opts.contains(&"the cat".to_string()));
        assert!(opts.iter().all(|o| !o.contains(',')));
        assert!(opts.iter().all(|o| o.starts_with("the ")));
    }

    #[test]
    fn tiny_store_yields_fewer_options() {
        let store = LexicalStore::from_entries(vec![LexicalEntry::new("gut", "good")]).unwrap();
        let ex = exercise(Mode::E2G, "good", "gut");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(options(&store, &ex, 4, &mut rng), vec!["gut".to_string()]);
    }
}
