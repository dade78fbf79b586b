use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

use crate::drill_engine::{
    error::NoEligibleEntryError,
    hints,
    models::{Exercise, ExerciseRequest, Mode},
    modes,
    store::LexicalStore,
};

/// Generate a unique exercise ID from the resolved mode + RNG.
fn make_exercise_id<R: RngCore + ?Sized>(mode: Mode, rng: &mut R) -> String {
    format!("{}-{:08X}", mode.id_prefix(), rng.next_u32())
}

/// Picks entries from a borrowed store and renders them as exercises.
///
/// Holds no mutable state; any number of chats can share one engine. The RNG
/// is supplied per call so tests can pass a seeded one.
#[derive(Debug, Clone, Copy)]
pub struct ExerciseEngine<'a> {
    store: &'a LexicalStore,
}

impl<'a> ExerciseEngine<'a> {
    pub fn new(store: &'a LexicalStore) -> Self {
        ExerciseEngine { store }
    }

    pub fn store(&self) -> &'a LexicalStore {
        self.store
    }

    /// Turn `Mode::Any` into a concrete mode; concrete modes pass through.
    ///
    /// All five concrete modes are equally likely, whatever the size of
    /// their pools. A mode with an empty pool can be drawn; the pick that
    /// follows then fails with [`NoEligibleEntryError`].
    pub fn resolve_mode<R: Rng + ?Sized>(&self, mode: Mode, rng: &mut R) -> Mode {
        if mode.is_concrete() {
            return mode;
        }
        Mode::CONCRETE[rng.gen_range(0..Mode::CONCRETE.len())]
    }

    /// Select an entry for `mode` and render it.
    pub fn next_exercise<R: Rng + ?Sized>(
        &self,
        mode: Mode,
        rng: &mut R,
    ) -> Result<Exercise, NoEligibleEntryError> {
        let resolved = self.resolve_mode(mode, rng);
        let entry = self.store.pick_random(resolved, rng).map_err(|e| {
            tracing::warn!(requested = ?mode, resolved = ?resolved, "no eligible entry");
            e
        })?;

        // pick_random only yields entries that passed the same render check.
        let rendered = modes::render(resolved, entry)
            .ok_or(NoEligibleEntryError { mode: resolved })?;
        let id = make_exercise_id(resolved, rng);
        tracing::debug!(%id, requested = ?mode, resolved = ?resolved, headword = %entry.german, "exercise generated");

        Ok(Exercise {
            id,
            mode: resolved,
            prompt: rendered.prompt,
            answer: rendered.answer,
        })
    }

    /// Multiple-choice options for `exercise`; see [`hints::options`].
    pub fn hint_options<R: Rng + ?Sized>(
        &self,
        exercise: &Exercise,
        count: usize,
        rng: &mut R,
    ) -> Vec<String> {
        hints::options(self.store, exercise, count, rng)
    }
}

/// One-shot entry point: seeds an RNG from the request and generates.
pub fn generate_exercise(
    store: &LexicalStore,
    request: ExerciseRequest,
) -> Result<Exercise, NoEligibleEntryError> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    ExerciseEngine::new(store).next_exercise(request.mode, &mut rng)
}
