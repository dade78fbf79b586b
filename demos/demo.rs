//! Walkthrough of every exercise mode.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Fixed seeds** — one exercise per concrete mode, reproducible.
//! 2. **Any mode** — a handful of mixed exercises from one RNG.
//! 3. **Hints and checking** — multiple-choice options and answer grading.
//! 4. **Chat** — a scripted conversation through the `Dispatcher`.

use german_drill_gen::{
    chat::{question_text, Dispatcher},
    generate_exercise, ExerciseEngine, ExerciseRequest, LexicalStore, Mode,
};
use rand::{rngs::StdRng, SeedableRng};

const DATASET: &str = r#"[
    {"german": "die Entscheidung", "english": "the decision",
     "example_sentence": "Die Entscheidung fiel mir schwer.",
     "definition": "das Ergebnis einer Wahl zwischen Möglichkeiten"},
    {"german": "schnell", "english": "fast, quick",
     "example_sentence": "Er läuft sehr schnell.", "antonym": "langsam"},
    {"german": "der Anfang", "english": "the beginning",
     "definition": "der Zeitpunkt, an dem etwas beginnt", "antonym": "das Ende"},
    {"german": "vorsichtig", "english": "careful",
     "example_sentence": "Fahr bitte vorsichtig!", "antonym": "leichtsinnig"},
    {"german": "die Erfahrung", "english": "the experience"}
]"#;

fn main() {
    let store = match LexicalStore::from_json_str(DATASET) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("demo dataset is invalid: {err}");
            return;
        }
    };

    // ── Fixed seeds ────────────────────────────────────────────────────────
    println!();
    println!("══ One exercise per mode ══");
    for mode in Mode::CONCRETE {
        match generate_exercise(&store, ExerciseRequest::seeded(mode, 42)) {
            Ok(ex) => {
                println!();
                println!("  [{}]  ID: {}", ex.mode, ex.id);
                println!("  Q: {}", ex.prompt);
                println!("  A: {}", ex.answer);
            }
            Err(err) => println!("  [{mode}] {err}"),
        }
    }

    // ── Any mode ───────────────────────────────────────────────────────────
    println!();
    println!("══ Mixed (Any) ══");
    let engine = ExerciseEngine::new(&store);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..5 {
        if let Ok(ex) = engine.next_exercise(Mode::Any, &mut rng) {
            println!("  {:<22} {}  →  {}", ex.mode.to_string(), ex.prompt, ex.answer);
        }
    }

    // ── Hints and checking ────────────────────────────────────────────────
    println!();
    println!("══ Hints and checking ══");
    if let Ok(ex) = engine.next_exercise(Mode::G2E, &mut rng) {
        println!("  {}", question_text(&ex));
        println!("  Options: {}", engine.hint_options(&ex, 4, &mut rng).join(" | "));
        for reply in ["  QUICK ", "slow", ex.answer.as_str()] {
            println!("  {:?} → {:?}", reply, ex.check(reply));
        }
    }

    // ── Chat ───────────────────────────────────────────────────────────────
    println!();
    println!("══ Chat transcript ══");
    let mut dispatcher = Dispatcher::new(engine, 10, 4);
    for line in ["/next_o2g", "/hint", "langsam", "/next_sentence", "/reveal", "/next_x"] {
        println!();
        println!("  > {line}");
        for reply in dispatcher.handle_message(1, line, &mut rng) {
            for l in reply.lines() {
                println!("    {l}");
            }
        }
    }
}
