use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

use german_drill_gen::{
    chat::{session::WELCOME, Dispatcher},
    dataset_tools, DrillConfig, ExerciseEngine, LexicalStore,
};

#[derive(Parser)]
#[command(name = "german-tutor")]
#[command(about = "German vocabulary drills over a line-based chat", long_about = None)]
struct Cli {
    /// Path to the JSON dataset
    #[arg(short = 'f', long)]
    dataset: Option<PathBuf>,

    /// Fixed RNG seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Run an interactive chat on stdin/stdout (default)
    Chat,
    /// Print every headword, one per line
    Words,
    /// Print eligible entry counts per exercise mode
    Stats,
    /// Merge entries from another JSON file into the dataset
    Merge {
        /// JSON file with one entry or a list of entries
        input: PathBuf,
        /// Where to write the result (defaults to the dataset itself)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = DrillConfig::from_env();
    if let Some(path) = cli.dataset {
        config.dataset_path = path;
    }
    if cli.seed.is_some() {
        config.rng_seed = cli.seed;
    }
    if cli.debug {
        config.log_level = "debug".to_string();
    }

    // Logs go to stderr; stdout carries the chat.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command.unwrap_or(Cmd::Chat) {
        Cmd::Chat => run_chat(&config),
        Cmd::Words => {
            let store = load_store(&config)?;
            let mut out = io::stdout().lock();
            for word in dataset_tools::headwords(&store) {
                writeln!(out, "{word}")?;
            }
            Ok(())
        }
        Cmd::Stats => {
            let store = load_store(&config)?;
            println!("{} entries in {}", store.len(), config.dataset_path.display());
            for (mode, count) in store.eligible_counts() {
                println!("  {:<22} {count}", mode.to_string());
            }
            Ok(())
        }
        Cmd::Merge { input, output } => {
            let output = output.unwrap_or_else(|| config.dataset_path.clone());
            let report = dataset_tools::merge_files(&config.dataset_path, &input, &output)
                .with_context(|| format!("merging {} into {}", input.display(), output.display()))?;

            println!("--- Update Report ---");
            println!("Words (Before): {}", report.words_before);
            println!("Words (After):  {}", report.words_after);
            println!("Words Added:    {}", report.words_added);
            println!("Words Updated:  {}", report.words_updated);
            if report.skipped > 0 {
                println!("Skipped:        {}", report.skipped);
            }
            println!();
            println!("Field Update Breakdown:");
            if report.field_updates.is_empty() {
                println!("  (No existing fields were modified)");
            }
            for (field, count) in &report.field_updates {
                println!("  - '{field}': updated {count} times");
            }
            Ok(())
        }
    }
}

fn load_store(config: &DrillConfig) -> anyhow::Result<LexicalStore> {
    LexicalStore::load(&config.dataset_path)
        .with_context(|| format!("loading dataset {}", config.dataset_path.display()))
}

fn run_chat(config: &DrillConfig) -> anyhow::Result<()> {
    let store = load_store(config)?;
    let engine = ExerciseEngine::new(&store);
    let mut dispatcher = Dispatcher::new(engine, config.max_sessions, config.hint_options);
    let mut rng: StdRng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    tracing::info!("tutor is running, reading commands from stdin");

    let mut out = io::stdout().lock();
    writeln!(out, "{WELCOME}\n")?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        for reply in dispatcher.handle_message(0, &line, &mut rng) {
            writeln!(out, "{reply}\n")?;
        }
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_to_none_so_config_values_stand() {
        let cli = Cli::try_parse_from(["german-tutor", "words"]).unwrap();
        assert_eq!(cli.dataset, None);
        assert_eq!(cli.seed, None);
        assert!(!cli.debug);
    }

    #[test]
    fn flags_are_parsed_when_given() {
        let cli = Cli::try_parse_from(["german-tutor", "-f", "words.json", "--seed", "7"]).unwrap();
        assert_eq!(cli.dataset, Some(PathBuf::from("words.json")));
        assert_eq!(cli.seed, Some(7));
        assert!(cli.command.is_none());
    }
}
