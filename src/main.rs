//! Wordle Openers - CLI
//!
//! Scores every corpus word as an opening guess and writes the ranked table.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_openers::{
    commands::{ScoreOptions, analyze_word, run_score},
    corpus::{Corpus, loader::load_corpus_or_sample},
    output::{print_analysis_result, print_score_result},
    scoring::ScoringConfig,
};

const DEFAULT_OUTPUT: &str = "data/opening_word_scores.tsv";

#[derive(Parser)]
#[command(
    name = "wordle_openers",
    about = "Ranks Wordle opening guesses by frequency-weighted expected information",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: path to a file with one word per line, or 'sample' for the embedded corpus
    #[arg(short = 'w', long, global = true, default_value = "data/wordle_list.txt")]
    words: String,

    /// Word frequency CSV (header line, then word,count rows)
    #[arg(short = 'f', long, global = true, default_value = "data/unigram_freq.csv")]
    frequencies: PathBuf,

    /// Word length
    #[arg(short = 'l', long, global = true, default_value_t = 5)]
    length: usize,

    /// Number of worker threads (0 = one per CPU)
    #[arg(short = 'j', long, global = true, default_value_t = 0)]
    workers: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every word and write the table (default)
    Score {
        /// Output TSV file
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Write one timestamped line per word to this file as it is scored
        #[arg(long)]
        log: Option<PathBuf>,

        /// Write rows by descending score instead of word list order
        #[arg(short, long)]
        ranked: bool,

        /// Number of top openers to print
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Break down the expected information of one guess
    Analyze {
        /// Word to analyze
        word: String,

        /// Number of patterns to print
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ScoringConfig::new(cli.length)?.with_workers(cli.workers);
    let corpus = load_corpus_or_sample(&cli.words, &cli.frequencies, cli.length)
        .with_context(|| format!("loading corpus from {}", cli.words))?;

    // Default to scoring if no command given
    let command = cli.command.unwrap_or(Commands::Score {
        output: PathBuf::from(DEFAULT_OUTPUT),
        log: None,
        ranked: false,
        top: 10,
        quiet: false,
    });

    match command {
        Commands::Score {
            output,
            log,
            ranked,
            top,
            quiet,
        } => {
            let options = ScoreOptions {
                output: Some(output),
                log,
                ranked,
                show_progress: !quiet,
            };
            run_score_command(&corpus, &config, &options, top)
        }
        Commands::Analyze { word, top } => run_analyze_command(&word, &corpus, &config, top),
    }
}

fn run_score_command(
    corpus: &Corpus,
    config: &ScoringConfig,
    options: &ScoreOptions,
    top: usize,
) -> Result<()> {
    println!(
        "Scoring {} words on {} workers...",
        corpus.len(),
        config.workers()
    );
    let result = run_score(corpus, config, options)?;
    print_score_result(&result, top);

    if let Some(path) = &options.output {
        println!("\nWrote {}", path.display());
    }
    Ok(())
}

fn run_analyze_command(
    word: &str,
    corpus: &Corpus,
    config: &ScoringConfig,
    top: usize,
) -> Result<()> {
    let result = analyze_word(word, corpus, config)?;
    print_analysis_result(&result, top);
    Ok(())
}
