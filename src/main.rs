//! Wordle Narrow - CLI
//!
//! Narrows a Wordle dictionary from feedback and suggests the next guess.
//! Set `RUST_LOG=debug` to see filtering and ranking details.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::io;
use wordle_narrow::{
    commands::{analyze_word, apply_guesses, rank_openers, run_simple, run_suggest},
    core::DictionarySet,
    output::{print_analysis_result, print_history, print_openers, print_suggestions},
    solver::{OpeningMode, RankerConfig, SearchMode, Session},
    wordlists::{embedded_dictionaries, loader::load_dictionaries},
};

#[derive(Parser)]
#[command(
    name = "wordle_narrow",
    about = "Wordle assistant: filters candidates from feedback and ranks the next guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length to play
    #[arg(short = 'n', long, global = true, default_value = "5")]
    length: usize,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Information guess search: pruned (default) or exhaustive
    #[arg(short, long, global = true, default_value = "pruned")]
    search: String,

    /// First guess: computed (default) or table
    #[arg(short, long, global = true, default_value = "computed")]
    opening: String,

    /// Suggestions shown per ranking
    #[arg(short, long, global = true, default_value = "10")]
    limit: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): enter guesses and feedback line by line
    Play,

    /// Rank the next guess after the given guesses
    Suggest {
        /// Guesses as word:feedback, e.g. stare:--Y-G
        guesses: Vec<String>,
    },

    /// Show how a word would split the current candidates
    Analyze {
        /// Word to analyze
        word: String,

        /// Guesses already made, as word:feedback
        #[arg(short, long = "guess")]
        guesses: Vec<String>,
    },

    /// Score the opening table against the dictionary
    Openers,
}

/// Load dictionaries based on the -w flag
fn load_wordlists(wordlist: &str) -> Result<DictionarySet> {
    match wordlist {
        "embedded" => Ok(embedded_dictionaries()),
        path => load_dictionaries(path).with_context(|| format!("cannot read wordlist '{path}'")),
    }
}

fn ranker_config(cli: &Cli) -> Result<RankerConfig> {
    let search = SearchMode::from_name(&cli.search)
        .ok_or_else(|| anyhow!("unknown search mode '{}'", cli.search))?;
    let opening = OpeningMode::from_name(&cli.opening)
        .ok_or_else(|| anyhow!("unknown opening mode '{}'", cli.opening))?;

    Ok(RankerConfig {
        search,
        opening,
        limit: cli.limit,
        ..RankerConfig::default()
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = ranker_config(&cli)?;
    let dictionaries = load_wordlists(&cli.wordlist)?;
    let mut session = Session::new(&dictionaries, cli.length, config)
        .with_context(|| format!("available lengths: {:?}", dictionaries.lengths()))?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_simple(&mut session, io::stdin().lock()),
        Commands::Suggest { guesses } => {
            let suggestions = run_suggest(&mut session, &guesses)?;
            print_history(session.history());
            print_suggestions(&suggestions, session.candidates().len());
            Ok(())
        }
        Commands::Analyze { word, guesses } => {
            apply_guesses(&mut session, &guesses)?;
            let result = analyze_word(&session, &word)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Openers => {
            let dictionary = session.dictionary();
            print_openers(&rank_openers(dictionary), dictionary.len());
            Ok(())
        }
    }
}
