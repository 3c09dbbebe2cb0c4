use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use topicsim::config::{parse_topic_spec, Config, NormalizerBackend, StopwordSource};
use topicsim::pipeline::classify::{build_normalizer, classify, load_words, ClassificationInput};
use topicsim::text::Language;

/// topicsim: how relevant is a document to each of a fixed set of topics?
///
/// Scores the document's normalized words against every topic keyword list
/// with Jaccard overlap and cosine similarity.
#[derive(Parser)]
#[command(name = "topicsim", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score the document against every topic
    Classify {
        #[command(flatten)]
        input: InputArgs,

        /// Print the report as JSON instead of the terminal view
        #[arg(long)]
        json: bool,

        /// Write the JSON report to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the document's normalized word set
    Words {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Input overrides shared by every subcommand. Unset flags fall back to
/// TOPICSIM_* environment variables, then to built-in defaults.
#[derive(Args)]
struct InputArgs {
    /// Document to classify
    #[arg(long)]
    text: Option<PathBuf>,

    /// Whitespace-separated stopword file
    #[arg(long, conflicts_with = "builtin_stopwords")]
    stopwords: Option<PathBuf>,

    /// Use the built-in stopword list for --language instead of a file
    #[arg(long)]
    builtin_stopwords: bool,

    /// Topic as name=path (repeatable; replaces the configured topic list)
    #[arg(long = "topic", value_name = "NAME=PATH")]
    topics: Vec<String>,

    /// Base-form normalizer: identity, snowball or dictionary
    #[arg(long)]
    normalizer: Option<NormalizerBackend>,

    /// Lemma dictionary for the dictionary normalizer (default: bundled)
    #[arg(long)]
    lemma_dict: Option<PathBuf>,

    /// Document language: ru or en
    #[arg(long)]
    language: Option<Language>,

    /// Compare against keywords exactly as written, without normalizing them
    #[arg(long)]
    raw_keywords: bool,
}

impl InputArgs {
    /// Apply CLI overrides on top of the environment config.
    fn apply(self, config: &mut Config) -> Result<()> {
        if let Some(text) = self.text {
            config.text_path = text;
        }
        if self.builtin_stopwords {
            config.stopwords = StopwordSource::Builtin;
        } else if let Some(path) = self.stopwords {
            config.stopwords = StopwordSource::File(path);
        }
        if !self.topics.is_empty() {
            config.topics = self
                .topics
                .iter()
                .map(|spec| parse_topic_spec(spec))
                .collect::<Result<_>>()?;
        }
        if let Some(normalizer) = self.normalizer {
            config.normalizer = normalizer;
        }
        if let Some(path) = self.lemma_dict {
            config.lemma_dict = Some(path);
        }
        if let Some(language) = self.language {
            config.language = language;
        }
        if self.raw_keywords {
            config.normalize_keywords = false;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("topicsim=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            input,
            json,
            output,
        } => {
            let config = load_config(input)?;
            let normalizer = build_normalizer(&config)?;
            let classification_input = ClassificationInput::load(&config, normalizer.as_ref())?;
            let report = classify(&classification_input)?;

            if json {
                println!("{}", topicsim::output::json::to_json(&report)?);
            } else {
                topicsim::output::terminal::display_report(&report);
            }

            if let Some(path) = output {
                topicsim::output::json::write_report(&report, &path)?;
                info!(path = %path.display(), "Report written");
                if !json {
                    println!("\n{} {}", "Report saved to".dimmed(), path.display());
                }
            }
        }

        Commands::Words { input } => {
            let config = load_config(input)?;
            let normalizer = build_normalizer(&config)?;
            let words = load_words(&config, normalizer.as_ref())?;
            topicsim::output::terminal::display_words(&words);
        }
    }

    Ok(())
}

fn load_config(input: InputArgs) -> Result<Config> {
    let mut config = Config::load()?;
    input.apply(&mut config)?;
    Ok(config)
}
