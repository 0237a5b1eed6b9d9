use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod score;

use score::ScoreArgs;

#[derive(Debug, Parser)]
#[command(name = "affectlex")]
#[command(about = "Score short texts for affect and intensity against a weighted lexicon")]
struct Cli {
    /// Lexicon file (JSON, or YAML by extension). Overrides `AFFECTLEX_LEXICON_PATH`.
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score text given as an argument or line by line on stdin
    Score(ScoreArgs),
    /// Print per-category term counts and weight ranges of the lexicon
    Lexicon,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = affectlex_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let lexicon_path = cli.lexicon.unwrap_or_else(|| config.lexicon_path.clone());

    match cli.command {
        Some(Commands::Score(args)) => {
            let scorer = score::build_scorer(&lexicon_path, config.locale_path.as_deref())?;
            score::run_score(&scorer, &args)?;
        }
        Some(Commands::Lexicon) => {
            let lexicon = score::load_lexicon(&lexicon_path)?;
            println!("{}", serde_json::to_string_pretty(&lexicon.summary())?);
        }
        None => println!("affectlex: pass a subcommand (score, lexicon); see --help"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
