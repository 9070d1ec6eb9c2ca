use clap::Parser;
use std::path::{Path, PathBuf};
use virality_score::analyzer::Analyzer;
use virality_score::config::ScoringConfig;
use virality_score::error::AnalysisError;
use virality_score::features::Metadata;
use virality_score::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "virality-score", about = "Heuristic tweet virality scorer")]
struct Cli {
    /// Post text to score.
    text: String,
    #[arg(long)]
    author_id: Option<String>,
    #[arg(long)]
    tweet_id: Option<String>,
    /// Seed for the simulated reputation variation.
    #[arg(long)]
    seed: Option<u64>,
    /// Score timing as if posted at this hour (0-23) instead of now.
    #[arg(long)]
    hour: Option<u8>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    pretty: bool,
}

fn main() {
    load_dotenv();
    init_logging("warn");
    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AnalysisError> {
    let hour = cli.hour.map(validate_hour).transpose()?;
    let (config, _) = ScoringConfig::load(cli.config)?;
    let analyzer = Analyzer::from_config(&config)?;

    let metadata = Metadata {
        author_id: cli.author_id,
        tweet_id: cli.tweet_id,
    };

    let mut ctx = analyzer.context_for(&cli.text, cli.seed);
    if let Some(hour) = hour {
        ctx = ctx.with_hour(hour);
    }
    let result = analyzer.analyze_with(&cli.text, &metadata, &mut ctx);

    let payload = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", payload);

    Ok(())
}

fn validate_hour(value: u8) -> Result<u32, AnalysisError> {
    if value > 23 {
        return Err(AnalysisError::InvalidInput(format!(
            "invalid hour (0-23): {}",
            value
        )));
    }
    Ok(u32::from(value))
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
