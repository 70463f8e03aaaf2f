use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use fakecheck::config::{Config, OutputFormat};
use fakecheck::input::RawInput;
use fakecheck::output::{chart, terminal, AnalysisReport};
use fakecheck::scoring::perform_analysis;

/// fakecheck: estimate how many of an account's followers are fake.
///
/// Scores engagement, ratios, and follower count patterns against
/// size-appropriate benchmarks.
#[derive(Parser)]
#[command(name = "fakecheck", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an account from its public metrics
    Analyze {
        /// Total followers (required)
        #[arg(long, allow_negative_numbers = true)]
        followers: Option<f64>,

        /// Average likes per post (required)
        #[arg(long, allow_negative_numbers = true)]
        avg_likes: Option<f64>,

        /// Accounts followed (default: 0)
        #[arg(long, allow_negative_numbers = true)]
        following: Option<f64>,

        /// Total posts (default: 0.5% of followers, at least 50)
        #[arg(long, allow_negative_numbers = true)]
        posts: Option<f64>,

        /// Average comments per post (default: 5% of average likes)
        #[arg(long, allow_negative_numbers = true)]
        avg_comments: Option<f64>,

        /// Print the report as JSON instead of the terminal view
        #[arg(long)]
        json: bool,

        /// Also write the breakdown pie chart to this SVG file
        #[arg(long)]
        svg: Option<PathBuf>,
    },

    /// Show the follower tiers and indicator weights
    Tiers,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fakecheck=warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    if !config.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Analyze {
            followers,
            avg_likes,
            following,
            posts,
            avg_comments,
            json,
            svg,
        } => {
            let raw = RawInput {
                followers,
                avg_likes,
                following,
                posts,
                avg_comments,
            };

            let input = match raw.validate() {
                Ok(input) => input,
                Err(e) => {
                    eprintln!("{} {e}", "Error:".red().bold());
                    std::process::exit(2);
                }
            };
            info!(?input, "Running analysis");

            let result = perform_analysis(&input);

            let format = if json {
                OutputFormat::Json
            } else {
                config.format
            };

            match format {
                OutputFormat::Json => {
                    let report = AnalysisReport::new(&result);
                    println!("{}", report.to_json()?);
                }
                OutputFormat::Text => terminal::display_analysis(&result),
            }

            if let Some(path) = svg {
                std::fs::write(&path, chart::render_svg(&result.breakdown))
                    .with_context(|| format!("Failed to write chart to {}", path.display()))?;
                info!(path = %path.display(), "Pie chart written");
                if format == OutputFormat::Text {
                    println!("{}", format!("Pie chart saved to: {}", path.display()).bold());
                }
            }
        }

        Commands::Tiers => terminal::display_tiers(),
    }

    Ok(())
}
