use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use limelight::config::Config;
use limelight::model::{Platform, ScoreError, ScoreResult, Tier};
use limelight::scoring::profile::score_profile;
use limelight::scoring::rates;

/// Limelight: influencer vetting for brand partnerships.
///
/// Scores creator profiles (engagement quality, follower authenticity,
/// brand safety) from normalized scraper exports — before any outreach
/// money is spent.
#[derive(Parser)]
#[command(name = "limelight", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single profile from a JSON file
    Score {
        /// Path to the profile JSON
        profile: PathBuf,

        /// Print the raw ScoreResult JSON instead of the detail view
        #[arg(long)]
        json: bool,
    },

    /// Score a batch of profiles (JSON array or JSONL)
    Batch {
        /// Path to the profiles file
        profiles: PathBuf,

        /// Write the ranked results to this path
        #[arg(long)]
        out: Option<PathBuf>,

        /// Export format for --out (default: csv)
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Only include profiles at or above this influencer score
        #[arg(long, default_value = "0")]
        min_score: u32,
    },

    /// Display the active rate card
    Rates {
        /// Only show one platform
        #[arg(long)]
        platform: Option<String>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("limelight=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score { profile, json } => {
            let config = Config::load()?;
            let engine = config.engine_config()?;
            engine.weights.validate()?;

            let profile = limelight::input::load_profile(&profile)?;
            let result = score_profile(&profile, &engine)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                limelight::output::terminal::display_score_detail(&result, &profile.bio_text);
            }
        }

        Commands::Batch {
            profiles,
            out,
            format,
            min_score,
        } => {
            let config = Config::load()?;
            let engine = config.engine_config()?;
            engine.weights.validate()?;

            let (loaded, skipped) = limelight::input::load_profiles(&profiles)?;
            if skipped > 0 {
                println!("  {} {skipped} invalid records skipped", "Warning:".yellow());
            }
            if loaded.is_empty() {
                println!("No valid profiles found in {}", profiles.display());
                return Ok(());
            }

            println!("Scoring {} profiles...", loaded.len());
            let bar = ProgressBar::new(loaded.len() as u64);
            bar.set_style(
                ProgressStyle::with_template("  [{bar:30}] {pos}/{len} {msg}")
                    .expect("valid progress template")
                    .progress_chars("=> "),
            );

            let mut results: Vec<ScoreResult> = Vec::with_capacity(loaded.len());
            let mut insufficient = 0usize;
            for profile in &loaded {
                bar.set_message(format!("@{}", profile.handle));
                match score_profile(profile, &engine) {
                    Ok(result) => results.push(result),
                    Err(ScoreError::InsufficientData) => {
                        insufficient += 1;
                        warn!(handle = %profile.handle, "No sample posts, skipping");
                    }
                    Err(e) => warn!(handle = %profile.handle, error = %e, "Scoring failed"),
                }
                bar.inc(1);
            }
            bar.finish_and_clear();

            let results = limelight::output::rank_results(results, min_score);

            limelight::output::terminal::display_score_list(&results);
            if insufficient > 0 {
                println!(
                    "  {} {insufficient} profiles had no sample posts",
                    "~".yellow()
                );
            }

            if let Some(out_path) = out {
                match format {
                    ExportFormat::Csv => limelight::output::export::write_csv(&results, &out_path)?,
                    ExportFormat::Json => {
                        limelight::output::export::write_json(&results, &out_path)?
                    }
                }
                println!(
                    "\n{}",
                    format!("Report saved to: {}", out_path.display()).bold()
                );
            }
        }

        Commands::Rates { platform } => {
            let config = Config::load()?;
            let engine = config.engine_config()?;

            let platforms: Vec<Platform> = match platform.as_deref() {
                Some(name) => {
                    let parsed: Platform =
                        serde_json::from_value(serde_json::Value::String(name.to_lowercase()))
                            .map_err(|_| {
                                anyhow::anyhow!(
                                    "unknown platform '{name}' \
                                     (expected instagram, facebook, tiktok, youtube, or twitter)"
                                )
                            })?;
                    vec![parsed]
                }
                None => vec![
                    Platform::Instagram,
                    Platform::Facebook,
                    Platform::Tiktok,
                    Platform::Youtube,
                    Platform::Twitter,
                ],
            };

            println!("\n{}", "=== Rate Card ===".bold());
            for platform in platforms {
                println!("\n  {}", platform.to_string().bold());
                println!(
                    "    {:<8} {:>18} {:>12}  {}",
                    "Tier".dimmed(),
                    "Per post".dimmed(),
                    "CPM".dimmed(),
                    "Cadence".dimmed()
                );
                for tier in Tier::ALL {
                    let (post_rate, cpm) = match engine.rate_card.lookup(tier, platform) {
                        Some(entry) => (entry.post_rate.as_str(), entry.cpm.as_str()),
                        None => ("-", "-"),
                    };
                    println!(
                        "    {:<8} {:>18} {:>12}  {}",
                        tier.as_str(),
                        post_rate,
                        cpm,
                        rates::suggested_cadence(tier, platform).dimmed()
                    );
                }
            }
            println!();
        }
    }

    Ok(())
}
