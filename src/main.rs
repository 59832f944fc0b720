//! chatlens CLI
//!
//! Usage:
//!   chatlens                                       # filtered_messages.json → advanced_analysis.json
//!   chatlens -i part1.json -i part2.json           # several export files, concatenated
//!   chatlens --config chatlens.toml --utc-offset 480
//!   chatlens --json                                # print the report instead of a summary

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use chatlens::core::{load_transcript, save_report, Analyzer, Collaborators};
use chatlens::types::AnalysisReport;
use chatlens::{AnalysisConfig, AnalysisError, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "chatlens",
    version = VERSION,
    about = "Conversation structure and interaction analytics for group chat exports",
    long_about = "chatlens reads chat-export JSON and produces one report with:\n\n  \
                  per-participant profiles (words, sentiment, emoji, readability)\n  \
                  conversation structure (initiators, night owls, monologues,\n  \
                  question askers, @full-name mentions)\n  \
                  a directed interaction index built from @first-name mentions\n  \
                  templated greetings and gifts for every ordered pair"
)]
struct Args {
    /// Input JSON file(s), concatenated in order
    #[arg(short, long, default_value = "filtered_messages.json")]
    input: Vec<PathBuf>,

    /// Report output path
    #[arg(short, long, default_value = "advanced_analysis.json")]
    output: PathBuf,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only analyze these senders (repeatable)
    #[arg(short, long)]
    participant: Vec<String>,

    /// Wall clock as minutes east of UTC (default: host local zone)
    #[arg(long, allow_hyphen_values = true)]
    utc_offset: Option<i32>,

    /// Print the report as JSON instead of the summary
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Debug-level logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let cfg = build_config(&args)?;
    let collab = Collaborators::from_config(&cfg).map_err(coded)?;

    let loaded = load_transcript(&args.input, &cfg).map_err(coded)?;
    info!(
        messages = loaded.transcript.len(),
        dropped = loaded.dropped,
        digest = %loaded.digest,
        "transcript ready"
    );

    let report = Analyzer::new(&cfg, &collab).run(&loaded.transcript, &loaded.digest);
    save_report(&report, &args.output).map_err(coded)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serializing report")?;
        println!("{}", json);
    } else {
        print_summary(&report, &args.output);
    }
    Ok(())
}

/// Prefix the stable error code
fn coded(e: AnalysisError) -> anyhow::Error {
    anyhow::anyhow!("[{}] {}", e.code(), e)
}

/// Defaults, then the TOML file, then CLI flags
fn build_config(args: &Args) -> anyhow::Result<AnalysisConfig> {
    let mut cfg = match &args.config {
        Some(path) => AnalysisConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    if !args.participant.is_empty() {
        cfg.participants = args.participant.clone();
    }
    if args.utc_offset.is_some() {
        cfg.utc_offset_minutes = args.utc_offset;
    }
    cfg.validate().context("validating config")?;
    Ok(cfg)
}

fn print_summary(report: &AnalysisReport, output: &std::path::Path) {
    let overall = &report.overall_analysis;
    let structure = &overall.structure;

    println!("{}", "========================================".dimmed());
    println!("  {} v{}", "chatlens".bold(), VERSION);
    println!("{}", "========================================".dimmed());
    println!(
        "  {} messages from {} participants",
        report.metadata.message_count.to_string().cyan(),
        report.metadata.participant_count.to_string().cyan()
    );
    println!();

    if let Some((name, n)) = structure.chat_initiator.first() {
        println!("  {:<20} {} ({} conversations)", "Top initiator:", name.green(), n);
    }
    if let Some((name, n)) = structure.night_owl_score.first().filter(|(_, n)| *n > 0) {
        println!("  {:<20} {} ({} night messages)", "Night owl:", name.magenta(), n);
    }
    if let Some(record) = structure
        .longest_monologues_per_participant
        .first()
        .filter(|r| r.message_count > 0)
    {
        println!(
            "  {:<20} {} ({} in a row)",
            "Longest monologue:",
            record.author.yellow(),
            record.message_count
        );
    }
    if let Some((name, n)) = structure.question_askers.first().filter(|(_, n)| *n > 0) {
        println!("  {:<20} {} ({} questions)", "Most curious:", name.blue(), n);
    }
    if !overall.top_emojis.is_empty() {
        let emojis: String = overall.top_emojis.iter().map(|(e, _)| e.as_str()).collect();
        println!("  {:<20} {}", "Top emojis:", emojis);
    }
    println!(
        "  {:<20} {}",
        "Greetings:",
        report.greeting_count().to_string().red()
    );
    println!();
    println!("  Report saved to {}", output.display().to_string().bold());
}
