//! CLI command definitions

use chamber_domain::OutputFormat as DomainOutputFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for simulation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every round: bill snapshot, speeches, tally and amendment
    Full,
    /// One line per round plus the outcome
    Summary,
    /// The full result as JSON
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => DomainOutputFormat::Full,
            OutputFormat::Summary => DomainOutputFormat::Summary,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for chamber-sim
#[derive(Parser, Debug)]
#[command(name = "chamber-sim")]
#[command(author, version, about = "Legislative chamber simulator - debate, vote and amend a bill")]
#[command(long_about = r#"
chamber-sim samples a chamber of members from weighted districts and runs a
bill through repeated rounds until it passes or the round budget runs out.

Each round has four steps:
1. Debate:  a handful of spokespeople state a stance and give a speech
2. Vote:    every member votes yes, no or abstain, in concurrent batches
3. Tally:   spokesperson votes are reconciled with their stance
4. Amend:   a failed bill gets an amendment appended before the next round

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./chamber.toml        Project-level config
3. ~/.config/chamber-sim/config.toml   Global config
4. CHAMBER_<SECTION>__<KEY> environment variables

Example:
  chamber-sim --title "Clean Water Act" --summary "Funds municipal water upgrades."
  chamber-sim --bill bill.toml --districts districts.json -n 300 -r 5 --seed 42
  chamber-sim --bill bill.json --llm --model llama3.1:8b -o summary
"#)]
pub struct Cli {
    /// Bill file (JSON, or TOML by extension)
    #[arg(long, value_name = "FILE", conflicts_with_all = ["title", "summary"])]
    pub bill: Option<PathBuf>,

    /// Bill title (with --summary, instead of --bill)
    #[arg(long, value_name = "TEXT", requires = "summary")]
    pub title: Option<String>,

    /// Bill summary (with --title, instead of --bill)
    #[arg(long, value_name = "TEXT", requires = "title")]
    pub summary: Option<String>,

    /// District file (JSON array); the built-in sample chamber otherwise
    #[arg(long, value_name = "FILE")]
    pub districts: Option<PathBuf>,

    /// Number of members to sample
    #[arg(short = 'n', long, value_name = "N")]
    pub members: Option<usize>,

    /// Maximum number of rounds
    #[arg(short, long, value_name = "N")]
    pub rounds: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Use the language-model backend (Ollama)
    #[arg(long)]
    pub llm: bool,

    /// Model name for the language-model backend
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Ollama base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Members voting concurrently per batch
    #[arg(long, value_name = "N")]
    pub batch_size: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write diagnostics to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Write a JSONL transcript of the run to this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_full_invocation() {
        let cli = Cli::try_parse_from([
            "chamber-sim",
            "--bill",
            "bill.toml",
            "-n",
            "120",
            "-r",
            "4",
            "--seed",
            "42",
            "--llm",
            "-o",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.bill, Some(PathBuf::from("bill.toml")));
        assert_eq!(cli.members, Some(120));
        assert_eq!(cli.rounds, Some(4));
        assert_eq!(cli.seed, Some(42));
        assert!(cli.llm);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_title_requires_summary() {
        assert!(Cli::try_parse_from(["chamber-sim", "--title", "Act"]).is_err());
        assert!(
            Cli::try_parse_from(["chamber-sim", "--title", "Act", "--summary", "Does things."])
                .is_ok()
        );
    }

    #[test]
    fn test_bill_conflicts_with_title() {
        let result = Cli::try_parse_from([
            "chamber-sim",
            "--bill",
            "b.json",
            "--title",
            "Act",
            "--summary",
            "S",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        assert_eq!(
            DomainOutputFormat::from(OutputFormat::Summary),
            DomainOutputFormat::Summary
        );
    }
}
