//! CLI entrypoint for chamber-sim
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use chamber_application::{
    AmendmentGenerator, CompositeObserver, DecisionBackend, HeuristicDecisionBackend,
    InferenceDecisionBackend, LlmAmendmentGenerator, LlmGateway, LlmSpeechGenerator,
    RunSimulationInput, RunSimulationUseCase, SimulationObserver, SpeechGenerator,
    TemplateAmendmentGenerator, TemplateSpeechGenerator,
};
use chamber_domain::{Bill, District, SeededRng};
use chamber_infrastructure::{
    BackendKind, ConfigLoader, FileConfig, JsonlRunLogger, OllamaGateway, bill_from_parts,
    load_bill, load_districts, sample_districts,
};
use chamber_presentation::{
    Cli, ConsoleFormatter, OutputConfig, OutputFormatter, ProgressReporter, SimpleProgress,
    set_color_enabled,
};
use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines reach the file on exit
    let _log_guard = init_tracing(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    info!("Starting chamber-sim");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("failed to load configuration: {e}"))?
    };
    apply_cli_overrides(&mut config, &cli);

    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("{}", issue.message);
    }
    let errors: Vec<String> = issues
        .iter()
        .filter(|i| i.is_error())
        .map(|i| i.to_string())
        .collect();
    if !errors.is_empty() {
        bail!("invalid configuration:\n  {}", errors.join("\n  "));
    }

    let output = OutputConfig::resolve(
        &cli,
        OutputConfig {
            format: config.output.format.unwrap_or_default(),
            color: config.output.color,
            show_progress: config.output.progress,
        },
    );
    if !output.color {
        set_color_enabled(false);
    }

    // Resolve the seed up front so the decision backend and the run share it
    let mut params = config.to_params();
    let seed = SeededRng::new(params.seed).seed();
    params = params.with_seed(Some(seed));

    // === Inputs ===
    let districts = load_district_set(&cli)?;
    let bill = load_bill_input(&cli)?;

    // === Dependency Injection ===
    let use_case = build_use_case(&config, seed).await?;

    if output.show_progress {
        print_header(&bill, params.member_count, districts.len());
    }

    // === Observers ===
    let progress: Option<Box<dyn SimulationObserver>> = if !output.show_progress {
        None
    } else if std::io::stderr().is_terminal() {
        Some(Box::new(ProgressReporter::new()))
    } else {
        Some(Box::new(SimpleProgress))
    };
    let transcript = config
        .logging
        .transcript
        .as_ref()
        .and_then(JsonlRunLogger::new);

    let mut observers = CompositeObserver::new(vec![]);
    if let Some(progress) = progress.as_deref() {
        observers.push(progress);
    }
    if let Some(transcript) = transcript.as_ref() {
        info!("Writing run transcript to {}", transcript.path().display());
        observers.push(transcript);
    }

    let input = RunSimulationInput::new(districts, bill).with_params(params);
    let result = use_case.execute_with_progress(input, &observers).await?;

    println!("{}", ConsoleFormatter.render(&result, output.format));

    Ok(())
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the `-v` count picks the level.
fn init_tracing(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
            Ok(None)
        }
    }
}

/// CLI flags take precedence over every config source.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(members) = cli.members {
        config.simulation.members = members;
    }
    if let Some(rounds) = cli.rounds {
        config.simulation.rounds = rounds;
    }
    if let Some(seed) = cli.seed {
        config.simulation.seed = Some(seed);
    }
    if let Some(batch_size) = cli.batch_size {
        config.simulation.batch_size = batch_size;
    }
    if cli.llm {
        config.backend.kind = BackendKind::Llm.as_str().to_string();
    }
    if let Some(model) = &cli.model {
        config.backend.model = model.clone();
    }
    if let Some(base_url) = &cli.base_url {
        config.backend.base_url = base_url.clone();
    }
    if let Some(path) = &cli.transcript {
        config.logging.transcript = Some(path.clone());
    }
}

fn load_district_set(cli: &Cli) -> Result<Vec<Arc<District>>> {
    let districts = match &cli.districts {
        Some(path) => load_districts(path)?,
        None => {
            info!("No district file given, using the built-in sample chamber");
            sample_districts()?
        }
    };
    Ok(districts)
}

fn load_bill_input(cli: &Cli) -> Result<Bill> {
    if let Some(path) = &cli.bill {
        return Ok(load_bill(path)?);
    }
    match (&cli.title, &cli.summary) {
        (Some(title), Some(summary)) => Ok(bill_from_parts(title, summary)?),
        _ => bail!("A bill is required. Use --bill <FILE> or --title <T> --summary <S>."),
    }
}

async fn build_use_case(config: &FileConfig, seed: u64) -> Result<RunSimulationUseCase> {
    let (kind, _) = config.backend.parse_kind();

    let use_case = match kind {
        BackendKind::Heuristic => RunSimulationUseCase::new(
            Arc::new(HeuristicDecisionBackend::new(seed)),
            Arc::new(TemplateSpeechGenerator),
            Arc::new(TemplateAmendmentGenerator),
        ),
        BackendKind::Llm => {
            let ollama = OllamaGateway::new(
                config.backend.base_url.clone(),
                config.backend.model.clone(),
                config.backend.request_timeout(),
            )?;
            if let Err(e) = ollama.ping().await {
                warn!(
                    "Ollama at {} is not answering ({}); decisions will abstain",
                    ollama.base_url(),
                    e
                );
            }
            let gateway: Arc<dyn LlmGateway> = Arc::new(ollama);

            let decisions: Arc<dyn DecisionBackend> =
                Arc::new(InferenceDecisionBackend::new(Arc::clone(&gateway)));
            let speeches: Arc<dyn SpeechGenerator> = if config.backend.llm_speeches {
                Arc::new(LlmSpeechGenerator::new(Arc::clone(&gateway)))
            } else {
                Arc::new(TemplateSpeechGenerator)
            };
            let amendments: Arc<dyn AmendmentGenerator> = if config.backend.llm_amendments {
                Arc::new(LlmAmendmentGenerator::new(Arc::clone(&gateway)))
            } else {
                Arc::new(TemplateAmendmentGenerator)
            };
            RunSimulationUseCase::new(decisions, speeches, amendments)
        }
    };
    Ok(use_case)
}

fn print_header(bill: &Bill, member_count: usize, district_count: usize) {
    println!();
    println!("+============================================================+");
    println!("|           chamber-sim - Legislative Chamber                |");
    println!("+============================================================+");
    println!();
    println!("Bill: {}", bill.title);
    println!("Chamber: {} members from {} districts", member_count, district_count);
    println!();
}
