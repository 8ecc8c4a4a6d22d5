use anyhow::{Context, Result};
use clap::Parser;
use redline_simulator::{render, render_strategy_list, FileConfig, OutputFormat, SimulatorConfig};
use redline_types::StrategyKind;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, Level};

fn parse_level(log_level: &str) -> Result<Level> {
    Level::from_str(log_level).map_err(|_| anyhow::anyhow!("invalid log level: {log_level}"))
}

fn init_tracing(log_level: &str) -> Result<()> {
    let level = parse_level(log_level)?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Estimate the return of roulette betting progressions on red.",
    long_about = None
)]
struct Args {
    /// Path to a YAML config file; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Strategy: flat, martingale, fibonacci, dalembert or random.
    #[arg(short, long)]
    strategy: Option<String>,

    /// Maximum spins per session (R).
    #[arg(short, long)]
    rounds: Option<u32>,

    /// Sessions per stopping policy (N).
    #[arg(short = 'n', long)]
    sessions: Option<u32>,

    /// Base stake unit (1 to 10000).
    #[arg(long)]
    base_stake: Option<u64>,

    /// Master seed for reproducible runs (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads (0 uses logical cores).
    #[arg(long)]
    workers: Option<usize>,

    /// Output format: text, json or csv.
    #[arg(long)]
    format: Option<String>,

    /// Log level: error, warn, info, debug or trace.
    #[arg(long)]
    log_level: Option<String>,

    /// Print the available strategies and exit.
    #[arg(long, default_value_t = false)]
    list_strategies: bool,
}

fn build_config(args: &Args, file: FileConfig) -> Result<SimulatorConfig> {
    let strategy_name = args
        .strategy
        .as_deref()
        .or(file.strategy.as_deref())
        .context("a strategy is required (use --strategy or set `strategy` in the config file)")?;
    let strategy = StrategyKind::from_str(strategy_name)?;
    let format = match args.format.as_deref() {
        Some(value) => value
            .parse::<OutputFormat>()
            .map_err(|err| anyhow::anyhow!("invalid output format: {err}"))?,
        None => file.format.unwrap_or(OutputFormat::Text),
    };

    let defaults = SimulatorConfig::new(strategy);
    let config = SimulatorConfig {
        strategy,
        rounds: args.rounds.or(file.rounds).unwrap_or(defaults.rounds),
        sessions: args.sessions.or(file.sessions).unwrap_or(defaults.sessions),
        base_stake: args
            .base_stake
            .or(file.base_stake)
            .unwrap_or(defaults.base_stake),
        seed: args.seed.or(file.seed),
        workers: args.workers.or(file.workers),
        format,
        log_level: args
            .log_level
            .clone()
            .or(file.log_level)
            .unwrap_or(defaults.log_level),
    };
    config.request()?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.list_strategies {
        print!("{}", render_strategy_list());
        return Ok(());
    }

    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let config = build_config(&args, file)?;
    init_tracing(&config.log_level)?;
    info!(
        strategy = %config.strategy,
        rounds = config.rounds,
        sessions = config.sessions,
        format = ?config.format,
        "configuration loaded"
    );

    let pair = redline_simulator::run(&config)?;
    print!("{}", render(&pair, config.format)?);
    Ok(())
}
