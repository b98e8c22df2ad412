//! stakesim-cli — command-line staking-yield simulator.
//!
//! Projects the 45-day reward schedule, allocates the community total by
//! point-seconds and prints the result as a text report or JSON. Field
//! overrides are fed through the simulator's action dispatch, so they accept
//! the same free text a widget user would type.

mod config;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use stakesim_core::{dispatch, replay, Action, Command, Field, SimulatorState};
use stakesim_report::{ChartData, Locale, Report};
use tracing::{debug, info};

use crate::config::CliConfig;

/// Staking-yield simulator.
#[derive(Parser)]
#[command(name = "stakesim-cli")]
#[command(version, about = "Project a 45-day staking reward schedule and your share of it.")]
struct Cli {
    /// Configuration file (default: <config dir>/stakesim/config.toml if present).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides the config file.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format ("text" or "json"). Overrides the config file.
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// Number locale for text output (pt-br or en-us).
    #[arg(long, global = true)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and print the report.
    Simulate(SimulateArgs),
    /// Print the cumulative-reward chart dataset as JSON.
    Chart(InputArgs),
    /// Replay a JSON array of recorded widget actions and print the final state.
    Replay(ReplayArgs),
}

#[derive(Args, Default)]
struct InputArgs {
    /// Pool APR, in percent.
    #[arg(long)]
    pool_apr: Option<String>,

    /// Stake APR applied to restaked pool rewards, in percent.
    #[arg(long)]
    stake_apr: Option<String>,

    /// Initial principal in the base asset.
    #[arg(long)]
    principal: Option<String>,

    /// Units participating across the community.
    #[arg(long)]
    total_units: Option<String>,

    /// Average community stake duration, in days.
    #[arg(long)]
    community_days: Option<String>,

    /// Your unit count.
    #[arg(long)]
    your_units: Option<String>,

    /// Your stake duration, in days.
    #[arg(long)]
    your_days: Option<String>,
}

impl InputArgs {
    /// Overrides paired with the field they update, in field order.
    fn overrides(&self) -> Vec<(Field, &str)> {
        [
            (Field::PoolApr, &self.pool_apr),
            (Field::StakeApr, &self.stake_apr),
            (Field::InitialPrincipal, &self.principal),
            (Field::TotalUnits, &self.total_units),
            (Field::CommunityStakeDays, &self.community_days),
            (Field::YourUnits, &self.your_units),
            (Field::YourStakeDays, &self.your_days),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
struct OutputArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Omit the daily table from text output.
    #[arg(long)]
    no_table: bool,
}

#[derive(Args)]
struct SimulateArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct ReplayArgs {
    /// JSON file holding `[{"action": "...", "value": "..."}, ...]`.
    file: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = CliConfig::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        cfg.log_level = level;
    }
    if let Some(format) = cli.log_format {
        cfg.log_format = format;
    }
    if let Some(locale) = cli.locale {
        cfg.locale = locale;
    }

    init_logging(&cfg.log_level, &cfg.log_format);
    debug!(?cfg, "configuration loaded");

    match cli.command {
        Commands::Simulate(args) => cmd_simulate(&cfg, args),
        Commands::Chart(args) => cmd_chart(&cfg, args),
        Commands::Replay(args) => cmd_replay(&cfg, args),
    }
}

/// Configured input with command-line overrides applied, not yet calculated.
fn apply_overrides(cfg: &CliConfig, input: &InputArgs) -> SimulatorState {
    input
        .overrides()
        .into_iter()
        .fold(SimulatorState::new(cfg.input), |state, (field, value)| {
            dispatch(&state, field.action_tag(), Some(value))
        })
}

fn calculate(state: &SimulatorState) -> SimulatorState {
    stakesim_core::transition(state, &Command::Calculate)
}

fn cmd_simulate(cfg: &CliConfig, args: SimulateArgs) -> Result<()> {
    let state = calculate(&apply_overrides(cfg, &args.input));
    print_state(cfg, &state, &args.output)
}

fn cmd_chart(cfg: &CliConfig, args: InputArgs) -> Result<()> {
    let state = calculate(&apply_overrides(cfg, &args));
    let Some(result) = state.result else {
        bail!("simulation produced no result");
    };
    let json = ChartData::cumulative(&result.schedule)
        .to_json()
        .context("Failed to serialize chart data")?;
    println!("{json}");
    Ok(())
}

fn cmd_replay(cfg: &CliConfig, args: ReplayArgs) -> Result<()> {
    let data = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let actions: Vec<Action> = serde_json::from_str(&data)
        .with_context(|| format!("Invalid action list in {}", args.file.display()))?;

    info!(count = actions.len(), "replaying actions");
    let state = replay(&SimulatorState::new(cfg.input), &actions);
    print_state(cfg, &state, &args.output)
}

fn print_state(cfg: &CliConfig, state: &SimulatorState, output: &OutputArgs) -> Result<()> {
    match output.format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(state).context("Failed to serialize result")?;
            println!("{json}");
        }
        OutputFormat::Text => match &state.result {
            Some(result) => {
                let report = Report::new(result, &cfg.locale.number_format());
                print!("{}", report.render_text(!output.no_table));
            }
            None => {
                println!("Not calculated. Current input:");
                for field in Field::ALL {
                    println!("  {field}: {}", field.get(&state.input));
                }
            }
        },
    }
    Ok(())
}

fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_simulate_with_overrides() {
        let cli = Cli::try_parse_from([
            "stakesim-cli",
            "--locale",
            "en-us",
            "simulate",
            "--pool-apr",
            "120",
            "--your-days",
            "30",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.locale, Some(Locale::EnUs));
        let Commands::Simulate(args) = cli.command else {
            panic!("expected simulate");
        };
        assert_eq!(args.output.format, OutputFormat::Json);
        assert_eq!(
            args.input.overrides(),
            vec![(Field::PoolApr, "120"), (Field::YourStakeDays, "30")]
        );
    }

    #[test]
    fn cli_rejects_unknown_locale() {
        assert!(Cli::try_parse_from(["stakesim-cli", "--locale", "xx", "simulate"]).is_err());
    }

    #[test]
    fn overrides_use_host_parsing() {
        let input = InputArgs {
            principal: Some("1000abc".into()),
            total_units: Some("12.7".into()),
            your_units: Some("none".into()),
            ..InputArgs::default()
        };
        let state = apply_overrides(&CliConfig::default(), &input);
        assert!(!state.is_calculated());
        assert_eq!(state.input.initial_principal, 1000.0);
        assert_eq!(state.input.total_participant_units, 12.0);
        assert!(state.input.your_units.is_nan());
    }

    #[test]
    fn simulate_state_is_calculated() {
        let state = calculate(&apply_overrides(&CliConfig::default(), &InputArgs::default()));
        let result = state.result.unwrap();
        assert_eq!(result.community_total_point_seconds(), 388_800_000.0);
    }
}
