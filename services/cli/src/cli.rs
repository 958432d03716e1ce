use crate::commands::{run_replay, run_score, run_steps, ReplayArgs, ScoreArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::infra::parse_format;
use clap::{Parser, Subcommand};
use footprint::config::{AppConfig, OutputFormat};
use footprint::error::AppError;
use footprint::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Carbon Footprint Questionnaire",
    about = "Walk the carbon footprint questionnaire and score answers from the command line",
    version
)]
struct Cli {
    /// Output format for results (text or json). Overrides APP_OUTPUT_FORMAT.
    #[arg(long, global = true, value_parser = parse_format)]
    format: Option<OutputFormat>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a set of answers supplied as a JSON file and/or field assignments
    Score(ScoreArgs),
    /// Apply a recorded sequence of wizard events and report the final state
    Replay(ReplayArgs),
    /// Walk a sample household through every step (default command)
    Demo(DemoArgs),
    /// List the questionnaire steps and their questions
    Steps,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));
    info!(?config.environment, format = ?config.output.format, "questionnaire cli starting");

    match command {
        Command::Score(args) => run_score(args, config.output.format),
        Command::Replay(args) => run_replay(args, config.output.format),
        Command::Demo(args) => run_demo(args, config.output.format),
        Command::Steps => run_steps(config.output.format),
    }
}
