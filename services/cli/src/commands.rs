use crate::infra::{load_answers, parse_assignment, read_events, Assignment};
use crate::render::{
    print_json, render_result, render_session, render_step_catalog, ResultView, SessionView,
    StepView,
};
use clap::Args;
use footprint::config::OutputFormat;
use footprint::error::AppError;
use footprint::questionnaire::{reduce, score, WizardEvent, WizardState, WizardStep};
use std::io::BufReader;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file with answers in the questionnaire layout
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
    /// Set a single answer, e.g. --set transport.carUsage=120 (repeatable)
    #[arg(long = "set", value_parser = parse_assignment)]
    pub(crate) assignments: Vec<Assignment>,
}

#[derive(Args, Debug)]
pub(crate) struct ReplayArgs {
    /// File with one wizard event per line (reads stdin when omitted)
    #[arg(long)]
    pub(crate) events: Option<PathBuf>,
}

pub(crate) fn run_score(args: ScoreArgs, format: OutputFormat) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        assignments,
    } = args;

    let mut state = WizardState::with_answers(load_answers(answers.as_deref())?);
    for Assignment { field, value } in assignments {
        state = reduce(&state, WizardEvent::SetField { field, value });
    }
    let state = complete(state);

    let result = score(state.answers());
    info!(
        tonnes = result.tonnes_per_year,
        tier = ?result.tier,
        "footprint scored"
    );

    match format {
        OutputFormat::Json => print_json(&ResultView::new(&result)),
        OutputFormat::Text => {
            render_result(&result);
            Ok(())
        }
    }
}

pub(crate) fn run_replay(args: ReplayArgs, format: OutputFormat) -> Result<(), AppError> {
    let events = match args.events {
        Some(path) => read_events(BufReader::new(std::fs::File::open(path)?))?,
        None => read_events(std::io::stdin().lock())?,
    };
    info!(count = events.len(), "replaying wizard events");

    let state = events
        .into_iter()
        .fold(WizardState::new(), |state, event| reduce(&state, event));

    match format {
        OutputFormat::Json => {
            let result = state.results();
            print_json(&SessionView {
                state: &state,
                progress: state.progress(),
                result: result.as_ref().map(ResultView::new),
            })
        }
        OutputFormat::Text => {
            render_session(&state);
            Ok(())
        }
    }
}

pub(crate) fn run_steps(format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => {
            let steps: Vec<StepView> = WizardStep::ordered()
                .into_iter()
                .map(StepView::from)
                .collect();
            print_json(&steps)
        }
        OutputFormat::Text => {
            render_step_catalog();
            Ok(())
        }
    }
}

/// Advances through the remaining steps until results are ready.
pub(crate) fn complete(mut state: WizardState) -> WizardState {
    while !state.results_ready() {
        state = state.advance();
    }
    state
}
