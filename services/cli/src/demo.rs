use crate::render::{print_json, render_result, render_step_page, ResultView, SessionView};
use clap::{Args, ValueEnum};
use footprint::config::OutputFormat;
use footprint::error::AppError;
use footprint::questionnaire::{AnswerField, WizardEvent, WizardState, WizardStep};
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Sample household to walk through the questionnaire
    #[arg(long, value_enum, default_value_t = DemoProfile::Typical)]
    pub(crate) profile: DemoProfile,
    /// Step back once on the home page to show retreat handling
    #[arg(long)]
    pub(crate) show_retreat: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum DemoProfile {
    /// Car-free, small home, plant-based diet
    Low,
    /// Short hybrid commute, vegetarian, moderate shopping
    #[default]
    Typical,
    /// Long gasoline commute, frequent flights, large home
    High,
}

impl DemoProfile {
    fn answers(self) -> &'static [(AnswerField, &'static str)] {
        match self {
            DemoProfile::Low => &[
                (AnswerField::CarUsage, "0"),
                (AnswerField::Flights, "0"),
                (AnswerField::Electricity, "120"),
                (AnswerField::HouseSize, "small"),
                (AnswerField::People, "2"),
                (AnswerField::Diet, "vegan"),
                (AnswerField::LocalFood, "always"),
                (AnswerField::Shopping, "low"),
                (AnswerField::Electronics, "rarely"),
                (AnswerField::Recycling, "always"),
                (AnswerField::Composting, "yes"),
            ],
            DemoProfile::Typical => &[
                (AnswerField::CarUsage, "20"),
                (AnswerField::CarType, "hybrid"),
                (AnswerField::Flights, "1"),
                (AnswerField::Electricity, "250"),
                (AnswerField::HouseSize, "medium"),
                (AnswerField::People, "3"),
                (AnswerField::Diet, "vegetarian"),
                (AnswerField::LocalFood, "sometimes"),
                (AnswerField::Shopping, "medium"),
                (AnswerField::Electronics, "sometimes"),
                (AnswerField::Recycling, "sometimes"),
                (AnswerField::Composting, "no"),
            ],
            DemoProfile::High => &[
                (AnswerField::CarUsage, "200"),
                (AnswerField::CarType, "gasoline"),
                (AnswerField::Flights, "6"),
                (AnswerField::Electricity, "600"),
                (AnswerField::HouseSize, "large"),
                (AnswerField::People, "5"),
                (AnswerField::Diet, "meat"),
                (AnswerField::LocalFood, "never"),
                (AnswerField::Shopping, "high"),
                (AnswerField::Electronics, "often"),
                (AnswerField::Recycling, "never"),
                (AnswerField::Composting, "no"),
            ],
        }
    }

    /// Field edits belonging to one step, in the order a respondent would make them.
    fn events_for(self, step: WizardStep) -> Vec<WizardEvent> {
        self.answers()
            .iter()
            .filter(|(field, _)| field.section() == step.section())
            .map(|(field, value)| WizardEvent::set_field(*field, *value))
            .collect()
    }
}

pub(crate) fn run_demo(args: DemoArgs, format: OutputFormat) -> Result<(), AppError> {
    let DemoArgs {
        profile,
        show_retreat,
    } = args;
    let text = format == OutputFormat::Text;

    if text {
        println!("ALFACTO VERDE - tu huella cuenta ({profile:?} household)");
    }
    info!(?profile, "starting questionnaire demo");

    let mut state = WizardState::new();
    let mut retreated = !show_retreat;
    while !state.results_ready() {
        let step = state.current_step();
        for event in profile.events_for(step) {
            state = state.apply(event);
        }
        if text {
            render_step_page(&state);
        }

        if !retreated && step == WizardStep::Home {
            retreated = true;
            state = state.retreat();
            if text {
                println!("  <- Anterior");
            }
            continue;
        }
        state = state.advance();
    }

    let Some(result) = state.results() else {
        return Ok(());
    };
    info!(tonnes = result.tonnes_per_year, tier = ?result.tier, "demo scored");

    match format {
        OutputFormat::Json => print_json(&SessionView {
            state: &state,
            progress: state.progress(),
            result: Some(ResultView::new(&result)),
        }),
        OutputFormat::Text => {
            render_result(&result);
            Ok(())
        }
    }
}
