use footprint::error::AppError;
use footprint::questionnaire::{
    AnswerField, FootprintResult, FootprintTier, Question, QuestionInput, Recommendation, ScoreComponent,
    WizardProgress, WizardState, WizardStep, RECOMMENDATIONS,
};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub(crate) struct ResultView<'a> {
    pub(crate) tonnes_per_year: f64,
    pub(crate) display_tonnes: String,
    pub(crate) tier: FootprintTier,
    pub(crate) label: &'static str,
    pub(crate) message: &'a str,
    pub(crate) components: &'a [ScoreComponent],
    pub(crate) recommendations: &'static [Recommendation],
}

impl<'a> ResultView<'a> {
    pub(crate) fn new(result: &'a FootprintResult) -> Self {
        Self {
            tonnes_per_year: result.tonnes_per_year,
            display_tonnes: result.display_tonnes(),
            tier: result.tier,
            label: result.label(),
            message: &result.message,
            components: &result.components,
            recommendations: &RECOMMENDATIONS,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SessionView<'a> {
    pub(crate) state: &'a WizardState,
    pub(crate) progress: WizardProgress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) result: Option<ResultView<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct StepView {
    pub(crate) step: WizardStep,
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) questions: &'static [Question],
}

impl From<WizardStep> for StepView {
    fn from(step: WizardStep) -> Self {
        Self {
            step,
            title: step.title(),
            description: step.description(),
            questions: step.questions(),
        }
    }
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value).map_err(std::io::Error::from)?;
    writeln!(handle)?;
    Ok(())
}

pub(crate) fn render_step_page(state: &WizardState) {
    let progress = state.progress();
    let step = progress.step;
    println!(
        "\nPaso {}/{} ({}%) - {}: {}",
        progress.step_number,
        progress.step_count,
        progress.percent,
        step.title(),
        step.description()
    );
    for question in step.questions() {
        render_question(question, state.answers().value(question.field));
    }
    let back = if progress.can_retreat {
        "Anterior"
    } else {
        "(Anterior deshabilitado)"
    };
    println!("  [{}] [{}]", back, progress.advance_label);
}

fn render_question(question: &Question, current: &str) {
    let shown = if current.is_empty() { "-" } else { current };
    println!("  {} [{}]", question.prompt, shown);
    match question.input {
        QuestionInput::Number { placeholder } => println!("      ({placeholder})"),
        QuestionInput::Choice { options } => {
            let listed: Vec<String> = options
                .iter()
                .map(|option| format!("{}={}", option.value, option.label))
                .collect();
            println!("      {}", listed.join(" | "));
        }
    }
}

pub(crate) fn render_step_catalog() {
    for step in WizardStep::ordered() {
        println!(
            "{}. {} ({}) - section '{}'",
            step.index() + 1,
            step.title(),
            step.description(),
            step.section()
        );
        for question in step.questions() {
            println!("   - {} -> {}", question.prompt, question.field);
        }
    }
}

pub(crate) fn render_result(result: &FootprintResult) {
    println!(
        "\n{} toneladas CO₂ / año - {}",
        result.display_tonnes(),
        result.label()
    );
    println!("{}", result.message);
    println!("Desglose:");
    for component in &result.components {
        println!(
            "  - {}: {:+.2} t ({})",
            component.term.label(),
            component.tonnes,
            component.notes
        );
    }
    if result.raw_total < result.tonnes_per_year {
        println!(
            "  (total {:.2} t raised to the {:.1} t floor)",
            result.raw_total, result.tonnes_per_year
        );
    }
    println!("Recomendaciones para un futuro más verde:");
    for recommendation in &RECOMMENDATIONS {
        println!("  - {}: {}", recommendation.title, recommendation.detail);
    }
}

pub(crate) fn render_session(state: &WizardState) {
    let progress = state.progress();
    println!(
        "Paso {}/{} ({}) | results ready: {}",
        progress.step_number,
        progress.step_count,
        progress.step.title(),
        state.results_ready()
    );
    for field in AnswerField::ordered() {
        let value = state.answers().value(field);
        if !value.is_empty() {
            println!("  {} = {}", field, value);
        }
    }
    if let Some(result) = state.results() {
        render_result(&result);
    }
}
