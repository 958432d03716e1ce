use super::domain::{AnswerField, AnswerSet, FieldKeyError, Section};
use super::scoring::{self, FootprintResult};
use super::steps::{WizardStep, STEP_COUNT};
use serde::Serialize;
use std::str::FromStr;
use tracing::debug;

/// Input forwarded by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    SetField { field: AnswerField, value: String },
    Advance,
    Retreat,
    Reset,
}

impl WizardEvent {
    pub fn set_field(field: AnswerField, value: impl Into<String>) -> Self {
        Self::SetField {
            field,
            value: value.into(),
        }
    }

    /// Builds a field edit from the `(section, field)` pair a form reports.
    pub fn set_section_field(
        section: Section,
        field: &str,
        value: impl Into<String>,
    ) -> Result<Self, FieldKeyError> {
        Ok(Self::set_field(AnswerField::lookup(section, field)?, value))
    }
}

impl FromStr for WizardEvent {
    type Err = EventParseError;

    /// Parses one event line: `next`, `back`, `reset` or `set <section.field> [value]`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim_start()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "next" | "advance" if rest.is_empty() => Ok(Self::Advance),
            "back" | "retreat" if rest.is_empty() => Ok(Self::Retreat),
            "reset" if rest.is_empty() => Ok(Self::Reset),
            "set" => {
                let (key, value) = match rest.split_once(char::is_whitespace) {
                    Some((key, value)) => (key, value.trim()),
                    None => (rest, ""),
                };
                if key.is_empty() {
                    return Err(EventParseError::MissingField);
                }
                Ok(Self::set_field(key.parse::<AnswerField>()?, value))
            }
            "next" | "advance" | "back" | "retreat" | "reset" => {
                Err(EventParseError::UnexpectedArguments(verb.to_string()))
            }
            _ => Err(EventParseError::UnknownCommand(verb.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventParseError {
    #[error("unknown wizard command '{0}'")]
    UnknownCommand(String),
    #[error("'{0}' takes no arguments")]
    UnexpectedArguments(String),
    #[error("'set' requires a section.field key")]
    MissingField,
    #[error(transparent)]
    Field(#[from] FieldKeyError),
}

/// Snapshot of a questionnaire session.
///
/// Transitions never mutate a state in place; [`WizardState::apply`] and
/// [`reduce`] always hand back a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WizardState {
    step_index: usize,
    answers: AnswerSet,
    results_ready: bool,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session at the first step with answers already filled in.
    pub fn with_answers(answers: AnswerSet) -> Self {
        Self {
            answers,
            ..Self::default()
        }
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn current_step(&self) -> WizardStep {
        WizardStep::ordered()[self.step_index]
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn results_ready(&self) -> bool {
        self.results_ready
    }

    pub fn is_final_step(&self) -> bool {
        self.step_index == STEP_COUNT - 1
    }

    /// Scored result, available once the final step has been submitted.
    pub fn results(&self) -> Option<FootprintResult> {
        self.results_ready.then(|| scoring::score(&self.answers))
    }

    pub fn progress(&self) -> WizardProgress {
        let step_number = self.step_index + 1;
        let percent = ((step_number as f64 / STEP_COUNT as f64) * 100.0).round() as u8;

        WizardProgress {
            step: self.current_step(),
            step_number,
            step_count: STEP_COUNT,
            percent,
            can_retreat: self.step_index > 0,
            advance_label: if self.is_final_step() {
                "Calcular"
            } else {
                "Siguiente"
            },
        }
    }

    pub fn apply(&self, event: WizardEvent) -> Self {
        reduce(self, event)
    }

    pub fn set_field(&self, field: AnswerField, value: impl Into<String>) -> Self {
        reduce(self, WizardEvent::set_field(field, value))
    }

    pub fn advance(&self) -> Self {
        reduce(self, WizardEvent::Advance)
    }

    pub fn retreat(&self) -> Self {
        reduce(self, WizardEvent::Retreat)
    }

    pub fn reset(&self) -> Self {
        reduce(self, WizardEvent::Reset)
    }
}

/// Position details a renderer needs for its navigation chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WizardProgress {
    pub step: WizardStep,
    pub step_number: usize,
    pub step_count: usize,
    pub percent: u8,
    pub can_retreat: bool,
    pub advance_label: &'static str,
}

/// Applies one event to a state, producing the next state.
///
/// Navigation moves one step at a time. Advancing from the final step marks
/// results as ready without moving; retreating from the first step does
/// nothing. Only a reset clears the results flag.
pub fn reduce(state: &WizardState, event: WizardEvent) -> WizardState {
    let next = match event {
        WizardEvent::SetField { field, value } => {
            debug!(%field, "answer updated");
            WizardState {
                answers: state.answers.with_field(field, value),
                ..state.clone()
            }
        }
        WizardEvent::Advance if state.is_final_step() => WizardState {
            results_ready: true,
            ..state.clone()
        },
        WizardEvent::Advance => WizardState {
            step_index: state.step_index + 1,
            ..state.clone()
        },
        WizardEvent::Retreat if state.step_index > 0 => WizardState {
            step_index: state.step_index - 1,
            ..state.clone()
        },
        WizardEvent::Retreat => state.clone(),
        WizardEvent::Reset => WizardState::default(),
    };

    if next.step_index != state.step_index || next.results_ready != state.results_ready {
        debug!(
            from = state.step_index,
            to = next.step_index,
            results_ready = next.results_ready,
            "wizard transition"
        );
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(step_index: usize) -> WizardState {
        (0..step_index).fold(WizardState::new(), |state, _| state.advance())
    }

    #[test]
    fn advance_moves_one_step_until_the_last() {
        for index in 0..STEP_COUNT - 1 {
            let state = state_at(index);
            let next = state.advance();
            assert_eq!(next.step_index(), index + 1);
            assert!(!next.results_ready());
        }
    }

    #[test]
    fn advance_from_last_step_marks_results_ready() {
        let last = state_at(STEP_COUNT - 1);
        assert_eq!(last.current_step(), WizardStep::Waste);

        let done = last.advance();
        assert!(done.results_ready());
        assert_eq!(done.step_index(), STEP_COUNT - 1);

        let again = done.advance();
        assert_eq!(again, done);
    }

    #[test]
    fn retreat_at_first_step_is_a_noop() {
        let state = WizardState::new().set_field(AnswerField::Flights, "3");
        assert_eq!(state.retreat(), state);
    }

    #[test]
    fn retreat_moves_back_one_step_and_keeps_answers() {
        let state = state_at(3).set_field(AnswerField::Shopping, "high");
        let previous = state.retreat();
        assert_eq!(previous.step_index(), 2);
        assert_eq!(previous.answers(), state.answers());
    }

    #[test]
    fn set_field_does_not_move_or_touch_other_fields() {
        let state = state_at(2);
        let next = state.set_field(AnswerField::Diet, "vegetarian");

        assert_eq!(next.step_index(), 2);
        assert_eq!(next.answers().value(AnswerField::Diet), "vegetarian");
        assert_eq!(
            next.answers().with_field(AnswerField::Diet, ""),
            AnswerSet::default()
        );
        assert_eq!(state.answers(), &AnswerSet::default());
    }

    #[test]
    fn set_field_works_for_fields_not_on_the_current_step() {
        let state = WizardState::new().set_field(AnswerField::Composting, "yes");
        assert_eq!(state.answers().waste.composting, "yes");
        assert_eq!(state.current_step(), WizardStep::Transport);
    }

    #[test]
    fn reset_restores_initial_state_from_results() {
        let done = state_at(STEP_COUNT - 1)
            .set_field(AnswerField::CarUsage, "250")
            .advance();
        assert!(done.results_ready());

        assert_eq!(done.reset(), WizardState::new());
    }

    #[test]
    fn results_only_available_when_ready() {
        let state = state_at(STEP_COUNT - 1);
        assert!(state.results().is_none());
        let result = state.advance().results().expect("results ready");
        assert_eq!(result, scoring::score(&AnswerSet::default()));
    }

    #[test]
    fn progress_reports_navigation_chrome() {
        let first = WizardState::new().progress();
        assert_eq!(first.step_number, 1);
        assert_eq!(first.step_count, STEP_COUNT);
        assert_eq!(first.percent, 20);
        assert!(!first.can_retreat);
        assert_eq!(first.advance_label, "Siguiente");

        let last = state_at(STEP_COUNT - 1).progress();
        assert_eq!(last.percent, 100);
        assert!(last.can_retreat);
        assert_eq!(last.advance_label, "Calcular");
    }

    #[test]
    fn parses_event_lines() {
        assert_eq!("next".parse::<WizardEvent>(), Ok(WizardEvent::Advance));
        assert_eq!(" Back ".parse::<WizardEvent>(), Ok(WizardEvent::Retreat));
        assert_eq!("reset".parse::<WizardEvent>(), Ok(WizardEvent::Reset));
        assert_eq!(
            "set transport.carUsage 120".parse::<WizardEvent>(),
            Ok(WizardEvent::set_field(AnswerField::CarUsage, "120"))
        );
        assert_eq!(
            "set home.heating gas boiler".parse::<WizardEvent>(),
            Ok(WizardEvent::set_field(AnswerField::Heating, "gas boiler"))
        );
        assert_eq!(
            "set food.diet".parse::<WizardEvent>(),
            Ok(WizardEvent::set_field(AnswerField::Diet, ""))
        );
    }

    #[test]
    fn rejects_malformed_event_lines() {
        assert_eq!(
            "jump 3".parse::<WizardEvent>(),
            Err(EventParseError::UnknownCommand("jump".to_string()))
        );
        assert_eq!(
            "next 2".parse::<WizardEvent>(),
            Err(EventParseError::UnexpectedArguments("next".to_string()))
        );
        assert_eq!(
            "set".parse::<WizardEvent>(),
            Err(EventParseError::MissingField)
        );
        assert!(matches!(
            "set transport.speed 9".parse::<WizardEvent>(),
            Err(EventParseError::Field(FieldKeyError::UnknownField(_)))
        ));
    }

    #[test]
    fn section_field_pairs_resolve_like_a_form() {
        let event = WizardEvent::set_section_field(Section::Home, "houseSize", "large")
            .expect("valid pair");
        assert_eq!(event, WizardEvent::set_field(AnswerField::HouseSize, "large"));
        assert!(WizardEvent::set_section_field(Section::Food, "houseSize", "large").is_err());
    }
}
