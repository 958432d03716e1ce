use footprint::config::OutputFormat;
use footprint::error::{AppError, InputError};
use footprint::questionnaire::{AnswerField, AnswerSet, WizardEvent};
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

/// A `section.field=value` pair supplied on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Assignment {
    pub(crate) field: AnswerField,
    pub(crate) value: String,
}

impl FromStr for Assignment {
    type Err = InputError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (key, value) = raw
            .split_once('=')
            .ok_or_else(|| InputError::MalformedAssignment(raw.to_string()))?;
        Ok(Self {
            field: key.parse()?,
            value: value.to_string(),
        })
    }
}

pub(crate) fn parse_assignment(raw: &str) -> Result<Assignment, String> {
    raw.parse::<Assignment>().map_err(|err| err.to_string())
}

pub(crate) fn parse_format(raw: &str) -> Result<OutputFormat, String> {
    raw.parse::<OutputFormat>().map_err(|err| err.to_string())
}

pub(crate) fn load_answers(path: Option<&Path>) -> Result<AnswerSet, AppError> {
    let Some(path) = path else {
        return Ok(AnswerSet::default());
    };
    let raw = std::fs::read_to_string(path)?;
    let answers = serde_json::from_str::<AnswerSet>(&raw).map_err(InputError::from)?;
    Ok(answers)
}

/// Reads one event per line, skipping blank lines and `#` comments.
pub(crate) fn read_events(reader: impl BufRead) -> Result<Vec<WizardEvent>, AppError> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event = trimmed.parse::<WizardEvent>().map_err(|source| InputError::Event {
            line: index + 1,
            source,
        })?;
        events.push(event);
    }
    Ok(events)
}
