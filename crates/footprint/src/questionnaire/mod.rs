//! Carbon footprint questionnaire: answer model, step wizard, and scoring.
//!
//! A renderer drives a [`WizardState`] by forwarding [`WizardEvent`]s through
//! [`reduce`], shows the questions of the current [`WizardStep`], and once
//! results are ready displays the [`FootprintResult`] from [`score`].

pub mod domain;
pub mod recommendations;
pub mod scoring;
pub mod steps;
pub mod wizard;

pub use domain::{
    AnswerField, AnswerSet, CarType, ConsumptionAnswers, Diet, FieldKeyError, FoodAnswers,
    HomeAnswers, HouseSize, RecyclingHabit, Section, ShoppingHabit, TransportAnswers,
    WasteAnswers,
};
pub use recommendations::{Recommendation, RECOMMENDATIONS};
pub use scoring::{
    score, FootprintResult, FootprintTerm, FootprintTier, ScoreComponent,
    MINIMUM_TONNES_PER_YEAR,
};
pub use steps::{ChoiceOption, Question, QuestionInput, WizardStep, STEP_COUNT};
pub use wizard::{reduce, EventParseError, WizardEvent, WizardProgress, WizardState};
