mod rules;
mod tier;

pub use tier::FootprintTier;

use super::domain::AnswerSet;
use serde::{Deserialize, Serialize};

/// Lowest footprint ever reported, in tonnes per year.
pub const MINIMUM_TONNES_PER_YEAR: f64 = 0.5;

/// Scores a complete answer set.
///
/// Pure and total: unparseable numbers read as zero and unrecognized choices
/// fall into each term's default branch, so every answer set yields a result.
pub fn score(answers: &AnswerSet) -> FootprintResult {
    let (components, raw_total) = rules::score_terms(answers);
    let tonnes_per_year = raw_total.max(MINIMUM_TONNES_PER_YEAR);
    let tier = FootprintTier::classify(tonnes_per_year);

    FootprintResult {
        tonnes_per_year,
        raw_total,
        tier,
        message: tier.message().to_string(),
        components,
    }
}

/// The additive terms of the footprint formula, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintTerm {
    Car,
    Flights,
    Electricity,
    HouseSize,
    Diet,
    Shopping,
    Recycling,
}

impl FootprintTerm {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Car,
            Self::Flights,
            Self::Electricity,
            Self::HouseSize,
            Self::Diet,
            Self::Shopping,
            Self::Recycling,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Car => "Car travel",
            Self::Flights => "Flights",
            Self::Electricity => "Electricity",
            Self::HouseSize => "House size",
            Self::Diet => "Diet",
            Self::Shopping => "Shopping",
            Self::Recycling => "Recycling",
        }
    }
}

/// Contribution of one term, kept for transparent breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub term: FootprintTerm,
    pub tonnes: f64,
    pub notes: String,
}

/// Scored footprint with its tier. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintResult {
    pub tonnes_per_year: f64,
    /// Sum of the components before the floor is applied.
    pub raw_total: f64,
    pub tier: FootprintTier,
    pub message: String,
    pub components: Vec<ScoreComponent>,
}

impl FootprintResult {
    /// Footprint with one decimal place, as shown on the results page.
    pub fn display_tonnes(&self) -> String {
        format!("{:.1}", self.tonnes_per_year)
    }

    pub fn label(&self) -> &'static str {
        self.tier.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::domain::AnswerField;

    #[test]
    fn floor_applies_when_terms_go_negative() {
        let answers = AnswerSet::default()
            .with_field(AnswerField::CarUsage, "-500")
            .with_field(AnswerField::Recycling, "always");

        let result = score(&answers);

        assert!(result.raw_total < MINIMUM_TONNES_PER_YEAR);
        assert_eq!(result.tonnes_per_year, MINIMUM_TONNES_PER_YEAR);
        assert_eq!(result.tier, FootprintTier::Excellent);
    }

    #[test]
    fn message_matches_tier() {
        let result = score(&AnswerSet::default());
        assert_eq!(result.message, result.tier.message());
        assert_eq!(result.label(), "Muy Bueno");
        assert_eq!(result.display_tonnes(), "3.2");
    }
}
