use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Topic sections of the questionnaire, in the order the wizard visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Transport,
    Home,
    Food,
    Consumption,
    Waste,
}

impl Section {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Transport,
            Self::Home,
            Self::Food,
            Self::Consumption,
            Self::Waste,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Home => "home",
            Self::Food => "food",
            Self::Consumption => "consumption",
            Self::Waste => "waste",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Section {
    type Err = FieldKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|section| section.key().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| FieldKeyError::UnknownSection(value.trim().to_string()))
    }
}

/// Vehicle the respondent drives most.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CarType {
    Gasoline,
    Hybrid,
    Electric,
    #[default]
    Unspecified,
}

impl CarType {
    pub fn from_text(value: &str) -> Self {
        match value {
            "gasoline" => Self::Gasoline,
            "hybrid" => Self::Hybrid,
            "electric" => Self::Electric,
            _ => Self::Unspecified,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gasoline => "gasoline",
            Self::Hybrid => "hybrid",
            Self::Electric => "electric",
            Self::Unspecified => "",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HouseSize {
    Small,
    Medium,
    Large,
    #[default]
    Unspecified,
}

impl HouseSize {
    pub fn from_text(value: &str) -> Self {
        match value {
            "small" => Self::Small,
            "medium" => Self::Medium,
            "large" => Self::Large,
            _ => Self::Unspecified,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Unspecified => "",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Diet {
    Meat,
    Vegetarian,
    Vegan,
    #[default]
    Unspecified,
}

impl Diet {
    pub fn from_text(value: &str) -> Self {
        match value {
            "meat" => Self::Meat,
            "vegetarian" => Self::Vegetarian,
            "vegan" => Self::Vegan,
            _ => Self::Unspecified,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Meat => "meat",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::Unspecified => "",
        }
    }
}

/// Self-described shopping intensity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShoppingHabit {
    Low,
    Medium,
    High,
    #[default]
    Unspecified,
}

impl ShoppingHabit {
    pub fn from_text(value: &str) -> Self {
        match value {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Unspecified,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unspecified => "",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecyclingHabit {
    Always,
    Sometimes,
    Never,
    #[default]
    Unspecified,
}

impl RecyclingHabit {
    pub fn from_text(value: &str) -> Self {
        match value {
            "always" => Self::Always,
            "sometimes" => Self::Sometimes,
            "never" => Self::Never,
            _ => Self::Unspecified,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Sometimes => "sometimes",
            Self::Never => "never",
            Self::Unspecified => "",
        }
    }
}

impl From<String> for CarType {
    fn from(value: String) -> Self {
        Self::from_text(&value)
    }
}

impl From<CarType> for String {
    fn from(value: CarType) -> Self {
        value.as_str().to_string()
    }
}

impl From<String> for HouseSize {
    fn from(value: String) -> Self {
        Self::from_text(&value)
    }
}

impl From<HouseSize> for String {
    fn from(value: HouseSize) -> Self {
        value.as_str().to_string()
    }
}

impl From<String> for Diet {
    fn from(value: String) -> Self {
        Self::from_text(&value)
    }
}

impl From<Diet> for String {
    fn from(value: Diet) -> Self {
        value.as_str().to_string()
    }
}

impl From<String> for ShoppingHabit {
    fn from(value: String) -> Self {
        Self::from_text(&value)
    }
}

impl From<ShoppingHabit> for String {
    fn from(value: ShoppingHabit) -> Self {
        value.as_str().to_string()
    }
}

impl From<String> for RecyclingHabit {
    fn from(value: String) -> Self {
        Self::from_text(&value)
    }
}

impl From<RecyclingHabit> for String {
    fn from(value: RecyclingHabit) -> Self {
        value.as_str().to_string()
    }
}

/// Mobility answers. Distances and counts stay as the raw text the respondent typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransportAnswers {
    pub car_usage: String,
    pub car_type: CarType,
    pub public_transport: String,
    pub flights: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HomeAnswers {
    pub electricity: String,
    pub heating: String,
    pub house_size: HouseSize,
    pub people: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FoodAnswers {
    pub diet: Diet,
    pub local_food: String,
    pub food_waste: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsumptionAnswers {
    pub shopping: ShoppingHabit,
    pub electronics: String,
    pub clothing: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WasteAnswers {
    pub recycling: RecyclingHabit,
    pub composting: String,
}

/// Every response collected by one questionnaire session.
///
/// The default value is the all-empty answer set a session starts from. Several
/// fields (public transport, heating, household size, local food, food waste,
/// electronics, clothing, composting) are collected for the renderer but never
/// consulted when scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerSet {
    pub transport: TransportAnswers,
    pub home: HomeAnswers,
    pub food: FoodAnswers,
    pub consumption: ConsumptionAnswers,
    pub waste: WasteAnswers,
}

impl AnswerSet {
    /// Returns a copy of this answer set with one field replaced.
    pub fn with_field(&self, field: AnswerField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.write(field, value.into());
        next
    }

    /// Current text of a field, as the renderer would show it.
    pub fn value(&self, field: AnswerField) -> &str {
        match field {
            AnswerField::CarUsage => &self.transport.car_usage,
            AnswerField::CarType => self.transport.car_type.as_str(),
            AnswerField::PublicTransport => &self.transport.public_transport,
            AnswerField::Flights => &self.transport.flights,
            AnswerField::Electricity => &self.home.electricity,
            AnswerField::Heating => &self.home.heating,
            AnswerField::HouseSize => self.home.house_size.as_str(),
            AnswerField::People => &self.home.people,
            AnswerField::Diet => self.food.diet.as_str(),
            AnswerField::LocalFood => &self.food.local_food,
            AnswerField::FoodWaste => &self.food.food_waste,
            AnswerField::Shopping => self.consumption.shopping.as_str(),
            AnswerField::Electronics => &self.consumption.electronics,
            AnswerField::Clothing => &self.consumption.clothing,
            AnswerField::Recycling => self.waste.recycling.as_str(),
            AnswerField::Composting => &self.waste.composting,
        }
    }

    fn write(&mut self, field: AnswerField, value: String) {
        match field {
            AnswerField::CarUsage => self.transport.car_usage = value,
            AnswerField::CarType => self.transport.car_type = CarType::from(value),
            AnswerField::PublicTransport => self.transport.public_transport = value,
            AnswerField::Flights => self.transport.flights = value,
            AnswerField::Electricity => self.home.electricity = value,
            AnswerField::Heating => self.home.heating = value,
            AnswerField::HouseSize => self.home.house_size = HouseSize::from(value),
            AnswerField::People => self.home.people = value,
            AnswerField::Diet => self.food.diet = Diet::from(value),
            AnswerField::LocalFood => self.food.local_food = value,
            AnswerField::FoodWaste => self.food.food_waste = value,
            AnswerField::Shopping => self.consumption.shopping = ShoppingHabit::from(value),
            AnswerField::Electronics => self.consumption.electronics = value,
            AnswerField::Clothing => self.consumption.clothing = value,
            AnswerField::Recycling => self.waste.recycling = RecyclingHabit::from(value),
            AnswerField::Composting => self.waste.composting = value,
        }
    }
}

/// Addresses a single field of an [`AnswerSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnswerField {
    CarUsage,
    CarType,
    PublicTransport,
    Flights,
    Electricity,
    Heating,
    HouseSize,
    People,
    Diet,
    LocalFood,
    FoodWaste,
    Shopping,
    Electronics,
    Clothing,
    Recycling,
    Composting,
}

impl AnswerField {
    pub const fn ordered() -> [Self; 16] {
        [
            Self::CarUsage,
            Self::CarType,
            Self::PublicTransport,
            Self::Flights,
            Self::Electricity,
            Self::Heating,
            Self::HouseSize,
            Self::People,
            Self::Diet,
            Self::LocalFood,
            Self::FoodWaste,
            Self::Shopping,
            Self::Electronics,
            Self::Clothing,
            Self::Recycling,
            Self::Composting,
        ]
    }

    pub const fn section(self) -> Section {
        match self {
            Self::CarUsage | Self::CarType | Self::PublicTransport | Self::Flights => {
                Section::Transport
            }
            Self::Electricity | Self::Heating | Self::HouseSize | Self::People => Section::Home,
            Self::Diet | Self::LocalFood | Self::FoodWaste => Section::Food,
            Self::Shopping | Self::Electronics | Self::Clothing => Section::Consumption,
            Self::Recycling | Self::Composting => Section::Waste,
        }
    }

    /// Field name within its section, matching the JSON answer layout.
    pub const fn key(self) -> &'static str {
        match self {
            Self::CarUsage => "carUsage",
            Self::CarType => "carType",
            Self::PublicTransport => "publicTransport",
            Self::Flights => "flights",
            Self::Electricity => "electricity",
            Self::Heating => "heating",
            Self::HouseSize => "houseSize",
            Self::People => "people",
            Self::Diet => "diet",
            Self::LocalFood => "localFood",
            Self::FoodWaste => "foodWaste",
            Self::Shopping => "shopping",
            Self::Electronics => "electronics",
            Self::Clothing => "clothing",
            Self::Recycling => "recycling",
            Self::Composting => "composting",
        }
    }

    /// Whether the scoring engine reads this field.
    pub const fn is_scored(self) -> bool {
        matches!(
            self,
            Self::CarUsage
                | Self::CarType
                | Self::Flights
                | Self::Electricity
                | Self::HouseSize
                | Self::Diet
                | Self::Shopping
                | Self::Recycling
        )
    }

    /// Resolves a `(section, field)` pair as forwarded by a renderer.
    pub fn lookup(section: Section, key: &str) -> Result<Self, FieldKeyError> {
        let key = key.trim();
        let field = Self::ordered()
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| FieldKeyError::UnknownField(key.to_string()))?;

        if field.section() != section {
            return Err(FieldKeyError::SectionMismatch {
                field: field.key(),
                expected: field.section(),
                found: section,
            });
        }

        Ok(field)
    }
}

impl fmt::Display for AnswerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section(), self.key())
    }
}

impl FromStr for AnswerField {
    type Err = FieldKeyError;

    /// Parses a dotted `section.field` key such as `transport.carUsage`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (section, key) = value
            .trim()
            .split_once('.')
            .ok_or_else(|| FieldKeyError::MissingSection(value.trim().to_string()))?;
        Self::lookup(section.parse()?, key)
    }
}

/// Raised when a textual field address cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldKeyError {
    #[error("field key '{0}' must take the form section.field")]
    MissingSection(String),
    #[error("unknown section '{0}'")]
    UnknownSection(String),
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("field '{field}' belongs to section '{expected}', not '{found}'")]
    SectionMismatch {
        field: &'static str,
        expected: Section,
        found: Section,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_answer_set_is_all_empty() {
        let answers = AnswerSet::default();
        for field in AnswerField::ordered() {
            assert_eq!(answers.value(field), "", "{field} should start empty");
        }
    }

    #[test]
    fn with_field_leaves_the_original_untouched() {
        let original = AnswerSet::default();
        let updated = original.with_field(AnswerField::CarUsage, "120");

        assert_eq!(original.transport.car_usage, "");
        assert_eq!(updated.transport.car_usage, "120");
        assert_eq!(
            AnswerSet {
                transport: TransportAnswers::default(),
                ..updated.clone()
            },
            AnswerSet::default()
        );
    }

    #[test]
    fn unrecognized_choice_text_becomes_unspecified() {
        let answers = AnswerSet::default()
            .with_field(AnswerField::CarType, "diesel")
            .with_field(AnswerField::Diet, "Vegan")
            .with_field(AnswerField::Recycling, "sometimes");

        assert_eq!(answers.transport.car_type, CarType::Unspecified);
        assert_eq!(answers.food.diet, Diet::Unspecified);
        assert_eq!(answers.waste.recycling, RecyclingHabit::Sometimes);
        assert_eq!(answers.value(AnswerField::Recycling), "sometimes");
    }

    #[test]
    fn parses_dotted_field_keys() {
        assert_eq!(
            "transport.carUsage".parse::<AnswerField>(),
            Ok(AnswerField::CarUsage)
        );
        assert_eq!(
            "waste.composting".parse::<AnswerField>(),
            Ok(AnswerField::Composting)
        );
        assert_eq!(
            "carUsage".parse::<AnswerField>(),
            Err(FieldKeyError::MissingSection("carUsage".to_string()))
        );
        assert_eq!(
            "garden.hose".parse::<AnswerField>(),
            Err(FieldKeyError::UnknownSection("garden".to_string()))
        );
        assert!(matches!(
            "home.carType".parse::<AnswerField>(),
            Err(FieldKeyError::SectionMismatch {
                expected: Section::Transport,
                found: Section::Home,
                ..
            })
        ));
    }

    #[test]
    fn every_field_key_round_trips_through_display() {
        for field in AnswerField::ordered() {
            let parsed: AnswerField = field.to_string().parse().expect("display output parses");
            assert_eq!(parsed, field);
        }
    }

    #[test]
    fn deserializes_partial_json_in_the_form_layout() {
        let answers: AnswerSet = serde_json::from_str(
            r#"{"transport":{"carUsage":"80","carType":"hybrid"},"food":{"diet":"tofu"}}"#,
        )
        .expect("partial answers deserialize");

        assert_eq!(answers.transport.car_usage, "80");
        assert_eq!(answers.transport.car_type, CarType::Hybrid);
        assert_eq!(answers.food.diet, Diet::Unspecified);
        assert_eq!(answers.home, HomeAnswers::default());

        let json = serde_json::to_value(&answers).expect("answers serialize");
        assert_eq!(json["transport"]["carType"], "hybrid");
        assert_eq!(json["home"]["houseSize"], "");
    }
}
