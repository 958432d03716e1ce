use super::domain::{AnswerField, Section};
use serde::Serialize;

/// One topic page of the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Transport,
    Home,
    Food,
    Consumption,
    Waste,
}

pub const STEP_COUNT: usize = 5;

impl WizardStep {
    pub const fn ordered() -> [Self; STEP_COUNT] {
        [
            Self::Transport,
            Self::Home,
            Self::Food,
            Self::Consumption,
            Self::Waste,
        ]
    }

    /// Step at a zero-based position, if within the sequence.
    pub fn at(index: usize) -> Option<Self> {
        Self::ordered().get(index).copied()
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Transport => 0,
            Self::Home => 1,
            Self::Food => 2,
            Self::Consumption => 3,
            Self::Waste => 4,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Transport => "Transporte",
            Self::Home => "Hogar",
            Self::Food => "Alimentación",
            Self::Consumption => "Consumo",
            Self::Waste => "Residuos",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Transport => "Tu movilidad diaria",
            Self::Home => "Consumo energético",
            Self::Food => "Hábitos alimentarios",
            Self::Consumption => "Patrones de compra",
            Self::Waste => "Reciclaje y gestión",
        }
    }

    pub const fn section(self) -> Section {
        match self {
            Self::Transport => Section::Transport,
            Self::Home => Section::Home,
            Self::Food => Section::Food,
            Self::Consumption => Section::Consumption,
            Self::Waste => Section::Waste,
        }
    }

    /// Questions shown on this page, in display order.
    ///
    /// Only a subset of each section's fields is asked; the rest stay settable
    /// through events but never appear on a page.
    pub const fn questions(self) -> &'static [Question] {
        match self {
            Self::Transport => TRANSPORT_QUESTIONS,
            Self::Home => HOME_QUESTIONS,
            Self::Food => FOOD_QUESTIONS,
            Self::Consumption => CONSUMPTION_QUESTIONS,
            Self::Waste => WASTE_QUESTIONS,
        }
    }
}

/// A prompt bound to one answer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub field: AnswerField,
    pub prompt: &'static str,
    pub input: QuestionInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionInput {
    /// Free numeric entry, kept as text until scoring.
    Number { placeholder: &'static str },
    /// Single choice among fixed options.
    Choice { options: &'static [ChoiceOption] },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> ChoiceOption {
    ChoiceOption { value, label }
}

const TRANSPORT_QUESTIONS: &[Question] = &[
    Question {
        field: AnswerField::CarUsage,
        prompt: "¿Cuántos kilómetros manejas por semana?",
        input: QuestionInput::Number {
            placeholder: "Ej: 100",
        },
    },
    Question {
        field: AnswerField::CarType,
        prompt: "¿Qué tipo de vehículo usas?",
        input: QuestionInput::Choice {
            options: &[
                option("gasoline", "Gasolina"),
                option("hybrid", "Híbrido"),
                option("electric", "Eléctrico"),
            ],
        },
    },
    Question {
        field: AnswerField::Flights,
        prompt: "¿Cuántos vuelos tomas al año?",
        input: QuestionInput::Number {
            placeholder: "Ej: 2",
        },
    },
];

const HOME_QUESTIONS: &[Question] = &[
    Question {
        field: AnswerField::Electricity,
        prompt: "¿Cuál es tu consumo eléctrico mensual? (kWh)",
        input: QuestionInput::Number {
            placeholder: "Ej: 300",
        },
    },
    Question {
        field: AnswerField::HouseSize,
        prompt: "¿Qué tamaño tiene tu hogar?",
        input: QuestionInput::Choice {
            options: &[
                option("small", "Pequeño"),
                option("medium", "Mediano"),
                option("large", "Grande"),
            ],
        },
    },
    Question {
        field: AnswerField::People,
        prompt: "¿Cuántas personas viven en tu hogar?",
        input: QuestionInput::Number {
            placeholder: "Ej: 3",
        },
    },
];

const FOOD_QUESTIONS: &[Question] = &[
    Question {
        field: AnswerField::Diet,
        prompt: "¿Cuál describe mejor tu dieta?",
        input: QuestionInput::Choice {
            options: &[
                option("meat", "Con carne"),
                option("vegetarian", "Vegetariano"),
                option("vegan", "Vegano"),
            ],
        },
    },
    Question {
        field: AnswerField::LocalFood,
        prompt: "¿Compras alimentos locales/orgánicos?",
        input: QuestionInput::Choice {
            options: &[
                option("always", "Siempre"),
                option("sometimes", "A veces"),
                option("never", "Nunca"),
            ],
        },
    },
];

const CONSUMPTION_QUESTIONS: &[Question] = &[
    Question {
        field: AnswerField::Shopping,
        prompt: "¿Cómo describirías tus hábitos de compra?",
        input: QuestionInput::Choice {
            options: &[
                option("low", "Compro solo lo necesario"),
                option("medium", "Compro moderadamente"),
                option("high", "Compro frecuentemente"),
            ],
        },
    },
    Question {
        field: AnswerField::Electronics,
        prompt: "¿Con qué frecuencia cambias dispositivos electrónicos?",
        input: QuestionInput::Choice {
            options: &[
                option("rarely", "Cada 4+ años"),
                option("sometimes", "Cada 2-3 años"),
                option("often", "Cada año"),
            ],
        },
    },
];

const WASTE_QUESTIONS: &[Question] = &[
    Question {
        field: AnswerField::Recycling,
        prompt: "¿Reciclas tus residuos?",
        input: QuestionInput::Choice {
            options: &[
                option("always", "Siempre"),
                option("sometimes", "A veces"),
                option("never", "Nunca"),
            ],
        },
    },
    Question {
        field: AnswerField::Composting,
        prompt: "¿Haces compostaje?",
        input: QuestionInput::Choice {
            options: &[option("yes", "Sí"), option("no", "No")],
        },
    },
];
