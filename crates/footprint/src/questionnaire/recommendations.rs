use super::domain::Section;
use serde::Serialize;

/// Fixed advice shown alongside every result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub section: Section,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const RECOMMENDATIONS: [Recommendation; 4] = [
    Recommendation {
        section: Section::Transport,
        title: "Movilidad Sostenible",
        detail: "Transporte público o bicicleta",
    },
    Recommendation {
        section: Section::Food,
        title: "Alimentación Consciente",
        detail: "Vegetales locales, menos desperdicio",
    },
    Recommendation {
        section: Section::Home,
        title: "Hogar Eficiente",
        detail: "Energías renovables, eficiencia",
    },
    Recommendation {
        section: Section::Waste,
        title: "Gestión de Residuos",
        detail: "Recicla, reutiliza, composta",
    },
];
