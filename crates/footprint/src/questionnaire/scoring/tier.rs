use serde::{Deserialize, Serialize};

/// Qualitative classification of an annual footprint, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintTier {
    Excellent,
    VeryGood,
    NeedsImprovement,
    NeedsAttention,
}

impl FootprintTier {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Excellent,
            Self::VeryGood,
            Self::NeedsImprovement,
            Self::NeedsAttention,
        ]
    }

    /// Tier for a footprint in tonnes per year. Bounds are exclusive upper limits.
    pub fn classify(tonnes_per_year: f64) -> Self {
        if tonnes_per_year < 3.0 {
            Self::Excellent
        } else if tonnes_per_year < 6.0 {
            Self::VeryGood
        } else if tonnes_per_year < 10.0 {
            Self::NeedsImprovement
        } else {
            Self::NeedsAttention
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "¡Excelente!",
            Self::VeryGood => "Muy Bueno",
            Self::NeedsImprovement => "Puede Mejorar",
            Self::NeedsAttention => "Necesita Atención",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Eres un verdadero guardián del planeta 🌟",
            Self::VeryGood => "Vas por buen camino hacia la sostenibilidad 🌱",
            Self::NeedsImprovement => "Pequeños cambios pueden hacer gran diferencia 🌿",
            Self::NeedsAttention => "Es momento de actuar por nuestro planeta 🌍",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_uses_half_open_bounds() {
        let cases = [
            (0.5, FootprintTier::Excellent),
            (2.999, FootprintTier::Excellent),
            (3.0, FootprintTier::VeryGood),
            (5.999, FootprintTier::VeryGood),
            (6.0, FootprintTier::NeedsImprovement),
            (9.999, FootprintTier::NeedsImprovement),
            (10.0, FootprintTier::NeedsAttention),
            (250.0, FootprintTier::NeedsAttention),
        ];

        for (tonnes, expected) in cases {
            assert_eq!(FootprintTier::classify(tonnes), expected, "{tonnes} t/yr");
        }
    }

    #[test]
    fn tiers_order_from_best_to_worst() {
        let tiers = FootprintTier::ordered();
        assert!(tiers.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(tiers.iter().all(|tier| !tier.message().is_empty()));
    }
}
