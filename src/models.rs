use serde::Serialize;

/// The five ordered answer labels used across every satisfaction question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SatisfactionLevel {
    VeryUnsatisfied,
    Unsatisfied,
    Neutral,
    Satisfied,
    VerySatisfied,
}

impl SatisfactionLevel {
    /// Exact-string match against the survey's answer labels. Anything else,
    /// including alternate casing or stray whitespace, is not recognized.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Very unsatisfied" => Some(Self::VeryUnsatisfied),
            "Unsatisfied" => Some(Self::Unsatisfied),
            "Neutral" => Some(Self::Neutral),
            "Satisfied" => Some(Self::Satisfied),
            "Very satisfied" => Some(Self::VerySatisfied),
            _ => None,
        }
    }

    /// Ordinal score, 1 (very unsatisfied) through 5 (very satisfied).
    pub fn score(self) -> u8 {
        match self {
            Self::VeryUnsatisfied => 1,
            Self::Unsatisfied => 2,
            Self::Neutral => 3,
            Self::Satisfied => 4,
            Self::VerySatisfied => 5,
        }
    }

    pub fn is_unsatisfied(self) -> bool {
        matches!(self, Self::VeryUnsatisfied | Self::Unsatisfied)
    }
}

/// One respondent's row, immutable once loaded. The three service-area labels
/// are kept raw so each aggregator applies its own recognition rules.
#[derive(Debug, Clone)]
pub struct SurveyRecord {
    pub travel_group: String,
    pub arrival_airport: String,
    pub check_in: String,
    pub boarding: String,
    pub flight: String,
    pub satisfaction_score: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupSatisfaction {
    pub travel_group: String,
    pub average_satisfaction: Option<f64>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AreaRate {
    pub area: String,
    pub rate: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationSatisfaction {
    pub location: String,
    pub average_satisfaction: Option<f64>,
}

/// Output of the full pipeline, ready for tables or chart rendering.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardAggregates {
    pub groups: Vec<GroupSatisfaction>,
    pub areas: Vec<AreaRate>,
    pub locations: Vec<LocationSatisfaction>,
}
