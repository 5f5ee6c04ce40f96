use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Memorability {
    High,
    Low,
}

impl Memorability {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "high" => Some(Memorability::High),
            "low" => Some(Memorability::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Memorability::High => "high",
            Memorability::Low => "low",
        }
    }
}

/// Candidate parsed from `{subject}_{image}_{memorability}_{scene}.jpg`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayedRecallDrawing {
    pub subject: String,
    pub image: String,
    pub memorability: Memorability,
    pub scene: String,
    pub filename: String,
}

/// Candidate parsed from `c{subject}_{image}_{scene}.jpg`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDrawing {
    pub subject: String,
    pub image: String,
    pub scene: String,
    pub filename: String,
}
