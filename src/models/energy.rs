use serde::{Deserialize, Serialize};

/// Post-session energy rating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EnergyAfter {
    Better,
    Same,
    Worse,
}

impl EnergyAfter {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EnergyAfter::Better => "better",
            EnergyAfter::Same => "same",
            EnergyAfter::Worse => "worse",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "better" => Some(EnergyAfter::Better),
            "same" => Some(EnergyAfter::Same),
            "worse" => Some(EnergyAfter::Worse),
            _ => None,
        }
    }

    pub fn from_input(s: &str) -> Option<Self> {
        Self::from_db_str(s.to_lowercase().as_str())
    }

    pub fn label(&self) -> &'static str {
        match self {
            EnergyAfter::Better => "Better",
            EnergyAfter::Same => "Same",
            EnergyAfter::Worse => "Worse",
        }
    }
}
