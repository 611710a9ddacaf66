use serde::{Deserialize, Serialize};

/// Color-coded intensity tier of a focus session.
/// Ordered from the longest planned block (Green) to the shortest (Red).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum SessionType {
    Green,
    Yellow,
    Red,
}

impl SessionType {
    /// Fixed planned-minutes default for each tier.
    pub fn default_minutes(&self) -> i32 {
        match self {
            SessionType::Green => 90,
            SessionType::Yellow => 45,
            SessionType::Red => 15,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            SessionType::Green => "green",
            SessionType::Yellow => "yellow",
            SessionType::Red => "red",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "green" => Some(SessionType::Green),
            "yellow" => Some(SessionType::Yellow),
            "red" => Some(SessionType::Red),
            _ => None,
        }
    }

    /// Parse user-facing input (case-insensitive).
    pub fn from_input(s: &str) -> Option<Self> {
        Self::from_db_str(s.to_lowercase().as_str())
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionType::Green => "Green",
            SessionType::Yellow => "Yellow",
            SessionType::Red => "Red",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_defaults_follow_the_lookup_table() {
        assert_eq!(SessionType::Green.default_minutes(), 90);
        assert_eq!(SessionType::Yellow.default_minutes(), 45);
        assert_eq!(SessionType::Red.default_minutes(), 15);
    }

    #[test]
    fn db_strings_round_trip() {
        for t in [SessionType::Green, SessionType::Yellow, SessionType::Red] {
            assert_eq!(SessionType::from_db_str(t.to_db_str()), Some(t));
        }
        assert_eq!(SessionType::from_db_str("purple"), None);
    }

    #[test]
    fn input_parsing_is_case_insensitive() {
        assert_eq!(SessionType::from_input("Yellow"), Some(SessionType::Yellow));
        assert_eq!(SessionType::from_input("RED"), Some(SessionType::Red));
    }
}
