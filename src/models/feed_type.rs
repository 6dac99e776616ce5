use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of milk given during a feeding session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FeedType {
    Breast,
    Formula,
}

impl FeedType {
    /// Parse user input (case-insensitive, accepts the short `b` / `f` codes).
    pub fn ft_from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "breast" | "b" | "breast-milk" | "breastmilk" => Some(Self::Breast),
            "formula" | "f" => Some(Self::Formula),
            _ => None,
        }
    }

    /// Convert enum → stored string
    pub fn ft_as_str(&self) -> &'static str {
        match self {
            FeedType::Breast => "breast",
            FeedType::Formula => "formula",
        }
    }

    /// Human readable label used in history and report output.
    pub fn label(&self) -> &'static str {
        match self {
            FeedType::Breast => "Breast Milk",
            FeedType::Formula => "Formula",
        }
    }

    pub fn is_breast(&self) -> bool {
        matches!(self, FeedType::Breast)
    }

    pub fn is_formula(&self) -> bool {
        matches!(self, FeedType::Formula)
    }
}

impl fmt::Display for FeedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
