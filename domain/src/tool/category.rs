//! Tool categories used by the capability listing.

use serde::{Deserialize, Serialize};

/// Grouping of tools for display purposes.
///
/// Categories never affect dispatch; they only drive the capability listing
/// shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    TimeDate,
    Math,
    Information,
    Text,
    Conversion,
    RandomFun,
}

impl ToolCategory {
    /// All categories in listing order.
    pub const ALL: [ToolCategory; 6] = [
        ToolCategory::TimeDate,
        ToolCategory::Math,
        ToolCategory::Information,
        ToolCategory::Text,
        ToolCategory::Conversion,
        ToolCategory::RandomFun,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ToolCategory::TimeDate => "Time & Date",
            ToolCategory::Math => "Math",
            ToolCategory::Information => "Information",
            ToolCategory::Text => "Text",
            ToolCategory::Conversion => "Conversion",
            ToolCategory::RandomFun => "Random/Fun",
        }
    }
}

impl std::fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
