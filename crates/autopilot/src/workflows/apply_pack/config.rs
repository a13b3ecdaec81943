use serde::{Deserialize, Serialize};

/// Thresholds steering apply-pack risk flagging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Match scores below this value are flagged as a risk.
    pub low_match_threshold: f32,
}

impl MatchConfig {
    pub const fn standard() -> Self {
        Self {
            low_match_threshold: 0.6,
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::standard()
    }
}
