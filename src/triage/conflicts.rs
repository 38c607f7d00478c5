//! Contradictory presentation checks
//!
//! Each check is independent; all that fire are reported, in declaration order.

use crate::triage::symptoms::SymptomResponse;
use crate::types::{BreathingDifficulty, TriState};

pub const CONSCIOUS_WITH_SEVERE_BREATHING: &str = "Patient conscious but severe breathing difficulty";
pub const UNCONSCIOUS_WITHOUT_CORROBORATION: &str = "Unconscious but no other severe symptoms reported";

struct ConflictCheck {
    description: &'static str,
    applies: fn(&SymptomResponse) -> bool,
}

const CHECKS: [ConflictCheck; 2] = [
    ConflictCheck {
        description: CONSCIOUS_WITH_SEVERE_BREATHING,
        applies: |r| r.is_conscious.is_yes() && r.breathing_difficulty == BreathingDifficulty::Severe,
    },
    ConflictCheck {
        // Bleeding and chest pain only corroborate when explicitly reported
        description: UNCONSCIOUS_WITHOUT_CORROBORATION,
        applies: |r| {
            r.is_conscious == TriState::No
                && !r.has_severe_bleeding.is_yes()
                && !r.has_chest_pain.is_yes()
                && r.breathing_difficulty == BreathingDifficulty::None
        },
    },
];

/// Descriptions of every contradiction present in the responses
pub fn detect_conflicts(responses: &SymptomResponse) -> Vec<String> {
    CHECKS
        .iter()
        .filter(|check| (check.applies)(responses))
        .map(|check| check.description.to_string())
        .collect()
}
