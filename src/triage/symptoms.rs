//! Questionnaire response record
//!
//! Seven observed fields, each of which may be left unanswered. Missing and
//! `null` fields deserialize to the `Unknown` variant.

use serde::{Deserialize, Serialize};

use crate::types::{AgeGroup, BreathingDifficulty, TriState};
use crate::utils::serde_helpers::null_as_default;

/// Reported patient symptoms for one triage request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SymptomResponse {
    pub is_conscious: TriState,
    pub has_severe_bleeding: TriState,
    #[serde(deserialize_with = "null_as_default")]
    pub breathing_difficulty: BreathingDifficulty,
    pub has_chest_pain: TriState,
    pub has_high_fever: TriState,
    pub has_severe_trauma: TriState,
    #[serde(deserialize_with = "null_as_default")]
    pub age_group: AgeGroup,
}

impl SymptomResponse {
    /// Every field answered with its least severe value
    pub fn all_clear() -> Self {
        Self {
            is_conscious: TriState::Yes,
            has_severe_bleeding: TriState::No,
            breathing_difficulty: BreathingDifficulty::None,
            has_chest_pain: TriState::No,
            has_high_fever: TriState::No,
            has_severe_trauma: TriState::No,
            age_group: AgeGroup::Adult,
        }
    }

    /// Nothing answered
    pub fn unanswered() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_original_payload_shape() {
        let json = r#"{
            "isConscious": false,
            "hasSevereBleeding": null,
            "breathingDifficulty": "severe",
            "hasChestPain": true,
            "ageGroup": "elderly"
        }"#;

        let r: SymptomResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r.is_conscious, TriState::No);
        assert_eq!(r.has_severe_bleeding, TriState::Unknown);
        assert_eq!(r.breathing_difficulty, BreathingDifficulty::Severe);
        assert_eq!(r.has_chest_pain, TriState::Yes);
        assert_eq!(r.has_high_fever, TriState::Unknown);
        assert_eq!(r.has_severe_trauma, TriState::Unknown);
        assert_eq!(r.age_group, AgeGroup::Elderly);
    }

    #[test]
    fn test_null_enum_fields_are_unknown() {
        let json = r#"{ "breathingDifficulty": null, "ageGroup": null }"#;
        let r: SymptomResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r, SymptomResponse::unanswered());
    }
}
