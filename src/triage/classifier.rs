//! SEVERITY CLASSIFIER
//!
//! Turns a questionnaire response set into a severity level, a score and a
//! confidence signal. Total over its input: unanswered questions lower the
//! confidence instead of failing.
//!
//! Scoring is additive and order-independent. Every question also records a
//! confidence tag (high / medium / low) describing how informative the answer
//! was; the tag counts drive the confidence level.

use serde::Serialize;
use smallvec::SmallVec;

use crate::triage::conflicts::detect_conflicts;
use crate::triage::symptoms::SymptomResponse;
use crate::triage::weights::{
    ClassifierWeights, CRITICAL_THRESHOLD, MAX_LOW_TAGS, MIN_HIGH_TAGS, URGENT_THRESHOLD,
};
use crate::types::{AgeGroup, BreathingDifficulty, Confidence, ResourceClass, Severity, TriState};

/// How informative a single answer is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTag {
    High,
    Medium,
    Low,
}

/// Outcome of classifying one response set
///
/// `requires_human_review` is derived at construction and cannot be set
/// independently, so the result is serialize-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageResult {
    pub severity: Severity,
    pub score: u32,
    pub confidence: Confidence,
    pub conflicting_signals: Vec<String>,
    requires_human_review: bool,
}

impl TriageResult {
    fn new(severity: Severity, score: u32, confidence: Confidence, conflicting_signals: Vec<String>) -> Self {
        // Review on LOW confidence or on any conflict, independently
        let requires_human_review = confidence == Confidence::Low || !conflicting_signals.is_empty();
        Self {
            severity,
            score,
            confidence,
            conflicting_signals,
            requires_human_review,
        }
    }

    pub fn requires_human_review(&self) -> bool {
        self.requires_human_review
    }
}

/// Running score plus the tags recorded so far
#[derive(Default)]
struct Tally {
    score: u32,
    tags: SmallVec<[ConfidenceTag; 8]>,
}

impl Tally {
    fn record(&mut self, delta: u32, tag: ConfidenceTag) {
        self.score = self.score.saturating_add(delta);
        self.tags.push(tag);
    }

    fn count(&self, tag: ConfidenceTag) -> usize {
        self.tags.iter().filter(|t| **t == tag).count()
    }
}

/// Classify with the reference weights
pub fn classify(responses: &SymptomResponse) -> TriageResult {
    classify_with(responses, &ClassifierWeights::default())
}

/// Classify with caller-supplied weights
pub fn classify_with(responses: &SymptomResponse, weights: &ClassifierWeights) -> TriageResult {
    use ConfidenceTag::{High, Low, Medium};

    let mut tally = Tally::default();

    // Q1: consciousness
    match responses.is_conscious {
        TriState::No => tally.record(weights.unconscious, High),
        TriState::Yes => tally.record(0, High),
        TriState::Unknown => tally.record(0, Low),
    }

    // Q2: severe bleeding
    match responses.has_severe_bleeding {
        TriState::Yes => tally.record(weights.severe_bleeding, High),
        _ => tally.record(0, Medium),
    }

    // Q3: breathing difficulty
    match responses.breathing_difficulty {
        BreathingDifficulty::Severe => tally.record(weights.severe_breathing, High),
        BreathingDifficulty::Mild => tally.record(weights.mild_breathing, Medium),
        BreathingDifficulty::None => tally.record(0, High),
        BreathingDifficulty::Unknown => tally.record(0, Low),
    }

    // Q4: chest pain
    match responses.has_chest_pain {
        TriState::Yes => tally.record(weights.chest_pain, High),
        _ => tally.record(0, Medium),
    }

    // Q5: high fever (>102°F)
    match responses.has_high_fever {
        TriState::Yes => tally.record(weights.high_fever, Medium),
        TriState::No => tally.record(0, High),
        TriState::Unknown => tally.record(0, Low),
    }

    // Q6: severe injury / trauma
    match responses.has_severe_trauma {
        TriState::Yes => tally.record(weights.severe_trauma, High),
        TriState::No => tally.record(0, High),
        TriState::Unknown => tally.record(0, Low),
    }

    // Q7: age group
    let age = responses.age_group;
    if age.is_vulnerable() {
        tally.record(weights.vulnerable_age, Medium);
    } else if age == AgeGroup::Unknown {
        tally.record(0, Low);
    } else {
        tally.record(0, Medium);
    }

    let conflicting_signals = detect_conflicts(responses);
    let severity = severity_for_score(tally.score);

    let confidence = if !conflicting_signals.is_empty() || tally.count(Low) > MAX_LOW_TAGS {
        Confidence::Low
    } else if tally.count(High) >= MIN_HIGH_TAGS {
        Confidence::High
    } else {
        Confidence::Medium
    };

    TriageResult::new(severity, tally.score, confidence, conflicting_signals)
}

/// Fixed severity thresholds
pub fn severity_for_score(score: u32) -> Severity {
    if score >= CRITICAL_THRESHOLD {
        Severity::Critical
    } else if score >= URGENT_THRESHOLD {
        Severity::Urgent
    } else {
        Severity::Stable
    }
}

/// Ward type a severity level needs
pub fn required_resource_class(severity: Severity) -> ResourceClass {
    match severity {
        Severity::Critical => ResourceClass::Icu,
        Severity::Urgent => ResourceClass::Oxygen,
        Severity::Stable => ResourceClass::General,
    }
}

/// Same lookup over a raw severity tag; unrecognised tags fall back to general.
pub fn required_resource_class_for_tag(tag: &str) -> ResourceClass {
    Severity::from_tag(tag)
        .map(required_resource_class)
        .unwrap_or(ResourceClass::General)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::conflicts::{CONSCIOUS_WITH_SEVERE_BREATHING, UNCONSCIOUS_WITHOUT_CORROBORATION};

    #[test]
    fn test_all_clear_is_stable_high_confidence() {
        let result = classify(&SymptomResponse::all_clear());
        assert_eq!(result.score, 0);
        assert_eq!(result.severity, Severity::Stable);
        assert_eq!(result.confidence, Confidence::High);
        assert!(result.conflicting_signals.is_empty());
        assert!(!result.requires_human_review());
    }

    #[test]
    fn test_unconscious_only() {
        let r = SymptomResponse {
            is_conscious: TriState::No,
            ..SymptomResponse::all_clear()
        };
        let result = classify(&r);
        assert_eq!(result.score, 10);
        assert_eq!(result.severity, Severity::Urgent);
        assert_eq!(result.conflicting_signals, vec![UNCONSCIOUS_WITHOUT_CORROBORATION.to_string()]);
        assert_eq!(result.confidence, Confidence::Low);
        assert!(result.requires_human_review());
    }

    #[test]
    fn test_conscious_severe_breathing_requires_review() {
        let r = SymptomResponse {
            breathing_difficulty: BreathingDifficulty::Severe,
            has_chest_pain: TriState::Yes,
            has_severe_bleeding: TriState::Yes,
            ..SymptomResponse::all_clear()
        };
        let result = classify(&r);
        assert_eq!(result.score, 24);
        assert_eq!(result.severity, Severity::Critical);
        assert!(result.conflicting_signals.contains(&CONSCIOUS_WITH_SEVERE_BREATHING.to_string()));
        assert!(result.requires_human_review());
    }

    #[test]
    fn test_worst_case_score() {
        let r = SymptomResponse {
            is_conscious: TriState::No,
            has_severe_bleeding: TriState::Yes,
            breathing_difficulty: BreathingDifficulty::Severe,
            has_chest_pain: TriState::Yes,
            has_high_fever: TriState::Yes,
            has_severe_trauma: TriState::Yes,
            age_group: AgeGroup::Infant,
        };
        let result = classify(&r);
        assert_eq!(Some(result.score), ClassifierWeights::default().max_score());
        assert_eq!(result.severity, Severity::Critical);
        assert!(result.conflicting_signals.is_empty());
        assert_eq!(result.confidence, Confidence::High);
    }

    #[test]
    fn test_unanswered_is_low_confidence_stable() {
        let result = classify(&SymptomResponse::unanswered());
        assert_eq!(result.score, 0);
        assert_eq!(result.severity, Severity::Stable);
        assert_eq!(result.confidence, Confidence::Low);
        assert!(result.requires_human_review());
        assert_eq!(required_resource_class(result.severity), ResourceClass::General);
    }

    #[test]
    fn test_medium_confidence() {
        // high: consciousness, trauma; low: breathing, fever; medium: the rest
        let r = SymptomResponse {
            breathing_difficulty: BreathingDifficulty::Unknown,
            has_high_fever: TriState::Unknown,
            ..SymptomResponse::all_clear()
        };
        let result = classify(&r);
        assert_eq!(result.confidence, Confidence::Medium);
        assert!(!result.requires_human_review());
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(severity_for_score(6), Severity::Stable);
        assert_eq!(severity_for_score(7), Severity::Urgent);
        assert_eq!(severity_for_score(14), Severity::Urgent);
        assert_eq!(severity_for_score(15), Severity::Critical);
    }

    #[test]
    fn test_resource_class_lookup() {
        assert_eq!(required_resource_class(Severity::Critical), ResourceClass::Icu);
        assert_eq!(required_resource_class(Severity::Urgent), ResourceClass::Oxygen);
        assert_eq!(required_resource_class(Severity::Stable), ResourceClass::General);
        assert_eq!(required_resource_class_for_tag("CRITICAL"), ResourceClass::Icu);
        assert_eq!(required_resource_class_for_tag("UNKNOWN"), ResourceClass::General);
    }

    #[test]
    fn test_custom_weights() {
        let weights = ClassifierWeights {
            high_fever: 7,
            ..ClassifierWeights::default()
        };
        let r = SymptomResponse {
            has_high_fever: TriState::Yes,
            ..SymptomResponse::all_clear()
        };
        assert_eq!(classify_with(&r, &weights).severity, Severity::Urgent);
        assert_eq!(classify(&r).severity, Severity::Stable);
    }

    #[test]
    fn test_huge_weights_saturate() {
        let weights = ClassifierWeights {
            unconscious: u32::MAX,
            severe_bleeding: 1,
            ..ClassifierWeights::default()
        };
        let r = SymptomResponse {
            is_conscious: TriState::No,
            has_severe_bleeding: TriState::Yes,
            ..SymptomResponse::all_clear()
        };
        let result = classify_with(&r, &weights);
        assert_eq!(result.score, u32::MAX);
        assert_eq!(result.severity, Severity::Critical);
    }
}
