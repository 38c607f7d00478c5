//! Severity classification
//!
//! Questionnaire responses in, severity / confidence / review flag out.

pub mod symptoms;
pub mod weights;
pub mod conflicts;
pub mod classifier;

pub use symptoms::SymptomResponse;
pub use weights::ClassifierWeights;
pub use conflicts::detect_conflicts;
pub use classifier::{
    classify, classify_with, required_resource_class, required_resource_class_for_tag,
    severity_for_score, ConfidenceTag, TriageResult,
};
