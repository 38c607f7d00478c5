//! Shared Domain Types
//!
//! Tag enums exchanged between the classifier, the matcher and the outside
//! world. Wire spellings are fixed: severities and confidences are upper case,
//! resource classes are lower case.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Geographic point in degrees (WGS84). No range validation is performed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Derived urgency classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    Urgent,
    Stable,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::Urgent => "URGENT",
            Severity::Stable => "STABLE",
        }
    }

    /// Parse a wire tag. Returns `None` for anything outside the three tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "CRITICAL" => Some(Severity::Critical),
            "URGENT" => Some(Severity::Urgent),
            "STABLE" => Some(Severity::Stable),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much the classifier trusts its own severity call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "HIGH",
            Confidence::Medium => "MEDIUM",
            Confidence::Low => "LOW",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bed / ward category a patient needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceClass {
    Icu,
    Oxygen,
    General,
}

impl ResourceClass {
    pub const ALL: [ResourceClass; 3] = [ResourceClass::Icu, ResourceClass::Oxygen, ResourceClass::General];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceClass::Icu => "icu",
            ResourceClass::Oxygen => "oxygen",
            ResourceClass::General => "general",
        }
    }
}

impl fmt::Display for ResourceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected bed-class string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid bed type '{0}', must be one of: icu, oxygen, general")]
pub struct ParseResourceClassError(pub String);

impl FromStr for ResourceClass {
    type Err = ParseResourceClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "icu" => Ok(ResourceClass::Icu),
            "oxygen" => Ok(ResourceClass::Oxygen),
            "general" => Ok(ResourceClass::General),
            other => Err(ParseResourceClassError(other.to_string())),
        }
    }
}

/// Yes / no / not answered
///
/// On the wire this is a nullable boolean; `null` (or a missing field) is
/// `Unknown`, which is never treated as `No`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum TriState {
    Yes,
    No,
    #[default]
    Unknown,
}

impl TriState {
    pub fn is_yes(self) -> bool {
        self == TriState::Yes
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => TriState::Yes,
            Some(false) => TriState::No,
            None => TriState::Unknown,
        }
    }
}

impl From<TriState> for Option<bool> {
    fn from(value: TriState) -> Self {
        match value {
            TriState::Yes => Some(true),
            TriState::No => Some(false),
            TriState::Unknown => None,
        }
    }
}

/// Reported breathing difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathingDifficulty {
    None,
    Mild,
    Severe,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Patient age bracket (vulnerability factor)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Infant,
    Child,
    Adult,
    Elderly,
    #[default]
    #[serde(other)]
    Unknown,
}

impl AgeGroup {
    pub fn is_vulnerable(self) -> bool {
        matches!(self, AgeGroup::Infant | AgeGroup::Elderly)
    }
}
