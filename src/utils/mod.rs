//! Utility modules shared by the classifier and the matcher
//!
//! - Rounding: the half-up rounding used for every reported figure
//! - Serde helpers: nullable questionnaire fields

pub mod rounding;
pub mod serde_helpers;

pub use rounding::{round_score, round_to_tenth};
