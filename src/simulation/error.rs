//! Error types for the interaction model and stepping functions.

use std::fmt;

/// Configuration errors raised by [`InteractionModel`] lookups and by the
/// stepping functions that consume them. Both variants are caller mistakes;
/// a failed step leaves particle state untouched.
///
/// [`InteractionModel`]: crate::simulation::interaction::InteractionModel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelError {
    /// Group index out of range for the configured group count.
    InvalidIndex { index: usize, groups: usize },
    /// A parameter value outside its hard contract (e.g. non-positive radius).
    InvalidParameter { name: &'static str, value: f64 },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidIndex { index, groups } => {
                write!(f, "group index {} out of range for {} groups", index, groups)
            }
            ModelError::InvalidParameter { name, value } => {
                write!(f, "invalid {}: {} (must be positive and finite)", name, value)
            }
        }
    }
}

impl std::error::Error for ModelError {}
