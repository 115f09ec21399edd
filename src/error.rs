use crate::routine::StepKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a generation run.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to access routine file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to (de)serialize routine document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),

    #[error("Generated routine failed validation: {0}")]
    Validation(#[from] ValidationError),
}

/// Invariant violations detected by `RoutineDocument::validate`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Step id '{0}' appears more than once in the routine")]
    DuplicateStepId(String),

    #[error("Step {index} should be {expected:?}, but found {found:?}")]
    PatternMismatch {
        index: usize,
        expected: StepKind,
        found: StepKind,
    },

    #[error("Step {index} should use the {expected} gripper, but found {found}")]
    GripperOrderMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Step count {0} is not a whole number of step groups")]
    IncompleteGroup(usize),

    #[error("Step '{id}' has a {field} of {value}, outside [{min}, {max}]")]
    OutOfRange {
        id: String,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Step '{id}' has a non-unit orientation quaternion (norm {norm})")]
    NonUnitQuaternion { id: String, norm: f64 },

    #[error("Step '{0}' is referenced in the step list but has no definition")]
    MissingDefinition(String),

    #[error("Step definition '{0}' is not referenced by the step list")]
    OrphanDefinition(String),

    #[error("Step '{id}' does not match its definition: {message}")]
    DefinitionMismatch { id: String, message: String },

    #[error("Routine layout is inconsistent: {0}")]
    MixedLayout(String),
}
