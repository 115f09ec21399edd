//! Prelude module for convenient imports
//!
//! Re-exports the types needed to generate, inspect and write routines.
//!
//! # Example
//!
//! ```rust,no_run
//! use routinegen::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let config = GeneratorConfig::with_layout(RoutineLayout::Inline);
//! let mut generator = RoutineGenerator::seeded(42, config)?;
//! let document = generator.generate_routine(10);
//!
//! document.validate()?;
//! write_document(&document, "generated_steps.json")?;
//! # Ok(())
//! # }
//! ```

// Generation
pub use crate::config::{DEFAULT_STEP_GROUPS, GeneratorConfig, RoutineLayout};
pub use crate::generator::{IdFormat, RoutineGenerator};

// Document model
pub use crate::routine::{
    ActuateGripperArgs, ArmTarget, GripperSelector, JointAngles, MoveArmToArgs, Pose, Quaternion,
    Routine, RoutineDocument, RoutineStep, StepArgs, StepDefinition, StepKind, StepReference,
};

// File output
pub use crate::output::{read_document, write_document};

// Error types
pub use crate::error::{GenerateError, ValidationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
