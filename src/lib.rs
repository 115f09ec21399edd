//! # routinegen - Robot Routine Fixture Generator
//!
//! **routinegen** synthesizes randomized robot routines made of gripper actuation and
//! arm motion steps, and writes them as JSON fixtures for testing a robot control
//! system downstream.
//!
//! ## Core Workflow
//!
//! 1.  **Configure**: Pick a [`config::RoutineLayout`] and the number of step groups in a
//!     [`config::GeneratorConfig`].
//! 2.  **Generate**: Create a [`generator::RoutineGenerator`] with a random source. Use a
//!     seeded one for reproducible fixtures. Call `generate_routine`.
//! 3.  **Write**: Serialize the resulting [`routine::RoutineDocument`] with
//!     [`output::write_document`].
//!
//! Every routine repeats the same three-step group: the primary gripper actuates, the
//! secondary gripper actuates, then the arm moves to a random joint-space target.
//!
//! ## Layouts
//!
//! The two fixture shapes differ in where the step payloads live:
//!
//! * `Indexed` lists `{id, stepKind}` references in `routine.steps`. The full payloads
//!   are keyed by id under `routine.stepDefinitions`.
//! * `Inline` writes the full payloads straight into `routine.steps`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use routinegen::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut generator = RoutineGenerator::seeded(7, GeneratorConfig::default())?;
//!     let document = generator.generate_routine(1);
//!
//!     assert_eq!(
//!         document.step_kinds().collect::<Vec<_>>(),
//!         vec![StepKind::ActuateGripper, StepKind::ActuateGripper, StepKind::MoveArmTo]
//!     );
//!
//!     write_document(&document, "generated_routine.json")?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod prelude;
pub mod routine;
