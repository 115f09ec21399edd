use super::args::{
    ActuateGripperArgs, DIAMETER_MAX_MM, DIAMETER_MIN_MM, GripperSelector, JOINT_ANGLE_RANGE,
    JointAngles, MoveArmToArgs, POSITION_RANGE,
};
use super::model::{RoutineDocument, RoutineStep, StepArgs, StepDefinition, StepKind};
use crate::error::ValidationError;
use ahash::AHashSet;
use std::ops::RangeInclusive;

/// Allowed deviation of a quaternion norm from 1.
pub const UNIT_NORM_TOLERANCE: f64 = 1e-9;

impl RoutineDocument {
    /// Checks the document against the invariants every generated routine upholds:
    /// unique ids, the grip/grip/move pattern, value ranges, unit orientations and,
    /// for the indexed layout, a lookup table that matches the step list exactly.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let steps = &self.routine.steps;
        if self.layout().is_none() {
            return Err(ValidationError::MixedLayout(
                "step list and stepDefinitions disagree on where payloads live".to_string(),
            ));
        }

        let mut seen = AHashSet::with_capacity(steps.len());
        for step in steps {
            if !seen.insert(step.id()) {
                return Err(ValidationError::DuplicateStepId(step.id().to_string()));
            }
        }

        if steps.len() % 3 != 0 {
            return Err(ValidationError::IncompleteGroup(steps.len()));
        }

        for (index, step) in steps.iter().enumerate() {
            let expected = StepKind::at_pattern_index(index);
            if step.kind() != expected {
                return Err(ValidationError::PatternMismatch {
                    index,
                    expected,
                    found: step.kind(),
                });
            }

            let definition = self.resolve(step)?;
            check_definition(index, definition)?;
        }

        if let Some(defs) = &self.routine.step_definitions {
            if let Some(orphan) = defs.keys().find(|id| !seen.contains(id.as_str())) {
                return Err(ValidationError::OrphanDefinition(orphan.clone()));
            }
        }

        Ok(())
    }

    fn resolve<'a>(
        &'a self,
        step: &'a RoutineStep,
    ) -> Result<&'a StepDefinition, ValidationError> {
        let definition = self
            .definition(step)
            .ok_or_else(|| ValidationError::MissingDefinition(step.id().to_string()))?;

        if definition.id != step.id() {
            return Err(ValidationError::DefinitionMismatch {
                id: step.id().to_string(),
                message: format!("definition is keyed under id '{}'", definition.id),
            });
        }
        if definition.step_kind != step.kind() || definition.args.kind() != step.kind() {
            return Err(ValidationError::DefinitionMismatch {
                id: step.id().to_string(),
                message: format!(
                    "step list says {}, definition says {} with {} arguments",
                    step.kind(),
                    definition.step_kind,
                    definition.args.kind()
                ),
            });
        }
        Ok(definition)
    }
}

fn check_definition(index: usize, definition: &StepDefinition) -> Result<(), ValidationError> {
    match &definition.args {
        StepArgs::ActuateGripper(args) => check_gripper(index, &definition.id, args),
        StepArgs::MoveArmTo(args) => check_move(&definition.id, args),
    }
}

fn check_gripper(index: usize, id: &str, args: &ActuateGripperArgs) -> Result<(), ValidationError> {
    let expected = if index % 3 == 0 {
        GripperSelector::Primary
    } else {
        GripperSelector::Secondary
    };
    if args.selected_gripper != expected {
        return Err(ValidationError::GripperOrderMismatch {
            index,
            expected: expected.as_str(),
            found: args.selected_gripper.as_str(),
        });
    }

    check_range(id, "diameterMM", args.diameter_mm, &(DIAMETER_MIN_MM..=DIAMETER_MAX_MM))
}

fn check_move(id: &str, args: &MoveArmToArgs) -> Result<(), ValidationError> {
    let joints = JointAngles::NAMES.into_iter().zip(args.target.joint_angles.iter());
    for (joint, angle) in joints {
        check_range(id, joint, angle, &JOINT_ANGLE_RANGE)?;
    }

    let pose = &args.target.pose;
    for (field, value) in ["x", "y", "z"].into_iter().zip(pose.position()) {
        check_range(id, field, value, &POSITION_RANGE)?;
    }

    let norm = pose.orientation.norm();
    if (norm - 1.0).abs() > UNIT_NORM_TOLERANCE {
        return Err(ValidationError::NonUnitQuaternion {
            id: id.to_string(),
            norm,
        });
    }
    Ok(())
}

fn check_range(
    id: &str,
    field: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
) -> Result<(), ValidationError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            id: id.to_string(),
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}
