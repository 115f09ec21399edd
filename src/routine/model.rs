use super::args::{ActuateGripperArgs, MoveArmToArgs};
use crate::config::RoutineLayout;
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Planner tag written into every generated routine.
pub const DEFAULT_MOTION_PLANNER: &str = "ROS2";

/// The two kinds of step a routine can contain.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StepKind {
    ActuateGripper,
    MoveArmTo,
}

impl StepKind {
    pub const ALL: [StepKind; 2] = [StepKind::ActuateGripper, StepKind::MoveArmTo];

    /// The kind expected at `index` in the repeating grip, grip, move pattern.
    pub fn at_pattern_index(index: usize) -> Self {
        if index % 3 == 2 {
            StepKind::MoveArmTo
        } else {
            StepKind::ActuateGripper
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::ActuateGripper => write!(f, "ActuateGripper"),
            StepKind::MoveArmTo => write!(f, "MoveArmTo"),
        }
    }
}

/// Step arguments, tagged by `argumentKind` in the serialized form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "argumentKind")]
pub enum StepArgs {
    ActuateGripper(ActuateGripperArgs),
    MoveArmTo(MoveArmToArgs),
}

impl StepArgs {
    pub fn kind(&self) -> StepKind {
        match self {
            StepArgs::ActuateGripper(_) => StepKind::ActuateGripper,
            StepArgs::MoveArmTo(_) => StepKind::MoveArmTo,
        }
    }
}

/// Identifies a step's position and type within the ordered step list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StepReference {
    pub id: String,
    pub step_kind: StepKind,
}

/// The full payload of a single step.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StepDefinition {
    pub id: String,
    pub step_kind: StepKind,
    pub args: StepArgs,
}

impl StepDefinition {
    pub fn new(id: String, args: StepArgs) -> Self {
        Self {
            id,
            step_kind: args.kind(),
            args,
        }
    }

    pub fn reference(&self) -> StepReference {
        StepReference {
            id: self.id.clone(),
            step_kind: self.step_kind,
        }
    }
}

/// An entry of the ordered step list.
///
/// The indexed layout lists references and keeps the payloads in `stepDefinitions`;
/// the inline layout lists the full definitions directly.
///
/// An entry with an `args` member is always read as `Inline`, so malformed
/// arguments fail the parse instead of degrading the step to a reference.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RoutineStep {
    Inline(StepDefinition),
    Reference(StepReference),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStep {
    id: String,
    step_kind: StepKind,
    #[serde(default)]
    args: Option<StepArgs>,
}

impl<'de> Deserialize<'de> for RoutineStep {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawStep::deserialize(deserializer)?;
        Ok(match raw.args {
            Some(args) => RoutineStep::Inline(StepDefinition {
                id: raw.id,
                step_kind: raw.step_kind,
                args,
            }),
            None => RoutineStep::Reference(StepReference {
                id: raw.id,
                step_kind: raw.step_kind,
            }),
        })
    }
}

impl RoutineStep {
    pub fn id(&self) -> &str {
        match self {
            RoutineStep::Inline(def) => &def.id,
            RoutineStep::Reference(reference) => &reference.id,
        }
    }

    pub fn kind(&self) -> StepKind {
        match self {
            RoutineStep::Inline(def) => def.step_kind,
            RoutineStep::Reference(reference) => reference.step_kind,
        }
    }
}

/// Global space and variable declarations. Always empty in generated routines.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Globals {
    pub global_space: Vec<serde_json::Value>,
    pub global_variables: Vec<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    pub motion_planner: String,
    pub steps: Vec<RoutineStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_definitions: Option<BTreeMap<String, StepDefinition>>,
}

/// The top-level document written to disk.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoutineDocument {
    pub globals: Globals,
    pub routine: Routine,
}

impl RoutineDocument {
    pub fn new(routine: Routine) -> Self {
        Self {
            globals: Globals::default(),
            routine,
        }
    }

    /// The layout this document was written in, judged by where the step payloads live.
    /// Returns `None` when the step list mixes references and inline definitions.
    pub fn layout(&self) -> Option<RoutineLayout> {
        let steps = &self.routine.steps;
        let all_inline = steps.iter().all(|s| matches!(s, RoutineStep::Inline(_)));
        let all_references = steps.iter().all(|s| matches!(s, RoutineStep::Reference(_)));

        match &self.routine.step_definitions {
            Some(_) if all_references => Some(RoutineLayout::Indexed),
            None if all_inline => Some(RoutineLayout::Inline),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.routine.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routine.steps.is_empty()
    }

    /// Step kinds in routine order.
    pub fn step_kinds(&self) -> impl Iterator<Item = StepKind> + '_ {
        self.routine.steps.iter().map(RoutineStep::kind)
    }

    pub fn kind_counts(&self) -> HashMap<StepKind, usize> {
        self.step_kinds().counts()
    }

    /// Resolves a step's full definition, either inline or through the lookup table.
    pub fn definition<'a>(&'a self, step: &'a RoutineStep) -> Option<&'a StepDefinition> {
        match step {
            RoutineStep::Inline(def) => Some(def),
            RoutineStep::Reference(reference) => self
                .routine
                .step_definitions
                .as_ref()
                .and_then(|defs| defs.get(&reference.id)),
        }
    }

    /// Full definitions in routine order. Unresolvable references are skipped.
    pub fn definitions(&self) -> impl Iterator<Item = &StepDefinition> + '_ {
        self.routine
            .steps
            .iter()
            .filter_map(|step| self.definition(step))
    }
}
