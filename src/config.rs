use crate::error::GenerateError;
use crate::generator::IdFormat;
use crate::routine::{
    DEFAULT_MOTION_PLANNER, DIAMETER_MAX_MM, DIAMETER_MIN_MM, INITIAL_DIAMETER_MM, TargetKind,
};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Number of step groups generated when nothing else is requested.
pub const DEFAULT_STEP_GROUPS: usize = 400;

/// The two document shapes a routine can be written in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoutineLayout {
    /// Step list holds `{id, stepKind}` references; payloads live in `stepDefinitions`.
    /// Every gripper step draws its own diameter and move steps carry `targetKind`.
    #[default]
    Indexed,
    /// Step list holds full definitions. Both gripper steps of a group share a
    /// carried-forward diameter and move steps omit `targetKind`.
    Inline,
}

impl RoutineLayout {
    pub fn default_file_name(self) -> &'static str {
        match self {
            RoutineLayout::Indexed => "generated_routine.json",
            RoutineLayout::Inline => "generated_steps.json",
        }
    }

    pub fn id_format(self) -> IdFormat {
        match self {
            RoutineLayout::Indexed => IdFormat::Hyphenated,
            RoutineLayout::Inline => IdFormat::Simple,
        }
    }

    pub fn target_kind(self) -> Option<TargetKind> {
        match self {
            RoutineLayout::Indexed => Some(TargetKind::SinglePosition),
            RoutineLayout::Inline => None,
        }
    }

    pub fn carries_diameter(self) -> bool {
        matches!(self, RoutineLayout::Inline)
    }

    /// Whether drawn gripper diameters are rounded to two decimals.
    pub fn rounds_diameter(self) -> bool {
        matches!(self, RoutineLayout::Indexed)
    }
}

/// Settings for a `RoutineGenerator`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    pub step_groups: usize,
    pub layout: RoutineLayout,
    pub motion_planner: String,
    pub diameter_min_mm: f64,
    pub diameter_max_mm: f64,
    /// First diameter carried by the inline layout.
    pub initial_diameter_mm: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            step_groups: DEFAULT_STEP_GROUPS,
            layout: RoutineLayout::default(),
            motion_planner: DEFAULT_MOTION_PLANNER.to_string(),
            diameter_min_mm: DIAMETER_MIN_MM,
            diameter_max_mm: DIAMETER_MAX_MM,
            initial_diameter_mm: INITIAL_DIAMETER_MM,
        }
    }
}

impl GeneratorConfig {
    pub fn with_layout(layout: RoutineLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Configuration for `step_groups` groups in `layout`, otherwise default.
    pub fn new(layout: RoutineLayout, step_groups: usize) -> Self {
        Self {
            step_groups,
            ..Self::with_layout(layout)
        }
    }

    /// Where the layout's document is written when no path is given.
    pub fn default_output(&self) -> PathBuf {
        PathBuf::from(self.layout.default_file_name())
    }

    pub fn diameter_range(&self) -> RangeInclusive<f64> {
        self.diameter_min_mm..=self.diameter_max_mm
    }

    /// Rejects diameter bounds that are inverted, non-finite or outside the gripper's physical range.
    pub fn validate(&self) -> Result<(), GenerateError> {
        let physical = DIAMETER_MIN_MM..=DIAMETER_MAX_MM;
        if !self.diameter_min_mm.is_finite() || !self.diameter_max_mm.is_finite() {
            return Err(GenerateError::InvalidConfig(
                "diameter bounds must be finite".to_string(),
            ));
        }
        if self.diameter_min_mm > self.diameter_max_mm {
            return Err(GenerateError::InvalidConfig(format!(
                "diameter range is inverted: {} > {}",
                self.diameter_min_mm, self.diameter_max_mm
            )));
        }
        if !physical.contains(&self.diameter_min_mm) || !physical.contains(&self.diameter_max_mm) {
            return Err(GenerateError::InvalidConfig(format!(
                "diameter range [{}, {}] exceeds gripper limits [{}, {}]",
                self.diameter_min_mm, self.diameter_max_mm, DIAMETER_MIN_MM, DIAMETER_MAX_MM
            )));
        }
        if !physical.contains(&self.initial_diameter_mm) {
            return Err(GenerateError::InvalidConfig(format!(
                "initial diameter {} is outside gripper limits [{}, {}]",
                self.initial_diameter_mm, DIAMETER_MIN_MM, DIAMETER_MAX_MM
            )));
        }
        if self.motion_planner.trim().is_empty() {
            return Err(GenerateError::InvalidConfig(
                "motion planner tag must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
