use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::RangeInclusive;

/// Smallest gripper opening a generated step may request, in millimeters.
pub const DIAMETER_MIN_MM: f64 = 30.0;
/// Largest gripper opening a generated step may request, in millimeters.
pub const DIAMETER_MAX_MM: f64 = 125.0;
/// Diameter the inline layout starts carrying before the first re-draw.
pub const INITIAL_DIAMETER_MM: f64 = 125.0;

pub const DEFAULT_FORCE_NEWTONS: f64 = 45.0;
pub const DEFAULT_DIAMETER_TOLERANCE_M: f64 = 0.01;
pub const DEFAULT_FORCE_PERCENT: f64 = 0.5;

/// Valid range for each of the six joint angles, in radians.
pub const JOINT_ANGLE_RANGE: RangeInclusive<f64> = -PI..=PI;
/// Valid range for each pose position axis.
pub const POSITION_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Which of the two grippers a step actuates.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GripperSelector {
    Primary,
    Secondary,
}

impl GripperSelector {
    pub fn as_str(self) -> &'static str {
        match self {
            GripperSelector::Primary => "primary",
            GripperSelector::Secondary => "secondary",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GripKind {
    Inward,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MotionKind {
    Joint,
}

/// Tool-center-point reference used when positioning the end effector.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TcpOption {
    Auto,
    Wrist,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TargetKind {
    SinglePosition,
}

/// Arguments of an `ActuateGripper` step.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActuateGripperArgs {
    pub selected_gripper: GripperSelector,
    #[serde(rename = "diameterMM")]
    pub diameter_mm: f64,
    pub force_newtons: f64,
    pub grip_kind: GripKind,
    pub payload_kg: f64,
    pub target_diameter_tolerance_meters: f64,
    pub wait_for_grip_to_continue: bool,
    pub is_flex_grip: bool,
    pub force_percent: f64,
    pub stop_routine_on_failure: bool,
}

impl ActuateGripperArgs {
    /// Builds an inward grip with the fixed force, tolerance and failure defaults.
    pub fn new(selected_gripper: GripperSelector, diameter_mm: f64) -> Self {
        Self {
            selected_gripper,
            diameter_mm,
            force_newtons: DEFAULT_FORCE_NEWTONS,
            grip_kind: GripKind::Inward,
            payload_kg: 0.0,
            target_diameter_tolerance_meters: DEFAULT_DIAMETER_TOLERANCE_M,
            wait_for_grip_to_continue: false,
            is_flex_grip: false,
            force_percent: DEFAULT_FORCE_PERCENT,
            stop_routine_on_failure: true,
        }
    }
}

/// Orientation as a quaternion with real part `w` and imaginary parts `i`, `j`, `k`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub w: f64,
    pub i: f64,
    pub j: f64,
    pub k: f64,
}

impl Quaternion {
    pub fn norm(&self) -> f64 {
        (self.w * self.w + self.i * self.i + self.j * self.j + self.k * self.k).sqrt()
    }
}

/// A 3D position plus orientation. Serialized flat as `{w, i, j, k, x, y, z}`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    #[serde(flatten)]
    pub orientation: Quaternion,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Pose {
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Joint-space configuration: base, shoulder, elbow, wrist 1, wrist 2, wrist 3.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(transparent)]
pub struct JointAngles(pub [f64; 6]);

impl JointAngles {
    pub const NAMES: [&'static str; 6] = ["base", "shoulder", "elbow", "wrist1", "wrist2", "wrist3"];

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArmTarget {
    pub joint_angles: JointAngles,
    pub pose: Pose,
    pub tcp_option: TcpOption,
}

/// Arguments of a `MoveArmTo` step.
///
/// `target_kind` is omitted from the serialized form when `None`, which is how the
/// inline layout writes its move steps.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoveArmToArgs {
    pub motion_kind: MotionKind,
    pub should_match_joint_angles: bool,
    pub tcp_option: TcpOption,
    #[serde(rename = "positionListID")]
    pub position_list_id: Option<String>,
    pub target: ArmTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_kind: Option<TargetKind>,
    pub is_waypoint: bool,
    pub is_cacheable: bool,
    pub reduce_smoothing: bool,
    pub move_dynamic_base_to_reach_position: bool,
}

impl MoveArmToArgs {
    /// Builds a joint-space move to `target` with waypointing, caching and smoothing reduction disabled.
    pub fn joint_move(target: ArmTarget, target_kind: Option<TargetKind>) -> Self {
        Self {
            motion_kind: MotionKind::Joint,
            should_match_joint_angles: false,
            tcp_option: TcpOption::Auto,
            position_list_id: None,
            target,
            target_kind,
            is_waypoint: false,
            is_cacheable: false,
            reduce_smoothing: false,
            move_dynamic_base_to_reach_position: true,
        }
    }
}
