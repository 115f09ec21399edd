use crate::config::{GeneratorConfig, RoutineLayout};
use crate::error::GenerateError;
use crate::routine::{
    ActuateGripperArgs, ArmTarget, GripperSelector, JointAngles, MoveArmToArgs, Pose, Quaternion,
    Routine, RoutineDocument, RoutineStep, StepArgs, StepDefinition, TcpOption,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use tracing::{debug, trace};

mod identifier;
pub mod sampling;

pub use identifier::{IdFormat, generate_identifier};

/// Builds randomized routines from an injected random source.
///
/// The generator holds no state besides the random source and its configuration, so
/// two generators with equally seeded sources and equal configurations produce
/// identical documents.
pub struct RoutineGenerator<R: Rng> {
    rng: R,
    config: GeneratorConfig,
}

impl RoutineGenerator<StdRng> {
    /// A generator whose output is fully determined by `seed` and `config`.
    pub fn seeded(seed: u64, config: GeneratorConfig) -> Result<Self, GenerateError> {
        Self::new(StdRng::seed_from_u64(seed), config)
    }

    pub fn from_entropy(config: GeneratorConfig) -> Result<Self, GenerateError> {
        Self::new(StdRng::from_os_rng(), config)
    }
}

impl<R: Rng> RoutineGenerator<R> {
    pub fn new(rng: R, config: GeneratorConfig) -> Result<Self, GenerateError> {
        config.validate()?;
        Ok(Self { rng, config })
    }

    pub fn generate_identifier(&mut self) -> String {
        generate_identifier(&mut self.rng, self.config.layout.id_format())
    }

    pub fn generate_unit_quaternion(&mut self) -> Quaternion {
        sampling::unit_quaternion(&mut self.rng)
    }

    pub fn generate_joint_angles(&mut self) -> JointAngles {
        sampling::joint_angles(&mut self.rng)
    }

    pub fn generate_pose(&mut self) -> Pose {
        sampling::pose(&mut self.rng)
    }

    /// A diameter from the configured range. The indexed layout rounds it to two decimals.
    pub fn generate_diameter(&mut self) -> f64 {
        let range = self.config.diameter_range();
        let raw = sampling::diameter(&mut self.rng, range.clone());
        if self.config.layout.rounds_diameter() {
            sampling::round_diameter(raw, &range)
        } else {
            raw
        }
    }

    /// Builds an `ActuateGripper` step. A missing `diameter` is drawn from the configured range.
    pub fn generate_gripper_step(
        &mut self,
        id: String,
        gripper: GripperSelector,
        diameter: Option<f64>,
    ) -> StepDefinition {
        let diameter_mm = diameter.unwrap_or_else(|| self.generate_diameter());
        let args = ActuateGripperArgs::new(gripper, diameter_mm);
        StepDefinition::new(id, StepArgs::ActuateGripper(args))
    }

    /// Builds a joint-space `MoveArmTo` step towards freshly drawn joint angles and pose.
    pub fn generate_move_step(&mut self, id: String) -> StepDefinition {
        let target = ArmTarget {
            joint_angles: self.generate_joint_angles(),
            pose: self.generate_pose(),
            tcp_option: TcpOption::Wrist,
        };
        let args = MoveArmToArgs::joint_move(target, self.config.layout.target_kind());
        StepDefinition::new(id, StepArgs::MoveArmTo(args))
    }

    /// Generates the configured number of step groups.
    pub fn generate(&mut self) -> RoutineDocument {
        self.generate_routine(self.config.step_groups)
    }

    /// Generates `step_groups` groups of primary grip, secondary grip and arm move.
    ///
    /// In the inline layout both grips of a group share one diameter, which is
    /// re-drawn once the pair is emitted; the first pair uses the configured
    /// initial diameter. In the indexed layout every grip draws its own.
    pub fn generate_routine(&mut self, step_groups: usize) -> RoutineDocument {
        let layout = self.config.layout;
        debug!(step_groups, ?layout, "generating routine");

        let mut steps = Vec::with_capacity(step_groups.saturating_mul(3));
        let mut definitions = BTreeMap::new();
        let mut carried = layout
            .carries_diameter()
            .then_some(self.config.initial_diameter_mm);

        for group in 0..step_groups {
            for gripper in [GripperSelector::Primary, GripperSelector::Secondary] {
                let id = self.generate_identifier();
                let step = self.generate_gripper_step(id, gripper, carried);
                push_step(layout, step, &mut steps, &mut definitions);
            }
            if carried.is_some() {
                carried = Some(self.generate_diameter());
            }

            let id = self.generate_identifier();
            let step = self.generate_move_step(id);
            push_step(layout, step, &mut steps, &mut definitions);

            trace!(group, "generated step group");
        }

        let step_definitions = match layout {
            RoutineLayout::Indexed => Some(definitions),
            RoutineLayout::Inline => None,
        };

        debug!(steps = steps.len(), "routine assembled");
        RoutineDocument::new(Routine {
            motion_planner: self.config.motion_planner.clone(),
            steps,
            step_definitions,
        })
    }
}

fn push_step(
    layout: RoutineLayout,
    step: StepDefinition,
    steps: &mut Vec<RoutineStep>,
    definitions: &mut BTreeMap<String, StepDefinition>,
) {
    match layout {
        RoutineLayout::Indexed => {
            steps.push(RoutineStep::Reference(step.reference()));
            definitions.insert(step.id.clone(), step);
        }
        RoutineLayout::Inline => steps.push(RoutineStep::Inline(step)),
    }
}
