//! Common test utilities for building generators and inspecting routines.
use routinegen::prelude::*;

/// Seed shared by tests that only need some fixed, reproducible output.
#[allow(dead_code)]
pub const TEST_SEED: u64 = 0x5eed;

/// Creates a seeded generator for the given layout with default settings.
#[allow(dead_code)]
pub fn seeded_generator(layout: RoutineLayout, seed: u64) -> RoutineGenerator<rand::rngs::StdRng> {
    RoutineGenerator::seeded(seed, GeneratorConfig::with_layout(layout))
        .expect("default configuration is valid")
}

/// Generates a routine of `groups` step groups with the shared test seed.
#[allow(dead_code)]
pub fn generate(layout: RoutineLayout, groups: usize) -> RoutineDocument {
    seeded_generator(layout, TEST_SEED).generate_routine(groups)
}

/// Resolves every step to its full definition, in routine order.
#[allow(dead_code)]
pub fn definitions(document: &RoutineDocument) -> Vec<&StepDefinition> {
    let defs: Vec<_> = document.definitions().collect();
    assert_eq!(defs.len(), document.len(), "every step should resolve");
    defs
}

#[allow(dead_code)]
pub fn gripper_args(def: &StepDefinition) -> &ActuateGripperArgs {
    match &def.args {
        StepArgs::ActuateGripper(args) => args,
        other => panic!("expected ActuateGripper args, found {:?}", other.kind()),
    }
}

#[allow(dead_code)]
pub fn move_args(def: &StepDefinition) -> &MoveArmToArgs {
    match &def.args {
        StepArgs::MoveArmTo(args) => args,
        other => panic!("expected MoveArmTo args, found {:?}", other.kind()),
    }
}

/// A minimal, valid indexed routine document as it appears on disk.
#[allow(dead_code)]
pub const INDEXED_ROUTINE_JSON: &str = r#"{
  "globals": { "globalSpace": [], "globalVariables": [] },
  "routine": {
    "motionPlanner": "ROS2",
    "steps": [
      { "id": "a", "stepKind": "ActuateGripper" },
      { "id": "b", "stepKind": "ActuateGripper" },
      { "id": "c", "stepKind": "MoveArmTo" }
    ],
    "stepDefinitions": {
      "a": {
        "id": "a",
        "stepKind": "ActuateGripper",
        "args": {
          "argumentKind": "ActuateGripper",
          "selectedGripper": "primary",
          "diameterMM": 64.5,
          "forceNewtons": 45,
          "gripKind": "inward",
          "payloadKg": 0,
          "targetDiameterToleranceMeters": 0.01,
          "waitForGripToContinue": false,
          "isFlexGrip": false,
          "forcePercent": 0.5,
          "stopRoutineOnFailure": true
        }
      },
      "b": {
        "id": "b",
        "stepKind": "ActuateGripper",
        "args": {
          "argumentKind": "ActuateGripper",
          "selectedGripper": "secondary",
          "diameterMM": 99.12,
          "forceNewtons": 45,
          "gripKind": "inward",
          "payloadKg": 0,
          "targetDiameterToleranceMeters": 0.01,
          "waitForGripToContinue": false,
          "isFlexGrip": false,
          "forcePercent": 0.5,
          "stopRoutineOnFailure": true
        }
      },
      "c": {
        "id": "c",
        "stepKind": "MoveArmTo",
        "args": {
          "argumentKind": "MoveArmTo",
          "motionKind": "joint",
          "shouldMatchJointAngles": false,
          "tcpOption": "auto",
          "positionListID": null,
          "target": {
            "jointAngles": [0.1, -0.2, 0.3, -1.4, 2.5, -3.1],
            "pose": { "w": 1.0, "i": 0.0, "j": 0.0, "k": 0.0, "x": 0.25, "y": 0.5, "z": 0.75 },
            "tcpOption": "wrist"
          },
          "targetKind": "singlePosition",
          "isWaypoint": false,
          "isCacheable": false,
          "reduceSmoothing": false,
          "moveDynamicBaseToReachPosition": true
        }
      }
    }
  }
}"#;
