//! Integration tests for routinegen
//!
//! End-to-end tests: generate, write to disk, read back.
//!
mod common;
use common::*;
use routinegen::prelude::*;
use std::fs;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_write_and_read_back_indexed_routine() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(RoutineLayout::Indexed.default_file_name());

        let document = generate(RoutineLayout::Indexed, 40);
        write_document(&document, &path).expect("Failed to write routine");

        let reloaded = read_document(&path).expect("Failed to read routine");
        assert_eq!(reloaded, document);
        reloaded.validate().expect("Reloaded routine should be valid");
    }

    #[test]
    fn test_write_and_read_back_inline_routine() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(RoutineLayout::Inline.default_file_name());

        let document = generate(RoutineLayout::Inline, 40);
        write_document(&document, &path).unwrap();

        let reloaded = read_document(&path).unwrap();
        assert_eq!(reloaded.layout(), Some(RoutineLayout::Inline));
        assert_eq!(reloaded, document);
    }

    #[test]
    fn test_output_is_indented_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routine.json");

        write_document(&generate(RoutineLayout::Indexed, 1), &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        assert!(content.starts_with("{\n  \"globals\": {\n    \"globalSpace\": []"));
        assert!(content.contains("\n  \"routine\": {\n    \"motionPlanner\": \"ROS2\""));
    }

    #[test]
    fn test_empty_routine_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");

        write_document(&generate(RoutineLayout::Inline, 0), &path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

        assert!(value["globals"].is_object());
        assert_eq!(value["routine"]["steps"], serde_json::json!([]));
    }

    #[test]
    fn test_unwritable_path_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("routine.json");

        let err = write_document(&generate(RoutineLayout::Indexed, 1), &path).unwrap_err();
        match err {
            GenerateError::Io { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("expected an I/O error, got {}", other),
        }
    }

    #[test]
    fn test_reading_garbage_reports_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.json");
        fs::write(&path, "{ \"globals\": 3 }").unwrap();

        assert!(matches!(read_document(&path), Err(GenerateError::Json(_))));
    }

    #[test]
    fn test_corrupt_inline_step_reports_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.json");

        let mut value = serde_json::to_value(generate(RoutineLayout::Inline, 1)).unwrap();
        value["routine"]["steps"][0]["args"]["selectedGripper"] = serde_json::json!("tertiary");
        fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();

        assert!(matches!(read_document(&path), Err(GenerateError::Json(_))));
    }

    #[test]
    fn test_seeded_runs_write_identical_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");

        let config = GeneratorConfig::with_layout(RoutineLayout::Inline);
        let mut a = RoutineGenerator::seeded(99, config.clone()).unwrap();
        let mut b = RoutineGenerator::seeded(99, config).unwrap();
        write_document(&a.generate_routine(15), &first).unwrap();
        write_document(&b.generate_routine(15), &second).unwrap();

        assert_eq!(
            fs::read_to_string(&first).unwrap(),
            fs::read_to_string(&second).unwrap()
        );
    }
}
