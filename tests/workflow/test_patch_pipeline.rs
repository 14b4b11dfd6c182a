use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use stepguard::core::error::{AppError, ErrorReporter};
use stepguard::core::types::ErrorCategory;
use stepguard::core::workflow::{patch_file, patch_files, FileStatus, GUARD_MARKER, GUARD_PREFIX};
use tempfile::TempDir;

#[derive(Default)]
struct RecordingReporter {
    errors: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
}

impl ErrorReporter for RecordingReporter {
    fn report_error(&self, error: &AppError) {
        self.errors.lock().unwrap().push(error.to_string());
    }

    fn report_warning(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn report_info(&self, _message: &str) {}
}

fn write_workflow(dir: &TempDir, name: &str, yaml: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, yaml).expect("write workflow");
    path
}

const DEPLOY_WORKFLOW: &str = r#"jobs:
  deploy:
    steps:
      - run: kubectl apply -f app.yaml
"#;

const CLEAN_WORKFLOW: &str = r#"jobs:
  build:
    steps:
      - run: echo hello
"#;

#[test]
fn p1_patch_file_rewrites_guarded_workflow() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_workflow(&dir, "deploy.yml", DEPLOY_WORKFLOW);
    let patched = patch_file(&path).expect("patch");
    assert_eq!(patched, 1);
    let contents = fs::read_to_string(&path).expect("read back");
    assert!(contents.contains(GUARD_MARKER));
}

#[test]
fn p2_patch_file_leaves_clean_workflow_bytes_alone() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_workflow(&dir, "build.yml", CLEAN_WORKFLOW);
    let patched = patch_file(&path).expect("patch");
    assert_eq!(patched, 0);
    let contents = fs::read_to_string(&path).expect("read back");
    assert_eq!(contents, CLEAN_WORKFLOW);
}

#[test]
fn p3_patch_file_is_idempotent_on_disk() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_workflow(&dir, "deploy.yml", DEPLOY_WORKFLOW);
    assert_eq!(patch_file(&path).expect("first run"), 1);
    let after_first = fs::read_to_string(&path).expect("read back");
    assert_eq!(patch_file(&path).expect("second run"), 0);
    let after_second = fs::read_to_string(&path).expect("read back");
    assert_eq!(after_first, after_second);
}

#[test]
fn p4_guarded_run_survives_the_disk_round_trip() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_workflow(&dir, "deploy.yml", DEPLOY_WORKFLOW);
    patch_file(&path).expect("patch");

    let contents = fs::read_to_string(&path).expect("read back");
    let root: serde_yaml::Value = serde_yaml::from_str(&contents).expect("reparse");
    let run = root["jobs"]["deploy"]["steps"][0]["run"]
        .as_str()
        .expect("string run");
    assert_eq!(run, format!("{GUARD_PREFIX}kubectl apply -f app.yaml"));
}

#[test]
fn p5_patch_file_missing_path_is_io_error() {
    let dir = TempDir::new().expect("tempdir");
    let err = patch_file(&dir.path().join("absent.yml")).expect_err("missing file");
    assert_eq!(err.category, ErrorCategory::IoError);
}

#[test]
fn p6_batch_continues_past_missing_file() {
    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("missing.yml");
    let deploy = write_workflow(&dir, "deploy.yml", DEPLOY_WORKFLOW);
    let reporter = RecordingReporter::default();

    let summary = patch_files(&[missing.clone(), deploy], &reporter);

    assert_eq!(summary.total_patched, 1);
    assert_eq!(summary.files.len(), 2);
    assert_eq!(summary.files[0].status, FileStatus::Missing);
    assert_eq!(summary.files[1].status, FileStatus::Patched);
    assert_eq!(summary.files[1].patched_steps, 1);

    let warnings = reporter.warnings.lock().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0], format!("File not found: {}", missing.display()));
}

#[test]
fn p7_batch_reports_parse_failure_and_continues() {
    let dir = TempDir::new().expect("tempdir");
    let broken = write_workflow(&dir, "broken.yml", "jobs: [unclosed\n");
    let deploy = write_workflow(&dir, "deploy.yml", DEPLOY_WORKFLOW);
    let reporter = RecordingReporter::default();

    let summary = patch_files(&[broken, deploy], &reporter);

    assert_eq!(summary.total_patched, 1);
    assert_eq!(summary.files[0].status, FileStatus::Error);
    let recorded = summary.files[0].error.as_deref().expect("error detail");
    assert!(recorded.contains("failed to parse"));
    assert_eq!(summary.files[1].status, FileStatus::Patched);

    let errors = reporter.errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("SG-PARSE-001"));
}

#[test]
fn p8_batch_keeps_input_order_in_summary() {
    let dir = TempDir::new().expect("tempdir");
    let clean = write_workflow(&dir, "build.yml", CLEAN_WORKFLOW);
    let deploy = write_workflow(&dir, "deploy.yml", DEPLOY_WORKFLOW);
    let reporter = RecordingReporter::default();

    let summary = patch_files(&[clean.clone(), deploy.clone()], &reporter);

    assert_eq!(summary.files[0].path, clean);
    assert_eq!(summary.files[0].status, FileStatus::Clean);
    assert_eq!(summary.files[1].path, deploy);
    assert_eq!(summary.files[1].status, FileStatus::Patched);
    assert_eq!(summary.total_patched, 1);
}
