//! CLI command tests

use super::init::render_default_spec;
use super::schedule::{render_schedule, resolve_spec, ScheduleReport};
use super::validate::{format_early_stopping_info, format_model_info, format_optimizer_info};
use super::*;
use crate::config::*;
use crate::optim::ScheduleConfig;
use std::path::PathBuf;
use tempfile::TempDir;

fn create_test_config(dir: &TempDir, body: &str) -> PathBuf {
    let config_path = dir.path().join("run.yaml");
    std::fs::write(&config_path, body).unwrap();
    config_path
}

fn schedule_args(config: Option<PathBuf>) -> ScheduleArgs {
    ScheduleArgs { config, lr: None, epochs: None, warmup: None, format: OutputFormat::Text }
}

fn quiet(command: Command) -> Cli {
    Cli { command, verbose: false, quiet: true }
}

#[test]
fn test_run_schedule_defaults() {
    assert!(run_command(quiet(Command::Schedule(schedule_args(None)))).is_ok());
}

#[test]
fn test_run_schedule_rejects_warmup_equal_to_epochs() {
    let args = ScheduleArgs { epochs: Some(100), warmup: Some(100), ..schedule_args(None) };
    let err = run_command(quiet(Command::Schedule(args))).unwrap_err();
    assert_eq!(
        err,
        "Invalid schedule: Warmup steps (100) must be less than total steps (100)"
    );
}

#[test]
fn test_run_schedule_rejects_negative_warmup() {
    let args = ScheduleArgs { warmup: Some(-2), ..schedule_args(None) };
    let err = run_command(quiet(Command::Schedule(args))).unwrap_err();
    assert!(err.contains("-2"), "{err}");
}

#[test]
fn test_resolve_spec_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = create_test_config(&dir, "learning_rate: 0.01\nepochs: 40\nwarmup_steps: 4\n");
    let args = ScheduleArgs { warmup: Some(8), ..schedule_args(Some(path)) };

    let spec = resolve_spec(&args).unwrap();
    assert_eq!(spec.learning_rate, 0.01);
    assert_eq!(spec.epochs, 40);
    assert_eq!(spec.warmup_steps, 8);
}

#[test]
fn test_resolve_spec_missing_file() {
    let args = schedule_args(Some(PathBuf::from("/nonexistent/run.yaml")));
    assert!(resolve_spec(&args).is_err());
}

#[test]
fn test_render_schedule_text() {
    let report = ScheduleReport::new(ScheduleConfig::new(0.1, 4, 1).unwrap());
    let text = render_schedule(&report, OutputFormat::Text).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].contains("epoch"));
    assert!(lines[2].trim_start().starts_with('1'));
    assert!(lines[2].ends_with("0.10000000"));
}

#[test]
fn test_render_schedule_json() {
    let report = ScheduleReport::new(ScheduleConfig::new(0.1, 100, 10).unwrap());
    let json = render_schedule(&report, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["total_steps"], 100);
    assert_eq!(value["warmup_steps"], 10);
    assert_eq!(value["schedule"].as_array().unwrap().len(), 101);
    let peak = value["schedule"][10]["lr"].as_f64().unwrap();
    assert!((peak - 0.1).abs() < 1e-12);
}

#[test]
fn test_render_schedule_yaml() {
    let report = ScheduleReport::new(ScheduleConfig::new(0.1, 3, 0).unwrap());
    let yaml = render_schedule(&report, OutputFormat::Yaml).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(value["base_lr"].as_f64(), Some(0.1));
    assert_eq!(value["schedule"][0]["lr"].as_f64(), Some(0.1));
}

#[test]
fn test_run_validate_valid_config() {
    let dir = TempDir::new().unwrap();
    let path = create_test_config(&dir, "learning_rate: 0.001\nepochs: 50\nwarmup_steps: 5\n");
    let args = ValidateArgs { config: path, detailed: true };
    assert!(run_command(quiet(Command::Validate(args))).is_ok());
}

#[test]
fn test_run_validate_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = create_test_config(&dir, "optimizer: rmsprop\n");
    let args = ValidateArgs { config: path, detailed: false };
    let err = run_command(quiet(Command::Validate(args))).unwrap_err();
    assert!(err.starts_with("Validation failed"), "{err}");
    assert!(err.contains("rmsprop"));
}

#[test]
fn test_run_validate_missing_file() {
    let args = ValidateArgs { config: PathBuf::from("/nonexistent.yaml"), detailed: false };
    let err = run_command(quiet(Command::Validate(args))).unwrap_err();
    assert!(err.starts_with("Config error"), "{err}");
}

#[test]
fn test_run_init_writes_valid_spec() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("run.yaml");
    let args = InitArgs { output: Some(path.clone()), force: false };
    run_command(quiet(Command::Init(args))).unwrap();

    let spec = load_and_validate(&path).unwrap();
    assert_eq!(spec, RunSpec::default());
}

#[test]
fn test_run_init_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = create_test_config(&dir, "epochs: 3\n");

    let args = InitArgs { output: Some(path.clone()), force: false };
    assert!(run_command(quiet(Command::Init(args))).is_err());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "epochs: 3\n");

    let args = InitArgs { output: Some(path.clone()), force: true };
    assert!(run_command(quiet(Command::Init(args))).is_ok());
    assert_eq!(load_config(&path).unwrap(), RunSpec::default());
}

#[test]
fn test_render_default_spec_has_header() {
    let yaml = render_default_spec().unwrap();
    assert!(yaml.starts_with("# warmcos run specification"));
    assert!(yaml.contains("learning_rate:"));
}

#[test]
fn test_format_helpers() {
    let mut spec = RunSpec { global_clipnorm: Some(1.0), label_smoothing: 0.1, ..Default::default() };
    spec.optimizer_params.insert("beta2".to_string(), serde_json::json!(0.98));

    let opt = format_optimizer_info(&spec);
    assert!(opt.contains("Global clip norm: 1"));
    assert!(opt.contains("beta2: 0.98"));
    assert!(opt.contains("Label smoothing: 0.1"));

    assert!(format_early_stopping_info(&spec).contains("monitor=val_accuracy mode=max"));
    spec.early_stopping.enabled = false;
    assert_eq!(format_early_stopping_info(&spec), "  Early stopping: disabled");

    assert!(format_model_info(&spec).contains("Classes: 18"));
}

#[test]
fn test_run_init_to_stdout_under_quiet() {
    let args = InitArgs { output: None, force: false };
    assert!(run_command(quiet(Command::Init(args))).is_ok());
    let rendered = render_default_spec().unwrap();
    assert!(serde_yaml::from_str::<RunSpec>(rendered.trim_end()).is_ok());
}
