//! Schedule command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{apply_overrides, build_schedule, load_config, OutputFormat, RunSpec, ScheduleArgs};
use crate::error::Result;
use crate::optim::ScheduleConfig;
use serde::Serialize;

/// Learning rate for one epoch
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EpochLr {
    pub epoch: usize,
    pub lr: f64,
}

/// Full schedule as printed by `warmcos schedule`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleReport {
    #[serde(flatten)]
    pub config: ScheduleConfig,
    pub schedule: Vec<EpochLr>,
}

impl ScheduleReport {
    pub fn new(config: ScheduleConfig) -> Self {
        let schedule = config.curve().map(|(epoch, lr)| EpochLr { epoch, lr }).collect();
        Self { config, schedule }
    }
}

/// Run spec from `--config` (or defaults) with command-line overrides applied
pub fn resolve_spec(args: &ScheduleArgs) -> Result<RunSpec> {
    let mut spec = match &args.config {
        Some(path) => load_config(path)?,
        None => RunSpec::default(),
    };
    apply_overrides(&mut spec, args);
    Ok(spec)
}

/// Render a schedule in the requested format
pub fn render_schedule(report: &ScheduleReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        OutputFormat::Text => {
            let mut lines = vec![format!("{:>6}  {:>12}", "epoch", "lr")];
            lines.extend(
                report.schedule.iter().map(|e| format!("{:>6}  {:>12.8}", e.epoch, e.lr)),
            );
            Ok(lines.join("\n"))
        }
    }
}

pub fn run_schedule(args: ScheduleArgs, level: LogLevel) -> std::result::Result<(), String> {
    let spec = resolve_spec(&args).map_err(|e| e.to_string())?;
    let config = build_schedule(&spec).map_err(|e| e.to_string())?;

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Schedule: base_lr={} total_steps={} warmup_steps={}",
            config.base_lr(),
            config.total_steps(),
            config.warmup_steps()
        ),
    );

    let report = ScheduleReport::new(config);
    let rendered = render_schedule(&report, args.format).map_err(|e| e.to_string())?;
    log(level, LogLevel::Normal, &rendered);

    Ok(())
}
