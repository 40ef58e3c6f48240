//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, validate_config, RunSpec, ValidateArgs};

/// Format schedule settings as a string
pub fn format_schedule_info(spec: &RunSpec) -> String {
    [
        format!("  Learning rate: {}", spec.learning_rate),
        format!("  Epochs: {}", spec.epochs),
        format!("  Warmup epochs: {}", spec.warmup_steps),
        format!("  Batch size: {}", spec.batch_size),
    ]
    .join("\n")
}

/// Format optimizer configuration as a string
pub fn format_optimizer_info(spec: &RunSpec) -> String {
    let mut lines = vec![
        format!("  Optimizer: {}", spec.optimizer),
        format!("  AMSGrad: {}", spec.amsgrad),
    ];
    if let Some(clip) = spec.global_clipnorm {
        lines.push(format!("  Global clip norm: {clip}"));
    }
    let mut params: Vec<_> = spec.optimizer_params.iter().collect();
    params.sort_by(|a, b| a.0.cmp(b.0));
    for (name, value) in params {
        lines.push(format!("  {name}: {value}"));
    }
    if spec.label_smoothing > 0.0 {
        lines.push(format!("  Label smoothing: {}", spec.label_smoothing));
    }
    lines.join("\n")
}

/// Format early stopping configuration as a string
pub fn format_early_stopping_info(spec: &RunSpec) -> String {
    let es = &spec.early_stopping;
    if !es.enabled {
        return "  Early stopping: disabled".to_string();
    }
    format!(
        "  Early stopping: monitor={} mode={} min_delta={} patience={}",
        es.monitor, es.mode, es.min_delta, es.patience
    )
}

/// Format model architecture as a string
pub fn format_model_info(spec: &RunSpec) -> String {
    let m = &spec.model;
    format!(
        "  Model: {} layers, embed {}, fc {}, {} heads, dropout {}/{}\n  Classes: {}",
        m.num_layers,
        m.embed_layer_size,
        m.fc_layer_size,
        m.num_heads,
        m.dropout,
        m.attention_dropout,
        spec.num_classes()
    )
}

/// Print detailed configuration summary
fn print_detailed_summary(spec: &RunSpec) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_schedule_info(spec));
    println!();
    println!("{}", format_optimizer_info(spec));
    println!();
    println!("{}", format_early_stopping_info(spec));
    println!();
    println!("{}", format_model_info(spec));
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(level, LogLevel::Normal, &format!("Validating config: {}", args.config.display()));

    let spec = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    validate_config(&spec).map_err(|e| format!("Validation failed: {e}"))?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed && level != LogLevel::Quiet {
        print_detailed_summary(&spec);
    }
    log(level, LogLevel::Verbose, &format!("  Class labels: {}", spec.class_labels.join(", ")));

    Ok(())
}
