//! Init command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{InitArgs, RunSpec};

const HEADER: &str = "# warmcos run specification\n\
# learning_rate is the peak rate reached after warmup_steps epochs;\n\
# the rate then follows a cosine decay to zero at epochs.\n";

/// Default run specification as YAML, with a short header
pub fn render_default_spec() -> Result<String, String> {
    let body = serde_yaml::to_string(&RunSpec::default()).map_err(|e| e.to_string())?;
    Ok(format!("{HEADER}{body}"))
}

pub fn run_init(args: InitArgs, level: LogLevel) -> Result<(), String> {
    let yaml = render_default_spec()?;

    match &args.output {
        Some(path) => {
            if path.exists() && !args.force {
                return Err(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ));
            }
            std::fs::write(path, yaml)
                .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
            log(level, LogLevel::Normal, &format!("Wrote {}", path.display()));
        }
        None => println!("{yaml}"),
    }

    Ok(())
}
