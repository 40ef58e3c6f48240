//! Optimizers and learning rate schedules

mod adam;
mod clip;
mod optimizer;
mod parameter;
mod scheduler;

pub use adam::Adam;
pub use clip::clip_grad_norm;
pub use optimizer::Optimizer;
pub use parameter::Parameter;
pub use scheduler::{
    cosine_schedule, try_cosine_schedule, ConfigurationError, LRScheduler, ScheduleConfig,
    WarmupCosineDecayLR,
};
