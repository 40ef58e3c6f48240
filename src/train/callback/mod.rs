//! Callback system for training events
//!
//! Provides extensible hooks for training loop events:
//! - `on_train_begin` / `on_train_end`
//! - `schedule_lr` (learning rate for the epoch about to start)
//! - `on_epoch_begin` / `on_epoch_end`
//!
//! # Example
//!
//! ```rust
//! use warmcos::train::callback::{TrainerCallback, CallbackContext, CallbackAction};
//!
//! struct PrintCallback;
//!
//! impl TrainerCallback for PrintCallback {
//!     fn on_epoch_end(&mut self, ctx: &CallbackContext) -> CallbackAction {
//!         println!("Epoch {} finished at lr {:.6}", ctx.epoch, ctx.lr);
//!         CallbackAction::Continue
//!     }
//! }
//! ```

mod early_stopping;
mod manager;
mod monitor;
mod scheduler;
mod traits;

// Re-export all public types
pub use early_stopping::{EarlyStopping, MonitorMode};
pub use manager::CallbackManager;
pub use monitor::{LrHistory, LrMonitor};
pub use scheduler::LRSchedulerCallback;
pub use traits::{CallbackAction, CallbackContext, TrainerCallback};
