//! Job scheduling core: optimal-window search and savings calculation.

pub mod optimizer;
pub mod savings;
pub mod types;

pub use optimizer::{find_optimal_window, next_green_hour};
pub use savings::compute_savings;
pub use types::{JobRequest, OptimizationResult, SavingsReport, ScheduleError};
