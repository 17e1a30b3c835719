//! Carbon-aware compute-job scheduling demo.
//!
//! Generates a mock grid carbon-intensity/price forecast and finds the
//! contiguous window that minimizes average carbon intensity for a job of
//! a requested duration, then derives cost/carbon savings against
//! starting the job immediately.

pub mod config;
pub mod forecast;
pub mod io;
pub mod sched;

#[cfg(feature = "api")]
pub mod api;
