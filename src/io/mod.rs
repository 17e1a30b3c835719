//! File output for forecast data.

pub mod export;
