// Library for the demo binaries and tests

pub mod accumulator;
pub mod config;
pub mod export;
pub mod models;
pub mod report;
pub mod telemetry;
pub mod version;
