//! Core data models for the Journey Accounting Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod journey;
mod period;
mod settings;

pub use breakdown::Breakdown;
pub use journey::Journey;
pub use period::AccountingPeriod;
pub use settings::Settings;
