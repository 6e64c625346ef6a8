//! Settings profile loading for the Journey Accounting Engine.
//!
//! This module provides functionality to load a settings profile from a
//! YAML file and validate it before any journey is computed against it.
//!
//! # Example
//!
//! ```no_run
//! use jornada_engine::config::SettingsLoader;
//!
//! let settings = SettingsLoader::load("./config/settings.yaml").unwrap();
//! println!("Accounting month starts on day {}", settings.month_start_day);
//! ```

mod loader;

pub use loader::SettingsLoader;
