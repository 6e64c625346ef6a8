//! Journey Accounting Engine
//!
//! This crate computes paid/unpaid time categories for logged work shifts
//! ("journeys"): regular time, overtime at the 50% and 100% rates, and
//! optionally distance traveled, under a configurable accounting calendar
//! with a rolling, non-calendar-aligned pay period.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
