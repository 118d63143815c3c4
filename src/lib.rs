//! Supply Chain Dashboard Library
//!
//! Mock supply-chain analytics service and the headless dashboard views that
//! consume it.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod errors;
pub mod fixtures;
pub mod models;
pub mod services;
pub mod views;

pub use errors::ViewError;
pub use services::{AnalyticsApi, MockAnalyticsService};
