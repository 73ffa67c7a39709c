//! Lambda integration for the up-before-nine button.
//!
//! This crate owns the runtime details: the trigger handler, the Beeminder
//! HTTP adapter, configuration and log setup. Time arithmetic and the wire
//! contract live in `button_core`.

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod telemetry;
