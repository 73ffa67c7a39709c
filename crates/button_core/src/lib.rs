//! Domain primitives for the up-before-nine button.
//!
//! This crate owns the time arithmetic, the Beeminder wire contract and the
//! handler outcome model. It intentionally excludes the Lambda runtime and the
//! HTTP transport; those live in `button_lambda`.

pub mod clock;
pub mod contract;
pub mod endpoint;
