//! Rapture real-time engine.
//!
//! This crate provides the application skeleton: the [`Application`] trait engine users
//! implement, the [`Lifecycle`] that drives it frame by frame, and logger setup. The numeric
//! foundation lives in [`rapture_math`], re-exported as [`math`].
//!
//! # Environment Variables
//!
//! The `rapture` demo binary can be configured by setting environment variables (see
//! [`Config::from_env`]):
//!
//! * `RAPTURE_SEED`: seed of the random number generator (an unsigned 64-bit integer, decimal or
//!   `0x`-prefixed hexadecimal). Defaults to a fixed value, so runs are reproducible.
//! * `RAPTURE_FRAMES`: number of frames to render before shutting down. Defaults to 1. The
//!   frame in which the demo asks to exit is not rendered.
//! * `RUST_LOG`: overrides the log filter configured by [`init_logger!`].

use log::LevelFilter;

mod app;
mod config;

pub use app::*;
pub use config::*;

pub use rapture_math as math;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and Rapture will log at *trace*
/// level. Otherwise, they will log at *debug* level. `RUST_LOG` takes precedence over both.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
