//! Demo driver for the skirmish engine.
//!
//! The binary is the composition root: it reads [`config::DemoConfig`] from
//! the environment, installs logging, opens a snapshot repository and hands a
//! [`skirmish_runtime::Session`] to [`demo::run`].
pub mod config;
pub mod demo;
pub mod logging;
pub mod render;

pub use config::DemoConfig;
