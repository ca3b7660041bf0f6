//! # Design Patterns
//!
//! Three classic object-oriented patterns, each in its own toy domain:
//!
//! - [`decorator`] - StarBuzz Coffee: condiments wrap beverages, adding cost and description
//! - [`observer`] - Weather-O-Rama: a weather station notifies displays (push and pull variants)
//! - [`strategy`] - SimUDuck: ducks carry a swappable fly behaviour
//!
//! The demos do not depend on each other. [`config`] and [`demo`] drive them from a
//! TOML scenario for the `patterns` binary:
//!
//! ```bash
//! cargo run --bin patterns
//! cargo run --bin patterns -- observer --config scenario.toml --verbose
//! ```

pub mod config;
pub mod decorator;
pub mod demo;
pub mod error;
pub mod logger;
pub mod observer;
pub mod strategy;

pub use config::DemoConfig;
pub use demo::Demo;
pub use error::{PatternError, Result};
