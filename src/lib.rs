//! OOP principles and classic design patterns.
//!
//! Every demo lives in its own module, defines its own contract trait and
//! variants, and exposes a `run` driver that writes the demo's output lines.
//! Demos never depend on each other; [`catalog`] ties them together for the
//! `gallery` binary.

pub mod catalog;
pub mod config;
pub mod error;
pub mod oop;
pub mod patterns;

pub use catalog::{catalog, find, Category, Demo};
pub use config::GalleryConfig;
pub use error::{PatternError, Result};
