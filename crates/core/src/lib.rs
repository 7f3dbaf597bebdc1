//! Quiz session model for the glacier reading practice.
//!
//! Pure and synchronous: the catalog of questions, the per-session answer
//! overlay, scoring, the reference navigator, the countdown and the matching
//! cursor. Presentation lives elsewhere.

pub mod catalog;
pub mod error;
pub mod model;
pub mod navigator;
pub mod scoring;
pub mod session;
pub mod time;
pub mod timer;

pub use catalog::{Catalog, CatalogError};
pub use error::Error;
pub use time::Clock;
