//! Toll table loading and management.
//!
//! This module loads the toll table (stations grouped into frontal and ramp
//! categories, each with one price per vehicle type) from YAML or JSON.
//!
//! # Example
//!
//! ```
//! use opass::config::TollTableLoader;
//!
//! let loader = TollTableLoader::bundled().unwrap();
//! println!("Loaded {} stations", loader.table().len());
//! ```

mod loader;
mod types;

pub use loader::{BUNDLED_SOURCE, TOLLS_PATH_ENV, TableFormat, TollTableLoader};
pub use types::{TollTable, TollTableFile};
