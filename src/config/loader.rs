//! Toll table loading functionality.
//!
//! This module provides the [`TollTableLoader`] type for loading the toll
//! table from a YAML or JSON file, or from the copy bundled with the crate.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::StationCategory;

use super::types::{TollTable, TollTableFile};

/// The toll table shipped with the crate.
const BUNDLED_TABLE: &str = include_str!("../../config/tolls.yaml");

/// Label used in errors and logs for the bundled table.
pub const BUNDLED_SOURCE: &str = "<bundled tolls.yaml>";

/// Environment variable naming an alternative toll table file.
pub const TOLLS_PATH_ENV: &str = "OPASS_TOLLS";

/// The on-disk formats a toll table can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// YAML, the default.
    Yaml,
    /// JSON, selected by a `.json` extension.
    Json,
}

impl TableFormat {
    /// Picks the format from a file extension, defaulting to YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => TableFormat::Json,
            _ => TableFormat::Yaml,
        }
    }
}

/// Loads and provides access to the toll table.
///
/// The table file has two top-level mappings, `Frontal` and `Ramp`, each
/// mapping a station name to four prices:
///
/// ```text
/// Frontal:
///   Elefsina: [1.40, 2.80, 7.00, 9.90]
/// Ramp:
///   Megara: [0.50, 1.00, 2.50, 3.50]
/// ```
///
/// # Example
///
/// ```
/// use opass::config::TollTableLoader;
///
/// let loader = TollTableLoader::bundled().unwrap();
/// let station = loader.table().station("Elefsina").unwrap();
/// println!("{} is a {} station", station.name, station.category);
/// ```
#[derive(Debug, Clone)]
pub struct TollTableLoader {
    table: TollTable,
    source: String,
}

impl TollTableLoader {
    /// Loads the toll table from the specified file.
    ///
    /// Files ending in `.json` are parsed as JSON, anything else as YAML.
    ///
    /// # Returns
    ///
    /// Returns a `TollTableLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is malformed or a station entry is invalid (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use opass::config::TollTableLoader;
    ///
    /// let loader = TollTableLoader::load("./config/tolls.yaml")?;
    /// # Ok::<(), opass::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, TableFormat::from_path(path), &path_str)
    }

    /// Parses the toll table bundled into the crate.
    pub fn bundled() -> EngineResult<Self> {
        Self::parse(BUNDLED_TABLE, TableFormat::Yaml, BUNDLED_SOURCE)
    }

    /// Loads the table named by `OPASS_TOLLS`, or the bundled one if unset.
    pub fn from_env_or_bundled() -> EngineResult<Self> {
        match std::env::var_os(TOLLS_PATH_ENV) {
            Some(path) => Self::load(path),
            None => Self::bundled(),
        }
    }

    /// Parses a toll table from an in-memory string.
    ///
    /// `source` is used to label errors and log lines.
    pub fn parse(content: &str, format: TableFormat, source: &str) -> EngineResult<Self> {
        let file = match format {
            TableFormat::Yaml => serde_yaml::from_str::<TollTableFile>(content)
                .map_err(|e| e.to_string()),
            TableFormat::Json => serde_json::from_str::<TollTableFile>(content)
                .map_err(|e| e.to_string()),
        }
        .map_err(|message| EngineError::ConfigParseError {
            path: source.to_string(),
            message,
        })?;

        let table = TollTable::from_file(file, source)?;
        debug!(source, ?format, "Parsed toll table");
        info!(
            source,
            frontal = table.by_category(StationCategory::Frontal).count(),
            ramp = table.by_category(StationCategory::Ramp).count(),
            "Toll table loaded"
        );

        Ok(Self {
            table,
            source: source.to_string(),
        })
    }

    /// Returns the loaded toll table.
    pub fn table(&self) -> &TollTable {
        &self.table
    }

    /// Consumes the loader, returning the toll table.
    pub fn into_table(self) -> TollTable {
        self.table
    }

    /// Returns the path or label the table was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }
}
