//! Grid configuration loaded from TOML.

use config::{Config, File, FileFormat};
use serde::Deserialize;
use tracing::{error, info};

use crate::error::GridResult;
use crate::grid::Array2D;

/// Path of the bundled grid configuration, relative to the crate root.
pub const DEFAULT_CONFIG_PATH: &str = "config/grid.toml";

/// Dimensions and wrap-around of a grid.
///
/// ```toml
/// rows = 10
/// cols = 10
/// wrap = true        # both axes
/// # wrap_rows = true # or one axis at a time
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GridConfig {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// Wrap both axes
    #[serde(default)]
    pub wrap: bool,
    /// Wrap row indices
    #[serde(default)]
    pub wrap_rows: bool,
    /// Wrap column indices
    #[serde(default)]
    pub wrap_cols: bool,
}

impl GridConfig {
    /// Loads a configuration from a TOML file.
    pub fn load(path: &str) -> GridResult<Self> {
        info!("Attempting to load grid configuration from {}", path);
        Self::build(Config::builder().add_source(File::new(path, FileFormat::Toml).required(true)))
    }

    /// Loads the configuration bundled with this crate, [`DEFAULT_CONFIG_PATH`]
    /// under the crate's manifest directory, whatever the working directory is.
    pub fn load_default() -> GridResult<Self> {
        Self::load(&format!("{}/{}", env!("CARGO_MANIFEST_DIR"), DEFAULT_CONFIG_PATH))
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> GridResult<Self> {
        Self::build(Config::builder().add_source(File::from_str(text, FileFormat::Toml)))
    }

    fn build(builder: config::ConfigBuilder<config::builder::DefaultState>) -> GridResult<Self> {
        let settings = builder.build().and_then(|c| c.try_deserialize::<GridConfig>());

        match settings {
            Ok(cfg) => {
                info!("Successfully loaded grid configuration: {:?}", cfg);
                Ok(cfg)
            }
            Err(e) => {
                error!("Failed to load grid configuration: {}", e);
                Err(e.into())
            }
        }
    }

    /// Whether row indices wrap.
    pub fn wraps_rows(&self) -> bool {
        self.wrap || self.wrap_rows
    }

    /// Whether column indices wrap.
    pub fn wraps_cols(&self) -> bool {
        self.wrap || self.wrap_cols
    }
}

impl<T> Array2D<T> {
    /// Creates a grid with the dimensions and wrap-around of `config`.
    pub fn from_config(config: &GridConfig, default_value: T) -> GridResult<Self> {
        Self::with_axis_wrap(
            config.rows,
            config.cols,
            default_value,
            config.wraps_rows(),
            config.wraps_cols(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;

    #[test]
    fn test_parse_torus() {
        let cfg = GridConfig::from_toml_str("rows = 3\ncols = 4\nwrap = true\n").unwrap();
        assert_eq!(cfg.rows, 3);
        assert_eq!(cfg.cols, 4);
        assert!(cfg.wraps_rows());
        assert!(cfg.wraps_cols());

        let grid = Array2D::from_config(&cfg, '.').unwrap();
        assert!(grid.is_torus());
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
    }

    #[test]
    fn test_parse_single_axis() {
        let cfg = GridConfig::from_toml_str("rows = 2\ncols = 2\nwrap_cols = true\n").unwrap();
        assert!(!cfg.wraps_rows());
        assert!(cfg.wraps_cols());
        let grid = Array2D::from_config(&cfg, 0).unwrap();
        assert!(grid.wrap_cols());
        assert!(!grid.wrap_rows());
    }

    #[test]
    fn test_wrap_defaults_to_off() {
        let cfg = GridConfig::from_toml_str("rows = 5\ncols = 6\n").unwrap();
        assert!(!cfg.wraps_rows());
        assert!(!cfg.wraps_cols());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            GridConfig::from_toml_str("cols = 6\n"),
            Err(GridError::Config(_))
        ));
        assert!(matches!(
            GridConfig::from_toml_str("rows = \"many\"\ncols = 6\n"),
            Err(GridError::Config(_))
        ));
        assert!(matches!(
            GridConfig::load("config/does-not-exist.toml"),
            Err(GridError::Config(_))
        ));

        let cfg = GridConfig::from_toml_str("rows = 0\ncols = 6\n").unwrap();
        assert!(matches!(
            Array2D::from_config(&cfg, ()),
            Err(GridError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_load_bundled_config() {
        let cfg = GridConfig::load_default().unwrap();
        let grid = Array2D::from_config(&cfg, 0u32).unwrap();
        assert_eq!(grid.rows(), 10);
        assert_eq!(grid.cols(), 10);
        assert!(grid.is_torus());
    }

    #[test]
    fn test_load_default_ignores_working_directory() {
        let before = std::env::current_dir().unwrap();
        let elsewhere = std::env::temp_dir();
        std::env::set_current_dir(&elsewhere).unwrap();
        let loaded = GridConfig::load_default();
        std::env::set_current_dir(before).unwrap();

        let cfg = loaded.unwrap();
        assert_eq!((cfg.rows, cfg.cols), (10, 10));
    }
}
