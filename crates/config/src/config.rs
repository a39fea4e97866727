//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the scaffold layout frame.

use scaffold_protocol::VerticalAlign;
use serde::{Deserialize, Serialize};

use crate::band::BandConfig;
use crate::error::Result;
use crate::persistence::read_config_file;

/// The main configuration struct for the scaffold layout frame.
///
/// # Examples
///
/// ```
/// use scaffold_config::{BandConfig, Config};
/// use scaffold_protocol::VerticalAlign;
///
/// // Create a default config
/// let config = Config::default();
/// assert_eq!(config.header.text, "Header");
/// assert_eq!(config.vertical_align, VerticalAlign::Top);
///
/// // Create a custom config
/// let config = Config {
///     header: BandConfig {
///         text: "My app".to_string(),
///         height: 3,
///         ..BandConfig::default_header()
///     },
///     vertical_align: VerticalAlign::Center,
///     ..Config::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The band above the body.
    #[serde(default = "BandConfig::default_header")]
    pub header: BandConfig,

    /// The band below the body.
    #[serde(default = "BandConfig::default_footer")]
    pub footer: BandConfig,

    /// Placement of body content shorter than the viewport.
    #[serde(default)]
    pub vertical_align: VerticalAlign,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header: BandConfig::default_header(),
            footer: BandConfig::default_footer(),
            vertical_align: VerticalAlign::default(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use scaffold_config::Config;
    ///
    /// # fn example() -> scaffold_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Both bands need at least one row and a style width of at least one
    /// column. Whether the bands fit the terminal is not checked here: the
    /// terminal size is only known at runtime, where the body height
    /// saturates at zero.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<()> {
        self.header.validate("header")?;
        self.footer.validate("footer")?;
        Ok(())
    }

    /// Rows reserved by the header and footer together.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_config::Config;
    ///
    /// assert_eq!(Config::default().chrome_height(), 2);
    /// ```
    #[must_use]
    pub fn chrome_height(&self) -> u16 {
        self.header.height.saturating_add(self.footer.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.header.text, "Header");
        assert_eq!(config.footer.text, "Footer");
        assert_eq!(config.vertical_align, VerticalAlign::Top);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_config() {
        let config = Config::new();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn validate_invalid_header_height() {
        let mut config = Config::default();
        config.header.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn chrome_height_sums_bands() {
        let mut config = Config::default();
        config.header.height = 3;
        assert_eq!(config.chrome_height(), 4);
    }

    #[test]
    fn serialize_deserialize_roundtrip() {
        let mut config = Config::default();
        config.header.text = "Title".to_string();
        config.footer.style.fg = None;
        config.vertical_align = VerticalAlign::Bottom;

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_partial() {
        let json = r#"{"vertical_align": "center"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.vertical_align, VerticalAlign::Center);
        assert_eq!(config.header, BandConfig::default_header());
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(
            &path,
            r#"
            {
                header: { text: "Demo", height: 3, style: { padding: { vertical: 1, horizontal: 1 } } },
                vertical_align: "bottom",
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.header.text, "Demo");
        assert_eq!(config.header.height, 3);
        assert_eq!(config.header.style.padding.vertical, 1);
        assert_eq!(config.footer, BandConfig::default_footer());
        assert_eq!(config.vertical_align, VerticalAlign::Bottom);
    }

    #[test]
    fn load_from_rejects_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(&path, "{ footer: { height: 0 } }").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
