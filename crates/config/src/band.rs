//! Header and footer band configuration.
//!
//! A band is one of the two fixed rows of the frame. Each band carries its
//! text, the number of rows it reserves, and a style description. Colors are
//! kept as strings here (`"#RRGGBB"`, `"blue"`, `"dark_gray"`, ...) and are
//! parsed by the rendering crate, so this crate stays renderer-agnostic.

use scaffold_protocol::HorizontalAlign;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default width of a band style, in columns.
///
/// The width is overridden by the terminal width once the first resize
/// arrives, so this only matters for rendering before that.
pub const DEFAULT_BAND_WIDTH: u16 = 100;

/// Default height of a band, in rows.
pub const DEFAULT_BAND_HEIGHT: u16 = 1;

/// Padding around band text, in rows and columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddingConfig {
    /// Blank rows above and below the text.
    #[serde(default)]
    pub vertical: u16,
    /// Blank columns left and right of the text.
    #[serde(default)]
    pub horizontal: u16,
}

impl PaddingConfig {
    /// Creates a padding with the given vertical and horizontal amounts.
    #[must_use]
    pub fn new(vertical: u16, horizontal: u16) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }
}

/// Visual description of a band.
///
/// # Examples
///
/// ```
/// use scaffold_config::BandStyleConfig;
///
/// let style = BandStyleConfig::default();
/// assert_eq!(style.width, 100);
/// assert!(style.bold);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandStyleConfig {
    /// Width in columns; replaced by the terminal width on resize.
    #[serde(default = "default_width")]
    pub width: u16,

    /// Horizontal placement of the text.
    #[serde(default)]
    pub align: HorizontalAlign,

    /// Foreground color name or `#RRGGBB` value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,

    /// Background color name or `#RRGGBB` value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,

    /// Whether the text is bold.
    #[serde(default = "default_bold")]
    pub bold: bool,

    /// Padding around the text.
    #[serde(default)]
    pub padding: PaddingConfig,
}

fn default_width() -> u16 {
    DEFAULT_BAND_WIDTH
}

fn default_bold() -> bool {
    true
}

fn default_height() -> u16 {
    DEFAULT_BAND_HEIGHT
}

impl Default for BandStyleConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BAND_WIDTH,
            align: HorizontalAlign::Center,
            fg: Some("#FFFFFF".to_string()),
            bg: None,
            bold: true,
            padding: PaddingConfig::default(),
        }
    }
}

/// Text, height and style of a single band.
///
/// Fields left out of a configuration file fall back to the generic band
/// defaults, not to the header or footer specific ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandConfig {
    /// Text shown in the band.
    #[serde(default)]
    pub text: String,

    /// Rows reserved for the band when sizing the body.
    #[serde(default = "default_height")]
    pub height: u16,

    /// Visual style of the band.
    #[serde(default)]
    pub style: BandStyleConfig,
}

impl BandConfig {
    /// Returns the default header: white on blue.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_config::BandConfig;
    ///
    /// let header = BandConfig::default_header();
    /// assert_eq!(header.text, "Header");
    /// assert_eq!(header.height, 1);
    /// ```
    #[must_use]
    pub fn default_header() -> Self {
        Self {
            text: "Header".to_string(),
            height: DEFAULT_BAND_HEIGHT,
            style: BandStyleConfig {
                bg: Some("#0000FF".to_string()),
                ..BandStyleConfig::default()
            },
        }
    }

    /// Returns the default footer: white on dark gray.
    #[must_use]
    pub fn default_footer() -> Self {
        Self {
            text: "Footer".to_string(),
            height: DEFAULT_BAND_HEIGHT,
            style: BandStyleConfig {
                bg: Some("#333333".to_string()),
                ..BandStyleConfig::default()
            },
        }
    }

    /// Validates the band; `band` names it in the error.
    ///
    /// # Errors
    ///
    /// Returns an error if the height or the style width is zero.
    pub fn validate(&self, band: &'static str) -> Result<()> {
        if self.height == 0 {
            return Err(ConfigError::InvalidHeight { band });
        }
        if self.style.width == 0 {
            return Err(ConfigError::InvalidWidth { band });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_footer_defaults_differ_in_background() {
        let header = BandConfig::default_header();
        let footer = BandConfig::default_footer();
        assert_eq!(header.style.bg.as_deref(), Some("#0000FF"));
        assert_eq!(footer.style.bg.as_deref(), Some("#333333"));
        assert_eq!(header.style.fg, footer.style.fg);
    }

    #[test]
    fn validate_rejects_zero_height() {
        let band = BandConfig {
            height: 0,
            ..BandConfig::default_header()
        };
        let err = band.validate("header").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHeight { band: "header" }));
    }

    #[test]
    fn validate_rejects_zero_width() {
        let mut band = BandConfig::default_footer();
        band.style.width = 0;
        let err = band.validate("footer").unwrap_err();
        assert_eq!(err.to_string(), "footer style width must be at least 1 column");
    }

    #[test]
    fn partial_band_uses_generic_defaults() {
        let band: BandConfig = serde_json5::from_str(r#"{ text: "Hi" }"#).unwrap();
        assert_eq!(band.text, "Hi");
        assert_eq!(band.height, DEFAULT_BAND_HEIGHT);
        assert_eq!(band.style, BandStyleConfig::default());
    }

    #[test]
    fn style_parses_alignment_and_padding() {
        let style: BandStyleConfig = serde_json5::from_str(
            r#"{ align: "left", bold: false, padding: { vertical: 1, horizontal: 2 } }"#,
        )
        .unwrap();
        assert_eq!(style.align, HorizontalAlign::Left);
        assert!(!style.bold);
        assert_eq!(style.padding, PaddingConfig::new(1, 2));
        assert_eq!(style.width, DEFAULT_BAND_WIDTH);
    }

    #[test]
    fn colors_omitted_when_unset() {
        let style = BandStyleConfig {
            fg: None,
            ..BandStyleConfig::default()
        };
        let json = serde_json::to_string(&style).unwrap();
        assert!(!json.contains("fg"));
        assert!(!json.contains("bg"));
    }
}
