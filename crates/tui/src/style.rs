//! Header and footer band styles.
//!
//! A [`BandStyle`] describes how band text is laid out (width, horizontal
//! alignment, padding) and painted (colors, bold). Layout is shared by the
//! plain-text [`BandStyle::render`] and by the ratatui widget path, which
//! additionally applies [`BandStyle::to_ratatui`].

use std::str::FromStr;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Padding, Paragraph, Widget},
};
use scaffold_config::{BandStyleConfig, PaddingConfig};
use scaffold_protocol::HorizontalAlign;
use crate::viewport::{display_width, truncate_to_width};

/// Error converting a configured band style.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// A color string was neither a known name nor a hex value.
    #[error("invalid {field} color {value:?}")]
    InvalidColor {
        /// Which color field (`"fg"` or `"bg"`).
        field: &'static str,
        /// The offending value.
        value: String,
    },
}

/// Visual description of a header or footer band.
///
/// # Examples
///
/// ```
/// use scaffold_protocol::HorizontalAlign;
/// use scaffold_tui::style::BandStyle;
///
/// let style = BandStyle::default()
///     .width(9)
///     .align(HorizontalAlign::Right);
/// assert_eq!(style.render("abc"), "      abc");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandStyle {
    width: u16,
    align: HorizontalAlign,
    fg: Option<Color>,
    bg: Option<Color>,
    bold: bool,
    padding: PaddingConfig,
}

impl Default for BandStyle {
    fn default() -> Self {
        Self {
            width: scaffold_config::band::DEFAULT_BAND_WIDTH,
            align: HorizontalAlign::Center,
            fg: None,
            bg: None,
            bold: false,
            padding: PaddingConfig::default(),
        }
    }
}

impl BandStyle {
    /// The default header style: bold white on blue, centered.
    #[must_use]
    pub fn header() -> Self {
        Self::default()
            .bold(true)
            .fg(Color::Rgb(0xFF, 0xFF, 0xFF))
            .bg(Color::Rgb(0x00, 0x00, 0xFF))
    }

    /// The default footer style: bold white on dark gray, centered.
    #[must_use]
    pub fn footer() -> Self {
        Self::default()
            .bold(true)
            .fg(Color::Rgb(0xFF, 0xFF, 0xFF))
            .bg(Color::Rgb(0x33, 0x33, 0x33))
    }

    /// Converts a configured style, parsing its color strings.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidColor`] for an unparseable color.
    pub fn from_config(config: &BandStyleConfig) -> Result<Self, StyleError> {
        Ok(Self {
            width: config.width,
            align: config.align,
            fg: parse_color("fg", config.fg.as_deref())?,
            bg: parse_color("bg", config.bg.as_deref())?,
            bold: config.bold,
            padding: config.padding,
        })
    }

    /// Sets the width in columns.
    #[must_use]
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Sets the horizontal alignment.
    #[must_use]
    pub fn align(mut self, align: HorizontalAlign) -> Self {
        self.align = align;
        self
    }

    /// Sets the foreground color.
    #[must_use]
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Sets the background color.
    #[must_use]
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Sets whether the text is bold.
    #[must_use]
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Sets the vertical and horizontal padding.
    #[must_use]
    pub fn padding(mut self, vertical: u16, horizontal: u16) -> Self {
        self.padding = PaddingConfig::new(vertical, horizontal);
        self
    }

    /// The ratatui style used to paint the band.
    #[must_use]
    pub fn to_ratatui(&self) -> Style {
        let mut style = Style::default();
        if let Some(fg) = self.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    /// Lays `text` out as a block of rows, each exactly `width` columns.
    ///
    /// Every text line is cut to the width left inside the horizontal
    /// padding and placed per the alignment; `padding.vertical` blank rows
    /// go above and below.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        self.rows(text).join("\n")
    }

    /// Like [`render`](Self::render), but fitted to exactly `height` rows:
    /// surplus rows are dropped, missing ones are filled with blank rows.
    #[must_use]
    pub fn render_fitted(&self, text: &str, height: u16) -> Vec<String> {
        let height = usize::from(height);
        let mut rows = self.rows(text);
        rows.truncate(height);
        rows.resize(height, " ".repeat(usize::from(self.width)));
        rows
    }

    fn rows(&self, text: &str) -> Vec<String> {
        let width = usize::from(self.width);
        let side = usize::from(self.padding.horizontal).min(width / 2);
        let inner = width - 2 * side;
        let blank = " ".repeat(width);

        let body = text.split('\n').map(|line| {
            let line = truncate_to_width(line, u16::try_from(inner).unwrap_or(u16::MAX));
            let spare = inner.saturating_sub(display_width(&line));
            let left = self.align.leading_padding(spare);
            format!(
                "{}{}{}{}",
                " ".repeat(side + left),
                line,
                " ".repeat(spare - left),
                " ".repeat(side)
            )
        });

        let vertical = usize::from(self.padding.vertical);
        std::iter::repeat_n(blank.clone(), vertical)
            .chain(body)
            .chain(std::iter::repeat_n(blank, vertical))
            .collect()
    }

    /// Paints `text` into `area` with this style's colors and layout.
    pub(crate) fn paint(&self, text: &str, area: Rect, buf: &mut Buffer) {
        let alignment = match self.align {
            HorizontalAlign::Left => Alignment::Left,
            HorizontalAlign::Center => Alignment::Center,
            HorizontalAlign::Right => Alignment::Right,
        };
        let block = Block::new().padding(Padding::symmetric(
            self.padding.horizontal,
            self.padding.vertical,
        ));
        Paragraph::new(text)
            .style(self.to_ratatui())
            .alignment(alignment)
            .block(block)
            .render(area, buf);
    }
}

fn parse_color(field: &'static str, value: Option<&str>) -> Result<Option<Color>, StyleError> {
    value
        .map(|value| {
            Color::from_str(value).map_err(|_| StyleError::InvalidColor {
                field,
                value: value.to_string(),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_centers_with_extra_column_on_the_right() {
        let style = BandStyle::default().width(8);
        assert_eq!(style.render("abc"), "  abc   ");
    }

    #[test]
    fn render_left_aligned() {
        let style = BandStyle::default().width(6).align(HorizontalAlign::Left);
        assert_eq!(style.render("ab"), "ab    ");
    }

    #[test]
    fn render_applies_padding() {
        let style = BandStyle::default()
            .width(7)
            .align(HorizontalAlign::Left)
            .padding(1, 2);
        assert_eq!(style.render("ab"), "       \n  ab   \n       ");
    }

    #[test]
    fn render_fitted_pads_and_truncates() {
        let style = BandStyle::default().width(4).align(HorizontalAlign::Left);
        assert_eq!(style.render_fitted("ab", 3), vec!["ab  ", "    ", "    "]);
        assert_eq!(style.render_fitted("a\nb\nc", 2), vec!["a   ", "b   "]);
        assert!(style.render_fitted("ab", 0).is_empty());
    }

    #[test]
    fn render_truncates_long_text() {
        let style = BandStyle::default().width(4);
        assert_eq!(style.render("abcdef"), "abcd");
    }

    #[test]
    fn render_multiline_text() {
        let style = BandStyle::default().width(5).align(HorizontalAlign::Right);
        assert_eq!(style.render("a\nbb"), "    a\n   bb");
    }

    #[test]
    fn render_with_padding_wider_than_width() {
        let style = BandStyle::default().width(3).padding(0, 5);
        assert_eq!(style.render("abc"), " a ");
    }

    #[test]
    fn render_emoji_with_variation_selector_at_narrow_width() {
        let heart = "\u{2764}\u{FE0F}";
        let style = BandStyle::default().width(1);
        assert_eq!(style.render(heart), heart);

        let style = BandStyle::default().width(4).align(HorizontalAlign::Left);
        assert_eq!(style.render(&format!("ok {heart}")), format!("ok {heart}"));
        assert_eq!(style.render(heart), format!("{heart}   "));
    }

    #[test]
    fn render_centers_wide_characters() {
        let style = BandStyle::default().width(8);
        assert_eq!(style.render("日本"), "  日本  ");

        let style = BandStyle::default().width(5);
        assert_eq!(style.render("日本語"), "日本 ");
    }

    #[test]
    fn to_ratatui_carries_colors_and_bold() {
        let style = BandStyle::header().to_ratatui();
        assert_eq!(style.fg, Some(Color::Rgb(255, 255, 255)));
        assert_eq!(style.bg, Some(Color::Rgb(0, 0, 255)));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn from_config_parses_colors() {
        let config = BandStyleConfig {
            fg: Some("yellow".to_string()),
            bg: Some("#8A2BE2".to_string()),
            ..BandStyleConfig::default()
        };
        let style = BandStyle::from_config(&config).unwrap();
        assert_eq!(style.fg, Some(Color::Yellow));
        assert_eq!(style.bg, Some(Color::Rgb(0x8A, 0x2B, 0xE2)));
        assert!(style.bold);
    }

    #[test]
    fn from_config_rejects_unknown_color() {
        let config = BandStyleConfig {
            bg: Some("not-a-color".to_string()),
            ..BandStyleConfig::default()
        };
        let err = BandStyle::from_config(&config).unwrap_err();
        assert_eq!(err.to_string(), r#"invalid bg color "not-a-color""#);
    }

    #[test]
    fn paint_fills_band_background() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        BandStyle::footer().paint("hi", area, &mut buf);

        assert_eq!(crate::test_utils::buffer_to_string(&buf), "    hi\n");
        let edge = buf.cell((9, 0)).unwrap();
        assert_eq!(edge.bg, Color::Rgb(0x33, 0x33, 0x33));
    }
}
