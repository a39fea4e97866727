//! Scrollable text viewport.
//!
//! The [`Viewport`] owns a buffer of pre-wrapped lines, a size, and a
//! vertical scroll offset. It knows nothing about alignment or the bands
//! around it; the [`Layout`](crate::layout::Layout) configures and commands it.
//!
//! The scroll offset is always kept within `0..=max_y_offset()`: scrolling
//! past either end clamps to it, and content or size changes re-clamp.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use unicode_width::UnicodeWidthChar;

/// A scrollable window over a list of text lines.
///
/// # Examples
///
/// ```
/// use scaffold_tui::viewport::Viewport;
///
/// let mut viewport = Viewport::new(20, 2);
/// viewport.set_content("one\ntwo\nthree");
///
/// assert!(viewport.at_top());
/// viewport.scroll_down(5);
/// assert_eq!(viewport.y_offset(), 1);
/// assert!(viewport.at_bottom());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    y_offset: usize,
    lines: Vec<String>,
}

impl Viewport {
    /// Creates an empty viewport of the given size.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            y_offset: 0,
            lines: Vec::new(),
        }
    }

    /// Replaces the content, splitting it on `\n`.
    ///
    /// The scroll offset is kept where possible and clamped otherwise.
    pub fn set_content(&mut self, content: &str) {
        self.lines = content.split('\n').map(str::to_owned).collect();
        self.clamp_offset();
    }

    /// Resizes the viewport in place, re-clamping the scroll offset.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.clamp_offset();
    }

    /// Width in columns.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in rows.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Index of the first visible line.
    #[must_use]
    pub fn y_offset(&self) -> usize {
        self.y_offset
    }

    /// The content as last set, lines rejoined with `\n`.
    #[must_use]
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    /// Number of lines in the content.
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    /// Largest valid scroll offset for the current content and height.
    #[must_use]
    pub fn max_y_offset(&self) -> usize {
        self.lines.len().saturating_sub(usize::from(self.height))
    }

    /// Sets the scroll offset, clamped to the valid range.
    pub fn set_y_offset(&mut self, offset: usize) {
        self.y_offset = offset.min(self.max_y_offset());
    }

    /// Scrolls down by `n` lines, stopping at the bottom.
    pub fn scroll_down(&mut self, n: usize) {
        self.set_y_offset(self.y_offset.saturating_add(n));
    }

    /// Scrolls up by `n` lines, stopping at the top.
    pub fn scroll_up(&mut self, n: usize) {
        self.set_y_offset(self.y_offset.saturating_sub(n));
    }

    /// Jumps to the first line.
    pub fn goto_top(&mut self) {
        self.y_offset = 0;
    }

    /// Jumps so the last line is at the bottom of the viewport.
    pub fn goto_bottom(&mut self) {
        self.y_offset = self.max_y_offset();
    }

    /// Whether the first line is visible.
    #[must_use]
    pub fn at_top(&self) -> bool {
        self.y_offset == 0
    }

    /// Whether the last line is visible.
    #[must_use]
    pub fn at_bottom(&self) -> bool {
        self.y_offset >= self.max_y_offset()
    }

    /// Scroll position as a fraction in `0.0..=1.0`.
    ///
    /// Content that fits entirely reports `1.0`.
    #[must_use]
    pub fn scroll_percent(&self) -> f64 {
        let max = self.max_y_offset();
        if max == 0 {
            return 1.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let percent = self.y_offset as f64 / max as f64;
        percent.clamp(0.0, 1.0)
    }

    /// The lines currently in view, at most `height` of them.
    #[must_use]
    pub fn visible_lines(&self) -> &[String] {
        let start = self.y_offset.min(self.lines.len());
        let end = start
            .saturating_add(usize::from(self.height))
            .min(self.lines.len());
        &self.lines[start..end]
    }

    /// Renders the visible rows as text.
    ///
    /// The result always has exactly `height` rows; each is cut to `width`
    /// display columns, and rows past the end of the content are empty.
    #[must_use]
    pub fn view(&self) -> String {
        self.rows().join("\n")
    }

    /// The rows of [`view`](Self::view), unjoined.
    pub(crate) fn rows(&self) -> Vec<String> {
        let visible = self.visible_lines();
        (0..usize::from(self.height))
            .map(|row| {
                visible
                    .get(row)
                    .map_or_else(String::new, |line| truncate_to_width(line, self.width))
            })
            .collect()
    }

    fn clamp_offset(&mut self) {
        self.y_offset = self.y_offset.min(self.max_y_offset());
    }
}

/// Display columns of `line`, summed per character.
///
/// Every width computed for padding goes through this so that it agrees
/// with [`truncate_to_width`]; `UnicodeWidthStr` measures some emoji
/// sequences wider than the sum of their characters.
pub(crate) fn display_width(line: &str) -> usize {
    line.chars().map(|ch| ch.width().unwrap_or(0)).sum()
}

/// Cuts `line` to at most `width` display columns without splitting a
/// wide character.
pub(crate) fn truncate_to_width(line: &str, width: u16) -> String {
    let limit = usize::from(width);
    let mut used = 0;
    let mut out = String::with_capacity(line.len().min(limit));
    for ch in line.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

impl Widget for &Viewport {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        for (row, line) in self.visible_lines().iter().enumerate() {
            let Ok(row) = u16::try_from(row) else { break };
            if row >= area.height {
                break;
            }
            buf.set_stringn(
                area.x,
                area.y + row,
                line,
                usize::from(area.width),
                Style::default(),
            );
        }
    }
}
