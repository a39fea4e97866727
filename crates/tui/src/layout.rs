//! The header / body / footer layout frame.
//!
//! [`Layout`] owns the header and footer bands, the raw body content, the
//! vertical alignment mode and the body [`Viewport`]. Viewport height is
//! always the window height minus both band heights, saturating at zero.
//!
//! # Sizing
//!
//! A layout starts [`Sizing::Unsized`]: the terminal size is unknown, so
//! content set at this point is held as pending and the view shows a
//! placeholder. The first [`Message::Resize`] builds the viewport and applies
//! the pending content; later resizes resize the viewport in place. Every
//! change to the content, the alignment mode or the viewport height
//! re-aligns the body from the raw content.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    widgets::{Paragraph, Widget},
};
use scaffold_config::Config;
use scaffold_protocol::{Command, Message, VerticalAlign};

use crate::{
    align::align_content,
    style::{BandStyle, StyleError},
    viewport::{Viewport, display_width},
};

/// Text shown until the first resize.
pub const INITIALIZING: &str = "Initializing...";

/// Whether the layout knows its terminal size yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sizing {
    /// No resize received yet.
    Unsized {
        /// Content set before sizing, applied on the first resize.
        pending: Option<String>,
    },
    /// The viewport exists and matches the last resize.
    Sized(Viewport),
}

impl Default for Sizing {
    fn default() -> Self {
        Self::Unsized { pending: None }
    }
}

/// A fixed header, a scrollable body and a fixed footer.
///
/// # Examples
///
/// ```
/// use scaffold_protocol::{Message, VerticalAlign};
/// use scaffold_tui::layout::{INITIALIZING, Layout};
///
/// let mut layout = Layout::new();
/// layout.set_vertical_align(VerticalAlign::Bottom);
/// layout.set_content("hello");
/// assert_eq!(layout.view(), INITIALIZING);
///
/// layout.update(Message::Resize { width: 20, height: 6 });
/// assert_eq!(layout.viewport_height(), 4);
/// assert!(layout.view().contains("hello"));
/// ```
#[derive(Debug, Clone)]
pub struct Layout {
    header: String,
    footer: String,
    header_height: u16,
    footer_height: u16,
    header_style: BandStyle,
    footer_style: BandStyle,
    window_width: u16,
    window_height: u16,
    content: String,
    vertical_align: VerticalAlign,
    sizing: Sizing,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout {
    /// Creates an unsized layout with placeholder band text.
    #[must_use]
    pub fn new() -> Self {
        Self {
            header: "Header".to_string(),
            footer: "Footer".to_string(),
            header_height: 1,
            footer_height: 1,
            header_style: BandStyle::header(),
            footer_style: BandStyle::footer(),
            window_width: 0,
            window_height: 0,
            content: String::new(),
            vertical_align: VerticalAlign::default(),
            sizing: Sizing::default(),
        }
    }

    /// Creates an unsized layout from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a band color cannot be parsed.
    pub fn from_config(config: &Config) -> Result<Self, StyleError> {
        Ok(Self {
            header: config.header.text.clone(),
            footer: config.footer.text.clone(),
            header_height: config.header.height,
            footer_height: config.footer.height,
            header_style: BandStyle::from_config(&config.header.style)?,
            footer_style: BandStyle::from_config(&config.footer.style)?,
            vertical_align: config.vertical_align,
            ..Self::new()
        })
    }

    // --- Configuration ---

    /// Sets the header text.
    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = header.into();
    }

    /// Sets the footer text.
    pub fn set_footer(&mut self, footer: impl Into<String>) {
        self.footer = footer.into();
    }

    /// Sets the rows reserved for the header, resizing the body if sized.
    pub fn set_header_height(&mut self, height: u16) {
        self.header_height = height;
        self.refit();
    }

    /// Sets the rows reserved for the footer, resizing the body if sized.
    pub fn set_footer_height(&mut self, height: u16) {
        self.footer_height = height;
        self.refit();
    }

    /// Sets the header style. Once sized, its width tracks the window.
    pub fn set_header_style(&mut self, style: BandStyle) {
        self.header_style = self.track_window_width(style);
    }

    /// Sets the footer style. Once sized, its width tracks the window.
    pub fn set_footer_style(&mut self, style: BandStyle) {
        self.footer_style = self.track_window_width(style);
    }

    /// Sets the body content.
    ///
    /// Before the first resize the content is held as pending; afterwards
    /// the body is re-aligned immediately.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        if let Sizing::Unsized { pending } = &mut self.sizing {
            tracing::debug!(target: "layout", bytes = self.content.len(), "content_pending");
            *pending = Some(self.content.clone());
            return;
        }
        self.realign();
    }

    /// Sets the vertical alignment mode, re-aligning the body if sized.
    pub fn set_vertical_align(&mut self, align: VerticalAlign) {
        self.vertical_align = align;
        self.realign();
    }

    // --- Accessors ---

    /// The header text.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// The footer text.
    #[must_use]
    pub fn footer(&self) -> &str {
        &self.footer
    }

    /// Rows reserved for the header.
    #[must_use]
    pub fn header_height(&self) -> u16 {
        self.header_height
    }

    /// Rows reserved for the footer.
    #[must_use]
    pub fn footer_height(&self) -> u16 {
        self.footer_height
    }

    /// The raw, unaligned body content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The vertical alignment mode.
    #[must_use]
    pub fn vertical_align(&self) -> VerticalAlign {
        self.vertical_align
    }

    /// Last observed terminal `(width, height)`; `(0, 0)` before sizing.
    #[must_use]
    pub fn window_size(&self) -> (u16, u16) {
        (self.window_width, self.window_height)
    }

    /// Whether a resize has been received.
    #[must_use]
    pub fn is_sized(&self) -> bool {
        matches!(self.sizing, Sizing::Sized(_))
    }

    /// The sizing state.
    #[must_use]
    pub fn sizing(&self) -> &Sizing {
        &self.sizing
    }

    /// The body viewport, once sized.
    #[must_use]
    pub fn viewport(&self) -> Option<&Viewport> {
        match &self.sizing {
            Sizing::Sized(viewport) => Some(viewport),
            Sizing::Unsized { .. } => None,
        }
    }

    fn viewport_mut(&mut self) -> Option<&mut Viewport> {
        match &mut self.sizing {
            Sizing::Sized(viewport) => Some(viewport),
            Sizing::Unsized { .. } => None,
        }
    }

    /// Body width in columns; 0 before sizing.
    #[must_use]
    pub fn viewport_width(&self) -> u16 {
        self.viewport().map_or(0, Viewport::width)
    }

    /// Body height in rows; 0 before sizing.
    #[must_use]
    pub fn viewport_height(&self) -> u16 {
        self.viewport().map_or(0, Viewport::height)
    }

    /// Index of the first visible body line.
    #[must_use]
    pub fn y_offset(&self) -> usize {
        self.viewport().map_or(0, Viewport::y_offset)
    }

    /// Sets the body scroll offset, clamped to the valid range.
    pub fn set_y_offset(&mut self, offset: usize) {
        if let Some(viewport) = self.viewport_mut() {
            viewport.set_y_offset(offset);
        }
    }

    /// Whether the body shows its first line.
    #[must_use]
    pub fn at_top(&self) -> bool {
        self.viewport().is_none_or(Viewport::at_top)
    }

    /// Whether the body shows its last line.
    #[must_use]
    pub fn at_bottom(&self) -> bool {
        self.viewport().is_none_or(Viewport::at_bottom)
    }

    /// Body scroll position as a fraction in `0.0..=1.0`.
    #[must_use]
    pub fn scroll_percent(&self) -> f64 {
        self.viewport().map_or(1.0, Viewport::scroll_percent)
    }

    // --- Events ---

    /// Handles a message, returning any follow-up command for the host.
    ///
    /// Resizes drive the sizing state; navigation messages scroll the body;
    /// [`Message::Quit`] is handed back as [`Command::Quit`]. Anything else
    /// belongs to the host and is ignored.
    pub fn update(&mut self, msg: Message) -> Option<Command> {
        match msg {
            Message::Resize { width, height } => self.resize(width, height),
            Message::Quit => return Some(Command::Quit),
            Message::LineUp => self.line_up(),
            Message::LineDown => self.line_down(),
            Message::HalfPageUp => self.half_page_up(),
            Message::HalfPageDown => self.half_page_down(),
            Message::PageUp => self.page_up(),
            Message::PageDown => self.page_down(),
            Message::ScrollToTop => self.scroll_to_top(),
            Message::ScrollToBottom => self.scroll_to_bottom(),
            Message::ToggleHelp | Message::TogglePosition => {}
        }
        None
    }

    /// Records a new terminal size and sizes the body to match.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.window_width = width;
        self.window_height = height;
        self.header_style = self.header_style.width(width);
        self.footer_style = self.footer_style.width(width);

        let body_height = self.body_height();
        tracing::debug!(target: "layout", width, height, body_height, "resize");

        if let Sizing::Sized(viewport) = &mut self.sizing {
            viewport.set_size(width, body_height);
        } else {
            if let Sizing::Unsized {
                pending: Some(pending),
            } = std::mem::take(&mut self.sizing)
            {
                self.content = pending;
            }
            self.sizing = Sizing::Sized(Viewport::new(width, body_height));
        }
        self.realign();
    }

    // --- Navigation ---

    /// Scrolls the body up one line.
    pub fn line_up(&mut self) {
        self.scroll_up_by(|_| 1);
    }

    /// Scrolls the body down one line.
    pub fn line_down(&mut self) {
        self.scroll_down_by(|_| 1);
    }

    /// Scrolls the body up half its height (rounded down).
    pub fn half_page_up(&mut self) {
        self.scroll_up_by(|height| height / 2);
    }

    /// Scrolls the body down half its height (rounded down).
    pub fn half_page_down(&mut self) {
        self.scroll_down_by(|height| height / 2);
    }

    /// Scrolls the body up its full height.
    pub fn page_up(&mut self) {
        self.scroll_up_by(|height| height);
    }

    /// Scrolls the body down its full height.
    pub fn page_down(&mut self) {
        self.scroll_down_by(|height| height);
    }

    /// Jumps to the first body line.
    pub fn scroll_to_top(&mut self) {
        if let Some(viewport) = self.viewport_mut() {
            viewport.goto_top();
        }
    }

    /// Jumps so the last body line is visible.
    pub fn scroll_to_bottom(&mut self) {
        if let Some(viewport) = self.viewport_mut() {
            viewport.goto_bottom();
        }
    }

    fn scroll_up_by(&mut self, lines: impl FnOnce(usize) -> usize) {
        if let Some(viewport) = self.viewport_mut() {
            let n = lines(usize::from(viewport.height()));
            viewport.scroll_up(n);
        }
    }

    fn scroll_down_by(&mut self, lines: impl FnOnce(usize) -> usize) {
        if let Some(viewport) = self.viewport_mut() {
            let n = lines(usize::from(viewport.height()));
            viewport.scroll_down(n);
        }
    }

    // --- Rendering ---

    /// Composes header, body and footer into one string.
    ///
    /// Each band is fitted to its configured height, so once sized the
    /// result has exactly as many rows as the window (unless the bands alone
    /// exceed it). Body rows are padded with spaces to the window width, so
    /// every row is as wide as the bands. Before the first resize this is
    /// [`INITIALIZING`].
    #[must_use]
    pub fn view(&self) -> String {
        let Sizing::Sized(viewport) = &self.sizing else {
            return INITIALIZING.to_string();
        };

        let width = usize::from(viewport.width());
        let mut rows = self
            .header_style
            .render_fitted(&self.header, self.header_height);
        rows.extend(viewport.rows().into_iter().map(|mut row| {
            let fill = width.saturating_sub(display_width(&row));
            row.extend(std::iter::repeat_n(' ', fill));
            row
        }));
        rows.extend(
            self.footer_style
                .render_fitted(&self.footer, self.footer_height),
        );
        rows.join("\n")
    }

    // --- Internals ---

    fn body_height(&self) -> u16 {
        self.window_height
            .saturating_sub(self.header_height)
            .saturating_sub(self.footer_height)
    }

    fn track_window_width(&self, style: BandStyle) -> BandStyle {
        if self.is_sized() {
            style.width(self.window_width)
        } else {
            style
        }
    }

    /// Re-derives the body height after a band height change.
    fn refit(&mut self) {
        let body_height = self.body_height();
        let width = self.window_width;
        if let Some(viewport) = self.viewport_mut() {
            viewport.set_size(width, body_height);
            self.realign();
        }
    }

    /// Recomputes the viewport content from the raw content.
    fn realign(&mut self) {
        let Sizing::Sized(viewport) = &mut self.sizing else {
            return;
        };
        let aligned = align_content(&self.content, viewport.height(), self.vertical_align);
        tracing::debug!(
            target: "layout",
            height = viewport.height(),
            align = ?self.vertical_align,
            padding = aligned.len() - self.content.len(),
            "realign"
        );
        viewport.set_content(&aligned);
    }
}

impl Widget for &Layout {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Sizing::Sized(viewport) = &self.sizing else {
            Paragraph::new(INITIALIZING).render(area, buf);
            return;
        };

        let [header_area, body_area, footer_area] = ratatui::layout::Layout::vertical([
            Constraint::Length(self.header_height),
            Constraint::Min(0),
            Constraint::Length(self.footer_height),
        ])
        .areas(area);

        self.header_style.paint(&self.header, header_area, buf);
        viewport.render(body_area, buf);
        self.footer_style.paint(&self.footer, footer_area, buf);
    }
}
