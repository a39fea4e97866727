//! Demo host application and run loop.
//!
//! The [`App`] wraps a [`Layout`] and adds two footer modes on top of it:
//! a help line and a live scroll position readout. Everything else is
//! forwarded to the layout.

use ratatui::Frame;
use scaffold_protocol::{Command, Message};

use crate::{
    demo::{HELP_FOOTER, POSITION_FOOTER},
    event::{event_to_message, poll_event},
    layout::Layout,
    terminal::AppTerminal,
    viewport::Viewport,
};

/// The demo host application.
#[derive(Debug)]
pub struct App {
    layout: Layout,
    /// Footer text restored when both toggles are off.
    base_footer: String,
    show_help: bool,
    show_position: bool,
    should_quit: bool,
}

impl App {
    /// Creates an application around `layout`.
    ///
    /// The layout's current footer becomes the default footer.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_tui::{App, Layout};
    ///
    /// let app = App::new(Layout::new());
    /// assert!(!app.should_quit());
    /// assert_eq!(app.layout().footer(), "Footer");
    /// ```
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        let base_footer = layout.footer().to_string();
        Self {
            layout,
            base_footer,
            show_help: false,
            show_position: false,
            should_quit: false,
        }
    }

    /// The wrapped layout.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Whether the help footer is shown.
    #[must_use]
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Whether the position footer is shown.
    #[must_use]
    pub fn show_position(&self) -> bool {
        self.show_position
    }

    /// Whether the run loop should stop.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the application based on a message.
    ///
    /// Help and position toggles are mutually exclusive: turning one on
    /// turns the other off. While position info is shown, the footer is
    /// refreshed after every scroll or resize.
    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::ToggleHelp => {
                self.show_help = !self.show_help;
                if self.show_help {
                    self.show_position = false;
                }
            }
            Message::TogglePosition => {
                self.show_position = !self.show_position;
                if self.show_position {
                    self.show_help = false;
                }
            }
            msg => {
                if let Some(Command::Quit) = self.layout.update(msg) {
                    tracing::debug!(target: "app", "quit");
                    self.should_quit = true;
                }
                let moved = msg.is_navigation() || msg.is_resize();
                if !(self.show_position && moved) {
                    return;
                }
            }
        }
        self.refresh_footer();
    }

    /// Renders the layout into the whole frame.
    pub fn view(&self, frame: &mut Frame) {
        frame.render_widget(&self.layout, frame.area());
    }

    /// Runs the main loop until quit.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing or polling the terminal fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use scaffold_tui::{App, demo, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(demo::layout());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        // The first frame needs a size; crossterm only reports changes.
        let size = terminal.size()?;
        self.update(Message::Resize {
            width: size.width,
            height: size.height,
        });

        while !self.should_quit {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(msg) = poll_event()?.as_ref().and_then(event_to_message) {
                self.update(msg);
            }

            tokio::task::yield_now().await;
        }

        Ok(())
    }

    fn refresh_footer(&mut self) {
        let footer = if self.show_position {
            self.position_footer()
        } else if self.show_help {
            HELP_FOOTER.to_string()
        } else {
            self.base_footer.clone()
        };
        self.layout.set_footer(footer);
    }

    fn position_footer(&self) -> String {
        let total = self.layout.viewport().map_or(0, Viewport::total_lines);
        let line = (self.layout.y_offset() + 1).min(total);
        let percent = self.layout.scroll_percent() * 100.0;
        format!("Line {line}/{total} ({percent:.0}%) | {POSITION_FOOTER}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{demo, test_utils::buffer_to_string};
    use ratatui::{Terminal, backend::TestBackend};

    fn numbered(count: usize) -> String {
        (1..=count)
            .map(|n| format!("line {n}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn sized_app(lines: usize) -> App {
        let mut layout = Layout::new();
        layout.set_footer("base");
        layout.set_content(numbered(lines));
        let mut app = App::new(layout);
        app.update(Message::Resize {
            width: 80,
            height: 12,
        });
        app
    }

    #[test]
    fn new_app_keeps_layout_footer() {
        let app = sized_app(5);
        assert!(!app.show_help());
        assert!(!app.show_position());
        assert!(!app.should_quit());
        assert_eq!(app.layout().footer(), "base");
    }

    #[test]
    fn quit_message_sets_should_quit() {
        let mut app = sized_app(5);
        app.update(Message::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn help_toggle_swaps_footer() {
        let mut app = sized_app(5);

        app.update(Message::ToggleHelp);
        assert!(app.show_help());
        assert_eq!(app.layout().footer(), HELP_FOOTER);

        app.update(Message::ToggleHelp);
        assert!(!app.show_help());
        assert_eq!(app.layout().footer(), "base");
    }

    #[test]
    fn toggles_are_mutually_exclusive() {
        let mut app = sized_app(5);

        app.update(Message::ToggleHelp);
        app.update(Message::TogglePosition);
        assert!(app.show_position());
        assert!(!app.show_help());

        app.update(Message::ToggleHelp);
        assert!(app.show_help());
        assert!(!app.show_position());
        assert_eq!(app.layout().footer(), HELP_FOOTER);
    }

    #[test]
    fn position_footer_follows_scrolling() {
        let mut app = sized_app(30);
        app.update(Message::TogglePosition);
        assert_eq!(
            app.layout().footer(),
            format!("Line 1/30 (0%) | {POSITION_FOOTER}")
        );

        app.update(Message::ScrollToBottom);
        assert_eq!(
            app.layout().footer(),
            format!("Line 21/30 (100%) | {POSITION_FOOTER}")
        );

        app.update(Message::TogglePosition);
        assert_eq!(app.layout().footer(), "base");
    }

    #[test]
    fn navigation_is_forwarded_to_layout() {
        let mut app = sized_app(30);
        app.update(Message::PageDown);
        assert_eq!(app.layout().y_offset(), 10);
        app.update(Message::HalfPageUp);
        assert_eq!(app.layout().y_offset(), 5);
        assert!(!app.should_quit());
    }

    #[test]
    fn view_shows_placeholder_before_resize() {
        let app = App::new(Layout::new());
        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        assert!(buffer_to_string(terminal.backend().buffer()).starts_with("Initializing..."));
    }

    #[test]
    fn demo_view_renders_bands_and_body() {
        let mut app = App::new(demo::layout());
        app.update(Message::Resize {
            width: 60,
            height: 10,
        });

        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();

        let screen = buffer_to_string(terminal.backend().buffer());
        let rows: Vec<&str> = screen.lines().collect();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0], "");
        assert!(rows[1].contains(demo::TITLE));
        assert!(rows[4].contains("Navigation Controls:"));
        assert!(rows[9].contains(demo::DEFAULT_FOOTER));
    }
}
