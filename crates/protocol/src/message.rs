//! Layout message and command types.
//!
//! This module defines the messages a host application forwards to the
//! layout frame, and the follow-up commands the layout hands back.

use serde::{Deserialize, Serialize};

/// Messages that drive the layout frame.
///
/// These messages are produced by the host's input handler (or directly by
/// the host) and consumed by the layout's update entry point.
///
/// # Examples
///
/// ```
/// use scaffold_protocol::Message;
///
/// let msg = Message::Resize { width: 80, height: 24 };
/// assert!(msg.is_resize());
/// assert!(!Message::LineDown.is_resize());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// The terminal window changed size.
    Resize {
        /// New terminal width in columns.
        width: u16,
        /// New terminal height in rows.
        height: u16,
    },
    /// Scroll the body up by one line.
    LineUp,
    /// Scroll the body down by one line.
    LineDown,
    /// Scroll the body up by half the viewport height.
    HalfPageUp,
    /// Scroll the body down by half the viewport height.
    HalfPageDown,
    /// Scroll the body up by the full viewport height.
    PageUp,
    /// Scroll the body down by the full viewport height.
    PageDown,
    /// Jump to the first line of the body.
    ScrollToTop,
    /// Jump so the last line of the body is visible.
    ScrollToBottom,
    /// Quit the application.
    Quit,
    /// Toggle the help hint in the footer.
    ToggleHelp,
    /// Toggle the scroll position readout in the footer.
    TogglePosition,
}

impl Message {
    /// Returns `true` for [`Message::Resize`].
    #[must_use]
    pub fn is_resize(&self) -> bool {
        matches!(self, Self::Resize { .. })
    }

    /// Returns `true` for messages that move the body's scroll offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_protocol::Message;
    ///
    /// assert!(Message::PageDown.is_navigation());
    /// assert!(!Message::Quit.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::LineUp
                | Self::LineDown
                | Self::HalfPageUp
                | Self::HalfPageDown
                | Self::PageUp
                | Self::PageDown
                | Self::ScrollToTop
                | Self::ScrollToBottom
        )
    }
}

/// Follow-up commands returned from the layout's update entry point.
///
/// The host owns what a command means; the layout only reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// The event loop should stop.
    Quit,
}
