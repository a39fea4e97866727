//! A header / scrollable body / footer frame for terminal applications.
//!
//! The crate is organized into the following modules:
//!
//! - [`viewport`]: the scrolling text window
//! - [`align`]: vertical alignment of short content
//! - [`style`]: header and footer band styles
//! - [`layout`]: the [`Layout`] component tying them together
//! - [`event`]: terminal event to message mapping
//! - [`app`]: demo host application and run loop
//! - [`demo`]: sample content for the demo
//! - [`terminal`]: terminal setup, teardown and panic handling
//!
//! # Example
//!
//! ```no_run
//! use scaffold_tui::{App, demo, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(demo::layout());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod align;
pub mod app;
pub mod demo;
pub mod event;
pub mod layout;
pub mod style;
pub mod terminal;
pub mod viewport;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::App;
pub use layout::{Layout, Sizing};
pub use style::{BandStyle, StyleError};
pub use viewport::Viewport;
