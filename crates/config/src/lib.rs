//! Configuration management for the scaffold layout frame.
//!
//! This crate handles loading, validating, and persisting the settings a
//! host can apply to the frame before the first resize: header and footer
//! text, the rows they reserve, their styles, and the vertical alignment of
//! short body content.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`band`]: Header/footer band settings
//! - [`persistence`]: Config file discovery and reading
//! - [`error`]: Error types for configuration operations
//!
//! # File Format
//!
//! ```json5
//! {
//!   header: {
//!     text: "My application",
//!     height: 3,
//!     style: { fg: "#FFFFFF", bg: "#8A2BE2", padding: { vertical: 1, horizontal: 1 } },
//!   },
//!   footer: { text: "q: quit", style: { bg: "#333333" } },
//!   // top, center or bottom
//!   vertical_align: "center",
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use scaffold_config::{Config, persistence::find_config_file};
//!
//! # fn example() -> scaffold_config::Result<()> {
//! let config = match find_config_file() {
//!     Some(path) => Config::load_from(path)?,
//!     None => Config::default(),
//! };
//! println!("Header rows: {}", config.header.height);
//! # Ok(())
//! # }
//! ```

pub mod band;
pub mod config;
pub mod error;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use band::{BandConfig, BandStyleConfig, PaddingConfig};
pub use config::Config;
pub use error::{ConfigError, Result};
