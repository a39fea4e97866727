//! Shared protocol types for the scaffold layout frame.
//!
//! This crate defines the small vocabulary shared by every scaffold
//! component: the messages a host forwards to the layout, the commands the
//! layout hands back, and the alignment modes used for the body and the
//! header/footer bands.
//!
//! # Overview
//!
//! - [`message`]: input messages and follow-up commands
//! - [`align`]: vertical and horizontal alignment modes
//!
//! # Examples
//!
//! ```
//! use scaffold_protocol::{Message, VerticalAlign};
//!
//! let resize = Message::Resize { width: 120, height: 40 };
//! assert!(resize.is_resize());
//!
//! // Center splits the spare rows, the remainder going below.
//! assert_eq!(VerticalAlign::Center.leading_padding(5), 2);
//! ```

pub mod align;
pub mod message;

// Re-export primary types at crate root for convenience
pub use align::{HorizontalAlign, VerticalAlign};
pub use message::{Command, Message};
