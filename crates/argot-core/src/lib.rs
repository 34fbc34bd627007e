//! # Argot Core
//!
//! The message model shared by every Argot crate.
//!
//! Chat messages reach the command lexer as an ordered sequence of segments.
//! This crate defines what a segment is ([`MessageSegment`]), a container for
//! them ([`Message`]) and a protocol-agnostic segment type
//! ([`RichTextSegment`]) that adapters can convert into.
//!
//! ```rust
//! use argot_core::{MessageSegment, RichText};
//!
//! let msg = RichText::new().text("/kick ").at("12345").text(" --reason=spam");
//! assert_eq!(msg.iter().filter(|seg| seg.is_text()).count(), 2);
//! ```

pub mod message;

pub use message::{Message, MessageSegment, RichText, RichTextSegment};

/// Prelude for common imports.
pub mod prelude {
    pub use super::message::*;
}
