//! Message types consumed by the Argot command lexer.
//!
//! A chat message is an ordered list of segments. Some segments carry plain
//! text, the rest are opaque rich-media references (images, mentions,
//! replies, ...). The lexer only needs to tell the two apart and read the
//! kind tag of the non-text ones, which is exactly what [`MessageSegment`]
//! exposes.
//!
//! # Architecture
//!
//! - [`MessageSegment`]: a trait for a single unit of content
//! - [`Message<S>`]: an ordered collection of segments
//! - [`RichTextSegment`] / [`RichText`]: a protocol-agnostic implementation
//!   used by the bare-string entry points and the demo CLI

use std::fmt::{Debug, Display};
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

// ============================================================================
// Message Segment Trait
// ============================================================================

/// A single segment of a message.
///
/// Protocol adapters implement this trait for their own segment types. The
/// lexer treats every segment whose [`as_text`](MessageSegment::as_text)
/// returns `Some` as text and everything else as an opaque reference tagged
/// with [`segment_type`](MessageSegment::segment_type).
pub trait MessageSegment: Debug + Clone + Display + Send + Sync + 'static {
    /// Builds a plain text segment.
    fn text(text: impl Into<String>) -> Self;

    /// Returns the type identifier of this segment (e.g., "text", "image", "at").
    fn segment_type(&self) -> &str;

    /// Returns true if this is a plain text segment.
    fn is_text(&self) -> bool {
        self.segment_type() == "text"
    }

    /// Returns the text content if this is a text segment.
    fn as_text(&self) -> Option<&str>;
}

// ============================================================================
// Rich Text Segment
// ============================================================================

/// A platform-agnostic message segment.
///
/// Non-text payloads are platform-specific reference strings (file name, URL,
/// user id, message id) that the lexer never looks into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum RichTextSegment {
    /// Plain text content.
    Text(String),
    /// An image, identified by a file path, URL or other reference.
    Image(String),
    /// A user mention, identified by the user id.
    At(String),
    /// A reply to an earlier message, identified by its message id.
    Reply(String),
    /// A platform emoji, identified by its id.
    Face(String),
}

impl RichTextSegment {
    /// Returns the payload of the segment regardless of its kind.
    pub fn payload(&self) -> &str {
        match self {
            Self::Text(s) | Self::Image(s) | Self::At(s) | Self::Reply(s) | Self::Face(s) => s,
        }
    }
}

impl MessageSegment for RichTextSegment {
    fn text(text: impl Into<String>) -> Self {
        RichTextSegment::Text(text.into())
    }

    fn segment_type(&self) -> &str {
        match self {
            RichTextSegment::Text(_) => "text",
            RichTextSegment::Image(_) => "image",
            RichTextSegment::At(_) => "at",
            RichTextSegment::Reply(_) => "reply",
            RichTextSegment::Face(_) => "face",
        }
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            RichTextSegment::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for RichTextSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RichTextSegment::Text(s) => write!(f, "{s}"),
            RichTextSegment::Image(r) => write!(f, "[image:{r}]"),
            RichTextSegment::At(id) => write!(f, "@{id}"),
            RichTextSegment::Reply(id) => write!(f, "[reply:{id}]"),
            RichTextSegment::Face(id) => write!(f, "[face:{id}]"),
        }
    }
}

// ============================================================================
// Message Generic Struct
// ============================================================================

/// An ordered message composed of segments.
///
/// The order of segments is significant; nothing in this crate reorders them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message<S: MessageSegment> {
    #[serde(bound(deserialize = "S: Deserialize<'de>", serialize = "S: Serialize"))]
    segments: Vec<S>,
}

impl<S: MessageSegment> Message<S> {
    /// Creates a new empty message.
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Creates a message from a vector of segments.
    pub fn from_segments(segments: Vec<S>) -> Self {
        Self { segments }
    }

    /// Concatenates the text of all text segments, skipping everything else.
    pub fn extract_plain_text(&self) -> String {
        self.iter().filter_map(|seg| seg.as_text()).collect()
    }

    /// Adds a segment to the end of the message.
    pub fn push(&mut self, segment: S) {
        self.segments.push(segment);
    }

    /// Consumes the message and adds a segment (builder pattern).
    pub fn with(mut self, segment: S) -> Self {
        self.segments.push(segment);
        self
    }

    /// Consumes the message and returns the inner segments vector.
    pub fn into_segments(self) -> Vec<S> {
        self.segments
    }
}

impl<S: MessageSegment> Deref for Message<S> {
    type Target = [S];

    fn deref(&self) -> &Self::Target {
        &self.segments
    }
}

impl<S: MessageSegment> DerefMut for Message<S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.segments
    }
}

impl<S: MessageSegment> Display for Message<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl<S: MessageSegment> From<Vec<S>> for Message<S> {
    fn from(segments: Vec<S>) -> Self {
        Self { segments }
    }
}

impl<S: MessageSegment> FromIterator<S> for Message<S> {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// RichText
// ============================================================================

/// A protocol-agnostic message composed of [`RichTextSegment`]s.
pub type RichText = Message<RichTextSegment>;

impl RichText {
    /// Adds a text segment.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.with(RichTextSegment::Text(text.into()))
    }

    /// Adds an image segment.
    pub fn image(self, reference: impl Into<String>) -> Self {
        self.with(RichTextSegment::Image(reference.into()))
    }

    /// Adds an at-mention segment.
    pub fn at(self, id: impl Into<String>) -> Self {
        self.with(RichTextSegment::At(id.into()))
    }

    /// Adds a reply segment.
    pub fn reply(self, message_id: impl Into<String>) -> Self {
        self.with(RichTextSegment::Reply(message_id.into()))
    }

    /// Adds a face (emoji) segment.
    pub fn face(self, id: impl Into<String>) -> Self {
        self.with(RichTextSegment::Face(id.into()))
    }
}

// ============================================================================
// Tests
// ============================================================================
