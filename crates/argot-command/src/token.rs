//! Token model shared by the tokenizer, the splicer and the parser.
//!
//! Text-derived tokens and rich-media references live in one closed
//! [`Token`] enum. Consumers always dispatch on the variant, never on the
//! runtime type of the segment behind a [`SegmentRef`].

use std::fmt;

use argot_core::{MessageSegment, RichTextSegment};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

// ============================================================================
// Position
// ============================================================================

/// Where a token came from.
///
/// `element` indexes the source message (always `0` for bare strings) and
/// `offset` is a character offset inside that element's text. Non-text
/// elements have offset `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    /// Index of the source element in the message.
    pub element: usize,
    /// Character offset inside that element's text.
    pub offset: usize,
}

impl Position {
    /// Creates a position.
    pub const fn new(element: usize, offset: usize) -> Self {
        Self { element, offset }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element {}, offset {}", self.element, self.offset)
    }
}

// ============================================================================
// Option names
// ============================================================================

/// The name half of an assignment: `-p` or `--config`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionName {
    /// A single letter, written `-p`.
    Short(char),
    /// A name, written `--config`.
    Long(String),
}

impl OptionName {
    /// Returns the key used in the result mappings (`"p"`, `"config"`).
    pub fn key(&self) -> String {
        match self {
            Self::Short(letter) => letter.to_string(),
            Self::Long(name) => name.clone(),
        }
    }
}

/// Renders the option as it is written on a command line.
impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Short(letter) => write!(f, "-{letter}"),
            Self::Long(name) => write!(f, "--{name}"),
        }
    }
}

impl Serialize for OptionName {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.serialize_str(&self.key())
    }
}

// ============================================================================
// Segment references
// ============================================================================

/// A non-text message element lifted into the token stream.
///
/// The segment is borrowed from the caller's message; a `SegmentRef` (and
/// every token or result that holds one) cannot outlive that message.
#[derive(Debug, PartialEq)]
pub struct SegmentRef<'a, S = RichTextSegment> {
    segment: &'a S,
    element: usize,
}

impl<S> Clone for SegmentRef<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SegmentRef<'_, S> {}

impl<'a, S: MessageSegment> SegmentRef<'a, S> {
    /// Creates a reference to the segment found at `element`.
    pub fn new(segment: &'a S, element: usize) -> Self {
        Self { segment, element }
    }

    /// Returns the borrowed segment.
    pub fn segment(&self) -> &'a S {
        self.segment
    }

    /// Returns the segment's kind tag (e.g. "image", "at").
    pub fn kind(&self) -> &'a str {
        self.segment.segment_type()
    }

    /// Returns the index of the element in the source message.
    pub fn element(&self) -> usize {
        self.element
    }

    /// Returns the segment's position; the offset is always `0`.
    pub fn position(&self) -> Position {
        Position::new(self.element, 0)
    }
}

impl<S: MessageSegment + Serialize> Serialize for SegmentRef<'_, S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut state = serializer.serialize_struct("SegmentRef", 3)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("element", &self.element)?;
        state.serialize_field("segment", self.segment)?;
        state.end()
    }
}

// ============================================================================
// Tokens
// ============================================================================

/// The value half of an assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
#[serde(bound(serialize = "S: MessageSegment + Serialize"))]
pub enum Value<'a, S = RichTextSegment> {
    /// Unquoted text after `=`, possibly empty.
    Word(String),
    /// A quoted string after `=`, escapes resolved.
    Quoted(String),
    /// A non-text element bound through a placeholder.
    Segment(SegmentRef<'a, S>),
}

impl<S> Value<'_, S> {
    /// Returns the text of a `Word` or `Quoted` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Word(text) | Self::Quoted(text) => Some(text),
            Self::Segment(_) => None,
        }
    }
}

/// A classified lexical unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[serde(bound(serialize = "S: MessageSegment + Serialize"))]
pub enum Token<'a, S = RichTextSegment> {
    /// An unquoted literal.
    Word { text: String, position: Position },
    /// A literal with quotes stripped and escapes resolved.
    QuotedString { text: String, position: Position },
    /// One letter of a `-x` / `-xvf` cluster.
    ShortOption { letter: char, position: Position },
    /// A `--name` flag without an inline value.
    LongOption { name: String, position: Position },
    /// `-p=1234`, `--config=file.json` or a spliced `--preview=[]`.
    Assignment {
        name: OptionName,
        value: Value<'a, S>,
        position: Position,
    },
    /// A non-text element standing on its own.
    Segment(SegmentRef<'a, S>),
}

impl<'a, S: MessageSegment> Token<'a, S> {
    /// Returns where the token originated.
    pub fn position(&self) -> Position {
        match self {
            Self::Word { position, .. }
            | Self::QuotedString { position, .. }
            | Self::ShortOption { position, .. }
            | Self::LongOption { position, .. }
            | Self::Assignment { position, .. } => *position,
            Self::Segment(segment) => segment.position(),
        }
    }

    /// Returns the text of a `Word` or `QuotedString` token.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Word { text, .. } | Self::QuotedString { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Renders the token as command-line source text.
///
/// Re-tokenizing the output of a text-derived token yields an equivalent
/// token. Segments have no textual form and render as `[kind]`.
impl<S: MessageSegment> fmt::Display for Token<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word { text, .. } => f.write_str(text),
            Self::QuotedString { text, .. } => write_quoted(f, text),
            Self::ShortOption { letter, .. } => write!(f, "-{letter}"),
            Self::LongOption { name, .. } => write!(f, "--{name}"),
            Self::Assignment { name, value, .. } => {
                write!(f, "{name}=")?;
                match value {
                    Value::Word(text) if needs_quoting(text) => write_quoted(f, text),
                    Value::Word(text) => f.write_str(text),
                    Value::Quoted(text) => write_quoted(f, text),
                    Value::Segment(segment) => write!(f, "[{}]", segment.kind()),
                }
            }
            Self::Segment(segment) => write!(f, "[{}]", segment.kind()),
        }
    }
}

/// Joins rendered tokens with single spaces.
pub fn render_tokens<S: MessageSegment>(tokens: &[Token<'_, S>]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn needs_quoting(text: &str) -> bool {
    text.chars().any(|c| c.is_whitespace() || c == '"')
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_str("\"")?;
    for ch in text.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            _ => write!(f, "{ch}")?,
        }
    }
    f.write_str("\"")
}
