//! The parse result.

use std::collections::HashMap;

use argot_core::{MessageSegment, RichTextSegment};
use serde::Serialize;

use crate::token::{Position, SegmentRef, Token};

/// The value bound to a named parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue<'a, S = RichTextSegment> {
    /// A word or quoted string.
    Text(String),
    /// A non-text element borrowed from the message.
    Segment(&'a S),
}

impl<'a, S> ParamValue<'a, S> {
    /// Returns the text value, or `None` for a segment.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Segment(_) => None,
        }
    }

    /// Returns the bound segment, or `None` for text.
    pub fn as_segment(&self) -> Option<&'a S> {
        match self {
            Self::Text(_) => None,
            Self::Segment(segment) => Some(*segment),
        }
    }
}

/// Content of a positional element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ElementContent<'a, S = RichTextSegment> {
    /// Word or quoted-string text.
    Text(String),
    /// A non-text element borrowed from the message.
    Segment(&'a S),
}

/// A positional element: anything that was not consumed as option syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct Element<'a, S = RichTextSegment> {
    kind: ElementKind<'a>,
    content: ElementContent<'a, S>,
    position: usize,
    source: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementKind<'a> {
    Text,
    Quoted,
    Segment(&'a str),
}

impl<'a, S: MessageSegment> Element<'a, S> {
    pub(crate) fn text(text: String, position: usize, source: Position) -> Self {
        Self {
            kind: ElementKind::Text,
            content: ElementContent::Text(text),
            position,
            source,
        }
    }

    pub(crate) fn quoted(text: String, position: usize, source: Position) -> Self {
        Self {
            kind: ElementKind::Quoted,
            content: ElementContent::Text(text),
            position,
            source,
        }
    }

    pub(crate) fn segment(segment: SegmentRef<'a, S>, position: usize) -> Self {
        Self {
            kind: ElementKind::Segment(segment.kind()),
            content: ElementContent::Segment(segment.segment()),
            position,
            source: segment.position(),
        }
    }

    /// Returns `"text"`, `"quoted-text"` or the segment's kind tag.
    pub fn kind(&self) -> &'a str {
        match self.kind {
            ElementKind::Text => "text",
            ElementKind::Quoted => "quoted-text",
            ElementKind::Segment(kind) => kind,
        }
    }

    /// Returns the element's text or segment.
    pub fn content(&self) -> &ElementContent<'a, S> {
        &self.content
    }

    /// Ordinal of this element among all positional elements.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Where the element's token came from in the source message.
    pub fn source(&self) -> Position {
        self.source
    }

    /// Returns the text of a `text` or `quoted-text` element.
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            ElementContent::Text(text) => Some(text),
            ElementContent::Segment(_) => None,
        }
    }

    /// Returns the segment of a non-text element.
    pub fn as_segment(&self) -> Option<&'a S> {
        match self.content {
            ElementContent::Text(_) => None,
            ElementContent::Segment(segment) => Some(segment),
        }
    }

    /// True when the element came from a non-text message element.
    pub fn is_segment(&self) -> bool {
        matches!(self.kind, ElementKind::Segment(_))
    }
}

impl<S: MessageSegment + Serialize> Serialize for Element<'_, S> {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Element", 4)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("content", &self.content)?;
        state.serialize_field("position", &self.position)?;
        state.serialize_field("source", &self.source)?;
        state.end()
    }
}

/// A structured command invocation.
///
/// Built once per parse call and never mutated afterwards. Segment values
/// borrow from the message that was parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "S: MessageSegment + Serialize"))]
pub struct ParsedCommand<'a, S = RichTextSegment> {
    options: HashMap<String, bool>,
    named_params: HashMap<String, ParamValue<'a, S>>,
    elements: Vec<Element<'a, S>>,
    raw_tokens: Vec<Token<'a, S>>,
}

impl<'a, S: MessageSegment> ParsedCommand<'a, S> {
    pub(crate) fn new(
        options: HashMap<String, bool>,
        named_params: HashMap<String, ParamValue<'a, S>>,
        elements: Vec<Element<'a, S>>,
        raw_tokens: Vec<Token<'a, S>>,
    ) -> Self {
        Self {
            options,
            named_params,
            elements,
            raw_tokens,
        }
    }

    /// Flags seen without a value, e.g. `-v` or `--verbose`.
    pub fn options(&self) -> &HashMap<String, bool> {
        &self.options
    }

    /// Every named parameter, text or segment valued.
    pub fn named_params(&self) -> &HashMap<String, ParamValue<'a, S>> {
        &self.named_params
    }

    /// Named parameters whose value is text.
    pub fn text_params(&self) -> HashMap<&str, &str> {
        self.named_params
            .iter()
            .filter_map(|(name, value)| Some((name.as_str(), value.as_text()?)))
            .collect()
    }

    /// Named parameters whose value is a non-text segment.
    pub fn segment_params(&self) -> HashMap<&str, &'a S> {
        self.named_params
            .iter()
            .filter_map(|(name, value)| Some((name.as_str(), value.as_segment()?)))
            .collect()
    }

    /// Positional elements in the order they were encountered.
    pub fn elements(&self) -> &[Element<'a, S>] {
        &self.elements
    }

    /// The full token sequence, before classification.
    pub fn raw_tokens(&self) -> &[Token<'a, S>] {
        &self.raw_tokens
    }

    /// True when `name` was given as a flag.
    pub fn has_option(&self, name: &str) -> bool {
        self.options.get(name).copied().unwrap_or(false)
    }

    /// Looks up a named parameter of either kind.
    pub fn param(&self, name: &str) -> Option<&ParamValue<'a, S>> {
        self.named_params.get(name)
    }

    /// Looks up a text-valued named parameter.
    pub fn text_param(&self, name: &str) -> Option<&str> {
        self.param(name).and_then(ParamValue::as_text)
    }

    /// Looks up a segment-valued named parameter.
    pub fn segment_param(&self, name: &str) -> Option<&'a S> {
        self.param(name).and_then(ParamValue::as_segment)
    }

    /// Text content of the positional elements, skipping segments.
    pub fn positional_texts(&self) -> Vec<&str> {
        self.elements.iter().filter_map(Element::as_text).collect()
    }

    /// True when the command has no flags, parameters or elements.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.named_params.is_empty() && self.elements.is_empty()
    }
}
