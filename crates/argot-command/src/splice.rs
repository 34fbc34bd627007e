//! Hybrid tokenization of rich message elements.
//!
//! This module walks a sequence of [`MessageSegment`]s and produces a single
//! token stream:
//!
//! - Contiguous **text** elements are joined into one run (adjacent elements
//!   are separated by a single space so their words never fuse) and handed to
//!   the character tokenizer. Every token and error position is mapped back to
//!   the element it came from.
//! - Every **non-text** element becomes a [`Token::Segment`] at its index.
//! - A bracket placeholder (`--preview=[]`) or an empty assignment
//!   (`--preview=`) that ends a text run directly before a non-text element
//!   takes that element as its value.

use argot_core::MessageSegment;
use tracing::{debug, trace};

use crate::config::LexerConfig;
use crate::error::LexResult;
use crate::token::{Position, SegmentRef, Token, Value};
use crate::tokenizer::Tokenizer;

/// One element of a joined text run.
#[derive(Debug, Clone, Copy)]
struct Piece {
    element: usize,
    start: usize,
    len: usize,
}

/// Text elements joined for tokenization.
#[derive(Debug, Default)]
struct TextRun {
    text: String,
    chars: usize,
    pieces: Vec<Piece>,
}

impl TextRun {
    /// Appends a text element. Empty elements add nothing, not even a
    /// separating space.
    fn push(&mut self, element: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        if !self.pieces.is_empty() {
            self.text.push(' ');
            self.chars += 1;
        }
        let len = text.chars().count();
        self.pieces.push(Piece {
            element,
            start: self.chars,
            len,
        });
        self.text.push_str(text);
        self.chars += len;
    }

    /// Maps a character offset in the joined text to its source element.
    ///
    /// Offsets that land on a joining space belong to the element before it.
    fn locate(&self, offset: usize) -> Position {
        match self.pieces.iter().rev().find(|p| p.start <= offset) {
            Some(piece) => Position::new(piece.element, (offset - piece.start).min(piece.len)),
            None => Position::new(0, offset),
        }
    }

    fn first_element(&self) -> usize {
        self.pieces.first().map_or(0, |p| p.element)
    }

    fn ends_with_whitespace(&self) -> bool {
        self.text.chars().next_back().is_some_and(char::is_whitespace)
    }
}

enum Item<'a, S> {
    Run(TextRun),
    Segment(SegmentRef<'a, S>),
}

/// Groups elements into text runs and standalone segments, keeping order.
fn group<S: MessageSegment>(elements: &[S]) -> Vec<Item<'_, S>> {
    let mut items = Vec::new();
    let mut run: Option<TextRun> = None;

    for (index, element) in elements.iter().enumerate() {
        match element.as_text() {
            Some(text) => run.get_or_insert_with(TextRun::default).push(index, text),
            None => {
                if let Some(run) = run.take() {
                    items.push(Item::Run(run));
                }
                items.push(Item::Segment(SegmentRef::new(element, index)));
            }
        }
    }

    if let Some(run) = run {
        items.push(Item::Run(run));
    }

    items
}

/// Turns message elements into one token stream.
pub(crate) struct Splicer<'c> {
    config: &'c LexerConfig,
}

impl<'c> Splicer<'c> {
    pub(crate) fn new(config: &'c LexerConfig) -> Self {
        Self { config }
    }

    pub(crate) fn splice<'a, S: MessageSegment>(
        &self,
        elements: &'a [S],
    ) -> LexResult<Vec<Token<'a, S>>> {
        let mut tokens = Vec::new();
        let mut items = group(elements).into_iter().peekable();

        while let Some(item) = items.next() {
            let run = match item {
                Item::Segment(segment) => {
                    tokens.push(Token::Segment(segment));
                    continue;
                }
                Item::Run(run) => run,
            };

            let run_tokens: Vec<Token<'a, S>> =
                Tokenizer::new(&run.text, |offset| run.locate(offset)).run()?;
            trace!(
                element = run.first_element(),
                tokens = run_tokens.len(),
                "tokenized text run"
            );

            // Only the last token of a run can touch the element that follows.
            let adjacent = match items.peek() {
                Some(Item::Segment(segment))
                    if self.config.allow_placeholder_gap || !run.ends_with_whitespace() =>
                {
                    Some(*segment)
                }
                _ => None,
            };

            let last = run_tokens.len().saturating_sub(1);
            for (index, token) in run_tokens.into_iter().enumerate() {
                let candidate = if index == last { adjacent } else { None };
                let (token, bound) = self.bind(token, candidate);
                if bound {
                    items.next();
                }
                tokens.push(token);
            }
        }

        Ok(tokens)
    }

    /// Binds a placeholder assignment to `adjacent`, if there is one.
    ///
    /// Returns the (possibly rewritten) token and whether `adjacent` was
    /// consumed. An unbound bracket placeholder degrades to a literal word.
    fn bind<'a, S: MessageSegment>(
        &self,
        token: Token<'a, S>,
        adjacent: Option<SegmentRef<'a, S>>,
    ) -> (Token<'a, S>, bool) {
        match token {
            Token::Assignment {
                name,
                value: Value::Word(text),
                position,
            } if self.is_placeholder(&text) => match adjacent {
                Some(segment) => (
                    Token::Assignment {
                        name,
                        value: Value::Segment(segment),
                        position,
                    },
                    true,
                ),
                None if text.is_empty() => (
                    Token::Assignment {
                        name,
                        value: Value::Word(text),
                        position,
                    },
                    false,
                ),
                None => {
                    debug!(%position, option = %name, "placeholder has no adjacent segment, keeping literal text");
                    (
                        Token::Word {
                            text: format!("{name}={text}"),
                            position,
                        },
                        false,
                    )
                }
            },
            other => (other, false),
        }
    }

    fn is_placeholder(&self, text: &str) -> bool {
        text == self.config.placeholder || (text.is_empty() && self.config.bind_empty_assignment)
    }
}
