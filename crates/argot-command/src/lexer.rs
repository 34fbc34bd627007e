//! The configurable entry point.

use argot_core::MessageSegment;

use crate::config::LexerConfig;
use crate::error::LexResult;
use crate::parsed::ParsedCommand;
use crate::parser::parse;
use crate::splice::Splicer;
use crate::token::Token;
use crate::tokenizer::tokenize;

/// Tokenizes and parses commands under a [`LexerConfig`].
///
/// A lexer holds no per-call state; one instance can be shared freely
/// across threads.
///
/// # Example
///
/// ```
/// use argot_command::{CommandLexer, LexerConfig};
/// use argot_core::RichText;
///
/// let lexer = CommandLexer::new(LexerConfig {
///     placeholder: "<img>".into(),
///     ..LexerConfig::default()
/// });
///
/// let msg = RichText::new().text("post --cover=<img>").image("cover.png");
/// let cmd = lexer.parse_message(&msg).unwrap();
/// assert!(cmd.segment_param("cover").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandLexer {
    config: LexerConfig,
}

impl CommandLexer {
    /// Creates a lexer with the given placeholder settings.
    pub fn new(config: LexerConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Tokenizes plain text. Positions use element `0`.
    pub fn tokenize_string(&self, text: &str) -> LexResult<Vec<Token<'static>>> {
        tokenize(text)
    }

    /// Tokenizes and parses plain text.
    pub fn parse_command(&self, text: &str) -> LexResult<ParsedCommand<'static>> {
        Ok(parse(self.tokenize_string(text)?))
    }

    /// Tokenizes a sequence of message elements, binding placeholders.
    pub fn tokenize_message<'a, S: MessageSegment>(
        &self,
        elements: &'a [S],
    ) -> LexResult<Vec<Token<'a, S>>> {
        Splicer::new(&self.config).splice(elements)
    }

    /// Tokenizes and parses a sequence of message elements.
    pub fn parse_message<'a, S: MessageSegment>(
        &self,
        elements: &'a [S],
    ) -> LexResult<ParsedCommand<'a, S>> {
        Ok(parse(self.tokenize_message(elements)?))
    }
}
