//! # Argot Command
//!
//! A hybrid command lexer and parser for chat messages.
//!
//! Chat messages mix plain text with rich elements such as images and
//! mentions. This crate turns such a message into a structured command
//! invocation in three stages:
//!
//! 1. **Tokenizer**: splits text into words, quoted strings, short and long
//!    options, and inline assignments.
//! 2. **Splicer**: walks the message elements, tokenizes each text run and
//!    lifts non-text elements into the same token stream. A placeholder
//!    assignment such as `--preview=[]` right before an image binds that
//!    image as the parameter's value.
//! 3. **Parser**: classifies the tokens into flags, named parameters and
//!    positional elements.
//!
//! ```rust
//! use argot_command::parse_message_command;
//! use argot_core::{RichText, RichTextSegment};
//!
//! let msg = RichText::new()
//!     .text("deploy app --env=prod -v --preview=[]")
//!     .image("shot.png");
//!
//! let cmd = parse_message_command(&msg).unwrap();
//! assert!(cmd.has_option("v"));
//! assert_eq!(cmd.text_param("env"), Some("prod"));
//! assert_eq!(
//!     cmd.segment_param("preview"),
//!     Some(&RichTextSegment::Image("shot.png".into()))
//! );
//! assert_eq!(cmd.positional_texts(), vec!["deploy", "app"]);
//! ```
//!
//! Errors carry the element and character offset they refer to:
//!
//! ```rust
//! use argot_command::{parse_command, LexError, Position};
//!
//! let err = parse_command(r#"deploy "unclosed"#).unwrap_err();
//! assert_eq!(err, LexError::QuoteMismatch { position: Position::new(0, 7) });
//! ```

pub mod config;
pub mod error;
pub mod lexer;
pub mod parsed;
pub mod parser;
mod splice;
pub mod token;
pub mod tokenizer;

pub use config::LexerConfig;
pub use error::{LexError, LexResult};
pub use lexer::CommandLexer;
pub use parsed::{Element, ElementContent, ParamValue, ParsedCommand};
pub use token::{OptionName, Position, SegmentRef, Token, Value, render_tokens};

use argot_core::MessageSegment;

/// Tokenizes plain text.
pub fn tokenize_string(text: &str) -> LexResult<Vec<Token<'static>>> {
    tokenizer::tokenize(text)
}

/// Tokenizes and parses plain text.
pub fn parse_command(text: &str) -> LexResult<ParsedCommand<'static>> {
    Ok(parser::parse(tokenizer::tokenize(text)?))
}

/// Parses a chat message using the default [`LexerConfig`].
///
/// This is the main entry point. The result borrows non-text segments from
/// `elements`.
pub fn parse_message_command<S: MessageSegment>(elements: &[S]) -> LexResult<ParsedCommand<'_, S>> {
    CommandLexer::default().parse_message(elements)
}

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        CommandLexer, Element, LexError, LexerConfig, ParamValue, ParsedCommand, Token,
        parse_command, parse_message_command, tokenize_string,
    };
}
