//! # Argot
//!
//! A hybrid command lexer and parser for chat messages that mix plain text
//! with rich elements such as images, mentions and replies.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Message<S>   │────▶│ Splicer   │────▶│ Token stream │────▶│ Parser       │──▶ ParsedCommand
//! │ text + media │     │ (per run  │     │ text tokens  │     │ flags/params │
//! └──────────────┘     │ Tokenizer)│     │ + segments   │     │ /elements    │
//!                      └───────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! - **Core**: the message model (`MessageSegment`, `Message`, `RichText`)
//! - **Command**: tokenizer, splicer, parser and the `ParsedCommand` result
//! - **Runtime**: layered configuration and logging setup
//!
//! ## Quick Start
//!
//! ```rust
//! use argot::prelude::*;
//!
//! let msg = RichText::new()
//!     .text("kick ")
//!     .at("10001")
//!     .text(" --reason=\"flooding the chat\" -q");
//!
//! let cmd = parse_message_command(&msg).unwrap();
//! assert!(cmd.has_option("q"));
//! assert_eq!(cmd.text_param("reason"), Some("flooding the chat"));
//! assert_eq!(cmd.elements()[1].kind(), "at");
//! ```
//!
//! ## Features
//!
//! - `toml-config`: TOML configuration files (default)
//! - `yaml-config`: YAML configuration files
//! - `json-log`: JSON log output

pub use argot_command as command;
pub use argot_core as core;
pub use argot_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use argot::prelude::*;
/// ```
pub mod prelude {
    // Message model
    pub use argot_core::{Message, MessageSegment, RichText, RichTextSegment};

    // Lexing and parsing
    pub use argot_command::{
        CommandLexer, Element, LexError, LexResult, LexerConfig, ParamValue, ParsedCommand,
        Position, Token, parse_command, parse_message_command, render_tokens, tokenize_string,
    };

    // Configuration and logging
    pub use argot_runtime::{ArgotConfig, ConfigLoader, LoggingBuilder, init_from_config};
}
