//! Command grammar: classifies a token sequence into flags, named parameters
//! and positional elements.

use std::collections::{HashMap, HashSet};

use argot_core::MessageSegment;
use tracing::trace;

use crate::parsed::{Element, ParamValue, ParsedCommand};
use crate::token::{Token, Value};

/// Classifies `tokens` left to right.
///
/// - `ShortOption` / `LongOption` → `options[name] = true`
/// - `Assignment` → `named_params[name] = value`
/// - `Word`, `QuotedString`, `Segment` → appended to `elements`
///
/// A repeated flag or parameter keeps its last occurrence. A name that is
/// assigned anywhere in the sequence is a named parameter only; its bare
/// flag occurrences are dropped.
///
/// Never fails: malformed syntax is rejected by the tokenizer.
pub fn parse<'a, S: MessageSegment>(tokens: Vec<Token<'a, S>>) -> ParsedCommand<'a, S> {
    let assigned: HashSet<String> = tokens
        .iter()
        .filter_map(|token| match token {
            Token::Assignment { name, .. } => Some(name.key()),
            _ => None,
        })
        .collect();

    let mut options = HashMap::new();
    let mut named_params = HashMap::new();
    let mut elements = Vec::new();

    let mut flag = |name: String| {
        if !assigned.contains(&name) {
            options.insert(name, true);
        }
    };

    for token in &tokens {
        match token {
            Token::ShortOption { letter, .. } => flag(letter.to_string()),
            Token::LongOption { name, .. } => flag(name.clone()),
            Token::Assignment { name, value, .. } => {
                named_params.insert(name.key(), resolve(value));
            }
            Token::Word { text, position } => {
                elements.push(Element::text(text.clone(), elements.len(), *position));
            }
            Token::QuotedString { text, position } => {
                elements.push(Element::quoted(text.clone(), elements.len(), *position));
            }
            Token::Segment(segment) => {
                elements.push(Element::segment(*segment, elements.len()));
            }
        }
    }

    trace!(
        tokens = tokens.len(),
        options = options.len(),
        params = named_params.len(),
        elements = elements.len(),
        "classified command tokens"
    );

    ParsedCommand::new(options, named_params, elements, tokens)
}

fn resolve<'a, S: MessageSegment>(value: &Value<'a, S>) -> ParamValue<'a, S> {
    match value {
        Value::Word(text) | Value::Quoted(text) => ParamValue::Text(text.clone()),
        Value::Segment(segment) => ParamValue::Segment(segment.segment()),
    }
}
