//! Character-level tokenizer for a single span of text.
//!
//! Handles:
//! - Whitespace-separated words
//! - Double-quoted strings with `\"`, `\\`, `\n`, `\t`, `\r` and `\/` escapes
//! - Short options, alone (`-v`) or clustered (`-xvf`)
//! - Long options (`--verbose`)
//! - Inline assignments (`-p=8080`, `--config=app.json`, `--msg="a b"`)
//!
//! The tokenizer never sees non-text elements; the splicer feeds it one
//! joined text run at a time.

use crate::error::{LexError, LexResult};
use crate::token::{OptionName, Position, Token, Value};

/// Tokenizes a bare string. All positions use element `0`.
pub fn tokenize<'a, S>(text: &str) -> LexResult<Vec<Token<'a, S>>> {
    Tokenizer::new(text, |offset| Position::new(0, offset)).run()
}

/// Resolves the character after a backslash inside quotes.
fn unescape(ch: char) -> Option<char> {
    match ch {
        '"' => Some('"'),
        '\\' => Some('\\'),
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '/' => Some('/'),
        _ => None,
    }
}

/// Scans one text span.
///
/// `locate` maps a character offset inside the span to a [`Position`], which
/// lets the splicer report positions relative to the original elements.
pub(crate) struct Tokenizer<F> {
    chars: Vec<char>,
    cursor: usize,
    locate: F,
}

impl<F> Tokenizer<F>
where
    F: Fn(usize) -> Position,
{
    pub(crate) fn new(text: &str, locate: F) -> Self {
        Self {
            chars: text.chars().collect(),
            cursor: 0,
            locate,
        }
    }

    pub(crate) fn run<'a, S>(mut self) -> LexResult<Vec<Token<'a, S>>> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            let Some(ch) = self.peek() else {
                break;
            };

            match ch {
                '"' => {
                    let position = self.at(self.cursor);
                    let text = self.quoted()?;
                    tokens.push(Token::QuotedString { text, position });
                }
                '=' => {
                    return Err(LexError::MalformedAssignment {
                        position: self.at(self.cursor),
                    });
                }
                '-' if self.peek_at(1) == Some('-') => tokens.push(self.long_option()?),
                '-' if self.peek_at(1).is_some_and(|c| c.is_ascii_alphabetic()) => {
                    self.short_options(&mut tokens)?;
                }
                _ => {
                    let position = self.at(self.cursor);
                    let text = self.word();
                    tokens.push(Token::Word { text, position });
                }
            }
        }

        Ok(tokens)
    }

    fn at(&self, offset: usize) -> Position {
        (self.locate)(offset)
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.cursor + ahead).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.cursor += 1;
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.cursor;
        while self.peek().is_some_and(&pred) {
            self.cursor += 1;
        }
        self.chars[start..self.cursor].iter().collect()
    }

    /// Scans an unquoted run, stopping at whitespace or a quote. May be empty.
    fn word(&mut self) -> String {
        self.take_while(|c| !c.is_whitespace() && c != '"')
    }

    /// Scans a quoted string starting at the opening quote.
    fn quoted(&mut self) -> LexResult<String> {
        let open = self.cursor;
        self.cursor += 1;
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            match ch {
                '"' => {
                    self.cursor += 1;
                    return Ok(text);
                }
                '\\' => {
                    let Some(next) = self.peek_at(1) else {
                        break;
                    };
                    let resolved = unescape(next).ok_or(LexError::InvalidEscapeSequence {
                        position: self.at(self.cursor),
                        sequence: next,
                    })?;
                    text.push(resolved);
                    self.cursor += 2;
                }
                _ => {
                    text.push(ch);
                    self.cursor += 1;
                }
            }
        }

        Err(LexError::QuoteMismatch {
            position: self.at(open),
        })
    }

    /// Scans the text after `=`.
    fn value<'a, S>(&mut self) -> LexResult<Value<'a, S>> {
        if self.peek() == Some('"') {
            Ok(Value::Quoted(self.quoted()?))
        } else {
            Ok(Value::Word(self.word()))
        }
    }

    fn long_option<'a, S>(&mut self) -> LexResult<Token<'a, S>> {
        let start = self.cursor;
        let position = self.at(start);
        self.cursor += 2;
        let name = self.take_while(|c| !c.is_whitespace() && c != '=' && c != '"');

        match self.peek() {
            Some('=') if name.is_empty() => Err(LexError::MalformedAssignment {
                position: self.at(self.cursor),
            }),
            Some('=') => {
                self.cursor += 1;
                let value = self.value()?;
                Ok(Token::Assignment {
                    name: OptionName::Long(name),
                    value,
                    position,
                })
            }
            // A lone `--` carries no name.
            _ if name.is_empty() => Ok(Token::Word {
                text: "--".to_string(),
                position,
            }),
            _ => Ok(Token::LongOption { name, position }),
        }
    }

    fn short_options<'a, S>(&mut self, tokens: &mut Vec<Token<'a, S>>) -> LexResult<()> {
        let start = self.cursor;
        let position = self.at(start);
        self.cursor += 1;
        let letters: Vec<char> = self.take_while(|c| c.is_ascii_alphabetic()).chars().collect();

        match self.peek() {
            Some('=') => {
                let [letter] = letters[..] else {
                    // `-abc=v` could be a cluster or a misspelt long option.
                    return Err(LexError::MalformedAssignment {
                        position: self.at(self.cursor),
                    });
                };
                self.cursor += 1;
                let value = self.value()?;
                tokens.push(Token::Assignment {
                    name: OptionName::Short(letter),
                    value,
                    position,
                });
            }
            // Whatever follows the letters (`-v1`, `-x.y`) starts the next token.
            _ => tokens.extend(cluster(&letters, position)),
        }

        Ok(())
    }
}

fn cluster<'a, S: 'a>(letters: &[char], position: Position) -> impl Iterator<Item = Token<'a, S>> {
    letters
        .iter()
        .map(move |&letter| Token::ShortOption { letter, position })
}
