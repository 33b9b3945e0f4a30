//! Source parser for the `replies_raw` file.
//!
//! # File Format
//!
//! Each entry is started with a line beginning with the numeric code of the
//! reply, followed by its mnemonic:
//!
//! ```text
//! 001 RPL_WELCOME
//! ```
//!
//! Non-empty lines after the header are the example of the reply. Backslashes
//! in these lines are removed.
//!
//! Lines starting with `-` are the description of the reply. Once the
//! description is started, every line (empty or not) is part of it until the
//! next header.

use crate::Reply;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};


#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("cannot read source: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: expected reply, found {content:?}")]
    ExpectedReply { line: usize, content: String },

    #[error("line {line}: reply code {digits} is out of range")]
    CodeOutOfRange { line: usize, digits: String },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    AwaitHeader,
    InExample,
    InDescription,
}

#[derive(Copy, Clone, Debug)]
enum Field {
    Example,
    Description,
}

/// Line-by-line parser for the source file.
///
/// The current reply is always the last one in `replies`.
pub struct Parser {
    state: State,
    replies: Vec<Reply>,
    line: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            state: State::AwaitHeader,
            replies: Vec::new(),
            line: 0,
        }
    }

    /// Process a single line of the source file.
    ///
    /// When a line changes the state it is evaluated again with the new
    /// state, so a single line can trigger multiple transitions.
    pub fn push_line(&mut self, line: &str) -> Result<(), ParseError> {
        self.line += 1;

        let trimmed = line.trim_start();
        let first_char = trimmed.chars().next();
        let numeric = first_char.map_or(false, |c| c.is_ascii_digit());

        loop {
            match self.state {
                State::AwaitHeader => {
                    if line.is_empty() {
                        return Ok(());
                    }

                    if !numeric {
                        return Err(ParseError::ExpectedReply {
                            line: self.line,
                            content: line.to_owned(),
                        });
                    }

                    let reply = parse_header(self.line, trimmed)?;
                    self.replies.push(reply);
                    self.transition(State::InExample);
                    return Ok(());
                }

                State::InExample => {
                    if line.is_empty() {
                        return Ok(());
                    }

                    if numeric {
                        self.transition(State::AwaitHeader);
                        continue;
                    }

                    if first_char == Some('-') {
                        self.transition(State::InDescription);
                        continue;
                    }

                    self.append(Field::Example, &trimmed.replace('\\', ""));
                    return Ok(());
                }

                State::InDescription => {
                    if numeric {
                        self.transition(State::AwaitHeader);
                        continue;
                    }

                    let text = if first_char == Some('-') {
                        skip_chars(trimmed, 2)
                    } else {
                        trimmed
                    };

                    self.append(Field::Description, text);
                    self.append(Field::Description, "\n");
                    return Ok(());
                }
            }
        }
    }

    /// Complete the parser and return the replies found in the source.
    ///
    /// The last two characters of every description are removed.
    pub fn finish(mut self) -> Vec<Reply> {
        for reply in &mut self.replies {
            truncate_description(reply);
        }

        self.replies
    }

    fn transition(&mut self, state: State) {
        debug!(line = self.line, from = ?self.state, to = ?state, "state transition");
        self.state = state;
    }

    fn append(&mut self, field: Field, text: &str) {
        if let Some(reply) = self.replies.last_mut() {
            let value = match field {
                Field::Example => &mut reply.example,
                Field::Description => &mut reply.description,
            };

            value.get_or_insert_with(String::new).push_str(text);
        }
    }
}

/// Parse the replies in a string.
pub fn parse_str(input: &str) -> Result<Vec<Reply>, ParseError> {
    let mut parser = Parser::new();

    for line in input.split('\n') {
        parser.push_line(line)?;
    }

    Ok(parser.finish())
}

/// Read the `replies_raw` file and extract the replies.
pub fn parse_replies<T: AsRef<Path>>(source: T) -> Result<Vec<Reply>, ParseError> {
    let input = fs::read_to_string(source)?;
    parse_str(&input)
}

/// Extract code and mnemonic from a header line.
///
/// The digits are removed from the mnemonic only if they are followed by
/// at least one space.
fn parse_header(line: usize, trimmed: &str) -> Result<Reply, ParseError> {
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or_else(|| trimmed.len());

    let (digits, rest) = trimmed.split_at(digits_end);

    let code = digits.parse().map_err(|_| ParseError::CodeOutOfRange {
        line,
        digits: digits.to_owned(),
    })?;

    let name = rest.trim_start_matches(' ');
    let mnemonic = if name.len() < rest.len() { name } else { trimmed };

    Ok(Reply::new(code, mnemonic))
}

fn skip_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((idx, _)) => &text[idx..],
        None => "",
    }
}

fn truncate_description(reply: &mut Reply) {
    if let Some(description) = &mut reply.description {
        let end = description.char_indices().rev().nth(1).map(|(idx, _)| idx);

        match end {
            Some(idx) => description.truncate(idx),

            None => {
                warn!(
                    code = reply.code,
                    mnemonic = %reply.mnemonic,
                    length = description.len(),
                    "description shorter than two characters"
                );
                description.clear();
            }
        }
    }
}
