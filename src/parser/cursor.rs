//! Parse cursor and word extraction
//!
//! A [`ParseCursor`] holds the unread remainder of the current input,
//! consumed left to right by [`ParseCursor::get_word`].  Two backings
//! exist: a plain text line, and a stored word body whose elements may be
//! raw words or already-parsed nodes (user-word bodies are re-interpreted
//! through the same cursor interface as fresh input).

use std::collections::VecDeque;

use super::words::{Body, BodyElement, WordNode};

/// One item pulled from a cursor: a written word, or a node that was
/// parsed when the enclosing body was defined.
#[derive(Debug, Clone, PartialEq)]
pub enum CursorWord {
    Text(String),
    Node(WordNode),
}

/// Result of scanning for a delimiter character ([`ParseCursor::take_until`]).
#[derive(Debug, Clone, PartialEq)]
pub enum DelimScan {
    /// The delimiter was found; `consumed` is everything before it.
    Closed { consumed: String },
    /// The cursor ran out first; `consumed` is the whole remainder.
    Open { consumed: String },
}

#[derive(Debug, Clone)]
enum State {
    Line(String),
    Body(VecDeque<BodyElement>),
}

/// The mutable remainder of the current input.
#[derive(Debug, Clone)]
pub struct ParseCursor {
    state: State,
}

impl ParseCursor {
    pub fn from_line(line: &str) -> Self {
        ParseCursor {
            state: State::Line(line.to_string()),
        }
    }

    pub fn from_body(body: &Body) -> Self {
        ParseCursor {
            state: State::Body(body.iter().cloned().collect()),
        }
    }

    /// Remove and return the next word.
    ///
    /// On a text line this strips one leading space if present, then takes
    /// the longest leading run of non-whitespace; if no such run exists
    /// the cursor is emptied and `None` is returned.  Trailing whitespace
    /// after the word is never consumed, so structured words like `."`
    /// still see the whitespace that follows their delimiter.
    pub fn get_word(&mut self) -> Option<CursorWord> {
        match &mut self.state {
            State::Line(text) => {
                let rest = std::mem::take(text);
                let rest = rest.strip_prefix(' ').unwrap_or(&rest);
                let end = rest
                    .char_indices()
                    .find(|(_, c)| c.is_whitespace())
                    .map(|(i, _)| i)
                    .unwrap_or(rest.len());
                if end == 0 {
                    return None;
                }
                let word = rest[..end].to_string();
                *text = rest[end..].to_string();
                Some(CursorWord::Text(word))
            }
            State::Body(elements) => match elements.pop_front()? {
                BodyElement::Raw(word) => Some(CursorWord::Text(word)),
                BodyElement::Parsed(node) => Some(CursorWord::Node(node)),
            },
        }
    }

    /// Consume raw input up to the first occurrence of `delimiter`,
    /// preserving interior whitespace exactly.  Used by `."` and `(`.
    pub fn take_until(&mut self, delimiter: char) -> DelimScan {
        match &mut self.state {
            State::Line(text) => match text.find(delimiter) {
                Some(pos) => {
                    let consumed = text[..pos].to_string();
                    let rest = text[pos + delimiter.len_utf8()..].to_string();
                    *text = rest;
                    DelimScan::Closed { consumed }
                }
                None => DelimScan::Open {
                    consumed: std::mem::take(text),
                },
            },
            State::Body(elements) => {
                let mut consumed = String::new();
                while let Some(element) = elements.pop_front() {
                    let word = match element {
                        BodyElement::Raw(word) => word,
                        BodyElement::Parsed(_) => continue,
                    };
                    if let Some(pos) = word.find(delimiter) {
                        if !consumed.is_empty() {
                            consumed.push(' ');
                        }
                        consumed.push_str(&word[..pos]);
                        let rest = &word[pos + delimiter.len_utf8()..];
                        if !rest.is_empty() {
                            elements.push_front(BodyElement::Raw(rest.to_string()));
                        }
                        return DelimScan::Closed { consumed };
                    }
                    if !consumed.is_empty() {
                        consumed.push(' ');
                    }
                    consumed.push_str(&word);
                }
                DelimScan::Open { consumed }
            }
        }
    }

    /// Replace an exhausted cursor with a fresh continuation line.
    pub fn refill(&mut self, line: String) {
        self.state = State::Line(line);
    }

    /// Trim surrounding whitespace from a text remainder (applied after a
    /// delimiter scan closes).
    pub fn trim(&mut self) {
        if let State::Line(text) = &mut self.state {
            let trimmed = text.trim().to_string();
            *text = trimmed;
        }
    }

    /// The unread remainder as text (empty for body cursors); test aid.
    pub fn rest(&self) -> String {
        match &self.state {
            State::Line(text) => text.clone(),
            State::Body(_) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<String> {
        let mut cursor = ParseCursor::from_line(line);
        let mut out = Vec::new();
        while let Some(CursorWord::Text(word)) = cursor.get_word() {
            out.push(word);
        }
        out
    }

    #[test]
    fn test_simple_words() {
        assert_eq!(words("1 2 + ."), vec!["1", "2", "+", "."]);
    }

    #[test]
    fn test_trailing_whitespace_not_consumed() {
        let mut cursor = ParseCursor::from_line(".\" hi \"");
        assert_eq!(
            cursor.get_word(),
            Some(CursorWord::Text(".\"".to_string()))
        );
        // The space after `."` is still there for the string parser.
        assert_eq!(cursor.rest(), " hi \"");
    }

    #[test]
    fn test_empty_line() {
        let mut cursor = ParseCursor::from_line("");
        assert_eq!(cursor.get_word(), None);
    }

    #[test]
    fn test_whitespace_only_empties_cursor() {
        let mut cursor = ParseCursor::from_line("   ");
        assert_eq!(cursor.get_word(), None);
        assert_eq!(cursor.rest(), "");
    }

    #[test]
    fn test_take_until_closed() {
        let mut cursor = ParseCursor::from_line(" hi there\" 1 2");
        match cursor.take_until('"') {
            DelimScan::Closed { consumed } => assert_eq!(consumed, " hi there"),
            other => panic!("Expected Closed, got {:?}", other),
        }
        cursor.trim();
        assert_eq!(cursor.rest(), "1 2");
    }

    #[test]
    fn test_take_until_open() {
        let mut cursor = ParseCursor::from_line("no delimiter here");
        match cursor.take_until('"') {
            DelimScan::Open { consumed } => assert_eq!(consumed, "no delimiter here"),
            other => panic!("Expected Open, got {:?}", other),
        }
        assert_eq!(cursor.get_word(), None);
    }

    #[test]
    fn test_body_cursor_yields_nodes() {
        use crate::parser::words::WordNode;

        let body = vec![
            BodyElement::Raw("dup".to_string()),
            BodyElement::Parsed(WordNode::Comment { good: true }),
        ];
        let mut cursor = ParseCursor::from_body(&body);

        assert_eq!(
            cursor.get_word(),
            Some(CursorWord::Text("dup".to_string()))
        );
        assert_eq!(
            cursor.get_word(),
            Some(CursorWord::Node(WordNode::Comment { good: true }))
        );
        assert_eq!(cursor.get_word(), None);
    }
}
