//! Parsers for structured words
//!
//! Every structured word consumes tokens from the current cursor; when the
//! cursor empties before the terminator is found, the parser pulls another
//! line from the source (without a prompt) and continues.  Nested
//! structured words are parsed to completion before the enclosing
//! terminator is considered, so `IF … IF … THEN … THEN` pairs up from the
//! inside out.  If the source exhausts first, the node comes back with
//! `good = false` and evaluation reports the syntax error.

use crate::console::Console;
use crate::source::Source;

use super::cursor::{CursorWord, DelimScan, ParseCursor};
use super::resolver::{resolve, ResolvedWord, StructuredWord};
use super::words::{Body, BodyElement, WordNode};

/// Parse one structured word, consuming its body from `cursor` (and
/// continuation lines from `source` as needed).
pub fn parse_structured(
    kind: StructuredWord,
    cursor: &mut ParseCursor,
    source: &mut Source,
    console: &mut Console,
) -> WordNode {
    match kind {
        StructuredWord::FString => parse_fstring(cursor, source, console),
        StructuredWord::Comment => parse_comment(cursor, source, console),
        StructuredWord::If => parse_if(cursor, source, console),
        StructuredWord::Do => parse_do(cursor, source, console),
        StructuredWord::Begin => parse_begin(cursor, source, console),
        StructuredWord::WordDef => parse_word_def(cursor, source, console),
        StructuredWord::Variable => WordNode::VariableDef {
            name: parse_name(cursor),
        },
        StructuredWord::Constant => WordNode::ConstantDef {
            name: parse_name(cursor),
        },
        StructuredWord::Load => parse_load(cursor),
    }
}

/// Pull the next word, refilling the cursor from the source when the
/// current line runs out.  `None` means the source is exhausted.
fn next_word(
    cursor: &mut ParseCursor,
    source: &mut Source,
    console: &mut Console,
) -> Option<CursorWord> {
    loop {
        if let Some(word) = cursor.get_word() {
            return Some(word);
        }
        let line = source.read_line(console, false)?;
        cursor.refill(line);
    }
}

/// Accumulate raw text up to a closing delimiter character, joining
/// continuation lines with newlines.  Returns the text and whether the
/// delimiter was found.
fn parse_delimited(
    cursor: &mut ParseCursor,
    source: &mut Source,
    console: &mut Console,
    delimiter: char,
) -> (String, bool) {
    let mut text = String::new();
    loop {
        match cursor.take_until(delimiter) {
            DelimScan::Closed { consumed } => {
                text.push_str(&consumed);
                cursor.trim();
                return (text, true);
            }
            DelimScan::Open { consumed } => {
                text.push_str(&consumed);
                match source.read_line(console, false) {
                    Some(line) => {
                        text.push('\n');
                        cursor.refill(line);
                    }
                    None => return (text, false),
                }
            }
        }
    }
}

fn parse_fstring(
    cursor: &mut ParseCursor,
    source: &mut Source,
    console: &mut Console,
) -> WordNode {
    let (text, good) = parse_delimited(cursor, source, console, '"');
    // The first space after `."` belongs to the keyword, not the string.
    let text = text.strip_prefix(' ').unwrap_or(&text).to_string();
    WordNode::FString { text, good }
}

fn parse_comment(
    cursor: &mut ParseCursor,
    source: &mut Source,
    console: &mut Console,
) -> WordNode {
    let (_, good) = parse_delimited(cursor, source, console, ')');
    WordNode::Comment { good }
}

/// The result of collecting a structured word body.
struct BodyParse {
    body: Body,
    else_body: Option<Body>,
    good: bool,
}

/// Collect body elements until `terminator` at this nesting level.  Nested
/// structured words are parsed recursively into nodes; everything else is
/// stored as a case-folded raw word.  With `allow_else`, an `else` at this
/// level switches accumulation to a second body.
fn parse_body(
    cursor: &mut ParseCursor,
    source: &mut Source,
    console: &mut Console,
    terminator: &str,
    allow_else: bool,
) -> BodyParse {
    let mut body = Body::new();
    let mut else_body: Option<Body> = None;

    loop {
        let word = match next_word(cursor, source, console) {
            Some(word) => word,
            None => {
                return BodyParse {
                    body,
                    else_body,
                    good: false,
                }
            }
        };

        match word {
            CursorWord::Node(node) => {
                let current = else_body.as_mut().unwrap_or(&mut body);
                current.push(BodyElement::Parsed(node));
            }
            CursorWord::Text(written) => {
                let folded = written.to_ascii_lowercase();
                if folded == terminator {
                    return BodyParse {
                        body,
                        else_body,
                        good: true,
                    };
                }
                if allow_else && folded == "else" && else_body.is_none() {
                    else_body = Some(Body::new());
                    continue;
                }
                match resolve(&folded) {
                    Some(ResolvedWord::Structured(kind)) if kind.nests_in_bodies() => {
                        let node = parse_structured(kind, cursor, source, console);
                        let current = else_body.as_mut().unwrap_or(&mut body);
                        current.push(BodyElement::Parsed(node));
                    }
                    _ => {
                        let current = else_body.as_mut().unwrap_or(&mut body);
                        current.push(BodyElement::Raw(folded));
                    }
                }
            }
        }
    }
}

fn parse_if(cursor: &mut ParseCursor, source: &mut Source, console: &mut Console) -> WordNode {
    let parsed = parse_body(cursor, source, console, "then", true);
    WordNode::If {
        true_body: parsed.body,
        false_body: parsed.else_body,
        good: parsed.good,
    }
}

fn parse_do(cursor: &mut ParseCursor, source: &mut Source, console: &mut Console) -> WordNode {
    let parsed = parse_body(cursor, source, console, "loop", false);
    WordNode::Do {
        body: parsed.body,
        good: parsed.good,
    }
}

fn parse_begin(cursor: &mut ParseCursor, source: &mut Source, console: &mut Console) -> WordNode {
    let parsed = parse_body(cursor, source, console, "until", false);
    WordNode::Begin {
        body: parsed.body,
        good: parsed.good,
    }
}

fn parse_word_def(
    cursor: &mut ParseCursor,
    source: &mut Source,
    console: &mut Console,
) -> WordNode {
    let name = match next_word(cursor, source, console) {
        None => {
            return WordNode::WordDef {
                name: None,
                body: Body::new(),
                good: false,
            }
        }
        Some(CursorWord::Node(_)) => None,
        Some(CursorWord::Text(written)) => {
            let folded = written.to_ascii_lowercase();
            if folded == ";" {
                // `: ;` — no name, but the definition is well-delimited;
                // evaluation reports the missing name.
                return WordNode::WordDef {
                    name: None,
                    body: Body::new(),
                    good: true,
                };
            }
            Some(folded)
        }
    };

    let parsed = parse_body(cursor, source, console, ";", false);
    WordNode::WordDef {
        name,
        body: parsed.body,
        good: parsed.good,
    }
}

/// `VARIABLE` and `CONSTANT` take their name from the current line only;
/// a missing name is reported at evaluation time.
fn parse_name(cursor: &mut ParseCursor) -> Option<String> {
    match cursor.get_word() {
        Some(CursorWord::Text(written)) => Some(written.to_ascii_lowercase()),
        _ => None,
    }
}

fn parse_load(cursor: &mut ParseCursor) -> WordNode {
    // Filenames keep their case.
    let path = match cursor.get_word() {
        Some(CursorWord::Text(written)) => Some(written),
        _ => None,
    };
    WordNode::Load { path }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(kind: StructuredWord, line: &str, extra_lines: &str) -> (WordNode, String) {
        let mut cursor = ParseCursor::from_line(line);
        let mut source = Source::from_text(extra_lines);
        let mut console = Console::captured();
        let node = parse_structured(kind, &mut cursor, &mut source, &mut console);
        (node, cursor.rest())
    }

    #[test]
    fn test_fstring_strips_keyword_space_and_trims_remainder() {
        let (node, rest) = parse_one(StructuredWord::FString, " hi there\"  1 2", "");
        assert_eq!(
            node,
            WordNode::FString {
                text: "hi there".to_string(),
                good: true,
            }
        );
        assert_eq!(rest, "1 2");
    }

    #[test]
    fn test_fstring_spans_lines() {
        let (node, _) = parse_one(StructuredWord::FString, " first", "second\" rest");
        assert_eq!(
            node,
            WordNode::FString {
                text: "first\nsecond".to_string(),
                good: true,
            }
        );
    }

    #[test]
    fn test_unterminated_fstring_is_marked_bad() {
        let (node, rest) = parse_one(StructuredWord::FString, " no closing quote", "");
        assert!(matches!(node, WordNode::FString { good: false, .. }));
        assert_eq!(rest, "");
    }

    #[test]
    fn test_comment_consumes_text() {
        let (node, rest) = parse_one(StructuredWord::Comment, " a comment ) dup", "");
        assert_eq!(node, WordNode::Comment { good: true });
        assert_eq!(rest, "dup");
    }

    #[test]
    fn test_if_with_else() {
        let (node, _) = parse_one(StructuredWord::If, " 1 . ELSE 2 . THEN", "");
        match node {
            WordNode::If {
                true_body,
                false_body,
                good,
            } => {
                assert!(good);
                assert_eq!(
                    true_body,
                    vec![
                        BodyElement::Raw("1".to_string()),
                        BodyElement::Raw(".".to_string()),
                    ]
                );
                assert_eq!(
                    false_body,
                    Some(vec![
                        BodyElement::Raw("2".to_string()),
                        BodyElement::Raw(".".to_string()),
                    ])
                );
            }
            other => panic!("Expected If, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_if_matches_inner_terminator_first() {
        let (node, rest) = parse_one(StructuredWord::If, " IF 1 THEN 2 THEN 3", "");
        match node {
            WordNode::If {
                true_body, good, ..
            } => {
                assert!(good);
                assert_eq!(true_body.len(), 2);
                assert!(matches!(
                    true_body[0],
                    BodyElement::Parsed(WordNode::If { .. })
                ));
                assert_eq!(true_body[1], BodyElement::Raw("2".to_string()));
            }
            other => panic!("Expected If, got {:?}", other),
        }
        assert_eq!(rest, " 3");
    }

    #[test]
    fn test_do_spans_lines() {
        let (node, _) = parse_one(StructuredWord::Do, " i .", "loop");
        match node {
            WordNode::Do { body, good } => {
                assert!(good);
                assert_eq!(
                    body,
                    vec![
                        BodyElement::Raw("i".to_string()),
                        BodyElement::Raw(".".to_string()),
                    ]
                );
            }
            other => panic!("Expected Do, got {:?}", other),
        }
    }

    #[test]
    fn test_word_def_parses_nested_string() {
        let (node, _) = parse_one(StructuredWord::WordDef, " greet .\" hello\" CR ;", "");
        match node {
            WordNode::WordDef { name, body, good } => {
                assert!(good);
                assert_eq!(name, Some("greet".to_string()));
                assert_eq!(body.len(), 2);
                assert!(matches!(
                    &body[0],
                    BodyElement::Parsed(WordNode::FString { text, good: true })
                        if text == "hello"
                ));
                assert_eq!(body[1], BodyElement::Raw("cr".to_string()));
            }
            other => panic!("Expected WordDef, got {:?}", other),
        }
    }

    #[test]
    fn test_word_def_keeps_definition_words_raw() {
        let (node, _) = parse_one(StructuredWord::WordDef, " mkvar VARIABLE v ;", "");
        match node {
            WordNode::WordDef { body, good, .. } => {
                assert!(good);
                assert_eq!(
                    body,
                    vec![
                        BodyElement::Raw("variable".to_string()),
                        BodyElement::Raw("v".to_string()),
                    ]
                );
            }
            other => panic!("Expected WordDef, got {:?}", other),
        }
    }

    #[test]
    fn test_unterminated_word_def() {
        let (node, _) = parse_one(StructuredWord::WordDef, " broken dup", "");
        assert!(matches!(node, WordNode::WordDef { good: false, .. }));
    }

    #[test]
    fn test_variable_name_from_current_line_only() {
        let (node, _) = parse_one(StructuredWord::Variable, " counter", "");
        assert_eq!(
            node,
            WordNode::VariableDef {
                name: Some("counter".to_string()),
            }
        );

        let (node, _) = parse_one(StructuredWord::Variable, "", "ignored");
        assert_eq!(node, WordNode::VariableDef { name: None });
    }

    #[test]
    fn test_load_keeps_path_case() {
        let (node, _) = parse_one(StructuredWord::Load, " Setup.fs", "");
        assert_eq!(
            node,
            WordNode::Load {
                path: Some("Setup.fs".to_string()),
            }
        );
    }
}
