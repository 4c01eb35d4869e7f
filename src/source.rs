// Line-oriented input sources for the interpreter

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crossterm::tty::IsTty;

use crate::console::Console;

#[derive(Debug)]
enum Reader {
    /// Standard input.  `tty` decides between prompting (interactive) and
    /// echoing (piped input behaves like a script file).
    Stdin { tty: bool },
    /// A script file; every line read is echoed as `> <line>`.
    File { reader: BufReader<File> },
    /// In-memory lines with no prompt and no echo; used by tests.
    Lines { lines: VecDeque<String> },
}

/// A line-oriented text input.
///
/// The source owns its underlying handle; dropping it (as `load` does when
/// restoring the previous source) closes the file.
#[derive(Debug)]
pub struct Source {
    reader: Reader,
}

impl Source {
    /// A source reading from standard input.  When stdin is not a terminal
    /// the source behaves like a script file and echoes each line.
    pub fn interactive() -> Source {
        Source {
            reader: Reader::Stdin {
                tty: io::stdin().is_tty(),
            },
        }
    }

    /// A source reading from a script file.
    pub fn from_path(path: &Path) -> io::Result<Source> {
        let file = File::open(path)?;
        Ok(Source {
            reader: Reader::File {
                reader: BufReader::new(file),
            },
        })
    }

    /// A source over in-memory text, one entry per line.
    pub fn from_text(text: &str) -> Source {
        Source {
            reader: Reader::Lines {
                lines: text.lines().map(|l| l.to_string()).collect(),
            },
        }
    }

    /// Read one logical line, or `None` at end of input.
    ///
    /// Interactive sources print `"> "` first when `prompt` is set; file
    /// and piped sources echo `"> <line>"` after reading, regardless of
    /// `prompt`, so scripted sessions read like interactive ones.
    pub fn read_line(&mut self, console: &mut Console, prompt: bool) -> Option<String> {
        match &mut self.reader {
            Reader::Stdin { tty } => {
                if *tty && prompt {
                    console.prompt();
                }
                let mut buf = String::new();
                let read = io::stdin().read_line(&mut buf).ok()?;
                if read == 0 {
                    return None;
                }
                let line = strip_line_ending(buf);
                if !*tty {
                    console.echo_line(&line);
                }
                Some(line)
            }
            Reader::File { reader } => {
                let mut buf = String::new();
                let read = reader.read_line(&mut buf).ok()?;
                if read == 0 {
                    return None;
                }
                let line = strip_line_ending(buf);
                console.echo_line(&line);
                Some(line)
            }
            Reader::Lines { lines } => lines.pop_front(),
        }
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
