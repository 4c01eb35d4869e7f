// Output channel handling for the interpreter

use std::io::{self, Write};

use crossterm::style::Stylize;
use crossterm::tty::IsTty;

/// Where console text ends up: the process's real stdio streams, or a pair
/// of in-memory buffers used by tests to assert on output.
#[derive(Debug)]
enum Sink {
    Stdio { color: bool },
    Captured { out: String, err: String },
}

/// The interpreter's output channel.
///
/// Print words (`.`, `EMIT`, `."`) emit text without a trailing newline, so
/// the console tracks two flags: `pending_newline` (some non-newlined output
/// is on the current line) and `pending_space` (the next printed value needs
/// a separating space).  Every print site goes through this struct so the
/// flags stay consistent; diagnostics, prompts, and ordinary output never
/// run together on one line.
#[derive(Debug)]
pub struct Console {
    sink: Sink,
    pending_newline: bool,
    pending_space: bool,
}

impl Console {
    /// A console writing to the real stdout/stderr.  Diagnostic tags are
    /// colored only when stderr is a terminal.
    pub fn stdio() -> Self {
        Console {
            sink: Sink::Stdio {
                color: io::stderr().is_tty(),
            },
            pending_newline: false,
            pending_space: false,
        }
    }

    /// A console recording both channels in memory (the test seam).
    pub fn captured() -> Self {
        Console {
            sink: Sink::Captured {
                out: String::new(),
                err: String::new(),
            },
            pending_newline: false,
            pending_space: false,
        }
    }

    fn write_out(&mut self, text: &str) {
        match &mut self.sink {
            Sink::Stdio { .. } => print!("{}", text),
            Sink::Captured { out, .. } => out.push_str(text),
        }
    }

    fn flush_out(&mut self) {
        if let Sink::Stdio { .. } = self.sink {
            let _ = io::stdout().flush();
        }
    }

    /// Print one value (`.` / `EMIT`): a separating space first when one is
    /// pending, then the text; leaves the line open.
    pub fn print_value(&mut self, text: &str) {
        if self.pending_space {
            self.write_out(" ");
        }
        self.write_out(text);
        self.pending_space = true;
        self.pending_newline = true;
    }

    /// Print string-literal text exactly as parsed (`."`).  Interior
    /// whitespace is the program's own; no separator is added before the
    /// next printed value.
    pub fn print_verbatim(&mut self, text: &str) {
        self.write_out(text);
        self.pending_space = false;
        self.pending_newline = true;
    }

    /// Print a full line (`DUMP`), first closing any open output line.
    pub fn print_line(&mut self, text: &str) {
        if self.pending_newline {
            self.write_out("\n");
        }
        self.write_out(text);
        self.write_out("\n");
        self.pending_newline = false;
        self.pending_space = false;
    }

    /// Emit a newline and reset both flags (`CR`).
    pub fn newline(&mut self) {
        self.write_out("\n");
        self.pending_newline = false;
        self.pending_space = false;
    }

    /// Called when an input line has been fully interpreted: closes the
    /// output line if print words left it open, and resets the flags.
    pub fn finish_line(&mut self) {
        if self.pending_newline {
            self.write_out("\n");
        }
        self.pending_newline = false;
        self.pending_space = false;
        self.flush_out();
    }

    /// Print the interactive prompt without a newline.
    pub fn prompt(&mut self) {
        self.write_out("> ");
        self.flush_out();
    }

    /// Echo a line read from a non-interactive source.
    pub fn echo_line(&mut self, line: &str) {
        self.write_out("> ");
        self.write_out(line);
        self.write_out("\n");
    }

    /// Report a diagnostic on the error channel.  When non-newlined output
    /// is pending the message is prefixed with a newline so it does not run
    /// on the same line as program output.
    pub fn report(&mut self, tag: &str, message: &str) {
        let prefix = if self.pending_newline { "\n" } else { "" };
        self.pending_newline = false;
        match &mut self.sink {
            Sink::Stdio { color } => {
                let _ = io::stdout().flush();
                if *color {
                    eprintln!("{}{} {}", prefix, tag.red(), message);
                } else {
                    eprintln!("{}{} {}", prefix, tag, message);
                }
            }
            Sink::Captured { err, .. } => {
                err.push_str(prefix);
                err.push_str(tag);
                err.push(' ');
                err.push_str(message);
                err.push('\n');
            }
        }
    }

    /// Everything written to the standard channel (captured mode only).
    pub fn output(&self) -> &str {
        match &self.sink {
            Sink::Captured { out, .. } => out,
            Sink::Stdio { .. } => "",
        }
    }

    /// Everything written to the error channel (captured mode only).
    pub fn diagnostics(&self) -> &str {
        match &self.sink {
            Sink::Captured { err, .. } => err,
            Sink::Stdio { .. } => "",
        }
    }
}
