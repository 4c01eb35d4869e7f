// Forsh: an interactive Forth interpreter

use std::path::Path;

use forsh::console::Console;
use forsh::interpreter::engine::Interpreter;
use forsh::interpreter::errors::Diagnostic;
use forsh::source::Source;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("forsh");
        eprintln!("Usage: {} [script.fs]", program_name);
        eprintln!();
        eprintln!("With no arguments, starts an interactive session.");
        eprintln!("With a script file, interprets it and exits.");
        std::process::exit(1);
    }

    let mut console = Console::stdio();

    if let Some(path) = args.get(1) {
        // Script mode: the file is the primary source and lines are
        // echoed as they are read.
        let source = match Source::from_path(Path::new(path)) {
            Ok(source) => source,
            Err(_) => {
                let diagnostic = Diagnostic::BadLoad { path: path.clone() };
                console.report(diagnostic.tag(), &diagnostic.message());
                std::process::exit(1);
            }
        };
        let mut interpreter = Interpreter::new(source, console);
        interpreter.run();
    } else {
        let mut interpreter = Interpreter::new(Source::interactive(), console);
        interpreter.run();
    }
}
