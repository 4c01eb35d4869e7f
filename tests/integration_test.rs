// End-to-end tests for the interpreter

use forsh::console::Console;
use forsh::interpreter::engine::Interpreter;
use forsh::memory::Cell;
use forsh::source::Source;

/// Run a program through an in-memory source and a capturing console,
/// returning the final stack, stdout, and stderr.
fn run_program(program: &str) -> (Vec<Cell>, String, String) {
    let mut interpreter = Interpreter::new(Source::from_text(program), Console::captured());
    interpreter.run();
    let stack = interpreter.stack().to_vec();
    let output = interpreter.console().output().to_string();
    let diagnostics = interpreter.console().diagnostics().to_string();
    (stack, output, diagnostics)
}

#[test]
fn test_arithmetic_chain() {
    let (stack, output, diagnostics) = run_program("1 2 + 4 - 3 * -1 /");

    assert_eq!(stack, vec![3]);
    assert_eq!(output, "");
    assert_eq!(diagnostics, "");
}

#[test]
fn test_comparisons_push_truth_cells() {
    let (stack, _, diagnostics) = run_program("1 2 < 1 2 > 1 2 = 1 1 =");

    assert_eq!(stack, vec![-1, 0, 0, -1]);
    assert_eq!(diagnostics, "");
}

#[test]
fn test_print_words_and_dump() {
    let (stack, output, diagnostics) = run_program("4 5 6 . . DUMP .");

    assert_eq!(stack, Vec::<Cell>::new());
    assert_eq!(output, "6 5\n[4]\n4\n");
    assert_eq!(diagnostics, "");
}

#[test]
fn test_recursive_factorial() {
    let (stack, _, diagnostics) =
        run_program(": fac DUP 1 > IF DUP 1 - fac * ELSE DROP 1 THEN ; 5 fac");

    assert_eq!(stack, vec![120]);
    assert_eq!(diagnostics, "");
}

#[test]
fn test_do_loop_prints_string() {
    let (stack, output, diagnostics) = run_program(r#"3 0 DO ." hi " LOOP"#);

    assert_eq!(stack, Vec::<Cell>::new());
    assert_eq!(output, "hi hi hi \n");
    assert_eq!(diagnostics, "");
}

#[test]
fn test_variable_store_fetch() {
    let (stack, _, diagnostics) = run_program("VARIABLE X 100 X ! X @");

    assert_eq!(stack, vec![100]);
    assert_eq!(diagnostics, "");
}

#[test]
fn test_unknown_word_reports_and_halts() {
    let (stack, output, diagnostics) = run_program("NOTAWORD");

    assert_eq!(stack, Vec::<Cell>::new());
    assert_eq!(output, "");
    assert_eq!(diagnostics, "[BAD WORD] Unknown word 'NOTAWORD'\n");
}

#[test]
fn test_unknown_word_halts_rest_of_line() {
    // The 3 after the unknown word must not be pushed; the next line
    // still interprets.
    let (stack, _, diagnostics) = run_program("1 2 NOTAWORD 3\n4");

    assert_eq!(stack, vec![1, 2, 4]);
    assert_eq!(diagnostics.matches("[BAD WORD]").count(), 1);
}

#[test]
fn test_quit_stops_the_session() {
    let (stack, _, _) = run_program("1 2\nQuit\n3");

    assert_eq!(stack, vec![1, 2]);
}

#[test]
fn test_diagnostic_after_pending_output_gets_own_line() {
    let (stack, output, diagnostics) = run_program("1 . NOTAWORD");

    assert_eq!(stack, Vec::<Cell>::new());
    // The pending `.` output never got its newline from the interpreter;
    // the diagnostic supplies one on the error channel instead.
    assert_eq!(output, "1");
    assert_eq!(diagnostics, "\n[BAD WORD] Unknown word 'NOTAWORD'\n");
}

#[test]
fn test_multi_line_string_round_trips() {
    let (stack, output, diagnostics) = run_program("1 .\" hello\nworld\" .");

    assert_eq!(stack, Vec::<Cell>::new());
    assert_eq!(output, "hello\nworld1\n");
    assert_eq!(diagnostics, "");
}

#[test]
fn test_multi_line_definition() {
    let (stack, _, diagnostics) = run_program(": add2\n1 +\n1 + ;\n5 add2");

    assert_eq!(stack, vec![7]);
    assert_eq!(diagnostics, "");
}

#[test]
fn test_load_runs_script_and_echoes_lines() {
    let (stack, output, diagnostics) = run_program(":: demos/squares.fs");

    assert_eq!(stack, Vec::<Cell>::new());
    assert!(output.contains("> 5 0 DO I I * . LOOP"));
    assert!(output.contains("0 1 4 9 16"));
    assert_eq!(diagnostics, "");
}

#[test]
fn test_load_missing_file() {
    let (_, _, diagnostics) = run_program(":: no/such/file.fs");

    assert_eq!(
        diagnostics,
        "[BAD LOAD] File 'no/such/file.fs' not found\n"
    );
}
