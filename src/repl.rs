//! The interactive read-eval-print loop.
//!
//! Each line is driven through the full pipeline: lex, parse, evaluate. Parse
//! errors are reported together under a banner; otherwise the program result
//! is printed in its inspection form. The top-level environment persists
//! across lines, so bindings from one line are visible on the next.

use rustyline::{DefaultEditor, error::ReadlineError};

use crate::interpreter::{
    environment::{Env, Environment},
    evaluator::core::eval_program,
    lexer::Lexer,
    parser::core::Parser,
};

/// The input prompt.
pub const PROMPT: &str = "> ";

const MONKEY_BUSINESS: &str = "Woop! We ran into some monkey business here!";

/// Runs the REPL until end of input.
///
/// Ctrl-C cancels the current line and continues; Ctrl-D exits.
///
/// # Errors
/// Returns an error if the line editor cannot be created or reading from the
/// terminal fails.
pub fn start() -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let env = Environment::new();

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&line);
                run_line(&line, &env);
            },
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

/// Parses and evaluates a single line against the persistent environment.
fn run_line(line: &str, env: &Env) {
    let mut parser = Parser::new(Lexer::new(line));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        println!("{MONKEY_BUSINESS}");
        println!(" parser errors:");
        for error in parser.errors() {
            println!("\t{error}");
        }
        return;
    }

    match eval_program(&program, env) {
        Ok(value) => println!("{value}"),
        Err(error) => println!("{error}"),
    }
}
