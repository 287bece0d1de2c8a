use std::{env, fs::read_to_string, process, time::Instant};

use monkey_front::{
    ast::ast::Node,
    display_error,
    lexer::lexer::{tokenize, Lexer},
    parser::parser::Parser,
};
use rustyline::{error::ReadlineError, Editor};

const PROMPT: &str = ">> ";

struct Options {
    tokens_only: bool,
    file: Option<String>,
}

fn parse_args() -> Options {
    let mut options = Options {
        tokens_only: false,
        file: None,
    };

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--tokens" => options.tokens_only = true,
            "-h" | "--help" => {
                println!("usage: monkey_front [--tokens] [FILE]");
                process::exit(0);
            }
            _ if options.file.is_none() => options.file = Some(arg),
            _ => {
                eprintln!("Incorrect arguments provided: unexpected `{}`", arg);
                process::exit(2);
            }
        }
    }

    options
}

fn main() {
    let options = parse_args();

    match &options.file {
        Some(file) => run_file(file, options.tokens_only),
        None => repl(options.tokens_only),
    }
}

fn run_file(file: &str, tokens_only: bool) {
    let source = match read_to_string(file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file, err);
            process::exit(1);
        }
    };

    let start = Instant::now();

    if tokens_only {
        for token in tokenize(&source) {
            println!("{}", token);
        }
        println!("Tokenized in {:?}", start.elapsed());
        return;
    }

    let mut parser = Parser::new(Lexer::new(&source));
    let program = parser.parse_program();

    println!("Parsed in {:?}", start.elapsed());

    if !parser.diagnostics().is_empty() {
        for error in parser.diagnostics() {
            display_error(error);
        }
        process::exit(1);
    }

    for stmt in program.iter() {
        println!("{}", stmt.string());
    }
}

fn repl(tokens_only: bool) {
    let mut rl = Editor::<()>::new();

    loop {
        let line = match rl.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Failed to read line: {}", err);
                break;
            }
        };
        rl.add_history_entry(line.as_str());

        if tokens_only {
            for token in tokenize(&line) {
                println!("{}", token);
            }
            continue;
        }

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse_program();

        if !parser.diagnostics().is_empty() {
            for error in parser.diagnostics() {
                display_error(error);
            }
            continue;
        }

        println!("{}", program.string());
    }
}
