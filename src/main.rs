// minicc: syntax checker for Mini-C source files

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use minicc::parser::Parser;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("minicc");
        eprintln!("Usage: {} <file>", program_name);
        return ExitCode::FAILURE;
    }

    let file = &args[1];

    if !Path::new(file).exists() {
        eprintln!("Error: file '{}' not found", file);
        return ExitCode::FAILURE;
    }

    let source = match fs::read_to_string(file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading '{}': {}", file, e);
            return ExitCode::FAILURE;
        }
    };

    let mut parser = match Parser::new(&source) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match parser.parse_program() {
        Ok(program) => {
            println!(
                "{}: syntax OK ({} top-level declarations)",
                file,
                program.nodes.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
