// decltree: recursive-descent parser and AST listing for a minimal
// declaration language

use std::fs;
use std::path::Path;
use std::process;

use decltree::parser::parse::Parser;
use decltree::printer;

fn main() {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        let program_name = args.get(0).map(|s| s.as_str()).unwrap_or("decltree");
        eprintln!("Error: expected exactly one input file");
        eprintln!();
        eprintln!("Usage: {} <file>", program_name);
        process::exit(1);
    }

    let input_file = &args[1];

    if !Path::new(input_file).exists() {
        eprintln!("Error: File '{}' not found", input_file);
        process::exit(1);
    }

    // Read source code
    let source = match fs::read_to_string(input_file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Could not read '{}': {}", input_file, e);
            process::exit(1);
        }
    };

    // Parse the source code
    let mut parser = match Parser::new(&source) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("Parser error: {}", e);
            process::exit(1);
        }
    };

    let program = match parser.parse_program() {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Parser error: {}", e);
            process::exit(1);
        }
    };

    // Print the syntax tree
    printer::print(&program);
}
