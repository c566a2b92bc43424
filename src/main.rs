use std::fs;

use clap::Parser;
use monkey::get_result;

/// monkey is a small, dynamically-typed scripting language with first-class
/// functions, closures, arrays, and hashes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells monkey to look at a file instead of inline source text.
    #[arg(short, long)]
    file: bool,

    /// Prints the value of the last evaluated statement once the script
    /// finishes.
    #[arg(short, long)]
    print_result: bool,

    /// Inline source text, or a script path with --file. Starts the
    /// interactive session when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        if let Err(e) = monkey::repl::start() {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &contents);
            std::process::exit(1);
        })
    } else {
        contents
    };

    if let Err(e) = get_result(&script, args.print_result) {
        eprintln!("{e}");
    }
}
