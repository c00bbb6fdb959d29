// singlish-tokenize: Tokenize text from stdin.
//
// Reads text from stdin and prints tokens with their kinds and character
// offsets.
//
// Usage:
//   singlish-tokenize
//
// Options:
//   -h, --help   Print help

use std::io::{self, Read, Write};

use singlish_si::tokenizer::tokenize;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if singlish_cli::wants_help(&args) {
        println!("singlish-tokenize: Tokenize Singlish text.");
        println!();
        println!("Usage: singlish-tokenize");
        println!();
        println!("Reads text from stdin, prints tokens with kinds:");
        println!("  WORD:        <text>");
        println!("  NUMERAL:     <text>");
        println!("  SYMBOL:      <text>");
        println!("  WHITESPACE:  <text>");
        println!("  NEWLINE:     <text>");
        println!();
        println!("Options:");
        println!("  -h, --help   Print this help");
        return;
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| singlish_cli::fatal(&format!("failed to read stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for token in tokenize(&input) {
        let _ = writeln!(
            out,
            "{:11} [{:>4}..{:>4}]: {}",
            token.kind.label(),
            token.pos,
            token.end(),
            singlish_cli::escape_text(&token.text)
        );
    }
}
