// singlish-classify: Classify words as Singlish, foreign or ambiguous.
//
// Reads text from stdin (or the WORD arguments) and prints the label and
// confidence of every word.
//
// Usage:
//   singlish-classify [-c CONFIG] [WORD...]
//
// Options:
//   -c, --config PATH   Engine configuration file (TOML)
//   -h, --help          Print help

use std::io::{self, BufRead, Write};

use singlish_si::TransliteratorHandle;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config_path, args) = singlish_cli::parse_config_path(&args);

    if singlish_cli::wants_help(&args) {
        println!("singlish-classify: Classify words as Singlish, foreign or ambiguous.");
        println!();
        println!("Usage: singlish-classify [-c CONFIG] [WORD...]");
        println!();
        println!("If WORD arguments are given, classifies each word.");
        println!("Otherwise reads text from stdin and classifies every word in it.");
        println!();
        println!("Output: <word>: SINGLISH|FOREIGN|AMBIGUOUS <confidence>");
        println!();
        println!("Options:");
        println!("  -c, --config PATH   Engine configuration file (TOML)");
        println!("  -h, --help          Print this help");
        return;
    }

    singlish_cli::init_logging();

    let words: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let handle = singlish_cli::load_handle(config_path.as_deref())
        .unwrap_or_else(|e| singlish_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let classify_text = |text: &str, handle: &TransliteratorHandle, out: &mut dyn Write| {
        for token in handle.tokens(text).iter().filter(|t| t.is_word()) {
            let class = handle.classify(&token.text);
            let _ = writeln!(
                out,
                "{}: {} {:.2}",
                token.text,
                class.label.label(),
                class.confidence
            );
        }
    };

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            classify_text(&line, &handle, &mut out);
        }
    } else {
        for word in &words {
            classify_text(word, &handle, &mut out);
        }
    }
}
