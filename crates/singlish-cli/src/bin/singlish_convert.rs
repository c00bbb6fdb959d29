// singlish-convert: Convert Singlish text to Sinhala script.
//
// Reads text from stdin (or the TEXT arguments) and writes the converted
// text to stdout. Words that cannot be converted safely are kept as written.
//
// Usage:
//   singlish-convert [-c CONFIG] [--explain] [TEXT...]
//
// Options:
//   -c, --config PATH   Engine configuration file (TOML)
//   --explain           Print the decision for every token
//   -h, --help          Print help

use std::io::{self, Read, Write};

use singlish_si::policy::{ConversionReport, Disposition};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config_path, args) = singlish_cli::parse_config_path(&args);

    if singlish_cli::wants_help(&args) {
        println!("singlish-convert: Convert Singlish text to Sinhala script.");
        println!();
        println!("Usage: singlish-convert [-c CONFIG] [--explain] [TEXT...]");
        println!();
        println!("If TEXT arguments are given, converts them joined by spaces.");
        println!("Otherwise reads text from stdin.");
        println!();
        println!("Options:");
        println!("  -c, --config PATH   Engine configuration file (TOML)");
        println!("  --explain           Print the decision for every token");
        println!("  -h, --help          Print this help");
        println!();
        println!("Environment:");
        println!("  SINGLISH_CONFIG     Configuration file used when --config is absent");
        println!("  SINGLISH_LOG        Log filter, e.g. debug (default: warn)");
        return;
    }

    singlish_cli::init_logging();

    let explain = args.iter().any(|a| a == "--explain");
    let words: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let handle = singlish_cli::load_handle(config_path.as_deref())
        .unwrap_or_else(|e| singlish_cli::fatal(&e));

    let input = if words.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .unwrap_or_else(|e| singlish_cli::fatal(&format!("failed to read stdin: {e}")));
        input
    } else {
        words.join(" ")
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if explain {
        print_report(&mut out, &handle.convert_detailed(&input));
    } else {
        let result = handle.convert(&input);
        let _ = out.write_all(result.output_text.as_bytes());
        if !words.is_empty() {
            let _ = writeln!(out);
        }
    }
}

fn print_report(out: &mut impl Write, report: &ConversionReport) {
    for outcome in &report.outcomes {
        let token = &outcome.token;
        let decision = match outcome.disposition {
            Disposition::Verbatim => "verbatim".to_string(),
            Disposition::Transliterated => "transliterated".to_string(),
            Disposition::PassThrough(reason) => format!("pass-through ({})", reason.label()),
        };
        let class = outcome
            .classification
            .map(|c| format!("{} {:.2}", c.label.label(), c.confidence))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{:10} [{:>4}..{:>4}] {decision:30} {class:14} {} -> {}",
            token.kind.label(),
            token.pos,
            token.end(),
            singlish_cli::escape_text(&token.text),
            singlish_cli::escape_text(&outcome.output),
        );
    }
    let _ = writeln!(out, "passthrough: {}", report.result.passthrough_count);
}
