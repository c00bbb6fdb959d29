// singlish-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;
use std::sync::Once;

use singlish_si::{EngineConfig, TransliteratorHandle};
use tracing_subscriber::EnvFilter;

/// Environment variable naming a configuration file.
const CONFIG_ENV: &str = "SINGLISH_CONFIG";

/// Environment variable holding the log filter.
const LOG_ENV: &str = "SINGLISH_LOG";

/// Configuration file location under the user's home directory.
const USER_CONFIG: &str = ".config/singlish/config.toml";

static LOG_INIT: Once = Once::new();

/// Install a stderr log subscriber filtered by `SINGLISH_LOG` (default
/// `warn`).
pub fn init_logging() {
    LOG_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_env_filter(
                EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .init();
    });
}

/// Find the configuration and create a TransliteratorHandle.
///
/// Search order:
/// 1. `config_path` argument (if provided; must exist)
/// 2. `SINGLISH_CONFIG` environment variable (must exist)
/// 3. `~/.config/singlish/config.toml` (if present)
/// 4. Built-in defaults
pub fn load_handle(config_path: Option<&str>) -> Result<TransliteratorHandle, String> {
    let config = match find_config_file(config_path) {
        Some(path) => EngineConfig::from_path(&path)
            .map_err(|e| format!("failed to load configuration: {e}"))?,
        None => EngineConfig::default(),
    };
    TransliteratorHandle::new(config, "si")
        .map_err(|e| format!("failed to create TransliteratorHandle: {e}"))
}

/// Pick the configuration file to load, if any.
///
/// An explicit path is returned even if it does not exist, so that a typo
/// surfaces as an error instead of silently falling back to defaults.
fn find_config_file(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(p) = config_path {
        return Some(PathBuf::from(p));
    }
    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }
    home_dir()
        .map(|home| home.join(USER_CONFIG))
        .filter(|p| p.is_file())
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--config=PATH`, `--config PATH` or `-c PATH` argument.
///
/// Returns `(config_path, remaining_args)`.
pub fn parse_config_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut config_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--config=") {
            config_path = Some(val.to_string());
        } else if arg == "--config" || arg == "-c" {
            if i + 1 < args.len() {
                config_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (config_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Make control whitespace visible in one-line listings.
pub fn escape_text(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_config_forms() {
        let (path, rest) = parse_config_path(&strings(&["--config=a.toml", "--explain"]));
        assert_eq!(path.as_deref(), Some("a.toml"));
        assert_eq!(rest, strings(&["--explain"]));

        let (path, rest) = parse_config_path(&strings(&["-c", "b.toml", "eka"]));
        assert_eq!(path.as_deref(), Some("b.toml"));
        assert_eq!(rest, strings(&["eka"]));

        let (path, rest) = parse_config_path(&strings(&["oya"]));
        assert_eq!(path, None);
        assert_eq!(rest, strings(&["oya"]));
    }

    #[test]
    fn explicit_config_path_wins() {
        assert_eq!(
            find_config_file(Some("/tmp/x.toml")),
            Some(PathBuf::from("/tmp/x.toml"))
        );
    }

    #[test]
    fn missing_explicit_config_is_error() {
        let err = load_handle(Some("/nonexistent/singlish.toml")).unwrap_err();
        assert!(err.starts_with("failed to load configuration"));
    }

    #[test]
    fn help_flag() {
        assert!(wants_help(&strings(&["-h"])));
        assert!(wants_help(&strings(&["x", "--help"])));
        assert!(!wants_help(&strings(&["--explain"])));
    }

    #[test]
    fn escapes_control_whitespace() {
        assert_eq!(escape_text("a\r\n\tb"), "a\\r\\n\\tb");
    }
}
