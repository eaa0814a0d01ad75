//! Command-line surface for bessie.

pub mod console;

use std::path::PathBuf;

use clap::Parser;

pub use console::Console;

/// Bessie is a programming assistant
#[derive(Parser, Debug)]
#[command(name = "bessie", version, about)]
pub struct Cli {
    /// A programming request in natural language
    pub request: String,

    /// Globs of files relevant to the request
    #[arg(required = true, num_args(1..))]
    pub patterns: Vec<String>,

    /// Root directory for glob expansion
    #[arg(long, default_value = ".")]
    pub basedir: PathBuf,

    /// Chat model to use
    #[arg(long, default_value = "gpt-4")]
    pub model: String,

    /// File the model response is written to
    #[arg(long, default_value = "bessie.md")]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_request_and_patterns() {
        let cli = Cli::try_parse_from(["bessie", "fix the bug", "src/*.rs", "Cargo.toml"])
            .expect("valid invocation");

        assert_eq!(cli.request, "fix the bug");
        assert_eq!(cli.patterns, vec!["src/*.rs", "Cargo.toml"]);
        assert_eq!(cli.basedir, PathBuf::from("."));
        assert_eq!(cli.model, "gpt-4");
        assert_eq!(cli.output, PathBuf::from("bessie.md"));
    }

    #[test]
    fn zero_patterns_is_a_usage_error() {
        let result = Cli::try_parse_from(["bessie", "fix the bug"]);
        assert!(result.is_err());
    }

    #[test]
    fn output_flag_overrides_the_default() {
        let cli = Cli::try_parse_from([
            "bessie",
            "--output",
            "custom.md",
            "--model",
            "claude-sonnet-4-5",
            "fix the bug",
            "*.rs",
        ])
        .expect("valid invocation");

        assert_eq!(cli.output, PathBuf::from("custom.md"));
        assert_eq!(cli.model, "claude-sonnet-4-5");
    }
}
