use std::path::PathBuf;

use clap::Parser;

/// Payloads appended when none are given on the command line.
pub const DEMO_PAYLOADS: [&str; 3] = [
    "First Block after Genesis",
    "Second Block after Genesis",
    "Third Block after Genesis",
];

#[derive(Parser, Debug)]
#[command(
    name = "linkchain",
    about = "Build a fresh hash-linked chain and print every block",
    version
)]
pub struct Cli {
    /// TOML file with chain settings (genesis payload, block limit)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Payload to append; repeat for several blocks. Defaults to the demo sequence
    #[arg(short, long = "payload")]
    pub payloads: Vec<String>,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Payloads to append, falling back to the demo sequence.
    pub fn effective_payloads(&self) -> Vec<String> {
        if self.payloads.is_empty() {
            DEMO_PAYLOADS.iter().map(|p| p.to_string()).collect()
        } else {
            self.payloads.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_runs_demo() {
        let cli = Cli::try_parse_from(["linkchain"]).unwrap();
        assert!(cli.config.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.verbose);
        assert_eq!(cli.effective_payloads(), DEMO_PAYLOADS);
    }

    #[test]
    fn payload_flags_replace_demo() {
        let cli = Cli::try_parse_from(["linkchain", "-p", "a", "--payload", "b", "--format", "json"])
            .unwrap();
        assert_eq!(cli.effective_payloads(), ["a", "b"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["linkchain", "--format", "yaml"]).is_err());
    }
}
