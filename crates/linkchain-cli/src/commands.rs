use anyhow::Context;
use colored::Colorize;
use linkchain_ledger::{Chain, ChainConfig, ChainValidator, JsonDump, TextDump};

use crate::cli::{Cli, OutputFormat};

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let chain = build_chain(&cli)?;

    let report = ChainValidator::validate(&chain)?;
    if !report.is_valid() {
        for v in &report.violations {
            eprintln!("  {} block {}: {}", "✗".red(), v.index, v.description);
        }
        anyhow::bail!("chain failed integrity validation");
    }

    match cli.format {
        OutputFormat::Text => print!("{}", TextDump::new(chain.blocks())),
        OutputFormat::Json => println!("{}", JsonDump::render(chain.blocks())?),
    }

    eprintln!(
        "{} Chain integrity verified: {} blocks, tail {}",
        "✓".green().bold(),
        report.block_count.to_string().bold(),
        chain.tail()?.commitment().short_hex().yellow()
    );
    Ok(())
}

/// Start a fresh chain from genesis and append the requested payloads.
pub fn build_chain(cli: &Cli) -> anyhow::Result<Chain> {
    let config = match &cli.config {
        Some(path) => ChainConfig::load(path)
            .with_context(|| format!("loading chain config from {}", path.display()))?,
        None => ChainConfig::default(),
    };

    let mut chain = Chain::with_config(&config)?;
    for payload in cli.effective_payloads() {
        chain.append(payload)?;
    }
    Ok(chain)
}
