//! Parse command - extract transactions from a statement PDF to CSV.

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::info;

use cardex_core::{parser_for, CardexConfig, StatementExtractor, Transaction, BANK_FORMATS};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input statement PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Bank format (e.g. bri); unknown values fall back to generic
    #[arg(short, long)]
    bank: Option<String>,

    /// Output CSV file
    #[arg(short, long, default_value = "output.csv")]
    output: PathBuf,

    /// PDF password (prompted interactively when needed)
    #[arg(short, long)]
    password: Option<String>,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = if let Some(path) = config_path {
        CardexConfig::from_file(Path::new(path))?
    } else {
        CardexConfig::default()
    };

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let bank = args
        .bank
        .unwrap_or_else(|| config.extraction.default_bank.clone());
    info!(
        "parsing {} using {:?} format (known: {})",
        args.input.display(),
        bank,
        BANK_FORMATS.join(", ")
    );

    let source = super::open_pdf(&args.input, args.password.as_deref())?
        .with_min_text_length(config.pdf.min_text_length);
    let parser = parser_for(&bank);
    let transactions = StatementExtractor::new()
        .with_max_pages(config.pdf.max_pages)
        .extract(&source, parser.as_ref())?;

    if transactions.is_empty() {
        println!(
            "{} No transactions found. Try the 'debug' command to inspect the raw text.",
            style("[!]").yellow()
        );
        return Ok(());
    }

    write_csv(&args.output, &transactions)?;
    println!(
        "{} Exported {} transactions to {}",
        style("✓").green(),
        transactions.len(),
        args.output.display()
    );

    Ok(())
}

/// Write transactions as CSV under the fixed `Date,Description,Amount`
/// header. Writes no file at all for an empty set.
pub fn write_csv(path: &Path, transactions: &[Transaction]) -> anyhow::Result<()> {
    if transactions.is_empty() {
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(path)?;
    for txn in transactions {
        writer.serialize(txn)?;
    }
    writer.flush()?;

    Ok(())
}
