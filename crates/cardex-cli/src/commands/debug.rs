//! Debug command - dump the raw text extracted from each page.

use std::path::PathBuf;

use clap::Args;
use console::style;

use cardex_core::PdfSource;

/// Arguments for the debug command.
#[derive(Args)]
pub struct DebugArgs {
    /// Input statement PDF
    #[arg(required = true)]
    input: PathBuf,

    /// PDF password (prompted interactively when needed)
    #[arg(short, long)]
    password: Option<String>,
}

pub fn run(args: DebugArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    println!(
        "{}",
        style(format!("--- DEBUG: extracting text from {} ---", args.input.display())).bold()
    );

    let source = super::open_pdf(&args.input, args.password.as_deref())?;
    for page in 1..=source.page_count() {
        println!("{}", style(format!("--- PAGE {} ---", page)).cyan());
        match source.page_text(page)? {
            Some(text) => println!("{}", text),
            None => println!("[No text extracted]"),
        }
        println!();
    }

    Ok(())
}
