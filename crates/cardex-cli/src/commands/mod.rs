//! CLI subcommands.

pub mod debug;
pub mod parse;

use std::io::{self, BufRead, Write};
use std::path::Path;

use cardex_core::{PdfError, PdfExtractor};

/// Load a PDF, re-prompting for a password on stdin as long as decryption
/// fails.
pub fn open_pdf(path: &Path, password: Option<&str>) -> anyhow::Result<PdfExtractor> {
    let data = std::fs::read(path)?;
    let mut password = password.map(str::to_string);
    let mut prompted = false;

    loop {
        match PdfExtractor::load_with_password(&data, password.as_deref()) {
            Ok(extractor) => return Ok(extractor),
            Err(PdfError::BadPassword) => {
                if prompted || password.is_some() {
                    eprintln!("Error: Incorrect password.");
                }
                password = Some(prompt_password(&format!(
                    "Enter password for {}: ",
                    path.display()
                ))?);
                prompted = true;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn prompt_password(prompt: &str) -> anyhow::Result<String> {
    eprint!("{}", prompt);
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
