//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the cardex pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CardexConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Transaction extraction configuration.
    pub extraction: ExtractionConfig,
}

impl Default for CardexConfig {
    fn default() -> Self {
        Self {
            pdf: PdfConfig::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages to process (0 = unlimited).
    pub max_pages: usize,

    /// Minimum characters of text for a page to count as text-bearing.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            max_pages: 0,
            min_text_length: 1,
        }
    }
}

/// Transaction extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Bank format used when the CLI gets no explicit --bank flag.
    pub default_bank: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_bank: "generic".to_string(),
        }
    }
}

impl CardexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }
}
