//! Corpus manifest configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// TOML manifest describing the documents of one corpus run
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CorpusManifest {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Documents to parse, in processing order
    #[serde(default)]
    pub documents: Vec<DocumentEntry>,
}

/// Processing-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProcessingConfig {
    /// Structured-extractor yield below which a chapter bank is re-parsed
    /// with the line machine
    pub fallback_threshold: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            fallback_threshold: shiken_core::DEFAULT_FALLBACK_YIELD,
        }
    }
}

/// One document listed in the manifest
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocumentEntry {
    /// Path to the extracted plain-text file, relative to the manifest
    pub path: PathBuf,
    /// Document family
    pub kind: EntryKind,
    /// Provenance label: chapter name for banks, paper name for papers
    pub label: String,
}

/// Document family named in a manifest entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    /// Chapter-wise question bank
    ChapterBank,
    /// Full question paper
    Paper,
}

impl CorpusManifest {
    /// Load and parse a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        let manifest = toml::from_str(&raw)
            .map_err(|e| CliError::ManifestError(e.to_string()))
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))?;
        Ok(manifest)
    }

    /// Directory that relative document paths resolve against
    pub fn base_dir(path: &Path) -> PathBuf {
        path.parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
