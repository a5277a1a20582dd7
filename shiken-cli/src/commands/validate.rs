//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::config::{CorpusManifest, EntryKind};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the corpus manifest to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub manifest: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating corpus manifest: {}", self.manifest.display());

        let manifest = match CorpusManifest::load(&self.manifest) {
            Ok(manifest) => manifest,
            Err(error) => {
                println!("✗ Manifest is invalid!");
                println!("  Error: {error:#}");
                return Err(anyhow::anyhow!("Validation failed: {}", error));
            }
        };

        let problems = self.check(&manifest);
        if problems.is_empty() {
            let banks = manifest
                .documents
                .iter()
                .filter(|entry| entry.kind == EntryKind::ChapterBank)
                .count();
            println!("✓ Manifest is valid!");
            println!("  Documents: {}", manifest.documents.len());
            println!("  Chapter banks: {banks}");
            println!("  Papers: {}", manifest.documents.len() - banks);
            Ok(())
        } else {
            println!("✗ Manifest is invalid!");
            for problem in &problems {
                println!("  - {problem}");
            }
            Err(anyhow::anyhow!(
                "Validation failed: {} problem(s)",
                problems.len()
            ))
        }
    }

    fn check(&self, manifest: &CorpusManifest) -> Vec<String> {
        let mut problems = Vec::new();

        if manifest.documents.is_empty() {
            problems.push("manifest lists no documents".to_string());
        }

        let base = CorpusManifest::base_dir(&self.manifest);
        let mut labels = HashSet::new();
        for entry in &manifest.documents {
            if entry.label.trim().is_empty() {
                problems.push(format!("empty label for {}", entry.path.display()));
            } else if !labels.insert(entry.label.clone()) {
                problems.push(format!("duplicate label '{}'", entry.label));
            }

            let path = base.join(&entry.path);
            if !path.is_file() {
                problems.push(format!("file not found: {}", path.display()));
            }
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("corpus.toml");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_valid_manifest_passes() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("paper.txt"), "1. A question?").unwrap();
        let manifest = write_manifest(
            &dir,
            r#"
            [[documents]]
            path = "paper.txt"
            kind = "paper"
            label = "Paper One"
            "#,
        );

        let args = ValidateArgs { manifest };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let manifest = write_manifest(
            &dir,
            r#"
            [[documents]]
            path = "absent.txt"
            kind = "paper"
            label = "Paper One"
            "#,
        );

        let args = ValidateArgs { manifest };
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_duplicate_labels_fail() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();
        fs::write(dir.path().join("b.txt"), "x").unwrap();
        let manifest = write_manifest(
            &dir,
            r#"
            [[documents]]
            path = "a.txt"
            kind = "paper"
            label = "Same"

            [[documents]]
            path = "b.txt"
            kind = "paper"
            label = "Same"
            "#,
        );

        let args = ValidateArgs { manifest };
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_unparseable_manifest_fails() {
        let dir = TempDir::new().unwrap();
        let manifest = write_manifest(&dir, "documents = 7");

        let args = ValidateArgs { manifest };
        assert!(args.execute().is_err());
    }
}
