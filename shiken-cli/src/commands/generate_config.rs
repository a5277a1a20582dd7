//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating corpus manifest template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Manifest template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the manifest to list your document files and labels");
        println!("2. Validate it:");
        println!("   shiken validate --manifest {}", self.output.display());
        println!("3. Process the corpus:");
        println!(
            "   shiken process --manifest {} --summary",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template manifest content
    fn generate_template(&self) -> String {
        r#"# Corpus manifest for shiken
#
# List every exam document to parse. Paths are relative to this file.
# kind is "chapter-bank" (answers often inline) or "paper" (sectioned,
# numbered questions with marks allocations).

[processing]
# Structured-extractor yield below which a chapter bank is re-parsed
# with the line-oriented state machine
fallback_threshold = 5

# Chapter-wise question banks
[[documents]]
path = "question_docs/chapter2.txt"
kind = "chapter-bank"
label = "Functions"

[[documents]]
path = "question_docs/chapter4.txt"
kind = "chapter-bank"
label = "File Handling"

# Full question papers
[[documents]]
path = "question_docs/sqp_24_25.txt"
kind = "paper"
label = "SQP 2024-25"
"#
        .to_string()
    }
}
