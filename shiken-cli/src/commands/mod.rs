//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse exam documents into question records
    Process(process::ProcessArgs),

    /// Check a corpus manifest without processing it
    Validate(validate::ValidateArgs),

    /// Write a corpus manifest template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let process_cmd = Commands::Process(process::ProcessArgs {
            manifest: None,
            input: vec!["paper.txt".to_string()],
            kind: process::DocumentKindArg::Paper,
            label: None,
            output: None,
            format: process::OutputFormatArg::Json,
            fallback_threshold: None,
            threads: None,
            summary: false,
            quiet: false,
            verbose: 0,
        });

        let debug_str = format!("{:?}", process_cmd);
        assert!(debug_str.contains("Process"));
        assert!(debug_str.contains("paper.txt"));

        let validate_cmd = Commands::Validate(validate::ValidateArgs {
            manifest: "corpus.toml".into(),
        });
        let debug_str = format!("{:?}", validate_cmd);
        assert!(debug_str.contains("Validate"));
        assert!(debug_str.contains("corpus.toml"));
    }
}
