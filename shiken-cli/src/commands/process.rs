//! Process command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use shiken_core::{
    DocumentExtraction, DocumentInput, QuestionExtractor, RunSummary, UniqueCollector,
};

use crate::config::{CorpusManifest, EntryKind};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Corpus manifest (TOML) listing the documents to parse
    #[arg(short, long, value_name = "FILE", conflicts_with = "input")]
    pub manifest: Option<PathBuf>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Document kind for direct --input files
    #[arg(short, long, value_enum, default_value = "paper")]
    pub kind: DocumentKindArg,

    /// Provenance label for a direct --input file (defaults to the file stem)
    #[arg(short, long, value_name = "LABEL")]
    pub label: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormatArg,

    /// Structured-extractor yield below which a chapter bank is re-parsed
    /// line-wise (overrides the manifest value)
    #[arg(long, value_name = "N")]
    pub fallback_threshold: Option<usize>,

    /// Worker threads for document parsing (0 = one per core)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Print run tallies to stderr
    #[arg(short, long)]
    pub summary: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Document kinds selectable for direct inputs
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum DocumentKindArg {
    /// Chapter-wise question bank
    ChapterBank,
    /// Full question paper
    Paper,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormatArg {
    /// JSON array of question records with metadata
    Json,
    /// Human-readable listing
    Text,
    /// Markdown document with per-source sections
    Markdown,
}

/// One document scheduled for parsing
#[derive(Debug, Clone)]
struct ScheduledDocument {
    path: PathBuf,
    kind: EntryKind,
    label: String,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting document processing");
        log::debug!("Arguments: {:?}", self);

        let (documents, manifest_threshold) = self.resolve_documents()?;
        let threshold = self
            .fallback_threshold
            .or(manifest_threshold)
            .unwrap_or(shiken_core::DEFAULT_FALLBACK_YIELD);

        let extractor = QuestionExtractor::builder()
            .fallback_min_yield(threshold)
            .build();

        let mut reporter = ProgressReporter::new(self.quiet);
        reporter.init_documents(documents.len() as u64);

        let results = self.run_extraction(&extractor, &documents, &reporter);
        reporter.finish();

        let mut collector = UniqueCollector::new();
        let mut failures: Vec<(String, String)> = Vec::new();
        for (document, result) in documents.iter().zip(results) {
            match result {
                Ok(extraction) => {
                    log::info!(
                        "{}: {} records via {}",
                        document.label,
                        extraction.records.len(),
                        extraction.strategy
                    );
                    collector.extend(extraction.records);
                }
                Err(error) => {
                    log::error!("{}: {:#}", document.label, error);
                    failures.push((document.path.display().to_string(), format!("{error:#}")));
                }
            }
        }

        if failures.len() == documents.len() {
            report_failures(&failures);
            anyhow::bail!("all {} documents failed", documents.len());
        }

        self.write_output(&collector)?;

        report_failures(&failures);
        if self.summary {
            report_summary(&RunSummary::from_collector(&collector));
        }

        Ok(())
    }

    /// Resolve the documents to parse, from the manifest or direct inputs
    fn resolve_documents(&self) -> Result<(Vec<ScheduledDocument>, Option<usize>)> {
        if let Some(manifest_path) = &self.manifest {
            let manifest = CorpusManifest::load(manifest_path)?;
            if manifest.documents.is_empty() {
                anyhow::bail!(
                    "manifest lists no documents: {}",
                    manifest_path.display()
                );
            }
            let base = CorpusManifest::base_dir(manifest_path);
            let documents = manifest
                .documents
                .iter()
                .map(|entry| ScheduledDocument {
                    path: base.join(&entry.path),
                    kind: entry.kind,
                    label: entry.label.clone(),
                })
                .collect();
            return Ok((documents, Some(manifest.processing.fallback_threshold)));
        }

        if self.input.is_empty() {
            anyhow::bail!("no input given: pass --manifest or --input");
        }
        let files = resolve_patterns(&self.input)?;
        if self.label.is_some() && files.len() > 1 {
            anyhow::bail!("--label applies to a single input file, {} matched", files.len());
        }
        let kind = match self.kind {
            DocumentKindArg::ChapterBank => EntryKind::ChapterBank,
            DocumentKindArg::Paper => EntryKind::Paper,
        };
        let documents = files
            .into_iter()
            .map(|path| {
                let label = self.label.clone().unwrap_or_else(|| {
                    path.file_stem()
                        .map(|stem| stem.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string())
                });
                ScheduledDocument { path, kind, label }
            })
            .collect();
        Ok((documents, None))
    }

    /// Parse every document, optionally on a dedicated thread pool.
    ///
    /// Results come back in input order, so the later dedup fold is
    /// deterministic regardless of thread scheduling.
    fn run_extraction(
        &self,
        extractor: &QuestionExtractor,
        documents: &[ScheduledDocument],
        reporter: &ProgressReporter,
    ) -> Vec<Result<DocumentExtraction>> {
        let parse_all = || -> Vec<Result<DocumentExtraction>> {
            documents
                .par_iter()
                .map(|document| {
                    let extraction = parse_document(extractor, document);
                    reporter.document_completed(&document.label);
                    extraction
                })
                .collect()
        };

        match self.threads {
            Some(threads) => {
                let count = if threads == 0 {
                    num_cpus::get()
                } else {
                    threads
                };
                match rayon::ThreadPoolBuilder::new().num_threads(count).build() {
                    Ok(pool) => pool.install(parse_all),
                    Err(error) => {
                        log::warn!("thread pool setup failed, using default: {error}");
                        parse_all()
                    }
                }
            }
            None => parse_all(),
        }
    }

    /// Write the deduplicated records in the selected format
    fn write_output(&self, collector: &UniqueCollector) -> Result<()> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormatArg::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormatArg::Text => Box::new(TextFormatter::new(writer)),
            OutputFormatArg::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        for record in collector.records() {
            formatter.format_record(record)?;
        }
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}

/// Read and extract one document
fn parse_document(
    extractor: &QuestionExtractor,
    document: &ScheduledDocument,
) -> Result<DocumentExtraction> {
    if !document.path.is_file() {
        return Err(CliError::FileNotFound(document.path.display().to_string()).into());
    }
    let text = FileReader::read_text(&document.path)?;
    let input = match document.kind {
        EntryKind::ChapterBank => DocumentInput::chapter_bank(
            document.path.display().to_string(),
            document.label.clone(),
            text,
        ),
        EntryKind::Paper => DocumentInput::paper(
            document.path.display().to_string(),
            document.label.clone(),
            text,
        ),
    };
    extractor
        .extract(&input)
        .map_err(|error| CliError::ProcessingError(error.to_string()).into())
}

/// List failed documents on stderr
fn report_failures(failures: &[(String, String)]) {
    if failures.is_empty() {
        return;
    }
    eprintln!("Failed documents:");
    for (path, reason) in failures {
        eprintln!("  ✗ {path}: {reason}");
    }
}

/// Print run tallies on stderr
fn report_summary(summary: &RunSummary) {
    eprintln!("Total parsed: {}", summary.total_parsed);
    eprintln!("Unique questions: {}", summary.unique);
    eprintln!("Duplicates dropped: {}", summary.duplicates);
    eprintln!("By type:");
    for (kind, count) in &summary.by_type {
        eprintln!("  - {kind}: {count}");
    }
    eprintln!("By source:");
    for (origin, count) in &summary.by_provenance {
        eprintln!("  - {origin}: {count}");
    }
}
