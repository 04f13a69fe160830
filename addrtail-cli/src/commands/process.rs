//! Process command implementation

use crate::config::{parse_delimiter, CliConfig};
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, write_dataset, FormatOptions, OutputFormat};
use crate::progress::ProgressReporter;
use addrtail_engine::{
    read_csv_str, BatchRunner, BatchStats, CaseMode, Dataset, ExecutionMode, Normalizer,
    SentinelFilter,
};
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input CSV files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Column holding the address tail
    #[arg(short, long, value_name = "COLUMN")]
    pub column: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Drop rows whose address contains a sentinel such as RETURNED
    #[arg(long)]
    pub drop_sentinels: bool,

    /// Sentinel substring (repeatable, implies --drop-sentinels)
    #[arg(long = "sentinel", value_name = "TEXT")]
    pub sentinels: Vec<String>,

    /// Upper-case every cell before parsing
    #[arg(long)]
    pub uppercase: bool,

    /// Remove hyphens from this column (repeatable)
    #[arg(long = "strip-hyphens", value_name = "COLUMN")]
    pub strip_hyphens: Vec<String>,

    /// Add a column holding the run timestamp
    #[arg(long, value_name = "NAME")]
    pub stamp_column: Option<String>,

    /// Prefix for the CITY..FORMAT column names
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Input encoding label (utf-8, windows-1252, latin1, ...)
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Field delimiter for input and CSV output
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Force parallel processing even for small inputs
    #[arg(short, long, conflicts_with = "sequential")]
    pub parallel: bool,

    /// Force single-threaded processing
    #[arg(long)]
    pub sequential: bool,

    /// Number of worker threads
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting address processing");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        config.validate()?;

        let runner = self.build_runner(&config)?;
        let delimiter = self.delimiter(&config)?;
        let encoding = FileReader::resolve_encoding(
            self.encoding
                .as_deref()
                .unwrap_or(&config.processing.encoding),
        )?;

        let files = resolve_patterns(&self.input)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut dataset = Dataset::default();
        for path in &files {
            let text = FileReader::read_text(path, encoding)?;
            let part = read_csv_str(&text, delimiter)
                .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;
            log::debug!("{}: {} rows", path.display(), part.len());
            dataset
                .append(part)
                .with_context(|| format!("Header of {} differs from earlier inputs", path.display()))?;
            progress.file_completed(&path.display().to_string());
        }

        progress.set_stage("Parsing addresses");
        let output = runner.run(dataset)?;
        progress.finish();

        let format = self.format.unwrap_or(config.output.default_format);
        let options = FormatOptions {
            delimiter,
            pretty_json: config.output.pretty_json,
        };
        self.write_output(&output.dataset, format, options)?;

        if self.verbose > 0 && !self.quiet {
            let mut stderr = io::stderr().lock();
            print_summary(&mut stderr, &output.stats, files.len())?;
        }

        Ok(())
    }

    /// Merge flags over config values into a runner
    fn build_runner(&self, config: &CliConfig) -> Result<BatchRunner> {
        let processing = &config.processing;
        let performance = &config.performance;

        let address_column = self
            .column
            .clone()
            .unwrap_or_else(|| processing.address_column.clone());

        let case = if self.uppercase {
            CaseMode::Upper
        } else {
            processing.case_mode()?
        };
        let strip_hyphen_columns = if self.strip_hyphens.is_empty() {
            processing.strip_hyphen_columns.clone()
        } else {
            self.strip_hyphens.clone()
        };

        let execution_mode = if self.parallel {
            ExecutionMode::Parallel
        } else if self.sequential {
            ExecutionMode::Sequential
        } else {
            performance.execution_mode()?
        };

        let mut builder = BatchRunner::builder()
            .address_column(address_column)
            .column_prefix(
                self.prefix
                    .clone()
                    .unwrap_or_else(|| config.output.column_prefix.clone()),
            )
            .normalizer(Normalizer {
                collapse_whitespace: processing.collapse_whitespace,
                case,
                strip_hyphen_columns,
            })
            .execution_mode(execution_mode)
            .threads(self.threads.or_else(|| performance.threads()))
            .parallel_threshold(performance.parallel_threshold_rows);

        if self.drop_sentinels || processing.drop_sentinels || !self.sentinels.is_empty() {
            let patterns = if self.sentinels.is_empty() {
                processing.sentinels.clone()
            } else {
                self.sentinels.clone()
            };
            builder = builder.sentinel_filter(SentinelFilter::new(patterns));
        }

        let stamp = self
            .stamp_column
            .as_deref()
            .or_else(|| processing.stamp_column());
        if let Some(stamp) = stamp {
            builder = builder.stamp_column(stamp);
        }

        Ok(builder.build()?)
    }

    fn delimiter(&self, config: &CliConfig) -> Result<u8> {
        match &self.delimiter {
            Some(text) => parse_delimiter(text),
            None => config.processing.delimiter_byte(),
        }
    }

    fn write_output(&self, dataset: &Dataset, format: OutputFormat, options: FormatOptions) -> Result<()> {
        let mut formatter = match &self.output {
            Some(path) => create_formatter(format, open_output(path)?, options),
            None => create_formatter(format, BufWriter::new(io::stdout()), options),
        };
        write_dataset(formatter.as_mut(), dataset)
    }
}

fn open_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Human-readable run summary
fn print_summary<W: Write>(out: &mut W, stats: &BatchStats, files: usize) -> Result<()> {
    writeln!(out, "Files read:     {files}")?;
    writeln!(out, "Rows read:      {}", stats.rows_read)?;
    writeln!(out, "Rows filtered:  {}", stats.rows_filtered)?;
    writeln!(out, "Rows written:   {}", stats.rows_written)?;
    writeln!(out, "Execution mode: {:?}", stats.execution_mode)?;
    writeln!(out, "Elapsed:        {:.1} ms", stats.elapsed_ms)?;
    for (tag, count) in &stats.formats {
        writeln!(out, "  {:<14} {count}", tag.as_str())?;
    }
    writeln!(out, "Needs review:   {}", stats.needs_review())?;
    Ok(())
}
