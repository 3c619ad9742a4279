//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use flashdeck_core::{ClassificationSummary, analyze_tags, load_records, load_rows};
use flashdeck_export::{
    ExportOptions, ExportProgress, ExportedDocument, backend_for, export_by_field,
    export_document,
};
use flashdeck_shared::{
    AppConfig, DocumentFormat, RowField, RowFilter, init_config, load_config,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Flashdeck: turn scraped interview questions into study documents.
#[derive(Parser)]
#[command(
    name = "flashdeck",
    version,
    about = "Classify interview question banks and export them as study documents.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Field a batch export splits on.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum SplitField {
    Category,
    Institution,
}

impl From<SplitField> for RowField {
    fn from(field: SplitField) -> Self {
        match field {
            SplitField::Category => RowField::Category,
            SplitField::Institution => RowField::Institution,
        }
    }
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Export the question bank as a single document.
    Export {
        /// Question bank JSON file (defaults to config `input`).
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (defaults to `<output_dir>/flashcards.<ext>`).
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Output format: markdown or docx.
        #[arg(short, long)]
        format: Option<DocumentFormat>,

        /// Keep only rows where field equals value, e.g. `category=DCF`.
        #[arg(long)]
        filter: Option<RowFilter>,
    },

    /// Export one document per category or institution.
    ExportBy {
        /// Field to split on.
        field: SplitField,

        /// Question bank JSON file (defaults to config `input`).
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory for the documents (defaults to config `output_dir`).
        #[arg(short = 'o', long)]
        output_dir: Option<PathBuf>,

        /// Output format: markdown or docx.
        #[arg(short, long)]
        format: Option<DocumentFormat>,
    },

    /// Classify the question bank and print label counts.
    Classify {
        /// Question bank JSON file (defaults to config `input`).
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the classified rows as JSON instead of counts.
        #[arg(long)]
        json: bool,
    },

    /// Report how tags are distributed across the question bank.
    Analyze {
        /// Question bank JSON file (defaults to config `input`).
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = ["flashdeck", "flashdeck_core", "flashdeck_export", "flashdeck_shared"]
        .map(|target| format!("{target}={level}"))
        .join(",");

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Export {
            input,
            out,
            format,
            filter,
        } => cmd_export(input, out, format, filter),
        Command::ExportBy {
            field,
            input,
            output_dir,
            format,
        } => cmd_export_by(field.into(), input, output_dir, format),
        Command::Classify { input, json } => cmd_classify(input, json),
        Command::Analyze { input, json } => cmd_analyze(input, json),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

/// CLI value, else config value.
fn input_path(input: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    input.unwrap_or_else(|| PathBuf::from(&config.defaults.input))
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_export(
    input: Option<PathBuf>,
    out: Option<PathBuf>,
    format: Option<DocumentFormat>,
    filter: Option<RowFilter>,
) -> Result<()> {
    let config = load_config()?;
    let format = format.unwrap_or(config.defaults.format);
    // Resolve the backend first so a missing one fails before any work.
    let backend = backend_for(format)?;

    let input = input_path(input, &config);
    let out = out.unwrap_or_else(|| {
        Path::new(&config.defaults.output_dir).join(format!("flashcards.{}", backend.extension()))
    });

    info!(
        input = %input.display(),
        out = %out.display(),
        %format,
        filter = filter.as_ref().map(RowFilter::describe),
        "exporting document"
    );

    let rows = load_rows(&input)?;
    let options = ExportOptions::from(&config.document);
    let doc = export_document(backend.as_ref(), &rows, filter.as_ref(), &options, &out)?;

    println!();
    println!("  Document exported!");
    println!("  Questions: {}", doc.row_count);
    println!("  Path:      {}", doc.path.display());
    println!();

    Ok(())
}

fn cmd_export_by(
    field: RowField,
    input: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    format: Option<DocumentFormat>,
) -> Result<()> {
    let config = load_config()?;
    let format = format.unwrap_or(config.defaults.format);
    let backend = backend_for(format)?;

    let input = input_path(input, &config);
    let output_dir = output_dir.unwrap_or_else(|| PathBuf::from(&config.defaults.output_dir));

    info!(
        input = %input.display(),
        dir = %output_dir.display(),
        %field,
        %format,
        "exporting documents by field"
    );

    let rows = load_rows(&input)?;
    let options = ExportOptions::from(&config.document);
    let progress = CliProgress::new();
    let docs = export_by_field(
        backend.as_ref(),
        &rows,
        field,
        &output_dir,
        &options,
        &progress,
    )
    .wrap_err_with(|| format!("batch export by {field} aborted"))?;
    progress.finish();

    println!();
    for doc in &docs {
        println!(
            "  {:>4}  {}  ({})",
            doc.row_count,
            doc.key.as_deref().unwrap_or_default(),
            doc.path.display()
        );
    }
    println!();
    println!("  Documents: {}", docs.len());
    println!();

    Ok(())
}

fn cmd_classify(input: Option<PathBuf>, json: bool) -> Result<()> {
    let config = load_config()?;
    let rows = load_rows(&input_path(input, &config))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let summary = ClassificationSummary::from_rows(&rows);
    println!();
    println!("  Total questions: {}", summary.total);
    println!("  Unclassified:    {}", summary.unclassified);
    println!();
    println!("  By type:");
    for (category, count) in &summary.by_category {
        println!("    {count:>4}  {category}");
    }
    println!();
    println!("  By reported in:");
    for (institution, count) in &summary.by_institution {
        println!("    {count:>4}  {institution}");
    }
    println!();

    Ok(())
}

fn cmd_analyze(input: Option<PathBuf>, json: bool) -> Result<()> {
    let config = load_config()?;
    let records = load_records(&input_path(input, &config))?;
    let report = analyze_tags(&records);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// Batch progress bar using indicatif.
struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar }
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ExportProgress for CliProgress {
    fn started(&self, total: usize) {
        self.bar.set_length(total as u64);
    }

    fn document_written(&self, doc: &ExportedDocument, _current: usize, _total: usize) {
        self.bar
            .set_message(doc.key.clone().unwrap_or_default());
        self.bar.inc(1);
    }
}
