mod config;
mod generator;
mod parser;
mod record;
mod session;
mod source;
mod utils;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

use config::{AppConfig, DEFAULT_CONFIG_PATH};
use parser::ExtractionPipeline;
use session::Session;
use source::{PageSource, PdfDocument};
use utils::logger;

#[derive(Parser)]
#[command(name = "valuation-extractor")]
#[command(about = "Extract vehicle valuation fields from CCC-style report PDFs", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default configuration file
    Init,
    /// Extract fields and print them
    Extract {
        pdf: PathBuf,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Extract fields and write them to a Field,Value CSV
    Export {
        pdf: PathBuf,
        /// Output file (default: <output_dir>/<pdf name>_<date>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show page count and the first line of every page
    Pages { pdf: PathBuf },
}

fn main() -> Result<()> {
    logger::init_logger();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => init_command(&cli.config)?,
        Commands::Extract { pdf, json } => extract_command(&cli.config, &pdf, json)?,
        Commands::Export { pdf, output } => export_command(&cli.config, &pdf, output)?,
        Commands::Pages { pdf } => pages_command(&pdf)?,
    }

    Ok(())
}

fn init_command(config_path: &Path) -> Result<()> {
    AppConfig::default()
        .save(config_path)
        .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
    info!("已生成配置文件: {}", config_path.display());
    Ok(())
}

fn open_session(config_path: &Path, pdf: &Path) -> Result<(AppConfig, Session)> {
    let app_config = AppConfig::load(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

    let mut session = Session::new(ExtractionPipeline::new(app_config.layout.clone()));
    session
        .load(pdf)
        .with_context(|| format!("Failed to open PDF: {}", pdf.display()))?;
    session.extract().context("Failed to extract data")?;

    Ok((app_config, session))
}

fn extract_command(config_path: &Path, pdf: &Path, json: bool) -> Result<()> {
    let (_, session) = open_session(config_path, pdf)?;

    if json {
        let record = session.record().context("No values extracted")?;
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        println!("{}", session.summary()?);
    }
    Ok(())
}

fn export_command(config_path: &Path, pdf: &Path, output: Option<PathBuf>) -> Result<()> {
    let (app_config, session) = open_session(config_path, pdf)?;

    let output = output.unwrap_or_else(|| default_export_path(&app_config.export.output_dir, pdf));
    session
        .export(&output)
        .with_context(|| format!("Failed to export CSV: {}", output.display()))?;

    info!("✅ Exported CSV: {}", output.display());
    Ok(())
}

fn pages_command(pdf: &Path) -> Result<()> {
    let document = PdfDocument::open(pdf)
        .with_context(|| format!("Failed to open PDF: {}", pdf.display()))?;

    println!("{}: {} pages", document.path().display(), document.page_count());
    for index in 0..document.page_count() {
        let first_line = document
            .page_text(index)
            .and_then(|text| text.lines().map(str::trim).find(|l| !l.is_empty()))
            .unwrap_or("(no text)");
        println!("{:>3}  {}", index, first_line);
    }
    Ok(())
}

fn default_export_path(output_dir: &str, pdf: &Path) -> PathBuf {
    let stem = pdf
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "valuation".to_string());
    let date = chrono::Local::now().format("%Y-%m-%d");
    Path::new(output_dir).join(format!("{}_{}.csv", stem, date))
}
