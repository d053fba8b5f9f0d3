use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pdfb",
    about = "Reorder a PDF into booklet order for double-sided printing and folding",
    version
)]
struct Cli {
    /// Input PDF file
    input: Option<PathBuf>,

    /// Output PDF file (defaults to booklet_<input name> next to the input)
    #[arg(short, long, conflicts_with = "output_dir")]
    output: Option<PathBuf>,

    /// Directory for the booklet_<input name> output file
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Number of blank pages to insert at the start
    #[arg(short, long)]
    blanks: Option<usize>,

    /// Maximum pages per signature (multiple of 4); omit for a single booklet
    #[arg(long)]
    batch_size: Option<usize>,

    /// Order of the composited sheet sides
    #[arg(long, value_enum)]
    order: Option<OrderArg>,

    /// Fail if pages differ in size instead of using the first page's size
    #[arg(long)]
    strict_geometry: bool,

    /// Load options from a JSON file (command-line flags override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the effective options to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,

    /// Log progress of each sheet side
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderArg {
    /// All back sides, then all front sides (manual duplex)
    Grouped,
    /// Back and front of each sheet in turn (automatic duplex)
    Interleaved,
}

impl From<OrderArg> for pdf_booklet::PrintOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Grouped => Self::Grouped,
            OrderArg::Interleaved => Self::Interleaved,
        }
    }
}

impl Cli {
    async fn options(&self) -> Result<pdf_booklet::BookletOptions> {
        let mut options = match &self.config {
            Some(path) => pdf_booklet::BookletOptions::load(path)
                .await
                .with_context(|| format!("loading config {}", path.display()))?,
            None => pdf_booklet::BookletOptions::default(),
        };

        if let Some(input) = &self.input {
            options.input_file = input.clone();
        }
        if self.output.is_some() {
            options.output_file = self.output.clone();
            options.output_dir = None;
        }
        if self.output_dir.is_some() {
            options.output_dir = self.output_dir.clone();
            options.output_file = None;
        }
        if let Some(blanks) = self.blanks {
            options.leading_blanks = blanks;
        }
        if self.batch_size.is_some() {
            options.batch_size = self.batch_size;
        }
        if let Some(order) = self.order {
            options.print_order = order.into();
        }
        if self.strict_geometry {
            options.geometry_policy = pdf_booklet::GeometryPolicy::Strict;
        }

        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let options = cli.options().await?;
    options.validate_paths()?;

    if let Some(path) = &cli.save_config {
        options.save(path).await?;
        log::info!("Saved options to {}", path.display());
    }

    if cli.stats_only {
        let source = pdf_booklet::load_pdf(&options.input_file).await?;
        let stats = pdf_booklet::calculate_statistics(source.get_pages().len(), &options)?;
        print_statistics(&stats);
        return Ok(());
    }

    let report = pdf_booklet::make_booklet_file(&options, |percent| {
        log::debug!("Progress: {:.0}%", percent);
    })
    .await?;

    print_statistics(&report.statistics);
    println!("Booklet → {}", report.output_path.display());
    println!();
    println!("{}", report.instructions);

    Ok(())
}

fn print_statistics(stats: &pdf_booklet::BookletStatistics) {
    println!("Booklet Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Leading blanks: {}", stats.leading_blanks);
    println!("  Booklets: {}", stats.booklets);
    println!("  Output sheets: {}", stats.output_sheets);
    println!("  Output pages: {}", stats.output_pages);
    println!("  Empty slots: {}", stats.empty_slots);
}
