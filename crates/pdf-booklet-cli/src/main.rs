use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pdfbook",
    about = "Convert a scanned PDF into booklet spreads for saddle-stitch printing",
    version
)]
struct Cli {
    /// Input PDF file
    input: PathBuf,

    /// Output PDF file
    output: PathBuf,

    /// Page splitting mode
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Title page: page 1 when it is single, page 2 when it is double
    #[arg(long, value_enum)]
    title_page: Option<TitlePageArg>,

    /// Source page number of page 1, or "auto" for the page after the title
    #[arg(long, value_parser = parse_first_page)]
    first_page: Option<pdf_booklet::FirstPage>,

    /// Source pages to skip
    #[arg(long, num_args = 1..)]
    skip: Vec<usize>,

    /// Keep padding blank pages after the last page
    #[arg(long)]
    blank_after_last: bool,

    /// Rasterization resolution
    #[arg(long)]
    dpi: Option<u32>,

    /// JPEG quality of the output spreads (1-100)
    #[arg(long)]
    jpeg_quality: Option<u8>,

    /// Load options from a JSON file; other flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective options to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Also write every output spread as a PNG into this directory
    #[arg(long)]
    dump_pages: Option<PathBuf>,

    /// Show statistics only, don't write the output PDF
    #[arg(long)]
    stats_only: bool,

    /// Logging level
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Auto,
    Single,
    Double,
}

#[derive(Clone, Copy, ValueEnum)]
enum TitlePageArg {
    Auto,
    #[value(name = "1")]
    First,
    #[value(name = "2")]
    Second,
}

fn parse_first_page(value: &str) -> std::result::Result<pdf_booklet::FirstPage, String> {
    value
        .parse()
        .map_err(|e: pdf_booklet::BookletError| e.to_string())
}

impl From<ModeArg> for pdf_booklet::SplitMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Auto => Self::Auto,
            ModeArg::Single => Self::Single,
            ModeArg::Double => Self::Double,
        }
    }
}

impl From<TitlePageArg> for pdf_booklet::TitlePage {
    fn from(arg: TitlePageArg) -> Self {
        match arg {
            TitlePageArg::Auto => Self::Auto,
            TitlePageArg::First => Self::First,
            TitlePageArg::Second => Self::Second,
        }
    }
}

impl Cli {
    /// Apply explicit flags on top of the base options
    fn apply(&self, mut options: pdf_booklet::BookletOptions) -> pdf_booklet::BookletOptions {
        if let Some(mode) = self.mode {
            options.split_mode = mode.into();
        }
        if let Some(title_page) = self.title_page {
            options.title_page = title_page.into();
        }
        if let Some(first_page) = self.first_page {
            options.first_page = first_page;
        }
        if !self.skip.is_empty() {
            options.skip = self.skip.clone();
        }
        if self.blank_after_last {
            options.blank_after_last = true;
        }
        if let Some(dpi) = self.dpi {
            options.dpi = dpi;
        }
        if let Some(jpeg_quality) = self.jpeg_quality {
            options.jpeg_quality = jpeg_quality;
        }
        options
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .init();

    let base = match &cli.config {
        Some(path) => pdf_booklet::BookletOptions::load(path).await?,
        None => pdf_booklet::BookletOptions::default(),
    };
    let options = cli.apply(base);
    options.validate()?;

    if let Some(path) = &cli.save_config {
        options.save(path).await?;
        println!("Options saved → {}", path.display());
    }

    let pages = pdf_booklet::load_pages(&cli.input, options.dpi).await?;
    let booklet = pdf_booklet::make_booklet(pages, &options).await?;

    let stats = &booklet.statistics;
    println!("Booklet Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Skipped pages: {}", stats.skipped_pages);
    println!("  Double pages: {}", stats.double_pages);
    println!("  Content pages: {}", stats.content_pages);
    println!("  Blank pages added: {}", stats.blank_pages_added);
    println!("  Output spreads: {}", stats.output_spreads);
    println!("  Output sheets: {}", stats.output_sheets);

    if cli.stats_only {
        return Ok(());
    }

    if let Some(dir) = &cli.dump_pages {
        pdf_booklet::dump_pages(booklet.spreads.clone(), dir).await?;
        println!("Spreads → {}", dir.display());
    }

    pdf_booklet::save_pages(
        booklet.spreads,
        &cli.output,
        options.dpi,
        options.jpeg_quality,
    )
    .await?;
    println!("Booklet → {}", cli.output.display());

    Ok(())
}
