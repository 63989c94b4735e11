use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use slate_pdf::{
    pdf_version, BorderRendering, BorderSide, BorderStyle, CancellationFlag, Cell, Color,
    Document, HAlign, PageSize, Table,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod table_spec;

use table_spec::TableSpec;

#[derive(Parser)]
#[command(
    name = "slatepdf",
    about = "Generate PDF documents with text and tables",
    version,
    author
)]
struct Cli {
    /// Write through the async (tokio) writer; Ctrl-C aborts between objects
    #[arg(long, global = true)]
    async_write: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// PDF version written in the file header
    #[arg(long, global = true, default_value = "1.7")]
    pdf_version: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a single-page PDF with one line of text
    Text {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Text to write
        #[arg(short, long)]
        text: String,

        /// Font size in points
        #[arg(short, long, default_value_t = 24.0)]
        size: f64,

        /// Baseline x position
        #[arg(long, default_value_t = 50.0)]
        x: f64,

        /// Baseline y position
        #[arg(long, default_value_t = 750.0)]
        y: f64,

        /// Page size (a4, letter, legal, half-letter, ...)
        #[arg(long, default_value = "a4")]
        page_size: PageSize,
    },

    /// Render a table described in a JSON file
    Table {
        /// JSON table description
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Page size (a4, letter, legal, half-letter, ...)
        #[arg(long, default_value = "a4")]
        page_size: PageSize,
    },

    /// Generate a demo PDF with text and tables
    Demo {
        /// Output file path
        #[arg(short, long, default_value = "demo.pdf")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !pdf_version::is_supported(&cli.pdf_version) {
        bail!(
            "unsupported PDF version '{}' (expected one of {})",
            cli.pdf_version,
            pdf_version::SUPPORTED_VERSIONS.join(", ")
        );
    }

    match cli.command {
        Commands::Text {
            output,
            text,
            size,
            x,
            y,
            page_size,
        } => {
            let mut doc = Document::with_page_size(Some(page_size));
            doc.set_pdf_version(cli.pdf_version.as_str());
            doc.add_page()
                .add_text(text, x, y, size)
                .context("invalid text placement")?;

            write_document(&mut doc, &output, cli.async_write).await?;
            println!("PDF created successfully!");
        }

        Commands::Table {
            input,
            output,
            page_size,
        } => {
            let json = fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let spec = TableSpec::from_json(&json)
                .with_context(|| format!("invalid table description in {}", input.display()))?;
            let table = spec.build().context("invalid table dimensions")?;
            debug!(
                rows = table.row_count(),
                cols = table.col_count(),
                "table built"
            );

            let mut doc = Document::with_page_size(Some(page_size));
            doc.set_pdf_version(cli.pdf_version.as_str());
            let page = doc.add_page();
            if let Some(title) = &spec.title {
                page.add_text(title.as_str(), spec.x, spec.y + 20.0, 16.0)?;
            }
            page.add_table(table);

            write_document(&mut doc, &output, cli.async_write).await?;
            println!("Table PDF created successfully!");
        }

        Commands::Demo { output } => {
            let mut doc = build_demo()?;
            doc.set_pdf_version(cli.pdf_version.as_str());
            write_document(&mut doc, &output, cli.async_write).await?;
            println!("Demo PDF created: {}", output.display());
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "slate_pdf=debug,slatepdf=debug"
    } else {
        "slate_pdf=info,slatepdf=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn write_document(doc: &mut Document, output: &Path, async_write: bool) -> Result<()> {
    let result = if async_write {
        write_async(doc, output).await
    } else {
        doc.save(output)
            .with_context(|| format!("failed to write {}", output.display()))
    };
    if let Err(err) = result {
        remove_partial(output);
        return Err(err);
    }
    info!(path = %output.display(), pages = doc.page_count(), "done");
    Ok(())
}

async fn write_async(doc: &mut Document, output: &Path) -> Result<()> {
    let flag = CancellationFlag::new();
    let watcher = {
        let flag = flag.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupt received, cancelling write");
                flag.cancel();
            }
        })
    };

    let result = write_cancellable(doc, output, &flag).await;
    watcher.abort();
    result
}

async fn write_cancellable(doc: &mut Document, output: &Path, flag: &CancellationFlag) -> Result<()> {
    let file = tokio::fs::File::create(output)
        .await
        .with_context(|| format!("failed to create {}", output.display()))?;
    let mut writer = tokio::io::BufWriter::new(file);
    doc.write_async_cancellable(&mut writer, flag)
        .await
        .with_context(|| format!("failed to write {}", output.display()))
}

/// Deletes whatever a failed or cancelled write left at `output`.
fn remove_partial(output: &Path) {
    match fs::remove_file(output) {
        Ok(()) => debug!(path = %output.display(), "removed partial output"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!(path = %output.display(), error = %e, "could not remove partial output"),
    }
}

/// One A4 page with a heading, a plain table and a styled table.
fn build_demo() -> Result<Document> {
    let mut doc = Document::new();
    let page = doc.add_page();
    page.add_text("Hello", 50.0, 750.0, 12.0)?;

    let mut simple = Table::new(50.0, 700.0, 200.0)?;
    simple.ensure_size(2, 2);
    simple.set_column_widths(&[100.0, 100.0])?;
    simple.set_text(0, 0, "A");
    page.add_table(simple);

    page.add_text("Styled table", 50.0, 620.0, 14.0)?;
    let mut styled = Table::new(50.0, 600.0, 495.0)?;
    styled
        .set_row_height(22.0)?
        .set_font_size(11.0)?
        .set_border_rendering(BorderRendering::PerSide);
    styled.set_column_widths(&[180.0])?;
    styled.ensure_size(4, 3);

    let header = Cell::new("Quarterly summary")
        .with_align(HAlign::Center)
        .with_background(Color::light_gray())
        .with_span(1, 3)
        .with_borders(BorderSide::solid(1.0, Color::black()));
    styled.set_cell(0, 0, header);

    let rows = [("North", "1,204", "+4%"), ("South", "980", "-2%")];
    for (i, (region, revenue, delta)) in rows.iter().enumerate() {
        let r = i + 1;
        styled.set_text(r, 0, *region);
        styled.set_cell(r, 1, Cell::new(*revenue).with_align(HAlign::Right));
        styled.set_cell(r, 2, Cell::new(*delta).with_align(HAlign::Center));
    }

    let mut total = Cell::new("Total 2,184").with_span(1, 3);
    total.top_border = BorderSide::new(1.5, Color::black(), BorderStyle::Double);
    total.bottom_border = BorderSide::new(0.75, Color::rgb(0.4, 0.4, 0.4), BorderStyle::Dashed);
    styled.set_cell(3, 0, total);
    page.add_table(styled);

    Ok(doc)
}
