use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use picsum_gallery::api::{Image, PicsumClient};
use picsum_gallery::config::Config;
use picsum_gallery::gallery::GalleryStore;
use picsum_gallery::logging::init_tracing;
use picsum_gallery::ui;

#[derive(Parser, Debug)]
#[command(
    name = "picsum-gallery",
    version,
    about = "Browse the Lorem Picsum photo catalog in the terminal"
)]
struct Cli {
    /// Page to open first (1-based)
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Config file path (default: <config dir>/picsum-gallery/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the listing API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Print the page to stdout and exit instead of starting the UI
    #[arg(long)]
    print: bool,

    /// Write logs to this file (also: PICSUM_GALLERY_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Some(path) = init_tracing(cli.log_file.clone()) {
        tracing::info!(path = %path.display(), version = env!("CARGO_PKG_VERSION"), "Logging started");
    }

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;

    let total_pages = config.pagination.total_pages();
    if cli.page == 0 || cli.page > total_pages {
        bail!("Page {} is out of range (1-{})", cli.page, total_pages);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    if cli.print {
        return runtime.block_on(print_page(&config, cli.page));
    }

    tracing::info!(page = cli.page, base_url = %config.api.base_url, "Starting gallery");
    ui::runtime::run(&runtime, &config, cli.page)
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
        config.validate()?;
    }

    Ok(config)
}

async fn print_page(config: &Config, page: u32) -> anyhow::Result<()> {
    let client = PicsumClient::new(&config.api)?;
    let mut store = GalleryStore::new(client, config.pagination);
    store.fetch_images(page).await;

    let state = store.state();
    if let Some(error) = &state.error {
        bail!("{}", error);
    }

    let info = store.pagination_info();
    println!("Page {} / {}", info.current_page, info.total_pages);
    for image in &state.images {
        println!("{}", format_image_line(image));
    }
    Ok(())
}

fn format_image_line(image: &Image) -> String {
    format!(
        "{:>5}  {:>5}x{:<5}  {}  {}",
        image.id, image.width, image.height, image.author, image.download_url
    )
}
