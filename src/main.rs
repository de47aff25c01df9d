//! UniversalSaver - Video Downloader
//!
//! Desktop client for a remote download service. Paste a link, pick a
//! quality, and the file is fetched by your browser.

use anyhow::Result;
use clap::Parser;
use universalsaver::api::HttpBackend;
use universalsaver::session::SessionController;
use universalsaver::utils::config::{AppSettings, API_URL_ENV};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Backend origin, e.g. https://my-saver.example.org
    #[arg(long, env = API_URL_ENV)]
    api_base: Option<String>,

    /// Analyze a URL without opening the window and print the result
    #[arg(long, value_name = "URL")]
    analyze: Option<String>,

    /// With --analyze: open the download for this quality id in the browser
    #[arg(long, value_name = "ID", requires = "analyze")]
    quality: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let settings = AppSettings::load()?.with_api_base_override(args.api_base)?;

    if let Some(url) = args.analyze {
        // Run headless inside a temporary Tokio runtime
        let rt = tokio::runtime::Runtime::new()?;
        return rt.block_on(analyze_cli(settings, url, args.quality));
    }

    universalsaver::app::run(settings)
}

async fn analyze_cli(settings: AppSettings, url: String, quality: Option<String>) -> Result<()> {
    let backend = HttpBackend::from_settings(&settings)?;
    let mut session = SessionController::new();

    println!("Analyzing: {}", url);
    if let Err(e) = session.analyze(&backend, &url).await {
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }

    if let Some(meta) = session.metadata() {
        println!("Title:    {}", meta.title.as_deref().unwrap_or("Unknown title"));
        println!("Author:   {}", meta.author.as_deref().unwrap_or("Unknown author"));
        if let Some(duration) = &meta.duration {
            println!("Duration: {}", duration);
        }
        if let Some(thumbnail) = &meta.thumbnail {
            println!("Thumb:    {}", thumbnail);
        }
    }

    println!("Available downloads:");
    for choice in session.choices() {
        println!("  {:<12} {}", choice.id, choice.label);
    }

    if let Some(quality) = quality {
        let request = session.initiate_download(&backend, &quality)?;
        println!("Opening: {}", request.target);
        open::that(&request.target)?;
        println!("The download continues in your browser.");
    }

    Ok(())
}
