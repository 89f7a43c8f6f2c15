mod server;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use seo_geo_review::config::ReviewConfig;
use seo_geo_review::decode::{decode_report_param, records_from_value};
use seo_geo_review::sample::sample_products;
use seo_geo_review::{ProductAuditRecord, SelectionTracker};

#[derive(Parser)]
#[command(name = "seo-geo-review", about = "SEO/GEO audit review console")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Review(ReviewArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct ReviewArgs {
    /// Base64-encoded JSON report payload, as handed over by the audit stage.
    #[arg(long)]
    data: Option<String>,
    /// Path to a JSON file holding the audit records.
    #[arg(long)]
    pages: Option<PathBuf>,
    /// Print every recommendation with its to-do tag.
    #[arg(long)]
    details: bool,
    /// Print the submission payload for an untouched session.
    #[arg(long)]
    submission: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8788)]
    port: u16,
    #[arg(long, default_value = "webapp/dist")]
    web_root: String,
    /// Base64-encoded JSON report payload, as handed over by the audit stage.
    #[arg(long)]
    data: Option<String>,
    /// Path to a JSON file holding the audit records.
    #[arg(long)]
    pages: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Review(ReviewArgs::default()));

    match command {
        Command::Review(args) => run_review(args),
        Command::Serve(args) => server::serve(args).await,
    }
}

fn run_review(args: ReviewArgs) -> Result<(), String> {
    let products = load_products(args.data.as_deref(), args.pages.as_deref())?;
    let (config, _) = ReviewConfig::load(None)?;
    let tracker = SelectionTracker::new(products, config.actionable.to_policy());

    let summary = tracker.summary();
    println!("Products analyzed: {}", summary.products_analyzed);

    for product in tracker.products() {
        println!();
        println!("{}  {}", product.id, product.title);
        if !product.url.is_empty() {
            println!("  {}", product.url);
        }
        println!(
            "  SEO: {} strengths | {} issues | {} recommendations",
            product.seo.strengths.len(),
            product.seo.issues.len(),
            product.seo.recommendations.len()
        );
        println!(
            "  GEO: {} strengths | {} gaps | {} recommendations",
            product.geo.strengths.len(),
            product.geo.gaps.len(),
            product.geo.recommendations.len()
        );
        println!(
            "  Selected: {}/{}",
            tracker.completed_count(&product.id),
            tracker.total_actionable_items(&product.id)
        );

        if args.details {
            for (index, recommendation) in product.seo.recommendations.iter().enumerate() {
                println!("  [seo-{}] {}", index, recommendation);
            }
            for (index, recommendation) in product.geo.recommendations.iter().enumerate() {
                println!("  [geo-{}] {}", index, recommendation);
            }
        }
    }

    if args.submission {
        let payload = serde_json::to_string_pretty(&tracker.build_submission())
            .map_err(|err| format!("failed to serialize submission: {}", err))?;
        println!("\n{}", payload);
    }

    Ok(())
}

/// Resolves the product catalog: an explicit JSON file wins, then a
/// base64 payload, then the built-in sample set. A payload that fails
/// to decode (or decodes to nothing) falls back to the samples so the
/// report still renders.
pub(crate) fn load_products(
    data: Option<&str>,
    pages: Option<&Path>,
) -> Result<Vec<ProductAuditRecord>, String> {
    if let Some(path) = pages {
        let contents = std::fs::read_to_string(path)
            .map_err(|err| format!("failed to read pages file: {}", err))?;
        let value = serde_json::from_str(&contents)
            .map_err(|err| format!("failed to parse pages file: {}", err))?;
        return records_from_value(value);
    }

    if let Some(encoded) = data {
        let records = decode_report_param(encoded);
        if !records.is_empty() {
            return Ok(records);
        }
        tracing::warn!("report payload was empty, falling back to sample catalog");
    }

    Ok(sample_products())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
