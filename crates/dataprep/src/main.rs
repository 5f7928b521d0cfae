mod config;
mod derive;
mod narrative;
mod parts;
mod pipeline;
mod recommend;
mod text;

use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::load_config()?;

    // Positional overrides: dataprep [input.csv [output.json]]
    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.input.csv));
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.output.json));

    let dataset = pipeline::run(&input)?;

    let json = serde_json::to_string_pretty(&dataset)?;
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&output, json)?;

    tracing::info!(
        "Wrote {} species records and {} recommendation blocks to {}",
        dataset.species.len(),
        dataset.recommendations.len(),
        output.display()
    );

    Ok(())
}
