use anyhow::Context;
use tempstat::{run_samples, AggregatorConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::var("TEMPSTAT_CONFIG") {
        Ok(text) => AggregatorConfig::from_json(&text).context("parsing TEMPSTAT_CONFIG")?,
        Err(_) => AggregatorConfig::default(),
    };
    let samples = match std::env::var("TEMPSTAT_SAMPLES") {
        Ok(text) => text.parse::<usize>().context("parsing TEMPSTAT_SAMPLES")?,
        Err(_) => 100,
    };

    let summary = run_samples(&config, samples)?;
    tracing::info!(
        count = summary.count,
        average = summary.average,
        peak = summary.peak.value(),
        location = summary.peak.location(),
        "summary"
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
