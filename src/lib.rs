pub mod aggregate;
pub mod config;
pub mod error;
pub mod storage;

pub use aggregate::{BoundedAggregator, Summary};
pub use config::AggregatorConfig;
pub use error::{Error, Result};
pub use storage::{GrowableArray, Record};

/// Test temperature series: `0.1 * i + 15`.
pub fn sample_temperature(i: usize) -> f64 {
    0.1 * i as f64 + 15.0
}

/// Builds the `i`-th sample measurement. `i % 100` is stamped into the location
/// and date as two digits, so those repeat every 100 indices while the value
/// keeps rising.
pub fn sample_record(i: usize) -> Result<Record> {
    let tag = format!("{:02}", i % 100);
    Record::new(
        format!("{tag} Test Location"),
        &format!("14/03/{tag}"),
        sample_temperature(i),
    )
}

pub fn run_samples(config: &AggregatorConfig, samples: usize) -> Result<Summary> {
    let mut agg = BoundedAggregator::from_config(config);
    for i in 0..samples {
        agg.add(sample_record(i)?);
    }
    tracing::info!(
        count = agg.count(),
        capacity = agg.records().capacity(),
        "samples aggregated"
    );
    agg.summary()
}
