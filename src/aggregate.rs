use std::collections::HashMap;

use serde::Serialize;

use crate::config::AggregatorConfig;
use crate::error::{Error, Result};
use crate::storage::{GrowableArray, Record};

/// Full measurement history with an O(1) running sum and running maximum.
///
/// `peak` is its own copy of the winning record rather than a reference into
/// the history, so it survives reallocation of the underlying array. Ties keep
/// the record that reached the maximum first.
#[derive(Debug)]
pub struct BoundedAggregator {
    records: GrowableArray<Record>,
    sum: f64,
    peak: Option<Record>,
}

/// Point-in-time view of a non-empty aggregator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub average: f64,
    pub peak: Record,
}

impl BoundedAggregator {
    pub fn new() -> Self {
        Self::from_config(&AggregatorConfig::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: GrowableArray::with_capacity(capacity),
            sum: 0.0,
            peak: None,
        }
    }

    pub fn from_config(config: &AggregatorConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    pub fn add(&mut self, record: Record) {
        self.sum += record.value();
        let replaces = match &self.peak {
            None => true,
            Some(peak) => peak.value() < record.value(),
        };
        if replaces {
            tracing::debug!(location = record.location(), value = record.value(), "new peak");
            self.peak = Some(record.clone());
        }
        self.records.append(record);
    }

    pub fn average(&self) -> Result<f64> {
        if self.records.is_empty() {
            return Err(Error::EmptyAggregate);
        }
        Ok(self.sum / self.records.count() as f64)
    }

    pub fn peak(&self) -> Result<&Record> {
        self.peak.as_ref().ok_or(Error::EmptyAggregate)
    }

    pub fn count(&self) -> usize {
        self.records.count()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn records(&self) -> &GrowableArray<Record> {
        &self.records
    }

    pub fn summary(&self) -> Result<Summary> {
        Ok(Summary {
            count: self.count(),
            average: self.average()?,
            peak: self.peak()?.clone(),
        })
    }

    /// Highest record per location, scanning the whole history.
    pub fn peaks_by_location(&self) -> HashMap<String, Record> {
        let mut peaks: HashMap<String, Record> = HashMap::new();
        for record in &self.records {
            match peaks.get_mut(record.location()) {
                Some(best) if best.value() < record.value() => *best = record.clone(),
                Some(_) => {}
                None => {
                    peaks.insert(record.location().to_string(), record.clone());
                }
            }
        }
        peaks
    }
}

impl Default for BoundedAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for BoundedAggregator {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            sum: self.sum,
            peak: self.peak.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.records.clone_from(&source.records);
        self.sum = source.sum;
        self.peak.clone_from(&source.peak);
    }
}

impl Extend<Record> for BoundedAggregator {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add(record);
        }
    }
}

impl FromIterator<Record> for BoundedAggregator {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut agg = Self::new();
        agg.extend(iter);
        agg
    }
}
