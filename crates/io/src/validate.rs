//! Accumulated validation at the ingestion boundary.
//!
//! Provides [`ValidationCollector`] for gathering multiple validation errors
//! into a single [`IoError::Validation`], plus standalone helpers that check
//! the gauge-table schema contract before anything reaches the core: rain
//! depths non-negative, coordinates finite.

use pluvio_station::{GaugeMetadata, GaugeObservation};

use crate::error::IoError;

// ---------------------------------------------------------------------------
// ValidationCollector
// ---------------------------------------------------------------------------

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
///
/// Create a collector, push zero or more error messages, then call
/// [`finish`](Self::finish) to obtain `Ok(())` when everything is valid or a
/// single `Err` that summarises every violation.
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Standalone validation helpers
// ---------------------------------------------------------------------------

/// Check that every metadata record carries finite coordinates.
pub(crate) fn validate_metadata(records: &[GaugeMetadata]) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    for m in records {
        if !m.easting.is_finite() || !m.northing.is_finite() {
            c.push(format!(
                "gauge {} has non-finite coordinates ({}, {})",
                m.id, m.easting, m.northing
            ));
        }
    }
    c
}

/// Check that no observation row carries a negative rain depth.
pub(crate) fn validate_observations(rows: &[GaugeObservation]) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    for (i, o) in rows.iter().enumerate() {
        if o.rain_mm < 0.0 {
            c.push(format!(
                "row {i}: gauge {} has negative rain_mm {}",
                o.id, o.rain_mm
            ));
        }
    }
    c
}
