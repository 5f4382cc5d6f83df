use serde::Deserialize;

use crate::prelude::*;

/// Decoded `production.json` payload.
///
/// The gateway segments readings by entry labels rather than by fixed fields:
/// both buckets carry the same entry shape, and the labels decide what a
/// value means.
#[must_use]
#[derive(Default, Deserialize)]
pub struct ProductionReport {
    #[serde(default)]
    pub production: Vec<EnergyEntry>,

    #[serde(default)]
    pub consumption: Vec<EnergyEntry>,
}

impl ProductionReport {
    /// Decode the payload, swallowing malformed JSON.
    ///
    /// A glitching gateway must degrade to zero readings rather than fail the
    /// cycle, so the decode error is only logged and the empty report is
    /// substituted.
    pub fn decode_lenient(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_else(|error| {
            warn!("failed to decode the production report: {error:#}");
            Self::default()
        })
    }
}

/// One reading in either bucket of the report.
#[derive(Default, Deserialize)]
pub struct EnergyEntry {
    /// Measurement source category, `eim` being the gateway's own meter.
    #[serde(default, rename = "type")]
    pub kind: String,

    #[serde(default, rename = "measurementType")]
    pub measurement_type: String,

    /// Instantaneous power in watts, negative when exporting.
    #[serde(default, rename = "wNow")]
    pub watts_now: f64,

    /// Per-phase readings. Some firmware versions spell the key `lines`.
    #[serde(default, rename = "Lines", alias = "lines")]
    pub lines: Vec<LineMeasurement>,
}

#[derive(Default, Deserialize)]
pub struct LineMeasurement {
    #[serde(default, rename = "wNow")]
    pub watts_now: f64,
}
