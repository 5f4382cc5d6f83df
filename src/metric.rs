use chrono::{DateTime, Local};

use crate::grid::EnergyGridSnapshot;

/// Measurement name under which the record is emitted.
pub const MEASUREMENT: &str = "envoy";

/// The flat record handed to the sink: ten fields, an empty tag set, and the
/// collection timestamp.
///
/// Fields are three-state: a value, an explicit zero, or absent. A gateway
/// that dropped off the network produces all-absent fields, which is distinct
/// from the all-zero record produced by an unreadable payload.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EnvoyMetric {
    pub timestamp: DateTime<Local>,
    pub total: Option<i64>,
    pub p1_production: Option<i64>,
    pub p1_consumption: Option<i64>,
    pub p1_net: Option<i64>,
    pub p2_production: Option<i64>,
    pub p2_consumption: Option<i64>,
    pub p2_net: Option<i64>,
    pub p3_production: Option<i64>,
    pub p3_consumption: Option<i64>,
    pub p3_net: Option<i64>,
}

impl EnvoyMetric {
    /// Record for a gateway that dropped off the network: every field absent.
    pub const fn absent(timestamp: DateTime<Local>) -> Self {
        Self {
            timestamp,
            total: None,
            p1_production: None,
            p1_consumption: None,
            p1_net: None,
            p2_production: None,
            p2_consumption: None,
            p2_net: None,
            p3_production: None,
            p3_consumption: None,
            p3_net: None,
        }
    }

    /// Map the snapshot onto the field set.
    ///
    /// `total` carries the net reading's aggregate, not a sum of production
    /// and consumption.
    pub fn from_snapshot(snapshot: &EnergyGridSnapshot, timestamp: DateTime<Local>) -> Self {
        Self {
            timestamp,
            total: Some(snapshot.net.total_watts),
            p1_production: Some(snapshot.production.phase_watts[0]),
            p1_consumption: Some(snapshot.consumption.phase_watts[0]),
            p1_net: Some(snapshot.net.phase_watts[0]),
            p2_production: Some(snapshot.production.phase_watts[1]),
            p2_consumption: Some(snapshot.consumption.phase_watts[1]),
            p2_net: Some(snapshot.net.phase_watts[1]),
            p3_production: Some(snapshot.production.phase_watts[2]),
            p3_consumption: Some(snapshot.consumption.phase_watts[2]),
            p3_net: Some(snapshot.net.phase_watts[2]),
        }
    }

    /// Named fields in emission order.
    #[must_use]
    pub const fn fields(&self) -> [(&'static str, Option<i64>); 10] {
        [
            ("total", self.total),
            ("p1_production", self.p1_production),
            ("p1_consumption", self.p1_consumption),
            ("p1_net", self.p1_net),
            ("p2_production", self.p2_production),
            ("p2_consumption", self.p2_consumption),
            ("p2_net", self.p2_net),
            ("p3_production", self.p3_production),
            ("p3_consumption", self.p3_consumption),
            ("p3_net", self.p3_net),
        ]
    }
}
