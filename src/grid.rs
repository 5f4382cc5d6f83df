use crate::api::envoy::{EnergyEntry, ProductionReport};

/// Number of legs on a three-phase supply.
pub const PHASE_COUNT: usize = 3;

/// Production-bucket category of the gateway's own energy interface meter.
const ENERGY_INTERFACE_METER: &str = "eim";

/// Consumption-bucket measurement covering the whole household draw.
const TOTAL_CONSUMPTION: &str = "total-consumption";

/// Consumption-bucket measurement of grid import minus export.
const NET_CONSUMPTION: &str = "net-consumption";

/// One category's instantaneous power: the aggregate plus one value per phase.
#[must_use]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PhaseReading {
    pub total_watts: i64,

    /// Per-phase watts in gateway-reported order. Phases the gateway did not
    /// report stay 0 rather than absent.
    pub phase_watts: [i64; PHASE_COUNT],
}

impl PhaseReading {
    /// Overwrite the reading from the entry.
    ///
    /// Fractional watts are truncated toward zero. Phases beyond the third
    /// are ignored, and phase slots the entry does not cover are left as-is.
    #[expect(clippy::cast_possible_truncation)]
    pub fn apply(&mut self, entry: &EnergyEntry) {
        self.total_watts = entry.watts_now as i64;
        for (slot, line) in self.phase_watts.iter_mut().zip(&entry.lines) {
            *slot = line.watts_now as i64;
        }
    }
}

/// Per-category readings reduced from one report.
///
/// Rebuilt from scratch every cycle: a category that is absent from the
/// report keeps its zero reading.
#[must_use]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct EnergyGridSnapshot {
    pub production: PhaseReading,
    pub consumption: PhaseReading,
    pub net: PhaseReading,
}

impl EnergyGridSnapshot {
    /// Fold the report into per-category readings by matching entry labels.
    ///
    /// Should multiple entries match the same target, the last one wins.
    pub fn reduce(report: &ProductionReport) -> Self {
        let mut snapshot = Self::default();
        for entry in &report.production {
            if entry.kind == ENERGY_INTERFACE_METER {
                snapshot.production.apply(entry);
            }
        }
        for entry in &report.consumption {
            if entry.measurement_type == TOTAL_CONSUMPTION {
                snapshot.consumption.apply(entry);
            }
            if entry.measurement_type == NET_CONSUMPTION {
                snapshot.net.apply(entry);
            }
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::envoy::LineMeasurement;

    fn entry(kind: &str, measurement_type: &str, watts_now: f64, lines: &[f64]) -> EnergyEntry {
        EnergyEntry {
            kind: kind.to_string(),
            measurement_type: measurement_type.to_string(),
            watts_now,
            lines: lines.iter().map(|&watts_now| LineMeasurement { watts_now }).collect(),
        }
    }

    #[test]
    fn apply_truncates_toward_zero() {
        let mut reading = PhaseReading::default();
        reading.apply(&entry("eim", "production", 1000.9, &[300.7, -0.4, 400.2]));
        assert_eq!(reading.total_watts, 1000);
        assert_eq!(reading.phase_watts, [300, 0, 400]);

        reading.apply(&entry("eim", "production", -1200.9, &[-50.9]));
        assert_eq!(reading.total_watts, -1200);
        assert_eq!(reading.phase_watts, [-50, 0, 400]);
    }

    #[test]
    fn apply_ignores_phases_beyond_the_third() {
        let mut reading = PhaseReading::default();
        reading.apply(&entry("eim", "production", 100.0, &[10.0, 20.0, 30.0, 40.0]));
        assert_eq!(reading.phase_watts, [10, 20, 30]);
    }

    #[test]
    fn missing_phases_stay_zero() {
        let mut reading = PhaseReading::default();
        reading.apply(&entry("eim", "production", 500.0, &[250.0, 250.0]));
        assert_eq!(reading.phase_watts, [250, 250, 0]);
    }

    #[test]
    fn reduce_picks_labelled_entries() {
        let report = ProductionReport {
            production: vec![
                entry("inverters", "", 1007.0, &[]),
                entry("eim", "production", 1000.0, &[300.0, 300.0, 400.0]),
            ],
            consumption: vec![
                entry("eim", "total-consumption", 800.0, &[250.0, 250.0, 300.0]),
                entry("eim", "net-consumption", 200.0, &[50.0, 50.0, 100.0]),
            ],
        };
        let snapshot = EnergyGridSnapshot::reduce(&report);
        assert_eq!(snapshot.production.total_watts, 1000);
        assert_eq!(snapshot.production.phase_watts, [300, 300, 400]);
        assert_eq!(snapshot.consumption.total_watts, 800);
        assert_eq!(snapshot.consumption.phase_watts, [250, 250, 300]);
        assert_eq!(snapshot.net.total_watts, 200);
        assert_eq!(snapshot.net.phase_watts, [50, 50, 100]);
    }

    #[test]
    fn reduce_ignores_unrelated_entries() {
        let report = ProductionReport {
            production: vec![entry("inverters", "", 1007.0, &[500.0, 507.0])],
            consumption: vec![entry("eim", "frequency", 50.0, &[50.0])],
        };
        assert_eq!(EnergyGridSnapshot::reduce(&report), EnergyGridSnapshot::default());
    }

    #[test]
    fn reduce_last_match_wins() {
        let report = ProductionReport {
            production: vec![
                entry("eim", "production", 1000.0, &[300.0, 300.0, 400.0]),
                entry("eim", "production", 900.0, &[300.0, 300.0]),
            ],
            consumption: vec![],
        };
        let snapshot = EnergyGridSnapshot::reduce(&report);
        assert_eq!(snapshot.production.total_watts, 900);
        // The second entry overwrote the phases it reported, not the third.
        assert_eq!(snapshot.production.phase_watts, [300, 300, 400]);
    }
}
