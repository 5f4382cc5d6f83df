use chrono::Local;

use crate::{
    api::envoy::{Api, ProductionReport},
    cli::EnvoyArgs,
    grid::EnergyGridSnapshot,
    metric::EnvoyMetric,
    prelude::*,
};

/// Runs one collection cycle per call, stateless across cycles.
pub struct Collector {
    api: Api,
}

impl Collector {
    pub fn try_new(args: &EnvoyArgs) -> Result<Self> {
        Ok(Self { api: Api::try_new(args)? })
    }

    /// Run one collection cycle.
    ///
    /// A gateway off the network is an expected condition on a home LAN: the
    /// cycle still succeeds and yields a record with every field absent. So
    /// does an unreadable payload, which yields all-zero fields instead. Only
    /// failing to read the body of an exchange that did succeed is surfaced.
    #[instrument(skip_all)]
    pub async fn collect(&self) -> Result<EnvoyMetric> {
        let timestamp = Local::now();
        let response = match self.api.get_production().await {
            Ok(response) => response,
            Err(error) => {
                warn!("the gateway is unreachable: {error:#}");
                return Ok(EnvoyMetric::absent(timestamp));
            }
        };
        let body = response.bytes().await.context("failed to read the gateway response")?;
        let report = ProductionReport::decode_lenient(&body);
        let snapshot = EnergyGridSnapshot::reduce(&report);
        Ok(EnvoyMetric::from_snapshot(&snapshot, timestamp))
    }
}
