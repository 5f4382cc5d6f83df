use std::io::Write;

use itertools::Itertools;

use crate::{
    metric::{EnvoyMetric, MEASUREMENT},
    prelude::*,
};

/// Where finished records go. Chosen and wired by the composition root.
pub trait MetricSink {
    fn write(&mut self, metric: &EnvoyMetric) -> Result;
}

/// Serializes records as InfluxDB line protocol, the `exec` input contract of
/// Telegraf-style hosts.
///
/// Absent fields are omitted, the way the host accumulator drops no-value
/// fields. The protocol cannot carry an empty field set, so an all-absent
/// record produces no line at all.
pub struct LineProtocolSink<W> {
    writer: W,
}

impl<W: Write> LineProtocolSink<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> MetricSink for LineProtocolSink<W> {
    fn write(&mut self, metric: &EnvoyMetric) -> Result {
        let fields = metric
            .fields()
            .into_iter()
            .filter_map(|(name, value)| value.map(|value| format!("{name}={value}i")))
            .join(",");
        if fields.is_empty() {
            debug!("all fields are absent, skipping the line");
            return Ok(());
        }
        let timestamp = metric
            .timestamp
            .timestamp_nanos_opt()
            .context("the timestamp does not fit into nanoseconds")?;
        writeln!(self.writer, "{MEASUREMENT} {fields} {timestamp}")?;
        self.writer.flush()?;
        Ok(())
    }
}
