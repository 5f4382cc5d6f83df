#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod collector;
mod grid;
mod metric;
mod prelude;
mod sink;

use std::{io, time::Duration};

use clap::{Parser, crate_version};
use tokio::time::sleep;

use crate::{
    api::envoy,
    cli::{Args, Command},
    collector::Collector,
    prelude::*,
    sink::{LineProtocolSink, MetricSink},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    // Logs go to stderr: stdout is reserved for the line protocol.
    tracing_subscriber::fmt().without_time().compact().with_writer(io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Gather(args) => {
            let collector = Collector::try_new(&args.envoy)?;
            let mut sink = LineProtocolSink::new(io::stdout().lock());
            let interval: Option<Duration> = args.interval.map(Into::into);
            loop {
                let metric = collector.collect().await?;
                sink.write(&metric)?;
                match interval {
                    Some(interval) => sleep(interval).await,
                    None => break Ok(()),
                }
            }
        }

        Command::Probe(args) => {
            let response = envoy::Api::try_new(&args.envoy)?
                .get_production()
                .await
                .context("the gateway is unreachable")?;
            println!("{}", response.text().await?);
            Ok(())
        }
    }
}
