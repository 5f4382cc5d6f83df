use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a collection cycle and write the metric record to standard output.
    #[clap(name = "gather")]
    Gather(GatherArgs),

    /// Development tools.
    #[clap(name = "probe")]
    Probe(ProbeArgs),
}

#[derive(Parser)]
pub struct GatherArgs {
    #[clap(flatten)]
    pub envoy: EnvoyArgs,

    /// Keep gathering at a fixed cadence instead of exiting after one cycle.
    ///
    /// Accepts human-readable durations, for example: `30s` or `1m`.
    #[clap(long, env = "GATHER_INTERVAL")]
    pub interval: Option<humantime::Duration>,
}

#[derive(Parser)]
pub struct ProbeArgs {
    #[clap(flatten)]
    pub envoy: EnvoyArgs,
}

#[derive(Parser)]
pub struct EnvoyArgs {
    /// Gateway base URL, for example: `https://envoy.local`.
    ///
    /// A trailing slash is tolerated.
    #[clap(long = "envoy-url", env = "ENVOY_URL")]
    pub base_url: String,

    /// Owner-scoped token for the gateway's local API.
    #[clap(long = "bearer-token", env = "ENVOY_BEARER_TOKEN", hide_env_values = true)]
    pub bearer_token: String,

    /// Verify the gateway's TLS certificate.
    ///
    /// Off by default: recent Envoy firmware forces a redirect to HTTPS with a
    /// self-signed certificate, which would otherwise make the gateway
    /// permanently unreachable.
    #[clap(long = "verify-certificates", env = "ENVOY_VERIFY_CERTIFICATES")]
    pub verify_certificates: bool,
}
