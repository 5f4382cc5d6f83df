mod report;

use reqwest::{
    ClientBuilder,
    Response,
    Url,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};

pub use self::report::{EnergyEntry, LineMeasurement, ProductionReport};
use crate::{cli::EnvoyArgs, prelude::*};

/// Metered production report endpoint, relative to the gateway root.
const PRODUCTION_ENDPOINT: &str = "production.json?details=1";

pub struct Api {
    client: reqwest::Client,
    production_url: Url,
}

impl Api {
    pub fn try_new(args: &EnvoyArgs) -> Result<Self> {
        let headers = HeaderMap::from_iter([
            (
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", args.bearer_token))
                    .context("the bearer token is not a valid header value")?,
            ),
            (ACCEPT, HeaderValue::from_static("application/json")),
        ]);
        // Recent Envoy firmware redirects to HTTPS with a self-signed certificate,
        // so the client trusts any certificate unless verification is opted back in.
        let client = ClientBuilder::new()
            .default_headers(headers)
            .danger_accept_invalid_certs(!args.verify_certificates)
            .danger_accept_invalid_hostnames(!args.verify_certificates)
            .build()?;
        let production_url =
            Url::parse(&format!("{}/{PRODUCTION_ENDPOINT}", args.base_url.trim_end_matches('/')))
                .with_context(|| format!("invalid gateway URL `{}`", args.base_url))?;
        Ok(Self { client, production_url })
    }

    /// Issue the production report request.
    ///
    /// The transport result is returned as-is so that the caller can tell a
    /// gateway that dropped off the network from a response it failed to read.
    pub async fn get_production(&self) -> reqwest::Result<Response> {
        self.client.get(self.production_url.clone()).send().await
    }
}
