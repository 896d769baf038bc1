//! HTTPS lookup adapter for ipify-compatible services.
//!
//! The endpoint must answer `GET` with a JSON object carrying an `ip` string,
//! e.g. `{"ip":"203.0.113.7"}`.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::{debug, instrument};

use ipsnap_core::{
    application::{FetchError, ports::IpSource},
    domain::PublicIp,
};

/// Lookup service used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.ipify.org?format=json";

/// Upper bound for the whole request, connect included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    ip: Option<String>,
}

/// Production [`IpSource`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct IpifySource {
    client: Client,
    endpoint: String,
}

impl IpifySource {
    /// Source pointed at [`DEFAULT_ENDPOINT`] with [`DEFAULT_TIMEOUT`].
    pub fn new() -> Result<Self, FetchError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)
    }

    /// Source pointed at a custom endpoint.
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ipsnap/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl IpSource for IpifySource {
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    fn fetch(&self) -> Result<PublicIp, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| FetchError::transport(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "Lookup responded");
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| FetchError::transport(e.to_string()))?;

        parse_body(&body)
    }
}

fn parse_body(body: &str) -> Result<PublicIp, FetchError> {
    // Only a JSON object is accepted; arrays and scalars are decode errors.
    let object: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(body).map_err(|e| FetchError::decode(e.to_string()))?;

    let decoded: LookupResponse = serde_json::from_value(serde_json::Value::Object(object))
        .map_err(|e| FetchError::decode(e.to_string()))?;

    decoded
        .ip
        .map(PublicIp::new)
        .ok_or(FetchError::MissingField { field: "ip" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn source_for(server: &MockServer) -> IpifySource {
        IpifySource::with_endpoint(server.url("/"), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn parse_body_extracts_ip() {
        let ip = parse_body(r#"{"ip":"184.162.7.66"}"#).unwrap();
        assert_eq!(ip.as_str(), "184.162.7.66");
    }

    #[test]
    fn parse_body_keeps_value_verbatim() {
        let ip = parse_body(r#"{"ip":" 2001:db8::1 "}"#).unwrap();
        assert_eq!(ip.as_str(), " 2001:db8::1 ");
    }

    #[test]
    fn parse_body_missing_field() {
        assert_eq!(
            parse_body(r#"{"address":"1.2.3.4"}"#),
            Err(FetchError::MissingField { field: "ip" })
        );
    }

    #[test]
    fn parse_body_rejects_array_with_ip_like_element() {
        assert!(matches!(
            parse_body(r#"["1.2.3.4"]"#),
            Err(FetchError::Decode { .. })
        ));
        assert!(matches!(
            parse_body(r#""1.2.3.4""#),
            Err(FetchError::Decode { .. })
        ));
    }

    #[test]
    fn parse_body_rejects_non_json_and_wrong_types() {
        assert!(matches!(
            parse_body("184.162.7.66"),
            Err(FetchError::Decode { .. })
        ));
        assert!(matches!(
            parse_body(r#"{"ip":42}"#),
            Err(FetchError::Decode { .. })
        ));
        assert!(matches!(
            parse_body(r#"["1.2.3.4"]"#),
            Err(FetchError::Decode { .. })
        ));
    }

    #[test]
    fn default_source_targets_ipify() {
        let source = IpifySource::new().unwrap();
        assert_eq!(source.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn fetch_returns_ip_from_service() {
        let server = MockServer::start();
        let lookup = server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({ "ip": "184.162.7.66" }));
        });

        let ip = source_for(&server).fetch().unwrap();

        lookup.assert();
        assert_eq!(ip, PublicIp::new("184.162.7.66"));
    }

    #[test]
    fn fetch_maps_server_error_to_status() {
        let server = MockServer::start();
        let lookup = server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(503).body("unavailable");
        });

        let err = source_for(&server).fetch().unwrap_err();

        lookup.assert();
        assert_eq!(err, FetchError::Status { status: 503 });
    }

    #[test]
    fn fetch_maps_bad_body_to_decode() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200).body("<html>not json</html>");
        });

        let err = source_for(&server).fetch().unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[test]
    fn fetch_rejects_array_body() {
        let server = MockServer::start();
        let lookup = server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!(["6.6.6.6"]));
        });

        let err = source_for(&server).fetch().unwrap_err();

        lookup.assert();
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[test]
    fn fetch_unreachable_host_is_transport_error() {
        // Grab a free port, then release it so nothing is listening there.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let source = IpifySource::with_endpoint(
            format!("http://127.0.0.1:{port}/"),
            Duration::from_millis(500),
        )
        .unwrap();

        assert!(matches!(source.fetch(), Err(FetchError::Transport { .. })));
    }
}
