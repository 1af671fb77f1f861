use std::sync::Arc;

use chrono::Utc;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method};
use serde_json::{json, Map, Value};

use crate::config::ClientConfig;
use crate::error::{BitvavoError, SdkResult};
use crate::logger::{Logger, NoopLogger};

/// Decoded JSON object, the payload shape for both request bodies and
/// successful responses.
pub type JsonObject = Map<String, Value>;

/// All endpoints live under this version prefix; it is part of the
/// signed message as well as the request URL.
const API_VERSION_PREFIX: &str = "/v2";

/// Signed REST client for the Bitvavo exchange API.
///
/// Stateless per call: credentials and the access window are fixed at
/// construction and shared read-only, so a single client can be cloned
/// and used from many tasks concurrently.
#[derive(Clone)]
pub struct BitvavoClient {
    config: ClientConfig,
    client: Client,
    logger: Arc<dyn Logger>,
}

impl BitvavoClient {
    /// Create a new client with the given configuration and a silent logger.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            client: Client::new(),
            logger: Arc::new(NoopLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Replace the HTTP client, e.g. to set timeouts or proxies.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Perform one signed API call.
    ///
    /// `path` is the endpoint below the version prefix and must start
    /// with a slash, e.g. `"/order"`. Query parameter order is
    /// significant: the query string is built once, in the order given,
    /// and used byte-for-byte in both the signature and the request URL.
    /// The same holds for the JSON body, which is serialized exactly
    /// once. An absent or empty body means no request payload is sent at
    /// all and nothing is appended to the signed message.
    ///
    /// `now` overrides the signing timestamp (epoch milliseconds) for
    /// reproducible requests; when `None` the wall clock is used.
    ///
    /// The response body is decoded as JSON regardless of HTTP status.
    /// A payload containing `errorCode` is an exchange rejection and
    /// becomes [`BitvavoError::Api`]; anything else is returned as the
    /// decoded object.
    pub async fn call(
        &self,
        path: &str,
        method: Method,
        parameters: &[(&str, &str)],
        body: Option<&JsonObject>,
        now: Option<i64>,
    ) -> SdkResult<JsonObject> {
        let now = now.unwrap_or_else(|| Utc::now().timestamp_millis());

        let endpoint = if parameters.is_empty() {
            format!("{API_VERSION_PREFIX}{path}")
        } else {
            let query = serde_urlencoded::to_string(parameters)?;
            format!("{API_VERSION_PREFIX}{path}?{query}")
        };

        // Serialized once; these exact bytes are signed and transmitted.
        let payload = match body {
            Some(body) if !body.is_empty() => Some(serde_json::to_string(body)?),
            _ => None,
        };

        let signature =
            self.config
                .credentials
                .sign(now, method.as_str(), &endpoint, payload.as_deref());
        let timestamp = now.to_string();

        // Best-effort trace; the access key never appears in full.
        self.logger.debug(
            "bitvavo api call",
            &json!({
                "headers": {
                    "Bitvavo-Access-Signature": &signature,
                    "Bitvavo-Access-Timestamp": &timestamp,
                    "Bitvavo-Access-Window": &self.config.access_window,
                    "User-Agent": &self.config.user_agent,
                },
                "method": method.as_str(),
                "path": path,
                "json": body.cloned().map(Value::Object),
            }),
        );

        let url = format!("{}{}", self.config.api_url, endpoint);
        let mut request = self
            .client
            .request(method, url)
            .header("Bitvavo-Access-Key", self.config.credentials.api_key())
            .header("Bitvavo-Access-Signature", signature.as_str())
            .header("Bitvavo-Access-Timestamp", timestamp.as_str())
            .header("Bitvavo-Access-Window", self.config.access_window.as_str())
            .header(USER_AGENT, self.config.user_agent.as_str())
            .header(CONTENT_TYPE, "application/json");
        if let Some(payload) = payload {
            request = request.body(payload);
        }

        let response = request.send().await?;
        let bytes = response.bytes().await?;
        let decoded: Value = serde_json::from_slice(&bytes)?;

        let object = match decoded {
            Value::Object(object) => object,
            other => {
                return Err(BitvavoError::InvalidResponse(format!(
                    "expected JSON object, got: {other}"
                )))
            }
        };

        if let Some(code) = object.get("errorCode") {
            return Err(BitvavoError::Api {
                message: object
                    .get("error")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                code: code.as_i64().unwrap_or(-1),
            });
        }

        Ok(object)
    }
}
