use axum::http::StatusCode;
use serde_json::{Value, json};

/// The two GNews v4 endpoints this server fronts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    TopHeadlines,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Search => "search",
            Endpoint::TopHeadlines => "top-headlines",
        }
    }
}

/// What came back from GNews: either the upstream's own status and JSON body,
/// or a synthetic 500 when the request never completed.
#[derive(Debug)]
pub struct UpstreamResult {
    pub status: StatusCode,
    pub body: Value,
}

impl UpstreamResult {
    fn network_failure() -> UpstreamResult {
        UpstreamResult {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: json!({ "errors": ["Network error occurred"] }),
        }
    }
}

pub struct GNewsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GNewsClient {
    pub fn new(base_url: &str, api_key: &str) -> GNewsClient {
        GNewsClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Issues a single GET with the api key and the normalized parameters.
    /// The upstream's status and body are relayed as-is, whatever they are;
    /// transport errors and unparseable bodies collapse to a generic 500.
    /// Nothing is retried.
    pub async fn fetch(&self, endpoint: Endpoint, params: &[(String, String)]) -> UpstreamResult {
        let url = format!("{}/{}", self.base_url, endpoint.as_str());
        tracing::info!(endpoint = endpoint.as_str(), "proxying request to gnews");

        let res = self
            .http
            .get(&url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await;

        match res {
            Ok(res) => {
                let status = res.status();
                match res.json::<Value>().await {
                    Ok(body) => UpstreamResult { status, body },
                    Err(e) => {
                        tracing::error!("error decoding gnews response body: {:#}", e);
                        UpstreamResult::network_failure()
                    }
                }
            }
            Err(e) => {
                tracing::error!("error reaching gnews: {:#}", e);
                UpstreamResult::network_failure()
            }
        }
    }
}
