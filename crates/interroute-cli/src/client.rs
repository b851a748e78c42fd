//! HTTP client for the InterRoute server API.

use anyhow::{bail, Context, Result};
use reqwest::blocking::{Client, Response};
use serde_json::{json, Value};

use interroute_core::{CargoDeclaration, Country, TransportMode};

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` e.g. "http://localhost:3000".
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn countries(&self) -> Result<Value> {
        self.get("/v1/countries")
    }

    pub fn options(&self, origin: Country, destination: Country) -> Result<Value> {
        self.get(&format!("/v1/routes/{}/{}", origin.code(), destination.code()))
    }

    pub fn plan(
        &self,
        origin: Country,
        destination: Country,
        mode: TransportMode,
    ) -> Result<Value> {
        self.get(&format!(
            "/v1/routes/{}/{}/{}",
            origin.code(),
            destination.code(),
            mode
        ))
    }

    pub fn quote(
        &self,
        origin: Country,
        destination: Country,
        mode: TransportMode,
        cargo: &CargoDeclaration,
    ) -> Result<Value> {
        let url = format!("{}/v1/quotes", self.base_url);
        let body = json!({
            "origin": origin.code(),
            "destination": destination.code(),
            "mode": mode,
            "cargo": cargo,
        });
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .context("Failed to send quote request")?;
        read_json(response)
    }

    fn get(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Failed to reach {}", url))?;
        read_json(response)
    }
}

fn read_json(response: Response) -> Result<Value> {
    let status = response.status();
    let body: Value = response.json().context("Server returned invalid JSON")?;
    if !status.is_success() {
        let message = body["message"].as_str().unwrap_or("request failed");
        bail!("server error {}: {}", status.as_u16(), message);
    }
    Ok(body)
}
