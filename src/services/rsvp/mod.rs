// RSVP service
// Posts guest replies to the form backend and verifies promo codes

use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::models::config::SiteConfig;
use crate::models::rsvp::Rsvp;

/// Response shape of the promo verification endpoint
#[derive(Debug, Deserialize)]
struct PromoVerdict {
    valid: bool,
}

/// HTTP client for the RSVP form backend
pub struct RsvpService {
    client: Client,
    form_endpoint: String,
    promo_endpoint: String,
}

impl RsvpService {
    pub fn new(form_endpoint: impl Into<String>, promo_endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .context("Failed to build RSVP HTTP client")?;

        Ok(Self {
            client,
            form_endpoint: form_endpoint.into(),
            promo_endpoint: promo_endpoint.into(),
        })
    }

    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        Self::new(config.rsvp_endpoint.clone(), config.promo_endpoint.clone())
    }

    /// Submit one reply as a URL-encoded form post
    pub fn submit(&self, rsvp: &Rsvp) -> Result<()> {
        if !self.form_endpoint.starts_with("https://") {
            return Err(anyhow!("RSVP endpoint must use HTTPS"));
        }

        let body = encode_form(&rsvp.form_fields());
        let response = self
            .client
            .post(&self.form_endpoint)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .context("Failed to send RSVP")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("RSVP submission failed with status {}", status));
        }

        log::info!("RSVP submitted for {}", rsvp.guest_name);
        Ok(())
    }

    /// Check a promo code against the verification endpoint
    ///
    /// Returns `Ok(false)` for a well-formed "invalid code" answer; network
    /// and protocol failures are errors.
    pub fn verify_promo(&self, code: &str) -> Result<bool> {
        if code.trim().is_empty() {
            return Ok(false);
        }

        let response = self
            .client
            .post(&self.promo_endpoint)
            .json(&serde_json::json!({ "promoCode": code }))
            .send()
            .context("Failed to reach promo verification endpoint")?;

        if !response.status().is_success() {
            log::warn!(
                "Promo verification returned status {}",
                response.status()
            );
            return Ok(false);
        }

        let verdict: PromoVerdict = response
            .json()
            .context("Malformed promo verification response")?;
        Ok(verdict.valid)
    }
}

/// Encode form fields as an application/x-www-form-urlencoded body
fn encode_form(fields: &[(&'static str, String)]) -> String {
    fields
        .iter()
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
