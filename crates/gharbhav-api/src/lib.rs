// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use gharbhav_app::{PredictionSummary, ProfileSnapshot};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            bail!("api.base_url must not be empty");
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn predict(&self, snapshot: &ProfileSnapshot) -> Result<Prediction> {
        let body = request_body(snapshot);
        let response = self
            .http
            .post(format!("{}/api/predict", self.base_url))
            .json(&body)
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }

        let parsed: PredictEnvelope = response.json().context("decode prediction response")?;
        if parsed.status == "success"
            && let Some(prediction) = parsed.prediction
        {
            return Ok(prediction);
        }
        bail!("{}", failure_message(parsed.message.as_deref()))
    }

    pub fn health(&self) -> Result<()> {
        let response = self
            .http
            .get(format!("{}/api/health", self.base_url))
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }

        let parsed: HealthEnvelope = response.json().context("decode health response")?;
        if parsed.status != "healthy" {
            bail!(
                "prediction service reports status {:?} -- check the model files on the server",
                parsed.status
            );
        }
        Ok(())
    }
}

/// Numeric-set values become JSON numbers only when the whole string parses
/// as a finite float; everything else passes through as the raw string.
pub fn request_body(snapshot: &ProfileSnapshot) -> serde_json::Value {
    let mut body = serde_json::Map::new();
    for (field, value) in &snapshot.fields {
        let encoded = numeric_value(field.is_numeric(), value)
            .unwrap_or_else(|| serde_json::Value::String(value.clone()));
        body.insert(field.as_str().to_owned(), encoded);
    }
    serde_json::Value::Object(body)
}

fn numeric_value(is_numeric: bool, raw: &str) -> Option<serde_json::Value> {
    if !is_numeric {
        return None;
    }
    let number = raw.trim().parse::<f64>().ok()?;
    serde_json::Number::from_f64(number).map(serde_json::Value::Number)
}

fn failure_message(message: Option<&str>) -> String {
    match message {
        Some(message) if !message.is_empty() => message.to_owned(),
        _ => "prediction failed".to_owned(),
    }
}

fn connection_error(base_url: &str, error: reqwest::Error) -> anyhow::Error {
    anyhow!(
        "cannot reach {} -- check that the prediction service is running ({})",
        base_url,
        error
    )
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<PredictEnvelope>(body)
        && let Some(message) = parsed.message
        && !message.is_empty()
    {
        return anyhow!("{message}");
    }

    if body.len() < 100 && !body.contains('{') && !body.trim().is_empty() {
        return anyhow!("server error ({}): {}", status.as_u16(), body.trim());
    }

    anyhow!("server returned {}", status.as_u16())
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub formatted_price: String,
    pub formatted_price_inr: String,
    pub confidence: f64,
    #[serde(default)]
    pub price_lakhs: Option<f64>,
    #[serde(default)]
    pub price_inr: Option<f64>,
}

impl Prediction {
    pub fn summary(&self) -> PredictionSummary {
        PredictionSummary {
            formatted_price: self.formatted_price.clone(),
            formatted_price_inr: self.formatted_price_inr.clone(),
            confidence: self.confidence,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PredictEnvelope {
    #[serde(default)]
    status: String,
    #[serde(default)]
    prediction: Option<Prediction>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HealthEnvelope {
    #[serde(default)]
    status: String,
}

#[cfg(test)]
mod tests {
    use super::{Client, clean_error_response, failure_message, request_body};
    use gharbhav_app::{FieldId, FormState, apply_profile};
    use reqwest::StatusCode;
    use std::time::Duration;

    #[test]
    fn client_rejects_empty_base_url() {
        let error = Client::new("", Duration::from_secs(1)).expect_err("empty url should fail");
        assert!(error.to_string().contains("base_url"));
    }

    #[test]
    fn client_trims_trailing_slashes() {
        let client =
            Client::new("http://localhost:5000///", Duration::from_secs(1)).expect("client");
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn request_body_coerces_parseable_numerics_only() {
        let mut form = FormState::new(2026);
        apply_profile(&mut form, "mumbai").expect("known preset");
        form.set(FieldId::SizeInSqFt, "12a0");

        let body = request_body(&form.snapshot());
        assert_eq!(body["BHK"], serde_json::json!(3.0));
        assert_eq!(body["Year_Built"], serde_json::json!(2018.0));
        assert_eq!(body["Age_of_Property"], serde_json::json!(8.0));
        assert_eq!(body["Size_in_SqFt"], serde_json::json!("12a0"));
        assert_eq!(body["State"], serde_json::json!("maharashtra"));
    }

    #[test]
    fn request_body_leaves_empty_values_as_strings() {
        let form = FormState::new(2026);
        let body = request_body(&form.snapshot());
        assert_eq!(body["BHK"], serde_json::json!(""));
        assert_eq!(body["City"], serde_json::json!(""));
    }

    #[test]
    fn request_body_carries_all_nineteen_wire_keys() {
        let form = FormState::new(2026);
        let body = request_body(&form.snapshot());
        let object = body.as_object().expect("object body");
        assert_eq!(object.len(), FieldId::ALL.len());
        for field in FieldId::ALL {
            assert!(object.contains_key(field.as_str()), "{}", field.as_str());
        }
    }

    #[test]
    fn failure_message_prefers_the_backend_text() {
        assert_eq!(
            failure_message(Some("Model not loaded")),
            "Model not loaded",
        );
        assert_eq!(failure_message(Some("")), "prediction failed");
        assert_eq!(failure_message(None), "prediction failed");
    }

    #[test]
    fn clean_error_response_extracts_the_envelope_message() {
        let error = clean_error_response(
            StatusCode::BAD_REQUEST,
            r#"{"status":"error","message":"Invalid BHK"}"#,
        );
        assert_eq!(error.to_string(), "Invalid BHK");
    }

    #[test]
    fn clean_error_response_falls_back_to_the_status_code() {
        let error = clean_error_response(StatusCode::BAD_GATEWAY, "<html>upstream</html>");
        assert!(error.to_string().contains("502"));
    }
}
