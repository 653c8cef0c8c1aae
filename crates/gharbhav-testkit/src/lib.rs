// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, anyhow};
use gharbhav_app::{FormState, ProfileSnapshot, apply_profile};
use std::io::Read;
use std::thread::{self, JoinHandle};
use tiny_http::{Header, Response, Server};

pub const FIXTURE_YEAR: i32 = 2026;

/// A complete, valid snapshot built the way the UI would build it: blank
/// form, mumbai preset applied through the two-phase autofill.
pub fn filled_snapshot() -> ProfileSnapshot {
    let mut form = FormState::new(FIXTURE_YEAR);
    apply_profile(&mut form, "mumbai").expect("mumbai preset exists");
    form.snapshot()
}

#[derive(Debug, Clone, PartialEq)]
pub enum CannedReply {
    Success {
        formatted_price: &'static str,
        formatted_price_inr: &'static str,
        confidence: f64,
    },
    Failure {
        message: &'static str,
    },
    Healthy,
    Json {
        code: u16,
        body: String,
    },
}

impl CannedReply {
    fn render(&self) -> (u16, String) {
        match self {
            Self::Success {
                formatted_price,
                formatted_price_inr,
                confidence,
            } => (
                200,
                serde_json::json!({
                    "status": "success",
                    "prediction": {
                        "formatted_price": formatted_price,
                        "formatted_price_inr": formatted_price_inr,
                        "confidence": confidence,
                    },
                })
                .to_string(),
            ),
            Self::Failure { message } => (
                200,
                serde_json::json!({ "status": "failure", "message": message }).to_string(),
            ),
            Self::Healthy => (
                200,
                serde_json::json!({ "status": "healthy", "model_loaded": true }).to_string(),
            ),
            Self::Json { code, body } => (*code, body.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.body).map_err(|error| anyhow!("decode request body: {error}"))
    }
}

/// One-shot in-process stand-in for the prediction service: answers the
/// given replies in order, records what it received, then stops.
pub struct MockBackend {
    base_url: String,
    handle: JoinHandle<Vec<RecordedRequest>>,
}

impl MockBackend {
    pub fn start(replies: Vec<CannedReply>) -> Result<Self> {
        let server =
            Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock backend: {error}"))?;
        let base_url = format!("http://{}", server.server_addr());

        let handle = thread::spawn(move || {
            let mut recorded = Vec::new();
            for reply in replies {
                let mut request = server.recv().expect("request expected");
                let mut body = String::new();
                request
                    .as_reader()
                    .read_to_string(&mut body)
                    .expect("read request body");
                recorded.push(RecordedRequest {
                    method: request.method().to_string(),
                    url: request.url().to_owned(),
                    body,
                });

                let (code, payload) = reply.render();
                let response = Response::from_string(payload)
                    .with_status_code(code)
                    .with_header(
                        Header::from_bytes("Content-Type", "application/json")
                            .expect("valid content type header"),
                    );
                request.respond(response).expect("response should succeed");
            }
            recorded
        });

        Ok(Self { base_url, handle })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins the server thread and returns every request it saw.
    pub fn finish(self) -> Vec<RecordedRequest> {
        self.handle.join().expect("mock backend thread should join")
    }
}

#[cfg(test)]
mod tests {
    use super::{CannedReply, filled_snapshot};
    use gharbhav_app::FieldId;

    #[test]
    fn filled_snapshot_is_complete() {
        let snapshot = filled_snapshot();
        assert_eq!(snapshot.fields.len(), FieldId::ALL.len());
        assert_eq!(snapshot.get(FieldId::City), Some("mumbai"));
        assert_eq!(snapshot.get(FieldId::AgeOfProperty), Some("8"));
    }

    #[test]
    fn canned_replies_render_the_service_envelopes() {
        let (code, body) = CannedReply::Failure {
            message: "Model unavailable",
        }
        .render();
        assert_eq!(code, 200);
        assert!(body.contains("\"status\":\"failure\""));
        assert!(body.contains("Model unavailable"));

        let (code, body) = CannedReply::Success {
            formatted_price: "₹95.20 Lakhs",
            formatted_price_inr: "₹9,520,000",
            confidence: 85.2,
        }
        .render();
        assert_eq!(code, 200);
        assert!(body.contains("formatted_price_inr"));
    }
}
