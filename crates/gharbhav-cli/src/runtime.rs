// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use gharbhav_api::Client;
use gharbhav_app::ProfileSnapshot;
use gharbhav_tui::{InternalEvent, PredictRuntime, PredictionEvent};
use std::sync::mpsc::Sender;
use std::thread;

pub struct HttpRuntime {
    client: Client,
}

impl HttpRuntime {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl PredictRuntime for HttpRuntime {
    fn spawn_prediction(
        &mut self,
        request_id: u64,
        snapshot: &ProfileSnapshot,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let client = self.client.clone();
        let snapshot = snapshot.clone();
        thread::spawn(move || {
            let event = match client.predict(&snapshot) {
                Ok(prediction) => PredictionEvent::Completed {
                    request_id,
                    prediction: prediction.summary(),
                },
                Err(error) => PredictionEvent::Failed {
                    request_id,
                    error: error.to_string(),
                },
            };
            // The UI may already be gone; a closed channel is fine.
            let _ = tx.send(InternalEvent::Prediction(event));
        });
        Ok(())
    }
}
