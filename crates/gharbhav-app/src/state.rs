// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowPhase {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultsVisibility {
    Hidden,
    Visible,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSummary {
    pub formatted_price: String,
    pub formatted_price_inr: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub theme: Theme,
    pub phase: WorkflowPhase,
    pub results: ResultsVisibility,
    pub prediction: Option<PredictionSummary>,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            phase: WorkflowPhase::Idle,
            results: ResultsVisibility::Hidden,
            prediction: None,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    ToggleTheme,
    StartSubmission,
    AcceptPrediction(PredictionSummary),
    RejectPrediction(String),
    HideResults,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    ThemeChanged(Theme),
    SubmissionStarted,
    SubmissionBlocked,
    PredictionAccepted,
    PredictionRejected(String),
    ResultsHidden,
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::ToggleTheme => {
                self.theme = self.theme.toggle();
                vec![AppEvent::ThemeChanged(self.theme)]
            }
            AppCommand::StartSubmission => {
                if self.phase == WorkflowPhase::Submitting {
                    return vec![AppEvent::SubmissionBlocked];
                }
                self.phase = WorkflowPhase::Submitting;
                vec![AppEvent::SubmissionStarted]
            }
            AppCommand::AcceptPrediction(summary) => {
                self.phase = WorkflowPhase::Idle;
                self.results = ResultsVisibility::Visible;
                self.prediction = Some(summary);
                vec![AppEvent::PredictionAccepted]
            }
            AppCommand::RejectPrediction(message) => {
                // Results stay exactly as they were; only the phase resets.
                self.phase = WorkflowPhase::Idle;
                vec![AppEvent::PredictionRejected(message)]
            }
            AppCommand::HideResults => {
                self.results = ResultsVisibility::Hidden;
                self.prediction = None;
                vec![AppEvent::ResultsHidden]
            }
            AppCommand::SetStatus(message) => {
                self.status_line = Some(message.clone());
                vec![AppEvent::StatusUpdated(message)]
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }
}
