use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    CONNECTION_FAILED_MESSAGE, DEFAULT_STRUGGLE, SCANNING_MESSAGE, SERVER_ERROR_PREFIX,
};
use crate::error::{TransportError, UnknownStruggle};

// Types shared across multiple modules

// Structured location picked in the form. Only the formatted text goes on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Place {
    pub formatted: String,
}

impl Place {
    pub fn new(formatted: impl Into<String>) -> Self {
        Self {
            formatted: formatted.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Struggle {
    Passion,
    Love,
    Career,
    Money,
    Health,
    Purpose,
}

impl Struggle {
    pub const ALL: [Struggle; 6] = [
        Struggle::Passion,
        Struggle::Love,
        Struggle::Career,
        Struggle::Money,
        Struggle::Health,
        Struggle::Purpose,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Struggle::Passion => DEFAULT_STRUGGLE,
            Struggle::Love => "Love",
            Struggle::Career => "Career",
            Struggle::Money => "Money",
            Struggle::Health => "Health",
            Struggle::Purpose => "Purpose",
        }
    }
}

impl Default for Struggle {
    fn default() -> Self {
        Struggle::Passion
    }
}

impl fmt::Display for Struggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Struggle {
    type Err = UnknownStruggle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Struggle::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownStruggle(wanted.to_string()))
    }
}

/// Snapshot of the five form fields at the moment of a submission.
///
/// Date and time are kept exactly as the widgets formatted them; the backend
/// normalizes them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormInput {
    pub name: String,
    pub date: String,
    pub time: String,
    pub city: Option<Place>,
    pub struggle: Option<Struggle>,
}

// Body of POST /calculate. Every field is always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestPayload {
    pub name: String,
    pub date: String,
    pub time: String,
    pub city: String,
    pub struggle: String,
    pub tz: f64,
}

impl RequestPayload {
    pub fn assemble(form: FormInput, tz: f64) -> Self {
        Self {
            name: form.name,
            date: form.date,
            time: form.time,
            city: form.city.map(|place| place.formatted).unwrap_or_default(),
            struggle: form.struggle.unwrap_or_default().as_str().to_string(),
            tz,
        }
    }
}

// Successful backend response
#[derive(Debug, Clone, Deserialize)]
pub struct ReportResponse {
    pub report: String,
}

#[derive(Debug)]
pub enum ResponseOutcome {
    Success { report: String },
    ServerError { message: String },
    TransportFailure { cause: TransportError },
}

impl ResponseOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseOutcome::Success { .. })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ResponseOutcome::Success { .. } => "success",
            ResponseOutcome::ServerError { .. } => "server_error",
            ResponseOutcome::TransportFailure { .. } => "transport_failure",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Scanning {
        message: String,
    },
    ResultShown {
        text: String,
        offer_visible: bool,
    },
}

impl UiState {
    pub fn scanning() -> Self {
        UiState::Scanning {
            message: SCANNING_MESSAGE.to_string(),
        }
    }

    // The user sees the report, the prefixed server message, or a generic failure.
    pub fn from_outcome(outcome: &ResponseOutcome) -> Self {
        match outcome {
            ResponseOutcome::Success { report } => UiState::ResultShown {
                text: report.clone(),
                offer_visible: true,
            },
            ResponseOutcome::ServerError { message } => UiState::ResultShown {
                text: format!("{}{}", SERVER_ERROR_PREFIX, message),
                offer_visible: false,
            },
            ResponseOutcome::TransportFailure { .. } => UiState::ResultShown {
                text: CONNECTION_FAILED_MESSAGE.to_string(),
                offer_visible: false,
            },
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            UiState::Idle => None,
            UiState::Scanning { message } => Some(message),
            UiState::ResultShown { text, .. } => Some(text),
        }
    }

    pub fn offer_visible(&self) -> bool {
        matches!(
            self,
            UiState::ResultShown {
                offer_visible: true,
                ..
            }
        )
    }
}

// What started a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Click,
    Keyboard,
}

impl Trigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trigger::Click => "click",
            Trigger::Keyboard => "keyboard",
        }
    }
}
