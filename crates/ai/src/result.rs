use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Forecast for one inventory item.
///
/// This is *not* domain state. It is an insight the dashboard displays next to
/// the item it was computed for; nothing links it back except the caller's map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiInsights {
    /// Estimated days until current stock runs out.
    pub restock_in_days: i64,

    /// Units expected to sell over the next 30 days.
    pub predicted_sales_next_month: i64,

    /// Whether replenishment is needed now.
    pub low_stock_alert: bool,

    /// Optional human-readable rationale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl AiInsights {
    pub fn new(restock_in_days: i64, predicted_sales_next_month: i64, low_stock_alert: bool) -> Self {
        Self {
            restock_in_days,
            predicted_sales_next_month,
            low_stock_alert,
            explanation: None,
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }
}

/// Which path produced a forecast.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightSource {
    Model,
    Fallback,
}

/// Result of a single forecast call.
///
/// Both variants carry usable insights; `Fallback` also records why the model
/// path was abandoned.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastOutcome {
    Model(AiInsights),
    Fallback { insights: AiInsights, reason: AiError },
}

impl ForecastOutcome {
    pub fn insights(&self) -> &AiInsights {
        match self {
            ForecastOutcome::Model(insights) => insights,
            ForecastOutcome::Fallback { insights, .. } => insights,
        }
    }

    pub fn into_insights(self) -> AiInsights {
        match self {
            ForecastOutcome::Model(insights) => insights,
            ForecastOutcome::Fallback { insights, .. } => insights,
        }
    }

    pub fn source(&self) -> InsightSource {
        match self {
            ForecastOutcome::Model(_) => InsightSource::Model,
            ForecastOutcome::Fallback { .. } => InsightSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ForecastOutcome::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<&AiError> {
        match self {
            ForecastOutcome::Model(_) => None,
            ForecastOutcome::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// Why the model path failed. Never surfaced past the forecast boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    /// The request never produced an HTTP response (DNS, connect, TLS, reset).
    #[error("inference transport failed: {0}")]
    Transport(String),

    /// The provider answered with a non-2xx status (auth, quota, bad request).
    #[error("inference provider error ({status}): {body}")]
    Provider { status: u16, body: String },

    /// The provider answered 2xx but without any candidate text.
    #[error("inference response contained no text")]
    EmptyResponse,

    /// The text was not JSON, or not JSON of the declared shape.
    #[error("malformed inference response: {0}")]
    MalformedResponse(String),
}

impl AiError {
    /// Short stable label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AiError::Transport(_) => "transport",
            AiError::Provider { .. } => "provider",
            AiError::EmptyResponse => "empty_response",
            AiError::MalformedResponse(_) => "malformed_response",
        }
    }
}

impl From<reqwest::Error> for AiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AiError::MalformedResponse(e.to_string())
        } else if let Some(status) = e.status() {
            AiError::Provider {
                status: status.as_u16(),
                body: e.to_string(),
            }
        } else {
            AiError::Transport(e.to_string())
        }
    }
}
