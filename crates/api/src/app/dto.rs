use std::collections::BTreeMap;

use serde::Serialize;

use invtrack_ai::{AiInsights, ForecastOutcome, InsightSource};
use invtrack_core::ItemId;

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: ItemId,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub region: String,
    pub storage: &'static str,
}

/// One item's forecast plus the path that produced it.
#[derive(Debug, Serialize)]
pub struct InsightDto {
    #[serde(flatten)]
    pub insights: AiInsights,
    pub source: InsightSource,
}

impl From<ForecastOutcome> for InsightDto {
    fn from(outcome: ForecastOutcome) -> Self {
        let source = outcome.source();
        Self {
            insights: outcome.into_insights(),
            source,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub model_id: String,
    pub insights: BTreeMap<ItemId, InsightDto>,
}

impl InsightsResponse {
    pub fn new(model_id: impl Into<String>, outcomes: BTreeMap<ItemId, ForecastOutcome>) -> Self {
        Self {
            model_id: model_id.into(),
            insights: outcomes
                .into_iter()
                .map(|(id, outcome)| (id, InsightDto::from(outcome)))
                .collect(),
        }
    }
}
