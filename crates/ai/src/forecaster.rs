use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use invtrack_inventory::InventoryItem;

use crate::client::{GeminiClient, InferenceClient, InferenceRequest};
use crate::config::ForecastConfig;
use crate::fallback::fallback_insights;
use crate::prompt::{build_prompt, response_schema};
use crate::result::{AiError, AiInsights, ForecastOutcome};

/// Produces a forecast for one item.
///
/// Implementations must not fail: every error becomes a fallback outcome.
/// Items are read, never mutated.
#[async_trait]
pub trait Forecaster: Send + Sync {
    async fn forecast(&self, item: &InventoryItem) -> ForecastOutcome;
}

/// Model-backed forecaster with a deterministic fallback.
///
/// Stateless per call: the only shared state is the client and the display
/// model id, both read-only.
#[derive(Clone)]
pub struct ForecastService {
    client: Arc<dyn InferenceClient>,
    display_model_id: String,
}

/// Model output in the declared shape. All four fields are required.
#[derive(Debug, Deserialize)]
struct ModelInsights {
    restock_in_days: i64,
    predicted_sales_next_month: i64,
    low_stock_alert: bool,
    explanation: String,
}

impl From<ModelInsights> for AiInsights {
    fn from(m: ModelInsights) -> Self {
        AiInsights::new(m.restock_in_days, m.predicted_sales_next_month, m.low_stock_alert)
            .with_explanation(m.explanation)
    }
}

/// Parse model text into insights. Values are taken as-is, without range checks.
pub fn parse_insights(text: &str) -> Result<AiInsights, AiError> {
    serde_json::from_str::<ModelInsights>(text.trim())
        .map(AiInsights::from)
        .map_err(|e| AiError::MalformedResponse(e.to_string()))
}

impl ForecastService {
    pub fn new(config: &ForecastConfig, client: Arc<dyn InferenceClient>) -> Self {
        Self {
            client,
            display_model_id: config.display_model_id.clone(),
        }
    }

    /// Service backed by the HTTP inference client.
    pub fn with_gemini(config: &ForecastConfig) -> Self {
        Self::new(config, Arc::new(GeminiClient::new(config)))
    }

    pub fn display_model_id(&self) -> &str {
        &self.display_model_id
    }

    async fn model_forecast(&self, item: &InventoryItem) -> Result<AiInsights, AiError> {
        let request = InferenceRequest {
            prompt: build_prompt(item, &self.display_model_id),
            response_schema: response_schema(),
        };
        let text = self.client.generate_json(&request).await?;
        parse_insights(&text)
    }
}

impl core::fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ForecastService")
            .field("display_model_id", &self.display_model_id)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Forecaster for ForecastService {
    async fn forecast(&self, item: &InventoryItem) -> ForecastOutcome {
        let item_id = item.id();

        match self.model_forecast(item).await {
            Ok(insights) => {
                debug!(item = %item_id, "model forecast accepted");
                ForecastOutcome::Model(insights)
            }
            Err(reason) => {
                warn!(
                    item = %item_id,
                    kind = reason.kind(),
                    error = %reason,
                    "inference failed; using fallback forecast"
                );
                ForecastOutcome::Fallback {
                    insights: fallback_insights(item),
                    reason,
                }
            }
        }
    }
}
