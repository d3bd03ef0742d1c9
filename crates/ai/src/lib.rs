//! `invtrack-ai`
//!
//! **Responsibility:** inventory forecasting (restock horizon, monthly demand,
//! low-stock flag) for the dashboard.
//!
//! - It reads items and never mutates them.
//! - It never fails to the caller: a model error turns into the deterministic
//!   fallback forecast.
//! - It emits **insights**, not inventory changes.

pub mod batch;
pub mod client;
pub mod config;
pub mod fallback;
pub mod forecaster;
pub mod prompt;
pub mod result;

pub use batch::forecast_all;
pub use client::{GeminiClient, InferenceClient, InferenceRequest, ScriptedInferenceClient};
pub use config::ForecastConfig;
pub use fallback::{FALLBACK_EXPLANATION, SalesVelocity, fallback_insights};
pub use forecaster::{ForecastService, Forecaster, parse_insights};
pub use result::{AiError, AiInsights, ForecastOutcome, InsightSource};
