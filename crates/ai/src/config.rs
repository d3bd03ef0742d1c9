/// Configuration for the forecasting service.
///
/// Built once at startup and handed to the service; the call path never reads
/// the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastConfig {
    /// Provider credential. May be empty; the provider then rejects the call
    /// and the forecast falls back.
    pub api_key: String,

    /// Model name shown in prompts and on the dashboard. Does not select the
    /// model that serves the request.
    pub display_model_id: String,

    /// Model the request is actually routed to.
    pub inference_model: String,

    /// Base URL of the generative-language API (no trailing slash).
    pub endpoint: String,
}

pub const DEFAULT_DISPLAY_MODEL_ID: &str = "amazon.nova-lite-v1:0";
pub const DEFAULT_INFERENCE_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            display_model_id: DEFAULT_DISPLAY_MODEL_ID.to_string(),
            inference_model: DEFAULT_INFERENCE_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ForecastConfig {
    /// Read from the process environment.
    ///
    /// - `GEMINI_API_KEY`, then `API_KEY`, else empty
    /// - `BEDROCK_MODEL_ID` (display only)
    /// - `INVTRACK_INFERENCE_ENDPOINT`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ForecastConfig::from_env`] over an arbitrary lookup.
    /// Blank values count as absent.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            api_key: get("GEMINI_API_KEY")
                .or_else(|| get("API_KEY"))
                .unwrap_or_default(),
            display_model_id: get("BEDROCK_MODEL_ID").unwrap_or(defaults.display_model_id),
            inference_model: defaults.inference_model,
            endpoint: get("INVTRACK_INFERENCE_ENDPOINT")
                .map(|e| e.trim_end_matches('/').to_string())
                .unwrap_or(defaults.endpoint),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_display_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.display_model_id = model_id.into();
        self
    }
}
