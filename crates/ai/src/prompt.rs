//! Prompt text and structured-output schema for the forecast request.

use serde_json::{Value as JsonValue, json};

use invtrack_inventory::InventoryItem;

/// Fields the provider must return. `explanation` is required too, so a
/// model answer always carries a rationale.
pub const REQUIRED_FIELDS: [&str; 4] = [
    "restock_in_days",
    "predicted_sales_next_month",
    "low_stock_alert",
    "explanation",
];

/// Render the forecast prompt for one item.
///
/// `display_model_id` only decorates the text.
pub fn build_prompt(item: &InventoryItem, display_model_id: &str) -> String {
    let history = serde_json::to_string(item.sales_history()).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Context: Amazon Bedrock Inference [Model: {model}]\n\
         Task: Inventory Optimization & Sales Forecasting\n\
         Item: {name}\n\
         Current Stock: {stock}\n\
         Safety Threshold: {min}\n\
         Unit Price: ${price}\n\
         Sales History (Last 30 days): {history}\n\
         \n\
         Provide a highly accurate inventory projection in JSON format.",
        model = display_model_id,
        name = item.name(),
        stock = item.current_quantity(),
        min = item.min_required_quantity(),
        price = item.price(),
    )
}

/// Response schema in the provider's OpenAPI subset (upper-case type names).
pub fn response_schema() -> JsonValue {
    json!({
        "type": "OBJECT",
        "properties": {
            "restock_in_days": {
                "type": "INTEGER",
                "description": "Estimated days until zero stock at current sales velocity.",
            },
            "predicted_sales_next_month": {
                "type": "INTEGER",
                "description": "Volume forecast for the upcoming 30-day cycle.",
            },
            "low_stock_alert": {
                "type": "BOOLEAN",
                "description": "True if urgent replenishment is required.",
            },
            "explanation": {
                "type": "STRING",
                "description": "Brief technical reasoning for this projection.",
            },
        },
        "required": REQUIRED_FIELDS,
    })
}
