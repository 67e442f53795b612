use wasm_bindgen::prelude::*;

use crate::{SegmenterConfig, format_report, report_to_text, segment};

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Segment a generated diet plan and return the six sections as JSON
#[wasm_bindgen]
pub fn segment_diet_plan(text: &str) -> Result<String, JsValue> {
    serde_json::to_string(&segment(text))
        .map_err(|e| JsValue::from_str(&format!("Serialize error: {}", e)))
}

/// Segment with a JSON segmenter config (extra phrases, heading items)
#[wasm_bindgen]
pub fn segment_diet_plan_with_config(text: &str, config_json: &str) -> Result<String, JsValue> {
    let segmenter = SegmenterConfig::from_json(config_json)
        .and_then(|config| config.build_segmenter())
        .map_err(|e| JsValue::from_str(&format!("Config error: {}", e)))?;

    serde_json::to_string(&segmenter.segment(text))
        .map_err(|e| JsValue::from_str(&format!("Serialize error: {}", e)))
}

/// Format summary or comparison markdown as plain text
#[wasm_bindgen]
pub fn format_report_text(text: &str) -> String {
    report_to_text(&format_report(text))
}

/// Format summary or comparison markdown as JSON report lines
#[wasm_bindgen]
pub fn format_report_json(text: &str) -> Result<String, JsValue> {
    serde_json::to_string(&format_report(text))
        .map_err(|e| JsValue::from_str(&format!("Serialize error: {}", e)))
}
