//! WebAssembly bindings for leysync
//!
//! JSON-in, JSON-out wrappers so a browser extension can hand over the
//! intercepted HoYoLAB response and receive the GOOD document back.

use crate::good::{format_good as rust_format_good, ExportOptions};
use crate::model::AccountData;
use crate::parser::parse as rust_parse;
use wasm_bindgen::prelude::*;

fn parse_options(options_json: Option<String>) -> Result<ExportOptions, JsValue> {
    match options_json.as_deref().map(str::trim) {
        None | Some("") => Ok(ExportOptions::default()),
        Some(json) => serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e))),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(json: &str, what: &str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid {}: {}", what, e)))
}

fn write_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))
}

/// Parse a HoYoLAB character detail response
///
/// # Arguments
/// * `raw_json` - The response body as received from HoYoLAB
///
/// # Returns
/// The internal model as JSON
#[wasm_bindgen(js_name = parseHoyolab)]
pub fn parse_hoyolab(raw_json: &str) -> Result<String, JsValue> {
    let raw: serde_json::Value = read_json(raw_json, "response")?;
    let account =
        rust_parse(&raw).map_err(|e| JsValue::from_str(&format!("Parse failed: {}", e)))?;
    write_json(&account)
}

/// Export a parsed model as GOOD
///
/// # Arguments
/// * `internal_json` - Output of `parseHoyolab`
/// * `options_json` - Optional `{removeManekin, addTravelerElementToKey, minCharacterLevel}`
#[wasm_bindgen(js_name = formatGood)]
pub fn format_good(internal_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let account: AccountData = read_json(internal_json, "account data")?;
    let options = parse_options(options_json)?;
    let good = rust_format_good(&account, &options)
        .map_err(|e| JsValue::from_str(&format!("Export failed: {}", e)))?;
    write_json(&good)
}

/// Parse a HoYoLAB response and export it as GOOD in one call
#[wasm_bindgen(js_name = convertToGood)]
pub fn convert_to_good(raw_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let raw: serde_json::Value = read_json(raw_json, "response")?;
    let options = parse_options(options_json)?;
    let good = crate::convert(&raw, &options)
        .map_err(|e| JsValue::from_str(&format!("Conversion failed: {}", e)))?;
    write_json(&good)
}

/// Character counts of a parsed model as `[total, maxLevel]`
#[wasm_bindgen(js_name = summary)]
pub fn summary(internal_json: &str) -> Result<js_sys::Array, JsValue> {
    let account: AccountData = read_json(internal_json, "account data")?;
    let summary = account.summary();
    let arr = js_sys::Array::new();
    arr.push(&JsValue::from_f64(summary.total_characters as f64));
    arr.push(&JsValue::from_f64(summary.max_level_characters as f64));
    Ok(arr)
}
