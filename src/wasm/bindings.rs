//! JavaScript bindings for the OT engine
//!
//! Operations cross the boundary as wire-format JSON strings (see
//! [`crate::protocol`]), so JS callers use the same records they send to
//! the sync layer.

use crate::ot::{self, Composed, Operation};
use crate::protocol::{decode_batch, decode_operation, encode_batch, encode_operation};
use wasm_bindgen::prelude::*;

fn js_err(e: crate::OtError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse(op_json: &str) -> Result<Operation, JsValue> {
    decode_operation(op_json).map_err(js_err)
}

/// Apply one operation (JSON record) to a document
#[wasm_bindgen(js_name = apply)]
pub fn apply(document: &str, op_json: &str) -> Result<String, JsValue> {
    Ok(ot::apply(document, &parse(op_json)?))
}

/// Apply a JSON array of operations in order
#[wasm_bindgen(js_name = applyAll)]
pub fn apply_all(document: &str, ops_json: &str) -> Result<String, JsValue> {
    let ops = decode_batch(ops_json).map_err(js_err)?;
    Ok(ot::apply_all(document, &ops))
}

/// Transform two concurrent operations; returns `[a', b']`
#[wasm_bindgen(js_name = transform)]
pub fn transform(a_json: &str, b_json: &str) -> Result<String, JsValue> {
    let (a, b) = ot::transform(&parse(a_json)?, &parse(b_json)?).into_pair();
    encode_batch(&[a, b]).map_err(js_err)
}

/// Compose two consecutive operations
///
/// Returns `{"status":"merged","operation":{..}}`, `{"status":"noop"}` when
/// the pair cancels, or `{"status":"none"}` when it cannot be composed.
#[wasm_bindgen(js_name = compose)]
pub fn compose(first_json: &str, second_json: &str) -> Result<String, JsValue> {
    let result = match ot::compose(&parse(first_json)?, &parse(second_json)?) {
        Some(Composed::Operation(op)) => serde_json::json!({
            "status": "merged",
            "operation": op,
        }),
        Some(Composed::Noop) => serde_json::json!({ "status": "noop" }),
        None => serde_json::json!({ "status": "none" }),
    };
    Ok(result.to_string())
}

/// Invert an operation against the document it was applied to
#[wasm_bindgen(js_name = invert)]
pub fn invert(op_json: &str, original: &str) -> Result<String, JsValue> {
    let inverse = ot::invert(&parse(op_json)?, original).map_err(js_err)?;
    encode_operation(&inverse).map_err(js_err)
}

/// Rebase a JSON array of local operations over a remote batch
#[wasm_bindgen(js_name = transformList)]
pub fn transform_list(list_a_json: &str, list_b_json: &str) -> Result<String, JsValue> {
    let list_a = decode_batch(list_a_json).map_err(js_err)?;
    let list_b = decode_batch(list_b_json).map_err(js_err)?;
    encode_batch(&ot::transform_list(&list_a, &list_b)).map_err(js_err)
}
