//! `wasm-bindgen` wrappers around the double-precision value types.
//!
//! JS has a single number type, so only the `f64` kernel is exposed.

use crate::errors::CodecError;
use wasm_bindgen::prelude::*;

pub mod matrix_js;
pub mod quaternion_js;
pub mod vector_js;

fn codec_error_to_js(err: CodecError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
