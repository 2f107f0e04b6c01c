//! Browser-only glue (compiled with the `web` feature)

mod observer;
mod scroll;

pub use observer::*;
pub use scroll::*;

use wasm_bindgen::JsValue;

/// Readable text for a thrown JS value
fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
