//! Single fetch helper shared by every entity service.
//!
//! Errors are plain strings surfaced into page-level error signals; no
//! retry or timeout policy lives here.

use serde_json::Value;

/// Perform a JSON request and parse the response body.
///
/// An empty response body (e.g. from DELETE) resolves to `Value::Null`
/// rather than a parse error.
pub async fn fetch_json(method: &str, url: &str, body: Option<&Value>) -> Result<Value, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    if let Some(payload) = body {
        let json_data = serde_json::to_string(payload).map_err(|e| format!("{e}"))?;
        let js_body = wasm_bindgen::JsValue::from_str(&json_data);
        opts.set_body(&js_body);
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| format!("{e:?}"))?;
    }

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if resp.status() == 404 {
        return Err("No encontrado".to_string());
    }
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}
