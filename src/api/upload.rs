use serde::{ Deserialize, Serialize };
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{ Request, RequestInit, Response };
use crate::error::UploadError;

/// What the upload endpoint answered with on success.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct UploadReceipt {
    /// Page the server sent the browser to, if any.
    pub redirect: Option<String>,
    pub body: serde_json::Value,
}

impl UploadReceipt {
    /// Parses a success response body. An empty body is accepted as a bare
    /// acknowledgement.
    pub fn from_json(text: &str) -> Result<Self, UploadError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let body: serde_json::Value = serde_json::from_str(text)?;
        let redirect = body
            .get("redirect")
            .and_then(|v| v.as_str())
            .map(str::to_string);
        Ok(Self { redirect, body })
    }

    pub fn redirected(url: String) -> Self {
        Self {
            redirect: Some(url),
            body: serde_json::Value::Null,
        }
    }
}

fn js_error(value: wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Sends `bytes` as the raw request body. One attempt, no retry.
pub async fn post_file(endpoint: &str, bytes: Vec<u8>) -> Result<UploadReceipt, UploadError> {
    log::info!("Uploading {} bytes to {}", bytes.len(), endpoint);

    let opts = RequestInit::new();
    opts.set_method("POST");
    let body = js_sys::Uint8Array::from(bytes.as_slice());
    opts.set_body(&body.into());

    let request = Request::new_with_str_and_init(endpoint, &opts)
        .map_err(|e| UploadError::Network(js_error(e)))?;
    let window = web_sys::window().ok_or_else(|| UploadError::Network("no window".to_string()))?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| UploadError::Network(js_error(e)))?
        .dyn_into()
        .map_err(|e| UploadError::Network(js_error(e)))?;

    if !response.ok() {
        return Err(UploadError::Status(response.status()));
    }

    if response.redirected() {
        return Ok(UploadReceipt::redirected(response.url()));
    }

    let text = JsFuture::from(response.text().map_err(|e| UploadError::Decode(js_error(e)))?)
        .await
        .map_err(|e| UploadError::Decode(js_error(e)))?;
    let receipt = UploadReceipt::from_json(&text.as_string().unwrap_or_default())?;
    log::info!("Upload accepted");
    Ok(receipt)
}
