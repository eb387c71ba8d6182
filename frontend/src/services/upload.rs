//! HTTP service for sending files to the processing backend.

use gloo_net::http::Request;
use gloo_utils::errors::JsError;
use js_sys::{Array, Uint8Array};
use leptos::*;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use crate::services::processing::FileHandler;
use crate::types::{FileContent, UploadCandidate, UploadError, UploadResult};
use crate::UploaderConfig;

/// Multipart field name the backend reads the file from.
pub const FILE_FIELD: &str = "file";

/// Sends one file to an endpoint and returns the decoded JSON body.
#[allow(async_fn_in_trait)]
pub trait UploadTransport {
    async fn post_file(&self, endpoint: &str, file: &UploadCandidate) -> UploadResult<Value>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl UploadTransport for GlooTransport {
    async fn post_file(&self, endpoint: &str, file: &UploadCandidate) -> UploadResult<Value> {
        let form_data = build_form_data(file)?;

        let request = Request::post(endpoint)
            .body(form_data)
            .map_err(|e| UploadError::Form(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| UploadError::Request(e.to_string()))?;

        if !response.ok() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(UploadError::Status {
                status: response.status(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UploadError::Decode(e.to_string()))
    }
}

/// Multipart body with the file under [`FILE_FIELD`], keeping its name and type.
///
/// Browser handles are appended as they are; only in-memory content is
/// wrapped in a new `Blob`.
fn build_form_data(file: &UploadCandidate) -> UploadResult<FormData> {
    let form_data = FormData::new().map_err(|e| UploadError::Form(js_message(e)))?;

    let appended = match &file.content {
        FileContent::Browser(handle) => {
            form_data.append_with_blob_and_filename(FILE_FIELD, handle, &file.name)
        }
        FileContent::Bytes(bytes) => {
            let blob = bytes_to_blob(bytes, &file.mime_type)?;
            form_data.append_with_blob_and_filename(FILE_FIELD, &blob, &file.name)
        }
    };
    appended.map_err(|e| UploadError::Form(js_message(e)))?;

    Ok(form_data)
}

fn bytes_to_blob(bytes: &[u8], mime_type: &str) -> UploadResult<Blob> {
    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));

    let options = BlobPropertyBag::new();
    options.set_type(mime_type);

    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| UploadError::Form(js_message(e)))
}

/// Readable message for a thrown JS value.
pub fn js_message(value: JsValue) -> String {
    match JsError::try_from(value) {
        Ok(err) => err.to_string(),
        Err(not_error) => not_error.to_string(),
    }
}

/// [`FileHandler`] that posts each file to an endpoint and hands the JSON
/// response to `on_response`.
///
/// Failures are returned untouched to the caller.
pub struct EndpointHandler<T> {
    transport: T,
    config: UploaderConfig,
    on_response: Callback<Value>,
}

impl<T: UploadTransport> EndpointHandler<T> {
    pub fn new(transport: T, config: UploaderConfig, on_response: Callback<Value>) -> Self {
        Self {
            transport,
            config,
            on_response,
        }
    }
}

impl<T: UploadTransport> FileHandler for EndpointHandler<T> {
    type Output = ();
    type Error = UploadError;

    async fn process(&self, file: UploadCandidate) -> Result<(), UploadError> {
        let value = self.transport.post_file(&self.config.endpoint, &file).await?;
        log::info!("📬 {} processed by {}", file.name, self.config.endpoint);
        self.on_response.call(value);
        Ok(())
    }
}
