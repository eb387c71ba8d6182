//! Self-contained uploader: posts the dropped file to the backend and shows
//! the JSON it answers with.
//!
//! Failures are logged to the console and otherwise ignored; the previous
//! result stays on screen. Drops are not blocked while a request is in
//! flight, so when requests overlap the last response to arrive wins.

use std::rc::Rc;

use leptos::*;
use serde_json::Value;

use crate::components::Dropzone;
use crate::services::{AcceptFilter, GlooTransport, ProcessingGuard, UploadTransport};
use crate::types::UploadCandidate;
use crate::UploaderConfig;

pub const UPLOAD_PROMPT: &str = "Drag & drop an .eml or PDF file here, or click to select";
pub const LOADING_TEXT: &str = "Processing...";
pub const RESULT_HEADING: &str = "Classification Results";

/// Pretty-printed JSON, two-space indented.
pub fn render_result(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// State and drop handling behind [`FileUpload`].
pub struct ProcessUploader<T> {
    transport: Rc<T>,
    config: Rc<UploaderConfig>,
    loading: RwSignal<bool>,
    result: RwSignal<Option<Value>>,
}

impl<T> Clone for ProcessUploader<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Rc::clone(&self.transport),
            config: Rc::clone(&self.config),
            loading: self.loading,
            result: self.result,
        }
    }
}

impl<T: UploadTransport> ProcessUploader<T> {
    pub fn new(transport: T, config: UploaderConfig) -> Self {
        Self {
            transport: Rc::new(transport),
            config: Rc::new(config),
            loading: create_rw_signal(false),
            result: create_rw_signal(None),
        }
    }

    pub fn loading(&self) -> ReadSignal<bool> {
        self.loading.read_only()
    }

    pub fn result(&self) -> ReadSignal<Option<Value>> {
        self.result.read_only()
    }

    /// Upload the first file and store the response. Errors are logged and
    /// leave the current result untouched.
    pub async fn handle_drop(&self, files: Vec<UploadCandidate>) {
        let Some(file) = files.into_iter().next() else {
            return;
        };

        let _guard = ProcessingGuard::engage(self.loading);
        match self.transport.post_file(&self.config.endpoint, &file).await {
            Ok(value) => {
                log::info!("📬 {} processed by {}", file.name, self.config.endpoint);
                self.result.set(Some(value));
            }
            Err(err) => log::error!("❌ Upload of {} failed: {}", file.name, err),
        }
    }
}

#[component]
pub fn FileUpload(
    /// Upload destination, defaults to the local backend
    #[prop(optional)]
    config: Option<UploaderConfig>,
) -> impl IntoView {
    let uploader = ProcessUploader::new(GlooTransport, config.unwrap_or_default());
    let loading = uploader.loading();
    let result = uploader.result();
    let drag_active = create_rw_signal(false);

    let on_drop = Callback::new(move |files: Vec<UploadCandidate>| {
        let uploader = uploader.clone();
        spawn_local(async move { uploader.handle_drop(files).await });
    });

    view! {
        <div class="file-upload">
            <Dropzone
                accept=AcceptFilter::documents()
                on_drop=on_drop
                drag_active=drag_active
            >
                <p>{UPLOAD_PROMPT}</p>
            </Dropzone>

            <Show
                when=move || loading.get()
                fallback=|| view! { }
            >
                <p class="upload-loading">{LOADING_TEXT}</p>
            </Show>

            <ResultPanel result=result/>
        </div>
    }
}

/// Last JSON response, hidden while there is none.
#[component]
pub fn ResultPanel(
    #[prop(into)] result: Signal<Option<Value>>,
    #[prop(default = RESULT_HEADING)] heading: &'static str,
) -> impl IntoView {
    move || {
        result.get().map(|value| {
            view! {
                <div class="result-panel">
                    <h3>{heading}</h3>
                    <pre>{render_result(&value)}</pre>
                </div>
            }
        })
    }
}
