//! Mailroom - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for handing emails, PDFs and scanned images to
//! the email processing backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── DragDropUploader (caller-supplied handler)             │
//! │  │   └── ResultPanel (last handled response)                │
//! │  └── FileUpload (posts to the backend itself)               │
//! │      └── ResultPanel                                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (UploadCandidate, UploadError)
//! - [`components`] - UI components (Dropzone, uploaders, result panel)
//! - [`services`] - Accept filter, processing guard, backend upload

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use serde_json::Value;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

#[cfg(test)]
mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{FileMeta, UploadCandidate, UploadError, UploadResult};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let config = UploaderConfig::default();

    // Last response received by the delegating uploader's handler
    let (handled, set_handled) = create_signal(None::<Value>);
    let handler = EndpointHandler::new(
        GlooTransport,
        config.clone(),
        Callback::new(move |value| set_handled.set(Some(value))),
    );

    view! {
        <div class="container">
            <Hero/>

            <section class="uploader">
                <DragDropUploader handler=handler/>
                <ResultPanel result=handled heading="Last Handled File"/>
            </section>

            <section class="uploader">
                <FileUpload config=config/>
            </section>
        </div>
    }
}
