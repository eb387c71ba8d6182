//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Mailroom"</h1>
            <p class="subtitle">
                "Drop an email (.eml), a PDF or a scanned image to have it classified. "
                "One file at a time."
            </p>
        </div>
    }
}
