//! Drag & drop target that doubles as a click-to-browse file picker.
//!
//! Dropped or picked files go through an [`AcceptFilter`]; rejected files are
//! logged and never reach `on_drop`. Accepted files are handed over right away
//! as [`UploadCandidate`]s wrapping the browser handle; their content is read
//! later, by whoever sends it. The list may be empty.

use leptos::*;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement, KeyboardEvent, MouseEvent};

use crate::services::AcceptFilter;
use crate::types::{FileMeta, UploadCandidate};

/// Tracks nested `dragenter`/`dragleave` pairs.
///
/// Moving the pointer over a child element fires `dragenter` on the child
/// before `dragleave` on the parent, so a plain boolean would flicker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragTracker {
    depth: u32,
}

impl DragTracker {
    pub fn enter(&mut self) {
        self.depth += 1;
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// A drop ends the drag no matter how deep it was.
    pub fn reset(&mut self) {
        self.depth = 0;
    }

    pub fn is_active(&self) -> bool {
        self.depth > 0
    }
}

#[component]
pub fn Dropzone(
    /// Files admitted by this drop target
    accept: AcceptFilter,
    /// Receives the accepted files of each drop or selection
    #[prop(into)]
    on_drop: Callback<Vec<UploadCandidate>>,
    /// Set while a drag hovers the target
    drag_active: RwSignal<bool>,
    #[prop(default = "dropzone")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let tracker = create_rw_signal(DragTracker::default());
    let input_ref = create_node_ref::<html::Input>();
    let accept_attr = accept.input_accept();
    let multiple = accept.max_files() > 1;
    let accept = store_value(accept);

    let sync_drag = move |change: fn(&mut DragTracker)| {
        tracker.update(change);
        drag_active.set(tracker.get_untracked().is_active());
    };

    let on_drag_enter = move |ev: DragEvent| {
        ev.prevent_default();
        sync_drag(DragTracker::enter);
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_drop_effect("copy");
        }
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        sync_drag(DragTracker::leave);
    };

    let on_file_drop = move |ev: DragEvent| {
        ev.prevent_default();
        sync_drag(DragTracker::reset);

        let files = file_list(ev.data_transfer().and_then(|transfer| transfer.files()));
        accept.with_value(|filter| hand_over(files, filter, on_drop));
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = file_list(input.files());
        accept.with_value(|filter| hand_over(files, filter, on_drop));
        // Allow picking the same file again
        input.set_value("");
    };

    let open_picker = move || {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    let on_key_down = move |ev: KeyboardEvent| {
        if opens_picker(&ev.key()) {
            ev.prevent_default();
            open_picker();
        }
    };

    view! {
        <div
            class=class
            class:active=move || drag_active.get()
            tabindex="0"
            role="button"
            on:click=move |_| open_picker()
            on:keydown=on_key_down
            on:dragenter=on_drag_enter
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_file_drop
        >
            <input
                type="file"
                accept=accept_attr
                multiple=multiple
                style="display:none"
                node_ref=input_ref
                on:change=on_file_change
                on:click=|ev: MouseEvent| ev.stop_propagation()
            />
            {children()}
        </div>
    }
}

/// Keys that open the file picker while the drop target has focus.
pub fn opens_picker(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

fn file_list(files: Option<FileList>) -> Vec<File> {
    files
        .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
        .unwrap_or_default()
}

/// Filter `files` and pass the accepted ones to `on_drop` in the same tick.
pub fn hand_over<F>(files: Vec<F>, filter: &AcceptFilter, on_drop: Callback<Vec<UploadCandidate>>)
where
    F: FileMeta + Into<UploadCandidate>,
{
    let selection = filter.partition(files);
    for (file, reason) in &selection.rejected {
        log::debug!("🚫 Rejected {}: {}", file.file_name(), reason);
    }

    on_drop.call(selection.accepted.into_iter().map(Into::into).collect());
}
