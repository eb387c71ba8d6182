//! Drop target that hands the selected file to a caller-supplied handler.
//!
//! The component only tracks whether the handler is running. Handler failures
//! are not caught here: they are returned by [`DelegatingUploader::handle_drop`]
//! and reported to the console as unhandled by the component.

use std::rc::Rc;

use leptos::*;

use crate::components::Dropzone;
use crate::services::{AcceptFilter, FileHandler, ProcessingGuard};
use crate::types::UploadCandidate;

pub const PROCESSING_TEXT: &str = "Processing file...";
pub const DRAG_ACTIVE_TEXT: &str = "Drop the file here...";
pub const IDLE_PROMPT: &str = "Drag & drop an email (.eml) or document here, or click to select";

/// Text shown inside the drop target. Processing wins over an active drag.
pub fn prompt_text(processing: bool, drag_active: bool) -> &'static str {
    if processing {
        PROCESSING_TEXT
    } else if drag_active {
        DRAG_ACTIVE_TEXT
    } else {
        IDLE_PROMPT
    }
}

/// State and drop handling behind [`DragDropUploader`].
pub struct DelegatingUploader<H> {
    handler: Rc<H>,
    processing: RwSignal<bool>,
}

impl<H> Clone for DelegatingUploader<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Rc::clone(&self.handler),
            processing: self.processing,
        }
    }
}

impl<H: FileHandler> DelegatingUploader<H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler: Rc::new(handler),
            processing: create_rw_signal(false),
        }
    }

    pub fn processing(&self) -> ReadSignal<bool> {
        self.processing.read_only()
    }

    /// Run the handler on the first file, holding the processing flag while
    /// it runs. An empty drop does nothing. Whatever the handler resolves to
    /// is dropped.
    pub async fn handle_drop(&self, files: Vec<UploadCandidate>) -> Result<(), H::Error> {
        let Some(file) = files.into_iter().next() else {
            return Ok(());
        };

        let _guard = ProcessingGuard::engage(self.processing);
        self.handler.process(file).await.map(drop)
    }
}

#[component]
pub fn DragDropUploader<H>(
    /// Called with the selected file
    handler: H,
    #[prop(optional)] accept: Option<AcceptFilter>,
) -> impl IntoView
where
    H: FileHandler + 'static,
{
    let uploader = DelegatingUploader::new(handler);
    let processing = uploader.processing();
    let drag_active = create_rw_signal(false);

    let on_drop = Callback::new(move |files: Vec<UploadCandidate>| {
        let uploader = uploader.clone();
        spawn_local(async move {
            if let Err(err) = uploader.handle_drop(files).await {
                log::error!("❌ Unhandled file handler failure: {}", err);
            }
        });
    });

    view! {
        <Dropzone
            accept=accept.unwrap_or_default()
            on_drop=on_drop
            drag_active=drag_active
        >
            <p>{move || prompt_text(processing.get(), drag_active.get())}</p>
        </Dropzone>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::cell::{Cell, RefCell};

    fn pdf(name: &str) -> UploadCandidate {
        UploadCandidate::new(name, "application/pdf", b"%PDF-1.7".to_vec())
    }

    #[test]
    fn test_prompt_priority() {
        assert_eq!(prompt_text(true, true), PROCESSING_TEXT);
        assert_eq!(prompt_text(true, false), PROCESSING_TEXT);
        assert_eq!(prompt_text(false, true), DRAG_ACTIVE_TEXT);
        assert_eq!(prompt_text(false, false), IDLE_PROMPT);
    }

    #[test]
    fn test_empty_drop_is_ignored() {
        let runtime = create_runtime();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let uploader = DelegatingUploader::new(move |_file: UploadCandidate| {
            counter.set(counter.get() + 1);
            async { Ok::<(), String>(()) }
        });

        block_on(uploader.handle_drop(Vec::new())).unwrap();

        assert_eq!(calls.get(), 0);
        assert!(!uploader.processing().get_untracked());

        runtime.dispose();
    }

    #[test]
    fn test_only_first_file_is_handled() {
        let runtime = create_runtime();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let uploader = DelegatingUploader::new(move |file: UploadCandidate| {
            sink.borrow_mut().push(file.name);
            async { Ok::<(), String>(()) }
        });

        block_on(uploader.handle_drop(vec![pdf("first.pdf"), pdf("second.pdf")])).unwrap();

        assert_eq!(seen.borrow().as_slice(), &["first.pdf".to_string()]);

        runtime.dispose();
    }

    #[test]
    fn test_flag_held_for_whole_handler_run() {
        let runtime = create_runtime();
        let (release, gate) = oneshot::channel::<Result<(), String>>();
        let gate = Rc::new(RefCell::new(Some(gate)));
        let uploader = DelegatingUploader::new(move |_file: UploadCandidate| {
            let gate = gate.borrow_mut().take();
            async move {
                match gate {
                    Some(gate) => gate.await.unwrap_or_else(|_| Err("cancelled".to_string())),
                    None => Ok(()),
                }
            }
        });
        let processing = uploader.processing();
        assert!(!processing.get_untracked());

        let outcome = Rc::new(RefCell::new(None));
        let mut pool = LocalPool::new();
        {
            let uploader = uploader.clone();
            let outcome = Rc::clone(&outcome);
            pool.spawner()
                .spawn_local(async move {
                    let result = uploader.handle_drop(vec![pdf("a.pdf")]).await;
                    *outcome.borrow_mut() = Some(result);
                })
                .unwrap();
        }

        pool.run_until_stalled();
        assert!(processing.get_untracked());
        assert!(outcome.borrow().is_none());

        release.send(Ok(())).unwrap();
        pool.run_until_stalled();
        assert!(!processing.get_untracked());
        assert_eq!(*outcome.borrow(), Some(Ok(())));

        runtime.dispose();
    }

    #[test]
    fn test_handler_value_is_ignored() {
        let runtime = create_runtime();
        let uploader = DelegatingUploader::new(|file: UploadCandidate| async move {
            Ok::<_, String>(serde_json::json!({ "received": file.name }))
        });

        let result = block_on(uploader.handle_drop(vec![pdf("statement.pdf")]));

        assert_eq!(result, Ok(()));
        assert!(!uploader.processing().get_untracked());

        runtime.dispose();
    }

    #[test]
    fn test_content_is_read_while_flag_is_held() {
        let runtime = create_runtime();
        let flag_during_read = Rc::new(Cell::new(None));
        let seen = Rc::clone(&flag_during_read);
        let processing = create_rw_signal(false);
        let uploader = DelegatingUploader {
            handler: Rc::new(move |file: UploadCandidate| {
                let seen = Rc::clone(&seen);
                async move {
                    seen.set(Some(processing.get_untracked()));
                    file.read_bytes().await.map(|bytes| bytes.len())
                }
            }),
            processing,
        };

        let result = block_on(uploader.handle_drop(vec![pdf("statement.pdf")]));

        assert_eq!(result, Ok(()));
        assert_eq!(flag_during_read.get(), Some(true));
        assert!(!processing.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn test_handler_error_propagates_and_clears_flag() {
        let runtime = create_runtime();
        let uploader = DelegatingUploader::new(|file: UploadCandidate| async move {
            Err::<(), String>(format!("backend rejected {}", file.name))
        });

        let result = block_on(uploader.handle_drop(vec![pdf("statement.pdf")]));

        assert_eq!(result, Err("backend rejected statement.pdf".to_string()));
        assert!(!uploader.processing().get_untracked());

        runtime.dispose();
    }
}
