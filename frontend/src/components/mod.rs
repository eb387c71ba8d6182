//! UI Components for the Mailroom application.
//!
//! # Layout Components
//! - [`Hero`] - Page title and description
//!
//! # Feature Components
//! - [`Dropzone`] - Drag & drop target with an accept filter
//! - [`DragDropUploader`] - Hands the selected file to a caller-supplied handler
//! - [`FileUpload`] - Uploads the selected file and shows the JSON result
//! - [`ResultPanel`] - Pretty-printed JSON response

mod dropzone;
mod drag_drop_uploader;
mod file_upload;
mod hero;

pub use dropzone::*;
pub use drag_drop_uploader::*;
pub use file_upload::*;
pub use hero::*;
