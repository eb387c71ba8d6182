//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **File Types** - Files picked or dropped by the user
//! - **Error Types** - Upload failures

use js_sys::Uint8Array;
use thiserror::Error;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use crate::services::js_message;

// =============================================================================
// File Types
// =============================================================================

/// Name and MIME type of a file, as seen by the accept filter.
///
/// Implemented both for browser `File` handles (before their bytes are read)
/// and for [`UploadCandidate`]s.
pub trait FileMeta {
    /// File name, including extension.
    fn file_name(&self) -> String;
    /// MIME type reported by the browser. May be empty.
    fn mime_type(&self) -> String;
}

/// Where the content of an [`UploadCandidate`] lives.
#[derive(Clone, Debug, PartialEq)]
pub enum FileContent {
    /// Bytes already in wasm memory.
    Bytes(Vec<u8>),
    /// Browser file handle, read only when the content is needed.
    Browser(File),
}

/// A single file chosen by the user, held until its request ends.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadCandidate {
    /// Original file name
    pub name: String,
    /// MIME type reported by the browser
    pub mime_type: String,
    pub content: FileContent,
}

impl UploadCandidate {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            content: FileContent::Bytes(bytes),
        }
    }

    /// Size of the content in bytes.
    pub fn len(&self) -> usize {
        match &self.content {
            FileContent::Bytes(bytes) => bytes.len(),
            FileContent::Browser(file) => file.size() as usize,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Load the content into memory. Browser handles are read with
    /// `Blob.arrayBuffer()`.
    pub async fn read_bytes(&self) -> UploadResult<Vec<u8>> {
        match &self.content {
            FileContent::Bytes(bytes) => Ok(bytes.clone()),
            FileContent::Browser(file) => {
                let buffer = JsFuture::from(file.array_buffer())
                    .await
                    .map_err(|e| UploadError::Read {
                        name: self.name.clone(),
                        message: js_message(e),
                    })?;
                Ok(Uint8Array::new(&buffer).to_vec())
            }
        }
    }
}

impl From<File> for UploadCandidate {
    fn from(file: File) -> Self {
        Self {
            name: file.name(),
            mime_type: file.type_(),
            content: FileContent::Browser(file),
        }
    }
}

impl FileMeta for UploadCandidate {
    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }
}

impl FileMeta for File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors raised while reading a file or sending it to the backend.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    /// The browser could not read the file content.
    #[error("Failed to read file '{name}': {message}")]
    Read { name: String, message: String },

    /// The multipart body could not be built.
    #[error("Failed to build form data: {0}")]
    Form(String),

    /// The request never produced a response.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The backend answered with a non-2xx status.
    #[error("Server error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Result type alias for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;
