//! Accept filter for drop targets.
//!
//! Decides which dropped or picked files may reach application code. A file is
//! admitted when its MIME type matches one of the rules (`image/*` style
//! wildcards match on the type prefix) or when its extension matches one of
//! the extensions listed for any rule. At most `max_files` files are admitted
//! per interaction; the rest are rejected in drop order.

use thiserror::Error;

use crate::types::FileMeta;
use crate::MAX_FILES;

/// One accepted MIME type and the extensions mapped to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AcceptRule {
    pub mime: &'static str,
    pub extensions: &'static [&'static str],
}

/// Why a file was kept away from the drop handler.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RejectReason {
    /// Neither the MIME type nor the extension is accepted.
    #[error("file type not accepted")]
    InvalidType,
    /// The file was accepted by type but the interaction already has
    /// `max_files` files.
    #[error("too many files")]
    TooManyFiles,
}

/// Files split into the ones handed to the drop handler and the rejected ones.
#[derive(Debug)]
pub struct Selection<F> {
    pub accepted: Vec<F>,
    pub rejected: Vec<(F, RejectReason)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AcceptFilter {
    rules: Vec<AcceptRule>,
    max_files: usize,
}

impl AcceptFilter {
    pub fn new(rules: Vec<AcceptRule>, max_files: usize) -> Self {
        Self { rules, max_files }
    }

    /// Emails, PDFs and common image formats, one file at a time.
    pub fn documents() -> Self {
        Self::new(
            vec![
                AcceptRule {
                    mime: "message/rfc822",
                    extensions: &[".eml"],
                },
                AcceptRule {
                    mime: "application/pdf",
                    extensions: &[".pdf"],
                },
                AcceptRule {
                    mime: "image/*",
                    extensions: &[".png", ".jpg", ".jpeg"],
                },
            ],
            MAX_FILES,
        )
    }

    pub fn max_files(&self) -> usize {
        self.max_files
    }

    /// Whether a single file passes the type check.
    pub fn admits(&self, name: &str, mime: &str) -> bool {
        let name = name.to_ascii_lowercase();
        let mime = mime.trim().to_ascii_lowercase();

        self.rules.iter().any(|rule| {
            mime_matches(rule.mime, &mime)
                || rule
                    .extensions
                    .iter()
                    .any(|ext| name.ends_with(&ext.to_ascii_lowercase()))
        })
    }

    /// Split `files` into accepted and rejected, keeping drop order.
    pub fn partition<F: FileMeta>(&self, files: Vec<F>) -> Selection<F> {
        let mut accepted = Vec::new();
        let mut rejected = Vec::new();

        for file in files {
            if !self.admits(&file.file_name(), &file.mime_type()) {
                rejected.push((file, RejectReason::InvalidType));
            } else if accepted.len() >= self.max_files {
                rejected.push((file, RejectReason::TooManyFiles));
            } else {
                accepted.push(file);
            }
        }

        Selection { accepted, rejected }
    }

    /// Value for the `accept` attribute of a file input.
    pub fn input_accept(&self) -> String {
        self.rules
            .iter()
            .flat_map(|rule| std::iter::once(rule.mime).chain(rule.extensions.iter().copied()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for AcceptFilter {
    fn default() -> Self {
        Self::documents()
    }
}

fn mime_matches(pattern: &str, mime: &str) -> bool {
    if mime.is_empty() {
        return false;
    }
    match pattern.strip_suffix('*') {
        Some(prefix) => mime.starts_with(prefix),
        None => pattern.eq_ignore_ascii_case(mime),
    }
}
