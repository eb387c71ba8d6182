//! In-flight flag handling and the file handler capability.

use std::fmt;
use std::future::Future;

use leptos::*;

use crate::types::UploadCandidate;

/// Holds a boolean signal at `true` for as long as the guard lives.
///
/// The flag is cleared in `Drop`, so it goes back to `false` whether the
/// guarded work succeeds, fails, or the future owning the guard is dropped.
#[must_use = "the flag is cleared as soon as the guard is dropped"]
pub struct ProcessingGuard {
    flag: RwSignal<bool>,
}

impl ProcessingGuard {
    pub fn engage(flag: RwSignal<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for ProcessingGuard {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// Asynchronous processing of a single selected file.
///
/// Any `Fn(UploadCandidate) -> impl Future<Output = Result<T, E>>` closure
/// is a handler. Uploaders only wait for the outcome; `Output` is never
/// inspected.
#[allow(async_fn_in_trait)]
pub trait FileHandler {
    type Output;
    type Error: fmt::Display;

    async fn process(&self, file: UploadCandidate) -> Result<Self::Output, Self::Error>;
}

impl<F, Fut, T, E> FileHandler for F
where
    F: Fn(UploadCandidate) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    type Output = T;
    type Error = E;

    async fn process(&self, file: UploadCandidate) -> Result<T, E> {
        self(file).await
    }
}
