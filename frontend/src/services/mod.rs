//! Browser-side services used by the uploaders.
//!
//! # Services
//!
//! - [`accept`] - Accept filter applied to dropped and picked files
//! - [`processing`] - In-flight flag guard and the file handler capability
//! - [`upload`] - Multipart upload to the processing backend

pub mod accept;
pub mod processing;
pub mod upload;

pub use accept::*;
pub use processing::*;
pub use upload::*;
