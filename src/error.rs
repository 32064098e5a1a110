//! The tagged failure kinds a generation request can end in.

use thiserror::Error;

use crate::{cloud, options, youtube};

/// Everything that can go wrong between a form submission and a finished
/// image. Handlers branch on the kind rather than string-matching
/// messages.
#[derive(Debug, Error)]
pub enum Error {
    /// The form values never made it past validation; no network call
    /// was made.
    #[error("{0}")]
    Validation(#[from] options::Error),

    /// The comment service failed somewhere during pagination.
    #[error("{0}")]
    Remote(#[from] youtube::Error),

    /// Aggregation succeeded but the image could not be produced.
    #[error("{0}")]
    Render(#[from] cloud::Error),
}
