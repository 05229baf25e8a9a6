//! Error types returned by the shared page logic.

use thiserror::Error;

/// Anything that makes an article unloadable. The page treats every variant
/// the same way: the content region is replaced by the not-found view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArticleError {
    /// The document could not be fetched.
    #[error("article `{id}` not found: {reason}")]
    NotFound {
        /// Requested article id.
        id: String,
        /// Transport or HTTP status detail.
        reason: String,
    },
    /// The document has no `article[data-id]` element.
    #[error("document has no `article[data-id]` root element")]
    MissingRoot,
    /// The root element carries no body markup.
    #[error("document has no article body")]
    MissingContent,
}

/// Storage write failures. Transient: the caller shows a toast and keeps the
/// previous state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No storage backend, e.g. `localStorage` blocked by the browser.
    #[error("browser storage is not available")]
    Unavailable,
    /// The backend refused the write (quota, private mode).
    #[error("failed to write `{key}`: {reason}")]
    Write {
        /// Storage key.
        key: String,
        /// Backend message.
        reason: String,
    },
    /// The value could not be serialized.
    #[error("failed to encode `{key}`: {reason}")]
    Encode {
        /// Storage key.
        key: String,
        /// Serializer message.
        reason: String,
    },
}

/// Why a comment was not posted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentError {
    /// Only whitespace was entered.
    #[error("comment text is empty")]
    Empty,
    /// Saving the list or the counter failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Why a draft was not saved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// Required form fields left blank, by field name.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    /// Writing the draft list failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
