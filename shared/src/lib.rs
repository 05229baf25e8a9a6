//! Page logic shared by the Abzarestan site: article documents, engagement
//! state kept in browser storage, related-article ranking, table of contents
//! and the view-models the Yew frontend renders.
//!
//! Nothing in here touches the DOM. Storage goes through [`KeyValueStore`] and
//! randomness through [`rand::Rng`], so every piece runs the same natively
//! (tests) and in the browser.

use serde::{Deserialize, Serialize};

pub mod article_doc;
pub mod catalog;
pub mod comment;
pub mod config;
pub mod editor;
pub mod engagement;
pub mod error;
pub mod generation;
pub mod guide;
pub mod kv;
pub mod logging;
mod numbers;
pub mod persian_date;
pub mod related;
pub mod render;
pub mod session;
pub mod share;
pub mod slug;
pub mod splash;
pub mod toc;

pub use comment::Comment;
pub use engagement::EngagementStore;
pub use error::{ArticleError, CommentError, DraftError, StoreError};
pub use kv::{KeyValueStore, MemoryStore};
pub use session::{ArticleSession, Notice, NoticeKind};

/// A fully loaded article, built from a fetched article document plus the counters
/// stored for it in the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Value of `data-id`; also the suffix of the document file name.
    pub id: String,
    /// Text of the first `h1`.
    pub title: String,
    /// Category label shown above the title.
    pub category: String,
    /// Byline.
    pub author: String,
    /// Display string, already localized by the document author.
    pub date: String,
    /// Minutes.
    pub reading_time: u32,
    /// One-paragraph summary, also used for the meta description.
    pub excerpt: String,
    /// Trimmed, non-empty tags in document order.
    pub tags: Vec<String>,
    /// Marked for the home page spotlight.
    pub featured: bool,
    /// Raw body markup.
    pub content: String,
    /// Either an image URL or a raw CSS background value (gradients).
    pub featured_image: String,
    /// Stored view counter.
    pub views: u64,
    /// Stored like counter.
    pub likes: u64,
    /// Stored comment counter.
    pub comments: u64,
}

/// One entry of the related-article catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Article id.
    pub id: String,
    /// Article title.
    pub title: String,
    /// Tags compared when ranking.
    pub tags: Vec<String>,
    /// Category label, may be empty.
    pub category: String,
}

impl From<&Article> for CatalogEntry {
    fn from(a: &Article) -> Self {
        CatalogEntry {
            id: a.id.clone(),
            title: a.title.clone(),
            tags: a.tags.clone(),
            category: a.category.clone(),
        }
    }
}
