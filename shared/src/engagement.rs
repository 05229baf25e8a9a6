//! Per-article engagement state (views, likes, bookmarks, comments) kept in a
//! [`KeyValueStore`].
//!
//! Every field lives under its own key and is read and written on its own;
//! there is no transaction across fields. Keys are the ones the site has
//! always used, so data already sitting in a visitor's browser keeps working:
//!
//! | field          | key                            |
//! |----------------|--------------------------------|
//! | views          | `article_{id}_views`           |
//! | likes          | `article_{id}_likes`           |
//! | comment count  | `article_{id}_comments`        |
//! | comment list   | `article_{id}_comments_list`   |
//! | liked flag     | `liked_{id}`                   |
//! | bookmark flag  | `bookmarked_{id}`              |
//! | bookmark ids   | `bookmarked_articles`          |

use chrono::{DateTime, FixedOffset};
use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::{
    comment::{sample_comments, Comment},
    error::StoreError,
    kv::KeyValueStore,
    numbers::leading_int,
    Article,
};

/// Global list of bookmarked article ids.
pub const BOOKMARKS_KEY: &str = "bookmarked_articles";

/// Per-article numeric counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    /// Page views in this browser.
    Views,
    /// Likes.
    Likes,
    /// Posted comments, including seeded samples only once posted.
    Comments,
}

/// Per-article reader flags, stored as `"true"`/`"false"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// The reader liked the article.
    Liked,
    /// The reader bookmarked the article.
    Bookmarked,
}

/// `article_{id}_{views|likes|comments}`
pub fn counter_key(article_id: &str, counter: Counter) -> String {
    match counter {
        Counter::Views => format!("article_{article_id}_views"),
        Counter::Likes => format!("article_{article_id}_likes"),
        Counter::Comments => format!("article_{article_id}_comments"),
    }
}

/// `liked_{id}` or `bookmarked_{id}`
pub fn flag_key(article_id: &str, flag: Flag) -> String {
    match flag {
        Flag::Liked => format!("liked_{article_id}"),
        Flag::Bookmarked => format!("bookmarked_{article_id}"),
    }
}

/// JSON array of the article's comments, newest first.
pub fn comments_key(article_id: &str) -> String {
    format!("article_{article_id}_comments_list")
}

/// Typed access to every engagement key of the site.
pub struct EngagementStore<S> {
    store: S,
}

impl<S: KeyValueStore> EngagementStore<S> {
    /// Wraps a backing store.
    pub fn new(store: S) -> Self {
        Self {
            store,
        }
    }

    /// Returns the backing store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Stored counter value; 0 when the key is absent or does not hold a
    /// number. Negative leftovers read as 0.
    pub fn counter(&self, article_id: &str, counter: Counter) -> u64 {
        let key = counter_key(article_id, counter);
        match self.store.get(&key) {
            None => 0,
            Some(raw) => match leading_int(&raw) {
                Some(value) => u64::try_from(value).unwrap_or(0),
                None => {
                    warn!(%key, %raw, "ignoring malformed counter");
                    0
                },
            },
        }
    }

    /// Overwrites a counter.
    pub fn set_counter(
        &mut self,
        article_id: &str,
        counter: Counter,
        value: u64,
    ) -> Result<(), StoreError> {
        self.store.set(&counter_key(article_id, counter), &value.to_string())
    }

    /// Bumps the view counter once and returns the new total.
    pub fn record_view(&mut self, article_id: &str) -> Result<u64, StoreError> {
        let views = self.counter(article_id, Counter::Views).saturating_add(1);
        self.set_counter(article_id, Counter::Views, views)?;
        Ok(views)
    }

    /// Only the exact string `"true"` counts as set.
    pub fn flag(&self, article_id: &str, flag: Flag) -> bool {
        self.store.get(&flag_key(article_id, flag)).as_deref() == Some("true")
    }

    /// Writes `"true"` or `"false"`.
    pub fn set_flag(&mut self, article_id: &str, flag: Flag, value: bool) -> Result<(), StoreError> {
        self.store.set(&flag_key(article_id, flag), if value { "true" } else { "false" })
    }

    /// Copies the stored counters onto a freshly parsed article.
    pub fn hydrate_counters(&self, article: &mut Article) {
        article.views = self.counter(&article.id, Counter::Views);
        article.likes = self.counter(&article.id, Counter::Likes);
        article.comments = self.counter(&article.id, Counter::Comments);
    }

    /// Most recent first. A list that fails to parse reads as empty.
    pub fn comments(&self, article_id: &str) -> Vec<Comment> {
        self.read_json(&comments_key(article_id))
    }

    /// Stored comments, seeding the sample pair first when the list is empty
    /// and `seed` is set. A failed seed write still returns the samples so
    /// the page has something to show.
    pub fn load_comments(
        &mut self,
        article_id: &str,
        seed: bool,
        now: &DateTime<FixedOffset>,
    ) -> Vec<Comment> {
        let comments = self.comments(article_id);
        if !comments.is_empty() || !seed {
            return comments;
        }
        let samples = sample_comments(now);
        if let Err(err) = self.write_json(&comments_key(article_id), &samples) {
            warn!(article_id, error = %err, "could not seed sample comments");
        }
        samples
    }

    /// Puts `comment` at the head of the list and returns the updated list.
    /// The comment counter is left to the caller.
    pub fn prepend_comment(
        &mut self,
        article_id: &str,
        comment: Comment,
    ) -> Result<Vec<Comment>, StoreError> {
        let mut comments = self.comments(article_id);
        comments.insert(0, comment);
        self.write_json(&comments_key(article_id), &comments)?;
        Ok(comments)
    }

    /// Insertion order, without duplicates.
    pub fn bookmark_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.read_json(BOOKMARKS_KEY);
        let mut seen = std::collections::HashSet::new();
        ids.retain(|id| seen.insert(id.clone()));
        ids
    }

    /// No-op when `article_id` is already bookmarked.
    pub fn add_bookmark_id(&mut self, article_id: &str) -> Result<(), StoreError> {
        let mut ids = self.bookmark_ids();
        if ids.iter().any(|id| id == article_id) {
            return Ok(());
        }
        ids.push(article_id.to_string());
        self.write_json(BOOKMARKS_KEY, &ids)
    }

    /// No-op when `article_id` is not bookmarked.
    pub fn remove_bookmark_id(&mut self, article_id: &str) -> Result<(), StoreError> {
        let mut ids = self.bookmark_ids();
        let before = ids.len();
        ids.retain(|id| id != article_id);
        if ids.len() == before {
            return Ok(());
        }
        self.write_json(BOOKMARKS_KEY, &ids)
    }

    fn read_json<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let Some(raw) = self.store.get(key) else {
            return T::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(key, error = %err, "stored JSON is malformed, using default");
            T::default()
        })
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(value).map_err(|err| StoreError::Encode {
            key: key.to_string(),
            reason: err.to_string(),
        })?;
        self.store.set(key, &encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{kv::MemoryStore, persian_date::local_datetime};

    fn store() -> EngagementStore<MemoryStore> {
        EngagementStore::new(MemoryStore::new())
    }

    #[test]
    fn unset_counter_reads_zero() {
        let store = store();
        assert_eq!(store.counter("42", Counter::Views), 0);
        assert_eq!(store.counter("42", Counter::Likes), 0);
        assert!(!store.flag("42", Flag::Liked));
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let store = EngagementStore::new(MemoryStore::from_iter([
            ("article_1_views", "lots"),
            ("article_1_likes", "-4"),
            ("article_1_comments", "3 comments"),
            ("article_1_comments_list", "{not json"),
            ("liked_1", "TRUE"),
            (BOOKMARKS_KEY, "oops"),
        ]));
        assert_eq!(store.counter("1", Counter::Views), 0);
        assert_eq!(store.counter("1", Counter::Likes), 0);
        assert_eq!(store.counter("1", Counter::Comments), 3);
        assert!(store.comments("1").is_empty());
        assert!(!store.flag("1", Flag::Liked));
        assert!(store.bookmark_ids().is_empty());
    }

    #[test]
    fn record_view_only_grows() {
        let mut store = store();
        assert_eq!(store.record_view("1").expect("view"), 1);
        assert_eq!(store.record_view("1").expect("view"), 2);
        assert_eq!(store.counter("1", Counter::Views), 2);
        assert_eq!(
            store.into_inner().get("article_1_views").as_deref(),
            Some("2")
        );
    }

    #[test]
    fn hydrate_copies_counters() {
        let mut store = store();
        store.set_counter("7", Counter::Likes, 4).expect("likes");
        store.set_counter("7", Counter::Comments, 2).expect("comments");
        let mut article = crate::Article {
            id: "7".into(),
            title: String::new(),
            category: String::new(),
            author: String::new(),
            date: String::new(),
            reading_time: 5,
            excerpt: String::new(),
            tags: vec![],
            featured: false,
            content: String::new(),
            featured_image: String::new(),
            views: 99,
            likes: 0,
            comments: 0,
        };
        store.hydrate_counters(&mut article);
        assert_eq!((article.views, article.likes, article.comments), (0, 4, 2));
    }

    #[test]
    fn bookmark_ids_stay_unique() {
        let mut store = store();
        store.add_bookmark_id("1").expect("add");
        store.add_bookmark_id("2").expect("add");
        store.add_bookmark_id("1").expect("add again");
        assert_eq!(store.bookmark_ids(), vec!["1", "2"]);

        store.remove_bookmark_id("3").expect("remove absent");
        store.remove_bookmark_id("1").expect("remove");
        assert_eq!(store.bookmark_ids(), vec!["2"]);
    }

    #[test]
    fn duplicate_ids_written_elsewhere_are_collapsed() {
        let store = EngagementStore::new(MemoryStore::from_iter([(
            BOOKMARKS_KEY,
            r#"["4","4","5"]"#,
        )]));
        assert_eq!(store.bookmark_ids(), vec!["4", "5"]);
    }

    #[test]
    fn comments_are_most_recent_first() {
        let mut store = store();
        let first = Comment::guest("اول", &local_datetime(1_000, 0));
        let second = Comment::guest("دوم", &local_datetime(2_000, 0));
        store.prepend_comment("1", first.clone()).expect("first");
        let list = store.prepend_comment("1", second.clone()).expect("second");
        assert_eq!(list, vec![second, first]);
        assert_eq!(store.comments("1"), list);
    }

    #[test]
    fn load_comments_seeds_only_empty_lists() {
        let now = local_datetime(0, 0);
        let mut store = store();
        assert!(store.load_comments("1", false, &now).is_empty());

        let seeded = store.load_comments("1", true, &now);
        assert_eq!(seeded.len(), 2);
        assert_eq!(store.comments("1"), seeded);

        let mine = Comment::guest("x", &now);
        store.prepend_comment("2", mine.clone()).expect("prepend");
        assert_eq!(store.load_comments("2", true, &now), vec![mine]);
    }
}
