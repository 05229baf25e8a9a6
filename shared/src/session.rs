//! Reader actions on one article page: like, bookmark, comment.
//!
//! [`ArticleSession`] carries the state of a single page view. Each action
//! flips that state, persists it, and returns a [`Notice`] for the page to
//! show. When a write fails the session keeps its previous state.

use chrono::{DateTime, FixedOffset};
use tracing::{debug, warn};

use crate::{
    comment::Comment,
    engagement::{Counter, EngagementStore, Flag},
    error::{CommentError, StoreError},
    kv::KeyValueStore,
};

/// Toast colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Green.
    Success,
    /// Neutral.
    Info,
    /// Red.
    Error,
}

/// Short-lived feedback. The frontend maps each variant to its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Like added.
    Liked,
    /// Like removed.
    Unliked,
    /// Added to bookmarks.
    Bookmarked,
    /// Removed from bookmarks.
    Unbookmarked,
    /// Comment saved.
    CommentPosted,
    /// Blank comment rejected.
    CommentEmpty,
    /// Comment could not be stored.
    CommentFailed,
    /// Page link copied to the clipboard.
    LinkCopied,
    /// Clipboard refused the link.
    LinkCopyFailed,
    /// A like or bookmark could not be stored.
    StorageFailed,
}

impl Notice {
    /// Colour of the toast showing this notice.
    pub fn kind(self) -> NoticeKind {
        match self {
            Notice::Liked | Notice::Bookmarked | Notice::CommentPosted | Notice::LinkCopied => {
                NoticeKind::Success
            },
            Notice::Unliked | Notice::Unbookmarked => NoticeKind::Info,
            Notice::CommentEmpty
            | Notice::CommentFailed
            | Notice::LinkCopyFailed
            | Notice::StorageFailed => NoticeKind::Error,
        }
    }
}

/// Like and bookmark state of the article on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSession {
    article_id: String,
    liked: bool,
    bookmarked: bool,
    /// Like count currently on screen. `None` until something has been
    /// displayed, in which case the stored value is used.
    displayed_likes: Option<u64>,
}

impl ArticleSession {
    /// A session with nothing on screen yet.
    pub fn new(article_id: impl Into<String>) -> Self {
        Self {
            article_id: article_id.into(),
            liked: false,
            bookmarked: false,
            displayed_likes: None,
        }
    }

    /// Restores the reader's flags and shows the stored like count.
    pub fn open<S: KeyValueStore>(
        article_id: impl Into<String>,
        store: &EngagementStore<S>,
    ) -> Self {
        let article_id = article_id.into();
        Self {
            liked: store.flag(&article_id, Flag::Liked),
            bookmarked: store.flag(&article_id, Flag::Bookmarked),
            displayed_likes: Some(store.counter(&article_id, Counter::Likes)),
            article_id,
        }
    }

    /// Article this session acts on.
    pub fn article_id(&self) -> &str {
        &self.article_id
    }

    /// Like button pressed state.
    pub fn liked(&self) -> bool {
        self.liked
    }

    /// Bookmark button pressed state.
    pub fn bookmarked(&self) -> bool {
        self.bookmarked
    }

    /// Like count on screen, if any has been shown.
    pub fn displayed_likes(&self) -> Option<u64> {
        self.displayed_likes
    }

    /// Likes or unlikes, counting from the number on screen. The counter is
    /// written before the flag and restored if the flag write fails, so a
    /// failed toggle leaves storage as it was.
    pub fn toggle_like<S: KeyValueStore>(
        &mut self,
        store: &mut EngagementStore<S>,
    ) -> Result<Notice, StoreError> {
        let current = self
            .displayed_likes
            .unwrap_or_else(|| store.counter(&self.article_id, Counter::Likes));
        let liked = !self.liked;
        let count = if liked { current.saturating_add(1) } else { current.saturating_sub(1) };

        let previous = store.counter(&self.article_id, Counter::Likes);
        store.set_counter(&self.article_id, Counter::Likes, count)?;
        if let Err(e) = store.set_flag(&self.article_id, Flag::Liked, liked) {
            if let Err(rollback) = store.set_counter(&self.article_id, Counter::Likes, previous) {
                warn!(article_id = %self.article_id, error = %rollback, "like count not restored");
            }
            return Err(e);
        }
        debug!(article_id = %self.article_id, liked, count, "like toggled");

        self.liked = liked;
        self.displayed_likes = Some(count);
        Ok(if liked { Notice::Liked } else { Notice::Unliked })
    }

    /// Adds or removes the article from the reader's bookmarks.
    pub fn toggle_bookmark<S: KeyValueStore>(
        &mut self,
        store: &mut EngagementStore<S>,
    ) -> Result<Notice, StoreError> {
        let bookmarked = !self.bookmarked;
        if bookmarked {
            store.set_flag(&self.article_id, Flag::Bookmarked, true)?;
            store.add_bookmark_id(&self.article_id)?;
        } else {
            store.set_flag(&self.article_id, Flag::Bookmarked, false)?;
            store.remove_bookmark_id(&self.article_id)?;
        }
        self.bookmarked = bookmarked;
        Ok(if bookmarked { Notice::Bookmarked } else { Notice::Unbookmarked })
    }

    /// Posts a guest comment and returns the new list, most recent first.
    /// Blank text is rejected before anything is written.
    pub fn submit_comment<S: KeyValueStore>(
        &self,
        store: &mut EngagementStore<S>,
        text: &str,
        now: &DateTime<FixedOffset>,
    ) -> Result<Vec<Comment>, CommentError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CommentError::Empty);
        }

        let comments = store.prepend_comment(&self.article_id, Comment::guest(text, now))?;
        let count = store.counter(&self.article_id, Counter::Comments).saturating_add(1);
        store.set_counter(&self.article_id, Counter::Comments, count)?;
        Ok(comments)
    }
}

impl From<&CommentError> for Notice {
    fn from(err: &CommentError) -> Self {
        match err {
            CommentError::Empty => Notice::CommentEmpty,
            CommentError::Store(_) => Notice::CommentFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{kv::MemoryStore, persian_date::local_datetime};

    /// Fails every write, for the transient-failure paths.
    struct ReadOnly(MemoryStore);

    impl KeyValueStore for ReadOnly {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    /// Fails writes to keys starting with `prefix`.
    struct FailingKeys {
        inner: MemoryStore,
        prefix: &'static str,
    }

    impl KeyValueStore for FailingKeys {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            if key.starts_with(self.prefix) {
                return Err(StoreError::Unavailable);
            }
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), StoreError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn failed_counter_write_leaves_flag_untouched() {
        let failing = FailingKeys {
            inner: MemoryStore::new(),
            prefix: "article_",
        };
        let mut store = EngagementStore::new(failing);
        let mut session = ArticleSession::open("1", &store);

        assert!(session.toggle_like(&mut store).is_err());
        assert!(!store.flag("1", Flag::Liked));
        assert!(!session.liked());
        assert_eq!(session.displayed_likes(), Some(0));
    }

    #[test]
    fn failed_flag_write_restores_counter() {
        let seeded = MemoryStore::from_iter([("article_1_likes", "4")]);
        let failing = FailingKeys {
            inner: seeded,
            prefix: "liked_",
        };
        let mut store = EngagementStore::new(failing);
        let mut session = ArticleSession::open("1", &store);

        assert!(session.toggle_like(&mut store).is_err());
        assert_eq!(store.counter("1", Counter::Likes), 4);
        assert!(!store.flag("1", Flag::Liked));
        assert_eq!(session.displayed_likes(), Some(4));
    }

    #[test]
    fn like_twice_restores_clean_state() {
        let mut store = EngagementStore::new(MemoryStore::new());
        let mut session = ArticleSession::open("1", &store);

        assert_eq!(session.toggle_like(&mut store).expect("like"), Notice::Liked);
        assert!(store.flag("1", Flag::Liked));
        assert_eq!(store.counter("1", Counter::Likes), 1);
        assert_eq!(session.displayed_likes(), Some(1));

        assert_eq!(session.toggle_like(&mut store).expect("unlike"), Notice::Unliked);
        assert!(!store.flag("1", Flag::Liked));
        assert_eq!(store.counter("1", Counter::Likes), 0);
        assert!(!session.liked());
    }

    #[test]
    fn unlike_never_goes_below_zero() {
        let mut store = EngagementStore::new(MemoryStore::from_iter([("liked_1", "true")]));
        let mut session = ArticleSession::open("1", &store);
        assert!(session.liked());
        session.toggle_like(&mut store).expect("unlike");
        assert_eq!(store.counter("1", Counter::Likes), 0);
    }

    #[test]
    fn displayed_count_wins_over_stored_count() {
        let mut store = EngagementStore::new(MemoryStore::new());
        let mut session = ArticleSession::open("1", &store);
        // Another tab bumps the stored value behind our back.
        store.set_counter("1", Counter::Likes, 10).expect("set");
        session.toggle_like(&mut store).expect("like");
        assert_eq!(store.counter("1", Counter::Likes), 1);
    }

    #[test]
    fn fresh_session_reads_stored_count() {
        let mut store = EngagementStore::new(MemoryStore::from_iter([("article_1_likes", "5")]));
        let mut session = ArticleSession::new("1");
        session.toggle_like(&mut store).expect("like");
        assert_eq!(session.displayed_likes(), Some(6));
    }

    #[test]
    fn bookmark_toggle_keeps_list_unique() {
        let mut store = EngagementStore::new(MemoryStore::new());
        let mut session = ArticleSession::open("9", &store);
        for _ in 0..5 {
            session.toggle_bookmark(&mut store).expect("toggle");
            let ids = store.bookmark_ids();
            assert!(ids.len() <= 1);
            assert_eq!(ids.contains(&"9".to_string()), session.bookmarked());
            assert_eq!(store.flag("9", Flag::Bookmarked), session.bookmarked());
        }
    }

    #[test]
    fn failed_write_keeps_previous_state() {
        let mut store = EngagementStore::new(ReadOnly(MemoryStore::new()));
        let mut session = ArticleSession::open("1", &store);
        assert!(session.toggle_like(&mut store).is_err());
        assert!(!session.liked());
        assert_eq!(session.displayed_likes(), Some(0));
        assert!(session.toggle_bookmark(&mut store).is_err());
        assert!(!session.bookmarked());
    }

    #[test]
    fn comment_updates_list_and_counter() {
        let mut store = EngagementStore::new(MemoryStore::new());
        let session = ArticleSession::new("3");
        let now = local_datetime(1_728_388_800_000, 210);
        let list = session.submit_comment(&mut store, "  عالی بود  ", &now).expect("submit");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].text, "عالی بود");
        assert_eq!(store.counter("3", Counter::Comments), 1);
    }

    #[test]
    fn blank_comment_is_rejected_without_writes() {
        let mut store = EngagementStore::new(MemoryStore::new());
        let session = ArticleSession::new("3");
        let err = session
            .submit_comment(&mut store, " \n\t ", &local_datetime(0, 0))
            .expect_err("blank");
        assert_eq!(err, CommentError::Empty);
        assert_eq!(Notice::from(&err).kind(), NoticeKind::Error);
        assert!(store.into_inner().is_empty());
    }
}
