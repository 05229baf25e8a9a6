//! Reader comments and the samples a new article is seeded with.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::persian_date::{iso_timestamp, JalaliDate};

/// Display name for comments posted without an account.
pub const GUEST_AUTHOR: &str = "کاربر مهمان";

/// A reader comment as kept in the article's stored comment list. Field
/// names match the JSON the site has always written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Creation time in epoch milliseconds.
    pub id: i64,
    /// Display name.
    pub author: String,
    /// Body as entered, already trimmed.
    pub text: String,
    /// Localized long date, e.g. `۱۷ مهر ۱۴۰۳`.
    pub date: String,
    /// ISO-8601, UTC.
    pub timestamp: String,
}

impl Comment {
    /// Builds a guest comment. `text` is stored as given; callers trim and
    /// reject blank input first.
    pub fn guest(text: &str, at: &DateTime<FixedOffset>) -> Self {
        Comment {
            id: at.timestamp_millis(),
            author: GUEST_AUTHOR.to_string(),
            text: text.to_string(),
            date: JalaliDate::from_datetime(at).to_string(),
            timestamp: iso_timestamp(at),
        }
    }
}

/// The two comments a fresh article starts with.
pub fn sample_comments(at: &DateTime<FixedOffset>) -> Vec<Comment> {
    let timestamp = iso_timestamp(at);
    vec![
        Comment {
            id: 1,
            author: "علی احمدی".to_string(),
            text: "مقاله بسیار جامع و مفیدی بود. متشکرم از نویسنده.".to_string(),
            date: "۱۶ مهر ۱۴۰۳".to_string(),
            timestamp: timestamp.clone(),
        },
        Comment {
            id: 2,
            author: "مریم حسینی".to_string(),
            text: "نکات مطرح شده در این مقاله قابل تأمل است و باید بیشتر به این موضوعات توجه کرد."
                .to_string(),
            date: "۱۶ مهر ۱۴۰۳".to_string(),
            timestamp,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persian_date::local_datetime;

    #[test]
    fn guest_comment_uses_time_for_id_and_dates() {
        let at = local_datetime(1_728_388_800_000, 210);
        let comment = Comment::guest("سلام", &at);
        assert_eq!(comment.id, 1_728_388_800_000);
        assert_eq!(comment.author, GUEST_AUTHOR);
        assert_eq!(comment.date, "۱۷ مهر ۱۴۰۳");
        assert_eq!(comment.timestamp, "2024-10-08T12:00:00.000Z");
    }

    #[test]
    fn serializes_with_legacy_field_names() {
        let at = local_datetime(0, 0);
        let json = serde_json::to_value(Comment::guest("x", &at)).expect("serialize");
        for key in ["id", "author", "text", "date", "timestamp"] {
            assert!(json.get(key).is_some(), "missing `{key}`");
        }
    }
}
