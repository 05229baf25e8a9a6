//! Article editor: form validation, draft persistence and the live preview.

use chrono::{DateTime, FixedOffset};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    article_doc::split_tags,
    error::{DraftError, StoreError},
    kv::KeyValueStore,
    persian_date::{iso_timestamp, JalaliDate},
    slug::generate_slug,
};

/// Storage key holding every saved draft as one JSON array.
pub const DRAFTS_KEY: &str = "articles";

/// Preview title while the title field is blank.
pub const TITLE_PLACEHOLDER: &str = "عنوان مقاله";
/// Preview byline while the author field is blank.
pub const AUTHOR_PLACEHOLDER: &str = "نویسنده";

/// Publication state chosen by the save button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    /// Saved, not public.
    Draft,
    /// Saved and published.
    Published,
}

/// A saved article as stored by the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    /// See [`generate_id`].
    pub id: String,
    /// Trimmed title.
    pub title: String,
    /// Given slug, or one generated from the title.
    pub slug: String,
    /// Category label.
    pub category: String,
    /// Byline.
    pub author: String,
    /// Summary, may be empty.
    pub excerpt: String,
    /// Trimmed, non-empty tags.
    pub tags: Vec<String>,
    /// Body markup.
    pub content: String,
    /// Data URL or image URL.
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Draft or published.
    pub status: DraftStatus,
    /// ISO-8601 time of the first save.
    pub date: String,
    /// ISO-8601 time of the latest save.
    pub last_modified: String,
}

/// Raw editor inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorForm {
    /// Required.
    pub title: String,
    /// Optional; generated from the title when blank.
    pub slug: String,
    /// Required.
    pub category: String,
    /// Required.
    pub author: String,
    /// Optional summary.
    pub excerpt: String,
    /// Comma-separated.
    pub tags: String,
    /// Editor body markup.
    pub content: String,
    /// Data URL from an upload or a plain image URL.
    pub cover_image: Option<String>,
}

impl EditorForm {
    /// Refills the form from a stored draft.
    pub fn from_draft(draft: &ArticleDraft) -> Self {
        EditorForm {
            title: draft.title.clone(),
            slug: draft.slug.clone(),
            category: draft.category.clone(),
            author: draft.author.clone(),
            excerpt: draft.excerpt.clone(),
            tags: draft.tags.join(", "),
            content: draft.content.clone(),
            cover_image: draft.cover_image.clone(),
        }
    }

    /// Names of required fields left blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [("title", &self.title), ("category", &self.category), ("content", &self.content)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Validates the form and builds the draft to store. `existing_id` keeps
    /// the id of the draft being edited; new drafts get a fresh one.
    pub fn into_draft<R: Rng + ?Sized>(
        self,
        status: DraftStatus,
        existing_id: Option<&str>,
        now: &DateTime<FixedOffset>,
        rng: &mut R,
    ) -> Result<ArticleDraft, DraftError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(DraftError::MissingFields(missing));
        }

        let slug = match self.slug.trim() {
            "" => generate_slug(&self.title),
            slug => slug.to_string(),
        };
        let id = match existing_id {
            Some(id) => id.to_string(),
            None => generate_id(now.timestamp_millis(), rng),
        };
        let stamp = iso_timestamp(now);
        Ok(ArticleDraft {
            id,
            title: self.title,
            slug,
            category: self.category,
            author: self.author,
            excerpt: self.excerpt,
            tags: split_tags(&self.tags),
            content: self.content,
            cover_image: self.cover_image.filter(|c| !c.is_empty()),
            status,
            date: stamp.clone(),
            last_modified: stamp,
        })
    }
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Base-36 timestamp followed by random base-36 characters.
pub fn generate_id<R: Rng + ?Sized>(epoch_ms: i64, rng: &mut R) -> String {
    let mut id = to_base36(epoch_ms.max(0) as u64);
    id.push_str(&to_base36(rng.gen::<u64>()));
    id
}

/// Drafts kept under [`DRAFTS_KEY`].
#[derive(Debug)]
pub struct DraftStore<S> {
    store: S,
}

impl<S: KeyValueStore> DraftStore<S> {
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

    /// Every stored draft in save order. A malformed list reads as empty.
    pub fn all(&self) -> Vec<ArticleDraft> {
        let Some(raw) = self.store.get(DRAFTS_KEY) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!(key = DRAFTS_KEY, error = %err, "stored drafts are malformed, ignoring them");
            Vec::new()
        })
    }

    /// The draft with `id`, if stored.
    pub fn load(&self, id: &str) -> Option<ArticleDraft> {
        self.all().into_iter().find(|draft| draft.id == id)
    }

    /// Replaces the draft with the same id, or appends it. An existing
    /// draft keeps its original `date`.
    pub fn save(&mut self, mut draft: ArticleDraft) -> Result<(), DraftError> {
        let mut drafts = self.all();
        match drafts.iter_mut().find(|d| d.id == draft.id) {
            Some(existing) => {
                draft.date = std::mem::take(&mut existing.date);
                *existing = draft;
            },
            None => drafts.push(draft),
        }
        let encoded = serde_json::to_string(&drafts).map_err(|err| StoreError::Encode {
            key: DRAFTS_KEY.to_string(),
            reason: err.to_string(),
        })?;
        self.store.set(DRAFTS_KEY, &encoded)?;
        debug!(count = drafts.len(), "drafts saved");
        Ok(())
    }
}

/// Which cover input is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoverTab {
    /// Local file read as a data URL.
    #[default]
    Upload,
    /// Remote image URL.
    Url,
}

/// What the preview panel shows for the current form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorPreview {
    /// Title or [`TITLE_PLACEHOLDER`].
    pub title: String,
    /// Author or [`AUTHOR_PLACEHOLDER`].
    pub author: String,
    /// Today as a numeric Jalali date.
    pub date: String,
    /// Body markup as typed.
    pub body: String,
    /// Cover image, if any.
    pub cover: Option<String>,
}

/// Preview of the form as it stands, dated `now`.
pub fn preview(form: &EditorForm, now: &DateTime<FixedOffset>) -> EditorPreview {
    let or_placeholder = |value: &str, placeholder: &str| {
        if value.trim().is_empty() { placeholder.to_string() } else { value.to_string() }
    };
    EditorPreview {
        title: or_placeholder(&form.title, TITLE_PLACEHOLDER),
        author: or_placeholder(&form.author, AUTHOR_PLACEHOLDER),
        date: JalaliDate::from_datetime(now).numeric(),
        body: form.content.clone(),
        cover: form.cover_image.clone().filter(|c| !c.is_empty()),
    }
}

/// Rich-text commands offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    /// Bold selection.
    Bold,
    /// Italic selection.
    Italic,
    /// Underline selection.
    Underline,
    /// Wrap in `h2`.
    Heading2,
    /// Wrap in `h3`.
    Heading3,
    /// Unordered list.
    BulletList,
    /// Ordered list.
    NumberedList,
    /// Block quote.
    Quote,
    /// Horizontal rule.
    Divider,
    /// Link to a prompted URL.
    Link,
    /// Image from a prompted URL.
    Image,
    /// Code block inserted as markup.
    Code,
}

impl ToolbarAction {
    /// Toolbar order.
    pub const ALL: [ToolbarAction; 12] = [
        ToolbarAction::Bold,
        ToolbarAction::Italic,
        ToolbarAction::Underline,
        ToolbarAction::Heading2,
        ToolbarAction::Heading3,
        ToolbarAction::BulletList,
        ToolbarAction::NumberedList,
        ToolbarAction::Quote,
        ToolbarAction::Divider,
        ToolbarAction::Link,
        ToolbarAction::Image,
        ToolbarAction::Code,
    ];

    /// `document.execCommand` name and fixed argument. `Code` inserts a
    /// node directly and has no command.
    pub fn command(self) -> Option<(&'static str, Option<&'static str>)> {
        Some(match self {
            ToolbarAction::Bold => ("bold", None),
            ToolbarAction::Italic => ("italic", None),
            ToolbarAction::Underline => ("underline", None),
            ToolbarAction::Heading2 => ("formatBlock", Some("h2")),
            ToolbarAction::Heading3 => ("formatBlock", Some("h3")),
            ToolbarAction::BulletList => ("insertUnorderedList", None),
            ToolbarAction::NumberedList => ("insertOrderedList", None),
            ToolbarAction::Quote => ("formatBlock", Some("blockquote")),
            ToolbarAction::Divider => ("insertHorizontalRule", None),
            ToolbarAction::Link => ("createLink", None),
            ToolbarAction::Image => ("insertImage", None),
            ToolbarAction::Code => return None,
        })
    }

    /// Actions that ask the user for a value first.
    pub fn needs_input(self) -> bool {
        matches!(self, ToolbarAction::Link | ToolbarAction::Image | ToolbarAction::Code)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{kv::MemoryStore, persian_date::local_datetime};

    fn form() -> EditorForm {
        EditorForm {
            title: "سانسور پیامک".into(),
            category: "امنیت".into(),
            tags: " a, ,b ".into(),
            content: "<p>متن</p>".into(),
            ..EditorForm::default()
        }
    }

    fn now() -> DateTime<FixedOffset> {
        local_datetime(1_728_000_000_000, 210)
    }

    #[test]
    fn required_fields_are_reported() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = EditorForm {
            title: "  ".into(),
            ..EditorForm::default()
        }
        .into_draft(DraftStatus::Draft, None, &now(), &mut rng)
        .unwrap_err();
        assert_eq!(err, DraftError::MissingFields(vec!["title", "category", "content"]));
    }

    #[test]
    fn draft_fills_slug_tags_and_id() {
        let mut rng = StdRng::seed_from_u64(1);
        let draft = form().into_draft(DraftStatus::Published, None, &now(), &mut rng).unwrap();
        assert_eq!(draft.slug, "sansvr-pyamk");
        assert_eq!(draft.tags, vec!["a", "b"]);
        assert!(draft.id.starts_with(&to_base36(1_728_000_000_000)));
        assert_eq!(draft.date, draft.last_modified);
        assert!(draft.cover_image.is_none());

        let kept = form()
            .into_draft(DraftStatus::Draft, Some("abc"), &now(), &mut rng)
            .unwrap();
        assert_eq!(kept.id, "abc");
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DraftStatus::Published).unwrap(), "\"published\"");
    }

    #[test]
    fn save_upserts_by_id() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut drafts = DraftStore::new(MemoryStore::new());
        let first = form().into_draft(DraftStatus::Draft, Some("x1"), &now(), &mut rng).unwrap();
        drafts.save(first.clone()).unwrap();

        let mut edited = form();
        edited.title = "new".into();
        let later = local_datetime(1_728_100_000_000, 210);
        let second = edited.into_draft(DraftStatus::Published, Some("x1"), &later, &mut rng).unwrap();
        drafts.save(second).unwrap();

        let all = drafts.all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "new");
        assert_eq!(all[0].date, first.date);
        assert_ne!(all[0].last_modified, first.date);
        assert_eq!(drafts.load("missing"), None);
    }

    #[test]
    fn form_round_trips_through_draft() {
        let mut rng = StdRng::seed_from_u64(3);
        let draft = form().into_draft(DraftStatus::Draft, None, &now(), &mut rng).unwrap();
        let refilled = EditorForm::from_draft(&draft);
        assert_eq!(refilled.tags, "a, b");
        assert_eq!(refilled.slug, "sansvr-pyamk");
    }

    #[test]
    fn malformed_drafts_read_as_empty() {
        let store: MemoryStore = [(DRAFTS_KEY, "{oops")].into_iter().collect();
        assert!(DraftStore::new(store).all().is_empty());
    }

    #[test]
    fn preview_uses_placeholders() {
        let view = preview(&EditorForm::default(), &now());
        assert_eq!(view.title, TITLE_PLACEHOLDER);
        assert_eq!(view.author, AUTHOR_PLACEHOLDER);
        assert!(view.cover.is_none());
        assert_eq!(view.date, "۱۴۰۳/۷/۱۳");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(ToolbarAction::Code.command(), None);
    }
}
