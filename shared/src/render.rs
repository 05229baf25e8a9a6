//! View-models: plain data describing what a page shows, built from the
//! domain types. Components only turn these into markup.

use crate::{
    config::SITE_NAME, related::RankedArticle, toc::TocEntry, Article, Comment,
};

/// How the hero cover is painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverStyle {
    /// An image URL, painted as a centered cover background.
    Image(String),
    /// A raw CSS `background` value, e.g. a gradient.
    Background(String),
}

impl CoverStyle {
    /// URL-like references start with `http`, `/` or `.`; anything else is
    /// taken as a CSS background value.
    pub fn from_reference(reference: &str) -> Self {
        let reference = reference.trim();
        if reference.starts_with("http") || reference.starts_with('/') || reference.starts_with('.') {
            CoverStyle::Image(reference.to_string())
        } else {
            CoverStyle::Background(reference.to_string())
        }
    }

    /// Inline `style` attribute value.
    pub fn to_style(&self) -> String {
        match self {
            CoverStyle::Image(url) => format!(
                "background-image: url('{}'); background-size: cover; background-position: center; \
                 background-repeat: no-repeat;",
                url.replace('\'', "%27")
            ),
            CoverStyle::Background(css) => format!("background: {};", css.replace(';', "")),
        }
    }
}

/// A tag pill linking to the home page search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLink {
    /// `#tag`
    pub label: String,
    /// Home page search for the tag.
    pub href: String,
}

impl TagLink {
    /// Link for one tag; surrounding whitespace is dropped.
    pub fn new(tag: &str) -> Self {
        let tag = tag.trim();
        TagLink {
            label: format!("#{tag}"),
            href: format!("/?search={}", urlencoding::encode(tag)),
        }
    }
}

/// Header, cover and tag section of the article page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView {
    /// Article id.
    pub id: String,
    /// Heading text.
    pub title: String,
    /// Category badge.
    pub category: String,
    /// Byline.
    pub author: String,
    /// Lead paragraph, may be empty.
    pub excerpt: String,
    /// Date as written in the document.
    pub date: String,
    /// View count, after this visit.
    pub views: u64,
    /// Minutes.
    pub reading_time: u32,
    /// Absent when the document has no cover.
    pub cover: Option<CoverStyle>,
    /// Tag pills in document order.
    pub tags: Vec<TagLink>,
    /// `<title>` text.
    pub document_title: String,
    /// `<meta name="description">` content.
    pub meta_description: String,
}

/// View-model for a loaded article.
pub fn article_view(article: &Article) -> ArticleView {
    let cover = Some(article.featured_image.trim())
        .filter(|reference| !reference.is_empty())
        .map(CoverStyle::from_reference);
    ArticleView {
        id: article.id.clone(),
        title: article.title.clone(),
        category: article.category.clone(),
        author: article.author.clone(),
        excerpt: article.excerpt.clone(),
        date: article.date.clone(),
        views: article.views,
        reading_time: article.reading_time,
        cover,
        tags: article.tags.iter().map(|tag| TagLink::new(tag)).collect(),
        document_title: format!("{} - {}", article.title, SITE_NAME),
        meta_description: article.excerpt.clone(),
    }
}

/// One rendered comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    /// Stable list key, the comment id.
    pub key: i64,
    /// Display name.
    pub author: String,
    /// Plain text, rendered escaped.
    pub text: String,
    /// Localized date.
    pub date: String,
}

/// Comments in stored order, newest first.
pub fn comment_views(comments: &[Comment]) -> Vec<CommentView> {
    comments
        .iter()
        .map(|c| CommentView {
            key: c.id,
            author: c.author.clone(),
            text: c.text.clone(),
            date: c.date.clone(),
        })
        .collect()
}

/// One numbered entry of the related-articles box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedItemView {
    /// 1-based position in the list.
    pub number: usize,
    /// Link target id.
    pub id: String,
    /// Link text.
    pub title: String,
    /// Tags in common with the current article, empty for random fill.
    pub shared_tags: Vec<String>,
}

/// Numbers ranked suggestions in order.
pub fn related_views(ranked: &[RankedArticle]) -> Vec<RelatedItemView> {
    ranked
        .iter()
        .enumerate()
        .map(|(index, item)| RelatedItemView {
            number: index + 1,
            id: item.entry.id.clone(),
            title: item.entry.title.clone(),
            shared_tags: item.shared_tags.clone(),
        })
        .collect()
}

/// One link of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocItemView {
    /// Heading id.
    pub id: String,
    /// `#id`
    pub href: String,
    /// Heading text.
    pub text: String,
    /// `h3` entries are indented under the preceding `h2`.
    pub sub: bool,
    /// The heading currently in view.
    pub active: bool,
}

/// At most one item is active: the one at `active`.
pub fn toc_views(entries: &[TocEntry], active: Option<usize>) -> Vec<TocItemView> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| TocItemView {
            id: entry.id.clone(),
            href: entry.href(),
            text: entry.text.clone(),
            sub: entry.is_sub(),
            active: active == Some(index),
        })
        .collect()
}
