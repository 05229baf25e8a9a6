//! Parsing of the static per-article documents served at
//! `/data/articles/article-{id}.html`.
//!
//! A document looks like:
//!
//! ```html
//! <article data-id="1" data-category="..." data-author="..." data-date="..."
//!          data-reading-time="7" data-excerpt="..." data-tags="a, b"
//!          data-featured="true">
//!   <h1>Title</h1>
//!   <img class="article-image" src="../assets/images/cover.png">
//!   <div class="article-body-content">...</div>
//! </article>
//! ```

use kuchikikiki::{traits::TendrilSink, NodeRef};
use url::Url;

use crate::{
    config::{DEFAULT_COVER_IMAGE, DEFAULT_READING_TIME},
    error::ArticleError,
    numbers::leading_int,
    Article, CatalogEntry,
};

/// Tried in order; the first match is the article body.
const CONTENT_SELECTORS: [&str; 2] = [".article-body-content", ".article-body"];

/// Path of an article document below `articles_base` (no trailing slash).
pub fn article_document_path(articles_base: &str, article_id: &str) -> String {
    format!("{}/article-{}.html", articles_base.trim_end_matches('/'), article_id)
}

/// Comma-separated list, trimmed, blanks dropped. Duplicates are kept.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_reading_time(raw: Option<&str>) -> u32 {
    raw.and_then(leading_int)
        .and_then(|minutes| u32::try_from(minutes).ok())
        .filter(|minutes| *minutes > 0)
        .unwrap_or(DEFAULT_READING_TIME)
}

fn inner_html(node: &NodeRef) -> String {
    node.children().map(|child| child.to_string()).collect()
}

fn first_text(document: &NodeRef, selector: &str) -> Option<String> {
    document.select_first(selector).ok().map(|el| el.as_node().text_contents())
}

/// The first `.article-image` source, resolved against the URL of the page
/// showing the article, not the fetched document's URL.
fn cover_image(document: &NodeRef, page_url: Option<&Url>) -> String {
    let src = document.select_first(".article-image").ok().and_then(|img| {
        let attributes = img.attributes.borrow();
        let src = attributes.get("src").map(str::trim).filter(|s| !s.is_empty());
        src.map(str::to_string)
    });
    match src {
        Some(src) => page_url
            .and_then(|base| base.join(&src).ok())
            .map(String::from)
            .unwrap_or(src),
        None => DEFAULT_COVER_IMAGE.to_string(),
    }
}

/// Builds an [`Article`] from a fetched document. Counters start at zero;
/// use [`crate::EngagementStore::hydrate_counters`] to fill them in.
///
/// `page_url` is the address of the page the article is shown on; relative
/// cover paths resolve against it.
pub fn parse_article_document(html: &str, page_url: Option<&Url>) -> Result<Article, ArticleError> {
    let document = kuchikikiki::parse_html().one(html);

    let root = document.select_first("article[data-id]").map_err(|_| ArticleError::MissingRoot)?;
    let content = CONTENT_SELECTORS
        .iter()
        .find_map(|selector| document.select_first(selector).ok())
        .ok_or(ArticleError::MissingContent)?;

    let attributes = root.attributes.borrow();
    let attr = |name: &str| attributes.get(name).unwrap_or_default().to_string();

    Ok(Article {
        id: attr("data-id"),
        title: first_text(&document, "h1").unwrap_or_default(),
        category: attr("data-category"),
        author: attr("data-author"),
        date: attr("data-date"),
        reading_time: parse_reading_time(attributes.get("data-reading-time")),
        excerpt: attr("data-excerpt"),
        tags: split_tags(attributes.get("data-tags").unwrap_or_default()),
        featured: attributes.get("data-featured") == Some("true"),
        content: inner_html(content.as_node()),
        featured_image: cover_image(&document, page_url),
        views: 0,
        likes: 0,
        comments: 0,
    })
}

/// Reads a catalog entry out of an article document, keeping `fallback`'s
/// values for whatever the document does not provide. The entry id always
/// comes from `fallback`.
pub fn parse_catalog_entry(html: &str, fallback: &CatalogEntry) -> Option<CatalogEntry> {
    let document = kuchikikiki::parse_html().one(html);
    let root = document.select_first("article").ok()?;
    let attributes = root.attributes.borrow();

    let title = root
        .as_node()
        .select_first("h1")
        .ok()
        .map(|h| h.as_node().text_contents().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| fallback.title.clone());
    let category = attributes
        .get("data-category")
        .filter(|c| !c.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| fallback.category.clone());

    Some(CatalogEntry {
        id: fallback.id.clone(),
        title,
        tags: split_tags(attributes.get("data-tags").unwrap_or_default()),
        category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<!DOCTYPE html>
<html lang="fa" dir="rtl"><head><title>x</title></head>
<body>
<article data-id="1" data-category="تکنولوژی" data-author="تحریریه" data-date="۱۶ مهر ۱۴۰۳"
         data-reading-time="8" data-excerpt="خلاصه" data-tags="هوش مصنوعی, سیاست,, اینترنت "
         data-featured="true">
  <h1>عنوان مقاله</h1>
  <img class="article-image" src="../assets/images/ai.png" alt="">
  <div class="article-body-content"><h2>بخش اول</h2><p>متن <strong>مهم</strong></p></div>
</article>
</body></html>"#;

    #[test]
    fn parses_attributes_and_body() {
        let page = Url::parse("https://abzarestan.example/articles/1").expect("url");
        let article = parse_article_document(DOC, Some(&page)).expect("parse");
        assert_eq!(article.id, "1");
        assert_eq!(article.title, "عنوان مقاله");
        assert_eq!(article.category, "تکنولوژی");
        assert_eq!(article.author, "تحریریه");
        assert_eq!(article.date, "۱۶ مهر ۱۴۰۳");
        assert_eq!(article.reading_time, 8);
        assert_eq!(article.excerpt, "خلاصه");
        assert_eq!(article.tags, vec!["هوش مصنوعی", "سیاست", "اینترنت"]);
        assert!(article.featured);
        assert_eq!(article.content, "<h2>بخش اول</h2><p>متن <strong>مهم</strong></p>");
        assert_eq!(article.featured_image, "https://abzarestan.example/assets/images/ai.png");
        assert_eq!((article.views, article.likes, article.comments), (0, 0, 0));
    }

    #[test]
    fn relative_cover_ignores_document_location() {
        let page = Url::parse("https://abzarestan.example/articles/3?ref=home").expect("url");
        let article = parse_article_document(DOC, Some(&page)).expect("parse");
        assert!(!article.featured_image.contains("/data/assets/"));
        assert_eq!(article.featured_image, "https://abzarestan.example/assets/images/ai.png");
    }

    #[test]
    fn keeps_raw_src_without_base_url() {
        let article = parse_article_document(DOC, None).expect("parse");
        assert_eq!(article.featured_image, "../assets/images/ai.png");
    }

    #[test]
    fn missing_root_is_not_found() {
        let html = r#"<div class="article-body">x</div>"#;
        assert_eq!(parse_article_document(html, None), Err(ArticleError::MissingRoot));
        let html = r#"<article data-category="x"><div class="article-body">x</div></article>"#;
        assert_eq!(parse_article_document(html, None), Err(ArticleError::MissingRoot));
    }

    #[test]
    fn missing_content_is_not_found() {
        let html = r#"<article data-id="1"><h1>t</h1><p>no body</p></article>"#;
        assert_eq!(parse_article_document(html, None), Err(ArticleError::MissingContent));
    }

    #[test]
    fn falls_back_to_article_body_and_defaults() {
        let html = r#"<article data-id="5" data-reading-time="soon" data-featured="TRUE">
            <div class="article-body"><p>b</p></div></article>"#;
        let article = parse_article_document(html, None).expect("parse");
        assert_eq!(article.content, "<p>b</p>");
        assert_eq!(article.reading_time, DEFAULT_READING_TIME);
        assert!(!article.featured);
        assert!(article.tags.is_empty());
        assert_eq!(article.title, "");
        assert_eq!(article.featured_image, DEFAULT_COVER_IMAGE);
    }

    #[test]
    fn zero_reading_time_uses_default() {
        assert_eq!(parse_reading_time(Some("0")), DEFAULT_READING_TIME);
        assert_eq!(parse_reading_time(Some("12 min")), 12);
        assert_eq!(parse_reading_time(None), DEFAULT_READING_TIME);
    }

    #[test]
    fn catalog_entry_prefers_document_values() {
        let fallback = CatalogEntry {
            id: "1".into(),
            title: "fallback".into(),
            tags: vec!["old".into()],
            category: "old".into(),
        };
        let entry = parse_catalog_entry(DOC, &fallback).expect("entry");
        assert_eq!(entry.title, "عنوان مقاله");
        assert_eq!(entry.category, "تکنولوژی");
        assert_eq!(entry.tags.len(), 3);

        let bare = parse_catalog_entry("<article><p>x</p></article>", &fallback).expect("entry");
        assert_eq!(bare.title, "fallback");
        assert_eq!(bare.category, "old");
        assert!(bare.tags.is_empty());

        assert!(parse_catalog_entry("<p>none</p>", &fallback).is_none());
    }

    #[test]
    fn document_path_joins_base() {
        assert_eq!(article_document_path("/data/articles/", "3"), "/data/articles/article-3.html");
    }
}
