use abzarestan_shared::{
    article_doc::{article_document_path, parse_article_document, parse_catalog_entry},
    catalog::default_catalog,
    Article, CatalogEntry,
};
use gloo_net::http::Request;
use url::Url;

use crate::{config::ARTICLES_PATH, utils::current_href};

/// URL of the page currently shown. Relative image paths in a fetched
/// article resolve against it, as they would for markup in this page.
fn page_url() -> Option<Url> {
    Url::parse(&current_href()?).ok()
}

async fn fetch_document(path: &str) -> Result<String, String> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response.text().await.map_err(|e| format!("Read error: {:?}", e))
}

/// Fetches and parses `article-{id}.html`. Any failure (network,
/// status, parse) comes back as `Err`; the page shows its not-found view for
/// all of them.
pub async fn fetch_article(id: &str) -> Result<Article, String> {
    let path = article_document_path(ARTICLES_PATH, id);
    let html = fetch_document(&path).await?;
    let base = page_url();
    parse_article_document(&html, base.as_ref()).map_err(|e| format!("Parse error: {}", e))
}

/// The related-article pool. Each known article is read from its own
/// document; the built-in entry stands in when that fails.
pub async fn fetch_catalog() -> Vec<CatalogEntry> {
    let fallbacks = default_catalog();
    let fetches = fallbacks.iter().map(|fallback| async move {
        let path = article_document_path(ARTICLES_PATH, &fallback.id);
        match fetch_document(&path).await {
            Ok(html) => parse_catalog_entry(&html, fallback).unwrap_or_else(|| fallback.clone()),
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("Catalog entry {} falls back to built-in data: {}", fallback.id, e)
                        .into(),
                );
                fallback.clone()
            },
        }
    });
    futures::future::join_all(fetches).await
}
