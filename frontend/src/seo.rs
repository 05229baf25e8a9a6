use abzarestan_shared::{config::SITE_NAME, render::ArticleView};
use web_sys::{window, Document, Element};

fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

fn head() -> Option<Element> {
    let doc = document()?;
    doc.query_selector("head").ok().flatten()
}

fn upsert_head_element(selector: &str, tag_name: &str) -> Option<Element> {
    let doc = document()?;
    if let Some(found) = doc.query_selector(selector).ok().flatten() {
        return Some(found);
    }
    let head = head()?;
    let created = doc.create_element(tag_name).ok()?;
    let _ = head.append_child(&created);
    Some(created)
}

fn set_meta_name(name: &str, content: &str) {
    let selector = format!("meta[name=\"{}\"]", name);
    let Some(element) = upsert_head_element(&selector, "meta") else {
        return;
    };
    let _ = element.set_attribute("name", name);
    let _ = element.set_attribute("content", content);
}

fn set_html_dir(lang: &str, dir: &str) {
    let Some(doc) = document() else {
        return;
    };
    if let Some(root) = doc.document_element() {
        let _ = root.set_attribute("lang", lang);
        let _ = root.set_attribute("dir", dir);
    }
}

pub fn set_document_title(title: &str) {
    let Some(doc) = document() else {
        return;
    };
    doc.set_title(title);
}

/// Title for non-article pages: `{page} - ابزارستان`, or the bare site name.
pub fn apply_page_seo(page_title: Option<&str>) {
    set_html_dir("fa", "rtl");
    match page_title {
        Some(title) => set_document_title(&format!("{} - {}", title, SITE_NAME)),
        None => set_document_title(SITE_NAME),
    }
}

pub fn apply_article_seo(view: &ArticleView) {
    set_html_dir("fa", "rtl");
    set_document_title(&view.document_title);
    set_meta_name("description", &view.meta_description);
}
