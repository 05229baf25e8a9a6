//! Integration tests for article page parsing.

#[cfg(test)]
mod tests {
    use abzarestan_shared::{
        article_doc::parse_article_document,
        catalog::default_catalog,
        config::MAX_RELATED,
        engagement::{Counter, Flag},
        persian_date::local_datetime,
        related::rank_related,
        render::{article_view, comment_views},
        toc::build_toc,
        ArticleSession, CatalogEntry, CommentError, EngagementStore, MemoryStore, Notice,
    };
    use rand::{rngs::StdRng, SeedableRng};

    const DOCUMENT: &str = r#"<!doctype html>
<html><body>
<article data-id="1" data-category="تکنولوژی" data-author="تحریریه" data-date="۱۷ مهر ۱۴۰۳"
         data-reading-time="8 دقیقه" data-excerpt="خلاصه" data-tags="هوش مصنوعی, سیاست">
  <h1>کنترل به جای نوآوری</h1>
  <div class="article-body-content"><h2>مقدمه</h2><p>متن</p><h3>جزئیات</h3></div>
</article>
</body></html>"#;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    fn entry(id: &str, tags: &[&str]) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            title: format!("مقاله {id}"),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            category: String::new(),
        }
    }

    #[test]
    fn first_visit_counts_one_view() {
        init_tracing();
        let mut store = EngagementStore::new(MemoryStore::new());
        let mut article = parse_article_document(DOCUMENT, None).expect("parse document");
        assert_eq!(article.id, "1");
        assert_eq!(article.reading_time, 8);

        store.record_view(&article.id).expect("record view");
        store.hydrate_counters(&mut article);

        assert_eq!(store.counter("1", Counter::Views), 1);
        assert_eq!(article_view(&article).views, 1);
        assert_eq!(article_view(&article).document_title, "کنترل به جای نوآوری - ابزارستان");
    }

    #[test]
    fn related_list_prefers_shared_tags_then_fills() {
        init_tracing();
        let catalog = vec![
            entry("current", &["a", "b"]),
            entry("x", &["a"]),
            entry("y", &["x"]),
            entry("z", &["a", "b"]),
        ];
        let tags = vec!["a".to_string(), "b".to_string()];
        let mut rng = StdRng::seed_from_u64(42);

        let ranked = rank_related("current", &tags, &catalog, MAX_RELATED, &mut rng);
        let ids: Vec<_> = ranked.iter().map(|r| r.entry.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "x", "y"]);
        assert_eq!(ranked[0].shared_tags, vec!["a", "b"]);
        assert!(ranked[2].shared_tags.is_empty());
    }

    #[test]
    fn default_catalog_excludes_current_article() {
        let catalog = default_catalog();
        let mut rng = StdRng::seed_from_u64(9);
        let ranked = rank_related("3", &[], &catalog, MAX_RELATED, &mut rng);
        assert_eq!(ranked.len(), catalog.len() - 1);
        assert!(ranked.iter().all(|r| r.entry.id != "3"));
    }

    #[test]
    fn empty_comment_leaves_list_unchanged() {
        init_tracing();
        let mut store = EngagementStore::new(MemoryStore::new());
        let now = local_datetime(1_728_000_000_000, 210);
        let before = store.load_comments("1", true, &now);

        let session = ArticleSession::open("1", &store);
        let err = session.submit_comment(&mut store, "   ", &now).unwrap_err();
        assert_eq!(err, CommentError::Empty);
        assert_eq!(Notice::from(&err), Notice::CommentEmpty);
        assert_eq!(store.comments("1"), before);

        let after = session.submit_comment(&mut store, "سلام", &now).expect("post comment");
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(comment_views(&after)[0].text, "سلام");
        assert_eq!(store.counter("1", Counter::Comments), 1);
    }

    #[test]
    fn like_twice_restores_state() {
        let mut store = EngagementStore::new(MemoryStore::new());
        store.set_counter("2", Counter::Likes, 4).expect("seed likes");
        let mut session = ArticleSession::open("2", &store);

        assert_eq!(session.toggle_like(&mut store).expect("like"), Notice::Liked);
        assert_eq!(session.displayed_likes(), Some(5));
        assert_eq!(session.toggle_like(&mut store).expect("unlike"), Notice::Unliked);

        assert_eq!(store.counter("2", Counter::Likes), 4);
        assert!(!store.flag("2", Flag::Liked));
    }

    #[test]
    fn article_body_gets_outline() {
        let article = parse_article_document(DOCUMENT, None).expect("parse document");
        let toc = build_toc(&article.content);
        let ids: Vec<_> = toc.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["heading-0", "heading-1"]);
        assert!(toc.entries[1].is_sub());
    }

    #[test]
    fn cover_path_follows_the_article_page() {
        let document = DOCUMENT.replace(
            "<h1>",
            r#"<img class="article-image" src="../assets/images/ai.png" alt=""><h1>"#,
        );
        let page = url::Url::parse("https://abzarestan.example/articles/1").expect("page url");
        let article = parse_article_document(&document, Some(&page)).expect("parse document");
        let style = article_view(&article).cover.expect("cover").to_style();
        assert!(style.contains("url('https://abzarestan.example/assets/images/ai.png')"));
        assert!(!style.contains("/data/assets/"));
    }
}
