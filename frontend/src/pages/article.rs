use abzarestan_shared::{
    config::{MAX_RELATED, SEED_SAMPLE_COMMENTS, TOC_ACTIVE_THRESHOLD},
    generation::LoadGeneration,
    related::rank_related,
    render::{article_view, comment_views, related_views, ArticleView, RelatedItemView},
    toc::{active_heading, build_toc, TocEntry},
    ArticleSession, Comment, Notice,
};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    components::{
        article_actions::ArticleActions,
        comments::Comments,
        loading_spinner::LoadingSpinner,
        raw_html::RawHtml,
        related_articles::RelatedArticles,
        share_bar::ShareBar,
        table_of_contents::TableOfContents,
        toast::use_toast,
    },
    hooks::{use_scroll_to_top, use_throttled_scroll},
    i18n::{
        current::{article as t, common as common_text},
        fill_count,
    },
    router::Route,
    seo,
    storage::engagement_store,
    utils::{element_tops, now_local, page_rng},
};

const HEADING_SELECTOR: &str = "#article-content h2, #article-content h3";

/// Everything rendered once the document has loaded.
#[derive(Clone, PartialEq)]
struct LoadedArticle {
    view: ArticleView,
    body: AttrValue,
    toc: Vec<TocEntry>,
}

#[derive(Clone, PartialEq)]
enum PageState {
    Loading,
    Missing,
    Ready(Box<LoadedArticle>),
}

#[derive(Properties, Clone, PartialEq)]
pub struct ArticlePageProps {
    pub id: String,
}

#[function_component(ArticlePage)]
pub fn article_page(props: &ArticlePageProps) -> Html {
    use_scroll_to_top();

    let page = use_state(|| PageState::Loading);
    let session = use_state(|| None::<ArticleSession>);
    let comments = use_state(Vec::<Comment>::new);
    let related = use_state(Vec::<RelatedItemView>::new);
    let related_loading = use_state(|| true);
    let active_heading_index = use_state_eq(|| None::<usize>);
    let generation = use_mut_ref(LoadGeneration::default);
    let toast = use_toast();

    {
        let page = page.clone();
        let session = session.clone();
        let comments = comments.clone();
        let related = related.clone();
        let related_loading = related_loading.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            let ticket = generation.borrow_mut().begin();
            page.set(PageState::Loading);
            session.set(None);
            comments.set(Vec::new());
            related.set(Vec::new());
            related_loading.set(true);
            let load_generation = generation.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let fetched = api::fetch_article(&id).await;
                if !load_generation.borrow().is_current(ticket) {
                    return;
                }
                let mut article = match fetched {
                    Ok(article) => article,
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to load article {}: {}", id, e).into(),
                        );
                        seo::apply_page_seo(Some(t::NOT_FOUND_TITLE));
                        page.set(PageState::Missing);
                        return;
                    },
                };

                let mut store = engagement_store();
                if let Err(e) = store.record_view(&article.id) {
                    web_sys::console::warn_1(&format!("View not recorded: {}", e).into());
                }
                store.hydrate_counters(&mut article);
                session.set(Some(ArticleSession::open(article.id.clone(), &store)));

                let toc = build_toc(&article.content);
                let view = article_view(&article);
                seo::apply_article_seo(&view);
                page.set(PageState::Ready(Box::new(LoadedArticle {
                    view,
                    body: AttrValue::from(toc.html),
                    toc: toc.entries,
                })));

                let catalog = api::fetch_catalog().await;
                if !load_generation.borrow().is_current(ticket) {
                    return;
                }
                let ranked =
                    rank_related(&article.id, &article.tags, &catalog, MAX_RELATED, &mut page_rng());
                related.set(related_views(&ranked));
                related_loading.set(false);

                comments.set(store.load_comments(&article.id, SEED_SAMPLE_COMMENTS, &now_local()));
            });
            move || generation.borrow_mut().cancel()
        });
    }

    let refresh_active_heading = {
        let active_heading_index = active_heading_index.clone();
        Callback::from(move |_| {
            let tops = element_tops(HEADING_SELECTOR);
            active_heading_index.set(active_heading(&tops, TOC_ACTIVE_THRESHOLD));
        })
    };
    use_throttled_scroll(refresh_active_heading.clone());

    let on_like = {
        let session = session.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            let Some(mut next) = (*session).clone() else {
                return;
            };
            let mut store = engagement_store();
            match next.toggle_like(&mut store) {
                Ok(notice) => {
                    session.set(Some(next));
                    toast.notify(notice);
                },
                Err(e) => {
                    web_sys::console::error_1(&format!("Like failed: {}", e).into());
                    toast.notify(Notice::StorageFailed);
                },
            }
        })
    };

    let on_bookmark = {
        let session = session.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            let Some(mut next) = (*session).clone() else {
                return;
            };
            let mut store = engagement_store();
            match next.toggle_bookmark(&mut store) {
                Ok(notice) => {
                    session.set(Some(next));
                    toast.notify(notice);
                },
                Err(e) => {
                    web_sys::console::error_1(&format!("Bookmark failed: {}", e).into());
                    toast.notify(Notice::StorageFailed);
                },
            }
        })
    };

    let on_comment = {
        let session = session.clone();
        let comments = comments.clone();
        let toast = toast.clone();
        Callback::from(move |text: String| {
            let Some(current) = (*session).as_ref() else {
                return;
            };
            let mut store = engagement_store();
            match current.submit_comment(&mut store, &text, &now_local()) {
                Ok(updated) => {
                    comments.set(updated);
                    toast.notify(Notice::CommentPosted);
                },
                Err(e) => {
                    web_sys::console::error_1(&format!("Comment rejected: {}", e).into());
                    toast.notify(Notice::from(&e));
                },
            }
        })
    };

    let on_notice = {
        let toast = toast.clone();
        Callback::from(move |notice: Notice| toast.notify(notice))
    };

    let content = match &*page {
        PageState::Loading => html! { <LoadingSpinner /> },
        PageState::Missing => html! {
            <div class={classes!("not-found", "text-center", "py-16")}>
                <h2>{ t::NOT_FOUND_TITLE }</h2>
                <p>{ t::NOT_FOUND_TEXT }</p>
                <Link<Route> to={Route::Home} classes={classes!("btn", "btn-primary")}>
                    { common_text::BACK_HOME }
                </Link<Route>>
            </div>
        },
        PageState::Ready(loaded) => {
            let view = &loaded.view;
            let (liked, bookmarked, likes) = match &*session {
                Some(s) => (s.liked(), s.bookmarked(), s.displayed_likes().unwrap_or(0)),
                None => (false, false, 0),
            };
            let cover = view.cover.as_ref().map(|cover| cover.to_style());
            html! {
                <div class={classes!("article-layout", "grid", "gap-8", "lg:grid-cols-[1fr_300px]")}>
                    <article class="article-main">
                        <header class="article-header">
                            <span class="article-category">{ &view.category }</span>
                            <h1 class="article-title">{ &view.title }</h1>
                            <div class="article-meta" aria-label={t::META_ARIA}>
                                <span><i class="fas fa-user" aria-hidden="true"></i>{ &view.author }</span>
                                <span><i class="far fa-calendar" aria-hidden="true"></i>{ &view.date }</span>
                                <span>
                                    <i class="far fa-clock" aria-hidden="true"></i>
                                    { fill_count(t::READING_TIME_TEMPLATE, view.reading_time) }
                                </span>
                                <span id="view-count">
                                    <i class="far fa-eye" aria-hidden="true"></i>
                                    { fill_count(t::VIEWS_TEMPLATE, view.views) }
                                </span>
                            </div>
                        </header>
                        if let Some(style) = cover {
                            <div class="article-image" style={style}></div>
                        }
                        if !view.excerpt.is_empty() {
                            <p class="article-excerpt">{ &view.excerpt }</p>
                        }
                        <RawHtml
                            id={AttrValue::from("article-content")}
                            class={classes!("article-body")}
                            html={loaded.body.clone()}
                            on_rendered={refresh_active_heading}
                        />
                        if !view.tags.is_empty() {
                            <div class="article-tags">
                                <h4>{ t::TAGS_TITLE }</h4>
                                { for view.tags.iter().map(|tag| html! {
                                    <a href={tag.href.clone()} class="tag-pill">{ &tag.label }</a>
                                }) }
                            </div>
                        }
                        <ArticleActions
                            liked={liked}
                            bookmarked={bookmarked}
                            likes={likes}
                            on_like={on_like}
                            on_bookmark={on_bookmark}
                        />
                        <ShareBar title={AttrValue::from(view.title.clone())} on_notice={on_notice} />
                        <Comments comments={comment_views(&comments)} on_submit={on_comment} />
                    </article>
                    <aside class="article-sidebar">
                        <TableOfContents entries={loaded.toc.clone()} active={*active_heading_index} />
                        <RelatedArticles items={(*related).clone()} loading={*related_loading} />
                    </aside>
                </div>
            }
        },
    };

    html! {
        <main class={classes!("article-page", "max-w-7xl", "mx-auto", "px-4", "py-8")} aria-label={t::BODY_ARIA}>
            { content }
            { toast.view() }
        </main>
    }
}
