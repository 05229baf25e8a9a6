use abzarestan_shared::{render::TagLink, CatalogEntry};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::home as t, router::Route};

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    pub article: CatalogEntry,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    let detail_route = Route::Article {
        id: article.id.clone(),
    };

    html! {
        <article class="article-card">
            <h3 class="article-title">
                <Link<Route> to={detail_route.clone()} classes={classes!("article-title-link")}>
                    { &article.title }
                </Link<Route>>
            </h3>
            <div class="post-meta">
                <span class="post-meta-item post-category">
                    <i class="far fa-folder" aria-hidden="true"></i>
                    { &article.category }
                </span>
            </div>
            <div class="post-footer">
                <ul class="post-tags">
                    { for article.tags.iter().map(|tag| {
                        let link = TagLink::new(tag);
                        html! {
                            <li>
                                <a href={link.href} class="tag-pill">{ link.label }</a>
                            </li>
                        }
                    }) }
                </ul>
                <Link<Route> to={detail_route} classes={classes!("read-more")}>
                    { t::READ_MORE }
                </Link<Route>>
            </div>
        </article>
    }
}
