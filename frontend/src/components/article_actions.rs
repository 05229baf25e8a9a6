use yew::prelude::*;

use crate::i18n::{current::article as t, fill_count};

#[derive(Properties, PartialEq)]
pub struct ArticleActionsProps {
    pub liked: bool,
    pub bookmarked: bool,
    pub likes: u64,
    pub on_like: Callback<()>,
    pub on_bookmark: Callback<()>,
}

#[function_component(ArticleActions)]
pub fn article_actions(props: &ArticleActionsProps) -> Html {
    let on_like = {
        let cb = props.on_like.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_bookmark = {
        let cb = props.on_bookmark.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="article-actions">
            <button
                type="button"
                id="like-btn"
                class={classes!("action-btn", props.liked.then_some("active"))}
                aria-pressed={props.liked.to_string()}
                title={t::LIKE}
                onclick={on_like}
            >
                <i class={classes!(if props.liked { "fas" } else { "far" }, "fa-heart")} aria-hidden="true"></i>
                <span id="like-count">{ fill_count("{}", props.likes) }</span>
            </button>
            <button
                type="button"
                id="bookmark-btn"
                class={classes!("action-btn", props.bookmarked.then_some("active"))}
                aria-pressed={props.bookmarked.to_string()}
                title={t::BOOKMARK}
                onclick={on_bookmark}
            >
                <i class={classes!(if props.bookmarked { "fas" } else { "far" }, "fa-bookmark")} aria-hidden="true"></i>
                <span>{ t::BOOKMARK }</span>
            </button>
        </div>
    }
}
