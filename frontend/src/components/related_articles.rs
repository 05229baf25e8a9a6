use abzarestan_shared::render::RelatedItemView;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    i18n::{current::related as t, fill_count},
    router::Route,
};

#[derive(Properties, PartialEq)]
pub struct RelatedArticlesProps {
    pub items: Vec<RelatedItemView>,
    #[prop_or(false)]
    pub loading: bool,
}

#[function_component(RelatedArticles)]
pub fn related_articles(props: &RelatedArticlesProps) -> Html {
    let body = if props.loading {
        html! { <LoadingSpinner size={SpinnerSize::Small} /> }
    } else if props.items.is_empty() {
        html! { <p class="text-center text-[var(--muted)] p-4">{ t::EMPTY }</p> }
    } else {
        html! {
            { for props.items.iter().map(|item| html! {
                <Link<Route>
                    key={item.id.clone()}
                    to={Route::Article { id: item.id.clone() }}
                    classes={classes!("related-item")}
                >
                    <div class="related-item-number">{ fill_count("{}", item.number) }</div>
                    <div class="related-item-content">
                        <div class="related-item-title">{ &item.title }</div>
                        if !item.shared_tags.is_empty() {
                            <div class="related-item-tags">
                                { for item.shared_tags.iter().map(|tag| html! {
                                    <span class="tag-pill">{ format!("#{}", tag) }</span>
                                }) }
                            </div>
                        }
                    </div>
                </Link<Route>>
            }) }
        }
    };

    html! {
        <aside class="related-articles">
            <h3 class="sidebar-title">{ t::TITLE }</h3>
            <div id="related-articles">{ body }</div>
        </aside>
    }
}
