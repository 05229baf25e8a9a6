use abzarestan_shared::catalog::{default_catalog, search};
use serde::{Deserialize, Serialize};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::article_card::ArticleCard,
    i18n::{current::home as t, fill_one},
    router::Route,
    seo,
};

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
struct HomeQuery {
    #[serde(default)]
    search: Option<String>,
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let catalog = use_state(default_catalog);
    let location = use_location();
    let navigator = use_navigator();

    let query = location
        .as_ref()
        .and_then(|loc| loc.query::<HomeQuery>().ok())
        .and_then(|q| q.search)
        .unwrap_or_default();

    {
        let catalog = catalog.clone();
        use_effect_with((), move |_| {
            seo::apply_page_seo(None);
            wasm_bindgen_futures::spawn_local(async move {
                catalog.set(api::fetch_catalog().await);
            });
            || ()
        });
    }

    let on_search_input = {
        let navigator = navigator.clone();
        Callback::from(move |event: InputEvent| {
            let Some(target) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(navigator) = navigator.as_ref() else {
                return;
            };
            let value = target.value();
            let result = if value.trim().is_empty() {
                navigator.replace_with_query(&Route::Home, &HomeQuery::default())
            } else {
                navigator.replace_with_query(&Route::Home, &HomeQuery { search: Some(value) })
            };
            if let Err(err) = result {
                web_sys::console::error_1(&format!("Failed to update search query: {}", err).into());
            }
        })
    };

    let hits = search(&catalog, &query);
    let heading = if query.trim().is_empty() {
        t::TITLE.to_string()
    } else {
        fill_one(t::RESULTS_TEMPLATE, query.trim())
    };

    html! {
        <main class={classes!("max-w-5xl", "mx-auto", "px-4", "py-8")}>
            <section class="hero">
                <h1 class="hero-title">{ heading }</h1>
                <p class="hero-intro">{ t::INTRO }</p>
                <input
                    type="search"
                    class="search-input"
                    placeholder={t::SEARCH_PLACEHOLDER}
                    aria-label={t::SEARCH_ARIA}
                    value={query.clone()}
                    oninput={on_search_input}
                />
            </section>
            <section class={classes!("articles-grid", "grid", "gap-6", "md:grid-cols-2")}>
                if hits.is_empty() {
                    <p class="text-center text-[var(--muted)]">{ t::NO_RESULTS }</p>
                } else {
                    { for hits.into_iter().map(|entry| html! {
                        <ArticleCard key={entry.id.clone()} article={entry.clone()} />
                    }) }
                }
            </section>
        </main>
    }
}
