use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    i18n::current::{common as common_text, not_found as t},
    router::Route,
    seo,
};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    use_effect_with((), |_| {
        seo::apply_page_seo(Some(t::TITLE));
        || ()
    });

    html! {
        <main class={classes!("not-found", "text-center", "py-16")}>
            <h2>{ t::TITLE }</h2>
            <p>{ t::TEXT }</p>
            <Link<Route> to={Route::Home} classes={classes!("btn", "btn-primary")}>
                { common_text::BACK_HOME }
            </Link<Route>>
        </main>
    }
}
