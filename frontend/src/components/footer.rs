use yew::prelude::*;

use crate::i18n::current::footer as t;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class={classes!("site-footer", "mt-16", "py-8", "border-t", "border-[var(--border)]")}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "text-center", "text-sm", "text-[var(--muted)]")}>
                <p>{ t::TAGLINE }</p>
                <p>{ t::COPYRIGHT }</p>
            </div>
        </footer>
    }
}
