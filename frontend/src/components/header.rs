use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    config::{asset_path, LOGO_PATH},
    i18n::current::{common as common_text, header as t},
    router::Route,
};

fn nav_items() -> [(&'static str, Route, &'static str); 3] {
    [
        (t::NAV_HOME, Route::Home, "fa-house"),
        (t::NAV_GUIDE, Route::Guide, "fa-book-open"),
        (t::NAV_EDITOR, Route::Editor, "fa-pen-to-square"),
    ]
}

#[function_component(Header)]
pub fn header() -> Html {
    let mobile_menu_open = use_state(|| false);
    let route = use_route::<Route>();

    // Navigating closes the mobile menu.
    {
        let mobile_menu_open = mobile_menu_open.clone();
        use_effect_with(route.clone(), move |_| {
            mobile_menu_open.set(false);
            || ()
        });
    }

    let toggle_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(!*mobile_menu_open))
    };

    let close_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(false))
    };

    let render_link = |(label, target, icon): (&'static str, Route, &'static str)| {
        let active = route.as_ref() == Some(&target);
        html! {
            <Link<Route>
                to={target}
                classes={classes!("nav-link", active.then_some("active"))}
            >
                <i class={classes!("fas", icon)} aria-hidden="true"></i>
                <span>{ label }</span>
            </Link<Route>>
        }
    };

    let hamburger_line = classes!("block", "w-[1.4rem]", "h-[2px]", "bg-[var(--text)]", "transition-all");

    html! {
        <>
            <header class={classes!("site-header", "sticky", "top-0", "z-[80]", "w-full")}>
                <div class={classes!("header-inner", "flex", "items-center", "gap-4", "max-w-7xl", "mx-auto", "px-4")}>
                    <Link<Route> to={Route::Home} classes="brand-logo">
                        <img src={asset_path(LOGO_PATH)} alt={t::LOGO_ALT} class="logo" />
                    </Link<Route>>

                    <nav class="desktop-nav" aria-label={t::NAV_MAIN_ARIA}>
                        { for nav_items().into_iter().map(render_link) }
                    </nav>

                    <button
                        type="button"
                        class={classes!("hamburger", "mr-auto")}
                        aria-label={t::OPEN_MENU_ARIA}
                        aria-expanded={(*mobile_menu_open).to_string()}
                        onclick={toggle_mobile_menu}
                    >
                        <span class={classes!(hamburger_line.clone(), (*mobile_menu_open).then_some("translate-y-[6px] rotate-45"))} />
                        <span class={classes!(hamburger_line.clone(), (*mobile_menu_open).then_some("opacity-0"))} />
                        <span class={classes!(hamburger_line, (*mobile_menu_open).then_some("-translate-y-[6px] -rotate-45"))} />
                    </button>
                </div>
            </header>

            <div class={classes!("mobile-menu", (*mobile_menu_open).then_some("open"))}>
                <div class="mobile-menu-backdrop" onclick={close_mobile_menu.clone()}></div>
                <nav class="mobile-menu-panel" aria-label={t::NAV_MAIN_ARIA}>
                    <button type="button" class="mobile-menu-close" aria-label={common_text::CLOSE} onclick={close_mobile_menu}>
                        <i class="fas fa-times" aria-hidden="true"></i>
                    </button>
                    { for nav_items().into_iter().map(render_link) }
                </nav>
            </div>
        </>
    }
}
