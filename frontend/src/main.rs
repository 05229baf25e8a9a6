//! Abzarestan (ابزارستان) single-page frontend: Yew components and pages
//! wired to the browser, with page logic from `abzarestan-shared`.

mod api;
mod components;
mod config;
pub mod hooks;
mod i18n;
mod logging;
mod pages;
mod router;
mod seo;
mod storage;
mod utils;

use yew::prelude::*;

use crate::components::page_loader::PageLoader;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <PageLoader />
            <router::AppRouter />
        </>
    }
}

fn main() {
    logging::init();
    yew::Renderer::<App>::new().render();
}
