use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/articles/:id")]
    Article { id: String },

    #[at("/admin/editor")]
    Editor,

    #[at("/admin/editor/:id")]
    EditArticle { id: String },

    #[at("/guide")]
    Guide,

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::Article {
            id,
        } => {
            html! { <pages::article::ArticlePage id={id} /> }
        },
        Route::Editor => html! { <pages::editor::EditorPage /> },
        Route::EditArticle {
            id,
        } => {
            html! { <pages::editor::EditorPage id={Some(id)} /> }
        },
        Route::Guide => html! { <pages::guide::GuidePage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                <Header />
                <div class="flex-1 pt-[var(--space-sm)]">
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </div>
        </BrowserRouter>
    }
}
