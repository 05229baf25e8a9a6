use abzarestan_shared::{
    config::TOC_HEADER_OFFSET,
    render::{toc_views, TocItemView},
    toc::{scroll_target, TocEntry},
};
use yew::prelude::*;

use crate::{
    i18n::current::toc as t,
    utils::{current_scroll_y, element_by_id, smooth_scroll_to},
};

#[derive(Properties, PartialEq)]
pub struct TableOfContentsProps {
    pub entries: Vec<TocEntry>,
    #[prop_or_default]
    pub active: Option<usize>,
}

fn scroll_to_heading(id: &str) {
    if let Some(target) = element_by_id(id) {
        let top = target.get_bounding_client_rect().top();
        smooth_scroll_to(scroll_target(top, current_scroll_y(), TOC_HEADER_OFFSET));
    }
}

/// Article outline. Hidden entirely when the article has no `h2`/`h3`.
#[function_component(TableOfContents)]
pub fn table_of_contents(props: &TableOfContentsProps) -> Html {
    let mobile_open = use_state(|| false);

    if props.entries.is_empty() {
        return Html::default();
    }

    let toggle_mobile = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_: MouseEvent| mobile_open.set(!*mobile_open))
    };

    let items = toc_views(&props.entries, props.active);
    let render_item = |item: TocItemView| {
        let onclick = {
            let mobile_open = mobile_open.clone();
            let id = item.id.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                mobile_open.set(false);
                scroll_to_heading(&id);
            })
        };
        html! {
            <li key={item.id.clone()}>
                <a
                    href={item.href}
                    class={classes!(item.sub.then_some("sub-heading"), item.active.then_some("active"))}
                    aria-current={item.active.then_some("location")}
                    onclick={onclick}
                >
                    { item.text }
                </a>
            </li>
        }
    };

    html! {
        <nav
            class={classes!("article-toc", (*mobile_open).then_some("mobile-open"))}
            aria-label={t::ARIA}
        >
            <button type="button" class="toc-mobile-toggle" onclick={toggle_mobile}>
                { t::TITLE }
            </button>
            <h3 class="toc-title">{ t::TITLE }</h3>
            <ul id="table-of-contents">
                { for items.into_iter().map(render_item) }
            </ul>
        </nav>
    }
}
