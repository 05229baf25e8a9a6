use abzarestan_shared::guide::{
    current_section, is_mobile, section_scroll_target, SectionBox, SidebarState,
};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::{
    hooks::{use_scroll_to_top, use_throttled_scroll},
    i18n::current::guide as t,
    seo,
    utils::{
        copy_to_clipboard, current_scroll_y, element_by_id, smooth_scroll_to, toggle_body_class,
        viewport_width,
    },
};

const COPIED_RESET_MS: u32 = 2000;

/// Document-coordinate boxes of every `.content-section`.
fn section_boxes() -> Vec<SectionBox> {
    let Some(list) = window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.query_selector_all(".content-section").ok())
    else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionBox {
            id: el.id(),
            top: f64::from(el.offset_top()),
            height: f64::from(el.offset_height()),
        })
        .collect()
}

fn scroll_to_section(id: &str) {
    if let Some(section) = element_by_id(id) {
        let top = section.get_bounding_client_rect().top();
        smooth_scroll_to(section_scroll_target(top, current_scroll_y()));
    }
}

#[derive(Properties, PartialEq)]
struct CodeBlockProps {
    code: AttrValue,
}

#[function_component(CodeBlock)]
fn code_block(props: &CodeBlockProps) -> Html {
    let copied = use_state(|| false);
    let reset = use_mut_ref(|| None::<Timeout>);

    let on_copy = {
        let copied = copied.clone();
        let reset = reset.clone();
        let code = props.code.clone();
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            let reset = reset.clone();
            let code = code.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if !copy_to_clipboard(&code).await {
                    web_sys::console::warn_1(&"Clipboard write failed".into());
                    return;
                }
                copied.set(true);
                let timer = {
                    let copied = copied.clone();
                    Timeout::new(COPIED_RESET_MS, move || copied.set(false))
                };
                // Replacing the handle cancels a pending reset.
                *reset.borrow_mut() = Some(timer);
            });
        })
    };

    html! {
        <div class="code-block">
            <button
                type="button"
                class={classes!("copy-btn", (*copied).then_some("copied"))}
                onclick={on_copy}
            >
                { if *copied { t::COPIED } else { t::COPY } }
            </button>
            <pre dir="ltr"><code>{ props.code.clone() }</code></pre>
        </div>
    }
}

#[function_component(GuidePage)]
pub fn guide_page() -> Html {
    use_scroll_to_top();

    let sidebar = use_state_eq(SidebarState::default);
    let active = use_state_eq(|| None::<String>);

    use_effect_with((), |_| {
        seo::apply_page_seo(Some(t::PAGE_TITLE));
        || ()
    });

    {
        let drawer_open = sidebar.drawer_open;
        use_effect_with(drawer_open, move |open| {
            toggle_body_class("sidebar-open", *open);
            || toggle_body_class("sidebar-open", false)
        });
    }

    {
        let active = active.clone();
        use_throttled_scroll(Callback::from(move |_| {
            let boxes = section_boxes();
            if let Some(id) = current_section(current_scroll_y(), &boxes) {
                active.set(Some(id.to_string()));
            }
        }));
    }

    let on_sidebar_toggle = {
        let sidebar = sidebar.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *sidebar;
            next.toggle_button(is_mobile(viewport_width()));
            sidebar.set(next);
        })
    };

    let on_drawer_toggle = {
        let sidebar = sidebar.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *sidebar;
            next.toggle_drawer();
            sidebar.set(next);
        })
    };

    let on_overlay = {
        let sidebar = sidebar.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *sidebar;
            next.close_drawer();
            sidebar.set(next);
        })
    };

    let on_link = |id: &'static str| {
        let sidebar = sidebar.clone();
        let active = active.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            active.set(Some(id.to_string()));

            let mut next = *sidebar;
            let scroll = next.link_clicked(is_mobile(viewport_width()));
            sidebar.set(next);

            if scroll.delay_ms == 0 {
                scroll_to_section(id);
            } else {
                // Let the drawer finish closing first.
                Timeout::new(scroll.delay_ms, move || scroll_to_section(id)).forget();
            }
        })
    };

    let collapse_label = if sidebar.collapsed { t::SHOW } else { t::HIDE };

    html! {
        <main class={classes!("guide-page", "flex", "gap-8", "max-w-7xl", "mx-auto", "px-4", "py-8")}>
            <button
                type="button"
                class="sidebar-fab"
                aria-label={t::OPEN_SIDEBAR_ARIA}
                aria-expanded={sidebar.drawer_open.to_string()}
                onclick={on_drawer_toggle}
            >
                <i class="fas fa-bars" aria-hidden="true"></i>
            </button>
            <div
                class={classes!("sidebar-overlay", sidebar.drawer_open.then_some("active"))}
                onclick={on_overlay}
            ></div>

            <aside
                class={classes!(
                    "guide-sidebar",
                    sidebar.collapsed.then_some("collapsed"),
                    sidebar.drawer_open.then_some("open")
                )}
            >
                <div class="sidebar-header">
                    <h3>{ t::SIDEBAR_TITLE }</h3>
                    <button type="button" class="sidebar-toggle" onclick={on_sidebar_toggle}>
                        { collapse_label }
                    </button>
                </div>
                <nav class="sidebar-nav">
                    <ul>
                        { for t::SECTIONS.iter().map(|section| {
                            let is_active = active.as_deref() == Some(section.id);
                            html! {
                                <li key={section.id}>
                                    <a
                                        href={format!("#{}", section.id)}
                                        class={classes!("nav-link", is_active.then_some("active"))}
                                        onclick={on_link(section.id)}
                                    >
                                        { section.title }
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                </nav>
            </aside>

            <div class="guide-content flex-1">
                <h1>{ t::PAGE_TITLE }</h1>
                { for t::SECTIONS.iter().map(|section| html! {
                    <section key={section.id} id={section.id} class="content-section">
                        <h2>{ section.title }</h2>
                        { for section.paragraphs.iter().map(|p| html! { <p>{ *p }</p> }) }
                        if let Some(code) = section.code {
                            <CodeBlock code={code} />
                        }
                    </section>
                }) }
            </div>
        </main>
    }
}
