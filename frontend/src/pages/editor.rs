use std::rc::Rc;

use abzarestan_shared::{
    editor::{preview, CoverTab, DraftStatus, DraftStore, EditorForm, ToolbarAction},
    slug::generate_slug,
    DraftError,
};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, FileReader, HtmlDocument, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::raw_html::RawHtml,
    hooks::use_scroll_to_top,
    i18n::current::editor as t,
    router::Route,
    seo,
    storage::LocalStorage,
    utils::{now_local, page_rng},
};

#[derive(Clone, Copy, PartialEq)]
enum Field {
    Title,
    Slug,
    Category,
    Author,
    Excerpt,
    Tags,
    Content,
}

enum FormAction {
    Set(Field, String),
    Cover(Option<String>),
    Replace(EditorForm),
}

#[derive(Default, PartialEq)]
struct FormState(EditorForm);

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.0.clone();
        match action {
            FormAction::Set(field, value) => match field {
                // Typing a title regenerates the slug.
                Field::Title => {
                    form.slug = generate_slug(&value);
                    form.title = value;
                },
                Field::Slug => form.slug = value,
                Field::Category => form.category = value,
                Field::Author => form.author = value,
                Field::Excerpt => form.excerpt = value,
                Field::Tags => form.tags = value,
                Field::Content => form.content = value,
            },
            FormAction::Cover(cover) => form.cover_image = cover,
            FormAction::Replace(next) => form = next,
        }
        Rc::new(FormState(form))
    }
}

fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}

fn prompt(message: &str) -> Option<String> {
    window()
        .and_then(|win| win.prompt_with_message(message).ok().flatten())
        .filter(|value| !value.trim().is_empty())
}

fn html_document() -> Option<HtmlDocument> {
    window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.dyn_into::<HtmlDocument>().ok())
}

/// Puts `<pre><code>{code}</code></pre>` in place of the current selection.
fn insert_code_block(code: &str) {
    let Some(win) = window() else {
        return;
    };
    let Some(doc) = win.document() else {
        return;
    };
    let Some(selection) = win.get_selection().ok().flatten() else {
        return;
    };
    if selection.range_count() == 0 {
        return;
    }
    let Ok(range) = selection.get_range_at(0) else {
        return;
    };
    let (Ok(pre), Ok(code_el)) = (doc.create_element("pre"), doc.create_element("code")) else {
        return;
    };
    code_el.set_text_content(Some(code));
    if pre.append_child(&code_el).is_err() {
        return;
    }
    let _ = range.delete_contents();
    if let Err(err) = range.insert_node(&pre) {
        web_sys::console::error_1(&err);
    }
}

fn run_toolbar_action(action: ToolbarAction) {
    if action == ToolbarAction::Code {
        if let Some(code) = prompt(t::PROMPT_CODE) {
            insert_code_block(&code);
        }
        return;
    }

    let Some((command, fixed_value)) = action.command() else {
        return;
    };
    let value = if action.needs_input() {
        let message = if action == ToolbarAction::Link { t::PROMPT_LINK } else { t::PROMPT_IMAGE };
        match prompt(message) {
            Some(value) => Some(value),
            None => return,
        }
    } else {
        fixed_value.map(str::to_string)
    };

    let Some(doc) = html_document() else {
        return;
    };
    let result = match value {
        Some(value) => doc.exec_command_with_show_ui_and_value(command, false, &value),
        None => doc.exec_command(command),
    };
    if let Err(err) = result {
        web_sys::console::error_1(&err);
    }
}

fn toolbar_icon(action: ToolbarAction) -> &'static str {
    match action {
        ToolbarAction::Bold => "fa-bold",
        ToolbarAction::Italic => "fa-italic",
        ToolbarAction::Underline => "fa-underline",
        ToolbarAction::Heading2 => "fa-heading",
        ToolbarAction::Heading3 => "fa-h",
        ToolbarAction::BulletList => "fa-list-ul",
        ToolbarAction::NumberedList => "fa-list-ol",
        ToolbarAction::Quote => "fa-quote-right",
        ToolbarAction::Divider => "fa-minus",
        ToolbarAction::Link => "fa-link",
        ToolbarAction::Image => "fa-image",
        ToolbarAction::Code => "fa-code",
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct EditorPageProps {
    /// Draft to edit; a new draft when absent.
    #[prop_or_default]
    pub id: Option<String>,
}

#[function_component(EditorPage)]
pub fn editor_page(props: &EditorPageProps) -> Html {
    use_scroll_to_top();

    let form = use_reducer(FormState::default);
    let cover_tab = use_state(CoverTab::default);
    let cover_url = use_state(String::new);
    let preview_open = use_state(|| false);
    let body_ref = use_node_ref();
    let navigator = use_navigator();

    {
        let form = form.clone();
        let body_ref = body_ref.clone();
        let navigator = navigator.clone();
        use_effect_with(props.id.clone(), move |id| {
            match id {
                None => seo::apply_page_seo(Some(t::PAGE_TITLE_NEW)),
                Some(id) => {
                    seo::apply_page_seo(Some(t::PAGE_TITLE_EDIT));
                    match DraftStore::new(LocalStorage).load(id) {
                        Some(draft) => {
                            if let Some(body) = body_ref.cast::<HtmlElement>() {
                                body.set_inner_html(&draft.content);
                            }
                            form.dispatch(FormAction::Replace(EditorForm::from_draft(&draft)));
                        },
                        None => {
                            alert(t::NOT_FOUND);
                            if let Some(nav) = navigator.as_ref() {
                                nav.push(&Route::Home);
                            }
                        },
                    }
                },
            }
            || ()
        });
    }

    let on_text = |field: Field| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let value = if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                input.value()
            } else if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                area.value()
            } else {
                return;
            };
            form.dispatch(FormAction::Set(field, value));
        })
    };

    let on_category = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                form.dispatch(FormAction::Set(Field::Category, select.value()));
            }
        })
    };

    let on_body_input = {
        let form = form.clone();
        let body_ref = body_ref.clone();
        Callback::from(move |_: InputEvent| {
            if let Some(body) = body_ref.cast::<HtmlElement>() {
                form.dispatch(FormAction::Set(Field::Content, body.inner_html()));
            }
        })
    };

    let on_toolbar = |action: ToolbarAction| {
        let form = form.clone();
        let body_ref = body_ref.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if let Some(body) = body_ref.cast::<HtmlElement>() {
                let _ = body.focus();
            }
            run_toolbar_action(action);
            if let Some(body) = body_ref.cast::<HtmlElement>() {
                form.dispatch(FormAction::Set(Field::Content, body.inner_html()));
            }
        })
    };

    let select_tab = |tab: CoverTab| {
        let cover_tab = cover_tab.clone();
        Callback::from(move |_: MouseEvent| cover_tab.set(tab))
    };

    let on_cover_file = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.item(0)) else {
                return;
            };
            let Ok(reader) = FileReader::new() else {
                return;
            };
            let onload = {
                let reader = reader.clone();
                let form = form.clone();
                Closure::once_into_js(move || {
                    let data_url = reader.result().ok().and_then(|value| value.as_string());
                    form.dispatch(FormAction::Cover(data_url));
                })
            };
            reader.set_onload(Some(onload.unchecked_ref()));
            if let Err(err) = reader.read_as_data_url(&file) {
                web_sys::console::error_1(&err);
            }
        })
    };

    let on_cover_url_input = {
        let cover_url = cover_url.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                cover_url.set(input.value());
            }
        })
    };

    let load_cover_url = {
        let form = form.clone();
        let cover_url = cover_url.clone();
        Callback::from(move |_: MouseEvent| {
            let url = cover_url.trim().to_string();
            if !url.is_empty() {
                form.dispatch(FormAction::Cover(Some(url)));
            }
        })
    };

    let toggle_preview = {
        let preview_open = preview_open.clone();
        Callback::from(move |_: MouseEvent| preview_open.set(!*preview_open))
    };

    let save = |status: DraftStatus| {
        let form = form.clone();
        let navigator = navigator.clone();
        let existing_id = props.id.clone();
        Callback::from(move |_: MouseEvent| {
            let draft = match form.0.clone().into_draft(
                status,
                existing_id.as_deref(),
                &now_local(),
                &mut page_rng(),
            ) {
                Ok(draft) => draft,
                Err(DraftError::MissingFields(missing)) => {
                    web_sys::console::warn_1(&format!("Missing fields: {:?}", missing).into());
                    alert(t::REQUIRED_FIELDS);
                    return;
                },
                Err(err) => {
                    web_sys::console::error_1(&format!("Draft rejected: {}", err).into());
                    alert(t::SAVE_FAILED);
                    return;
                },
            };

            let mut store = DraftStore::new(LocalStorage);
            match store.save(draft) {
                Ok(()) => {
                    alert(if status == DraftStatus::Published { t::PUBLISHED } else { t::DRAFT_SAVED });
                    if let Some(nav) = navigator.as_ref() {
                        nav.push(&Route::Home);
                    }
                },
                Err(err) => {
                    web_sys::console::error_1(&format!("Failed to save draft: {}", err).into());
                    alert(t::SAVE_FAILED);
                },
            }
        })
    };

    let current = &form.0;
    let shown = preview(current, &now_local());
    let page_title = if props.id.is_some() { t::PAGE_TITLE_EDIT } else { t::PAGE_TITLE_NEW };

    let tab_button = |tab: CoverTab, label: &'static str| {
        html! {
            <button
                type="button"
                class={classes!("cover-tab", (*cover_tab == tab).then_some("active"))}
                onclick={select_tab(tab)}
            >
                { label }
            </button>
        }
    };

    html! {
        <main class={classes!("editor-page", "max-w-6xl", "mx-auto", "px-4", "py-8")}>
            <div class="editor-header">
                <h1>{ page_title }</h1>
                <div class="editor-actions">
                    <button type="button" class="btn" onclick={toggle_preview}>{ t::PREVIEW }</button>
                    <button type="button" class="btn" onclick={save(DraftStatus::Draft)}>{ t::SAVE_DRAFT }</button>
                    <button type="button" class="btn btn-primary" onclick={save(DraftStatus::Published)}>
                        { t::PUBLISH }
                    </button>
                </div>
            </div>

            <div class={classes!("editor-layout", (*preview_open).then_some("with-preview"))}>
                <form class="editor-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                    <label class="form-group">
                        <span>{ t::TITLE_LABEL }</span>
                        <input id="articleTitle" type="text" value={current.title.clone()} oninput={on_text(Field::Title)} />
                    </label>
                    <label class="form-group">
                        <span>{ t::SLUG_LABEL }</span>
                        <input id="articleSlug" type="text" dir="ltr" value={current.slug.clone()} oninput={on_text(Field::Slug)} />
                    </label>
                    <label class="form-group">
                        <span>{ t::CATEGORY_LABEL }</span>
                        <select id="articleCategory" onchange={on_category}>
                            <option value="" selected={current.category.is_empty()}>{ t::CATEGORY_PLACEHOLDER }</option>
                            { for t::CATEGORIES.iter().map(|category| html! {
                                <option value={*category} selected={current.category == *category}>{ *category }</option>
                            }) }
                        </select>
                    </label>
                    <label class="form-group">
                        <span>{ t::AUTHOR_LABEL }</span>
                        <input id="articleAuthor" type="text" value={current.author.clone()} oninput={on_text(Field::Author)} />
                    </label>
                    <label class="form-group">
                        <span>{ t::EXCERPT_LABEL }</span>
                        <textarea id="articleExcerpt" rows="3" value={current.excerpt.clone()} oninput={on_text(Field::Excerpt)} />
                    </label>
                    <label class="form-group">
                        <span>{ t::TAGS_LABEL }</span>
                        <input id="articleTags" type="text" value={current.tags.clone()} oninput={on_text(Field::Tags)} />
                    </label>

                    <div class="form-group">
                        <span>{ t::COVER_LABEL }</span>
                        <div class="cover-tabs">
                            { tab_button(CoverTab::Upload, t::COVER_UPLOAD_TAB) }
                            { tab_button(CoverTab::Url, t::COVER_URL_TAB) }
                        </div>
                        if *cover_tab == CoverTab::Upload {
                            <input type="file" accept="image/*" onchange={on_cover_file} />
                        } else {
                            <div class="cover-url">
                                <input
                                    type="url"
                                    dir="ltr"
                                    placeholder={t::COVER_URL_PLACEHOLDER}
                                    value={(*cover_url).clone()}
                                    oninput={on_cover_url_input}
                                />
                                <button type="button" class="btn" onclick={load_cover_url}>{ t::COVER_LOAD }</button>
                            </div>
                        }
                        if let Some(cover) = current.cover_image.clone() {
                            <img class="cover-preview" src={cover} alt={t::COVER_ALT} />
                        }
                    </div>

                    <div class="form-group">
                        <span>{ t::CONTENT_LABEL }</span>
                        <div class="editor-toolbar" role="toolbar" aria-label={t::TOOLBAR_ARIA}>
                            { for ToolbarAction::ALL.into_iter().map(|action| html! {
                                <button type="button" class="toolbar-btn" onmousedown={on_toolbar(action)}>
                                    <i class={classes!("fas", toolbar_icon(action))} aria-hidden="true"></i>
                                </button>
                            }) }
                        </div>
                        <div
                            id="articleEditor"
                            class="editor-content"
                            contenteditable="true"
                            ref={body_ref}
                            oninput={on_body_input}
                        ></div>
                    </div>
                </form>

                if *preview_open {
                    <aside class="preview-panel active">
                        if let Some(cover) = shown.cover.clone() {
                            <img class="preview-cover" src={cover} alt={t::COVER_ALT} />
                        }
                        <h1 class="preview-title">{ &shown.title }</h1>
                        <div class="preview-meta">
                            <span>{ &shown.author }</span>
                            <span>{ &shown.date }</span>
                        </div>
                        <RawHtml class={classes!("preview-body")} html={AttrValue::from(shown.body.clone())} />
                    </aside>
                }
            </div>
        </main>
    }
}
