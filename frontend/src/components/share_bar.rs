use abzarestan_shared::{
    share::{share_url, ShareTarget},
    Notice,
};
use web_sys::window;
use yew::prelude::*;

use crate::{
    i18n::current::share_bar as t,
    utils::{copy_to_clipboard, current_href},
};

#[derive(Properties, PartialEq)]
pub struct ShareBarProps {
    pub title: AttrValue,
    pub on_notice: Callback<Notice>,
}

fn target_icon(target: ShareTarget) -> &'static str {
    match target {
        ShareTarget::Telegram => "fab fa-telegram-plane",
        ShareTarget::Twitter => "fab fa-twitter",
        ShareTarget::WhatsApp => "fab fa-whatsapp",
        ShareTarget::LinkedIn => "fab fa-linkedin-in",
    }
}

#[function_component(ShareBar)]
pub fn share_bar(props: &ShareBarProps) -> Html {
    let open_share = |target: ShareTarget| {
        let title = props.title.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(page_url) = current_href() else {
                return;
            };
            let link = share_url(target, &page_url, Some(title.as_str()));
            if let Some(win) = window() {
                if let Err(err) = win.open_with_url_and_target(&link, "_blank") {
                    web_sys::console::error_1(&err);
                }
            }
        })
    };

    let copy_link = {
        let on_notice = props.on_notice.clone();
        Callback::from(move |_: MouseEvent| {
            let on_notice = on_notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let copied = match current_href() {
                    Some(href) => copy_to_clipboard(&href).await,
                    None => false,
                };
                on_notice.emit(if copied { Notice::LinkCopied } else { Notice::LinkCopyFailed });
            });
        })
    };

    html! {
        <div class="share-buttons">
            <span class="share-title">{ t::TITLE }</span>
            { for ShareTarget::ALL.into_iter().map(|target| html! {
                <button
                    type="button"
                    class={classes!("share-btn", target.label().to_lowercase())}
                    title={target.label()}
                    aria-label={target.label()}
                    onclick={open_share(target)}
                >
                    <i class={target_icon(target)} aria-hidden="true"></i>
                </button>
            }) }
            <button type="button" class="share-btn copy" title={t::COPY_LINK} onclick={copy_link}>
                <i class="fas fa-link" aria-hidden="true"></i>
                <span class="sr-only">{ t::COPY_LINK }</span>
            </button>
        </div>
    }
}
