use abzarestan_shared::render::CommentView;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::i18n::{current::comments as t, fill_count};

#[derive(Properties, PartialEq)]
pub struct CommentsProps {
    pub comments: Vec<CommentView>,
    /// Raw textarea value; validation happens in the page.
    pub on_submit: Callback<String>,
}

#[function_component(Comments)]
pub fn comments(props: &CommentsProps) -> Html {
    let draft = use_state(String::new);

    // A new comment in the list means the last submission was accepted.
    {
        let draft = draft.clone();
        use_effect_with(props.comments.len(), move |_| {
            draft.set(String::new());
            || ()
        });
    }

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                draft.set(target.value());
            }
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            submit.emit((*draft).clone());
        })
    };

    let title = format!("{} ({})", t::TITLE, fill_count("{}", props.comments.len()));

    html! {
        <section class={classes!("comments-section", "mt-12", "pt-8", "border-t", "border-[var(--border)]")}>
            <h2 class="section-title">{ title }</h2>
            <form class="comment-form" onsubmit={on_submit}>
                <textarea
                    class="comment-input"
                    rows="4"
                    placeholder={t::PLACEHOLDER}
                    value={(*draft).clone()}
                    oninput={on_input}
                />
                <button type="submit" class="btn btn-primary">{ t::SUBMIT }</button>
            </form>
            <div id="comments-list">
                if props.comments.is_empty() {
                    <p class="text-center text-[var(--muted)]">{ t::EMPTY }</p>
                } else {
                    { for props.comments.iter().map(|comment| html! {
                        <div class="comment" key={comment.key}>
                            <div class="comment-author">{ &comment.author }</div>
                            <div class="comment-text">{ &comment.text }</div>
                            <div class="comment-date">{ &comment.date }</div>
                        </div>
                    }) }
                }
            </div>
        </section>
    }
}
