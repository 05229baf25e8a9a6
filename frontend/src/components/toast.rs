use std::{cell::RefCell, rc::Rc};

use abzarestan_shared::{config::TOAST_DURATION_MS, Notice, NoticeKind};
use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::{common as common_text, notices as t};

pub fn notice_text(notice: Notice) -> &'static str {
    match notice {
        Notice::Liked => t::LIKED,
        Notice::Unliked => t::UNLIKED,
        Notice::Bookmarked => t::BOOKMARKED,
        Notice::Unbookmarked => t::UNBOOKMARKED,
        Notice::CommentPosted => t::COMMENT_POSTED,
        Notice::CommentEmpty => t::COMMENT_EMPTY,
        Notice::CommentFailed => t::COMMENT_FAILED,
        Notice::LinkCopied => t::LINK_COPIED,
        Notice::LinkCopyFailed => t::LINK_COPY_FAILED,
        Notice::StorageFailed => t::STORAGE_FAILED,
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastMessage {
    /// Bumped per message so repeating the same text restarts the toast.
    pub id: u32,
    pub text: String,
    pub kind: NoticeKind,
}

/// Page-level toast slot. Showing a new message replaces the current one.
#[derive(Clone)]
pub struct ToastHandle {
    current: UseStateHandle<Option<ToastMessage>>,
    counter: Rc<RefCell<u32>>,
}

impl ToastHandle {
    pub fn show(&self, text: impl Into<String>, kind: NoticeKind) {
        let id = {
            let mut counter = self.counter.borrow_mut();
            *counter = counter.wrapping_add(1);
            *counter
        };
        self.current.set(Some(ToastMessage {
            id,
            text: text.into(),
            kind,
        }));
    }

    pub fn notify(&self, notice: Notice) {
        self.show(notice_text(notice), notice.kind());
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    pub fn current(&self) -> Option<ToastMessage> {
        (*self.current).clone()
    }

    /// The toast element for the current message, or nothing.
    pub fn view(&self) -> Html {
        match self.current() {
            Some(message) => {
                let handle = self.clone();
                let on_close = Callback::from(move |_| handle.dismiss());
                let key = message.id;
                html! { <Toast key={key} message={message} on_close={on_close} /> }
            },
            None => Html::default(),
        }
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let current = use_state(|| None::<ToastMessage>);
    let counter = use_mut_ref(|| 0u32);
    ToastHandle {
        current,
        counter,
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: ToastMessage,
    pub on_close: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let visible = use_state(|| true);

    let dismiss = {
        let visible = visible.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*visible {
                return;
            }
            visible.set(false);
            on_close.emit(());
        })
    };

    {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), TOAST_DURATION_MS);
    }

    let accent = match props.message.kind {
        NoticeKind::Success => "border-l-[#27ae60]",
        NoticeKind::Info => "border-l-[var(--secondary)]",
        NoticeKind::Error => "border-l-[var(--primary)]",
    };

    let mut classes = classes!(
        "toast",
        "fixed",
        "top-5",
        "right-5",
        "z-[9999]",
        "max-w-[300px]",
        "flex",
        "items-start",
        "gap-3",
        "rounded-[var(--radius)]",
        "border",
        "border-l-4",
        accent,
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "p-4",
        "shadow-[var(--shadow)]",
        "transition-transform",
        "duration-300"
    );
    classes.push(if *visible { "translate-x-0" } else { "translate-x-[120%]" });

    let close_button = {
        let dismiss = dismiss.clone();
        Callback::from(move |_: MouseEvent| dismiss.emit(()))
    };

    let role = if props.message.kind == NoticeKind::Error { "alert" } else { "status" };

    html! {
        <div class={classes} role={role} aria-live="polite">
            <p class="m-0 flex-1">{ props.message.text.clone() }</p>
            <button
                type="button"
                class="bg-transparent border-0 text-lg leading-none cursor-pointer"
                aria-label={common_text::CLOSE}
                onclick={close_button}
            >
                {"×"}
            </button>
        </div>
    }
}
