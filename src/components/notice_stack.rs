//! Toast stack rendering the notice queue.

use leptos::prelude::*;

use crate::state::notice::{Notice, NoticeKind, NoticeState};

fn kind_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "notice--info",
        NoticeKind::Success => "notice--success",
        NoticeKind::Error => "notice--error",
    }
}

/// Renders queued notices; each expires after `lifetime_ms`.
#[component]
pub fn NoticeStack(lifetime_ms: u32) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    let render = move |notice: Notice| {
        let id = notice.id;
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(lifetime_ms).await;
            notices.update(|n| n.dismiss(id));
        });
        #[cfg(not(feature = "csr"))]
        let _ = lifetime_ms;

        view! {
            <div class=format!("notice {}", kind_class(notice.kind)) role="status">
                <div class="notice__body">
                    <strong class="notice__title">{notice.title}</strong>
                    <p class="notice__message">{notice.message}</p>
                </div>
                <button
                    class="notice__close"
                    aria-label="Dismiss"
                    on:click=move |_| notices.update(|n| n.dismiss(id))
                >
                    "×"
                </button>
            </div>
        }
    };

    view! {
        <div class="notice-stack">
            <For each=move || notices.get().items key=|n| n.id children=render/>
        </div>
    }
}
