//! Notice List Component
//!
//! Alert box listing one or more messages, one per line.

use leptos::prelude::*;

/// Alert style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Danger,
    Warning,
    Success,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Danger => "alert alert-danger",
            NoticeKind::Warning => "alert alert-warning",
            NoticeKind::Success => "alert alert-success",
        }
    }
}

/// Renders nothing while `messages` is empty
#[component]
pub fn NoticeList(
    kind: NoticeKind,
    #[prop(into)] messages: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || !messages.with(|m| m.is_empty())>
            <div class=kind.class() role="alert">
                {move || messages.get().into_iter().map(|m| view! { <p>"-" {m}</p> }).collect_view()}
            </div>
        </Show>
    }
}
