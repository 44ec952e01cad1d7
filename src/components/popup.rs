//! Popup Component
//!
//! Full-screen modal used by the auth pages for success and error notices.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupMessage {
    pub kind: PopupKind,
    pub title: String,
    pub message: String,
}

impl PopupMessage {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: PopupKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: PopupKind::Error,
            title: "Erro de Validação".to_string(),
            message: message.into(),
        }
    }
}

/// Show `message` for `ms` milliseconds, then hide it
pub async fn flash(set_popup: WriteSignal<Option<PopupMessage>>, message: PopupMessage, ms: u32) {
    set_popup.set(Some(message));
    TimeoutFuture::new(ms).await;
    set_popup.set(None);
}

const CHECK_ICON: &str = "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z";
const CROSS_ICON: &str = "M6 18L18 6M6 6l12 12";

#[component]
pub fn Popup(popup: ReadSignal<Option<PopupMessage>>) -> impl IntoView {
    move || {
        popup.get().map(|p| {
            let (icon_class, icon_path) = match p.kind {
                PopupKind::Success => ("w-16 h-16 text-green-500 mx-auto", CHECK_ICON),
                PopupKind::Error => ("w-16 h-16 text-red-500 mx-auto", CROSS_ICON),
            };
            let is_success = p.kind == PopupKind::Success;
            view! {
                <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50">
                    <div class="bg-white rounded-lg p-8 text-center animate-bounce-in shadow-2xl">
                        <div class="mb-4">
                            <svg class=icon_class fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon_path></path>
                            </svg>
                        </div>
                        <h3 class="text-2xl font-bold text-gray-800 mb-2">{p.title}</h3>
                        <p class="text-gray-600">{p.message}</p>
                        <Show when=move || is_success>
                            <div class="mt-4">
                                <div class="inline-block animate-spin rounded-full h-6 w-6 border-b-2 border-blue-500"></div>
                            </div>
                        </Show>
                    </div>
                </div>
            }
        })
    }
}
