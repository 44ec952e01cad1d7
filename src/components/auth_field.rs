//! Auth Field Component
//!
//! Icon-prefixed text input with required-field error state.

use leptos::prelude::*;
use task_client::validation::REQUIRED_MESSAGE;
use task_client::{Field, FormErrors};

pub const USER_ICON: &str = "M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z";
pub const LOCK_ICON: &str = "M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z";
pub const MAIL_ICON: &str = "M3 8l7.89 7.89a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z";

/// One labelled input of the login/register forms
///
/// Editing the field clears its error flag.
#[component]
pub fn AuthField(
    field: Field,
    #[prop(into)] placeholder: String,
    #[prop(default = "text")] input_type: &'static str,
    icon: &'static str,
    /// Focus ring color, e.g. "blue" or "indigo"
    #[prop(default = "blue")] accent: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    errors: ReadSignal<FormErrors>,
    set_errors: WriteSignal<FormErrors>,
) -> impl IntoView {
    let invalid = move || errors.with(|e| e.has(field));
    let input_class = move || {
        let state = if invalid() {
            "border-red-500 focus:ring-red-500 focus:border-red-500".to_string()
        } else {
            format!("border-gray-300 focus:ring-{}-500 focus:border-transparent", accent)
        };
        format!(
            "w-full pl-10 pr-4 py-3 border rounded-lg focus:outline-none focus:ring-2 transition duration-200 {}",
            state
        )
    };

    view! {
        <div class="transform hover:scale-105 transition duration-300 relative">
            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                <svg class="w-5 h-5 text-gray-400" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon></path>
                </svg>
            </div>
            <input
                type=input_type
                placeholder=placeholder
                class=input_class
                prop:value=move || value.get()
                on:input=move |ev| {
                    set_value.set(event_target_value(&ev));
                    if invalid() {
                        set_errors.update(|e| e.clear(field));
                    }
                }
            />
            <Show when=invalid>
                <p class="text-red-500 text-sm mt-1 ml-2">{REQUIRED_MESSAGE}</p>
            </Show>
        </div>
    }
}
