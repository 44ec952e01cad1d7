//! Delete Confirm Button Component
//!
//! Trash icon on a task card that swaps in a yes/no prompt before deleting.

use leptos::either::Either;
use leptos::prelude::*;

const TRASH_ICON: &str = "M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16";

/// `on_confirm` runs only after "Sim"; "Não" restores the icon.
#[component]
pub fn DeleteConfirmButton(
    /// Question shown while confirming, e.g. "Excluir esta tarefa?"
    #[prop(into)]
    prompt: String,
    /// Tooltip of the trash icon
    #[prop(into, default = "Excluir".to_string())]
    title: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);
    let prompt = StoredValue::new(prompt);
    let title = StoredValue::new(title);

    let answer = move |ev: leptos::ev::MouseEvent, confirmed: bool| {
        ev.stop_propagation();
        set_asking.set(false);
        if confirmed {
            on_confirm.run(());
        }
    };

    move || {
        if asking.get() {
            Either::Left(view! {
                <span class="flex items-center space-x-1 text-xs">
                    <span class="text-red-600 font-medium">{prompt.get_value()}</span>
                    <button
                        class="px-2 py-1 bg-red-500 text-white rounded hover:bg-red-600"
                        on:click=move |ev| answer(ev, true)
                    >
                        "Sim"
                    </button>
                    <button
                        class="px-2 py-1 bg-gray-200 text-gray-700 rounded hover:bg-gray-300"
                        on:click=move |ev| answer(ev, false)
                    >
                        "Não"
                    </button>
                </span>
            })
        } else {
            Either::Right(view! {
                <button
                    class="p-2 text-red-600 hover:bg-red-100 rounded-full transition-colors"
                    title=title.get_value()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(true);
                    }
                >
                    <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=TRASH_ICON></path>
                    </svg>
                </button>
            })
        }
    }
}
